//! gzip via flate2 with streaming enc/dec.

use std::io::{self, Read, Write};

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};

/// Wrap `inner` in a gzip encoder. Call `finish()` to write the trailer.
pub fn gzip_writer<W: Write>(inner: W, level: Compression) -> GzEncoder<W> {
    GzEncoder::new(inner, level)
}

/// Wrap `inner` in a decoder that reads every concatenated gzip member.
pub fn gzip_reader<R: Read>(inner: R) -> MultiGzDecoder<R> {
    MultiGzDecoder::new(inner)
}

/// Compress a whole buffer into one gzip member.
pub fn gzip(data: &[u8], level: Compression) -> io::Result<Vec<u8>> {
    let mut enc = gzip_writer(Vec::new(), level);
    enc.write_all(data)?;
    enc.finish()
}

/// Decompress a whole (possibly multi-member) gzip buffer.
pub fn gunzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    gzip_reader(data).read_to_end(&mut out)?;
    Ok(out)
}
