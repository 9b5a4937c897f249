//! io.rs
//! Normalized sources and sinks for the writer and reader.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::WriteMode;
use crate::constants::DEFAULT_IO_BUF_SIZE;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    /// Shared buffer, readable by the caller after the write completes.
    Memory(Arc<Mutex<Vec<u8>>>),
}

impl OutputSink {
    /// Fresh in-memory sink plus a handle to its buffer.
    pub fn memory() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buf = Arc::new(Mutex::new(Vec::new()));
        (OutputSink::Memory(buf.clone()), buf)
    }
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> io::Result<Box<dyn Read + Send>> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(BufReader::with_capacity(DEFAULT_IO_BUF_SIZE, File::open(p)?)),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer.
/// `mode` only affects `OutputSink::File`.
pub fn open_output(sink: OutputSink, mode: WriteMode) -> io::Result<Box<dyn Write + Send>> {
    let writer: Box<dyn Write + Send> = match sink {
        OutputSink::Writer(w) => w,
        OutputSink::File(p) => {
            let mut opts = OpenOptions::new();
            match mode {
                WriteMode::Truncate => opts.write(true).create(true).truncate(true),
                WriteMode::Append => opts.append(true).create(true),
            };
            Box::new(BufWriter::with_capacity(DEFAULT_IO_BUF_SIZE, opts.open(p)?))
        }
        OutputSink::Memory(buf) => Box::new(SharedBufferWriter { buf }),
    };
    Ok(writer)
}

pub struct SharedBufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buf
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory sink poisoned"))?;
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fill `buf` from `r`, stopping early only at EOF.
/// Returns the number of bytes read (0 means EOF before any byte).
pub fn read_exact_or_eof<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut off = 0;
    while off < buf.len() {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(off)
}

/// Pass-through writer that counts the bytes it forwards.
pub struct CountingWriter<W: Write> {
    inner: W,
    count: u64,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(data)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
