use byteorder::{ByteOrder, LittleEndian};

use crate::constants::MAGIC;
use crate::framing::types::{FrameError, FrameHeader, FrameView};

/// Parse the fixed header at the start of `wire`.
///
/// Only the magic is enforced here; the record type is returned raw so the
/// caller can decide whether to skip it.
#[inline]
pub fn parse_frame_header(wire: &[u8]) -> Result<FrameHeader, FrameError> {
    if wire.len() < FrameHeader::LEN {
        return Err(FrameError::Truncated {
            have: wire.len(),
            need: FrameHeader::LEN,
        });
    }

    let magic = LittleEndian::read_u32(&wire[0..4]);
    if magic != MAGIC {
        return Err(FrameError::InvalidMagic(magic));
    }

    let record_type = LittleEndian::read_u16(&wire[4..6]);
    let length = LittleEndian::read_u16(&wire[6..8]);

    Ok(FrameHeader {
        magic,
        record_type,
        length,
    })
}

/// Decode a single frame from bytes.
///
/// Caller guarantees the full frame is provided; trailing bytes are an error.
pub fn decode_frame(wire: &[u8]) -> Result<FrameView<'_>, FrameError> {
    let header = parse_frame_header(wire)?;

    let expected_len = header.frame_len();
    if wire.len() != expected_len {
        return Err(FrameError::LengthMismatch {
            expected: expected_len,
            actual: wire.len(),
        });
    }

    Ok(FrameView {
        header,
        payload: &wire[FrameHeader::LEN..expected_len],
    })
}
