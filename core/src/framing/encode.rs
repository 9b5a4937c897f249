use byteorder::{ByteOrder, LittleEndian};

use crate::framing::types::{FrameError, FrameHeader, RecordType};

/// Serialize a frame header into its fixed 8-byte little-endian form.
#[inline]
pub fn encode_frame_header(header: &FrameHeader) -> [u8; FrameHeader::LEN] {
    let mut out = [0u8; FrameHeader::LEN];
    LittleEndian::write_u32(&mut out[0..4], header.magic);       // 0..4 magic
    LittleEndian::write_u16(&mut out[4..6], header.record_type); // 4..6 record type
    LittleEndian::write_u16(&mut out[6..8], header.length);      // 6..8 payload length
    out
}

/// Encode a payload into canonical wire format.
///
/// Layout:
///
/// ```text
/// [ magic (4) ]
/// [ record_type (2) ]
/// [ length (2) ]
/// [ payload (length) ]
/// ```
pub fn encode_frame(record_type: RecordType, payload: &[u8]) -> Result<Vec<u8>, FrameError> {
    let header = FrameHeader::new(record_type, payload.len())?;
    let expected = header.frame_len();
    let mut out = Vec::with_capacity(expected);

    // --- Header ---
    out.extend_from_slice(&encode_frame_header(&header));

    // --- Body ---
    out.extend_from_slice(payload);

    // --- Validation ---
    if out.len() != expected {
        return Err(FrameError::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }

    Ok(out)
}
