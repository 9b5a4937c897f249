use num_enum::TryFromPrimitive;

use crate::constants::{DEVICE_APPS_TYPE, FRAME_HEADER_LEN, MAGIC, MAX_PAYLOAD_LEN};
use crate::utils::enum_name_or_hex;

/// Record type identifiers carried in the frame header.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum RecordType {
    DeviceApps = DEVICE_APPS_TYPE,
}

impl RecordType {
    #[inline(always)]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn verify(raw: u16) -> Result<Self, FrameError> {
        RecordType::try_from_primitive(raw).map_err(|_| FrameError::UnknownRecordType(raw))
    }
}

/// Canonical frame header (fixed size)
///
/// All fields are little-endian.
///
/// ```text
/// [ magic (4) ][ record_type (2) ][ length (2) ][ payload (length) ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub magic: u32,
    /// Raw tag; unknown values survive parsing so readers can skip them.
    pub record_type: u16,
    /// Payload bytes following the header.
    pub length: u16,
}

impl FrameHeader {
    pub const LEN: usize = FRAME_HEADER_LEN;

    /// Header for a payload of `payload_len` bytes.
    pub fn new(record_type: RecordType, payload_len: usize) -> Result<Self, FrameError> {
        if payload_len > MAX_PAYLOAD_LEN {
            return Err(FrameError::PayloadTooLarge {
                len: payload_len,
                max: MAX_PAYLOAD_LEN,
            });
        }
        Ok(Self {
            magic: MAGIC,
            record_type: record_type.as_u16(),
            length: payload_len as u16,
        })
    }

    /// Convert raw u16 → RecordType enum
    pub fn record_type_enum(&self) -> Option<RecordType> {
        RecordType::try_from_primitive(self.record_type).ok()
    }

    /// Total encoded size of the frame this header describes.
    pub fn frame_len(&self) -> usize {
        Self::LEN + self.length as usize
    }
}

/// Borrowed view of a decoded frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub header: FrameHeader,
    pub payload: &'a [u8],
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("invalid frame magic: 0x{0:08x}")]
    InvalidMagic(u32),

    #[error("unknown record type: {}", record_type_name(.0))]
    UnknownRecordType(u16),

    #[error("payload too large: {len} > {max}")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("truncated frame: have {have} bytes, need {need}")]
    Truncated { have: usize, need: usize },
}

fn record_type_name(raw: &u16) -> String {
    enum_name_or_hex::<RecordType>(*raw)
}
