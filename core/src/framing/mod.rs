//! Wire framing for device-apps containers.
//!
//! Responsibilities:
//! - Define the frame header and record-type registry
//! - Encode frames into the canonical 8-byte-header layout
//! - Decode frames with strict validation
//!
//! Non-responsibilities:
//! - Payload schema
//! - Compression
//! - IO

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    FrameError,
    FrameHeader,
    FrameView,
    RecordType,
};
pub use encode::{encode_frame, encode_frame_header};
pub use decode::{decode_frame, parse_frame_header};
