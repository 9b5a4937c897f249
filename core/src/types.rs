use std::io;

use crate::{
    config::ConfigError,
    framing::FrameError,
    records::{DecodeError, EncodeError},
};

/// Unified error covering I/O, framing, payload encode/decode and configuration.
/// - Ergonomic `From<T>` impls enable `?` across writer and reader.
/// - Messages aim to be stable and contextual for logs and Python exceptions.
#[derive(Debug, thiserror::Error)]
pub enum PbError {
    /// I/O error (open, write, flush, gzip trailer, read).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Frame-level error (validation or parse).
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Record could not be turned into a payload.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Payload could not be turned back into a record.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Invalid writer/reader configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl PbError {
    /// True for failures of the underlying file or sink.
    pub fn is_io(&self) -> bool {
        matches!(self, PbError::Io(_))
    }

    /// True for failures caused by the input records rather than the destination.
    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            PbError::Encode(_) | PbError::Frame(FrameError::PayloadTooLarge { .. })
        )
    }
}

pub type PbResult<T> = Result<T, PbError>;
