//! config.rs
//! Writer and reader configuration.
//!
//! Both configs deserialize from JSON with every field optional
//! (`#[serde(default)]`), so `{}` yields the defaults.

use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GZIP_LEVEL, MAX_GZIP_LEVEL};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("gzip level must be 0..={max}, got {level}")]
    InvalidLevel { level: u32, max: u32 },

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How the destination file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Create or overwrite.
    #[default]
    Truncate,
    /// Create or append a new gzip member after existing content.
    Append,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// gzip level 0..=9.
    /// - `None` → `DEFAULT_GZIP_LEVEL`.
    pub level: Option<u32>,
    pub mode: WriteMode,
}

impl WriterConfig {
    pub fn new(level: Option<u32>, mode: WriteMode) -> Self {
        Self { level, mode }
    }

    pub fn append() -> Self {
        Self { level: None, mode: WriteMode::Append }
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.level {
            Some(level) if level > MAX_GZIP_LEVEL => Err(ConfigError::InvalidLevel {
                level,
                max: MAX_GZIP_LEVEL,
            }),
            _ => Ok(()),
        }
    }

    /// Effective flate2 level. Call `validate` first; out-of-range levels are not clamped here.
    pub fn compression(&self) -> Compression {
        Compression::new(self.level.unwrap_or(DEFAULT_GZIP_LEVEL))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Skip frames whose record type is not device-apps (by declared length).
    /// When false such frames fail with `FrameError::UnknownRecordType`.
    pub skip_unknown_types: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { skip_unknown_types: true }
    }
}

impl ReaderConfig {
    pub fn strict() -> Self {
        Self { skip_unknown_types: false }
    }

    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}
