//! deviceapps-core
//!
//! Device-apps record container: protobuf payloads in magic-tagged,
//! length-prefixed frames, compressed with gzip.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;
pub mod io;

// Layers
pub mod records;
pub mod framing;
pub mod compression;
pub mod telemetry;

// Public API
pub mod writer;
pub mod reader;

pub use types::{PbError, PbResult};
pub use writer::{write, write_to, write_with_config, DeviceAppsWriter};
pub use reader::{peek_header, read, read_all, read_from, read_with_config, DeviceAppsReader, RecordStream};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::{ReaderConfig, WriteMode, WriterConfig};
    pub use crate::constants::{DEVICE_APPS_TYPE, MAGIC};
    pub use crate::records::{Device, DeviceAppsRecord};
    pub use crate::telemetry::{StreamCounters, TelemetrySnapshot};
    pub use crate::{read, write, PbError, PbResult};
}
