
/// Frame sentinel, written little-endian at the start of every frame.
pub const MAGIC: u32 = 0xFFFF_FFFF;

/// Record type tag for device-apps payloads.
pub const DEVICE_APPS_TYPE: u16 = 1;

/// Fixed frame header size: magic (4) + type (2) + length (2).
pub const FRAME_HEADER_LEN: usize = 8;

/// Payload length is a u16 on the wire.
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Default gzip level (balanced), same as zlib's default.
pub const DEFAULT_GZIP_LEVEL: u32 = 6;
/// Highest gzip level accepted by `WriterConfig::validate`.
pub const MAX_GZIP_LEVEL: u32 = 9;

/// Buffer size for file-backed sinks and sources (64 KiB).
pub const DEFAULT_IO_BUF_SIZE: usize = 64 * 1024;

/// Field names, shared by errors, logs and the Python bindings.
pub mod keys {
    pub const DEVICE: &str = "device";
    pub const LAT: &str = "lat";
    pub const LON: &str = "lon";
    pub const APPS: &str = "apps";
    pub const TYPE: &str = "type";
    pub const ID: &str = "id";
}
