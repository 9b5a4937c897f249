//! records/mod.rs
//! Device-apps records and their protobuf payload.
//!
//! Notes:
//! - `types` is the Rust-facing model; every field the wire can omit is an `Option`.
//! - `proto` mirrors the proto2 `DeviceApps` schema with prost derives.
//! - `convert` validates records and maps between the two.

pub mod types;
pub mod proto;
pub mod convert;

pub use types::*;
pub use convert::{decode_record, encode_record};
