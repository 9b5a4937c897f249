//! compression/mod.rs
//! gzip container around the frame stream.
//!
//! Notes:
//! - Writers emit a single gzip member per write; append mode adds members.
//! - Readers always decode multi-member streams so appended files read back fully.

pub mod gzip;

pub use gzip::*;
