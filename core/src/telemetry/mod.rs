//! telemetry/mod.rs
//! Counters collected while writing or reading, and the immutable snapshot
//! returned once a write completes.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
