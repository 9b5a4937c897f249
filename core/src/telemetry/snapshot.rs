//! telemetry/snapshot.rs
//! Immutable summary of one completed write.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::StreamCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: StreamCounters,
    /// Bytes handed to the sink after gzip (header and trailer included).
    pub bytes_compressed: u64,
    /// `bytes_compressed / bytes_total`, 0.0 when nothing was written.
    pub compression_ratio: f64,
    pub elapsed: Duration,
}

impl TelemetrySnapshot {
    pub fn from(counters: &StreamCounters, bytes_compressed: u64, elapsed: Duration) -> Self {
        let total = counters.bytes_total();
        let compression_ratio = if total > 0 {
            bytes_compressed as f64 / total as f64
        } else {
            0.0
        };

        Self {
            counters: counters.clone(),
            bytes_compressed,
            compression_ratio,
            elapsed,
        }
    }

    /// Uncompressed bytes written (headers + payloads).
    pub fn bytes_written(&self) -> u64 {
        self.counters.bytes_total()
    }
}
