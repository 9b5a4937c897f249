//! telemetry/counters.rs
//! Mutable counters used during a write or read.
//!
//! Summary: Collects frame counts and byte counts per frame.
//! Converted into an immutable TelemetrySnapshot when a write finishes.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::constants::FRAME_HEADER_LEN;

/// Deterministic counters collected during stream processing.
/// All byte counts are uncompressed.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCounters {
    /// Records encoded or decoded.
    pub records: u64,
    /// Frames written or read, skipped ones included.
    pub frames: u64,
    /// Frames passed over by a reader (unknown record type).
    pub frames_skipped: u64,
    pub bytes_header: u64,
    pub bytes_payload: u64,
}

impl StreamCounters {
    /// Record one device-apps frame carrying `payload_len` bytes.
    pub fn add_record(&mut self, payload_len: usize) {
        self.records += 1;
        self.add_frame(payload_len);
    }

    /// Record a frame that was read but not decoded.
    pub fn add_skipped(&mut self, payload_len: usize) {
        self.frames_skipped += 1;
        self.add_frame(payload_len);
    }

    fn add_frame(&mut self, payload_len: usize) {
        self.frames += 1;
        self.bytes_header += FRAME_HEADER_LEN as u64;
        self.bytes_payload += payload_len as u64;
    }

    /// Uncompressed bytes: every header plus every payload.
    pub fn bytes_total(&self) -> u64 {
        self.bytes_header + self.bytes_payload
    }

    pub fn merge(&mut self, other: &StreamCounters) {
        self.records += other.records;
        self.frames += other.frames;
        self.frames_skipped += other.frames_skipped;
        self.bytes_header += other.bytes_header;
        self.bytes_payload += other.bytes_payload;
    }
}

impl AddAssign for StreamCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
