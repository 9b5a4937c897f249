//! writer.rs
//! Device-apps writer: one frame per record, all frames inside gzip.
//!
//! Layout of the decompressed stream:
//!
//! ```text
//! [ frame 0: magic | type | len | DeviceApps payload ]
//! [ frame 1: ... ]
//! ```

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use flate2::write::GzEncoder;
use tracing::{debug, info};

use crate::compression::gzip_writer;
use crate::config::WriterConfig;
use crate::framing::{encode_frame, FrameHeader, RecordType};
use crate::io::{open_output, CountingWriter, OutputSink};
use crate::records::{encode_record, DeviceAppsRecord};
use crate::telemetry::{StreamCounters, TelemetrySnapshot};
use crate::types::PbResult;

/// Streaming writer over any sink.
///
/// Frames are compressed as they are written; `finish` must be called to
/// emit the gzip trailer. Dropping the writer without `finish` leaves a
/// truncated gzip member behind.
pub struct DeviceAppsWriter<W: Write> {
    encoder: GzEncoder<CountingWriter<W>>,
    counters: StreamCounters,
    started: Instant,
}

impl<W: Write> DeviceAppsWriter<W> {
    pub fn new(inner: W, config: &WriterConfig) -> PbResult<Self> {
        config.validate()?;
        Ok(Self {
            encoder: gzip_writer(CountingWriter::new(inner), config.compression()),
            counters: StreamCounters::default(),
            started: Instant::now(),
        })
    }

    /// Encode and write one record.
    /// Returns the uncompressed bytes written for it (header + payload).
    pub fn write_record(&mut self, record: &DeviceAppsRecord) -> PbResult<usize> {
        let frame = encode_device_apps_frame(record, self.counters.records as usize)?;
        self.write_frame(&frame)
    }

    fn write_frame(&mut self, frame: &[u8]) -> PbResult<usize> {
        self.encoder.write_all(frame)?;

        let payload_len = frame.len() - FrameHeader::LEN;
        self.counters.add_record(payload_len);
        debug!(record = self.counters.records - 1, payload_len, "frame written");

        Ok(frame.len())
    }

    pub fn counters(&self) -> &StreamCounters {
        &self.counters
    }

    /// Write the gzip trailer, flush the sink and hand it back.
    pub fn finish(self) -> PbResult<(W, TelemetrySnapshot)> {
        let counting = self.encoder.finish()?;
        let bytes_compressed = counting.count();
        let mut inner = counting.into_inner();
        inner.flush()?;

        let snapshot = TelemetrySnapshot::from(&self.counters, bytes_compressed, self.started.elapsed());
        Ok((inner, snapshot))
    }
}

/// Validate, serialize and frame a single record.
pub fn encode_device_apps_frame(record: &DeviceAppsRecord, index: usize) -> PbResult<Vec<u8>> {
    let payload = encode_record(record, index)?;
    Ok(encode_frame(RecordType::DeviceApps, &payload)?)
}

/// Write `records` to `path` (created or overwritten) with default settings.
///
/// Returns the number of uncompressed bytes written: every frame header plus
/// every payload.
pub fn write<P: AsRef<Path>>(records: &[DeviceAppsRecord], path: P) -> PbResult<usize> {
    let snapshot = write_with_config(records, path, &WriterConfig::default())?;
    Ok(snapshot.bytes_written() as usize)
}

/// Write `records` to `path` with explicit level and mode.
pub fn write_with_config<P: AsRef<Path>>(
    records: &[DeviceAppsRecord],
    path: P,
    config: &WriterConfig,
) -> PbResult<TelemetrySnapshot> {
    let path = path.as_ref();
    info!(path = %path.display(), records = records.len(), mode = ?config.mode, "writing device apps");
    write_to(records, OutputSink::File(path.to_path_buf()), config)
}

/// Write `records` to any sink.
///
/// Every record is encoded before the sink is opened, so malformed input
/// never creates, truncates or partially writes the destination.
pub fn write_to(
    records: &[DeviceAppsRecord],
    sink: OutputSink,
    config: &WriterConfig,
) -> PbResult<TelemetrySnapshot> {
    config.validate()?;

    let frames = records
        .iter()
        .enumerate()
        .map(|(index, record)| encode_device_apps_frame(record, index))
        .collect::<PbResult<Vec<_>>>()?;

    let output = open_output(sink, config.mode)?;
    let mut writer = DeviceAppsWriter::new(output, config)?;
    for frame in &frames {
        writer.write_frame(frame)?;
    }
    let (_, snapshot) = writer.finish()?;

    info!(
        records = snapshot.counters.records,
        bytes_written = snapshot.bytes_written(),
        bytes_compressed = snapshot.bytes_compressed,
        "device apps written"
    );
    Ok(snapshot)
}
