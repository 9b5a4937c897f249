//! reader.rs
//! Lazy device-apps reader over a gzip container.
//!
//! Frames whose record type is not device-apps are skipped by their declared
//! length unless the reader is strict. The iterator is fused after the first
//! error.

use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::{debug, info, warn};

use crate::compression::gzip_reader;
use crate::config::ReaderConfig;
use crate::framing::{parse_frame_header, FrameError, FrameHeader, RecordType};
use crate::io::{open_input, read_exact_or_eof, InputSource};
use crate::records::{decode_record, DeviceAppsRecord};
use crate::telemetry::StreamCounters;
use crate::types::{PbError, PbResult};

/// Reader returned by `read`, `read_with_config` and `read_from`.
pub type RecordStream = DeviceAppsReader<MultiGzDecoder<Box<dyn Read + Send>>>;

pub struct DeviceAppsReader<R: Read> {
    inner: R,
    config: ReaderConfig,
    counters: StreamCounters,
    done: bool,
}

impl<R: Read> DeviceAppsReader<R> {
    /// `inner` must yield the decompressed frame stream.
    pub fn new(inner: R, config: ReaderConfig) -> Self {
        Self {
            inner,
            config,
            counters: StreamCounters::default(),
            done: false,
        }
    }

    pub fn counters(&self) -> &StreamCounters {
        &self.counters
    }

    /// Read the next frame header.
    /// `Ok(None)` at a clean end of stream; a partial header is `Truncated`.
    pub fn next_frame_header(&mut self) -> PbResult<Option<FrameHeader>> {
        let mut buf = [0u8; FrameHeader::LEN];
        let n = read_exact_or_eof(&mut self.inner, &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        if n < FrameHeader::LEN {
            return Err(FrameError::Truncated { have: n, need: FrameHeader::LEN }.into());
        }
        Ok(Some(parse_frame_header(&buf)?))
    }

    fn read_payload(&mut self, header: &FrameHeader) -> PbResult<Vec<u8>> {
        let need = header.length as usize;
        let mut payload = vec![0u8; need];
        let have = read_exact_or_eof(&mut self.inner, &mut payload)?;
        if have < need {
            return Err(FrameError::Truncated { have, need }.into());
        }
        Ok(payload)
    }

    fn next_record(&mut self) -> PbResult<Option<DeviceAppsRecord>> {
        loop {
            let Some(header) = self.next_frame_header()? else {
                return Ok(None);
            };
            let payload = self.read_payload(&header)?;

            match header.record_type_enum() {
                Some(RecordType::DeviceApps) => {
                    let record = decode_record(&payload)?;
                    self.counters.add_record(payload.len());
                    debug!(record = self.counters.records - 1, payload_len = payload.len(), "frame read");
                    return Ok(Some(record));
                }
                None if self.config.skip_unknown_types => {
                    self.counters.add_skipped(payload.len());
                    warn!(record_type = header.record_type, payload_len = payload.len(), "skipping frame");
                }
                None => return Err(FrameError::UnknownRecordType(header.record_type).into()),
            }
        }
    }
}

impl<R: Read> Iterator for DeviceAppsReader<R> {
    type Item = Result<DeviceAppsRecord, PbError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                info!(
                    records = self.counters.records,
                    frames_skipped = self.counters.frames_skipped,
                    bytes = self.counters.bytes_total(),
                    "device apps read"
                );
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Lazily read every device-apps record from the gzip file at `path`.
pub fn read<P: AsRef<Path>>(path: P) -> PbResult<RecordStream> {
    read_with_config(path, &ReaderConfig::default())
}

pub fn read_with_config<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> PbResult<RecordStream> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading device apps");
    read_from(InputSource::File(path.to_path_buf()), config)
}

pub fn read_from(src: InputSource, config: &ReaderConfig) -> PbResult<RecordStream> {
    let input = open_input(src)?;
    Ok(DeviceAppsReader::new(gzip_reader(input), config.clone()))
}

/// Eagerly read every record; stops at the first error.
pub fn read_all<P: AsRef<Path>>(path: P) -> PbResult<Vec<DeviceAppsRecord>> {
    read(path)?.collect()
}

/// First frame header of a container, `None` when it holds no frames.
pub fn peek_header(src: InputSource) -> PbResult<Option<FrameHeader>> {
    read_from(src, &ReaderConfig::default())?.next_frame_header()
}
