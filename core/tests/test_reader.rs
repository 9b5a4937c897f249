// Reader suite. Covers:
//
// * `read` / `read_all` / `read_from`
// * skipping (or rejecting) unknown record types
// * truncated and corrupt streams
// * `peek_header`
// * write → read property test

#[cfg(test)]
mod tests {
    use flate2::Compression;
    use proptest::collection::vec;
    use proptest::option;
    use proptest::prelude::*;
    use tempfile::TempDir;

    use deviceapps_core::compression::gzip;
    use deviceapps_core::config::{ReaderConfig, WriterConfig};
    use deviceapps_core::constants::{DEVICE_APPS_TYPE, MAGIC};
    use deviceapps_core::framing::{encode_frame_header, FrameError, FrameHeader};
    use deviceapps_core::io::{InputSource, OutputSink};
    use deviceapps_core::records::{Device, DeviceAppsRecord};
    use deviceapps_core::writer::encode_device_apps_frame;
    use deviceapps_core::{peek_header, read, read_all, read_from, write, write_to, PbError};

    fn sample_records() -> Vec<DeviceAppsRecord> {
        vec![
            DeviceAppsRecord::new(Device::new("idfa", "e7e1a50c0ec2747ca56cd9e1558c0d7c"), vec![1, 2, 3, 4])
                .with_location(67.7835424444, -22.8044005471),
            DeviceAppsRecord::new(Device::new("gaid", "e7e1a50c0ec2747ca56cd9e1558c0d7d"), vec![1, 2])
                .with_location(42.0, -42.0),
            DeviceAppsRecord::new(Device::new("idfa", "e7e1a50c0ec2747ca56cd9e1558c0d7c"), vec![])
                .with_location(42.0, -42.0),
            DeviceAppsRecord::new(Device::new("idfa", "e7e1a50c0ec2747ca56cd9e1558c0d7c"), vec![1]),
        ]
    }

    /// Raw (decompressed) frame stream for `records`.
    fn raw_frames(records: &[DeviceAppsRecord]) -> Vec<u8> {
        records
            .iter()
            .enumerate()
            .flat_map(|(i, r)| encode_device_apps_frame(r, i).unwrap())
            .collect()
    }

    fn foreign_frame(record_type: u16, payload: &[u8]) -> Vec<u8> {
        let header = FrameHeader {
            magic: MAGIC,
            record_type,
            length: payload.len() as u16,
        };
        let mut out = encode_frame_header(&header).to_vec();
        out.extend_from_slice(payload);
        out
    }

    fn memory(raw: &[u8]) -> InputSource {
        InputSource::Memory(gzip(raw, Compression::default()).unwrap())
    }

// # ✅ 1. Roundtrip through a file

    #[test]
    fn file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.pb.gz");
        write(&sample_records(), &path).unwrap();

        let mut stream = read(&path).unwrap();
        let mut got = Vec::new();
        for rec in stream.by_ref() {
            got.push(rec.unwrap());
        }

        assert_eq!(got, sample_records());
        assert_eq!(stream.counters().records, 4);
        assert_eq!(stream.counters().frames_skipped, 0);
    }

    #[test]
    fn last_record_has_no_location() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.pb.gz");
        write(&sample_records(), &path).unwrap();

        let last = read_all(&path).unwrap().pop().unwrap();
        assert_eq!(last.lat, None);
        assert_eq!(last.lon, None);
        assert_eq!(last.apps, vec![1]);
    }

    #[test]
    fn empty_container_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.pb.gz");
        write(&[], &path).unwrap();

        assert!(read_all(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        match read(dir.path().join("nope.pb.gz")) {
            Err(e) => assert!(e.is_io()),
            Ok(_) => panic!("expected an error"),
        }
    }

// # ✅ 2. Unknown record types

    #[test]
    fn unknown_types_are_skipped_by_default() {
        let records = sample_records();
        let mut raw = foreign_frame(2, b"junk");
        raw.extend(raw_frames(&records[..1]));
        raw.extend(foreign_frame(0x7777, b""));
        raw.extend(raw_frames(&records[1..2]));

        let mut stream = read_from(memory(&raw), &ReaderConfig::default()).unwrap();
        let got: Vec<_> = stream.by_ref().collect::<Result<_, _>>().unwrap();

        assert_eq!(got, records[..2].to_vec());
        assert_eq!(stream.counters().frames_skipped, 2);
        assert_eq!(stream.counters().frames, 4);
    }

    #[test]
    fn strict_reader_rejects_unknown_types() {
        let mut raw = raw_frames(&sample_records()[..1]);
        raw.extend(foreign_frame(2, b"junk"));

        let mut stream = read_from(memory(&raw), &ReaderConfig::strict()).unwrap();

        assert!(stream.next().unwrap().is_ok());
        assert!(matches!(
            stream.next(),
            Some(Err(PbError::Frame(FrameError::UnknownRecordType(2))))
        ));
        assert!(stream.next().is_none());
    }

// # ❌ 3. Truncated and corrupt streams

    #[test]
    fn partial_header_is_truncated() {
        let mut raw = raw_frames(&sample_records()[..1]);
        raw.extend_from_slice(&[0xFF; 5]);

        let results: Vec<_> = read_from(memory(&raw), &ReaderConfig::default()).unwrap().collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(PbError::Frame(FrameError::Truncated { have: 5, need: 8 }))
        ));
    }

    #[test]
    fn partial_payload_is_truncated() {
        let mut raw = raw_frames(&sample_records()[..1]);
        raw.truncate(raw.len() - 3);

        let mut stream = read_from(memory(&raw), &ReaderConfig::default()).unwrap();
        assert!(matches!(
            stream.next(),
            Some(Err(PbError::Frame(FrameError::Truncated { .. })))
        ));
        assert!(stream.next().is_none());
    }

    #[test]
    fn bad_magic_stops_the_stream() {
        let mut raw = raw_frames(&sample_records());
        raw[0] = 0x00;

        let mut stream = read_from(memory(&raw), &ReaderConfig::default()).unwrap();
        assert!(matches!(
            stream.next(),
            Some(Err(PbError::Frame(FrameError::InvalidMagic(_))))
        ));
        assert!(stream.next().is_none());
    }

    #[test]
    fn corrupt_payload_is_decode_error() {
        let raw = foreign_frame(DEVICE_APPS_TYPE, &[0xFF, 0xFF]);

        let err = read_from(memory(&raw), &ReaderConfig::default())
            .unwrap()
            .next()
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, PbError::Decode(_)));
    }

    #[test]
    fn not_gzip_is_io_error() {
        let src = InputSource::Memory(b"definitely not gzip".to_vec());
        let err = read_from(src, &ReaderConfig::default())
            .unwrap()
            .next()
            .unwrap()
            .unwrap_err();
        assert!(err.is_io());
    }

// # ✅ 4. peek_header

    #[test]
    fn peek_header_reports_first_frame() {
        let records = sample_records();
        let raw = raw_frames(&records);
        let first_len = raw_frames(&records[..1]).len() - FrameHeader::LEN;

        let header = peek_header(memory(&raw)).unwrap().unwrap();

        assert_eq!(header.magic, MAGIC);
        assert_eq!(header.record_type, DEVICE_APPS_TYPE);
        assert_eq!(header.length as usize, first_len);
    }

    #[test]
    fn peek_header_on_empty_container() {
        assert!(peek_header(memory(&[])).unwrap().is_none());
    }

// # 5. Property: whatever is written reads back unchanged

    fn device_strategy() -> impl Strategy<Value = Device> {
        (option::of("[a-z]{0,8}"), option::of("[0-9a-f]{0,32}"))
            .prop_map(|(device_type, id)| Device { device_type, id })
    }

    fn record_strategy() -> impl Strategy<Value = DeviceAppsRecord> {
        (
            option::of(device_strategy()),
            option::of(-90.0f64..90.0),
            option::of(-180.0f64..180.0),
            vec(any::<u32>(), 0..16),
        )
            .prop_map(|(device, lat, lon, apps)| DeviceAppsRecord { device, lat, lon, apps })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_write_then_read(records in vec(record_strategy(), 0..8)) {
            let (sink, buf) = OutputSink::memory();
            let snap = write_to(&records, sink, &WriterConfig::default()).unwrap();
            let bytes = buf.lock().unwrap().clone();

            let mut stream = read_from(InputSource::Memory(bytes), &ReaderConfig::default()).unwrap();
            let got: Vec<_> = stream.by_ref().collect::<Result<_, _>>().unwrap();

            prop_assert_eq!(&got, &records);
            prop_assert_eq!(stream.counters().bytes_total(), snap.bytes_written());
        }
    }
}
