#[cfg(test)]
mod telemetry_tests {
    use std::time::Duration;

    use deviceapps_core::telemetry::{StreamCounters, TelemetrySnapshot};
    use deviceapps_core::utils::fmt_bytes;

    fn make_counters() -> StreamCounters {
        let mut c = StreamCounters::default();
        c.add_record(10);
        c.add_record(0);
        c.add_skipped(4);
        c
    }

    #[test]
    fn counters_track_frames_and_bytes() {
        let c = make_counters();

        assert_eq!(c.records, 2);
        assert_eq!(c.frames, 3);
        assert_eq!(c.frames_skipped, 1);
        assert_eq!(c.bytes_header, 24);
        assert_eq!(c.bytes_payload, 14);
        assert_eq!(c.bytes_total(), 38);
    }

    #[test]
    fn merge_and_add_assign_agree() {
        let mut a = make_counters();
        a.merge(&make_counters());

        let mut b = make_counters();
        b += make_counters();

        assert_eq!(a, b);
        assert_eq!(a.records, 4);
        assert_eq!(a.bytes_total(), 76);
    }

    #[test]
    fn snapshot_ratio() {
        let mut c = StreamCounters::default();
        c.add_record(92); // 100 bytes total
        let snap = TelemetrySnapshot::from(&c, 50, Duration::from_millis(1));

        assert_eq!(snap.bytes_written(), 100);
        assert!((snap.compression_ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_of_nothing_has_zero_ratio() {
        let snap = TelemetrySnapshot::from(&StreamCounters::default(), 20, Duration::ZERO);
        assert_eq!(snap.compression_ratio, 0.0);
        assert_eq!(snap.bytes_written(), 0);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = TelemetrySnapshot::from(&make_counters(), 30, Duration::from_secs(1));
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["counters"]["records"], 2);
        assert_eq!(json["bytes_compressed"], 30);
    }

    #[test]
    fn fmt_bytes_ascii_and_hex() {
        assert_eq!(fmt_bytes(b"idfa"), "b\"idfa\"");
        assert_eq!(fmt_bytes(&[0xC3, 0x28]), "0xc328");
    }
}
