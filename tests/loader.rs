//! Tests for GPX loading

use overspeed::{read_track_points_from, AnalysisError};
use time::macros::datetime;

const SIMPLE_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="overspeed-test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <name>morning drive</name>
    <trkseg>
      <trkpt lat="47.4480" lon="8.1440"><time>2024-05-01T12:00:00Z</time></trkpt>
      <trkpt lat="47.4490" lon="8.1450"><time>2024-05-01T12:00:30Z</time></trkpt>
      <trkpt lat="47.4500" lon="8.1460"><time>2024-05-01T12:01:00Z</time></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

const MULTI_SEGMENT_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="overspeed-test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <trkseg>
      <trkpt lat="47.1" lon="8.1"><time>2024-05-01T12:00:00Z</time></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="47.2" lon="8.2"><time>2024-05-01T12:01:00Z</time></trkpt>
    </trkseg>
  </trk>
  <trk>
    <trkseg>
      <trkpt lat="47.3" lon="8.3"><time>2024-05-01T12:02:00Z</time></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

const TIMELESS_POINT_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="overspeed-test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <trkseg>
      <trkpt lat="47.1" lon="8.1"><time>2024-05-01T12:00:00Z</time></trkpt>
      <trkpt lat="47.2" lon="8.2"></trkpt>
      <trkpt lat="47.3" lon="8.3"><time>2024-05-01T12:01:00Z</time></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

#[test]
fn test_points_come_back_in_file_order() {
    let points = read_track_points_from(SIMPLE_GPX.as_bytes()).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].latitude, 47.4480);
    assert_eq!(points[0].longitude, 8.1440);
    assert_eq!(points[0].time, datetime!(2024-05-01 12:00:00 UTC));
    assert_eq!(points[2].time, datetime!(2024-05-01 12:01:00 UTC));
    assert!(points.windows(2).all(|w| w[0].time <= w[1].time));
}

#[test]
fn test_tracks_and_segments_are_flattened_in_order() {
    let points = read_track_points_from(MULTI_SEGMENT_GPX.as_bytes()).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].latitude, 47.1);
    assert_eq!(points[1].latitude, 47.2);
    assert_eq!(points[2].latitude, 47.3);
}

#[test]
fn test_timeless_points_are_skipped() {
    let points = read_track_points_from(TIMELESS_POINT_GPX.as_bytes()).unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].latitude, 47.1);
    assert_eq!(points[1].latitude, 47.3);
}

#[test]
fn test_malformed_document_is_a_parse_error() {
    let result = read_track_points_from("not a gpx document".as_bytes());
    assert!(matches!(result, Err(AnalysisError::GpxParse { .. })));
}

#[test]
fn test_empty_document_yields_no_points() {
    let gpx = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="overspeed-test" xmlns="http://www.topografix.com/GPX/1/1">
</gpx>
"#;
    let points = read_track_points_from(gpx.as_bytes()).unwrap();
    assert!(points.is_empty());
}
