//! Segment derivation: pairs consecutive track points into timed, measured
//! intervals.
//!
//! Each adjacent point pair yields one [`Segment`] carrying its duration,
//! geodesic distance, instantaneous speed, and the running wall-clock offset
//! from the first retained point. Pairs with zero elapsed time (duplicate
//! timestamps) are dropped before any division happens; pairs with negative
//! elapsed time (out-of-order samples) are dropped likewise.

use log::{debug, warn};
use time::OffsetDateTime;

use crate::geo_utils::geodesic_distance_m;
use crate::TrackPoint;

/// The interval between two consecutive retained track points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    /// Observed duration in seconds, always > 0.
    pub elapsed_s: f64,
    /// Great-circle distance in kilometers.
    pub distance_km: f64,
    /// Instantaneous speed in km/h.
    pub speed_kph: f64,
    /// Wall-clock seconds from the first retained point to `end_time`.
    pub offset_s: f64,
}

/// Build one segment per adjacent point pair, in input order.
///
/// Fewer than two points produce an empty sequence. Offsets are measured
/// against the first point of the input, independent of any skipped pairs.
pub fn build_segments(points: &[TrackPoint]) -> Vec<Segment> {
    let Some(origin) = points.first() else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));

    for pair in points.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        let elapsed_s = (curr.time - prev.time).as_seconds_f64();

        if elapsed_s == 0.0 {
            debug!("skipping duplicate-timestamp pair at {}", curr.time);
            continue;
        }
        if elapsed_s < 0.0 {
            warn!(
                "skipping out-of-order pair at {} ({}s backwards)",
                curr.time, -elapsed_s
            );
            continue;
        }

        let distance_km = geodesic_distance_m(prev, curr) / 1000.0;
        let speed_kph = distance_km / (elapsed_s / 3600.0);

        segments.push(Segment {
            start_time: prev.time,
            end_time: curr.time,
            elapsed_s,
            distance_km,
            speed_kph,
            offset_s: (curr.time - origin.time).as_seconds_f64(),
        });
    }

    segments
}
