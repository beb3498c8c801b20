//! Geographic utilities: geodesic distance and zone cropping.

use geo::{GeodesicDistance, Point};
use log::debug;

use crate::{TrackPoint, ZoneBounds};

/// Geodesic distance between two track points in meters.
///
/// Uses the ellipsoidal (Karney) formula on WGS84, well beyond standard GPS
/// precision.
pub fn geodesic_distance_m(a: &TrackPoint, b: &TrackPoint) -> f64 {
    let p1 = Point::new(a.longitude, a.latitude);
    let p2 = Point::new(b.longitude, b.latitude);
    p1.geodesic_distance(&p2)
}

/// Restrict an ordered point sequence to the zone bounding box.
///
/// Pure subsequence selection: order is preserved, nothing is deduplicated,
/// and an unset edge keeps all points on that axis.
pub fn filter_to_zone(points: &[TrackPoint], bounds: &ZoneBounds) -> Vec<TrackPoint> {
    let kept: Vec<TrackPoint> = points
        .iter()
        .filter(|p| bounds.contains(p))
        .copied()
        .collect();

    debug!(
        "zone filter kept {} of {} points",
        kept.len(),
        points.len()
    );
    kept
}
