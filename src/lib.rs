//! # Overspeed
//!
//! Excess travel-time analysis for GPS tracks crossing a speed-limited zone.
//!
//! Given GPX track logs recorded through a bounded geographic zone with a
//! posted speed limit, this library:
//! - crops each track to the zone's bounding box
//! - derives per-segment kinematics (duration, geodesic distance, speed)
//! - rebuilds the timeline as if every segment respected the speed limit
//! - reports the cumulative excess delay per track and across the run
//!
//! ## Features
//!
//! - **`plot`** - Render per-track speed charts with plotters (default)
//! - **`parallel`** - Analyze independent track files in parallel with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use overspeed::{analyze_points, AnalysisConfig, TrackPoint};
//! use time::{Duration, OffsetDateTime};
//!
//! let start = OffsetDateTime::UNIX_EPOCH;
//! // Two points roughly 1 km apart, covered in 60 s (~60 km/h).
//! let points = vec![
//!     TrackPoint::new(47.4480, 8.1440, start),
//!     TrackPoint::new(47.4570, 8.1440, start + Duration::seconds(60)),
//! ];
//!
//! let config = AnalysisConfig {
//!     speed_limit_kph: 30.0,
//!     ..AnalysisConfig::default()
//! };
//!
//! let result = analyze_points("demo", &points, &config).unwrap();
//! assert!(result.excess_delay_s > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// Unified error handling
pub mod error;
pub use error::{AnalysisError, Result};

// Geographic utilities (geodesic distance, zone cropping)
pub mod geo_utils;
pub use geo_utils::filter_to_zone;

// Segment derivation from consecutive track points
pub mod segments;
pub use segments::{build_segments, Segment};

// Speed-cap timeline adjustment (the core algorithm)
pub mod adjust;
pub use adjust::{adjust_timeline, AdjustedSegment, AdjustedTrack};

// Run-level aggregation (mean / median over per-track delays)
pub mod report;
pub use report::{mean, median, summarize, RunSummary};

// GPX file loading
pub mod loader;
pub use loader::{read_track_points, read_track_points_from};

// Per-track pipeline and multi-file orchestration
pub mod pipeline;
#[cfg(feature = "parallel")]
pub use pipeline::analyze_files_parallel;
pub use pipeline::{analyze_file, analyze_files, analyze_points, TrackResult};

// Chart rendering (speed before/after adjustment)
#[cfg(feature = "plot")]
pub mod plot;
#[cfg(feature = "plot")]
pub use plot::{render_speed_chart, ChartKind};

// ============================================================================
// Core Types
// ============================================================================

/// A timestamped GPS position sample.
///
/// # Example
/// ```
/// use overspeed::TrackPoint;
/// use time::OffsetDateTime;
/// let point = TrackPoint::new(47.4480, 8.1440, OffsetDateTime::UNIX_EPOCH);
/// assert!(point.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub time: OffsetDateTime,
}

impl TrackPoint {
    /// Create a new track point.
    pub fn new(latitude: f64, longitude: f64, time: OffsetDateTime) -> Self {
        Self {
            latitude,
            longitude,
            time,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Bounding box of the analysis zone, each edge independently optional.
///
/// An unset edge imposes no constraint on that axis; the default value is
/// fully unbounded and keeps every point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoneBounds {
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lon: Option<f64>,
    pub max_lon: Option<f64>,
}

impl ZoneBounds {
    /// Check whether a point lies within all specified edges (inclusive).
    pub fn contains(&self, point: &TrackPoint) -> bool {
        self.min_lat.map_or(true, |b| point.latitude >= b)
            && self.max_lat.map_or(true, |b| point.latitude <= b)
            && self.min_lon.map_or(true, |b| point.longitude >= b)
            && self.max_lon.map_or(true, |b| point.longitude <= b)
    }

    /// Reject bound pairs where the minimum exceeds the maximum.
    pub fn validate(&self) -> Result<()> {
        if let (Some(lo), Some(hi)) = (self.min_lat, self.max_lat) {
            if lo > hi {
                return Err(AnalysisError::InvalidBounds(format!(
                    "min_lat {lo} exceeds max_lat {hi}"
                )));
            }
        }
        if let (Some(lo), Some(hi)) = (self.min_lon, self.max_lon) {
            if lo > hi {
                return Err(AnalysisError::InvalidBounds(format!(
                    "min_lon {lo} exceeds max_lon {hi}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for a zone analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Zone bounding box. Points outside it are dropped before any
    /// kinematics are derived. Default: unbounded (keep everything).
    pub bounds: ZoneBounds,

    /// Posted speed limit inside the zone, km/h. Must be positive.
    /// Default: 30.0
    pub speed_limit_kph: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bounds: ZoneBounds::default(),
            speed_limit_kph: 30.0,
        }
    }
}

impl AnalysisConfig {
    /// Validate the speed limit and bounding box.
    pub fn validate(&self) -> Result<()> {
        if !self.speed_limit_kph.is_finite() || self.speed_limit_kph <= 0.0 {
            return Err(AnalysisError::InvalidSpeedLimit(self.speed_limit_kph));
        }
        self.bounds.validate()
    }
}
