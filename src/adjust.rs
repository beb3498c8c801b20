//! # Speed-cap timeline adjustment
//!
//! Rebuilds a track's timeline as if no segment had exceeded the posted
//! speed limit, and quantifies the travel time the speeding saved.
//!
//! ## Algorithm
//! 1. Walk the segments left to right, carrying a running adjusted-offset
//!    accumulator that starts at zero
//! 2. Compliant segments pass through unchanged
//! 3. For a segment above the cap, compute the portion of its distance that
//!    was covered "too fast" relative to what the cap allows in the same
//!    elapsed time, and the additional seconds needed to cover that portion
//!    at the cap
//! 4. Stretch the segment by those seconds and add them to the track's
//!    excess delay
//!
//! The adjusted offsets form a monotonically increasing timeline distinct
//! from the original wall-clock offsets. Re-running the adjustment on its
//! own output adds nothing: every capped segment now travels exactly at the
//! cap.

use crate::error::{AnalysisError, Result};
use crate::Segment;

/// A segment with its cap-compliant duration and timeline position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedSegment {
    pub segment: Segment,
    /// Duration after slowing to the cap, seconds. Never below the
    /// observed duration.
    pub adjusted_elapsed_s: f64,
    /// Running adjusted-timeline offset at the segment's end, seconds.
    pub adjusted_offset_s: f64,
    /// min(observed speed, cap), km/h.
    pub capped_speed_kph: f64,
}

/// The cap-adjusted rendition of one track.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdjustedTrack {
    pub segments: Vec<AdjustedSegment>,
    /// Total added travel time in seconds; zero iff no segment exceeded
    /// the cap.
    pub excess_delay_s: f64,
}

/// Adjust a segment sequence to a speed cap in a single pass.
///
/// Fails with [`AnalysisError::InvalidSpeedLimit`] for a non-positive or
/// non-finite cap. An empty input yields an empty track with zero delay.
pub fn adjust_timeline(segments: &[Segment], cap_kph: f64) -> Result<AdjustedTrack> {
    if !cap_kph.is_finite() || cap_kph <= 0.0 {
        return Err(AnalysisError::InvalidSpeedLimit(cap_kph));
    }

    let mut adjusted = Vec::with_capacity(segments.len());
    let mut offset_s = 0.0;
    let mut excess_delay_s = 0.0;

    for segment in segments {
        let (adjusted_elapsed_s, capped_speed_kph) = if segment.speed_kph > cap_kph {
            let vmax_mps = cap_kph / 3.6;
            let actual_mps = segment.speed_kph / 3.6;

            // Distance covered beyond what the cap allows in the observed
            // elapsed time, and the seconds needed to cover it at the cap.
            let gained_km = segment.distance_km * (1.0 - vmax_mps / actual_mps);
            let extra_s = gained_km * 1000.0 / vmax_mps;

            excess_delay_s += extra_s;
            (segment.elapsed_s + extra_s, cap_kph)
        } else {
            (segment.elapsed_s, segment.speed_kph)
        };

        offset_s += adjusted_elapsed_s;

        adjusted.push(AdjustedSegment {
            segment: *segment,
            adjusted_elapsed_s,
            adjusted_offset_s: offset_s,
            capped_speed_kph,
        });
    }

    Ok(AdjustedTrack {
        segments: adjusted,
        excess_delay_s,
    })
}
