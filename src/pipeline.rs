//! Per-track analysis pipeline and multi-file orchestration.
//!
//! One track flows through crop → segment → adjust with no shared state, so
//! files are independent of each other; the `parallel` feature exposes a
//! rayon fan-out over files as a drop-in alternative to the sequential run.

use std::path::{Path, PathBuf};

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::adjust::{adjust_timeline, AdjustedSegment};
use crate::error::Result;
use crate::geo_utils::filter_to_zone;
use crate::loader::read_track_points;
use crate::segments::build_segments;
use crate::{AnalysisConfig, TrackPoint};

/// The complete analysis output for one track file.
///
/// Carries everything a reporting or rendering layer needs: no downstream
/// recomputation is required.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackResult {
    /// Identifier of the source file (its file name).
    pub file_id: String,
    /// Cap-adjusted segments in traversal order.
    pub segments: Vec<AdjustedSegment>,
    /// Total added travel time in seconds.
    pub excess_delay_s: f64,
}

/// Run the crop → segment → adjust pipeline over a raw point sequence.
///
/// A sequence that leaves fewer than two points inside the zone produces an
/// empty segment list and zero delay. Fails on an invalid configuration.
pub fn analyze_points(
    file_id: &str,
    points: &[TrackPoint],
    config: &AnalysisConfig,
) -> Result<TrackResult> {
    config.validate()?;

    let in_zone = filter_to_zone(points, &config.bounds);
    let segments = build_segments(&in_zone);
    let adjusted = adjust_timeline(&segments, config.speed_limit_kph)?;

    debug!(
        "{}: {} of {} points in zone, {} segments, {:.1}s excess",
        file_id,
        in_zone.len(),
        points.len(),
        adjusted.segments.len(),
        adjusted.excess_delay_s
    );

    Ok(TrackResult {
        file_id: file_id.to_string(),
        segments: adjusted.segments,
        excess_delay_s: adjusted.excess_delay_s,
    })
}

/// Load a GPX file and analyze it.
pub fn analyze_file(path: &Path, config: &AnalysisConfig) -> Result<TrackResult> {
    let file_id = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();

    let points = read_track_points(path)?;
    analyze_points(&file_id, &points, config)
}

/// Analyze a batch of files sequentially, preserving input order.
pub fn analyze_files(paths: &[PathBuf], config: &AnalysisConfig) -> Vec<Result<TrackResult>> {
    paths.iter().map(|p| analyze_file(p, config)).collect()
}

/// Analyze a batch of files in parallel, preserving input order.
///
/// Tracks share no mutable state, and the run summary's mean and median are
/// order-independent reductions, so the fan-out cannot change any reported
/// value.
#[cfg(feature = "parallel")]
pub fn analyze_files_parallel(
    paths: &[PathBuf],
    config: &AnalysisConfig,
) -> Vec<Result<TrackResult>> {
    paths.par_iter().map(|p| analyze_file(p, config)).collect()
}
