//! Run-level aggregation of per-track excess delays.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::pipeline::TrackResult;

/// Arithmetic mean, `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median, `None` for empty input.
///
/// Even-length input averages the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Summary statistics over one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-track excess delays in input order, seconds.
    pub delays_s: Vec<f64>,
    pub mean_s: f64,
    pub median_s: f64,
}

impl RunSummary {
    /// Build a summary from ordered per-track delays.
    ///
    /// Fails with [`AnalysisError::EmptyRun`] when there is nothing to
    /// aggregate; mean and median are undefined for zero tracks.
    pub fn from_delays(delays_s: Vec<f64>) -> Result<Self> {
        let mean_s = mean(&delays_s).ok_or(AnalysisError::EmptyRun)?;
        let median_s = median(&delays_s).ok_or(AnalysisError::EmptyRun)?;
        Ok(Self {
            delays_s,
            mean_s,
            median_s,
        })
    }
}

/// Fold track results into a [`RunSummary`], preserving input order.
pub fn summarize(results: &[TrackResult]) -> Result<RunSummary> {
    RunSummary::from_delays(results.iter().map(|r| r.excess_delay_s).collect())
}
