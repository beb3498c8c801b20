//! Tests for run-level aggregation

use overspeed::{mean, median, summarize, AnalysisError, RunSummary, TrackResult};

fn track(file_id: &str, excess_delay_s: f64) -> TrackResult {
    TrackResult {
        file_id: file_id.to_string(),
        segments: Vec::new(),
        excess_delay_s,
    }
}

#[test]
fn test_mean_and_median_reference_values() {
    let delays = [10.0, 20.0, 30.0];
    assert_eq!(mean(&delays), Some(20.0));
    assert_eq!(median(&delays), Some(20.0));
}

#[test]
fn test_median_even_length_averages_middle_pair() {
    assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]), Some(25.0));
}

#[test]
fn test_median_handles_unsorted_input() {
    assert_eq!(median(&[30.0, 10.0, 20.0]), Some(20.0));
    assert_eq!(median(&[5.0]), Some(5.0));
}

#[test]
fn test_empty_input_is_undefined_not_a_crash() {
    assert_eq!(mean(&[]), None);
    assert_eq!(median(&[]), None);
    assert!(matches!(
        RunSummary::from_delays(Vec::new()),
        Err(AnalysisError::EmptyRun)
    ));
}

#[test]
fn test_summarize_preserves_track_order() {
    let results = vec![track("a.gpx", 30.0), track("b.gpx", 10.0), track("c.gpx", 20.0)];
    let summary = summarize(&results).unwrap();

    assert_eq!(summary.delays_s, vec![30.0, 10.0, 20.0]);
    assert_eq!(summary.mean_s, 20.0);
    assert_eq!(summary.median_s, 20.0);
}

#[test]
fn test_summarize_single_track() {
    let summary = summarize(&[track("only.gpx", 12.5)]).unwrap();
    assert_eq!(summary.mean_s, 12.5);
    assert_eq!(summary.median_s, 12.5);
}

#[test]
fn test_summarize_empty_run_fails() {
    assert!(matches!(summarize(&[]), Err(AnalysisError::EmptyRun)));
}
