//! Speed-vs-time chart rendering.
//!
//! Draws the observed speed trace against the cap-adjusted trace for one
//! track, with the speed limit as a horizontal rule. Consumes only the
//! [`TrackResult`] interface; nothing here feeds back into the analysis.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{AnalysisError, Result};
use crate::pipeline::TrackResult;

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Png,
    Svg,
}

/// Render the before/after speed chart for one track.
///
/// Tracks with no segments produce no chart and succeed trivially.
pub fn render_speed_chart(
    result: &TrackResult,
    cap_kph: f64,
    path: &Path,
    kind: ChartKind,
) -> Result<()> {
    if result.segments.is_empty() {
        return Ok(());
    }

    match kind {
        ChartKind::Png => {
            let root = BitMapBackend::new(path, (1280, 720)).into_drawing_area();
            draw_chart(root, result, cap_kph)
        }
        ChartKind::Svg => {
            let root = SVGBackend::new(path, (1280, 720)).into_drawing_area();
            draw_chart(root, result, cap_kph)
        }
    }
    .map_err(|e| AnalysisError::Render(e.to_string()))
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    result: &TrackResult,
    cap_kph: f64,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let observed: Vec<(f64, f64)> = result
        .segments
        .iter()
        .map(|s| (s.segment.offset_s, s.segment.speed_kph))
        .collect();
    let adjusted: Vec<(f64, f64)> = result
        .segments
        .iter()
        .map(|s| (s.adjusted_offset_s, s.capped_speed_kph))
        .collect();

    let x_max = observed
        .iter()
        .chain(adjusted.iter())
        .map(|(x, _)| *x)
        .fold(f64::MIN, f64::max)
        .max(1.0);
    let y_max = observed
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::MIN, f64::max)
        .max(cap_kph)
        * 1.15;

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&result.file_id, ("sans-serif", 24))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Speed (km/h)")
        .draw()?;

    let cap_color = RGBColor(128, 128, 128);
    chart
        .draw_series(LineSeries::new(
            [(0.0, cap_kph), (x_max, cap_kph)],
            &cap_color,
        ))?
        .label(format!("limit = {cap_kph} km/h"))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], cap_color));

    let observed_color = RGBColor(30, 80, 200);
    chart
        .draw_series(LineSeries::new(observed, &observed_color))?
        .label("Observed speed")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], observed_color));

    let adjusted_color = RGBColor(34, 139, 34);
    chart
        .draw_series(LineSeries::new(adjusted, &adjusted_color))?
        .label("Capped speed")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], adjusted_color));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}
