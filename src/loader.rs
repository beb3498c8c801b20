//! GPX loading: flattens a file's tracks and segments into one ordered
//! point sequence.
//!
//! Any parser yielding (latitude, longitude, timestamp) triples in file
//! order would do; this one uses the `gpx` crate. Points without a
//! timestamp or with out-of-range coordinates cannot contribute to the
//! timeline and are skipped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use gpx::read;
use log::warn;
use time::OffsetDateTime;

use crate::error::{AnalysisError, Result};
use crate::TrackPoint;

/// Read all track points from a GPX file, in file order.
pub fn read_track_points(path: &Path) -> Result<Vec<TrackPoint>> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_track_points_from(BufReader::new(file)).map_err(|e| match e {
        AnalysisError::GpxParse { message, .. } => AnalysisError::GpxParse {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })
}

/// Read all track points from an already-opened GPX document.
pub fn read_track_points_from(reader: impl Read) -> Result<Vec<TrackPoint>> {
    let gpx = read(reader).map_err(|e| AnalysisError::GpxParse {
        path: Default::default(),
        message: e.to_string(),
    })?;

    let mut points = Vec::new();
    for track in &gpx.tracks {
        for segment in &track.segments {
            for waypoint in &segment.points {
                let Some(time) = waypoint.time else {
                    warn!("skipping waypoint without timestamp");
                    continue;
                };
                let position = waypoint.point();
                let point =
                    TrackPoint::new(position.y(), position.x(), OffsetDateTime::from(time));
                if !point.is_valid() {
                    warn!(
                        "skipping waypoint with out-of-range coordinates ({}, {})",
                        point.latitude, point.longitude
                    );
                    continue;
                }
                points.push(point);
            }
        }
    }

    Ok(points)
}
