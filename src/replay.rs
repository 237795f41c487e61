//! Landmark traces recorded from a hand tracker, one frame per JSON line:
//!
//! ```text
//! {"landmarks": [[[x, y, z], ...21]], "world_landmarks": [[[x, y, z], ...21]]}
//! ```
//!
//! Each outer array holds one entry per tracked hand. An empty or missing
//! array means no hand was detected in that frame. Points may also be written
//! the way MediaPipe reports them, as `{"x": .., "y": .., "z": ..}` objects.

use std::io::BufRead;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::{HandObservation, Landmark, LandmarkError, LandmarkSet, TrackerResults};

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
enum TracePoint {
    Array([f32; 3]),
    Object(Landmark),
}

impl From<TracePoint> for Landmark {
    fn from(point: TracePoint) -> Self {
        match point {
            TracePoint::Array(xyz) => Landmark::from(xyz),
            TracePoint::Object(landmark) => landmark,
        }
    }
}

fn landmark_set(points: &[TracePoint]) -> Result<LandmarkSet, LandmarkError> {
    let landmarks: Vec<Landmark> = points.iter().copied().map(Landmark::from).collect();
    LandmarkSet::try_from(landmarks)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TraceFrame {
    landmarks: Vec<Vec<TracePoint>>,
    world_landmarks: Vec<Vec<TracePoint>>,
}

impl TraceFrame {
    fn into_results(self, line: usize) -> Result<TrackerResults> {
        if self.landmarks.len() != self.world_landmarks.len() {
            log::warn!(
                "line {line}: {} image-space hands but {} world-space hands, pairing the first {}",
                self.landmarks.len(),
                self.world_landmarks.len(),
                self.landmarks.len().min(self.world_landmarks.len())
            );
        }

        let hands = self
            .landmarks
            .iter()
            .zip(&self.world_landmarks)
            .enumerate()
            .map(|(hand, (image, world))| -> Result<HandObservation> {
                Ok(HandObservation {
                    landmarks: landmark_set(image)
                        .with_context(|| format!("hand {hand} landmarks"))?,
                    world_landmarks: landmark_set(world)
                        .with_context(|| format!("hand {hand} world landmarks"))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TrackerResults { hands })
    }
}

pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<TrackerResults>> {
    let mut frames = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read trace line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let frame: TraceFrame = serde_json::from_str(trimmed)
            .with_context(|| format!("malformed trace frame on line {line_no}"))?;
        let results = frame
            .into_results(line_no)
            .with_context(|| format!("invalid hand on line {line_no}"))?;
        frames.push(results);
    }
    log::debug!("parsed {} trace frames", frames.len());
    Ok(frames)
}
