use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use crate::types::Finger;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("threshold `{name}` must be a positive finite number, got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },
    #[error("rotation window is empty: lower bound {lower} must be below upper bound {upper}")]
    EmptyRotationWindow { lower: f32, upper: f32 },
}

/// Tip-to-base distances (metres, world space) above which a finger counts
/// as open.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpennessThresholds {
    pub thumb: f32,
    pub index: f32,
    pub middle: f32,
    pub ring: f32,
    pub pinky: f32,
}

impl Default for OpennessThresholds {
    fn default() -> Self {
        Self {
            thumb: 0.050,
            index: 0.055,
            middle: 0.070,
            ring: 0.065,
            pinky: 0.055,
        }
    }
}

impl OpennessThresholds {
    pub fn for_finger(&self, finger: Finger) -> f32 {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Looser index extension required for a pinch.
    pub index_extension: f32,
    /// Thumb tip must be at least this far from the index knuckle.
    pub thumb_extension: f32,
    /// Thumb-to-index distance that maps to `percent_per_unit` percent.
    pub distance_unit: f32,
    pub percent_per_unit: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            index_extension: 0.045,
            thumb_extension: 0.04,
            distance_unit: 0.01,
            percent_per_unit: 10.0,
        }
    }
}

/// Exclusive bounds on per-frame wrist displacement (normalized image units).
/// Larger jumps are treated as tracking glitches and dropped. The window is
/// intentionally asymmetric.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub min_delta: f32,
    pub max_delta: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            min_delta: -0.15,
            max_delta: 0.1,
        }
    }
}

impl RotationConfig {
    pub fn accepts(&self, delta: f32) -> bool {
        delta > self.min_delta && delta < self.max_delta
    }
}

/// Tunables for the whole gesture engine. `Default` carries the empirically
/// tuned constants; a JSON file may override any subset of them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub openness: OpennessThresholds,
    pub zoom: ZoomConfig,
    pub rotation: RotationConfig,
    /// A digit is emitted once its streak exceeds this many frames.
    pub debounce_frames: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            openness: OpennessThresholds::default(),
            zoom: ZoomConfig::default(),
            rotation: RotationConfig::default(),
            debounce_frames: 2,
        }
    }
}

impl GestureConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: GestureConfig = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::info!("loaded gesture config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("openness.thumb", self.openness.thumb),
            ("openness.index", self.openness.index),
            ("openness.middle", self.openness.middle),
            ("openness.ring", self.openness.ring),
            ("openness.pinky", self.openness.pinky),
            ("zoom.index_extension", self.zoom.index_extension),
            ("zoom.thumb_extension", self.zoom.thumb_extension),
            ("zoom.distance_unit", self.zoom.distance_unit),
            ("zoom.percent_per_unit", self.zoom.percent_per_unit),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }

        let RotationConfig {
            min_delta,
            max_delta,
        } = self.rotation;
        if !min_delta.is_finite() || !max_delta.is_finite() || min_delta >= max_delta {
            return Err(ConfigError::EmptyRotationWindow {
                lower: min_delta,
                upper: max_delta,
            });
        }

        Ok(())
    }
}
