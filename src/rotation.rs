use crate::{
    config::RotationConfig,
    types::{Finger, LandmarkSet, OpennessVector, PalmPosition},
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationDelta {
    pub horizontal: Option<f32>,
    pub vertical: Option<f32>,
}

impl RotationDelta {
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

/// Turns wrist movement during a flat open hand into rotation deltas.
///
/// The baseline only moves on flat-hand frames, so after the hand closes and
/// reopens the next delta spans the whole gap.
#[derive(Clone, Debug, Default)]
pub struct RotationTracker {
    last_palm: Option<PalmPosition>,
}

impl RotationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        landmarks: &LandmarkSet,
        openness: &OpennessVector,
        config: &RotationConfig,
    ) -> RotationDelta {
        if !openness.fingers_open(&Finger::NON_THUMB) {
            return RotationDelta::default();
        }

        let current = PalmPosition::from(landmarks.wrist());
        let Some(last) = self.last_palm.replace(current) else {
            log::trace!("rotation baseline seeded at ({:.3}, {:.3})", current.x, current.y);
            return RotationDelta::default();
        };

        let dx = current.x - last.x;
        let dy = current.y - last.y;
        // Inverted: moving the hand left rotates positively.
        RotationDelta {
            horizontal: config.accepts(dx).then_some(-dx),
            vertical: config.accepts(dy).then_some(-dy),
        }
    }

    pub fn last_palm(&self) -> Option<PalmPosition> {
        self.last_palm
    }

    pub fn reset(&mut self) {
        self.last_palm = None;
    }
}
