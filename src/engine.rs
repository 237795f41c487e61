use crossbeam_channel::Sender;

use crate::{
    config::GestureConfig,
    debounce::Debouncer,
    gesture::{classify_openness, match_digit},
    rotation::RotationTracker,
    types::{Command, Digit, HandObservation, OpennessVector, TrackerResults},
    zoom::estimate_zoom,
};

/// Destination for the commands produced by the engine.
pub trait CommandSink {
    fn emit(&mut self, command: Command);
}

impl CommandSink for Vec<Command> {
    fn emit(&mut self, command: Command) {
        self.push(command);
    }
}

impl CommandSink for Sender<Command> {
    fn emit(&mut self, command: Command) {
        if let Err(err) = self.send(command) {
            log::warn!("dropping {}: command receiver is gone", err.into_inner().label());
        }
    }
}

/// Cross-frame state of one tracking session.
#[derive(Clone, Debug)]
pub struct GestureState {
    pub debouncer: Debouncer,
    pub rotation: RotationTracker,
}

impl GestureState {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            debouncer: Debouncer::new(config.debounce_frames),
            rotation: RotationTracker::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FrameOutcome {
    /// No usable hand this frame; state untouched.
    #[default]
    Skipped,
    Processed {
        openness: OpennessVector,
        candidate: Option<Digit>,
        emitted: usize,
    },
}

impl FrameOutcome {
    pub fn emitted(&self) -> usize {
        match self {
            FrameOutcome::Skipped => 0,
            FrameOutcome::Processed { emitted, .. } => *emitted,
        }
    }
}

/// Turns per-frame hand observations into control commands.
///
/// Zoom, digit and rotation are evaluated independently on every frame, so
/// one frame can produce several commands. Commands keep firing on every
/// qualifying frame; the sink sees a level, not an edge.
pub struct GestureEngine {
    config: GestureConfig,
    state: GestureState,
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> Self {
        let state = GestureState::new(&config);
        Self { config, state }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Start a new session.
    pub fn reset(&mut self) {
        self.state = GestureState::new(&self.config);
    }

    pub fn process_tracker_results<S: CommandSink + ?Sized>(
        &mut self,
        results: &TrackerResults,
        sink: &mut S,
    ) -> FrameOutcome {
        if results.hands.len() > 1 {
            log::trace!(
                "{} hands tracked, following the first one",
                results.hands.len()
            );
        }
        self.process(results.primary(), sink)
    }

    pub fn process<S: CommandSink + ?Sized>(
        &mut self,
        hand: Option<&HandObservation>,
        sink: &mut S,
    ) -> FrameOutcome {
        let Some(hand) = hand else {
            return FrameOutcome::Skipped;
        };

        let mut emitted = 0;
        let mut emit = |command: Command| {
            sink.emit(command);
            emitted += 1;
        };

        let openness = classify_openness(&hand.world_landmarks, &self.config.openness);
        log::trace!("openness {openness}");

        if let Some(percent) = estimate_zoom(&hand.world_landmarks, &openness, &self.config.zoom)
        {
            emit(Command::ApplyZoom(percent));
        }

        let candidate = match_digit(&openness);
        if let Some(digit) = self.state.debouncer.observe(candidate) {
            emit(Command::SetActiveDigit(digit));
        }

        let delta = self
            .state
            .rotation
            .update(&hand.landmarks, &openness, &self.config.rotation);
        if let Some(horizontal) = delta.horizontal {
            emit(Command::SetHorizontalRotation(horizontal));
        }
        if let Some(vertical) = delta.vertical {
            emit(Command::SetVerticalRotation(vertical));
        }

        FrameOutcome::Processed {
            openness,
            candidate,
            emitted,
        }
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
