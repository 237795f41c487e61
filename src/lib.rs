//! Turns per-frame hand landmarks into discrete digit selections, pinch zoom
//! and palm rotation commands.

pub mod config;
pub mod debounce;
pub mod engine;
pub mod gesture;
pub mod pipeline;
pub mod replay;
pub mod rotation;
#[cfg(test)]
mod testing;
pub mod types;
pub mod zoom;

pub use config::GestureConfig;
pub use engine::{CommandSink, FrameOutcome, GestureEngine, GestureState};
pub use types::{Command, Digit, HandObservation, Landmark, LandmarkSet, TrackerResults};
