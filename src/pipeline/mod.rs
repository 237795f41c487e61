pub mod worker;

pub use worker::{EngineSummary, FramePolicy, start_engine_worker};
