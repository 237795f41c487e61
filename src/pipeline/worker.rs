use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::{
    config::GestureConfig,
    engine::{FrameOutcome, GestureEngine},
    types::{Command, TrackerResults},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FramePolicy {
    /// Process every frame in arrival order. Needed for replays, where
    /// dropping frames would change debounce timing.
    #[default]
    Sequential,
    /// Skip frames that queued up while the engine was busy.
    Latest,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineSummary {
    pub frames: usize,
    pub skipped: usize,
    pub dropped: usize,
    pub commands: usize,
}

/// Run a gesture engine on its own thread until `frame_rx` disconnects.
/// The engine never leaves the worker thread.
pub fn start_engine_worker(
    config: GestureConfig,
    frame_rx: Receiver<TrackerResults>,
    mut command_tx: Sender<Command>,
    policy: FramePolicy,
) -> thread::JoinHandle<EngineSummary> {
    thread::spawn(move || {
        let mut engine = GestureEngine::new(config);
        let mut summary = EngineSummary::default();

        while let Some((results, dropped)) = next_frame(&frame_rx, policy) {
            summary.frames += 1;
            summary.dropped += dropped;
            match engine.process_tracker_results(&results, &mut command_tx) {
                FrameOutcome::Skipped => summary.skipped += 1,
                outcome => summary.commands += outcome.emitted(),
            }
        }

        log::info!(
            "gesture engine stopped after {} frames ({} without a hand, {} dropped), {} commands",
            summary.frames,
            summary.skipped,
            summary.dropped,
            summary.commands
        );
        summary
    })
}

fn next_frame(
    frame_rx: &Receiver<TrackerResults>,
    policy: FramePolicy,
) -> Option<(TrackerResults, usize)> {
    let mut frame = frame_rx.recv().ok()?;
    let mut dropped = 0;
    if policy == FramePolicy::Latest {
        while let Ok(newer) = frame_rx.try_recv() {
            frame = newer;
            dropped += 1;
        }
    }
    Some((frame, dropped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::observation;
    use crate::types::Digit;
    use crossbeam_channel::unbounded;

    const THREE: [bool; 5] = [false, true, true, true, false];

    #[test]
    fn sequential_worker_processes_every_frame() {
        let (frame_tx, frame_rx) = unbounded();
        let (command_tx, command_rx) = unbounded();

        for _ in 0..5 {
            frame_tx
                .send(TrackerResults::single(observation(THREE, (0.5, 0.5))))
                .unwrap();
        }
        frame_tx.send(TrackerResults::empty()).unwrap();
        drop(frame_tx);

        let handle = start_engine_worker(
            GestureConfig::default(),
            frame_rx,
            command_tx,
            FramePolicy::Sequential,
        );
        let summary = handle.join().unwrap();

        assert_eq!(
            summary,
            EngineSummary {
                frames: 6,
                skipped: 1,
                dropped: 0,
                commands: 2
            }
        );
        let commands: Vec<Command> = command_rx.try_iter().collect();
        assert_eq!(commands, vec![Command::SetActiveDigit(Digit::Three); 2]);
    }

    #[test]
    fn latest_policy_drops_backlog() {
        let (frame_tx, frame_rx) = unbounded();
        let (command_tx, _command_rx) = unbounded();

        for _ in 0..4 {
            frame_tx
                .send(TrackerResults::single(observation(THREE, (0.5, 0.5))))
                .unwrap();
        }
        drop(frame_tx);

        let summary = start_engine_worker(
            GestureConfig::default(),
            frame_rx,
            command_tx,
            FramePolicy::Latest,
        )
        .join()
        .unwrap();

        // Everything was queued before the worker started.
        assert_eq!(summary.frames, 1);
        assert_eq!(summary.dropped, 3);
        assert_eq!(summary.commands, 0);
    }
}
