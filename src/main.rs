use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow, bail};
use crossbeam_channel::unbounded;
use gesture_commands::{
    GestureConfig,
    pipeline::{FramePolicy, start_engine_worker},
    replay,
};

struct Args {
    config: Option<PathBuf>,
    trace: Option<PathBuf>,
    policy: FramePolicy,
}

fn usage() -> &'static str {
    "usage: gesture-commands [--config <file.json>] [--latest] [trace.jsonl]\n\
     Reads a landmark trace (stdin when no path is given) and prints the emitted commands.\n\
     --latest  drop frames that queue up while the engine is busy, as with a live camera.\n\
     \x20         A trace is queued all at once, so nearly every frame is dropped."
}

fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Option<Args>> {
    let mut args = Args {
        config: None,
        trace: None,
        policy: FramePolicy::Sequential,
    };

    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("missing path after --config"))?;
                args.config = Some(PathBuf::from(path));
            }
            "--latest" => args.policy = FramePolicy::Latest,
            "-h" | "--help" => return Ok(None),
            value if value.starts_with('-') => bail!("unknown argument: {value}\n{}", usage()),
            value => {
                if args.trace.is_some() {
                    bail!("multiple trace paths provided");
                }
                args.trace = Some(PathBuf::from(value));
            }
        }
    }

    Ok(Some(args))
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{}", usage());
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => GestureConfig::load(path)?,
        None => GestureConfig::default(),
    };

    let frames = match &args.trace {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open trace {}", path.display()))?;
            replay::parse_trace(BufReader::new(file))?
        }
        None => replay::parse_trace(io::stdin().lock())?,
    };

    if args.policy == FramePolicy::Latest {
        log::warn!("--latest on a replayed trace keeps only the frames the engine is free for");
    }

    let (frame_tx, frame_rx) = unbounded();
    let (command_tx, command_rx) = unbounded();
    let worker = start_engine_worker(config, frame_rx, command_tx, args.policy);

    for frame in frames {
        if frame_tx.send(frame).is_err() {
            log::warn!("gesture engine stopped early");
            break;
        }
    }
    drop(frame_tx);

    for command in command_rx.iter() {
        println!("{command}");
    }

    let summary = worker
        .join()
        .map_err(|_| anyhow!("gesture engine thread panicked"))?;
    println!(
        "{} frames, {} without a hand, {} commands",
        summary.frames, summary.skipped, summary.commands
    );

    Ok(())
}
