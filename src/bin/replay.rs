//! Headless Replay
//!
//! Feeds a JSONL file of NLU packets through an agent, one packet per turn,
//! and prints one JSON line per turn: the decision packet plus what the agent
//! did with each event.

use clap::Parser;
use rapport::agent::{Agent, RecordingActionSink, StepOutcome};
use rapport::bridge::{DecisionExporter, DecisionPacket, EventMapper, NluPacket};
use rapport::core::config::AgentConfig;
use rapport::core::error::Result;
use rapport::core::types::{SimTime, SourceId};
use serde::Serialize;

use std::fs;
use std::path::PathBuf;

/// Headless Replay - run recorded NLU packets through the agent
#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Replay NLU packets (JSONL) and print decision packets")]
struct Args {
    /// TOML agent config (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the style learner's exploration
    #[arg(long)]
    seed: Option<u64>,

    /// JSONL file, one NLU packet per line
    #[arg(long)]
    input: PathBuf,

    /// Simulated seconds between turns
    #[arg(long, default_value_t = 5.0)]
    dt: f64,

    /// Entity the packets come from
    #[arg(long, default_value = "User")]
    entity: String,
}

/// JSON output line
#[derive(Serialize)]
struct TurnResult<'a> {
    time: SimTime,
    decision: &'a DecisionPacket,
    outcomes: &'a [StepOutcome],
    reflected: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rapport=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AgentConfig::load(path)?,
        None => AgentConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.rl_seed = seed;
    }

    let entity = SourceId::new(args.entity.clone());
    let mut agent = Agent::new(&config, 0.0)?;
    let mut sink = RecordingActionSink::default();
    let mapper = EventMapper::new();
    let exporter = DecisionExporter::new();

    let content = fs::read_to_string(&args.input)?;
    let mut now: SimTime = 0.0;
    let mut turns = 0usize;

    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let packet = match NluPacket::from_json(line) {
            Ok(packet) => packet,
            Err(e) => {
                tracing::warn!("Skipping line {}: {}", line_no + 1, e);
                continue;
            }
        };

        now += args.dt;
        for event in mapper.map(&packet, &entity, now) {
            agent.push_event(event);
        }
        let report = agent.tick(now, &mut sink);

        let decision = exporter.build(packet.turn_id, &agent, &entity);
        let result = TurnResult {
            time: now,
            decision: &decision,
            outcomes: &report.outcomes,
            reflected: report.reflection.is_some(),
        };
        println!("{}", serde_json::to_string(&result)?);
        turns += 1;
    }

    tracing::info!("Replayed {} turn(s), {} action(s) executed", turns, sink.executed.len());
    Ok(())
}
