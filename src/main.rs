//! Rapport - Interactive Console
//!
//! Feed social acts to an agent by hand and watch its emotion, relationship
//! and style evolve. Time is simulated: it only advances with `wait`.

use clap::Parser;
use rapport::agent::{Agent, TracingActionSink};
use rapport::bridge::DecisionExporter;
use rapport::core::config::AgentConfig;
use rapport::core::error::Result;
use rapport::core::types::{SimTime, SourceId};
use rapport::perception::event::{PerceptionEvent, PerceptionEventType};

use std::io::{self, Write};
use std::path::PathBuf;

/// Rapport console - drive a social agent from the keyboard
#[derive(Parser, Debug)]
#[command(name = "rapport")]
#[command(about = "Interactive console for the rapport agent core")]
struct Args {
    /// TOML agent config (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the style learner's exploration
    #[arg(long)]
    seed: Option<u64>,

    /// Entity the typed events come from
    #[arg(long, default_value = "User")]
    entity: String,
}

const DEFAULT_INTENSITY: f32 = 0.6;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rapport=info".into()),
        )
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
    let mut now: SimTime = 0.0;
    let mut agent = Agent::new(&config, now)?;
    let mut sink = TracingActionSink;
    let exporter = DecisionExporter::new();
    let mut turn: i64 = 0;

    print_help();

    loop {
        print!("[t={:.1}] > ", now);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();

        match command {
            "quit" | "q" => break,
            "help" | "h" => print_help(),
            "tick" | "t" => {
                let report = agent.tick(now, &mut sink);
                print_reflection(report.reflection.as_ref());
            }
            "wait" | "w" => {
                let Some(seconds) = arg.and_then(|a| a.parse::<f64>().ok()).filter(|s| *s >= 0.0)
                else {
                    println!("usage: wait <seconds>");
                    continue;
                };
                now += seconds;
                let report = agent.tick(now, &mut sink);
                print_reflection(report.reflection.as_ref());
            }
            "reflect" | "r" => {
                let report = agent.reflect_now(now);
                print_reflection(Some(&report));
            }
            "status" | "s" => display_status(&agent, &entity),
            "export" | "x" => {
                turn += 1;
                let packet = exporter.build(turn, &agent, &entity);
                println!("{}", serde_json::to_string_pretty(&packet)?);
            }
            "telemetry" => match arg {
                Some("dump") => agent.telemetry().dump(),
                _ => println!("{}", agent.telemetry().to_json()?),
            },
            other => match other.parse::<PerceptionEventType>() {
                Ok(event_type) => {
                    let intensity = match arg.map(str::parse::<f32>) {
                        Some(Ok(v)) => v,
                        Some(Err(_)) => {
                            println!("Intensity must be a number in 0..1");
                            continue;
                        }
                        None => DEFAULT_INTENSITY,
                    };
                    agent.push_event(PerceptionEvent::new(
                        event_type,
                        entity.clone(),
                        intensity,
                        "console",
                        now,
                    ));
                    let report = agent.tick(now, &mut sink);
                    for outcome in &report.outcomes {
                        println!(
                            "{} -> {} ({:?}, proposed {}), violation {:.2}",
                            outcome.event_type,
                            outcome.action,
                            outcome.verdict,
                            outcome.proposed_style,
                            outcome.violation_score
                        );
                    }
                    print_reflection(report.reflection.as_ref());
                }
                Err(e) => println!("{} (type `help` for commands)", e),
            },
        }
    }

    tracing::info!("Console closed after {:.1}s of simulated time", now);
    Ok(())
}

fn print_help() {
    println!("\n=== RAPPORT ===");
    println!("Commands:");
    println!("  <event> [intensity]  - Perceive an event, e.g. `praise 0.8`, `insult`");
    println!("  wait <sec> / w       - Advance the clock and tick");
    println!("  tick / t             - Tick without advancing the clock");
    println!("  reflect / r          - Reflect immediately");
    println!("  status / s           - Show agent state");
    println!("  export / x           - Print a decision packet");
    println!("  telemetry [dump]     - Print the telemetry trail as JSON, or log it");
    println!("  quit / q             - Exit");
    let names: Vec<&str> = PerceptionEventType::ALL.iter().map(|t| t.name()).collect();
    println!("Events: {}", names.join(", "));
    println!();
}

fn display_status(agent: &Agent, entity: &SourceId) {
    let rel = agent.get_relationship(entity);
    let emo = agent.get_emotional_state();
    let motivation = agent.motivation();

    println!("\n--- {} ---", entity);
    println!(
        "Relationship: trust {:.3}, anxiety {:.3}, stability {:.3}, violation {:.3}",
        rel.trust, rel.anxiety, rel.stability, rel.violation
    );
    println!("Emotion: valence {:.3}, arousal {:.3}", emo.valence, emo.arousal);
    println!(
        "Motivation: socialize {:.3}, avoid {:.3}, help {:.3} (dominant {:?})",
        motivation.socialize,
        motivation.avoid,
        motivation.help,
        motivation.dominant().0
    );
    println!(
        "Style: {}, last violation {:.3}, memories {}, next reflection at {:.1}",
        agent.current_style(),
        agent.last_violation_score(),
        agent.memory().len(),
        agent.next_reflection_at()
    );
    println!();
}

fn print_reflection(report: Option<&rapport::agent::ReflectionReport>) {
    if let Some(report) = report {
        for (id, score) in &report.scores {
            println!("Reflected on {}: {:+.3}", id, score);
        }
        println!(
            "Motivation now socialize {:.3}, avoid {:.3}, help {:.3}",
            report.motivation.socialize, report.motivation.avoid, report.motivation.help
        );
    }
}
