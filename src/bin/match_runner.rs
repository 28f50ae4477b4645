//! Headless Match Runner
//!
//! Plays a match with a seeded autopilot and prints a JSON or text report.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use lane_battle::core::config::MatchConfig;
use lane_battle::core::error::Result;
use lane_battle::lane::{MatchState, MatchStats};
use lane_battle::presentation::{
    Autopilot, AutopilotProfile, PresentationSink, RecordingSink,
};

/// Headless Match Runner - autopilot vs the hostile spawn timer
#[derive(Parser, Debug)]
#[command(name = "match_runner")]
#[command(about = "Run a lane battle with a scripted player and report the result")]
struct Args {
    /// TOML file overriding the default match tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum ticks before giving up (10 minutes at 60 ticks/s)
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// Per-tick chance of requesting a friendly unit
    #[arg(long, default_value_t = 0.05)]
    spawn_chance: f64,

    /// Per-tick chance of firing a projectile
    #[arg(long, default_value_t = 0.01)]
    fire_chance: f64,

    /// Per-tick chance of attempting an economy level-up
    #[arg(long, default_value_t = 0.005)]
    level_up_chance: f64,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Log every match event to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct MatchReport {
    outcome: String,
    ticks: u64,
    friendly_base_health: i32,
    hostile_base_health: i32,
    economy_level: u32,
    balance: u32,
    stats: MatchStats,
    events_logged: usize,
    /// Events of the last tick that produced any
    final_events: Vec<String>,
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "lane_battle=debug"
    } else {
        "lane_battle=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    let profile = AutopilotProfile::new(args.spawn_chance, args.fire_chance, args.level_up_chance);
    let mut sink = RecordingSink::with_autopilot(Autopilot::with_seed(profile, seed));
    let mut state = MatchState::new(config)?;

    let mut events_logged = 0;
    let mut final_events = Vec::new();
    while !state.is_finished() && state.tick < args.max_ticks {
        let log = state.run_tick(&mut sink)?;
        sink.present()?;

        events_logged += log.len();
        if !log.is_empty() {
            final_events = log.iter().map(|e| e.description.clone()).collect();
        }
    }

    if !state.is_finished() {
        tracing::warn!("Match still undecided after {} ticks", state.tick);
    }

    let report = MatchReport {
        outcome: format!("{:?}", state.outcome),
        ticks: state.tick,
        friendly_base_health: state.friendly_base.health,
        hostile_base_health: state.hostile_base.health,
        economy_level: state.economy.level(),
        balance: state.economy.balance(),
        stats: state.stats.clone(),
        events_logged,
        final_events,
        seed,
    };

    match args.format.as_str() {
        "text" => {
            println!("Match Result");
            println!("============");
            println!("Outcome: {}", report.outcome);
            println!("Ticks: {}", report.ticks);
            println!("Friendly base: {}", report.friendly_base_health);
            println!("Hostile base: {}", report.hostile_base_health);
            println!("Economy: level {}, balance {}", report.economy_level, report.balance);
            println!(
                "Units: {} deployed, {} spawned against, {} kills, {} losses",
                report.stats.friendlies_spawned,
                report.stats.hostiles_spawned,
                report.stats.kills,
                report.stats.losses
            );
            println!("Events: {}", report.events_logged);
            for line in &report.final_events {
                println!("  {}", line);
            }
            println!("Seed: {}", report.seed);
        }
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        other => {
            tracing::warn!("Unknown format '{}', defaulting to json", other);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
