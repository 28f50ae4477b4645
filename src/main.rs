//! Lane Battle - Entry Point
//!
//! Runs an interactive match in the terminal. The terminal belongs to the
//! renderer while the match runs, so logs go to a file.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lane_battle::core::config::MatchConfig;
use lane_battle::core::error::Result;
use lane_battle::lane::{MatchOutcome, MatchState};
use lane_battle::presentation::TerminalSink;

#[derive(Parser, Debug)]
#[command(name = "lane-battle")]
#[command(about = "Defend your base, push down the lane, level up your economy")]
struct Args {
    /// TOML file overriding the default match tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "lane_battle.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_file)?;

    tracing::info!("Lane Battle starting...");

    let config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    let mut state = MatchState::new(config)?;

    // The sink restores the terminal when dropped, before we print.
    let outcome = {
        let mut sink = TerminalSink::new(state.config.playfield.size())?;
        state.run(&mut sink)?
    };

    let verdict = match outcome {
        MatchOutcome::Victory => "Victory! The hostile base has fallen.",
        MatchOutcome::Defeat => "Defeat. Your base has fallen.",
        MatchOutcome::Draw => "Draw. Both bases fell together.",
        MatchOutcome::Aborted | MatchOutcome::Undecided => "Match abandoned.",
    };
    println!("\n=== LANE BATTLE ===");
    println!("{}", verdict);
    println!(
        "Ticks: {}  |  Friendly base: {}  |  Hostile base: {}",
        state.tick, state.friendly_base.health, state.hostile_base.health
    );
    println!(
        "Units deployed: {}  |  Kills: {}  |  Losses: {}  |  Economy level: {}",
        state.stats.friendlies_spawned,
        state.stats.kills,
        state.stats.losses,
        state.economy.level()
    );

    tracing::info!("Lane Battle exiting with {:?}", outcome);
    Ok(())
}

fn init_tracing(log_file: &Path) -> Result<()> {
    let file = File::create(log_file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lane_battle=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
