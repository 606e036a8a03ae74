//! Squad battle simulator.
//!
//! Loads campaign content, fights stages with the auto-battle policy and
//! prints the battle log.
//!
//! # Examples
//!
//! ```bash
//! # Fight the first stage with a fixed seed
//! cargo run -p squad-sim -- --seed 42 battle --stage 1
//!
//! # Compare the squad against every stage
//! SQUAD_DATA_DIR=./my-data cargo run -p squad-sim -- stages
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use squad_content::{ContentFactory, GameContent};

use commands::{Battle, Squad, Stages};
use config::SimConfig;

/// Turn-based squad battle simulator
#[derive(Parser)]
#[command(name = "squad-sim")]
#[command(about = "Simulate squad battles against the campaign", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides SQUAD_DATA_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Battle seed (overrides SQUAD_SEED)
    #[arg(short, long, global = true, value_name = "SEED")]
    seed: Option<u64>,

    /// Turn limit before the squad concedes (overrides SQUAD_MAX_TURNS)
    #[arg(long, global = true, value_name = "TURNS")]
    max_turns: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Fight one campaign stage with the auto-battle policy
    Battle(Battle),

    /// List campaign stages with a difficulty hint for the current squad
    Stages(Stages),

    /// Show resolved stats and combat power of the squad
    Squad(Squad),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = SimConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(turns) = cli.max_turns {
        config.max_turns = turns.max(1);
    }

    let result = run(cli.command, &config);
    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}

fn run(command: Command, config: &SimConfig) -> Result<()> {
    let content = load_content(config)?;

    match command {
        Command::Battle(cmd) => cmd.execute(config, content),
        Command::Stages(cmd) => cmd.execute(&content),
        Command::Squad(cmd) => cmd.execute(&content),
    }
}

fn load_content(config: &SimConfig) -> Result<GameContent> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir).load_all(),
        None => ContentFactory::bundled(),
    }
}
