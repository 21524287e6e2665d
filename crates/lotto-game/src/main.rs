//! Lotto — console entry point
//!
//! Usage:
//!   lotto                       - play with random tickets
//!   lotto --seed 42             - reproducible tickets
//!   lotto --config lotto.json   - load settings from a JSON file
//!   RUST_LOG=debug lotto        - step-by-step logs on stderr

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lotto_core::{RandomNumberGenerator, TicketMachine};
use lotto_game::{ConsoleInput, ConsoleOutput, GameConfig, GameExit, LottoGame};

#[derive(Parser)]
#[command(name = "lotto", about = "Buy lotto tickets, enter the draw, check your winnings")]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the ticket generator (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => GameConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    log::debug!("Config: {:?}", config);

    let input = ConsoleInput::stdin()
        .with_separator(config.separator)
        .with_replay_tokens(&config.confirm_token, &config.reject_token);
    let output = ConsoleOutput::stdout(&config.currency);
    let machine = TicketMachine::new(RandomNumberGenerator::new(config.seed));

    let mut game = LottoGame::new(input, output, machine, config);
    let GameExit::Finished { rounds } = game.run().context("Game aborted")?;
    log::info!("Exiting after {} rounds", rounds);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
