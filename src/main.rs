//! Venture CLI - Command-line interface for playing Venture games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use venture::session::GameConfig;

/// Venture - A deterministic startup-economy board game
#[derive(Parser, Debug)]
#[command(name = "venture")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive game on the console
    Play {
        /// Players as Name:Color pairs (default: Alice:Red Bob:Blue Charlie:Green)
        players: Vec<String>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of areas on the map
        #[arg(long, default_value = "7")]
        map_size: u16,

        /// Starting balance for every player
        #[arg(long, default_value = "1000")]
        balance: u32,

        /// Total points that end the game
        #[arg(long, default_value = "50")]
        threshold: u32,

        /// Maximum business level
        #[arg(long, default_value = "5")]
        max_level: u8,

        /// Output format for the final summary: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress board and standings redraws
        #[arg(short, long)]
        quiet: bool,
    },

    /// Draw repeatedly from the opportunity deck and report frequencies
    Sample {
        /// Number of hands to draw
        #[arg(short, long, default_value = "1000")]
        draws: u64,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            players,
            seed,
            map_size,
            balance,
            threshold,
            max_level,
            format,
            quiet,
        } => {
            let config = GameConfig {
                map_size,
                starting_balance: balance,
                score_threshold: threshold,
                max_level,
            };
            cli::play::execute(&players, seed, config, format, quiet)
        }

        Commands::Sample { draws, seed } => cli::sample::execute(draws, seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
