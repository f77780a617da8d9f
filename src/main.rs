//! Memory Lane - CLI
//!
//! Domino memory-matching game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use memory_lane::{
    commands::{AutoplayConfig, run_autoplay, run_benchmark, run_simple},
    interactive::{App, run_tui},
    output::{print_autoplay_result, print_benchmark_result},
    player::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "memory_lane",
    about = "Domino memory-matching game: flip two tiles per turn and clear the board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Largest pip value; the board holds max²+max tiles
    #[arg(short, long, global = true, default_value_t = 4)]
    max: u8,

    /// Strategy for automated play: recall (default) or random
    #[arg(short, long, global = true, default_value = "recall")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive play without TUI)
    Simple,

    /// Watch an automated player clear a board
    Autoplay {
        /// Seed the board layout for a reproducible run
        #[arg(short = 'S', long)]
        seed: Option<u64>,

        /// Show every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark automated strategies over many games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.max),
        Commands::Simple => run_simple(cli.max).map_err(|e| anyhow::anyhow!(e)),
        Commands::Autoplay { seed, verbose } => {
            run_autoplay_command(&cli.strategy, cli.max, seed, verbose)
        }
        Commands::Benchmark { count } => run_benchmark_command(&cli.strategy, cli.max, count),
    }
}

fn run_play_command(max: u8) -> Result<()> {
    let app = App::new(max)?;
    run_tui(app)
}

fn run_autoplay_command(
    strategy_name: &str,
    max: u8,
    seed: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let mut config = AutoplayConfig::new(max);
    config.seed = seed;

    let strategy = StrategyType::from_name(strategy_name);
    let result = run_autoplay(&config, strategy)?;

    print_autoplay_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, max: u8, count: usize) -> Result<()> {
    println!("Running {count} {strategy_name} games on max-{max} boards...");

    let result = run_benchmark(strategy_name, max, count)?;
    print_benchmark_result(&result);
    Ok(())
}
