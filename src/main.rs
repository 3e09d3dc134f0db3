//! Numberdle - CLI
//!
//! Digit-guessing game with TUI and line modes, plus tools for checking guesses,
//! previewing hints and simulating games.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use numberdle::{
    commands::{run_check, run_simple, run_simulation},
    core::{Digits, sanitize},
    output::{
        print_check_result, print_knowledge, print_round, print_scores, print_simulation_result,
    },
    rules::{Mode, hint_texts},
    scores::{JsonFileStore, ScoreStore, default_scores_path},
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "numberdle",
    about = "Guess the secret 5-digit number in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: normal (default), hard, ultra
    #[arg(short, long, global = true, default_value = "normal")]
    mode: Mode,

    /// Score file (default: <data dir>/numberdle/scores.json)
    #[arg(short, long, global = true, env = "NUMBERDLE_SCORES")]
    scores: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Check whether a guess is allowed after the given rounds
    Check {
        /// Candidate guess
        candidate: String,

        /// Earlier round as GUESS:FEEDBACK, e.g. 12345:GY--- (repeatable)
        #[arg(short, long = "round")]
        rounds: Vec<String>,
    },

    /// Show the two hints for a guess
    Hints {
        /// Secret number
        secret: String,

        /// Guess played
        guess: String,

        /// 0-based round index
        #[arg(short, long, default_value = "0")]
        round: u32,
    },

    /// Show the last result and the last-10 average
    Stats,

    /// Play many games automatically and report statistics
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "200")]
        games: usize,

        /// Seed for secrets and solver offsets
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Install the stderr subscriber
///
/// The TUI owns the terminal, so it only logs when `RUST_LOG` asks for it.
fn init_tracing(verbose: bool, tui: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().ok();

    if tui && env_filter.is_none() {
        return;
    }

    tracing_subscriber::registry()
        .with(env_filter.unwrap_or_else(|| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn parse_digits(text: &str) -> Result<Digits> {
    Digits::new(&sanitize(text)).with_context(|| format!("invalid number '{text}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(cli.verbose, matches!(command, Commands::Play));

    let scores_path = cli.scores.unwrap_or_else(default_scores_path);
    let mut store = JsonFileStore::new(scores_path);

    match command {
        Commands::Play => run_play_command(cli.mode, store),
        Commands::Simple => run_simple(cli.mode, &mut store).context("line mode failed"),
        Commands::Check { candidate, rounds } => run_check_command(&candidate, &rounds, cli.mode),
        Commands::Hints {
            secret,
            guess,
            round,
        } => run_hints_command(&secret, &guess, round),
        Commands::Stats => {
            print_scores(&store.record());
            Ok(())
        }
        Commands::Simulate { games, seed } => {
            println!("Simulating {games} games in {} mode (seed {seed})...", cli.mode);
            let result = run_simulation(cli.mode, games, seed, true);
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_check_command(candidate: &str, rounds: &[String], mode: Mode) -> Result<()> {
    let report = run_check(candidate, rounds, mode).map_err(|e| anyhow!(e))?;

    for (i, round) in report.rounds.iter().enumerate() {
        print_round(i, round, None);
    }
    print_knowledge(&report.knowledge, mode);
    print_check_result(
        &report.candidate.to_string(),
        report.result,
        report.remaining,
    );
    Ok(())
}

fn run_hints_command(secret: &str, guess: &str, round: u32) -> Result<()> {
    let secret = parse_digits(secret)?;
    let guess = parse_digits(guess)?;

    println!("Hints for {guess} (round {}):", round + 1);
    for text in hint_texts(&secret, &guess, round) {
        println!("  💡 {text}");
    }
    Ok(())
}

fn run_play_command(mode: Mode, store: JsonFileStore) -> Result<()> {
    use numberdle::interactive::{App, run_tui};

    let app = App::new(mode, Box::new(store));
    run_tui(app)
}
