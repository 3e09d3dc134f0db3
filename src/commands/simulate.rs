//! Simulate command
//!
//! Plays many seeded games with the auto-player and collects statistics.

use crate::core::{Digits, MAX_VALUE};
use crate::game::GameStatus;
use crate::rules::Mode;
use crate::solver::{GameReport, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub mode: Mode,
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    pub stuck: usize,
    /// Mean tries over won games
    pub average_tries: Option<f64>,
    /// Tries -> number of games won in that many tries
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }
}

/// Secret and solver start offset for game `index`
fn game_setup(seed: u64, index: usize) -> (Digits, u32) {
    let mut rng = Pcg32::seed_from_u64(seed.wrapping_add(index as u64));
    let secret = Digits::random(&mut rng);
    let start = rng.random_range(0..=MAX_VALUE);
    (secret, start)
}

/// Play `games` games in parallel under `mode`
///
/// The same seed always produces the same games.
#[must_use]
pub fn run_simulation(
    mode: Mode,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(format!("{mode} mode"));
        pb
    } else {
        ProgressBar::hidden()
    };

    let reports: Vec<GameReport> = (0..games)
        .into_par_iter()
        .map(|index| {
            let (secret, offset) = game_setup(seed, index);
            let report = Solver::new(mode, offset).play(secret);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_and_clear();

    let mut won = 0;
    let mut lost = 0;
    let mut stuck = 0;
    let mut total_tries = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for report in &reports {
        if report.stuck {
            stuck += 1;
            debug!(secret = %report.secret, rounds = report.rounds.len(), "solver stuck");
            continue;
        }
        match report.status {
            GameStatus::Won { tries } => {
                won += 1;
                total_tries += tries;
                *distribution.entry(tries).or_insert(0) += 1;
            }
            _ => lost += 1,
        }
    }

    SimulationResult {
        mode,
        games,
        won,
        lost,
        stuck,
        average_tries: (won > 0).then(|| total_tries as f64 / won as f64),
        distribution,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ROUNDS;

    #[test]
    fn simulation_counts_add_up() {
        for mode in Mode::ALL {
            let result = run_simulation(mode, 8, 42, false);
            assert_eq!(result.games, 8);
            assert_eq!(result.won + result.lost + result.stuck, 8);

            let distribution_sum: usize = result.distribution.values().sum();
            assert_eq!(distribution_sum, result.won);
            for &tries in result.distribution.keys() {
                assert!((1..=MAX_ROUNDS).contains(&tries));
            }
        }
    }

    #[test]
    fn simulation_is_reproducible() {
        let a = run_simulation(Mode::Hard, 6, 7, false);
        let b = run_simulation(Mode::Hard, 6, 7, false);
        assert_eq!(a.won, b.won);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn hard_mode_never_gets_stuck() {
        let result = run_simulation(Mode::Hard, 10, 1, false);
        assert_eq!(result.stuck, 0);
    }

    #[test]
    fn empty_simulation() {
        let result = run_simulation(Mode::Normal, 0, 0, false);
        assert_eq!(result.games, 0);
        assert_eq!(result.average_tries, None);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn game_setup_is_seeded() {
        assert_eq!(game_setup(9, 3), game_setup(9, 3));
    }
}
