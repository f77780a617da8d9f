//! Benchmark command
//!
//! Measures automated-strategy performance across many games.

use crate::core::{Board, BoardError};
use crate::player::{AutoPlayer, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Turns allowed per game before giving up; only the random baseline on a
/// large board ever gets near this
const TURN_LIMIT: usize = 10_000;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub games: usize,
    pub board_len: usize,
    pub completed: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run `games` automated games of the named strategy on fresh max-`max` boards
///
/// Games are independent, so they run in parallel.
///
/// # Errors
/// Returns `BoardError::InvalidMax` if `max` is zero.
///
/// # Panics
/// May panic if the progress-bar template fails to parse; the template is a
/// constant, so this does not happen at runtime.
pub fn run_benchmark(
    strategy_name: &str,
    max: u8,
    games: usize,
) -> Result<BenchmarkResult, BoardError> {
    // Fail fast on a bad max before spawning workers
    let board_len = Board::with_seed(max, 0)?.len();

    let pb = ProgressBar::new(games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Result<Vec<(usize, bool)>, BoardError> = (0..games)
        .into_par_iter()
        .map(|_| {
            let mut board = Board::new(max)?;
            let mut player = AutoPlayer::new(StrategyType::from_name(strategy_name));
            let record = player.play(&mut board, TURN_LIMIT)?;
            pb.inc(1);
            Ok((record.attempts(), record.completed))
        })
        .collect();
    let outcomes = outcomes?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut completed = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for &(attempts, done) in &outcomes {
        total_attempts += attempts;
        min_attempts = min_attempts.min(attempts);
        max_attempts = max_attempts.max(attempts);
        if done {
            completed += 1;
        }
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    Ok(BenchmarkResult {
        games,
        board_len,
        completed,
        total_attempts,
        average_attempts: total_attempts as f64 / games as f64,
        min_attempts,
        max_attempts,
        distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark("recall", 2, 10).unwrap();

        assert_eq!(result.games, 10);
        assert_eq!(result.board_len, 6);
        assert_eq!(result.completed, 10);
        // A max-2 board has three pairs, so three attempts is the floor
        assert!(result.min_attempts >= 3);
        assert!(result.average_attempts >= result.min_attempts as f64);
        assert!(result.average_attempts <= result.max_attempts as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark("recall", 2, 10).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.games);
    }

    #[test]
    fn benchmark_invalid_max_returns_error() {
        assert!(run_benchmark("recall", 0, 5).is_err());
    }

    #[test]
    fn benchmark_trivial_board_is_one_attempt() {
        // A max-1 board holds only the two (1,1) tiles; any strategy
        // matches them on its first guess
        let result = run_benchmark("random", 1, 5).unwrap();

        assert_eq!(result.completed, 5);
        assert_eq!(result.min_attempts, 1);
        assert_eq!(result.max_attempts, 1);
        assert_eq!(result.total_attempts, 5);
    }
}
