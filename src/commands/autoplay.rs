//! Autoplay command
//!
//! Runs one automated game and records every turn.

use crate::core::{Board, BoardError};
use crate::player::{AutoPlayer, Strategy, TurnRecord};

/// Configuration for an automated game
pub struct AutoplayConfig {
    pub max: u8,
    /// Seed for a reproducible board layout; `None` deals a random board
    pub seed: Option<u64>,
    pub turn_limit: usize,
}

impl AutoplayConfig {
    #[must_use]
    pub const fn new(max: u8) -> Self {
        Self {
            max,
            seed: None,
            turn_limit: 1_000,
        }
    }
}

/// Result of an automated game
pub struct AutoplayResult {
    pub board_len: usize,
    pub pairs: usize,
    pub turns: Vec<TurnRecord>,
    pub completed: bool,
}

impl AutoplayResult {
    /// Number of guesses made
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.turns.len()
    }

    /// Number of successful guesses
    #[must_use]
    pub fn matches(&self) -> usize {
        self.turns.iter().filter(|turn| turn.matched).count()
    }
}

/// Run one automated game with the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The configured max pip value is zero
/// - The strategy picks an index outside the board
pub fn run_autoplay<S: Strategy>(
    config: &AutoplayConfig,
    strategy: S,
) -> Result<AutoplayResult, BoardError> {
    let mut board = match config.seed {
        Some(seed) => Board::with_seed(config.max, seed)?,
        None => Board::new(config.max)?,
    };

    let mut player = AutoPlayer::new(strategy);
    let record = player.play(&mut board, config.turn_limit)?;

    Ok(AutoplayResult {
        board_len: board.len(),
        pairs: board.len() / 2,
        turns: record.turns,
        completed: record.completed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{RandomStrategy, RecallStrategy};

    #[test]
    fn autoplay_recall_clears_a_seeded_board() {
        let mut config = AutoplayConfig::new(3);
        config.seed = Some(42);

        let result = run_autoplay(&config, RecallStrategy::new()).unwrap();

        assert!(result.completed);
        assert_eq!(result.board_len, 12);
        assert_eq!(result.pairs, 6);
        assert_eq!(result.matches(), result.pairs);
        assert!(result.attempts() >= result.pairs);
    }

    #[test]
    fn autoplay_invalid_max_returns_error() {
        let config = AutoplayConfig::new(0);
        let result = run_autoplay(&config, RecallStrategy::new());

        assert!(result.is_err());
    }

    #[test]
    fn autoplay_respects_the_turn_limit() {
        let mut config = AutoplayConfig::new(5);
        config.seed = Some(7);
        config.turn_limit = 2;

        let result = run_autoplay(&config, RandomStrategy).unwrap();

        assert!(result.attempts() <= 2);
        assert!(!result.completed);
    }

    #[test]
    fn autoplay_same_seed_same_turn_sequence() {
        let mut config = AutoplayConfig::new(3);
        config.seed = Some(123);

        let a = run_autoplay(&config, RecallStrategy::new()).unwrap();
        let b = run_autoplay(&config, RecallStrategy::new()).unwrap();

        let picks_a: Vec<(usize, usize)> = a.turns.iter().map(|t| (t.first, t.second)).collect();
        let picks_b: Vec<(usize, usize)> = b.turns.iter().map(|t| (t.first, t.second)).collect();
        assert_eq!(picks_a, picks_b);
    }
}
