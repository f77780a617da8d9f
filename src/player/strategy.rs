//! Tile selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::RecallStrategy;

/// A strategy for choosing which two hidden tiles to flip each turn
///
/// The engine flips the first pick face-up before asking for the second, so
/// `second_pick` always sees the first tile's face — the same information a
/// human player has mid-turn.
pub trait Strategy {
    /// Choose the first tile to flip from the hidden indices
    ///
    /// Returns `None` if no pick can be made (empty hidden set).
    fn first_pick(&mut self, hidden: &[usize]) -> Option<usize>;

    /// Choose the second tile after seeing the first tile's face
    ///
    /// Must not return `first`; the board would let a self-guess trivially
    /// match, which defeats the game.
    fn second_pick(&mut self, first: usize, face: (u8, u8), hidden: &[usize]) -> Option<usize>;

    /// Record a flipped tile's face for later turns
    fn remember(&mut self, index: usize, face: (u8, u8));

    /// Clear per-game state before a new board
    fn reset(&mut self);
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Perfect memory of every face seen (default)
    Recall(RecallStrategy),
    /// Uniform random picks, no memory
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn first_pick(&mut self, hidden: &[usize]) -> Option<usize> {
        match self {
            Self::Recall(s) => s.first_pick(hidden),
            Self::Random(s) => s.first_pick(hidden),
        }
    }

    fn second_pick(&mut self, first: usize, face: (u8, u8), hidden: &[usize]) -> Option<usize> {
        match self {
            Self::Recall(s) => s.second_pick(first, face, hidden),
            Self::Random(s) => s.second_pick(first, face, hidden),
        }
    }

    fn remember(&mut self, index: usize, face: (u8, u8)) {
        match self {
            Self::Recall(s) => s.remember(index, face),
            Self::Random(s) => s.remember(index, face),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Recall(s) => s.reset(),
            Self::Random(s) => s.reset(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "recall", "random". Defaults to recall if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Recall(RecallStrategy::new()),
        }
    }
}

/// Random strategy
///
/// Flips two uniformly random hidden tiles and remembers nothing. Useful as
/// a baseline the recall strategy can be benchmarked against.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn first_pick(&mut self, hidden: &[usize]) -> Option<usize> {
        use rand::prelude::IndexedRandom;

        hidden.choose(&mut rand::rng()).copied()
    }

    fn second_pick(&mut self, first: usize, _face: (u8, u8), hidden: &[usize]) -> Option<usize> {
        use rand::prelude::IndexedRandom;

        let others: Vec<usize> = hidden.iter().copied().filter(|&i| i != first).collect();
        others.choose(&mut rand::rng()).copied()
    }

    fn remember(&mut self, _index: usize, _face: (u8, u8)) {}

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_first_pick_comes_from_hidden() {
        let hidden = vec![2, 5, 9];
        let mut strategy = RandomStrategy;

        for _ in 0..20 {
            let pick = strategy.first_pick(&hidden).unwrap();
            assert!(hidden.contains(&pick));
        }
    }

    #[test]
    fn random_second_pick_never_repeats_first() {
        let hidden = vec![2, 5, 9];
        let mut strategy = RandomStrategy;

        for _ in 0..20 {
            let pick = strategy.second_pick(5, (1, 1), &hidden).unwrap();
            assert!(pick == 2 || pick == 9);
        }
    }

    #[test]
    fn random_second_pick_empty_when_alone() {
        let mut strategy = RandomStrategy;
        assert!(strategy.second_pick(4, (1, 1), &[4]).is_none());
    }

    #[test]
    fn random_first_pick_empty_hidden() {
        let mut strategy = RandomStrategy;
        assert!(strategy.first_pick(&[]).is_none());
    }

    #[test]
    fn from_name_selects_strategy() {
        assert!(matches!(
            StrategyType::from_name("random"),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("recall"),
            StrategyType::Recall(_)
        ));
        // Unrecognized names fall back to recall
        assert!(matches!(
            StrategyType::from_name("unknown"),
            StrategyType::Recall(_)
        ));
    }
}
