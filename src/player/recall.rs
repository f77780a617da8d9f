//! Perfect-memory strategy
//!
//! Remembers every face it has flipped and cashes in known pairs before
//! probing unseen tiles.

use super::Strategy;
use rustc_hash::FxHashMap;

/// Strategy with perfect recall of every tile it has seen
///
/// Each turn: if two hidden tiles are already known to share a face, guess
/// them. Otherwise flip a tile that has not been seen yet; if its face has a
/// known hidden partner, guess that partner, else probe a second unseen
/// tile. Every non-matching turn therefore adds at least one face to memory,
/// so the strategy always clears a board within a small multiple of its
/// length.
#[derive(Debug, Default)]
pub struct RecallStrategy {
    seen: FxHashMap<usize, (u8, u8)>,
}

impl RecallStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Two distinct hidden indices already known to share a face
    fn known_pair(&self, hidden: &[usize]) -> Option<(usize, usize)> {
        let mut first_by_face: FxHashMap<(u8, u8), usize> = FxHashMap::default();

        for &index in hidden {
            if let Some(&face) = self.seen.get(&index) {
                if let Some(&partner) = first_by_face.get(&face) {
                    return Some((partner, index));
                }
                first_by_face.insert(face, index);
            }
        }

        None
    }

    /// A hidden index whose face has not been flipped yet
    fn unseen(&self, hidden: &[usize], skip: Option<usize>) -> Option<usize> {
        hidden
            .iter()
            .copied()
            .filter(|&index| Some(index) != skip)
            .find(|index| !self.seen.contains_key(index))
    }
}

impl Strategy for RecallStrategy {
    fn first_pick(&mut self, hidden: &[usize]) -> Option<usize> {
        if let Some((first, _)) = self.known_pair(hidden) {
            return Some(first);
        }

        self.unseen(hidden, None).or_else(|| hidden.first().copied())
    }

    fn second_pick(&mut self, first: usize, face: (u8, u8), hidden: &[usize]) -> Option<usize> {
        // A known hidden partner with the same face wins the turn
        let partner = hidden
            .iter()
            .copied()
            .filter(|&index| index != first)
            .find(|index| self.seen.get(index) == Some(&face));

        if partner.is_some() {
            return partner;
        }

        // Otherwise probe a tile not flipped before
        self.unseen(hidden, Some(first))
            .or_else(|| hidden.iter().copied().find(|&index| index != first))
    }

    fn remember(&mut self, index: usize, face: (u8, u8)) {
        self.seen.insert(index, face);
    }

    fn reset(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probes_unseen_tiles_with_empty_memory() {
        let hidden = vec![0, 1, 2, 3];
        let mut strategy = RecallStrategy::new();

        let first = strategy.first_pick(&hidden).unwrap();
        assert!(hidden.contains(&first));

        strategy.remember(first, (1, 2));
        let second = strategy.second_pick(first, (1, 2), &hidden).unwrap();
        assert_ne!(second, first);
        assert!(hidden.contains(&second));
    }

    #[test]
    fn cashes_in_a_known_pair() {
        let hidden = vec![0, 1, 2, 3, 4, 5];
        let mut strategy = RecallStrategy::new();
        strategy.remember(1, (2, 2));
        strategy.remember(4, (2, 2));
        strategy.remember(2, (1, 3));

        let first = strategy.first_pick(&hidden).unwrap();
        assert!(first == 1 || first == 4);

        let second = strategy.second_pick(first, (2, 2), &hidden).unwrap();
        assert!(second == 1 || second == 4);
        assert_ne!(second, first);
    }

    #[test]
    fn second_pick_finds_remembered_partner() {
        let hidden = vec![0, 1, 2, 3];
        let mut strategy = RecallStrategy::new();
        strategy.remember(3, (1, 1));

        // Flipping an unseen tile that turns out to match the remembered one
        strategy.remember(0, (1, 1));
        assert_eq!(strategy.second_pick(0, (1, 1), &hidden), Some(3));
    }

    #[test]
    fn ignores_memory_of_tiles_no_longer_hidden() {
        let mut strategy = RecallStrategy::new();
        strategy.remember(0, (1, 1));
        strategy.remember(5, (1, 1));

        // Both (1,1) tiles were matched and left the hidden set
        let hidden = vec![1, 2, 3, 4];
        let first = strategy.first_pick(&hidden).unwrap();
        assert!(hidden.contains(&first));
    }

    #[test]
    fn reset_clears_memory() {
        let hidden = vec![0, 1];
        let mut strategy = RecallStrategy::new();
        strategy.remember(0, (1, 1));
        strategy.remember(1, (1, 1));
        strategy.reset();

        // No known pair left; falls back to probing
        let first = strategy.first_pick(&hidden).unwrap();
        let second = strategy.second_pick(first, (1, 1), &hidden).unwrap();
        assert_ne!(first, second);
    }
}
