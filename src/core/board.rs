//! Game board generation and the guess/reveal state machine
//!
//! A board is generated once from a maximum pip value: every unique unordered
//! domino pairing appears exactly twice, shuffled into a random face-down
//! layout. After construction the only mutation is revealing tiles through
//! successful guesses.

use super::Tile;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Error type for board construction and tile access
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The maximum pip value must be at least 1
    InvalidMax(u8),
    /// An index fell outside the board
    OutOfBounds { index: usize, len: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMax(max) => {
                write!(f, "Max pip value must be at least 1, got {max}")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "Index {index} is out of bounds for a board of {len} tiles")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// The memory game board: a fixed-size shuffled collection of Tiles
///
/// For a maximum pip value `max` the board holds `max² + max` tiles — the
/// `max(max+1)/2` unique unordered pairings, each duplicated once. The tile
/// sequence is fixed after construction; gameplay only flips individual
/// tiles' revealed flags.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<Tile>,
    max: u8,
}

impl Board {
    /// Create a shuffled board for the given maximum pip value
    ///
    /// # Errors
    /// Returns `BoardError::InvalidMax` if `max` is zero.
    ///
    /// # Examples
    /// ```
    /// use memory_lane::core::Board;
    ///
    /// let board = Board::new(3).unwrap();
    /// assert_eq!(board.len(), 12);
    ///
    /// assert!(Board::new(0).is_err());
    /// ```
    pub fn new(max: u8) -> Result<Self, BoardError> {
        Self::with_rng(max, &mut rand::rng())
    }

    /// Create a board with a reproducible layout
    ///
    /// The same `max` and `seed` always produce the same tile order.
    ///
    /// # Errors
    /// Returns `BoardError::InvalidMax` if `max` is zero.
    pub fn with_seed(max: u8, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(max, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a board shuffled by the supplied random source
    ///
    /// Generation enumerates pip pairs row-major, keeping only the pairs with
    /// `low <= high`, duplicates that list once, and materializes every pair
    /// through [`Tile::new`]. The final Fisher–Yates shuffle leaves no
    /// positional relationship to the enumeration order.
    ///
    /// # Errors
    /// Returns `BoardError::InvalidMax` if `max` is zero.
    pub fn with_rng<R: Rng + ?Sized>(max: u8, rng: &mut R) -> Result<Self, BoardError> {
        if max == 0 {
            return Err(BoardError::InvalidMax(max));
        }

        let unique_pairs = usize::from(max) * (usize::from(max) + 1) / 2;
        let mut faces = Vec::with_capacity(unique_pairs);
        for low in 1..=max {
            for high in low..=max {
                faces.push((low, high));
            }
        }

        // Each unique pairing appears exactly twice
        let mut tiles: Vec<Tile> = faces
            .iter()
            .chain(faces.iter())
            .map(|&(x, y)| Tile::new(x, y))
            .collect();

        tiles.shuffle(rng);

        Ok(Self { tiles, max })
    }

    /// Number of tiles on the board (`max² + max`)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True if the board holds no tiles
    ///
    /// Never true for a constructed board; provided for API completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The maximum pip value the board was built from
    #[inline]
    #[must_use]
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// The tile sequence in board order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles currently face-up
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_revealed()).count()
    }

    /// Indices of all face-down tiles, in board order
    #[must_use]
    pub fn hidden_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.is_revealed())
            .map(|(index, _)| index)
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<(), BoardError> {
        if index < self.tiles.len() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                index,
                len: self.tiles.len(),
            })
        }
    }

    /// Guess that the tiles at `i` and `k` match
    ///
    /// On a match both tiles become revealed and stay revealed; on a miss
    /// both tiles' revealed states are left untouched. Equality compares pip
    /// values only, so guessing an index against itself trivially matches and
    /// reveals that single tile.
    ///
    /// # Errors
    /// Returns `BoardError::OutOfBounds` if either index is outside the
    /// board.
    ///
    /// # Examples
    /// ```
    /// use memory_lane::core::Board;
    ///
    /// let mut board = Board::with_seed(2, 7).unwrap();
    /// let ones: Vec<usize> = (0..board.len())
    ///     .filter(|&i| board.tiles()[i].pips() == (1, 1))
    ///     .collect();
    ///
    /// assert!(board.guess(ones[0], ones[1]).unwrap());
    /// assert!(board.tiles()[ones[0]].is_revealed());
    /// ```
    pub fn guess(&mut self, i: usize, k: usize) -> Result<bool, BoardError> {
        self.check_index(i)?;
        self.check_index(k)?;

        if self.tiles[i] == self.tiles[k] {
            self.tiles[i].set_revealed(true);
            self.tiles[k].set_revealed(true);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Raw two-line view of the tiles at the given indices
    ///
    /// Line one holds each tile's `low` value bracketed, line two the `high`
    /// values. Revealed state is ignored — this exposes tile faces no matter
    /// their visibility, unlike [`Board::render`].
    ///
    /// # Errors
    /// Returns `BoardError::OutOfBounds` if any index is outside the board.
    ///
    /// # Examples
    /// ```
    /// use memory_lane::core::Board;
    ///
    /// let board = Board::with_seed(1, 1).unwrap();
    /// assert_eq!(board.peek(&[0]).unwrap(), "[1] \n[1] ");
    /// ```
    pub fn peek(&self, indexes: &[usize]) -> Result<String, BoardError> {
        let mut top = String::new();
        let mut bottom = String::new();

        for &index in indexes {
            self.check_index(index)?;
            let tile = &self.tiles[index];
            top.push_str(&format!("[{}] ", tile.low()));
            bottom.push_str(&format!("[{}] ", tile.high()));
        }

        Ok(format!("{top}\n{bottom}"))
    }

    /// True once every tile on the board is revealed
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.tiles.iter().all(Tile::is_revealed)
    }

    /// Full-board three-line view: index labels, low row, high row
    ///
    /// Revealed tiles show their pip values; hidden tiles show empty bracket
    /// placeholders. Columns align to 4-character cells.
    #[must_use]
    pub fn render(&self) -> String {
        let mut labels = String::new();
        let mut top = String::new();
        let mut bottom = String::new();

        for (index, tile) in self.tiles.iter().enumerate() {
            labels.push_str(&format!(" {index}  "));

            if tile.is_revealed() {
                top.push_str(&format!("[{}] ", tile.low()));
                bottom.push_str(&format!("[{}] ", tile.high()));
            } else {
                top.push_str("[  ]");
                bottom.push_str("[  ]");
            }
        }

        format!("{labels}\n{top}\n{bottom}")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
