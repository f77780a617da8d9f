//! Memory Lane
//!
//! A single-player memory-matching game built from domino tiles. A board is
//! generated from a maximum pip value — every unique domino pairing appears
//! twice, shuffled face-down — and the player reveals two positions per turn
//! until every pair is matched.
//!
//! # Quick Start
//!
//! ```rust
//! use memory_lane::core::Board;
//!
//! // Deal a reproducible board: max 2 gives six tiles, three pairs
//! let mut board = Board::with_seed(2, 7).unwrap();
//! assert_eq!(board.len(), 6);
//!
//! // Find and match the two (1,1) tiles
//! let ones: Vec<usize> = (0..board.len())
//!     .filter(|&i| board.tiles()[i].pips() == (1, 1))
//!     .collect();
//! assert!(board.guess(ones[0], ones[1]).unwrap());
//! assert!(!board.game_over());
//! ```

// Core domain types
pub mod core;

// Automated players
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
