//! Automated players for the memory game
//!
//! This module contains the strategies that drive automated play and the
//! engine that runs them against a board.

mod engine;
mod recall;
mod strategy;

pub use engine::{AutoPlayer, PlayRecord, TurnRecord};
pub use recall::RecallStrategy;
pub use strategy::{RandomStrategy, Strategy, StrategyType};
