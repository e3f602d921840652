//! Commonly used types and utilities for ease of import.

pub use crate::{
    create_player, play, AttackResult, Board, GameConfig, MatchReport, Orientation, Player,
    PlayerKind, Point, Side, Silent,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsoleObserver, HumanPlayer};
