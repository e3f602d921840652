//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AwfulPlayer: clustered placement and a blind backward sweep
//! - MediocrePlayer: random search with a cross-shaped follow-up after hits
//! - GoodPlayer: checkerboard search with directional hunt-and-destroy
//! - HumanPlayer: interactive console player

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackResult, BoardError, MatchError};
use crate::config::GameConfig;
use crate::geometry::Point;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing ships on its own board
/// - Selecting targets to attack
/// - Tracking feedback from its attacks
///
/// Players never see the opponent's board; everything they learn arrives
/// through `record_attack_result`.
pub trait Player {
    fn name(&self) -> &str;

    /// Interactive players see only shots on the opponent's board.
    fn is_human(&self) -> bool {
        false
    }

    /// Place every ship of the roster onto `board`.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), MatchError>;

    /// Choose the next cell to attack.
    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Point, MatchError>;

    /// Inform the player of the outcome of its last attack. An `Err` means
    /// the board rejected the shot.
    fn record_attack_result(
        &mut self,
        point: Point,
        result: Result<AttackResult, BoardError>,
    ) -> Result<(), MatchError>;

    /// Inform the player of an opponent attack against its board.
    fn record_attack_by_opponent(&mut self, _point: Point) {}
}

pub mod ai;
pub mod awful;
#[cfg(feature = "std")]
pub mod cli;

pub use ai::{GoodPlayer, MediocrePlayer};
pub use awful::AwfulPlayer;
#[cfg(feature = "std")]
pub use cli::HumanPlayer;

/// The strategies a player can be built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum PlayerKind {
    Human,
    Awful,
    Mediocre,
    Good,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::Human,
        PlayerKind::Awful,
        PlayerKind::Mediocre,
        PlayerKind::Good,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Awful => "awful",
            PlayerKind::Mediocre => "mediocre",
            PlayerKind::Good => "good",
        }
    }

    /// Build a player of this kind. Without the `std` feature there is no
    /// console, so `Human` yields `None`.
    pub fn create<'g>(self, name: &str, game: &'g GameConfig) -> Option<Box<dyn Player + 'g>> {
        let name = name.to_string();
        let player: Box<dyn Player + 'g> = match self {
            #[cfg(feature = "std")]
            PlayerKind::Human => Box::new(HumanPlayer::stdio(name, game)),
            #[cfg(not(feature = "std"))]
            PlayerKind::Human => return None,
            PlayerKind::Awful => Box::new(AwfulPlayer::new(name, game)),
            PlayerKind::Mediocre => Box::new(MediocrePlayer::new(name, game)),
            PlayerKind::Good => Box::new(GoodPlayer::new(name, game)),
        };
        Some(player)
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| alloc::format!("unknown player type '{}'", s))
    }
}

/// Build a player from a role name (`"human"`, `"awful"`, `"mediocre"` or
/// `"good"`). Unknown roles yield `None`.
pub fn create_player<'g>(role: &str, name: &str, game: &'g GameConfig) -> Option<Box<dyn Player + 'g>> {
    role.parse::<PlayerKind>().ok()?.create(name, game)
}
