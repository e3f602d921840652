//! Common types for the engine: attack results and the error enums shared
//! by the configuration, board and match layers.

use alloc::string::String;
use core::fmt;

use crate::geometry::Point;

/// Index of a ship type in the game roster.
pub type ShipId = usize;

/// Outcome of a legal attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// The shot landed in open water.
    Miss,
    /// The shot hit a ship that still has unattacked cells.
    Hit,
    /// The shot hit the last unattacked cell of a ship.
    Destroyed(ShipId),
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackResult::Miss)
    }

    pub fn is_destroyed(self) -> bool {
        matches!(self, AttackResult::Destroyed(_))
    }

    /// Id of the ship sunk by this shot, if any.
    pub fn destroyed_ship(self) -> Option<ShipId> {
        match self {
            AttackResult::Destroyed(id) => Some(id),
            _ => None,
        }
    }
}

/// Errors returned by Board operations. The board is left unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship id is not part of the game roster.
    InvalidShipId(ShipId),
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced(ShipId),
    /// Attempted to remove a ship that is not on the board.
    ShipNotPlaced(ShipId),
    /// Part of the ship would lie outside the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement covers a blocked cell.
    CellBlocked,
    /// The ship is not at the given anchor and orientation.
    PlacementMismatch(ShipId),
    /// Point lies outside the board.
    InvalidPoint(Point),
    /// This point was attacked before.
    AlreadyAttacked(Point),
    /// No legal layout was found for the fleet.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidShipId(id) => write!(f, "Ship id {} is not in the roster", id),
            BoardError::ShipAlreadyPlaced(id) => write!(f, "Ship {} is already placed on the board", id),
            BoardError::ShipNotPlaced(id) => write!(f, "Ship {} is not placed on the board", id),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::CellBlocked => write!(f, "Ship placement covers a blocked cell"),
            BoardError::PlacementMismatch(id) => {
                write!(f, "Ship {} does not occupy the indicated cells", id)
            }
            BoardError::InvalidPoint(p) => write!(f, "Point {} is outside the board", p),
            BoardError::AlreadyAttacked(p) => write!(f, "Point {} was already attacked", p),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors returned while building a game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns are zero or above the supported maximum.
    InvalidDimensions { rows: usize, cols: usize },
    /// Ship length must be at least one.
    BadLength(usize),
    /// Ship is longer than both board dimensions.
    ShipTooLong(usize),
    /// Ship symbol is not a printable ASCII character.
    UnprintableSymbol(char),
    /// Ship symbol collides with a board glyph.
    ReservedSymbol(char),
    /// Another ship already uses this symbol.
    DuplicateSymbol(char),
    /// Combined ship lengths would exceed the board area.
    FleetTooLarge { total: usize, area: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid board dimensions {}x{}", rows, cols)
            }
            ConfigError::BadLength(len) => write!(f, "Bad ship length {}; it must be >= 1", len),
            ConfigError::ShipTooLong(len) => {
                write!(f, "Bad ship length {}; it won't fit on the board", len)
            }
            ConfigError::UnprintableSymbol(c) => write!(
                f,
                "Unprintable character with value {} must not be used as a ship symbol",
                *c as u32
            ),
            ConfigError::ReservedSymbol(c) => {
                write!(f, "Character {} must not be used as a ship symbol", c)
            }
            ConfigError::DuplicateSymbol(c) => {
                write!(f, "Ship symbol {} must not be used for more than one ship", c)
            }
            ConfigError::FleetTooLarge { total, area } => write!(
                f,
                "Board is too small to fit all ships ({} cells needed, {} available)",
                total, area
            ),
        }
    }
}

/// Errors that stop a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The game has no ships to place.
    NoShips,
    /// A player could not lay out its fleet.
    Placement(BoardError),
    /// An AI player recommended an attack the board rejected.
    IllegalAttack {
        player: String,
        point: Point,
        reason: BoardError,
    },
    /// An AI player has no unattacked cell left to recommend.
    OutOfTargets { player: String },
    /// An interactive player's console was closed or failed.
    ConsoleClosed { player: String },
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Placement(err)
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NoShips => write!(f, "The game has no ships"),
            MatchError::Placement(e) => write!(f, "Ship placement failed: {}", e),
            MatchError::IllegalAttack {
                player,
                point,
                reason,
            } => write!(f, "{} made an illegal attack at {}: {}", player, point, reason),
            MatchError::OutOfTargets { player } => {
                write!(f, "{} has no cells left to attack", player)
            }
            MatchError::ConsoleClosed { player } => {
                write!(f, "Console input for {} was closed", player)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for MatchError {}
