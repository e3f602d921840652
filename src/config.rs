//! Board dimensions and the ship roster shared by every board and player
//! in a match.

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::common::{ConfigError, ShipId};
use crate::geometry::Point;
use crate::ship::ShipType;

pub const MAX_ROWS: usize = 10;
pub const MAX_COLS: usize = 10;

/// Glyph for untouched water and, in shots-only views, undamaged ships.
pub const WATER: char = '.';
/// Glyph for any attacked ship segment.
pub const HIT: char = 'X';
/// Glyph for attacked water.
pub const MISS: char = 'o';
pub const RESERVED_SYMBOLS: [char; 3] = [HIT, WATER, MISS];

/// Classic fleet as (length, symbol, name).
pub const STANDARD_FLEET: [(usize, char, &str); 5] = [
    (5, 'A', "aircraft carrier"),
    (4, 'B', "battleship"),
    (3, 'D', "destroyer"),
    (3, 'S', "submarine"),
    (2, 'P', "patrol boat"),
];

/// Row-major offset of `p` on a `rows`×`cols` grid, if it lies inside.
pub(crate) fn grid_index(rows: usize, cols: usize, p: Point) -> Option<usize> {
    let inside = p.row >= 0 && (p.row as usize) < rows && p.col >= 0 && (p.col as usize) < cols;
    inside.then(|| p.row as usize * cols + p.col as usize)
}

/// Inverse of [`grid_index`].
pub(crate) fn grid_point(cols: usize, index: usize) -> Point {
    Point::new((index / cols) as i32, (index % cols) as i32)
}

/// Board dimensions and ship roster. Immutable once the match starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    ships: Vec<ShipType>,
}

impl GameConfig {
    /// Empty roster on a `rows`×`cols` board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if !(1..=MAX_ROWS).contains(&rows) || !(1..=MAX_COLS).contains(&cols) {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            ships: Vec::new(),
        })
    }

    /// 10×10 board with the classic five-ship fleet.
    pub fn standard() -> Self {
        let ships = STANDARD_FLEET
            .iter()
            .map(|&(length, symbol, name)| ShipType::new(String::from(name), length, symbol))
            .collect();
        Self {
            rows: MAX_ROWS,
            cols: MAX_COLS,
            ships,
        }
    }

    /// 2×3 board with a single two-cell rowboat.
    pub fn mini() -> Self {
        Self {
            rows: 2,
            cols: 3,
            ships: alloc::vec![ShipType::new(String::from("rowboat"), 2, 'R')],
        }
    }

    /// Register a ship type, returning its id.
    pub fn add_ship(
        &mut self,
        length: usize,
        symbol: char,
        name: impl Into<String>,
    ) -> Result<ShipId, ConfigError> {
        if length < 1 {
            return Err(ConfigError::BadLength(length));
        }
        if length > self.rows && length > self.cols {
            return Err(ConfigError::ShipTooLong(length));
        }
        if !symbol.is_ascii() || symbol.is_ascii_control() {
            return Err(ConfigError::UnprintableSymbol(symbol));
        }
        if RESERVED_SYMBOLS.contains(&symbol) {
            return Err(ConfigError::ReservedSymbol(symbol));
        }
        if self.ships.iter().any(|s| s.symbol() == symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol));
        }
        let total = self.ships.iter().map(ShipType::length).sum::<usize>() + length;
        if total > self.area() {
            return Err(ConfigError::FleetTooLarge {
                total,
                area: self.area(),
            });
        }
        self.ships.push(ShipType::new(name.into(), length, symbol));
        Ok(self.ships.len() - 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// `true` when `p` lies on the board.
    pub fn is_valid(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// Row-major offset of `p`, if it lies on the board.
    pub(crate) fn index(&self, p: Point) -> Option<usize> {
        grid_index(self.rows, self.cols, p)
    }

    pub(crate) fn point_at(&self, index: usize) -> Point {
        grid_point(self.cols, index)
    }

    /// Every cell of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.area()).map(move |i| self.point_at(i))
    }

    /// A uniformly random cell.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(0..self.rows) as i32,
            rng.random_range(0..self.cols) as i32,
        )
    }

    pub fn n_ships(&self) -> usize {
        self.ships.len()
    }

    pub fn ships(&self) -> &[ShipType] {
        &self.ships
    }

    /// Roster entry for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a registered ship.
    pub fn ship(&self, id: ShipId) -> &ShipType {
        &self.ships[id]
    }

    pub fn ship_length(&self, id: ShipId) -> usize {
        self.ship(id).length()
    }

    pub fn ship_symbol(&self, id: ShipId) -> char {
        self.ship(id).symbol()
    }

    pub fn ship_name(&self, id: ShipId) -> &str {
        self.ship(id).name()
    }
}
