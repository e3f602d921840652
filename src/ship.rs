//! Ship types from the game roster and their per-board instances.

use alloc::string::String;
use alloc::vec::Vec;

use crate::geometry::Point;

/// Type of ship: name, length and display symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipType {
    name: String,
    length: usize,
    symbol: char,
}

impl ShipType {
    pub(crate) fn new(name: String, length: usize, symbol: char) -> Self {
        Self {
            name,
            length,
            symbol,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Glyph shown for an undamaged segment.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

/// Where one ship type sits on a board and whether it has been sunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ShipInstance {
    /// Occupied cells in anchor order; empty while unplaced.
    pub(crate) cells: Vec<Point>,
    pub(crate) placed: bool,
    pub(crate) destroyed: bool,
}

impl ShipInstance {
    pub(crate) fn reset(&mut self) {
        self.cells.clear();
        self.placed = false;
        self.destroyed = false;
    }
}
