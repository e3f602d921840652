//! Grid coordinates and the directions ships and shots extend in.

use core::fmt;
use core::ops::Add;

/// A (row, column) coordinate. Validity is relative to a board, so
/// coordinates may be negative or past the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The `k`-th cell of a ship anchored at `self` and extending along
    /// `orientation`.
    pub fn along(self, orientation: Orientation, k: usize) -> Self {
        let k = k as i32;
        match orientation {
            Orientation::Horizontal => Point::new(self.row, self.col + k),
            Orientation::Vertical => Point::new(self.row + k, self.col),
        }
    }

    /// Move `n` cells towards `heading`.
    pub fn step(self, heading: Heading, n: i32) -> Self {
        let (dr, dc) = heading.delta();
        Point::new(self.row + dr * n, self.col + dc * n)
    }

    /// Heading that leads from `self` to an orthogonally adjacent `other`.
    pub fn heading_to(self, other: Point) -> Option<Heading> {
        let delta = (other.row - self.row, other.col - self.col);
        Heading::ALL.into_iter().find(|h| h.delta() == delta)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends rightwards from the leftmost cell.
    Horizontal,
    /// Extends downwards from the topmost cell.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// One of the four cardinal directions, used when probing around a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Search rotation order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// (row, column) offset of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    pub const fn reverse(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }
}
