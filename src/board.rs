//! One player's grid: ship placement, attacks and text rendering.

use alloc::vec::Vec;
use core::fmt;
use rand::seq::index;
use rand::Rng;

use crate::common::{AttackResult, BoardError, ShipId};
use crate::config::{GameConfig, HIT, MISS, WATER};
use crate::geometry::{Orientation, Point};
use crate::ship::ShipInstance;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cell {
    ship: Option<ShipId>,
    attacked: bool,
    /// Only consulted by placement.
    blocked: bool,
}

/// Main board state: ship placements, attacked cells and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<'g> {
    game: &'g GameConfig,
    cells: Vec<Cell>,
    ships: Vec<ShipInstance>,
}

impl<'g> Board<'g> {
    /// Create an empty board (no ships placed) for `game`.
    pub fn new(game: &'g GameConfig) -> Self {
        Board {
            game,
            cells: alloc::vec![Cell::default(); game.area()],
            ships: alloc::vec![ShipInstance::default(); game.n_ships()],
        }
    }

    pub fn game(&self) -> &'g GameConfig {
        self.game
    }

    /// Remove every ship and every shot. Blocked cells stay blocked.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.ship = None;
            cell.attacked = false;
        }
        for ship in &mut self.ships {
            ship.reset();
        }
    }

    /// Block half of the cells that are not blocked yet, chosen at random.
    pub fn block<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let open: Vec<usize> = (0..self.cells.len())
            .filter(|&i| !self.cells[i].blocked)
            .collect();
        let amount = (self.cells.len() / 2).min(open.len());
        for i in index::sample(rng, open.len(), amount) {
            self.cells[open[i]].blocked = true;
        }
    }

    pub fn unblock(&mut self) {
        for cell in &mut self.cells {
            cell.blocked = false;
        }
    }

    /// Place ship `id` with its top or left end at `anchor`.
    pub fn place_ship(
        &mut self,
        anchor: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let instance = self.ships.get(id).ok_or(BoardError::InvalidShipId(id))?;
        if instance.placed {
            return Err(BoardError::ShipAlreadyPlaced(id));
        }
        let length = self.game.ship_length(id);
        let mut footprint = Vec::with_capacity(length);
        for k in 0..length {
            let point = anchor.along(orientation, k);
            let i = self.game.index(point).ok_or(BoardError::ShipOutOfBounds)?;
            let cell = self.cells[i];
            if cell.ship.is_some() {
                return Err(BoardError::ShipOverlaps);
            }
            if cell.blocked {
                return Err(BoardError::CellBlocked);
            }
            footprint.push((i, point));
        }

        // record placement
        let instance = &mut self.ships[id];
        for &(i, point) in &footprint {
            self.cells[i].ship = Some(id);
            instance.cells.push(point);
        }
        instance.placed = true;
        Ok(())
    }

    /// Remove ship `id`, which must sit exactly at `anchor` along
    /// `orientation`. Shots on its cells are forgotten.
    pub fn unplace_ship(
        &mut self,
        anchor: Point,
        id: ShipId,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let instance = self.ships.get(id).ok_or(BoardError::InvalidShipId(id))?;
        if !instance.placed {
            return Err(BoardError::ShipNotPlaced(id));
        }
        let matches = instance
            .cells
            .iter()
            .enumerate()
            .all(|(k, &p)| p == anchor.along(orientation, k));
        if !matches {
            return Err(BoardError::PlacementMismatch(id));
        }

        let instance = &mut self.ships[id];
        for &point in &instance.cells {
            if let Some(i) = self.game.index(point) {
                let cell = &mut self.cells[i];
                cell.ship = None;
                cell.attacked = false;
            }
        }
        instance.reset();
        Ok(())
    }

    /// Fire at `p`, reporting whether a ship was hit or sunk.
    pub fn attack(&mut self, p: Point) -> Result<AttackResult, BoardError> {
        let i = self.game.index(p).ok_or(BoardError::InvalidPoint(p))?;
        let cell = &mut self.cells[i];
        if cell.attacked {
            return Err(BoardError::AlreadyAttacked(p));
        }
        cell.attacked = true;
        let Some(id) = cell.ship else {
            return Ok(AttackResult::Miss);
        };

        // rescan the whole ship rather than keeping a running count
        let sunk = self.ships[id].cells.iter().all(|&q| {
            self.game
                .index(q)
                .is_some_and(|j| self.cells[j].attacked)
        });
        self.ships[id].destroyed = sunk;
        Ok(if sunk {
            AttackResult::Destroyed(id)
        } else {
            AttackResult::Hit
        })
    }

    /// Returns `true` when every ship in the roster is sunk. Ships that were
    /// never placed count as afloat.
    pub fn all_ships_destroyed(&self) -> bool {
        self.ships.iter().all(|s| s.destroyed)
    }

    /// Text view of the board. With `shots_only` set, undamaged ship
    /// segments are drawn as water.
    pub fn display(&self, shots_only: bool) -> BoardDisplay<'_, 'g> {
        BoardDisplay {
            board: self,
            shots_only,
        }
    }

    /// Ship occupying `p`, if any.
    pub fn ship_at(&self, p: Point) -> Option<ShipId> {
        self.cell(p).and_then(|c| c.ship)
    }

    /// Whether `p` has been attacked; `None` off the board.
    pub fn is_attacked(&self, p: Point) -> Option<bool> {
        self.cell(p).map(|c| c.attacked)
    }

    /// Whether `p` is blocked for placement; `None` off the board.
    pub fn is_blocked(&self, p: Point) -> Option<bool> {
        self.cell(p).map(|c| c.blocked)
    }

    pub fn is_placed(&self, id: ShipId) -> bool {
        self.ships.get(id).is_some_and(|s| s.placed)
    }

    pub fn is_destroyed(&self, id: ShipId) -> bool {
        self.ships.get(id).is_some_and(|s| s.destroyed)
    }

    /// Cells occupied by ship `id`, in anchor order.
    pub fn ship_cells(&self, id: ShipId) -> Option<&[Point]> {
        self.ships.get(id).map(|s| s.cells.as_slice())
    }

    fn cell(&self, p: Point) -> Option<&Cell> {
        self.game.index(p).map(|i| &self.cells[i])
    }

    fn glyph(&self, cell: &Cell, shots_only: bool) -> char {
        match (cell.ship, cell.attacked) {
            (None, true) => MISS,
            (None, false) => WATER,
            (Some(_), true) => HIT,
            (Some(_), false) if shots_only => WATER,
            (Some(id), false) => self.game.ship_symbol(id),
        }
    }
}

/// Renders a [`Board`] as a header of column digits followed by one line
/// per row.
pub struct BoardDisplay<'b, 'g> {
    board: &'b Board<'g>,
    shots_only: bool,
}

impl fmt::Display for BoardDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.board.game;
        f.write_str("  ")?;
        for c in 0..game.cols() {
            write!(f, "{}", c)?;
        }
        writeln!(f)?;
        for r in 0..game.rows() {
            write!(f, "{} ", r)?;
            for cell in &self.board.cells[r * game.cols()..(r + 1) * game.cols()] {
                write!(f, "{}", self.board.glyph(cell, self.shots_only))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
