// Placement search and targeting state machines for the computer players.
// Nothing in here looks at the opponent's board: targeting runs purely on
// the shots a player has fired and the results it was told about.

use alloc::vec::Vec;
use log::trace;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{AttackResult, BoardError, ShipId};
use crate::config::{grid_index, grid_point, GameConfig};
use crate::geometry::{Heading, Orientation, Point};

/// Number of freshly blocked boards tried before placement gives up.
pub const PLACEMENT_ATTEMPTS: usize = 50;

/// Farthest cell tried from a hit by [`CrossHunt`].
pub const CROSS_REACH: i32 = 4;

/// Lay out the whole fleet on `board`.
///
/// Each attempt blocks half of the board at random and runs an exhaustive
/// backtracking search over (cell, orientation) pairs in row-major order;
/// the blocking is what varies the layout. Ships are tried longest first,
/// not in roster order. Blocks are always lifted before returning. On
/// failure the board holds no ships.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board<'_>,
    rng: &mut R,
    attempts: usize,
) -> Result<(), BoardError> {
    let game = board.game();
    let mut order: Vec<ShipId> = (0..game.n_ships()).collect();
    order.sort_by_key(|&id| core::cmp::Reverse(game.ship_length(id)));
    let cells: Vec<Point> = game.points().collect();

    for attempt in 1..=attempts {
        board.block(rng);
        let placed = place_from(board, &order, &cells);
        board.unblock();
        if placed? {
            trace!("fleet placed after {} attempt(s)", attempt);
            return Ok(());
        }
    }
    trace!("no layout found in {} attempts", attempts);
    Err(BoardError::UnableToPlaceShip)
}

fn place_from(
    board: &mut Board<'_>,
    order: &[ShipId],
    cells: &[Point],
) -> Result<bool, BoardError> {
    let Some((&id, rest)) = order.split_first() else {
        return Ok(true);
    };
    for &anchor in cells {
        for orientation in Orientation::ALL {
            if board.place_ship(anchor, id, orientation).is_err() {
                continue;
            }
            if place_from(board, rest, cells)? {
                return Ok(true);
            }
            board.unplace_ship(anchor, id, orientation)?;
        }
    }
    Ok(false)
}

/// A player's own record of where it has fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotGrid {
    rows: usize,
    cols: usize,
    fired: Vec<bool>,
}

impl ShotGrid {
    pub fn new(game: &GameConfig) -> Self {
        Self {
            rows: game.rows(),
            cols: game.cols(),
            fired: alloc::vec![false; game.area()],
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        grid_index(self.rows, self.cols, p)
    }

    /// Record a shot at `p`. Points off the board are ignored.
    pub fn mark(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.fired[i] = true;
        }
    }

    /// On the board and not fired at yet.
    pub fn is_open(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| !self.fired[i])
    }

    pub fn open_points(&self) -> impl Iterator<Item = Point> + '_ {
        let cols = self.cols;
        self.fired
            .iter()
            .enumerate()
            .filter(|(_, fired)| !**fired)
            .map(move |(i, _)| grid_point(cols, i))
    }

    pub fn shots(&self) -> usize {
        self.fired.iter().filter(|&&f| f).count()
    }
}

fn random_open<R: Rng + ?Sized>(
    shots: &ShotGrid,
    rng: &mut R,
    filter: impl Fn(&Point) -> bool,
) -> Option<Point> {
    let candidates: Vec<Point> = shots.open_points().filter(filter).collect();
    candidates.choose(rng).copied()
}

/// Mode of a [`CrossHunt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossMode {
    /// Fire anywhere not yet attacked.
    Random,
    /// Fire within [`CROSS_REACH`] cells of `center` along a row or column.
    Cross { center: Point },
}

/// Random search that, after a hit, keeps firing in a cross around the
/// most recent hit until a ship goes down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossHunt {
    mode: CrossMode,
}

impl Default for CrossHunt {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossHunt {
    pub fn new() -> Self {
        Self {
            mode: CrossMode::Random,
        }
    }

    pub fn mode(&self) -> CrossMode {
        self.mode
    }

    /// Pick the next cell to fire at, or `None` once every cell was shot.
    pub fn next_target<R: Rng + ?Sized>(&mut self, shots: &ShotGrid, rng: &mut R) -> Option<Point> {
        if let CrossMode::Cross { center } = self.mode {
            let candidates: Vec<Point> = Heading::ALL
                .into_iter()
                .flat_map(|h| (1..=CROSS_REACH).map(move |n| center.step(h, n)))
                .filter(|&p| shots.is_open(p))
                .collect();
            if let Some(&p) = candidates.choose(rng) {
                return Some(p);
            }
            trace!("cross around {} exhausted, back to random", center);
            self.mode = CrossMode::Random;
        }
        random_open(shots, rng, |_| true)
    }

    pub fn observe(&mut self, p: Point, result: AttackResult) {
        self.mode = match result {
            AttackResult::Destroyed(_) => CrossMode::Random,
            AttackResult::Hit => CrossMode::Cross { center: p },
            AttackResult::Miss => self.mode,
        };
    }
}

/// Mode of a [`ParityHunt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntMode {
    /// Fire at random cells of one checkerboard color.
    Random,
    /// Try the neighbours of `origin`, trying headings from `next` onward
    /// in N, E, S, W order.
    FindDirection { origin: Point, next: usize },
    /// Follow `heading` from `last`, the latest hit on the line through
    /// `origin`. `reversed` is set once the far side is being worked.
    Destroy {
        origin: Point,
        last: Point,
        heading: Heading,
        reversed: bool,
    },
}

/// Checkerboard search with directional hunt-and-destroy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityHunt {
    mode: HuntMode,
}

impl Default for ParityHunt {
    fn default() -> Self {
        Self::new()
    }
}

impl ParityHunt {
    pub fn new() -> Self {
        Self {
            mode: HuntMode::Random,
        }
    }

    pub fn mode(&self) -> HuntMode {
        self.mode
    }

    /// Pick the next cell to fire at, or `None` once every cell was shot.
    pub fn next_target<R: Rng + ?Sized>(&mut self, shots: &ShotGrid, rng: &mut R) -> Option<Point> {
        loop {
            match self.mode {
                HuntMode::Random => return Self::checkerboard(shots, rng),
                HuntMode::FindDirection { origin, next } => {
                    let candidate = Heading::ALL
                        .iter()
                        .skip(next)
                        .map(|&h| origin.step(h, 1))
                        .find(|&p| shots.is_open(p));
                    if candidate.is_some() {
                        return candidate;
                    }
                    trace!("no open neighbour around {}", origin);
                    self.mode = HuntMode::Random;
                }
                HuntMode::Destroy {
                    origin,
                    last,
                    heading,
                    reversed,
                } => {
                    let p = last.step(heading, 1);
                    if shots.is_open(p) {
                        return Some(p);
                    }
                    self.mode = if reversed {
                        HuntMode::Random
                    } else {
                        Self::turn_around(origin, heading)
                    };
                }
            }
        }
    }

    pub fn observe(&mut self, p: Point, result: AttackResult) {
        let next = match (self.mode, result) {
            (_, AttackResult::Destroyed(_)) => HuntMode::Random,
            (HuntMode::Random, AttackResult::Hit) => HuntMode::FindDirection { origin: p, next: 0 },
            (HuntMode::Random, AttackResult::Miss) => HuntMode::Random,
            (HuntMode::FindDirection { origin, next }, result) => match origin.heading_to(p) {
                Some(heading) if result.is_hit() => HuntMode::Destroy {
                    origin,
                    last: p,
                    heading,
                    reversed: false,
                },
                Some(heading) => HuntMode::FindDirection {
                    origin,
                    next: Self::rotation_index(heading) + 1,
                },
                None => HuntMode::FindDirection { origin, next },
            },
            (
                HuntMode::Destroy {
                    origin,
                    heading,
                    reversed,
                    ..
                },
                AttackResult::Hit,
            ) => HuntMode::Destroy {
                origin,
                last: p,
                heading,
                reversed,
            },
            (
                HuntMode::Destroy {
                    origin,
                    heading,
                    reversed,
                    ..
                },
                AttackResult::Miss,
            ) => {
                if reversed {
                    HuntMode::Random
                } else {
                    Self::turn_around(origin, heading)
                }
            }
        };
        if next != self.mode {
            trace!("hunt {:?} -> {:?}", self.mode, next);
        }
        self.mode = next;
    }

    fn turn_around(origin: Point, heading: Heading) -> HuntMode {
        HuntMode::Destroy {
            origin,
            last: origin,
            heading: heading.reverse(),
            reversed: true,
        }
    }

    fn rotation_index(heading: Heading) -> usize {
        Heading::ALL.iter().position(|&h| h == heading).unwrap_or(Heading::ALL.len())
    }

    fn checkerboard<R: Rng + ?Sized>(shots: &ShotGrid, rng: &mut R) -> Option<Point> {
        random_open(shots, rng, |p| (p.row + p.col) % 2 == 0)
            .or_else(|| random_open(shots, rng, |_| true))
    }
}
