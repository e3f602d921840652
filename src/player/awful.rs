use alloc::string::String;
use rand::rngs::SmallRng;

use super::Player;
use crate::board::Board;
use crate::common::{AttackResult, BoardError, MatchError};
use crate::config::GameConfig;
use crate::geometry::{Orientation, Point};

/// Baseline opponent: stacks every ship against the left edge and sweeps
/// the board backwards from the last cell, ignoring every result.
pub struct AwfulPlayer<'g> {
    name: String,
    game: &'g GameConfig,
    last: Point,
}

impl<'g> AwfulPlayer<'g> {
    pub fn new(name: impl Into<String>, game: &'g GameConfig) -> Self {
        Self {
            name: name.into(),
            game,
            last: Point::new(0, 0),
        }
    }
}

impl Player for AwfulPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), MatchError> {
        for id in 0..self.game.n_ships() {
            board.place_ship(Point::new(id as i32, 0), id, Orientation::Horizontal)?;
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Result<Point, MatchError> {
        let last = &mut self.last;
        if last.col > 0 {
            last.col -= 1;
        } else {
            last.col = self.game.cols() as i32 - 1;
            last.row = if last.row > 0 {
                last.row - 1
            } else {
                self.game.rows() as i32 - 1
            };
        }
        Ok(self.last)
    }

    fn record_attack_result(
        &mut self,
        point: Point,
        result: Result<AttackResult, BoardError>,
    ) -> Result<(), MatchError> {
        match result {
            Ok(_) => Ok(()),
            Err(reason) => Err(MatchError::IllegalAttack {
                player: self.name.clone(),
                point,
                reason,
            }),
        }
    }
}
