use alloc::string::String;
use log::trace;
use rand::rngs::SmallRng;

use super::Player;
use crate::ai::{place_fleet, CrossHunt, ParityHunt, ShotGrid, PLACEMENT_ATTEMPTS};
use crate::board::Board;
use crate::common::{AttackResult, BoardError, MatchError};
use crate::config::GameConfig;
use crate::geometry::Point;

/// Record a shot in `shots`, turning a rejected shot into a fatal error:
/// a computer player's own bookkeeping must never produce one.
fn record_shot(
    name: &str,
    shots: &mut ShotGrid,
    point: Point,
    result: Result<AttackResult, BoardError>,
) -> Result<AttackResult, MatchError> {
    let result = result.map_err(|reason| MatchError::IllegalAttack {
        player: String::from(name),
        point,
        reason,
    })?;
    shots.mark(point);
    Ok(result)
}

fn out_of_targets(name: &str) -> MatchError {
    MatchError::OutOfTargets {
        player: String::from(name),
    }
}

/// Spread-out random fleet; random shots with a cross-shaped follow-up
/// around the latest hit.
pub struct MediocrePlayer {
    name: String,
    shots: ShotGrid,
    hunt: CrossHunt,
}

impl MediocrePlayer {
    pub fn new(name: impl Into<String>, game: &GameConfig) -> Self {
        Self {
            name: name.into(),
            shots: ShotGrid::new(game),
            hunt: CrossHunt::new(),
        }
    }

    pub fn hunt(&self) -> &CrossHunt {
        &self.hunt
    }
}

impl Player for MediocrePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), MatchError> {
        place_fleet(board, rng, PLACEMENT_ATTEMPTS)?;
        Ok(())
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Point, MatchError> {
        self.hunt
            .next_target(&self.shots, rng)
            .ok_or_else(|| out_of_targets(&self.name))
    }

    fn record_attack_result(
        &mut self,
        point: Point,
        result: Result<AttackResult, BoardError>,
    ) -> Result<(), MatchError> {
        let result = record_shot(&self.name, &mut self.shots, point, result)?;
        self.hunt.observe(point, result);
        trace!("{} now in {:?}", self.name, self.hunt.mode());
        Ok(())
    }
}

/// Spread-out random fleet; checkerboard search that finishes off every
/// ship it finds by working along its line.
pub struct GoodPlayer {
    name: String,
    shots: ShotGrid,
    hunt: ParityHunt,
}

impl GoodPlayer {
    pub fn new(name: impl Into<String>, game: &GameConfig) -> Self {
        Self {
            name: name.into(),
            shots: ShotGrid::new(game),
            hunt: ParityHunt::new(),
        }
    }

    pub fn hunt(&self) -> &ParityHunt {
        &self.hunt
    }
}

impl Player for GoodPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), MatchError> {
        place_fleet(board, rng, PLACEMENT_ATTEMPTS)?;
        Ok(())
    }

    fn recommend_attack(&mut self, rng: &mut SmallRng) -> Result<Point, MatchError> {
        self.hunt
            .next_target(&self.shots, rng)
            .ok_or_else(|| out_of_targets(&self.name))
    }

    fn record_attack_result(
        &mut self,
        point: Point,
        result: Result<AttackResult, BoardError>,
    ) -> Result<(), MatchError> {
        let result = record_shot(&self.name, &mut self.shots, point, result)?;
        self.hunt.observe(point, result);
        Ok(())
    }
}
