//! Turn loop between two players, each defending its own board.

use core::fmt;
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::board::{Board, BoardDisplay};
use crate::common::{AttackResult, BoardError, MatchError};
use crate::config::GameConfig;
use crate::geometry::Point;
use crate::player::Player;

/// Which of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    /// `None` when a player failed to place its fleet.
    pub winner: Option<Side>,
    /// Attacks made by both players together.
    pub turns: usize,
}

/// One resolved attack, as shown to observers.
#[derive(Debug, Clone, Copy)]
pub struct AttackReport<'a> {
    pub attacker: &'a str,
    pub point: Point,
    pub result: Result<AttackResult, BoardError>,
    /// Name of the ship sunk by this attack.
    pub sunk: Option<&'a str>,
    /// Set when this attack ended the match.
    pub decisive: bool,
}

impl fmt::Display for AttackReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} attacked {} and ", self.attacker, self.point)?;
        match (self.result, self.sunk) {
            (Err(_), _) => f.write_str("wasted a shot"),
            (Ok(_), Some(name)) => write!(f, "destroyed the {}", name),
            (Ok(result), None) if result.is_hit() => f.write_str("hit something"),
            (Ok(_), None) => f.write_str("missed"),
        }
    }
}

/// Hooks for following a match as it is played. Every method defaults to
/// doing nothing.
pub trait Observer {
    /// `board` is the defender's board as the attacker may see it.
    fn turn_started(&mut self, _attacker: &str, _defender: &str, _board: &BoardDisplay<'_, '_>) {}

    fn attack_resolved(&mut self, _report: &AttackReport<'_>, _board: &BoardDisplay<'_, '_>) {}

    /// `reveal` holds the winner's full board when the loser is human.
    fn match_finished(&mut self, _winner: &str, _reveal: Option<&BoardDisplay<'_, '_>>) {}
}

/// Observer that ignores everything.
pub struct Silent;

impl Observer for Silent {}

/// Play a match on two fresh boards for `game`.
pub fn play<'p>(
    game: &GameConfig,
    first: &mut (dyn Player + 'p),
    second: &mut (dyn Player + 'p),
    rng: &mut SmallRng,
    observer: &mut dyn Observer,
) -> Result<MatchReport, MatchError> {
    let mut first_board = Board::new(game);
    let mut second_board = Board::new(game);
    play_on(
        first,
        second,
        &mut first_board,
        &mut second_board,
        rng,
        observer,
    )
}

/// Play a match where `first` defends `first_board` and moves first.
///
/// A player failing to place its fleet ends the match without a winner.
/// A computer player attacking illegally is an error.
pub fn play_on<'p, 'g>(
    first: &mut (dyn Player + 'p),
    second: &mut (dyn Player + 'p),
    first_board: &mut Board<'g>,
    second_board: &mut Board<'g>,
    rng: &mut SmallRng,
    observer: &mut dyn Observer,
) -> Result<MatchReport, MatchError> {
    let game = first_board.game();
    if game.n_ships() == 0 {
        return Err(MatchError::NoShips);
    }

    if !place_or_abandon(first, first_board, rng) || !place_or_abandon(second, second_board, rng) {
        return Ok(MatchReport {
            winner: None,
            turns: 0,
        });
    }

    let mut attacker_side = Side::First;
    let mut turns = 0;
    while !(first_board.all_ships_destroyed() || second_board.all_ships_destroyed()) {
        let (attacker, defender, board) = match attacker_side {
            Side::First => (&mut *first, &mut *second, &mut *second_board),
            Side::Second => (&mut *second, &mut *first, &mut *first_board),
        };
        let shots_only = attacker.is_human();
        observer.turn_started(attacker.name(), defender.name(), &board.display(shots_only));

        let point = attacker.recommend_attack(rng)?;
        let result = board.attack(point);
        turns += 1;
        debug!("{} attacks {}: {:?}", attacker.name(), point, result);
        attacker.record_attack_result(point, result)?;
        defender.record_attack_by_opponent(point);

        let report = AttackReport {
            attacker: attacker.name(),
            point,
            result,
            sunk: result
                .ok()
                .and_then(AttackResult::destroyed_ship)
                .map(|id| game.ship_name(id)),
            decisive: board.all_ships_destroyed(),
        };
        observer.attack_resolved(&report, &board.display(shots_only));

        attacker_side = attacker_side.other();
    }

    let (winner, winner_board, loser) = if first_board.all_ships_destroyed() {
        (Side::Second, &*second_board, &*first)
    } else {
        (Side::First, &*first_board, &*second)
    };
    let winner_name = match winner {
        Side::First => first.name(),
        Side::Second => second.name(),
    };
    info!("{} wins after {} turns", winner_name, turns);
    let reveal = loser.is_human().then(|| winner_board.display(false));
    observer.match_finished(winner_name, reveal.as_ref());

    Ok(MatchReport {
        winner: Some(winner),
        turns,
    })
}

fn place_or_abandon<'p>(
    player: &mut (dyn Player + 'p),
    board: &mut Board<'_>,
    rng: &mut SmallRng,
) -> bool {
    match player.place_ships(rng, board) {
        Ok(()) => true,
        Err(e) => {
            warn!("{} could not place ships: {}", player.name(), e);
            false
        }
    }
}
