#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use super::Player;
use crate::board::Board;
use crate::common::{AttackResult, BoardError, MatchError};
use crate::config::GameConfig;
use crate::geometry::{Orientation, Point};

/// Where a [`HumanPlayer`] reads its lines from.
enum Input<'g> {
    /// The process's stdin, locked for one line at a time so that other
    /// players and the match observer read from the same buffer.
    Stdin,
    Reader(Box<dyn BufRead + 'g>),
}

/// Interactive player reading moves from a console.
///
/// Outcomes are not tracked: a human reads them off the boards printed by
/// the match observer.
pub struct HumanPlayer<'g> {
    name: String,
    game: &'g GameConfig,
    input: Input<'g>,
    output: Box<dyn Write + 'g>,
}

impl<'g> HumanPlayer<'g> {
    pub fn new(
        name: impl Into<String>,
        game: &'g GameConfig,
        input: impl BufRead + 'g,
        output: impl Write + 'g,
    ) -> Self {
        Self {
            name: name.into(),
            game,
            input: Input::Reader(Box::new(input)),
            output: Box::new(output),
        }
    }

    /// Player bound to the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>, game: &'g GameConfig) -> Self {
        Self {
            name: name.into(),
            game,
            input: Input::Stdin,
            output: Box::new(io::stdout()),
        }
    }

    fn closed(&self) -> MatchError {
        MatchError::ConsoleClosed {
            player: self.name.clone(),
        }
    }

    fn say(&mut self, args: fmt::Arguments<'_>) -> Result<(), MatchError> {
        self.output
            .write_fmt(args)
            .and_then(|()| self.output.flush())
            .map_err(|_| self.closed())
    }

    fn read_line(&mut self) -> Result<String, MatchError> {
        let mut line = String::new();
        let read = match &mut self.input {
            Input::Stdin => io::stdin().read_line(&mut line),
            Input::Reader(reader) => reader.read_line(&mut line),
        };
        match read {
            Ok(0) | Err(_) => Err(self.closed()),
            Ok(_) => Ok(line),
        }
    }

    fn ask_orientation(&mut self, name: &str, length: usize) -> Result<Orientation, MatchError> {
        loop {
            self.say(format_args!(
                "Enter h or v for direction of {} (length {}): ",
                name, length
            ))?;
            match self.read_line()?.trim().chars().next() {
                Some('h') => return Ok(Orientation::Horizontal),
                Some('v') => return Ok(Orientation::Vertical),
                _ => self.say(format_args!("Direction must be h or v.\n"))?,
            }
        }
    }

    fn ask_point(&mut self, prompt: &str) -> Result<Point, MatchError> {
        loop {
            self.say(format_args!("{}", prompt))?;
            match parse_point(&self.read_line()?) {
                Some(p) => return Ok(p),
                None => self.say(format_args!("You must enter two integers.\n"))?,
            }
        }
    }
}

/// Parse "row col"; anything after the second number is ignored.
fn parse_point(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some(Point::new(row, col))
}

impl Player for HumanPlayer<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn place_ships(&mut self, _rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), MatchError> {
        let game = self.game;
        let name = self.name.clone();
        self.say(format_args!("{} must place {} ships.\n", name, game.n_ships()))?;
        for (id, ship) in game.ships().iter().enumerate() {
            self.say(format_args!("{}", board.display(false)))?;
            let orientation = self.ask_orientation(ship.name(), ship.length())?;
            let end = match orientation {
                Orientation::Horizontal => "leftmost",
                Orientation::Vertical => "topmost",
            };
            let prompt = format!("Enter row and column of {} cell (e.g., 3 5): ", end);
            loop {
                let anchor = self.ask_point(&prompt)?;
                match board.place_ship(anchor, id, orientation) {
                    Ok(()) => break,
                    Err(_) => self.say(format_args!("The ship can not be placed there.\n"))?,
                }
            }
        }
        Ok(())
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Result<Point, MatchError> {
        self.ask_point("Enter the row and column to attack (e.g., 3 5): ")
    }

    fn record_attack_result(
        &mut self,
        _point: Point,
        _result: Result<AttackResult, BoardError>,
    ) -> Result<(), MatchError> {
        Ok(())
    }
}
