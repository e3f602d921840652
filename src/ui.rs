#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdout, Write};

use crate::board::BoardDisplay;
use crate::game::{AttackReport, Observer};

/// Narrates a match as text, optionally waiting for enter after every
/// attack that does not end the match.
pub struct ConsoleObserver<W: Write = Stdout> {
    out: W,
    pause: bool,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout(pause: bool) -> Self {
        Self::new(io::stdout(), pause)
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Pausing reads from stdin regardless of `out`.
    pub fn new(out: W, pause: bool) -> Self {
        Self { out, pause }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn wait_for_enter(&mut self) {
        let _ = write!(self.out, "Press enter to continue: ");
        let _ = self.out.flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn turn_started(&mut self, attacker: &str, defender: &str, board: &BoardDisplay<'_, '_>) {
        let _ = write!(
            self.out,
            "{}'s turn.  Board for {}:\n{}",
            attacker, defender, board
        );
    }

    fn attack_resolved(&mut self, report: &AttackReport<'_>, board: &BoardDisplay<'_, '_>) {
        let _ = write!(self.out, "{}, resulting in:\n{}", report, board);
        if self.pause && !report.decisive {
            self.wait_for_enter();
        }
    }

    fn match_finished(&mut self, winner: &str, reveal: Option<&BoardDisplay<'_, '_>>) {
        let _ = writeln!(self.out, "{} wins!", winner);
        if let Some(board) = reveal {
            let _ = write!(self.out, "Here is where {}'s ships were:\n{}", winner, board);
        }
        let _ = self.out.flush();
    }
}
