use std::io;

use broadside::{
    play, play_on, AttackReport, AttackResult, AwfulPlayer, Board, BoardDisplay, BoardError,
    ConsoleObserver, GameConfig, GoodPlayer, HumanPlayer, MatchError, MediocrePlayer, Observer,
    Player, Point, Side, Silent,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Default)]
struct Tally {
    started: usize,
    decisive: Vec<bool>,
    finished: Vec<(String, Option<String>)>,
}

impl Observer for Tally {
    fn turn_started(&mut self, _attacker: &str, _defender: &str, _board: &BoardDisplay<'_, '_>) {
        self.started += 1;
    }

    fn attack_resolved(&mut self, report: &AttackReport<'_>, _board: &BoardDisplay<'_, '_>) {
        self.decisive.push(report.decisive);
    }

    fn match_finished(&mut self, winner: &str, reveal: Option<&BoardDisplay<'_, '_>>) {
        self.finished
            .push((winner.to_string(), reveal.map(|b| b.to_string())));
    }
}

#[test]
fn test_game_without_ships() {
    let game = GameConfig::new(3, 3).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut p1 = GoodPlayer::new("One", &game);
    let mut p2 = GoodPlayer::new("Two", &game);
    assert_eq!(
        play(&game, &mut p1, &mut p2, &mut rng, &mut Silent),
        Err(MatchError::NoShips)
    );
}

#[test]
fn test_failed_placement_has_no_winner() -> Result<(), MatchError> {
    // the awful player runs out of rows
    let mut game = GameConfig::new(2, 4).unwrap();
    game.add_ship(2, 'A', "a").unwrap();
    game.add_ship(2, 'B', "b").unwrap();
    game.add_ship(2, 'C', "c").unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut good = GoodPlayer::new("Good", &game);
    let mut awful = AwfulPlayer::new("Awful", &game);
    let mut tally = Tally::default();

    let report = play(&game, &mut awful, &mut good, &mut rng, &mut tally)?;
    assert_eq!(report.winner, None);
    assert_eq!(report.turns, 0);
    assert_eq!(tally.started, 0);
    assert!(tally.finished.is_empty());
    Ok(())
}

#[test]
fn test_observer_sees_every_turn() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut good = GoodPlayer::new("Good", &game);
    let mut mediocre = MediocrePlayer::new("Mediocre", &game);
    let mut tally = Tally::default();

    let report = play(&game, &mut good, &mut mediocre, &mut rng, &mut tally)?;
    let winner = report.winner.unwrap();
    assert_eq!(tally.started, report.turns);
    assert_eq!(tally.decisive.len(), report.turns);
    assert_eq!(tally.decisive.iter().filter(|&&d| d).count(), 1);
    assert_eq!(tally.decisive.last(), Some(&true));

    // the winner made the last attack
    let expected_winner = if report.turns % 2 == 1 { Side::First } else { Side::Second };
    assert_eq!(winner, expected_winner);
    let name = match winner {
        Side::First => "Good",
        Side::Second => "Mediocre",
    };
    assert_eq!(tally.finished, vec![(name.to_string(), None)]);
    Ok(())
}

#[test]
fn test_loser_board_is_sunk() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(77);
    let mut good = GoodPlayer::new("Good", &game);
    let mut awful = AwfulPlayer::new("Awful", &game);
    let mut good_board = Board::new(&game);
    let mut awful_board = Board::new(&game);

    let report = play_on(
        &mut good,
        &mut awful,
        &mut good_board,
        &mut awful_board,
        &mut rng,
        &mut Silent,
    )?;
    let (winner_board, loser_board) = match report.winner {
        Some(Side::First) => (&good_board, &awful_board),
        Some(Side::Second) => (&awful_board, &good_board),
        None => panic!("both fleets fit on a standard board"),
    };
    assert!(loser_board.all_ships_destroyed());
    assert!(!winner_board.all_ships_destroyed());
    assert!(report.turns >= 2 * 17 - 1);
    Ok(())
}

#[test]
fn test_same_seed_same_match() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    let run = |seed: u64| -> Result<_, MatchError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut good = GoodPlayer::new("Good", &game);
        let mut mediocre = MediocrePlayer::new("Mediocre", &game);
        play(&game, &mut good, &mut mediocre, &mut rng, &mut Silent)
    };
    assert_eq!(run(5)?, run(5)?);
    Ok(())
}

#[test]
fn test_human_loses_and_sees_winning_fleet() -> Result<(), MatchError> {
    let game = GameConfig::mini();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut awful = AwfulPlayer::new("Captain Awful", &game);
    // rowboat across the top left; then five attacks, the last one repeated
    let input: &[u8] = b"h\n0 0\n1 2\n1 1\n1 0\n0 2\n0 2\n";
    let mut human = HumanPlayer::new("Human", &game, input, io::sink());
    let mut observer = ConsoleObserver::new(Vec::new(), false);

    let report = play(&game, &mut awful, &mut human, &mut rng, &mut observer)?;
    assert_eq!(report.winner, Some(Side::First));
    assert_eq!(report.turns, 11);

    let text = String::from_utf8(observer.into_inner()).unwrap();
    assert!(text.starts_with("Captain Awful's turn.  Board for Human:\n  012\n0 RR.\n1 ...\n"));
    assert!(text.contains("Human attacked (0,2) and missed, resulting in:\n"));
    assert!(text.contains("Human attacked (0,2) and wasted a shot, resulting in:\n"));
    assert!(text.contains(
        "Captain Awful attacked (0,0) and destroyed the rowboat, resulting in:\n  012\n0 XXo\n1 ooo\n"
    ));
    assert!(text.ends_with(
        "Captain Awful wins!\nHere is where Captain Awful's ships were:\n  012\n0 RRo\n1 ooo\n"
    ));
    Ok(())
}

#[test]
fn test_human_sees_only_shots() -> Result<(), MatchError> {
    let game = GameConfig::mini();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut awful = AwfulPlayer::new("Awful", &game);
    let input: &[u8] = b"v\n0 2\n0 0\n0 1\n";
    let mut human = HumanPlayer::new("Human", &game, input, io::sink());
    let mut observer = ConsoleObserver::new(Vec::new(), false);

    // the human sinks the rowboat on their second shot
    let report = play(&game, &mut human, &mut awful, &mut rng, &mut observer)?;
    assert_eq!(report.winner, Some(Side::First));
    assert_eq!(report.turns, 3);

    let text = String::from_utf8(observer.into_inner()).unwrap();
    assert!(text.starts_with("Human's turn.  Board for Awful:\n  012\n0 ...\n1 ...\n"));
    assert!(text.contains("Human attacked (0,0) and hit something, resulting in:\n  012\n0 X..\n1 ...\n"));
    // the awful player sees the human's fleet
    assert!(text.contains("Awful's turn.  Board for Human:\n  012\n0 ..R\n1 ..R\n"));
    assert!(text.ends_with("Human wins!\n"));
    Ok(())
}

#[test]
fn test_console_closed_ends_match_with_error() {
    let game = GameConfig::mini();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut awful = AwfulPlayer::new("Awful", &game);
    let input: &[u8] = b"h\n1 0\n";
    let mut human = HumanPlayer::new("Human", &game, input, io::sink());

    assert_eq!(
        play(&game, &mut human, &mut awful, &mut rng, &mut Silent),
        Err(MatchError::ConsoleClosed {
            player: "Human".to_string()
        })
    );
}

/// Fires at the same cell forever.
struct Stubborn<'g>(AwfulPlayer<'g>);

impl Player for Stubborn<'_> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board<'_>) -> Result<(), MatchError> {
        self.0.place_ships(rng, board)
    }

    fn recommend_attack(&mut self, _rng: &mut SmallRng) -> Result<Point, MatchError> {
        Ok(Point::new(0, 0))
    }

    fn record_attack_result(
        &mut self,
        point: Point,
        result: Result<AttackResult, BoardError>,
    ) -> Result<(), MatchError> {
        self.0.record_attack_result(point, result)
    }
}

#[test]
fn test_illegal_computer_attack_aborts() {
    let game = GameConfig::mini();
    let mut rng = SmallRng::seed_from_u64(3);
    let mut stubborn = Stubborn(AwfulPlayer::new("Stubborn", &game));
    let mut good = GoodPlayer::new("Good", &game);

    assert_eq!(
        play(&game, &mut stubborn, &mut good, &mut rng, &mut Silent),
        Err(MatchError::IllegalAttack {
            player: "Stubborn".to_string(),
            point: Point::new(0, 0),
            reason: BoardError::AlreadyAttacked(Point::new(0, 0)),
        })
    );
}

#[test]
fn test_attack_report_wording() {
    let report = |result, sunk| {
        AttackReport {
            attacker: "Ann",
            point: Point::new(1, 2),
            result,
            sunk,
            decisive: false,
        }
        .to_string()
    };
    assert_eq!(report(Ok(AttackResult::Miss), None), "Ann attacked (1,2) and missed");
    assert_eq!(report(Ok(AttackResult::Hit), None), "Ann attacked (1,2) and hit something");
    assert_eq!(
        report(Ok(AttackResult::Destroyed(3)), Some("submarine")),
        "Ann attacked (1,2) and destroyed the submarine"
    );
    assert_eq!(
        report(Err(BoardError::InvalidPoint(Point::new(1, 2))), None),
        "Ann attacked (1,2) and wasted a shot"
    );
}

#[test]
fn test_match_report_serializes() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(9);
    let mut good = GoodPlayer::new("Good", &game);
    let mut awful = AwfulPlayer::new("Awful", &game);
    let report = play(&game, &mut good, &mut awful, &mut rng, &mut Silent)?;

    let value = serde_json::to_value(report).unwrap();
    assert_eq!(value["turns"], report.turns);
    assert!(value["winner"] == "First" || value["winner"] == "Second");
    Ok(())
}
