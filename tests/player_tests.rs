use broadside::{
    create_player, AttackResult, AwfulPlayer, Board, BoardError, GameConfig, GoodPlayer,
    MatchError, MediocrePlayer, Orientation, Player, PlayerKind, Point,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_player_factory() {
    let game = GameConfig::standard();
    for role in ["awful", "mediocre", "good", "human"] {
        let player = create_player(role, "Alice", &game).unwrap();
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.is_human(), role == "human");
    }
    assert!(create_player("expert", "Bob", &game).is_none());
    assert!(create_player("Good", "Bob", &game).is_none());
}

#[test]
fn test_player_kind_names() {
    for kind in PlayerKind::ALL {
        assert_eq!(kind.as_str().parse::<PlayerKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.as_str());
    }
    assert!("random".parse::<PlayerKind>().is_err());
}

#[test]
fn test_awful_player_clusters_fleet() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(&game);
    let mut player = AwfulPlayer::new("Awful", &game);
    player.place_ships(&mut rng, &mut board)?;

    for id in 0..game.n_ships() {
        let row = id as i32;
        let expected: Vec<Point> = (0..game.ship_length(id))
            .map(|k| Point::new(row, 0).along(Orientation::Horizontal, k))
            .collect();
        assert_eq!(board.ship_cells(id).unwrap(), expected.as_slice());
    }
    Ok(())
}

#[test]
fn test_awful_player_placement_can_fail() {
    // three ships stacked in rows 0..3 need a third row
    let mut game = GameConfig::new(2, 4).unwrap();
    game.add_ship(2, 'A', "a").unwrap();
    game.add_ship(2, 'B', "b").unwrap();
    game.add_ship(2, 'C', "c").unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(&game);
    let mut player = AwfulPlayer::new("Awful", &game);

    assert_eq!(
        player.place_ships(&mut rng, &mut board),
        Err(MatchError::Placement(BoardError::ShipOutOfBounds))
    );
}

#[test]
fn test_awful_player_sweeps_backwards() -> Result<(), MatchError> {
    let game = GameConfig::mini();
    let mut rng = SmallRng::seed_from_u64(0);
    let mut player = AwfulPlayer::new("Awful", &game);
    let expected = [(1, 2), (1, 1), (1, 0), (0, 2), (0, 1), (0, 0), (1, 2), (1, 1)];
    for (row, col) in expected {
        let p = player.recommend_attack(&mut rng)?;
        assert_eq!(p, Point::new(row, col));
        player.record_attack_result(p, Ok(AttackResult::Miss))?;
    }
    Ok(())
}

#[test]
fn test_computer_players_reject_refused_shots() {
    let game = GameConfig::standard();
    let p = Point::new(2, 2);
    let refusal = Err(BoardError::AlreadyAttacked(p));
    let expected = |name: &str| MatchError::IllegalAttack {
        player: name.to_string(),
        point: p,
        reason: BoardError::AlreadyAttacked(p),
    };

    let mut awful = AwfulPlayer::new("A", &game);
    assert_eq!(awful.record_attack_result(p, refusal), Err(expected("A")));
    let mut mediocre = MediocrePlayer::new("M", &game);
    assert_eq!(mediocre.record_attack_result(p, refusal), Err(expected("M")));
    let mut good = GoodPlayer::new("G", &game);
    assert_eq!(good.record_attack_result(p, refusal), Err(expected("G")));
}

/// Let `player` shoot at a freshly placed fleet until every cell is used,
/// checking that no cell is ever fired at twice.
fn exhaust(player: &mut dyn Player, seed: u64) -> Result<(), MatchError> {
    let game = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(&game);
    let mut defender = GoodPlayer::new("Target", &game);
    defender.place_ships(&mut rng, &mut board)?;

    for _ in 0..game.area() {
        let p = player.recommend_attack(&mut rng)?;
        let result = board.attack(p);
        assert!(result.is_ok(), "{} fired at {} twice", player.name(), p);
        player.record_attack_result(p, result)?;
    }
    assert!(board.all_ships_destroyed());
    assert_eq!(
        player.recommend_attack(&mut rng),
        Err(MatchError::OutOfTargets {
            player: player.name().to_string()
        })
    );
    Ok(())
}

#[test]
fn test_mediocre_player_never_repeats() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    for seed in 0..5 {
        exhaust(&mut MediocrePlayer::new("Mediocre", &game), seed)?;
    }
    Ok(())
}

#[test]
fn test_good_player_never_repeats() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    for seed in 0..5 {
        exhaust(&mut GoodPlayer::new("Good", &game), seed)?;
    }
    Ok(())
}

#[test]
fn test_computer_players_spread_fleet() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(17);
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(MediocrePlayer::new("Mediocre", &game)),
        Box::new(GoodPlayer::new("Good", &game)),
    ];
    for mut player in players {
        let mut board = Board::new(&game);
        player.place_ships(&mut rng, &mut board)?;
        assert!((0..game.n_ships()).all(|id| board.is_placed(id)));
        assert!(game.points().all(|p| board.is_blocked(p) == Some(false)));
    }
    Ok(())
}

#[test]
fn test_good_player_reports_hunt_mode() -> Result<(), MatchError> {
    let game = GameConfig::standard();
    let mut player = GoodPlayer::new("Good", &game);
    let p = Point::new(3, 3);
    player.record_attack_result(p, Ok(AttackResult::Hit))?;
    assert_eq!(
        player.hunt().mode(),
        broadside::ai::HuntMode::FindDirection { origin: p, next: 0 }
    );
    player.record_attack_result(Point::new(2, 3), Ok(AttackResult::Destroyed(4)))?;
    assert_eq!(player.hunt().mode(), broadside::ai::HuntMode::Random);
    Ok(())
}
