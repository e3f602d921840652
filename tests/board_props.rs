use broadside::ai::{place_fleet, PLACEMENT_ATTEMPTS};
use broadside::{AttackResult, Board, BoardError, GameConfig, Orientation, Point};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn random_board(game: &GameConfig, seed: u64) -> Board<'_> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(game);
    place_fleet(&mut board, &mut rng, PLACEMENT_ATTEMPTS).unwrap();
    let shots = rng.random_range(0..game.area());
    for _ in 0..shots {
        let _ = board.attack(game.random_point(&mut rng));
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn place_then_unplace_restores_board(
        seed in any::<u64>(),
        row in -2..12i32,
        col in -2..12i32,
        orientation in orientation(),
    ) {
        let game = GameConfig::standard();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(&game);
        // a partial fleet, leaving the patrol boat free
        for id in 0..3 {
            let anchor = game.random_point(&mut rng);
            let _ = board.place_ship(anchor, id, Orientation::Horizontal);
        }
        let before = board.clone();
        let anchor = Point::new(row, col);
        match board.place_ship(anchor, 4, orientation) {
            Ok(()) => {
                prop_assert!(board.is_placed(4));
                for k in 0..2 {
                    prop_assert_eq!(board.ship_at(anchor.along(orientation, k)), Some(4));
                }
                board.unplace_ship(anchor, 4, orientation).unwrap();
                prop_assert_eq!(board, before);
            }
            Err(_) => prop_assert_eq!(board, before),
        }
    }

    #[test]
    fn destroyed_iff_every_cell_attacked(seed in any::<u64>()) {
        let game = GameConfig::standard();
        let board = random_board(&game, seed);
        for id in 0..game.n_ships() {
            let cells = board.ship_cells(id).unwrap();
            prop_assert_eq!(cells.len(), game.ship_length(id));
            let all_hit = cells.iter().all(|&p| board.is_attacked(p) == Some(true));
            prop_assert_eq!(board.is_destroyed(id), all_hit);
        }
        let all_sunk = (0..game.n_ships()).all(|id| board.is_destroyed(id));
        prop_assert_eq!(board.all_ships_destroyed(), all_sunk);
    }

    #[test]
    fn second_attack_is_rejected(seed in any::<u64>(), row in 0..10i32, col in 0..10i32) {
        let game = GameConfig::standard();
        let mut board = random_board(&game, seed);
        let p = Point::new(row, col);
        let _ = board.attack(p);
        let after = board.clone();
        prop_assert_eq!(board.attack(p), Err(BoardError::AlreadyAttacked(p)));
        prop_assert_eq!(board, after);
    }

    #[test]
    fn attack_result_matches_occupancy(seed in any::<u64>(), row in 0..10i32, col in 0..10i32) {
        let game = GameConfig::standard();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(&game);
        place_fleet(&mut board, &mut rng, PLACEMENT_ATTEMPTS).unwrap();
        let p = Point::new(row, col);
        let result = board.attack(p).unwrap();
        match board.ship_at(p) {
            None => prop_assert_eq!(result, AttackResult::Miss),
            // a single shot cannot sink anything in the standard fleet
            Some(_) => prop_assert_eq!(result, AttackResult::Hit),
        }
    }

    #[test]
    fn clear_then_replace(seed in any::<u64>()) {
        let game = GameConfig::standard();
        let mut board = random_board(&game, seed);
        board.clear();
        prop_assert_eq!(&board, &Board::new(&game));
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        prop_assert!(place_fleet(&mut board, &mut rng, PLACEMENT_ATTEMPTS).is_ok());
    }
}
