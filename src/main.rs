#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, play, ConsoleObserver, GameConfig, PlayerKind, Side, Silent,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play one narrated match with the standard fleet.
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
        first: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
        second: PlayerKind,
        #[arg(long, default_value = "Player 1")]
        first_name: String,
        #[arg(long, default_value = "Player 2")]
        second_name: String,
        #[arg(long, default_value_t = 10)]
        rows: usize,
        #[arg(long, default_value_t = 10)]
        cols: usize,
        #[arg(long, help = "Do not wait for enter between turns")]
        no_pause: bool,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play many silent matches, alternating who moves first.
    Tournament {
        #[arg(long, value_enum, default_value_t = PlayerKind::Awful)]
        first: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Mediocre)]
        second: PlayerKind,
        #[arg(long, default_value_t = 10)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Two mediocre players on a 2x3 board with a single rowboat.
    Mini {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

/// Standard fleet on a board of the requested size. Bad dimensions are fatal.
#[cfg(feature = "std")]
fn board_config(rows: usize, cols: usize) -> anyhow::Result<GameConfig> {
    if (rows, cols) == (10, 10) {
        return Ok(GameConfig::standard());
    }
    let mut game = GameConfig::new(rows, cols)?;
    for (length, symbol, name) in broadside::STANDARD_FLEET {
        game.add_ship(length, symbol, name)?;
    }
    Ok(game)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            first,
            second,
            first_name,
            second_name,
            rows,
            cols,
            no_pause,
            seed,
        } => {
            let game = board_config(rows, cols)?;
            let mut rng = make_rng(seed);
            let mut p1 = first
                .create(&first_name, &game)
                .ok_or_else(|| anyhow::anyhow!("{} players are not available", first))?;
            let mut p2 = second
                .create(&second_name, &game)
                .ok_or_else(|| anyhow::anyhow!("{} players are not available", second))?;
            let mut observer = ConsoleObserver::stdout(!no_pause);
            let report = play(&game, p1.as_mut(), p2.as_mut(), &mut rng, &mut observer)?;
            if report.winner.is_none() {
                println!("A fleet could not be placed; no winner.");
            }
        }
        Commands::Tournament {
            first,
            second,
            games,
            seed,
        } => {
            let game = GameConfig::standard();
            let mut rng = make_rng(seed);
            let first_name = format!("{} (first)", first);
            let second_name = format!("{} (second)", second);
            let (mut first_wins, mut second_wins) = (0, 0);
            for k in 1..=games {
                println!("============================= Game {} =============================", k);
                let mut p1 = first
                    .create(&first_name, &game)
                    .ok_or_else(|| anyhow::anyhow!("{} players are not available", first))?;
                let mut p2 = second
                    .create(&second_name, &game)
                    .ok_or_else(|| anyhow::anyhow!("{} players are not available", second))?;
                // odd games are opened by `first`, even ones by `second`
                let winner = if k % 2 == 1 {
                    play(&game, p1.as_mut(), p2.as_mut(), &mut rng, &mut Silent)?.winner
                } else {
                    play(&game, p2.as_mut(), p1.as_mut(), &mut rng, &mut Silent)?
                        .winner
                        .map(Side::other)
                };
                match winner {
                    Some(Side::First) => first_wins += 1,
                    Some(Side::Second) => second_wins += 1,
                    None => println!("No winner: a fleet could not be placed."),
                }
            }
            println!("{} won {} out of {} games.", first_name, first_wins, games);
            println!("{} won {} out of {} games.", second_name, second_wins, games);
        }
        Commands::Mini { seed } => {
            let game = GameConfig::mini();
            let mut rng = make_rng(seed);
            println!("This mini-game has one ship, a 2-segment rowboat.");
            let mut p1 = broadside::MediocrePlayer::new("Popeye", &game);
            let mut p2 = broadside::MediocrePlayer::new("Bluto", &game);
            let mut observer = ConsoleObserver::stdout(false);
            play(&game, &mut p1, &mut p2, &mut rng, &mut observer)?;
        }
    }
    Ok(())
}
