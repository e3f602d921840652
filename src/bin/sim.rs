use broadside::{play, GameConfig, PlayerKind, Side, Silent};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if !(2..=4).contains(&args.len()) {
        eprintln!("Usage: {} <seed> [first-kind] [second-kind]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let kind = |i: usize, default: PlayerKind| -> anyhow::Result<PlayerKind> {
        match args.get(i) {
            Some(s) => s.parse::<PlayerKind>().map_err(|e| anyhow::anyhow!(e)),
            None => Ok(default),
        }
    };
    let first = kind(2, PlayerKind::Good)?;
    let second = kind(3, PlayerKind::Awful)?;
    if first == PlayerKind::Human || second == PlayerKind::Human {
        anyhow::bail!("the simulator only runs computer players");
    }

    let game = GameConfig::standard();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut p1 = first
        .create("player1", &game)
        .ok_or_else(|| anyhow::anyhow!("cannot create {} player", first))?;
    let mut p2 = second
        .create("player2", &game)
        .ok_or_else(|| anyhow::anyhow!("cannot create {} player", second))?;

    let report = play(&game, p1.as_mut(), p2.as_mut(), &mut rng, &mut Silent)?;

    let winner = report.winner.map(|side| match side {
        Side::First => "player1",
        Side::Second => "player2",
    });
    let result = json!({
        "seed": seed,
        "player1": {"kind": first.as_str()},
        "player2": {"kind": second.as_str()},
        "winner": winner,
        "report": report,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
