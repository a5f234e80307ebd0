use fleetgrid::{
    init_logging_with, level_from_env, play_game, AiPlayer, GameEngine, Player, PlayerId, Roster,
    Rules, DEFAULT_GRID_SIZE,
};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SideSummary {
    seed: u64,
    hits_taken: Vec<usize>,
}

#[derive(Serialize)]
struct SimSummary {
    player1: SideSummary,
    player2: SideSummary,
    shots: usize,
    winner: &'static str,
}

fn main() -> anyhow::Result<()> {
    init_logging_with(level_from_env(LevelFilter::Warn));
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let rules = Rules::STANDARD;
    let roster = Roster::standard();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let f1 = p1.place_fleet(&mut rng1, DEFAULT_GRID_SIZE, &roster, &rules)?;
    let f2 = p2.place_fleet(&mut rng2, DEFAULT_GRID_SIZE, &roster, &rules)?;
    let mut engine = GameEngine::new(roster, &rules, f1, f2)?;

    let winner = play_game(&mut engine, &mut p1, &mut p2, &mut rng1, &rules)?;

    let result = SimSummary {
        player1: SideSummary {
            seed: seed1,
            hits_taken: engine.side(PlayerId::One).hits.as_slice().to_vec(),
        },
        player2: SideSummary {
            seed: seed2,
            hits_taken: engine.side(PlayerId::Two).hits.as_slice().to_vec(),
        },
        shots: engine.turns(),
        winner: match winner {
            PlayerId::One => "player1",
            PlayerId::Two => "player2",
        },
    };

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
