use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fleetgrid::{
    generate_fleet_grid, init_logging, play_game, read_ship_data, ui::print_grid,
    validate_character_count, validate_ship_positions, AiPlayer, CliPlayer, FleetGrid,
    GameEngine, Player, PlayerId, Roster, Rules, DEFAULT_GRID_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
enum PlayerType {
    Human,
    Ai,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the local machine.
    Play {
        #[arg(long, help = "Roster file: ship identifiers on line 1, sizes on line 2")]
        roster: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Print a randomly generated fleet grid.
    Generate {
        #[arg(long)]
        roster: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check a fleet grid file against a roster. Exits with status 1 when invalid.
    Validate {
        #[arg(long)]
        roster: Option<PathBuf>,
        grid: PathBuf,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn load_roster(path: Option<&Path>, rules: &Rules) -> anyhow::Result<Roster> {
    match path {
        None => Ok(Roster::standard()),
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening roster {}", p.display()))?;
            read_ship_data(BufReader::new(file), rules)
                .with_context(|| format!("reading roster {}", p.display()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let rules = Rules::STANDARD;

    match cli.command {
        Commands::Play {
            roster,
            size,
            player,
            seed,
        } => {
            let roster = load_roster(roster.as_deref(), &rules)?;
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut one: Box<dyn Player> = match player {
                PlayerType::Human => Box::new(CliPlayer::stdin()),
                PlayerType::Ai => Box::new(AiPlayer::new()),
            };
            let mut two = AiPlayer::new();

            let fleet_one = one.place_fleet(&mut rng, size, &roster, &rules)?;
            let fleet_two = two.place_fleet(&mut rng, size, &roster, &rules)?;
            let mut engine = GameEngine::new(roster, &rules, fleet_one, fleet_two)?;

            let winner = play_game(&mut engine, one.as_mut(), &mut two, &mut rng, &rules)?;

            println!("\nGAME OVER after {} shots\n", engine.turns());
            println!("Your fleet:");
            print_grid(&engine.side(PlayerId::One).fleet);
            println!("\nComputer fleet:");
            print_grid(&engine.side(PlayerId::Two).fleet);
            match winner {
                PlayerId::One => println!("\nVICTORY! You have sunk all enemy ships!"),
                PlayerId::Two => println!("\nDEFEAT. All your ships have been destroyed."),
            }
        }
        Commands::Generate { roster, size, seed } => {
            let roster = load_roster(roster.as_deref(), &rules)?;
            let mut rng = make_rng(seed);
            let grid = generate_fleet_grid(&mut rng, size, &roster, &rules)?;
            print!("{}", grid);
        }
        Commands::Validate { roster, grid } => {
            let roster = load_roster(roster.as_deref(), &rules)?;
            let text = fs::read_to_string(&grid)
                .with_context(|| format!("reading grid {}", grid.display()))?;
            let fleet = FleetGrid::parse(&text, &rules)?;
            let counts = validate_character_count(&fleet, &roster);
            let positions = validate_ship_positions(&fleet, &roster);
            println!("character count: {}", if counts { "ok" } else { "FAIL" });
            println!("ship positions:  {}", if positions { "ok" } else { "FAIL" });
            if !(counts && positions) {
                std::process::exit(1);
            }
            println!("valid fleet grid");
        }
    }
    Ok(())
}
