use std::collections::BTreeMap;
use std::path::PathBuf;

use autoplay::{play_game, GameStats, Recorder};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut highest_tile_counts: BTreeMap<u32, usize> = BTreeMap::new();
    let mut total_turns: u64 = 0;
    for game_idx in 0..args.num_games {
        let GameStats {
            turns,
            highest_tile,
        } = play_game(rng.gen(), &mut rng, &mut recorder)?;
        debug!(game_idx, turns, highest_tile);
        *highest_tile_counts.entry(highest_tile).or_default() += 1;
        total_turns += u64::from(turns);
    }

    println!("\nHighest tile reached over {} games:", args.num_games);
    for (value, count) in highest_tile_counts.iter().rev() {
        println!(
            "{:>6}: {:>5} ({:4.1}%)",
            value,
            count,
            *count as f32 / args.num_games as f32 * 100.0
        );
    }
    println!(
        "Average turns per game: {:.1}",
        total_turns as f64 / args.num_games as f64
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
