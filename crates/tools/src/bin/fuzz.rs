use std::collections::{BTreeSet, VecDeque};
use std::io;

use anyhow::{Result, bail};
use cavegen::{Coord, GeneratedMap, GeneratorConfig, MapError, TileKind, generate_map};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
}

fn pick(rng: &mut ChaCha8Rng, min_value: u64, max_value: u64) -> u64 {
    min_value + rng.next_u64() % (max_value - min_value + 1)
}

fn random_config(rng: &mut ChaCha8Rng, run: u32) -> GeneratorConfig {
    GeneratorConfig {
        width: pick(rng, 1, 96) as usize,
        height: pick(rng, 1, 64) as usize,
        seed: format!("fuzz-{run}-{}", rng.next_u32()),
        use_random_seed: false,
        fill_percent: pick(rng, 0, 100) as u8,
        smoothing_iterations: pick(rng, 0, 10) as u8,
        wall_threshold: pick(rng, 0, 8) as u8,
        connect_rooms: rng.next_u32() % 4 != 0,
        remove_walls: rng.next_u32() % 2 == 0,
        remove_rooms: rng.next_u32() % 2 == 0,
        wall_size_threshold: pick(rng, 0, 60) as usize,
        room_size_threshold: pick(rng, 0, 60) as usize,
        passage_radius: pick(rng, 0, 3) as u8,
    }
}

fn floor_is_single_region(map: &GeneratedMap) -> bool {
    let floors: Vec<Coord> =
        map.grid.coords().filter(|&coord| map.grid[coord] == TileKind::Floor).collect();
    let Some(start) = floors.first().copied() else {
        return true;
    };

    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(tile) = open.pop_front() {
        for next in tile.axis_neighbors() {
            if map.tile_at(next) == TileKind::Floor && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen.len() == floors.len()
}

fn check_invariants(config: &GeneratorConfig, map: &GeneratedMap) -> Result<()> {
    for room in &map.rooms {
        if room.tiles().iter().any(|&tile| map.tile_at(tile) != TileKind::Floor) {
            bail!("room tile is not floor for {config:?}");
        }
    }
    if config.connect_rooms {
        if map.rooms.len() > 1 {
            bail!("{} rooms left after connecting for {config:?}", map.rooms.len());
        }
        if !floor_is_single_region(map) {
            bail!("floor split into several regions for {config:?}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(seed = args.seed, runs = args.runs, "starting generator fuzz");
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let config = random_config(&mut rng, run);
        if config.passage_radius == 0 {
            match generate_map(&config) {
                Err(MapError::InvalidConfiguration { field: "passage_radius", .. }) => continue,
                _ => bail!("radius 0 was not rejected for {config:?}"),
            }
        }
        let map = generate_map(&config)?;
        check_invariants(&config, &map)?;
        debug!(run, fingerprint = map.fingerprint(), rooms = map.rooms.len(), "run passed");
    }

    info!("fuzzing completed successfully");
    Ok(())
}
