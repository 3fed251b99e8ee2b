//! TOML config file loading and CLI overrides for the generator.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cavegen::GeneratorConfig;
use clap::Args;

/// Flags that override whatever the config file (or the defaults) set.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Map width in tiles
    #[arg(long)]
    pub width: Option<usize>,
    /// Map height in tiles
    #[arg(long)]
    pub height: Option<usize>,
    /// Seed string; the same seed always yields the same map
    #[arg(long)]
    pub seed: Option<String>,
    /// Ignore the seed and pick a fresh one for this run
    #[arg(long)]
    pub random_seed: bool,
    /// Chance (0-100) that an interior tile starts as wall
    #[arg(long)]
    pub fill_percent: Option<u8>,
    /// Smoothing passes (0-10)
    #[arg(long)]
    pub smoothing_iterations: Option<u8>,
    /// Wall-neighbour count (0-8) above which a tile becomes wall
    #[arg(long)]
    pub wall_threshold: Option<u8>,
    /// Skip carving passages between rooms
    #[arg(long)]
    pub no_connect: bool,
    /// Keep small wall clumps
    #[arg(long)]
    pub keep_small_walls: bool,
    /// Keep small rooms
    #[arg(long)]
    pub keep_small_rooms: bool,
    /// Wall regions smaller than this become floor
    #[arg(long)]
    pub wall_size_threshold: Option<usize>,
    /// Rooms smaller than this become wall
    #[arg(long)]
    pub room_size_threshold: Option<usize>,
    /// Radius of the floor disc stamped along each passage
    #[arg(long)]
    pub passage_radius: Option<u8>,
}

pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<GeneratorConfig> {
    Ok(toml::from_str(content)?)
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = &self.seed {
            config.seed = seed.clone();
            config.use_random_seed = false;
        }
        if self.random_seed {
            config.use_random_seed = true;
        }
        if let Some(fill_percent) = self.fill_percent {
            config.fill_percent = fill_percent;
        }
        if let Some(iterations) = self.smoothing_iterations {
            config.smoothing_iterations = iterations;
        }
        if let Some(threshold) = self.wall_threshold {
            config.wall_threshold = threshold;
        }
        if self.no_connect {
            config.connect_rooms = false;
        }
        if self.keep_small_walls {
            config.remove_walls = false;
        }
        if self.keep_small_rooms {
            config.remove_rooms = false;
        }
        if let Some(threshold) = self.wall_size_threshold {
            config.wall_size_threshold = threshold;
        }
        if let Some(threshold) = self.room_size_threshold {
            config.room_size_threshold = threshold;
        }
        if let Some(radius) = self.passage_radius {
            config.passage_radius = radius;
        }
        config
    }
}
