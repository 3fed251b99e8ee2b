mod config;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cavegen::{GeneratedMap, GeneratorConfig, generate_map};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{ConfigOverrides, load_config};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with generator settings; missing keys use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Overlay room tiles (`o`) and edge tiles (`+`) in ASCII output
    #[arg(long)]
    markers: bool,

    /// Write the map here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    let config = cli.overrides.apply(base).with_resolved_seed();

    let map = generate_map(&config).context("Map generation rejected the configuration")?;
    info!(
        seed = %map.seed,
        rooms = map.rooms.len(),
        fingerprint = map.fingerprint(),
        "generated map"
    );

    let rendered = render(&map, cli.format, cli.markers)?;
    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write map to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render(map: &GeneratedMap, format: Format, markers: bool) -> Result<String> {
    match format {
        Format::Ascii => Ok(map.render_ascii(markers)),
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(map).context("Failed to serialize map JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_overrides_and_format() {
        let cli = Cli::try_parse_from([
            "tools",
            "--width",
            "32",
            "--seed",
            "abc",
            "--no-connect",
            "--format",
            "json",
        ])
        .expect("valid arguments");

        assert_eq!(cli.format, Format::Json);
        let config = cli.overrides.apply(GeneratorConfig::default());
        assert_eq!(config.width, 32);
        assert_eq!(config.seed, "abc");
        assert!(!config.connect_rooms);
    }

    #[test]
    fn json_render_round_trips_as_a_value() {
        let config = GeneratorConfig { width: 12, height: 8, ..GeneratorConfig::default() };
        let map = generate_map(&config).expect("valid config");
        let json = render(&map, Format::Json, false).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["grid"]["height"], 8);
    }

    #[test]
    fn ascii_render_has_one_line_per_row() {
        let config = GeneratorConfig { width: 12, height: 8, ..GeneratorConfig::default() };
        let map = generate_map(&config).expect("valid config");
        let ascii = render(&map, Format::Ascii, true).expect("renders");
        assert_eq!(ascii.lines().count(), 8);
        assert!(ascii.lines().all(|line| line.chars().count() == 12));
    }
}
