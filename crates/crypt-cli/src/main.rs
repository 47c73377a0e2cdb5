//! cryptgen: generate a dungeon layout from the command line
//!
//! Prints the dungeon as JSON on stdout. `--ascii` prints a character dump
//! of the grid instead, which is handy when tuning parameters.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crypt_core::{DungeonRng, Generation, Generator, GeneratorConfig};

/// Procedural dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "cryptgen")]
#[command(author, version, long_about = None)]
#[command(about = "Generate a room-and-corridor dungeon layout")]
struct Args {
    /// Seed for the random number generator (random if omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON file with generator parameters
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Grid width (overrides the config file)
    #[arg(long = "width")]
    width: Option<i32>,

    /// Grid height (overrides the config file)
    #[arg(long = "height")]
    height: Option<i32>,

    /// Target number of rooms (overrides the config file)
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Print a character dump of the grid instead of JSON
    #[arg(short = 'a', long = "ascii")]
    ascii: bool,

    /// Print the generation report to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    fn build_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                GeneratorConfig::from_json(&text)?
            }
            None => GeneratorConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(rooms) = self.rooms {
            config.max_rooms = rooms;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.build_config()?;
    let generator = Generator::new(config)?;

    let mut rng = match args.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    let Generation { dungeon, report } = generator.generate(&mut rng);

    if args.verbose {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
        if report.is_degraded() {
            eprintln!(
                "degraded layout: {} rooms unplaced, {} edges dropped",
                report.unplaced_rooms(),
                report.dropped_edges.len()
            );
        }
    }

    if args.ascii {
        print!("{}", dungeon.to_ascii());
    } else {
        println!("{}", dungeon.to_json()?);
    }
    Ok(())
}
