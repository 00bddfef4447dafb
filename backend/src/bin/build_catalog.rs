//! Starscape catalog builder.
//!
//! Converts the raw star table into the JSON catalog consumed by the scene.
//!
//! ```bash
//! starscape-build --input hygdata_v3.csv --output stars_60ly.json --max-distance-ly 60
//! ```

use std::env;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use starscape::config::StarscapeConfig;
use starscape::services::catalog_builder;

#[derive(Debug, Parser)]
#[command(name = "starscape-build", version, about = "Build the nearby-star JSON catalog")]
struct Args {
    /// Raw star table (CSV with a header row)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Catalog JSON to write
    #[arg(long)]
    output: Option<PathBuf>,

    /// Keep stars within this many light-years
    #[arg(long)]
    max_distance_ly: Option<f64>,

    /// Configuration file (default: starscape.toml, searched)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = StarscapeConfig::load(args.config.as_deref())?;
    if let Some(input) = args.input {
        config.builder.input = input;
    }
    if let Some(output) = args.output {
        config.builder.output = output;
    }
    if let Some(max) = args.max_distance_ly {
        config.builder.max_distance_ly = max;
    }
    config.validate()?;

    match catalog_builder::run(&config.builder) {
        Ok(summary) => {
            println!("{}", summary);
            Ok(())
        }
        Err(e) => {
            error!("Catalog build failed: {:#}", e);
            Err(e)
        }
    }
}
