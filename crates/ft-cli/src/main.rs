//! festival-trails — count trails near each festival and write the rankings.
//!
//! ```text
//! festival-trails --festivals cleaned_festivals.csv --trails cleaned_trails.csv \
//!                 --out-dir output --radius-km 10
//! ```
//!
//! Writes `top_20_festivals.csv`, `commune_trails.csv`, `region_festivals.csv`
//! and `region_trails.csv` into the output directory.

mod cli;
mod config;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let settings = config::resolve(&cli)?;
    info!(
        festivals = %settings.festivals.display(),
        trails = %settings.trails.display(),
        out_dir = %settings.out_dir.display(),
        "starting run"
    );

    let t0 = Instant::now();
    let output = ft_pipeline::run_files(
        &settings.festivals,
        &settings.trails,
        &settings.out_dir,
        settings.proximity,
    )
    .context("festival-trails run failed")?;
    let elapsed = t0.elapsed();

    println!("{}", output.report);
    println!("Completed in {:.3} s", elapsed.as_secs_f64());
    println!();

    println!("{:<40} {:>8}", "Festival", "Trails");
    println!("{}", "-".repeat(49));
    for row in output.rankings.top_festivals.iter().take(5) {
        println!("{:<40} {:>8}", row.name, row.trails_nearby);
    }

    Ok(())
}
