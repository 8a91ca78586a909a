//! DragLoad demo driver
//!
//! Run the built-in flow:
//! `cargo run -p dragload_app`
//!
//! Or execute a scenario file:
//! `cargo run -p dragload_app -- --scenario refresh.json`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dragload_app::{DemoWorld, RunConfig, Scenario};

#[derive(Parser)]
#[command(name = "dragload", about = "Headless DragLoad demo and scenario runner", version)]
struct Args {
    /// Scenario file (JSON) to execute instead of the built-in demo flow
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Initial number of rows in the simulated list
    #[arg(long, default_value_t = 0)]
    rows: usize,

    /// Simulated fetch delay in milliseconds
    #[arg(long, default_value_t = 3000)]
    fetch_delay: u64,

    /// Milliseconds per scheduler frame
    #[arg(long, default_value_t = 16.0)]
    tick_ms: f32,

    /// Verbose logging (per-signal trace output)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        })
        .init();

    let world = DemoWorld::new(args.rows, args.fetch_delay as f32);
    let config = RunConfig {
        tick_ms: args.tick_ms,
    };

    let report = match &args.scenario {
        Some(path) => {
            let scenario = Scenario::from_path(path)
                .with_context(|| format!("loading scenario {}", path.display()))?;
            world
                .run_scenario(&scenario, config)
                .context("scenario failed")?
        }
        None => world.run_demo(config).context("demo flow failed")?,
    };

    println!(
        "ok: {} frames ({:.0}ms) | rows {} | triggers down {} / up {} | status down {:?} / up {:?}",
        report.frames,
        report.elapsed_ms,
        report.rows,
        report.down_triggers,
        report.up_triggers,
        report.down_status,
        report.up_status,
    );
    Ok(())
}
