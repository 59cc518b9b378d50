//! CDN min-cost flow timing harness
//!
//! Builds synthetic CDN topologies at a few scales, solves them, prints a
//! human-readable summary, and optionally writes the full report as JSON.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cdn_mcmf::report;

/// Time the CDN min-cost flow solver across small/medium/large topologies
/// and an increasing scalability sweep
#[derive(Parser)]
#[command(name = "cdn-mcmf-bench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// RNG seed for topology generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Demand requested from source to sink at every scale
    #[arg(long, default_value_t = 500)]
    demand: i64,

    /// Number of steps in the scalability sweep
    #[arg(long, default_value_t = 5)]
    sweep_steps: usize,

    /// Write the full report as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "cdn_mcmf=debug"
    } else {
        "cdn_mcmf=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = report::run_all(cli.seed, cli.demand, cli.sweep_steps)?;

    println!("scale        elapsed_ms   flow    cost       nodes  edges");
    for (label, records) in [
        ("small", &result.small_scale),
        ("medium", &result.medium_scale),
        ("large", &result.large_scale),
    ] {
        for record in records {
            println!(
                "{label:<12} {:<12} {:<7} {:<10} {:<6} {}",
                record.elapsed_ms, record.flow, record.cost, record.total_nodes, record.num_edges
            );
        }
    }
    for record in &result.scalability {
        println!(
            "sweep[{}]     {:<12} {:<7} {:<10} {:<6} {}",
            record.scale,
            record.elapsed_time_ms,
            record.flow,
            record.cost,
            record.total_nodes,
            record.num_edges
        );
    }

    if let Some(path) = cli.output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(&path, json)?;
        println!("wrote report to {}", path.display());
    }

    Ok(())
}
