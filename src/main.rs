//! u-knapsack CLI
//!
//! Loads a JSON item catalog and packs it with simulated annealing.
//!
//! Usage:
//!     u-knapsack --items data/item_set_small.json --max-weight 5
//!     u-knapsack --items data/item_set_small.json --seed 42 --restarts 16 --verify

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use u_knapsack::knapsack::exact::{brute_force, MAX_EXACT_ITEMS};
use u_knapsack::{AnnealConfig, Catalog, KnapsackProblem, SaRunner, Solution};

/// Pack a knapsack with simulated annealing
#[derive(Parser)]
#[command(name = "u-knapsack")]
#[command(version)]
#[command(about = "0/1 knapsack by simulated annealing", long_about = None)]
struct Cli {
    /// JSON file holding an array of {"name", "weight", "value"} items
    #[arg(short, long, default_value = "data/item_set_small.json")]
    items: PathBuf,

    /// Weight cap of the knapsack
    #[arg(short = 'w', long, default_value = "5.0")]
    max_weight: f64,

    /// Starting temperature
    #[arg(long, default_value = "1000.0")]
    max_temp: f64,

    /// Temperature floor that ends the search
    #[arg(long, default_value = "0.1")]
    min_temp: f64,

    /// Geometric cooling factor in (0, 1)
    #[arg(short, long, default_value = "0.9")]
    cooling_rate: f64,

    /// Random seed; omit for a fresh run every time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Independent annealing runs; the best one is reported
    #[arg(short, long, default_value = "1")]
    restarts: usize,

    /// Candidate evaluation budget, 0 for none
    #[arg(long, default_value = "0")]
    max_iterations: usize,

    /// Compare against exhaustive search (small catalogs only)
    #[arg(long)]
    verify: bool,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    enable_tracing();
    let cli = Cli::parse();

    let catalog = Catalog::from_json_path(&cli.items)
        .with_context(|| format!("while loading items from {}", cli.items.display()))?;
    let problem = KnapsackProblem::new(&catalog, cli.max_weight)?;

    let mut config = AnnealConfig::default()
        .with_initial_temperature(cli.max_temp)
        .with_min_temperature(cli.min_temp)
        .with_cooling_rate(cli.cooling_rate)
        .with_max_iterations(cli.max_iterations);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    tracing::info!(
        "Packing {} items under weight cap {} ({} run(s))",
        catalog.len(),
        cli.max_weight,
        cli.restarts
    );

    let start = Instant::now();
    let result = SaRunner::run_restarts(&problem, &config, cli.restarts)?;
    let duration = start.elapsed();

    println!("Best solution: {}", result.best);
    show_knapsack(&result.best, &catalog);
    println!("Total value: {}", result.best_value);
    println!("Total weight: {}", result.best_weight);
    println!(
        "Iterations: {} ({} cooled, {} over the cap)",
        result.iterations, result.cooled_iterations, result.infeasible_rejections
    );
    println!("Execution time: {duration:?}");

    if cli.verify {
        if catalog.len() > MAX_EXACT_ITEMS {
            tracing::warn!(
                "Skipping verification: {} items exceed the exhaustive limit of {}",
                catalog.len(),
                MAX_EXACT_ITEMS
            );
        } else {
            let (_, optimum) = brute_force(&problem)?;
            println!(
                "Optimal value: {} (gap {})",
                optimum.value,
                optimum.value - result.best_value
            );
        }
    }

    Ok(())
}

fn show_knapsack(solution: &Solution, catalog: &Catalog) {
    println!("List of items included in knapsack:");
    for i in solution.included() {
        let item = &catalog[i];
        println!(
            " - {} (Weight: {}, Value: {})",
            item.name, item.weight, item.value
        );
    }
    println!("{}", "- ".repeat(31).trim_end());
    println!("Total items included: {}", solution.count_included());
}
