//! End-to-end runs against the bundled catalogs.

use std::path::Path;

use u_knapsack::knapsack::exact::brute_force;
use u_knapsack::{evaluate, run_search, AnnealConfig, Catalog, KnapsackProblem, SaRunner};

fn data(name: &str) -> Catalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name);
    Catalog::from_json_path(path).expect("bundled catalog should load")
}

#[test]
fn small_catalog_reference_run() {
    let catalog = data("item_set_small.json");
    let problem = KnapsackProblem::new(&catalog, 5.0).unwrap();
    let config = AnnealConfig::default().with_seed(42);

    let result = SaRunner::run(&problem, &config).unwrap();

    assert!(
        (6..=7).contains(&result.best_value),
        "expected 6 or 7, got {}",
        result.best_value
    );
    let energy = evaluate(&result.best, &catalog);
    assert!(energy.weight <= 5.0);
    assert_eq!(energy.value, result.best_value);

    let (optimal, optimum) = brute_force(&problem).unwrap();
    assert_eq!(optimum.value, 7);
    assert_eq!(optimal.to_string(), "[1 1 0 0]");
}

#[test]
fn small_catalog_unseeded_entry_point() {
    let catalog = data("item_set_small.json");
    for _ in 0..10 {
        let (best, value) = run_search(&catalog, 5.0, 1000.0, 0.1, 0.9).unwrap();
        let energy = evaluate(&best, &catalog);
        assert!(energy.weight <= 5.0);
        assert_eq!(energy.value, value);
    }
}

#[test]
fn medium_catalog_restarts_close_to_optimum() {
    let catalog = data("item_set_medium.json");
    let capacity = catalog.total_weight() / 3.0;
    let problem = KnapsackProblem::new(&catalog, capacity).unwrap();
    let config = AnnealConfig::default()
        .with_cooling_rate(0.995)
        .with_min_temperature(0.01)
        .with_seed(7);

    let result = SaRunner::run_restarts(&problem, &config, 16).unwrap();
    let (_, optimum) = brute_force(&problem).unwrap();

    assert!(result.best_weight <= capacity);
    assert!(result.best_value <= optimum.value);
    assert!(
        result.best_value as f64 >= 0.8 * optimum.value as f64,
        "annealing found {} but the optimum is {}",
        result.best_value,
        optimum.value
    );
}

#[test]
fn result_serializes() {
    let catalog = data("item_set_small.json");
    let problem = KnapsackProblem::new(&catalog, 5.0).unwrap();
    let result = SaRunner::run(&problem, &AnnealConfig::default().with_seed(1)).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["best_value"], result.best_value);
    assert_eq!(json["best"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["stop_reason"], "Frozen");
}
