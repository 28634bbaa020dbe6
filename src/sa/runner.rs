//! SA execution loop.
//!
//! # Algorithm
//!
//! 1. Draw random solutions until one fits under the weight cap
//! 2. While the temperature is above the floor:
//!    a. Flip one random flag of the current solution
//!    b. Discard the candidate if it is over the cap (no cooling)
//!    c. Record it as the new best if it beats the best value
//!    d. Move to it with the Metropolis probability
//!    e. Cool the temperature geometrically
//! 3. Return the best solution seen

use super::acceptance::{acceptance_probability, accepts};
use super::config::AnnealConfig;
use crate::error::{Error, Result};
use crate::knapsack::{flip_candidate, random_solution, Catalog, Energy, KnapsackProblem, Solution};
use rand::Rng;
use serde::{Deserialize, Serialize};
use u_numflow::random::create_rng;

/// Why the search loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The temperature fell to or below `min_temperature`.
    Frozen,
    /// `max_iterations` candidate evaluations were spent first.
    IterationBudget,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaResult {
    /// The best feasible solution found.
    pub best: Solution,

    /// Value of the best solution.
    pub best_value: u64,

    /// Weight of the best solution.
    pub best_weight: f64,

    /// Candidate evaluations, including discarded over-weight candidates.
    pub iterations: usize,

    /// Iterations that cooled the temperature (feasible candidates).
    pub cooled_iterations: usize,

    /// Candidates discarded for exceeding the weight cap.
    pub infeasible_rejections: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of feasible candidates strictly better than the current solution.
    pub improving_moves: usize,

    /// Random solutions drawn before a feasible start was found.
    pub init_attempts: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Whether the run froze or ran out of iteration budget.
    pub stop_reason: StopReason,

    /// Best value at the start and after every improvement of the best.
    pub value_history: Vec<u64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an rng seeded from `config.seed`, or from OS entropy
    /// when no seed is set.
    pub fn run(problem: &KnapsackProblem<'_>, config: &AnnealConfig) -> Result<SaResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing every random number from `rng`.
    ///
    /// Draw order: `N` flag draws per initialization attempt, then per
    /// iteration one flip-index draw followed, for feasible candidates
    /// only, by one acceptance draw.
    pub fn run_with_rng<R: Rng>(
        problem: &KnapsackProblem<'_>,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<SaResult> {
        config.validate()?;
        if problem.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        // Initialize
        let (mut current, start, init_attempts) =
            feasible_start(problem, config.max_init_attempts, rng)?;
        let mut current_value = start.value;
        let mut best = current.clone();
        let mut best_value = start.value;
        let mut best_weight = start.weight;

        tracing::debug!(
            items = problem.len(),
            capacity = problem.capacity(),
            init_attempts,
            start_value = start.value,
            start_weight = start.weight,
            "feasible start found"
        );

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut cooled_iterations = 0usize;
        let mut infeasible_rejections = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut stop_reason = StopReason::Frozen;
        let mut value_history = vec![best_value];

        while temperature > config.min_temperature {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                stop_reason = StopReason::IterationBudget;
                break;
            }

            let candidate = flip_candidate(&current, rng);
            let energy = problem.evaluate(&candidate);
            iterations += 1;

            // Over the cap: void iteration, temperature unchanged.
            if !problem.is_feasible(&energy) {
                infeasible_rejections += 1;
                continue;
            }

            let probability = acceptance_probability(current_value, energy.value, temperature);
            let draw = rng.random_range(0.0..1.0);

            if energy.value > current_value {
                improving_moves += 1;
            }

            // Best tracking does not depend on acceptance.
            if energy.value > best_value {
                best = candidate.clone();
                best_value = energy.value;
                best_weight = energy.weight;
                value_history.push(best_value);
                tracing::trace!(iteration = iterations, temperature, best_value, "new best");
            }

            if accepts(probability, draw) {
                current = candidate;
                current_value = energy.value;
                accepted_moves += 1;
            }

            temperature *= config.cooling_rate;
            cooled_iterations += 1;
        }

        tracing::debug!(
            best_value,
            best_weight,
            iterations,
            cooled_iterations,
            infeasible_rejections,
            accepted_moves,
            ?stop_reason,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_value,
            best_weight,
            iterations,
            cooled_iterations,
            infeasible_rejections,
            accepted_moves,
            improving_moves,
            init_attempts,
            final_temperature: temperature,
            stop_reason,
            value_history,
        })
    }

    /// Runs `restarts` independent searches and returns the best one.
    ///
    /// Run `i` is seeded with `base + i`, where `base` is `config.seed` or a
    /// fresh random value. Ties keep the lowest run index. With the
    /// `parallel` feature the runs execute on the rayon thread pool.
    pub fn run_restarts(
        problem: &KnapsackProblem<'_>,
        config: &AnnealConfig,
        restarts: usize,
    ) -> Result<SaResult> {
        if restarts == 0 {
            return Err(Error::InvalidConfig("restarts must be at least 1".into()));
        }
        config.validate()?;

        let base = config.seed.unwrap_or_else(rand::random);
        let run_one = |i: usize| {
            let seeded = config.clone().with_seed(base.wrapping_add(i as u64));
            Self::run(problem, &seeded)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<Result<SaResult>> = {
            use rayon::prelude::*;
            (0..restarts).into_par_iter().map(run_one).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<Result<SaResult>> = (0..restarts).map(run_one).collect();

        let mut best: Option<SaResult> = None;
        for result in results {
            let result = result?;
            if best.as_ref().is_none_or(|b| result.best_value > b.best_value) {
                best = Some(result);
            }
        }
        tracing::debug!(restarts, best_value = best.as_ref().map(|b| b.best_value), "restarts finished");
        best.ok_or(Error::InvalidConfig("restarts must be at least 1".into()))
    }
}

/// Anneals `catalog` under `weight_cap` with an unseeded rng and returns the
/// best solution and its value.
///
/// # Examples
///
/// ```
/// use u_knapsack::{run_search, Catalog, Item};
///
/// let catalog = Catalog::new(vec![
///     Item::new("A", 2.0, 3),
///     Item::new("B", 3.0, 4),
///     Item::new("C", 4.0, 5),
///     Item::new("D", 5.0, 6),
/// ])
/// .unwrap();
///
/// let (best, value) = run_search(&catalog, 5.0, 1000.0, 0.1, 0.9).unwrap();
/// assert_eq!(best.len(), 4);
/// assert!(value >= 3);
/// ```
pub fn run_search(
    catalog: &Catalog,
    weight_cap: f64,
    max_temp: f64,
    min_temp: f64,
    cooling_rate: f64,
) -> Result<(Solution, u64)> {
    let problem = KnapsackProblem::new(catalog, weight_cap)?;
    let config = AnnealConfig::default()
        .with_initial_temperature(max_temp)
        .with_min_temperature(min_temp)
        .with_cooling_rate(cooling_rate);
    let result = SaRunner::run(&problem, &config)?;
    Ok((result.best, result.best_value))
}

/// Rejection-samples random solutions until one fits under the cap.
///
/// `max_attempts == 0` never gives up, so a cap nothing can satisfy loops
/// forever.
fn feasible_start<R: Rng>(
    problem: &KnapsackProblem<'_>,
    max_attempts: usize,
    rng: &mut R,
) -> Result<(Solution, Energy, usize)> {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let solution = random_solution(problem.len(), rng);
        let energy = problem.evaluate(&solution);
        if problem.is_feasible(&energy) {
            return Ok((solution, energy, attempts));
        }
        if max_attempts > 0 && attempts >= max_attempts {
            return Err(Error::InfeasibleStart { attempts });
        }
    }
}
