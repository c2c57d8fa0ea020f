//! # Seed sweeps
//!
//! Runs the same configuration under many seeds on the rayon pool. Every run
//! owns its own generator, so each entry equals the single run with that seed.

use rayon::prelude::*;
use tracing::info;

use super::{launcher::EvolutionLauncher, options::EvolutionOptions, EvolutionResult};
use crate::{error::Result, rng::RandomNumberGenerator};

/// One seed and its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRun {
    pub seed: u64,
    pub result: EvolutionResult,
}

/// Aggregate view over a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub runs: Vec<SweepRun>,
    /// Number of runs whose best fitness reached the configured maximum.
    pub optimal_runs: usize,
    pub mean_best_fitness: f64,
}

/// Runs `options` once per seed, in parallel. Results keep the seed order.
///
/// # Errors
///
/// Returns the first configuration or evolution error encountered.
pub fn sweep(options: &EvolutionOptions, seeds: &[u64]) -> Result<SweepSummary> {
    let launcher = EvolutionLauncher::from_options(options)?;

    let runs = seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            launcher
                .evolve(options, &mut rng)
                .map(|result| SweepRun { seed, result })
        })
        .collect::<Result<Vec<_>>>()?;

    let optimal_runs = runs
        .iter()
        .filter(|run| run.result.reached(options.get_max_fitness()))
        .count();
    let mean_best_fitness = if runs.is_empty() {
        0.0
    } else {
        runs.iter().map(|run| run.result.best_fitness as f64).sum::<f64>() / runs.len() as f64
    };

    info!(runs = runs.len(), optimal_runs, mean_best_fitness, "sweep finished");

    Ok(SweepSummary {
        runs,
        optimal_runs,
        mean_best_fitness,
    })
}
