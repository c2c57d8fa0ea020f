//! # Single-point crossover
//!
//! Recombines two parents by splicing them at one position. With probability
//! `1 - rate` the parents are passed through unchanged.

use serde::{Deserialize, Serialize};

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SinglePointCrossover {
    rate: f64,
}

impl SinglePointCrossover {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Produces two children from two equal-length parents.
    ///
    /// One uniform draw in `[0, 1)` decides whether crossover happens; a draw
    /// above `rate` returns copies of the parents. Otherwise the splice point
    /// is drawn uniformly from `1..=len - 1`. Chromosomes shorter than two
    /// bits have no splice point and are copied.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the parents differ in length.
    pub fn crossover(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)> {
        if parent1.len() != parent2.len() {
            return Err(GeneticError::Configuration(format!(
                "Cannot cross chromosomes of length {} and {}",
                parent1.len(),
                parent2.len()
            )));
        }
        if rng.gen_unit() > self.rate || parent1.len() < 2 {
            return Ok((parent1.clone(), parent2.clone()));
        }

        let point = rng.gen_inclusive(1, parent1.len() - 1);
        parent1.splice_at(parent2, point)
    }
}
