//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that build
//! the next population from the current one and its fitness vector.
pub mod crossover;
pub mod generational;
pub mod mutation;

use std::fmt::Debug;

use crate::{chromosome::Chromosome, error::Result, rng::RandomNumberGenerator};

/// Breeds a full offspring population.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds exactly `num_offspring` children from the evaluated population.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current population.
    /// - `fitness`: Fitness of each individual, index-aligned with `population`.
    /// - `num_offspring`: Size of the population to produce.
    /// - `rng`: The run's random number generator.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty
    /// - The fitness vector doesn't match the population
    /// - Parents of different lengths are crossed
    fn breed(
        &self,
        population: &[Chromosome],
        fitness: &[i64],
        num_offspring: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

pub use crossover::SinglePointCrossover;
pub use generational::GenerationalStrategy;
pub use mutation::{BitFlipMutation, MutationPolicy};
