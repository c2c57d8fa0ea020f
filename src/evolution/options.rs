//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every hyperparameter of a run: sizes,
//! the fitness target, operator rates and policies, logging and the parallel
//! evaluation threshold. Options are plain values, so any number of
//! configurations can exist side by side.
//!
//! ## Example
//!
//! ```rust
//! use bitga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // The lab configuration: 300 individuals of 80 bits, aiming for 40 ones
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 300);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .chromosome_length(16)
//!     .target_ones(8)
//!     .max_fitness(16)
//!     .num_generations(20)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```
//!
//! ## Validation
//!
//! `validate` rejects configurations the engine cannot run:
//!
//! - zero population size, chromosome length or generation count
//! - `target_ones` greater than the chromosome length
//! - a tournament size outside `1..=population_size`
//! - rates outside `[0, 1]`
//! - an odd population size under [`OddPopulation::RejectOdd`]

use serde::{Deserialize, Serialize};

use crate::breeding::MutationPolicy;
use crate::error::{GeneticError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    /// One event per generation plus every new best individual.
    Verbose,
    /// One event per generation.
    Minimal,
    #[default]
    None,
}

/// What to do when breeding in pairs overshoots an odd population size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OddPopulation {
    /// Breed the final pair and drop its second child.
    #[default]
    Truncate,
    /// Refuse odd population sizes during validation.
    RejectOdd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionOptions {
    population_size: usize,
    chromosome_length: usize,
    target_ones: usize,
    max_fitness: i64,
    num_generations: usize,
    tournament_size: usize,
    crossover_rate: f64,
    /// Per-bit flip probability; `None` means `1 / chromosome_length`.
    mutation_rate: Option<f64>,
    mutation_policy: MutationPolicy,
    odd_population: OddPopulation,
    log_level: LogLevel,
    /// Minimum population size for parallel fitness evaluation
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    pub fn get_target_ones(&self) -> usize {
        self.target_ones
    }

    pub fn get_max_fitness(&self) -> i64 {
        self.max_fitness
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// Returns the explicitly configured mutation rate, if any.
    pub fn get_mutation_rate(&self) -> Option<f64> {
        self.mutation_rate
    }

    /// Returns the per-bit mutation rate the engine will use.
    pub fn get_effective_mutation_rate(&self) -> f64 {
        match self.mutation_rate {
            Some(rate) => rate,
            None if self.chromosome_length > 0 => 1.0 / self.chromosome_length as f64,
            None => 0.0,
        }
    }

    pub fn get_mutation_policy(&self) -> MutationPolicy {
        self.mutation_policy
    }

    pub fn get_odd_population(&self) -> OddPopulation {
        self.odd_population
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Checks that the options describe a runnable configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.odd_population == OddPopulation::RejectOdd && self.population_size % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }

        if self.chromosome_length == 0 {
            return Err(GeneticError::Configuration(
                "Chromosome length cannot be zero".to_string(),
            ));
        }

        if self.target_ones > self.chromosome_length {
            return Err(GeneticError::Configuration(format!(
                "Target of {} ones exceeds chromosome length {}",
                self.target_ones, self.chromosome_length
            )));
        }

        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }

        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Tournament size must be in 1..={}, got {}",
                self.population_size, self.tournament_size
            )));
        }

        check_probability("Crossover rate", self.crossover_rate)?;
        if let Some(rate) = self.mutation_rate {
            check_probability("Mutation rate", rate)?;
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Unset fields take their default values.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 300,
            chromosome_length: 80,
            target_ones: 40,
            max_fitness: 80,
            num_generations: 50,
            tournament_size: 3,
            crossover_rate: 0.9,
            mutation_rate: None,
            mutation_policy: MutationPolicy::PerBit,
            odd_population: OddPopulation::Truncate,
            log_level: LogLevel::None,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    options: EvolutionOptions,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.options.population_size = value;
        self
    }

    pub fn chromosome_length(mut self, value: usize) -> Self {
        self.options.chromosome_length = value;
        self
    }

    pub fn target_ones(mut self, value: usize) -> Self {
        self.options.target_ones = value;
        self
    }

    pub fn max_fitness(mut self, value: i64) -> Self {
        self.options.max_fitness = value;
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.options.num_generations = value;
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.options.tournament_size = value;
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.options.crossover_rate = value;
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.options.mutation_rate = Some(value);
        self
    }

    pub fn mutation_policy(mut self, value: MutationPolicy) -> Self {
        self.options.mutation_policy = value;
        self
    }

    pub fn odd_population(mut self, value: OddPopulation) -> Self {
        self.options.odd_population = value;
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.options.log_level = value;
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.options.parallel_threshold = value;
        self
    }

    /// Builds the `EvolutionOptions` instance. Call `validate` before running.
    pub fn build(self) -> EvolutionOptions {
        self.options
    }
}
