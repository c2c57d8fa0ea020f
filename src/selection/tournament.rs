use serde::{Deserialize, Serialize};

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that picks the fittest of a small random sample.
///
/// Each tournament samples `tournament_size` indices uniformly **with
/// replacement** and returns a copy of the best sampled individual. Ties go to
/// the participant drawn first.
///
/// - Smaller tournament sizes lead to more exploration (a size of 1 is uniform
///   random selection)
/// - Larger tournament sizes lead to more exploitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    ///
    /// # Errors
    ///
    /// Returns an error if the fitness vector is empty.
    pub fn run_tournament(
        &self,
        fitness: &[i64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        if fitness.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut best_idx = rng.gen_index(fitness.len());
        let mut best_fitness = fitness[best_idx];

        for _ in 1..self.tournament_size {
            let idx = rng.gen_index(fitness.len());
            if fitness[idx] > best_fitness {
                best_idx = idx;
                best_fitness = fitness[idx];
            }
        }

        Ok(best_idx)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Chromosome],
        fitness: &[i64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::Selection(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        let winner_idx = self.run_tournament(fitness, rng)?;
        Ok(population[winner_idx].clone())
    }
}
