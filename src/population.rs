//! # Population
//!
//! An ordered, fixed-size collection of equal-length chromosomes. The order
//! carries no meaning for fitness, but it is how an individual is paired with
//! its score within one generation.

use rayon::prelude::*;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::evolution::Challenge;
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Chromosome>,
}

impl Population {
    /// Creates `size` random chromosomes of `chromosome_length` bits.
    pub fn random(size: usize, chromosome_length: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            individuals: (0..size)
                .map(|_| Chromosome::random(chromosome_length, rng))
                .collect(),
        }
    }

    /// Wraps existing individuals.
    ///
    /// # Errors
    ///
    /// Returns an error if `individuals` is empty or the lengths differ.
    pub fn from_individuals(individuals: Vec<Chromosome>) -> Result<Self> {
        let first_len = individuals
            .first()
            .map(Chromosome::len)
            .ok_or(GeneticError::EmptyPopulation)?;

        if let Some(odd) = individuals.iter().find(|c| c.len() != first_len) {
            return Err(GeneticError::Configuration(format!(
                "Population mixes chromosome lengths {} and {}",
                first_len,
                odd.len()
            )));
        }

        Ok(Self { individuals })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Chromosome] {
        &self.individuals
    }

    /// Scores every individual, in population order.
    ///
    /// Populations at or above `parallel_threshold` are scored on the rayon
    /// pool. Scoring is pure, so both paths give the same vector.
    pub fn evaluate<C: Challenge>(&self, challenge: &C, parallel_threshold: usize) -> Vec<i64> {
        if self.individuals.len() >= parallel_threshold {
            self.individuals
                .par_iter()
                .map(|individual| challenge.score(individual))
                .collect()
        } else {
            self.individuals
                .iter()
                .map(|individual| challenge.score(individual))
                .collect()
        }
    }
}

/// Index of the first maximum of `fitness`, or `None` if it is empty.
pub fn best_index(fitness: &[i64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, &score) in fitness.iter().enumerate() {
        match best {
            Some(current) if fitness[current] >= score => {}
            _ => best = Some(idx),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::TargetOnes;

    #[test]
    fn test_random_population_shape() {
        let mut rng = RandomNumberGenerator::from_seed(31);
        let population = Population::random(300, 80, &mut rng);

        assert_eq!(population.len(), 300);
        assert!(population.individuals().iter().all(|c| c.len() == 80));
    }

    #[test]
    fn test_random_population_bits_are_balanced() {
        let mut rng = RandomNumberGenerator::from_seed(32);
        let population = Population::random(200, 100, &mut rng);

        let ones: usize = population.individuals().iter().map(Chromosome::ones_count).sum();
        let share = ones as f64 / 20_000.0;
        assert!((share - 0.5).abs() < 0.02, "share of ones {}", share);
    }

    #[test]
    fn test_parallel_and_sequential_evaluation_agree() {
        let mut rng = RandomNumberGenerator::from_seed(33);
        let population = Population::random(500, 40, &mut rng);
        let challenge = TargetOnes::new(20, 40);

        let sequential = population.evaluate(&challenge, usize::MAX);
        let parallel = population.evaluate(&challenge, 0);

        assert_eq!(sequential.len(), 500);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_from_individuals_validates() {
        assert!(matches!(
            Population::from_individuals(Vec::new()),
            Err(GeneticError::EmptyPopulation)
        ));

        let mixed = vec!["101".parse().unwrap(), "10".parse().unwrap()];
        assert!(Population::from_individuals(mixed).is_err());

        let ok = vec!["101".parse().unwrap(), "110".parse().unwrap()];
        assert_eq!(Population::from_individuals(ok).unwrap().len(), 2);
    }

    #[test]
    fn test_best_index_is_stable() {
        assert_eq!(best_index(&[]), None);
        assert_eq!(best_index(&[3, 9, 1, 9]), Some(1));
        assert_eq!(best_index(&[-5, -2, -2]), Some(1));
    }
}
