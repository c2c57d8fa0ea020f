//! # GenerationalStrategy
//!
//! Replaces the whole population each generation. Children are produced in
//! pairs: two tournament-selected parents, one single-point crossover and a
//! mutation of each child. Pairs are bred until the requested number of
//! offspring exists; for an odd target the second child of the last pair is
//! dropped.
use super::{BitFlipMutation, BreedStrategy, SinglePointCrossover};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator,
    selection::{SelectionStrategy, TournamentSelection},
};

#[derive(Debug, Clone)]
pub struct GenerationalStrategy<S: SelectionStrategy + Clone> {
    selection: S,
    crossover: SinglePointCrossover,
    mutation: BitFlipMutation,
}

impl<S: SelectionStrategy + Clone> GenerationalStrategy<S> {
    pub fn new(selection: S, crossover: SinglePointCrossover, mutation: BitFlipMutation) -> Self {
        Self {
            selection,
            crossover,
            mutation,
        }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn crossover(&self) -> &SinglePointCrossover {
        &self.crossover
    }

    pub fn mutation(&self) -> &BitFlipMutation {
        &self.mutation
    }
}

impl GenerationalStrategy<TournamentSelection> {
    /// Builds the operators described by `options`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the tournament size is zero.
    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        Ok(Self::new(
            TournamentSelection::new(options.get_tournament_size())?,
            SinglePointCrossover::new(options.get_crossover_rate()),
            BitFlipMutation::new(
                options.get_mutation_policy(),
                options.get_effective_mutation_rate(),
            ),
        ))
    }
}

impl<S: SelectionStrategy + Clone> BreedStrategy for GenerationalStrategy<S> {
    fn breed(
        &self,
        population: &[Chromosome],
        fitness: &[i64],
        num_offspring: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        // Room for the surplus child of an odd target before truncation
        let mut children = Vec::with_capacity(num_offspring + 1);

        while children.len() < num_offspring {
            let parent1 = self.selection.select(population, fitness, rng)?;
            let parent2 = self.selection.select(population, fitness, rng)?;

            let (mut child1, mut child2) = self.crossover.crossover(&parent1, &parent2, rng)?;
            self.mutation.mutate(&mut child1, rng);
            self.mutation.mutate(&mut child2, rng);

            children.push(child1);
            children.push(child2);
        }

        children.truncate(num_offspring);
        Ok(children)
    }
}
