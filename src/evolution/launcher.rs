use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use super::{
    challenge::{Challenge, TargetOnes},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    breeding::{BreedStrategy, GenerationalStrategy},
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    population::{best_index, Population},
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
};

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// The best individual found in any generation. Among equally fit
    /// individuals the earliest found is kept.
    pub best: Chromosome,
    /// The fitness of `best`.
    pub best_fitness: i64,
    /// Best fitness within each generation, in order.
    pub curve: Vec<i64>,
    /// Number of generations evaluated; equals `curve.len()`.
    pub generations_run: usize,
    /// Whether the run stopped early on a cancellation request.
    pub cancelled: bool,
}

impl EvolutionResult {
    /// Running maximum of the convergence curve.
    pub fn best_so_far(&self) -> Vec<i64> {
        self.curve
            .iter()
            .scan(i64::MIN, |best, &fitness| {
                *best = (*best).max(fitness);
                Some(*best)
            })
            .collect()
    }

    pub fn reached(&self, max_fitness: i64) -> bool {
        self.best_fitness >= max_fitness
    }
}

/// Runs the generational loop with a breeding strategy and a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    strategy: Strategy,
    challenge: Chall,
}

impl EvolutionLauncher<GenerationalStrategy<TournamentSelection>, TargetOnes> {
    /// Builds the tournament/single-point/bit-flip launcher described by `options`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `options` does not validate.
    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::new(
            GenerationalStrategy::from_options(options)?,
            TargetOnes::new(options.get_target_ones(), options.get_max_fitness()),
        ))
    }
}

impl<Strategy, Chall> EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    pub fn new(strategy: Strategy, challenge: Chall) -> Self {
        Self {
            strategy,
            challenge,
        }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves a random population for `options.get_num_generations()` generations.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options do not validate
    /// - The breeding process fails
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.run(options, rng, None)
    }

    /// Like [`evolve`](Self::evolve), but stops between generations once
    /// `cancel` is set. The first generation always runs, so a cancelled
    /// result still carries a best individual.
    pub fn evolve_with_cancel(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        cancel: &AtomicBool,
    ) -> Result<EvolutionResult> {
        self.run(options, rng, Some(cancel))
    }

    fn run(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        cancel: Option<&AtomicBool>,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        let span = info_span!(
            "evolve",
            population_size = options.get_population_size(),
            chromosome_length = options.get_chromosome_length(),
            generations = options.get_num_generations(),
        );
        let _guard = span.enter();

        let mut population = Population::random(
            options.get_population_size(),
            options.get_chromosome_length(),
            rng,
        );
        let mut curve = Vec::with_capacity(options.get_num_generations());
        let mut best: Option<(Chromosome, i64)> = None;
        let mut cancelled = false;

        for generation in 0..options.get_num_generations() {
            if generation > 0 && cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                info!(generation, "evolution cancelled");
                cancelled = true;
                break;
            }

            let fitness = population.evaluate(&self.challenge, options.get_parallel_threshold());
            let gen_best_idx = best_index(&fitness).ok_or_else_genetic(|| {
                GeneticError::Evolution(format!(
                    "No individuals to evaluate in generation {}",
                    generation
                ))
            })?;
            let gen_best_fitness = fitness[gen_best_idx];
            curve.push(gen_best_fitness);

            // Ties keep the earlier individual
            let improved = best
                .as_ref()
                .map_or(true, |(_, best_fitness)| gen_best_fitness > *best_fitness);
            if improved {
                let individual = population.individuals()[gen_best_idx].clone();
                if options.get_log_level() == LogLevel::Verbose {
                    debug!(generation, fitness = gen_best_fitness, individual = %individual, "new best individual");
                }
                best = Some((individual, gen_best_fitness));
            }

            if options.get_log_level() != LogLevel::None {
                let best_fitness = best.as_ref().map_or(gen_best_fitness, |(_, f)| *f);
                info!(
                    generation,
                    generation_best = gen_best_fitness,
                    best_fitness,
                    "generation evaluated"
                );
            }

            let offspring = self
                .strategy
                .breed(
                    population.individuals(),
                    &fitness,
                    options.get_population_size(),
                    rng,
                )
                .map_err(|e| {
                    GeneticError::Evolution(format!(
                        "Failed to breed candidates in generation {}: {}",
                        generation, e
                    ))
                })?;
            population = Population::from_individuals(offspring)?;
        }

        let (best, best_fitness) = best.ok_or_else_genetic(|| {
            GeneticError::Evolution("Evolution completed without evaluating a generation".to_string())
        })?;

        info!(best_fitness, generations_run = curve.len(), cancelled, "evolution finished");

        Ok(EvolutionResult {
            best,
            best_fitness,
            generations_run: curve.len(),
            curve,
            cancelled,
        })
    }
}

/// Runs the bit-pattern GA with explicit parameters and a seed.
///
/// Uses tournament selection, single-point crossover and per-bit mutation.
///
/// ```rust
/// use bitga::evolution::run_ga;
///
/// let result = run_ga(40, 16, 8, 16, 10, 3, 0.9, 1.0 / 16.0, 7).unwrap();
/// assert_eq!(result.best.len(), 16);
/// assert_eq!(result.curve.len(), 10);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn run_ga(
    pop_size: usize,
    chrom_len: usize,
    target_ones: usize,
    max_fitness: i64,
    generations: usize,
    tournament_k: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    seed: u64,
) -> Result<EvolutionResult> {
    let options = EvolutionOptions::builder()
        .population_size(pop_size)
        .chromosome_length(chrom_len)
        .target_ones(target_ones)
        .max_fitness(max_fitness)
        .num_generations(generations)
        .tournament_size(tournament_k)
        .crossover_rate(crossover_rate)
        .mutation_rate(mutation_rate)
        .build();

    let mut rng = RandomNumberGenerator::from_seed(seed);
    EvolutionLauncher::from_options(&options)?.evolve(&options, &mut rng)
}
