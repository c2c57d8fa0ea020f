use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A strategy picks one parent from the current population using the fitness
/// vector evaluated for that same population. The returned individual is an
/// owned copy, so breeding can modify it without touching the population.
///
/// # Examples
///
/// ```
/// use bitga::chromosome::Chromosome;
/// use bitga::error::Result;
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::selection::{SelectionStrategy, TournamentSelection};
///
/// fn main() -> Result<()> {
///     let population: Vec<Chromosome> = vec!["000".parse()?, "011".parse()?, "111".parse()?];
///     let fitness = vec![0, 2, 3];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     // A tournament as large as the population almost always finds the best
///     let selection = TournamentSelection::new(3)?;
///     let parent = selection.select(&population, &fitness, &mut rng)?;
///
///     assert_eq!(parent.len(), 3);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects one individual from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    fn select(
        &self,
        population: &[Chromosome],
        fitness: &[i64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome>;
}
