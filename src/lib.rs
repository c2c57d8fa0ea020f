pub mod breeding;
pub mod chromosome;
pub mod classify;
pub mod document;
pub mod error;
pub mod evolution;
pub mod population;
pub mod rng;
pub mod rules;
pub mod selection;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{run_ga, EvolutionLauncher, EvolutionOptions, EvolutionResult};
