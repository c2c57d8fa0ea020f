pub mod challenge;
pub mod launcher;
pub mod options;
pub mod sweep;

pub use challenge::{Challenge, TargetOnes};
pub use launcher::{run_ga, EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel, OddPopulation};
pub use sweep::{sweep, SweepRun, SweepSummary};
