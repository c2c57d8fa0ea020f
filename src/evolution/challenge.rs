use serde::{Deserialize, Serialize};

use crate::chromosome::Chromosome;

/// Scores an individual. Higher is better.
pub trait Challenge: Send + Sync {
    fn score(&self, individual: &Chromosome) -> i64;
}

/// Rewards chromosomes whose number of 1-bits is close to a target.
///
/// The score is `max_fitness - |ones_count - target_ones|`, so `max_fitness`
/// is reached exactly when the chromosome has `target_ones` ones.
///
/// ```rust
/// use bitga::chromosome::Chromosome;
/// use bitga::evolution::{Challenge, TargetOnes};
///
/// let challenge = TargetOnes::new(5, 10);
/// let individual: Chromosome = "1111100000".parse().unwrap();
/// assert_eq!(challenge.score(&individual), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetOnes {
    pub target_ones: usize,
    pub max_fitness: i64,
}

impl TargetOnes {
    pub fn new(target_ones: usize, max_fitness: i64) -> Self {
        Self {
            target_ones,
            max_fitness,
        }
    }
}

impl Challenge for TargetOnes {
    fn score(&self, individual: &Chromosome) -> i64 {
        let distance = individual.ones_count().abs_diff(self.target_ones);
        self.max_fitness - distance as i64
    }
}
