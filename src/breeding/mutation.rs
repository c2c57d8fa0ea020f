//! # Mutation
//!
//! Bit-flip mutation of a freshly bred child. Two policies exist because the
//! lab material used both: an independent flip per bit with a small
//! probability, and exactly one flipped bit per child. They are not
//! statistically equivalent. `PerBit` flips `len * rate` bits on average and
//! may flip none, while `SingleBit` always flips exactly one.

use serde::{Deserialize, Serialize};

use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// How a child chromosome is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MutationPolicy {
    /// Flip each bit independently with the configured mutation rate.
    #[default]
    PerBit,
    /// Flip exactly one uniformly chosen bit. The mutation rate is ignored.
    SingleBit,
}

/// Applies a mutation policy at a fixed per-bit rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BitFlipMutation {
    policy: MutationPolicy,
    rate: f64,
}

impl BitFlipMutation {
    pub fn new(policy: MutationPolicy, rate: f64) -> Self {
        Self { policy, rate }
    }

    pub fn policy(&self) -> MutationPolicy {
        self.policy
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mutates `individual` in place and returns the number of flipped bits.
    pub fn mutate(&self, individual: &mut Chromosome, rng: &mut RandomNumberGenerator) -> usize {
        if individual.is_empty() {
            return 0;
        }

        match self.policy {
            MutationPolicy::PerBit => {
                let mut flipped = 0;
                for index in 0..individual.len() {
                    if rng.gen_unit() < self.rate {
                        individual.flip(index);
                        flipped += 1;
                    }
                }
                flipped
            }
            MutationPolicy::SingleBit => {
                let index = rng.gen_index(individual.len());
                individual.flip(index);
                1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_bit_zero_rate_is_identity() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let original = Chromosome::random(64, &mut rng);
        let mut child = original.clone();

        let flipped = BitFlipMutation::new(MutationPolicy::PerBit, 0.0).mutate(&mut child, &mut rng);

        assert_eq!(flipped, 0);
        assert_eq!(child, original);
    }

    #[test]
    fn test_per_bit_full_rate_complements() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut child: Chromosome = "10110".parse().unwrap();

        let flipped = BitFlipMutation::new(MutationPolicy::PerBit, 1.0).mutate(&mut child, &mut rng);

        assert_eq!(flipped, 5);
        assert_eq!(child.to_string(), "01001");
    }

    #[test]
    fn test_per_bit_expected_flips() {
        let mut rng = RandomNumberGenerator::from_seed(2024);
        let mutation = BitFlipMutation::new(MutationPolicy::PerBit, 0.05);
        let trials = 2000;
        let len = 100;

        let mut total = 0;
        for _ in 0..trials {
            let original = Chromosome::random(len, &mut rng);
            let mut child = original.clone();
            let flipped = mutation.mutate(&mut child, &mut rng);

            let differing = original
                .bits()
                .iter()
                .zip(child.bits())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, flipped);
            total += flipped;
        }

        let mean = total as f64 / trials as f64;
        // Expected 100 * 0.05 = 5 flips per child
        assert!((mean - 5.0).abs() < 0.3, "mean flips {}", mean);
    }

    #[test]
    fn test_single_bit_flips_exactly_one() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let mutation = BitFlipMutation::new(MutationPolicy::SingleBit, 0.0);

        for _ in 0..200 {
            let original = Chromosome::random(20, &mut rng);
            let mut child = original.clone();

            assert_eq!(mutation.mutate(&mut child, &mut rng), 1);
            let differing = original
                .bits()
                .iter()
                .zip(child.bits())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 1);
        }
    }
}
