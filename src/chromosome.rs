//! # Chromosome
//!
//! A `Chromosome` is one individual of the bit-pattern search: a fixed-length
//! ordered sequence of bits. The length is set at creation and every operator
//! in this crate preserves it.
//!
//! ## Example
//!
//! ```rust
//! use bitga::chromosome::Chromosome;
//!
//! let parent1: Chromosome = "11110000".parse().unwrap();
//! let parent2: Chromosome = "00001111".parse().unwrap();
//!
//! let (child1, child2) = parent1.splice_at(&parent2, 2).unwrap();
//! assert_eq!(child1.to_string(), "11001111");
//! assert_eq!(child2.to_string(), "00110000");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A fixed-length sequence of bits, each stored as `0` or `1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Chromosome {
    bits: Vec<u8>,
}

impl Chromosome {
    /// Creates a chromosome from explicit bits.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any value is not `0` or `1`.
    pub fn from_bits(bits: Vec<u8>) -> Result<Self> {
        if let Some(pos) = bits.iter().position(|&b| b > 1) {
            return Err(GeneticError::Configuration(format!(
                "Bit at position {} is {}, expected 0 or 1",
                pos, bits[pos]
            )));
        }
        Ok(Self { bits })
    }

    /// Creates a chromosome of `len` bits, each drawn uniformly from {0, 1}.
    pub fn random(len: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            bits: (0..len).map(|_| rng.gen_bit()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of 1-bits.
    pub fn ones_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Number of 0-bits.
    pub fn zeros_count(&self) -> usize {
        self.len() - self.ones_count()
    }

    /// Complements the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] ^= 1;
    }

    /// Splices two equal-length chromosomes at `point`.
    ///
    /// Returns `(self[..point] + other[point..], other[..point] + self[point..])`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the lengths differ or `point` lies
    /// outside `1..len`.
    pub fn splice_at(&self, other: &Self, point: usize) -> Result<(Self, Self)> {
        if self.len() != other.len() {
            return Err(GeneticError::Configuration(format!(
                "Cannot cross chromosomes of length {} and {}",
                self.len(),
                other.len()
            )));
        }
        if point == 0 || point >= self.len() {
            return Err(GeneticError::Configuration(format!(
                "Crossover point {} outside 1..{}",
                point,
                self.len()
            )));
        }

        let mut first = Vec::with_capacity(self.len());
        first.extend_from_slice(&self.bits[..point]);
        first.extend_from_slice(&other.bits[point..]);

        let mut second = Vec::with_capacity(self.len());
        second.extend_from_slice(&other.bits[..point]);
        second.extend_from_slice(&self.bits[point..]);

        Ok((Self { bits: first }, Self { bits: second }))
    }
}

impl TryFrom<Vec<u8>> for Chromosome {
    type Error = GeneticError;

    fn try_from(bits: Vec<u8>) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl From<Chromosome> for Vec<u8> {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.bits
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(GeneticError::Configuration(format!(
                    "Invalid bit character '{}'",
                    other
                ))),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_has_requested_length() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let chromosome = Chromosome::random(80, &mut rng);

        assert_eq!(chromosome.len(), 80);
        assert!(chromosome.bits().iter().all(|&b| b <= 1));
    }

    #[test]
    fn test_counts() {
        let chromosome: Chromosome = "1110100".parse().unwrap();
        assert_eq!(chromosome.ones_count(), 4);
        assert_eq!(chromosome.zeros_count(), 3);
    }

    #[test]
    fn test_flip() {
        let mut chromosome: Chromosome = "0101".parse().unwrap();
        chromosome.flip(0);
        chromosome.flip(3);
        assert_eq!(chromosome.to_string(), "1100");
    }

    #[test]
    fn test_from_bits_rejects_non_binary() {
        assert!(Chromosome::from_bits(vec![0, 1, 2]).is_err());
        assert!("01x1".parse::<Chromosome>().is_err());
    }

    #[test]
    fn test_splice_at_every_point() {
        let p1: Chromosome = "1111111111".parse().unwrap();
        let p2: Chromosome = "0000000000".parse().unwrap();

        for point in 1..p1.len() {
            let (c1, c2) = p1.splice_at(&p2, point).unwrap();
            assert_eq!(c1.len(), 10);
            assert_eq!(c2.len(), 10);
            assert_eq!(&c1.bits()[..point], &p1.bits()[..point]);
            assert_eq!(&c1.bits()[point..], &p2.bits()[point..]);
            assert_eq!(&c2.bits()[..point], &p2.bits()[..point]);
            assert_eq!(&c2.bits()[point..], &p1.bits()[point..]);
        }
    }

    #[test]
    fn test_splice_at_rejects_bad_input() {
        let p1: Chromosome = "1010".parse().unwrap();
        let p2: Chromosome = "01".parse().unwrap();
        assert!(p1.splice_at(&p2, 1).is_err());
        assert!(p1.splice_at(&p1, 0).is_err());
        assert!(p1.splice_at(&p1, 4).is_err());
    }

    #[test]
    fn test_serde_as_bit_array() {
        let chromosome: Chromosome = "1001".parse().unwrap();
        let json = serde_json::to_string(&chromosome).unwrap();
        assert_eq!(json, "[1,0,0,1]");

        assert!(serde_json::from_str::<Chromosome>("[1,3]").is_err());
    }
}
