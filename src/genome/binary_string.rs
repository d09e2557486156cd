//! # BinaryString Genome
//!
//! A fixed-length bit vector with bit-flip mutation, one-point and uniform
//! crossover, and the onemax fitness function (count of set bits).

use std::fmt::{self, Display};

use crate::error::{GeneticError, Result};
use crate::genome::{CrossoverKind, GenomeKind, Representation};
use crate::rng::RandomNumberGenerator;

/// A fixed-length sequence of bits.
///
/// The length is set at construction and preserved by cloning, mutation, and
/// crossover: children always have the same length as their parents.
///
/// # Examples
///
/// ```rust
/// use genebits::genome::{BinaryString, Representation};
///
/// let mut genome = BinaryString::zeros(8);
/// assert_eq!(genome.len(), 8);
/// assert_eq!(genome.compute_fitness(), 0.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryString {
    bits: Vec<bool>,
    fitness: f64,
}

impl BinaryString {
    /// Constructs a binary string of the given `length` with all bits unset.
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
            fitness: 0.0,
        }
    }

    /// Constructs a binary string of the given `length` with each bit drawn
    /// independently and uniformly from {0, 1}.
    pub fn random(rng: &mut RandomNumberGenerator, length: usize) -> Self {
        let bits = (0..length).map(|_| rng.coin_flip()).collect();
        Self { bits, fitness: 0.0 }
    }

    /// Constructs a binary string from explicit bit values.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits, fitness: 0.0 }
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the string has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit values.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Performs crossover at a single random cutoff point `c` in `[0, n)`.
    ///
    /// The first child takes this string's bits up to and including `c` and
    /// the other parent's bits after it; the second child is the exact
    /// complement.
    fn one_point_crossover(
        &self,
        other: &Self,
        rng: &mut RandomNumberGenerator,
    ) -> (Self, Self) {
        let mut child0 = BinaryString::zeros(self.len());
        let mut child1 = BinaryString::zeros(self.len());

        let cutoff = rng.gen_index(self.len());

        for i in 0..self.len() {
            child0.bits[i] = if i <= cutoff {
                self.bits[i]
            } else {
                other.bits[i]
            };
            child1.bits[i] = if i <= cutoff {
                other.bits[i]
            } else {
                self.bits[i]
            };
        }

        (child0, child1)
    }

    /// Performs crossover with an independent fair coin per position.
    ///
    /// For each index the first child takes one parent's bit and the second
    /// child takes the other parent's bit, so the children stay complementary
    /// at every position.
    fn uniform_crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
        let mut child0 = BinaryString::zeros(self.len());
        let mut child1 = BinaryString::zeros(self.len());

        for i in 0..self.len() {
            let take_own = rng.coin_flip();
            child0.bits[i] = if take_own { self.bits[i] } else { other.bits[i] };
            child1.bits[i] = if take_own { other.bits[i] } else { self.bits[i] };
        }

        (child0, child1)
    }
}

impl Representation for BinaryString {
    /// Computes the fitness as the number of set bits (onemax), stores it,
    /// and returns it.
    fn compute_fitness(&mut self) -> f64 {
        self.fitness = self.bits.iter().filter(|&&bit| bit).count() as f64;
        self.fitness
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Flips one bit at an index chosen uniformly at random.
    ///
    /// Exactly one bit changes per call; how often mutation is applied is the
    /// orchestrator's decision.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        let index = rng.gen_index(self.bits.len());
        self.bits[index] = !self.bits[index];
    }

    fn crossover(
        &self,
        other: &Self,
        kind: CrossoverKind,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Self, Self)> {
        // Mixing lengths is a caller bug, not a runtime condition
        debug_assert_eq!(self.len(), other.len());

        match kind {
            CrossoverKind::OnePoint => Ok(self.one_point_crossover(other, rng)),
            CrossoverKind::Uniform => Ok(self.uniform_crossover(other, rng)),
            CrossoverKind::TwoPoint => Err(GeneticError::UnsupportedCrossover {
                genome: GenomeKind::BinaryString,
                kind,
            }),
        }
    }
}

impl Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", u8::from(*bit))?;
        }
        write!(f, "]")
    }
}
