//! # Genome Abstraction
//!
//! This module defines the capability contract for genome representations and
//! the closed set of concrete variants the engine can evolve.
//!
//! The [`Representation`] trait is the contract: computing and storing a
//! fitness value, mutating in place, and recombining with another individual
//! of the same representation. [`Genome`] is the tagged variant set the
//! orchestrator works with; adding a new representation means adding a new
//! variant that implements the same contract.
//!
//! ## Example
//!
//! ```rust
//! use genebits::genome::{BinaryString, Representation};
//! use genebits::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let mut genome = BinaryString::random(&mut rng, 16);
//!
//! let fitness = genome.compute_fitness();
//! assert!((0.0..=16.0).contains(&fitness));
//! ```

pub mod binary_string;

pub use binary_string::BinaryString;

use std::fmt::{self, Debug, Display};

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// The crossover strategies a genome representation may implement.
///
/// Not every representation implements every kind; requesting an
/// unimplemented kind fails with
/// [`GeneticError::UnsupportedCrossover`](crate::error::GeneticError::UnsupportedCrossover).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverKind {
    /// Single random cutoff point; children swap tails beyond it.
    OnePoint,
    /// Independent fair coin per position; children stay complementary.
    Uniform,
    /// Two cutoff points with the middle segment swapped. Declared for the
    /// dispatcher; no current representation implements it.
    TwoPoint,
}

impl Display for CrossoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossoverKind::OnePoint => write!(f, "one-point"),
            CrossoverKind::Uniform => write!(f, "uniform"),
            CrossoverKind::TwoPoint => write!(f, "two-point"),
        }
    }
}

/// Descriptor for the concrete genome representations.
///
/// Used in diagnostics and error payloads.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenomeKind {
    /// Fixed-length bit vector.
    BinaryString,
}

impl Display for GenomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenomeKind::BinaryString => write!(f, "binary-string"),
        }
    }
}

/// Per-kind initialization arguments for random genome construction.
///
/// Each variant carries exactly the arguments its representation needs, so an
/// init block can never be paired with the wrong genome kind.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenomeInit {
    /// Arguments for [`BinaryString`] genomes.
    BinaryString {
        /// Number of bits; must be greater than zero.
        length: usize,
    },
}

impl GenomeInit {
    /// Returns the genome kind this init block constructs.
    pub fn kind(&self) -> GenomeKind {
        match self {
            GenomeInit::BinaryString { .. } => GenomeKind::BinaryString,
        }
    }
}

/// Capability contract for genome representations.
///
/// A representation owns its genetic material and its last computed fitness
/// value. Whether an operator is applied at all is the orchestrator's
/// decision; implementations only define what the operator does.
///
/// Implementations must also be `Clone` (deep copy with independent storage),
/// `Display` (diagnostic rendering), and `Send + Sync` so populations can be
/// evaluated in parallel.
pub trait Representation: Clone + Debug + Display + Send + Sync {
    /// Computes the fitness of this individual, stores it, and returns it.
    ///
    /// Must be deterministic with respect to the genetic material.
    fn compute_fitness(&mut self) -> f64;

    /// Returns the last computed fitness value.
    ///
    /// The value is stale until [`compute_fitness`](Self::compute_fitness)
    /// has been called.
    fn fitness(&self) -> f64;

    /// Applies one mutation to this individual in place.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator);

    /// Recombines this individual with `other`, producing two children.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::UnsupportedCrossover`](crate::error::GeneticError::UnsupportedCrossover)
    /// if the representation does not implement `kind`.
    fn crossover(
        &self,
        other: &Self,
        kind: CrossoverKind,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Self, Self)>
    where
        Self: Sized;
}

/// One candidate solution, tagged with its concrete representation.
///
/// The set of variants is closed: the engine never mixes representations
/// within a run, and crossover between different variants is a programming
/// error rather than a runtime condition.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Genome {
    /// Fixed-length bit vector with onemax fitness.
    BinaryString(BinaryString),
}

impl Genome {
    /// Returns the descriptor for this genome's representation.
    pub fn kind(&self) -> GenomeKind {
        match self {
            Genome::BinaryString(_) => GenomeKind::BinaryString,
        }
    }

    /// Computes, stores, and returns this genome's fitness.
    pub fn compute_fitness(&mut self) -> f64 {
        match self {
            Genome::BinaryString(genome) => genome.compute_fitness(),
        }
    }

    /// Returns the last computed fitness value.
    pub fn fitness(&self) -> f64 {
        match self {
            Genome::BinaryString(genome) => genome.fitness(),
        }
    }

    /// Applies one mutation in place.
    pub fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        match self {
            Genome::BinaryString(genome) => genome.mutate(rng),
        }
    }

    /// Recombines this genome with `other`, producing two children.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::UnsupportedCrossover`](crate::error::GeneticError::UnsupportedCrossover)
    /// if the representation does not implement `kind`.
    pub fn crossover(
        &self,
        other: &Genome,
        kind: CrossoverKind,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Genome, Genome)> {
        match (self, other) {
            (Genome::BinaryString(a), Genome::BinaryString(b)) => {
                let (child0, child1) = a.crossover(b, kind, rng)?;
                Ok((Genome::BinaryString(child0), Genome::BinaryString(child1)))
            }
        }
    }
}

impl Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Genome::BinaryString(genome) => Display::fmt(genome, f),
        }
    }
}
