//! # Error Types
//!
//! This module defines the error types for the genetic algorithm engine.
//! Every fallible operation in the crate returns [`Result`], so callers are
//! forced to handle unsupported operator kinds and invalid configurations
//! explicitly instead of relying on panics.
//!
//! ## Examples
//!
//! ```rust
//! use genebits::error::{GeneticError, Result};
//!
//! fn halve_population(pop_size: usize) -> Result<usize> {
//!     if pop_size % 2 != 0 {
//!         return Err(GeneticError::Configuration(
//!             "population size must be even".to_string(),
//!         ));
//!     }
//!     Ok(pop_size / 2)
//! }
//! ```

use thiserror::Error;

use crate::genome::{CrossoverKind, GenomeKind};

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Error that occurs when a crossover kind is requested that the concrete
    /// genome representation does not implement.
    #[error("Crossover error: {genome} genomes do not implement {kind} crossover")]
    UnsupportedCrossover {
        /// The representation the operation was dispatched to.
        genome: GenomeKind,
        /// The crossover kind that was requested.
        kind: CrossoverKind,
    },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a fitness evaluation produces a non-finite value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for `Option` to convert to [`Result`] with a lazily built
/// [`GeneticError`].
///
/// ## Examples
///
/// ```rust
/// use genebits::error::{GeneticError, OptionExt};
///
/// fn best_fitness(scores: &[f64]) -> genebits::error::Result<f64> {
///     scores
///         .iter()
///         .copied()
///         .reduce(f64::max)
///         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
/// }
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T>` using a closure to build the
    /// error for the `None` case.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
