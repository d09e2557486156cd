//! # genebits
//!
//! A generational genetic-algorithm engine for fixed-length bit-string
//! genomes. The engine evolves a fixed-size population through fitness
//! evaluation, size-3 tournament selection, and crossover/mutation-based
//! reproduction, tracking the best genome found until the optimal fitness is
//! reached or the generation budget is exhausted.
//!
//! ## Example
//!
//! ```rust
//! use genebits::evolution::{EvolutionConfig, GeneticAlgorithm};
//! use genebits::genome::{CrossoverKind, GenomeInit};
//! use genebits::rng::RandomNumberGenerator;
//!
//! # fn main() -> genebits::error::Result<()> {
//! let config = EvolutionConfig::builder()
//!     .population_size(20)
//!     .generations(50)
//!     .crossover_kind(CrossoverKind::OnePoint)
//!     .crossover_rate(0.5)
//!     .mutation_rate(0.5)
//!     .optimal_fitness(16.0)
//!     .build()?;
//!
//! let rng = RandomNumberGenerator::from_seed(42);
//! let mut engine = GeneticAlgorithm::new(config, rng)?;
//!
//! let result = engine.run(GenomeInit::BinaryString { length: 16 })?;
//! println!(
//!     "best fitness {} after {} generations: {}",
//!     result.best_fitness, result.generations_completed, result.best_genome
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod evolution;
pub mod factory;
pub mod genome;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionConfig, GeneticAlgorithm, RunResult};
pub use factory::GenomeFactory;
pub use genome::{BinaryString, CrossoverKind, Genome, GenomeInit, GenomeKind, Representation};
pub use rng::RandomNumberGenerator;
