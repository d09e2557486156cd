pub mod config;
pub mod engine;

pub use config::{EvolutionConfig, EvolutionConfigBuilder};
pub use engine::{GeneticAlgorithm, RunResult};
