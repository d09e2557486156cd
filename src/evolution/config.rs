//! # EvolutionConfig
//!
//! The `EvolutionConfig` struct holds the parameters that control a
//! generational run: population size, generation budget, crossover kind and
//! rate, mutation rate, the early-stop fitness target, and the threshold
//! above which fitness evaluation runs in parallel.
//!
//! ## Example
//!
//! ```rust
//! use genebits::evolution::EvolutionConfig;
//! use genebits::genome::CrossoverKind;
//!
//! let config = EvolutionConfig::builder()
//!     .population_size(10)
//!     .generations(20)
//!     .crossover_kind(CrossoverKind::OnePoint)
//!     .crossover_rate(0.5)
//!     .mutation_rate(0.5)
//!     .optimal_fitness(8.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.get_population_size(), 10);
//! ```

use crate::error::{GeneticError, Result};
use crate::genome::CrossoverKind;

/// Configuration for a generational genetic-algorithm run.
///
/// Constructed through [`EvolutionConfig::builder`] or
/// [`EvolutionConfig::new`]; both validate eagerly so an invalid
/// configuration never reaches the engine loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    population_size: usize,
    generations: usize,
    crossover_kind: CrossoverKind,
    crossover_rate: f64,
    mutation_rate: f64,
    optimal_fitness: f64,
    /// Minimum population size for parallel fitness evaluation
    parallel_threshold: usize,
}

impl EvolutionConfig {
    /// Creates a validated `EvolutionConfig`.
    ///
    /// # Arguments
    ///
    /// * `population_size` - Number of genomes per generation. Must be
    ///   positive and even (selection keeps half the population as parents).
    /// * `generations` - Maximum number of select/reproduce cycles.
    /// * `crossover_kind` - The crossover strategy offspring are built with.
    /// * `crossover_rate` - Probability in `[0, 1]` of applying crossover to
    ///   a parent pair; otherwise the children are clones of the parents.
    /// * `mutation_rate` - Probability in `[0, 1]` of mutating both children
    ///   of a pair once each.
    /// * `optimal_fitness` - Early-stop target, compared by exact equality.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if any parameter is out of
    /// range.
    pub fn new(
        population_size: usize,
        generations: usize,
        crossover_kind: CrossoverKind,
        crossover_rate: f64,
        mutation_rate: f64,
        optimal_fitness: f64,
    ) -> Result<Self> {
        let config = Self {
            population_size,
            generations,
            crossover_kind,
            crossover_rate,
            mutation_rate,
            optimal_fitness,
            parallel_threshold: 1000,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a builder with default parameters.
    pub fn builder() -> EvolutionConfigBuilder {
        EvolutionConfigBuilder::default()
    }

    /// Returns the population size.
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    /// Returns the maximum number of generations.
    pub fn get_generations(&self) -> usize {
        self.generations
    }

    /// Returns the configured crossover kind.
    pub fn get_crossover_kind(&self) -> CrossoverKind {
        self.crossover_kind
    }

    /// Returns the crossover application probability.
    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// Returns the mutation application probability.
    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Returns the early-stop fitness target.
    ///
    /// The engine stops as soon as the best fitness found equals this value
    /// **exactly**. Exact equality is sound for integer-valued fitness
    /// functions such as onemax; a fitness function producing fractional
    /// values will rarely hit the target and will run out its generation
    /// budget instead. `f64::INFINITY` disables early stopping.
    pub fn get_optimal_fitness(&self) -> f64 {
        self.optimal_fitness
    }

    /// Returns the minimum population size for parallel fitness evaluation.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the population size is zero
    /// or odd, a rate lies outside `[0, 1]` (or is NaN), or the optimal
    /// fitness is NaN.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size must be greater than zero".to_string(),
            ));
        }

        if self.population_size % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be even to split into parent and offspring halves, got {}",
                self.population_size
            )));
        }

        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GeneticError::Configuration(format!(
                "Crossover rate must be within [0, 1], got {}",
                self.crossover_rate
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        // NaN never compares equal, which would silently disable the target
        if self.optimal_fitness.is_nan() {
            return Err(GeneticError::Configuration(
                "Optimal fitness must not be NaN".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for [`EvolutionConfig`].
///
/// Provides a fluent interface with defaults for every parameter; `build()`
/// validates the result.
#[derive(Debug, Clone, Default)]
pub struct EvolutionConfigBuilder {
    population_size: Option<usize>,
    generations: Option<usize>,
    crossover_kind: Option<CrossoverKind>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    optimal_fitness: Option<f64>,
    parallel_threshold: Option<usize>,
}

impl EvolutionConfigBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the maximum number of generations.
    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    /// Sets the crossover kind.
    pub fn crossover_kind(mut self, value: CrossoverKind) -> Self {
        self.crossover_kind = Some(value);
        self
    }

    /// Sets the crossover application probability.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the mutation application probability.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the early-stop fitness target.
    pub fn optimal_fitness(mut self, value: f64) -> Self {
        self.optimal_fitness = Some(value);
        self
    }

    /// Sets the minimum population size for parallel fitness evaluation.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the resulting configuration
    /// is invalid.
    pub fn build(self) -> Result<EvolutionConfig> {
        let config = EvolutionConfig {
            population_size: self.population_size.unwrap_or(100),
            generations: self.generations.unwrap_or(100),
            crossover_kind: self.crossover_kind.unwrap_or(CrossoverKind::OnePoint),
            crossover_rate: self.crossover_rate.unwrap_or(0.5),
            mutation_rate: self.mutation_rate.unwrap_or(0.5),
            optimal_fitness: self.optimal_fitness.unwrap_or(f64::INFINITY),
            parallel_threshold: self.parallel_threshold.unwrap_or(1000),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = EvolutionConfig::builder().build().unwrap();

        assert_eq!(config.get_population_size(), 100);
        assert_eq!(config.get_generations(), 100);
        assert_eq!(config.get_crossover_kind(), CrossoverKind::OnePoint);
        assert_eq!(config.get_crossover_rate(), 0.5);
        assert_eq!(config.get_mutation_rate(), 0.5);
        assert_eq!(config.get_optimal_fitness(), f64::INFINITY);
        assert_eq!(config.get_parallel_threshold(), 1000);
    }

    #[test]
    fn test_zero_population_size_is_rejected() {
        let result = EvolutionConfig::builder().population_size(0).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_odd_population_size_is_rejected() {
        let result = EvolutionConfig::builder().population_size(11).build();
        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("even"));
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rates_are_rejected() {
        let result = EvolutionConfig::builder().crossover_rate(1.5).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let result = EvolutionConfig::builder().mutation_rate(-0.1).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let result = EvolutionConfig::builder().mutation_rate(f64::NAN).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_nan_optimal_fitness_is_rejected() {
        let result = EvolutionConfig::builder().optimal_fitness(f64::NAN).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_boundary_rates_are_accepted() {
        let config = EvolutionConfig::builder()
            .crossover_rate(0.0)
            .mutation_rate(1.0)
            .build();
        assert!(config.is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_round_trip() {
        let config = EvolutionConfig::builder()
            .population_size(10)
            .generations(20)
            .optimal_fitness(8.0)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: EvolutionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
