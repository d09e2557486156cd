//! # GeneticAlgorithm
//!
//! The `GeneticAlgorithm` struct orchestrates the generational loop:
//! population initialization, fitness evaluation, best-genome tracking,
//! tournament selection, and offspring production.
//!
//! One run is a single logical thread of control. Each phase completes for
//! the whole population before the next phase reads its output, and every
//! stochastic draw goes through the one [`RandomNumberGenerator`] owned by
//! the engine, so a seeded run is fully reproducible. The only parallel
//! phase is fitness evaluation, which draws no randomness.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{GeneticError, OptionExt, Result};
use crate::evolution::config::EvolutionConfig;
use crate::factory::GenomeFactory;
use crate::genome::{Genome, GenomeInit};
use crate::rng::RandomNumberGenerator;

/// Number of genomes drawn per selection tournament.
const TOURNAMENT_SIZE: usize = 3;

/// The outcome of a generational run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// The best genome found across all generations.
    pub best_genome: Genome,
    /// The fitness of the best genome.
    pub best_fitness: f64,
    /// The number of completed select/reproduce cycles; at most the
    /// configured generation budget, and smaller when the optimal fitness
    /// was reached early.
    pub generations_completed: usize,
}

/// Evolves a fixed-size population of genomes toward maximal fitness.
///
/// The population is split by convention: after selection, indices
/// `[0, pop/2)` hold the tournament winners; reproduction then fills
/// `[pop/2, pop)` with freshly built offspring. Both phases collect their
/// results in a separate buffer and only write back once the phase has read
/// everything it needs, so the read and write regions never interleave.
///
/// # Examples
///
/// ```rust
/// use genebits::evolution::{EvolutionConfig, GeneticAlgorithm};
/// use genebits::genome::{CrossoverKind, GenomeInit};
/// use genebits::rng::RandomNumberGenerator;
///
/// let config = EvolutionConfig::builder()
///     .population_size(10)
///     .generations(20)
///     .crossover_kind(CrossoverKind::OnePoint)
///     .optimal_fitness(8.0)
///     .build()
///     .unwrap();
///
/// let rng = RandomNumberGenerator::from_seed(42);
/// let mut engine = GeneticAlgorithm::new(config, rng).unwrap();
///
/// let result = engine
///     .run(GenomeInit::BinaryString { length: 8 })
///     .unwrap();
/// assert!(result.generations_completed <= 20);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    config: EvolutionConfig,
    factory: GenomeFactory,
    rng: RandomNumberGenerator,
    population: Vec<Genome>,
}

impl GeneticAlgorithm {
    /// Creates a new engine from a configuration and a randomness source.
    ///
    /// The configuration is validated eagerly; the engine never starts a run
    /// with invalid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if the configuration is
    /// invalid.
    pub fn new(config: EvolutionConfig, rng: RandomNumberGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            factory: GenomeFactory::new(),
            rng,
            population: Vec::new(),
        })
    }

    /// Runs the generational loop and returns the best genome found.
    ///
    /// The loop evaluates the freshly initialized population, then repeats
    /// select → reproduce → evaluate until the best fitness equals the
    /// configured optimum exactly or the generation budget is exhausted.
    /// Termination is checked before selection, so a population that already
    /// contains an optimal genome completes zero cycles. Every population
    /// the engine produces is evaluated, including the final generation's
    /// offspring, so the result never carries a stale fitness.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] for invalid init arguments,
    /// [`GeneticError::UnsupportedCrossover`] if the configured crossover
    /// kind is not implemented by the genome representation, and
    /// [`GeneticError::FitnessCalculation`] if an evaluation produces a
    /// non-finite score. Any error aborts the run immediately.
    pub fn run(&mut self, init: GenomeInit) -> Result<RunResult> {
        self.initialise_population(&init)?;
        self.evaluate_fitness()?;

        let mut best_genome: Option<Genome> = None;
        let mut best_fitness = f64::NEG_INFINITY;
        self.track_best(&mut best_genome, &mut best_fitness);
        debug!(generation = 0usize, best_fitness, "initial population evaluated");

        let mut completed = 0;
        while completed < self.config.get_generations()
            && best_fitness != self.config.get_optimal_fitness()
        {
            self.select_parents();
            self.produce_offspring()?;
            completed += 1;

            self.evaluate_fitness()?;
            self.track_best(&mut best_genome, &mut best_fitness);
            debug!(generation = completed, best_fitness, "generation evaluated");
        }

        let best_genome = best_genome.ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        info!(
            generations_completed = completed,
            best_fitness, "evolution finished"
        );

        Ok(RunResult {
            best_genome,
            best_fitness,
            generations_completed: completed,
        })
    }

    /// Fills the population with factory-built random genomes.
    fn initialise_population(&mut self, init: &GenomeInit) -> Result<()> {
        let mut population = Vec::with_capacity(self.config.get_population_size());
        for _ in 0..self.config.get_population_size() {
            population.push(self.factory.random_genome(init, &mut self.rng)?);
        }
        self.population = population;
        Ok(())
    }

    /// Computes and stores the fitness of every genome in the population.
    ///
    /// Evaluation is order-independent and draws no randomness, so above the
    /// configured threshold it runs in parallel.
    fn evaluate_fitness(&mut self) -> Result<()> {
        let evaluate = |genome: &mut Genome| -> Result<()> {
            let score = genome.compute_fitness();
            if !score.is_finite() {
                return Err(GeneticError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    score
                )));
            }
            Ok(())
        };

        if self.population.len() >= self.config.get_parallel_threshold() {
            self.population.par_iter_mut().try_for_each(evaluate)
        } else {
            self.population.iter_mut().try_for_each(evaluate)
        }
    }

    /// Updates the running best genome from the current population.
    ///
    /// A genome replaces the running best only when its fitness is strictly
    /// greater, so ties keep the earlier find.
    fn track_best(&self, best_genome: &mut Option<Genome>, best_fitness: &mut f64) {
        for genome in &self.population {
            if genome.fitness() > *best_fitness {
                *best_fitness = genome.fitness();
                *best_genome = Some(genome.clone());
            }
        }
    }

    /// Selects parents through repeated size-3 tournaments.
    ///
    /// Each tournament draws its participants uniformly at random, with
    /// replacement, from the entire current population. The winners are
    /// collected in a fresh buffer and written over the first half of the
    /// population only after all tournaments have run.
    fn select_parents(&mut self) {
        let half = self.population.len() / 2;

        let mut winners = Vec::with_capacity(half);
        for _ in 0..half {
            let winner = self.run_tournament();
            winners.push(self.population[winner].clone());
        }

        for (slot, winner) in self.population.iter_mut().zip(winners) {
            *slot = winner;
        }
    }

    /// Draws the participants for one tournament and returns the winner's
    /// index.
    fn run_tournament(&mut self) -> usize {
        let mut participants = [0usize; TOURNAMENT_SIZE];
        for slot in &mut participants {
            *slot = self.rng.gen_index(self.population.len());
        }
        tournament_winner(&self.population, &participants)
    }

    /// Builds offspring from the selected parent half into the offspring
    /// half.
    ///
    /// For each pair of offspring slots, two parents are drawn independently
    /// and uniformly from the parent half (the same parent may be drawn
    /// twice). Crossover is applied with the configured probability,
    /// otherwise the children are clones of the parents; mutation of both
    /// children is gated by its own independent draw. The offspring are
    /// built into a separate buffer and written back in one step; when the
    /// offspring half is odd, the trailing child of the last pair is
    /// dropped.
    fn produce_offspring(&mut self) -> Result<()> {
        let half = self.population.len() / 2;
        let kind = self.config.get_crossover_kind();
        let mut offspring = Vec::with_capacity(half + 1);

        while offspring.len() < half {
            let parent0 = self.rng.gen_index(half);
            let parent1 = self.rng.gen_index(half);

            let apply_crossover = self.rng.gen_probability() < self.config.get_crossover_rate();
            let (mut child0, mut child1) = if apply_crossover {
                self.population[parent0].crossover(&self.population[parent1], kind, &mut self.rng)?
            } else {
                (
                    self.population[parent0].clone(),
                    self.population[parent1].clone(),
                )
            };

            if self.rng.gen_probability() < self.config.get_mutation_rate() {
                child0.mutate(&mut self.rng);
                child1.mutate(&mut self.rng);
            }

            offspring.push(child0);
            offspring.push(child1);
        }

        for (slot, child) in self.population[half..].iter_mut().zip(offspring) {
            *slot = child;
        }
        Ok(())
    }
}

/// Returns the index of the fittest participant.
///
/// The winner is the participant with the strictly greatest fitness; ties
/// keep the first-seen participant.
fn tournament_winner(population: &[Genome], participants: &[usize]) -> usize {
    let mut best = participants[0];
    for &candidate in &participants[1..] {
        if population[candidate].fitness() > population[best].fitness() {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{BinaryString, CrossoverKind};

    fn onemax_config(population_size: usize, generations: usize) -> EvolutionConfig {
        EvolutionConfig::builder()
            .population_size(population_size)
            .generations(generations)
            .crossover_kind(CrossoverKind::OnePoint)
            .crossover_rate(0.5)
            .mutation_rate(0.5)
            .optimal_fitness(8.0)
            .build()
            .unwrap()
    }

    fn genome_with_fitness(ones: usize, length: usize) -> Genome {
        let mut bits = vec![false; length];
        bits[..ones].fill(true);
        let mut genome = Genome::BinaryString(BinaryString::from_bits(bits));
        genome.compute_fitness();
        genome
    }

    #[test]
    fn test_population_size_is_constant_across_generations() {
        let config = onemax_config(10, 15);
        let rng = RandomNumberGenerator::from_seed(42);
        let mut engine = GeneticAlgorithm::new(config, rng).unwrap();

        engine.run(GenomeInit::BinaryString { length: 8 }).unwrap();
        assert_eq!(engine.population.len(), 10);
        for genome in &engine.population {
            match genome {
                Genome::BinaryString(bits) => assert_eq!(bits.len(), 8),
            }
        }
    }

    #[test]
    fn test_tournament_winner_is_never_strictly_worse() {
        let population: Vec<Genome> = (0..6).map(|ones| genome_with_fitness(ones, 8)).collect();

        let winner = tournament_winner(&population, &[1, 4, 2]);
        assert_eq!(winner, 4);

        let winner = tournament_winner(&population, &[5, 0, 3]);
        assert_eq!(winner, 5);

        // All participants are the same index; the winner can only be it
        let winner = tournament_winner(&population, &[2, 2, 2]);
        assert_eq!(winner, 2);
    }

    #[test]
    fn test_tournament_ties_keep_the_first_seen() {
        let population = vec![
            genome_with_fitness(3, 8),
            genome_with_fitness(3, 8),
            genome_with_fitness(1, 8),
        ];

        assert_eq!(tournament_winner(&population, &[0, 1, 2]), 0);
        assert_eq!(tournament_winner(&population, &[1, 0, 2]), 1);
    }

    #[test]
    fn test_selection_fills_parent_half_with_winners() {
        let config = onemax_config(8, 10);
        let rng = RandomNumberGenerator::from_seed(11);
        let mut engine = GeneticAlgorithm::new(config, rng).unwrap();

        engine
            .initialise_population(&GenomeInit::BinaryString { length: 8 })
            .unwrap();
        engine.evaluate_fitness().unwrap();

        let floor = engine
            .population
            .iter()
            .map(Genome::fitness)
            .fold(f64::INFINITY, f64::min);

        engine.select_parents();

        assert_eq!(engine.population.len(), 8);
        for parent in &engine.population[..4] {
            assert!(parent.fitness() >= floor);
        }
    }

    #[test]
    fn test_zero_generations_still_evaluates_the_initial_population() {
        let config = onemax_config(10, 0);
        let rng = RandomNumberGenerator::from_seed(42);
        let mut engine = GeneticAlgorithm::new(config, rng).unwrap();

        let result = engine.run(GenomeInit::BinaryString { length: 8 }).unwrap();

        assert_eq!(result.generations_completed, 0);
        assert!(result.best_fitness >= 0.0);
        assert_eq!(result.best_genome.fitness(), result.best_fitness);
    }

    #[test]
    fn test_odd_offspring_half_preserves_population_size() {
        // population 10 -> offspring half of 5 slots, i.e. a ragged pair
        let config = onemax_config(10, 5);
        let rng = RandomNumberGenerator::from_seed(3);
        let mut engine = GeneticAlgorithm::new(config, rng).unwrap();

        engine
            .initialise_population(&GenomeInit::BinaryString { length: 8 })
            .unwrap();
        engine.evaluate_fitness().unwrap();
        engine.select_parents();
        engine.produce_offspring().unwrap();

        assert_eq!(engine.population.len(), 10);
    }

    #[test]
    fn test_best_tracking_keeps_the_strictly_greatest() {
        let config = onemax_config(10, 5);
        let rng = RandomNumberGenerator::from_seed(1);
        let mut engine = GeneticAlgorithm::new(config, rng).unwrap();

        // Index 2 ties with index 1 on fitness but has different bits
        let mut tied = Genome::BinaryString(BinaryString::from_bits(
            [false, true, true, true, true, true, true, true].to_vec(),
        ));
        tied.compute_fitness();

        engine.population = vec![
            genome_with_fitness(2, 8),
            genome_with_fitness(7, 8),
            tied,
            genome_with_fitness(4, 8),
        ];

        let mut best_genome = None;
        let mut best_fitness = f64::NEG_INFINITY;
        engine.track_best(&mut best_genome, &mut best_fitness);

        assert_eq!(best_fitness, 7.0);
        // Ties keep the earlier find
        assert_eq!(best_genome, Some(engine.population[1].clone()));

        // A later scan with no improvement leaves the best untouched
        engine.population = vec![genome_with_fitness(7, 8), genome_with_fitness(1, 8)];
        engine.track_best(&mut best_genome, &mut best_fitness);
        assert_eq!(best_fitness, 7.0);
    }
}
