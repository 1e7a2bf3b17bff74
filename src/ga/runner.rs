//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! mutation → repeat.

use super::config::GaConfig;
use super::selection::tournament;
use super::types::{Fitness, GaProblem, Individual};
use crate::random::rng_from;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Progress snapshot handed to the caller after each generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats<F: Fitness> {
    /// Zero-based index of the generation just completed.
    pub generation: usize,

    /// Best fitness seen so far in the run.
    pub best_fitness: F,

    /// Best fitness in the current population.
    pub generation_best: F,
}

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run stopped early on an optimal individual.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness before the first generation and at the end of each one.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = KnightTourProblem::new(6);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        Self::run_with_progress(problem, config, None, |_| {})
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop at the start of the next generation and return the best
    /// solution found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult<P::Individual> {
        Self::run_with_progress(problem, config, cancel, |_| {})
    }

    /// Runs the GA, calling `progress` once at the end of every generation.
    pub fn run_with_progress<P, F>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut progress: F,
    ) -> GaResult<P::Individual>
    where
        P: GaProblem,
        F: FnMut(&GenerationStats<<P::Individual as Individual>::Fitness>),
    {
        config.validate().expect("invalid GaConfig");

        let mut rng = rng_from(config.seed);

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        // 2. Evaluate initial population
        evaluate_population(problem, &mut population, config.parallel);

        // 3. Track best
        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness().to_f64());

        let elite_count = config.elite_count();
        let mut generations = 0usize;
        let mut converged = false;
        let mut cancelled = false;

        // 4. Evolutionary loop
        while !converged && generations < config.max_generations {
            let gen = generations;

            // Check cancellation
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Sort population by fitness (ascending = best first, stable)
            population.sort_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            // Elite preservation
            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            // Generate offspring
            while next_gen.len() < config.population_size {
                let p1_idx = tournament(&population, config.tournament_size, &mut rng);
                let p2_idx = tournament(&population, config.tournament_size, &mut rng);

                let children = problem.crossover(&population[p1_idx], &population[p2_idx], &mut rng);

                for mut child in children {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    problem.mutate(&mut child, &mut rng);
                    next_gen.push(child);
                }
            }

            // Evaluate new individuals (skip elites, they're already evaluated)
            evaluate_population(problem, &mut next_gen[elite_count..], config.parallel);

            population = next_gen;
            generations += 1;

            // Update best
            let gen_best = find_best(&population);
            let generation_best = gen_best.fitness();
            if generation_best < best.fitness() {
                best = gen_best.clone();
                log::debug!("generation {gen}: new best fitness {:?}", best.fitness());
            }

            fitness_history.push(best.fitness().to_f64());

            // Callback
            progress(&GenerationStats {
                generation: gen,
                best_fitness: best.fitness(),
                generation_best,
            });

            converged = problem.is_optimal(best.fitness());
        }

        log::info!(
            "GA finished after {generations} generations: best fitness {:?}{}",
            best.fitness(),
            if converged {
                " (optimal)"
            } else if cancelled {
                " (cancelled)"
            } else {
                ""
            }
        );

        GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            converged,
            cancelled,
            fitness_history,
        }
    }
}

/// Evaluate all individuals in the slice.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

/// Evaluate all individuals in the slice.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], _parallel: bool) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Find the individual with the best (lowest) fitness.
fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
