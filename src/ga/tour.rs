//! Knight's tour as a GA problem.
//!
//! A [`TourEncoding`] is a visiting order: the value at position `i` is the
//! flattened index `row * n + col` of the square entered at step `i`.

use super::fitness::{decode_board, fitness};
use super::operators::{random_permutation, repair_duplicates, swap_mutation, two_point_crossover};
use super::types::{GaProblem, Individual};
use crate::board::Board;
use rand::Rng;

/// One individual: a candidate visiting order and its cached fitness.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourEncoding {
    /// Flattened cell index per step.
    pub genes: Vec<usize>,
    /// Fitness from the last evaluation (`i64::MAX` before evaluation).
    pub fitness: i64,
}

impl TourEncoding {
    /// Wraps a visiting order as an unevaluated individual.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: i64::MAX,
        }
    }

    /// Whether the genes are a permutation of `0..len`.
    pub fn is_permutation(&self) -> bool {
        super::operators::is_permutation(&self.genes)
    }

    /// Decodes into a board of 1-based visit numbers (step `i` reads `i + 1`).
    pub fn to_board(&self, n: usize) -> Board {
        decode_board(&self.genes, n)
    }
}

impl Individual for TourEncoding {
    type Fitness = i64;

    fn fitness(&self) -> i64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: i64) {
        self.fitness = fitness;
    }
}

/// Knight's tour search space for an `n`×`n` board.
///
/// # Examples
///
/// ```
/// use u_knightour::ga::{GaConfig, GaRunner, KnightTourProblem};
///
/// let problem = KnightTourProblem::new(5).with_mutation_rate(0.05);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// assert_eq!(result.best.genes.len(), 25);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightTourProblem {
    /// Board side length.
    pub n: usize,

    /// Per-gene swap probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether crossover offspring are repaired back into permutations.
    ///
    /// Two-point crossover alone can repeat cell indices. With `false` the
    /// unrepaired children enter the population as they are.
    pub repair_offspring: bool,
}

impl KnightTourProblem {
    /// Creates the problem with mutation rate 0.01 and repair enabled.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mutation_rate: 0.01,
            repair_offspring: true,
        }
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables offspring repair.
    pub fn with_repair_offspring(mut self, repair: bool) -> Self {
        self.repair_offspring = repair;
        self
    }

    /// Number of genes per individual (`n²`).
    pub fn genome_len(&self) -> usize {
        self.n * self.n
    }
}

impl GaProblem for KnightTourProblem {
    type Individual = TourEncoding;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> TourEncoding {
        TourEncoding::new(random_permutation(self.genome_len(), rng))
    }

    fn evaluate(&self, individual: &TourEncoding) -> i64 {
        fitness(&individual.genes, self.n)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &TourEncoding,
        parent2: &TourEncoding,
        rng: &mut R,
    ) -> Vec<TourEncoding> {
        let mut genes = two_point_crossover(&parent1.genes, &parent2.genes, rng);
        if self.repair_offspring {
            repair_duplicates(&mut genes);
        }
        vec![TourEncoding::new(genes)]
    }

    fn mutate<R: Rng>(&self, individual: &mut TourEncoding, rng: &mut R) {
        swap_mutation(&mut individual.genes, self.mutation_rate, rng);
    }

    fn is_optimal(&self, fitness: i64) -> bool {
        fitness == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_create_individual_is_permutation() {
        let problem = KnightTourProblem::new(6);
        let mut rng = create_rng(42);
        for _ in 0..10 {
            let ind = problem.create_individual(&mut rng);
            assert_eq!(ind.genes.len(), 36);
            assert!(ind.is_permutation());
            assert_eq!(ind.fitness, i64::MAX);
        }
    }

    #[test]
    fn test_repaired_crossover_is_permutation() {
        let problem = KnightTourProblem::new(5);
        let mut rng = create_rng(1);
        for _ in 0..50 {
            let p1 = problem.create_individual(&mut rng);
            let p2 = problem.create_individual(&mut rng);
            let children = problem.crossover(&p1, &p2, &mut rng);
            assert_eq!(children.len(), 1);
            assert!(children[0].is_permutation());
        }
    }

    #[test]
    fn test_unrepaired_crossover_can_duplicate() {
        let problem = KnightTourProblem::new(5).with_repair_offspring(false);
        let mut rng = create_rng(1);
        let mut saw_duplicate = false;
        for _ in 0..200 {
            let p1 = problem.create_individual(&mut rng);
            let p2 = problem.create_individual(&mut rng);
            let child = &problem.crossover(&p1, &p2, &mut rng)[0];
            assert_eq!(child.genes.len(), 25);
            saw_duplicate |= !child.is_permutation();
        }
        assert!(saw_duplicate, "random parents should eventually clash");
    }

    #[test]
    fn test_mutation_rate_clamped() {
        assert_eq!(KnightTourProblem::new(5).with_mutation_rate(2.0).mutation_rate, 1.0);
        assert_eq!(KnightTourProblem::new(5).with_mutation_rate(-1.0).mutation_rate, 0.0);
    }

    #[test]
    fn test_evaluate_matches_fitness() {
        let problem = KnightTourProblem::new(5);
        let ind = TourEncoding::new((0..25).collect());
        assert_eq!(problem.evaluate(&ind), 25);
        assert!(problem.is_optimal(0));
        assert!(!problem.is_optimal(-23));
    }
}
