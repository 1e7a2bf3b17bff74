//! Core trait definitions for the GA.
//!
//! [`Individual`] and [`GaProblem`] define the contract between the
//! evolutionary loop in [`GaRunner`](super::GaRunner) and the knight's
//! tour encoding in [`tour`](super::tour).

use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for individuals that have not been evaluated yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for i64 {
    fn worst() -> Self {
        i64::MAX
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type.
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents
/// 4. **Mutation**: how to perturb an individual
/// 5. **Optimality**: when the search can stop early
///
/// `GaProblem` must be `Send + Sync` because offspring may be evaluated
/// in parallel with the `parallel` feature.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be a pure function of the individual.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one or more offspring by recombining two parents.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Whether `fitness` cannot be improved, ending the run early.
    ///
    /// The default never stops early.
    fn is_optimal(&self, _fitness: <Self::Individual as Individual>::Fitness) -> bool {
        false
    }
}
