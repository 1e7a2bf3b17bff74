//! Genetic Algorithm for approximate knight's tours.
//!
//! A population of visiting orders ([`TourEncoding`]) is evolved with
//! elitist survival of the best half, tournament selection, two-point
//! crossover and per-gene swap mutation, until the fitness reaches 0 or the
//! generation budget runs out. The result is best-effort: the GA never
//! fails, and never promises a valid tour.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Loop parameters (population size, generations, tournament)
//! - [`KnightTourProblem`]: The knight's tour encoding and its operators
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Submodules
//!
//! - [`fitness`]: Double-counted knight adjacency fitness
//! - [`operators`]: Permutation crossover, repair and mutation operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod runner;
mod selection;
mod tour;
mod types;

pub use config::{GaConfig, DEFAULT_TOURNAMENT_SIZE};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::tournament;
pub use tour::{KnightTourProblem, TourEncoding};
pub use types::{Fitness, GaProblem, Individual};
