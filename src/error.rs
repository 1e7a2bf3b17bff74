//! Error types for u-knightour.
//!
//! Only configuration problems are errors. A search that finds no tour
//! is a regular [`SolveResult`](crate::solver::SolveResult) variant, and
//! the genetic solver always returns its best individual.

use thiserror::Error;

/// Result type alias for solver operations.
pub type TourResult<T> = Result<T, TourError>;

/// Malformed solver parameters, reported before any search begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// Board size must be at least 1.
    #[error("board size must be a positive integer, got {0}")]
    InvalidBoardSize(usize),

    /// Start square lies outside the board.
    #[error("start square ({row}, {col}) is outside a {n}x{n} board")]
    StartOutOfBounds {
        /// Requested start row.
        row: usize,
        /// Requested start column.
        col: usize,
        /// Board size.
        n: usize,
    },

    /// Tournament samples more individuals than the population holds.
    #[error("tournament size {tournament_size} exceeds population size {population_size}")]
    TournamentTooLarge {
        /// Configured tournament size.
        tournament_size: usize,
        /// Configured population size.
        population_size: usize,
    },

    /// Any other invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
