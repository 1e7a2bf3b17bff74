//! Knight's tour solvers.
//!
//! Finds a path that takes a knight over every square of an N×N board
//! exactly once, using one of two strategies:
//!
//! - **Backtracking**: exhaustive depth-first search from a start square,
//!   trying moves in Warnsdorff order (fewest onward moves first). Either
//!   finds a tour or proves none exists from that square.
//! - **Genetic Algorithm (GA)**: evolves a population of visiting orders
//!   under a knight-adjacency fitness. Best-effort; useful when exhaustive
//!   search is impractical.
//!
//! # Architecture
//!
//! - [`board`]: grid state and knight move generation, shared by both solvers
//! - [`backtrack`]: the search, its configuration and visit trace
//! - [`ga`]: generic evolutionary loop plus the tour encoding, fitness and
//!   operators
//! - [`solver`]: validated entry points returning a normalized [`SolveResult`]
//!
//! Presentation (drawing, animation, input forms) is left to callers, which
//! receive plain data and optional progress callbacks.
//!
//! ```
//! use u_knightour::solve_backtracking;
//!
//! let result = solve_backtracking(6, 0, 0).unwrap();
//! assert!(result.is_tour());
//! println!("{}", result.board().unwrap());
//! ```

pub mod backtrack;
pub mod board;
pub mod error;
pub mod ga;
pub mod random;
pub mod solver;

pub use error::{TourError, TourResult};
pub use solver::{solve_backtracking, solve_genetic, Algorithm, SolveResult, Solver};
