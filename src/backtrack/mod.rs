//! Warnsdorff-ordered backtracking search.
//!
//! An exhaustive depth-first search for a knight's tour. At every step the
//! candidate moves are tried in ascending order of their own onward move
//! count (Warnsdorff's rule), which visits constrained squares early and
//! keeps backtracking rare in practice. Worst-case cost is still
//! exponential.
//!
//! # Key Types
//!
//! - [`BacktrackConfig`]: board size, start square, optional step budget
//! - [`BacktrackRunner`]: executes the search
//! - [`BacktrackResult`]: outcome, final board and [`VisitTrace`]
//!
//! # References
//!
//! - Warnsdorff, H. C. (1823), *Des Rösselsprunges einfachste und
//!   allgemeinste Lösung*
//! - Squirrel & Cull (1996), "A Warnsdorff-Rule Algorithm for Knight's Tours
//!   on Square Chessboards"

mod config;
mod runner;
mod types;

pub use config::BacktrackConfig;
pub use runner::{BacktrackOutcome, BacktrackResult, BacktrackRunner};
pub use types::{SearchEvent, VisitEntry, VisitTrace};
