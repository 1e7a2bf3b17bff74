//! Board state and knight move generation.
//!
//! - [`Board`]: `n`×`n` grid of 1-based visit numbers or [`UNVISITED`]
//! - [`Cell`]: `(row, col)` value type
//! - [`moves`]: the fixed knight offsets and Warnsdorff move ordering

pub mod moves;
mod types;

pub use moves::{count_available_moves, is_valid_move, ordered_moves, KNIGHT_OFFSETS};
pub use types::{Board, Cell, UNVISITED};
