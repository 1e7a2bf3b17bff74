//! Knight move generation.
//!
//! Pure queries against a [`Board`] snapshot. The backtracking solver
//! builds its Warnsdorff candidate lists from these.

use super::types::{Board, Cell, UNVISITED};

/// The eight knight displacements `(dr, dc)`.
///
/// The order is fixed: it breaks ties between equally constrained moves.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Whether `(row, col)` is on the board and not yet visited.
///
/// Coordinates are signed so off-board probes can be asked directly.
pub fn is_valid_move(board: &Board, row: i64, col: i64) -> bool {
    let n = board.size() as i64;
    (0..n).contains(&row)
        && (0..n).contains(&col)
        && board.get(Cell::new(row as usize, col as usize)) == UNVISITED
}

/// Number of valid knight moves from `(row, col)` under current occupancy.
pub fn count_available_moves(board: &Board, row: i64, col: i64) -> usize {
    KNIGHT_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| is_valid_move(board, row + dr as i64, col + dc as i64))
        .count()
}

/// Unvisited knight neighbours of `from`, in [`KNIGHT_OFFSETS`] order.
pub fn valid_moves(board: &Board, from: Cell) -> impl Iterator<Item = Cell> + '_ {
    let n = board.size();
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(dr, dc)| from.offset(dr, dc, n))
        .filter(move |&cell| board.is_unvisited(cell))
}

/// Valid next cells sorted ascending by their own onward move count
/// (Warnsdorff's rule).
///
/// The sort is stable, so equal counts keep [`KNIGHT_OFFSETS`] order.
pub fn ordered_moves(board: &Board, from: Cell) -> Vec<Cell> {
    let mut candidates: Vec<(Cell, usize)> = valid_moves(board, from)
        .map(|cell| {
            let onward = count_available_moves(board, cell.row as i64, cell.col as i64);
            (cell, onward)
        })
        .collect();
    candidates.sort_by_key(|&(_, onward)| onward);
    candidates.into_iter().map(|(cell, _)| cell).collect()
}
