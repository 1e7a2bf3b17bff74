//! Tour fitness evaluation.
//!
//! An encoding is decoded into a grid of step numbers, then every cell
//! looks at its eight knight neighbours and counts those whose step differs
//! from its own by exactly one. Each consecutive pair is therefore counted
//! once from each end. Fitness is `n² − count`: lower is better, and a
//! perfect tour scores [`perfect_fitness`], which is `2 − n²`.

use crate::board::{Board, Cell, KNIGHT_OFFSETS};

/// Fitness of a perfect tour on an `n`×`n` board (`n² − 2·(n² − 1)`).
///
/// This is also the lowest fitness any permutation can reach.
pub fn perfect_fitness(n: usize) -> i64 {
    let area = (n * n) as i64;
    area - 2 * (area - 1).max(0)
}

/// Step number per cell (row-major). Later positions overwrite earlier ones
/// when a cell index repeats; values outside the board are ignored.
fn decode_steps(encoding: &[usize], n: usize) -> Vec<Option<usize>> {
    let area = n * n;
    let mut steps = vec![None; area];
    for (step, &cell) in encoding.iter().enumerate() {
        if cell < area {
            steps[cell] = Some(step);
        }
    }
    steps
}

/// Double-counted number of knight-adjacent consecutive steps.
///
/// Cells the encoding never names read as step 0, so with duplicate genes
/// they pair with whichever cell holds step 1.
pub fn adjacency_count(encoding: &[usize], n: usize) -> u32 {
    let steps: Vec<usize> = decode_steps(encoding, n)
        .into_iter()
        .map(|step| step.unwrap_or(0))
        .collect();
    let mut count = 0u32;

    for (index, &step) in steps.iter().enumerate() {
        let cell = Cell::from_index(index, n);
        for &(dr, dc) in &KNIGHT_OFFSETS {
            let Some(neighbour) = cell.offset(dr, dc, n) else {
                continue;
            };
            if step.abs_diff(steps[neighbour.index(n)]) == 1 {
                count += 1;
            }
        }
    }
    count
}

/// Fitness of `encoding` on an `n`×`n` board: `n² − adjacency_count`.
///
/// Lower is better. The GA stops early only on exactly 0, which odd boards
/// never reach with permutations since the count is always even.
pub fn fitness(encoding: &[usize], n: usize) -> i64 {
    (n * n) as i64 - i64::from(adjacency_count(encoding, n))
}

/// Decodes `encoding` into a board of 1-based visit numbers.
///
/// Step `i` is written as `i + 1`, matching backtracking boards; callers
/// wanting 0-based step numbers subtract one. Cells the encoding never
/// names stay [`UNVISITED`](crate::board::UNVISITED).
pub fn decode_board(encoding: &[usize], n: usize) -> Board {
    let mut board = Board::new(n);
    for (index, step) in decode_steps(encoding, n).into_iter().enumerate() {
        if let Some(step) = step {
            board.set(Cell::from_index(index, n), step as i32 + 1);
        }
    }
    board
}

/// Encodes a board of 1-based visit numbers as a visiting order.
///
/// Returns `None` unless the board holds every index `1..=n²` exactly once.
pub fn encode_board(board: &Board) -> Option<Vec<usize>> {
    if !board.is_complete() {
        return None;
    }
    let n = board.size();
    Some(board.path().into_iter().map(|cell| cell.index(n)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtrack::{BacktrackConfig, BacktrackRunner};

    fn tour(n: usize) -> Vec<usize> {
        let result = BacktrackRunner::run(&BacktrackConfig::new(n, 0, 0));
        encode_board(&result.board).expect("solved board")
    }

    #[test]
    fn test_perfect_fitness() {
        assert_eq!(perfect_fitness(1), 1);
        assert_eq!(perfect_fitness(5), -23);
        assert_eq!(perfect_fitness(8), -62);
    }

    #[test]
    fn test_perfect_tour_fitness() {
        assert_eq!(fitness(&tour(5), 5), -23);
        assert_eq!(fitness(&tour(6), 6), -34);
        assert_eq!(fitness(&tour(8), 8), -62);
        assert_eq!(adjacency_count(&tour(5), 5), 48);
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(adjacency_count(&[0], 1), 0);
        assert_eq!(fitness(&[0], 1), 1);
    }

    #[test]
    fn test_row_major_order_has_no_knight_steps() {
        // Consecutive row-major cells are never a knight move apart.
        let encoding: Vec<usize> = (0..25).collect();
        assert_eq!(adjacency_count(&encoding, 5), 0);
        assert_eq!(fitness(&encoding, 5), 25);
    }

    #[test]
    fn test_single_pair_counted_twice() {
        // Steps 0 -> 1 is (0,0) -> (1,2); nothing else is knight-adjacent.
        let mut encoding = vec![0, 7];
        encoding.extend((0..25).filter(|v| *v != 0 && *v != 7));
        let expected_pairs = encoding
            .windows(2)
            .filter(|w| Cell::from_index(w[0], 5).is_knight_move(Cell::from_index(w[1], 5)))
            .count() as u32;
        assert!(expected_pairs >= 1);
        assert_eq!(adjacency_count(&encoding, 5), 2 * expected_pairs);
        assert_eq!(fitness(&encoding, 5), 25 - 2 * i64::from(expected_pairs));
    }

    #[test]
    fn test_unnamed_cell_reads_as_step_zero() {
        // Cell 2 is named twice (steps 3 and 4); cell 0 is never named and
        // reads as step 0, which pairs it with cell 7 (step 1) at (2,1).
        let encoding = [3, 7, 1, 2, 2, 4, 5, 6, 8];
        assert_eq!(adjacency_count(&encoding, 3), 4);
        assert_eq!(fitness(&encoding, 3), 5);
    }

    #[test]
    fn test_broken_tour_is_worse() {
        let mut encoding = tour(5);
        encoding.swap(3, 17);
        assert!(fitness(&encoding, 5) > perfect_fitness(5));
    }

    #[test]
    fn test_duplicates_leave_cells_unvisited() {
        let encoding = vec![0, 0, 1, 2];
        let board = decode_board(&encoding, 2);
        // Cell 0 is overwritten by step 1; cell 3 is never named.
        assert_eq!(board.as_slice(), &[2, 3, 4, -1]);
    }

    #[test]
    fn test_decode_board_numbers_from_one() {
        let encoding = vec![4, 0, 8, 1, 2, 3, 5, 6, 7];
        let board = decode_board(&encoding, 3);
        for (step, &cell) in encoding.iter().enumerate() {
            assert_eq!(board.as_slice()[cell], step as i32 + 1);
        }
    }

    #[test]
    fn test_decode_encode_tour() {
        let encoding = tour(5);
        let board = decode_board(&encoding, 5);
        assert!(board.is_knight_tour());
        assert_eq!(encode_board(&board), Some(encoding));
    }

    #[test]
    fn test_encode_incomplete_board() {
        assert_eq!(encode_board(&Board::new(3)), None);
    }
}
