//! Board and cell value types shared by both solvers.

use std::fmt;

/// Sentinel stored in cells the knight has not visited.
pub const UNVISITED: i32 = -1;

/// A square on the board, addressed by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Cell {
    /// Creates a cell.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Decodes a flattened index `row * n + col`.
    pub const fn from_index(index: usize, n: usize) -> Self {
        Self {
            row: index / n,
            col: index % n,
        }
    }

    /// Flattened index `row * n + col`.
    pub const fn index(self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// The cell displaced by `(dr, dc)`, if it is still on an `n`×`n` board.
    pub fn offset(self, dr: i32, dc: i32, n: usize) -> Option<Cell> {
        let row = self.row as i64 + dr as i64;
        let col = self.col as i64 + dc as i64;
        if row < 0 || col < 0 || row >= n as i64 || col >= n as i64 {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }

    /// Whether `other` is exactly one knight move away.
    pub fn is_knight_move(self, other: Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An `n`×`n` grid of visit numbers.
///
/// Each cell holds [`UNVISITED`] or the 1-based move index at which the
/// knight entered it. A finished tour holds every index `1..=n²` once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    n: usize,
    cells: Vec<i32>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![UNVISITED; n * n],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of squares (`n²`).
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Whether `cell` lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.n && cell.col < self.n
    }

    /// Visit number stored at `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is off the board.
    pub fn get(&self, cell: Cell) -> i32 {
        self.cells[cell.index(self.n)]
    }

    /// Stores a visit number at `cell`.
    pub fn set(&mut self, cell: Cell, value: i32) {
        let n = self.n;
        self.cells[cell.index(n)] = value;
    }

    /// Resets `cell` to [`UNVISITED`].
    pub fn clear(&mut self, cell: Cell) {
        self.set(cell, UNVISITED);
    }

    /// Whether `cell` has not been visited.
    pub fn is_unvisited(&self, cell: Cell) -> bool {
        self.get(cell) == UNVISITED
    }

    /// Row-major slice of all cells.
    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // chunks(0) panics; an empty board has no rows anyway
        self.cells.chunks(self.n.max(1))
    }

    /// Copies the board into nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    /// Whether every index `1..=n²` appears exactly once.
    pub fn is_complete(&self) -> bool {
        let area = self.area();
        let mut seen = vec![false; area];
        for &v in &self.cells {
            if v < 1 || v as usize > area || seen[v as usize - 1] {
                return false;
            }
            seen[v as usize - 1] = true;
        }
        true
    }

    /// Cells ordered by their visit number, skipping unvisited ones.
    pub fn path(&self) -> Vec<Cell> {
        let mut visited: Vec<(i32, Cell)> = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != UNVISITED)
            .map(|(i, &v)| (v, Cell::from_index(i, self.n)))
            .collect();
        visited.sort_by_key(|&(v, _)| v);
        visited.into_iter().map(|(_, c)| c).collect()
    }

    /// Whether the board is a complete tour whose consecutive visits are
    /// all a knight move apart.
    pub fn is_knight_tour(&self) -> bool {
        self.is_complete() && self.path().windows(2).all(|w| w[0].is_knight_move(w[1]))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.area().to_string().len().max(2);
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == UNVISITED {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{v:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
