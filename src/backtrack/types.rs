//! Search trace types for the backtracking solver.

use crate::board::Cell;

/// One committed cell: the knight entered `(row, col)` as move `move_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitEntry {
    /// Row of the committed cell.
    pub row: usize,
    /// Column of the committed cell.
    pub col: usize,
    /// 1-based move index written into the cell.
    pub move_index: usize,
}

impl VisitEntry {
    /// Creates an entry for `cell` at `move_index`.
    pub const fn new(cell: Cell, move_index: usize) -> Self {
        Self {
            row: cell.row,
            col: cell.col,
            move_index,
        }
    }

    /// The committed cell.
    pub const fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

/// Chronological record of every committed cell.
///
/// Commits later undone by backtracking stay in the trace, so it replays
/// the whole search rather than just the accepted tour. Use
/// [`final_path`](Self::final_path) for the tour alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitTrace {
    entries: Vec<VisitEntry>,
}

impl VisitTrace {
    /// Appends a committed cell.
    pub fn push(&mut self, entry: VisitEntry) {
        self.entries.push(entry);
    }

    /// Number of commits recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was committed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in commit order.
    pub fn entries(&self) -> &[VisitEntry] {
        &self.entries
    }

    /// Iterates over entries in commit order.
    pub fn iter(&self) -> std::slice::Iter<'_, VisitEntry> {
        self.entries.iter()
    }

    /// Entries stably sorted by move index, the order a display replays
    /// them in.
    pub fn sorted_by_move(&self) -> Vec<VisitEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| e.move_index);
        sorted
    }

    /// The path still standing at the end of the search.
    ///
    /// A commit at index `k` means moves `1..k` are the current prefix, so
    /// replaying the trace with truncation leaves exactly the live path.
    pub fn final_path(&self) -> Vec<VisitEntry> {
        let mut path: Vec<VisitEntry> = Vec::new();
        for &entry in &self.entries {
            path.truncate(entry.move_index.saturating_sub(1));
            path.push(entry);
        }
        path
    }
}

impl<'a> IntoIterator for &'a VisitTrace {
    type Item = &'a VisitEntry;
    type IntoIter = std::slice::Iter<'a, VisitEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Notification emitted while the search mutates the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// `cell` was marked with `move_index`.
    Commit {
        /// The marked cell.
        cell: Cell,
        /// Index written into it.
        move_index: usize,
    },
    /// `cell` was reset to unvisited after its subtree failed.
    Revert {
        /// The cleared cell.
        cell: Cell,
        /// Index it held before clearing.
        move_index: usize,
    },
}
