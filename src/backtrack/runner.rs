//! Backtracking search execution.
//!
//! [`BacktrackRunner`] performs a depth-first search over the board,
//! trying candidate moves in Warnsdorff order and undoing them on dead
//! ends. The recursion is unrolled onto an explicit frame stack so depth
//! `n²` never runs into the call-stack limit; the visiting order is the
//! same as the recursive formulation.

use super::config::BacktrackConfig;
use super::types::{SearchEvent, VisitEntry, VisitTrace};
use crate::board::{ordered_moves, Board, Cell};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How a backtracking search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BacktrackOutcome {
    /// Every square was visited.
    Solved,
    /// The root ran out of candidates; no tour exists from the start.
    NoSolution,
    /// The `max_steps` budget ran out first.
    Aborted,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a backtracking run.
#[derive(Debug, Clone)]
pub struct BacktrackResult {
    /// How the search ended.
    pub outcome: BacktrackOutcome,

    /// Board at the end of the search. A full tour when solved.
    pub board: Board,

    /// Every commit in chronological order, including undone ones.
    pub trace: VisitTrace,

    /// Number of cells committed after the start square.
    pub committed: usize,

    /// Number of cells reverted to unvisited.
    pub backtracks: usize,
}

impl BacktrackResult {
    /// The solved board, if the search completed a tour.
    pub fn solution(&self) -> Option<&Board> {
        match self.outcome {
            BacktrackOutcome::Solved => Some(&self.board),
            _ => None,
        }
    }

    /// Whether a tour was found.
    pub fn is_solved(&self) -> bool {
        self.outcome == BacktrackOutcome::Solved
    }
}

/// One level of the unrolled recursion: the cell occupied at this depth
/// and its remaining Warnsdorff-ordered candidates.
struct Frame {
    cell: Cell,
    candidates: Vec<Cell>,
    next: usize,
}

impl Frame {
    fn new(board: &Board, cell: Cell) -> Self {
        Self {
            cell,
            candidates: ordered_moves(board, cell),
            next: 0,
        }
    }

    fn advance(&mut self) -> Option<Cell> {
        let cell = self.candidates.get(self.next).copied();
        self.next += 1;
        cell
    }
}

/// Executes the backtracking search.
///
/// # Usage
///
/// ```
/// use u_knightour::backtrack::{BacktrackConfig, BacktrackRunner};
///
/// let result = BacktrackRunner::run(&BacktrackConfig::new(5, 0, 0));
/// assert!(result.is_solved());
/// assert!(result.board.is_knight_tour());
/// ```
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Runs the search.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`BacktrackConfig::validate`] first to get a descriptive error).
    pub fn run(config: &BacktrackConfig) -> BacktrackResult {
        Self::run_with_observer(config, None, |_| {})
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked before every search step.
    pub fn run_with_cancel(
        config: &BacktrackConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BacktrackResult {
        Self::run_with_observer(config, cancel, |_| {})
    }

    /// Runs the search, reporting every commit and revert to `observer`.
    pub fn run_with_observer<F>(
        config: &BacktrackConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> BacktrackResult
    where
        F: FnMut(SearchEvent),
    {
        config.validate().expect("invalid BacktrackConfig");

        let area = config.n * config.n;
        let start = config.start;
        let mut board = Board::new(config.n);
        let mut trace = VisitTrace::default();
        let mut committed = 0usize;
        let mut backtracks = 0usize;

        log::debug!(
            "backtracking search on {n}x{n} board from {start}",
            n = config.n
        );

        board.set(start, 1);
        trace.push(VisitEntry::new(start, 1));
        observer(SearchEvent::Commit {
            cell: start,
            move_index: 1,
        });

        let outcome = if area == 1 {
            BacktrackOutcome::Solved
        } else {
            let mut stack = vec![Frame::new(&board, start)];
            loop {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        break BacktrackOutcome::Cancelled;
                    }
                }

                let next = match stack.last_mut() {
                    Some(frame) => frame.advance(),
                    None => break BacktrackOutcome::NoSolution,
                };

                match next {
                    Some(cell) => {
                        if config.max_steps.is_some_and(|limit| committed >= limit) {
                            break BacktrackOutcome::Aborted;
                        }
                        let move_index = stack.len() + 1;
                        board.set(cell, move_index as i32);
                        trace.push(VisitEntry::new(cell, move_index));
                        committed += 1;
                        observer(SearchEvent::Commit { cell, move_index });

                        if move_index == area {
                            break BacktrackOutcome::Solved;
                        }
                        stack.push(Frame::new(&board, cell));
                    }
                    None => {
                        let move_index = stack.len();
                        let Some(frame) = stack.pop() else {
                            continue;
                        };
                        // The start square is never undone.
                        if !stack.is_empty() {
                            board.clear(frame.cell);
                            backtracks += 1;
                            observer(SearchEvent::Revert {
                                cell: frame.cell,
                                move_index,
                            });
                            log::trace!("backtrack from {} at move {move_index}", frame.cell);
                        }
                    }
                }
            }
        };

        log::info!(
            "backtracking finished: {outcome:?} after {committed} commits, {backtracks} backtracks"
        );

        BacktrackResult {
            outcome,
            board,
            trace,
            committed,
            backtracks,
        }
    }
}
