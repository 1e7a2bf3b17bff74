//! Backtracking search configuration.

use crate::board::Cell;
use crate::error::{TourError, TourResult};

/// Configuration for the backtracking solver.
///
/// # Examples
///
/// ```
/// use u_knightour::backtrack::BacktrackConfig;
///
/// let config = BacktrackConfig::new(8, 0, 0).with_max_steps(1_000_000);
/// assert_eq!(config.n, 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktrackConfig {
    /// Board side length.
    pub n: usize,

    /// Square the knight starts on (move 1).
    pub start: Cell,

    /// Optional budget of committed moves.
    ///
    /// When exhausted the search stops with
    /// [`BacktrackOutcome::Aborted`](super::BacktrackOutcome::Aborted).
    /// `None` searches until a tour is found or the root runs out of
    /// candidates (the default).
    pub max_steps: Option<usize>,
}

impl BacktrackConfig {
    /// Creates a configuration for an `n`×`n` board starting at
    /// `(start_row, start_col)`.
    pub fn new(n: usize, start_row: usize, start_col: usize) -> Self {
        Self {
            n,
            start: Cell::new(start_row, start_col),
            max_steps: None,
        }
    }

    /// Sets the committed-move budget.
    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TourResult<()> {
        if self.n == 0 {
            return Err(TourError::InvalidBoardSize(self.n));
        }
        if self.start.row >= self.n || self.start.col >= self.n {
            return Err(TourError::StartOutOfBounds {
                row: self.start.row,
                col: self.start.col,
                n: self.n,
            });
        }
        if self.max_steps == Some(0) {
            return Err(TourError::InvalidConfig(
                "max_steps must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
