//! Entry points for callers.
//!
//! [`solve_backtracking`] and [`solve_genetic`] cover the common case.
//! [`Solver`] adds a seed, callbacks, cancellation and the optional search
//! budget. Parameters are validated before any search starts; a search
//! that finds no tour is a [`SolveResult::NoSolution`] value, not an error.

use crate::backtrack::{BacktrackConfig, BacktrackOutcome, BacktrackRunner, SearchEvent, VisitTrace};
use crate::board::Board;
use crate::error::{TourError, TourResult};
use crate::ga::{GaConfig, GaRunner, GenerationStats, KnightTourProblem, DEFAULT_TOURNAMENT_SIZE};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Boards larger than this are accepted but logged as slow.
pub const LARGE_BOARD_WARNING: usize = 64;

/// Which solver to run, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Exhaustive Warnsdorff-ordered search from a start square.
    Backtracking {
        /// Start row.
        start_row: usize,
        /// Start column.
        start_col: usize,
    },
    /// Genetic algorithm over visiting orders.
    Genetic {
        /// Individuals per generation.
        population_size: usize,
        /// Generation budget.
        generations: usize,
        /// Per-gene swap probability.
        mutation_rate: f64,
        /// Individuals sampled per tournament.
        tournament_size: usize,
    },
}

impl Algorithm {
    /// Genetic parameters used when the caller leaves them blank.
    pub const fn genetic_defaults() -> Self {
        Algorithm::Genetic {
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.01,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

/// Best individual of a genetic run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolvedTour {
    /// The best encoding decoded into 1-based visit numbers, step `i` as
    /// `i + 1`, with never-named cells left unvisited.
    pub board: Board,
    /// The best visiting order found.
    pub best: Vec<usize>,
    /// Its fitness, `n² − adjacency_count`; lower is better.
    pub best_fitness: i64,
    /// Generations executed.
    pub generations: usize,
    /// Whether fitness 0 ended the run early.
    pub converged: bool,
    /// Whether the run was cancelled.
    pub cancelled: bool,
}

/// Normalized outcome of a solve call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveResult {
    /// Backtracking completed a tour.
    Solved {
        /// Every square holds its 1-based visit number.
        board: Board,
        /// All commits, including undone ones.
        trace: VisitTrace,
    },
    /// Backtracking proved no tour exists from the start square.
    NoSolution {
        /// All commits made before giving up.
        trace: VisitTrace,
    },
    /// Backtracking stopped early on its step budget or cancellation.
    Interrupted {
        /// Board as it stood when the search stopped.
        board: Board,
        /// All commits made so far.
        trace: VisitTrace,
    },
    /// Result of a genetic run.
    Evolved(EvolvedTour),
}

impl SolveResult {
    /// The result board, if the run produced one.
    ///
    /// Genetic results always carry their best board even when it is not a
    /// valid tour.
    pub fn board(&self) -> Option<&Board> {
        match self {
            SolveResult::Solved { board, .. } => Some(board),
            SolveResult::Evolved(tour) => Some(&tour.board),
            SolveResult::NoSolution { .. } | SolveResult::Interrupted { .. } => None,
        }
    }

    /// The backtracking visit trace, if any.
    pub fn trace(&self) -> Option<&VisitTrace> {
        match self {
            SolveResult::Solved { trace, .. }
            | SolveResult::NoSolution { trace }
            | SolveResult::Interrupted { trace, .. } => Some(trace),
            SolveResult::Evolved(_) => None,
        }
    }

    /// Whether the result is a complete knight's tour.
    pub fn is_tour(&self) -> bool {
        match self {
            SolveResult::Solved { .. } => true,
            SolveResult::Evolved(tour) => tour.board.is_knight_tour(),
            _ => false,
        }
    }
}

type ProgressFn<'a> = Box<dyn FnMut(&GenerationStats<i64>) + 'a>;
type ObserverFn<'a> = Box<dyn FnMut(SearchEvent) + 'a>;

/// Configurable entry point for both solvers.
///
/// # Examples
///
/// ```
/// use u_knightour::solver::{Algorithm, Solver};
///
/// let mut generations = 0;
/// let result = Solver::new(5)
///     .with_seed(7)
///     .on_progress(|_| generations += 1)
///     .solve(Algorithm::Genetic {
///         population_size: 20,
///         generations: 10,
///         mutation_rate: 0.05,
///         tournament_size: 5,
///     })
///     .unwrap();
/// assert!(result.board().is_some());
/// ```
pub struct Solver<'a> {
    n: usize,
    seed: Option<u64>,
    cancel: Option<Arc<AtomicBool>>,
    max_steps: Option<usize>,
    repair_offspring: bool,
    parallel: bool,
    progress: Option<ProgressFn<'a>>,
    observer: Option<ObserverFn<'a>>,
}

impl<'a> Solver<'a> {
    /// Creates a solver for an `n`×`n` board.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            seed: None,
            cancel: None,
            max_steps: None,
            repair_offspring: true,
            parallel: false,
            progress: None,
            observer: None,
        }
    }

    /// Fixes the GA random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Installs a cancellation flag checked by both solvers.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Caps the number of backtracking commits.
    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// Enables or disables repair of GA crossover offspring.
    pub fn with_repair_offspring(mut self, repair: bool) -> Self {
        self.repair_offspring = repair;
        self
    }

    /// Enables or disables parallel GA evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Registers a callback run once per GA generation.
    pub fn on_progress<F>(mut self, progress: F) -> Self
    where
        F: FnMut(&GenerationStats<i64>) + 'a,
    {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Registers a callback run on every backtracking commit and revert.
    pub fn on_search_event<F>(mut self, observer: F) -> Self
    where
        F: FnMut(SearchEvent) + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Runs `algorithm`.
    pub fn solve(&mut self, algorithm: Algorithm) -> TourResult<SolveResult> {
        match algorithm {
            Algorithm::Backtracking {
                start_row,
                start_col,
            } => self.backtracking(start_row, start_col),
            Algorithm::Genetic {
                population_size,
                generations,
                mutation_rate,
                tournament_size,
            } => self.genetic(population_size, generations, mutation_rate, tournament_size),
        }
    }

    /// Runs the backtracking solver from `(start_row, start_col)`.
    pub fn backtracking(&mut self, start_row: usize, start_col: usize) -> TourResult<SolveResult> {
        self.check_board_size()?;
        let mut config = BacktrackConfig::new(self.n, start_row, start_col);
        config.max_steps = self.max_steps;
        config.validate()?;

        let observer = &mut self.observer;
        let result = BacktrackRunner::run_with_observer(&config, self.cancel.clone(), |event| {
            if let Some(observer) = observer.as_mut() {
                observer(event);
            }
        });

        Ok(match result.outcome {
            BacktrackOutcome::Solved => SolveResult::Solved {
                board: result.board,
                trace: result.trace,
            },
            BacktrackOutcome::NoSolution => SolveResult::NoSolution {
                trace: result.trace,
            },
            BacktrackOutcome::Aborted | BacktrackOutcome::Cancelled => SolveResult::Interrupted {
                board: result.board,
                trace: result.trace,
            },
        })
    }

    /// Runs the genetic solver.
    pub fn genetic(
        &mut self,
        population_size: usize,
        generations: usize,
        mutation_rate: f64,
        tournament_size: usize,
    ) -> TourResult<SolveResult> {
        self.check_board_size()?;
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(TourError::InvalidConfig(format!(
                "mutation_rate must be within 0.0..=1.0, got {mutation_rate}"
            )));
        }

        let mut config = GaConfig::default()
            .with_population_size(population_size)
            .with_max_generations(generations)
            .with_tournament_size(tournament_size)
            .with_parallel(self.parallel);
        config.seed = self.seed;
        config.validate()?;

        let problem = KnightTourProblem::new(self.n)
            .with_mutation_rate(mutation_rate)
            .with_repair_offspring(self.repair_offspring);

        let progress = &mut self.progress;
        let result = GaRunner::run_with_progress(&problem, &config, self.cancel.clone(), |stats| {
            if let Some(progress) = progress.as_mut() {
                progress(stats);
            }
        });

        Ok(SolveResult::Evolved(EvolvedTour {
            board: result.best.to_board(self.n),
            best_fitness: result.best_fitness,
            best: result.best.genes,
            generations: result.generations,
            converged: result.converged,
            cancelled: result.cancelled,
        }))
    }

    fn check_board_size(&self) -> TourResult<()> {
        if self.n == 0 {
            return Err(TourError::InvalidBoardSize(self.n));
        }
        if self.n > LARGE_BOARD_WARNING {
            log::warn!(
                "board size {} exceeds {LARGE_BOARD_WARNING}; solving may take a very long time",
                self.n
            );
        }
        Ok(())
    }
}

/// Searches for a tour of an `n`×`n` board from `(start_row, start_col)`.
///
/// ```
/// use u_knightour::solver::{solve_backtracking, SolveResult};
///
/// match solve_backtracking(5, 0, 0).unwrap() {
///     SolveResult::Solved { board, .. } => assert!(board.is_knight_tour()),
///     other => panic!("expected a tour, got {other:?}"),
/// }
/// ```
pub fn solve_backtracking(n: usize, start_row: usize, start_col: usize) -> TourResult<SolveResult> {
    Solver::new(n).backtracking(start_row, start_col)
}

/// Evolves an approximate tour of an `n`×`n` board.
///
/// Use [`DEFAULT_TOURNAMENT_SIZE`] when the caller has no preference.
pub fn solve_genetic(
    n: usize,
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    tournament_size: usize,
) -> TourResult<SolveResult> {
    Solver::new(n).genetic(population_size, generations, mutation_rate, tournament_size)
}
