//! Solving sessions: working grid, solution association, and step history.

use gridlock_core::{Digit, Grid, Position};

use crate::step::{StepOutcome, deduce_step};

/// One entry of a session's step history.
///
/// Records are plain data, independent of any presentation layer: the
/// justification text, the full grid as it looked *after* the step, and the
/// cell to highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The placement's justification.
    pub explanation: String,
    /// The working grid immediately after the placement.
    pub snapshot: Grid,
    /// The cell that was filled by this step.
    pub placed: Position,
}

/// Error from constructing a session out of an incompatible grid pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The supplied solution grid has empty cells.
    #[display("solution grid is incomplete: {missing} empty cells")]
    IncompleteSolution {
        /// Number of empty cells in the solution.
        missing: usize,
    },
    /// A filled puzzle cell disagrees with the solution.
    #[display("puzzle contradicts solution at {pos}")]
    SolutionMismatch {
        /// The first disagreeing position, in row-major order.
        pos: Position,
    },
}

/// A step-by-step solving session over one puzzle.
///
/// Holds the immutable puzzle and solution grids, a mutable working grid, and
/// the ordered history of explained steps. All solving state lives here, with
/// no process-wide flags or shared grids, so any number of sessions can
/// coexist.
///
/// The solution grid is retained for presentation context only (e.g. marking
/// which digits were givens); [`SolveSession::step`] never consults it.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Grid, Position};
/// use gridlock_solver::SolveSession;
///
/// let solution: Grid = "
///     534 678 912
///     672 195 348
///     198 342 567
///     859 761 423
///     426 853 791
///     713 924 856
///     961 537 284
///     287 419 635
///     345 286 179
/// "
/// .parse()?;
/// let mut puzzle = solution;
/// puzzle[Position::new(0, 0)] = None;
///
/// let mut session = SolveSession::new(puzzle, solution)?;
/// let outcome = session.step();
/// assert!(outcome.is_completed());
/// assert_eq!(session.history().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveSession {
    puzzle: Grid,
    solution: Grid,
    working: Grid,
    history: Vec<StepRecord>,
}

impl SolveSession {
    /// Creates a session with a working grid copied from `puzzle`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::IncompleteSolution`] if `solution` is not a
    /// full grid, or [`SessionError::SolutionMismatch`] if a filled puzzle
    /// cell disagrees with it.
    pub fn new(puzzle: Grid, solution: Grid) -> Result<Self, SessionError> {
        if !solution.is_complete() {
            return Err(SessionError::IncompleteSolution {
                missing: solution.count_empty(),
            });
        }
        for pos in Position::ALL {
            if let Some(digit) = puzzle[pos] {
                if solution[pos] != Some(digit) {
                    return Err(SessionError::SolutionMismatch { pos });
                }
            }
        }
        Ok(Self {
            puzzle,
            solution,
            working: puzzle,
            history: Vec::new(),
        })
    }

    /// Returns the original puzzle grid.
    #[must_use]
    pub const fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// Returns the solution grid this session was created with.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the current working grid.
    #[must_use]
    pub const fn working(&self) -> &Grid {
        &self.working
    }

    /// Returns the explained steps taken so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Writes a digit into the working grid without deducing anything.
    ///
    /// This is how user input flows into a session between steps; a solver
    /// that was [`Stuck`](StepOutcome::Stuck) may find new certain moves
    /// afterwards.
    pub fn fill_cell(&mut self, pos: Position, digit: Digit) {
        self.working[pos] = Some(digit);
    }

    /// Finds and commits one certain move on the working grid.
    ///
    /// Placements are appended to the history; a [`Stuck`](StepOutcome::Stuck)
    /// outcome leaves the session untouched and may be retried after
    /// [`SolveSession::fill_cell`].
    pub fn step(&mut self) -> StepOutcome {
        let outcome = deduce_step(&mut self.working);
        if let Some(placement) = outcome.placement() {
            self.history.push(StepRecord {
                explanation: placement.explanation.clone(),
                snapshot: self.working,
                placed: placement.pos,
            });
        }
        outcome
    }

    /// Returns `true` if the working grid has no empty cells left.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.working.is_complete()
    }
}
