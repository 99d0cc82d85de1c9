//! Step-by-step deductive Sudoku solving with human-readable explanations.
//!
//! This is deliberately a weak solver: it knows a single technique, the
//! *naked single* (an empty cell with exactly one remaining candidate), and
//! commits one placement per call. What it gives up in completeness it gains
//! in explainability: every step is a single inference a human can check,
//! with a written justification, rather than an opaque full solve.
//!
//! [`deduce_step`] is the bare operation on a working grid;
//! [`SolveSession`] wraps it with the puzzle/solution association and an
//! ordered history of explained steps for presentation layers.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Grid;
//! use gridlock_solver::{StepOutcome, deduce_step};
//!
//! // A full grid with one cell blanked has an obvious certain move.
//! let mut grid: Grid = "
//!     534 678 912
//!     672 195 348
//!     198 342 567
//!     859 761 423
//!     426 853 791
//!     713 924 856
//!     961 537 284
//!     287 419 635
//!     345 286 17_
//! "
//! .parse()?;
//!
//! match deduce_step(&mut grid) {
//!     StepOutcome::Completed(placement) => {
//!         assert_eq!(placement.digit.value(), 9);
//!         println!("{}", placement.explanation);
//!     }
//!     outcome => panic!("expected completion, got {outcome:?}"),
//! }
//! # Ok::<(), gridlock_core::ParseGridError>(())
//! ```

pub use self::{
    session::{SessionError, SolveSession, StepRecord},
    step::{Placement, StepOutcome, deduce_step},
};

mod session;
mod step;
