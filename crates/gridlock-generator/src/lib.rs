//! Sudoku puzzle generation.
//!
//! Puzzles are produced in two stages:
//!
//! 1. [`random_solution`] fills an empty grid into a complete valid solution
//!    by randomized backtracking, shuffling the candidate order at every cell
//!    with a uniform Fisher–Yates shuffle.
//! 2. [`carve`] blanks a difficulty-determined number of cells from a copy of
//!    the solution to obtain the playable problem grid.
//!
//! [`PuzzleGenerator`] ties the stages together and pairs every puzzle with
//! the [`PuzzleSeed`] that produced it, so that any puzzle can be regenerated
//! exactly from its seed.
//!
//! Carving makes no uniqueness-of-solution guarantee: the game validates
//! against the one retained solution grid, so a problem that admits other
//! completions still plays correctly.
//!
//! # Examples
//!
//! ```
//! use gridlock_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Easy)?;
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.count_empty(), 30);
//! # Ok::<(), gridlock_generator::CarveError>(())
//! ```

pub use self::{
    puzzle::{CarveError, Difficulty, GeneratedPuzzle, ParseDifficultyError, PuzzleGenerator, carve},
    seed::{PuzzleSeed, SeedError},
    solution::random_solution,
};

mod puzzle;
mod seed;
mod solution;
