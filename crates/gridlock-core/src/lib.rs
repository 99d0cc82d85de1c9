//! Core data structures and rule checking for Sudoku.
//!
//! This crate provides the board representation shared by the generator,
//! solver, and game crates, along with the two pure rule predicates everything
//! else is built from:
//!
//! - [`Grid::allows`] checks whether a digit may legally be placed at a
//!   position given the *other* cells of its row, column, and box.
//! - [`Grid::candidates_at`] computes the set of legal digits for an empty
//!   cell by eliminating everything visible from it.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of the digits 1-9
//! - [`position`]: Board coordinates and row-major cell indices
//! - [`house`]: Rows, columns, and 3×3 boxes as first-class values
//! - [`digit_set`]: Compact sets of digits, used for candidate tracking
//! - [`grid`]: The 9×9 board itself, with validated construction from
//!   externally supplied data
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid[Position::new(0, 0)] = Some(Digit::D5);
//!
//! // 5 is no longer allowed anywhere in row 0, column 0, or the top-left box.
//! assert!(!grid.allows(Position::new(8, 0), Digit::D5));
//! assert!(!grid.allows(Position::new(0, 8), Digit::D5));
//! assert!(!grid.allows(Position::new(2, 2), Digit::D5));
//! assert!(grid.allows(Position::new(4, 4), Digit::D5));
//!
//! let candidates = grid.candidates_at(Position::new(1, 0));
//! assert_eq!(candidates.len(), 8);
//! assert!(!candidates.contains(Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, GridError, ParseGridError},
    house::House,
    position::Position,
};
