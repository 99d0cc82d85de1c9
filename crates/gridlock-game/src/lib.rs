//! Game session management for Gridlock.
//!
//! Ties the other crates together into a playable game: per-cell state with
//! given-cell protection, score and penalty bookkeeping, assisted solving
//! through a [`SolveSession`](gridlock_solver::SolveSession), and a plain-text
//! share code for saving and restoring boards.
//!
//! # Examples
//!
//! ```
//! use gridlock_game::Game;
//! use gridlock_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Easy)?;
//! let game = Game::new(puzzle);
//!
//! assert!(!game.is_solved());
//! assert_eq!(game.score(), 0);
//! # Ok::<(), gridlock_generator::CarveError>(())
//! ```

pub use self::{
    cell::CellState,
    game::{Game, GameError, InputOutcome},
    share::{ShareCode, ShareCodeError},
};

mod cell;
mod game;
mod share;
