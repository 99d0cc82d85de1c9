//! Plain-text share codes for saving and restoring a game.
//!
//! A grid serializes to 81 digit characters in row-major order, `0` meaning
//! empty. A full share code is the board and its solution joined by a single
//! `-`, short enough for a URL fragment or a chat message. The code carries
//! no given/filled split; [`Game::from_parts`](crate::Game::from_parts)
//! rebuilds a restored game with the whole board as givens.

use std::{fmt, str::FromStr};

use gridlock_core::{Digit, Grid, Position};

/// Error from parsing a share code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShareCodeError {
    /// The code does not split into two parts on `-`.
    #[display("expected two `-`-separated grids, found {parts}")]
    WrongPartCount {
        /// Number of parts found.
        parts: usize,
    },
    /// A grid part is not exactly 81 characters.
    #[display("expected 81 cell characters, found {len}")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character outside `0..=9` was found.
    #[display("unexpected character {ch:?} in share code")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
    },
}

/// A board and its solution, serializable as a compact text code.
///
/// # Examples
///
/// ```
/// use gridlock_game::ShareCode;
/// use gridlock_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy)?;
/// let code = ShareCode {
///     board: puzzle.problem,
///     solution: puzzle.solution,
/// };
/// let restored: ShareCode = code.to_string().parse()?;
/// assert_eq!(restored, code);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareCode {
    /// The board as last seen, givens and player input combined.
    pub board: Grid,
    /// The board's solution.
    pub solution: Grid,
}

/// Serializes a grid as 81 digit characters, `0` for empty cells.
#[must_use]
pub fn encode(grid: &Grid) -> String {
    grid.to_flat().iter().map(u8::to_string).collect()
}

/// Parses 81 digit characters into a grid.
///
/// # Errors
///
/// Returns [`ShareCodeError::WrongLength`] or
/// [`ShareCodeError::UnexpectedChar`] on malformed input.
pub fn decode(code: &str) -> Result<Grid, ShareCodeError> {
    let mut grid = Grid::new();
    let mut count = 0;
    for (i, ch) in code.chars().enumerate() {
        let Some(value) = ch.to_digit(10) else {
            return Err(ShareCodeError::UnexpectedChar { ch });
        };
        if i < 81 {
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            grid[Position::from_index(i)] = Digit::try_from_value(value);
        }
        count += 1;
    }
    if count != 81 {
        return Err(ShareCodeError::WrongLength { len: count });
    }
    Ok(grid)
}

impl fmt::Display for ShareCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", encode(&self.board), encode(&self.solution))
    }
}

impl FromStr for ShareCode {
    type Err = ShareCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        let (Some(board), Some(solution), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ShareCodeError::WrongPartCount {
                parts: s.split('-').count(),
            });
        };
        Ok(Self {
            board: decode(board)?,
            solution: decode(solution)?,
        })
    }
}
