//! The 9×9 board and its rule predicates.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, house::House, position::Position};

/// Error for malformed externally supplied board data.
///
/// Grids are routinely reconstructed from outside sources (share codes, saved
/// state), so construction validates instead of assuming well-formed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A cell value was outside the range 0-9.
    #[display("cell value out of range at {pos}: {value}")]
    ValueOutOfRange {
        /// Position of the offending cell.
        pos: Position,
        /// The rejected value.
        value: u8,
    },
    /// A flat cell buffer did not hold exactly 81 values.
    #[display("expected 81 cell values, got {len}")]
    WrongLength {
        /// Number of values supplied.
        len: usize,
    },
}

/// Error from parsing a grid out of its textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character that is neither a digit, an empty-cell marker, nor whitespace.
    #[display("unexpected character in grid text: {ch:?}")]
    UnexpectedChar {
        /// The rejected character.
        ch: char,
    },
    /// The text did not describe exactly 81 cells.
    #[display("expected 81 cells in grid text, got {count}")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

/// A 9×9 Sudoku board.
///
/// Cells hold `Option<Digit>`; `None` is an empty cell. The same type serves
/// as a complete solution, a carved puzzle, and an in-progress working grid;
/// the roles differ only in how full the grid is and who mutates it.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// assert_eq!(grid.count_empty(), 81);
///
/// let pos = Position::new(3, 3);
/// grid[pos] = Some(Digit::D7);
/// assert_eq!(grid[pos], Some(Digit::D7));
/// assert!(!grid.allows(Position::new(5, 3), Digit::D7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from nine rows of cell values, with 0 meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ValueOutOfRange`] if any value exceeds 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Digit, Grid, Position};
    ///
    /// let mut rows = [[0_u8; 9]; 9];
    /// rows[2][4] = 6;
    /// let grid = Grid::from_rows(&rows)?;
    /// assert_eq!(grid[Position::new(4, 2)], Some(Digit::D6));
    /// # Ok::<(), gridlock_core::GridError>(())
    /// ```
    pub fn from_rows(rows: &[[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut grid = Self::new();
        for (y, row) in (0..).zip(rows) {
            for (x, &value) in (0..).zip(row) {
                let pos = Position::new(x, y);
                grid[pos] = Self::checked_cell(pos, value)?;
            }
        }
        Ok(grid)
    }

    /// Creates a grid from a flat row-major buffer of 81 cell values,
    /// with 0 meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WrongLength`] unless `values` holds exactly 81
    /// entries, and [`GridError::ValueOutOfRange`] if any value exceeds 9.
    pub fn from_flat(values: &[u8]) -> Result<Self, GridError> {
        if values.len() != 81 {
            return Err(GridError::WrongLength { len: values.len() });
        }
        let mut grid = Self::new();
        for (i, &value) in values.iter().enumerate() {
            let pos = Position::from_index(i);
            grid[pos] = Self::checked_cell(pos, value)?;
        }
        Ok(grid)
    }

    fn checked_cell(pos: Position, value: u8) -> Result<Option<Digit>, GridError> {
        match value {
            0 => Ok(None),
            _ => Digit::try_from_value(value)
                .map(Some)
                .ok_or(GridError::ValueOutOfRange { pos, value }),
        }
    }

    /// Returns the cell values as nine rows, with 0 for empty cells.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            rows[pos.y() as usize][pos.x() as usize] =
                self[pos].map_or(0, |digit| digit.value());
        }
        rows
    }

    /// Returns the cell values as a flat row-major buffer, with 0 for empty cells.
    #[must_use]
    pub fn to_flat(&self) -> [u8; 81] {
        let mut values = [0; 81];
        for pos in Position::ALL {
            values[pos.index()] = self[pos].map_or(0, |digit| digit.value());
        }
        values
    }

    /// Checks whether `digit` may be placed at `pos` without clashing with
    /// any *other* cell of its row, column, or box.
    ///
    /// The content of `pos` itself is ignored, so the check is meaningful both
    /// for empty cells and for re-validating an already placed digit. Pure:
    /// no side effects, same inputs always give the same answer.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid[Position::new(0, 0)] = Some(Digit::D4);
    ///
    /// assert!(!grid.allows(Position::new(6, 0), Digit::D4)); // same row
    /// assert!(grid.allows(Position::new(6, 0), Digit::D5));
    /// // The checked cell's own content does not conflict with itself.
    /// assert!(grid.allows(Position::new(0, 0), Digit::D4));
    /// ```
    #[must_use]
    pub fn allows(&self, pos: Position, digit: Digit) -> bool {
        House::of(pos).into_iter().all(|house| {
            house
                .positions()
                .filter(|&p| p != pos)
                .all(|p| self[p] != Some(digit))
        })
    }

    /// Computes the set of digits that may legally fill `pos`.
    ///
    /// Starts from the full digit set and eliminates, house by house, every
    /// digit visible from `pos` (excluding the cell itself). Only meaningful
    /// for empty cells; for any cell it agrees exactly with
    /// [`Grid::allows`]: a digit is in the set iff `allows` accepts it.
    ///
    /// An empty result means no digit can fill the cell, which is the signal
    /// the generator's backtracking relies on.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for house in House::of(pos) {
            for p in house.positions().filter(|&p| p != pos) {
                if let Some(digit) = self[p] {
                    candidates.remove(digit);
                }
            }
        }
        candidates
    }

    /// Returns the set of digits present in `house`.
    #[must_use]
    pub fn digits_in(&self, house: House) -> DigitSet {
        house.positions().filter_map(|p| self[p]).collect()
    }

    /// Returns an iterator over the empty positions, in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self[pos].is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the grid is a valid complete solution: every cell
    /// filled and every row, column, and box containing all nine digits.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete()
            && House::ALL
                .into_iter()
                .all(|house| self.digits_in(house) == DigitSet::FULL)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for Grid {
    /// Formats the grid as nine lines of three space-separated triplets,
    /// with `_` for empty cells. [`Grid::from_str`] accepts the same shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self[Position::new(x, y)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            if y < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from text: digits `1`-`9` for filled cells, `_`, `.`, or
    /// `0` for empty cells, with all whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars() {
            let cell = match ch {
                ch if ch.is_whitespace() => continue,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = (u32::from(ch) - u32::from('0')) as u8;
                    Some(Digit::from_value(value))
                }
                '_' | '.' | '0' => None,
                ch => return Err(ParseGridError::UnexpectedChar { ch }),
            };
            if count < 81 {
                grid[Position::from_index(count)] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}
