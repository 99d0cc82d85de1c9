//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Positions also have a row-major linear index for flat storage.
///
/// # Examples
///
/// ```
/// use gridlock_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.index(), 2 * 9 + 4);
/// assert_eq!(Position::from_index(pos.index()), pos);
///
/// // Displayed 1-indexed, for humans
/// assert_eq!(pos.to_string(), "R3C5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order (left to right, top to bottom).
    ///
    /// This is the scan order used by the generator's backtracking and the
    /// solver's search for certain moves.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Creates a position from a row-major linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = ((index % 9) as u8, (index / 9) as u8);
        Self { x, y }
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.y / 3 * 3 + self.x / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.y + 1, self.x + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[1], Position::new(1, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), *pos);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_display_is_one_indexed() {
        assert_eq!(Position::new(0, 0).to_string(), "R1C1");
        assert_eq!(Position::new(8, 8).to_string(), "R9C9");
        assert_eq!(Position::new(2, 6).to_string(), "R7C3");
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
