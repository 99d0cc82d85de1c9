//! Rows, columns, and 3×3 boxes.

use std::fmt::{self, Display};

use crate::position::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// Every cell belongs to exactly three houses, and the Sudoku constraint is
/// that no house contains a digit twice. The rule predicates on
/// [`Grid`](crate::Grid) are defined in terms of the houses returned by
/// [`House::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses containing `pos`, in row, column, box order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{House, Position};
    ///
    /// let houses = House::of(Position::new(4, 2));
    /// assert_eq!(houses[0], House::Row { y: 2 });
    /// assert_eq!(houses[1], House::Column { x: 4 });
    /// assert_eq!(houses[2], House::Box { index: 1 });
    /// ```
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => {
                Position::new(index % 3 * 3 + i % 3, index / 3 * 3 + i / 3)
            }
        }
    }

    /// Returns an iterator over the nine positions of this house.
    ///
    /// Rows iterate left to right, columns top to bottom, boxes row-major
    /// within the box.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { y } => write!(f, "row {}", y + 1),
            House::Column { x } => write!(f, "column {}", x + 1),
            House::Box { index } => write!(f, "box {}", index + 1),
        }
    }
}
