use gridlock_core::Digit;

/// State of a single cell on the game board.
///
/// Distinguishes cells that came with the puzzle from cells the player
/// entered, so givens can be protected from modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum CellState {
    /// A fixed cell from the original puzzle.
    Given(Digit),
    /// A digit entered by the player (or the assistant).
    Filled(Digit),
    /// No digit yet.
    #[default]
    Empty,
}

impl CellState {
    /// Returns the digit in this cell, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}
