//! The naked-single deduction step.

use std::fmt::Write as _;

use gridlock_core::{Digit, DigitSet, Grid, House, Position};

/// One committed placement, with its justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The cell that was filled.
    pub pos: Position,
    /// The digit placed there.
    pub digit: Digit,
    /// The cell's candidate set at the time of placement (a singleton).
    pub candidates: DigitSet,
    /// A human-readable justification of the placement.
    pub explanation: String,
}

/// Result of one [`deduce_step`] call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// A certain move was found and placed; empty cells remain.
    Placed(Placement),
    /// A certain move was found and placed, and it filled the last empty cell.
    Completed(Placement),
    /// No empty cell has exactly one candidate. Not necessarily unsolvable;
    /// the caller may change the grid (e.g. from user input) and retry.
    Stuck,
}

impl StepOutcome {
    /// Returns the placement if a move was made, `None` when stuck.
    #[must_use]
    pub const fn placement(&self) -> Option<&Placement> {
        match self {
            Self::Placed(placement) | Self::Completed(placement) => Some(placement),
            Self::Stuck => None,
        }
    }
}

/// Finds and commits one certain move on `grid`.
///
/// Scans the empty cells in row-major order for the first whose candidate set
/// has exactly one member (a naked single), writes that digit into the grid,
/// and explains the inference. The decision is derived from candidates alone;
/// no solution grid is consulted.
///
/// One call makes at most one placement. Callers drive the solve by invoking
/// this in a loop (or per UI event) until [`StepOutcome::Completed`] or
/// [`StepOutcome::Stuck`].
#[must_use]
pub fn deduce_step(grid: &mut Grid) -> StepOutcome {
    let Some((pos, digit, candidates)) = find_naked_single(grid) else {
        return StepOutcome::Stuck;
    };

    let explanation = explain(pos, digit, candidates);
    grid[pos] = Some(digit);
    let placement = Placement {
        pos,
        digit,
        candidates,
        explanation,
    };
    if grid.is_complete() {
        StepOutcome::Completed(placement)
    } else {
        StepOutcome::Placed(placement)
    }
}

fn find_naked_single(grid: &Grid) -> Option<(Position, Digit, DigitSet)> {
    grid.empty_positions().find_map(|pos| {
        let candidates = grid.candidates_at(pos);
        let digit = candidates.as_single()?;
        Some((pos, digit, candidates))
    })
}

/// Builds the justification text for placing `digit` at `pos`.
///
/// Coordinates and houses are written 1-indexed for humans.
fn explain(pos: Position, digit: Digit, candidates: DigitSet) -> String {
    let [row, column, house_box] = House::of(pos);
    let mut text = String::new();
    let _ = writeln!(text, "Placing {digit} at {pos} because:");
    let _ = writeln!(text, "1. {row} does not contain {digit}");
    let _ = writeln!(text, "2. {column} does not contain {digit}");
    let _ = writeln!(text, "3. {house_box} does not contain {digit}");
    let list = candidates
        .iter()
        .map(|candidate| candidate.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(text, "4. Possible values for this cell: {list}");
    if candidates.len() == 1 {
        let _ = writeln!(text, "5. This is the only possible value for this cell!");
    }
    text
}
