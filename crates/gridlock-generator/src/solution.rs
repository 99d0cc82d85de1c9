//! Randomized solution generation.

use gridlock_core::{Digit, Grid, Position};
use rand::{Rng, seq::SliceRandom as _};

/// Fills an empty grid into a complete valid solution by randomized
/// backtracking.
///
/// Cells are visited in row-major order. At each empty cell the digits 1-9
/// are shuffled with a uniform Fisher–Yates shuffle and tried in that order;
/// the first digit the grid [`allows`](Grid::allows) is placed and the scan
/// recurses. When no digit fits, the cell is cleared and the failure
/// propagates to the previous cell, which moves on to its next shuffled
/// candidate. Starting from an empty grid this search always succeeds, so
/// there is no error path.
///
/// The shuffle is the only source of randomness: driving this with a seeded
/// generator reproduces the same solution.
///
/// # Examples
///
/// ```
/// use gridlock_generator::random_solution;
///
/// let solution = random_solution(&mut rand::rng());
/// assert!(solution.is_solved());
/// ```
pub fn random_solution<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    let filled = fill_from(&mut grid, 0, rng);
    debug_assert!(filled, "backtracking from an empty grid cannot fail");
    grid
}

/// Depth is bounded by the 81 cells; each frame owns one cell's choice and
/// undoes it before reporting failure.
fn fill_from<R: Rng + ?Sized>(grid: &mut Grid, index: usize, rng: &mut R) -> bool {
    if index == 81 {
        return true;
    }
    let pos = Position::from_index(index);
    if grid[pos].is_some() {
        return fill_from(grid, index + 1, rng);
    }

    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.allows(pos, digit) {
            grid[pos] = Some(digit);
            if fill_from(grid, index + 1, rng) {
                return true;
            }
        }
    }
    grid[pos] = None;
    false
}
