//! Difficulty settings, puzzle carving, and the generator facade.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use gridlock_core::{Grid, Position};
use log::debug;
use rand::Rng;

use crate::seed::PuzzleSeed;
use crate::solution::random_solution;

/// Puzzle difficulty, mapping to how many cells are blanked from the solution
/// and the base score awarded for finishing.
///
/// The removal counts are fixed: 30/40/50/60 for Easy through Expert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// 30 cells removed.
    Easy,
    /// 40 cells removed.
    #[default]
    Medium,
    /// 50 cells removed.
    Hard,
    /// 60 cells removed.
    Expert,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the number of cells carved out of the solution.
    #[must_use]
    pub const fn cells_to_remove(self) -> u8 {
        match self {
            Self::Easy => 30,
            Self::Medium => 40,
            Self::Hard => 50,
            Self::Expert => 60,
        }
    }

    /// Returns the base score awarded for completing a puzzle, before time
    /// and penalty multipliers.
    #[must_use]
    pub const fn base_score(self) -> u32 {
        match self {
            Self::Easy => 100,
            Self::Medium => 200,
            Self::Hard => 300,
            Self::Expert => 500,
        }
    }

    /// Returns the difficulty name ("Easy", "Medium", "Hard", "Expert").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {name:?}")]
pub struct ParseDifficultyError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses a difficulty name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError {
                name: s.to_owned(),
            })
    }
}

/// Error from a carving request that cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CarveError {
    /// More removals were requested than the board has cells.
    #[display("cannot remove {requested} cells from an 81-cell board")]
    TooManyCells {
        /// The rejected removal count.
        requested: u8,
    },
    /// The random search for removable cells exceeded its retry budget.
    #[display("carving stalled after removing {removed} of {requested} cells")]
    RetryBudgetExhausted {
        /// Cells removed before stalling.
        removed: u8,
        /// Cells requested.
        requested: u8,
    },
}

/// Number of random position draws allowed per carve. A full solution needs
/// at most a few hundred draws for 60 removals; hitting this cap means the
/// input grid did not have enough filled cells.
const CARVE_RETRY_BUDGET: u32 = 100_000;

/// Blanks `cells_to_remove` cells of `solution`, chosen uniformly at random,
/// and returns the resulting problem grid.
///
/// Draws random positions until enough distinct filled cells have been
/// cleared; draws that land on an already-empty cell do not count toward the
/// quota. Every other cell keeps the solution's value. No
/// uniqueness-of-solution guarantee is made: the game validates against the
/// retained solution grid, not against "the" solution of the problem.
///
/// # Errors
///
/// Returns [`CarveError::TooManyCells`] if `cells_to_remove` exceeds 81, and
/// [`CarveError::RetryBudgetExhausted`] if the retry budget runs out, which
/// only happens when `solution` holds fewer filled cells than requested.
///
/// # Examples
///
/// ```
/// use gridlock_generator::{carve, random_solution};
///
/// let mut rng = rand::rng();
/// let solution = random_solution(&mut rng);
/// let problem = carve(&solution, 40, &mut rng)?;
/// assert_eq!(problem.count_empty(), 40);
/// # Ok::<(), gridlock_generator::CarveError>(())
/// ```
pub fn carve<R: Rng + ?Sized>(
    solution: &Grid,
    cells_to_remove: u8,
    rng: &mut R,
) -> Result<Grid, CarveError> {
    if cells_to_remove > 81 {
        return Err(CarveError::TooManyCells {
            requested: cells_to_remove,
        });
    }

    let mut problem = *solution;
    let mut removed = 0;
    let mut draws = 0;
    while removed < cells_to_remove {
        if draws >= CARVE_RETRY_BUDGET {
            return Err(CarveError::RetryBudgetExhausted {
                removed,
                requested: cells_to_remove,
            });
        }
        draws += 1;
        let pos = Position::from_index(rng.random_range(0..81));
        if problem[pos].is_some() {
            problem[pos] = None;
            removed += 1;
        }
    }
    Ok(problem)
}

/// A generated puzzle: the playable problem grid, the solution it was carved
/// from, and the seed that reproduces both.
///
/// The problem/solution pair stays together for the whole game session: the
/// solution is the authority for move correctness and cannot be re-derived
/// from the problem once wrong digits have been entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, with `difficulty.cells_to_remove()` empty cells.
    pub problem: Grid,
    /// The complete solution the problem was carved from.
    pub solution: Grid,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates puzzles by filling a random solution and carving cells from it.
///
/// # Examples
///
/// ```
/// use gridlock_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
///
/// // Same seed, same puzzle.
/// let seed = PuzzleSeed::from_phrase("docs");
/// let first = generator.generate_with_seed(Difficulty::Hard, seed)?;
/// let second = generator.generate_with_seed(Difficulty::Hard, seed)?;
/// assert_eq!(first, second);
/// # Ok::<(), gridlock_generator::CarveError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle for `difficulty` from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns a [`CarveError`] if carving stalls; with the fixed difficulty
    /// table and a freshly generated full solution this is a retry-budget
    /// safety valve, not an expected outcome.
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, CarveError> {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed` for `difficulty`.
    ///
    /// # Errors
    ///
    /// Returns a [`CarveError`] if carving stalls; see [`PuzzleGenerator::generate`].
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, CarveError> {
        let mut rng = seed.rng();
        let solution = random_solution(&mut rng);
        let problem = carve(&solution, difficulty.cells_to_remove(), &mut rng)?;
        debug!(
            "generated {difficulty} puzzle with {} givens (seed {seed})",
            81 - problem.count_empty()
        );
        Ok(GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_difficulty_table() {
        assert_eq!(Difficulty::Easy.cells_to_remove(), 30);
        assert_eq!(Difficulty::Medium.cells_to_remove(), 40);
        assert_eq!(Difficulty::Hard.cells_to_remove(), 50);
        assert_eq!(Difficulty::Expert.cells_to_remove(), 60);

        assert_eq!(Difficulty::Easy.base_score(), 100);
        assert_eq!(Difficulty::Medium.base_score(), 200);
        assert_eq!(Difficulty::Hard.base_score(), 300);
        assert_eq!(Difficulty::Expert.base_score(), 500);

        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("EXPERT".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(ParseDifficultyError {
                name: "nightmare".to_owned(),
            })
        );
    }

    #[test]
    fn test_carve_rejects_oversized_request() {
        let solution = random_solution(&mut rand::rng());
        assert_eq!(
            carve(&solution, 82, &mut rand::rng()),
            Err(CarveError::TooManyCells { requested: 82 })
        );
    }

    #[test]
    fn test_carve_stalls_on_sparse_input() {
        // Asking for more removals than there are filled cells exhausts the
        // retry budget instead of looping forever.
        let empty = Grid::new();
        assert_eq!(
            carve(&empty, 1, &mut rand::rng()),
            Err(CarveError::RetryBudgetExhausted {
                removed: 0,
                requested: 1,
            })
        );
    }

    #[test]
    fn test_generated_puzzle_matches_its_solution() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate(Difficulty::Expert).unwrap();
        assert!(puzzle.solution.is_solved());
        assert_eq!(puzzle.problem.count_empty(), 60);
        for pos in gridlock_core::Position::ALL {
            if let Some(digit) = puzzle.problem[pos] {
                assert_eq!(Some(digit), puzzle.solution[pos]);
            }
        }
    }

    #[test]
    fn test_generation_is_reproducible_from_seed() {
        let generator = PuzzleGenerator::new();
        let seed = PuzzleSeed::from_phrase("reproducible");
        let first = generator.generate_with_seed(Difficulty::Medium, seed).unwrap();
        let second = generator.generate_with_seed(Difficulty::Medium, seed).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        // Carve correctness over the whole legal removal range: exactly `count`
        // holes and every remaining cell equal to the solution.
        #![proptest_config(ProptestConfig::with_cases(16))]
        #[test]
        fn prop_carve_removes_exactly_the_requested_count(count in 0_u8..=81, seed: u64) {
            let mut rng = rand_pcg::Pcg64::new(u128::from(seed), 0xa02bdbf7bb3c0a7);
            let solution = random_solution(&mut rng);
            let problem = carve(&solution, count, &mut rng).unwrap();
            prop_assert_eq!(problem.count_empty(), usize::from(count));
            for pos in gridlock_core::Position::ALL {
                if let Some(digit) = problem[pos] {
                    prop_assert_eq!(Some(digit), solution[pos]);
                }
            }
        }
    }
}
