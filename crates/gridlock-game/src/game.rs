use std::time::Duration;

use gridlock_core::{Digit, Grid, Position};
use gridlock_generator::{Difficulty, GeneratedPuzzle};
use gridlock_solver::{SessionError, SolveSession, StepOutcome, StepRecord};
use log::debug;

use crate::CellState;

/// Points awarded for entering a digit that matches the solution.
const CORRECT_POINTS: u32 = 10;
/// Points deducted for a wrong digit, floored at a score of zero.
const WRONG_PENALTY_POINTS: u32 = 5;

/// Error from game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The targeted cell is a given and cannot be changed.
    #[display("cannot modify given cell at {pos}")]
    CannotModifyGivenCell {
        /// The targeted position.
        pos: Position,
    },
    /// The supplied solution grid has empty cells.
    #[display("solution grid is incomplete: {missing} empty cells")]
    IncompleteSolution {
        /// Number of empty cells in the solution.
        missing: usize,
    },
    /// A board digit disagrees with the retained solution.
    ///
    /// Assisted solving refuses to start while the board holds a mistake;
    /// correct or clear the offending cell first.
    #[display("board contradicts solution at {pos}")]
    BoardContradictsSolution {
        /// The first disagreeing position, in row-major order.
        pos: Position,
    },
}

impl From<SessionError> for GameError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::IncompleteSolution { missing } => Self::IncompleteSolution { missing },
            SessionError::SolutionMismatch { pos } => Self::BoardContradictsSolution { pos },
        }
    }
}

/// Result of entering a digit, judged against the retained solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOutcome {
    /// The digit matches the solution; points were awarded.
    Correct,
    /// The digit disagrees with the solution; a penalty was recorded.
    Incorrect,
}

/// A playable Sudoku game.
///
/// Holds per-cell state (givens and player input), the retained solution for
/// scoring, and the running score and penalty count. Time is the caller's
/// concern; pass the elapsed play time to [`Game::final_score`] when the
/// board is done.
///
/// # Examples
///
/// ```
/// use gridlock_core::Position;
/// use gridlock_game::{CellState, Game};
/// use gridlock_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(Difficulty::Medium)?;
/// let game = Game::new(puzzle);
///
/// // A medium puzzle starts with 41 givens.
/// let givens = Position::ALL
///     .iter()
///     .filter(|&&pos| game.cell(pos).is_given())
///     .count();
/// assert_eq!(givens, 41);
/// # Ok::<(), gridlock_generator::CarveError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: Grid,
    difficulty: Difficulty,
    score: u32,
    penalties: u32,
    session: Option<SolveSession>,
}

impl Game {
    /// Creates a game from a generated puzzle.
    ///
    /// Every filled cell of the problem grid becomes a given.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution,
            difficulty,
            score: 0,
            penalties: 0,
            session: None,
        }
    }

    /// Creates a game from separate problem, solution, and player-input grids.
    ///
    /// Digits in `problem` become givens; digits in `filled` are applied as
    /// player input (scoring them as [`Game::set_digit`] would). A
    /// [`ShareCode`](crate::ShareCode) carries no given/filled split, so
    /// restoring one passes the whole shared board as `problem` and an empty
    /// `filled` grid: every previously entered digit becomes a given and the
    /// score starts over from zero.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IncompleteSolution`] if `solution` has empty
    /// cells, or [`GameError::CannotModifyGivenCell`] if `filled` holds a
    /// digit where `problem` already has a given.
    pub fn from_parts(
        problem: &Grid,
        solution: &Grid,
        filled: &Grid,
        difficulty: Difficulty,
    ) -> Result<Self, GameError> {
        if !solution.is_complete() {
            return Err(GameError::IncompleteSolution {
                missing: solution.count_empty(),
            });
        }
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        let mut this = Self {
            cells,
            solution: *solution,
            difficulty,
            score: 0,
            penalties: 0,
            session: None,
        };
        for pos in Position::ALL {
            if let Some(digit) = filled[pos] {
                this.set_digit(pos, digit)?;
            }
        }
        Ok(this)
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the current board as a plain grid, givens and input combined.
    #[must_use]
    pub fn board(&self) -> Grid {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid[pos] = self.cells[pos.index()].as_digit();
        }
        grid
    }

    /// Returns the retained solution grid.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the puzzle's difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the running score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of wrong entries so far.
    #[must_use]
    pub const fn penalties(&self) -> u32 {
        self.penalties
    }

    /// Enters a digit at `pos`, replacing any previous player input there.
    ///
    /// A digit matching the solution awards points; a wrong digit records a
    /// penalty and deducts points (never below zero). The wrong digit stays
    /// on the board for the player to fix.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<InputOutcome, GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell { pos });
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        self.session = None;

        let outcome = if self.solution[pos] == Some(digit) {
            self.score += CORRECT_POINTS;
            InputOutcome::Correct
        } else {
            self.penalties += 1;
            self.score = self.score.saturating_sub(WRONG_PENALTY_POINTS);
            InputOutcome::Incorrect
        };
        debug!("set {digit} at {pos}: {outcome:?}, score {}", self.score);
        Ok(outcome)
    }

    /// Clears the player input at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell { pos });
        }
        self.cells[pos.index()] = CellState::Empty;
        self.session = None;
        Ok(())
    }

    /// Returns `true` if the board matches the retained solution exactly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL
            .iter()
            .all(|&pos| self.cells[pos.index()].as_digit() == self.solution[pos])
    }

    /// Finds and applies one certain move to the board.
    ///
    /// A solving session is opened lazily from the current board and kept
    /// until the player edits a cell; its [`history`](Game::solve_history)
    /// accumulates one explained record per applied move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardContradictsSolution`] if the board holds a
    /// digit that disagrees with the solution; assisted solving resumes once
    /// the mistake is cleared.
    pub fn deduce_step(&mut self) -> Result<StepOutcome, GameError> {
        let mut session = match self.session.take() {
            Some(session) => session,
            None => SolveSession::new(self.board(), self.solution)?,
        };
        let outcome = session.step();
        if let Some(placement) = outcome.placement() {
            self.cells[placement.pos.index()] = CellState::Filled(placement.digit);
            debug!("assistant placed {} at {}", placement.digit, placement.pos);
        }
        self.session = Some(session);
        Ok(outcome)
    }

    /// Returns the explained steps of the current solving session.
    ///
    /// Empty when no session is open (including right after a player edit,
    /// which discards the session).
    #[must_use]
    pub fn solve_history(&self) -> &[StepRecord] {
        self.session.as_ref().map_or(&[], SolveSession::history)
    }

    /// Computes the final score for a finished game.
    ///
    /// The difficulty's base score is scaled down by elapsed time (10% floor
    /// after an hour) and by accumulated penalties (10% per penalty, 10%
    /// floor), then added to the running score.
    #[must_use]
    pub fn final_score(&self, elapsed: Duration) -> u32 {
        let time_multiplier = (1.0 - elapsed.as_secs_f64() / 3600.0).max(0.1);
        let timed = (f64::from(self.difficulty.base_score()) * time_multiplier).round();
        let penalty_multiplier = (1.0 - f64::from(self.penalties) * 0.1).max(0.1);
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bonus = (timed * penalty_multiplier).round() as u32;
        self.score + bonus
    }
}

#[cfg(test)]
mod tests {
    use gridlock_generator::{PuzzleGenerator, PuzzleSeed};

    use super::*;
    use crate::ShareCode;

    fn seeded_puzzle(difficulty: Difficulty) -> GeneratedPuzzle {
        let seed = PuzzleSeed::from_phrase("game tests");
        PuzzleGenerator::new()
            .generate_with_seed(difficulty, seed)
            .unwrap()
    }

    fn first_empty(game: &Game) -> Position {
        *Position::ALL
            .iter()
            .find(|&&pos| game.cell(pos).is_empty())
            .unwrap()
    }

    #[test]
    fn test_new_game_marks_givens() {
        let puzzle = seeded_puzzle(Difficulty::Easy);
        let game = Game::new(puzzle);
        let givens = Position::ALL
            .iter()
            .filter(|&&pos| game.cell(pos).is_given())
            .count();
        assert_eq!(givens, 51);
        assert_eq!(game.board(), puzzle.problem);
        assert_eq!(game.score(), 0);
        assert_eq!(game.penalties(), 0);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_given_cells_are_protected() {
        let puzzle = seeded_puzzle(Difficulty::Easy);
        let mut game = Game::new(puzzle);
        let given = *Position::ALL
            .iter()
            .find(|&&pos| game.cell(pos).is_given())
            .unwrap();
        assert_eq!(
            game.set_digit(given, Digit::D1),
            Err(GameError::CannotModifyGivenCell { pos: given })
        );
        assert_eq!(
            game.clear_cell(given),
            Err(GameError::CannotModifyGivenCell { pos: given })
        );
    }

    #[test]
    fn test_scoring_on_input() {
        let puzzle = seeded_puzzle(Difficulty::Medium);
        let mut game = Game::new(puzzle);
        let pos = first_empty(&game);
        let answer = puzzle.solution[pos].unwrap();
        let wrong = Digit::ALL.into_iter().find(|&d| d != answer).unwrap();

        assert_eq!(game.set_digit(pos, answer), Ok(InputOutcome::Correct));
        assert_eq!(game.score(), 10);

        assert_eq!(game.set_digit(pos, wrong), Ok(InputOutcome::Incorrect));
        assert_eq!(game.score(), 5);
        assert_eq!(game.penalties(), 1);
        assert_eq!(game.cell(pos), CellState::Filled(wrong));

        // Deductions floor at zero.
        assert_eq!(game.set_digit(pos, wrong), Ok(InputOutcome::Incorrect));
        assert_eq!(game.set_digit(pos, wrong), Ok(InputOutcome::Incorrect));
        assert_eq!(game.score(), 0);
        assert_eq!(game.penalties(), 3);

        game.clear_cell(pos).unwrap();
        assert!(game.cell(pos).is_empty());
    }

    #[test]
    fn test_fill_from_solution_solves() {
        let puzzle = seeded_puzzle(Difficulty::Easy);
        let mut game = Game::new(puzzle);
        for pos in Position::ALL {
            if game.cell(pos).is_empty() {
                let digit = puzzle.solution[pos].unwrap();
                assert_eq!(game.set_digit(pos, digit), Ok(InputOutcome::Correct));
            }
        }
        assert!(game.is_solved());
        assert_eq!(game.score(), 30 * 10);
        assert_eq!(game.board(), puzzle.solution);
    }

    #[test]
    fn test_from_parts_scores_restored_input() {
        let puzzle = seeded_puzzle(Difficulty::Easy);
        let pos = puzzle.problem.empty_positions().next().unwrap();
        let mut filled = Grid::new();
        filled[pos] = puzzle.solution[pos];

        let game =
            Game::from_parts(&puzzle.problem, &puzzle.solution, &filled, puzzle.difficulty)
                .unwrap();
        assert_eq!(game.score(), 10);
        assert_eq!(game.cell(pos), CellState::Filled(puzzle.solution[pos].unwrap()));
    }

    #[test]
    fn test_restore_from_share_code_makes_board_given() {
        // A share code has no given/filled split, so the whole shared board
        // comes back as givens and scoring starts over.
        let puzzle = seeded_puzzle(Difficulty::Easy);
        let mut game = Game::new(puzzle);
        let pos = first_empty(&game);
        game.set_digit(pos, puzzle.solution[pos].unwrap()).unwrap();
        assert_eq!(game.score(), 10);

        let code = ShareCode {
            board: game.board(),
            solution: *game.solution(),
        };
        let restored: ShareCode = code.to_string().parse().unwrap();
        let restored_game = Game::from_parts(
            &restored.board,
            &restored.solution,
            &Grid::new(),
            puzzle.difficulty,
        )
        .unwrap();

        assert_eq!(restored_game.cell(pos), CellState::Given(puzzle.solution[pos].unwrap()));
        assert_eq!(restored_game.board(), game.board());
        assert_eq!(restored_game.score(), 0);
        assert_eq!(restored_game.penalties(), 0);
    }

    #[test]
    fn test_from_parts_rejects_bad_grids() {
        let puzzle = seeded_puzzle(Difficulty::Easy);
        assert_eq!(
            Game::from_parts(&puzzle.problem, &Grid::new(), &Grid::new(), puzzle.difficulty),
            Err(GameError::IncompleteSolution { missing: 81 })
        );
        // Input on top of a given is rejected.
        let given = *Position::ALL
            .iter()
            .find(|&&pos| puzzle.problem[pos].is_some())
            .unwrap();
        let mut filled = Grid::new();
        filled[given] = puzzle.problem[given];
        assert_eq!(
            Game::from_parts(&puzzle.problem, &puzzle.solution, &filled, puzzle.difficulty),
            Err(GameError::CannotModifyGivenCell { pos: given })
        );
    }

    #[test]
    fn test_deduce_step_refuses_mistaken_board() {
        let puzzle = seeded_puzzle(Difficulty::Easy);
        let mut game = Game::new(puzzle);
        let pos = first_empty(&game);
        let answer = puzzle.solution[pos].unwrap();
        let wrong = Digit::ALL.into_iter().find(|&d| d != answer).unwrap();
        game.set_digit(pos, wrong).unwrap();

        assert_eq!(
            game.deduce_step(),
            Err(GameError::BoardContradictsSolution { pos })
        );

        game.clear_cell(pos).unwrap();
        assert!(game.deduce_step().is_ok());
    }

    #[test]
    fn test_assisted_solve_from_generated_puzzle() {
        // Full pipeline: generate, carve, then step until the assistant
        // finishes or stalls. Every assisted placement must agree with the
        // retained solution.
        let puzzle = seeded_puzzle(Difficulty::Easy);
        let mut game = Game::new(puzzle);
        loop {
            match game.deduce_step().unwrap() {
                StepOutcome::Placed(placement) => {
                    assert_eq!(Some(placement.digit), puzzle.solution[placement.pos]);
                }
                StepOutcome::Completed(placement) => {
                    assert_eq!(Some(placement.digit), puzzle.solution[placement.pos]);
                    break;
                }
                StepOutcome::Stuck => break,
            }
        }
        for pos in Position::ALL {
            if let Some(digit) = game.board()[pos] {
                assert_eq!(Some(digit), puzzle.solution[pos]);
            }
        }
        let filled = 81 - game.board().count_empty();
        assert_eq!(game.solve_history().len(), filled - 51);
    }

    #[test]
    fn test_final_score_multipliers() {
        let puzzle = seeded_puzzle(Difficulty::Medium);
        let mut game = Game::new(puzzle);
        assert_eq!(game.difficulty().base_score(), 200);

        // Instant, clean finish keeps the full base score.
        assert_eq!(game.final_score(Duration::ZERO), 200);

        // Half an hour halves the bonus.
        assert_eq!(game.final_score(Duration::from_secs(1800)), 100);

        // An hour or more floors the time multiplier at 10%.
        assert_eq!(game.final_score(Duration::from_secs(7200)), 20);

        // Three penalties scale the bonus by 70%.
        let pos = first_empty(&game);
        let answer = puzzle.solution[pos].unwrap();
        let wrong = Digit::ALL.into_iter().find(|&d| d != answer).unwrap();
        for _ in 0..3 {
            game.set_digit(pos, wrong).unwrap();
        }
        assert_eq!(game.penalties(), 3);
        assert_eq!(game.final_score(Duration::ZERO), 140);
    }
}
