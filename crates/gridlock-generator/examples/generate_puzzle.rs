//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one puzzle and prints the problem grid, its solution, and the
//! seed that reproduces it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty (easy, medium, hard, expert):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert
//! ```
//!
//! Regenerate a specific puzzle from its 64-hex-character seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```
//!
//! Or derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily 2026-08-29"
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use gridlock_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of the generated puzzle.
    #[arg(long, value_name = "DIFFICULTY", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed to regenerate a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };

    let generator = PuzzleGenerator::new();
    let puzzle = match generator.generate_with_seed(args.difficulty.into(), seed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {} ({} givens)", puzzle.difficulty, 81 - puzzle.problem.count_empty());
    println!();
    println!("Problem:");
    for line in puzzle.problem.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in puzzle.solution.to_string().lines() {
        println!("  {line}");
    }
}
