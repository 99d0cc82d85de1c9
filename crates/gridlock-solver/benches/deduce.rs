//! Benchmarks for naked-single deduction.
//!
//! Measures a single deduction scan over an almost-full grid and a full
//! session run that solves a diagonal-cleared grid step by step.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench deduce
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gridlock_core::{Grid, Position};
use gridlock_solver::{SolveSession, deduce_step};

const SOLVED: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

fn diagonal_puzzle() -> (Grid, Grid) {
    let solution: Grid = SOLVED.parse().unwrap();
    let mut puzzle = solution;
    for i in 0..9 {
        puzzle[Position::new(i, i)] = None;
    }
    (puzzle, solution)
}

fn bench_single_step(c: &mut Criterion) {
    let (puzzle, _) = diagonal_puzzle();
    c.bench_function("deduce_step/diagonal", |b| {
        b.iter_batched(
            || hint::black_box(puzzle),
            |mut grid| deduce_step(&mut grid),
            BatchSize::SmallInput,
        );
    });
}

fn bench_session_run(c: &mut Criterion) {
    let (puzzle, solution) = diagonal_puzzle();
    c.bench_function("session/diagonal_to_completion", |b| {
        b.iter_batched(
            || SolveSession::new(hint::black_box(puzzle), solution).unwrap(),
            |mut session| {
                while session.step().is_placed() {}
                session
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_single_step, bench_session_run);
criterion_main!(benches);
