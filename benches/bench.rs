use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_solver::puzzle::parse::parse_str;
use sudoku_solver::solver::engine::{Solve, Strategy};
use sudoku_solver::solver::grid::{EXAMPLE, Grid};

/// A notoriously clue-sparse puzzle; the propagation fixed point leaves
/// plenty of open cells, so this exercises the search far more than the
/// bundled example does.
const HARD: &str = "\
1....7.9.
.3..2...8
..96..5..
..53..9..
.1..8...2
6....4...
3......1.
.4......7
..7...3..
";

fn bench_constrained(c: &mut Criterion) {
    let easy = Grid::from_digits(&EXAMPLE);
    let hard = parse_str(HARD).expect("hard puzzle parses");
    let blank = Grid::empty();

    c.bench_function("constrained - easy", |b| {
        b.iter(|| {
            let mut engine = Strategy::Constrained.engine(None);
            black_box(engine.solve(&easy));
        })
    });

    c.bench_function("constrained - hard", |b| {
        b.iter(|| {
            let mut engine = Strategy::Constrained.engine(None);
            black_box(engine.solve(&hard));
        })
    });

    c.bench_function("constrained - blank", |b| {
        b.iter(|| {
            let mut engine = Strategy::Constrained.engine(None);
            black_box(engine.solve(&blank));
        })
    });
}

fn bench_naive(c: &mut Criterion) {
    let easy = Grid::from_digits(&EXAMPLE);

    c.bench_function("naive - easy", |b| {
        b.iter(|| {
            let mut engine = Strategy::Naive.engine(None);
            black_box(engine.solve(&easy));
        })
    });
}

criterion_group!(benches, bench_constrained, bench_naive);

criterion_main!(benches);
