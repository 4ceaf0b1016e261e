use boggle_solver::{Board, BoggleSolver};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_words() -> Vec<String> {
    [
        "ant", "are", "art", "ate", "ear", "eat", "east", "eta", "near", "neat", "nest", "net",
        "one", "ore", "rain", "ran", "rat", "rate", "rent", "rest", "roast", "sane", "sat", "sea",
        "sear", "seat", "set", "star", "stare", "stone", "tan", "tar", "tea", "tear", "ten",
        "tin", "toe", "ton", "tone", "torn",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn bench_solve(c: &mut Criterion) {
    let solver = BoggleSolver::new(bench_words());
    let board = Board::random_seeded(4, 1234);

    c.bench_function("solve 4x4", |b| b.iter(|| solver.solve(&board)));

    let large = Board::random_seeded(8, 1234);
    c.bench_function("solve 8x8", |b| b.iter(|| solver.solve(&large)));
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
