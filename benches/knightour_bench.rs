//! Criterion benchmarks for u-knightour solvers.
//!
//! Measures the backtracking search on open boards, raw fitness
//! evaluation, and short GA runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_knightour::backtrack::{BacktrackConfig, BacktrackRunner};
use u_knightour::ga::fitness::fitness;
use u_knightour::ga::operators::random_permutation;
use u_knightour::ga::{GaConfig, GaRunner, KnightTourProblem};
use u_knightour::random::create_rng;

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking");
    group.sample_size(10);

    for &n in &[5usize, 6, 8] {
        let config = BacktrackConfig::new(n, 0, 0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, c| {
            b.iter(|| {
                let result = BacktrackRunner::run(black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &n in &[5usize, 8, 16] {
        let mut rng = create_rng(42);
        let encoding = random_permutation(n * n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &encoding, |b, e| {
            b.iter(|| black_box(fitness(black_box(e), n)))
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_knight_tour");
    group.sample_size(10);

    for (n, pop, gen) in [(5usize, 50usize, 50usize), (8, 100, 30)] {
        let problem = KnightTourProblem::new(n).with_mutation_rate(0.05);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_backtracking, bench_fitness, bench_ga);
criterion_main!(benches);
