//! Criterion benchmarks for kellylab_core sweeps
//!
//! Run with: cargo bench -p kellylab_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kellylab_core::{ParameterRange, SimulationConfig, run_sweep};

/// Two independent even-odds bets: win 80% or lose 50% of the staked
/// fraction. The application's default strategy.
const COIN_FLIP: &str = r#"
    let win1 = random() < 0.5;
    let win2 = random() < 0.5;
    let mul1 = if win1 { 0.8 } else { -0.5 };
    let mul2 = if win2 { 0.8 } else { -0.5 };
    1.0 + (mul1 * bet) + (mul2 * bet2)
"#;

fn coin_flip_ranges() -> Vec<ParameterRange> {
    vec![
        ParameterRange::new("bet", 0.0, 1.0, 0.1),
        ParameterRange::new("bet2", 0.0, 1.0, 0.1),
    ]
}

fn bench_sweep_thread_scaling(c: &mut Criterion) {
    let ranges = coin_flip_ranges();
    let mut group = c.benchmark_group("sweep_coin_flip_121_tuples");
    group.sample_size(10);

    for threads in [1, 2, 4, 8] {
        let config = SimulationConfig {
            num_experiments: 20,
            num_rounds: 200,
            num_threads: threads,
        };
        group.bench_with_input(BenchmarkId::from_parameter(threads), &config, |b, cfg| {
            b.iter(|| run_sweep(black_box(&ranges), black_box(COIN_FLIP), cfg).unwrap());
        });
    }
    group.finish();
}

fn bench_deterministic_trial(c: &mut Criterion) {
    let ranges = vec![ParameterRange::new("bet", 0.0, 1.0, 0.05)];
    let config = SimulationConfig {
        num_experiments: 50,
        num_rounds: 500,
        num_threads: 1,
    };

    c.bench_function("sweep_deterministic_21_tuples", |b| {
        b.iter(|| run_sweep(black_box(&ranges), black_box("1.0 + bet * 0.01"), &config).unwrap());
    });
}

criterion_group!(benches, bench_sweep_thread_scaling, bench_deterministic_trial);
criterion_main!(benches);
