//! Criterion benchmarks for the WRPLL divider search.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/report/index.html`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wrpll_core::table::WRPLL_TMDS_CLOCK_TABLE;
use wrpll_core::verify::{verify_table, verify_table_parallel};
use wrpll_core::{compute_many_parallel, compute_rnp, Candidates};

/// Benchmark a single search across budget tiers.
fn single_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_rnp");

    // Default, exact (0), 1500, 2000, 4000 and 5000 PPM budgets.
    for clock in [
        65_000_000u32,
        148_500_000,
        233_500_000,
        202_000_000,
        270_000_000,
        267_250_000,
    ] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(clock), &clock, |b, &clock| {
            b.iter(|| compute_rnp(black_box(clock)))
        });
    }

    group.bench_function("bypass", |b| b.iter(|| compute_rnp(black_box(540_000_000))));

    group.finish();
}

/// Benchmark the raw candidate enumeration without the selection policy.
fn candidate_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates");
    group.throughput(Throughput::Elements(Candidates::new().count() as u64));

    group.bench_function("iterate", |b| {
        b.iter(|| Candidates::new().fold(0u64, |acc, d| acc + u64::from(black_box(d.n2))))
    });

    group.finish();
}

/// Benchmark full table verification, sequential vs parallel.
fn table_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_table");
    group.sample_size(10);
    group.throughput(Throughput::Elements(WRPLL_TMDS_CLOCK_TABLE.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| verify_table(black_box(WRPLL_TMDS_CLOCK_TABLE), None))
    });

    group.bench_function("parallel", |b| {
        b.iter(|| verify_table_parallel(black_box(WRPLL_TMDS_CLOCK_TABLE), None))
    });

    group.finish();
}

/// Benchmark scalability with number of cores.
fn scalability_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability_cores");
    let clocks: Vec<u32> = WRPLL_TMDS_CLOCK_TABLE
        .iter()
        .map(|entry| entry.clock_hz)
        .collect();
    group.sample_size(10);
    group.throughput(Throughput::Elements(clocks.len() as u64));

    for threads in [1, 2, 4, 8] {
        // The global rayon pool is fixed once built, so use a custom pool per size.
        group.bench_with_input(BenchmarkId::new("threads", threads), &threads, |b, &t| {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(t)
                .build()
                .unwrap();
            b.iter(|| pool.install(|| compute_many_parallel(black_box(&clocks))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    single_search,
    candidate_enumeration,
    table_verification,
    scalability_benchmark,
);
criterion_main!(benches);
