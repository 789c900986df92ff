use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chainbench::bench::{SearchRunner, TableBuilder};
use chainbench::config::DEFAULT_MODULI;
use chainbench::hashing::digit_polynomial_hash;
use chainbench::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;
const RECORD_COUNT: usize = 20_000;
const QUERY_COUNT: usize = 5_000;

fn generate_records(count: usize) -> Vec<Record> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|i| {
            Record::new(
                rng.gen_range(1..300_000),
                format!("player-{}", i),
                vec!["ST".to_string()],
            )
        })
        .collect()
}

fn bench_hash(c: &mut Criterion) {
    c.bench_function("digit_polynomial_hash", |b| {
        b.iter(|| digit_polynomial_hash(black_box(158_023), black_box(3793), 31))
    });
}

fn bench_build(c: &mut Criterion) {
    let records = generate_records(RECORD_COUNT);
    let builder = TableBuilder::new();
    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Elements(RECORD_COUNT as u64));

    for &modulus in DEFAULT_MODULI.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(modulus), &modulus, |b, &m| {
            b.iter(|| builder.build_one(m, &records).unwrap())
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let records = generate_records(RECORD_COUNT);
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let queries: Vec<u64> = (0..QUERY_COUNT).map(|_| rng.gen_range(1..300_000)).collect();

    let built = TableBuilder::new().build(&DEFAULT_MODULI, &records).unwrap();
    let runner = SearchRunner::new();
    let mut group = c.benchmark_group("search");
    group.throughput(Throughput::Elements(QUERY_COUNT as u64));

    for b in &built {
        group.bench_with_input(
            BenchmarkId::from_parameter(b.stats.modulus),
            &b.table,
            |bench, table| bench.iter(|| runner.run_one(table, &queries)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_hash, bench_build, bench_search);
criterion_main!(benches);
