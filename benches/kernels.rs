use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use soakit::dot::{
    ReduceToScalar, Strategy, squared_lengths_aos, squared_lengths_aos_lanes, squared_lengths_soa, squared_lengths_tiled,
};
use soakit::layout::{aos_to_aligned, aos_to_soa, aos_to_tiled};
use soakit::reduce::{
    add_elements, average, average_lanewise, max, max_lanewise, min, min_lanewise, sum, sum_lanewise,
};
use soakit::{LaneWidth, Vector3, Vector3Aligned};

// Fixed seeds so every run sees the same data.
const SEED_A: u64 = 0xBAAA_BAAA;
const SEED_B: u64 = 0xB000_B000;

const SIZES: [usize; 4] = [4096, 8192, 16384, 32768];

fn floats(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0.0..10.0)).collect()
}

fn vectors(n: usize) -> Vec<Vector3> {
    let mut rng = StdRng::seed_from_u64(SEED_A);
    (0..n)
        .map(|_| Vector3::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

fn reductions(c: &mut Criterion) {
    let mut g = c.benchmark_group("reduce");

    for n in SIZES {
        let a = floats(n, SEED_A);
        let b = floats(n, SEED_B);
        let mut out = vec![0.0_f32; n];
        g.throughput(Throughput::Elements(n as u64));

        g.bench_with_input(BenchmarkId::new("add_elements", n), &n, |bench, &n| {
            bench.iter(|| add_elements(std::hint::black_box(&mut out), &a, &b, n))
        });
        g.bench_with_input(BenchmarkId::new("sum", n), &n, |bench, &n| {
            bench.iter(|| sum(std::hint::black_box(&a), n))
        });
        g.bench_with_input(BenchmarkId::new("sum_lanewise", n), &n, |bench, &n| {
            bench.iter(|| sum_lanewise(std::hint::black_box(&a), n, LaneWidth::native()))
        });
        g.bench_with_input(BenchmarkId::new("min", n), &n, |bench, &n| {
            bench.iter(|| min(std::hint::black_box(&a), n))
        });
        g.bench_with_input(BenchmarkId::new("max", n), &n, |bench, &n| {
            bench.iter(|| max(std::hint::black_box(&a), n))
        });
        g.bench_with_input(BenchmarkId::new("average", n), &n, |bench, &n| {
            bench.iter(|| average(std::hint::black_box(&a), n))
        });
        g.bench_with_input(BenchmarkId::new("min_lanewise", n), &n, |bench, &n| {
            bench.iter(|| min_lanewise(std::hint::black_box(&a), n, LaneWidth::native()))
        });
        g.bench_with_input(BenchmarkId::new("max_lanewise", n), &n, |bench, &n| {
            bench.iter(|| max_lanewise(std::hint::black_box(&a), n, LaneWidth::native()))
        });
        g.bench_with_input(BenchmarkId::new("average_lanewise", n), &n, |bench, &n| {
            bench.iter(|| average_lanewise(std::hint::black_box(&a), n, LaneWidth::native()))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Squared lengths per layout and strategy
// ---------------------------------------------------------------------------

fn squared_lengths(c: &mut Criterion) {
    let mut g = c.benchmark_group("squared_length");
    let lanes = LaneWidth::native();

    for n in SIZES {
        let aos = vectors(n);
        let mut aligned = vec![Vector3Aligned::ZERO; n];
        aos_to_aligned(&aos, &mut aligned, n);
        let (mut x, mut y, mut z) = (vec![0.0; n], vec![0.0; n], vec![0.0; n]);
        aos_to_soa(&aos, &mut x, &mut y, &mut z, n);
        let mut tiles = vec![0.0_f32; lanes.tiled_len(n)];
        aos_to_tiled(&aos, &mut tiles, n, lanes);

        let mut out = vec![0.0_f32; n];
        g.throughput(Throughput::Elements(n as u64));

        g.bench_with_input(BenchmarkId::new("aos_scalar", n), &n, |bench, &n| {
            bench.iter(|| squared_lengths_aos(std::hint::black_box(&mut out), &aos, n))
        });
        g.bench_with_input(BenchmarkId::new("aos_lanes", n), &n, |bench, &n| {
            bench.iter(|| squared_lengths_aos_lanes(std::hint::black_box(&mut out), &aos, n, lanes))
        });
        for strategy in Strategy::ALL {
            g.bench_with_input(BenchmarkId::new(strategy.name(), n), &n, |bench, &n| {
                bench.iter(|| strategy.squared_lengths(std::hint::black_box(&mut out), &aligned, n))
            });
        }
        g.bench_with_input(BenchmarkId::new("soa", n), &n, |bench, &n| {
            bench.iter(|| squared_lengths_soa(std::hint::black_box(&mut out), &x, &y, &z, n, lanes))
        });
        g.bench_with_input(BenchmarkId::new("aosoa", n), &n, |bench, &n| {
            bench.iter(|| squared_lengths_tiled(std::hint::black_box(&mut out), &tiles, n, lanes))
        });
    }

    g.finish();
}

criterion_group!(benches, reductions, squared_lengths);
criterion_main!(benches);
