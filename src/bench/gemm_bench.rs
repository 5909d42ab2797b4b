//! Criterion benchmarks for the kernel suite.
//!
//! Sizes straddle the 64-element tile edge so the clamped-boundary path
//! gets timed alongside the full-tile fast path.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use gemmbench::{FillRng, fill_random, matmul_blocked, matmul_naive, matmul_quantized};

const SIZES: [usize; 4] = [32, 64, 128, 256];

fn bench_naive_vs_blocked_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm_f32");
    let mut rng = FillRng::new();

    for size in SIZES {
        let (m, n, k) = (size, size, size);
        let mut a = vec![0.0f32; m * k];
        let mut b = vec![0.0f32; k * n];
        fill_random(&mut rng, &mut a, m, k);
        fill_random(&mut rng, &mut b, k, n);
        let mut out = vec![0.0f32; m * n];

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, _| {
            bench.iter(|| {
                matmul_naive(black_box(&a), black_box(&b), &mut out, m, n, k);
            });
        });
        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |bench, _| {
            bench.iter(|| {
                matmul_blocked(black_box(&a), black_box(&b), &mut out, m, n, k);
            });
        });
    }

    group.finish();
}

fn bench_blocked_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm_f64");
    let mut rng = FillRng::new();

    for size in SIZES {
        let (m, n, k) = (size, size, size);
        let mut a = vec![0.0f64; m * k];
        let mut b = vec![0.0f64; k * n];
        fill_random(&mut rng, &mut a, m, k);
        fill_random(&mut rng, &mut b, k, n);
        let mut out = vec![0.0f64; m * n];

        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |bench, _| {
            bench.iter(|| {
                matmul_blocked(black_box(&a), black_box(&b), &mut out, m, n, k);
            });
        });
    }

    group.finish();
}

fn bench_quantized(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm_quantized");
    let mut rng = FillRng::new();

    for size in SIZES {
        let (m, n, k) = (size, size, size);
        let mut a = vec![0u8; m * k];
        let mut b = vec![0i8; k * n];
        fill_random(&mut rng, &mut a, m, k);
        fill_random(&mut rng, &mut b, k, n);
        let mut out = vec![0i32; m * n];

        group.bench_with_input(BenchmarkId::new("quantized", size), &size, |bench, _| {
            bench.iter(|| {
                matmul_quantized(black_box(&a), black_box(&b), &mut out, m, n, k);
            });
        });
    }

    group.finish();
}

// Tall-skinny activation against a narrow weight matrix, the shape the
// quantized kernel exists for. Scaled-down K to keep bench time sane.
fn bench_quantized_inference_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm_quantized_inference");
    let mut rng = FillRng::new();

    let (m, n, k) = (16, 16, 12560);
    let mut a = vec![0u8; m * k];
    let mut b = vec![0i8; k * n];
    fill_random(&mut rng, &mut a, m, k);
    fill_random(&mut rng, &mut b, k, n);
    let mut out = vec![0i32; m * n];

    group.bench_function("16x16_deep_k", |bench| {
        bench.iter(|| {
            matmul_quantized(black_box(&a), black_box(&b), &mut out, m, n, k);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_naive_vs_blocked_f32,
    bench_blocked_f64,
    bench_quantized,
    bench_quantized_inference_shape
);
criterion_main!(benches);
