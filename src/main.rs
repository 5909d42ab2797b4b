//! Benchmark runner for the GEMM kernel suite.
//!
//! Thin harness around the kernels: parse dimensions, fill operands from a
//! seeded stream, time the naive oracle once and the optimized kernel over
//! a few runs, gate correctness, then print a human-readable report and a
//! machine-readable JSON metrics line.

use std::time::Instant;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use gemmbench::{
    DEFAULT_SEED, DEFAULT_TOLERANCE, Element, FillElement, FillRng, compare, fill_random,
    matmul_blocked, matmul_naive, matmul_quantized,
};

/// Benchmark and validate GEMM kernels.
#[derive(Parser)]
#[command(name = "gemmbench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Rows of A and C
    m: usize,

    /// Columns of B and C
    n: usize,

    /// Columns of A, rows of B
    k: usize,

    /// Timed runs of the optimized kernel (averaged)
    #[arg(short, long, default_value_t = 5)]
    iterations: usize,

    /// Element type to benchmark
    #[arg(short, long, value_enum, default_value = "f32")]
    precision: Precision,

    /// Seed for the operand fill stream
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Absolute tolerance for the float correctness gate
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Precision {
    F32,
    F64,
    /// u8 × i8 → i32 quantized path
    Quantized,
}

/// Machine-readable tail of a run. For the quantized path the throughput
/// field counts integer multiply-adds instead of flops.
#[derive(Serialize)]
struct Metrics {
    latency_ms: f64,
    throughput_gflops: f64,
    correctness: bool,
}

fn main() {
    let cli = Cli::parse();

    println!("=== GEMM Kernel Benchmark ===\n");
    println!("Dimensions: M={}, N={}, K={}", cli.m, cli.n, cli.k);
    println!("Precision: {:?}\n", cli.precision);

    let metrics = match cli.precision {
        Precision::F32 => run_float::<f32>(&cli),
        Precision::F64 => run_float::<f64>(&cli),
        Precision::Quantized => run_quantized(&cli),
    };

    // One JSON object on its own line so scripts can grab it.
    println!(
        "\n{}",
        serde_json::to_string(&metrics).expect("metrics serialize")
    );
}

fn run_float<T: Element + FillElement>(cli: &Cli) -> Metrics {
    let (m, n, k) = (cli.m, cli.n, cli.k);
    let gflops = |secs: f64| 2.0 * (m * n * k) as f64 / secs / 1e9;

    // One stream for both operands, so A and B differ but the run is
    // reproducible for a given seed.
    let mut rng = FillRng::with_seed(cli.seed);
    let mut a = vec![T::zero(); m * k];
    let mut b = vec![T::zero(); k * n];
    fill_random(&mut rng, &mut a, m, k);
    fill_random(&mut rng, &mut b, k, n);

    let mut c_ref = vec![T::zero(); m * n];
    let mut c_opt = vec![T::zero(); m * n];

    println!("Running naive...");
    let start = Instant::now();
    matmul_naive(&a, &b, &mut c_ref, m, n, k);
    let naive_secs = start.elapsed().as_secs_f64();
    println!(
        "Naive:   {:10.2} ms  {:6.2} GFLOPS",
        naive_secs * 1000.0,
        gflops(naive_secs)
    );

    println!("Running blocked...");
    let avg_secs = bench_avg(cli.iterations, || {
        matmul_blocked(&a, &b, &mut c_opt, m, n, k);
    });
    println!(
        "Blocked: {:10.2} ms  {:6.2} GFLOPS  ({:.1}× vs naive, avg of {} runs)",
        avg_secs * 1000.0,
        gflops(avg_secs),
        naive_secs / avg_secs,
        cli.iterations
    );

    let verdict = compare(&c_ref, &c_opt, m, n, cli.tolerance);
    report_verdict("naive vs blocked", &verdict);

    Metrics {
        latency_ms: avg_secs * 1000.0,
        throughput_gflops: gflops(avg_secs),
        correctness: verdict.is_ok(),
    }
}

fn run_quantized(cli: &Cli) -> Metrics {
    let (m, n, k) = (cli.m, cli.n, cli.k);
    let gops = |secs: f64| 2.0 * (m * n * k) as f64 / secs / 1e9;

    let mut rng = FillRng::with_seed(cli.seed);
    let mut a = vec![0u8; m * k];
    let mut b = vec![0i8; k * n];
    fill_random(&mut rng, &mut a, m, k);
    fill_random(&mut rng, &mut b, k, n);

    // Oracle: widen both operands up front and run the generic naive
    // kernel in i32. The quantized kernel must match it bit-exactly.
    let a_wide: Vec<i32> = a.iter().map(|&x| i32::from(x)).collect();
    let b_wide: Vec<i32> = b.iter().map(|&x| i32::from(x)).collect();
    let mut c_ref = vec![0i32; m * n];

    println!("Running naive (widened i32)...");
    let start = Instant::now();
    matmul_naive(&a_wide, &b_wide, &mut c_ref, m, n, k);
    let naive_secs = start.elapsed().as_secs_f64();
    println!(
        "Naive:     {:10.2} ms  {:6.2} GOPS",
        naive_secs * 1000.0,
        gops(naive_secs)
    );

    let mut c_opt = vec![0i32; m * n];

    println!("Running quantized...");
    let avg_secs = bench_avg(cli.iterations, || {
        matmul_quantized(&a, &b, &mut c_opt, m, n, k);
    });
    println!(
        "Quantized: {:10.2} ms  {:6.2} GOPS  ({:.1}× vs naive, avg of {} runs)",
        avg_secs * 1000.0,
        gops(avg_secs),
        naive_secs / avg_secs,
        cli.iterations
    );

    // Integer kernels have no rounding slack.
    let verdict = compare(&c_ref, &c_opt, m, n, 0.0);
    report_verdict("naive vs quantized", &verdict);

    Metrics {
        latency_ms: avg_secs * 1000.0,
        throughput_gflops: gops(avg_secs),
        correctness: verdict.is_ok(),
    }
}

/// Run `f` once as warmup, then `iterations` timed runs; returns the
/// average seconds per run. The blocked kernels overwrite their output,
/// so repeated calls into the same buffer need no zeroing in between.
fn bench_avg<F>(iterations: usize, mut f: F) -> f64
where
    F: FnMut(),
{
    f();

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        total += start.elapsed().as_secs_f64();
    }
    total / iterations.max(1) as f64
}

fn report_verdict(label: &str, verdict: &Result<(), gemmbench::Mismatch>) {
    match verdict {
        Ok(()) => println!("Correctness ({label}): PASS"),
        Err(mismatch) => {
            println!("Correctness ({label}): FAIL");
            eprintln!("{mismatch}");
        }
    }
}
