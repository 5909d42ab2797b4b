//! Benchmark and validation suite for dense GEMM kernels.
//!
//! Three fixed kernel variants, nothing else: a naive triple loop that
//! serves as the correctness oracle, a cache-blocked kernel generic over
//! the element type, and a quantized u8 × i8 → i32 kernel for low-precision
//! inference workloads. Plus the utilities a benchmark needs: seeded
//! reproducible fills, zero fills, and a tolerance comparator.
//!
//! ## Usage
//!
//! ```
//! use gemmbench::{FillRng, compare, fill_random, matmul_blocked, matmul_naive};
//!
//! let (m, n, k) = (65, 65, 65);
//! let mut rng = FillRng::new();
//!
//! let mut a = vec![0.0f64; m * k];
//! let mut b = vec![0.0f64; k * n];
//! fill_random(&mut rng, &mut a, m, k);
//! fill_random(&mut rng, &mut b, k, n);
//!
//! let mut c_ref = vec![0.0f64; m * n];
//! let mut c_opt = vec![0.0f64; m * n];
//! matmul_naive(&a, &b, &mut c_ref, m, n, k);
//! matmul_blocked(&a, &b, &mut c_opt, m, n, k);
//!
//! assert!(compare(&c_ref, &c_opt, m, n, 1e-4).is_ok());
//! ```
//!
//! ## What's inside
//!
//! - Naive i-j-k oracle (correctness baseline)
//! - 64×64 cache-blocked kernel with a 4-wide unrolled inner loop
//! - Mixed-precision quantized kernel with explicit zero/sign extension
//! - Deterministic fills (fixed default seed, injectable generator)
//!
//! Deliberately single-threaded and dispatch-free: the point is comparing
//! the kernels themselves, not picking one at runtime.

pub mod blocked;
pub mod element;
pub mod matrix;

pub use blocked::TILE;
pub use blocked::quantized::matmul_quantized;
pub use blocked::tiled::matmul_blocked;
pub use element::Element;
pub use matrix::compare::{DEFAULT_TOLERANCE, Mismatch, compare};
pub use matrix::fill::{DEFAULT_SEED, FillElement, FillRng, fill_random, fill_zero};
pub use matrix::naive::matmul_naive;

/// Matrix multiply: C = A * B
///
/// Checked entry point for the blocked kernel. The kernels themselves
/// trust their preconditions; this wrapper is where slice lengths get
/// verified against the dimension triple.
/// Matrices are row-major: A is m×k, B is k×n, C is m×n.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn multiply<T: Element>(a: &[T], b: &[T], c: &mut [T], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    matmul_blocked(a, b, c, m, n, k);
}

/// Quantized matrix multiply: C (i32) = A (u8) * B (i8)
///
/// Same as [`multiply`] but for the mixed-precision kernel.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
pub fn multiply_quantized(a: &[u8], b: &[i8], c: &mut [i32], m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    matmul_quantized(a, b, c, m, n, k);
}
