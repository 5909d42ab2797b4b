//! Deterministic matrix fills.
//!
//! Benchmark runs must be bit-for-bit reproducible, so every fill draws
//! from an explicitly seeded generator instead of thread-local entropy.
//! The generator is a handle the caller owns and threads through - tests
//! seed their own, the CLI seeds one per run.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::element::Element;

/// Seed used when the caller doesn't pick one.
pub const DEFAULT_SEED: u64 = 42;

/// An owned, explicitly seeded random stream for matrix fills.
///
/// Successive fills from one handle continue the same stream, so filling
/// A and then B from a single handle gives them different contents while
/// the whole run stays reproducible. Two handles with the same seed
/// produce identical streams.
///
/// A handle is `&mut`-threaded; share one across threads and the borrow
/// checker will stop you, which is the point.
pub struct FillRng {
    rng: StdRng,
}

impl FillRng {
    /// Stream seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Stream seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FillRng {
    fn default() -> Self {
        Self::new()
    }
}

/// Element types [`fill_random`] knows how to draw.
///
/// Each type gets the distribution the benchmark wants, not a generic one:
/// floats land in [-1, 1) so products stay O(1), 8-bit types use their
/// (symmetric, for signed) full range.
pub trait FillElement: Copy {
    fn sample(rng: &mut FillRng) -> Self;
}

impl FillElement for f32 {
    fn sample(rng: &mut FillRng) -> Self {
        rng.rng.gen_range(-1.0..1.0)
    }
}

impl FillElement for f64 {
    fn sample(rng: &mut FillRng) -> Self {
        rng.rng.gen_range(-1.0..1.0)
    }
}

impl FillElement for i8 {
    fn sample(rng: &mut FillRng) -> Self {
        rng.rng.gen_range(-127..=127)
    }
}

impl FillElement for u8 {
    fn sample(rng: &mut FillRng) -> Self {
        rng.rng.gen_range(0..=255)
    }
}

// Small range so the bit-exact integer kernel instantiations can run on
// randomized data without overflowing their own accumulator.
impl FillElement for i32 {
    fn sample(rng: &mut FillRng) -> Self {
        rng.rng.gen_range(-127..=127)
    }
}

/// Fill `rows * cols` elements from the given stream.
///
/// # Arguments
///
/// * `rng` - Seeded stream; advances by `rows * cols` draws
/// * `buf` - Destination buffer, row-major
pub fn fill_random<T: FillElement>(rng: &mut FillRng, buf: &mut [T], rows: usize, cols: usize) {
    debug_assert_eq!(buf.len(), rows * cols);
    for x in buf.iter_mut().take(rows * cols) {
        *x = T::sample(rng);
    }
}

/// Set `rows * cols` elements to the additive identity.
pub fn fill_zero<T: Element>(buf: &mut [T], rows: usize, cols: usize) {
    debug_assert_eq!(buf.len(), rows * cols);
    buf.fill(T::zero());
}
