//! Cache-blocked GEMM implementations.
//!
//! These functions break the matrix multiplication into tiles that fit in
//! L1 cache, then run a scalar-broadcast inner loop over contiguous runs
//! of B and C.
//!
//! Available implementations:
//! - `tiled`: generic over the numeric element type
//! - `quantized`: u8 × i8 → i32 with explicit widening

pub mod quantized;
pub mod tiled;

/// Tile edge length shared by both blocked kernels.
///
/// 64 puts a tile's working set (one A, B, and C slice) at 48 KiB for f32,
/// inside a typical 64 KiB L1d with room left over. An empirical default,
/// not a correctness constant - the kernels clamp tile ends and handle
/// remainders for any value, so retune it per target if the profile says so.
pub const TILE: usize = 64;
