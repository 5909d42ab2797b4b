//! Cache-blocked GEMM, generic over the element type.

use super::TILE;
use crate::element::Element;
use crate::matrix::fill::fill_zero;

/// Cache-blocked matrix multiplication: C = A * B.
///
/// Same contract as the naive kernel - C is fully overwritten - but the
/// iteration is restructured for locality. C is zeroed up front, then
/// tiles of A, B, and C are walked in (i-tile, k-tile, j-tile) order. For
/// each row and each k inside the current tiles, one A scalar is broadcast
/// against a contiguous run of B and accumulated into a contiguous run of
/// C, so the innermost loop is unit-stride on both.
///
/// The innermost j loop is unrolled by 4 to give the pipeline independent
/// multiply-adds; a scalar remainder loop picks up tails, so dimensions
/// don't need to be multiples of anything. Tile ends clamp to the true
/// dimensions.
///
/// For floats the reordered accumulation can differ from the naive kernel
/// by rounding error, so check results with a tolerance. Integer
/// instantiations match the naive kernel bit-exactly.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten (C = A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_blocked<T: Element>(a: &[T], b: &[T], c: &mut [T], m: usize, n: usize, k: usize) {
    // Accumulating kernel, so prior contents must go first.
    fill_zero(c, m, n);

    for i0 in (0..m).step_by(TILE) {
        let i_max = (i0 + TILE).min(m);

        for k0 in (0..k).step_by(TILE) {
            let k_max = (k0 + TILE).min(k);

            for j0 in (0..n).step_by(TILE) {
                let j_max = (j0 + TILE).min(n);

                for i in i0..i_max {
                    for p in k0..k_max {
                        let a_ip = a[i * k + p];

                        // 4-wide unroll over the contiguous j run.
                        let mut j = j0;
                        while j + 4 <= j_max {
                            c[i * n + j] += a_ip * b[p * n + j];
                            c[i * n + j + 1] += a_ip * b[p * n + j + 1];
                            c[i * n + j + 2] += a_ip * b[p * n + j + 2];
                            c[i * n + j + 3] += a_ip * b[p * n + j + 3];
                            j += 4;
                        }
                        while j < j_max {
                            c[i * n + j] += a_ip * b[p * n + j];
                            j += 1;
                        }
                    }
                }
            }
        }
    }
}
