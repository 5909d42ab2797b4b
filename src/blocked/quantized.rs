//! Cache-blocked GEMM for mixed-precision 8-bit operands.

use super::TILE;
use crate::matrix::fill::fill_zero;

/// Quantized matrix multiplication: C (i32) = A (u8) * B (i8).
///
/// The low-precision inference contract: unsigned 8-bit activations times
/// signed 8-bit weights, accumulated in 32-bit signed integers. Each A
/// element is zero-extended and each B element sign-extended to i32 before
/// the multiply, so an activation of 200 contributes +200, never -56, and
/// the running sum has 32 bits of headroom (worst case 255 * 127 * k stays
/// in range for any k this kernel targets).
///
/// This is a dedicated kernel, not an instantiation of [`matmul_blocked`]:
/// the two operand types differ and must not be widened identically. The
/// tiling, loop order, and 4-wide unroll are the same as the generic
/// blocked kernel, and C is fully overwritten each call.
///
/// Dimension parameters follow the same (m, n, k) order as every other
/// kernel in this crate.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major, unsigned 8-bit
/// * `b` - Matrix B (k × n), row-major, signed 8-bit
/// * `c` - Matrix C (m × n), row-major, overwritten (C = A * B)
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
///
/// [`matmul_blocked`]: super::tiled::matmul_blocked
pub fn matmul_quantized(a: &[u8], b: &[i8], c: &mut [i32], m: usize, n: usize, k: usize) {
    fill_zero(c, m, n);

    for i0 in (0..m).step_by(TILE) {
        let i_max = (i0 + TILE).min(m);

        for k0 in (0..k).step_by(TILE) {
            let k_max = (k0 + TILE).min(k);

            for j0 in (0..n).step_by(TILE) {
                let j_max = (j0 + TILE).min(n);

                for i in i0..i_max {
                    for p in k0..k_max {
                        // Zero-extend the unsigned activation.
                        let a_ip = i32::from(a[i * k + p]);

                        // Sign-extend each weight as it's consumed.
                        let mut j = j0;
                        while j + 4 <= j_max {
                            c[i * n + j] += a_ip * i32::from(b[p * n + j]);
                            c[i * n + j + 1] += a_ip * i32::from(b[p * n + j + 1]);
                            c[i * n + j + 2] += a_ip * i32::from(b[p * n + j + 2]);
                            c[i * n + j + 3] += a_ip * i32::from(b[p * n + j + 3]);
                            j += 4;
                        }
                        while j < j_max {
                            c[i * n + j] += a_ip * i32::from(b[p * n + j]);
                            j += 1;
                        }
                    }
                }
            }
        }
    }
}
