//! Tolerance-based matrix comparison.

use thiserror::Error;

use crate::element::Element;

/// Default absolute-difference bound for float correctness checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// First element pair that exceeded the tolerance.
///
/// Both values arrive widened to f64. This is a diagnostic result, not a
/// fault - the caller decides whether a failed gate is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "mismatch at index {index}: reference={reference}, candidate={candidate}, \
     diff={diff} (tolerance {tolerance})"
)]
pub struct Mismatch {
    /// Flat row-major index of the offending element.
    pub index: usize,
    pub reference: f64,
    pub candidate: f64,
    pub diff: f64,
    pub tolerance: f64,
}

/// Compare two matrices element-wise within an absolute tolerance.
///
/// Widens each pair to f64, takes the absolute difference, and returns at
/// the FIRST index that exceeds `tolerance`. This is a cheap correctness
/// gate, not a full diff report - a failing run stops at one data point.
///
/// Use tolerance 0.0 for integer element types, where the kernels must
/// agree bit-exactly.
///
/// # Arguments
///
/// * `reference` - Oracle output (rows × cols), row-major
/// * `candidate` - Kernel output under test, same shape
/// * `tolerance` - Non-negative absolute difference bound
pub fn compare<T: Element>(
    reference: &[T],
    candidate: &[T],
    rows: usize,
    cols: usize,
    tolerance: f64,
) -> Result<(), Mismatch> {
    debug_assert_eq!(reference.len(), rows * cols);
    debug_assert_eq!(candidate.len(), rows * cols);

    for index in 0..rows * cols {
        let r = reference[index].to_f64();
        let c = candidate[index].to_f64();
        let diff = (r - c).abs();
        if diff > tolerance {
            return Err(Mismatch {
                index,
                reference: r,
                candidate: c,
                diff,
                tolerance,
            });
        }
    }
    Ok(())
}
