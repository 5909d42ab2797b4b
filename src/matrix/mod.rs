//! Matrix data utilities and the naive reference kernel.
//!
//! These provide the correctness oracle and the fill/zero/compare helpers
//! that the harness and the tests drive the blocked kernels with.

pub mod compare;
pub mod fill;
pub mod naive;
