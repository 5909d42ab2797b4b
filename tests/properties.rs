//! Property-based tests for the kernel suite.
//!
//! Randomized shapes and data around the tile edge: the blocked kernel
//! must track the naive oracle within tolerance, and the quantized kernel
//! must equal the widened-integer oracle exactly.

use proptest::prelude::*;

use gemmbench::{DEFAULT_TOLERANCE, compare, matmul_blocked, matmul_naive, matmul_quantized};

const PROPTEST_CASES: u32 = 32;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    /// Blocked f64 output equals the naive oracle within tolerance for
    /// any shape, including shapes straddling the tile edge.
    #[test]
    fn blocked_matches_naive_f64(
        m in 1usize..80,
        n in 1usize..80,
        k in 1usize..80,
        seed in any::<u32>(),
    ) {
        // Cheap deterministic data from the seed; values stay O(1) so the
        // 1e-4 absolute tolerance is meaningful.
        let a: Vec<f64> = (0..m * k)
            .map(|i| (((i as u64 + u64::from(seed)) * 2654435761) % 2000) as f64 / 1000.0 - 1.0)
            .collect();
        let b: Vec<f64> = (0..k * n)
            .map(|i| (((i as u64 * 40503 + u64::from(seed)) % 2000) as f64) / 1000.0 - 1.0)
            .collect();

        let mut c_naive = vec![0.0; m * n];
        let mut c_blocked = vec![0.0; m * n];

        matmul_naive(&a, &b, &mut c_naive, m, n, k);
        matmul_blocked(&a, &b, &mut c_blocked, m, n, k);

        prop_assert!(compare(&c_naive, &c_blocked, m, n, DEFAULT_TOLERANCE).is_ok());
    }

    /// The quantized kernel is exactly the widened-integer product for
    /// arbitrary u8/i8 contents.
    #[test]
    fn quantized_matches_widened_naive(
        m in 1usize..40,
        n in 1usize..40,
        k in 1usize..100,
        a_seed in any::<u8>(),
        b_seed in any::<i8>(),
    ) {
        let a: Vec<u8> = (0..m * k)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(a_seed))
            .collect();
        let b: Vec<i8> = (0..k * n)
            .map(|i| ((i as u8).wrapping_mul(73)) as i8)
            .map(|x| x.wrapping_add(b_seed))
            .collect();

        let a_wide: Vec<i32> = a.iter().map(|&x| i32::from(x)).collect();
        let b_wide: Vec<i32> = b.iter().map(|&x| i32::from(x)).collect();

        let mut c_ref = vec![0i32; m * n];
        let mut c_quant = vec![0i32; m * n];

        matmul_naive(&a_wide, &b_wide, &mut c_ref, m, n, k);
        matmul_quantized(&a, &b, &mut c_quant, m, n, k);

        prop_assert_eq!(c_ref, c_quant);
    }

    /// Repeated blocked calls into a dirty buffer never leak prior
    /// contents into the result.
    #[test]
    fn blocked_overwrite_is_idempotent(
        m in 1usize..48,
        n in 1usize..48,
        k in 1usize..48,
        garbage in -1000.0f64..1000.0,
    ) {
        let a: Vec<f64> = (0..m * k).map(|i| (i % 7) as f64 - 3.0).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i % 5) as f64 - 2.0).collect();

        let mut c_clean = vec![0.0; m * n];
        matmul_blocked(&a, &b, &mut c_clean, m, n, k);

        let mut c_dirty = vec![garbage; m * n];
        matmul_blocked(&a, &b, &mut c_dirty, m, n, k);

        prop_assert_eq!(c_clean, c_dirty);
    }
}
