// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null Handling and Numeric Helpers*
//!
//! Small helpers shared by the distribution kernels: null-mask detection, buffer
//! length checks, SIMD alignment and the `isclose` proximity test that drives regime
//! selection.

use minarrow::Bitmask;

use crate::config::{CLOSE_ATOL, CLOSE_RTOL};
use crate::errors::{KernelError, log_length_mismatch};

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Returns `LengthMismatch` when `a != b`.
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        return Err(KernelError::LengthMismatch(log_length_mismatch(label, a, b)));
    }
    Ok(())
}

/// SIMD Alignment check. Returns true if the slice is properly
/// 64-byte aligned for SIMD operations, false otherwise.
#[inline(always)]
pub fn is_simd_aligned<T>(slice: &[T]) -> bool {
    if slice.is_empty() {
        true
    } else {
        (slice.as_ptr() as usize) % 64 == 0
    }
}

/// `numpy.isclose(a, b)` with the default tolerances.
#[inline(always)]
pub fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= CLOSE_ATOL + CLOSE_RTOL * b.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_nulls_prefers_count() {
        let mask = Bitmask::new_set_all(4, true);
        assert!(!has_nulls(Some(0), Some(&mask)));
        assert!(has_nulls(Some(2), Some(&mask)));
        assert!(has_nulls(None, Some(&mask)));
        assert!(!has_nulls(None, None));
    }

    #[test]
    fn is_close_matches_numpy_defaults() {
        assert!(is_close(0.0, 0.0));
        assert!(is_close(5e-9, 0.0));
        assert!(!is_close(1e-6, 0.0));
        assert!(is_close(-0.999_995, -1.0));
        assert!(!is_close(-0.999, -1.0));
    }

    #[test]
    fn equal_len() {
        assert!(confirm_equal_len("f", 3, 3).is_ok());
        let err = confirm_equal_len("f", 3, 2).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
    }
}
