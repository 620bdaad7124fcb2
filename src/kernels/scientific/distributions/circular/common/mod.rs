// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Kernel Drivers and Test Helpers*
//!
//! Drivers that map a scalar density/cumulative body over an input array with the
//! crate's null-mask conventions, plus helpers shared by the distribution test suites.
//!
//! ## Drivers
//! - **Infallible bodies**: closed-form densities (`apply_kernel_std_to`)
//! - **Fallible bodies**: anything that integrates or root-solves per lane
//!   (`try_apply_kernel_std_to`); the first failure aborts with the lane's `x`
//! - **Cumulative functions**: `cdf_by_quadrature` integrates a normalised density
//!   from the period start 0
//!
//! ## Test Helpers
//! - **Array extraction**: unwrapping of dense arrays without null masks
//! - **Mask creation**: single-null masks for propagation tests
//! - **Tolerance checking**: absolute comparison with configurable precision

/// Shape-parameter domain checks used by every `<dist>_validate`.
pub mod params;
#[cfg(feature = "simd")]
pub mod simd;
/// Scalar implementations of common distribution utilities.
pub mod std;

use minarrow::{Bitmask, Buffer, FloatArray};

// Common test helpers

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}

/// Create a mask of given length with exactly the lane `idx` null.
pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    m.set(idx, false);
    m
}

/// Assert absolute difference ≤ `tol`.
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() <= tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}
