// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common SIMD Distribution Utilities**
//!
//! Shared SIMD kernel infrastructure for the closed-form circular densities.
//! Null-aware inputs take the scalar masked path; only dense, 64-byte aligned inputs
//! are vectorised.

use std::simd::{LaneCount, Simd, SupportedLaneCount};

use minarrow::Bitmask;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::std::{
    dense_circular_kernel_f64_std_to, masked_circular_kernel_f64_std_to,
};
use crate::utils::{confirm_equal_len, has_nulls, is_simd_aligned};

/// SIMD kernel for dense f64->f64 circular density computations
/// (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
///
/// ## Parameters
/// - `x`: Input array slice (requires 64-byte alignment for SIMD activation)
/// - `out`: Output buffer (must match input length)
/// - `simd_body`: Vectorised computation function: `Simd<f64, N> -> Simd<f64, N>`
/// - `scalar_body`: Scalar computation function for tail elements: `f64 -> f64`
#[inline(always)]
pub fn dense_circular_kernel_f64_simd_to<const N: usize, FSimd, FScalar>(
    x: &[f64],
    out: &mut [f64],
    simd_body: FSimd,
    scalar_body: FScalar,
) where
    LaneCount<N>: SupportedLaneCount,
    FSimd: Fn(Simd<f64, N>) -> Simd<f64, N>,
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    if is_simd_aligned(x) {
        let mut i = 0;
        while i + N <= len {
            let x_v = Simd::<f64, N>::from_slice(&x[i..i + N]);
            let y_v = simd_body(x_v);
            out[i..i + N].copy_from_slice(y_v.as_array());
            i += N;
        }
        // Scalar tail
        for j in i..len {
            out[j] = scalar_body(x[j]);
        }
        return;
    }

    // Scalar fallback - alignment check failed
    dense_circular_kernel_f64_std_to(x, out, scalar_body);
}

/// SIMD counterpart of `apply_kernel_std_to`: dense aligned input is vectorised, and
/// everything else goes through the scalar drivers.
#[inline(always)]
pub fn apply_kernel_simd_to<const N: usize, FSimd, FScalar>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    simd_body: FSimd,
    scalar_body: FScalar,
) -> Result<(), KernelError>
where
    LaneCount<N>: SupportedLaneCount,
    FSimd: Fn(Simd<f64, N>) -> Simd<f64, N>,
    FScalar: Fn(f64) -> f64,
{
    confirm_equal_len(fname, x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    if !has_nulls(null_count, null_mask) {
        dense_circular_kernel_f64_simd_to::<N, _, _>(x, output, simd_body, scalar_body);
        return Ok(());
    }
    let mask = null_mask.ok_or_else(|| {
        KernelError::InvalidParameter(format!("{}: null_count > 0 requires null_mask", fname))
    })?;
    let mut out_mask = mask.clone();
    masked_circular_kernel_f64_std_to(x, mask, output, &mut out_mask, scalar_body);
    Ok(())
}
