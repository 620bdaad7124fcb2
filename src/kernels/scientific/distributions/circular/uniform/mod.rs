// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Circular Uniform Distribution Module** - *Isotropic Directions*
//!
//! ## Mathematical Definition
//! - **PDF**: f(x) = 1/(2π)
//! - **CDF**: F(x) = x/(2π), counted from 0, so F(x + 2π) = F(x) + 1
//! - **Support**: x ∈ ℝ, periodic with period 2π
//! - **Parameters**: none
//!
//! The limit that the Jones–Pewsey family falls back to as κ → 0.

mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;

/// The circular uniform distribution has no shape parameters; always `Ok`.
#[inline(always)]
pub fn circular_uniform_validate() -> Result<(), KernelError> {
    Ok(())
}

/// Computes the circular uniform PDF, `1/(2π)` at every finite angle.
///
/// Non-finite angles yield `NaN`; nulls propagate from `null_mask`.
///
/// ## Example
/// ```rust,ignore
/// use circular_kernels::kernels::scientific::distributions::circular::uniform::circular_uniform_pdf;
/// use minarrow::vec64;
///
/// let x = vec64![0.0, 1.0, 7.0];
/// let result = circular_uniform_pdf(&x, None, None).unwrap();
/// // [0.15915494309189535; 3]
/// ```
#[inline(always)]
pub fn circular_uniform_pdf(
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::circular_uniform_pdf_std(x, null_mask, null_count)
}

/// Circular uniform PDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
///
/// ## Errors
/// Returns `KernelError::LengthMismatch` if `output.len() != x.len()`.
#[inline(always)]
pub fn circular_uniform_pdf_to(
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::circular_uniform_pdf_std_to(x, output, null_mask, null_count)
}

/// Computes the circular uniform CDF, `x/(2π)`.
#[inline(always)]
pub fn circular_uniform_cdf(
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::circular_uniform_cdf_std(x, null_mask, null_count)
}

/// Circular uniform CDF (zero-allocation variant).
#[inline(always)]
pub fn circular_uniform_cdf_to(
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::circular_uniform_cdf_std_to(x, output, null_mask, null_count)
}
