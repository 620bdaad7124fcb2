// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sine-Skewed Jones–Pewsey Distribution Module** - *Asymmetric Jones–Pewsey*
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; κ, ψ, λ) = (1 + λ sin x) · k(x; κ, ψ, 0) / ∫₋π^π k(·; κ, ψ, 0)
//! - **CDF**: F(x) = ∫₀ˣ f
//! - **Parameters**: κ ≥ 0, ψ ∈ ℝ, λ ∈ [−1, 1] (skew magnitude and direction)
//!
//! The symmetric kernel is even, so the sine factor leaves the normalising constant
//! unchanged. The Jones–Pewsey regimes apply unchanged; in the uniform limit the
//! density is `(1 + λ sin x)/(2π)`.

mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_closed, require_finite, require_non_negative,
};

/// Checks κ ≥ 0, ψ finite and λ ∈ [−1, 1].
#[inline]
pub fn jones_pewsey_sine_skewed_validate(kappa: f64, psi: f64, lambda: f64) -> Result<(), KernelError> {
    require_non_negative("jones_pewsey_sine_skewed", "kappa", kappa)?;
    require_finite("jones_pewsey_sine_skewed", "psi", psi)?;
    require_closed("jones_pewsey_sine_skewed", "lambda", lambda, -1.0, 1.0)
}

/// Evaluates the unnormalised kernel `(1 + λ sin x) · e^(−κ) k(x; κ, ψ, 0)`.
#[inline(always)]
pub fn jones_pewsey_sine_skewed_kernel(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_sine_skewed_kernel_std(x, kappa, psi, lambda, null_mask, null_count)
}

/// Computes the sine-skewed Jones–Pewsey PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate
/// - `kappa`: Concentration κ ≥ 0
/// - `psi`: Shape ψ (any finite real)
/// - `lambda`: Skew λ ∈ [−1, 1]
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Errors
/// - `KernelError::InvalidParameter` for out-of-domain parameters
/// - `KernelError::NonConvergence` if the normalising quadrature fails
#[inline(always)]
pub fn jones_pewsey_sine_skewed_pdf(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_sine_skewed_pdf_std(x, kappa, psi, lambda, null_mask, null_count)
}

/// Sine-skewed Jones–Pewsey PDF (zero-allocation variant).
#[inline(always)]
pub fn jones_pewsey_sine_skewed_pdf_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::jones_pewsey_sine_skewed_pdf_std_to(x, kappa, psi, lambda, output, null_mask, null_count)
}

/// Computes the sine-skewed Jones–Pewsey CDF by integrating the density from 0.
#[inline(always)]
pub fn jones_pewsey_sine_skewed_cdf(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_sine_skewed_cdf_std(x, kappa, psi, lambda, null_mask, null_count)
}

/// Sine-skewed Jones–Pewsey CDF (zero-allocation variant).
#[inline(always)]
pub fn jones_pewsey_sine_skewed_cdf_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::jones_pewsey_sine_skewed_cdf_std_to(x, kappa, psi, lambda, output, null_mask, null_count)
}
