// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cartwright Distribution Module** - *Power-of-Cosine Density*
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; ζ, μ) = 2^(1/ζ − 1) Γ(1 + 1/ζ)² (1 + cos(x − μ))^(1/ζ) / (π Γ(1 + 2/ζ))
//! - **CDF**: F(x) = ∫₀ˣ f, by adaptive quadrature
//! - **Parameters**: ζ > 0 (shape), μ ∈ [0, 2π] (mean direction)
//!
//! ζ = 1 is the cardioid with ρ = 0.5; ζ → 0 concentrates on μ. For small ζ the Gamma
//! ratio overflows, so the constant switches to log space.

mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_location, require_positive,
};

/// Checks ζ > 0 and μ ∈ [0, 2π].
#[inline]
pub fn cartwright_validate(zeta: f64, mu: f64) -> Result<(), KernelError> {
    require_positive("cartwright", "zeta", zeta)?;
    require_location("cartwright", mu)
}

/// Computes the Cartwright power-of-cosine PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate
/// - `zeta`: Shape ζ > 0
/// - `mu`: Mean direction μ ∈ [0, 2π]
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Errors
/// Returns `KernelError::InvalidParameter` for ζ ≤ 0 or μ outside [0, 2π].
#[inline(always)]
pub fn cartwright_pdf(
    x: &[f64],
    zeta: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cartwright_pdf_std(x, zeta, mu, null_mask, null_count)
}

/// Cartwright PDF (zero-allocation variant).
#[inline(always)]
pub fn cartwright_pdf_to(
    x: &[f64],
    zeta: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cartwright_pdf_std_to(x, zeta, mu, output, null_mask, null_count)
}

/// Computes the Cartwright CDF by integrating the density from 0.
///
/// ## Errors
/// - `KernelError::InvalidParameter` for out-of-domain parameters
/// - `KernelError::NonConvergence` if the quadrature exhausts its subdivision budget
#[inline(always)]
pub fn cartwright_cdf(
    x: &[f64],
    zeta: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cartwright_cdf_std(x, zeta, mu, null_mask, null_count)
}

/// Cartwright CDF (zero-allocation variant).
#[inline(always)]
pub fn cartwright_cdf_to(
    x: &[f64],
    zeta: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cartwright_cdf_std_to(x, zeta, mu, output, null_mask, null_count)
}
