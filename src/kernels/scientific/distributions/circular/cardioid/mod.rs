// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cardioid Distribution Module** - *First-Order Cosine Perturbation of the Uniform*
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; ρ, μ) = (1 + 2ρ cos(x − μ)) / (2π)
//! - **CDF**: F(x; ρ, μ) = (x + 2ρ (sin(x − μ) + sin μ)) / (2π)
//! - **Support**: x ∈ ℝ, periodic with period 2π
//! - **Parameters**: ρ ∈ [0, 0.5] (mean resultant length), μ ∈ [0, 2π] (mean direction)
//!
//! The density is closed form, so the dense path is vectorised under the `simd` feature.

#[cfg(feature = "simd")]
mod simd;
mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_closed, require_location,
};

/// Checks ρ ∈ [0, 0.5] and μ ∈ [0, 2π].
///
/// At ρ = 0.5 the density touches zero at the antimode; beyond it would go negative.
#[inline]
pub fn cardioid_validate(rho: f64, mu: f64) -> Result<(), KernelError> {
    require_closed("cardioid", "rho", rho, 0.0, 0.5)?;
    require_location("cardioid", mu)
}

/// Computes the cardioid PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate (any real; the density is 2π-periodic)
/// - `rho`: Concentration ρ ∈ [0, 0.5]
/// - `mu`: Mean direction μ ∈ [0, 2π]
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Errors
/// Returns `KernelError::InvalidParameter` if ρ or μ is outside its domain.
///
/// ## Example
/// ```rust,ignore
/// use circular_kernels::kernels::scientific::distributions::circular::cardioid::cardioid_pdf;
/// use minarrow::vec64;
///
/// let x = vec64![0.0, std::f64::consts::PI];
/// let result = cardioid_pdf(&x, 0.3, 0.0, None, None).unwrap();
/// // [0.2546479..., 0.0636619...]
/// ```
#[inline(always)]
pub fn cardioid_pdf(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    #[cfg(feature = "simd")]
    {
        simd::cardioid_pdf_simd(x, rho, mu, null_mask, null_count)
    }

    #[cfg(not(feature = "simd"))]
    {
        std::cardioid_pdf_std(x, rho, mu, null_mask, null_count)
    }
}

/// Cardioid PDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
#[inline(always)]
pub fn cardioid_pdf_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    #[cfg(feature = "simd")]
    {
        simd::cardioid_pdf_simd_to(x, rho, mu, output, null_mask, null_count)
    }

    #[cfg(not(feature = "simd"))]
    {
        std::cardioid_pdf_std_to(x, rho, mu, output, null_mask, null_count)
    }
}

/// Computes the cardioid CDF in closed form, measured from 0.
///
/// ## Behaviour
/// - F(0) = 0 and F(2π) = 1 for every valid (ρ, μ)
/// - F(x + 2π) = F(x) + 1
#[inline(always)]
pub fn cardioid_cdf(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cardioid_cdf_std(x, rho, mu, null_mask, null_count)
}

/// Cardioid CDF (zero-allocation variant).
#[inline(always)]
pub fn cardioid_cdf_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cardioid_cdf_std_to(x, rho, mu, output, null_mask, null_count)
}
