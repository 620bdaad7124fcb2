// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Jones–Pewsey Distribution Module** - *Three-Parameter Symmetric Family*
//!
//! The Jones–Pewsey family contains the von Mises (ψ = 0), cardioid (ψ = 1) and wrapped
//! Cauchy (ψ = −1) distributions as special cases, and tends to the circular uniform as
//! κ → 0.
//!
//! ## Mathematical Definition
//! - **Kernel**: k(x; κ, ψ, μ) = (cosh(κψ) + sinh(κψ) cos(x − μ))^(1/ψ)
//! - **PDF**: f = k / ∫₋π^π k, the integral by adaptive quadrature
//! - **CDF**: F(x) = ∫₀ˣ f
//! - **Parameters**: κ ≥ 0 (concentration), ψ ∈ ℝ (shape), μ ∈ [0, 2π] (mean direction)
//!
//! ## Regimes
//! Selected once per call from (κ, ψ):
//! - κ < 0.001: circular uniform, `1/(2π)`
//! - |ψ| ≈ 0: von Mises limit `exp(κ cos(x − μ)) / (2π I₀(κ))`, no quadrature
//! - otherwise the general kernel, evaluated in log space scaled by `e^(−κ)`
//!
//! The `_kernel` and `_normalising_constant` functions expose the peak-scaled kernel
//! `k̃ = e^(−κ) k` and its constant `c = 1/∫k̃`, so that `f = c · k̃` for any κ without
//! overflow.

pub(crate) mod kernel;
mod std;

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_finite, require_location, require_non_negative,
};
use crate::kernels::scientific::distributions::shared::regime::Regime;

/// Checks κ ≥ 0, ψ finite and μ ∈ [0, 2π].
#[inline]
pub fn jones_pewsey_validate(kappa: f64, psi: f64, mu: f64) -> Result<(), KernelError> {
    require_non_negative("jones_pewsey", "kappa", kappa)?;
    require_finite("jones_pewsey", "psi", psi)?;
    require_location("jones_pewsey", mu)
}

/// Evaluates the peak-scaled Jones–Pewsey kernel `e^(−κ) k(x; κ, ψ, μ)`.
///
/// Values lie in `[0, 1]` with 1 at `x = μ`. Not normalised.
#[inline(always)]
pub fn jones_pewsey_kernel(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_kernel_std(x, kappa, psi, mu, null_mask, null_count)
}

/// Normalising constant `c` of the peak-scaled kernel, so that `f = c · k̃`.
///
/// ## Errors
/// - `KernelError::InvalidParameter` for κ < 0 or non-finite ψ
/// - `KernelError::NonConvergence` if the quadrature exhausts its subdivision budget
pub fn jones_pewsey_normalising_constant(kappa: f64, psi: f64) -> Result<f64, KernelError> {
    jones_pewsey_validate(kappa, psi, 0.0)?;
    let regime = Regime::select(kappa, psi);
    kernel::normalising_integral(kappa, psi, regime, &QuadConfig::default()).map(|i| 1.0 / i)
}

/// Normalising constants for a batch of `(κ, ψ)` pairs from one vector-valued
/// quadrature call.
///
/// ## Errors
/// - `KernelError::LengthMismatch` if `kappa.len() != psi.len()`
/// - `KernelError::InvalidParameter` naming the first invalid pair
/// - `KernelError::NonConvergence` if the joint quadrature fails
///
/// ## Example
/// ```rust,ignore
/// use circular_kernels::kernels::scientific::distributions::circular::jones_pewsey::jones_pewsey_normalising_constants;
///
/// let c = jones_pewsey_normalising_constants(&[0.5, 1.0, 4.0], &[1.0, 0.0, -0.5]).unwrap();
/// assert_eq!(c.data.len(), 3);
/// ```
pub fn jones_pewsey_normalising_constants(
    kappa: &[f64],
    psi: &[f64],
) -> Result<FloatArray<f64>, KernelError> {
    for (j, (&k, &p)) in kappa.iter().zip(psi).enumerate() {
        jones_pewsey_validate(k, p, 0.0).map_err(|e| e.with_context(format_args!("pair {}", j)))?;
    }
    let integrals = kernel::normalising_integrals(kappa, psi, &QuadConfig::default())?;
    let mut out = Vec64::with_capacity(integrals.len());
    for &i in integrals.iter() {
        out.push(1.0 / i);
    }
    Ok(FloatArray::from_vec64(out, None))
}

/// Computes the Jones–Pewsey PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate
/// - `kappa`: Concentration κ ≥ 0
/// - `psi`: Shape ψ (any finite real)
/// - `mu`: Mean direction μ ∈ [0, 2π]
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Behaviour
/// - ψ within `isclose` of 0 takes the von Mises limit; ψ = 1e−6 and ψ = 0 agree to
///   well within 1e−4
/// - κ < 0.001 returns `1/(2π)` everywhere
///
/// ## Errors
/// - `KernelError::InvalidParameter` for out-of-domain parameters
/// - `KernelError::NonConvergence` if the normalising quadrature fails
#[inline(always)]
pub fn jones_pewsey_pdf(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_pdf_std(x, kappa, psi, mu, null_mask, null_count)
}

/// Jones–Pewsey PDF (zero-allocation variant).
#[inline(always)]
pub fn jones_pewsey_pdf_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::jones_pewsey_pdf_std_to(x, kappa, psi, mu, output, null_mask, null_count)
}

/// Computes the Jones–Pewsey CDF by integrating the normalised density from 0.
#[inline(always)]
pub fn jones_pewsey_cdf(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_cdf_std(x, kappa, psi, mu, null_mask, null_count)
}

/// Jones–Pewsey CDF (zero-allocation variant).
#[inline(always)]
pub fn jones_pewsey_cdf_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::jones_pewsey_cdf_std_to(x, kappa, psi, mu, output, null_mask, null_count)
}
