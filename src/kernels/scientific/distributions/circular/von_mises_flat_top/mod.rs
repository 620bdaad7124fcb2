// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Flat-Topped von Mises Distribution Module** - *Extended von Mises*
//!
//! ## Mathematical Definition
//! - **Kernel**: k(x; κ, ν, μ) = exp(κ cos(θ + ν sin θ)), θ = x − μ
//! - **PDF**: f = k / ∫₋π^π k, by adaptive quadrature (closed form `2π I₀(κ)` at ν = 0)
//! - **CDF**: F(x) = ∫₀ˣ f
//! - **Parameters**: κ ≥ 0, ν ∈ [−1, 1] (ν < 0 flattens the peak, ν > 0 sharpens it),
//!   μ ∈ [0, 2π]
//!
//! As in the Jones–Pewsey module, `_kernel` returns `e^(−κ) k` and the constants are
//! relative to that scaled kernel.

mod std;

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_closed, require_location, require_non_negative,
};

/// Checks κ ≥ 0, ν ∈ [−1, 1] and μ ∈ [0, 2π].
#[inline]
pub fn von_mises_flat_top_validate(kappa: f64, nu: f64, mu: f64) -> Result<(), KernelError> {
    require_non_negative("von_mises_flat_top", "kappa", kappa)?;
    require_closed("von_mises_flat_top", "nu", nu, -1.0, 1.0)?;
    require_location("von_mises_flat_top", mu)
}

/// Peak-scaled kernel `exp(κ(cos(θ + ν sin θ) − 1))`.
#[inline(always)]
pub fn von_mises_flat_top_kernel(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::von_mises_flat_top_kernel_std(x, kappa, nu, mu, null_mask, null_count)
}

/// Normalising constant of the peak-scaled kernel.
pub fn von_mises_flat_top_normalising_constant(kappa: f64, nu: f64) -> Result<f64, KernelError> {
    von_mises_flat_top_validate(kappa, nu, 0.0)?;
    std::flat_top_integral(kappa, nu, &QuadConfig::default()).map(|i| 1.0 / i)
}

/// Normalising constants for a batch of `(κ, ν)` pairs from one vector quadrature.
///
/// ## Errors
/// - `KernelError::LengthMismatch` if the slices differ in length
/// - `KernelError::InvalidParameter` naming the first invalid pair
/// - `KernelError::NonConvergence` if the joint quadrature fails
pub fn von_mises_flat_top_normalising_constants(
    kappa: &[f64],
    nu: &[f64],
) -> Result<FloatArray<f64>, KernelError> {
    for (j, (&k, &n)) in kappa.iter().zip(nu).enumerate() {
        von_mises_flat_top_validate(k, n, 0.0).map_err(|e| e.with_context(format_args!("pair {}", j)))?;
    }
    let integrals = std::flat_top_integrals(kappa, nu, &QuadConfig::default())?;
    let mut out = Vec64::with_capacity(integrals.len());
    for &i in integrals.iter() {
        out.push(1.0 / i);
    }
    Ok(FloatArray::from_vec64(out, None))
}

/// Computes the flat-topped von Mises PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate
/// - `kappa`: Concentration κ ≥ 0
/// - `nu`: Peakedness ν ∈ [−1, 1]
/// - `mu`: Location μ ∈ [0, 2π]
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Errors
/// - `KernelError::InvalidParameter` for out-of-domain parameters
/// - `KernelError::NonConvergence` if the normalising quadrature fails
#[inline(always)]
pub fn von_mises_flat_top_pdf(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::von_mises_flat_top_pdf_std(x, kappa, nu, mu, null_mask, null_count)
}

/// Flat-topped von Mises PDF (zero-allocation variant).
#[inline(always)]
pub fn von_mises_flat_top_pdf_to(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::von_mises_flat_top_pdf_std_to(x, kappa, nu, mu, output, null_mask, null_count)
}

/// Computes the flat-topped von Mises CDF.
#[inline(always)]
pub fn von_mises_flat_top_cdf(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::von_mises_flat_top_cdf_std(x, kappa, nu, mu, null_mask, null_count)
}

/// Flat-topped von Mises CDF (zero-allocation variant).
#[inline(always)]
pub fn von_mises_flat_top_cdf_to(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::von_mises_flat_top_cdf_std_to(x, kappa, nu, mu, output, null_mask, null_count)
}
