// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cardioid Distribution Scalar Implementation**

use minarrow::{Bitmask, FloatArray};

use super::cardioid_validate;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, collect_float_array,
};
use crate::kernels::scientific::distributions::shared::constants::INV_TWO_PI;

/// Cardioid PDF (scalar, zero-allocation variant).
/// f(x; ρ, μ) = (1 + 2ρ cos(x − μ)) / (2π)
#[cfg(not(feature = "simd"))]
#[inline(always)]
pub fn cardioid_pdf_std_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    cardioid_validate(rho, mu)?;
    let two_rho = 2.0 * rho;
    apply_kernel_std_to("cardioid_pdf", x, output, null_mask, null_count, move |xi| {
        (1.0 + two_rho * (xi - mu).cos()) * INV_TWO_PI
    })
}

/// Cardioid PDF (scalar), null-aware and Arrow-compliant.
#[cfg(not(feature = "simd"))]
#[inline(always)]
pub fn cardioid_pdf_std(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        cardioid_pdf_std_to(x, rho, mu, out, null_mask, null_count)
    })
}

/// Cardioid CDF (scalar, zero-allocation variant).
/// F(x; ρ, μ) = (x + 2ρ (sin(x − μ) + sin μ)) / (2π)
#[inline(always)]
pub fn cardioid_cdf_std_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    cardioid_validate(rho, mu)?;
    let two_rho = 2.0 * rho;
    let sin_mu = mu.sin();
    apply_kernel_std_to("cardioid_cdf", x, output, null_mask, null_count, move |xi| {
        (xi + two_rho * ((xi - mu).sin() + sin_mu)) * INV_TWO_PI
    })
}

/// Cardioid CDF (scalar), null-aware and Arrow-compliant.
#[inline(always)]
pub fn cardioid_cdf_std(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        cardioid_cdf_std_to(x, rho, mu, out, null_mask, null_count)
    })
}
