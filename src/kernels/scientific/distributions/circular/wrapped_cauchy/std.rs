// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use super::wrapped_cauchy_validate;
use crate::config::QuadConfig;
use crate::errors::KernelError;
#[cfg(not(feature = "simd"))]
use crate::kernels::scientific::distributions::circular::common::std::apply_kernel_std_to;
use crate::kernels::scientific::distributions::circular::common::std::{
    cdf_by_quadrature, collect_float_array, try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::shared::constants::INV_TWO_PI;

/// Scalar wrapped Cauchy density for fixed, validated parameters.
#[inline]
pub(super) fn wrapped_cauchy_density(rho: f64, mu: f64) -> impl Fn(f64) -> f64 + Copy {
    let num = (1.0 - rho * rho) * INV_TWO_PI;
    let gap = (1.0 - rho) * (1.0 - rho);
    let four_rho = 4.0 * rho;
    move |xi: f64| {
        let s = (0.5 * (xi - mu)).sin();
        num / (gap + four_rho * s * s)
    }
}

#[cfg(not(feature = "simd"))]
#[inline(always)]
pub fn wrapped_cauchy_pdf_std_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    wrapped_cauchy_validate(rho, mu)?;
    apply_kernel_std_to(
        "wrapped_cauchy_pdf",
        x,
        output,
        null_mask,
        null_count,
        wrapped_cauchy_density(rho, mu),
    )
}

#[cfg(not(feature = "simd"))]
#[inline(always)]
pub fn wrapped_cauchy_pdf_std(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        wrapped_cauchy_pdf_std_to(x, rho, mu, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn wrapped_cauchy_cdf_std_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    wrapped_cauchy_validate(rho, mu)?;
    let density = wrapped_cauchy_density(rho, mu);
    let cfg = QuadConfig::default();
    try_apply_kernel_std_to("wrapped_cauchy_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, mu, |t| Ok(density(mu + t)), &cfg)
    })
    .map_err(|e| e.with_context(format_args!("rho = {}, mu = {}", rho, mu)))
}

#[inline(always)]
pub fn wrapped_cauchy_cdf_std(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        wrapped_cauchy_cdf_std_to(x, rho, mu, out, null_mask, null_count)
    })
}
