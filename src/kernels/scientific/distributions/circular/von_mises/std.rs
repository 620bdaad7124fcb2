// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use super::von_mises_validate;
use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::bessel::bessel_i0e;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, cdf_by_quadrature, collect_float_array, try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::shared::constants::INV_TWO_PI;

/// Scalar von Mises density for fixed, validated parameters.
#[inline]
fn von_mises_density(kappa: f64, mu: f64) -> impl Fn(f64) -> f64 + Copy {
    let c = INV_TWO_PI / bessel_i0e(kappa);
    let two_kappa = 2.0 * kappa;
    move |xi: f64| {
        let s = (0.5 * (xi - mu)).sin();
        c * (-two_kappa * s * s).exp()
    }
}

#[inline(always)]
pub fn von_mises_pdf_std_to(
    x: &[f64],
    kappa: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    von_mises_validate(kappa, mu)?;
    apply_kernel_std_to("von_mises_pdf", x, output, null_mask, null_count, von_mises_density(kappa, mu))
}

#[inline(always)]
pub fn von_mises_pdf_std(
    x: &[f64],
    kappa: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        von_mises_pdf_std_to(x, kappa, mu, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn von_mises_cdf_std_to(
    x: &[f64],
    kappa: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    von_mises_validate(kappa, mu)?;
    let density = von_mises_density(kappa, mu);
    let cfg = QuadConfig::default();
    try_apply_kernel_std_to("von_mises_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, mu, |t| Ok(density(mu + t)), &cfg)
    })
    .map_err(|e| e.with_context(format_args!("kappa = {}, mu = {}", kappa, mu)))
}

#[inline(always)]
pub fn von_mises_cdf_std(
    x: &[f64],
    kappa: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        von_mises_cdf_std_to(x, kappa, mu, out, null_mask, null_count)
    })
}
