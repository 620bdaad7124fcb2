// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use super::jones_pewsey_validate;
use super::kernel::{log_kernel, normalising_integral};
use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, cdf_by_quadrature, collect_float_array, try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::shared::regime::Regime;
use crate::utils::confirm_equal_len;

/// Normalised Jones–Pewsey density at the offset `θ = x − μ`, for fixed, validated
/// parameters.
///
/// The regime is selected and the normalising integral computed once, here.
#[inline]
fn jones_pewsey_density(
    kappa: f64,
    psi: f64,
    cfg: &QuadConfig,
) -> Result<impl Fn(f64) -> f64 + Copy + use<>, KernelError> {
    let regime = Regime::select(kappa, psi);
    let inv_norm = 1.0 / normalising_integral(kappa, psi, regime, cfg)?;
    Ok(move |theta: f64| inv_norm * log_kernel(theta, kappa, psi, regime).exp())
}

#[inline]
fn param_context(kappa: f64, psi: f64, mu: f64) -> String {
    format!("kappa = {}, psi = {}, mu = {}", kappa, psi, mu)
}

#[inline(always)]
pub fn jones_pewsey_kernel_std_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    jones_pewsey_validate(kappa, psi, mu)?;
    let regime = Regime::select(kappa, psi);
    apply_kernel_std_to("jones_pewsey_kernel", x, output, null_mask, null_count, move |xi| {
        log_kernel(xi - mu, kappa, psi, regime).exp()
    })
}

#[inline(always)]
pub fn jones_pewsey_kernel_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        jones_pewsey_kernel_std_to(x, kappa, psi, mu, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn jones_pewsey_pdf_std_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    jones_pewsey_validate(kappa, psi, mu)?;
    confirm_equal_len("jones_pewsey_pdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let density = jones_pewsey_density(kappa, psi, &QuadConfig::default())
        .map_err(|e| e.with_context(format_args!("jones_pewsey_pdf({})", param_context(kappa, psi, mu))))?;
    apply_kernel_std_to("jones_pewsey_pdf", x, output, null_mask, null_count, move |xi| density(xi - mu))
}

#[inline(always)]
pub fn jones_pewsey_pdf_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        jones_pewsey_pdf_std_to(x, kappa, psi, mu, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn jones_pewsey_cdf_std_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    jones_pewsey_validate(kappa, psi, mu)?;
    confirm_equal_len("jones_pewsey_cdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let cfg = QuadConfig::default();
    let ctx = param_context(kappa, psi, mu);
    let density = jones_pewsey_density(kappa, psi, &cfg)
        .map_err(|e| e.with_context(format_args!("jones_pewsey_cdf({})", ctx)))?;
    try_apply_kernel_std_to("jones_pewsey_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, mu, |t| Ok(density(t)), &cfg)
    })
    .map_err(|e| e.with_context(ctx))
}

#[inline(always)]
pub fn jones_pewsey_cdf_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        jones_pewsey_cdf_std_to(x, kappa, psi, mu, out, null_mask, null_count)
    })
}
