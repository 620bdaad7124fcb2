// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use super::jones_pewsey_sine_skewed_validate;
use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, cdf_by_quadrature, collect_float_array, try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::circular::jones_pewsey::kernel::{
    log_kernel, normalising_integral,
};
use crate::kernels::scientific::distributions::shared::regime::Regime;
use crate::utils::confirm_equal_len;

#[inline(always)]
fn skewed_kernel(xi: f64, kappa: f64, psi: f64, lambda: f64, regime: Regime) -> f64 {
    (1.0 + lambda * xi.sin()) * log_kernel(xi, kappa, psi, regime).exp()
}

/// Normalised sine-skewed density; the constant is the symmetric one. The kernel's
/// mode stays at 0, so `x` doubles as the offset from it.
#[inline]
fn sine_skewed_density(
    kappa: f64,
    psi: f64,
    lambda: f64,
    cfg: &QuadConfig,
) -> Result<impl Fn(f64) -> f64 + Copy + use<>, KernelError> {
    let regime = Regime::select(kappa, psi);
    let inv_norm = 1.0 / normalising_integral(kappa, psi, regime, cfg)?;
    Ok(move |xi: f64| inv_norm * skewed_kernel(xi, kappa, psi, lambda, regime))
}

#[inline]
fn param_context(kappa: f64, psi: f64, lambda: f64) -> String {
    format!("kappa = {}, psi = {}, lambda = {}", kappa, psi, lambda)
}

#[inline(always)]
pub fn jones_pewsey_sine_skewed_kernel_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    jones_pewsey_sine_skewed_validate(kappa, psi, lambda)?;
    let regime = Regime::select(kappa, psi);
    collect_float_array(x, null_mask, |out| {
        apply_kernel_std_to("jones_pewsey_sine_skewed_kernel", x, out, null_mask, null_count, move |xi| {
            skewed_kernel(xi, kappa, psi, lambda, regime)
        })
    })
}

#[inline(always)]
pub fn jones_pewsey_sine_skewed_pdf_std_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    jones_pewsey_sine_skewed_validate(kappa, psi, lambda)?;
    confirm_equal_len("jones_pewsey_sine_skewed_pdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let density = sine_skewed_density(kappa, psi, lambda, &QuadConfig::default()).map_err(|e| {
        e.with_context(format_args!(
            "jones_pewsey_sine_skewed_pdf({})",
            param_context(kappa, psi, lambda)
        ))
    })?;
    apply_kernel_std_to("jones_pewsey_sine_skewed_pdf", x, output, null_mask, null_count, density)
}

#[inline(always)]
pub fn jones_pewsey_sine_skewed_pdf_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        jones_pewsey_sine_skewed_pdf_std_to(x, kappa, psi, lambda, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn jones_pewsey_sine_skewed_cdf_std_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    jones_pewsey_sine_skewed_validate(kappa, psi, lambda)?;
    confirm_equal_len("jones_pewsey_sine_skewed_cdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let cfg = QuadConfig::default();
    let ctx = param_context(kappa, psi, lambda);
    let density = sine_skewed_density(kappa, psi, lambda, &cfg)
        .map_err(|e| e.with_context(format_args!("jones_pewsey_sine_skewed_cdf({})", ctx)))?;
    try_apply_kernel_std_to("jones_pewsey_sine_skewed_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, 0.0, |t| Ok(density(t)), &cfg)
    })
    .map_err(|e| e.with_context(ctx))
}

#[inline(always)]
pub fn jones_pewsey_sine_skewed_cdf_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        jones_pewsey_sine_skewed_cdf_std_to(x, kappa, psi, lambda, out, null_mask, null_count)
    })
}
