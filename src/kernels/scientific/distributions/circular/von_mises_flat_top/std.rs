// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray, Vec64};
use tracing::trace;

use super::von_mises_flat_top_validate;
use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::bessel::bessel_i0e;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, cdf_by_quadrature, collect_float_array, positive_normaliser,
    try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::shared::constants::TWO_PI;
use crate::kernels::scientific::quadrature::{quad_vec_from_peak, try_quad_from_peak};
use crate::utils::confirm_equal_len;

const PI: f64 = ::std::f64::consts::PI;

/// `κ(cos(θ + ν sin θ) − 1)`, the log of the peak-scaled kernel.
#[inline(always)]
fn flat_top_log_kernel(theta: f64, kappa: f64, nu: f64) -> f64 {
    let s = (0.5 * (theta + nu * theta.sin())).sin();
    -2.0 * kappa * s * s
}

/// `∫₋π^π exp(κ(cos(θ + ν sin θ) − 1)) dθ`; `2π I₀ₑ(κ)` when ν = 0.
///
/// The kernel is even, so this is twice the integral outward from the mode over
/// `[0, π]`.
pub(super) fn flat_top_integral(kappa: f64, nu: f64, cfg: &QuadConfig) -> Result<f64, KernelError> {
    if nu == 0.0 {
        return Ok(TWO_PI * bessel_i0e(kappa));
    }
    try_quad_from_peak(|t| Ok(flat_top_log_kernel(t, kappa, nu).exp()), 0.0, PI, &cfg.relative())
        .and_then(|out| {
            trace!(kappa, nu, value = out.value, intervals = out.intervals, "flat-topped von mises integral");
            positive_normaliser(2.0 * out.value)
        })
        .map_err(|e| {
            e.with_context(format_args!(
                "flat-topped von mises normalising integral (kappa = {}, nu = {})",
                kappa, nu
            ))
        })
}

/// Batch form of [`flat_top_integral`]: one vector quadrature for all ν ≠ 0 pairs.
pub(super) fn flat_top_integrals(
    kappa: &[f64],
    nu: &[f64],
    cfg: &QuadConfig,
) -> Result<Vec64<f64>, KernelError> {
    confirm_equal_len("von_mises_flat_top_normalising_constants", kappa.len(), nu.len())?;
    let mut out = Vec64::with_capacity(kappa.len());
    let mut pending = Vec::new();
    for (j, (&k, &n)) in kappa.iter().zip(nu).enumerate() {
        if n == 0.0 {
            out.push(TWO_PI * bessel_i0e(k));
        } else {
            pending.push(j);
            out.push(f64::NAN);
        }
    }
    if pending.is_empty() {
        return Ok(out);
    }
    let res = quad_vec_from_peak(
        |t, vals: &mut [f64]| {
            for (v, &j) in vals.iter_mut().zip(&pending) {
                *v = flat_top_log_kernel(t, kappa[j], nu[j]).exp();
            }
        },
        0.0,
        PI,
        pending.len(),
        &cfg.relative(),
    )
    .map_err(|e| e.with_context("flat-topped von mises batch normalising integrals"))?;
    trace!(pairs = pending.len(), intervals = res.intervals, "flat-topped von mises batch integrals");
    for (&j, &v) in pending.iter().zip(res.values.iter()) {
        out[j] = positive_normaliser(2.0 * v).map_err(|e| {
            e.with_context(format_args!(
                "flat-topped von mises batch normalising integral (kappa = {}, nu = {})",
                kappa[j], nu[j]
            ))
        })?;
    }
    Ok(out)
}

/// Normalised density at the offset `θ = x − μ`.
#[inline]
fn flat_top_density(
    kappa: f64,
    nu: f64,
    cfg: &QuadConfig,
) -> Result<impl Fn(f64) -> f64 + Copy + use<>, KernelError> {
    let inv_norm = 1.0 / flat_top_integral(kappa, nu, cfg)?;
    Ok(move |theta: f64| inv_norm * flat_top_log_kernel(theta, kappa, nu).exp())
}

#[inline]
fn param_context(kappa: f64, nu: f64, mu: f64) -> String {
    format!("kappa = {}, nu = {}, mu = {}", kappa, nu, mu)
}

#[inline(always)]
pub fn von_mises_flat_top_kernel_std(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    von_mises_flat_top_validate(kappa, nu, mu)?;
    collect_float_array(x, null_mask, |out| {
        apply_kernel_std_to("von_mises_flat_top_kernel", x, out, null_mask, null_count, move |xi| {
            flat_top_log_kernel(xi - mu, kappa, nu).exp()
        })
    })
}

#[inline(always)]
pub fn von_mises_flat_top_pdf_std_to(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    von_mises_flat_top_validate(kappa, nu, mu)?;
    confirm_equal_len("von_mises_flat_top_pdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let density = flat_top_density(kappa, nu, &QuadConfig::default())
        .map_err(|e| e.with_context(format_args!("von_mises_flat_top_pdf({})", param_context(kappa, nu, mu))))?;
    apply_kernel_std_to("von_mises_flat_top_pdf", x, output, null_mask, null_count, move |xi| {
        density(xi - mu)
    })
}

#[inline(always)]
pub fn von_mises_flat_top_pdf_std(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        von_mises_flat_top_pdf_std_to(x, kappa, nu, mu, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn von_mises_flat_top_cdf_std_to(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    von_mises_flat_top_validate(kappa, nu, mu)?;
    confirm_equal_len("von_mises_flat_top_cdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let cfg = QuadConfig::default();
    let ctx = param_context(kappa, nu, mu);
    let density = flat_top_density(kappa, nu, &cfg)
        .map_err(|e| e.with_context(format_args!("von_mises_flat_top_cdf({})", ctx)))?;
    try_apply_kernel_std_to("von_mises_flat_top_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, mu, |t| Ok(density(t)), &cfg)
    })
    .map_err(|e| e.with_context(ctx))
}

#[inline(always)]
pub fn von_mises_flat_top_cdf_std(
    x: &[f64],
    kappa: f64,
    nu: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        von_mises_flat_top_cdf_std_to(x, kappa, nu, mu, out, null_mask, null_count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_kernel_matches_direct_form() {
        for &(kappa, nu) in &[(1.0, 0.5), (3.0, -1.0), (0.2, 1.0)] {
            for &t in &[0.0, 0.7, 2.0, PI] {
                let direct = (kappa * ((t + nu * t.sin()).cos() - 1.0)).exp();
                assert!((flat_top_log_kernel(t, kappa, nu).exp() - direct).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn quadrature_agrees_with_closed_form_at_nu_zero() {
        let cfg = QuadConfig::default();
        let half = try_quad_from_peak(|t| Ok(flat_top_log_kernel(t, 2.5, 0.0).exp()), 0.0, PI, &cfg).unwrap();
        let closed = flat_top_integral(2.5, 0.0, &cfg).unwrap();
        assert!((2.0 * half.value - closed).abs() < 1e-10);
    }

    #[test]
    fn sharp_peak_constant_is_resolved() {
        // θ + ν sin θ ≈ (1 + ν)θ near the mode, so the constant tends to 2π I₀ₑ(κ)/(1 + ν)
        let cfg = QuadConfig::default();
        let i = flat_top_integral(1e6, 0.5, &cfg).unwrap();
        let laplace = TWO_PI * bessel_i0e(1e6) / 1.5;
        assert!((i / laplace - 1.0).abs() < 1e-5, "{i:e} vs {laplace:e}");
        let batch = flat_top_integrals(&[1e6, 2.0], &[0.5, -0.5], &cfg).unwrap();
        assert!((batch[0] / i - 1.0).abs() < 1e-7);
        assert!((batch[1] / flat_top_integral(2.0, -0.5, &cfg).unwrap() - 1.0).abs() < 1e-7);
    }
}
