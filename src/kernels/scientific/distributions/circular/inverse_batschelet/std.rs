// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};
use tracing::trace;

use super::inverse_batschelet_validate;
use super::transform::{phase, solve_phases};
use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::bessel::{bessel_i0e, bessel_ratio_a1};
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, cdf_by_quadrature, collect_float_array, positive_normaliser,
    try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::shared::constants::TWO_PI;
use crate::kernels::scientific::distributions::shared::regime::SkewRegime;
use crate::kernels::scientific::quadrature::try_quad_from_peak;
use crate::utils::confirm_equal_len;

const PI: f64 = ::std::f64::consts::PI;

/// Regime for λ, with λ snapped to ±1 in the limit regimes.
#[inline]
pub(super) fn skew_regime(lambda: f64) -> (SkewRegime, f64) {
    match SkewRegime::select(lambda) {
        SkewRegime::Identity => (SkewRegime::Identity, -1.0),
        SkewRegime::ClosedForm => (SkewRegime::ClosedForm, 1.0),
        SkewRegime::General => (SkewRegime::General, lambda),
    }
}

/// `exp(κ(cos p − 1))`, the von Mises kernel scaled by `e^(−κ)`.
#[inline(always)]
fn scaled_von_mises(p: f64, kappa: f64) -> f64 {
    let s = (0.5 * p).sin();
    (-2.0 * kappa * s * s).exp()
}

/// `∫₋π^π` of the scaled kernel over one period. Independent of ν.
///
/// Substituting the skew map leaves `∫ exp(κ(cos g − 1)) (1 − ½(1 + λ) cos w) dw` with
/// `g = w − ½(1 − λ) sin w`. The integrand is even and non-negative, so it is
/// integrated outward from the mode over `[0, π]` against a relative target. At λ = 1
/// this is `2π I₀ₑ(κ)(1 − A₁(κ))` with `A₁ = I₁/I₀`.
pub(super) fn normalising_integral(
    kappa: f64,
    lambda: f64,
    regime: SkewRegime,
    cfg: &QuadConfig,
) -> Result<f64, KernelError> {
    if regime == SkewRegime::ClosedForm {
        return Ok(TWO_PI * bessel_i0e(kappa) * (1.0 - bessel_ratio_a1(kappa)));
    }
    let a = 0.5 * (1.0 + lambda);
    let b = 0.5 * (1.0 - lambda);
    try_quad_from_peak(
        |w| Ok(scaled_von_mises(w - b * w.sin(), kappa) * (1.0 - a * w.cos())),
        0.0,
        PI,
        &cfg.relative(),
    )
    .and_then(|out| {
        trace!(kappa, lambda, value = out.value, intervals = out.intervals, "inverse batschelet normalising integral");
        positive_normaliser(2.0 * out.value)
    })
    .map_err(|e| {
        e.with_context(format_args!(
            "inverse batschelet normalising integral (kappa = {}, lambda = {})",
            kappa, lambda
        ))
    })
}

#[inline]
fn param_context(kappa: f64, nu: f64, lambda: f64) -> String {
    format!("kappa = {}, nu = {}, lambda = {}", kappa, nu, lambda)
}

#[inline(always)]
pub fn inverse_batschelet_kernel_std(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    inverse_batschelet_validate(kappa, nu, lambda)?;
    let (regime, lambda) = skew_regime(lambda);
    collect_float_array(x, null_mask, |out| {
        if x.is_empty() {
            return Ok(());
        }
        let phases = solve_phases("inverse_batschelet_kernel", x, nu, lambda, regime, null_mask, null_count)?;
        apply_kernel_std_to("inverse_batschelet_kernel", phases.as_slice(), out, null_mask, null_count, move |p| {
            scaled_von_mises(p, kappa)
        })
    })
}

#[inline(always)]
pub fn inverse_batschelet_pdf_std_to(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    inverse_batschelet_validate(kappa, nu, lambda)?;
    confirm_equal_len("inverse_batschelet_pdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let ctx = param_context(kappa, nu, lambda);
    let (regime, lambda) = skew_regime(lambda);
    let inv_norm = 1.0
        / normalising_integral(kappa, lambda, regime, &QuadConfig::default())
            .map_err(|e| e.with_context(format_args!("inverse_batschelet_pdf({})", ctx)))?;
    let phases = solve_phases("inverse_batschelet_pdf", x, nu, lambda, regime, null_mask, null_count)
        .map_err(|e| e.with_context(&ctx))?;
    apply_kernel_std_to("inverse_batschelet_pdf", phases.as_slice(), output, null_mask, null_count, move |p| {
        inv_norm * scaled_von_mises(p, kappa)
    })
}

#[inline(always)]
pub fn inverse_batschelet_pdf_std(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        inverse_batschelet_pdf_std_to(x, kappa, nu, lambda, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn inverse_batschelet_cdf_std_to(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    inverse_batschelet_validate(kappa, nu, lambda)?;
    confirm_equal_len("inverse_batschelet_cdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let cfg = QuadConfig::default();
    let ctx = param_context(kappa, nu, lambda);
    let (regime, lambda) = skew_regime(lambda);
    let inv_norm = 1.0
        / normalising_integral(kappa, lambda, regime, &cfg)
            .map_err(|e| e.with_context(format_args!("inverse_batschelet_cdf({})", ctx)))?;
    // Every quadrature node needs its own pair of root solves. Phase 0 sits at T(0) = −2ν.
    let mode = -2.0 * nu;
    let density =
        move |t: f64| phase(mode + t, nu, lambda, regime).map(|p| inv_norm * scaled_von_mises(p, kappa));
    try_apply_kernel_std_to("inverse_batschelet_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, mode, density, &cfg)
    })
    .map_err(|e| e.with_context(ctx))
}

#[inline(always)]
pub fn inverse_batschelet_cdf_std(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        inverse_batschelet_cdf_std_to(x, kappa, nu, lambda, out, null_mask, null_count)
    })
}
