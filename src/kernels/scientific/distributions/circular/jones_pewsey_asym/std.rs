// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};
use tracing::trace;

use super::jones_pewsey_asym_validate;
use crate::config::{QuadConfig, ROOT_MAX_ITER, ROOT_XTOL};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, cdf_by_quadrature, collect_float_array, positive_normaliser,
    try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::circular::jones_pewsey::kernel::log_kernel;
use crate::kernels::scientific::distributions::shared::regime::Regime;
use crate::kernels::scientific::quadrature::try_quad_from_peak;
use crate::kernels::scientific::roots::newton_bracketed;
use crate::utils::confirm_equal_len;

const PI: f64 = ::std::f64::consts::PI;

/// Jones–Pewsey log kernel at the warped angle `x + ν cos x`.
#[inline(always)]
fn warped_log_kernel(xi: f64, kappa: f64, psi: f64, nu: f64, regime: Regime) -> f64 {
    log_kernel(xi + nu * xi.cos(), kappa, psi, regime)
}

/// Root of `x + ν cos x = 0` in `[−ν, 0]`: the angle the warp sends to the mode.
pub(super) fn warped_mode(nu: f64) -> Result<f64, KernelError> {
    if nu == 0.0 {
        return Ok(0.0);
    }
    newton_bracketed(
        |x| (x + nu * x.cos(), 1.0 - nu * x.sin()),
        -nu,
        0.0,
        -nu,
        ROOT_XTOL,
        ROOT_MAX_ITER,
    )
    .map_err(|e| e.with_context(format_args!("asymmetric jones-pewsey mode (nu = {})", nu)))
}

/// Warped angle at `x = mode + θ`, written so it stays relative to θ as θ → 0:
/// `θ − 2ν sin(mode + θ/2) sin(θ/2)`.
#[inline(always)]
fn warped_offset(theta: f64, nu: f64, mode: f64) -> f64 {
    let half = 0.5 * theta;
    theta - 2.0 * nu * (mode + half).sin() * half.sin()
}

/// `∫₋π^π e^L(x + ν cos x) dx`, over the period starting at the warped mode.
///
/// Warping breaks the evenness the symmetric family relies on, so both half periods
/// are integrated outward from the mode.
pub(super) fn asym_normalising_integral(
    kappa: f64,
    psi: f64,
    nu: f64,
    regime: Regime,
    cfg: &QuadConfig,
) -> Result<f64, KernelError> {
    let ctx = || {
        format!(
            "asymmetric jones-pewsey normalising integral (kappa = {}, psi = {}, nu = {})",
            kappa, psi, nu
        )
    };
    let mode = warped_mode(nu).map_err(|e| e.with_context(ctx()))?;
    let rel = cfg.relative();
    let half = |end: f64| {
        try_quad_from_peak(
            |t| Ok(log_kernel(warped_offset(t, nu, mode), kappa, psi, regime).exp()),
            0.0,
            end,
            &rel,
        )
    };
    let (right, left) = match (half(PI), half(-PI)) {
        (Ok(r), Ok(l)) => (r, l),
        (Err(e), _) | (_, Err(e)) => return Err(e.with_context(ctx())),
    };
    trace!(kappa, psi, nu, mode, right = right.value, left = -left.value, "asymmetric jones-pewsey integral");
    positive_normaliser(right.value - left.value).map_err(|e| e.with_context(ctx()))
}

/// Normalised density at the offset `θ` from the warped mode, and that mode.
#[inline]
fn asym_density(
    kappa: f64,
    psi: f64,
    nu: f64,
    cfg: &QuadConfig,
) -> Result<(impl Fn(f64) -> f64 + Copy + use<>, f64), KernelError> {
    let regime = Regime::select_shape(psi);
    let inv_norm = 1.0 / asym_normalising_integral(kappa, psi, nu, regime, cfg)?;
    let mode = warped_mode(nu)?;
    Ok((
        move |theta: f64| inv_norm * log_kernel(warped_offset(theta, nu, mode), kappa, psi, regime).exp(),
        mode,
    ))
}

#[inline]
fn param_context(kappa: f64, psi: f64, nu: f64) -> String {
    format!("kappa = {}, psi = {}, nu = {}", kappa, psi, nu)
}

#[inline(always)]
pub fn jones_pewsey_asym_kernel_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    jones_pewsey_asym_validate(kappa, psi, nu)?;
    let regime = Regime::select_shape(psi);
    collect_float_array(x, null_mask, |out| {
        apply_kernel_std_to("jones_pewsey_asym_kernel", x, out, null_mask, null_count, move |xi| {
            warped_log_kernel(xi, kappa, psi, nu, regime).exp()
        })
    })
}

#[inline(always)]
pub fn jones_pewsey_asym_pdf_std_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    jones_pewsey_asym_validate(kappa, psi, nu)?;
    confirm_equal_len("jones_pewsey_asym_pdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let (density, mode) = asym_density(kappa, psi, nu, &QuadConfig::default())
        .map_err(|e| e.with_context(format_args!("jones_pewsey_asym_pdf({})", param_context(kappa, psi, nu))))?;
    apply_kernel_std_to("jones_pewsey_asym_pdf", x, output, null_mask, null_count, move |xi| {
        density(xi - mode)
    })
}

#[inline(always)]
pub fn jones_pewsey_asym_pdf_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        jones_pewsey_asym_pdf_std_to(x, kappa, psi, nu, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn jones_pewsey_asym_cdf_std_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    jones_pewsey_asym_validate(kappa, psi, nu)?;
    confirm_equal_len("jones_pewsey_asym_cdf", x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let cfg = QuadConfig::default();
    let ctx = param_context(kappa, psi, nu);
    let (density, mode) = asym_density(kappa, psi, nu, &cfg)
        .map_err(|e| e.with_context(format_args!("jones_pewsey_asym_cdf({})", ctx)))?;
    try_apply_kernel_std_to("jones_pewsey_asym_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, mode, |t| Ok(density(t)), &cfg)
    })
    .map_err(|e| e.with_context(ctx))
}

#[inline(always)]
pub fn jones_pewsey_asym_cdf_std(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        jones_pewsey_asym_cdf_std_to(x, kappa, psi, nu, out, null_mask, null_count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::bessel::bessel_i0e;
    use crate::kernels::scientific::distributions::shared::constants::TWO_PI;
    use crate::kernels::scientific::quadrature::quad;

    #[test]
    fn nu_zero_integral_is_symmetric_closed_form() {
        let cfg = QuadConfig::default();
        let i = asym_normalising_integral(1.5, 0.0, 0.0, Regime::SymmetricLimit, &cfg).unwrap();
        assert!((i - TWO_PI * bessel_i0e(1.5)).abs() < 1e-10);
    }

    #[test]
    fn mode_solves_the_warp() {
        for &nu in &[0.0, 1e-9, 0.3, 0.99] {
            let m = warped_mode(nu).unwrap();
            assert!((m + nu * m.cos()).abs() < 1e-13, "nu = {nu}");
        }
    }

    #[test]
    fn offset_form_matches_warped_angle() {
        let (nu, mode) = (0.6, warped_mode(0.6).unwrap());
        for &t in &[-2.5, -0.3, 1e-6, 0.8, 3.0] {
            let x = mode + t;
            assert!((warped_offset(t, nu, mode) - (x + nu * x.cos())).abs() < 1e-12, "t = {t}");
        }
    }

    #[test]
    fn integral_matches_plain_quadrature_at_moderate_parameters() {
        let cfg = QuadConfig::default();
        let (kappa, psi, nu) = (2.0, -0.7, 0.4);
        let regime = Regime::select_shape(psi);
        let plain = quad(|t| warped_log_kernel(t, kappa, psi, nu, regime).exp(), -PI, PI, &cfg).unwrap();
        let i = asym_normalising_integral(kappa, psi, nu, regime, &cfg).unwrap();
        assert!((i / plain.value - 1.0).abs() < 1e-8);
    }

    #[test]
    fn small_kappa_is_not_forced_uniform() {
        // κ below the Jones–Pewsey uniform threshold still tilts the density
        let cfg = QuadConfig::default();
        let (density, mode) = asym_density(5e-4, 1.0, 0.5, &cfg).unwrap();
        let at = |x: f64| density(x - mode);
        // ψ = 1: cosh κ + sinh κ cos u
        let raw = |x: f64| 5e-4_f64.cosh() + 5e-4_f64.sinh() * (x + 0.5 * x.cos()).cos();
        let ratio = raw(0.0) / raw(PI);
        assert!((at(0.0) / at(PI) - ratio).abs() < 1e-12);
        assert!(ratio > 1.0 + 1e-4);
    }
}
