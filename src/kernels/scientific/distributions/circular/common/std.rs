// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::scalar::split_turns;
use crate::kernels::scientific::quadrature::try_quad_from_peak;
use crate::utils::{confirm_equal_len, has_nulls};

const PI: f64 = ::std::f64::consts::PI;

/// Dense kernel helper (zero-allocation variant).
///
/// ### Null handling
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, without `nulling` them in the (optional) mask.
#[inline(always)]
pub fn dense_circular_kernel_f64_std_to<FScalar>(x: &[f64], out: &mut [f64], scalar_body: FScalar)
where
    FScalar: Fn(f64) -> f64,
{
    for (o, &xi) in out.iter_mut().zip(x) {
        *o = scalar_body(xi);
    }
}

/// Null-aware masked kernel helper (zero-allocation variant).
///
/// Null lanes are written as `NaN` and left unset in `out_mask`; the body is not called
/// for them.
#[inline(always)]
pub fn masked_circular_kernel_f64_std_to<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    out: &mut [f64],
    out_mask: &mut Bitmask,
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64,
{
    for (idx, (o, &xi)) in out.iter_mut().zip(x).enumerate() {
        if mask.get(idx) {
            *o = scalar_body(xi);
            out_mask.set(idx, true);
        } else {
            *o = f64::NAN;
            out_mask.set(idx, false);
        }
    }
}

/// Dense helper for bodies that can fail (quadrature, root finding).
///
/// Stops at the first failing lane and reports its `x`.
#[inline(always)]
pub fn dense_fallible_kernel_f64_std_to<FScalar>(
    x: &[f64],
    out: &mut [f64],
    mut scalar_body: FScalar,
) -> Result<(), KernelError>
where
    FScalar: FnMut(f64) -> Result<f64, KernelError>,
{
    for (o, &xi) in out.iter_mut().zip(x) {
        *o = scalar_body(xi).map_err(|e| e.with_context(format_args!("x = {}", xi)))?;
    }
    Ok(())
}

/// Null-aware helper for bodies that can fail.
///
/// Null lanes never reach the body, so no numeric work is done for them.
#[inline(always)]
pub fn masked_fallible_kernel_f64_std_to<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    out: &mut [f64],
    out_mask: &mut Bitmask,
    mut scalar_body: FScalar,
) -> Result<(), KernelError>
where
    FScalar: FnMut(f64) -> Result<f64, KernelError>,
{
    for (idx, (o, &xi)) in out.iter_mut().zip(x).enumerate() {
        if mask.get(idx) {
            *o = scalar_body(xi).map_err(|e| e.with_context(format_args!("x = {}", xi)))?;
            out_mask.set(idx, true);
        } else {
            *o = f64::NAN;
            out_mask.set(idx, false);
        }
    }
    Ok(())
}

/// Resolves the mask for a null-aware call, rejecting a positive `null_count`
/// supplied without a mask.
#[inline(always)]
fn require_mask<'a>(
    fname: &str,
    null_mask: Option<&'a Bitmask>,
) -> Result<&'a Bitmask, KernelError> {
    null_mask.ok_or_else(|| {
        KernelError::InvalidParameter(format!("{}: null_count > 0 requires null_mask", fname))
    })
}

/// Applies an infallible scalar body over `x` into `output`, dense or null-aware.
#[inline(always)]
pub fn apply_kernel_std_to<FScalar>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<(), KernelError>
where
    FScalar: Fn(f64) -> f64,
{
    confirm_equal_len(fname, x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    if !has_nulls(null_count, null_mask) {
        dense_circular_kernel_f64_std_to(x, output, scalar_body);
        return Ok(());
    }
    let mask = require_mask(fname, null_mask)?;
    let mut out_mask = mask.clone();
    masked_circular_kernel_f64_std_to(x, mask, output, &mut out_mask, scalar_body);
    Ok(())
}

/// Applies a fallible scalar body over `x` into `output`, dense or null-aware.
///
/// Errors carry `fname` and the failing `x`.
#[inline(always)]
pub fn try_apply_kernel_std_to<FScalar>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<(), KernelError>
where
    FScalar: FnMut(f64) -> Result<f64, KernelError>,
{
    confirm_equal_len(fname, x.len(), output.len())?;
    if x.is_empty() {
        return Ok(());
    }
    let res = if !has_nulls(null_count, null_mask) {
        dense_fallible_kernel_f64_std_to(x, output, scalar_body)
    } else {
        let mask = require_mask(fname, null_mask)?;
        let mut out_mask = mask.clone();
        masked_fallible_kernel_f64_std_to(x, mask, output, &mut out_mask, scalar_body)
    };
    res.map_err(|e| e.with_context(fname))
}

/// Allocates a 64-byte aligned output, fills it with `fill`, and wraps it with the
/// input null mask.
#[inline(always)]
pub fn collect_float_array<F>(
    x: &[f64],
    null_mask: Option<&Bitmask>,
    fill: F,
) -> Result<FloatArray<f64>, KernelError>
where
    F: FnOnce(&mut [f64]) -> Result<(), KernelError>,
{
    let len = x.len();
    if len == 0 {
        // `fill` still runs so parameter validation is not skipped.
        fill(&mut [])?;
        return Ok(FloatArray::from_slice(&[]));
    }
    let mut out = Vec64::with_capacity(len);
    out.resize(len, 0.0);
    fill(out.as_mut_slice())?;
    Ok(FloatArray::from_vec64(out, null_mask.cloned()))
}

/// Accepts a normalising integral only if its reciprocal is a usable density scale.
#[inline]
pub fn positive_normaliser(value: f64) -> Result<f64, KernelError> {
    if value >= f64::MIN_POSITIVE && value.is_finite() {
        Ok(value)
    } else {
        Err(KernelError::NonConvergence(format!(
            "normalising integral {:e} is not a positive finite number",
            value
        )))
    }
}

/// `∫ₗʰ g` for a 2π-periodic `g` whose hard points sit at the multiples of 2π.
///
/// Split at every multiple of π; each piece is the difference of two integrals run
/// outward from the peak at its even end, evaluated in offsets from that peak.
fn periodic_integral<G>(g: &mut G, lo: f64, hi: f64, cfg: &QuadConfig) -> Result<f64, KernelError>
where
    G: FnMut(f64) -> Result<f64, KernelError>,
{
    let mut from_peak = |d: f64| try_quad_from_peak(&mut *g, 0.0, d, cfg).map(|out| out.value);
    let mut total = 0.0;
    let mut p = lo;
    let mut k = (lo / PI).floor() + 1.0;
    while p < hi {
        let q = (k * PI).min(hi);
        if q > p {
            let peak = if k.rem_euclid(2.0) == 0.0 { k * PI } else { (k - 1.0) * PI };
            total += from_peak(q - peak)? - from_peak(p - peak)?;
            p = q;
        }
        k += 1.0;
    }
    Ok(total)
}

/// Cumulative value `∫₀ˣ f` for a normalised density given around its peak:
/// `density(θ) = f(mode + θ)`.
///
/// Whole turns contribute exactly one each, so only the remainder in `[0, 2π)` is
/// integrated: `F(x + 2π) = F(x) + 1`. The remainder is integrated in offsets from the
/// mode, outward from each copy of it, so spikes and integrable singularities there
/// keep full resolution.
#[inline(always)]
pub fn cdf_by_quadrature<P>(xi: f64, mode: f64, mut density: P, cfg: &QuadConfig) -> Result<f64, KernelError>
where
    P: FnMut(f64) -> Result<f64, KernelError>,
{
    if xi.is_nan() {
        return Ok(f64::NAN);
    }
    if xi.is_infinite() {
        return Ok(if xi > 0.0 { f64::INFINITY } else { f64::NEG_INFINITY });
    }
    let (turns, rem) = split_turns(xi);
    let mode = mode.rem_euclid(2.0 * PI);
    let partial = periodic_integral(&mut density, -mode, rem - mode, cfg)?;
    Ok(turns + partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::circular::common::single_null_mask;

    #[test]
    fn masked_lanes_skip_the_body() {
        let x = [1.0, 2.0, 3.0];
        let mask = single_null_mask(3, 1);
        let mut out = [0.0; 3];
        let mut calls = 0usize;
        try_apply_kernel_std_to("t", &x, &mut out, Some(&mask), Some(1), |v| {
            calls += 1;
            Ok(v * 2.0)
        })
        .unwrap();
        assert_eq!(calls, 2);
        assert_eq!(out[0], 2.0);
        assert!(out[1].is_nan());
        assert_eq!(out[2], 6.0);
    }

    #[test]
    fn failure_reports_function_and_x() {
        let x = [0.5, 1.5];
        let mut out = [0.0; 2];
        let err = try_apply_kernel_std_to("demo_pdf", &x, &mut out, None, None, |v| {
            if v > 1.0 {
                Err(KernelError::NonConvergence("stuck".into()))
            } else {
                Ok(v)
            }
        })
        .unwrap_err();
        assert_eq!(err, KernelError::NonConvergence("demo_pdf: x = 1.5: stuck".into()));
    }

    #[test]
    fn count_without_mask_is_rejected() {
        let x = [0.5];
        let mut out = [0.0];
        let err = apply_kernel_std_to("demo_pdf", &x, &mut out, None, Some(1), |v| v).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn output_length_is_checked() {
        let x = [0.5, 1.0];
        let mut out = [0.0];
        let err = apply_kernel_std_to("demo_pdf", &x, &mut out, None, None, |v| v).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
    }

    #[test]
    fn cdf_counts_whole_turns() {
        let cfg = QuadConfig::default();
        let uniform = |_: f64| Ok(1.0 / std::f64::consts::TAU);
        let tau = std::f64::consts::TAU;
        assert!((cdf_by_quadrature(tau, 1.0, uniform, &cfg).unwrap() - 1.0).abs() < 1e-14);
        assert!((cdf_by_quadrature(-tau / 4.0, 3.0, uniform, &cfg).unwrap() + 0.25).abs() < 1e-12);
        assert!((cdf_by_quadrature(2.5 * tau, 0.2, uniform, &cfg).unwrap() - 2.5).abs() < 1e-12);
        assert!(cdf_by_quadrature(f64::NAN, 0.0, uniform, &cfg).unwrap().is_nan());
    }

    #[test]
    fn cdf_resolves_a_singular_mode() {
        // |sin(θ/2)|^(−0.8) / c, with c = 2√π Γ(0.1)/Γ(0.6)
        let c = 22.646173950431514;
        let density = |t: f64| Ok((0.5 * t).sin().abs().powf(-0.8) / c);
        let cfg = QuadConfig::default();
        let cdf = |x: f64| cdf_by_quadrature(x, 5.0, density, &cfg).unwrap();
        let tau = std::f64::consts::TAU;
        assert!((cdf(tau - 1e-9) - 1.0).abs() < 1e-7, "{}", cdf(tau - 1e-9));
        assert!((cdf(5.0) - cdf(5.0 - 0.5 * tau) - 0.5).abs() < 1e-8);
        assert!(cdf(5.0 - 1e-12) < cdf(5.0 + 1e-12));
        // mode given off the principal turn
        assert!((cdf_by_quadrature(1.0, 5.0 + 3.0 * tau, density, &cfg).unwrap() - cdf(1.0)).abs() < 1e-12);
    }

    #[test]
    fn normaliser_must_be_positive_and_finite() {
        assert_eq!(positive_normaliser(0.25), Ok(0.25));
        for bad in [0.0, 1e-320, -1.0, f64::INFINITY, f64::NAN] {
            assert!(positive_normaliser(bad).unwrap_err().is_non_convergence(), "{bad}");
        }
    }

    #[test]
    fn dense_driver_writes_every_lane() {
        let x = [0.5, -1.0, 2.0];
        let mut out = [0.0; 3];
        dense_circular_kernel_f64_std_to(&x, &mut out, |v| v.cos());
        for (o, v) in out.iter().zip(x) {
            assert_eq!(*o, v.cos());
        }
        let mask = single_null_mask(3, 0);
        let mut out_mask = mask.clone();
        masked_circular_kernel_f64_std_to(&x, &mask, &mut out, &mut out_mask, |v| v.cos());
        assert!(out[0].is_nan() && !out_mask.get(0));
        assert_eq!(out[2], 2.0_f64.cos());
    }
}
