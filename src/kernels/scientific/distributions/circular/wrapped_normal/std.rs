// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};
use tracing::debug;

use super::wrapped_normal_validate;
use crate::config::{QuadConfig, WRAPPED_NORMAL_SIGMA_SWITCH};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, cdf_by_quadrature, collect_float_array, try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::shared::constants::{
    INV_TWO_PI, SQRT_2PI, TWO_PI,
};
use crate::kernels::scientific::distributions::shared::scalar::wrap_to_pi;

/// Term budget of the Fourier series; ρ^(p²) is below 1e−17 well before this for σ ≥ 1.
const FOURIER_MAX_TERMS: usize = 64;
const FOURIER_CUTOFF: f64 = 1e-17;

/// Wraps either side of the reduced angle; for σ < 1 the next image is below e^(−120).
const GAUSSIAN_IMAGES: i32 = 4;

#[inline]
fn fourier_sum(theta: f64, rho: f64) -> f64 {
    let ln_rho = rho.ln();
    let mut acc = 0.0;
    for p in 1..=FOURIER_MAX_TERMS {
        let pf = p as f64;
        let w = (pf * pf * ln_rho).exp();
        if w < FOURIER_CUTOFF {
            break;
        }
        acc += w * (pf * theta).cos();
    }
    (1.0 + 2.0 * acc) * INV_TWO_PI
}

#[inline]
fn gaussian_images(theta: f64, sigma: f64) -> f64 {
    let t = wrap_to_pi(theta);
    let inv_s = 1.0 / sigma;
    let mut acc = 0.0;
    for k in -GAUSSIAN_IMAGES..=GAUSSIAN_IMAGES {
        let z = (t + TWO_PI * k as f64) * inv_s;
        acc += (-0.5 * z * z).exp();
    }
    acc * inv_s / SQRT_2PI
}

/// Scalar wrapped normal density for fixed, validated parameters.
#[inline]
fn wrapped_normal_density(rho: f64, mu: f64) -> impl Fn(f64) -> f64 + Copy {
    let sigma = if rho > 0.0 { (-2.0 * rho.ln()).sqrt() } else { f64::INFINITY };
    let use_fourier = sigma >= WRAPPED_NORMAL_SIGMA_SWITCH;
    debug!(rho, sigma, use_fourier, "wrapped normal series selected");
    move |xi: f64| {
        if !xi.is_finite() {
            return f64::NAN;
        }
        let theta = xi - mu;
        if rho == 0.0 {
            INV_TWO_PI
        } else if use_fourier {
            fourier_sum(theta, rho)
        } else {
            gaussian_images(theta, sigma)
        }
    }
}

#[inline(always)]
pub fn wrapped_normal_pdf_std_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    wrapped_normal_validate(rho, mu)?;
    apply_kernel_std_to(
        "wrapped_normal_pdf",
        x,
        output,
        null_mask,
        null_count,
        wrapped_normal_density(rho, mu),
    )
}

#[inline(always)]
pub fn wrapped_normal_pdf_std(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        wrapped_normal_pdf_std_to(x, rho, mu, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn wrapped_normal_cdf_std_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    wrapped_normal_validate(rho, mu)?;
    let density = wrapped_normal_density(rho, mu);
    let cfg = QuadConfig::default();
    try_apply_kernel_std_to("wrapped_normal_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, mu, |t| Ok(density(mu + t)), &cfg)
    })
    .map_err(|e| e.with_context(format_args!("rho = {}, mu = {}", rho, mu)))
}

#[inline(always)]
pub fn wrapped_normal_cdf_std(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        wrapped_normal_cdf_std_to(x, rho, mu, out, null_mask, null_count)
    })
}
