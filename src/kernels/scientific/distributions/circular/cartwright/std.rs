// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use super::cartwright_validate;
use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, cdf_by_quadrature, collect_float_array, try_apply_kernel_std_to,
};
use crate::kernels::scientific::distributions::shared::constants::{LN_2, LN_PI};
use crate::kernels::scientific::distributions::shared::scalar::{
    gamma_func, ln_gamma, one_plus_cos,
};

/// Largest argument for which Γ is finite in f64.
const GAMMA_DIRECT_MAX: f64 = 171.0;

/// Normalisation of the Cartwright density.
#[derive(Debug, Clone, Copy)]
enum Norm {
    /// Γ(1 + 2/ζ) is representable: `c · (1 + cos θ)^(1/ζ)`.
    Direct(f64),
    /// Log-space: `exp(ln c + ln(1 + cos θ)/ζ)`.
    Log(f64),
}

#[inline]
fn cartwright_norm(zeta: f64) -> Norm {
    let inv_z = 1.0 / zeta;
    if 1.0 + 2.0 * inv_z <= GAMMA_DIRECT_MAX {
        let g1 = gamma_func(1.0 + inv_z);
        Norm::Direct((inv_z - 1.0).exp2() * g1 * g1 / (::std::f64::consts::PI * gamma_func(1.0 + 2.0 * inv_z)))
    } else {
        Norm::Log(
            (inv_z - 1.0) * LN_2 + 2.0 * ln_gamma(1.0 + inv_z) - LN_PI - ln_gamma(1.0 + 2.0 * inv_z),
        )
    }
}

/// Scalar Cartwright density for fixed, validated parameters.
#[inline]
fn cartwright_density(zeta: f64, mu: f64) -> impl Fn(f64) -> f64 + Copy {
    let inv_z = 1.0 / zeta;
    let norm = cartwright_norm(zeta);
    move |xi: f64| {
        let base = one_plus_cos(xi - mu);
        match norm {
            Norm::Direct(c) => c * base.powf(inv_z),
            Norm::Log(ln_c) => (ln_c + inv_z * base.ln()).exp(),
        }
    }
}

#[inline(always)]
pub fn cartwright_pdf_std_to(
    x: &[f64],
    zeta: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    cartwright_validate(zeta, mu)?;
    apply_kernel_std_to("cartwright_pdf", x, output, null_mask, null_count, cartwright_density(zeta, mu))
}

#[inline(always)]
pub fn cartwright_pdf_std(
    x: &[f64],
    zeta: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        cartwright_pdf_std_to(x, zeta, mu, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn cartwright_cdf_std_to(
    x: &[f64],
    zeta: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    cartwright_validate(zeta, mu)?;
    let density = cartwright_density(zeta, mu);
    let cfg = QuadConfig::default();
    try_apply_kernel_std_to("cartwright_cdf", x, output, null_mask, null_count, |xi| {
        cdf_by_quadrature(xi, mu, |t| Ok(density(mu + t)), &cfg)
    })
    .map_err(|e| e.with_context(format_args!("zeta = {}, mu = {}", zeta, mu)))
}

#[inline(always)]
pub fn cartwright_cdf_std(
    x: &[f64],
    zeta: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        cartwright_cdf_std_to(x, zeta, mu, out, null_mask, null_count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_and_log_constants_agree() {
        for &zeta in &[0.05, 0.3, 1.0, 4.0] {
            let inv_z = 1.0 / zeta;
            let ln_c = (inv_z - 1.0) * LN_2 + 2.0 * ln_gamma(1.0 + inv_z)
                - LN_PI
                - ln_gamma(1.0 + 2.0 * inv_z);
            match cartwright_norm(zeta) {
                Norm::Direct(c) => assert!((c.ln() - ln_c).abs() < 1e-12, "zeta = {zeta}"),
                Norm::Log(_) => panic!("zeta = {zeta} should use the direct constant"),
            }
        }
        assert!(matches!(cartwright_norm(0.01), Norm::Log(_)));
    }
}
