// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Inverse Batschelet Distribution Module** - *Implicitly Transformed von Mises*
//!
//! A von Mises density evaluated after two inverse angle maps, giving independent
//! control of peakedness (ν) and skewness (λ).
//!
//! ## Mathematical Definition
//! - **Phase**: `arg1 = T⁻¹(x)`, `arg2 = S⁻¹(arg1)`,
//!   `φ = c1·arg1 + c2·arg2` with `c1 = (1−λ)/(1+λ)`, `c2 = 2λ/(1+λ)`
//! - **PDF**: f(x; κ, ν, λ) = c · exp(κ cos φ)
//! - **CDF**: F(x) = ∫₀ˣ f
//! - **Parameters**: κ ≥ 0, ν ∈ [−1, 1], λ ∈ [−1, 1]
//!
//! ## Regimes in λ
//! - λ ≈ −1: the skew map is the identity and `φ = arg1 − sin(arg1)`; no second solve
//! - λ ≈ 1: `c = 1/(2π(I₀(κ) − I₁(κ)))` in closed form
//! - otherwise `c` comes from one vector quadrature (see `std::normalising_integral`)
//!
//! The constant does not depend on ν. λ within `isclose` of ±1 is treated as exactly ±1.
//!
//! ## Root solving
//! Every density evaluation solves `T(z) = x`, and outside λ ≈ −1 also `S(w) = arg1`,
//! per element. A failing element aborts the call with `NonConvergence` naming the
//! number of failed elements and the first failing `x`.

mod std;
mod transform;

use minarrow::{Bitmask, FloatArray};

use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_closed, require_non_negative,
};

/// Checks κ ≥ 0, ν ∈ [−1, 1] and λ ∈ [−1, 1].
#[inline]
pub fn inverse_batschelet_validate(kappa: f64, nu: f64, lambda: f64) -> Result<(), KernelError> {
    require_non_negative("inverse_batschelet", "kappa", kappa)?;
    require_closed("inverse_batschelet", "nu", nu, -1.0, 1.0)?;
    require_closed("inverse_batschelet", "lambda", lambda, -1.0, 1.0)
}

/// Peak-scaled kernel `exp(κ(cos φ − 1))`, with the per-element root solves.
#[inline(always)]
pub fn inverse_batschelet_kernel(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::inverse_batschelet_kernel_std(x, kappa, nu, lambda, null_mask, null_count)
}

/// Normalising constant of the peak-scaled kernel for `(κ, λ)`.
pub fn inverse_batschelet_normalising_constant(kappa: f64, lambda: f64) -> Result<f64, KernelError> {
    inverse_batschelet_validate(kappa, 0.0, lambda)?;
    let (regime, lambda) = std::skew_regime(lambda);
    std::normalising_integral(kappa, lambda, regime, &QuadConfig::default()).map(|i| 1.0 / i)
}

/// Computes the inverse Batschelet PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate
/// - `kappa`: Concentration κ ≥ 0
/// - `nu`: Peakedness ν ∈ [−1, 1]
/// - `lambda`: Skewness λ ∈ [−1, 1]
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Errors
/// - `KernelError::InvalidParameter` for out-of-domain parameters
/// - `KernelError::NonConvergence` if the normalising quadrature or any element's root
///   solve fails
#[inline(always)]
pub fn inverse_batschelet_pdf(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::inverse_batschelet_pdf_std(x, kappa, nu, lambda, null_mask, null_count)
}

/// Inverse Batschelet PDF (zero-allocation variant).
#[inline(always)]
pub fn inverse_batschelet_pdf_to(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::inverse_batschelet_pdf_std_to(x, kappa, nu, lambda, output, null_mask, null_count)
}

/// Computes the inverse Batschelet CDF.
///
/// Each quadrature node re-solves the transforms, so this is considerably more
/// expensive than the density.
#[inline(always)]
pub fn inverse_batschelet_cdf(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::inverse_batschelet_cdf_std(x, kappa, nu, lambda, null_mask, null_count)
}

/// Inverse Batschelet CDF (zero-allocation variant).
#[inline(always)]
pub fn inverse_batschelet_cdf_to(
    x: &[f64],
    kappa: f64,
    nu: f64,
    lambda: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::inverse_batschelet_cdf_std_to(x, kappa, nu, lambda, output, null_mask, null_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::bessel::bessel_i0;
    use crate::kernels::scientific::distributions::circular::common::{
        assert_close, dense_data, single_null_mask,
    };
    use crate::kernels::scientific::distributions::circular::von_mises_flat_top::von_mises_flat_top_pdf;
    use minarrow::vec64;

    const PI: f64 = ::std::f64::consts::PI;

    #[test]
    fn identity_branch_matches_flat_top() {
        let x = vec64![-3.0, -1.2, 0.0, 0.4, 1.7, 3.1];
        for &kappa in &[0.5, 2.0, 6.0] {
            let ib = dense_data(inverse_batschelet_pdf(&x, kappa, 0.0, -1.0, None, None).unwrap());
            let ft = dense_data(von_mises_flat_top_pdf(&x, kappa, -1.0, 0.0, None, None).unwrap());
            for i in 0..x.len() {
                assert_close(ib[i], ft[i], 1e-6);
            }
        }
    }

    #[test]
    fn nu_and_lambda_zero_is_von_mises() {
        let x = vec64![0.0, 1.0, 2.5];
        let y = dense_data(inverse_batschelet_pdf(&x, 1.5, 0.0, 0.0, None, None).unwrap());
        for (i, &xi) in x.iter().enumerate() {
            assert_close(y[i], (1.5 * xi.cos()).exp() / (2.0 * PI * bessel_i0(1.5)), 1e-9);
        }
    }

    #[test]
    fn constant_continuous_at_closed_form_edge() {
        let a = inverse_batschelet_normalising_constant(1.0, 1.0).unwrap();
        let b = inverse_batschelet_normalising_constant(1.0, 1.0 - 2e-5).unwrap();
        assert!((a / b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn masked_pdf_and_cdf() {
        let x = vec64![0.0, 1.0, 2.0 * PI];
        let mask = single_null_mask(3, 1);
        let p = inverse_batschelet_pdf(&x, 2.0, 0.5, 0.3, Some(&mask), Some(1)).unwrap();
        assert!(p.data[0] > 0.0 && p.data[1].is_nan() && p.data[2] > 0.0);
        let c = inverse_batschelet_cdf(&x, 2.0, 0.5, 0.3, Some(&mask), Some(1)).unwrap();
        assert_close(c.data[0], 0.0, 1e-12);
        assert!(c.data[1].is_nan());
        assert_close(c.data[2], 1.0, 1e-12);
    }

    #[test]
    fn invalid_parameters_fail_fast() {
        assert!(inverse_batschelet_pdf(&[0.0], -1.0, 0.0, 0.0, None, None).unwrap_err().is_invalid_parameter());
        assert!(inverse_batschelet_pdf(&[0.0], 1.0, 1.5, 0.0, None, None).unwrap_err().is_invalid_parameter());
        assert!(inverse_batschelet_pdf(&[0.0], 1.0, 0.0, -2.0, None, None).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn empty_input() {
        let y = inverse_batschelet_pdf(&[], 1.0, 0.2, 0.2, None, None).unwrap();
        assert_eq!(y.data.len(), 0);
    }
}
