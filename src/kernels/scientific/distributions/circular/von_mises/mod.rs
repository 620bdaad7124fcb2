// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Von Mises Distribution Module** - *The Circular Normal*
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; κ, μ) = exp(κ cos(x − μ)) / (2π I₀(κ))
//! - **CDF**: F(x) = ∫₀ˣ f, by adaptive quadrature
//! - **Parameters**: κ ≥ 0 (concentration), μ ∈ [0, 2π] (mean direction)
//!
//! ## Numerical Notes
//! The density is evaluated as `exp(−2κ sin²((x − μ)/2)) / (2π I₀ₑ(κ))`, where
//! `I₀ₑ(κ) = e^(−κ) I₀(κ)`, so concentrations in the thousands neither overflow nor
//! lose the tails. κ = 0 is the circular uniform.

mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_location, require_non_negative,
};

/// Checks κ ≥ 0 (finite) and μ ∈ [0, 2π].
#[inline]
pub fn von_mises_validate(kappa: f64, mu: f64) -> Result<(), KernelError> {
    require_non_negative("von_mises", "kappa", kappa)?;
    require_location("von_mises", mu)
}

/// Computes the von Mises PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate
/// - `kappa`: Concentration κ ≥ 0
/// - `mu`: Mean direction μ ∈ [0, 2π]
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Example
/// ```rust,ignore
/// use circular_kernels::kernels::scientific::distributions::circular::von_mises::von_mises_pdf;
/// use minarrow::vec64;
///
/// let x = vec64![0.0];
/// let result = von_mises_pdf(&x, 2.0, 0.0, None, None).unwrap();
/// // [0.515885...] = e² / (2π I₀(2))
/// ```
#[inline(always)]
pub fn von_mises_pdf(
    x: &[f64],
    kappa: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::von_mises_pdf_std(x, kappa, mu, null_mask, null_count)
}

/// Von Mises PDF (zero-allocation variant).
#[inline(always)]
pub fn von_mises_pdf_to(
    x: &[f64],
    kappa: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::von_mises_pdf_std_to(x, kappa, mu, output, null_mask, null_count)
}

/// Computes the von Mises CDF by integrating the density from 0.
///
/// ## Errors
/// - `KernelError::InvalidParameter` for κ < 0 or μ outside [0, 2π]
/// - `KernelError::NonConvergence` if the quadrature exhausts its subdivision budget
#[inline(always)]
pub fn von_mises_cdf(
    x: &[f64],
    kappa: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::von_mises_cdf_std(x, kappa, mu, null_mask, null_count)
}

/// Von Mises CDF (zero-allocation variant).
#[inline(always)]
pub fn von_mises_cdf_to(
    x: &[f64],
    kappa: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::von_mises_cdf_std_to(x, kappa, mu, output, null_mask, null_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::circular::common::{
        assert_close, dense_data, single_null_mask,
    };
    use minarrow::vec64;

    const PI: f64 = ::std::f64::consts::PI;

    #[test]
    fn kappa_two_at_the_mode() {
        let y = von_mises_pdf(&[0.0], 2.0, 0.0, None, None).unwrap();
        // e² / (2π · 2.2795853023360673)
        assert_close(y.data[0], 0.5158854120190137, 1e-12);
    }

    #[test]
    fn kappa_zero_is_uniform() {
        let x = vec64![0.0, 2.0, 5.0];
        let y = dense_data(von_mises_pdf(&x, 0.0, 3.0, None, None).unwrap());
        for v in y.iter() {
            assert_close(*v, 1.0 / (2.0 * PI), 1e-15);
        }
    }

    #[test]
    fn huge_kappa_is_finite() {
        let y = von_mises_pdf(&[1.0, 1.0 + PI], 5000.0, 1.0, None, None).unwrap();
        // Peak ≈ √(κ/2π)
        assert_close(y.data[0] / (5000.0 / (2.0 * PI)).sqrt(), 1.0, 1e-4);
        assert_eq!(y.data[1], 0.0);
    }

    #[test]
    fn cdf_masked_lane_is_skipped() {
        let x = vec64![0.0, PI, 2.0 * PI];
        let mask = single_null_mask(3, 1);
        let arr = von_mises_cdf(&x, 1.5, 0.0, Some(&mask), Some(1)).unwrap();
        assert_close(arr.data[0], 0.0, 1e-12);
        assert!(arr.data[1].is_nan());
        assert_close(arr.data[2], 1.0, 1e-12);
    }

    #[test]
    fn negative_kappa() {
        let err = von_mises_pdf(&[0.0], -1.0, 0.0, None, None).unwrap_err();
        assert_eq!(
            err,
            KernelError::InvalidParameter("von_mises: kappa = -1 outside [0, ∞)".into())
        );
    }
}
