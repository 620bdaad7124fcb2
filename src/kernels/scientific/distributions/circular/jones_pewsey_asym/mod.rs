// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Asymmetric-Extended Jones–Pewsey Distribution Module**
//!
//! The Jones–Pewsey kernel evaluated at the warped angle `x + ν cos x`, which tilts the
//! peak without moving the support.
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; κ, ψ, ν) = k(x + ν cos x; κ, ψ, 0) / ∫₋π^π k(t + ν cos t; κ, ψ, 0) dt
//! - **CDF**: F(x) = ∫₀ˣ f
//! - **Parameters**: κ ≥ 0, ψ ∈ ℝ, ν ∈ [0, 1)
//!
//! The ψ ≈ 0 von Mises limit carries over at the warped angle. The κ < 0.001 uniform
//! override does not: small κ keeps its (slight) tilt, and κ = 0 is exactly uniform
//! through the general branch. The normalising integral always needs quadrature, run
//! outward from the warped mode `x* + ν cos x* = 0`.

mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_finite, require_half_open, require_non_negative,
};

/// Checks κ ≥ 0, ψ finite and ν ∈ [0, 1).
#[inline]
pub fn jones_pewsey_asym_validate(kappa: f64, psi: f64, nu: f64) -> Result<(), KernelError> {
    require_non_negative("jones_pewsey_asym", "kappa", kappa)?;
    require_finite("jones_pewsey_asym", "psi", psi)?;
    require_half_open("jones_pewsey_asym", "nu", nu, 0.0, 1.0)
}

/// Peak-scaled kernel `e^(−κ) k(x + ν cos x; κ, ψ, 0)`. Not normalised.
#[inline(always)]
pub fn jones_pewsey_asym_kernel(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_asym_kernel_std(x, kappa, psi, nu, null_mask, null_count)
}

/// Computes the asymmetric-extended Jones–Pewsey PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate
/// - `kappa`: Concentration κ ≥ 0
/// - `psi`: Shape ψ (any finite real)
/// - `nu`: Asymmetry ν ∈ [0, 1)
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Errors
/// - `KernelError::InvalidParameter` for out-of-domain parameters
/// - `KernelError::NonConvergence` if the normalising quadrature fails
#[inline(always)]
pub fn jones_pewsey_asym_pdf(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_asym_pdf_std(x, kappa, psi, nu, null_mask, null_count)
}

/// Asymmetric-extended Jones–Pewsey PDF (zero-allocation variant).
#[inline(always)]
pub fn jones_pewsey_asym_pdf_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::jones_pewsey_asym_pdf_std_to(x, kappa, psi, nu, output, null_mask, null_count)
}

/// Computes the asymmetric-extended Jones–Pewsey CDF.
#[inline(always)]
pub fn jones_pewsey_asym_cdf(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::jones_pewsey_asym_cdf_std(x, kappa, psi, nu, null_mask, null_count)
}

/// Asymmetric-extended Jones–Pewsey CDF (zero-allocation variant).
#[inline(always)]
pub fn jones_pewsey_asym_cdf_to(
    x: &[f64],
    kappa: f64,
    psi: f64,
    nu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::jones_pewsey_asym_cdf_std_to(x, kappa, psi, nu, output, null_mask, null_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::circular::common::assert_close;
    use crate::kernels::scientific::distributions::circular::jones_pewsey::jones_pewsey_pdf;
    use minarrow::vec64;

    const PI: f64 = ::std::f64::consts::PI;

    #[test]
    fn nu_zero_is_jones_pewsey() {
        let x = vec64![0.0, 0.9, 3.0];
        let a = jones_pewsey_asym_pdf(&x, 2.0, 0.5, 0.0, None, None).unwrap();
        let b = jones_pewsey_pdf(&x, 2.0, 0.5, 0.0, None, None).unwrap();
        for i in 0..x.len() {
            assert_close(a.data[i], b.data[i], 1e-9);
        }
    }

    #[test]
    fn warping_breaks_symmetry() {
        let y = jones_pewsey_asym_pdf(&[1.0, -1.0], 2.0, 0.0, 0.6, None, None).unwrap();
        assert!((y.data[0] - y.data[1]).abs() > 1e-3);
    }

    #[test]
    fn kappa_zero_is_uniform() {
        let y = jones_pewsey_asym_pdf(&[0.4, 2.2], 0.0, 1.0, 0.5, None, None).unwrap();
        assert_close(y.data[0], 1.0 / (2.0 * PI), 1e-15);
        assert_close(y.data[1], 1.0 / (2.0 * PI), 1e-15);
    }

    #[test]
    fn nu_one_rejected() {
        let err = jones_pewsey_asym_pdf(&[0.0], 1.0, 0.0, 1.0, None, None).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn cdf_reaches_one() {
        let y = jones_pewsey_asym_cdf(&[0.0, 2.0 * PI], 1.0, -0.5, 0.3, None, None).unwrap();
        assert_close(y.data[0], 0.0, 1e-12);
        assert_close(y.data[1], 1.0, 1e-7);
    }
}
