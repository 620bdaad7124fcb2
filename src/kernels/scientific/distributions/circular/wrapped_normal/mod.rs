// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Wrapped Normal Distribution Module** - *Gaussian Wrapped onto the Circle*
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; ρ, μ) = (1 + 2 Σ_{p≥1} ρ^(p²) cos(p(x − μ))) / (2π)
//!   equivalently Σ_k φ((x − μ + 2πk)/σ)/σ with σ = √(−2 ln ρ)
//! - **CDF**: F(x) = ∫₀ˣ f, by adaptive quadrature
//! - **Parameters**: ρ ∈ [0, 1) (mean resultant length), μ ∈ [0, 2π]
//!
//! The Fourier series converges fast for wide distributions (σ ≥ 1), the wrapped
//! Gaussian sum for narrow ones. Both are truncated at a fixed term budget.

mod std;

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::params::{
    require_half_open, require_location,
};

/// Checks ρ ∈ [0, 1) and μ ∈ [0, 2π].
///
/// ρ = 0 is the circular uniform; ρ = 1 is a point mass and is rejected.
#[inline]
pub fn wrapped_normal_validate(rho: f64, mu: f64) -> Result<(), KernelError> {
    require_half_open("wrapped_normal", "rho", rho, 0.0, 1.0)?;
    require_location("wrapped_normal", mu)
}

/// Computes the wrapped normal PDF.
///
/// ## Parameters
/// - `x`: Angles to evaluate
/// - `rho`: Mean resultant length ρ ∈ [0, 1)
/// - `mu`: Mean direction μ ∈ [0, 2π]
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Example
/// ```rust,ignore
/// use circular_kernels::kernels::scientific::distributions::circular::wrapped_normal::wrapped_normal_pdf;
/// use minarrow::vec64;
///
/// let x = vec64![0.0, 3.0];
/// let result = wrapped_normal_pdf(&x, 0.5, 0.0, None, None).unwrap();
/// ```
#[inline(always)]
pub fn wrapped_normal_pdf(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::wrapped_normal_pdf_std(x, rho, mu, null_mask, null_count)
}

/// Wrapped normal PDF (zero-allocation variant).
#[inline(always)]
pub fn wrapped_normal_pdf_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::wrapped_normal_pdf_std_to(x, rho, mu, output, null_mask, null_count)
}

/// Computes the wrapped normal CDF by integrating the density from 0.
#[inline(always)]
pub fn wrapped_normal_cdf(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::wrapped_normal_cdf_std(x, rho, mu, null_mask, null_count)
}

/// Wrapped normal CDF (zero-allocation variant).
#[inline(always)]
pub fn wrapped_normal_cdf_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::wrapped_normal_cdf_std_to(x, rho, mu, output, null_mask, null_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::circular::common::{assert_close, dense_data};
    use minarrow::vec64;

    const PI: f64 = ::std::f64::consts::PI;

    #[test]
    fn rho_zero_is_uniform() {
        let x = vec64![0.0, 1.0, 4.0];
        let y = dense_data(wrapped_normal_pdf(&x, 0.0, 1.0, None, None).unwrap());
        for v in y.iter() {
            assert_close(*v, 1.0 / (2.0 * PI), 1e-15);
        }
    }

    #[test]
    fn both_series_agree_at_the_switch() {
        // σ = 1 exactly: ρ = e^(-1/2).
        let rho = (-0.5_f64).exp();
        let below = rho * (1.0 - 1e-12);
        let above = rho * (1.0 + 1e-12);
        for &xi in &[0.0, 0.7, 2.0, PI] {
            let a = wrapped_normal_pdf(&[xi], below, 0.0, None, None).unwrap().data[0];
            let b = wrapped_normal_pdf(&[xi], above, 0.0, None, None).unwrap().data[0];
            assert_close(a, b, 1e-10);
        }
    }

    #[test]
    fn narrow_matches_gaussian_peak() {
        // σ = 0.1: essentially an unwrapped normal.
        let rho = (-0.5_f64 * 0.01).exp();
        let y = wrapped_normal_pdf(&[0.5], rho, 0.5, None, None).unwrap().data[0];
        assert_close(y, 1.0 / (0.1 * (2.0 * PI).sqrt()), 1e-10);
    }

    #[test]
    fn cdf_is_half_at_antimode_of_centred() {
        let x = vec64![0.0, PI, 2.0 * PI];
        let y = dense_data(wrapped_normal_cdf(&x, 0.6, 0.0, None, None).unwrap());
        assert_close(y[0], 0.0, 1e-12);
        assert_close(y[1], 0.5, 1e-7);
        assert_close(y[2], 1.0, 1e-12);
    }

    #[test]
    fn rho_one_rejected() {
        assert!(wrapped_normal_pdf(&[0.0], 1.0, 0.0, None, None).unwrap_err().is_invalid_parameter());
    }
}
