// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Wrapped Cauchy Distribution SIMD Implementation**
//!
//! Vectorised rational density for dense, 64-byte aligned inputs. The CDF stays scalar.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use std::simd::{Simd, StdFloat};

use minarrow::{Bitmask, FloatArray};

use super::std::wrapped_cauchy_density;
use super::wrapped_cauchy_validate;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::simd::apply_kernel_simd_to;
use crate::kernels::scientific::distributions::circular::common::std::collect_float_array;
use crate::kernels::scientific::distributions::shared::constants::INV_TWO_PI;

/// SIMD-accelerated wrapped Cauchy PDF (zero-allocation variant).
///
/// f(x; ρ, μ) = (1 − ρ²) / (2π ((1 − ρ)² + 4ρ sin²((x − μ)/2)))
#[inline(always)]
pub fn wrapped_cauchy_pdf_simd_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    wrapped_cauchy_validate(rho, mu)?;

    const N: usize = W64;

    // SIMD constants
    let num_v = Simd::<f64, N>::splat((1.0 - rho * rho) * INV_TWO_PI);
    let gap_v = Simd::<f64, N>::splat((1.0 - rho) * (1.0 - rho));
    let four_rho_v = Simd::<f64, N>::splat(4.0 * rho);
    let mu_v = Simd::<f64, N>::splat(mu);
    let half_v = Simd::<f64, N>::splat(0.5);

    let simd_body = move |x_v: Simd<f64, N>| {
        let s = (half_v * (x_v - mu_v)).sin();
        num_v / (gap_v + four_rho_v * s * s)
    };

    apply_kernel_simd_to::<N, _, _>(
        "wrapped_cauchy_pdf",
        x,
        output,
        null_mask,
        null_count,
        simd_body,
        wrapped_cauchy_density(rho, mu),
    )
}

/// SIMD-accelerated wrapped Cauchy PDF, null-aware and Arrow-compliant.
#[inline(always)]
pub fn wrapped_cauchy_pdf_simd(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        wrapped_cauchy_pdf_simd_to(x, rho, mu, out, null_mask, null_count)
    })
}
