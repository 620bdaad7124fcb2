// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cardioid Distribution SIMD Implementation**
//!
//! Vectorised cardioid density for dense, 64-byte aligned inputs. The CDF stays scalar.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use std::simd::{Simd, StdFloat};

use minarrow::{Bitmask, FloatArray};

use super::cardioid_validate;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::simd::apply_kernel_simd_to;
use crate::kernels::scientific::distributions::circular::common::std::collect_float_array;
use crate::kernels::scientific::distributions::shared::constants::INV_TWO_PI;

/// SIMD-accelerated cardioid PDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
/// f(x; ρ, μ) = (1 + 2ρ cos(x − μ)) / (2π)
#[inline(always)]
pub fn cardioid_pdf_simd_to(
    x: &[f64],
    rho: f64,
    mu: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    cardioid_validate(rho, mu)?;

    const N: usize = W64;
    let two_rho = 2.0 * rho;

    // SIMD constants
    let mu_v = Simd::<f64, N>::splat(mu);
    let two_rho_v = Simd::<f64, N>::splat(two_rho);
    let inv_tp_v = Simd::<f64, N>::splat(INV_TWO_PI);
    let one_v = Simd::<f64, N>::splat(1.0);

    let scalar_body = move |xi: f64| (1.0 + two_rho * (xi - mu).cos()) * INV_TWO_PI;
    let simd_body = move |x_v: Simd<f64, N>| (one_v + two_rho_v * (x_v - mu_v).cos()) * inv_tp_v;

    apply_kernel_simd_to::<N, _, _>(
        "cardioid_pdf",
        x,
        output,
        null_mask,
        null_count,
        simd_body,
        scalar_body,
    )
}

/// SIMD-accelerated cardioid PDF, null-aware and Arrow-compliant.
#[inline(always)]
pub fn cardioid_pdf_simd(
    x: &[f64],
    rho: f64,
    mu: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        cardioid_pdf_simd_to(x, rho, mu, out, null_mask, null_count)
    })
}
