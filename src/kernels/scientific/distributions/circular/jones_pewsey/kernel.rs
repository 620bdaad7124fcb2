// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Jones–Pewsey Kernel** - *Scaled Log-Space Kernel and Normalising Integrals*
//!
//! The raw kernel `(cosh(κψ) + sinh(κψ) cos θ)^(1/ψ)` peaks at `e^κ` and is `0/0` in
//! the exponent at ψ = 0. Everything here works with the kernel divided by its peak:
//!
//! ```text
//! L(θ) = ln k(θ) − κ,     k̃(θ) = e^L(θ) ∈ [0, 1],     k̃(0) = 1
//! ```
//!
//! With `a = κψ`, `cosh a + sinh a cos θ = e^a cos²(θ/2) + e^(−a) sin²(θ/2)`, which gives
//! - `|a| < 1`: `L = ln_1p(expm1(−2a) sin²(θ/2)) / ψ`, continuous through ψ → 0
//! - `|a| ≥ 1`: `L = lnΣexp(a + ln cos²(θ/2), −a + ln sin²(θ/2)) / ψ − κ`, no overflow
//!
//! The normalising integrals `∫₋π^π k̃` are therefore `e^(−κ)` times the textbook ones.
//!
//! ## Shape near the mode
//! For ψ < 0 and large `|a|`, `k̃` is a spike of width `~e^(−|a|)` on a tail
//! `~e^(−2κ) |θ/2|^(2/ψ)`. Below ψ = −2 that tail is a weak integrable singularity at
//! the mode and carries most of the mass. Both integrals therefore start at θ = 0 and
//! run outward (`try_quad_from_peak`) against a purely relative target, since their
//! values can be as small as `e^(−2κ)`. A constant that underflows is a
//! `NonConvergence`.

use minarrow::Vec64;
use tracing::trace;

use crate::config::QuadConfig;
use crate::errors::KernelError;
use crate::kernels::scientific::bessel::bessel_i0e;
use crate::kernels::scientific::distributions::circular::common::std::positive_normaliser;
use crate::kernels::scientific::distributions::shared::constants::TWO_PI;
use crate::kernels::scientific::distributions::shared::regime::Regime;
use crate::kernels::scientific::distributions::shared::scalar::ln_add_exp;
use crate::kernels::scientific::quadrature::{quad_vec_from_peak, try_quad_from_peak};
use crate::utils::confirm_equal_len;

const PI: f64 = ::std::f64::consts::PI;

/// Peak-scaled log kernel `L(θ)` in the given regime; `θ` is measured from the mode.
#[inline(always)]
pub fn log_kernel(theta: f64, kappa: f64, psi: f64, regime: Regime) -> f64 {
    match regime {
        Regime::UniformLimit => {
            if theta.is_finite() { 0.0 } else { f64::NAN }
        }
        Regime::SymmetricLimit => {
            let s = (0.5 * theta).sin();
            -2.0 * kappa * s * s
        }
        Regime::General => {
            let a = kappa * psi;
            let (s, c) = (0.5 * theta).sin_cos();
            if a.abs() < 1.0 {
                ((-2.0 * a).exp_m1() * s * s).ln_1p() / psi
            } else {
                // 2 ln|s| rather than ln s²: s² underflows long before the spike ends
                ln_add_exp(a + 2.0 * c.abs().ln(), 2.0 * s.abs().ln() - a) / psi - kappa
            }
        }
    }
}

/// `∫₋π^π e^L(θ) dθ` for a single parameter pair.
///
/// Closed form in the limit regimes: `2π` (uniform) and `2π I₀ₑ(κ)` (von Mises).
pub fn normalising_integral(
    kappa: f64,
    psi: f64,
    regime: Regime,
    cfg: &QuadConfig,
) -> Result<f64, KernelError> {
    match regime {
        Regime::UniformLimit => Ok(TWO_PI),
        Regime::SymmetricLimit => Ok(TWO_PI * bessel_i0e(kappa)),
        Regime::General => {
            // even in θ: twice the half period from the mode
            try_quad_from_peak(|t| Ok(log_kernel(t, kappa, psi, regime).exp()), 0.0, PI, &cfg.relative())
                .and_then(|out| {
                    trace!(kappa, psi, value = out.value, intervals = out.intervals, "jones-pewsey normalising integral");
                    positive_normaliser(2.0 * out.value)
                })
                .map_err(|e| {
                    e.with_context(format_args!(
                        "jones-pewsey normalising integral (kappa = {}, psi = {})",
                        kappa, psi
                    ))
                })
        }
    }
}

/// `∫₋π^π e^L(θ) dθ` for each `(kappa[j], psi[j])`.
///
/// Pairs in a limit regime take their closed form; every remaining pair is integrated
/// together in one vector-valued quadrature call.
pub fn normalising_integrals(
    kappa: &[f64],
    psi: &[f64],
    cfg: &QuadConfig,
) -> Result<Vec64<f64>, KernelError> {
    confirm_equal_len("jones_pewsey_normalising_constants", kappa.len(), psi.len())?;
    let n = kappa.len();
    let mut out = Vec64::with_capacity(n);
    let mut general = Vec::new();
    for j in 0..n {
        let regime = Regime::select(kappa[j], psi[j]);
        match regime {
            Regime::General => {
                general.push(j);
                out.push(f64::NAN);
            }
            _ => out.push(normalising_integral(kappa[j], psi[j], regime, cfg)?),
        }
    }
    if general.is_empty() {
        return Ok(out);
    }

    let integrals = quad_vec_from_peak(
        |t, vals: &mut [f64]| {
            for (v, &j) in vals.iter_mut().zip(&general) {
                *v = log_kernel(t, kappa[j], psi[j], Regime::General).exp();
            }
        },
        0.0,
        PI,
        general.len(),
        &cfg.relative(),
    )
    .map_err(|e| e.with_context("jones-pewsey batch normalising integrals"))?;
    trace!(pairs = general.len(), intervals = integrals.intervals, "jones-pewsey batch integrals");

    for (&j, &v) in general.iter().zip(integrals.values.iter()) {
        out[j] = positive_normaliser(2.0 * v).map_err(|e| {
            e.with_context(format_args!(
                "jones-pewsey batch normalising integral (kappa = {}, psi = {})",
                kappa[j], psi[j]
            ))
        })?;
    }
    Ok(out)
}
