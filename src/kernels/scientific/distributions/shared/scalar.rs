//! # **Scalar Distribution Utilities Module** - *Gamma Function and Angle Reduction*
//!
//! Scalar building blocks shared by the circular kernels: the Gamma function used by
//! the power-of-cosine family, and the angle reductions that keep every kernel
//! 2π-periodic.

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use std::f64::consts::PI;

use crate::kernels::scientific::distributions::shared::constants::*;

/// Natural log of the absolute value of the Gamma function, ln|Γ(x)|.
///
/// * Aims to match `scipy.special.gammaln` for all real inputs.
/// * Lanczos approximation (g = 7, n = 9) for x ≥ 0.5.
/// * Reflection formula for x < 0.5 using `ln(|sin(πx)|)`.
/// * Poles at non-positive integers return **+∞**.
/// * Propagates NaN.
#[inline(always)]
pub fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() && x.is_sign_positive() {
        return f64::INFINITY;
    }

    // Poles: Γ(x) has simple poles at 0, −1, −2, …  ⇒  ln|Γ| → +∞
    if x <= 0.0 && (x.fract().abs() < 1e-14) {
        return f64::INFINITY;
    }

    if x < 0.5 {
        return LN_PI - (PI * x).sin().abs().ln() - ln_gamma(1.0 - x);
    }

    let z = x - 1.0; // shift to minimise cancellation
    let mut a = COF[0];
    for (i, &c) in COF.iter().enumerate().skip(1) {
        a += c / (z + i as f64);
    }
    let t = z + 7.5; // g + ½  with g = 7
    HALF_LOG_TWO_PI + (z + 0.5) * t.ln() - t + a.ln()
}

/// Computes the Gamma function Γ(x).
///
/// Special cases:
/// * `x = 0`                        → `+∞`
/// * `x ∈ ℤ⁻` (negative integer)    → `NaN`
/// * `x = n` (1 ≤ n ≤ 171, integer) → exact `(n-1)!` by running product
/// * `x > 0` otherwise              → `exp(ln_gamma(x))`
/// * `x < 0` otherwise              → reflection Γ(x) = π / [sin(πx) Γ(1−x)]
#[inline(always)]
pub fn gamma_func(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }
    if x < 0.0 && (x.fract().abs() < 1e-14) {
        return f64::NAN;
    }

    if x > 0.0 {
        if x.fract() == 0.0 && x <= 171.0 {
            let n = x as u64;
            return (1..n).fold(1.0_f64, |acc, k| acc * k as f64);
        }
        return ln_gamma(x).exp();
    }

    let sin_pi_x = (PI * x).sin();
    PI / (sin_pi_x * gamma_func(1.0 - x))
}

/// Reduces an angle into `(−π, π]`.
#[inline(always)]
pub fn wrap_to_pi(x: f64) -> f64 {
    let r = x.rem_euclid(TWO_PI);
    if r > PI { r - TWO_PI } else { r }
}

/// Splits `x` into whole turns and a remainder in `[0, 2π)`: `x = 2π·turns + rem`.
///
/// Cumulative functions integrate only the remainder and add one per whole turn.
#[inline(always)]
pub fn split_turns(x: f64) -> (f64, f64) {
    let turns = (x / TWO_PI).floor();
    let mut rem = x - TWO_PI * turns;
    // Guard the rounding edge where rem lands on 2π.
    if rem >= TWO_PI {
        rem -= TWO_PI;
        return (turns + 1.0, rem.max(0.0));
    }
    (turns, rem.max(0.0))
}

/// `1 + cos θ` without cancellation near θ = π.
#[inline(always)]
pub fn one_plus_cos(theta: f64) -> f64 {
    let c = (0.5 * theta).cos();
    2.0 * c * c
}

/// `ln(eᵖ + e^q)` without overflow; `−∞` operands contribute nothing.
#[inline(always)]
pub fn ln_add_exp(p: f64, q: f64) -> f64 {
    let (hi, lo) = if p >= q { (p, q) } else { (q, p) };
    if hi == f64::NEG_INFINITY {
        return hi;
    }
    hi + (lo - hi).exp().ln_1p()
}
