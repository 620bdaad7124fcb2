// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Modified Bessel Functions** - *I₀, I₁ and their exponentially scaled forms*
//!
//! The von Mises family is normalised by `2π I₀(κ)`, and the inverse Batschelet
//! closed form needs the ratio `A₁(κ) = I₁(κ)/I₀(κ)`.
//!
//! ## Method
//! - `|x| ≤ 30`: ascending power series. Every term is positive so there is no
//!   cancellation, and convergence takes at most ~70 terms.
//! - `|x| > 30`: Hankel asymptotic expansion of `e^(−x) I_ν(x)`, whose smallest term at
//!   this range is far below machine epsilon.
//!
//! The scaled forms `i0e`/`i1e` stay finite for any κ, and the density kernels use them
//! so that large concentrations do not overflow.

const SERIES_LIMIT: f64 = 30.0;
const MAX_TERMS: usize = 500;

/// Ascending series for `I_ν(x)`, ν ∈ {0, 1}, x ≥ 0.
#[inline(always)]
fn series(nu: u32, x: f64) -> f64 {
    let q = 0.25 * x * x;
    let mut term = if nu == 0 { 1.0 } else { 0.5 * x };
    let mut sum = term;
    for k in 1..MAX_TERMS {
        let kf = k as f64;
        term *= q / (kf * (kf + nu as f64));
        sum += term;
        if term <= sum * 1e-17 {
            break;
        }
    }
    sum
}

/// Hankel expansion of `e^(−x) I_ν(x)`, ν ∈ {0, 1}, large x.
#[inline(always)]
fn asymptotic_scaled(nu: u32, x: f64) -> f64 {
    let mu = 4.0 * (nu * nu) as f64;
    let eight_x = 8.0 * x;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut prev = f64::INFINITY;
    for k in 1..MAX_TERMS {
        let odd = (2 * k - 1) as f64;
        term *= -(mu - odd * odd) / (k as f64 * eight_x);
        // Asymptotic series: stop at the smallest term.
        if term.abs() >= prev {
            break;
        }
        sum += term;
        prev = term.abs();
        if prev <= sum.abs() * 1e-17 {
            break;
        }
    }
    sum / (2.0 * std::f64::consts::PI * x).sqrt()
}

/// Modified Bessel function of the first kind, order zero.
///
/// Even in `x`. Overflows to `+∞` beyond |x| ≈ 713. NaN propagates.
#[inline(always)]
pub fn bessel_i0(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let ax = x.abs();
    if ax <= SERIES_LIMIT {
        series(0, ax)
    } else {
        asymptotic_scaled(0, ax) * ax.exp()
    }
}

/// Modified Bessel function of the first kind, order one.
///
/// Odd in `x`.
#[inline(always)]
pub fn bessel_i1(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let ax = x.abs();
    let v = if ax <= SERIES_LIMIT {
        series(1, ax)
    } else {
        asymptotic_scaled(1, ax) * ax.exp()
    };
    if x < 0.0 { -v } else { v }
}

/// Exponentially scaled `e^(−|x|) I₀(x)`.
#[inline(always)]
pub fn bessel_i0e(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let ax = x.abs();
    if ax <= SERIES_LIMIT {
        series(0, ax) * (-ax).exp()
    } else {
        asymptotic_scaled(0, ax)
    }
}

/// Exponentially scaled `e^(−|x|) I₁(x)`.
#[inline(always)]
pub fn bessel_i1e(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let ax = x.abs();
    let v = if ax <= SERIES_LIMIT {
        series(1, ax) * (-ax).exp()
    } else {
        asymptotic_scaled(1, ax)
    };
    if x < 0.0 { -v } else { v }
}

/// Mean resultant length of the von Mises distribution, `A₁(κ) = I₁(κ)/I₀(κ)`.
///
/// Computed from the scaled forms so it stays finite for large κ.
#[inline(always)]
pub fn bessel_ratio_a1(kappa: f64) -> f64 {
    bessel_i1e(kappa) / bessel_i0e(kappa)
}
