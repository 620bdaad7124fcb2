// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *High-Precision Constants for Circular Statistics*
//!
//! Mathematical constants for circular distribution calculations with hard-coded
//! precision.

/// One full period of the circle: 2π.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Reciprocal of the period: 1/(2π) ≈ 0.159154943091895.
///
/// Density of the circular uniform distribution, and the value every Jones–Pewsey
/// family member collapses to as κ → 0.
pub const INV_TWO_PI: f64 = 1.0 / std::f64::consts::TAU;

/// Natural logarithm of π: ln(π) ≈ 1.144729885849400.
pub const LN_PI: f64 = 1.1447298858494002;

/// Natural logarithm of 2: ln(2) ≈ 0.693147180559945.
pub const LN_2: f64 = std::f64::consts::LN_2;

/// The square root of 2π: √(2π) ≈ 2.506628274631000.
///
/// Normalises the Gaussian terms of the wrapped normal sum.
pub const SQRT_2PI: f64 = 2.5066282746310002_f64;

/// Half of the natural logarithm of 2π: ½ln(2π) ≈ 0.918938533204673.
///
/// Leading constant of the Lanczos gamma approximation.
pub const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

/// Lanczos approximation coefficients for high-precision gamma function evaluation.
///
/// Coefficient array for the Lanczos approximation to the gamma function with
/// parameters g=7 (auxiliary parameter) and n=9 (number of terms).
pub(crate) const COF: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];
