// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Numerical Tolerances and Thresholds*
//!
//! Global constants controlling quadrature, root finding and regime selection.
//! The tolerances mirror the SciPy defaults (`quad`, `numpy.isclose`) so results are
//! comparable with reference implementations.

/// Absolute error target for adaptive quadrature.
pub const QUAD_EPSABS: f64 = 1.49e-8;

/// Relative error target for adaptive quadrature.
pub const QUAD_EPSREL: f64 = 1.49e-8;

/// Maximum number of subintervals the adaptive quadrature may hold.
///
/// Exceeding this returns `KernelError::NonConvergence` rather than a partial result.
pub const QUAD_LIMIT: usize = 200;

/// Absolute step tolerance for the bracketed Newton solver.
pub const ROOT_XTOL: f64 = 1e-13;

/// Iteration budget per root solve.
pub const ROOT_MAX_ITER: usize = 100;

/// Below this concentration the Jones–Pewsey family is treated as circular uniform.
pub const KAPPA_UNIFORM_THRESHOLD: f64 = 1e-3;

/// Absolute part of the "≈" test used for regime selection (`numpy.isclose` default).
pub const CLOSE_ATOL: f64 = 1e-8;

/// Relative part of the "≈" test used for regime selection (`numpy.isclose` default).
pub const CLOSE_RTOL: f64 = 1e-5;

/// Wrapped-normal series selection on σ = √(−2 ln ρ).
///
/// At or above this σ the Fourier series converges in a handful of terms; below it the
/// wrapped Gaussian sum does.
pub const WRAPPED_NORMAL_SIGMA_SWITCH: f64 = 1.0;

/// Runtime quadrature settings, defaulting to the constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadConfig {
    pub epsabs: f64,
    pub epsrel: f64,
    pub limit: usize,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            epsabs: QUAD_EPSABS,
            epsrel: QUAD_EPSREL,
            limit: QUAD_LIMIT,
        }
    }
}

impl QuadConfig {
    /// The same settings with the absolute floor removed.
    ///
    /// Peak-scaled normalising integrals can be many orders of magnitude below
    /// `QUAD_EPSABS`, where an absolute target would accept any estimate at all.
    #[inline]
    pub fn relative(&self) -> Self {
        Self {
            epsabs: 0.0,
            ..*self
        }
    }
}
