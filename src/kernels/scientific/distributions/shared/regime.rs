// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Regime Selection** - *Closed-Form Branches at Degenerate Parameters*
//!
//! Several kernels are indeterminate at particular parameter values (ψ = 0 gives a
//! `0/0` exponent in Jones–Pewsey, λ = −1 divides by zero in the inverse Batschelet
//! composition). Each call selects its branch once, up front, from the shape
//! parameters alone; the selected regime is then matched exhaustively by the kernel.
//!
//! Selecting a limit regime is never an error.

use tracing::debug;

use crate::config::KAPPA_UNIFORM_THRESHOLD;
use crate::utils::is_close;

/// Branch of the Jones–Pewsey family kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `(cosh(κψ) + sinh(κψ) cos θ)^(1/ψ)`.
    General,
    /// ψ ≈ 0: the von Mises limit `exp(κ cos θ)`.
    SymmetricLimit,
    /// κ below threshold: circular uniform, overriding the other two.
    UniformLimit,
}

impl Regime {
    /// Selects the branch for concentration `kappa` and shape `psi`.
    ///
    /// The uniform test runs first, then `|ψ| ≈ 0` with `isclose` tolerances.
    #[inline]
    pub fn select(kappa: f64, psi: f64) -> Self {
        if kappa < KAPPA_UNIFORM_THRESHOLD {
            debug!(kappa, psi, regime = ?Regime::UniformLimit, "jones-pewsey limit regime selected");
            return Regime::UniformLimit;
        }
        Self::select_shape(psi)
    }

    /// Selects between the general and von Mises branches from ψ alone.
    ///
    /// Never returns `UniformLimit`; at κ = 0 both branches already give `L ≡ 0`.
    #[inline]
    pub fn select_shape(psi: f64) -> Self {
        let regime = if is_close(psi.abs(), 0.0) {
            Regime::SymmetricLimit
        } else {
            Regime::General
        };
        if regime != Regime::General {
            debug!(psi, ?regime, "jones-pewsey limit regime selected");
        }
        regime
    }
}

/// Branch of the inverse Batschelet skewness transform, chosen from λ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkewRegime {
    /// λ ≈ −1: the skew transform is the identity and the kernel is
    /// `exp(κ cos(z − sin z))`.
    Identity,
    /// λ ≈ 1: the normalising constant has the closed form `1/(2π I₀(κ)(1 − A₁(κ)))`.
    ClosedForm,
    /// Any other λ ∈ (−1, 1).
    General,
}

impl SkewRegime {
    #[inline]
    pub fn select(lambda: f64) -> Self {
        let regime = if is_close(lambda, -1.0) {
            SkewRegime::Identity
        } else if is_close(lambda, 1.0) {
            SkewRegime::ClosedForm
        } else {
            SkewRegime::General
        };
        if regime != SkewRegime::General {
            debug!(lambda, ?regime, "inverse batschelet limit regime selected");
        }
        regime
    }
}
