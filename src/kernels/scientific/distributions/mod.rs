// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Circular Distributions Module** - *Probability Distributions on the Circle*
//!
//! Density (PDF) and cumulative (CDF) kernels for distributions on angles, periodic with
//! period 2π, together with the argument checks that guard them.
//!
//! ## Distribution Families
//! - **Symmetric baseline**: circular uniform, cardioid, Cartwright, wrapped normal,
//!   wrapped Cauchy, von Mises. Closed forms or bounded truncated series.
//! - **Jones–Pewsey family**: Jones–Pewsey, sine-skewed Jones–Pewsey, asymmetric
//!   extended Jones–Pewsey and the flat-topped von Mises. Kernels with degenerate
//!   parameter limits and normalising constants obtained by adaptive quadrature.
//! - **Inverse Batschelet**: a kernel defined through two nested implicit transforms,
//!   solved per evaluation point by bracketed Newton iteration.
//!
//! ## Core Functions
//! Each distribution provides:
//! - **`<dist>_validate`**: parameter domain check, run before any numeric work
//! - **`<dist>_pdf` / `<dist>_pdf_to`**: density, allocating or into a caller buffer
//! - **`<dist>_cdf` / `<dist>_cdf_to`**: `F(x) = ∫₀ˣ f`, with `F(x + 2π) = F(x) + 1`
//!
//! ## Angles
//! Inputs are not reduced by the caller. Every density satisfies
//! `f(x) = f(x + 2π)`, and the cumulative functions count whole turns, so any finite
//! real is a valid evaluation point.
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics), leaving it to the user to subsequently
//! treat them as nulls if they wish. Masked lanes are written as NaN, stay null in the
//! output mask, and never reach quadrature or root finding.
//!
//! ## Numerical Precision and Stability
//! Kernels are evaluated scaled by `e^(−κ)` so large concentrations do not overflow, and
//! the Jones–Pewsey kernel is evaluated in log space. Quadrature and root solves have
//! explicit budgets (see `crate::config`); running out of budget is reported as
//! `KernelError::NonConvergence`, never as a silent NaN.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. While every attempt has been made to
//! match the accuracy and behaviour of established libraries such as SciPy, we
//! make no guarantees as to correctness, fitness for any particular purpose, or
//! suitability for uses such as in life-critical, safety-critical, or financial applications.
//!
//! By using these functions, you accept all responsibility for outcomes or decisions
//! based upon its results.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// ## Modules
/// - **`constants`**: Mathematical constants and precomputed values
/// - **`regime`**: Closed-form branch selection at degenerate parameters
/// - **`scalar`**: Gamma function and angle helpers
pub mod shared {
    pub mod constants;
    pub mod regime;
    pub mod scalar;
}

/// # **Circular Distributions** - *Densities on Angles*
///
/// ## Distribution Categories
/// - **Closed form**: uniform, cardioid, cartwright, wrapped_cauchy, von_mises
/// - **Series**: wrapped_normal
/// - **Quadrature-normalised**: jones_pewsey, jones_pewsey_sine_skewed, jones_pewsey_asym,
///   von_mises_flat_top, inverse_batschelet
/// - **Common utilities**: Shared kernel drivers
pub mod circular {
    // common kernel patterns
    pub mod common;

    // distributions
    /// Circular uniform distribution kernels.
    pub mod uniform;
    pub mod cardioid;
    pub mod cartwright;
    pub mod wrapped_normal;
    pub mod wrapped_cauchy;
    pub mod von_mises;
    pub mod jones_pewsey;
    pub mod jones_pewsey_sine_skewed;
    pub mod jones_pewsey_asym;
    pub mod von_mises_flat_top;
    pub mod inverse_batschelet;
}
