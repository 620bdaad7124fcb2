//! # **CircularDistribution trait** - *Swappable distribution handles*

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::{
    cardioid::{cardioid_cdf, cardioid_pdf, cardioid_validate},
    cartwright::{cartwright_cdf, cartwright_pdf, cartwright_validate},
    inverse_batschelet::{inverse_batschelet_cdf, inverse_batschelet_pdf, inverse_batschelet_validate},
    jones_pewsey::{jones_pewsey_cdf, jones_pewsey_pdf, jones_pewsey_validate},
    jones_pewsey_asym::{jones_pewsey_asym_cdf, jones_pewsey_asym_pdf, jones_pewsey_asym_validate},
    jones_pewsey_sine_skewed::{
        jones_pewsey_sine_skewed_cdf, jones_pewsey_sine_skewed_pdf, jones_pewsey_sine_skewed_validate,
    },
    uniform::{circular_uniform_cdf, circular_uniform_pdf, circular_uniform_validate},
    von_mises::{von_mises_cdf, von_mises_pdf, von_mises_validate},
    von_mises_flat_top::{von_mises_flat_top_cdf, von_mises_flat_top_pdf, von_mises_flat_top_validate},
    wrapped_cauchy::{wrapped_cauchy_cdf, wrapped_cauchy_pdf, wrapped_cauchy_validate},
    wrapped_normal::{wrapped_normal_cdf, wrapped_normal_pdf, wrapped_normal_validate},
};

/// A circular distribution with fixed shape parameters.
///
/// Each implementor is a plain parameter struct that forwards to the matching
/// `<dist>_validate` / `<dist>_pdf` / `<dist>_cdf` kernels, so callers can hold any
/// distribution behind `&dyn CircularDistribution` and evaluate it with one signature.
///
/// Parameters are checked on every `pdf`/`cdf` call, not at construction.
///
/// # Examples
/// ```rust,ignore
/// use circular_kernels::traits::circular::{Cardioid, CircularDistribution, VonMises};
///
/// let dists: [&dyn CircularDistribution; 2] = [
///     &Cardioid { rho: 0.3, mu: 0.0 },
///     &VonMises { kappa: 2.0, mu: 0.0 },
/// ];
/// for d in dists {
///     let y = d.pdf(&[0.0, 1.0], None, None).unwrap();
///     println!("{}: {:?}", d.name(), y.data);
/// }
/// ```
pub trait CircularDistribution {
    /// Distribution name, as used in error messages.
    fn name(&self) -> &'static str;

    /// Checks the shape parameters against the distribution's domain.
    fn validate(&self) -> Result<(), KernelError>;

    /// Density at each angle in `x`.
    fn pdf(
        &self,
        x: &[f64],
        null_mask: Option<&Bitmask>,
        null_count: Option<usize>,
    ) -> Result<FloatArray<f64>, KernelError>;

    /// `∫₀ˣ` of the density at each angle in `x`.
    fn cdf(
        &self,
        x: &[f64],
        null_mask: Option<&Bitmask>,
        null_count: Option<usize>,
    ) -> Result<FloatArray<f64>, KernelError>;
}

/// Circular uniform distribution; has no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CircularUniform;

/// Cardioid distribution, `ρ ∈ [0, 0.5]`, `μ ∈ [0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cardioid {
    pub rho: f64,
    pub mu: f64,
}

/// Cartwright power-of-cosine distribution, `ζ > 0`, `μ ∈ [0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartwright {
    pub zeta: f64,
    pub mu: f64,
}

/// Wrapped normal distribution, `ρ ∈ [0, 1)`, `μ ∈ [0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrappedNormal {
    pub rho: f64,
    pub mu: f64,
}

/// Wrapped Cauchy distribution, `ρ ∈ [0, 1)`, `μ ∈ [0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrappedCauchy {
    pub rho: f64,
    pub mu: f64,
}

/// von Mises distribution, `κ ≥ 0`, `μ ∈ [0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonMises {
    pub kappa: f64,
    pub mu: f64,
}

/// Jones–Pewsey distribution, `κ ≥ 0`, finite `ψ`, `μ ∈ [0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JonesPewsey {
    pub kappa: f64,
    pub psi: f64,
    pub mu: f64,
}

/// Sine-skewed Jones–Pewsey distribution, `κ ≥ 0`, finite `ψ`, `λ ∈ [−1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JonesPewseySineSkewed {
    pub kappa: f64,
    pub psi: f64,
    pub lambda: f64,
}

/// Asymmetric-extended Jones–Pewsey distribution, `κ ≥ 0`, finite `ψ`, `ν ∈ [0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JonesPewseyAsym {
    pub kappa: f64,
    pub psi: f64,
    pub nu: f64,
}

/// Flat-topped von Mises distribution, `κ ≥ 0`, `ν ∈ [−1, 1]`, `μ ∈ [0, 2π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VonMisesFlatTop {
    pub kappa: f64,
    pub nu: f64,
    pub mu: f64,
}

/// Inverse Batschelet distribution, `κ ≥ 0`, `ν ∈ [−1, 1]`, `λ ∈ [−1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseBatschelet {
    pub kappa: f64,
    pub nu: f64,
    pub lambda: f64,
}

/// Implements `CircularDistribution` by forwarding the struct fields, in order, to the
/// distribution's kernel functions.
macro_rules! impl_circular_distribution {
    ($ty:ty, $name:literal, $validate:ident, $pdf:ident, $cdf:ident $(, $field:ident)*) => {
        impl CircularDistribution for $ty {
            #[inline]
            fn name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn validate(&self) -> Result<(), KernelError> {
                $validate($(self.$field),*)
            }

            #[inline]
            fn pdf(
                &self,
                x: &[f64],
                null_mask: Option<&Bitmask>,
                null_count: Option<usize>,
            ) -> Result<FloatArray<f64>, KernelError> {
                $pdf(x, $(self.$field,)* null_mask, null_count)
            }

            #[inline]
            fn cdf(
                &self,
                x: &[f64],
                null_mask: Option<&Bitmask>,
                null_count: Option<usize>,
            ) -> Result<FloatArray<f64>, KernelError> {
                $cdf(x, $(self.$field,)* null_mask, null_count)
            }
        }
    };
}

impl_circular_distribution!(
    CircularUniform,
    "circular_uniform",
    circular_uniform_validate,
    circular_uniform_pdf,
    circular_uniform_cdf
);
impl_circular_distribution!(Cardioid, "cardioid", cardioid_validate, cardioid_pdf, cardioid_cdf, rho, mu);
impl_circular_distribution!(
    Cartwright,
    "cartwright",
    cartwright_validate,
    cartwright_pdf,
    cartwright_cdf,
    zeta,
    mu
);
impl_circular_distribution!(
    WrappedNormal,
    "wrapped_normal",
    wrapped_normal_validate,
    wrapped_normal_pdf,
    wrapped_normal_cdf,
    rho,
    mu
);
impl_circular_distribution!(
    WrappedCauchy,
    "wrapped_cauchy",
    wrapped_cauchy_validate,
    wrapped_cauchy_pdf,
    wrapped_cauchy_cdf,
    rho,
    mu
);
impl_circular_distribution!(VonMises, "von_mises", von_mises_validate, von_mises_pdf, von_mises_cdf, kappa, mu);
impl_circular_distribution!(
    JonesPewsey,
    "jones_pewsey",
    jones_pewsey_validate,
    jones_pewsey_pdf,
    jones_pewsey_cdf,
    kappa,
    psi,
    mu
);
impl_circular_distribution!(
    JonesPewseySineSkewed,
    "jones_pewsey_sine_skewed",
    jones_pewsey_sine_skewed_validate,
    jones_pewsey_sine_skewed_pdf,
    jones_pewsey_sine_skewed_cdf,
    kappa,
    psi,
    lambda
);
impl_circular_distribution!(
    JonesPewseyAsym,
    "jones_pewsey_asym",
    jones_pewsey_asym_validate,
    jones_pewsey_asym_pdf,
    jones_pewsey_asym_cdf,
    kappa,
    psi,
    nu
);
impl_circular_distribution!(
    VonMisesFlatTop,
    "von_mises_flat_top",
    von_mises_flat_top_validate,
    von_mises_flat_top_pdf,
    von_mises_flat_top_cdf,
    kappa,
    nu,
    mu
);
impl_circular_distribution!(
    InverseBatschelet,
    "inverse_batschelet",
    inverse_batschelet_validate,
    inverse_batschelet_pdf,
    inverse_batschelet_cdf,
    kappa,
    nu,
    lambda
);
