// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **Circular Kernels** - *Directional Probability Distributions*
//!
//! Density (PDF) and cumulative (CDF) kernels for probability distributions on the
//! circle, evaluated over Minarrow `FloatArray<f64>` buffers with Arrow-style null
//! masks.
//!
//! The symmetric baseline (circular uniform, cardioid, Cartwright, wrapped normal,
//! wrapped Cauchy, von Mises) is closed form or a truncated series. The Jones–Pewsey
//! family and its extensions need numerically integrated normalising constants, and
//! the inverse Batschelet distribution additionally solves an implicit transform per
//! evaluation point.
//!
//! Every distribution shares one calling convention:
//! `<dist>_pdf(x, <shape params>, null_mask, null_count)`, and the same for `_cdf`,
//! with a `<dist>_validate` argument check that runs before any numeric work.

// Nightly `std::simd` is only needed by the optional closed-form SIMD paths.
#![cfg_attr(feature = "simd", feature(portable_simd))]

pub mod kernels {
    pub mod scientific {
        pub mod bessel;
        pub mod distributions;
        pub mod quadrature;
        pub mod roots;
    }
}

pub mod traits {
    pub mod circular;
}

pub mod config;

pub mod errors;

pub mod utils;
