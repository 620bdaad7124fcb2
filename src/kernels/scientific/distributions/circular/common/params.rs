// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Domain checks for shape parameters.
//!
//! Every check rejects `NaN` and the infinities, since all comparisons against them
//! fail. Messages name the distribution, the parameter, its value and the domain.

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::TWO_PI;

#[inline]
fn invalid(dist: &str, name: &str, value: f64, domain: &str) -> KernelError {
    KernelError::InvalidParameter(format!(
        "{}: {} = {} outside {}",
        dist, name, value, domain
    ))
}

/// `value ∈ [lo, hi]`.
#[inline]
pub fn require_closed(dist: &str, name: &str, value: f64, lo: f64, hi: f64) -> Result<(), KernelError> {
    if lo <= value && value <= hi {
        Ok(())
    } else {
        Err(invalid(dist, name, value, &format!("[{}, {}]", lo, hi)))
    }
}

/// `value ∈ [lo, hi)`.
#[inline]
pub fn require_half_open(
    dist: &str,
    name: &str,
    value: f64,
    lo: f64,
    hi: f64,
) -> Result<(), KernelError> {
    if lo <= value && value < hi {
        Ok(())
    } else {
        Err(invalid(dist, name, value, &format!("[{}, {})", lo, hi)))
    }
}

/// Finite and `≥ 0`.
#[inline]
pub fn require_non_negative(dist: &str, name: &str, value: f64) -> Result<(), KernelError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(dist, name, value, "[0, ∞)"))
    }
}

/// Finite and `> 0`.
#[inline]
pub fn require_positive(dist: &str, name: &str, value: f64) -> Result<(), KernelError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(dist, name, value, "(0, ∞)"))
    }
}

/// Any finite real.
#[inline]
pub fn require_finite(dist: &str, name: &str, value: f64) -> Result<(), KernelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(dist, name, value, "(-∞, ∞)"))
    }
}

/// Location on the circle, `μ ∈ [0, 2π]`.
#[inline]
pub fn require_location(dist: &str, mu: f64) -> Result<(), KernelError> {
    require_closed(dist, "mu", mu, 0.0, TWO_PI)
}
