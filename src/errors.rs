// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for the circular distribution kernels.
//!
//! ## Error Categories
//! - **Parameter Errors**: shape parameters outside their documented domain, detected
//!   before any numeric work is done
//! - **Convergence Errors**: quadrature or root finding that exhausted its budget
//! - **Dimension Errors**: output buffers or batched parameters of the wrong length
//!
//! Proximity of a parameter to a degenerate value (κ → 0, ψ → 0, λ → ±1) is never an
//! error; it selects a closed-form branch instead.

use core::fmt;
use std::error::Error;

/// Error type for all circular kernel operations.
///
/// Each variant carries a contextual message naming the function, the parameters and,
/// where relevant, the evaluation point.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A shape parameter lies outside the distribution's domain.
    InvalidParameter(String),

    /// Quadrature or root finding failed to meet tolerance within its iteration budget.
    NonConvergence(String),

    /// Array length mismatch between operands.
    LengthMismatch(String),
}

impl KernelError {
    /// True for `InvalidParameter`, the fail-fast class of errors.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, KernelError::InvalidParameter(_))
    }

    /// True for `NonConvergence`, the valid-but-numerically-hard class of errors.
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, KernelError::NonConvergence(_))
    }

    /// Prefixes the message with `ctx`, e.g. the function, parameters or x concerned.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        match self {
            KernelError::InvalidParameter(msg) => {
                KernelError::InvalidParameter(format!("{}: {}", ctx, msg))
            }
            KernelError::NonConvergence(msg) => {
                KernelError::NonConvergence(format!("{}: {}", ctx, msg))
            }
            KernelError::LengthMismatch(msg) => {
                KernelError::LengthMismatch(format!("{}: {}", ctx, msg))
            }
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            KernelError::NonConvergence(msg) => write!(f, "Numerical non-convergence: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) arrays.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
///
/// # Returns
/// A formatted error message string
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}
