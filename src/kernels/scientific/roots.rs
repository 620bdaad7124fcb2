// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Root Finding** - *Bracketed Newton Iteration and Batch Solves*
//!
//! Scalar nonlinear equation solving for implicitly defined transforms.
//!
//! [`newton_bracketed`] is Newton–Raphson safeguarded by bisection: every iterate stays
//! inside a sign-changing bracket, and a Newton step that would leave it (or shrink it
//! too slowly) is replaced by a bisection step. For a monotone function with a valid
//! bracket it cannot diverge, and the iteration count is bounded explicitly.
//!
//! [`solve_batch`] maps an independent solve over an array of targets. Each element
//! carries its own convergence state in a validity `Bitmask`, so a single failing
//! element never poisons the others; [`BatchRoots::into_result`] turns the first
//! failure into an error for callers that want all-or-nothing semantics.

use minarrow::{Bitmask, Vec64};
use tracing::warn;

use crate::errors::KernelError;

/// Solves `f(x) = 0` on the bracket `[lo, hi]` starting from `x0`.
///
/// `f` returns `(value, derivative)`. The bracket endpoints may be given in either
/// order but must have opposite signs (or one must be an exact root).
///
/// ## Errors
/// - `NonConvergence` if the bracket does not change sign, `f` goes non-finite, or
///   `max_iter` iterations pass without the step dropping below `xtol`.
pub fn newton_bracketed<F>(
    f: F,
    lo: f64,
    hi: f64,
    x0: f64,
    xtol: f64,
    max_iter: usize,
) -> Result<f64, KernelError>
where
    F: Fn(f64) -> (f64, f64),
{
    let (flo, _) = f(lo);
    let (fhi, _) = f(hi);
    if !(flo.is_finite() && fhi.is_finite()) {
        return Err(KernelError::NonConvergence(format!(
            "newton: non-finite function value at bracket [{}, {}]",
            lo, hi
        )));
    }
    if flo == 0.0 {
        return Ok(lo);
    }
    if fhi == 0.0 {
        return Ok(hi);
    }
    if flo.signum() == fhi.signum() {
        return Err(KernelError::NonConvergence(format!(
            "newton: root not bracketed by [{}, {}] (f = {:e}, {:e})",
            lo, hi, flo, fhi
        )));
    }

    // Orient so that f(xl) < 0 < f(xh).
    let (mut xl, mut xh) = if flo < 0.0 { (lo, hi) } else { (hi, lo) };

    let (bmin, bmax) = (lo.min(hi), lo.max(hi));
    let mut x = if x0.is_finite() { x0.clamp(bmin, bmax) } else { 0.5 * (lo + hi) };
    let mut dx_old = (hi - lo).abs();
    let mut dx = dx_old;
    let (mut fx, mut dfx) = f(x);

    for _ in 0..max_iter {
        if !(fx.is_finite() && dfx.is_finite()) {
            return Err(KernelError::NonConvergence(format!(
                "newton: non-finite function value at x = {}",
                x
            )));
        }
        if fx == 0.0 {
            return Ok(x);
        }

        let out_of_range = ((x - xh) * dfx - fx) * ((x - xl) * dfx - fx) > 0.0;
        let too_slow = (2.0 * fx).abs() > (dx_old * dfx).abs();
        if out_of_range || too_slow {
            dx_old = dx;
            dx = 0.5 * (xh - xl);
            x = xl + dx;
            if x == xl {
                return Ok(x);
            }
        } else {
            dx_old = dx;
            dx = fx / dfx;
            let prev = x;
            x -= dx;
            if x == prev {
                return Ok(x);
            }
        }
        if dx.abs() < xtol {
            return Ok(x);
        }

        (fx, dfx) = f(x);
        if fx < 0.0 {
            xl = x;
        } else {
            xh = x;
        }
    }

    warn!(lo, hi, x0, x, max_iter, "newton iteration budget exhausted");
    Err(KernelError::NonConvergence(format!(
        "newton: no convergence within {} iterations on [{}, {}] (last x = {}, f = {:e})",
        max_iter, lo, hi, x, fx
    )))
}

/// Per-element results of a batch solve.
#[derive(Debug, Clone)]
pub struct BatchRoots {
    /// Roots; `NaN` where the element failed.
    pub roots: Vec64<f64>,
    /// Validity per element: set where the solve converged.
    pub converged: Bitmask,
    /// Index and error of the first failing element, if any.
    pub first_error: Option<(usize, KernelError)>,
}

impl BatchRoots {
    /// Number of elements whose solve failed.
    pub fn failures(&self) -> usize {
        (0..self.roots.len()).filter(|&i| !self.converged.get(i)).count()
    }

    /// All-or-nothing view: the roots, or the first element's error.
    pub fn into_result(self) -> Result<Vec64<f64>, KernelError> {
        match self.first_error {
            None => Ok(self.roots),
            Some((idx, err)) => Err(match err {
                KernelError::NonConvergence(msg) => {
                    KernelError::NonConvergence(format!("element {}: {}", idx, msg))
                }
                other => other,
            }),
        }
    }
}

/// Runs `solve_one` independently for each target.
///
/// No solver state is shared between elements.
pub fn solve_batch<F>(targets: &[f64], solve_one: F) -> BatchRoots
where
    F: Fn(f64) -> Result<f64, KernelError>,
{
    let len = targets.len();
    let mut roots = Vec64::with_capacity(len);
    let mut converged = Bitmask::new_set_all(len, true);
    let mut first_error = None;

    for (i, &t) in targets.iter().enumerate() {
        match solve_one(t) {
            Ok(r) => roots.push(r),
            Err(e) => {
                roots.push(f64::NAN);
                converged.set(i, false);
                if first_error.is_none() {
                    first_error = Some((i, e));
                }
            }
        }
    }

    BatchRoots {
        roots,
        converged,
        first_error,
    }
}
