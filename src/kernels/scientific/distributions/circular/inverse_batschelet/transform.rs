// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Inverse Batschelet Transforms** - *Implicit Angle Maps and Their Batch Solve*
//!
//! The density is the von Mises kernel evaluated at a phase obtained by inverting two
//! monotone angle maps on `[−π, π]`:
//!
//! ```text
//! T(z) = z − ν(1 + cos z)          (peakedness, ν ∈ [−1, 1])
//! S(w) = w − ½(1 + λ) sin w        (skewness,   λ ∈ (−1, 1])
//! ```
//!
//! Both fix ±π and have non-negative derivative, so each target has a unique root in a
//! bracket of known width: `T⁻¹(x) ∈ x + [min(0, 2ν), max(0, 2ν)]` and
//! `S⁻¹(y) ∈ y + [−a, a]` with `a = ½(1 + λ)`. Each solve is a bracketed Newton
//! iteration with an explicit iteration budget.

use minarrow::{Bitmask, Vec64};
use tracing::warn;

use crate::config::{ROOT_MAX_ITER, ROOT_XTOL};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::regime::SkewRegime;
use crate::kernels::scientific::distributions::shared::scalar::{one_plus_cos, wrap_to_pi};
use crate::kernels::scientific::roots::{BatchRoots, newton_bracketed, solve_batch};
use crate::utils::has_nulls;

/// `T⁻¹(x)` in `(−π, π]`. `x` is reduced to `(−π, π]` first.
pub fn t_inverse(x: f64, nu: f64) -> Result<f64, KernelError> {
    let target = wrap_to_pi(x);
    if nu == 0.0 {
        return Ok(target);
    }
    let lo = target + (2.0 * nu).min(0.0);
    let hi = target + (2.0 * nu).max(0.0);
    let z = newton_bracketed(
        |z| (z - nu * one_plus_cos(z) - target, 1.0 + nu * z.sin()),
        lo,
        hi,
        target,
        ROOT_XTOL,
        ROOT_MAX_ITER,
    )
    .map_err(|e| e.with_context(format_args!("T inverse (nu = {}, x = {})", nu, x)))?;
    Ok(wrap_to_pi(z))
}

/// `S⁻¹(y)` for `y ∈ [−π, π]`.
pub fn s_inverse(y: f64, lambda: f64) -> Result<f64, KernelError> {
    let a = 0.5 * (1.0 + lambda);
    newton_bracketed(
        |w| (w - a * w.sin() - y, 1.0 - a * w.cos()),
        y - a,
        y + a,
        y,
        ROOT_XTOL,
        ROOT_MAX_ITER,
    )
    .map_err(|e| e.with_context(format_args!("S inverse (lambda = {}, y = {})", lambda, y)))
}

/// Phase at which the von Mises kernel is evaluated for angle `x`.
///
/// `lambda` must already be snapped to ±1 in the limit regimes. Non-finite `x` maps to
/// `NaN` without solving.
pub fn phase(x: f64, nu: f64, lambda: f64, regime: SkewRegime) -> Result<f64, KernelError> {
    if !x.is_finite() {
        return Ok(f64::NAN);
    }
    let arg1 = t_inverse(x, nu)?;
    match regime {
        SkewRegime::Identity => Ok(arg1 - arg1.sin()),
        SkewRegime::ClosedForm | SkewRegime::General => {
            let arg2 = s_inverse(arg1, lambda)?;
            let c1 = (1.0 - lambda) / (1.0 + lambda);
            let c2 = 2.0 * lambda / (1.0 + lambda);
            Ok(c1 * arg1 + c2 * arg2)
        }
    }
}

/// Phases for every valid lane of `x`; null lanes are skipped and hold `NaN`.
///
/// Each lane is solved independently. If any lane fails, the error reports how many
/// failed and the first failing lane's index and `x`.
pub fn solve_phases(
    fname: &str,
    x: &[f64],
    nu: f64,
    lambda: f64,
    regime: SkewRegime,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Vec64<f64>, KernelError> {
    let mask = if has_nulls(null_count, null_mask) { null_mask } else { None };
    let lanes: Vec<usize> = (0..x.len())
        .filter(|&i| mask.map_or(true, |m| m.get(i)))
        .collect();
    let targets: Vec<f64> = lanes.iter().map(|&i| x[i]).collect();
    let batch = solve_batch(&targets, |xi| phase(xi, nu, lambda, regime));
    scatter_lanes(fname, x, &lanes, batch)
}

/// Writes lane results back to their positions in `x`, or reports the failures.
pub(super) fn scatter_lanes(
    fname: &str,
    x: &[f64],
    lanes: &[usize],
    batch: BatchRoots,
) -> Result<Vec64<f64>, KernelError> {
    let failures = batch.failures();
    if let Some((k, err)) = batch.first_error {
        let lane = lanes[k];
        warn!(fname, failures, lane, x = x[lane], "inverse batschelet root solve failed");
        return Err(KernelError::NonConvergence(format!(
            "{}: {} of {} root solves failed, first at x[{}] = {} ({})",
            fname,
            failures,
            lanes.len(),
            lane,
            x[lane],
            err
        )));
    }
    let mut out = Vec64::with_capacity(x.len());
    out.resize(x.len(), f64::NAN);
    for (&i, &r) in lanes.iter().zip(batch.roots.iter()) {
        out[i] = r;
    }
    Ok(out)
}
