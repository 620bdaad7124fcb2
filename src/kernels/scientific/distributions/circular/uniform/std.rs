// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::circular::common::std::{
    apply_kernel_std_to, collect_float_array,
};
use crate::kernels::scientific::distributions::shared::constants::INV_TWO_PI;

#[inline(always)]
pub fn circular_uniform_pdf_std_to(
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    apply_kernel_std_to("circular_uniform_pdf", x, output, null_mask, null_count, |xi| {
        if xi.is_finite() { INV_TWO_PI } else { f64::NAN }
    })
}

#[inline(always)]
pub fn circular_uniform_pdf_std(
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        circular_uniform_pdf_std_to(x, out, null_mask, null_count)
    })
}

#[inline(always)]
pub fn circular_uniform_cdf_std_to(
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    apply_kernel_std_to("circular_uniform_cdf", x, output, null_mask, null_count, |xi| {
        xi * INV_TWO_PI
    })
}

#[inline(always)]
pub fn circular_uniform_cdf_std(
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    collect_float_array(x, null_mask, |out| {
        circular_uniform_cdf_std_to(x, out, null_mask, null_count)
    })
}
