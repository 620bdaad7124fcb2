// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use std::env;
use std::fs;
use std::path::Path;

/// True if `feature` is listed in comma-separated `CARGO_CFG_TARGET_FEATURE`
fn has_feature(list: &str, feature: &str) -> bool {
    list.split(',').any(|f| f == feature)
}

fn main() {
    // Target triple features supplied by `cargo` (`--print cfg`)
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let feats = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    // Only f64 lanes are needed: every circular kernel works in double precision.
    //
    // Allow override via environment variable
    // Format: SIMD_F64_LANES_OVERRIDE="4"
    let override_lanes = env::var("SIMD_F64_LANES_OVERRIDE").ok();

    let w64 = if let Some(val) = override_lanes {
        match val.trim().parse::<usize>() {
            Ok(n) if n.is_power_of_two() && n <= 64 => {
                println!("cargo:warning=SIMD_F64_LANES_OVERRIDE applied: {}", n);
                n
            }
            _ => panic!(
                "Invalid SIMD_F64_LANES_OVERRIDE. Expected a power of two up to 64, e.g. \"4\""
            ),
        }
    } else {
        match arch.as_str() {
            "x86_64" | "x86" => {
                if has_feature(&feats, "avx512f") {
                    8
                } else if has_feature(&feats, "avx2") {
                    4
                } else if has_feature(&feats, "sse2") {
                    2
                } else {
                    1
                }
            }
            "aarch64" => {
                if has_feature(&feats, "neon") {
                    2
                } else {
                    1
                }
            }
            "wasm32" => {
                if has_feature(&feats, "simd128") {
                    2
                } else {
                    1
                }
            }
            _ => 1,
        }
    };

    let out_path = Path::new(&env::var("OUT_DIR").expect("OUT_DIR is set by cargo"))
        .join("simd_lanes.rs");

    fs::write(
        &out_path,
        format!(
            "
/// Auto-generated SIMD lane width from build.rs

/// SIMD lane count for 64-bit floats.
/// Determined at build time based on target architecture capabilities,
/// or overridden via `SIMD_F64_LANES_OVERRIDE`.
#[allow(non_upper_case_globals, dead_code)]
pub const W64: usize = {w64};
"
        ),
    )
    .expect("failed to write simd_lanes.rs");

    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_ARCH");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");
    println!("cargo:rerun-if-env-changed=SIMD_F64_LANES_OVERRIDE");
}
