// apx - Approximation Test Bench
//
// Copyright (c) 2026 the apx contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Base-10 logarithm approximations.
//!
//! All candidates go through `log2` one way or another: the standard
//! library rescaled, a cubic polynomial over the `frexp` fraction, and
//! the two eBay significand reductions to [0.75, 1.5)
//! (<https://tech.ebayinc.com/engineering/fast-approximate-logarithms-part-iii-the-formulas/>).
//! Positive, non-zero input assumed.

use crate::{domain, Sampling};
use apx_core::{generate, Harness, InputRange, ResultSet};

const ONE_OVER_LOG2_10: f32 = 0.301_029_98;

pub fn reference(x: f64) -> f64 {
    x.log10()
}

/// Standard library `log10` for comparison.
pub fn std_log10(x: f32) -> f32 {
    x.log10()
}

/// `log2(x) / log2(10)` via the standard library `log2`.
pub fn log2_scaled(x: f32) -> f32 {
    x.log2() * ONE_OVER_LOG2_10
}

/// Splits a positive normal float into fraction in [0.5, 1) and binary
/// exponent, `x = fraction * 2^exponent`.
fn frexp(x: f32) -> (f32, i32) {
    let bits = x.to_bits();
    let exponent = ((bits >> 23) & 0xFF) as i32 - 126;
    let fraction = f32::from_bits((bits & 0x807F_FFFF) | 0x3F00_0000);
    (fraction, exponent)
}

/// Cubic polynomial over the `frexp` fraction, from the ARM CMSIS-DSP
/// forum proposal; the polynomial approximates log2, rescaled to base 10.
pub fn frexp_cubic(x: f32) -> f32 {
    let (f, e) = frexp(x.abs());
    let mut y = 1.231_495_9_f32;
    y = y * f - 4.118_525_0;
    y = y * f + 6.021_970_0;
    y = y * f - 3.133_964_5;
    (y + e as f32) * ONE_OVER_LOG2_10
}

/// Reduces the significand to [0.75, 1.5) by inspecting the top fraction
/// bit, returning `(significand - 1, effective exponent)`.
fn reduce_significand(x: f32) -> (f32, f32) {
    let bits = x.to_bits();
    let exponent = ((bits & 0x7F80_0000) >> 23) as i32;
    let fraction = bits & 0x007F_FFFF;
    if bits & 0x0040_0000 != 0 {
        // significand >= 1.5: divide by two by stuffing exponent -1,
        // compensated by the 126 below
        (
            f32::from_bits(fraction | 0x3F00_0000) - 1.0,
            (exponent - 126) as f32,
        )
    } else {
        (
            f32::from_bits(fraction | 0x3F80_0000) - 1.0,
            (exponent - 127) as f32,
        )
    }
}

/// eBay log2 formula, rational form (one divide).
pub fn ebay_rational(x: f32) -> f32 {
    const A: f32 = 0.338_953;
    const B: f32 = 2.198_599;
    const C: f32 = 1.523_692;
    let (signif, fexp) = reduce_significand(x);
    let lg2 = fexp + signif * (A * signif + B) / (signif + C);
    lg2 * ONE_OVER_LOG2_10
}

/// eBay log2 formula, cubic form (multiplies only).
pub fn ebay_cubic(x: f32) -> f32 {
    const A: f32 = 0.338_531;
    const B: f32 = -0.741_619;
    const C: f32 = 1.445_866;
    let (signif, fexp) = reduce_significand(x);
    let lg2 = fexp + ((A * signif + B) * signif + C) * signif;
    lg2 * ONE_OVER_LOG2_10
}

const CANDIDATES: [(&str, &str, fn(f32) -> f32); 5] = [
    ("#0", "Reference (std log10)", std_log10),
    ("#1", "log2(x) / log2(10)", log2_scaled),
    ("#2", "frexp cubic (ARM forum)", frexp_cubic),
    ("#3", "eBay rational", ebay_rational),
    ("#4", "eBay cubic", ebay_cubic),
];

/// Runs the log10 candidates over the default range (0, 65535), clamped
/// to the positive domain.
pub fn suite(samples: usize) -> ResultSet<f32, f64> {
    suite_sampled(samples, Sampling::Linear)
}

/// Runs the suite with the chosen sampling strategy.
pub fn suite_sampled(samples: usize, sampling: Sampling) -> ResultSet<f32, f64> {
    match sampling {
        Sampling::Linear => suite_over(0.0, 65535.0, samples, generate::linear),
        Sampling::Scatter { seed } => suite_over(0.0, 65535.0, samples, move |range, count| {
            generate::uniform(range, count, seed)
        }),
    }
}

pub fn suite_over<G>(low: f32, high: f32, samples: usize, generator: G) -> ResultSet<f32, f64>
where
    G: Fn(&InputRange<f32>, usize) -> Vec<f32>,
{
    let harness = Harness::new(
        "log10f",
        domain::positive_f32(low, high),
        samples,
        generator,
        reference,
    );
    harness.run_all(&CANDIDATES)
}
