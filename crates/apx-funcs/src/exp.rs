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

//! Exponential approximations over the finite `f32` domain (-87, 88).
//!
//! Range reduction by powers of two plus a degree-14 monomial expansion,
//! after <https://www.pseudorandom.com/implementing-exp#section-22>
//! (MIT licensed).

use crate::Sampling;
use apx_core::{generate, Harness, InputRange, ResultSet};

pub fn reference(x: f64) -> f64 {
    x.exp()
}

/// Standard library `exp` for comparison.
pub fn std_exp(x: f32) -> f32 {
    x.exp()
}

/// Range reduction to `|r| <= ln(2)/2`, then a monomial expansion of
/// `e^r` evaluated by Horner's rule, scaled back by `2^k`. Negative input
/// handled by inversion.
pub fn monomial(x: f32) -> f32 {
    const COEFFS: [f32; 14] = [
        1.0,
        1.0,
        0.5,
        0.166_666_67,
        0.041_666_668,
        0.008_333_334,
        0.001_388_889,
        1.984_127_0e-4,
        2.480_158_9e-5,
        2.755_734_0e-6,
        2.755_715_7e-7,
        2.504_861_5e-8,
        2.088_459_7e-9,
        1.632_461_8e-10,
    ];

    if x == 0.0 {
        return 1.0;
    }
    let x0 = x.abs();
    let k = (x0 / std::f32::consts::LN_2 - 0.5).ceil();
    let r = x0 - k * std::f32::consts::LN_2;

    let mut pn: f32 = 1.143_364_8e-11;
    for &c in COEFFS.iter().rev() {
        pn = pn * r + c;
    }
    pn *= k.exp2();

    if x < 0.0 {
        1.0 / pn
    } else {
        pn
    }
}

const CANDIDATES: [(&str, &str, fn(f32) -> f32); 2] = [
    ("#0", "Reference (std exp)", std_exp),
    ("#1", "Monomial + range reduction", monomial),
];

/// Runs the exp candidates over the default range (-87, 88).
///
/// Unlike the root and log suites this range deliberately spans zero;
/// the clamp here bounds the magnitude so `e^x` stays finite in `f32`.
pub fn suite(samples: usize) -> ResultSet<f32, f64> {
    suite_sampled(samples, Sampling::Linear)
}

/// Runs the suite with the chosen sampling strategy.
pub fn suite_sampled(samples: usize, sampling: Sampling) -> ResultSet<f32, f64> {
    match sampling {
        Sampling::Linear => suite_over(-87.0, 88.0, samples, generate::linear),
        Sampling::Scatter { seed } => suite_over(-87.0, 88.0, samples, move |range, count| {
            generate::uniform(range, count, seed)
        }),
    }
}

pub fn suite_over<G>(low: f32, high: f32, samples: usize, generator: G) -> ResultSet<f32, f64>
where
    G: Fn(&InputRange<f32>, usize) -> Vec<f32>,
{
    let harness = Harness::new(
        "e^x",
        InputRange::new(low.max(-87.0), high.min(88.0)),
        samples,
        generator,
        reference,
    );
    harness.run_all(&CANDIDATES)
}
