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

//! Reciprocal square-root approximations.
//!
//! The Quake III bit hack with one and two Newton steps, against a
//! `1/sqrt` reference. See Lomont's analysis of the magic constant,
//! <http://www.lomont.org/papers/2003/InvSqrt.pdf>.

use crate::{domain, Sampling};
use apx_core::{generate, Harness, InputRange, ResultSet};

/// Lomont's constant, slightly better than the original 0x5F3759DF.
const RSQRT_MAGIC: u32 = 0x5F37_5A86;

pub fn reference(x: f64) -> f64 {
    1.0 / x.sqrt()
}

/// Standard library `1.0 / sqrt` for comparison.
pub fn std_inv_sqrt(x: f32) -> f32 {
    1.0 / x.sqrt()
}

/// Quake III fast inverse square root, one Newton step.
pub fn quake3(x: f32) -> f32 {
    let half = 0.5 * x;
    let y = f32::from_bits(RSQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    y * (1.5 - half * y * y)
}

/// Quake III fast inverse square root, two Newton steps.
pub fn quake3_two_steps(x: f32) -> f32 {
    let half = 0.5 * x;
    let mut y = f32::from_bits(RSQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    y = y * (1.5 - half * y * y);
    y * (1.5 - half * y * y)
}

const CANDIDATES: [(&str, &str, fn(f32) -> f32); 3] = [
    ("#0", "Reference (1 / std sqrt)", std_inv_sqrt),
    ("#1", "Quake3", quake3),
    ("#2", "Quake3 + Newton", quake3_two_steps),
];

/// Runs the inverse-root candidates over the default range (0, 2),
/// clamped to the positive domain.
pub fn suite(samples: usize) -> ResultSet<f32, f64> {
    suite_sampled(samples, Sampling::Linear)
}

/// Runs the suite with the chosen sampling strategy.
pub fn suite_sampled(samples: usize, sampling: Sampling) -> ResultSet<f32, f64> {
    match sampling {
        Sampling::Linear => suite_over(0.0, 2.0, samples, generate::linear),
        Sampling::Scatter { seed } => suite_over(0.0, 2.0, samples, move |range, count| {
            generate::uniform(range, count, seed)
        }),
    }
}

pub fn suite_over<G>(low: f32, high: f32, samples: usize, generator: G) -> ResultSet<f32, f64>
where
    G: Fn(&InputRange<f32>, usize) -> Vec<f32>,
{
    let harness = Harness::new(
        "1 / sqrtf",
        domain::positive_f32(low, high),
        samples,
        generator,
        reference,
    );
    harness.run_all(&CANDIDATES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(approx: f32, x: f32) -> f64 {
        let exact = reference(f64::from(x));
        (1.0 - f64::from(approx) / exact).abs()
    }

    #[test]
    fn test_known_values() {
        assert!((quake3(4.0) - 0.5).abs() < 1e-3);
        assert!((quake3(1.0) - 1.0).abs() < 2e-3);
        assert!((quake3_two_steps(0.25) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_one_step_within_lomont_bound() {
        // One Newton step keeps the relative error under ~0.18%.
        for x in [0.01_f32, 0.5, 1.0, 1.5, 2.0, 100.0] {
            assert!(relative_error(quake3(x), x) < 2e-3, "x = {x}");
        }
    }

    #[test]
    fn test_second_step_tightens_the_error() {
        for x in [0.01_f32, 0.5, 1.0, 1.5, 2.0, 100.0] {
            assert!(relative_error(quake3_two_steps(x), x) < 1e-5, "x = {x}");
            assert!(
                relative_error(quake3_two_steps(x), x) <= relative_error(quake3(x), x),
                "x = {x}"
            );
        }
    }

    #[test]
    fn test_suite_layout() {
        let set = suite(16);
        assert_eq!(set.len(), 3);
        let first = set.first().unwrap();
        assert_eq!(first.suite, "1 / sqrtf");
        assert_eq!(first.input_range.high(), 2.0);
        assert!(first.relative_errors.maximum < 1e-6);
    }
}
