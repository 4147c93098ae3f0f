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

//! Single-precision square-root approximations.
//!
//! Methods: exponent-halving bit tricks with optional Babylonian or
//! Bakhshali refinement, the Quake III reciprocal root multiplied back by
//! `x`, the Intel Software Optimization Cookbook shift, a mantissa Taylor
//! polynomial, plain Newton iteration, and bisection. All assume positive,
//! non-zero input.
//!
//! See <https://en.wikipedia.org/wiki/Methods_of_computing_square_roots>.

use crate::{domain, Sampling};
use apx_core::{generate, Harness, InputRange, ResultSet};

/// Bias constant that centers the error of the exponent-halving estimate.
const SQRT_BIAS: i32 = 0x4B0D2;

/// Magic constant for the reciprocal-root initial guess, the Lomont
/// refinement of the original 0x5F3759DF.
const RSQRT_MAGIC: u32 = 0x5F37_5A86;

/// Reference square root in storage precision. The suite counts on the
/// standard library being correctly rounded here.
pub fn reference(x: f64) -> f64 {
    x.sqrt()
}

/// Standard library `sqrt` for comparison.
pub fn std_sqrt(x: f32) -> f32 {
    x.sqrt()
}

/// Exponent halving via the bit pattern, with the error-centering bias.
/// The integer holds roughly `log2(x)` in fixed point, so shifting it
/// right halves the logarithm.
pub fn biased_shift(x: f32) -> f32 {
    let i = x.to_bits() as i32;
    let i = (1 << 29) + (i >> 1) - (1 << 22) - SQRT_BIAS;
    f32::from_bits(i as u32)
}

/// Unbiased exponent halving followed by two simplified Babylonian steps
/// (the pair of `0.5 * (u + x/u)` averages folded together).
pub fn shift_babylonian(x: f32) -> f32 {
    let i = x.to_bits() as i32;
    let mut u = f32::from_bits(((1 << 29) + (i >> 1) - (1 << 22)) as u32);
    u = u + x / u;
    0.25 * u + x / u
}

/// Biased exponent halving with two Babylonian steps reduced to a single
/// division.
pub fn biased_shift_babylonian(x: f32) -> f32 {
    let u = biased_shift(x);
    let u2 = u * u;
    (x * x + (6.0 * x + u2) * u2) / (4.0 * u * (x + u2))
}

/// Biased exponent halving with one Bakhshali step.
pub fn biased_shift_bakhshali(x: f32) -> f32 {
    let u = biased_shift(x);
    (u * u + x) / (2.0 * u)
}

/// Quake III reciprocal root with one Newton step, multiplied by `x` to
/// recover the square root.
pub fn quake_newton(x: f32) -> f32 {
    let half = 0.5 * x;
    let y = f32::from_bits(RSQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    let y = y * (1.5 - half * y * y);
    x * y
}

/// Quake III reciprocal root refined with one Halley step instead of
/// Newton, multiplied by `x`.
pub fn quake_halley(x: f32) -> f32 {
    let y = f32::from_bits(RSQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    let xy = x * y;
    let xy2 = xy * y;
    0.375 * xy * (5.0 - xy2 * (10.0 / 3.0 - xy2))
}

/// Bit shift from the Intel Software Optimization Cookbook, 2nd edition,
/// page 187: rebias the exponent, then halve the whole pattern.
pub fn intel_shift(x: f32) -> f32 {
    let mut i = x.to_bits();
    i = i.wrapping_add(127 << 23);
    i >>= 1;
    f32::from_bits(i)
}

/// Intel shift with one Bakhshali step.
pub fn intel_shift_bakhshali(x: f32) -> f32 {
    let f = intel_shift(x);
    (f * f + x) / (2.0 * f)
}

/// Cubic Taylor expansion of the mantissa's root, exponent handled by
/// integer halving with a `sqrt(2)` fixup for odd exponents.
pub fn mantissa_taylor(x: f32) -> f32 {
    let bits = x.to_bits();
    let exponent = (bits >> 23) as i32 - 127;
    // mantissa - 1 in [0, 1): mask the fraction and scale by 2^-23
    let n = (bits & 0x007F_FFFF) as f32 * 1.192_092_9e-7;

    let mut acc = 1.0 + 0.499_598_04 * n;
    let mut power = n * n;
    acc += -0.120_473_08 * power;
    power *= n;
    acc += 0.045_854_25 * power;
    power *= n;
    acc += -0.010_765_647 * power;

    if exponent & 1 != 0 {
        // an odd input exponent leaves an extra sqrt(2) in the output
        acc *= std::f32::consts::SQRT_2;
    }
    let half_exponent = (((exponent >> 1) + 127) as u32) << 23;
    acc * f32::from_bits(half_exponent)
}

/// Babylonian iteration from `x/2` until the value stops changing.
/// Bounded at 64 rounds so float rounding cannot trap the loop in a
/// two-cycle.
pub fn newton_converge(x: f32) -> f32 {
    let mut n = x / 2.0;
    let mut last = 0.0;
    for _ in 0..64 {
        if n == last {
            break;
        }
        last = n;
        n = (n + x / n) / 2.0;
    }
    n
}

/// Bisection between 1 and `x` down to an interval of 0.01.
pub fn bisection(x: f32) -> f32 {
    const ACCURACY: f32 = 0.01;
    let (mut lower, mut upper) = if x < 1.0 { (x, 1.0) } else { (1.0, x) };
    while upper - lower > ACCURACY {
        let guess = 0.5 * (lower + upper);
        if guess * guess > x {
            upper = guess;
        } else {
            lower = guess;
        }
    }
    0.5 * (lower + upper)
}

const CANDIDATES: [(&str, &str, fn(f32) -> f32); 12] = [
    ("#0", "Reference (std sqrt)", std_sqrt),
    ("#1", "log2(x) + bias", biased_shift),
    ("#2", "log2(x) + Babylonian", shift_babylonian),
    ("#3", "log2(x) + bias + Babylonian", biased_shift_babylonian),
    ("#4", "log2(x) + bias + Bakhshali", biased_shift_bakhshali),
    ("#5", "Quake3 + Newton", quake_newton),
    ("#6", "Quake3 + Halley", quake_halley),
    ("#7", "Intel SOC", intel_shift),
    ("#8", "Intel SOC + Bakhshali", intel_shift_bakhshali),
    ("#9", "Taylor3", mantissa_taylor),
    ("#10", "Newton while change", newton_converge),
    ("#11", "Bisection accuracy 0.01", bisection),
];

/// Runs every sqrt candidate over the suite's default range (0, 65535),
/// clamped to the positive domain.
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

/// Runs every sqrt candidate over a caller-chosen range with a
/// caller-chosen generator.
pub fn suite_over<G>(low: f32, high: f32, samples: usize, generator: G) -> ResultSet<f32, f64>
where
    G: Fn(&InputRange<f32>, usize) -> Vec<f32>,
{
    let harness = Harness::new(
        "sqrtf",
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
    fn test_std_sqrt_matches_reference() {
        for x in [0.25_f32, 1.0, 2.0, 144.0, 65535.0] {
            assert!(relative_error(std_sqrt(x), x) < 1e-7);
        }
    }

    #[test]
    fn test_rough_bit_tricks_within_ten_percent() {
        for candidate in [biased_shift, intel_shift] {
            for x in [0.5_f32, 1.0, 3.0, 100.0, 4096.0, 65535.0] {
                assert!(
                    relative_error(candidate(x), x) < 0.10,
                    "x = {x}: got {}",
                    candidate(x)
                );
            }
        }
    }

    #[test]
    fn test_refined_candidates_within_one_percent() {
        for candidate in [
            shift_babylonian,
            biased_shift_babylonian,
            biased_shift_bakhshali,
            intel_shift_bakhshali,
            quake_newton,
            quake_halley,
            mantissa_taylor,
        ] {
            for x in [0.5_f32, 1.0, 3.0, 100.0, 4096.0, 65535.0] {
                assert!(
                    relative_error(candidate(x), x) < 0.01,
                    "x = {x}: got {}",
                    candidate(x)
                );
            }
        }
    }

    #[test]
    fn test_iterative_candidates_converge() {
        for x in [0.5_f32, 2.0, 100.0, 65535.0] {
            assert!(relative_error(newton_converge(x), x) < 1e-6);
            // bisection stops at an absolute interval of 0.01
            assert!((f64::from(bisection(x)) - reference(f64::from(x))).abs() < 0.01);
        }
    }

    #[test]
    fn test_scattered_sampling_is_deterministic_per_seed() {
        let a = suite_sampled(16, Sampling::Scatter { seed: 7 });
        let b = suite_sampled(16, Sampling::Scatter { seed: 7 });
        let c = suite_sampled(16, Sampling::Scatter { seed: 8 });

        assert_eq!(a.len(), 12);
        let reference_values = |set: &ResultSet<f32, f64>| set.first().unwrap().values.clone();
        assert_eq!(reference_values(&a), reference_values(&b));
        assert_ne!(reference_values(&a), reference_values(&c));
        // the reference candidate stays exact regardless of sampling
        assert!(a.first().unwrap().relative_errors.maximum < 1e-6);
    }

    #[test]
    fn test_suite_layout() {
        let set = suite(32);
        assert_eq!(set.len(), 12);
        let first = set.first().unwrap();
        assert_eq!(first.suite, "sqrtf");
        assert_eq!(first.sample_count, 32);
        assert_eq!(first.input_range.low(), f32::MIN_POSITIVE);
        // the std candidate against the f64 reference stays within f32
        // rounding of zero error
        assert!(first.relative_errors.maximum < 1e-6);
    }
}
