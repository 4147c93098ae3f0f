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

//! Integer square root candidates over `u32`.
//!
//! Collected classics, see Wikipedia's "Methods of computing square
//! roots" and Jack W. Crenshaw's *Math Toolkit for Real-Time
//! Development*. All candidates return the floor of the exact root and
//! assume positive input.

use crate::{domain, Sampling};
use apx_core::{generate, Harness, InputRange, ResultSet};

/// Truncating square root in `f64`. The 53-bit mantissa covers the full
/// `u32` range exactly, so this is the trusted reference.
pub fn reference(x: f64) -> f64 {
    x.sqrt().trunc()
}

/// The floating-point route most code takes in practice.
pub fn std_isqrt(x: u32) -> u32 {
    (f64::from(x)).sqrt() as u32
}

/// Optimized binomial theorem, builds the root one bit per step from the
/// identity `(u + v)^2 = u^2 + 2uv + v^2`.
/// See <https://www.drdobbs.com/parallel/algorithm-alley/184409869>.
pub fn binomial(x: u32) -> u32 {
    if x < 2 {
        return x;
    }
    let mut l2 = 0u32;
    let mut u = x >> 2;
    while u != 0 {
        l2 += 1;
        u >>= 2;
    }
    let mut u = 1u32 << l2;
    let mut v = u;
    let mut u2 = u << l2;
    while l2 > 0 {
        l2 -= 1;
        v >>= 1;
        // The trial square can wrap near the top of the range; the
        // comparison against x still rejects those candidates.
        let n = ((u + u + v) << l2).wrapping_add(u2);
        if n <= x {
            u += v;
            u2 = n;
        }
    }
    u
}

/// Abacus algorithm, Martin Guy @ UKC, June 1985, from a book on
/// programming abaci by Mr C. Woo.
pub fn abacus(x: u32) -> u32 {
    let mut op = x;
    let mut res = 0u32;
    // highest power of four at or below the argument
    let mut one = 1u32 << 30;
    while one > op {
        one >>= 2;
    }
    while one != 0 {
        if op >= res + one {
            op -= res + one;
            res += one << 1;
        }
        res >>= 1;
        one >>= 2;
    }
    res
}

/// Shift-and-subtract from Jack W. Crenshaw's 1998 Embedded article,
/// two input bits consumed per round.
pub fn crenshaw(x: u32) -> u32 {
    let mut x = x;
    let mut rem = 0u32;
    let mut root = 0u32;
    for _ in 0..16 {
        root <<= 1;
        rem = (rem << 2) | (x >> 30);
        x <<= 2;
        if root < rem {
            rem -= root | 1;
            root += 2;
        }
    }
    root >> 1
}

/// Test-and-set descent from the top result bit down, Ross M. Fosler,
/// Microchip app note TB040.
pub fn fosler(x: u32) -> u32 {
    let mut res = 0u32;
    let mut add = 0x8000u32;
    for _ in 0..16 {
        let temp = res | add;
        // temp at most 0xFFFF, the square cannot wrap
        if x >= temp * temp {
            res = temp;
        }
        add >>= 1;
    }
    res
}

/// Bit-descent variant by Tristan Muntsinger, sets each bit
/// speculatively and clears it when the square overshoots.
pub fn muntsinger(x: u32) -> u32 {
    let mut c = 0x8000u32;
    let mut g = 0x8000u32;
    loop {
        if g * g > x {
            g ^= c;
        }
        c >>= 1;
        if c == 0 {
            return g;
        }
        g |= c;
    }
}

const CANDIDATES: [(&str, &str, fn(u32) -> u32); 6] = [
    ("#0", "Reference (f64 sqrt)", std_isqrt),
    ("#1", "Optimized binomial theorem", binomial),
    ("#2", "Abacus algorithm", abacus),
    ("#3", "Crenshaw Embedded 1998", crenshaw),
    ("#4", "Fosler Microchip", fosler),
    ("#5", "Tristan Muntsinger", muntsinger),
];

/// Runs every integer root candidate over the full `u32` range.
pub fn suite(samples: usize) -> ResultSet<u32, f64> {
    suite_sampled(samples, Sampling::Linear)
}

/// Runs the suite with the chosen sampling strategy.
pub fn suite_sampled(samples: usize, sampling: Sampling) -> ResultSet<u32, f64> {
    match sampling {
        Sampling::Linear => suite_over(1, u32::MAX, samples, generate::linear),
        Sampling::Scatter { seed } => suite_over(1, u32::MAX, samples, move |range, count| {
            generate::uniform(range, count, seed)
        }),
    }
}

/// Runs every integer root candidate over a caller-chosen range, lower
/// bound clamped to 1.
pub fn suite_over<G>(low: u32, high: u32, samples: usize, generator: G) -> ResultSet<u32, f64>
where
    G: Fn(&InputRange<u32>, usize) -> Vec<u32>,
{
    let harness = Harness::new(
        "sqrti",
        domain::positive_u32(low, high),
        samples,
        generator,
        reference,
    );
    harness.run_all(&CANDIDATES)
}
