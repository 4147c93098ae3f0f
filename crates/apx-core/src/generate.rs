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

//! Input sample generators.
//!
//! A generator takes an [`InputRange`] and a sample count and returns an
//! ordered sequence of exactly that many values. The harness accepts any
//! closure with this shape; the functions here cover the sampling
//! strategies the built-in suites use.
//!
//! [`linear`] is deterministic and places sample `i` at position `i` on the
//! sweep, which is what the report layer assumes for its x-axis. [`uniform`]
//! is deterministic per seed but scatters values, so the sample-index ↔
//! position correspondence does not hold for it.

use crate::range::InputRange;
use crate::value::SampleValue;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Linear sweep: `value[i] = low + (high - low) * i / (count - 1)`.
///
/// The default generator for every built-in suite. Endpoints are included
/// exactly.
pub fn linear<T: SampleValue>(range: &InputRange<T>, count: usize) -> Vec<T> {
    (0..count)
        .map(|i| T::lerp_step(range.low(), range.high(), i, count))
        .collect()
}

/// Uniform random scatter over the closed range, seeded for reproducible
/// reporting.
pub fn uniform<T>(range: &InputRange<T>, count: usize, seed: u64) -> Vec<T>
where
    T: Copy + PartialOrd + SampleUniform,
{
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.gen_range(range.low()..=range.high()))
        .collect()
}
