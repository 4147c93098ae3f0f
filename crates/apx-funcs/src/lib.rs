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

//! Approximation suites.
//!
//! Each module bundles one reference function with its fast-math
//! substitutes and a `suite(samples)` constructor that drives the
//! [`apx_core::Harness`] over the suite's default input range.
//!
//! The candidate bodies are collected from the usual public sources
//! (Wikipedia's square-root methods survey, the Quake III source, the
//! Intel Software Optimization Cookbook, the eBay log articles). They
//! assume positive, in-domain input; the suite constructors clamp their
//! ranges accordingly, and the harness passes whatever it sampled.
//!
//! Bit-level tricks use `to_bits`/`from_bits` throughout; no type punning
//! through shared storage.

pub mod domain;
pub mod exp;
pub mod inv_sqrt;
pub mod isqrt;
pub mod log10;
pub mod sqrt;

/// Suite names accepted by the command-line layer, in menu order.
pub const SUITE_NAMES: &[&str] = &["sqrtf", "invsqrtf", "log10f", "expf", "sqrti"];

/// Default sample count used when the caller does not override it.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Input sampling strategy for a suite run.
///
/// [`Sampling::Linear`] is the default sweep; [`Sampling::Scatter`] draws
/// the same number of samples uniformly at random, deterministic per seed,
/// for checking that a candidate's error profile is not an artifact of
/// evenly spaced inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sampling {
    Linear,
    Scatter { seed: u64 },
}
