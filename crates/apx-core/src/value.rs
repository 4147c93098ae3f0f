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

//! Numeric trait seams for the harness type parameters.
//!
//! A suite is parameterized over three types: the candidate input `I`, the
//! candidate output `O`, and a wider-precision storage type `S` that all
//! reference values, outputs, and error statistics are kept in. The
//! conversions are explicit; nothing here relies on implicit promotion.

use std::ops::{Add, Div, Mul, Sub};

/// Storage type for reference values and error statistics.
///
/// Must be at least as wide as every candidate output type in the suite so
/// that the reference series is not itself a source of measured error.
pub trait Storage:
    Copy
    + PartialOrd
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;

    /// Converts a sample count into the storage type, for mean and
    /// variance denominators.
    fn from_count(n: usize) -> Self;
}

impl Storage for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn abs(self) -> Self {
        self.abs()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn from_count(n: usize) -> Self {
        n as f32
    }
}

impl Storage for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn abs(self) -> Self {
        self.abs()
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn from_count(n: usize) -> Self {
        n as f64
    }
}

/// Explicit widening conversion into a storage type.
///
/// Implemented for every (input, storage) and (output, storage) pair the
/// suites use. Widening happens before the reference function is applied
/// and before any error arithmetic.
pub trait Widen<S>: Copy {
    fn widen(self) -> S;
}

impl Widen<f32> for f32 {
    fn widen(self) -> f32 {
        self
    }
}

impl Widen<f64> for f32 {
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Widen<f64> for f64 {
    fn widen(self) -> f64 {
        self
    }
}

impl Widen<f64> for u32 {
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

/// Input value usable by the linear-sweep generator.
pub trait SampleValue: Copy + PartialOrd {
    /// Returns `low + (high - low) * index / (count - 1)`.
    ///
    /// `count` is at least 2 and `index < count`, so the endpoints map to
    /// `low` and `high` exactly.
    fn lerp_step(low: Self, high: Self, index: usize, count: usize) -> Self;
}

impl SampleValue for f32 {
    fn lerp_step(low: Self, high: Self, index: usize, count: usize) -> Self {
        low + (high - low) * index as f32 / (count - 1) as f32
    }
}

impl SampleValue for f64 {
    fn lerp_step(low: Self, high: Self, index: usize, count: usize) -> Self {
        low + (high - low) * index as f64 / (count - 1) as f64
    }
}

impl SampleValue for u32 {
    fn lerp_step(low: Self, high: Self, index: usize, count: usize) -> Self {
        // 64-bit intermediate: (high - low) * index overflows u32 for wide
        // ranges long before the final division brings it back in range.
        let span = u64::from(high - low);
        low + (span * index as u64 / (count as u64 - 1)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_f32_to_f64_is_exact() {
        let x = 0.1_f32;
        let w: f64 = x.widen();
        assert_eq!(w, f64::from(x));
    }

    #[test]
    fn test_widen_u32_to_f64_is_exact() {
        let w: f64 = u32::MAX.widen();
        assert_eq!(w, 4_294_967_295.0);
    }

    #[test]
    fn test_lerp_step_endpoints() {
        assert_eq!(f32::lerp_step(1.0, 5.0, 0, 5), 1.0);
        assert_eq!(f32::lerp_step(1.0, 5.0, 4, 5), 5.0);
        assert_eq!(u32::lerp_step(0, 100, 0, 11), 0);
        assert_eq!(u32::lerp_step(0, 100, 10, 11), 100);
    }

    #[test]
    fn test_lerp_step_u32_full_range() {
        // (high - low) * index must not wrap for the widest range.
        let v = u32::lerp_step(0, u32::MAX, 9999, 10_000);
        assert_eq!(v, u32::MAX);
        let mid = u32::lerp_step(0, u32::MAX, 5000, 10_001);
        assert_eq!(mid, u32::MAX / 2);
    }

    #[test]
    fn test_storage_from_count() {
        assert_eq!(f64::from_count(10), 10.0);
        assert_eq!(f32::from_count(3), 3.0);
    }
}
