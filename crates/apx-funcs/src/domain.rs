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

//! Domain clamps applied to requested input ranges.
//!
//! The root and logarithm candidates assume positive, non-zero input, so a
//! requested bound at or below zero is pulled up to the smallest positive
//! value instead of being rejected. Silent normalization, same policy as
//! the range swap in the core.

use apx_core::InputRange;

/// Clamps both bounds to the positive normal `f32` domain.
pub fn positive_f32(low: f32, high: f32) -> InputRange<f32> {
    let fix = |v: f32| {
        if v <= 0.0 {
            f32::MIN_POSITIVE
        } else if v > f32::MAX {
            f32::MAX
        } else {
            v
        }
    };
    InputRange::new(fix(low), fix(high))
}

/// Clamps the lower bound to 1 for integer-root candidates.
pub fn positive_u32(low: u32, high: u32) -> InputRange<u32> {
    InputRange::new(low.max(1), high.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_lower_bound_pulled_up() {
        let r = positive_f32(0.0, 65535.0);
        assert_eq!(r.low(), f32::MIN_POSITIVE);
        assert_eq!(r.high(), 65535.0);
    }

    #[test]
    fn test_negative_bounds_pulled_up() {
        let r = positive_f32(-2.0, -1.0);
        assert_eq!(r.low(), f32::MIN_POSITIVE);
        assert_eq!(r.high(), f32::MIN_POSITIVE);
    }

    #[test]
    fn test_in_domain_range_untouched() {
        let r = positive_f32(1.0, 2.0);
        assert_eq!((r.low(), r.high()), (1.0, 2.0));
    }

    #[test]
    fn test_u32_zero_pulled_to_one() {
        let r = positive_u32(0, u32::MAX);
        assert_eq!(r.low(), 1);
        assert_eq!(r.high(), u32::MAX);
    }
}
