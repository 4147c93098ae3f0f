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

//! Closed input range for a test suite.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered pair of input bounds.
///
/// The invariant `low <= high` is enforced by swapping at construction;
/// a reversed range is a configuration condition, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange<T> {
    low: T,
    high: T,
}

impl<T: Copy + PartialOrd> InputRange<T> {
    pub fn new(low: T, high: T) -> Self {
        if low > high {
            Self {
                low: high,
                high: low,
            }
        } else {
            Self { low, high }
        }
    }

    pub fn low(&self) -> T {
        self.low
    }

    pub fn high(&self) -> T {
        self.high
    }
}

impl<T: fmt::Display> fmt::Display for InputRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.low, self.high)
    }
}
