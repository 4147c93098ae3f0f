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

//! Error statistics reducer.
//!
//! Reduces a per-sample error sequence into its five summary scalars. Two
//! conventions here are deliberate and must not be "fixed":
//!
//! - the median is the element selected at index `N/2` after partial
//!   ordering, i.e. the upper-middle element for even `N`, not the
//!   averaged middle pair;
//! - the variance is the biased population variance
//!   `sum(e^2)/N - mean^2`, while the harness computes its standard
//!   deviation separately with Bessel's correction. One is biased, one is
//!   not; the asymmetry is intentional.

use crate::value::Storage;
use std::cmp::Ordering;

/// Summary scalars of one error series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStats<S> {
    pub minimum: S,
    pub maximum: S,
    pub mean: S,
    pub median: S,
    pub variance: S,
}

/// Reduces an error sequence into [`ErrorStats`].
///
/// Scalars are always recomputed from the full series. Non-finite values
/// propagate into the result; that is the diagnostic signal for a candidate
/// that left its domain. An empty series reduces to all zeros.
pub fn summarize<S: Storage>(values: &[S]) -> ErrorStats<S> {
    if values.is_empty() {
        return ErrorStats {
            minimum: S::ZERO,
            maximum: S::ZERO,
            mean: S::ZERO,
            median: S::ZERO,
            variance: S::ZERO,
        };
    }

    let mut minimum = values[0];
    let mut maximum = values[0];
    let mut sum = S::ZERO;
    let mut sum_sq = S::ZERO;
    for &v in values {
        if v < minimum {
            minimum = v;
        }
        if v > maximum {
            maximum = v;
        }
        sum = sum + v;
        sum_sq = sum_sq + v * v;
    }

    let n = S::from_count(values.len());
    let mean = sum / n;
    let variance = sum_sq / n - mean * mean;

    ErrorStats {
        minimum,
        maximum,
        mean,
        median: select_median(values),
        variance,
    }
}

/// Selection-based median: the element that lands at index `N/2` under a
/// total order. NaN compares as equal so a poisoned series still reduces.
fn select_median<S: Storage>(values: &[S]) -> S {
    let mut scratch = values.to_vec();
    let mid = scratch.len() / 2;
    let (_, median, _) = scratch
        .select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    *median
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_mean() {
        let stats = summarize(&[2.0_f64, 8.0, 5.0]);
        assert_eq!(stats.minimum, 2.0);
        assert_eq!(stats.maximum, 8.0);
        assert_eq!(stats.mean, 5.0);
    }

    #[test]
    fn test_median_upper_middle_for_even_n() {
        // Upper-middle selection, not the 2.5 an averaged-pair median
        // would give.
        let stats = summarize(&[1.0_f64, 2.0, 3.0, 4.0]);
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_median_unsorted_input() {
        let stats = summarize(&[4.0_f64, 1.0, 3.0, 2.0]);
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn test_variance_is_biased() {
        // For [1,3,5,7,9]: mean 5, sum of squares 165,
        // biased variance 165/5 - 25 = 8. Bessel-corrected central
        // variance would be 10; the ratio is (N-1)/N.
        let values = [1.0_f64, 3.0, 5.0, 7.0, 9.0];
        let stats = summarize(&values);
        assert_eq!(stats.variance, 8.0);

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let bessel: f64 =
            values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0);
        assert_eq!(stats.variance / bessel, (n - 1.0) / n);
    }

    #[test]
    fn test_all_zero_series() {
        let stats = summarize(&[0.0_f64; 8]);
        assert_eq!(stats.minimum, 0.0);
        assert_eq!(stats.maximum, 0.0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.variance, 0.0);
    }

    #[test]
    fn test_empty_series_reduces_to_zero() {
        let stats = summarize::<f64>(&[]);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.variance, 0.0);
    }

    #[test]
    fn test_nan_propagates_without_panicking() {
        let stats = summarize(&[1.0_f64, f64::NAN, 3.0]);
        assert!(stats.mean.is_nan());
    }
}
