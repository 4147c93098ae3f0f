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

//! Benchmark harness.
//!
//! Owns the input sample set and the reference value series for one suite,
//! calibrates the loop-and-fetch overhead once at construction, and
//! evaluates one candidate function per [`Harness::run`] call.
//!
//! Every timed region pushes its value through [`std::hint::black_box`] so
//! the optimizer cannot prove the work unobserved and eliminate it. That is
//! the only thing the harness protects against: a candidate that produces
//! non-finite output for some sample is not intercepted, the values flow
//! into the statistics and show up in the report.
//!
//! Execution is strictly sequential and nothing inside a timed region
//! allocates or does I/O.

use crate::generate;
use crate::range::InputRange;
use crate::record::{ErrorSeries, Record, ResultSet};
use crate::value::{SampleValue, Storage, Widen};
use std::hint::black_box;
use std::time::Instant;

/// Number of passes over the sample buffer per timing measurement.
///
/// Both the calibration total and every candidate total accumulate over
/// this many passes, so the two stay directly subtractable. A larger count
/// reduces relative measurement noise at the cost of run time.
pub const LOOP_COUNT: u64 = 10_000;

/// Smallest usable sample count; smaller requests are clamped, not
/// rejected.
pub const MIN_SAMPLES: usize = 2;

/// Test harness for one suite: a named reference function evaluated over a
/// fixed sample set.
///
/// `I` is the candidate input type and `S` the wider-precision storage
/// type; the candidate output type is a parameter of [`Harness::run`] so
/// one harness can evaluate candidates with different output types.
pub struct Harness<I, S> {
    suite: String,
    range: InputRange<I>,
    samples: Vec<I>,
    reference: Vec<S>,
    overhead_ns: u64,
}

impl<I, S> Harness<I, S>
where
    I: SampleValue + Widen<S>,
    S: Storage,
{
    /// Builds the harness: generates the sample set, computes the
    /// reference series, and runs the calibration pass.
    ///
    /// The sample count is clamped to [`MIN_SAMPLES`]; the range was
    /// normalized by [`InputRange::new`]. Construction never fails.
    pub fn new<G, R>(
        suite: impl Into<String>,
        range: InputRange<I>,
        sample_count: usize,
        generator: G,
        reference_fn: R,
    ) -> Self
    where
        G: Fn(&InputRange<I>, usize) -> Vec<I>,
        R: Fn(S) -> S,
    {
        let sample_count = sample_count.max(MIN_SAMPLES);
        let samples = generator(&range, sample_count);
        let reference = samples.iter().map(|&x| reference_fn(x.widen())).collect();

        // Calibration: traverse the buffer exactly like the timing loop
        // but with no candidate computation. The total over all passes
        // estimates loop and fetch cost, subtracted later by the report
        // layer.
        let start = Instant::now();
        for _ in 0..LOOP_COUNT {
            for &x in &samples {
                black_box(x);
            }
        }
        let overhead_ns = start.elapsed().as_nanos() as u64;

        Self {
            suite: suite.into(),
            range,
            samples,
            reference,
            overhead_ns,
        }
    }

    /// Shorthand for [`Harness::new`] with the linear-sweep generator.
    pub fn with_linear_sweep<R>(
        suite: impl Into<String>,
        range: InputRange<I>,
        sample_count: usize,
        reference_fn: R,
    ) -> Self
    where
        R: Fn(S) -> S,
    {
        Self::new(suite, range, sample_count, generate::linear, reference_fn)
    }

    /// Times and scores one candidate function.
    ///
    /// Callable any number of times on the same harness; each call is
    /// independent and leaves the harness state untouched. The timing
    /// phase runs [`LOOP_COUNT`] passes over the sample buffer with the
    /// candidate output fed to the discard sink; the precision phase is a
    /// separate, untimed single pass.
    pub fn run<O, F>(&self, name: &str, description: &str, candidate: F) -> Record<I, S>
    where
        O: Widen<S>,
        F: Fn(I) -> O,
    {
        let start = Instant::now();
        for _ in 0..LOOP_COUNT {
            for &x in &self.samples {
                black_box(candidate(x));
            }
        }
        let call_ns = start.elapsed().as_nanos() as u64;

        let n = self.samples.len();
        let mut values = Vec::with_capacity(n);
        let mut absolute = Vec::with_capacity(n);
        let mut relative = Vec::with_capacity(n);
        for (&x, &reference) in self.samples.iter().zip(&self.reference) {
            let output = candidate(x).widen();
            values.push(output);
            absolute.push((output - reference).abs());
            // A zero reference would turn any deviation into infinity;
            // excluded from the relative series by convention so the
            // aggregates stay finite.
            relative.push(if reference != S::ZERO {
                (S::ONE - output / reference).abs()
            } else {
                S::ZERO
            });
        }

        // Bessel-corrected, unlike the biased variance inside each error
        // series.
        let sum_sq = absolute.iter().fold(S::ZERO, |acc, &e| acc + e * e);
        let stddev = (sum_sq / S::from_count(n - 1)).sqrt();

        Record {
            suite: self.suite.clone(),
            name: name.to_string(),
            description: description.to_string(),
            input_range: self.range,
            sample_count: n,
            values,
            absolute_errors: ErrorSeries::reduce(absolute),
            relative_errors: ErrorSeries::reduce(relative),
            stddev,
            call_ns,
            overhead_ns: self.overhead_ns,
        }
    }

    /// Runs a list of named candidates in order and collects the records.
    pub fn run_all<O, F>(&self, candidates: &[(&str, &str, F)]) -> ResultSet<I, S>
    where
        O: Widen<S>,
        F: Fn(I) -> O,
    {
        let mut set = ResultSet::new();
        for (name, description, candidate) in candidates {
            set.push(self.run(name, description, candidate));
        }
        set
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn range(&self) -> InputRange<I> {
        self.range
    }

    pub fn samples(&self) -> &[I] {
        &self.samples
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn overhead_ns(&self) -> u64 {
        self.overhead_ns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_harness(low: f32, high: f32, count: usize) -> Harness<f32, f64> {
        Harness::with_linear_sweep("identity", InputRange::new(low, high), count, |x| x)
    }

    #[test]
    fn test_sample_count_clamped_to_two() {
        for requested in [0, 1] {
            let harness = identity_harness(1.0, 10.0, requested);
            assert_eq!(harness.sample_count(), 2);
        }
        let harness = identity_harness(1.0, 10.0, 5);
        assert_eq!(harness.sample_count(), 5);
    }

    #[test]
    fn test_reversed_range_normalized_before_sampling() {
        let harness = Harness::with_linear_sweep(
            "identity",
            InputRange::new(10.0_f32, 1.0),
            4,
            |x: f64| x,
        );
        assert_eq!(harness.range().low(), 1.0);
        assert_eq!(harness.range().high(), 10.0);
        assert_eq!(harness.samples()[0], 1.0);
        assert_eq!(*harness.samples().last().unwrap(), 10.0);
    }

    #[test]
    fn test_identity_candidate_has_zero_error() {
        let harness = identity_harness(1.0, 10.0, 10);
        let record = harness.run("#0", "pass-through", |x: f32| x);

        assert_eq!(record.suite, "identity");
        assert_eq!(record.sample_count, 10);
        assert!(record.absolute_errors.values.iter().all(|&e| e == 0.0));
        assert!(record.relative_errors.values.iter().all(|&e| e == 0.0));
        assert_eq!(record.absolute_errors.mean, 0.0);
        assert_eq!(record.absolute_errors.median, 0.0);
        assert_eq!(record.absolute_errors.variance, 0.0);
        assert_eq!(record.relative_errors.variance, 0.0);
        assert_eq!(record.stddev, 0.0);
        assert!(record.call_ns > 0);
        assert!(record.overhead_ns > 0);
    }

    #[test]
    fn test_offset_candidate_errors() {
        let harness = identity_harness(1.0, 5.0, 5);
        let record = harness.run("#1", "off by one", |x: f32| x + 1.0);

        assert_eq!(record.absolute_errors.values, vec![1.0; 5]);
        assert_eq!(record.absolute_errors.mean, 1.0);
        assert_eq!(record.absolute_errors.median, 1.0);
        assert_eq!(record.absolute_errors.variance, 0.0);
        assert!(record.stddev > 0.0);
    }

    #[test]
    fn test_zero_reference_excluded_from_relative_error() {
        let harness = Harness::with_linear_sweep(
            "zero",
            InputRange::new(0.0_f32, 4.0),
            5,
            |_: f64| 0.0,
        );
        let record = harness.run("#0", "anything", |x: f32| x);

        assert!(record.relative_errors.values.iter().all(|&e| e == 0.0));
        assert!(record
            .relative_errors
            .values
            .iter()
            .all(|e| e.is_finite()));
    }

    #[test]
    fn test_run_is_repeatable_on_one_harness() {
        let harness = identity_harness(1.0, 10.0, 8);
        let first = harness.run("#0", "first", |x: f32| x);
        let second = harness.run("#1", "second", |x: f32| x * 2.0);
        let third = harness.run("#2", "first again", |x: f32| x);

        // Harness state is untouched between runs: precision results for
        // the same candidate are identical, and the overhead is shared.
        assert_eq!(first.absolute_errors.values, third.absolute_errors.values);
        assert_eq!(first.overhead_ns, second.overhead_ns);
        assert!(second.absolute_errors.mean > 0.0);
    }

    #[test]
    fn test_run_all_preserves_candidate_order() {
        let harness = identity_harness(1.0, 5.0, 5);
        let candidates: [(&str, &str, fn(f32) -> f32); 3] = [
            ("#0", "pass-through", |x| x),
            ("#1", "off by one", |x| x + 1.0),
            ("#2", "doubled", |x| x * 2.0),
        ];
        let set = harness.run_all(&candidates);

        assert_eq!(set.len(), 3);
        let names: Vec<_> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["#0", "#1", "#2"]);
        assert_eq!(set.first().unwrap().absolute_errors.mean, 0.0);
        assert_eq!(set.records()[1].absolute_errors.mean, 1.0);
        // every record shares the harness calibration
        assert!(set.iter().all(|r| r.overhead_ns == harness.overhead_ns()));
    }

    #[test]
    fn test_non_finite_candidate_output_propagates() {
        let harness = identity_harness(1.0, 4.0, 4);
        let record = harness.run("#0", "poisoned", |_: f32| f32::NAN);

        assert!(record.absolute_errors.values.iter().all(|e| e.is_nan()));
        assert!(record.absolute_errors.mean.is_nan());
        assert!(record.stddev.is_nan());
    }

    #[test]
    fn test_widening_candidate_output_types() {
        // One harness, candidates with different output widths.
        let harness = Harness::with_linear_sweep(
            "widen",
            InputRange::new(1.0_f32, 4.0),
            4,
            |x: f64| x,
        );
        let narrow = harness.run("#0", "f32 out", |x: f32| x);
        let wide = harness.run("#1", "f64 out", |x: f32| f64::from(x));
        assert_eq!(narrow.absolute_errors.mean, 0.0);
        assert_eq!(wide.absolute_errors.mean, 0.0);
    }
}
