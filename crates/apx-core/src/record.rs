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

//! Result data model.
//!
//! Pure data, no behavior beyond construction and derived accessors. One
//! [`Record`] is created per candidate evaluation and never mutated after
//! it is returned; a [`ResultSet`] keeps records in candidate evaluation
//! order, which is also the report column order.

use crate::range::InputRange;
use crate::stats::{summarize, ErrorStats};
use crate::value::Storage;
use serde::{Deserialize, Serialize};

/// Per-sample error values plus their five summary scalars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorSeries<S> {
    /// One non-negative error value per sample.
    pub values: Vec<S>,
    pub minimum: S,
    pub maximum: S,
    pub mean: S,
    pub median: S,
    pub variance: S,
}

impl<S: Storage> ErrorSeries<S> {
    /// Reduces a raw error sequence into a series with its scalars.
    pub fn reduce(values: Vec<S>) -> Self {
        let ErrorStats {
            minimum,
            maximum,
            mean,
            median,
            variance,
        } = summarize(&values);
        Self {
            values,
            minimum,
            maximum,
            mean,
            median,
            variance,
        }
    }
}

/// The immutable outcome of one candidate evaluation.
///
/// `call_ns` and `overhead_ns` are both totals accumulated over the same
/// number of loop passes over the sample buffer, so they are directly
/// subtractable; see [`Record::ns_per_call`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record<I, S> {
    /// Suite this record belongs to, e.g. "sqrtf".
    pub suite: String,
    /// Candidate identifier, e.g. "#3".
    pub name: String,
    /// Human-readable description of the method.
    pub description: String,
    pub input_range: InputRange<I>,
    pub sample_count: usize,
    /// Candidate output (widened to storage) for every sample.
    pub values: Vec<S>,
    /// `|output - reference|` per sample.
    pub absolute_errors: ErrorSeries<S>,
    /// `|1 - output/reference|` per sample, 0 where the reference is 0.
    pub relative_errors: ErrorSeries<S>,
    /// Sample standard deviation of the absolute errors,
    /// `sqrt(sum(e^2) / (N - 1))`.
    pub stddev: S,
    /// Total candidate time in nanoseconds, accumulated over all timing
    /// passes.
    pub call_ns: u64,
    /// Total loop-and-fetch overhead in nanoseconds, accumulated over the
    /// same number of calibration passes.
    pub overhead_ns: u64,
}

impl<I, S> Record<I, S> {
    /// Overhead-corrected nanoseconds per call,
    /// `(call_ns - overhead_ns) / sample_count`.
    ///
    /// Both totals are accumulated consistently, so this single division
    /// is the whole conversion; dividing by the loop count again would be
    /// wrong. Saturates at zero when measurement noise leaves the
    /// overhead above the candidate time.
    pub fn ns_per_call(&self) -> f64 {
        self.call_ns.saturating_sub(self.overhead_ns) as f64 / self.sample_count as f64
    }

    /// Calibrated overhead in nanoseconds per call.
    pub fn overhead_per_call(&self) -> f64 {
        self.overhead_ns as f64 / self.sample_count as f64
    }
}

/// Ordered collection of records from one suite.
///
/// The first record's metadata (suite name, range, sample count, overhead)
/// is authoritative for suite-level context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet<I, S> {
    records: Vec<Record<I, S>>,
}

impl<I, S> ResultSet<I, S> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record<I, S>) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record<I, S>] {
        &self.records
    }

    pub fn first(&self) -> Option<&Record<I, S>> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<I, S>> {
        self.records.iter()
    }
}

impl<I, S> Default for ResultSet<I, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, S> From<Vec<Record<I, S>>> for ResultSet<I, S> {
    fn from(records: Vec<Record<I, S>>) -> Self {
        Self { records }
    }
}

impl<'a, I, S> IntoIterator for &'a ResultSet<I, S> {
    type Item = &'a Record<I, S>;
    type IntoIter = std::slice::Iter<'a, Record<I, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
