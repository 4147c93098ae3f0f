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

//! Console text report.
//!
//! A suite header with the shared context (range, sample count, per-call
//! overhead), then one block per candidate with both error summaries, the
//! standard deviation, and the overhead-corrected execution time.

use crate::error::ReportError;
use apx_core::{ErrorSeries, Record, ResultSet};
use std::fmt::Display;
use std::io::Write;

fn write_errors<S: Display, W: Write>(
    out: &mut W,
    label: &str,
    errors: &ErrorSeries<S>,
) -> Result<(), ReportError> {
    writeln!(
        out,
        "{label} error: ({}, {}), mean: {}, median: {}, variance: {}",
        errors.minimum, errors.maximum, errors.mean, errors.median, errors.variance
    )?;
    Ok(())
}

fn write_record<I, S: Display, W: Write>(
    out: &mut W,
    record: &Record<I, S>,
) -> Result<(), ReportError> {
    writeln!(out, "{} - {}", record.name, record.description)?;
    write_errors(out, "Absolute", &record.absolute_errors)?;
    write_errors(out, "Relative", &record.relative_errors)?;
    writeln!(out, "Standard deviation: {}", record.stddev)?;
    writeln!(out, "Execution time: {:.3} ns / call", record.ns_per_call())?;
    Ok(())
}

/// Writes the full text report for one suite run.
///
/// Fails with [`ReportError::EmptyResultSet`] when there is no first
/// record to take the suite context from.
pub fn write_results<I, S, W>(out: &mut W, results: &ResultSet<I, S>) -> Result<(), ReportError>
where
    I: Display,
    S: Display,
    W: Write,
{
    let first = results.first().ok_or(ReportError::EmptyResultSet)?;
    writeln!(out, "Testing: {}", first.suite)?;
    writeln!(
        out,
        "Input range: {}, {} samples in range",
        first.input_range, first.sample_count
    )?;
    writeln!(
        out,
        "Approximate loop and call overhead (already subtracted): {:.3} ns / call",
        first.overhead_per_call()
    )?;
    writeln!(out, "Tested functions:")?;
    writeln!(out)?;
    for record in results.iter() {
        write_record(out, record)?;
        writeln!(out)?;
    }
    Ok(())
}

/// [`write_results`] to standard output.
pub fn print_results<I: Display, S: Display>(
    results: &ResultSet<I, S>,
) -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    write_results(&mut stdout.lock(), results)
}
