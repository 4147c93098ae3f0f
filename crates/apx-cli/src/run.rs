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

//! Suite dispatch and report emission.

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;
use apx_core::ResultSet;
use apx_funcs::{exp, inv_sqrt, isqrt, log10, sqrt};
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

/// Runs the selected suite and emits the report.
///
/// The debug-build refusal is handled by the binary entry point, before
/// any arguments are looked at; by the time this runs the build is
/// trusted.
pub fn execute(cli: &Cli) -> Result<(), CliError> {
    let function = cli.function.as_deref().ok_or(CliError::MissingFunction)?;
    let sampling = cli.generator.sampling(cli.seed);
    let n = cli.samples;
    match function {
        "sqrtf" => emit(&sqrt::suite_sampled(n, sampling), cli.output),
        "invsqrtf" => emit(&inv_sqrt::suite_sampled(n, sampling), cli.output),
        "log10f" => emit(&log10::suite_sampled(n, sampling), cli.output),
        "expf" => emit(&exp::suite_sampled(n, sampling), cli.output),
        "sqrti" => emit(&isqrt::suite_sampled(n, sampling), cli.output),
        other => Err(CliError::UnknownFunction(other.to_string())),
    }
}

fn emit<I, S>(results: &ResultSet<I, S>, format: OutputFormat) -> Result<(), CliError>
where
    I: Copy + Display + Serialize,
    S: Display + Serialize,
{
    write_report(results, format, Path::new("."))
}

/// File reports are named `result.html` / `result.json` inside `dir`;
/// the binary always passes the working directory.
fn write_report<I, S>(
    results: &ResultSet<I, S>,
    format: OutputFormat,
    dir: &Path,
) -> Result<(), CliError>
where
    I: Copy + Display + Serialize,
    S: Display + Serialize,
{
    match format {
        OutputFormat::Console => apx_report::print_results(results)?,
        OutputFormat::Html => apx_report::export_html(results, &dir.join("result.html"))?,
        OutputFormat::Json => apx_report::export_json(results, &dir.join("result.json"))?,
    }
    Ok(())
}
