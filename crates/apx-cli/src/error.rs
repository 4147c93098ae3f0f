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

//! CLI error type and its exit-code mapping.

use apx_report::ReportError;
use thiserror::Error;

/// Errors terminating a CLI run, each with a distinct process exit code
/// so scripted callers can tell the failure modes apart.
#[derive(Debug, Error)]
pub enum CliError {
    /// No `--function` argument was given.
    #[error("no function name passed, use --function (see --help)")]
    MissingFunction,

    /// The requested suite does not exist.
    #[error("unsupported function \"{0}\", expected one of: {}", apx_funcs::SUITE_NAMES.join(", "))]
    UnknownFunction(String),

    /// Timing in an unoptimized build would measure the wrong thing.
    #[error("unoptimized build, timing results would be meaningless; rebuild with --release")]
    DebugBuild,

    /// A report formatter failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingFunction => 2,
            CliError::UnknownFunction(_) => 3,
            CliError::DebugBuild => 99,
            CliError::Report(_) => 1,
        }
    }
}
