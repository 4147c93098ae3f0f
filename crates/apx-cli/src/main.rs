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

//! apx binary entry point.

use apx_cli::{execute, Cli, CliError};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Timing an unoptimized binary measures the optimizer's absence, not
    // the candidates. Refused before argument parsing so the exit code is
    // stable regardless of what was passed.
    if cfg!(debug_assertions) {
        let err = CliError::DebugBuild;
        eprintln!("{} {}", "error:".red().bold(), err);
        return ExitCode::from(err.exit_code());
    }

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}
