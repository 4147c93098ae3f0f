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

//! apx command-line interface.
//!
//! Selects a suite, runs it, and hands the result set to one of the
//! report formatters. The binary entry point lives in `main.rs`; the
//! argument model, the error-to-exit-code mapping, and the dispatch live
//! here so they stay unit-testable.

pub mod cli;
pub mod error;
pub mod run;

pub use cli::{Cli, OutputFormat};
pub use error::CliError;
pub use run::execute;
