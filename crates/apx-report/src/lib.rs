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

//! Report formatters.
//!
//! Three consumers of a [`apx_core::ResultSet`]: a console text report, a
//! standalone HTML results table, and a timestamped JSON export. All of
//! them read record fields only; none of them re-measure or re-reduce
//! anything. An empty set is rejected up front because the first record
//! carries the suite-level context every format leads with.

pub mod console;
pub mod error;
pub mod html;
pub mod json;

pub use console::{print_results, write_results};
pub use error::ReportError;
pub use html::export_html;
pub use json::{export_json, to_json_string};
