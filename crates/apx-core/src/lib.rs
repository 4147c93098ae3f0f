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

//! apx benchmark core
//!
//! Times and scores alternative numeric approximation functions against a
//! trusted reference implementation, producing comparable precision and
//! performance statistics.
//!
//! ## Components
//!
//! - **Harness**: owns a fixed input sample set and a reference value
//!   series, calibrates measurement overhead once, and evaluates one
//!   candidate function per [`Harness::run`] call
//! - **Error statistics**: reduces per-sample error sequences into
//!   min/max/mean/median/variance summaries
//! - **Result model**: immutable [`Record`]s collected into an ordered
//!   [`ResultSet`] consumed by the report layer
//!
//! ## Usage
//!
//! ```
//! use apx_core::{generate, Harness, InputRange, ResultSet};
//!
//! let harness = Harness::new(
//!     "identity",
//!     InputRange::new(1.0_f32, 10.0),
//!     10,
//!     generate::linear,
//!     |x: f64| x,
//! );
//! let mut results = ResultSet::new();
//! results.push(harness.run("#0", "pass-through", |x: f32| x));
//! assert_eq!(results.len(), 1);
//! ```

pub mod generate;
pub mod harness;
pub mod range;
pub mod record;
pub mod stats;
pub mod value;

pub use harness::{Harness, LOOP_COUNT, MIN_SAMPLES};
pub use range::InputRange;
pub use record::{ErrorSeries, Record, ResultSet};
pub use stats::{summarize, ErrorStats};
pub use value::{SampleValue, Storage, Widen};
