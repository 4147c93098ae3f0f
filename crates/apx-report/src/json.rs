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

//! JSON export.
//!
//! Serializes the result set inside a small envelope carrying the suite
//! name and an RFC 3339 timestamp, so exported files remain
//! self-describing after they leave the working directory.

use crate::error::ReportError;
use apx_core::ResultSet;
use chrono::Utc;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Envelope<'a, I, S> {
    suite: &'a str,
    generated_at: String,
    sample_count: usize,
    results: &'a ResultSet<I, S>,
}

/// Serializes the set to a pretty-printed JSON string.
pub fn to_json_string<I, S>(results: &ResultSet<I, S>) -> Result<String, ReportError>
where
    I: Serialize,
    S: Serialize,
{
    let first = results.first().ok_or(ReportError::EmptyResultSet)?;
    let envelope = Envelope {
        suite: &first.suite,
        generated_at: Utc::now().to_rfc3339(),
        sample_count: first.sample_count,
        results,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Serializes the set and writes it to `path`.
pub fn export_json<I, S>(results: &ResultSet<I, S>, path: &Path) -> Result<(), ReportError>
where
    I: Serialize,
    S: Serialize,
{
    let body = to_json_string(results)?;
    std::fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apx_core::{Harness, InputRange};

    fn sample_results() -> ResultSet<f32, f64> {
        let harness = Harness::with_linear_sweep(
            "identity",
            InputRange::new(1.0_f32, 10.0),
            4,
            |x: f64| x,
        );
        let mut set = ResultSet::new();
        set.push(harness.run("#0", "pass-through", |x: f32| x));
        set
    }

    #[test]
    fn test_envelope_fields() {
        let body = to_json_string(&sample_results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(value["suite"], "identity");
        assert_eq!(value["sample_count"], 4);
        assert!(value["generated_at"].as_str().unwrap().contains('T'));
        let records = value["results"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "#0");
        assert_eq!(records[0]["absolute_errors"]["mean"], 0.0);
        assert_eq!(records[0]["values"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_empty_set_rejected() {
        let set: ResultSet<f32, f64> = ResultSet::new();
        assert!(matches!(
            to_json_string(&set),
            Err(ReportError::EmptyResultSet)
        ));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        export_json(&sample_results(), &path).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&body).is_ok());
    }
}
