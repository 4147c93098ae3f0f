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

//! Report error type.

use thiserror::Error;

/// Errors produced by the report formatters.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the report to its output failed.
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the result set failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The result set holds no records; there is nothing to report and no
    /// first record to take the suite context from.
    #[error("result set is empty")]
    EmptyResultSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ReportError::from(io);
        assert!(matches!(err, ReportError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_empty_set_message() {
        assert_eq!(
            ReportError::EmptyResultSet.to_string(),
            "result set is empty"
        );
    }
}
