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

//! End-to-end checks of the `apx` binary.
//!
//! `cargo test` builds the binary without optimization, so the only
//! observable behavior here is the debug-build refusal: exit code 99 on
//! every invocation, before arguments are even parsed. The argument and
//! dispatch paths are covered by the unit tests in the library, which run
//! regardless of profile.

use assert_cmd::Command;
use predicates::prelude::*;

fn apx() -> Command {
    Command::cargo_bin("apx").unwrap()
}

#[test]
fn test_debug_binary_refuses_to_measure() {
    apx()
        .arg("-f")
        .arg("sqrtf")
        .assert()
        .code(99)
        .stderr(predicate::str::contains("unoptimized"))
        .stderr(predicate::str::contains("--release"));
}

#[test]
fn test_refusal_precedes_argument_handling() {
    // No arguments at all: still 99, not the missing-function code.
    apx().assert().code(99);
    apx().arg("--definitely-not-a-flag").assert().code(99);
}
