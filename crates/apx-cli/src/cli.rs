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

//! Argument model.

use clap::{Parser, ValueEnum};

/// Test speed and precision of numeric function approximations.
#[derive(Parser, Debug)]
#[command(name = "apx")]
#[command(author, version, about = "Test speed and precision of numeric function approximations", long_about = None)]
pub struct Cli {
    /// Function suite to test: "sqrtf", "invsqrtf", "log10f", "expf" or
    /// "sqrti".
    #[arg(short, long)]
    pub function: Option<String>,

    /// Number of input samples across the suite's range (minimum 2).
    #[arg(short = 'n', long, default_value_t = apx_funcs::DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Report format. File outputs land in the working directory.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
    pub output: OutputFormat,

    /// Input sampling strategy.
    #[arg(short, long, value_enum, default_value_t = GeneratorKind::Linear)]
    pub generator: GeneratorKind,

    /// Seed for the scatter generator; ignored for the linear sweep.
    #[arg(long, default_value_t = 1)]
    pub seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Text report to stdout.
    Console,
    /// Results table written to `result.html`.
    Html,
    /// Timestamped export written to `result.json`.
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Evenly spaced sweep across the suite's range.
    Linear,
    /// Seeded uniform random scatter over the same range.
    Scatter,
}

impl GeneratorKind {
    /// Pairs the kind with its seed into the suite-level strategy.
    pub fn sampling(self, seed: u64) -> apx_funcs::Sampling {
        match self {
            GeneratorKind::Linear => apx_funcs::Sampling::Linear,
            GeneratorKind::Scatter => apx_funcs::Sampling::Scatter { seed },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["apx", "-f", "sqrtf"]);
        assert_eq!(cli.function.as_deref(), Some("sqrtf"));
        assert_eq!(cli.samples, apx_funcs::DEFAULT_SAMPLES);
        assert_eq!(cli.output, OutputFormat::Console);
        assert_eq!(cli.generator, GeneratorKind::Linear);
    }

    #[test]
    fn test_scatter_generator_flags() {
        let cli = Cli::parse_from(["apx", "-f", "sqrtf", "-g", "scatter", "--seed", "99"]);
        assert_eq!(cli.generator, GeneratorKind::Scatter);
        assert_eq!(cli.seed, 99);
        assert_eq!(
            cli.generator.sampling(cli.seed),
            apx_funcs::Sampling::Scatter { seed: 99 }
        );
        assert_eq!(
            GeneratorKind::Linear.sampling(5),
            apx_funcs::Sampling::Linear
        );
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::parse_from([
            "apx",
            "--function",
            "sqrti",
            "--samples",
            "500",
            "--output",
            "json",
        ]);
        assert_eq!(cli.function.as_deref(), Some("sqrti"));
        assert_eq!(cli.samples, 500);
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_function_is_optional_at_parse_time() {
        // Missing -f is a runtime exit code, not a clap error.
        let cli = Cli::parse_from(["apx"]);
        assert!(cli.function.is_none());
    }
}
