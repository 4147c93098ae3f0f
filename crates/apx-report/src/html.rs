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

//! Standalone HTML results table.
//!
//! One self-contained page per suite run: inline stylesheet, one table,
//! one row per candidate with both error summaries side by side. Built by
//! plain string assembly; the cell values come from `Display` and contain
//! nothing that needs escaping.

use crate::error::ReportError;
use apx_core::{ErrorSeries, Record, ResultSet};
use std::fmt::Display;
use std::fmt::Write as FmtWrite;
use std::path::Path;

const STYLESHEET: &str = include_str!("styles.css");

fn push_error_cells<S: Display>(out: &mut String, errors: &ErrorSeries<S>) {
    let _ = write!(
        out,
        "<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
        errors.minimum, errors.maximum, errors.mean, errors.median, errors.variance
    );
}

fn push_row<I, S: Display>(out: &mut String, record: &Record<I, S>) {
    out.push_str("<tr>");
    let _ = write!(out, "<td>{}</td>", record.description);
    push_error_cells(out, &record.absolute_errors);
    push_error_cells(out, &record.relative_errors);
    let _ = write!(
        out,
        "<td>{}</td><td>{:.3}</td>",
        record.stddev,
        record.ns_per_call()
    );
    out.push_str("</tr>\n");
}

/// Renders the full page as a string.
pub fn render<I, S>(results: &ResultSet<I, S>) -> Result<String, ReportError>
where
    I: Display,
    S: Display,
{
    let first = results.first().ok_or(ReportError::EmptyResultSet)?;

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = write!(page, "<style>\n{STYLESHEET}</style>\n");
    let _ = write!(page, "<title>apx results - {}</title>\n", first.suite);
    page.push_str("</head>\n<body id=\"home\">\n");
    let _ = write!(
        page,
        "<h1 class=\"center\">{}: {}, {} samples</h1>\n",
        first.suite, first.input_range, first.sample_count
    );

    page.push_str("<div class=\"centercontainer\">\n<table id=\"results\">\n<thead>\n");
    page.push_str(
        "<tr><th></th><th colspan=\"5\">Absolute error</th>\
         <th colspan=\"5\">Relative error</th><th></th><th></th></tr>\n",
    );
    page.push_str(
        "<tr><th>Method</th>\
         <th>Min.</th><th>Max.</th><th>Mean</th><th>Median</th><th>Var.</th>\
         <th>Min.</th><th>Max.</th><th>Mean</th><th>Median</th><th>Var.</th>\
         <th>stddev</th><th>Execution time<br>[ns / call]</th></tr>\n",
    );
    page.push_str("</thead>\n<tbody>\n");
    for record in results.iter() {
        push_row(&mut page, record);
    }
    page.push_str("</tbody>\n</table>\n</div>\n</body>\n</html>\n");
    Ok(page)
}

/// Renders the page and writes it to `path`.
pub fn export_html<I, S>(results: &ResultSet<I, S>, path: &Path) -> Result<(), ReportError>
where
    I: Display,
    S: Display,
{
    let page = render(results)?;
    std::fs::write(path, page)?;
    Ok(())
}
