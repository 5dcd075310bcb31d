// Dweve profview - Profile Explorer View State
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Unit commands - Convert times and format values

use super::{write_json, write_output};
use crate::error::{CliError, CliResult};
use profview::units::{
    format_duration as summarize, number_to_string, CollectingSink, DiagnosticSink,
    FormatterConfig, TimeObject, TimeUnit,
};
use profview::UnitFormatter;

/// Run `f` against a formatter, failing on the first diagnostic when
/// `strict` is set. Otherwise diagnostics are logged as warnings.
fn with_formatter<T>(
    config: FormatterConfig,
    strict: bool,
    f: impl FnOnce(&UnitFormatter<&dyn DiagnosticSink>) -> T,
) -> CliResult<T> {
    let collecting = CollectingSink::new();
    let tracing = profview::units::TracingSink;
    let sink: &dyn DiagnosticSink = if strict { &collecting } else { &tracing };

    let out = f(&UnitFormatter::with_sink(config, sink));
    match collecting.take().into_iter().next() {
        Some(diagnostic) => Err(CliError::invalid_input(diagnostic.message())),
        None => Ok(out),
    }
}

/// Convert `value` between two time units.
pub fn convert_time(value: f64, from: &str, to: &str, strict: bool, json: bool) -> CliResult<()> {
    let converted = with_formatter(FormatterConfig::default(), strict, |f| {
        f.convert_time(value, from, to)
    })?;
    if json {
        write_json(&serde_json::json!({ "value": converted, "unit": to }), false)
    } else {
        write_output(&number_to_string(converted))
    }
}

/// Summarize `value` units as a duration.
pub fn format_duration(value: f64, unit: &str) -> CliResult<()> {
    let unit: TimeUnit = unit.parse()?;
    write_output(&summarize(&TimeObject::of(unit, value), TimeUnit::Nanoseconds))
}

/// Format `value` in `category` with `digits` decimals.
pub fn format_value(value: f64, category: &str, digits: usize, strict: bool) -> CliResult<()> {
    let config = FormatterConfig::new().with_digits(digits);
    let formatted = with_formatter(config, strict, |f| f.format_value(value, category))?;
    write_output(&formatted)
}
