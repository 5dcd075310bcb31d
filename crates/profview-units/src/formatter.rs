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

//! The unit formatter.
//!
//! [`UnitFormatter`] wraps the conversion and formatting functions with a
//! [`DiagnosticSink`]. String unit and category names are resolved here;
//! unknown names are reported and a fallback value is returned instead of an
//! error.

use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
use crate::text::number_to_string;
use crate::time::{self, TimeObject, TimeUnit};
use crate::value::ValueCategory;

/// Default number of decimals for [`UnitFormatter::format_value`].
pub const DEFAULT_DIGITS: usize = 2;

/// Formatter configuration.
///
/// # Examples
///
/// ```
/// use profview_units::FormatterConfig;
///
/// let config = FormatterConfig::new().with_digits(1);
/// assert_eq!(config.digits, 1);
/// assert_eq!(FormatterConfig::default().digits, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct FormatterConfig {
    /// Decimals used by [`UnitFormatter::format_value`].
    pub digits: usize,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
        }
    }
}

impl FormatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }
}

/// Converts and formats profile values, reporting bad input to a sink.
///
/// # Examples
///
/// ```
/// use profview_units::{CollectingSink, FormatterConfig, UnitFormatter};
///
/// let sink = CollectingSink::new();
/// let formatter = UnitFormatter::with_sink(FormatterConfig::default(), &sink);
///
/// assert_eq!(formatter.convert_time(2.0, "seconds", "milliseconds"), 2000.0);
/// assert_eq!(formatter.convert_time(2.0, "fortnights", "seconds"), 2.0);
/// assert_eq!(sink.diagnostics().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct UnitFormatter<S: DiagnosticSink = TracingSink> {
    config: FormatterConfig,
    sink: S,
}

impl Default for UnitFormatter {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

impl UnitFormatter {
    /// Create a formatter that logs diagnostics through `tracing`.
    pub fn new(config: FormatterConfig) -> Self {
        Self::with_sink(config, TracingSink)
    }
}

impl<S: DiagnosticSink> UnitFormatter<S> {
    pub fn with_sink(config: FormatterConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Convert `value` between two named time units.
    ///
    /// If either unit is unknown, a diagnostic is reported and `value` is
    /// returned unchanged.
    pub fn convert_time(&self, value: f64, from: &str, to: &str) -> f64 {
        match (from.parse::<TimeUnit>(), to.parse::<TimeUnit>()) {
            (Ok(from), Ok(to)) => TimeUnit::convert(value, from, to),
            _ => {
                self.sink.report(Diagnostic::new(
                    DiagnosticKind::InvalidTimeUnit,
                    format!("invalid start or end unit provided: {} -> {}", from, to),
                ));
                value
            }
        }
    }

    /// See [`time::format_duration`].
    pub fn format_duration(&self, time: &TimeObject, target: TimeUnit) -> String {
        time::format_duration(time, target)
    }

    /// Format `num` in the named category with `digits` decimals.
    ///
    /// An unknown category reports a diagnostic and prints the bare number.
    pub fn value_formatter(&self, num: f64, category: &str, digits: usize) -> String {
        match category.parse::<ValueCategory>() {
            Ok(category) => category.format(num, digits),
            Err(e) => {
                self.sink
                    .report(Diagnostic::new(DiagnosticKind::UnknownCategory, e.to_string()));
                number_to_string(num)
            }
        }
    }

    /// [`value_formatter`](Self::value_formatter) with the configured digits.
    pub fn format_value(&self, num: f64, category: &str) -> String {
        self.value_formatter(num, category, self.config.digits)
    }
}
