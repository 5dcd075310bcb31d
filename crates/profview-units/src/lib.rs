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

//! Unit conversion and display formatting for profile values.
//!
//! Profile samples carry raw numbers: nanoseconds of CPU, bytes allocated,
//! object counts. This crate converts between time units, summarizes
//! durations and scales values to a readable magnitude.
//!
//! # Examples
//!
//! ```
//! use profview_units::{convert_time, format_duration, value_formatter, TimeObject, TimeUnit};
//!
//! assert_eq!(convert_time(1.5, "s", "ms"), 1500.0);
//! assert_eq!(value_formatter(1500.0, "bytes", 2), "1.5kB");
//!
//! let time = TimeObject::of(TimeUnit::Hours, 25.0);
//! assert_eq!(format_duration(&time, TimeUnit::Nanoseconds), "1d 1h");
//! ```
//!
//! Functions taking unit or category names never fail. Unknown names are
//! logged at `warn` level and a fallback is returned; use
//! [`UnitFormatter::with_sink`] to capture them instead.

mod diagnostic;
mod error;
mod formatter;
mod text;
mod time;
mod value;

pub use diagnostic::{CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use error::{UnitError, UnitResult};
pub use formatter::{FormatterConfig, UnitFormatter, DEFAULT_DIGITS};
pub use text::{capitalize, number_to_string, to_fixed, MAX_FRACTION_DIGITS};
pub use time::{format_duration, TimeObject, TimeUnit};
pub use value::{format_with_tiers, Tier, ValueCategory};

/// Convert `value` between two named time units.
///
/// Unknown units are logged and `value` is returned unchanged.
pub fn convert_time(value: f64, from: &str, to: &str) -> f64 {
    UnitFormatter::default().convert_time(value, from, to)
}

/// Format `num` in the named category with `digits` decimals.
///
/// Unknown categories are logged and the bare number is returned.
pub fn value_formatter(num: f64, category: &str, digits: usize) -> String {
    UnitFormatter::default().value_formatter(num, category, digits)
}
