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

//! Unit formatting and date range commands.

use super::OutputArgs;
use crate::commands::{self, RangeArgs};
use crate::error::CliResult;
use clap::Subcommand;
use profview::units::{DEFAULT_DIGITS, MAX_FRACTION_DIGITS};

/// Commands on profile values and date ranges.
#[derive(Subcommand)]
pub enum UnitCommands {
    /// Convert a value between time units
    ///
    /// Units are names (`seconds`) or symbols (`s`, `ms`, `us`, `ns`, ...).
    ConvertTime {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit
        from: String,

        /// Target unit
        to: String,

        /// Fail on unknown units instead of echoing the value
        #[arg(long)]
        strict: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Summarize a duration, e.g. `1h 2m 5s`
    FormatDuration {
        /// Amount of time
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Unit of the amount
        #[arg(short, long, default_value = "ms")]
        unit: String,
    },

    /// Format a value with a magnitude suffix, e.g. `1.5kB`
    FormatValue {
        /// Raw value
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Value category (bytes, nanoseconds, count)
        category: String,

        /// Decimal digits (0 to 100)
        #[arg(short, long, default_value_t = DEFAULT_DIGITS, value_parser = parse_digits)]
        digits: usize,

        /// Fail on unknown categories instead of printing the bare number
        #[arg(long)]
        strict: bool,
    },

    /// Resolve a range key or millisecond bounds
    Range {
        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

fn parse_digits(s: &str) -> Result<usize, String> {
    let digits: usize = s.parse().map_err(|e| format!("{e}"))?;
    if digits > MAX_FRACTION_DIGITS {
        return Err(format!("must be at most {MAX_FRACTION_DIGITS}"));
    }
    Ok(digits)
}

impl UnitCommands {
    pub fn execute(self) -> CliResult<()> {
        match self {
            UnitCommands::ConvertTime {
                value,
                from,
                to,
                strict,
                json,
            } => commands::convert_time(value, &from, &to, strict, json),
            UnitCommands::FormatDuration { value, unit } => commands::format_duration(value, &unit),
            UnitCommands::FormatValue {
                value,
                category,
                digits,
                strict,
            } => commands::format_value(value, &category, digits, strict),
            UnitCommands::Range { range, output } => {
                commands::range(&range, output.json, output.pretty)
            }
        }
    }
}
