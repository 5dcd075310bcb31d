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

//! Range command - Resolve range keys and query bounds

use super::{write_json, write_output};
use crate::error::CliResult;
use chrono::{DateTime, Utc};
use clap::Args;
use profview::range::{format_range_label, AbsoluteDate, AbsolutePickerState};
use profview::DateTimeRange;
use serde::Serialize;

/// Where the range comes from and how to resolve it.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Range key (`relative:<unit>|<value>` or `absolute:<from_ms>-<to_ms>`)
    #[arg(value_name = "KEY")]
    pub key: Option<String>,

    /// Fallback start in milliseconds when the key is missing or invalid
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<i64>,

    /// Fallback end in milliseconds when the key is missing or invalid
    #[arg(long, allow_hyphen_values = true)]
    pub to: Option<i64>,

    /// Resolve relative dates against this instant (milliseconds) instead
    /// of the current time
    #[arg(long, allow_hyphen_values = true)]
    pub now: Option<i64>,

    /// Convert through the absolute picker before printing
    #[arg(long)]
    pub absolute: bool,
}

#[derive(Serialize)]
struct RangeReport {
    label: String,
    key: String,
    relative: bool,
    from_ms: i64,
    to_ms: i64,
}

fn resolve_now(now: Option<i64>) -> CliResult<DateTime<Utc>> {
    match now {
        Some(ms) => Ok(AbsoluteDate::from_ms(ms)?.value),
        None => Ok(Utc::now()),
    }
}

/// Print the range described by `args`.
///
/// A key that does not parse is an error unless `--from`/`--to` are given,
/// in which case the bounds are used as the selection would be.
pub fn range(args: &RangeArgs, json: bool, pretty: bool) -> CliResult<()> {
    let now = resolve_now(args.now)?;
    let key = args.key.as_deref().unwrap_or_default();

    let mut range = if args.from.is_none() && args.to.is_none() && !key.is_empty() {
        DateTimeRange::from_range_key(key)?
    } else {
        DateTimeRange::from_selection(key, args.from, args.to)
    };
    if args.absolute {
        let (from, to) = AbsolutePickerState::new(&range, now).apply();
        range = DateTimeRange::absolute(from, to);
    }

    let report = RangeReport {
        label: format_range_label(&range),
        key: range.range_key_at(now),
        relative: range.is_relative(),
        from_ms: range.from_ms(now),
        to_ms: range.to_ms(now),
    };

    if json {
        return write_json(&report, pretty);
    }
    write_output(&format!("label: {}", report.label))?;
    write_output(&format!("key: {}", report.key))?;
    write_output(&format!("from: {}", report.from_ms))?;
    write_output(&format!("to: {}", report.to_ms))
}
