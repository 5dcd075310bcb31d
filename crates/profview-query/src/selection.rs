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

//! Typed query selections derived from a parameter set.

use crate::params::QueryParams;
use crate::suffix::Side;
use std::fmt;

/// Base key names for the per-side query fields.
pub mod keys {
    pub const EXPRESSION: &str = "expression";
    pub const FROM: &str = "from";
    pub const TO: &str = "to";
    pub const MERGE: &str = "merge";
    pub const LABELS: &str = "labels";
    pub const TIME: &str = "time";
    pub const TIME_SELECTION: &str = "time_selection";
    pub const COMPARE: &str = "compare";
}

/// Serialized form of a missing or unparsable timestamp.
pub const NO_RANGE: &str = "NaN";

/// Interpret a string flag.
///
/// Only the exact string `"true"` is true; anything else, including an
/// absent value, is false.
///
/// ```
/// use profview_query::parse_bool_flag;
///
/// assert!(parse_bool_flag(Some("true")));
/// assert!(!parse_bool_flag(Some("TRUE")));
/// assert!(!parse_bool_flag(None));
/// ```
pub fn parse_bool_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Parse the leading integer of a string.
///
/// Leading whitespace and an optional sign are accepted, then as many
/// decimal digits as follow (`0x` switches to hexadecimal). Trailing garbage
/// is ignored. Returns `None` when no digit is found or the value overflows.
///
/// ```
/// use profview_query::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix(" 42ms"), Some(42));
/// assert_eq!(parse_int_prefix("-7"), Some(-7));
/// assert_eq!(parse_int_prefix("1.9"), Some(1));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        value = value.checked_mul(i64::from(radix))?.checked_add(i64::from(d))?;
        seen = true;
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Render a timestamp the way it is written back into a query string.
pub fn format_timestamp(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NO_RANGE.to_string(),
    }
}

/// The query driving one side of the explorer.
///
/// `from` and `to` are milliseconds since the epoch; `None` means no range
/// was given or the raw value did not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuerySelection {
    pub expression: String,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub merge: bool,
    pub time_selection: String,
}

impl QuerySelection {
    /// Create a selection for an expression over a range.
    pub fn new(expression: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            expression: expression.into(),
            from: Some(from),
            to: Some(to),
            merge: false,
            time_selection: String::new(),
        }
    }

    /// Set the merge flag.
    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    /// Set the time selection key.
    pub fn with_time_selection(mut self, time_selection: impl Into<String>) -> Self {
        self.time_selection = time_selection.into();
        self
    }

    /// Returns true if both bounds are set.
    pub fn has_range(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Namespaced parameters for this selection on `side`.
    ///
    /// Keys are written as expression, from, to, merge, time_selection.
    pub fn to_params(&self, side: Side) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert(side.key(keys::EXPRESSION), self.expression.as_str());
        params.insert(side.key(keys::FROM), format_timestamp(self.from));
        params.insert(side.key(keys::TO), format_timestamp(self.to));
        params.insert(side.key(keys::MERGE), self.merge);
        params.insert(side.key(keys::TIME_SELECTION), self.time_selection.as_str());
        params
    }
}

/// Derive the query selection for `side`.
///
/// Absent strings become empty; sequences are read in their joined form.
///
/// # Examples
///
/// ```
/// use profview_query::{derive_query_selection, parse, Side};
///
/// let params = parse("expression_a=up&from_a=10&to_a=oops&merge_a=true");
/// let query = derive_query_selection(&params, Side::A);
/// assert_eq!(query.expression, "up");
/// assert_eq!(query.from, Some(10));
/// assert_eq!(query.to, None);
/// assert!(query.merge);
/// ```
pub fn derive_query_selection(params: &QueryParams, side: Side) -> QuerySelection {
    let text = |name: &str| {
        params
            .get_joined(&side.key(name))
            .map(|v| v.into_owned())
            .unwrap_or_default()
    };
    let timestamp = |name: &str| {
        params
            .get_joined(&side.key(name))
            .and_then(|v| parse_int_prefix(&v))
    };

    QuerySelection {
        expression: text(keys::EXPRESSION),
        from: timestamp(keys::FROM),
        to: timestamp(keys::TO),
        merge: parse_bool_flag(params.get_joined(&side.key(keys::MERGE)).as_deref()),
        time_selection: text(keys::TIME_SELECTION),
    }
}

/// Which explorer view the parameters select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewMode {
    /// Only side A is shown.
    Single,
    /// Both sides are shown next to each other.
    Compare,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Compare => write!(f, "compare"),
        }
    }
}

/// Returns true if either side's compare flag is `"true"`.
pub fn is_compare_mode(params: &QueryParams) -> bool {
    Side::ALL
        .iter()
        .any(|side| parse_bool_flag(params.get_joined(&side.key(keys::COMPARE)).as_deref()))
}

/// Decide the view mode for a parameter set.
///
/// ```
/// use profview_query::{parse, view_mode, ViewMode};
///
/// assert_eq!(view_mode(&parse("")), ViewMode::Single);
/// assert_eq!(view_mode(&parse("compare_b=true")), ViewMode::Compare);
/// ```
pub fn view_mode(params: &QueryParams) -> ViewMode {
    if is_compare_mode(params) {
        ViewMode::Compare
    } else {
        ViewMode::Single
    }
}
