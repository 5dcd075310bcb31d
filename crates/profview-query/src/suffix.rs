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

//! Suffix namespacing for comparison sides.
//!
//! Every per-side key is written as `<name>_a` or `<name>_b`. These helpers
//! drop, copy and attach those suffixes. All of them return new sets.

use crate::error::QueryError;
use crate::params::QueryParams;
use std::fmt;
use std::str::FromStr;

/// One of the two comparison slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Left slot; the only slot in single view.
    A,
    /// Right slot; only used while comparing.
    B,
}

impl Side {
    /// Both sides, A first.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// Key suffix for this side (`_a` or `_b`).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::A => "_a",
            Self::B => "_b",
        }
    }

    /// The opposite side.
    pub const fn other(self) -> Side {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Build the namespaced key for `name` on this side.
    ///
    /// ```
    /// use profview_query::Side;
    ///
    /// assert_eq!(Side::B.key("expression"), "expression_b");
    /// ```
    pub fn key(self, name: &str) -> String {
        format!("{}{}", name, self.suffix())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

impl FromStr for Side {
    type Err = QueryError;

    /// Accepts `a`, `b`, `_a`, `_b` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('_').to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            _ => Err(QueryError::InvalidSide(s.to_string())),
        }
    }
}

/// Return a copy of `params` without any key ending in `suffix`.
///
/// Issuing a new query on a side filters that side's suffix first so stale
/// profile selections (`labels_a`, `time_a`, ...) are not inherited.
///
/// # Examples
///
/// ```
/// use profview_query::{filter_suffix, parse, serialize};
///
/// let params = parse("expression_a=up&time_a=5&expression_b=down");
/// assert_eq!(serialize(&filter_suffix(&params, "_a")), "expression_b=down");
/// ```
pub fn filter_suffix(params: &QueryParams, suffix: &str) -> QueryParams {
    let mut filtered = params.clone();
    filtered.retain(|key, _| !key.ends_with(suffix));
    filtered
}

/// Copy every `_b` value onto the matching `_a` key.
///
/// Existing `_a` keys are overwritten in place; the `_b` entries are left
/// untouched for the caller to filter. Used when closing side A promotes
/// side B.
///
/// # Examples
///
/// ```
/// use profview_query::{parse, serialize, swap_suffix};
///
/// let params = parse("x_a=0&x_b=1&y_b=2");
/// assert_eq!(serialize(&swap_suffix(&params)), "x_a=1&x_b=1&y_b=2&y_a=2");
/// ```
pub fn swap_suffix(params: &QueryParams) -> QueryParams {
    let from = Side::B.suffix();
    let to = Side::A.suffix();
    let mut swapped = params.clone();
    for (key, value) in params.iter() {
        if let Some(base) = key.strip_suffix(from) {
            swapped.insert(format!("{}{}", base, to), value.clone());
        }
    }
    swapped
}

/// Append `suffix` to every key.
///
/// # Examples
///
/// ```
/// use profview_query::{parse, serialize, suffix_params};
///
/// let params = parse("mode=merge&from=1");
/// assert_eq!(serialize(&suffix_params(&params, "_b")), "mode_b=merge&from_b=1");
/// ```
pub fn suffix_params(params: &QueryParams, suffix: &str) -> QueryParams {
    params
        .iter()
        .map(|(key, value)| (format!("{}{}", key, suffix), value.clone()))
        .collect()
}
