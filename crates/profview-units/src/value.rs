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

//! Magnitude-based value formatting.
//!
//! A value category selects a tier table: an ordered list of
//! `(multiplier, symbol)` pairs. The largest tier whose multiplier does not
//! exceed the magnitude of the value is used.

use crate::error::UnitError;
use crate::text::{number_to_string, to_fixed};
use crate::time::TimeUnit;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// One magnitude step of a tier table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub multiplier: f64,
    pub symbol: &'static str,
}

const fn tier(multiplier: f64, symbol: &'static str) -> Tier {
    Tier { multiplier, symbol }
}

const BYTES: [Tier; 7] = [
    tier(1.0, "Bytes"),
    tier(1e3, "kB"),
    tier(1e6, "MB"),
    tier(1e9, "GB"),
    tier(1e12, "TB"),
    tier(1e15, "PB"),
    tier(1e18, "EB"),
];

const COUNT: [Tier; 7] = [
    tier(1.0, ""),
    tier(1e3, "k"),
    tier(1e6, "M"),
    tier(1e9, "G"),
    tier(1e12, "T"),
    tier(1e15, "P"),
    tier(1e18, "E"),
];

const NANOSECONDS: [Tier; 9] = [
    tier(TimeUnit::Nanoseconds.multiplier(), TimeUnit::Nanoseconds.symbol()),
    tier(TimeUnit::Microseconds.multiplier(), TimeUnit::Microseconds.symbol()),
    tier(TimeUnit::Milliseconds.multiplier(), TimeUnit::Milliseconds.symbol()),
    tier(TimeUnit::Seconds.multiplier(), TimeUnit::Seconds.symbol()),
    tier(TimeUnit::Minutes.multiplier(), TimeUnit::Minutes.symbol()),
    tier(TimeUnit::Hours.multiplier(), TimeUnit::Hours.symbol()),
    tier(TimeUnit::Days.multiplier(), TimeUnit::Days.symbol()),
    tier(TimeUnit::Weeks.multiplier(), TimeUnit::Weeks.symbol()),
    tier(TimeUnit::Years.multiplier(), TimeUnit::Years.symbol()),
];

/// What a profile value measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueCategory {
    Bytes,
    Nanoseconds,
    Count,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 3] = [Self::Bytes, Self::Nanoseconds, Self::Count];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Nanoseconds => "nanoseconds",
            Self::Count => "count",
        }
    }

    /// Tier table, smallest first.
    pub fn tiers(self) -> &'static [Tier] {
        match self {
            Self::Bytes => &BYTES,
            Self::Nanoseconds => &NANOSECONDS,
            Self::Count => &COUNT,
        }
    }

    /// Format `num` in this category with `digits` decimals.
    pub fn format(self, num: f64, digits: usize) -> String {
        format_with_tiers(num, self.tiers(), digits)
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueCategory {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnitError::UnknownCategory(s.to_string()))
    }
}

fn trailing_zeros() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.0+$|(\.[0-9]*[1-9])0+$").expect("valid trailing zero pattern"))
}

/// Format `num` against an arbitrary tier table.
///
/// `tiers` must be ordered smallest multiplier first and must not be empty.
/// Values below every tier use the first one. `digits` is clamped to
/// [`MAX_FRACTION_DIGITS`](crate::MAX_FRACTION_DIGITS).
///
/// ```
/// use profview_units::{format_with_tiers, Tier};
///
/// let tiers = [Tier { multiplier: 1.0, symbol: "B" }, Tier { multiplier: 1024.0, symbol: "KiB" }];
/// assert_eq!(format_with_tiers(1536.0, &tiers, 2), "1.5KiB");
/// ```
pub fn format_with_tiers(num: f64, tiers: &[Tier], digits: usize) -> String {
    let magnitude = num.abs();
    let index = (1..tiers.len())
        .rev()
        .find(|&i| magnitude >= tiers[i].multiplier)
        .unwrap_or(0);
    let Some(tier) = tiers.get(index) else {
        return number_to_string(num);
    };

    let fixed = to_fixed(num / tier.multiplier, digits);
    let trimmed = trailing_zeros().replace(&fixed, "$1");
    format!("{}{}", trimmed, tier.symbol)
}
