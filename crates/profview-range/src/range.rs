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

//! Date-time ranges and their range keys.
//!
//! A range is stored in the query string as a compact key:
//!
//! - `relative:<unit>|<value>` for "the last `value` units"
//! - `absolute:<from_ms>-<to_ms>` for fixed bounds
//!
//! The key kind follows `from`: a relative `from` always produces a relative
//! key.

use crate::date::{AbsoluteDate, RangeDate, RelativeDate, RelativeUnit};
use crate::error::{RangeError, RangeResult};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use tracing::debug;

const RELATIVE_PREFIX: &str = "relative:";
const ABSOLUTE_PREFIX: &str = "absolute:";

/// A time window with two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTimeRange {
    pub from: RangeDate,
    pub to: RangeDate,
}

impl Default for DateTimeRange {
    /// The last hour.
    fn default() -> Self {
        Self::relative(RelativeUnit::Hour, 1)
    }
}

impl DateTimeRange {
    pub fn new(from: impl Into<RangeDate>, to: impl Into<RangeDate>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The last `value` units, ending now.
    pub fn relative(unit: RelativeUnit, value: u32) -> Self {
        Self::new(RelativeDate::new(unit, value), RelativeDate::new(unit, 0))
    }

    /// Fixed bounds.
    pub fn absolute(from: AbsoluteDate, to: AbsoluteDate) -> Self {
        Self::new(from, to)
    }

    /// Fixed bounds from milliseconds since the epoch.
    pub fn from_ms_bounds(from_ms: i64, to_ms: i64) -> RangeResult<Self> {
        Ok(Self::absolute(
            AbsoluteDate::from_ms(from_ms)?,
            AbsoluteDate::from_ms(to_ms)?,
        ))
    }

    pub fn is_relative(&self) -> bool {
        self.from.is_relative()
    }

    /// Range key, resolving any relative `to` against the current time.
    pub fn range_key(&self) -> String {
        self.range_key_at(Utc::now())
    }

    /// Range key, resolving any relative `to` against `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use profview_range::{DateTimeRange, RelativeUnit};
    /// use chrono::Utc;
    ///
    /// let now = Utc::now();
    /// assert_eq!(DateTimeRange::relative(RelativeUnit::Minute, 15).range_key_at(now), "relative:minute|15");
    ///
    /// let range = DateTimeRange::from_ms_bounds(1000, 2000).unwrap();
    /// assert_eq!(range.range_key_at(now), "absolute:1000-2000");
    /// ```
    pub fn range_key_at(&self, now: DateTime<Utc>) -> String {
        match self.from {
            RangeDate::Relative(from) => {
                format!("{}{}|{}", RELATIVE_PREFIX, from.unit, from.value)
            }
            RangeDate::Absolute(from) => {
                format!("{}{}-{}", ABSOLUTE_PREFIX, from.to_ms(), self.to.to_ms(now))
            }
        }
    }

    /// Parse a range key.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] when the prefix, unit, value or timestamps are
    /// not valid.
    pub fn from_range_key(key: &str) -> RangeResult<Self> {
        if let Some(rest) = key.strip_prefix(RELATIVE_PREFIX) {
            let (unit, value) = rest
                .split_once('|')
                .ok_or_else(|| RangeError::MalformedKey(key.to_string()))?;
            let unit = unit.parse::<RelativeUnit>()?;
            let value = value
                .parse::<u32>()
                .map_err(|_| RangeError::InvalidValue(value.to_string()))?;
            return Ok(Self::relative(unit, value));
        }

        if let Some(rest) = key.strip_prefix(ABSOLUTE_PREFIX) {
            // A leading '-' belongs to a negative `from`.
            let split = rest
                .get(1..)
                .and_then(|tail| tail.find('-'))
                .map(|i| i + 1)
                .ok_or_else(|| RangeError::MalformedKey(key.to_string()))?;
            let (from, to) = (&rest[..split], &rest[split + 1..]);
            let parse = |ms: &str| {
                ms.parse::<i64>()
                    .map_err(|_| RangeError::MalformedKey(key.to_string()))
            };
            return Self::from_ms_bounds(parse(from)?, parse(to)?);
        }

        Err(RangeError::MalformedKey(key.to_string()))
    }

    /// Rebuild the range shown for a query selection.
    ///
    /// A valid range key wins. Otherwise both millisecond bounds give an
    /// absolute range, and anything else falls back to the default.
    pub fn from_selection(time_selection: &str, from_ms: Option<i64>, to_ms: Option<i64>) -> Self {
        match Self::from_range_key(time_selection) {
            Ok(range) => range,
            Err(e) => {
                if !time_selection.is_empty() {
                    debug!(error = %e, "ignoring time selection");
                }
                from_ms
                    .zip(to_ms)
                    .and_then(|(from, to)| Self::from_ms_bounds(from, to).ok())
                    .unwrap_or_default()
            }
        }
    }

    pub fn from_datetime(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.from.to_datetime(now)
    }

    pub fn to_datetime(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.to.to_datetime(now)
    }

    /// Start in milliseconds since the epoch.
    pub fn from_ms(&self, now: DateTime<Utc>) -> i64 {
        self.from.to_ms(now)
    }

    /// End in milliseconds since the epoch.
    pub fn to_ms(&self, now: DateTime<Utc>) -> i64 {
        self.to.to_ms(now)
    }
}

impl fmt::Display for DateTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_range_label(self))
    }
}

/// The instant `hours` before `now`.
pub fn date_hours_ago(now: DateTime<Utc>, hours: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::hours(i64::from(hours)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Button text for a range.
///
/// ```
/// use profview_range::{format_range_label, DateTimeRange, RelativeUnit};
///
/// assert_eq!(format_range_label(&DateTimeRange::default()), "Last 1 hour");
/// assert_eq!(format_range_label(&DateTimeRange::relative(RelativeUnit::Day, 7)), "Last 7 days");
///
/// let range = DateTimeRange::from_ms_bounds(0, 60_000).unwrap();
/// assert_eq!(format_range_label(&range), "1970-01-01 00:00:00 to 1970-01-01 00:01:00");
/// ```
pub fn format_range_label(range: &DateTimeRange) -> String {
    match range.from {
        RangeDate::Relative(from) if from.value == 1 => format!("Last 1 {}", from.unit),
        RangeDate::Relative(from) => format!("Last {} {}s", from.value, from.unit),
        RangeDate::Absolute(from) => format!("{} to {}", from, range.to),
    }
}
