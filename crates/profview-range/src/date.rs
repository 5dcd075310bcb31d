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

//! Range endpoints.
//!
//! An endpoint is either relative to the moment it is resolved ("2 hours
//! ago") or a fixed UTC instant.

use crate::error::{RangeError, RangeResult};
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

/// Granularity of a relative date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RelativeUnit {
    Minute,
    Hour,
    Day,
}

impl RelativeUnit {
    pub const ALL: [RelativeUnit; 3] = [Self::Minute, Self::Hour, Self::Day];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }

    /// Length of `value` units.
    pub fn duration(self, value: u32) -> Duration {
        let value = i64::from(value);
        match self {
            Self::Minute => Duration::minutes(value),
            Self::Hour => Duration::hours(value),
            Self::Day => Duration::days(value),
        }
    }
}

impl fmt::Display for RelativeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RelativeUnit {
    type Err = RangeError;

    /// Accepts the singular or plural name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let singular = s.strip_suffix('s').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|unit| unit.name() == singular)
            .ok_or_else(|| RangeError::UnknownUnit(s.to_string()))
    }
}

/// `value` units before the moment of resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeDate {
    pub unit: RelativeUnit,
    pub value: u32,
}

impl RelativeDate {
    pub fn new(unit: RelativeUnit, value: u32) -> Self {
        Self { unit, value }
    }

    /// The instant `value` units before `now`.
    ///
    /// Saturates at the earliest representable instant.
    pub fn to_datetime(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.unit.duration(self.value))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl fmt::Display for RelativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            0 => write!(f, "now"),
            1 => write!(f, "1 {} ago", self.unit),
            n => write!(f, "{} {}s ago", n, self.unit),
        }
    }
}

/// A fixed UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsoluteDate {
    pub value: DateTime<Utc>,
}

impl AbsoluteDate {
    pub fn new(value: DateTime<Utc>) -> Self {
        Self { value }
    }

    /// Build from milliseconds since the Unix epoch.
    ///
    /// ```
    /// use profview_range::AbsoluteDate;
    ///
    /// let date = AbsoluteDate::from_ms(1_650_000_000_000).unwrap();
    /// assert_eq!(date.to_ms(), 1_650_000_000_000);
    /// assert!(AbsoluteDate::from_ms(i64::MAX).is_err());
    /// ```
    pub fn from_ms(ms: i64) -> RangeResult<Self> {
        Utc.timestamp_millis_opt(ms)
            .single()
            .map(Self::new)
            .ok_or(RangeError::InvalidTimestamp(ms))
    }

    pub fn to_ms(&self) -> i64 {
        self.value.timestamp_millis()
    }
}

impl fmt::Display for AbsoluteDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Either kind of endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum RangeDate {
    Relative(RelativeDate),
    Absolute(AbsoluteDate),
}

impl RangeDate {
    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// Resolve to an instant; absolute dates ignore `now`.
    pub fn to_datetime(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Relative(date) => date.to_datetime(now),
            Self::Absolute(date) => date.value,
        }
    }

    /// Milliseconds since the epoch, resolved against `now`.
    pub fn to_ms(&self, now: DateTime<Utc>) -> i64 {
        self.to_datetime(now).timestamp_millis()
    }
}

impl From<RelativeDate> for RangeDate {
    fn from(date: RelativeDate) -> Self {
        Self::Relative(date)
    }
}

impl From<AbsoluteDate> for RangeDate {
    fn from(date: AbsoluteDate) -> Self {
        Self::Absolute(date)
    }
}

impl fmt::Display for RangeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative(date) => date.fmt(f),
            Self::Absolute(date) => date.fmt(f),
        }
    }
}
