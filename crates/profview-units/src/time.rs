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

//! Time units, conversion and human-readable durations.

use crate::error::UnitError;
use crate::text::number_to_string;
use std::fmt;
use std::str::FromStr;

const NANOS_PER_SECOND: f64 = 1e9;
const NANOS_PER_MINUTE: f64 = 60.0 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: f64 = 60.0 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: f64 = 24.0 * NANOS_PER_HOUR;
const NANOS_PER_WEEK: f64 = 7.0 * NANOS_PER_DAY;
const NANOS_PER_YEAR: f64 = 365.0 * NANOS_PER_DAY;

/// A unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Years,
}

impl TimeUnit {
    /// All units, smallest first.
    pub const ALL: [TimeUnit; 9] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Years,
    ];

    /// Length of one unit in nanoseconds.
    ///
    /// A year is 365 days.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Nanoseconds => 1.0,
            Self::Microseconds => 1e3,
            Self::Milliseconds => 1e6,
            Self::Seconds => NANOS_PER_SECOND,
            Self::Minutes => NANOS_PER_MINUTE,
            Self::Hours => NANOS_PER_HOUR,
            Self::Days => NANOS_PER_DAY,
            Self::Weeks => NANOS_PER_WEEK,
            Self::Years => NANOS_PER_YEAR,
        }
    }

    /// Short display symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "µs",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Weeks => "w",
            Self::Years => "y",
        }
    }

    /// Lower-case plural name, e.g. `milliseconds`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanoseconds => "nanoseconds",
            Self::Microseconds => "microseconds",
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Years => "years",
        }
    }

    /// Convert `value` from `from` to `to`.
    ///
    /// ```
    /// use profview_units::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::convert(1.0, TimeUnit::Seconds, TimeUnit::Milliseconds), 1000.0);
    /// assert_eq!(TimeUnit::convert(60.0, TimeUnit::Seconds, TimeUnit::Minutes), 1.0);
    /// ```
    pub fn convert(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
        (value * from.multiplier()) / to.multiplier()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = UnitError;

    /// Accepts the plural name in any case or the exact symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let by_name = TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(s));
        let by_symbol = || {
            TimeUnit::ALL
                .into_iter()
                .find(|unit| unit.symbol() == s || (s == "us" && *unit == TimeUnit::Microseconds))
        };
        by_name
            .or_else(by_symbol)
            .ok_or_else(|| UnitError::UnknownTimeUnit(s.to_string()))
    }
}

/// A duration split over several units.
///
/// Fields that are `None` (or NaN) contribute nothing.
///
/// ```
/// use profview_units::{TimeObject, TimeUnit};
///
/// let time = TimeObject::new().with(TimeUnit::Minutes, 1.0).with(TimeUnit::Seconds, 30.0);
/// assert_eq!(time.total_nanoseconds(), 90e9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeObject {
    pub nanoseconds: Option<f64>,
    pub microseconds: Option<f64>,
    pub milliseconds: Option<f64>,
    pub seconds: Option<f64>,
    pub minutes: Option<f64>,
    pub hours: Option<f64>,
    pub days: Option<f64>,
    pub weeks: Option<f64>,
    pub years: Option<f64>,
}

impl TimeObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// A duration with a single field set.
    pub fn of(unit: TimeUnit, value: f64) -> Self {
        Self::new().with(unit, value)
    }

    /// Set the field for `unit`.
    pub fn with(mut self, unit: TimeUnit, value: f64) -> Self {
        *self.field_mut(unit) = Some(value);
        self
    }

    /// Value of the field for `unit`.
    pub fn get(&self, unit: TimeUnit) -> Option<f64> {
        match unit {
            TimeUnit::Nanoseconds => self.nanoseconds,
            TimeUnit::Microseconds => self.microseconds,
            TimeUnit::Milliseconds => self.milliseconds,
            TimeUnit::Seconds => self.seconds,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Hours => self.hours,
            TimeUnit::Days => self.days,
            TimeUnit::Weeks => self.weeks,
            TimeUnit::Years => self.years,
        }
    }

    fn field_mut(&mut self, unit: TimeUnit) -> &mut Option<f64> {
        match unit {
            TimeUnit::Nanoseconds => &mut self.nanoseconds,
            TimeUnit::Microseconds => &mut self.microseconds,
            TimeUnit::Milliseconds => &mut self.milliseconds,
            TimeUnit::Seconds => &mut self.seconds,
            TimeUnit::Minutes => &mut self.minutes,
            TimeUnit::Hours => &mut self.hours,
            TimeUnit::Days => &mut self.days,
            TimeUnit::Weeks => &mut self.weeks,
            TimeUnit::Years => &mut self.years,
        }
    }

    /// Sum of every field in nanoseconds.
    pub fn total_nanoseconds(&self) -> f64 {
        TimeUnit::ALL
            .into_iter()
            .filter_map(|unit| {
                self.get(unit)
                    .filter(|v| !v.is_nan())
                    .map(|v| TimeUnit::convert(v, unit, TimeUnit::Nanoseconds))
            })
            .sum()
    }
}

/// Summarize a duration for display.
///
/// At one second or more, every unit from years down to seconds with a
/// non-zero whole count is written as `<count><symbol>`; sub-second
/// remainders are dropped. Below one second the whole milliseconds are
/// shown, or `<1ms` when there are none. `_target` does not change the
/// output.
///
/// # Examples
///
/// ```
/// use profview_units::{format_duration, TimeObject, TimeUnit};
///
/// let ns = TimeUnit::Nanoseconds;
/// assert_eq!(format_duration(&TimeObject::of(TimeUnit::Seconds, 90.0), ns), "1m 30s");
/// assert_eq!(format_duration(&TimeObject::of(TimeUnit::Milliseconds, 500.0), ns), "500ms");
/// assert_eq!(format_duration(&TimeObject::of(TimeUnit::Nanoseconds, 10.0), ns), "<1ms");
/// ```
pub fn format_duration(time: &TimeObject, _target: TimeUnit) -> String {
    let mut nanoseconds = time.total_nanoseconds();

    if (nanoseconds / TimeUnit::Seconds.multiplier()).floor() <= 0.0 {
        let milliseconds = (nanoseconds / TimeUnit::Milliseconds.multiplier()).floor();
        return if milliseconds > 0.0 {
            format!("{}{}", number_to_string(milliseconds), TimeUnit::Milliseconds.symbol())
        } else {
            "<1ms".to_string()
        };
    }

    let mut parts = Vec::new();
    for unit in TimeUnit::ALL.into_iter().rev() {
        if unit == TimeUnit::Milliseconds {
            break;
        }
        let multiplier = unit.multiplier();
        let amount = (nanoseconds / multiplier).floor();
        if amount > 0.0 {
            parts.push(format!("{}{}", number_to_string(amount), unit.symbol()));
            nanoseconds -= amount * multiplier;
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(TimeUnit::Microseconds.multiplier(), 1e3);
        assert_eq!(TimeUnit::Milliseconds.multiplier(), 1e6);
        assert_eq!(TimeUnit::Seconds.multiplier(), 1e9);
        assert_eq!(TimeUnit::Minutes.multiplier(), 6e10);
        assert_eq!(TimeUnit::Hours.multiplier(), 3.6e12);
        assert_eq!(TimeUnit::Days.multiplier(), 8.64e13);
        assert_eq!(TimeUnit::Weeks.multiplier(), 6.048e14);
        assert_eq!(TimeUnit::Years.multiplier(), 3.1536e16);
    }

    #[test]
    fn test_multipliers_increase() {
        for pair in TimeUnit::ALL.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("seconds".parse::<TimeUnit>(), Ok(TimeUnit::Seconds));
        assert_eq!("Minutes".parse::<TimeUnit>(), Ok(TimeUnit::Minutes));
        assert_eq!("µs".parse::<TimeUnit>(), Ok(TimeUnit::Microseconds));
        assert_eq!("us".parse::<TimeUnit>(), Ok(TimeUnit::Microseconds));
        assert_eq!("m".parse::<TimeUnit>(), Ok(TimeUnit::Minutes));
        assert!("M".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_format_duration_exact_boundaries() {
        let ns = TimeUnit::Nanoseconds;
        assert_eq!(format_duration(&TimeObject::of(TimeUnit::Seconds, 1.0), ns), "1s");
        assert_eq!(format_duration(&TimeObject::of(TimeUnit::Seconds, 60.0), ns), "1m");
        assert_eq!(format_duration(&TimeObject::of(TimeUnit::Milliseconds, 1.0), ns), "1ms");
        assert_eq!(format_duration(&TimeObject::of(TimeUnit::Microseconds, 999.0), ns), "<1ms");
    }

    #[test]
    fn test_format_duration_drops_milliseconds_above_one_second() {
        let time = TimeObject::new()
            .with(TimeUnit::Seconds, 2.0)
            .with(TimeUnit::Milliseconds, 750.0);
        assert_eq!(format_duration(&time, TimeUnit::Nanoseconds), "2s");
    }

    #[test]
    fn test_format_duration_mixed_fields() {
        let time = TimeObject::new()
            .with(TimeUnit::Days, 1.0)
            .with(TimeUnit::Hours, 25.0)
            .with(TimeUnit::Seconds, 5.0);
        assert_eq!(format_duration(&time, TimeUnit::Nanoseconds), "2d 1h 5s");
    }

    #[test]
    fn test_format_duration_years_and_weeks() {
        let time = TimeObject::new()
            .with(TimeUnit::Years, 1.0)
            .with(TimeUnit::Weeks, 2.0);
        assert_eq!(format_duration(&time, TimeUnit::Nanoseconds), "1y 2w");
    }

    #[test]
    fn test_nan_fields_are_ignored() {
        let time = TimeObject::new()
            .with(TimeUnit::Seconds, f64::NAN)
            .with(TimeUnit::Milliseconds, 5.0);
        assert_eq!(time.total_nanoseconds(), 5e6);
        assert_eq!(format_duration(&time, TimeUnit::Seconds), "5ms");
    }

    #[test]
    fn test_empty_duration() {
        assert_eq!(format_duration(&TimeObject::new(), TimeUnit::Nanoseconds), "<1ms");
    }
}
