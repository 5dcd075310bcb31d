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

//! State of the absolute date picker.
//!
//! Opening the picker on a relative range pre-fills it with concrete
//! instants. Applying it produces the pair of absolute dates the caller
//! stores as the new range.

use crate::date::{AbsoluteDate, RangeDate};
use crate::range::{date_hours_ago, DateTimeRange};
use chrono::{DateTime, Utc};

/// Editable from/to instants of the absolute picker.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use profview_range::{AbsolutePickerState, DateTimeRange};
///
/// let now = Utc::now();
/// let mut picker = AbsolutePickerState::new(&DateTimeRange::default(), now);
/// assert_eq!(picker.from(), now - Duration::hours(1));
/// assert_eq!(picker.to(), now);
///
/// picker.set_from(now - Duration::hours(6));
/// let (from, to) = picker.apply();
/// assert_eq!(to.to_ms() - from.to_ms(), 6 * 3_600_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsolutePickerState {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl AbsolutePickerState {
    /// Initialize from `range`.
    ///
    /// A relative `from` starts one hour before `now` and a relative `to`
    /// starts at `now`, whatever their amounts. Absolute bounds are kept.
    pub fn new(range: &DateTimeRange, now: DateTime<Utc>) -> Self {
        let from = match range.from {
            RangeDate::Relative(_) => date_hours_ago(now, 1),
            RangeDate::Absolute(date) => date.value,
        };
        let to = match range.to {
            RangeDate::Relative(_) => date_hours_ago(now, 0),
            RangeDate::Absolute(date) => date.value,
        };
        Self { from, to }
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    pub fn set_from(&mut self, from: DateTime<Utc>) {
        self.from = from;
    }

    pub fn set_to(&mut self, to: DateTime<Utc>) {
        self.to = to;
    }

    /// Whether `from` is not after `to`.
    pub fn is_ordered(&self) -> bool {
        self.from <= self.to
    }

    /// The selected bounds as absolute dates.
    pub fn apply(&self) -> (AbsoluteDate, AbsoluteDate) {
        (AbsoluteDate::new(self.from), AbsoluteDate::new(self.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{RelativeDate, RelativeUnit};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 4, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_relative_amount_is_ignored() {
        let range = DateTimeRange::relative(RelativeUnit::Day, 7);
        let picker = AbsolutePickerState::new(&range, now());
        assert_eq!(picker.from(), Utc.with_ymd_and_hms(2022, 4, 15, 11, 0, 0).unwrap());
        assert_eq!(picker.to(), now());
    }

    #[test]
    fn test_absolute_bounds_are_kept() {
        let range = DateTimeRange::from_ms_bounds(1_000, 2_000).unwrap();
        let picker = AbsolutePickerState::new(&range, now());
        let (from, to) = picker.apply();
        assert_eq!((from.to_ms(), to.to_ms()), (1_000, 2_000));
    }

    #[test]
    fn test_mixed_bounds() {
        let from = AbsoluteDate::from_ms(5_000).unwrap();
        let range = DateTimeRange::new(from, RelativeDate::new(RelativeUnit::Minute, 30));
        let picker = AbsolutePickerState::new(&range, now());
        assert_eq!(picker.from(), from.value);
        assert_eq!(picker.to(), now());
    }

    #[test]
    fn test_setters_and_order() {
        let mut picker = AbsolutePickerState::new(&DateTimeRange::default(), now());
        assert!(picker.is_ordered());
        picker.set_to(Utc.with_ymd_and_hms(2022, 4, 14, 0, 0, 0).unwrap());
        assert!(!picker.is_ordered());
        picker.set_from(Utc.with_ymd_and_hms(2022, 4, 13, 0, 0, 0).unwrap());
        assert!(picker.is_ordered());
        let (from, _) = picker.apply();
        assert_eq!(from.to_string(), "2022-04-13 00:00:00");
    }
}
