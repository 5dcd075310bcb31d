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

//! Integration tests for range keys and the absolute picker.

use chrono::{DateTime, TimeZone, Utc};
use profview_range::{
    format_range_label, AbsolutePickerState, DateTimeRange, RangeDate, RangeError, RelativeUnit,
};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 29, 23, 30, 0).unwrap()
}

#[test]
fn test_picker_then_key_round_trip() {
    let picker = AbsolutePickerState::new(&DateTimeRange::default(), now());
    let (from, to) = picker.apply();
    let range = DateTimeRange::absolute(from, to);

    let key = range.range_key_at(now());
    assert_eq!(key, format!("absolute:{}-{}", from.to_ms(), to.to_ms()));
    assert_eq!(DateTimeRange::from_range_key(&key), Ok(range));
}

#[test]
fn test_selection_from_query_fields() {
    let range = DateTimeRange::from_selection("absolute:1709242200000-1709249400000", None, None);
    assert!(matches!(range.from, RangeDate::Absolute(_)));
    assert_eq!(format_range_label(&range), "2024-02-29 21:30:00 to 2024-02-29 23:30:00");
}

#[test]
fn test_relative_ranges_resolve_against_now() {
    let range = DateTimeRange::relative(RelativeUnit::Day, 1);
    assert_eq!(
        range.from_datetime(now()),
        Utc.with_ymd_and_hms(2024, 2, 28, 23, 30, 0).unwrap()
    );
    assert_eq!(range.to_datetime(now()), now());
}

#[test]
fn test_timestamp_out_of_range() {
    assert_eq!(
        DateTimeRange::from_range_key(&format!("absolute:0-{}", i64::MAX)),
        Err(RangeError::InvalidTimestamp(i64::MAX))
    );
}

proptest! {
    /// Property: relative keys parse back to the same range.
    #[test]
    fn prop_relative_key_round_trip(unit in prop::sample::select(RelativeUnit::ALL.to_vec()), value in 0u32..100_000) {
        let range = DateTimeRange::relative(unit, value);
        prop_assert_eq!(DateTimeRange::from_range_key(&range.range_key_at(now())), Ok(range));
    }

    /// Property: absolute keys parse back to the same bounds, negative
    /// timestamps included.
    #[test]
    fn prop_absolute_key_round_trip(from in -1_000_000_000_000i64..4_000_000_000_000, to in -1_000_000_000_000i64..4_000_000_000_000) {
        let range = DateTimeRange::from_ms_bounds(from, to).unwrap();
        let parsed = DateTimeRange::from_range_key(&range.range_key_at(now())).unwrap();
        prop_assert_eq!(parsed.from_ms(now()), from);
        prop_assert_eq!(parsed.to_ms(now()), to);
    }

    /// Property: parsing never panics.
    #[test]
    fn prop_from_range_key_total(key in ".{0,40}") {
        let _ = DateTimeRange::from_range_key(&key);
    }
}
