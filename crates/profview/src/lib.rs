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

//! # profview
//!
//! A profiling UI keeps its whole view in the URL: which expression is
//! queried, over what range, which profile is selected and whether two
//! profiles are compared side by side. This crate gathers the pieces that
//! read and write that state.
//!
//! ## Quick Start
//!
//! ```rust
//! use profview::{parse, ExplorerView, ProfileExplorer, Side};
//!
//! let params = parse("expression_a=process_cpu&from_a=1&to_a=2&labels_a=job%3Dapi&time_a=1");
//! let explorer = ProfileExplorer::default();
//!
//! // Compare the selected profile with itself on side B.
//! let target = explorer.compare_profile(&params);
//! assert!(target.query.starts_with("labels_a=job=api&time_a=1&compare_a=true"));
//! ```
//!
//! ## Modules
//!
//! - [`query`]: query-string codec and the explorer protocol
//! - [`units`]: time conversion and value formatting
//! - [`range`]: relative and absolute date ranges

mod error;

pub use error::{Error, Result};

pub use profview_query::{
    parse, serialize, ExplorerView, NavigationTarget, Navigator, ProfileExplorer,
    ProfileSelection, QueryParams, QuerySelection, QueryValue, Side, ViewMode,
};
pub use profview_range::DateTimeRange;
pub use profview_units::{UnitFormatter, ValueCategory};

pub mod query {
    //! Query-string codec and explorer protocol
    pub use profview_query::{
        compose_navigation_query, derive_profile_selection, derive_query_selection,
        filter_suffix, format_timestamp, is_compare_mode, parse_bool_flag, parse_int_prefix,
        parse_labels, suffix_params, swap_suffix, view_mode, DefaultProfileSelectionFactory,
        ExplorerConfig, Label, MergedProfileSelection, ProfileFields, ProfileSelectionFactory,
        QueryError, QueryResult, RecordingNavigator, SingleProfileSelection,
    };
    pub use profview_query::{explorer::DEFAULT_PATH, selection::keys, selection::NO_RANGE};
}

pub mod units {
    //! Time conversion and value formatting
    pub use profview_units::{
        capitalize, convert_time, format_duration, format_with_tiers, number_to_string, to_fixed,
        value_formatter, CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink,
        FormatterConfig, Tier, TimeObject, TimeUnit, TracingSink, UnitError, DEFAULT_DIGITS,
        MAX_FRACTION_DIGITS,
    };
}

pub mod range {
    //! Relative and absolute date ranges
    pub use profview_range::{
        date_hours_ago, format_range_label, AbsoluteDate, AbsolutePickerState, RangeDate,
        RangeError, RelativeDate, RelativeUnit,
    };
}

/// Parse a range key.
///
/// # Examples
///
/// ```rust
/// use profview::{parse_range_key, range::RelativeUnit, DateTimeRange};
///
/// assert_eq!(parse_range_key("relative:hour|3")?, DateTimeRange::relative(RelativeUnit::Hour, 3));
/// assert!(parse_range_key("absolute:1").is_err());
/// # Ok::<(), profview::Error>(())
/// ```
#[inline]
pub fn parse_range_key(key: &str) -> Result<DateTimeRange> {
    Ok(DateTimeRange::from_range_key(key)?)
}

/// Range shown for `side`, rebuilt from the query parameters.
///
/// Uses the side's `time_selection` key, then its `from`/`to` bounds, then
/// the default range.
pub fn selected_range(params: &QueryParams, side: Side) -> DateTimeRange {
    let query = profview_query::derive_query_selection(params, side);
    DateTimeRange::from_selection(&query.time_selection, query.from, query.to)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
