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

//! URL query-string state for the profile explorer.
//!
//! The explorer keeps all of its state in the URL. This crate maps between
//! the flat query string and the typed per-side selections, and expresses
//! every user action as a new query string.
//!
//! # Keys
//!
//! Per-side keys carry an `_a` or `_b` suffix:
//!
//! | key                   | meaning                                  |
//! |-----------------------|------------------------------------------|
//! | `expression_<s>`      | profile query expression                 |
//! | `from_<s>`, `to_<s>`  | range bounds, ms since epoch             |
//! | `merge_<s>`           | `"true"` to merge profiles in the range  |
//! | `time_selection_<s>`  | range key of the date picker             |
//! | `labels_<s>`, `time_<s>` | a single selected profile             |
//! | `compare_<s>`         | `"true"` while comparing                 |
//!
//! # Examples
//!
//! ```
//! use profview_query::{derive_query_selection, filter_suffix, parse, serialize, view_mode, Side, ViewMode};
//!
//! let params = parse("expression_a=up&from_a=1&to_a=2&labels_a=job%3Dapi&time_a=1");
//! assert_eq!(view_mode(&params), ViewMode::Single);
//!
//! let query = derive_query_selection(&params, Side::A);
//! assert_eq!(query.expression, "up");
//!
//! assert_eq!(serialize(&filter_suffix(&params, "_a")), "");
//! ```
//!
//! # Serialization
//!
//! [`serialize`] writes repeated keys as one comma-joined entry, so a set
//! with sequences does not survive `parse(serialize(..))` unchanged.

mod error;
pub mod explorer;
mod navigate;
mod params;
mod profile;
pub mod selection;
mod suffix;

pub use error::{QueryError, QueryResult};
pub use explorer::{ExplorerConfig, ExplorerView, ProfileExplorer};
pub use navigate::{compose_navigation_query, NavigationTarget, Navigator, RecordingNavigator};
pub use params::{parse, serialize, QueryParams, QueryValue};
pub use profile::{
    derive_profile_selection, parse_labels, DefaultProfileSelectionFactory, Label,
    MergedProfileSelection, ProfileFields, ProfileSelection, ProfileSelectionFactory,
    SingleProfileSelection,
};
pub use selection::{
    derive_query_selection, format_timestamp, is_compare_mode, parse_bool_flag, parse_int_prefix,
    view_mode, QuerySelection, ViewMode,
};
pub use suffix::{filter_suffix, suffix_params, swap_suffix, Side};
