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

//! The profile explorer protocol.
//!
//! The explorer turns a parameter set into the view to render and turns user
//! actions back into navigation targets. It never holds state between calls:
//! every method takes the current parameters and returns a fresh result.
//!
//! # Examples
//!
//! ```
//! use profview_query::{parse, ExplorerView, ProfileExplorer, QuerySelection, Side};
//!
//! let explorer = ProfileExplorer::default();
//! let params = parse("expression_a=up&from_a=1&to_a=2&time_a=1&labels_a=job%3Dapi");
//!
//! assert!(matches!(explorer.view(&params), ExplorerView::Single { .. }));
//!
//! // A new query resets the stale profile selection for that side.
//! let target = explorer.select_query(&params, Side::A, &QuerySelection::new("down", 3, 4));
//! assert_eq!(
//!     target.to_string(),
//!     "/?expression_a=down&from_a=3&to_a=4&merge_a=false&time_selection_a="
//! );
//! ```

use crate::navigate::{compose_navigation_query, NavigationTarget, Navigator};
use crate::params::QueryParams;
use crate::profile::{derive_profile_selection, DefaultProfileSelectionFactory, ProfileSelection, ProfileSelectionFactory};
use crate::selection::{derive_query_selection, is_compare_mode, keys, QuerySelection, ViewMode};
use crate::suffix::{filter_suffix, suffix_params, swap_suffix, Side};
use tracing::debug;

/// Default path every navigation target points at.
pub const DEFAULT_PATH: &str = "/";

/// Explorer configuration.
///
/// # Examples
///
/// ```
/// use profview_query::ExplorerConfig;
///
/// let config = ExplorerConfig::new().with_path("/profiles");
/// assert_eq!(config.path, "/profiles");
/// assert_eq!(ExplorerConfig::default().path, "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ExplorerConfig {
    /// Path component of every navigation target.
    pub path: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the navigation path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

/// What to render for a parameter set.
#[derive(Debug)]
pub enum ExplorerView {
    /// Single view; only side A is derived.
    Single {
        query: QuerySelection,
        profile: Option<Box<dyn ProfileSelection>>,
    },
    /// Comparison view; both sides derived independently.
    Compare {
        query_a: QuerySelection,
        query_b: QuerySelection,
        profile_a: Option<Box<dyn ProfileSelection>>,
        profile_b: Option<Box<dyn ProfileSelection>>,
    },
}

impl ExplorerView {
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Single { .. } => ViewMode::Single,
            Self::Compare { .. } => ViewMode::Compare,
        }
    }

    /// Query selection for `side`; side B is `None` in single view.
    pub fn query(&self, side: Side) -> Option<&QuerySelection> {
        match (self, side) {
            (Self::Single { query, .. }, Side::A) => Some(query),
            (Self::Single { .. }, Side::B) => None,
            (Self::Compare { query_a, .. }, Side::A) => Some(query_a),
            (Self::Compare { query_b, .. }, Side::B) => Some(query_b),
        }
    }

    /// Profile selection for `side`, if any.
    pub fn profile(&self, side: Side) -> Option<&dyn ProfileSelection> {
        match (self, side) {
            (Self::Single { profile, .. }, Side::A) => profile.as_deref(),
            (Self::Single { .. }, Side::B) => None,
            (Self::Compare { profile_a, .. }, Side::A) => profile_a.as_deref(),
            (Self::Compare { profile_b, .. }, Side::B) => profile_b.as_deref(),
        }
    }
}

/// Derives views from query parameters and turns actions into navigation.
#[derive(Debug, Clone)]
pub struct ProfileExplorer<F = DefaultProfileSelectionFactory> {
    factory: F,
    config: ExplorerConfig,
}

impl Default for ProfileExplorer {
    fn default() -> Self {
        Self::new(DefaultProfileSelectionFactory)
    }
}

impl<F: ProfileSelectionFactory> ProfileExplorer<F> {
    /// Create an explorer with the default configuration.
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, ExplorerConfig::default())
    }

    pub fn with_config(factory: F, config: ExplorerConfig) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Decide the view for `params`.
    pub fn view(&self, params: &QueryParams) -> ExplorerView {
        if !is_compare_mode(params) {
            return ExplorerView::Single {
                query: derive_query_selection(params, Side::A),
                profile: derive_profile_selection(params, Side::A, &self.factory),
            };
        }

        ExplorerView::Compare {
            query_a: derive_query_selection(params, Side::A),
            query_b: derive_query_selection(params, Side::B),
            profile_a: derive_profile_selection(params, Side::A, &self.factory),
            profile_b: derive_profile_selection(params, Side::B, &self.factory),
        }
    }

    /// Run a new query on `side`.
    ///
    /// The side's keys are filtered first, which drops any profile selected
    /// under the previous query. While comparing, the side's compare flag is
    /// set again.
    pub fn select_query(&self, params: &QueryParams, side: Side, query: &QuerySelection) -> NavigationTarget {
        let mut updates = QueryParams::new();
        if is_compare_mode(params) {
            updates.insert(side.key(keys::COMPARE), true);
        }
        updates.extend_from(query.to_params(side));

        let base = filter_suffix(params, side.suffix());
        self.target(compose_navigation_query(&base, updates))
    }

    /// Select `profile` on `side`, keeping everything else.
    pub fn select_profile(&self, params: &QueryParams, side: Side, profile: &dyn ProfileSelection) -> NavigationTarget {
        let updates = suffix_params(&profile.history_params(), side.suffix());
        self.target(compose_navigation_query(params, updates))
    }

    /// Enter comparison mode from single view.
    ///
    /// Side A's query is duplicated onto side B. Side A's profile, when one
    /// is selected, is carried over; nothing else from `params` survives.
    pub fn compare_profile(&self, params: &QueryParams) -> NavigationTarget {
        let query = derive_query_selection(params, Side::A);

        let mut compare = QueryParams::new();
        for side in Side::ALL {
            compare.insert(side.key(keys::COMPARE), true);
            compare.extend_from(query.to_params(side));
        }

        let base = match derive_profile_selection(params, Side::A, &self.factory) {
            Some(profile) => suffix_params(&profile.history_params(), Side::A.suffix()),
            None => QueryParams::new(),
        };
        self.target(compose_navigation_query(&base, compare))
    }

    /// Close one side of the comparison and return to single view.
    ///
    /// Closing A promotes B into A's slot first.
    pub fn close_profile(&self, params: &QueryParams, side: Side) -> NavigationTarget {
        let promoted = match side {
            Side::A => swap_suffix(params),
            Side::B => params.clone(),
        };

        let mut updates = QueryParams::new();
        updates.insert(Side::A.key(keys::COMPARE), false);

        let base = filter_suffix(&promoted, Side::B.suffix());
        self.target(compose_navigation_query(&base, updates))
    }

    /// Hand `target` to `navigator`.
    pub fn dispatch<N: Navigator + ?Sized>(&self, navigator: &mut N, target: NavigationTarget) {
        debug!(target = %target, "navigating");
        navigator.navigate(target);
    }

    fn target(&self, query: String) -> NavigationTarget {
        NavigationTarget::new(self.config.path.clone(), query)
    }
}
