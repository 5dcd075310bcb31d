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

//! Navigation targets and the write path for query state.
//!
//! Every state change is one filter or swap step followed by
//! [`compose_navigation_query`]. Keys not touched by the update are carried
//! over, so a mutation only resets what it explicitly filters.

use crate::params::{serialize, QueryParams};
use std::fmt;
use tracing::debug;

/// Overlay `updates` onto `current` and serialize the result.
///
/// Updated keys keep their position in `current`; new keys follow in update
/// order.
///
/// # Examples
///
/// ```
/// use profview_query::{compose_navigation_query, parse};
///
/// let current = parse("expression_a=up&theme=dark");
/// let updates = parse("expression_a=down&compare_a=true");
/// assert_eq!(
///     compose_navigation_query(&current, updates),
///     "expression_a=down&theme=dark&compare_a=true"
/// );
/// ```
pub fn compose_navigation_query(current: &QueryParams, updates: QueryParams) -> String {
    let query = serialize(&current.merged(updates));
    debug!(%query, "composed navigation query");
    query
}

/// Where a mutation wants the client to go.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationTarget {
    pub path: String,
    pub query: String,
}

impl NavigationTarget {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
        }
    }

    /// The search component, `?` included.
    pub fn search(&self) -> String {
        format!("?{}", self.query)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?{}", self.path, self.query)
    }
}

/// Sink for navigation requests, typically a client-side router.
pub trait Navigator {
    fn navigate(&mut self, target: NavigationTarget);
}

/// Navigator that keeps every target it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Vec<NavigationTarget>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All targets, oldest first.
    pub fn history(&self) -> &[NavigationTarget] {
        &self.history
    }

    /// Most recent target.
    pub fn last(&self) -> Option<&NavigationTarget> {
        self.history.last()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: NavigationTarget) {
        self.history.push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::parse;

    #[test]
    fn test_compose_preserves_unrelated_keys() {
        let current = parse("a=1&b=2&c=3");
        let query = compose_navigation_query(&current, parse("b=9"));
        assert_eq!(query, "a=1&b=9&c=3");
    }

    #[test]
    fn test_compose_empty() {
        assert_eq!(compose_navigation_query(&QueryParams::new(), QueryParams::new()), "");
    }

    #[test]
    fn test_target_display() {
        let target = NavigationTarget::new("/", "a=1");
        assert_eq!(target.to_string(), "/?a=1");
        assert_eq!(target.search(), "?a=1");
    }

    #[test]
    fn test_recording_navigator() {
        let mut nav = RecordingNavigator::new();
        assert!(nav.last().is_none());
        nav.navigate(NavigationTarget::new("/", "a=1"));
        nav.navigate(NavigationTarget::new("/", "a=2"));
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.last().map(|t| t.query.as_str()), Some("a=2"));
    }
}
