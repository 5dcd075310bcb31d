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

//! Profile selections and the factory that builds them from query fields.
//!
//! A profile selection is what the explorer shows for one side: either a
//! single profile identified by its labels and timestamp, or a merge of all
//! profiles matching an expression over a range. Selections round-trip into
//! the query string through [`ProfileSelection::history_params`].

use crate::error::{QueryError, QueryResult};
use crate::params::{QueryParams, QueryValue};
use crate::selection::{format_timestamp, keys, parse_bool_flag, parse_int_prefix};
use crate::suffix::Side;
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

/// A profile picked for one side of the explorer.
pub trait ProfileSelection: fmt::Debug + Send + Sync {
    /// Short type tag (`merge` or `single`).
    fn kind(&self) -> &'static str;

    /// Unsuffixed parameters that recreate this selection.
    fn history_params(&self) -> QueryParams;
}

/// A `name=value` profile label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse `name=value`, splitting on the first `=`.
    ///
    /// ```
    /// use profview_query::Label;
    ///
    /// let label = Label::parse("job=api=v2").unwrap();
    /// assert_eq!(label.name, "job");
    /// assert_eq!(label.value, "api=v2");
    /// assert!(Label::parse("job").is_err());
    /// ```
    pub fn parse(raw: &str) -> QueryResult<Self> {
        raw.split_once('=')
            .map(|(name, value)| Self::new(name, value))
            .ok_or_else(|| QueryError::MalformedLabel(raw.to_string()))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Parse a list of `name=value` labels.
pub fn parse_labels<'a>(raw: impl IntoIterator<Item = &'a str>) -> QueryResult<Vec<Label>> {
    raw.into_iter().map(Label::parse).collect()
}

/// A single profile identified by labels and a sample timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleProfileSelection {
    pub labels: Vec<Label>,
    pub time: Option<i64>,
}

impl SingleProfileSelection {
    pub fn new(labels: Vec<Label>, time: Option<i64>) -> Self {
        Self { labels, time }
    }
}

impl ProfileSelection for SingleProfileSelection {
    fn kind(&self) -> &'static str {
        "single"
    }

    /// Label values are form-encoded so `,` and `&` survive the query string.
    fn history_params(&self) -> QueryParams {
        let labels: Vec<String> = self
            .labels
            .iter()
            .map(|l| {
                let value: String = url::form_urlencoded::byte_serialize(l.value.as_bytes()).collect();
                format!("{}={}", l.name, value)
            })
            .collect();

        let mut params = QueryParams::new();
        params.insert(keys::LABELS, QueryValue::Sequence(labels));
        params.insert(keys::TIME, format_timestamp(self.time));
        params
    }
}

/// All profiles matching `query` merged over `[from, to]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedProfileSelection {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub query: String,
}

impl MergedProfileSelection {
    pub fn new(from: Option<i64>, to: Option<i64>, query: impl Into<String>) -> Self {
        Self {
            from,
            to,
            query: query.into(),
        }
    }
}

impl ProfileSelection for MergedProfileSelection {
    fn kind(&self) -> &'static str {
        "merge"
    }

    fn history_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("mode", self.kind());
        params.insert(keys::FROM, format_timestamp(self.from));
        params.insert(keys::TO, format_timestamp(self.to));
        params.insert("query", self.query.as_str());
        params
    }
}

/// The raw per-side fields a factory decides from.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields<'a> {
    pub expression: Option<Cow<'a, str>>,
    pub from: Option<Cow<'a, str>>,
    pub to: Option<Cow<'a, str>>,
    pub merge: Option<Cow<'a, str>>,
    pub labels: Option<&'a QueryValue>,
    pub time: Option<Cow<'a, str>>,
}

impl<'a> ProfileFields<'a> {
    /// Read the six profile fields for `side`.
    pub fn from_params(params: &'a QueryParams, side: Side) -> Self {
        let field = |name: &str| params.get_joined(&side.key(name));
        Self {
            expression: field(keys::EXPRESSION),
            from: field(keys::FROM),
            to: field(keys::TO),
            merge: field(keys::MERGE),
            labels: params.get(&side.key(keys::LABELS)),
            time: field(keys::TIME),
        }
    }
}

/// Builds profile selections from raw query fields.
///
/// Returning `None` means there is not enough data for a selection, which is
/// the normal state before a profile has been picked.
pub trait ProfileSelectionFactory {
    fn create(&self, fields: ProfileFields<'_>) -> Option<Box<dyn ProfileSelection>>;
}

impl<F> ProfileSelectionFactory for F
where
    F: Fn(ProfileFields<'_>) -> Option<Box<dyn ProfileSelection>>,
{
    fn create(&self, fields: ProfileFields<'_>) -> Option<Box<dyn ProfileSelection>> {
        self(fields)
    }
}

/// The standard factory.
///
/// - `merge == "true"` with expression, from and to present gives a
///   [`MergedProfileSelection`].
/// - Otherwise labels and time both present give a
///   [`SingleProfileSelection`].
/// - Anything else gives `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProfileSelectionFactory;

impl ProfileSelectionFactory for DefaultProfileSelectionFactory {
    fn create(&self, fields: ProfileFields<'_>) -> Option<Box<dyn ProfileSelection>> {
        if parse_bool_flag(fields.merge.as_deref()) {
            if let (Some(expression), Some(from), Some(to)) =
                (&fields.expression, &fields.from, &fields.to)
            {
                return Some(Box::new(MergedProfileSelection::new(
                    parse_int_prefix(from),
                    parse_int_prefix(to),
                    expression.to_string(),
                )));
            }
        }

        let (labels, time) = (fields.labels?, fields.time?);
        match parse_labels(labels.values()) {
            Ok(labels) => Some(Box::new(SingleProfileSelection::new(
                labels,
                parse_int_prefix(&time),
            ))),
            Err(e) => {
                debug!(error = %e, "ignoring profile selection with malformed labels");
                None
            }
        }
    }
}

/// Derive the profile selection for `side` through `factory`.
///
/// # Examples
///
/// ```
/// use profview_query::{derive_profile_selection, parse, DefaultProfileSelectionFactory, Side};
///
/// let params = parse("labels_a=job%3Dapi&time_a=1650000000000");
/// let profile = derive_profile_selection(&params, Side::A, &DefaultProfileSelectionFactory);
/// assert_eq!(profile.map(|p| p.kind()), Some("single"));
///
/// let none = derive_profile_selection(&params, Side::B, &DefaultProfileSelectionFactory);
/// assert!(none.is_none());
/// ```
pub fn derive_profile_selection<F: ProfileSelectionFactory + ?Sized>(
    params: &QueryParams,
    side: Side,
    factory: &F,
) -> Option<Box<dyn ProfileSelection>> {
    factory.create(ProfileFields::from_params(params, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{parse, serialize};

    fn create(query: &str, side: Side) -> Option<Box<dyn ProfileSelection>> {
        derive_profile_selection(&parse(query), side, &DefaultProfileSelectionFactory)
    }

    #[test]
    fn test_merged_selection() {
        let profile = create("expression_a=up&from_a=1&to_a=2&merge_a=true", Side::A)
            .expect("merged selection");
        assert_eq!(profile.kind(), "merge");
        assert_eq!(serialize(&profile.history_params()), "mode=merge&from=1&to=2&query=up");
    }

    #[test]
    fn test_merge_without_range_falls_through() {
        assert!(create("expression_a=up&merge_a=true", Side::A).is_none());
    }

    #[test]
    fn test_merge_takes_precedence_over_labels() {
        let profile = create(
            "expression_a=up&from_a=1&to_a=2&merge_a=true&labels_a=a%3D1&time_a=5",
            Side::A,
        )
        .expect("selection");
        assert_eq!(profile.kind(), "merge");
    }

    #[test]
    fn test_single_selection_history_params() {
        let profile = create("labels_b=job%3Dapi&labels_b=env%3Dprod&time_b=42", Side::B)
            .expect("single selection");
        assert_eq!(profile.kind(), "single");
        let history = profile.history_params();
        assert_eq!(
            history.get("labels"),
            Some(&QueryValue::Sequence(vec!["job=api".into(), "env=prod".into()]))
        );
        assert_eq!(history.get_str("time"), Some("42"));
    }

    #[test]
    fn test_single_selection_encodes_label_values() {
        let selection = SingleProfileSelection::new(vec![Label::new("path", "/a,b c")], Some(1));
        let history = selection.history_params();
        assert_eq!(
            history.get("labels"),
            Some(&QueryValue::Sequence(vec!["path=%2Fa%2Cb+c".into()]))
        );
    }

    #[test]
    fn test_malformed_labels_yield_none() {
        assert!(create("labels_a=job&time_a=1", Side::A).is_none());
    }

    #[test]
    fn test_missing_time_yields_none() {
        assert!(create("labels_a=job%3Dapi", Side::A).is_none());
    }

    fn expression_only(fields: ProfileFields<'_>) -> Option<Box<dyn ProfileSelection>> {
        let expression = fields.expression?.into_owned();
        Some(Box::new(MergedProfileSelection::new(None, None, expression)))
    }

    #[test]
    fn test_function_factory() {
        let profile = derive_profile_selection(&parse("expression_a=up"), Side::A, &expression_only);
        assert_eq!(profile.map(|p| p.kind()), Some("merge"));
    }
}
