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

//! Query parameter sets and the query-string codec.
//!
//! A [`QueryParams`] is an insertion-ordered mapping from key to
//! [`QueryValue`]. Parsing follows browser `URLSearchParams` semantics:
//! form-urlencoded decoding, a key seen once is a scalar and a key seen more
//! than once becomes a sequence of every value in appearance order.
//!
//! Serialization is not the inverse of parsing for repeated keys: a
//! sequence is written as a single `key=v1,v2` entry.
//!
//! # Examples
//!
//! ```
//! use profview_query::{parse, serialize, QueryValue};
//!
//! let params = parse("?expression_a=up&labels_a=job%3Dapi&labels_a=env%3Dprod");
//! assert_eq!(params.get_str("expression_a"), Some("up"));
//! assert_eq!(
//!     params.get("labels_a"),
//!     Some(&QueryValue::Sequence(vec!["job=api".into(), "env=prod".into()]))
//! );
//! assert_eq!(serialize(&params), "expression_a=up&labels_a=job=api,env=prod");
//! ```

use std::borrow::Cow;
use std::fmt;
use tracing::trace;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum QueryValue {
    /// Key occurred once.
    Scalar(String),
    /// Key occurred more than once, values in appearance order.
    Sequence(Vec<String>),
}

impl QueryValue {
    /// Returns the value if this is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the value as it is written into a query string.
    ///
    /// Sequences are joined with `,`.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Self::Scalar(s) => Cow::Borrowed(s),
            Self::Sequence(values) => Cow::Owned(values.join(",")),
        }
    }

    /// Returns every value; a scalar yields one element.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Scalar(s) => vec![s.as_str()],
            Self::Sequence(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Returns true if this is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Scalar(first) => {
                let first = std::mem::take(first);
                *self = Self::Sequence(vec![first, value]);
            }
            Self::Sequence(values) => values.push(value),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        Self::Scalar(b.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Sequence(values)
    }
}

/// An insertion-ordered set of query parameters.
///
/// Inserting an existing key replaces its value in place, so the key keeps
/// its original position. New keys are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up a scalar value by key.
    ///
    /// Returns `None` for absent keys and for sequences.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(QueryValue::as_str)
    }

    /// Look up a value in its query-string form (sequences joined).
    pub fn get_joined(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(QueryValue::joined)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Option<QueryValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Append a value for a key, turning a scalar into a sequence.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => slot.push(value),
            None => self.entries.push((key, QueryValue::Scalar(value))),
        }
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Overlay `updates` onto this set; updates win key for key.
    pub fn extend_from(&mut self, updates: QueryParams) {
        for (key, value) in updates.entries {
            self.insert(key, value);
        }
    }

    /// Return a copy of this set with `updates` overlaid.
    pub fn merged(&self, updates: QueryParams) -> QueryParams {
        let mut merged = self.clone();
        merged.extend_from(updates);
        merged
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &QueryValue) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, QueryValue);
    type IntoIter = std::vec::IntoIter<(String, QueryValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamsVisitor;

        impl<'de> serde::de::Visitor<'de> for ParamsVisitor {
            type Value = QueryParams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of strings or string sequences")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(self, mut access: A) -> Result<QueryParams, A::Error> {
                let mut params = QueryParams::new();
                while let Some((key, value)) = access.next_entry::<String, QueryValue>()? {
                    params.insert(key, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}

/// Parse a query string into a parameter set.
///
/// A leading `?` is ignored. Keys and values are form-urlencoded decoded
/// (`+` is a space, `%XX` escapes are resolved). Keys that never appear are
/// absent rather than empty.
///
/// # Examples
///
/// ```
/// use profview_query::parse;
///
/// let params = parse("from_a=1&merge_a=true");
/// assert_eq!(params.get_str("from_a"), Some("1"));
/// assert!(params.get("to_a").is_none());
/// ```
pub fn parse(query: &str) -> QueryParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = QueryParams::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params.append(key.into_owned(), value.into_owned());
    }
    trace!(keys = params.len(), "parsed query string");
    params
}

/// Serialize a parameter set into a query string.
///
/// Entries are written as `key=value` in iteration order and joined with
/// `&`. Nothing is percent-encoded. A sequence becomes one entry with its
/// values joined by `,`, so repeated keys do not survive a round trip.
///
/// # Examples
///
/// ```
/// use profview_query::{serialize, QueryParams};
///
/// let params: QueryParams = [("compare_a", "true"), ("expression_a", "up")]
///     .into_iter()
///     .collect();
/// assert_eq!(serialize(&params), "compare_a=true&expression_a=up");
/// ```
pub fn serialize(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value.joined()))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse("").is_empty());
        assert!(parse("?").is_empty());
    }

    #[test]
    fn test_parse_keeps_first_appearance_order() {
        let params = parse("b=1&a=2&b=3");
        let keys: Vec<_> = params.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(
            params.get("b"),
            Some(&QueryValue::Sequence(vec!["1".into(), "3".into()]))
        );
    }

    #[test]
    fn test_parse_decodes_form_encoding() {
        let params = parse("expression_a=process_cpu%7Bjob%3D%22api%22%7D&label=a+b");
        assert_eq!(params.get_str("expression_a"), Some("process_cpu{job=\"api\"}"));
        assert_eq!(params.get_str("label"), Some("a b"));
    }

    #[test]
    fn test_parse_key_without_value() {
        let params = parse("flag&x=1");
        assert_eq!(params.get_str("flag"), Some(""));
        assert_eq!(params.get_str("x"), Some("1"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = parse("a=1&b=2");
        let previous = params.insert("a", "9");
        assert_eq!(previous, Some(QueryValue::from("1")));
        assert_eq!(serialize(&params), "a=9&b=2");
    }

    #[test]
    fn test_remove() {
        let mut params = parse("a=1&b=2");
        assert_eq!(params.remove("a"), Some(QueryValue::from("1")));
        assert_eq!(params.remove("a"), None);
        assert_eq!(serialize(&params), "b=2");
    }

    #[test]
    fn test_serialize_joins_sequences() {
        let params = parse("labels_a=x&labels_a=y&time_a=5");
        assert_eq!(serialize(&params), "labels_a=x,y&time_a=5");
    }

    #[test]
    fn test_get_str_rejects_sequence() {
        let params = parse("k=1&k=2");
        assert_eq!(params.get_str("k"), None);
        assert_eq!(params.get_joined("k").as_deref(), Some("1,2"));
    }

    #[test]
    fn test_merged_updates_win() {
        let current = parse("a=1&b=2");
        let updates = parse("b=3&c=4");
        assert_eq!(serialize(&current.merged(updates)), "a=1&b=3&c=4");
    }

    #[test]
    fn test_value_from_bool() {
        assert_eq!(QueryValue::from(true), QueryValue::Scalar("true".into()));
        assert_eq!(QueryValue::from(false).to_string(), "false");
    }
}
