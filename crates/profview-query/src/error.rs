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

//! Error types for query state operations.
//!
//! The codec itself never fails: malformed numbers become the "no range"
//! sentinel and missing fields become absent selections. These errors cover
//! the typed entry points that parse user-supplied identifiers.

use thiserror::Error;

/// Query state error types.
///
/// # Examples
///
/// ```
/// use profview_query::QueryError;
///
/// let err = QueryError::InvalidSide("c".to_string());
/// assert_eq!(err.to_string(), "Invalid comparison side 'c': expected 'a' or 'b'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QueryError {
    /// A side identifier was neither `a` nor `b`.
    #[error("Invalid comparison side '{0}': expected 'a' or 'b'")]
    InvalidSide(String),

    /// A label was not of the form `name=value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use profview_query::QueryError;
    ///
    /// let err = QueryError::MalformedLabel("job".to_string());
    /// assert!(err.to_string().contains("name=value"));
    /// ```
    #[error("Malformed label '{0}': expected name=value")]
    MalformedLabel(String),
}

/// Result type for query state operations.
pub type QueryResult<T> = Result<T, QueryError>;
