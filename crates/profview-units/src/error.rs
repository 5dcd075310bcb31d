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

//! Error types for unit parsing.
//!
//! The formatting entry points never return these; they report a diagnostic
//! and fall back to the input instead. The errors surface through the
//! `FromStr` implementations for callers that want strict parsing.

use thiserror::Error;

/// Unit parsing error types.
///
/// # Examples
///
/// ```
/// use profview_units::{TimeUnit, UnitError};
///
/// let err = "fortnights".parse::<TimeUnit>().unwrap_err();
/// assert_eq!(err, UnitError::UnknownTimeUnit("fortnights".to_string()));
/// assert_eq!(err.to_string(), "Unknown time unit: fortnights");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UnitError {
    /// Not one of the nine supported time units.
    #[error("Unknown time unit: {0}")]
    UnknownTimeUnit(String),

    /// Not one of `bytes`, `nanoseconds` or `count`.
    #[error("Unknown value category: {0}")]
    UnknownCategory(String),
}

/// Result type for unit parsing.
pub type UnitResult<T> = Result<T, UnitError>;
