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

//! Error types for range keys and timestamps.

use thiserror::Error;

/// Range parsing error types.
///
/// # Examples
///
/// ```
/// use profview_range::{DateTimeRange, RangeError};
///
/// let err = DateTimeRange::from_range_key("sometime").unwrap_err();
/// assert_eq!(err, RangeError::MalformedKey("sometime".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RangeError {
    /// The key is neither `relative:<unit>|<value>` nor
    /// `absolute:<from_ms>-<to_ms>`.
    #[error("Malformed range key '{0}'")]
    MalformedKey(String),

    /// Relative unit other than minute, hour or day.
    #[error("Unknown relative unit '{0}': expected minute, hour or day")]
    UnknownUnit(String),

    /// Relative amount that is not a non-negative integer.
    #[error("Invalid relative value '{0}'")]
    InvalidValue(String),

    /// Millisecond timestamp outside the representable range.
    #[error("Timestamp out of range: {0}ms")]
    InvalidTimestamp(i64),
}

/// Result type for range operations.
pub type RangeResult<T> = Result<T, RangeError>;
