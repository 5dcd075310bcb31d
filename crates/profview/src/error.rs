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

//! Unified error type for the profview crates.

use profview_query::QueryError;
use profview_range::RangeError;
use profview_units::UnitError;
use thiserror::Error;

/// Any error produced by the profview libraries.
///
/// # Examples
///
/// ```
/// use profview::{Error, Side};
///
/// let err: Error = "c".parse::<Side>().unwrap_err().into();
/// assert!(matches!(err, Error::Query(_)));
/// assert_eq!(err.to_string(), "Invalid comparison side 'c': expected 'a' or 'b'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Result type for the facade.
pub type Result<T> = std::result::Result<T, Error>;
