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

//! Structured error types for the profview CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error as
//! `Error: <message>` and exits with status 1.

use std::io;
use thiserror::Error;

/// The main error type for profview CLI operations.
///
/// # Examples
///
/// ```rust
/// use profview_cli::error::CliError;
///
/// let err = CliError::invalid_input("expected a number");
/// assert_eq!(err.to_string(), "Invalid input: expected a number");
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Error from one of the profview libraries.
    #[error(transparent)]
    Library(#[from] profview::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Writing to stdout failed.
    #[error("I/O error: {message}")]
    Io {
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: e.to_string(),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io {
            message: e.to_string(),
        }
    }
}

impl From<profview::query::QueryError> for CliError {
    fn from(e: profview::query::QueryError) -> Self {
        Self::Library(e.into())
    }
}

impl From<profview::units::UnitError> for CliError {
    fn from(e: profview::units::UnitError) -> Self {
        Self::Library(e.into())
    }
}

impl From<profview::range::RangeError> for CliError {
    fn from(e: profview::range::RangeError) -> Self {
        Self::Library(e.into())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_errors_are_transparent() {
        let err: CliError = "z".parse::<profview::Side>().unwrap_err().into();
        assert_eq!(err.to_string(), "Invalid comparison side 'z': expected 'a' or 'b'");
    }

    #[test]
    fn test_json_error_message() {
        let err: CliError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("JSON format error:"));
    }
}
