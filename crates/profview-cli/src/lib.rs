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

//! profview CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Query strings
//!
//! - **parse**: list the parameters of a query string
//! - **serialize**: build a query string from a JSON object
//! - **filter-suffix** / **swap-suffix**: rewrite per-side keys
//! - **mode**: single or compare view
//!
//! ## Explorer
//!
//! - **view**: query, profile and range per visible side
//! - **select-query**, **select-profile**, **compare**, **close**: print the
//!   navigation target of each action
//!
//! ## Units and ranges
//!
//! - **convert-time**, **format-duration**, **format-value**
//! - **range**: resolve a range key or millisecond bounds
//!
//! ## Utilities
//!
//! - **completion**: shell completion scripts
//!
//! # Configuration
//!
//! - `PROFVIEW_PATH` sets the path of navigation targets (`--path`).
//! - `RUST_LOG` controls diagnostics on stderr (default `profview=warn`).

pub mod cli;
pub mod commands;
pub mod error;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// Uses `RUST_LOG` when set, otherwise `profview=warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("profview=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
