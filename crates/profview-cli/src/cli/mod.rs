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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by the library they drive:
//!
//! - [`query`]: parameter-set codec (parse, serialize, filter-suffix, swap-suffix, mode)
//! - [`explorer`]: explorer protocol (view, select-query, select-profile, compare, close)
//! - [`units`]: unit formatting and ranges (convert-time, format-duration, format-value, range)
//! - [`utility`]: shell completion
//!
//! All groups are flattened so every command appears at the top level.

mod explorer;
mod query;
mod units;
mod utility;

use crate::error::CliResult;
use clap::{Args, Parser, Subcommand};

pub use explorer::ExplorerCommands;
pub use query::QueryCommands;
pub use units::UnitCommands;
pub use utility::UtilityCommands;

/// Inspect and rewrite profile explorer URL state
///
/// # Examples
///
/// ```bash
/// # Which view does a URL select?
/// profview view 'expression_a=up&from_a=1&to_a=2'
///
/// # Where does "compare" navigate to?
/// profview compare 'expression_a=up&labels_a=job%3Dapi&time_a=1'
///
/// # Human-readable sizes
/// profview format-value 1500 bytes
/// ```
#[derive(Parser)]
#[command(name = "profview")]
#[command(author, version, about = "profview - profile explorer view state toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Query(QueryCommands),

    #[command(flatten)]
    Explorer(ExplorerCommands),

    #[command(flatten)]
    Units(UnitCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`](crate::error::CliError) when the input is
    /// invalid or output cannot be written.
    pub fn execute(self) -> CliResult<()> {
        match self {
            Commands::Query(cmd) => cmd.execute(),
            Commands::Explorer(cmd) => cmd.execute(),
            Commands::Units(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}

/// Output format flags shared by commands with structured output.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}
