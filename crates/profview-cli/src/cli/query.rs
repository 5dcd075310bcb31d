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

//! Query-string commands.

use super::OutputArgs;
use crate::commands;
use crate::error::CliResult;
use clap::Subcommand;

/// Commands on raw parameter sets.
#[derive(Subcommand)]
pub enum QueryCommands {
    /// Parse a query string and list its parameters
    ///
    /// Repeated keys are reported as sequences. A leading `?` is ignored.
    Parse {
        /// Query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Serialize a JSON object into a query string
    ///
    /// Arrays are written comma-joined under a single key.
    Serialize {
        /// JSON object of string or string-array values
        #[arg(value_name = "JSON")]
        input: String,
    },

    /// Drop every key ending in a suffix
    FilterSuffix {
        /// Query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        /// Suffix to drop, e.g. `_a`
        #[arg(value_name = "SUFFIX")]
        suffix: String,
    },

    /// Copy every `_b` key onto its `_a` counterpart
    SwapSuffix {
        /// Query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,
    },

    /// Print the view mode (single or compare)
    Mode {
        /// Query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl QueryCommands {
    pub fn execute(self) -> CliResult<()> {
        match self {
            QueryCommands::Parse { query, output } => {
                commands::parse_query(&query, output.json, output.pretty)
            }
            QueryCommands::Serialize { input } => commands::serialize_json(&input),
            QueryCommands::FilterSuffix { query, suffix } => commands::filter_suffix(&query, &suffix),
            QueryCommands::SwapSuffix { query } => commands::swap_suffix(&query),
            QueryCommands::Mode { query, json } => commands::mode(&query, json),
        }
    }
}
