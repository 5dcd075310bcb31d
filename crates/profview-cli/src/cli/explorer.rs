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

//! Explorer protocol commands.
//!
//! Mutations print the navigation target (`<path>?<query>`) the explorer
//! would hand to the router.

use super::OutputArgs;
use crate::commands::{self, ProfileArgs};
use crate::error::CliResult;
use clap::{Args, Subcommand};
use profview::query::DEFAULT_PATH;
use profview::{QuerySelection, Side};

/// Navigation path shared by the mutation commands.
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Path component of navigation targets
    #[arg(long, env = "PROFVIEW_PATH", default_value = DEFAULT_PATH)]
    pub path: String,
}

/// Commands that derive views and compute navigation targets.
#[derive(Subcommand)]
pub enum ExplorerCommands {
    /// Show the view a query string selects
    ///
    /// Prints the mode and, for each visible side, its query selection,
    /// profile selection and date range.
    View {
        /// Query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run a new query on one side
    ///
    /// Resets the side's profile selection. While comparing, the side stays
    /// in comparison mode.
    SelectQuery {
        /// Current query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        /// Side to update (a or b)
        #[arg(short, long, default_value = "a")]
        side: Side,

        /// Profile query expression
        #[arg(short, long)]
        expression: String,

        /// Range start in milliseconds
        #[arg(long, allow_hyphen_values = true)]
        from: Option<i64>,

        /// Range end in milliseconds
        #[arg(long, allow_hyphen_values = true)]
        to: Option<i64>,

        /// Merge all profiles in the range
        #[arg(long)]
        merge: bool,

        /// Range key of the date picker
        #[arg(long)]
        time_selection: Option<String>,

        #[command(flatten)]
        path: PathArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Select a profile on one side
    SelectProfile {
        /// Current query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        /// Side to update (a or b)
        #[arg(short, long, default_value = "a")]
        side: Side,

        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        path: PathArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Enter comparison mode, duplicating side A onto side B
    Compare {
        /// Current query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        #[command(flatten)]
        path: PathArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Close one side of a comparison
    ///
    /// Closing side A promotes side B into its place.
    Close {
        /// Current query string
        #[arg(value_name = "QUERY", allow_hyphen_values = true)]
        query: String,

        /// Side to close (a or b)
        #[arg(short, long)]
        side: Side,

        #[command(flatten)]
        path: PathArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl ExplorerCommands {
    pub fn execute(self) -> CliResult<()> {
        match self {
            ExplorerCommands::View { query, output } => {
                commands::view(&query, output.json, output.pretty)
            }
            ExplorerCommands::SelectQuery {
                query,
                side,
                expression,
                from,
                to,
                merge,
                time_selection,
                path,
                json,
            } => {
                let selection = QuerySelection {
                    expression,
                    from,
                    to,
                    merge,
                    time_selection: time_selection.unwrap_or_default(),
                };
                commands::select_query(&query, side, &selection, &path.path, json)
            }
            ExplorerCommands::SelectProfile {
                query,
                side,
                profile,
                path,
                json,
            } => commands::select_profile(&query, side, &profile, &path.path, json),
            ExplorerCommands::Compare { query, path, json } => {
                commands::compare(&query, &path.path, json)
            }
            ExplorerCommands::Close {
                query,
                side,
                path,
                json,
            } => commands::close(&query, side, &path.path, json),
        }
    }
}
