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

//! Explorer commands - Derive views and compute navigation targets

use super::{write_json, write_output};
use crate::error::{CliError, CliResult};
use clap::Args;
use profview::query::{
    derive_query_selection, parse_labels, DefaultProfileSelectionFactory, ExplorerConfig,
    MergedProfileSelection, SingleProfileSelection,
};
use profview::range::format_range_label;
use profview::{
    parse, selected_range, serialize, NavigationTarget, ProfileExplorer, ProfileSelection,
    QueryParams, QuerySelection, Side, ViewMode,
};
use serde::Serialize;

/// The profile to select, either by labels or as a merge over a range.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// Profile label (repeatable)
    #[arg(long = "label", value_name = "NAME=VALUE")]
    pub labels: Vec<String>,

    /// Sample timestamp in milliseconds
    #[arg(long, allow_hyphen_values = true)]
    pub time: Option<i64>,

    /// Select all profiles merged over a range
    #[arg(long, conflicts_with_all = ["labels", "time"])]
    pub merge: bool,

    /// Merge range start in milliseconds (defaults to the side's `from`)
    #[arg(long, requires = "merge", allow_hyphen_values = true)]
    pub from: Option<i64>,

    /// Merge range end in milliseconds (defaults to the side's `to`)
    #[arg(long, requires = "merge", allow_hyphen_values = true)]
    pub to: Option<i64>,

    /// Merge expression (defaults to the side's expression)
    #[arg(long = "query", requires = "merge")]
    pub expression: Option<String>,
}

impl ProfileArgs {
    /// Build the selection, filling merge fields from the side's query.
    pub fn to_selection(&self, params: &QueryParams, side: Side) -> CliResult<Box<dyn ProfileSelection>> {
        if self.merge {
            let current = derive_query_selection(params, side);
            return Ok(Box::new(MergedProfileSelection::new(
                self.from.or(current.from),
                self.to.or(current.to),
                self.expression.clone().unwrap_or(current.expression),
            )));
        }

        if self.labels.is_empty() {
            return Err(CliError::invalid_input(
                "select-profile needs at least one --label or --merge",
            ));
        }
        let labels = parse_labels(self.labels.iter().map(String::as_str))?;
        Ok(Box::new(SingleProfileSelection::new(labels, self.time)))
    }
}

#[derive(Serialize)]
struct ProfileReport {
    kind: &'static str,
    params: QueryParams,
}

#[derive(Serialize)]
struct SideReport {
    side: Side,
    query: QuerySelection,
    profile: Option<ProfileReport>,
    range: String,
}

#[derive(Serialize)]
struct ViewReport {
    mode: ViewMode,
    sides: Vec<SideReport>,
}

fn explorer(path: &str) -> ProfileExplorer {
    ProfileExplorer::with_config(
        DefaultProfileSelectionFactory,
        ExplorerConfig::new().with_path(path),
    )
}

fn write_target(target: &NavigationTarget, json: bool) -> CliResult<()> {
    if json {
        write_json(target, false)
    } else {
        write_output(&target.to_string())
    }
}

/// Print the view derived from `raw`.
pub fn view(raw: &str, json: bool, pretty: bool) -> CliResult<()> {
    let params = parse(raw);
    let view = explorer(profview::query::DEFAULT_PATH).view(&params);

    let sides: Vec<Side> = match view.mode() {
        ViewMode::Single => vec![Side::A],
        ViewMode::Compare => Side::ALL.to_vec(),
    };
    let report = ViewReport {
        mode: view.mode(),
        sides: sides
            .into_iter()
            .filter_map(|side| {
                let query = view.query(side)?.clone();
                let profile = view.profile(side).map(|p| ProfileReport {
                    kind: p.kind(),
                    params: p.history_params(),
                });
                Some(SideReport {
                    side,
                    query,
                    profile,
                    range: format_range_label(&selected_range(&params, side)),
                })
            })
            .collect(),
    };

    if json {
        return write_json(&report, pretty);
    }

    write_output(&format!("mode: {}", report.mode))?;
    for side in &report.sides {
        let q = &side.query;
        write_output(&format!(
            "{}: expression={} from={} to={} merge={} time_selection={}",
            side.side,
            q.expression,
            profview::query::format_timestamp(q.from),
            profview::query::format_timestamp(q.to),
            q.merge,
            q.time_selection,
        ))?;
        match &side.profile {
            Some(p) => write_output(&format!("{}: profile {} {}", side.side, p.kind, serialize(&p.params)))?,
            None => write_output(&format!("{}: profile none", side.side))?,
        }
        write_output(&format!("{}: range {}", side.side, side.range))?;
    }
    Ok(())
}

/// Print the target for running `selection` on `side`.
pub fn select_query(raw: &str, side: Side, selection: &QuerySelection, path: &str, json: bool) -> CliResult<()> {
    let target = explorer(path).select_query(&parse(raw), side, selection);
    write_target(&target, json)
}

/// Print the target for selecting a profile on `side`.
pub fn select_profile(raw: &str, side: Side, profile: &ProfileArgs, path: &str, json: bool) -> CliResult<()> {
    let params = parse(raw);
    let selection = profile.to_selection(&params, side)?;
    let target = explorer(path).select_profile(&params, side, &*selection);
    write_target(&target, json)
}

/// Print the target for entering comparison mode.
pub fn compare(raw: &str, path: &str, json: bool) -> CliResult<()> {
    let target = explorer(path).compare_profile(&parse(raw));
    write_target(&target, json)
}

/// Print the target for closing `side`.
pub fn close(raw: &str, side: Side, path: &str, json: bool) -> CliResult<()> {
    let target = explorer(path).close_profile(&parse(raw), side);
    write_target(&target, json)
}
