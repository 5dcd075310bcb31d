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

//! Query-string commands - Inspect and rewrite parameter sets

use super::{write_json, write_output};
use crate::error::CliResult;
use profview::{parse, query, serialize, QueryParams, QueryValue};
use tracing::debug;

/// Print the parameters of `raw`, one key per line.
///
/// Repeated keys are shown as `key=[first, second]`. With `json`, the set
/// is printed as an object whose repeated keys map to arrays.
pub fn parse_query(raw: &str, json: bool, pretty: bool) -> CliResult<()> {
    let params = parse(raw);
    debug!(keys = params.len(), "parsed query");

    if json {
        return write_json(&params, pretty);
    }

    for (key, value) in params.iter() {
        let line = match value {
            QueryValue::Scalar(v) => format!("{}={}", key, v),
            QueryValue::Sequence(vs) => format!("{}=[{}]", key, vs.join(", ")),
        };
        write_output(&line)?;
    }
    Ok(())
}

/// Serialize a JSON object into a query string.
///
/// String values become single entries and arrays become repeated values,
/// written comma-joined under one key.
pub fn serialize_json(input: &str) -> CliResult<()> {
    let params: QueryParams = serde_json::from_str(input)?;
    write_output(&serialize(&params))
}

/// Drop every key ending in `suffix`.
pub fn filter_suffix(raw: &str, suffix: &str) -> CliResult<()> {
    write_output(&serialize(&query::filter_suffix(&parse(raw), suffix)))
}

/// Copy every `_b` key onto its `_a` counterpart.
pub fn swap_suffix(raw: &str) -> CliResult<()> {
    write_output(&serialize(&query::swap_suffix(&parse(raw))))
}

/// Print `single` or `compare`.
pub fn mode(raw: &str, json: bool) -> CliResult<()> {
    let mode = query::view_mode(&parse(raw));
    if json {
        write_json(&serde_json::json!({ "mode": mode }), false)
    } else {
        write_output(&mode.to_string())
    }
}
