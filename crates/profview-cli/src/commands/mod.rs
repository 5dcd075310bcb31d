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

//! CLI command implementations

mod completion;
mod explorer;
mod format;
mod query;
mod range;

pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use explorer::{close, compare, select_profile, select_query, view, ProfileArgs};
pub use format::{convert_time, format_duration, format_value};
pub use query::{filter_suffix, mode, parse_query, serialize_json, swap_suffix};
pub use range::{range, RangeArgs};

use crate::error::CliResult;
use serde::Serialize;
use std::io::{self, Write};

/// Write `content` to stdout followed by a newline.
pub fn write_output(content: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Write `value` to stdout as JSON.
pub fn write_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    write_output(&json)
}
