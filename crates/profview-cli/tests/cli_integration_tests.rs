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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

// Test helper to create a profview command with a clean environment
fn profview_cmd() -> Command {
    let mut cmd = Command::cargo_bin("profview").expect("Failed to find profview binary");
    cmd.env_remove("PROFVIEW_PATH").env_remove("RUST_LOG");
    cmd
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    profview_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("profview - profile explorer view state toolkit"))
        .stdout(predicate::str::contains("select-profile"));
}

#[test]
fn test_version_output() {
    profview_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("profview"));
}

#[test]
fn test_no_subcommand_fails() {
    profview_cmd().assert().failure();
}

// ===== Query Command Tests =====

#[test]
fn test_parse_lists_parameters() {
    profview_cmd()
        .args(["parse", "?expression_a=up&labels_a=a%3D1&labels_a=b%3D2"])
        .assert()
        .success()
        .stdout("expression_a=up\nlabels_a=[a=1, b=2]\n");
}

#[test]
fn test_parse_json() {
    profview_cmd()
        .args(["parse", "expression_a=up&labels_a=a%3D1&labels_a=b%3D2", "--json"])
        .assert()
        .success()
        .stdout("{\"expression_a\":\"up\",\"labels_a\":[\"a=1\",\"b=2\"]}\n");
}

#[test]
fn test_pretty_requires_json() {
    profview_cmd().args(["parse", "a=1", "--pretty"]).assert().failure();
}

#[test]
fn test_serialize_joins_sequences() {
    profview_cmd()
        .args(["serialize", r#"{"a":"1","b":["x","y"]}"#])
        .assert()
        .success()
        .stdout("a=1&b=x,y\n");
}

#[test]
fn test_serialize_invalid_json() {
    profview_cmd()
        .args(["serialize", "{"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: JSON format error:"));
}

#[test]
fn test_filter_suffix() {
    profview_cmd()
        .args(["filter-suffix", "a_a=1&b_b=2&c=3", "_a"])
        .assert()
        .success()
        .stdout("b_b=2&c=3\n");
}

#[test]
fn test_swap_suffix() {
    profview_cmd()
        .args(["swap-suffix", "expression_a=x&expression_b=y&time_b=1"])
        .assert()
        .success()
        .stdout("expression_a=y&expression_b=y&time_b=1&time_a=1\n");
}

#[test]
fn test_mode() {
    profview_cmd().args(["mode", ""]).assert().success().stdout("single\n");
    profview_cmd()
        .args(["mode", "compare_b=true"])
        .assert()
        .success()
        .stdout("compare\n");
    profview_cmd()
        .args(["mode", "compare_a=yes", "--json"])
        .assert()
        .success()
        .stdout("{\"mode\":\"single\"}\n");
}

// ===== Explorer Command Tests =====

#[test]
fn test_view_single() {
    profview_cmd()
        .args(["view", "expression_a=up&from_a=1&to_a=2&labels_a=job%3Dapi&time_a=5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "mode: single\nA: expression=up from=1 to=2 merge=false time_selection=\n\
             A: profile single labels=job=api&time=5\n",
        ))
        .stdout(predicate::str::contains("B:").not());
}

#[test]
fn test_view_compare_json() {
    profview_cmd()
        .args([
            "view",
            "compare_a=true&expression_a=up&compare_b=true&expression_b=down&time_selection_b=relative%3Aminute%7C5",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\":\"compare\""))
        .stdout(predicate::str::contains("\"range\":\"Last 5 minutes\""))
        .stdout(predicate::str::contains("\"profile\":null"));
}

#[test]
fn test_select_query_resets_profile() {
    profview_cmd()
        .args([
            "select-query",
            "expression_a=old&time_a=1&labels_a=x%3D1&theme=dark",
            "-e",
            "up",
            "--from",
            "1",
            "--to",
            "2",
        ])
        .assert()
        .success()
        .stdout("/?theme=dark&expression_a=up&from_a=1&to_a=2&merge_a=false&time_selection_a=\n");
}

#[test]
fn test_select_query_path_from_env() {
    profview_cmd()
        .env("PROFVIEW_PATH", "/explore")
        .args(["select-query", "", "--side", "b", "-e", "up"])
        .assert()
        .success()
        .stdout("/explore?expression_b=up&from_b=NaN&to_b=NaN&merge_b=false&time_selection_b=\n");
}

#[test]
fn test_select_query_json() {
    profview_cmd()
        .args(["select-query", "", "-e", "up", "--merge", "--json", "--path", "/p"])
        .assert()
        .success()
        .stdout(
            "{\"path\":\"/p\",\"query\":\"expression_a=up&from_a=NaN&to_a=NaN&merge_a=true&time_selection_a=\"}\n",
        );
}

#[test]
fn test_select_profile_by_labels() {
    profview_cmd()
        .args([
            "select-profile",
            "expression_a=up",
            "--label",
            "job=api",
            "--label",
            "env=prod",
            "--time",
            "5",
        ])
        .assert()
        .success()
        .stdout("/?expression_a=up&labels_a=job=api,env=prod&time_a=5\n");
}

#[test]
fn test_select_profile_merge_uses_side_query() {
    profview_cmd()
        .args(["select-profile", "expression_b=up&from_b=1&to_b=2", "-s", "b", "--merge"])
        .assert()
        .success()
        .stdout("/?expression_b=up&from_b=1&to_b=2&mode_b=merge&query_b=up\n");
}

#[test]
fn test_select_profile_requires_selection() {
    profview_cmd()
        .args(["select-profile", "expression_a=up"])
        .assert()
        .failure()
        .stderr("Error: Invalid input: select-profile needs at least one --label or --merge\n");
}

#[test]
fn test_select_profile_malformed_label() {
    profview_cmd()
        .args(["select-profile", "", "--label", "job"])
        .assert()
        .failure()
        .stderr("Error: Malformed label 'job': expected name=value\n");
}

#[test]
fn test_merge_conflicts_with_labels() {
    profview_cmd()
        .args(["select-profile", "", "--merge", "--label", "a=1"])
        .assert()
        .failure();
}

#[test]
fn test_compare_without_profile() {
    profview_cmd()
        .args(["compare", "expression_a=up"])
        .assert()
        .success()
        .stdout(
            "/?compare_a=true&expression_a=up&from_a=NaN&to_a=NaN&merge_a=false&time_selection_a=\
             &compare_b=true&expression_b=up&from_b=NaN&to_b=NaN&merge_b=false&time_selection_b=\n",
        );
}

#[test]
fn test_close_a_promotes_b() {
    profview_cmd()
        .args([
            "close",
            "compare_a=true&expression_a=left&compare_b=true&expression_b=right&time_b=7",
            "--side",
            "a",
        ])
        .assert()
        .success()
        .stdout("/?compare_a=false&expression_a=right&time_a=7\n");
}

#[test]
fn test_close_invalid_side() {
    profview_cmd()
        .args(["close", "compare_a=true", "--side", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid comparison side 'c'"));
}

// ===== Unit Command Tests =====

#[test]
fn test_convert_time() {
    profview_cmd()
        .args(["convert-time", "1.5", "s", "ms"])
        .assert()
        .success()
        .stdout("1500\n");
    profview_cmd()
        .args(["convert-time", "-2", "h", "minutes"])
        .assert()
        .success()
        .stdout("-120\n");
}

#[test]
fn test_convert_time_unknown_unit_warns() {
    profview_cmd()
        .args(["convert-time", "2", "bogus", "s"])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("invalid start or end unit provided"));
}

#[test]
fn test_convert_time_strict() {
    profview_cmd()
        .args(["convert-time", "2", "bogus", "s", "--strict"])
        .assert()
        .failure()
        .stderr("Error: Invalid input: invalid start or end unit provided: bogus -> s\n");
}

#[test]
fn test_format_duration() {
    profview_cmd()
        .args(["format-duration", "3725000"])
        .assert()
        .success()
        .stdout("1h 2m 5s\n");
    profview_cmd()
        .args(["format-duration", "0.5", "--unit", "ms"])
        .assert()
        .success()
        .stdout("<1ms\n");
}

#[test]
fn test_format_duration_unknown_unit() {
    profview_cmd()
        .args(["format-duration", "1", "--unit", "fortnight"])
        .assert()
        .failure()
        .stderr("Error: Unknown time unit: fortnight\n");
}

#[test]
fn test_format_value() {
    profview_cmd()
        .args(["format-value", "1500", "bytes"])
        .assert()
        .success()
        .stdout("1.5kB\n");
    profview_cmd()
        .args(["format-value", "1600", "bytes", "--digits", "0"])
        .assert()
        .success()
        .stdout("2kB\n");
}

#[test]
fn test_format_value_rounds_ties_up() {
    profview_cmd()
        .args(["format-value", "2500", "bytes", "--digits", "0"])
        .assert()
        .success()
        .stdout("3kB\n");
}

#[test]
fn test_format_value_rejects_too_many_digits() {
    profview_cmd()
        .args(["format-value", "1.5", "count", "--digits", "70000"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("must be at most 100"));
    profview_cmd()
        .args(["format-value", "1.5", "count", "--digits", "100"])
        .assert()
        .success()
        .stdout("1.5\n");
}

#[test]
fn test_format_duration_negative() {
    profview_cmd()
        .args(["format-duration", "-5"])
        .assert()
        .success()
        .stdout("<1ms\n");
}

#[test]
fn test_format_value_unknown_category() {
    profview_cmd()
        .args(["format-value", "5", "watts"])
        .assert()
        .success()
        .stdout("5\n");
    profview_cmd()
        .args(["format-value", "5", "watts", "--strict"])
        .assert()
        .failure()
        .stderr("Error: Invalid input: Unknown value category: watts\n");
}

// ===== Range Command Tests =====

#[test]
fn test_range_relative_key() {
    profview_cmd()
        .args(["range", "relative:hour|1", "--now", "3600000"])
        .assert()
        .success()
        .stdout("label: Last 1 hour\nkey: relative:hour|1\nfrom: 0\nto: 3600000\n");
}

#[test]
fn test_range_from_bounds() {
    profview_cmd()
        .args(["range", "--from", "1000", "--to", "2000"])
        .assert()
        .success()
        .stdout(
            "label: 1970-01-01 00:00:01 to 1970-01-01 00:00:02\nkey: absolute:1000-2000\nfrom: 1000\nto: 2000\n",
        );
}

#[test]
fn test_range_absolute_picker() {
    profview_cmd()
        .args(["range", "relative:minute|30", "--now", "7200000", "--absolute", "--json"])
        .assert()
        .success()
        .stdout(
            "{\"label\":\"1970-01-01 01:00:00 to 1970-01-01 02:00:00\",\"key\":\"absolute:3600000-7200000\",\
             \"relative\":false,\"from_ms\":3600000,\"to_ms\":7200000}\n",
        );
}

#[test]
fn test_range_malformed_key() {
    profview_cmd()
        .args(["range", "garbage"])
        .assert()
        .failure()
        .stderr("Error: Malformed range key 'garbage'\n");
}

// ===== Completion Tests =====

#[test]
fn test_completion_bash() {
    profview_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_profview()"));
}

#[test]
fn test_completion_install_instructions() {
    profview_cmd()
        .args(["completion", "fish", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profview completion fish"));
}

#[test]
fn test_completion_unknown_shell() {
    profview_cmd().args(["completion", "tcsh"]).assert().failure();
}
