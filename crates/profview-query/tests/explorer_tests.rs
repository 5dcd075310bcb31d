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

//! Integration tests for the explorer mutation protocol.

use profview_query::{
    parse, ExplorerView, MergedProfileSelection, ProfileExplorer, QuerySelection,
    RecordingNavigator, Side, SingleProfileSelection, Label, ViewMode,
};

fn explorer() -> ProfileExplorer {
    ProfileExplorer::default()
}

#[test]
fn test_select_query_resets_profile_selection() {
    let params = parse("expression_a=up&labels_a=job%3Dapi&time_a=5&theme=dark");
    let query = QuerySelection::new("down", 10, 20).with_time_selection("relative:hour|1");

    let target = explorer().select_query(&params, Side::A, &query);

    assert_eq!(target.path, "/");
    assert_eq!(
        target.query,
        "theme=dark&expression_a=down&from_a=10&to_a=20&merge_a=false&time_selection_a=relative:hour|1"
    );
}

#[test]
fn test_select_profile_keeps_query() {
    let params = parse("expression_a=up&from_a=1&to_a=2");
    let profile = SingleProfileSelection::new(vec![Label::new("job", "api")], Some(1_500));

    let target = explorer().select_profile(&params, Side::A, &profile);

    assert_eq!(
        target.query,
        "expression_a=up&from_a=1&to_a=2&labels_a=job=api&time_a=1500"
    );
}

#[test]
fn test_select_profile_on_b_in_compare_mode() {
    let params = parse("compare_a=true&compare_b=true&expression_b=up");
    let profile = MergedProfileSelection::new(Some(1), Some(2), "up");

    let target = explorer().select_profile(&params, Side::B, &profile);

    assert_eq!(
        target.query,
        "compare_a=true&compare_b=true&expression_b=up&mode_b=merge&from_b=1&to_b=2&query_b=up"
    );
}

#[test]
fn test_compare_duplicates_side_a() {
    let params = parse("expression_a=up&from_a=1&to_a=2&merge_a=true&time_selection_a=k&theme=dark");

    let target = explorer().compare_profile(&params);

    // merge_a=true with a range yields a merged profile whose history params
    // come first; the compare keys then override from_a/to_a in place.
    assert_eq!(
        target.query,
        "mode_a=merge&from_a=1&to_a=2&query_a=up\
         &compare_a=true&expression_a=up&merge_a=true&time_selection_a=k\
         &compare_b=true&expression_b=up&from_b=1&to_b=2&merge_b=true&time_selection_b=k"
    );

    let next = explorer().view(&parse(&target.query));
    assert_eq!(next.mode(), ViewMode::Compare);
}

#[test]
fn test_compare_without_profile() {
    let target = explorer().compare_profile(&parse("expression_a=up"));
    assert_eq!(
        target.query,
        "compare_a=true&expression_a=up&from_a=NaN&to_a=NaN&merge_a=false&time_selection_a=\
         &compare_b=true&expression_b=up&from_b=NaN&to_b=NaN&merge_b=false&time_selection_b="
    );
}

#[test]
fn test_close_a_promotes_b() {
    let params = parse("compare_a=true&expression_a=left&compare_b=true&expression_b=right&time_b=7");

    let target = explorer().close_profile(&params, Side::A);

    assert_eq!(target.query, "compare_a=false&expression_a=right&time_a=7");
    match explorer().view(&parse(&target.query)) {
        ExplorerView::Single { query, profile } => {
            assert_eq!(query.expression, "right");
            assert!(profile.is_none());
        }
        other => panic!("expected single view, got {:?}", other.mode()),
    }
}

#[test]
fn test_close_b_keeps_a() {
    let params = parse("compare_a=true&expression_a=left&compare_b=true&expression_b=right");
    let target = explorer().close_profile(&params, Side::B);
    assert_eq!(target.query, "compare_a=false&expression_a=left");
}

#[test]
fn test_full_session_through_navigator() {
    let explorer = explorer();
    let mut nav = RecordingNavigator::new();

    let start = parse("");
    let target = explorer.select_query(&start, Side::A, &QuerySelection::new("up", 1, 2));
    explorer.dispatch(&mut nav, target);

    let current = parse(&nav.last().expect("navigated").query);
    let target = explorer.compare_profile(&current);
    explorer.dispatch(&mut nav, target);

    let current = parse(&nav.last().expect("navigated").query);
    let target = explorer.select_query(&current, Side::B, &QuerySelection::new("down", 3, 4));
    explorer.dispatch(&mut nav, target);

    let current = parse(&nav.last().expect("navigated").query);
    let view = explorer.view(&current);
    assert_eq!(view.query(Side::A).map(|q| q.expression.as_str()), Some("up"));
    assert_eq!(view.query(Side::B).map(|q| q.expression.as_str()), Some("down"));
    assert_eq!(view.query(Side::B).and_then(|q| q.from), Some(3));

    let target = explorer.close_profile(&current, Side::A);
    explorer.dispatch(&mut nav, target);

    let current = parse(&nav.last().expect("navigated").query);
    let view = explorer.view(&current);
    assert_eq!(view.mode(), ViewMode::Single);
    assert_eq!(view.query(Side::A).map(|q| q.expression.as_str()), Some("down"));
    assert_eq!(nav.history().len(), 4);
}
