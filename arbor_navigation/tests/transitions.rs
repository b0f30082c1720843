// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end navigation scenarios and accordion properties.

use arbor_directory::{Directory, Employee, EmployeeId};
use arbor_navigation::{NavAction, NavState};
use arbor_tree::{DepthLimit, ExpandedSet, RootAnchor};
use proptest::prelude::*;

fn id(n: u32) -> EmployeeId {
    EmployeeId(n)
}

fn child_ids(state: &NavState, dir: &Directory, of: u32) -> Vec<u32> {
    let tree = state.visible_tree(dir).unwrap();
    let index = tree.find(id(of)).unwrap();
    tree.children(index).iter().map(|n| n.id().0).collect()
}

#[test]
fn toggling_a_child_reveals_its_reports() {
    let dir = Directory::new(vec![
        Employee::new(1, "CEO"),
        Employee::new(2, "A").reporting_to(id(1)),
        Employee::new(3, "B").reporting_to(id(1)),
        Employee::new(4, "C").reporting_to(id(2)),
    ])
    .unwrap();
    let state = NavState::new(RootAnchor::Company, [id(1)].into_iter().collect());

    assert_eq!(state.visible_tree(&dir).unwrap().root().id(), id(1));
    assert_eq!(child_ids(&state, &dir, 1), [2, 3]);
    assert!(child_ids(&state, &dir, 2).is_empty());

    let state = state.reduce(&dir, NavAction::ToggleExpand(id(2))).state;
    assert_eq!(child_ids(&state, &dir, 2), [4]);
}

#[test]
fn jumping_to_a_leaf_collapses_everything() {
    let dir = Directory::new(vec![
        Employee::new(1, "CEO"),
        Employee::new(2, "A").reporting_to(id(1)),
        Employee::new(4, "C").reporting_to(id(2)),
    ])
    .unwrap();
    let state = NavState::company(&dir).reduce(&dir, NavAction::JumpTo(id(4))).state;
    assert_eq!(state.root_anchor(), RootAnchor::Employee(id(4)));
    assert_eq!(state.expanded(), &ExpandedSet::new());
}

#[test]
fn one_level_deep_reports_depth_one() {
    let dir = Directory::new(vec![
        Employee::new(1, "CEO"),
        Employee::new(2, "A").reporting_to(id(1)),
        Employee::new(3, "B").reporting_to(id(2)),
    ])
    .unwrap();
    let state = NavState::company(&dir).reduce(
        &dir,
        NavAction::ExpandToDepth {
            root: id(1),
            depth: DepthLimit::Levels(1),
        },
    );
    let expected: ExpandedSet = [id(1)].into_iter().collect();
    assert_eq!(state.state.expanded(), &expected);
    assert_eq!(state.state.current_depth(&dir), 1);
}

fn directory() -> impl Strategy<Value = Directory> {
    prop::collection::vec(any::<prop::sample::Index>(), 0..60).prop_map(|parents| {
        let mut records = vec![Employee::new(0, "root")];
        for (i, parent) in parents.iter().enumerate() {
            let id = u32::try_from(i + 1).unwrap();
            let manager = u32::try_from(parent.index(i + 1)).unwrap();
            records.push(Employee::new(id, format!("e{id}")).reporting_to(EmployeeId(manager)));
        }
        Directory::new(records).unwrap()
    })
}

proptest! {
    #[test]
    fn select_expands_exactly_the_path(dir in directory(), pick in any::<prop::sample::Index>()) {
        let target = dir.iter().nth(pick.index(dir.len())).unwrap().id;
        let state = NavState::company(&dir).select(&dir, target);

        for ancestor in dir.ancestors(target) {
            prop_assert!(state.is_expanded(ancestor.id));
        }
        prop_assert_eq!(state.is_expanded(target), dir.has_reports(target));
        let expected = dir.ancestors(target).count() + usize::from(dir.has_reports(target));
        prop_assert_eq!(state.expanded().len(), expected);

        // The selected node is visible from the company root.
        let tree = state.visible_tree(&dir).unwrap();
        prop_assert!(tree.contains(target));
    }

    #[test]
    fn expand_to_depth_matches_current_depth(dir in directory(), levels in 1_u32..6) {
        let root = dir.root().unwrap().id;
        let state = NavState::company(&dir).expand_to_depth(&dir, root, DepthLimit::Levels(levels));
        let tree = state.visible_tree(&dir).unwrap();
        prop_assert!(tree.depth() <= levels);
        prop_assert_eq!(state.current_depth(&dir), tree.depth().max(1));
    }
}
