// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the tidy layout: no overlap, determinism, normalization.

use std::collections::BTreeMap;

use arbor_directory::{Directory, Employee, EmployeeId};
use arbor_layout::{Layout, LayoutConfig, layout};
use arbor_tree::{DepthLimit, ExpandedSet, RootAnchor, build};
use proptest::prelude::*;

/// Random directories: record `i` reports to some earlier record.
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

fn config() -> impl Strategy<Value = LayoutConfig> {
    (
        20.0..300.0_f64,
        20.0..150.0_f64,
        0.0..80.0_f64,
        0.0..120.0_f64,
        1.0..2.0_f64,
        1.0..2.5_f64,
    )
        .prop_map(|(w, h, hs, vs, sib, cousin)| LayoutConfig {
            card_width: w,
            card_height: h,
            horizontal_spacing: hs,
            vertical_spacing: vs,
            sibling_separation: sib,
            cousin_separation: cousin,
        })
}

fn expanded(dir: &Directory, mask: &[bool]) -> ExpandedSet {
    dir.iter()
        .zip(mask.iter().chain(std::iter::repeat(&true)))
        .filter_map(|(e, &on)| on.then_some(e.id))
        .collect()
}

fn descendants(out: &Layout, index: usize, acc: &mut Vec<usize>) {
    acc.push(index);
    for c in out.nodes()[index].children.clone() {
        descendants(out, c, acc);
    }
}

proptest! {
    #[test]
    fn cards_on_one_level_never_overlap(
        dir in directory(),
        mask in prop::collection::vec(any::<bool>(), 0..60),
        config in config(),
    ) {
        let expanded = expanded(&dir, &mask);
        let tree = build(&dir, RootAnchor::Company, &expanded).unwrap();
        let out = layout(&tree, DepthLimit::All, &config);

        let mut levels: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for n in out.nodes() {
            levels.entry(n.level).or_default().push(n.position.x);
        }
        for xs in levels.values_mut() {
            xs.sort_by(f64::total_cmp);
            for pair in xs.windows(2) {
                prop_assert!(
                    pair[1] - pair[0] >= config.card_width - 1e-6,
                    "cards at {} and {} overlap (width {})",
                    pair[0], pair[1], config.card_width
                );
            }
        }
    }

    #[test]
    fn sibling_subtrees_are_separated_per_level(dir in directory(), config in config()) {
        let all: ExpandedSet = dir.iter().map(|e| e.id).collect();
        let tree = build(&dir, RootAnchor::Company, &all).unwrap();
        let out = layout(&tree, DepthLimit::All, &config);

        for (index, parent) in out.nodes().iter().enumerate() {
            let kids: Vec<usize> = parent.children.clone().collect();
            for pair in kids.windows(2) {
                let (mut left, mut right) = (Vec::new(), Vec::new());
                descendants(&out, pair[0], &mut left);
                descendants(&out, pair[1], &mut right);
                for &l in &left {
                    for &r in &right {
                        let (ln, rn) = (&out.nodes()[l], &out.nodes()[r]);
                        if ln.level == rn.level {
                            prop_assert!(
                                rn.position.x - ln.position.x >= config.card_width - 1e-6,
                                "subtrees under node {index} collide on level {}",
                                ln.level
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn layout_is_deterministic_and_normalized(
        dir in directory(),
        config in config(),
        levels in prop::option::of(0_u32..6),
    ) {
        let all: ExpandedSet = dir.iter().map(|e| e.id).collect();
        let tree = build(&dir, RootAnchor::Company, &all).unwrap();
        let limit = levels.map_or(DepthLimit::All, DepthLimit::Levels);
        let a = layout(&tree, limit, &config);
        let b = layout(&tree, limit, &config);

        prop_assert_eq!(a.len(), b.len());
        for (l, r) in a.nodes().iter().zip(b.nodes()) {
            prop_assert_eq!(l.position.x.to_bits(), r.position.x.to_bits());
            prop_assert_eq!(l.position.y.to_bits(), r.position.y.to_bits());
        }

        let min_x = a.nodes().iter().map(|n| n.position.x).fold(f64::INFINITY, f64::min);
        let max_x = a.nodes().iter().map(|n| n.position.x).fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(min_x, 0.0);
        prop_assert!((a.width() - (max_x + config.card_width)).abs() < 1e-9);

        if let DepthLimit::Levels(n) = limit {
            prop_assert!(a.nodes().iter().all(|node| node.level <= n));
        }
    }

    #[test]
    fn parents_are_centered_over_their_children(dir in directory()) {
        let all: ExpandedSet = dir.iter().map(|e| e.id).collect();
        let tree = build(&dir, RootAnchor::Company, &all).unwrap();
        let out = layout(&tree, DepthLimit::All, &LayoutConfig::default());

        for node in out.nodes() {
            if node.children.is_empty() {
                continue;
            }
            let first = out.nodes()[node.children.start].position.x;
            let last = out.nodes()[node.children.end - 1].position.x;
            prop_assert!((node.position.x - (first + last) / 2.0).abs() < 1e-6);
        }
    }
}
