// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidy tree placement by contour merging.
//!
//! Subtrees are placed bottom-up. Every subtree carries its contour: for each
//! level below its root, the leftmost and rightmost card centers relative to
//! that root. Children are packed left to right; each new child subtree is
//! pushed right until, on every level the two share, it clears the
//! accumulated right contour of its left siblings by the required separation.
//! The parent is then centered over its first and last child.
//!
//! Level 0 of a child contour is the child itself, so it is separated from
//! its left neighbour by the sibling gap. Deeper contour pairs always belong
//! to different parents and use the cousin gap. Because every subtree is moved
//! rigidly after packing, the separations established at each merge hold in
//! the final layout.

use alloc::{vec, vec::Vec};
use core::ops::Range;

use arbor_tree::{DepthLimit, VisibleTree};
use kurbo::{Point, Size};

use crate::{Layout, LayoutConfig, PositionedNode};

#[derive(Copy, Clone, Debug)]
struct Extent {
    left: f64,
    right: f64,
}

impl Extent {
    const POINT: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    fn shifted(self, dx: f64) -> Self {
        Self {
            left: self.left + dx,
            right: self.right + dx,
        }
    }
}

struct Slot {
    source: usize,
    parent: Option<usize>,
    children: Range<usize>,
    level: u32,
}

/// Lays out `tree`, descending no further than `max_depth`.
///
/// Nodes at the depth cutoff are placed but their visible children are
/// dropped from the result. The output is a pure function of the inputs:
/// identical trees, limits, and configurations produce bit-identical
/// coordinates.
///
/// `config` is expected to pass [`LayoutConfig::validate`]; with an invalid
/// configuration the result is well defined but cards may overlap.
pub fn layout(tree: &VisibleTree<'_>, max_depth: DepthLimit, config: &LayoutConfig) -> Layout {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("tidy_layout", visible = tree.len()).entered();

    let slots = prune(tree, max_depth);
    let count = slots.len();
    let unit = config.horizontal_unit();
    let sibling_gap = config.sibling_separation * unit;
    let cousin_gap = config.cousin_separation * unit;

    // Breadth-first order means every child has a larger index than its
    // parent, so a reverse sweep visits subtrees bottom-up.
    let mut offsets = vec![0.0_f64; count];
    let mut contours: Vec<Vec<Extent>> = Vec::with_capacity(count);
    contours.resize_with(count, Vec::new);
    for v in (0..count).rev() {
        let children = slots[v].children.clone();
        if children.is_empty() {
            contours[v] = vec![Extent::POINT];
            continue;
        }

        let mut merged: Vec<Extent> = Vec::new();
        for c in children.clone() {
            let contour = core::mem::take(&mut contours[c]);
            if merged.is_empty() {
                offsets[c] = 0.0;
                merged = contour;
                continue;
            }
            let shift = merged
                .iter()
                .zip(&contour)
                .enumerate()
                .map(|(depth, (placed, next))| {
                    let gap = if depth == 0 { sibling_gap } else { cousin_gap };
                    placed.right + gap - next.left
                })
                .fold(f64::NEG_INFINITY, f64::max);
            offsets[c] = shift;
            for (depth, extent) in contour.into_iter().enumerate() {
                let extent = extent.shifted(shift);
                match merged.get_mut(depth) {
                    Some(m) => {
                        m.left = m.left.min(extent.left);
                        m.right = m.right.max(extent.right);
                    }
                    None => merged.push(extent),
                }
            }
        }

        let mid = (offsets[children.start] + offsets[children.end - 1]) / 2.0;
        for c in children {
            offsets[c] -= mid;
        }
        let mut own = Vec::with_capacity(merged.len() + 1);
        own.push(Extent::POINT);
        own.extend(merged.into_iter().map(|e| e.shifted(-mid)));
        contours[v] = own;
    }

    let mut xs = vec![0.0_f64; count];
    for v in 1..count {
        if let Some(parent) = slots[v].parent {
            xs[v] = xs[parent] + offsets[v];
        }
    }
    let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let level_height = config.level_height();

    let mut max_level = 0;
    let nodes: Vec<PositionedNode> = slots
        .into_iter()
        .zip(xs)
        .map(|(slot, x)| {
            max_level = max_level.max(slot.level);
            PositionedNode {
                id: tree.nodes()[slot.source].id(),
                parent: slot.parent,
                children: slot.children,
                level: slot.level,
                position: Point::new(x - min_x, f64::from(slot.level) * level_height),
            }
        })
        .collect();

    let size = Size::new(
        max_x - min_x + config.card_width,
        f64::from(max_level) * level_height + config.card_height,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        nodes = nodes.len(),
        width = size.width,
        height = size.height,
        "layout complete"
    );

    Layout::new(nodes, config.card_size(), size)
}

/// Re-indexes the visible tree breadth-first, cutting children below `max_depth`.
fn prune(tree: &VisibleTree<'_>, max_depth: DepthLimit) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(tree.len());
    slots.push(Slot {
        source: 0,
        parent: None,
        children: 0..0,
        level: 0,
    });
    let mut index = 0;
    while index < slots.len() {
        let level = slots[index].level;
        if max_depth.allows_children(level) {
            let source = &tree.nodes()[slots[index].source];
            let start = slots.len();
            for child in source.children.clone() {
                slots.push(Slot {
                    source: child,
                    parent: Some(index),
                    children: 0..0,
                    level: level + 1,
                });
            }
            slots[index].children = start..slots.len();
        }
        index += 1;
    }
    slots
}
