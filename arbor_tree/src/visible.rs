// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible tree and its builder.

use alloc::vec::Vec;
use core::ops::Range;

use arbor_directory::{Directory, Employee, EmployeeId};

use crate::{ExpandedSet, RootAnchor};

/// One node of a [`VisibleTree`].
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<'d> {
    /// The record this node shows.
    pub employee: &'d Employee,
    /// Index of the parent node, `None` for the root.
    pub parent: Option<usize>,
    /// Indices of the visible children. Empty unless the node is expanded.
    pub children: Range<usize>,
    /// Depth from the displayed root (root = 0).
    pub level: u32,
}

impl TreeNode<'_> {
    /// Id of the underlying record.
    pub fn id(&self) -> EmployeeId {
        self.employee.id
    }

    /// Returns `true` if no children are visible under this node.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if the record has reports that are not currently shown.
    pub fn has_hidden_reports(&self) -> bool {
        self.children.is_empty() && self.employee.direct_reports > 0
    }
}

/// The currently visible part of the org chart.
///
/// Nodes are stored breadth-first with the root at index 0; the children of
/// each node occupy a contiguous index range in directory order. A visible
/// tree is rebuilt wholesale whenever navigation changes and is never patched
/// in place.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleTree<'d> {
    nodes: Vec<TreeNode<'d>>,
}

impl<'d> VisibleTree<'d> {
    /// The root node.
    pub fn root(&self) -> &TreeNode<'d> {
        &self.nodes[0]
    }

    /// All nodes, breadth-first.
    pub fn nodes(&self) -> &[TreeNode<'d>] {
        &self.nodes
    }

    /// Iterates nodes breadth-first.
    pub fn iter(&self) -> core::slice::Iter<'_, TreeNode<'d>> {
        self.nodes.iter()
    }

    /// Node at `index`, if any.
    pub fn node(&self, index: usize) -> Option<&TreeNode<'d>> {
        self.nodes.get(index)
    }

    /// Visible children of the node at `index`. Empty for out-of-range indices.
    pub fn children(&self, index: usize) -> &[TreeNode<'d>] {
        self.nodes
            .get(index)
            .map_or(&[][..], |n| &self.nodes[n.children.clone()])
    }

    /// Number of visible nodes (always at least one).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a built tree contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the node showing `id`, if it is visible.
    pub fn find(&self, id: EmployeeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id() == id)
    }

    /// Returns `true` if `id` is visible.
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.find(id).is_some()
    }

    /// Deepest visible level.
    pub fn depth(&self) -> u32 {
        // Breadth-first order puts the deepest level last.
        self.nodes.last().map_or(0, |n| n.level)
    }
}

impl<'a, 'd> IntoIterator for &'a VisibleTree<'d> {
    type Item = &'a TreeNode<'d>;
    type IntoIter = core::slice::Iter<'a, TreeNode<'d>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Resolves a [`RootAnchor`] against the directory.
///
/// Returns `None` for an empty directory or an anchor id that is not present.
pub fn resolve_root(directory: &Directory, anchor: RootAnchor) -> Option<&Employee> {
    match anchor {
        RootAnchor::Company => directory.root(),
        RootAnchor::Employee(id) => directory.get(id),
    }
}

/// Builds the visible tree for `anchor` and `expanded`.
///
/// Returns `None` when the root cannot be resolved; callers should show an
/// explicit empty or not-found state in that case.
pub fn build<'d>(
    directory: &'d Directory,
    anchor: RootAnchor,
    expanded: &ExpandedSet,
) -> Option<VisibleTree<'d>> {
    let root = resolve_root(directory, anchor)?;
    let mut nodes = Vec::with_capacity(1 + expanded.len());
    nodes.push(TreeNode {
        employee: root,
        parent: None,
        children: 0..0,
        level: 0,
    });

    let mut index = 0;
    while index < nodes.len() {
        let employee = nodes[index].employee;
        if expanded.contains(employee.id) {
            let level = nodes[index].level + 1;
            let start = nodes.len();
            nodes.extend(directory.reports(employee.id).map(|report| TreeNode {
                employee: report,
                parent: Some(index),
                children: 0..0,
                level,
            }));
            nodes[index].children = start..nodes.len();
        }
        index += 1;
    }

    Some(VisibleTree { nodes })
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn id(n: u32) -> EmployeeId {
        EmployeeId(n)
    }

    fn scenario() -> Directory {
        Directory::new(vec![
            Employee::new(1, "CEO"),
            Employee::new(2, "A").reporting_to(id(1)),
            Employee::new(3, "B").reporting_to(id(1)),
            Employee::new(4, "C").reporting_to(id(2)),
        ])
        .unwrap()
    }

    fn child_ids(tree: &VisibleTree<'_>, index: usize) -> Vec<u32> {
        tree.children(index).iter().map(|n| n.id().0).collect()
    }

    #[test]
    fn expanding_the_root_shows_its_reports_only() {
        let dir = scenario();
        let expanded: ExpandedSet = [id(1)].into_iter().collect();
        let tree = build(&dir, RootAnchor::Company, &expanded).unwrap();

        assert_eq!(tree.root().id(), id(1));
        assert_eq!(child_ids(&tree, 0), [2, 3]);
        let a = tree.find(id(2)).unwrap();
        assert!(tree.children(a).is_empty());
        assert!(tree.node(a).unwrap().has_hidden_reports());
        assert!(!tree.contains(id(4)));
    }

    #[test]
    fn expanding_a_child_materializes_its_reports() {
        let dir = scenario();
        let mut expanded: ExpandedSet = [id(1)].into_iter().collect();
        expanded.toggle(id(2));
        let tree = build(&dir, RootAnchor::Company, &expanded).unwrap();

        let a = tree.find(id(2)).unwrap();
        assert_eq!(child_ids(&tree, a), [4]);
        let c = tree.find(id(4)).unwrap();
        assert_eq!(tree.node(c).unwrap().level, 2);
        assert_eq!(tree.node(c).unwrap().parent, Some(a));
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn expanded_descendant_under_collapsed_parent_stays_hidden() {
        let dir = scenario();
        let expanded: ExpandedSet = [id(2)].into_iter().collect();
        let tree = build(&dir, RootAnchor::Company, &expanded).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn reanchoring_starts_at_level_zero() {
        let dir = scenario();
        let expanded: ExpandedSet = [id(2)].into_iter().collect();
        let tree = build(&dir, RootAnchor::Employee(id(2)), &expanded).unwrap();
        assert_eq!(tree.root().id(), id(2));
        assert_eq!(tree.root().level, 0);
        assert_eq!(child_ids(&tree, 0), [4]);
        assert_eq!(tree.node(1).unwrap().level, 1);
    }

    #[test]
    fn unresolvable_roots_build_nothing() {
        let dir = scenario();
        let expanded = ExpandedSet::new();
        assert!(build(&dir, RootAnchor::Employee(id(77)), &expanded).is_none());

        let empty = Directory::default();
        assert!(build(&empty, RootAnchor::Company, &expanded).is_none());
    }

    #[test]
    fn fully_expanded_tree_contains_every_record() {
        let dir = scenario();
        let all: ExpandedSet = dir.iter().map(|e| e.id).collect();
        let tree = build(&dir, RootAnchor::Company, &all).unwrap();
        assert_eq!(tree.len(), dir.len());
        let levels: Vec<u32> = tree.iter().map(|n| n.level).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
        for node in &tree {
            if !node.is_leaf() {
                assert!(all.contains(node.id()));
            }
        }
    }
}
