// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state and its transitions.

use alloc::vec;

use arbor_directory::{Directory, Employee, EmployeeId};
use arbor_tree::{DepthLimit, ExpandedSet, RootAnchor, VisibleTree, build, resolve_root};

use crate::{NavAction, NavEffect, Transition};

/// What the org chart is currently showing: a root anchor and an expansion set.
///
/// `NavState` is an immutable value. Every transition borrows the current
/// state and the directory and returns a new state, leaving `self` untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    root: RootAnchor,
    expanded: ExpandedSet,
}

impl NavState {
    /// Creates a state from its parts.
    pub fn new(root: RootAnchor, expanded: ExpandedSet) -> Self {
        Self { root, expanded }
    }

    /// The landing state: anchored at the company root with the root expanded.
    pub fn company(directory: &Directory) -> Self {
        let expanded = directory
            .root()
            .filter(|e| directory.has_reports(e.id))
            .map(|e| e.id)
            .into_iter()
            .collect();
        Self::new(RootAnchor::Company, expanded)
    }

    /// Current root anchor.
    pub fn root_anchor(&self) -> RootAnchor {
        self.root
    }

    /// Current expansion set.
    pub fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    /// Returns `true` if `id`'s reports are materialized.
    pub fn is_expanded(&self, id: EmployeeId) -> bool {
        self.expanded.contains(id)
    }

    /// Resolves the root anchor against `directory`.
    pub fn root<'d>(&self, directory: &'d Directory) -> Option<&'d Employee> {
        resolve_root(directory, self.root)
    }

    /// Builds the visible tree for this state.
    pub fn visible_tree<'d>(&self, directory: &'d Directory) -> Option<VisibleTree<'d>> {
        build(directory, self.root, &self.expanded)
    }

    /// Flips whether `id` is expanded. Nothing else changes.
    #[must_use]
    pub fn toggle_expand(&self, id: EmployeeId) -> Self {
        let mut expanded = self.expanded.clone();
        expanded.toggle(id);
        Self::new(self.root, expanded)
    }

    /// Accordion select.
    ///
    /// The new expansion set holds every manager above `id`, plus `id` itself
    /// when it has reports. Branches off that path collapse. Unknown ids leave
    /// the state unchanged.
    #[must_use]
    pub fn select(&self, directory: &Directory, id: EmployeeId) -> Self {
        if !directory.contains(id) {
            return self.clone();
        }
        let mut expanded: ExpandedSet = directory.ancestors(id).map(|e| e.id).collect();
        if directory.has_reports(id) {
            expanded.insert(id);
        }
        Self::new(self.root, expanded)
    }

    /// Re-roots the chart at `id`, expanded when it has reports.
    ///
    /// `id` is not checked against the directory; an unknown id produces a
    /// state whose root does not resolve, which callers show as not found.
    #[must_use]
    pub fn jump_to(&self, directory: &Directory, id: EmployeeId) -> Self {
        let mut expanded = ExpandedSet::new();
        if directory.has_reports(id) {
            expanded.insert(id);
        }
        Self::new(RootAnchor::Employee(id), expanded)
    }

    /// Replaces the expansion set so that `depth` levels below `root` are open.
    ///
    /// Every node with reports whose distance from `root` is below `depth` is
    /// expanded; everything deeper stays collapsed. The root anchor is kept.
    #[must_use]
    pub fn expand_to_depth(&self, directory: &Directory, root: EmployeeId, depth: DepthLimit) -> Self {
        let mut expanded = ExpandedSet::new();
        if directory.contains(root) {
            let mut stack = vec![(root, 0_u32)];
            while let Some((id, level)) = stack.pop() {
                if depth.allows_children(level) && directory.has_reports(id) {
                    expanded.insert(id);
                    stack.extend(directory.reports(id).map(|e| (e.id, level + 1)));
                }
            }
        }
        Self::new(self.root, expanded)
    }

    /// Re-roots at the manager of the current root.
    ///
    /// Returns `None` when the current root has no manager or does not resolve.
    pub fn go_up(&self, directory: &Directory) -> Option<Self> {
        let parent = self.root(directory)?.reports_to?;
        Some(self.jump_to(directory, parent))
    }

    /// Back to [`NavState::company`].
    #[must_use]
    pub fn reset(&self, directory: &Directory) -> Self {
        Self::company(directory)
    }

    /// Number of expanded levels below the current root.
    ///
    /// A branch stops counting at the first node that is collapsed or has no
    /// reports; the result is the deepest branch, at least 1 when the root
    /// resolves and 0 when it does not.
    pub fn current_depth(&self, directory: &Directory) -> u32 {
        let Some(root) = self.root(directory) else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(root.id, 0_u32)];
        while let Some((id, level)) = stack.pop() {
            if self.expanded.contains(id) && directory.has_reports(id) {
                deepest = deepest.max(level + 1);
                stack.extend(directory.reports(id).map(|e| (e.id, level + 1)));
            }
        }
        deepest.max(1)
    }

    /// Applies `action` and reports any side effect the embedder should perform.
    ///
    /// This is the single entry point for navigation; the per-transition
    /// methods are exposed for callers that want them directly.
    pub fn reduce(&self, directory: &Directory, action: NavAction) -> Transition {
        match action {
            NavAction::ToggleExpand(id) => Transition::quiet(self.toggle_expand(id)),
            NavAction::Select(id) => Transition::quiet(self.select(directory, id)),
            NavAction::JumpTo(id) => Transition {
                state: self.jump_to(directory, id),
                effect: NavEffect::Recenter,
            },
            NavAction::ExpandToDepth { root, depth } => {
                Transition::quiet(self.expand_to_depth(directory, root, depth))
            }
            NavAction::GoUp => match self.go_up(directory) {
                Some(state) => Transition {
                    state,
                    effect: NavEffect::Recenter,
                },
                None => Transition::quiet(self.clone()),
            },
            NavAction::Reset => Transition {
                state: self.reset(directory),
                effect: NavEffect::Recenter,
            },
        }
    }
}
