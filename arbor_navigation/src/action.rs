// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation messages and transition results.

use arbor_directory::EmployeeId;
use arbor_tree::DepthLimit;

use crate::NavState;

/// A navigation request, dispatched through [`NavState::reduce`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavAction {
    /// Expand or collapse one node.
    ToggleExpand(EmployeeId),
    /// Accordion select: open the path to this node and close everything else.
    Select(EmployeeId),
    /// Re-root the chart at this employee (search results, "jump to").
    JumpTo(EmployeeId),
    /// Open a fixed number of levels below `root`.
    ExpandToDepth {
        /// Where counting starts.
        root: EmployeeId,
        /// How many levels to open.
        depth: DepthLimit,
    },
    /// Re-root at the current root's manager, if any.
    GoUp,
    /// Return to the company root.
    Reset,
}

/// Side effect requested by a transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavEffect {
    /// Nothing beyond rebuilding the tree.
    #[default]
    None,
    /// The root changed; the viewport should bring the new root card into view.
    Recenter,
}

/// Result of [`NavState::reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The state after the action.
    pub state: NavState,
    /// What the embedder should do besides rebuilding.
    pub effect: NavEffect,
}

impl Transition {
    pub(crate) fn quiet(state: NavState) -> Self {
        Self {
            state,
            effect: NavEffect::None,
        }
    }
}
