// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs that select what is visible: the root anchor, the expansion set, and depth limits.

use alloc::collections::BTreeSet;
use arbor_directory::EmployeeId;

/// Which employee sits at the top of the displayed tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootAnchor {
    /// The head of the company (the record without a manager).
    #[default]
    Company,
    /// A specific employee; the tree is re-rooted there.
    Employee(EmployeeId),
}

/// Ids whose direct reports are materialized in the visible tree.
///
/// Iteration is in ascending id order, so two sets with the same members
/// always compare and print the same way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExpandedSet(BTreeSet<EmployeeId>);

impl ExpandedSet {
    /// An empty set: everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is expanded.
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.0.contains(&id)
    }

    /// Marks `id` as expanded. Returns `true` if it was not already.
    pub fn insert(&mut self, id: EmployeeId) -> bool {
        self.0.insert(id)
    }

    /// Marks `id` as collapsed. Returns `true` if it was expanded.
    pub fn remove(&mut self, id: EmployeeId) -> bool {
        self.0.remove(&id)
    }

    /// Flips membership of `id` and returns the new membership.
    pub fn toggle(&mut self, id: EmployeeId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    /// Number of expanded ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expanded ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.0.iter().copied()
    }

    /// Collapses everything.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<EmployeeId> for ExpandedSet {
    fn from_iter<I: IntoIterator<Item = EmployeeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<EmployeeId> for ExpandedSet {
    fn extend<I: IntoIterator<Item = EmployeeId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// How many levels below the root to show.
///
/// `Levels(n)` counts edges: a node at level `L` may show its children only
/// when `L < n`, so `Levels(0)` is the root alone and `Levels(1)` is the root
/// plus its direct reports.
///
/// Derived depth counts (such as a navigation state's current depth) never
/// report less than 1 for a resolved root, so `Levels(0)` and `Levels(1)` read
/// back the same; a depth selector should keep the requested limit itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepthLimit {
    /// At most this many levels below the root.
    Levels(u32),
    /// No limit.
    #[default]
    All,
}

impl DepthLimit {
    /// Returns `true` if a node at `level` may have its children shown.
    pub fn allows_children(self, level: u32) -> bool {
        match self {
            Self::All => true,
            Self::Levels(n) => level < n,
        }
    }
}
