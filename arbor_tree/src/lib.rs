// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Tree: the visible slice of an org chart.
//!
//! A full company directory is usually far larger than what a person wants to
//! look at. This crate turns a [`Directory`](arbor_directory::Directory), a
//! [`RootAnchor`], and an [`ExpandedSet`] into a [`VisibleTree`] that contains
//! only the nodes that should currently be on screen:
//!
//! - the anchored root at level 0,
//! - and, for every node whose id is in the expansion set, all of its direct
//!   reports one level further down.
//!
//! Nodes that are not expanded are leaves of the visible tree even when they
//! have reports, which lets a renderer draw an expand affordance without
//! materializing the subtree. Work is proportional to the number of visible
//! nodes; collapsed branches are never descended into.
//!
//! ```rust
//! use arbor_directory::{Directory, Employee, EmployeeId};
//! use arbor_tree::{ExpandedSet, RootAnchor, build};
//!
//! let dir = Directory::new(vec![
//!     Employee::new(1, "CEO"),
//!     Employee::new(2, "A").reporting_to(EmployeeId(1)),
//!     Employee::new(3, "B").reporting_to(EmployeeId(1)),
//!     Employee::new(4, "C").reporting_to(EmployeeId(2)),
//! ])
//! .unwrap();
//!
//! let expanded: ExpandedSet = [EmployeeId(1)].into_iter().collect();
//! let tree = build(&dir, RootAnchor::Company, &expanded).unwrap();
//! let top: Vec<_> = tree.children(0).iter().map(|n| n.id().0).collect();
//! assert_eq!(top, [2, 3]);
//! // `2` has a report but is collapsed, so it is a leaf here.
//! assert!(tree.children(1).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod state;
mod visible;

pub use state::{DepthLimit, ExpandedSet, RootAnchor};
pub use visible::{TreeNode, VisibleTree, build, resolve_root};
