// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Navigation: a pure state machine for moving around an org chart.
//!
//! The state is a single immutable [`NavState`] value: a
//! [`RootAnchor`](arbor_tree::RootAnchor) naming the employee at the top of the
//! chart and an [`ExpandedSet`](arbor_tree::ExpandedSet) naming whose reports
//! are shown. Transitions are pure functions of the previous state and the
//! [`Directory`](arbor_directory::Directory); none of them touch layout or
//! viewport state.
//!
//! | Action | Effect on the state |
//! |---|---|
//! | [`NavAction::ToggleExpand`] | flips one id in the expansion set |
//! | [`NavAction::Select`] | accordion: expands exactly the managers above the node, plus the node if it has reports |
//! | [`NavAction::JumpTo`] | re-roots at the node, expanded iff it has reports; asks for a recenter |
//! | [`NavAction::ExpandToDepth`] | opens every level above a cutoff, replacing the expansion set |
//! | [`NavAction::GoUp`] | jumps to the current root's manager; no-op at the top |
//! | [`NavAction::Reset`] | returns to the company root with the root expanded |
//!
//! [`NavState::current_depth`] derives how many levels are open, for a depth
//! selector.
//!
//! ```rust
//! use arbor_directory::{Directory, Employee, EmployeeId};
//! use arbor_navigation::{NavAction, NavEffect, NavState};
//! use arbor_tree::RootAnchor;
//!
//! let dir = Directory::new(vec![
//!     Employee::new(1, "CEO"),
//!     Employee::new(2, "A").reporting_to(EmployeeId(1)),
//!     Employee::new(3, "B").reporting_to(EmployeeId(2)),
//! ])
//! .unwrap();
//!
//! let state = NavState::company(&dir);
//! let next = state.reduce(&dir, NavAction::JumpTo(EmployeeId(3)));
//! assert_eq!(next.state.root_anchor(), RootAnchor::Employee(EmployeeId(3)));
//! assert!(next.state.expanded().is_empty());
//! assert_eq!(next.effect, NavEffect::Recenter);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod state;

pub use action::{NavAction, NavEffect, Transition};
pub use state::NavState;
