// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Layout: a tidy tree layout for org charts.
//!
//! [`layout`] assigns a world-space position to every node of an
//! [`arbor_tree::VisibleTree`]:
//!
//! - Each level occupies a fixed vertical band of
//!   `card_height + vertical_spacing`.
//! - Sibling subtrees are packed left to right with no overlap. Cards sharing a
//!   parent are `sibling_separation` horizontal units apart at minimum; cards
//!   with different parents use the wider `cousin_separation`.
//! - Each parent is centered over its first and last child.
//! - The result is translated so the leftmost card center is at `x = 0`.
//!
//! The layout is collision-free by construction, deterministic, and keeps no
//! state between calls. It never looks at viewport pan or zoom; those are
//! applied afterwards as a display transform.
//!
//! ## Minimal example
//!
//! ```rust
//! use arbor_directory::{Directory, Employee, EmployeeId};
//! use arbor_layout::{LayoutConfig, layout};
//! use arbor_tree::{DepthLimit, ExpandedSet, RootAnchor, build};
//!
//! let dir = Directory::new(vec![
//!     Employee::new(1, "CEO"),
//!     Employee::new(2, "A").reporting_to(EmployeeId(1)),
//!     Employee::new(3, "B").reporting_to(EmployeeId(1)),
//! ])
//! .unwrap();
//! let expanded: ExpandedSet = [EmployeeId(1)].into_iter().collect();
//! let tree = build(&dir, RootAnchor::Company, &expanded).unwrap();
//!
//! let config = LayoutConfig::default();
//! let out = layout(&tree, DepthLimit::All, &config);
//!
//! let ceo = out.find(EmployeeId(1)).unwrap().position;
//! let a = out.find(EmployeeId(2)).unwrap().position;
//! let b = out.find(EmployeeId(3)).unwrap().position;
//! assert_eq!(a.x, 0.0);
//! assert_eq!(ceo.x, (a.x + b.x) / 2.0);
//! assert_eq!(a.y, config.level_height());
//! assert_eq!(out.connectors().count(), 2);
//! ```
//!
//! ## Renderer contract
//!
//! [`Layout::connectors`] yields one elbow path per parent → child edge:
//! down from the parent's bottom-center to the midpoint between the levels,
//! across, then down into the child's top-center. [`Layout::card_rect`] gives
//! the card footprint for each node, and [`Layout::node_at`] hit tests a
//! world-space point against those footprints.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float support for `kurbo` via `libm`.
//! - `tracing`: emits a `debug` span and event for each layout pass.
//! - `serde`: derives `Serialize`/`Deserialize` for [`LayoutConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod layout;
mod tidy;

pub use config::{ConfigError, LayoutConfig};
pub use layout::{Connector, Layout, PositionedNode, elbow};
pub use tidy::layout;
