// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Chart: an interactive org chart controller.
//!
//! [`OrgChart`] wires the Arbor crates into one object a UI can drive:
//!
//! - [`arbor_directory`] validates and indexes the employee records.
//! - [`arbor_navigation`] decides the displayed root and which managers are
//!   expanded.
//! - [`arbor_tree`] materializes the visible part of the hierarchy.
//! - [`arbor_layout`] positions it.
//! - [`arbor_viewport`] pans and zooms the result.
//!
//! Data flows one way. A structural action updates the navigation state, then
//! the visible tree and layout are rebuilt from scratch. Pointer and wheel
//! input update only the viewport transform and never relayout.
//!
//! The chart does not draw anything. [`OrgChart::scene`] returns the cards,
//! connectors, transform, and [`Theme`] a renderer needs, and
//! [`OrgChart::take_events`] drains the [`ChartEvent`]s that an embedding
//! application forwards to its own callbacks.
//!
//! ```rust
//! use arbor_chart::{ChartConfig, ChartEvent, ChartView, OrgChart};
//! use arbor_directory::{Employee, EmployeeId};
//!
//! let mut chart = OrgChart::from_records(
//!     vec![
//!         Employee::new(1, "Ada").with_title("CEO"),
//!         Employee::new(2, "Grace").reporting_to(EmployeeId(1)),
//!         Employee::new(3, "Linus").reporting_to(EmployeeId(2)),
//!     ],
//!     ChartConfig::default(),
//! )
//! .unwrap();
//!
//! chart.toggle_expand(EmployeeId(2));
//! let ChartView::Ready(layout) = chart.view() else {
//!     unreachable!()
//! };
//! assert_eq!(layout.len(), 3);
//! assert_eq!(
//!     chart.take_events(),
//!     [ChartEvent::NodeExpanded { id: EmployeeId(2), expanded: true }]
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float support for `kurbo` via `libm`.
//! - `tracing`: emits `tracing` events for dispatch, relayout, pan, and zoom.
//! - `serde`: derives `Serialize`/`Deserialize` for [`ChartConfig`] and the
//!   records and configurations of the underlying crates.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chart;
mod config;
mod error;
mod event;
mod scene;

pub use chart::{ChartView, OrgChart};
pub use config::{ChartConfig, Theme};
pub use error::ChartError;
pub use event::ChartEvent;
pub use scene::{Card, CardFlags, Scene};
