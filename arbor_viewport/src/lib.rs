// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Viewport: pan and cursor-anchored zoom for a chart canvas.
//!
//! A [`Viewport`] holds a zoom factor, a pan offset, and an optional drag
//! anchor. It maps world coordinates (as produced by a layout pass) to screen
//! pixels through a single `translate * scale` [`kurbo::Affine`], and never
//! needs the layout to be recomputed.
//!
//! - Dragging: [`Viewport::begin_drag`] records the grab offset,
//!   [`Viewport::drag_to`] follows the pointer, and either
//!   [`Viewport::end_drag`] or [`Viewport::pointer_leave`] releases it.
//! - Wheel zoom: [`Viewport::zoom_at`] steps the zoom while keeping the world
//!   point under the cursor in place.
//! - Button zoom: [`Viewport::zoom_in`] and [`Viewport::zoom_out`] step the zoom
//!   around the transform origin.
//!
//! ```rust
//! use arbor_viewport::{Viewport, ZoomConfig, ZoomDirection};
//! use kurbo::Point;
//!
//! let mut viewport = Viewport::new(ZoomConfig::default());
//! let cursor = Point::new(320.0, 240.0);
//! let grabbed = viewport.screen_to_world(cursor);
//!
//! let dir = ZoomDirection::from_wheel_delta(-1.0).unwrap();
//! assert!(viewport.zoom_at(cursor, dir));
//!
//! let still = viewport.screen_to_world(cursor);
//! assert!((still.x - grabbed.x).abs() < 1e-9);
//! assert!((still.y - grabbed.y).abs() < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float support for `kurbo` via `libm`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`ZoomConfig`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod viewport;

pub use config::{ZoomConfig, ZoomConfigError};
pub use viewport::{Viewport, ZoomDirection};
