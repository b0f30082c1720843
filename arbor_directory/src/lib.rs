// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Directory: validated, indexed snapshots of an employee directory.
//!
//! A [`Directory`] is built once per snapshot from a flat list of [`Employee`]
//! records linked by their `reports_to` field. Construction validates that the
//! records form a single rooted tree and precomputes:
//!
//! - an id → slot map, so lookups by [`EmployeeId`] are O(1),
//! - a parent → children index stored as flat arrays in directory order,
//! - parent slots, so walking up the chain of command never searches.
//!
//! Everything downstream (visible-tree building, navigation, layout) treats a
//! `Directory` as read-only and relies on these guarantees instead of
//! re-validating.
//!
//! ## Example
//!
//! ```rust
//! use arbor_directory::{Directory, Employee, EmployeeId};
//!
//! let ceo = EmployeeId(1);
//! let dir = Directory::new(vec![
//!     Employee::new(1, "Ada").with_title("CEO"),
//!     Employee::new(2, "Brook").reporting_to(ceo),
//!     Employee::new(3, "Cyd").reporting_to(ceo),
//! ])
//! .unwrap();
//!
//! assert_eq!(dir.root().map(|e| e.id), Some(ceo));
//! assert_eq!(dir.direct_reports(ceo), 2);
//! let names: Vec<_> = dir.reports(ceo).map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["Brook", "Cyd"]);
//! ```
//!
//! ## Malformed input
//!
//! Directories that are not a single acyclic tree are rejected by
//! [`Directory::new`] with a [`DirectoryError`]: duplicate ids, zero or several
//! roots, references to missing managers, and reporting cycles. An empty record
//! list is accepted and produces an empty directory with no root.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Employee`] and
//!   [`EmployeeId`] using the camel-case field names common in directory
//!   exports, and deserializes [`Directory`] through the same validation as
//!   [`Directory::new`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod directory;
mod employee;
mod error;

pub use directory::{Ancestors, Directory};
pub use employee::{CardKind, Employee, EmployeeId};
pub use error::DirectoryError;
