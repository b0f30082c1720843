// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::EmployeeId;

/// Reasons a set of records cannot form a [`Directory`](crate::Directory).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    /// Two records share the same id.
    DuplicateId(EmployeeId),
    /// The records are non-empty but none of them is without a manager.
    NoRoot,
    /// More than one record has no manager.
    MultipleRoots {
        /// First root in directory order.
        first: EmployeeId,
        /// Second root in directory order.
        second: EmployeeId,
    },
    /// A record reports to an id that is not in the directory.
    DanglingParent {
        /// The record with the bad reference.
        employee: EmployeeId,
        /// The missing manager id.
        reports_to: EmployeeId,
    },
    /// A record is not reachable from the root, so its reporting line loops.
    Cycle {
        /// First unreachable record in directory order.
        employee: EmployeeId,
    },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate employee id {id}"),
            Self::NoRoot => f.write_str("no employee is without a manager"),
            Self::MultipleRoots { first, second } => {
                write!(f, "multiple roots: {first} and {second} have no manager")
            }
            Self::DanglingParent {
                employee,
                reports_to,
            } => write!(f, "{employee} reports to unknown employee {reports_to}"),
            Self::Cycle { employee } => {
                write!(f, "reporting line of {employee} never reaches the root")
            }
        }
    }
}

impl core::error::Error for DirectoryError {}
