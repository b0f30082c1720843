// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Employee records and identifiers.

use alloc::string::String;
use core::fmt;

/// Unique identifier of an employee record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EmployeeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// One record of the employee directory.
///
/// Records are owned by the caller and never mutated by Arbor, with one
/// exception: [`Directory::new`](crate::Directory::new) recomputes
/// [`Employee::direct_reports`] from the snapshot's reporting lines so the
/// count always agrees with the children that actually exist.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Employee {
    /// Unique id.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Job title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Department name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub department: String,
    /// Optional avatar reference (URL or asset key), interpreted by the renderer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar: Option<String>,
    /// Manager of this employee; `None` for the head of the company.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reports_to: Option<EmployeeId>,
    /// Number of direct reports in the snapshot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub direct_reports: u32,
    /// Marks a to-be-hired placeholder rather than a person.
    #[cfg_attr(feature = "serde", serde(default, rename = "isTBH"))]
    pub is_tbh: bool,
    /// Open requisitions represented by a placeholder.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tbh_count: u32,
}

impl Employee {
    /// Creates a record with the given id and name and no manager.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId(id),
            name: name.into(),
            title: String::new(),
            department: String::new(),
            avatar: None,
            reports_to: None,
            direct_reports: 0,
            is_tbh: false,
            tbh_count: 0,
        }
    }

    /// Sets the manager.
    #[must_use]
    pub fn reporting_to(mut self, manager: EmployeeId) -> Self {
        self.reports_to = Some(manager);
        self
    }

    /// Sets the job title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Turns this record into a to-be-hired placeholder for `open_reqs` positions.
    #[must_use]
    pub fn to_be_hired(mut self, open_reqs: u32) -> Self {
        self.is_tbh = true;
        self.tbh_count = open_reqs;
        self
    }

    /// Returns `true` if this is the head of the company.
    pub fn is_root(&self) -> bool {
        self.reports_to.is_none()
    }

    /// Which card variant a renderer should draw for this record.
    pub fn card_kind(&self) -> CardKind {
        if self.is_tbh {
            CardKind::Placeholder {
                open_reqs: self.tbh_count,
            }
        } else {
            CardKind::Standard
        }
    }
}

/// Card variant for a record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// A regular employee card.
    Standard,
    /// A to-be-hired placeholder.
    Placeholder {
        /// Number of open requisitions behind the placeholder.
        open_reqs: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let e = Employee::new(7, "Nico")
            .reporting_to(EmployeeId(3))
            .with_title("Engineer")
            .with_department("Platform")
            .with_avatar("nico.png");
        assert_eq!(e.id, EmployeeId(7));
        assert_eq!(e.reports_to, Some(EmployeeId(3)));
        assert_eq!(e.title, "Engineer");
        assert_eq!(e.department, "Platform");
        assert_eq!(e.avatar.as_deref(), Some("nico.png"));
        assert!(!e.is_root());
    }

    #[test]
    fn placeholder_card_kind_carries_open_reqs() {
        let e = Employee::new(9, "Open role").to_be_hired(3);
        assert_eq!(e.card_kind(), CardKind::Placeholder { open_reqs: 3 });
        assert_eq!(Employee::new(1, "Ada").card_kind(), CardKind::Standard);
    }

    #[test]
    fn id_display_is_prefixed() {
        assert_eq!(alloc::format!("{}", EmployeeId(42)), "#42");
    }
}
