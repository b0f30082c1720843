// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directory snapshot: validation and the parent → children index.

use alloc::{vec, vec::Vec};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{DirectoryError, Employee, EmployeeId};

/// A validated, read-only employee directory.
///
/// Records keep their input order ("directory order"), which is also the order
/// of every manager's reports. Slots are positions in that order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Employee>"))]
pub struct Directory {
    employees: Vec<Employee>,
    slots: HashMap<EmployeeId, usize>,
    parents: Vec<Option<usize>>,
    /// `child_slots[child_offsets[s]..child_offsets[s + 1]]` are the reports of slot `s`.
    child_offsets: Vec<usize>,
    child_slots: Vec<usize>,
    root: Option<usize>,
}

impl Directory {
    /// Validates `records` and builds the lookup indices.
    ///
    /// The `direct_reports` field of every record is replaced with the number
    /// of records that report to it.
    pub fn new(mut records: Vec<Employee>) -> Result<Self, DirectoryError> {
        let len = records.len();
        let mut slots = HashMap::with_capacity(len);
        for (slot, e) in records.iter().enumerate() {
            if slots.insert(e.id, slot).is_some() {
                return Err(DirectoryError::DuplicateId(e.id));
            }
        }

        let mut root: Option<usize> = None;
        let mut parents = Vec::with_capacity(len);
        let mut counts = vec![0_usize; len];
        for (slot, e) in records.iter().enumerate() {
            match e.reports_to {
                None => {
                    if let Some(first) = root {
                        return Err(DirectoryError::MultipleRoots {
                            first: records[first].id,
                            second: e.id,
                        });
                    }
                    root = Some(slot);
                    parents.push(None);
                }
                Some(manager) => {
                    let parent =
                        *slots
                            .get(&manager)
                            .ok_or(DirectoryError::DanglingParent {
                                employee: e.id,
                                reports_to: manager,
                            })?;
                    counts[parent] += 1;
                    parents.push(Some(parent));
                }
            }
        }
        if len > 0 && root.is_none() {
            return Err(DirectoryError::NoRoot);
        }

        // Counting sort into flat arrays keeps reports in directory order.
        let mut child_offsets = Vec::with_capacity(len + 1);
        let mut running = 0;
        child_offsets.push(0);
        for &count in &counts {
            running += count;
            child_offsets.push(running);
        }
        let mut cursor = child_offsets.clone();
        let mut child_slots = vec![0_usize; running];
        for (slot, parent) in parents.iter().enumerate() {
            if let Some(p) = *parent {
                child_slots[cursor[p]] = slot;
                cursor[p] += 1;
            }
        }

        // Every record must hang off the root; anything else sits on a loop.
        if let Some(root) = root {
            let mut reached = vec![false; len];
            let mut stack = vec![root];
            reached[root] = true;
            while let Some(slot) = stack.pop() {
                for &child in &child_slots[child_offsets[slot]..child_offsets[slot + 1]] {
                    if !reached[child] {
                        reached[child] = true;
                        stack.push(child);
                    }
                }
            }
            if let Some(slot) = reached.iter().position(|r| !r) {
                return Err(DirectoryError::Cycle {
                    employee: records[slot].id,
                });
            }
        }

        for (e, count) in records.iter_mut().zip(counts) {
            e.direct_reports = u32::try_from(count).unwrap_or(u32::MAX);
        }

        Ok(Self {
            employees: records,
            slots,
            parents,
            child_offsets,
            child_slots,
            root,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` if the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// All records in directory order.
    pub fn iter(&self) -> core::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.slot(id).map(|s| &self.employees[s])
    }

    /// Returns `true` if `id` is in the directory.
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.slots.contains_key(&id)
    }

    /// The head of the company, or `None` for an empty directory.
    pub fn root(&self) -> Option<&Employee> {
        self.root.map(|s| &self.employees[s])
    }

    /// Direct reports of `id` in directory order. Empty for unknown ids.
    pub fn reports(&self, id: EmployeeId) -> impl ExactSizeIterator<Item = &Employee> + '_ {
        self.child_range(id)
            .iter()
            .map(move |&s| &self.employees[s])
    }

    /// Number of direct reports of `id` (0 for unknown ids).
    pub fn direct_reports(&self, id: EmployeeId) -> usize {
        self.child_range(id).len()
    }

    /// Returns `true` if `id` has at least one direct report.
    pub fn has_reports(&self, id: EmployeeId) -> bool {
        !self.child_range(id).is_empty()
    }

    /// Manager of `id`, if any.
    pub fn parent_of(&self, id: EmployeeId) -> Option<EmployeeId> {
        let slot = self.slot(id)?;
        self.parents[slot].map(|p| self.employees[p].id)
    }

    /// Walks up the chain of command from the manager of `id` to the root.
    ///
    /// `id` itself is not yielded. Unknown ids yield nothing.
    pub fn ancestors(&self, id: EmployeeId) -> Ancestors<'_> {
        Ancestors {
            directory: self,
            next: self.slot(id).and_then(|s| self.parents[s]),
        }
    }

    /// The path from the root down to `id`, both inclusive. Empty for unknown ids.
    pub fn chain_of_command(&self, id: EmployeeId) -> SmallVec<[EmployeeId; 8]> {
        let mut path = SmallVec::new();
        if !self.contains(id) {
            return path;
        }
        path.push(id);
        path.extend(self.ancestors(id).map(|e| e.id));
        path.reverse();
        path
    }

    /// Number of records below `id` in the hierarchy (excluding `id`).
    pub fn descendant_count(&self, id: EmployeeId) -> usize {
        let Some(start) = self.slot(id) else {
            return 0;
        };
        let mut count = 0;
        let mut stack = vec![start];
        while let Some(slot) = stack.pop() {
            let children = &self.child_slots[self.child_offsets[slot]..self.child_offsets[slot + 1]];
            count += children.len();
            stack.extend_from_slice(children);
        }
        count
    }

    fn slot(&self, id: EmployeeId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    fn child_range(&self, id: EmployeeId) -> &[usize] {
        match self.slot(id) {
            Some(s) => &self.child_slots[self.child_offsets[s]..self.child_offsets[s + 1]],
            None => &[],
        }
    }
}

impl TryFrom<Vec<Employee>> for Directory {
    type Error = DirectoryError;

    fn try_from(records: Vec<Employee>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Directory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.employees.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Employee;
    type IntoIter = core::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the managers above an employee, nearest first.
///
/// Returned by [`Directory::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    directory: &'a Directory,
    next: Option<usize>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.next?;
        self.next = self.directory.parents[slot];
        Some(&self.directory.employees[slot])
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn id(n: u32) -> EmployeeId {
        EmployeeId(n)
    }

    /// 1 ─┬─ 2 ── 4
    ///    └─ 3
    fn small() -> Directory {
        Directory::new(vec![
            Employee::new(1, "CEO"),
            Employee::new(2, "A").reporting_to(id(1)),
            Employee::new(3, "B").reporting_to(id(1)),
            Employee::new(4, "C").reporting_to(id(2)),
        ])
        .unwrap()
    }

    #[test]
    fn indexes_reports_in_directory_order() {
        let dir = small();
        let ids: Vec<_> = dir.reports(id(1)).map(|e| e.id).collect();
        assert_eq!(ids, vec![id(2), id(3)]);
        assert_eq!(dir.direct_reports(id(2)), 1);
        assert!(!dir.has_reports(id(3)));
        assert_eq!(dir.reports(id(99)).len(), 0);
    }

    #[test]
    fn direct_reports_field_is_derived() {
        let dir = Directory::new(vec![
            Employee {
                direct_reports: 12,
                ..Employee::new(1, "CEO")
            },
            Employee::new(2, "A").reporting_to(id(1)),
        ])
        .unwrap();
        assert_eq!(dir.get(id(1)).unwrap().direct_reports, 1);
        assert_eq!(dir.get(id(2)).unwrap().direct_reports, 0);
    }

    #[test]
    fn children_arrive_before_their_manager() {
        let dir = Directory::new(vec![
            Employee::new(4, "C").reporting_to(id(2)),
            Employee::new(2, "A").reporting_to(id(1)),
            Employee::new(1, "CEO"),
        ])
        .unwrap();
        assert_eq!(dir.root().unwrap().id, id(1));
        assert_eq!(dir.reports(id(2)).next().unwrap().id, id(4));
    }

    #[test]
    fn ancestors_walk_to_the_root() {
        let dir = small();
        let up: Vec<_> = dir.ancestors(id(4)).map(|e| e.id).collect();
        assert_eq!(up, vec![id(2), id(1)]);
        assert_eq!(dir.ancestors(id(1)).count(), 0);
        assert_eq!(dir.ancestors(id(42)).count(), 0);
        assert_eq!(dir.parent_of(id(4)), Some(id(2)));
        assert_eq!(dir.parent_of(id(1)), None);
    }

    #[test]
    fn chain_of_command_is_root_first() {
        let dir = small();
        assert_eq!(dir.chain_of_command(id(4)).as_slice(), &[id(1), id(2), id(4)]);
        assert_eq!(dir.chain_of_command(id(1)).as_slice(), &[id(1)]);
        assert!(dir.chain_of_command(id(8)).is_empty());
    }

    #[test]
    fn descendant_count_covers_whole_subtree() {
        let dir = small();
        assert_eq!(dir.descendant_count(id(1)), 3);
        assert_eq!(dir.descendant_count(id(2)), 1);
        assert_eq!(dir.descendant_count(id(3)), 0);
    }

    #[test]
    fn empty_directory_has_no_root() {
        let dir = Directory::new(Vec::new()).unwrap();
        assert!(dir.is_empty());
        assert!(dir.root().is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Directory::new(vec![Employee::new(1, "A"), Employee::new(1, "B")]).unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateId(id(1)));
    }

    #[test]
    fn rejects_multiple_roots() {
        let err = Directory::new(vec![
            Employee::new(1, "A"),
            Employee::new(2, "B").reporting_to(id(1)),
            Employee::new(3, "C"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DirectoryError::MultipleRoots {
                first: id(1),
                second: id(3)
            }
        );
    }

    #[test]
    fn rejects_dangling_manager() {
        let err = Directory::new(vec![
            Employee::new(1, "A"),
            Employee::new(2, "B").reporting_to(id(5)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DirectoryError::DanglingParent {
                employee: id(2),
                reports_to: id(5)
            }
        );
    }

    #[test]
    fn rejects_cycles_and_missing_root() {
        let err = Directory::new(vec![
            Employee::new(1, "A"),
            Employee::new(2, "B").reporting_to(id(3)),
            Employee::new(3, "C").reporting_to(id(2)),
        ])
        .unwrap_err();
        assert_eq!(err, DirectoryError::Cycle { employee: id(2) });

        let err = Directory::new(vec![
            Employee::new(1, "A"),
            Employee::new(2, "B").reporting_to(id(2)),
        ])
        .unwrap_err();
        assert_eq!(err, DirectoryError::Cycle { employee: id(2) });

        let err = Directory::new(vec![
            Employee::new(1, "A").reporting_to(id(2)),
            Employee::new(2, "B").reporting_to(id(1)),
        ])
        .unwrap_err();
        assert_eq!(err, DirectoryError::NoRoot);
    }
}
