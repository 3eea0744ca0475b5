//! Ordered backend
//!
//! B-tree map keyed by phone number: O(log n) point operations and
//! deterministic phone-ordered iteration. Group and surname queries scan.

use std::collections::BTreeMap;
use std::mem::size_of;

use super::{memory, scan_group_sorted, scan_groups_by_surname, StudentStore};
use crate::record::Student;

#[derive(Debug, Default)]
pub struct OrderedStore {
    data: BTreeMap<String, Student>,
}

impl OrderedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(students: Vec<Student>) -> Self {
        let mut store = Self::new();
        store.replace_all(students);
        store
    }
}

impl StudentStore for OrderedStore {
    fn backend_name(&self) -> &'static str {
        "Ordered (BTreeMap)"
    }

    fn replace_all(&mut self, students: Vec<Student>) {
        self.data = students
            .into_iter()
            .map(|student| (student.phone_number.clone(), student))
            .collect();
    }

    fn add(&mut self, student: Student) {
        self.data.insert(student.phone_number.clone(), student);
    }

    fn remove_by_phone(&mut self, phone: &str) -> bool {
        self.data.remove(phone).is_some()
    }

    fn change_group_by_phone(&mut self, phone: &str, new_group: &str) -> bool {
        match self.data.get_mut(phone) {
            Some(student) => {
                student.group = new_group.to_string();
                true
            }
            None => false,
        }
    }

    fn get_students_by_group_sorted(&self, group: &str) -> Vec<Student> {
        scan_group_sorted(self.data.values(), group)
    }

    fn get_groups_by_surname(&self, surname: &str) -> Vec<String> {
        scan_groups_by_surname(self.data.values(), surname)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    /// Records in ascending phone order
    fn to_vec(&self) -> Vec<Student> {
        self.data.values().cloned().collect()
    }

    fn estimate_memory_usage(&self) -> usize {
        size_of::<Self>()
            + self
                .data
                .iter()
                .map(|(key, student)| {
                    memory::keyed_entry_bytes(key, student, memory::TREE_NODE_OVERHEAD)
                })
                .sum::<usize>()
    }
}
