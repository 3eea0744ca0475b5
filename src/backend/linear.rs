//! Linear backend
//!
//! A plain vector. Every lookup is a scan, including `add`, which scans for
//! an existing phone so the one-record-per-phone rule holds here too.

use std::collections::HashMap;
use std::mem::size_of;
use std::path::Path;

use super::{scan_group_sorted, scan_groups_by_surname, write_records, StudentStore};
use crate::record::Student;

#[derive(Debug, Default)]
pub struct LinearStore {
    data: Vec<Student>,
}

impl LinearStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(students: Vec<Student>) -> Self {
        let mut store = Self::new();
        store.replace_all(students);
        store
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.data.iter().position(|s| s.phone_number == phone)
    }
}

impl StudentStore for LinearStore {
    fn backend_name(&self) -> &'static str {
        "Linear (Vec)"
    }

    fn replace_all(&mut self, students: Vec<Student>) {
        self.data.clear();
        self.data.reserve(students.len());

        // Bulk path: dedup by phone in one pass, later records win in place
        let mut slots: HashMap<String, usize> = HashMap::with_capacity(students.len());
        for student in students {
            match slots.get(&student.phone_number) {
                Some(&slot) => self.data[slot] = student,
                None => {
                    slots.insert(student.phone_number.clone(), self.data.len());
                    self.data.push(student);
                }
            }
        }
    }

    fn add(&mut self, student: Student) {
        match self.position(&student.phone_number) {
            Some(slot) => self.data[slot] = student,
            None => self.data.push(student),
        }
    }

    fn remove_by_phone(&mut self, phone: &str) -> bool {
        match self.position(phone) {
            Some(slot) => {
                self.data.remove(slot);
                true
            }
            None => false,
        }
    }

    fn change_group_by_phone(&mut self, phone: &str, new_group: &str) -> bool {
        match self.data.iter_mut().find(|s| s.phone_number == phone) {
            Some(student) => {
                student.group = new_group.to_string();
                true
            }
            None => false,
        }
    }

    fn get_students_by_group_sorted(&self, group: &str) -> Vec<Student> {
        scan_group_sorted(self.data.iter(), group)
    }

    fn get_groups_by_surname(&self, surname: &str) -> Vec<String> {
        scan_groups_by_surname(self.data.iter(), surname)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn to_vec(&self) -> Vec<Student> {
        self.data.clone()
    }

    fn estimate_memory_usage(&self) -> usize {
        size_of::<Self>()
            + self.data.capacity() * size_of::<Student>()
            + self.data.iter().map(Student::heap_bytes).sum::<usize>()
    }

    fn save(&self, path: &Path) -> bool {
        write_records(path, &self.data)
    }
}
