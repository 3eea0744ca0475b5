//! Indexed backend
//!
//! Primary hash map keyed by phone plus two secondary multi-valued indices:
//!
//! ```text
//!   primary:    phone   ──► Student
//!   by_group:   group   ──► {phone, ...}
//!   by_surname: surname ──► {phone, ...}
//! ```
//!
//! ## Index Consistency
//! Between any two completed mutations, the phones under `by_group[g]` are
//! exactly the phones of stored records whose group is `g`, and likewise for
//! `by_surname`. Empty buckets are dropped.
//!
//! Every mutating entry point goes through the same two steps: `unindex` the
//! old record (if any), then `index` the new one. `change_group_by_phone` only
//! touches the group index, through the same `detach` / `attach` pair.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::mem::size_of;

use super::{memory, StudentStore};
use crate::record::{compare, Student};
use crate::sorting;

/// Secondary index: attribute value → phones of matching records
type Index = BTreeMap<String, BTreeSet<String>>;

#[derive(Debug, Default)]
pub struct IndexedStore {
    /// Source of truth
    primary: HashMap<String, Student>,

    /// group → phones
    by_group: Index,

    /// surname → phones
    by_surname: Index,
}

impl IndexedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(students: Vec<Student>) -> Self {
        let mut store = Self::new();
        store.replace_all(students);
        store
    }

    // =========================================================================
    // Index Views
    // =========================================================================

    /// Phones reachable through the group index for `group`
    pub fn phones_in_group(&self, group: &str) -> Vec<&str> {
        Self::bucket(&self.by_group, group)
    }

    /// Phones reachable through the surname index for `surname`
    pub fn phones_with_surname(&self, surname: &str) -> Vec<&str> {
        Self::bucket(&self.by_surname, surname)
    }

    /// Every group that currently has an index bucket
    pub fn indexed_groups(&self) -> Vec<&str> {
        self.by_group.keys().map(String::as_str).collect()
    }

    /// Every surname that currently has an index bucket
    pub fn indexed_surnames(&self) -> Vec<&str> {
        self.by_surname.keys().map(String::as_str).collect()
    }

    /// Check both indices against a full scan of the primary map
    pub fn verify_indices(&self) -> bool {
        let expected_groups = Self::build_index(&self.primary, |s| &s.group);
        let expected_surnames = Self::build_index(&self.primary, |s| &s.surname);

        let consistent = expected_groups == self.by_group && expected_surnames == self.by_surname;
        if !consistent {
            tracing::error!(records = self.primary.len(), "Secondary indices diverged from primary");
        }
        consistent
    }

    fn bucket<'a>(index: &'a Index, key: &str) -> Vec<&'a str> {
        index
            .get(key)
            .map(|phones| phones.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    // =========================================================================
    // Index Maintenance
    // =========================================================================

    /// Add `student` to both indices
    fn index(&mut self, student: &Student) {
        attach(&mut self.by_group, &student.group, &student.phone_number);
        attach(&mut self.by_surname, &student.surname, &student.phone_number);
    }

    /// Remove `student` from both indices
    fn unindex(&mut self, student: &Student) {
        detach(&mut self.by_group, &student.group, &student.phone_number);
        detach(&mut self.by_surname, &student.surname, &student.phone_number);
    }

    /// Rebuild both indices wholesale from the primary map
    fn rebuild_indices(&mut self) {
        self.by_group = Self::build_index(&self.primary, |s| &s.group);
        self.by_surname = Self::build_index(&self.primary, |s| &s.surname);
    }

    fn build_index(primary: &HashMap<String, Student>, key: impl Fn(&Student) -> &String) -> Index {
        let mut index = Index::new();
        for student in primary.values() {
            attach(&mut index, key(student), &student.phone_number);
        }
        index
    }

    fn index_bytes(index: &Index) -> usize {
        index
            .iter()
            .map(|(key, phones)| {
                phones
                    .iter()
                    .map(|phone| memory::index_entry_bytes(key, phone))
                    .sum::<usize>()
            })
            .sum()
    }
}

fn attach(index: &mut Index, key: &str, phone: &str) {
    match index.get_mut(key) {
        Some(phones) => {
            phones.insert(phone.to_string());
        }
        None => {
            index.insert(key.to_string(), BTreeSet::from([phone.to_string()]));
        }
    }
}

fn detach(index: &mut Index, key: &str, phone: &str) {
    if let Some(phones) = index.get_mut(key) {
        phones.remove(phone);
        if phones.is_empty() {
            index.remove(key);
        }
    }
}

impl StudentStore for IndexedStore {
    fn backend_name(&self) -> &'static str {
        "Indexed (HashMap + 2x BTreeMap)"
    }

    fn replace_all(&mut self, students: Vec<Student>) {
        self.primary = students
            .into_iter()
            .map(|student| (student.phone_number.clone(), student))
            .collect();
        self.rebuild_indices();
    }

    fn add(&mut self, student: Student) {
        if let Some(old) = self.primary.remove(&student.phone_number) {
            self.unindex(&old);
        }
        self.index(&student);
        self.primary.insert(student.phone_number.clone(), student);
    }

    fn remove_by_phone(&mut self, phone: &str) -> bool {
        match self.primary.remove(phone) {
            Some(old) => {
                self.unindex(&old);
                true
            }
            None => false,
        }
    }

    fn change_group_by_phone(&mut self, phone: &str, new_group: &str) -> bool {
        let Some(student) = self.primary.get_mut(phone) else {
            return false;
        };

        if student.group != new_group {
            let old_group = std::mem::replace(&mut student.group, new_group.to_string());
            detach(&mut self.by_group, &old_group, phone);
            attach(&mut self.by_group, new_group, phone);
        }

        true
    }

    fn get_students_by_group_sorted(&self, group: &str) -> Vec<Student> {
        let mut result: Vec<Student> = self
            .by_group
            .get(group)
            .into_iter()
            .flatten()
            .filter_map(|phone| self.primary.get(phone))
            .cloned()
            .collect();

        sorting::std_sort(&mut result, &compare::by_surname_and_name);
        result
    }

    fn get_groups_by_surname(&self, surname: &str) -> Vec<String> {
        self.by_surname
            .get(surname)
            .into_iter()
            .flatten()
            .filter_map(|phone| self.primary.get(phone))
            .map(|student| student.group.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn len(&self) -> usize {
        self.primary.len()
    }

    fn clear(&mut self) {
        self.primary.clear();
        self.by_group.clear();
        self.by_surname.clear();
    }

    fn to_vec(&self) -> Vec<Student> {
        self.primary.values().cloned().collect()
    }

    fn estimate_memory_usage(&self) -> usize {
        size_of::<Self>()
            + memory::bucket_bytes(self.primary.capacity())
            + self
                .primary
                .iter()
                .map(|(key, student)| {
                    memory::keyed_entry_bytes(key, student, memory::HASH_ENTRY_OVERHEAD)
                })
                .sum::<usize>()
            + Self::index_bytes(&self.by_group)
            + Self::index_bytes(&self.by_surname)
    }
}
