//! Backend Module
//!
//! Four interchangeable in-memory stores behind one `StudentStore` contract.
//!
//! ## Variants
//! ```text
//! ┌──────────┬──────────────────────────────┬────────────┬──────────────────┐
//! │ Variant  │ Structure                    │ Point ops  │ Group / surname  │
//! ├──────────┼──────────────────────────────┼────────────┼──────────────────┤
//! │ Linear   │ Vec<Student>                 │ O(n)       │ O(n) scan        │
//! │ Keyed    │ HashMap<phone, Student>      │ O(1) avg   │ O(n) scan        │
//! │ Ordered  │ BTreeMap<phone, Student>     │ O(log n)   │ O(n) scan        │
//! │ Indexed  │ HashMap + 2 x BTreeMap index │ O(log n)   │ O(log n + k)     │
//! └──────────┴──────────────────────────────┴────────────┴──────────────────┘
//! ```
//!
//! Every variant keeps at most one record per phone number (last write wins)
//! and answers both queries identically; only speed and memory differ.

mod indexed;
mod keyed;
mod linear;
pub mod memory;
mod ordered;

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::codec;
use crate::error::RosterError;
use crate::record::{compare, Student};
use crate::sorting::{self, SortFn};

pub use indexed::IndexedStore;
pub use keyed::KeyedStore;
pub use linear::LinearStore;
pub use ordered::OrderedStore;

/// Capability contract shared by every backend
///
/// Failures never cross this interface as errors: I/O problems and missing
/// keys are reported as `false` and logged.
pub trait StudentStore {
    /// Fixed label used in reports
    fn backend_name(&self) -> &'static str;

    /// Replace all state with `students` in one bulk step
    fn replace_all(&mut self, students: Vec<Student>);

    /// Insert or overwrite the record with the same phone number
    fn add(&mut self, student: Student);

    /// Remove the record for `phone`; false if absent
    fn remove_by_phone(&mut self, phone: &str) -> bool;

    /// Move the record for `phone` to `new_group`; false if absent
    fn change_group_by_phone(&mut self, phone: &str, new_group: &str) -> bool;

    /// Records in `group`, ordered by (surname, name)
    fn get_students_by_group_sorted(&self, group: &str) -> Vec<Student>;

    /// Distinct groups of records with `surname`, ascending
    fn get_groups_by_surname(&self, surname: &str) -> Vec<String>;

    fn len(&self) -> usize;

    fn clear(&mut self);

    /// Snapshot of every stored record
    fn to_vec(&self) -> Vec<Student>;

    /// Comparative heap footprint, see [`memory`]
    fn estimate_memory_usage(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace all state with the records of a flat file
    ///
    /// Returns false if the file cannot be read (state untouched) or holds no
    /// valid records (state cleared).
    fn load(&mut self, path: &Path) -> bool {
        let students = match codec::read_file(path) {
            Ok(students) => students,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read records");
                return false;
            }
        };

        self.replace_all(students);
        tracing::debug!(
            backend = self.backend_name(),
            records = self.len(),
            "Loaded records"
        );

        !self.is_empty()
    }

    /// Write every record to a flat file
    fn save(&self, path: &Path) -> bool {
        write_records(path, &self.to_vec())
    }

    /// Sort a snapshot by rating with `sort` and write it to `path`
    fn sort_by_rating_and_persist(&self, path: &Path, sort: SortFn, ascending: bool) -> bool {
        let mut snapshot = self.to_vec();
        sort(&mut snapshot, &compare::rating(ascending));
        write_records(path, &snapshot)
    }
}

// =============================================================================
// Backend Selection
// =============================================================================

/// Selector for the four backend variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BackendKind {
    #[default]
    Linear,
    Keyed,
    Ordered,
    Indexed,
}

impl BackendKind {
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Linear,
        BackendKind::Keyed,
        BackendKind::Ordered,
        BackendKind::Indexed,
    ];

    /// Short key accepted on the command line
    pub fn key(&self) -> &'static str {
        match self {
            BackendKind::Linear => "linear",
            BackendKind::Keyed => "keyed",
            BackendKind::Ordered => "ordered",
            BackendKind::Indexed => "indexed",
        }
    }

    /// Build an empty backend of this kind
    pub fn create(&self) -> Box<dyn StudentStore> {
        self.create_with(Vec::new())
    }

    /// Build a backend of this kind holding `students`
    pub fn create_with(&self, students: Vec<Student>) -> Box<dyn StudentStore> {
        match self {
            BackendKind::Linear => Box::new(LinearStore::from_records(students)),
            BackendKind::Keyed => Box::new(KeyedStore::from_records(students)),
            BackendKind::Ordered => Box::new(OrderedStore::from_records(students)),
            BackendKind::Indexed => Box::new(IndexedStore::from_records(students)),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BackendKind {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| RosterError::UnknownBackend(s.to_string()))
    }
}

// =============================================================================
// Shared Helpers
// =============================================================================

fn write_records(path: &Path, students: &[Student]) -> bool {
    match codec::write_file(path, students) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to write records");
            false
        }
    }
}

/// Full-scan group query used by the non-indexed variants
fn scan_group_sorted<'a>(students: impl Iterator<Item = &'a Student>, group: &str) -> Vec<Student> {
    let mut result: Vec<Student> = students
        .filter(|student| student.group == group)
        .cloned()
        .collect();
    sorting::std_sort(&mut result, &compare::by_surname_and_name);
    result
}

/// Full-scan surname query used by the non-indexed variants
fn scan_groups_by_surname<'a>(
    students: impl Iterator<Item = &'a Student>,
    surname: &str,
) -> Vec<String> {
    students
        .filter(|student| student.surname == surname)
        .map(|student| student.group.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
