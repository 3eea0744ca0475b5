//! Sorting Module
//!
//! Catalogue of sort algorithms over student records.
//!
//! ## Contract
//! Every algorithm rearranges a `&mut [Student]` in place so that no adjacent
//! pair `(a, b)` satisfies `cmp(b, a)`. Stability is NOT guaranteed: the
//! exchange-based algorithms may reorder records the comparator considers
//! equal.
//!
//! ## Rating Radix Sort
//! `radix_sort_by_rating` ignores the comparator's logic and buckets records
//! by rating at 1/100 precision. It infers ascending vs descending order by
//! probing the comparator with two synthetic records rated 1 and 2. A
//! comparator that is not a pure rating order (e.g. one with an unrelated
//! tie-break) can make the probe infer the wrong direction.
//!
//! Ratings closer together than 1/100 share a bucket and keep their input
//! order, so finer-grained ratings (e.g. 50.004 and 49.996) are only sorted
//! to the nearest hundredth.

mod algorithms;

use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;
use crate::record::{Comparator, Student};

pub use algorithms::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, radix_sort_by_rating,
    selection_sort, std_sort,
};

/// Signature shared by every algorithm in the catalogue
pub type SortFn = fn(&mut [Student], &Comparator);

/// Named entry in the sort catalogue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Std,
    Bubble,
    Insertion,
    Selection,
    Merge,
    #[default]
    Quick,
    Heap,
    /// Rating-only; exact to 1/100 of a rating point
    Radix,
}

impl SortAlgorithm {
    /// Every algorithm, in benchmark order
    pub const ALL: [SortAlgorithm; 8] = [
        SortAlgorithm::Std,
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Radix,
    ];

    /// Short key accepted on the command line
    pub fn key(&self) -> &'static str {
        match self {
            SortAlgorithm::Std => "std",
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Radix => "radix",
        }
    }

    /// Label used in reports
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Std => "Std Sort",
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Radix => "Radix Sort",
        }
    }

    /// O(n^2) algorithms, skipped on large tiers
    pub fn is_quadratic(&self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Selection
        )
    }

    pub fn sort_fn(&self) -> SortFn {
        match self {
            SortAlgorithm::Std => std_sort,
            SortAlgorithm::Bubble => bubble_sort,
            SortAlgorithm::Insertion => insertion_sort,
            SortAlgorithm::Selection => selection_sort,
            SortAlgorithm::Merge => merge_sort,
            SortAlgorithm::Quick => quick_sort,
            SortAlgorithm::Heap => heap_sort,
            SortAlgorithm::Radix => radix_sort_by_rating,
        }
    }

    /// Sort `data` in place with this algorithm
    pub fn sort(&self, data: &mut [Student], cmp: &Comparator) {
        (self.sort_fn())(data, cmp)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortAlgorithm {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| RosterError::UnknownAlgorithm(s.to_string()))
    }
}

/// True if no adjacent pair is out of order under `cmp`
pub fn is_sorted_by(data: &[Student], cmp: &Comparator) -> bool {
    data.windows(2).all(|pair| !cmp(&pair[1], &pair[0]))
}
