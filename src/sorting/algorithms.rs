//! Sort algorithm implementations
//!
//! All functions share the `SortFn` signature.

use std::cmp::Ordering;

use crate::record::{Comparator, Student, MAX_RATING};

/// Rating buckets at 1/100 precision: 0.00..=100.00
const RATING_BUCKETS: usize = (MAX_RATING as usize) * 100 + 1;

/// Slice sort from the standard library (stable)
pub fn std_sort(data: &mut [Student], cmp: &Comparator) {
    data.sort_by(|a, b| {
        if cmp(a, b) {
            Ordering::Less
        } else if cmp(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}

pub fn bubble_sort(data: &mut [Student], cmp: &Comparator) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if cmp(&data[j + 1], &data[j]) {
                data.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

pub fn insertion_sort(data: &mut [Student], cmp: &Comparator) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && cmp(&data[j], &data[j - 1]) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

pub fn selection_sort(data: &mut [Student], cmp: &Comparator) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            if cmp(&data[j], &data[min_idx]) {
                min_idx = j;
            }
        }

        if min_idx != i {
            data.swap(i, min_idx);
        }
    }
}

// =============================================================================
// Merge Sort
// =============================================================================

/// Top-down merge sort (stable)
pub fn merge_sort(data: &mut [Student], cmp: &Comparator) {
    if data.len() < 2 {
        return;
    }

    let mid = data.len() / 2;
    merge_sort(&mut data[..mid], cmp);
    merge_sort(&mut data[mid..], cmp);
    merge(data, mid, cmp);
}

/// Merge the sorted halves `data[..mid]` and `data[mid..]`
fn merge(data: &mut [Student], mid: usize, cmp: &Comparator) {
    let (left, right) = data.split_at(mid);
    let mut merged = Vec::with_capacity(data.len());

    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Take from the right only when strictly smaller, keeping ties stable
        if cmp(&right[j], &left[i]) {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    data.clone_from_slice(&merged);
}

// =============================================================================
// Quick Sort
// =============================================================================

/// Lomuto quick sort with a middle pivot
///
/// Recurses into the smaller partition and loops on the larger one, so stack
/// depth stays logarithmic.
pub fn quick_sort(data: &mut [Student], cmp: &Comparator) {
    let mut rest = data;
    while rest.len() > 1 {
        let pivot = partition(rest, cmp);
        let (left, right) = std::mem::take(&mut rest).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, cmp);
            rest = right;
        } else {
            quick_sort(right, cmp);
            rest = left;
        }
    }
}

/// Partition around the middle element; returns its final index
fn partition(data: &mut [Student], cmp: &Comparator) -> usize {
    let high = data.len() - 1;
    data.swap(data.len() / 2, high);

    let mut store = 0;
    for j in 0..high {
        if cmp(&data[j], &data[high]) {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);

    store
}

// =============================================================================
// Heap Sort
// =============================================================================

pub fn heap_sort(data: &mut [Student], cmp: &Comparator) {
    let n = data.len();

    for i in (0..n / 2).rev() {
        sift_down(data, i, n, cmp);
    }

    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, cmp);
    }
}

/// Restore the max-heap property for the subtree at `root` within `data[..len]`
fn sift_down(data: &mut [Student], mut root: usize, len: usize, cmp: &Comparator) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && cmp(&data[largest], &data[left]) {
            largest = left;
        }
        if right < len && cmp(&data[largest], &data[right]) {
            largest = right;
        }

        if largest == root {
            return;
        }

        data.swap(root, largest);
        root = largest;
    }
}

// =============================================================================
// Rating Radix Sort
// =============================================================================

/// Counting sort on rating at 1/100 precision
///
/// The comparator is only consulted once, on a synthetic pair rated 1 and 2,
/// to decide the direction. Inputs of fewer than two records are left as is.
/// Ratings that round to the same hundredth keep their relative input order.
pub fn radix_sort_by_rating(data: &mut [Student], cmp: &Comparator) {
    if data.len() < 2 {
        return;
    }

    let low = Student {
        rating: 1.0,
        ..Student::default()
    };
    let high = Student {
        rating: 2.0,
        ..Student::default()
    };
    let ascending = cmp(&low, &high);

    let keys: Vec<usize> = data.iter().map(|s| rating_bucket(s.rating)).collect();

    let mut counts = vec![0usize; RATING_BUCKETS];
    for &key in &keys {
        counts[key] += 1;
    }

    // Cumulative counts: counts[k] becomes one past the last slot for bucket k
    if ascending {
        for k in 1..RATING_BUCKETS {
            counts[k] += counts[k - 1];
        }
    } else {
        for k in (0..RATING_BUCKETS - 1).rev() {
            counts[k] += counts[k + 1];
        }
    }

    let mut order = vec![0usize; data.len()];
    for (index, &key) in keys.iter().enumerate().rev() {
        counts[key] -= 1;
        order[counts[key]] = index;
    }

    let sorted: Vec<Student> = order.iter().map(|&index| data[index].clone()).collect();
    data.clone_from_slice(&sorted);
}

fn rating_bucket(rating: f32) -> usize {
    // `as` saturates: negatives and NaN land in bucket 0
    ((rating * 100.0).round() as usize).min(RATING_BUCKETS - 1)
}
