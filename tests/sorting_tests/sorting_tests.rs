//! Tests for the sort catalogue
//!
//! Tests verify:
//! - Every algorithm sorts under ascending and descending rating order
//! - Every algorithm honours an arbitrary comparator
//! - Empty and single-element inputs
//! - Radix sort infers direction from the comparator probe
//! - Name lookup and quadratic classification

use proptest::prelude::*;
use rosterdb::record::{compare, BirthDate, Student};
use rosterdb::sorting::{is_sorted_by, radix_sort_by_rating, SortAlgorithm};
use rosterdb::{dataset, RosterError};

// =============================================================================
// Helper Functions
// =============================================================================

fn rated(phone: usize, rating: f32) -> Student {
    Student::new(
        "Taras",
        "Shevchenko",
        "taras@student.org",
        BirthDate::new(2000, 3, 9),
        "KNT-21",
        rating,
        dataset::phone_for(phone),
    )
}

fn ratings(students: &[Student]) -> Vec<f32> {
    students.iter().map(|s| s.rating).collect()
}

fn sorted_ratings(students: &[Student], ascending: bool) -> Vec<f32> {
    let mut values = ratings(students);
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    if !ascending {
        values.reverse();
    }
    values
}

// =============================================================================
// Catalogue Tests
// =============================================================================

#[test]
fn test_every_algorithm_sorts_ascending() {
    let data = dataset::generate(300, 11);

    for algorithm in SortAlgorithm::ALL {
        let mut copy = data.clone();
        algorithm.sort(&mut copy, &compare::by_rating);

        assert!(is_sorted_by(&copy, &compare::by_rating), "{} not sorted", algorithm);
        assert_eq!(ratings(&copy), sorted_ratings(&data, true), "{}", algorithm);
    }
}

#[test]
fn test_every_algorithm_sorts_descending() {
    let data = dataset::generate(300, 12);

    for algorithm in SortAlgorithm::ALL {
        let mut copy = data.clone();
        algorithm.sort(&mut copy, &compare::by_rating_desc);

        assert!(is_sorted_by(&copy, &compare::by_rating_desc), "{} not sorted", algorithm);
        assert_eq!(ratings(&copy), sorted_ratings(&data, false), "{}", algorithm);
    }
}

#[test]
fn test_comparison_algorithms_honour_any_comparator() {
    let data = dataset::generate(200, 13);

    for algorithm in SortAlgorithm::ALL.iter().filter(|a| **a != SortAlgorithm::Radix) {
        let mut copy = data.clone();
        algorithm.sort(&mut copy, &compare::by_surname_and_name);
        assert!(is_sorted_by(&copy, &compare::by_surname_and_name), "{}", algorithm);

        let mut copy = data.clone();
        algorithm.sort(&mut copy, &compare::by_birth_date);
        assert!(is_sorted_by(&copy, &compare::by_birth_date), "{}", algorithm);
    }
}

#[test]
fn test_sorting_keeps_every_record() {
    let data = dataset::generate(150, 14);

    for algorithm in SortAlgorithm::ALL {
        let mut copy = data.clone();
        algorithm.sort(&mut copy, &compare::by_rating);

        let mut phones: Vec<_> = copy.iter().map(|s| s.phone_number.clone()).collect();
        let mut expected: Vec<_> = data.iter().map(|s| s.phone_number.clone()).collect();
        phones.sort();
        expected.sort();
        assert_eq!(phones, expected, "{}", algorithm);
    }
}

#[test]
fn test_empty_and_single_inputs() {
    for algorithm in SortAlgorithm::ALL {
        let mut empty: Vec<Student> = Vec::new();
        algorithm.sort(&mut empty, &compare::by_rating);
        assert!(empty.is_empty());

        let mut single = vec![rated(1, 42.0)];
        algorithm.sort(&mut single, &compare::by_rating);
        assert_eq!(single, vec![rated(1, 42.0)]);
    }
}

#[test]
fn test_already_sorted_and_reversed_inputs() {
    let ascending: Vec<Student> = (0..500).map(|i| rated(i, i as f32 / 5.0)).collect();
    let mut reversed = ascending.clone();
    reversed.reverse();

    for algorithm in SortAlgorithm::ALL {
        let mut copy = ascending.clone();
        algorithm.sort(&mut copy, &compare::by_rating);
        assert!(is_sorted_by(&copy, &compare::by_rating), "{}", algorithm);

        let mut copy = reversed.clone();
        algorithm.sort(&mut copy, &compare::by_rating);
        assert!(is_sorted_by(&copy, &compare::by_rating), "{}", algorithm);
    }
}

// =============================================================================
// Radix Direction Probe Tests
// =============================================================================

#[test]
fn test_radix_infers_direction_from_probe() {
    let mut data = vec![rated(1, 50.0), rated(2, 10.0), rated(3, 99.99), rated(4, 0.0)];

    radix_sort_by_rating(&mut data, &compare::by_rating);
    assert_eq!(ratings(&data), vec![0.0, 10.0, 50.0, 99.99]);

    radix_sort_by_rating(&mut data, &compare::by_rating_desc);
    assert_eq!(ratings(&data), vec![99.99, 50.0, 10.0, 0.0]);
}

#[test]
fn test_radix_ignores_non_rating_comparator_logic() {
    // The probe records differ only in rating; an unrelated comparator reads
    // them as equal, which the probe takes as descending
    let mut data = vec![rated(1, 10.0), rated(2, 30.0), rated(3, 20.0)];

    radix_sort_by_rating(&mut data, &compare::by_surname_and_name);

    assert_eq!(ratings(&data), vec![30.0, 20.0, 10.0]);
}

#[test]
fn test_radix_is_stable_within_a_bucket() {
    let mut data = vec![rated(1, 70.0), rated(2, 20.0), rated(3, 70.0), rated(4, 20.0)];

    radix_sort_by_rating(&mut data, &compare::by_rating);

    let phones: Vec<_> = data.iter().map(|s| s.phone_number.clone()).collect();
    assert_eq!(
        phones,
        vec![
            dataset::phone_for(2),
            dataset::phone_for(4),
            dataset::phone_for(1),
            dataset::phone_for(3)
        ]
    );
}

#[test]
fn test_radix_resolves_ratings_to_hundredths() {
    // 50.004 and 49.996 both round to bucket 5000
    let input = vec![rated(1, 50.004), rated(2, 49.996), rated(3, 10.0)];

    let mut data = input.clone();
    radix_sort_by_rating(&mut data, &compare::by_rating);
    assert_eq!(ratings(&data), vec![10.0, 50.004, 49.996]);
    assert!(!is_sorted_by(&data, &compare::by_rating));

    let mut data = input;
    SortAlgorithm::Merge.sort(&mut data, &compare::by_rating);
    assert_eq!(ratings(&data), vec![10.0, 49.996, 50.004]);
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_algorithm_lookup_by_key() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.key().parse::<SortAlgorithm>().unwrap(), algorithm);
    }
    assert_eq!("QUICK".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
    assert!(matches!(
        "shell".parse::<SortAlgorithm>(),
        Err(RosterError::UnknownAlgorithm(_))
    ));
}

#[test]
fn test_quadratic_classification() {
    let quadratic: Vec<_> = SortAlgorithm::ALL
        .iter()
        .filter(|a| a.is_quadratic())
        .map(|a| a.key())
        .collect();

    assert_eq!(quadratic, vec!["bubble", "insertion", "selection"]);
    assert_eq!(SortAlgorithm::default(), SortAlgorithm::Quick);
}

// =============================================================================
// Property Tests
// =============================================================================

prop_compose! {
    /// Ratings at 1/100 precision, the resolution radix sort buckets at
    fn arb_students(max_len: usize)(cents in prop::collection::vec(0u32..=10_000, 0..max_len)) -> Vec<Student> {
        cents
            .into_iter()
            .enumerate()
            .map(|(i, c)| rated(i, c as f32 / 100.0))
            .collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_algorithm_yields_sorted_output(data in arb_students(120), ascending in any::<bool>()) {
        let cmp = compare::rating(ascending);

        for algorithm in SortAlgorithm::ALL {
            let mut copy = data.clone();
            algorithm.sort(&mut copy, &cmp);

            prop_assert!(is_sorted_by(&copy, &cmp), "{} produced unsorted output", algorithm);
            prop_assert_eq!(copy.len(), data.len());
        }
    }
}
