//! Synthetic dataset generation
//!
//! Produces valid, reproducible student records for benchmarks and tests.
//! Groups and surnames are drawn from small pools so that group and surname
//! queries return more than one row.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::record::{days_in_month, BirthDate, Student, MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};

const NAMES: &[&str] = &[
    "Andrii", "Bohdan", "Daryna", "Iryna", "Ivan", "Kateryna", "Maksym", "Mariia", "Oleh",
    "Olena", "Petro", "Sofiia", "Taras", "Vira", "Yurii", "Zoriana",
];

const SURNAMES: &[&str] = &[
    "Bondarenko", "Boyko", "Hrytsenko", "Kovalenko", "Kovalchuk", "Kravchenko", "Lysenko",
    "Melnyk", "Moroz", "Oliinyk", "Petrenko", "Polishchuk", "Savchenko", "Shevchenko",
    "Tkachenko", "Tkachuk",
];

const FACULTIES: &[&str] = &["KNT", "MAT", "FIZ", "EKO", "HIM", "IST"];

/// Number of distinct course numbers per faculty
const COURSES_PER_FACULTY: u32 = 8;

/// Generate `count` records with unique phone numbers
///
/// The same `(count, seed)` always yields the same records.
pub fn generate(count: usize, seed: u64) -> Vec<Student> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|i| generate_one(&mut rng, i)).collect()
}

fn generate_one<R: Rng>(rng: &mut R, index: usize) -> Student {
    let name = *NAMES.choose(rng).unwrap_or(&"Ivan");
    let surname = *SURNAMES.choose(rng).unwrap_or(&"Petrenko");
    let faculty = *FACULTIES.choose(rng).unwrap_or(&"KNT");

    let year = rng.gen_range(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR);
    let month = rng.gen_range(1..=12u8);
    let day = rng.gen_range(1..=days_in_month(year, month));

    let group = format!("{}-{:02}", faculty, rng.gen_range(10..10 + COURSES_PER_FACULTY));
    let rating = rng.gen_range(0..=10_000u32) as f32 / 100.0;

    Student::new(
        name,
        surname,
        format!("{}.{}{}@student.org", name.to_lowercase(), surname.to_lowercase(), index),
        BirthDate::new(year, month, day),
        group,
        rating,
        phone_for(index),
    )
}

/// Deterministic, unique phone number in the `38(0xx)xx-xx-xxx` shape
pub fn phone_for(index: usize) -> String {
    let operator = 50 + (index / 10_000_000) % 50;
    let local = index % 10_000_000;
    format!(
        "38(0{:02}){:02}-{:02}-{:03}",
        operator,
        local / 100_000,
        (local / 1_000) % 100,
        local % 1_000
    )
}
