//! Record Module
//!
//! The `Student` value type stored by every backend, plus the total-order
//! comparators used by queries and the sort catalogue.
//!
//! ## Field Bounds
//! - birth year: 1950..=2010
//! - birth month: 1..=12
//! - birth day: 1..=days in that month (leap years honoured)
//! - group: `[A-Z]{3}-[0-9]{2}`
//! - rating: 0.0..=100.0
//! - phone number: non-empty, the natural unique key

use std::fmt;

use crate::error::{Result, RosterError};

pub const MIN_BIRTH_YEAR: u16 = 1950;
pub const MAX_BIRTH_YEAR: u16 = 2010;
pub const MIN_RATING: f32 = 0.0;
pub const MAX_RATING: f32 = 100.0;

/// Calendar birth date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl BirthDate {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Check year, month, and day bounds
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&self.year) {
            return Err(RosterError::InvalidRecord(format!(
                "birth year {} outside {}..={}",
                self.year, MIN_BIRTH_YEAR, MAX_BIRTH_YEAR
            )));
        }

        if !(1..=12).contains(&self.month) {
            return Err(RosterError::InvalidRecord(format!(
                "birth month {} outside 1..=12",
                self.month
            )));
        }

        let max_day = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_day {
            return Err(RosterError::InvalidRecord(format!(
                "birth day {} outside 1..={} for {}-{:02}",
                self.day, max_day, self.year, self.month
            )));
        }

        Ok(())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Number of days in `month` of `year`; 0 for an invalid month
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Check the `[A-Z]{3}-[0-9]{2}` group shape
pub fn is_valid_group(group: &str) -> bool {
    let bytes = group.as_bytes();
    bytes.len() == 6
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3] == b'-'
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

/// A student record
///
/// `phone_number` is the natural key: every backend keeps at most one record
/// per phone number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Student {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub birth_date: BirthDate,
    pub group: String,
    pub rating: f32,
    pub phone_number: String,
}

impl Student {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        birth_date: BirthDate,
        group: impl Into<String>,
        rating: f32,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            birth_date,
            group: group.into(),
            rating,
            phone_number: phone_number.into(),
        }
    }

    /// "Surname Name"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.name)
    }

    /// Check every bounded field, reporting the first violation
    pub fn validate(&self) -> Result<()> {
        if self.phone_number.is_empty() {
            return Err(RosterError::InvalidRecord("empty phone number".to_string()));
        }

        self.birth_date.validate()?;

        if !is_valid_group(&self.group) {
            return Err(RosterError::InvalidRecord(format!(
                "group '{}' does not match AAA-00",
                self.group
            )));
        }

        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(RosterError::InvalidRecord(format!(
                "rating {} outside {}..={}",
                self.rating, MIN_RATING, MAX_RATING
            )));
        }

        Ok(())
    }

    /// Sum of the heap capacity held by the record's string fields
    pub fn heap_bytes(&self) -> usize {
        self.name.capacity()
            + self.surname.capacity()
            + self.email.capacity()
            + self.group.capacity()
            + self.phone_number.capacity()
    }
}

/// Comparator signature shared by queries and the sort catalogue
///
/// Returns true iff the first record must sort strictly before the second.
pub type Comparator = dyn Fn(&Student, &Student) -> bool;

/// Total-order comparators over `Student`
///
/// String comparisons are ordinal (byte-wise).
pub mod compare {
    use super::Student;

    /// Surname, then given name
    pub fn by_surname_and_name(a: &Student, b: &Student) -> bool {
        if a.surname != b.surname {
            return a.surname < b.surname;
        }
        a.name < b.name
    }

    pub fn by_rating(a: &Student, b: &Student) -> bool {
        a.rating < b.rating
    }

    pub fn by_rating_desc(a: &Student, b: &Student) -> bool {
        a.rating > b.rating
    }

    pub fn by_name(a: &Student, b: &Student) -> bool {
        a.name < b.name
    }

    pub fn by_surname(a: &Student, b: &Student) -> bool {
        a.surname < b.surname
    }

    pub fn by_email(a: &Student, b: &Student) -> bool {
        a.email < b.email
    }

    pub fn by_birth_date(a: &Student, b: &Student) -> bool {
        a.birth_date < b.birth_date
    }

    pub fn by_group(a: &Student, b: &Student) -> bool {
        a.group < b.group
    }

    /// Rating comparator for the requested direction
    pub fn rating(ascending: bool) -> fn(&Student, &Student) -> bool {
        if ascending {
            by_rating
        } else {
            by_rating_desc
        }
    }
}
