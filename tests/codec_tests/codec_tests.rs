//! Tests for the flat codec
//!
//! Tests verify:
//! - Line parsing and formatting
//! - Per-line failures (field count, numbers, bounds)
//! - File reads skip bad lines without failing
//! - File write/read round trip
//! - Missing files are errors

use std::fs;
use std::path::PathBuf;

use rosterdb::codec::{self, HEADER};
use rosterdb::record::{BirthDate, Student};
use rosterdb::RosterError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    (temp_dir, path)
}

fn sample_student() -> Student {
    Student::new(
        "Ivan",
        "Petrenko",
        "ivan.petrenko@student.org",
        BirthDate::new(2001, 4, 17),
        "KNT-21",
        87.5,
        "38(050)12-34-567",
    )
}

const SAMPLE_LINE: &str = "Ivan,Petrenko,ivan.petrenko@student.org,2001,4,17,KNT-21,87.5,38(050)12-34-567";

// =============================================================================
// Line Tests
// =============================================================================

#[test]
fn test_parse_valid_line() {
    let student = codec::parse_line(SAMPLE_LINE).unwrap();
    assert_eq!(student, sample_student());
}

#[test]
fn test_format_line() {
    assert_eq!(codec::format_line(&sample_student()), SAMPLE_LINE);
}

#[test]
fn test_whole_rating_formats_without_fraction() {
    let student = Student { rating: 90.0, ..sample_student() };
    let line = codec::format_line(&student);

    assert!(line.contains(",90,"));
    assert_eq!(codec::parse_line(&line).unwrap().rating, 90.0);
}

#[test]
fn test_parse_accepts_any_float_text() {
    let line = SAMPLE_LINE.replace(",87.5,", ",8.75e1,");
    assert_eq!(codec::parse_line(&line).unwrap().rating, 87.5);
}

#[test]
fn test_parse_wrong_field_count() {
    let short = "Ivan,Petrenko,ivan@student.org,2001,4,17,KNT-21,87.5";
    let long = format!("{},extra", SAMPLE_LINE);

    assert!(matches!(codec::parse_line(short), Err(RosterError::Parse { .. })));
    assert!(matches!(codec::parse_line(&long), Err(RosterError::Parse { .. })));
}

#[test]
fn test_parse_bad_number() {
    let line = SAMPLE_LINE.replace(",2001,", ",two thousand,");
    assert!(matches!(codec::parse_line(&line), Err(RosterError::Parse { .. })));
}

#[test]
fn test_parse_out_of_range_field() {
    let line = SAMPLE_LINE.replace(",4,17,", ",2,30,");
    assert!(matches!(codec::parse_line(&line), Err(RosterError::Parse { .. })));
}

// =============================================================================
// File Tests
// =============================================================================

#[test]
fn test_read_skips_malformed_lines() {
    let (_temp, path) = setup_temp_file("students.csv");
    let content = format!(
        "{}\n{}\nbroken,line\n\n{}\n",
        HEADER,
        SAMPLE_LINE,
        SAMPLE_LINE.replace("38(050)12-34-567", "38(050)12-34-568")
    );
    fs::write(&path, content).unwrap();

    let students = codec::read_file(&path).unwrap();

    assert_eq!(students.len(), 2);
    assert_eq!(students[1].phone_number, "38(050)12-34-568");
}

#[test]
fn test_read_skips_invalid_utf8_line() {
    let (_temp, path) = setup_temp_file("students.csv");
    let mut content = format!("{}\n{}\n", HEADER, SAMPLE_LINE).into_bytes();
    content.extend_from_slice(
        b"Ol\xffna,Moroz,olena@student.org,2002,3,4,MAT-11,70.5,38(050)00-00-222\n",
    );
    content.extend_from_slice(
        format!("{}\n", SAMPLE_LINE.replace("38(050)12-34-567", "38(050)12-34-568")).as_bytes(),
    );
    fs::write(&path, content).unwrap();

    let students = codec::read_file(&path).unwrap();

    let phones: Vec<&str> = students.iter().map(|s| s.phone_number.as_str()).collect();
    assert_eq!(phones, vec!["38(050)12-34-567", "38(050)12-34-568"]);
}

#[test]
fn test_read_handles_crlf() {
    let (_temp, path) = setup_temp_file("students.csv");
    fs::write(&path, format!("{}\r\n{}\r\n", HEADER, SAMPLE_LINE)).unwrap();

    let students = codec::read_file(&path).unwrap();

    assert_eq!(students, vec![sample_student()]);
}

#[test]
fn test_read_header_only_is_empty() {
    let (_temp, path) = setup_temp_file("students.csv");
    fs::write(&path, format!("{}\n", HEADER)).unwrap();

    assert!(codec::read_file(&path).unwrap().is_empty());
}

#[test]
fn test_read_missing_file_is_io_error() {
    let (_temp, path) = setup_temp_file("missing.csv");
    assert!(matches!(codec::read_file(&path), Err(RosterError::Io(_))));
}

#[test]
fn test_write_then_read() {
    let (_temp, path) = setup_temp_file("students.csv");
    let students = rosterdb::dataset::generate(50, 1);

    codec::write_file(&path, &students).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let read_back = codec::read_file(&path).unwrap();

    assert!(content.starts_with(HEADER));
    assert_eq!(content.lines().count(), 51);
    assert_eq!(read_back, students);
}

#[test]
fn test_write_into_missing_directory_fails() {
    let (_temp, dir) = setup_temp_file("no_such_dir");
    let path = dir.join("students.csv");

    assert!(codec::write_file(&path, &[sample_student()]).is_err());
}
