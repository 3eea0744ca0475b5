//! Flat codec
//!
//! Conversion between the comma-delimited flat export and `Student` records.
//!
//! ## File Format
//! ```text
//! name,surname,email,birth_year,birth_month,birth_day,group,rating,phone_number   <- header
//! Ivan,Petrenko,ivan.petrenko@student.org,2001,4,17,KNT-21,87.5,38(050)12-34-567
//! ...                                                                              <- one line per record
//! ```
//!
//! - Exactly nine fields, split on `,`; no quoting or escaping
//! - A bad line (invalid UTF-8, wrong field count, bad number, out-of-range
//!   field) is logged and skipped, never fatal to the whole read
//! - Rating is written with `f32`'s `Display` and read with `f32::from_str`

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, RosterError};
use crate::record::{BirthDate, Student};

/// Header line written before the records
pub const HEADER: &str = "name,surname,email,birth_year,birth_month,birth_day,group,rating,phone_number";

/// Number of fields on every data line
pub const FIELD_COUNT: usize = 9;

// =============================================================================
// Line Encoding/Decoding
// =============================================================================

/// Parse one data line into a validated record
pub fn parse_line(line: &str) -> Result<Student> {
    let fields: Vec<&str> = line.split(',').collect();

    if fields.len() != FIELD_COUNT {
        return Err(RosterError::parse(
            line,
            format!("expected {} fields, got {}", FIELD_COUNT, fields.len()),
        ));
    }

    let birth_date = BirthDate::new(
        parse_field(line, "birth_year", fields[3])?,
        parse_field(line, "birth_month", fields[4])?,
        parse_field(line, "birth_day", fields[5])?,
    );

    let student = Student::new(
        fields[0],
        fields[1],
        fields[2],
        birth_date,
        fields[6],
        parse_field(line, "rating", fields[7])?,
        fields[8],
    );

    student
        .validate()
        .map_err(|e| RosterError::parse(line, e.to_string()))?;

    Ok(student)
}

fn parse_field<T: FromStr>(line: &str, name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| RosterError::parse(line, format!("{} '{}' is not a number", name, raw)))
}

/// Format one record as a data line (no trailing newline)
pub fn format_line(student: &Student) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{}",
        student.name,
        student.surname,
        student.email,
        student.birth_date.year,
        student.birth_date.month,
        student.birth_date.day,
        student.group,
        student.rating,
        student.phone_number
    )
}

// =============================================================================
// File Encoding/Decoding
// =============================================================================

/// Read every well-formed record from a flat file
///
/// Fails only if the file cannot be opened or read. The first line is taken
/// as the header and skipped; blank lines are ignored; malformed lines are
/// logged and dropped.
pub fn read_file(path: &Path) -> Result<Vec<Student>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut students = Vec::new();
    let mut skipped = 0usize;

    for raw in reader.split(b'\n').skip(1) {
        let raw = raw?;
        let line = match decode_line(raw) {
            Ok(line) => line,
            Err(e) => {
                skipped += 1;
                tracing::warn!(path = %path.display(), error = %e, "Skipping malformed line");
                continue;
            }
        };
        let line = line.trim_end_matches('\r');

        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(student) => students.push(student),
            Err(e) => {
                skipped += 1;
                tracing::warn!(path = %path.display(), error = %e, "Skipping malformed line");
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        records = students.len(),
        skipped,
        "Read flat file"
    );

    Ok(students)
}

/// Decode one raw line; invalid UTF-8 is a per-line parse failure
fn decode_line(raw: Vec<u8>) -> Result<String> {
    String::from_utf8(raw).map_err(|e| {
        let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
        RosterError::parse(&lossy, format!("invalid UTF-8: {}", e.utf8_error()))
    })
}

/// Write a header and one line per record, replacing any existing file
pub fn write_file(path: &Path, students: &[Student]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER)?;
    for student in students {
        writeln!(writer, "{}", format_line(student))?;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), records = students.len(), "Wrote flat file");

    Ok(())
}
