//! Benchmark result files and console tables
//!
//! ## Operations CSV
//! ```text
//! Backend,Data Size,Op1 Count,Op2 Count,Op3 Count,Total Ops,Duration (s),Ops/sec,Memory (bytes),Memory (MB)
//! ```
//!
//! ## Sorting CSV
//! ```text
//! Algorithm,Data Size,Execution Time (ms)
//! ```

use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{OperationReport, SortReport};
use crate::error::Result;

pub const OPERATIONS_HEADER: &str = "Backend,Data Size,Op1 Count,Op2 Count,Op3 Count,Total Ops,Duration (s),Ops/sec,Memory (bytes),Memory (MB)";

pub const SORTING_HEADER: &str = "Algorithm,Data Size,Execution Time (ms)";

const OPERATIONS_RULE: usize = 110;
const SORTING_RULE: usize = 60;

// =============================================================================
// Result Files
// =============================================================================

pub fn write_operation_results(path: &Path, reports: &[OperationReport]) -> Result<()> {
    let mut writer = create(path)?;

    writeln!(writer, "{}", OPERATIONS_HEADER)?;
    for report in reports {
        writeln!(
            writer,
            "{},{},{},{},{},{},{:.2},{:.2},{},{:.2}",
            report.backend_name,
            report.record_count,
            report.change_group_count,
            report.group_query_count,
            report.surname_query_count,
            report.total_operations,
            report.elapsed_secs,
            report.operations_per_sec,
            report.memory_bytes,
            report.memory_mb()
        )?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = reports.len(), "Saved operation results");
    Ok(())
}

pub fn write_sort_results(path: &Path, reports: &[SortReport]) -> Result<()> {
    let mut writer = create(path)?;

    writeln!(writer, "{}", SORTING_HEADER)?;
    for report in reports {
        writeln!(
            writer,
            "{},{},{:.6}",
            report.algorithm.name(),
            report.record_count,
            report.elapsed_ms
        )?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = reports.len(), "Saved sort results");
    Ok(())
}

/// Open `path` for writing, creating its parent directory if needed
fn create(path: &Path) -> Result<BufWriter<fs::File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    Ok(BufWriter::new(file))
}

// =============================================================================
// Console Tables
// =============================================================================

pub fn format_operation_table(reports: &[OperationReport]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(OPERATIONS_RULE);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "OPERATION BENCHMARK RESULTS");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "{:<34}{:<12}{:<10}{:<10}{:<10}{:<12}{:<14}{:<12}",
        "Backend", "Data Size", "Op1", "Op2", "Op3", "Total Ops", "Ops/sec", "Memory (MB)"
    );
    let _ = writeln!(out, "{}", "-".repeat(OPERATIONS_RULE));

    for report in reports {
        let _ = writeln!(
            out,
            "{:<34}{:<12}{:<10}{:<10}{:<10}{:<12}{:<14.2}{:<12.2}",
            report.backend_name,
            report.record_count,
            report.change_group_count,
            report.group_query_count,
            report.surname_query_count,
            report.total_operations,
            report.operations_per_sec,
            report.memory_mb()
        );
    }

    let _ = writeln!(out, "{}", rule);
    out
}

pub fn format_sort_table(reports: &[SortReport]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(SORTING_RULE);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "SORTING BENCHMARK RESULTS");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{:<20}{:<15}{:<20}", "Algorithm", "Data Size", "Time (ms)");
    let _ = writeln!(out, "{}", "-".repeat(SORTING_RULE));

    for report in reports {
        let _ = writeln!(
            out,
            "{:<20}{:<15}{:<20.3}",
            report.algorithm.name(),
            report.record_count,
            report.elapsed_ms
        );
    }

    let _ = writeln!(out, "{}", rule);
    out
}
