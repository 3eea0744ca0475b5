//! Tests for benchmark result files and console tables

use std::fs;

use rosterdb::bench::{
    format_operation_table, format_sort_table, write_operation_results, write_sort_results,
    OperationReport, SortReport, OPERATIONS_HEADER, SORTING_HEADER,
};
use rosterdb::sorting::SortAlgorithm;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn operation_report(backend: &str, records: usize) -> OperationReport {
    OperationReport {
        backend_name: backend.to_string(),
        record_count: records,
        change_group_count: 40,
        group_query_count: 85,
        surname_query_count: 875,
        total_operations: 1_000,
        elapsed_secs: 2.0,
        operations_per_sec: 500.0,
        memory_bytes: 3 * 1024 * 1024,
    }
}

fn sort_report(algorithm: SortAlgorithm, records: usize, elapsed_ms: f64) -> SortReport {
    SortReport {
        algorithm,
        record_count: records,
        elapsed_ms,
    }
}

// =============================================================================
// Result File Tests
// =============================================================================

#[test]
fn test_operation_results_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("operations_results.csv");
    let reports = vec![
        operation_report("Linear (Vec)", 100),
        operation_report("Keyed (HashMap)", 1_000),
    ];

    write_operation_results(&path, &reports).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], OPERATIONS_HEADER);
    assert_eq!(lines[1], "Linear (Vec),100,40,85,875,1000,2.00,500.00,3145728,3.00");
    assert!(lines[2].starts_with("Keyed (HashMap),1000,"));
}

#[test]
fn test_sort_results_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sorting_results.csv");
    let reports = vec![
        sort_report(SortAlgorithm::Quick, 1_000, 0.25),
        sort_report(SortAlgorithm::Radix, 1_000, 1.5),
    ];

    write_sort_results(&path, &reports).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], SORTING_HEADER);
    assert_eq!(lines[1], format!("{},1000,0.250000", SortAlgorithm::Quick.name()));
    assert_eq!(lines[2], format!("{},1000,1.500000", SortAlgorithm::Radix.name()));
}

#[test]
fn test_results_overwrite_previous_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sorting_results.csv");

    write_sort_results(&path, &vec![sort_report(SortAlgorithm::Heap, 10, 1.0); 5]).unwrap();
    write_sort_results(&path, &[sort_report(SortAlgorithm::Heap, 10, 1.0)]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
}

#[test]
fn test_empty_results_write_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("operations_results.csv");

    write_operation_results(&path, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", OPERATIONS_HEADER));
}

// =============================================================================
// Console Table Tests
// =============================================================================

#[test]
fn test_operation_table() {
    let table = format_operation_table(&[operation_report("Ordered (BTreeMap)", 10_000)]);

    assert!(table.contains("OPERATION BENCHMARK RESULTS"));
    assert!(table.contains("Ordered (BTreeMap)"));
    assert!(table.contains("10000"));
    assert!(table.contains("500.00"));
    assert!(table.contains("3.00"));
}

#[test]
fn test_sort_table() {
    let table = format_sort_table(&[sort_report(SortAlgorithm::Merge, 100, 0.1234)]);

    assert!(table.contains("SORTING BENCHMARK RESULTS"));
    assert!(table.contains(SortAlgorithm::Merge.name()));
    assert!(table.contains("0.123"));
}

#[test]
fn test_memory_mb() {
    assert_eq!(operation_report("x", 1).memory_mb(), 3.0);
}
