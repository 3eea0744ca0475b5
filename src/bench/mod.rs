//! Benchmark Module
//!
//! Measures backends and sort algorithms.
//!
//! ## Responsibilities
//! - Weighted operation workload against one backend for a fixed duration
//! - Sweeps across every backend and dataset tier
//! - Sort algorithm timing across tiers
//! - Result files and console tables

mod report;
mod sort;
mod workload;

pub use report::{
    format_operation_table, format_sort_table, write_operation_results, write_sort_results,
    OPERATIONS_HEADER, SORTING_HEADER,
};
pub use sort::{measure_sort, run_sort_suite, run_sort_sweep, SortReport};
pub use workload::{
    run_operation_sweep, KeySpace, Operation, OperationReport, OperationWeights, WorkloadHarness,
};
