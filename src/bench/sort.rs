//! Sort timing
//!
//! Times every catalogue algorithm on copies of the same input.

use std::time::Instant;

use crate::config::Config;
use crate::record::{compare, Comparator, Student};
use crate::sorting::SortAlgorithm;

/// Timing of one algorithm on one input size
#[derive(Debug, Clone, PartialEq)]
pub struct SortReport {
    pub algorithm: SortAlgorithm,
    pub record_count: usize,
    pub elapsed_ms: f64,
}

/// Sort a copy of `data` with `algorithm` and time it
pub fn measure_sort(algorithm: SortAlgorithm, data: &[Student], cmp: &Comparator) -> SortReport {
    let mut copy = data.to_vec();

    let start = Instant::now();
    algorithm.sort(&mut copy, cmp);
    let elapsed = start.elapsed();

    SortReport {
        algorithm,
        record_count: data.len(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
    }
}

/// Time every algorithm on `data`
///
/// Quadratic algorithms are skipped when `data` is longer than `quadratic_limit`.
pub fn run_sort_suite(data: &[Student], cmp: &Comparator, quadratic_limit: usize) -> Vec<SortReport> {
    SortAlgorithm::ALL
        .iter()
        .filter(|algorithm| !(algorithm.is_quadratic() && data.len() > quadratic_limit))
        .map(|&algorithm| {
            tracing::debug!(algorithm = algorithm.name(), size = data.len(), "Timing sort");
            measure_sort(algorithm, data, cmp)
        })
        .collect()
}

/// Run the suite by ascending rating at every configured tier
///
/// Tiers larger than the dataset are skipped.
pub fn run_sort_sweep(students: &[Student], config: &Config) -> Vec<SortReport> {
    let mut reports = Vec::new();

    for &size in &config.dataset_sizes {
        if size > students.len() {
            tracing::warn!(size, available = students.len(), "Skipping tier larger than dataset");
            continue;
        }

        tracing::info!(size, "Running sorting tier");
        reports.extend(run_sort_suite(
            &students[..size],
            &compare::by_rating,
            config.quadratic_sort_limit,
        ));
    }

    reports
}
