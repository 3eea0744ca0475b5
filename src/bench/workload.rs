//! Workload harness
//!
//! Runs a weighted random mix of the three domain operations against one
//! backend for a fixed wall-clock budget and reports throughput and memory.
//!
//! ## Operations
//! ```text
//! ┌───┬────────────────────────────┬───────────────────────────────────────┐
//! │ # │ Operation                  │ Arguments (uniform picks)             │
//! ├───┼────────────────────────────┼───────────────────────────────────────┤
//! │ 1 │ change_group_by_phone      │ existing phone, existing group        │
//! │ 2 │ get_students_by_group_sorted│ existing group                       │
//! │ 3 │ get_groups_by_surname      │ existing surname                      │
//! └───┴────────────────────────────┴───────────────────────────────────────┘
//! ```
//!
//! The key space is extracted once per run, before the clock starts. Elapsed
//! time is measured after the loop, so the last operation's overshoot past the
//! deadline is counted.

use std::collections::BTreeSet;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::backend::{BackendKind, StudentStore};
use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::record::Student;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

// =============================================================================
// Weights
// =============================================================================

/// Relative weights of the three operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationWeights {
    pub change_group: u32,
    pub group_query: u32,
    pub surname_query: u32,
}

impl Default for OperationWeights {
    /// 5:10:100
    fn default() -> Self {
        Self::new(5, 10, 100)
    }
}

impl OperationWeights {
    pub fn new(change_group: u32, group_query: u32, surname_query: u32) -> Self {
        Self {
            change_group,
            group_query,
            surname_query,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.change_group) + u64::from(self.group_query) + u64::from(self.surname_query)
    }

    fn distribution(&self) -> Result<WeightedIndex<u32>> {
        WeightedIndex::new([self.change_group, self.group_query, self.surname_query])
            .map_err(|e| RosterError::InvalidWeights(format!("{:?}: {}", self, e)))
    }
}

/// One of the three benchmarked operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ChangeGroup,
    GroupQuery,
    SurnameQuery,
}

impl Operation {
    /// Indexed in the same order as the weights
    const ALL: [Operation; 3] = [
        Operation::ChangeGroup,
        Operation::GroupQuery,
        Operation::SurnameQuery,
    ];
}

// =============================================================================
// Key Space
// =============================================================================

/// Operation arguments drawn from the store before timing
#[derive(Debug, Clone, Default)]
pub struct KeySpace {
    /// One entry per record
    pub phones: Vec<String>,

    /// Distinct groups, ascending
    pub groups: Vec<String>,

    /// Distinct surnames, ascending
    pub surnames: Vec<String>,
}

impl KeySpace {
    pub fn extract(store: &dyn StudentStore) -> Self {
        let students = store.to_vec();

        let mut groups = BTreeSet::new();
        let mut surnames = BTreeSet::new();
        let mut phones = Vec::with_capacity(students.len());

        for student in students {
            groups.insert(student.group);
            surnames.insert(student.surname);
            phones.push(student.phone_number);
        }

        Self {
            phones,
            groups: groups.into_iter().collect(),
            surnames: surnames.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}

// =============================================================================
// Report
// =============================================================================

/// Outcome of one harness run
#[derive(Debug, Clone, PartialEq)]
pub struct OperationReport {
    pub backend_name: String,
    pub record_count: usize,
    pub change_group_count: u64,
    pub group_query_count: u64,
    pub surname_query_count: u64,
    pub total_operations: u64,
    pub elapsed_secs: f64,
    pub operations_per_sec: f64,
    pub memory_bytes: usize,
}

impl OperationReport {
    fn empty(store: &dyn StudentStore) -> Self {
        Self {
            backend_name: store.backend_name().to_string(),
            record_count: store.len(),
            change_group_count: 0,
            group_query_count: 0,
            surname_query_count: 0,
            total_operations: 0,
            elapsed_secs: 0.0,
            operations_per_sec: 0.0,
            memory_bytes: store.estimate_memory_usage(),
        }
    }

    pub fn memory_mb(&self) -> f64 {
        self.memory_bytes as f64 / BYTES_PER_MB
    }

    fn count(&mut self, operation: Operation) {
        match operation {
            Operation::ChangeGroup => self.change_group_count += 1,
            Operation::GroupQuery => self.group_query_count += 1,
            Operation::SurnameQuery => self.surname_query_count += 1,
        }
    }

    fn finish(&mut self, elapsed: Duration) {
        self.total_operations =
            self.change_group_count + self.group_query_count + self.surname_query_count;
        self.elapsed_secs = elapsed.as_secs_f64();
        self.operations_per_sec = if self.total_operations == 0 || self.elapsed_secs == 0.0 {
            0.0
        } else {
            self.total_operations as f64 / self.elapsed_secs
        };
    }
}

// =============================================================================
// Harness
// =============================================================================

/// Drives the weighted operation mix
///
/// Holds nothing between runs but its RNG.
pub struct WorkloadHarness<R = StdRng> {
    rng: R,
}

impl WorkloadHarness<StdRng> {
    /// Seeded harness, or one seeded from OS entropy when `seed` is None
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> WorkloadHarness<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run the mix against `store` until `duration` has elapsed
    ///
    /// An empty store yields a zero report whatever the weights. On a
    /// non-empty store, all-zero weights are rejected.
    pub fn run(
        &mut self,
        store: &mut dyn StudentStore,
        duration: Duration,
        weights: OperationWeights,
    ) -> Result<OperationReport> {
        let keys = KeySpace::extract(store);
        let mut report = OperationReport::empty(store);

        if keys.is_empty() {
            tracing::debug!(backend = store.backend_name(), "Empty store, skipping workload");
            return Ok(report);
        }

        let distribution = weights.distribution()?;

        let start = Instant::now();
        let deadline = start + duration;

        while Instant::now() < deadline {
            let operation = Operation::ALL[distribution.sample(&mut self.rng)];

            match operation {
                Operation::ChangeGroup => {
                    let phone = pick(&mut self.rng, &keys.phones);
                    let group = pick(&mut self.rng, &keys.groups);
                    black_box(store.change_group_by_phone(phone, group));
                }
                Operation::GroupQuery => {
                    let group = pick(&mut self.rng, &keys.groups);
                    black_box(store.get_students_by_group_sorted(group));
                }
                Operation::SurnameQuery => {
                    let surname = pick(&mut self.rng, &keys.surnames);
                    black_box(store.get_groups_by_surname(surname));
                }
            }

            report.count(operation);
        }

        report.finish(start.elapsed());
        report.memory_bytes = store.estimate_memory_usage();

        tracing::debug!(
            backend = %report.backend_name,
            records = report.record_count,
            total = report.total_operations,
            ops_per_sec = report.operations_per_sec,
            "Workload finished"
        );

        Ok(report)
    }
}

/// Uniform pick from a non-empty slice
fn pick<'a, R: Rng>(rng: &mut R, items: &'a [String]) -> &'a str {
    &items[rng.gen_range(0..items.len())]
}

// =============================================================================
// Sweep
// =============================================================================

/// Run the harness on every backend at every configured tier
///
/// Each tier takes a prefix of `students`; tiers larger than the dataset are
/// skipped. A fresh backend and key space are built for every combination.
pub fn run_operation_sweep(students: &[Student], config: &Config) -> Result<Vec<OperationReport>> {
    let mut harness = WorkloadHarness::new(config.seed);
    let mut reports = Vec::new();

    for &size in &config.dataset_sizes {
        if size > students.len() {
            tracing::warn!(size, available = students.len(), "Skipping tier larger than dataset");
            continue;
        }

        tracing::info!(size, "Running operations tier");
        for kind in BackendKind::ALL {
            let mut store = kind.create_with(students[..size].to_vec());
            let report = harness.run(store.as_mut(), config.operation_duration, config.weights)?;
            tracing::info!(
                backend = %report.backend_name,
                size,
                ops_per_sec = report.operations_per_sec,
                memory_mb = report.memory_mb(),
                "Tier complete"
            );
            reports.push(report);
        }
    }

    Ok(reports)
}
