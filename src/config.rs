//! Configuration for RosterDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::bench::OperationWeights;

/// Main configuration for a RosterDB run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Data Configuration
    // -------------------------------------------------------------------------
    /// Flat export every backend is loaded from
    pub data_path: PathBuf,

    /// Directory for benchmark result files
    /// Internal structure:
    ///   {results_dir}/
    ///     ├── operations_benchmark.csv
    ///     ├── sorting_benchmark.csv
    ///     └── sorted_output.csv    (sort-rating default output)
    pub results_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Workload Configuration
    // -------------------------------------------------------------------------
    /// Wall-clock budget for each backend/size combination
    pub operation_duration: Duration,

    /// Record-count tiers swept by the operations and sorting benchmarks
    pub dataset_sizes: Vec<usize>,

    /// Relative weights of the three domain operations
    pub weights: OperationWeights,

    /// Seed for the workload RNG (None = seeded from OS entropy)
    pub seed: Option<u64>,

    // -------------------------------------------------------------------------
    // Sorting Configuration
    // -------------------------------------------------------------------------
    /// Quadratic algorithms are skipped for tiers larger than this
    pub quadratic_sort_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/students.csv"),
            results_dir: PathBuf::from("results"),
            operation_duration: Duration::from_secs(10),
            dataset_sizes: vec![100, 1_000, 10_000, 100_000],
            weights: OperationWeights::default(),
            seed: None,
            quadratic_sort_limit: 1_000,
        }
    }
}

impl Config {
    const OPERATIONS_RESULTS: &'static str = "operations_benchmark.csv";
    const SORTING_RESULTS: &'static str = "sorting_benchmark.csv";
    const SORTED_OUTPUT: &'static str = "sorted_output.csv";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Path of the operations benchmark results file
    pub fn operations_results_path(&self) -> PathBuf {
        self.results_dir.join(Self::OPERATIONS_RESULTS)
    }

    /// Path of the sorting benchmark results file
    pub fn sorting_results_path(&self) -> PathBuf {
        self.results_dir.join(Self::SORTING_RESULTS)
    }

    /// Default output path for sort-and-persist
    pub fn sorted_output_path(&self) -> PathBuf {
        self.results_dir.join(Self::SORTED_OUTPUT)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the flat export to load records from
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    /// Set the directory for result files
    pub fn results_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.results_dir = path.into();
        self
    }

    /// Set the per-run wall-clock budget
    pub fn operation_duration(mut self, duration: Duration) -> Self {
        self.config.operation_duration = duration;
        self
    }

    /// Set the record-count tiers
    pub fn dataset_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.config.dataset_sizes = sizes;
        self
    }

    /// Set the operation weights
    pub fn weights(mut self, weights: OperationWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Set a fixed RNG seed
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the size above which quadratic sorts are skipped
    pub fn quadratic_sort_limit(mut self, limit: usize) -> Self {
        self.config.quadratic_sort_limit = limit;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
