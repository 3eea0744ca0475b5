//! # RosterDB
//!
//! An in-memory student record store with:
//! - Four interchangeable backends behind one `StudentStore` contract
//! - A composite-indexed backend with group and surname secondary indices
//! - A flat comma-delimited import/export codec
//! - A weighted-random workload harness for throughput and memory comparison
//! - A catalogue of classic sort algorithms with timing sweeps
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      rosterdb CLI                            │
//! │        (benchmark / operations / sorting / direct ops)       │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!   ┌────────────────────────┐       ┌─────────────────────┐
//!   │    Workload Harness    │       │    Sort Timing      │
//!   │  (weighted op mix)     │       │  (per algorithm)    │
//!   └───────────┬────────────┘       └──────────┬──────────┘
//!               │                               │
//!               ▼                               ▼
//!   ┌────────────────────────┐       ┌─────────────────────┐
//!   │   dyn StudentStore     │──────►│   Sort Catalogue    │
//!   │ Linear/Keyed/Ordered/  │       └─────────────────────┘
//!   │ Indexed                │
//!   └───────────┬────────────┘
//!               │ load / save
//!               ▼
//!   ┌────────────────────────┐
//!   │      Flat Codec        │
//!   │   (comma-delimited)    │
//!   └────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod codec;
pub mod sorting;
pub mod dataset;
pub mod backend;
pub mod bench;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use backend::{BackendKind, StudentStore};
pub use config::Config;
pub use error::{Result, RosterError};
pub use record::{BirthDate, Student};
pub use sorting::SortAlgorithm;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RosterDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
