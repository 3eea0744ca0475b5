//! RosterDB CLI
//!
//! Runs the benchmark sweeps or a single operation against one backend.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rosterdb::bench::{self, OperationWeights};
use rosterdb::{codec, dataset, BackendKind, Config, SortAlgorithm, StudentStore};
use tracing_subscriber::{fmt, EnvFilter};

/// RosterDB
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(about = "In-memory student store with pluggable backends and benchmarks")]
#[command(version)]
struct Args {
    /// Flat file to load records from
    #[arg(short, long, global = true, default_value = "data/students.csv")]
    data: PathBuf,

    /// Directory for result files
    #[arg(short, long, global = true, default_value = "results")]
    results_dir: PathBuf,

    /// Backend used by the single-operation modes (linear, keyed, ordered, indexed)
    #[arg(short, long, global = true, default_value = "linear")]
    backend: BackendKind,

    /// Seconds per backend/size combination in the operations benchmark
    #[arg(long, global = true, default_value = "10", value_parser = parse_duration)]
    duration: Duration,

    /// Dataset tiers, comma-separated
    #[arg(long, global = true, value_delimiter = ',', default_value = "100,1000,10000,100000")]
    sizes: Vec<usize>,

    /// Operation weights change-group,get-group,get-surname
    #[arg(long, global = true, default_value = "5,10,100", value_parser = parse_weights)]
    weights: OperationWeights,

    /// RNG seed for the workload mix
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the operations benchmark, then the sorting benchmark (default)
    Benchmark,

    /// Run the weighted operations benchmark across backends and tiers
    Operations,

    /// Time every sort algorithm across tiers
    Sorting,

    /// Change a student's group by phone number
    ChangeGroup {
        /// Phone number of the student
        phone: String,

        /// New group (e.g. KNT-21)
        group: String,
    },

    /// List the students of a group, sorted by surname and name
    GetGroup {
        /// Group to list
        group: String,
    },

    /// List the groups where students with a surname study
    GetSurname {
        /// Surname to look up
        surname: String,
    },

    /// Sort all students by rating and save them
    SortRating {
        /// Output file (default: <results-dir>/sorted_output.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Algorithm: std, bubble, insertion, selection, merge, quick, heap, radix
        #[arg(short, long, default_value = "quick")]
        algorithm: SortAlgorithm,

        /// Highest rating first
        #[arg(long)]
        descending: bool,
    },

    /// Write a synthetic dataset
    Generate {
        /// Number of records
        count: usize,

        /// Output file (default: the --data path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rosterdb=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let config = Config::builder()
        .data_path(&args.data)
        .results_dir(&args.results_dir)
        .operation_duration(args.duration)
        .dataset_sizes(args.sizes.clone())
        .weights(args.weights)
        .seed(args.seed)
        .build();

    let result = match args.command.unwrap_or(Commands::Benchmark) {
        Commands::Benchmark => run_operations(&config).and_then(|_| run_sorting(&config)),
        Commands::Operations => run_operations(&config),
        Commands::Sorting => run_sorting(&config),
        Commands::ChangeGroup { phone, group } => {
            with_store(&config, args.backend, |store| {
                if store.change_group_by_phone(&phone, &group) {
                    println!("Changed group to '{}' for phone: {}", group, phone);
                } else {
                    println!("Phone not found: {}", phone);
                }
            })
        }
        Commands::GetGroup { group } => with_store(&config, args.backend, |store| {
            let students = store.get_students_by_group_sorted(&group);
            println!("Group '{}': {} students", group, students.len());
            for student in &students {
                println!("  {} (rating: {})", student.full_name(), student.rating);
            }
        }),
        Commands::GetSurname { surname } => with_store(&config, args.backend, |store| {
            let groups = store.get_groups_by_surname(&surname);
            println!("Surname '{}' found in {} groups:", surname, groups.len());
            for group in &groups {
                println!("  {}", group);
            }
        }),
        Commands::SortRating {
            output,
            algorithm,
            descending,
        } => {
            let output = output.unwrap_or_else(|| config.sorted_output_path());
            ensure_parent(&output).and_then(|_| {
                with_store(&config, args.backend, |store| {
                    if store.sort_by_rating_and_persist(&output, algorithm.sort_fn(), !descending) {
                        println!(
                            "Sorted {} students by rating using {}",
                            store.len(),
                            algorithm.name()
                        );
                        println!("Output: {}", output.display());
                    } else {
                        eprintln!("Error: Failed to save to {}", output.display());
                    }
                })
            })
        }
        Commands::Generate { count, output } => {
            let output = output.unwrap_or_else(|| config.data_path.clone());
            let students = dataset::generate(count, args.seed.unwrap_or_default());
            ensure_parent(&output)
                .and_then(|_| codec::write_file(&output, &students).map_err(|e| e.to_string()))
                .map(|_| println!("Wrote {} students to {}", students.len(), output.display()))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// Modes
// =============================================================================

fn run_operations(config: &Config) -> Result<(), String> {
    tracing::info!(
        duration_secs = config.operation_duration.as_secs_f64(),
        sizes = ?config.dataset_sizes,
        weights = ?config.weights,
        "Operations benchmark"
    );

    let students = codec::read_file(&config.data_path).map_err(|e| e.to_string())?;
    let reports = bench::run_operation_sweep(&students, config).map_err(|e| e.to_string())?;

    print!("{}", bench::format_operation_table(&reports));

    let path = config.operations_results_path();
    bench::write_operation_results(&path, &reports).map_err(|e| e.to_string())?;
    println!("Output: {}", path.display());
    Ok(())
}

fn run_sorting(config: &Config) -> Result<(), String> {
    tracing::info!(
        sizes = ?config.dataset_sizes,
        quadratic_limit = config.quadratic_sort_limit,
        "Sorting benchmark"
    );

    let students = codec::read_file(&config.data_path).map_err(|e| e.to_string())?;
    let reports = bench::run_sort_sweep(&students, config);

    print!("{}", bench::format_sort_table(&reports));

    let path = config.sorting_results_path();
    bench::write_sort_results(&path, &reports).map_err(|e| e.to_string())?;
    println!("Output: {}", path.display());
    Ok(())
}

/// Load one backend from the data file and hand it to `op`
fn with_store<F>(config: &Config, kind: BackendKind, op: F) -> Result<(), String>
where
    F: FnOnce(&mut dyn StudentStore),
{
    let mut store = kind.create();
    if !store.load(&config.data_path) {
        return Err(format!("Failed to load {}", config.data_path.display()));
    }

    op(store.as_mut());
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), String> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => fs::create_dir_all(parent).map_err(|e| e.to_string()),
        None => Ok(()),
    }
}

// =============================================================================
// Argument Parsers
// =============================================================================

fn parse_duration(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", raw))?;
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}

fn parse_weights(raw: &str) -> Result<OperationWeights, String> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    match parts.as_slice() {
        [change_group, group_query, surname_query] => Ok(OperationWeights::new(
            *change_group,
            *group_query,
            *surname_query,
        )),
        _ => Err(format!("expected three comma-separated weights, got '{}'", raw)),
    }
}
