#![allow(clippy::cast_precision_loss)]

use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use sudoku_solver::puzzle::parse::parse_puzzle_file;
use sudoku_solver::solver::engine::{Outcome, SearchStats, Strategy};
use sudoku_solver::solver::grid::Grid;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version, about = "A sudoku solver")]
pub(crate) struct Cli {
    /// Puzzle files to solve, in order. Repeating a path immediately
    /// reuses the previously parsed grid instead of re-reading the file.
    pub(crate) paths: Vec<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `dir`, `completions`).
    #[clap(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub(crate) common: CommonOptions,
}

/// Enumerates the available subcommands for the sudoku solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve every `.sud` file under a directory, in path order.
    Dir {
        /// Path to the directory to scan.
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, echoing each parsed puzzle before solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable printing of performance and search statistics after each
    /// puzzle.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,

    /// Specifies the search algorithm to use.
    #[arg(long, default_value_t = Strategy::Constrained)]
    pub(crate) strategy: Strategy,

    /// Abort a solve after visiting this many search nodes. Unbounded if
    /// not set; useful as a guard against pathological inputs.
    #[arg(long)]
    pub(crate) node_limit: Option<usize>,
}

/// Dispatches the parsed arguments and returns the process exit code:
/// success only if every puzzle was solved and passed the final validity
/// check.
pub(crate) fn run(cli: Cli) -> ExitCode {
    let failures = match cli.command {
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            return ExitCode::SUCCESS;
        }
        None => {
            if cli.paths.is_empty() {
                eprintln!("No puzzle files provided. Use --help for more information.");
                return ExitCode::FAILURE;
            }
            solve_paths(&cli.paths, &cli.common)
        }
    };

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Solves a directory of puzzle files.
///
/// Walks the directory recursively, collects every `.sud` file in path
/// order, and solves them as a batch.
fn solve_dir(path: &Path, common: &CommonOptions) -> usize {
    if !path.is_dir() {
        eprintln!("Provided path is not a directory: {}", path.display());
        return 1;
    }

    let puzzles = walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.path().to_path_buf())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "sud"))
        .sorted()
        .collect_vec();

    if puzzles.is_empty() {
        eprintln!("No .sud files under: {}", path.display());
        return 1;
    }

    solve_paths(&puzzles, common)
}

/// Solves an ordered batch of puzzle files, separating successive outputs
/// with a blank line. Returns the number of puzzles that failed to load
/// or solve.
///
/// A path identical to the immediately preceding one reuses the already
/// parsed grid, so re-solving the same file (e.g. to compare strategies)
/// skips the I/O.
fn solve_paths(paths: &[PathBuf], common: &CommonOptions) -> usize {
    let mut failures = 0;
    let mut last: Option<(PathBuf, Grid)> = None;

    for (n, path) in paths.iter().enumerate() {
        if n > 0 {
            println!();
        }

        let parse_start = Instant::now();
        let cached = last
            .as_ref()
            .filter(|entry| &entry.0 == path)
            .map(|entry| entry.1.clone());
        let grid = match cached {
            Some(grid) => grid,
            None => match parse_puzzle_file(path) {
                Ok(grid) => grid,
                Err(e) => {
                    eprintln!("Failed to load {}: {e}", path.display());
                    failures += 1;
                    last = None;
                    continue;
                }
            },
        };
        let parse_time = parse_start.elapsed();

        if !solve_and_report(path, &grid, common, parse_time) {
            failures += 1;
        }
        last = Some((path.clone(), grid));
    }

    failures
}

/// Solves one parsed puzzle and reports the result: the solved grid on
/// stdout, or a diagnostic plus the original grid on failure. Returns
/// whether the puzzle counts as solved.
fn solve_and_report(
    path: &Path,
    grid: &Grid,
    common: &CommonOptions,
    parse_time: Duration,
) -> bool {
    if common.debug {
        println!("Solving: {}", path.display());
        println!("Clues: {}", grid.determined_count());
        println!("{grid}\n");
    }

    let mut engine = common.strategy.engine(common.node_limit);

    let time = Instant::now();
    let outcome = engine.solve(grid);
    let elapsed = time.elapsed();

    let solved = match &outcome {
        Outcome::Solved(solution) => {
            println!("{solution}");
            true
        }
        Outcome::Unsolvable => {
            eprintln!("Could not find a solution for {}:", path.display());
            println!("{grid}");
            false
        }
        Outcome::InvalidSolution(bad) => {
            // Unreachable with a correct propagator; make it loud.
            eprintln!(
                "Found an invalid solution for {} - this is a bug:",
                path.display()
            );
            println!("{bad}");
            false
        }
        Outcome::NodeLimitExceeded => {
            eprintln!(
                "Gave up on {} after {} search nodes",
                path.display(),
                engine.stats().nodes
            );
            false
        }
    };

    if common.stats {
        epoch::advance().unwrap();
        let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
        let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
        let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
        let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

        print_stats(
            parse_time,
            elapsed,
            grid.determined_count(),
            &engine.stats(),
            allocated_mib,
            resident_mib,
        );
    }

    solved
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of puzzle and search statistics.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    clues: usize,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Puzzle Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Clues", clues);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Nodes", s.nodes, elapsed_secs);
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Propagations", s.propagations, elapsed_secs);
    stat_line_with_rate("Contradictions", s.contradictions, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
