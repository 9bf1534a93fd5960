//! The command-line front end: argument parsing, batch driving, result
//! reporting, statistics.

/// Argument definitions and the batch driver.
pub mod cli;
