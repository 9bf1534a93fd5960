#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Reading puzzle files into boards.

/// The puzzle text format parser.
pub mod parse;
