#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for the puzzle text format.
//!
//! A puzzle file holds one 9×9 grid, one row per line. Digits `1`–`9`
//! are clues; `0` and `.` both mean an open cell. Whitespace inside a
//! row is stripped before validation, so the pretty-printed output of
//! the solver (`534 678 912`) parses back unchanged. Blank lines and
//! lines starting with `#` are skipped:
//!
//! ```text
//! # the classic example
//! 53..7....
//! 6..195...
//! .98....6.
//! 8...6...3
//! 4..8.3..1
//! 7...2...6
//! .6....28.
//! ...419..5
//! ....8..79
//! ```
//!
//! Anything else — a row that does not reduce to exactly nine puzzle
//! characters, a stray character, too few or too many rows — is a
//! [`PuzzleError`] carrying the offending 1-based line number.

use crate::solver::cell::{Candidates, SIDE, cell_at};
use crate::solver::grid::Grid;
use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;

/// Failures while loading a puzzle. Fatal to that puzzle; the batch
/// driver reports them and moves on to the next file.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// A non-comment line did not reduce to exactly nine characters.
    #[error("line {line}: expected 9 puzzle characters, got {found} in {row:?}")]
    MalformedRow {
        /// 1-based line number in the source.
        line: usize,
        /// Characters left after stripping whitespace.
        found: usize,
        /// The offending row, whitespace already stripped.
        row: String,
    },

    /// A character other than `1`-`9`, `0`, or `.` inside a row.
    #[error("line {line}: invalid character {found:?} in puzzle row")]
    InvalidCharacter {
        /// 1-based line number in the source.
        line: usize,
        /// The offending character.
        found: char,
    },

    /// The input did not contain exactly nine puzzle rows.
    #[error("expected 9 puzzle rows, found {found}")]
    WrongRowCount {
        /// Number of non-comment, non-blank rows present.
        found: usize,
    },

    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parse a puzzle from any buffered reader.
///
/// # Errors
///
/// A [`PuzzleError`] describing the first malformed row, a wrong row
/// count, or an I/O failure.
pub fn parse_puzzle<R: BufRead>(reader: R) -> Result<Grid, PuzzleError> {
    let mut grid = Grid::empty();
    let mut rows = 0;

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let row = line.split_whitespace().collect_vec().concat();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }

        let line_number = line_index + 1;
        if row.chars().count() != SIDE {
            return Err(PuzzleError::MalformedRow {
                line: line_number,
                found: row.chars().count(),
                row,
            });
        }
        if rows >= SIDE {
            // Surplus rows; keep counting for the error message.
            rows += 1;
            continue;
        }

        for (col, c) in row.chars().enumerate() {
            grid[cell_at(rows, col)] = match c {
                '0' | '.' => Candidates::ALL,
                '1'..='9' => Candidates::of_digit(digit_of(c)),
                _ => {
                    return Err(PuzzleError::InvalidCharacter {
                        line: line_number,
                        found: c,
                    });
                }
            };
        }
        rows += 1;
    }

    if rows == SIDE {
        Ok(grid)
    } else {
        Err(PuzzleError::WrongRowCount { found: rows })
    }
}

/// Parse a puzzle from an in-memory string.
///
/// # Errors
///
/// See [`parse_puzzle`].
pub fn parse_str(input: &str) -> Result<Grid, PuzzleError> {
    parse_puzzle(io::Cursor::new(input))
}

/// Open `path` and parse the puzzle it contains.
///
/// # Errors
///
/// See [`parse_puzzle`]; failing to open the file surfaces as the `Io`
/// variant.
pub fn parse_puzzle_file(path: &Path) -> Result<Grid, PuzzleError> {
    let file = std::fs::File::open(path)?;
    parse_puzzle(io::BufReader::new(file))
}

#[allow(clippy::cast_possible_truncation)]
fn digit_of(c: char) -> u8 {
    c as u8 - b'0'
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_TEXT: &str = "\
53..7....
6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
....8..79
";

    #[test]
    fn test_parse_example() {
        let grid = parse_str(EXAMPLE_TEXT).unwrap();
        assert_eq!(grid, Grid::from_digits(&crate::solver::grid::EXAMPLE));
    }

    #[test]
    fn test_zero_and_dot_are_equivalent() {
        let zeros = EXAMPLE_TEXT.replace('.', "0");
        assert_eq!(
            parse_str(&zeros).unwrap(),
            parse_str(EXAMPLE_TEXT).unwrap()
        );
    }

    #[test]
    fn test_comments_blanks_and_spaces_are_tolerated() {
        let input = "\
# header comment

 53 ..7....

6..195...
.98....6.
8...6...3
4..8.3..1
7...2...6
.6....28.
...419..5
# trailing comment
....8..79
";
        assert_eq!(
            parse_str(input).unwrap(),
            parse_str(EXAMPLE_TEXT).unwrap()
        );
    }

    #[test]
    fn test_print_parse_roundtrip() {
        let grid = parse_str(EXAMPLE_TEXT).unwrap();
        let reparsed = parse_str(&grid.to_string()).unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let input = EXAMPLE_TEXT.replacen("53..7....", "53..7...", 1);
        match parse_str(&input) {
            Err(PuzzleError::MalformedRow { line: 1, found: 8, .. }) => {}
            other => panic!("expected a malformed row, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_character_is_rejected() {
        let input = EXAMPLE_TEXT.replacen('7', "x", 1);
        match parse_str(&input) {
            Err(PuzzleError::InvalidCharacter { line: 1, found: 'x' }) => {}
            other => panic!("expected an invalid character, got {other:?}"),
        }
    }

    #[test]
    fn test_too_few_rows_are_rejected() {
        let mut input = String::from(EXAMPLE_TEXT);
        input.truncate(input.rfind("....8..79").unwrap());
        match parse_str(&input) {
            Err(PuzzleError::WrongRowCount { found: 8 }) => {}
            other => panic!("expected a row count error, got {other:?}"),
        }
    }

    #[test]
    fn test_too_many_rows_are_rejected() {
        let input = format!("{EXAMPLE_TEXT}.........\n");
        match parse_str(&input) {
            Err(PuzzleError::WrongRowCount { found: 10 }) => {}
            other => panic!("expected a row count error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = parse_puzzle_file(Path::new("no/such/puzzle.sud")).unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)));
    }
}
