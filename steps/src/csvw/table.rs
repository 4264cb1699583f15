//! Minimal CSV column extraction.
//!
//! Fields are split on `,` without quote handling; a single layer of
//! surrounding double quotes is stripped from each field afterwards.

use crate::term::parse_finite;

/// A single column cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A field that parses as a finite number.
    Number(f64),
    /// Any other field.
    Text(String),
}

impl Cell {
    fn parse(field: &str) -> Self {
        let field = field.trim();
        let field = field
            .strip_prefix('"')
            .and_then(|f| f.strip_suffix('"'))
            .unwrap_or(field);
        match parse_finite(field) {
            Some(value) => Cell::Number(value),
            None => Cell::Text(field.to_owned()),
        }
    }
}

/// The cells of column `index` in every data row of `csv`.
///
/// The first line is the header and is skipped. Rows too short to have the
/// column are skipped too.
#[must_use]
pub fn column_cells(csv: &str, index: usize) -> Vec<Cell> {
    csv.trim()
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').nth(index))
        .map(Cell::parse)
        .collect()
}
