//! Text conversion for matrices.
//!
//! [`parse`] and [`format`] are the two entry points. Both take a rule value
//! ([`ParseRule`] / [`FormatRule`]) describing the layout, brackets and
//! separators. Parsing additionally takes a `numeric` flag that selects the
//! grammar:
//!
//! * numeric: cells are trimmed, must be non-empty and may not be quoted;
//! * generic: cells may be empty and may be double-quoted (`""` escapes a
//!   quote) to carry separators, brackets or surrounding whitespace.
//!
//! The formatter quotes cells only when the generic grammar needs it, so
//! `parse(&format(&m, &rule), &rule.into(), numeric)` gives back `m`.

mod bracketed;
mod delimited;
pub mod rule;

use std::fmt::Display;
use std::str::FromStr;

use crate::error::ParseError;
use crate::math::{Grid, Matrix};

pub use rule::{Brackets, FormatRule, Layout, ParseRule, Separator};

/// Parse `input` into a new, independently owned matrix.
pub fn parse<T>(input: &str, rule: &ParseRule, numeric: bool) -> Result<Matrix<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    log::debug!(
        "parsing {:?} text with the {} grammar",
        rule.layout,
        if numeric { "numeric" } else { "generic" }
    );
    let cells = match rule.layout {
        Layout::Bracketed => bracketed::scan(input, rule, numeric)?,
        Layout::Delimited => delimited::scan(input, rule, numeric)?,
    };

    let mut rows = Vec::with_capacity(cells.len());
    for (row, line) in cells.into_iter().enumerate() {
        let mut values = Vec::with_capacity(line.len());
        for (column, text) in line.into_iter().enumerate() {
            if numeric && text.is_empty() {
                return Err(ParseError::EmptyCell { row, column });
            }
            match text.parse::<T>() {
                Ok(value) => values.push(value),
                Err(e) => {
                    return Err(ParseError::Cell {
                        row,
                        column,
                        text,
                        reason: e.to_string(),
                    })
                }
            }
        }
        rows.push(values);
    }

    Ok(Matrix::from_grid(Grid::from_rows(rows)?))
}

/// Write `matrix` out as text.
pub fn format<T: Display>(matrix: &Matrix<T>, rule: &FormatRule) -> String {
    let grid = matrix.read();
    let rows: Vec<Vec<String>> = (0..grid.nrows())
        .map(|r| {
            grid.row_slice(r)
                .iter()
                .map(|value| quote_if_needed(value.to_string(), rule))
                .collect()
        })
        .collect();

    match rule.layout {
        Layout::Bracketed => {
            let open = rule.brackets.open();
            let close = rule.brackets.close();
            let column_joiner = joiner(rule.column_separator, rule.spacing);
            let row_joiner = joiner(rule.row_separator, rule.spacing);
            let body = rows
                .iter()
                .map(|row| format!("{}{}{}", open, row.join(column_joiner.as_str()), close))
                .collect::<Vec<_>>()
                .join(row_joiner.as_str());
            format!("{}{}{}", open, body, close)
        }
        Layout::Delimited => {
            let separator = rule.column_separator.as_char().to_string();
            rows.iter()
                .map(|row| format!("{}\n", row.join(separator.as_str())))
                .collect()
        }
    }
}

fn joiner(separator: Separator, spacing: bool) -> String {
    if spacing && !separator.is_whitespace() {
        format!("{} ", separator.as_char())
    } else {
        separator.as_char().to_string()
    }
}

fn quote_if_needed(cell: String, rule: &FormatRule) -> String {
    let column_separator = rule.column_separator.as_char();
    let needs_quotes = cell.is_empty()
        || cell.starts_with(char::is_whitespace)
        || cell.ends_with(char::is_whitespace)
        || cell.chars().any(|c| {
            c == '"'
                || c == '\n'
                || c == '\r'
                || c == column_separator
                || c == rule.row_separator.as_char()
                || c == rule.brackets.open()
                || c == rule.brackets.close()
                || (rule.column_separator.is_whitespace() && c.is_whitespace())
        });
    if needs_quotes {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell
    }
}
