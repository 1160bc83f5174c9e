//! Delimited layout: one row per line, read with the `csv` crate.

use super::rule::ParseRule;
use crate::error::ParseError;

pub(super) fn scan(
    input: &str,
    rule: &ParseRule,
    numeric: bool,
) -> Result<Vec<Vec<String>>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    // Numeric cells are trimmed and never quoted; generic cells keep their
    // exact text and follow csv quoting.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(rule.column_separator.as_char() as u8)
        .has_headers(false)
        .flexible(true)
        .quoting(!numeric)
        .trim(if numeric { csv::Trim::All } else { csv::Trim::None })
        .from_reader(input.as_bytes());

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| ParseError::Csv(e.to_string()))?;
        let mut cells = Vec::with_capacity(record.len());
        for (column, field) in record.iter().enumerate() {
            if numeric && field.starts_with('"') {
                return Err(ParseError::QuotedNumeric {
                    row: row_idx,
                    column,
                });
            }
            cells.push(field.to_string());
        }
        rows.push(cells);
    }
    log::trace!("read {} delimited rows", rows.len());
    Ok(rows)
}
