//! Scanner for the bracketed layout, e.g. `[[1, 2], [3, 4]]`.

use std::iter::Peekable;
use std::str::CharIndices;

use super::rule::ParseRule;
use crate::error::ParseError;

struct Scanner<'a> {
    chars: Peekable<CharIndices<'a>>,
    open: char,
    close: char,
    column_separator: char,
    row_separator: char,
    whitespace_columns: bool,
    whitespace_rows: bool,
    numeric: bool,
}

impl<'a> Scanner<'a> {
    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    /// Skip whitespace, returning whether anything was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while let Some((_, c)) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
            skipped = true;
        }
        skipped
    }

    fn expect(&mut self, want: char, opened_at: usize) -> Result<usize, ParseError> {
        match self.bump() {
            Some((position, c)) if c == want => Ok(position),
            Some((position, found)) => Err(ParseError::Unexpected { position, found }),
            None => Err(ParseError::Unbalanced {
                position: opened_at,
            }),
        }
    }

    fn matrix(&mut self) -> Result<Vec<Vec<String>>, ParseError> {
        self.skip_whitespace();
        let opened_at = match self.peek() {
            Some((position, _)) => self.expect(self.open, position)?,
            None => return Err(ParseError::Empty),
        };

        let mut rows = Vec::new();
        self.skip_whitespace();
        if let Some((_, c)) = self.peek() {
            if c == self.close {
                self.bump();
                return self.finish(rows);
            }
        }

        loop {
            self.skip_whitespace();
            let row = self.row(rows.len(), opened_at)?;
            rows.push(row);
            let skipped = self.skip_whitespace();
            match self.peek() {
                Some((_, c)) if c == self.close => {
                    self.bump();
                    return self.finish(rows);
                }
                Some((_, c)) if c == self.row_separator => {
                    self.bump();
                }
                Some(_) if self.whitespace_rows && skipped => {}
                Some((position, found)) => {
                    return Err(ParseError::Unexpected { position, found })
                }
                None => {
                    return Err(ParseError::Unbalanced {
                        position: opened_at,
                    })
                }
            }
        }
    }

    fn finish(&mut self, rows: Vec<Vec<String>>) -> Result<Vec<Vec<String>>, ParseError> {
        self.skip_whitespace();
        match self.bump() {
            Some((position, found)) => Err(ParseError::Unexpected { position, found }),
            None => Ok(rows),
        }
    }

    fn row(&mut self, row: usize, matrix_opened_at: usize) -> Result<Vec<String>, ParseError> {
        let opened_at = self.expect(self.open, matrix_opened_at)?;
        let mut cells = Vec::new();

        self.skip_whitespace();
        if let Some((_, c)) = self.peek() {
            if c == self.close {
                self.bump();
                return Ok(cells);
            }
        }

        loop {
            self.skip_whitespace();
            cells.push(self.cell(row, cells.len(), opened_at)?);
            let skipped = self.skip_whitespace();
            match self.peek() {
                Some((_, c)) if c == self.close => {
                    self.bump();
                    return Ok(cells);
                }
                Some((_, c)) if c == self.column_separator => {
                    self.bump();
                }
                Some(_) if self.whitespace_columns && skipped => {}
                Some((position, found)) => {
                    return Err(ParseError::Unexpected { position, found })
                }
                None => {
                    return Err(ParseError::Unbalanced {
                        position: opened_at,
                    })
                }
            }
        }
    }

    fn cell(
        &mut self,
        row: usize,
        column: usize,
        row_opened_at: usize,
    ) -> Result<String, ParseError> {
        if let Some((position, '"')) = self.peek() {
            if self.numeric {
                return Err(ParseError::QuotedNumeric { row, column });
            }
            self.bump();
            return self.quoted(position);
        }

        let mut text = String::new();
        while let Some((position, c)) = self.peek() {
            if c == self.column_separator
                || c == self.close
                || (self.whitespace_columns && c.is_whitespace())
            {
                break;
            }
            if c == self.open || c == '"' {
                return Err(ParseError::Unexpected { position, found: c });
            }
            text.push(c);
            self.bump();
        }
        if self.peek().is_none() {
            return Err(ParseError::Unbalanced {
                position: row_opened_at,
            });
        }

        Ok(text.trim_end().to_string())
    }

    /// Read a quoted cell after its opening quote. `""` is a literal quote.
    fn quoted(&mut self, opened_at: usize) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            match self.bump() {
                Some((_, '"')) => {
                    if let Some((_, '"')) = self.peek() {
                        self.bump();
                        text.push('"');
                    } else {
                        break;
                    }
                }
                Some((_, c)) => text.push(c),
                None => {
                    return Err(ParseError::Unbalanced {
                        position: opened_at,
                    })
                }
            }
        }
        Ok(text)
    }
}

pub(super) fn scan(
    input: &str,
    rule: &ParseRule,
    numeric: bool,
) -> Result<Vec<Vec<String>>, ParseError> {
    let mut scanner = Scanner {
        chars: input.char_indices().peekable(),
        open: rule.brackets.open(),
        close: rule.brackets.close(),
        column_separator: rule.column_separator.as_char(),
        row_separator: rule.row_separator.as_char(),
        whitespace_columns: rule.column_separator.is_whitespace(),
        whitespace_rows: rule.row_separator.is_whitespace(),
        numeric,
    };
    scanner.matrix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::rule::{Brackets, Separator};

    #[test]
    fn scans_default_layout() {
        let rows = scan("[[1, 2], [3,4]]", &ParseRule::default(), true).unwrap();
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn scans_whitespace_separated_columns() {
        let rule = ParseRule {
            brackets: Brackets::Round,
            column_separator: Separator::Space,
            row_separator: Separator::Semicolon,
            ..ParseRule::default()
        };
        let rows = scan("( (1  2 3) ; (4 5 6) )", &rule, true).unwrap();
        assert_eq!(rows, vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]);
    }

    #[test]
    fn scans_tab_separated_rows() {
        let rule = ParseRule {
            row_separator: Separator::Tab,
            ..ParseRule::default()
        };
        let rows = scan("[[1, 2]\t[3, 4]]", &rule, true).unwrap();
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn quoted_cells_keep_separators_and_quotes() {
        let rows = scan(r#"[["a, b", "say ""hi"""]]"#, &ParseRule::default(), false).unwrap();
        assert_eq!(rows, vec![vec!["a, b", r#"say "hi""#]]);
    }

    #[test]
    fn quoted_cells_rejected_in_numeric_grammar() {
        let err = scan(r#"[["1"]]"#, &ParseRule::default(), true).unwrap_err();
        assert_eq!(err, ParseError::QuotedNumeric { row: 0, column: 0 });
    }

    #[test]
    fn empty_brackets() {
        assert!(scan("[]", &ParseRule::default(), true).unwrap().is_empty());
        let rows = scan("[[]]", &ParseRule::default(), true).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_empty());
    }

    #[test]
    fn unbalanced_and_trailing_input() {
        assert_eq!(
            scan("[[1, 2]", &ParseRule::default(), true).unwrap_err(),
            ParseError::Unbalanced { position: 0 }
        );
        assert_eq!(
            scan("[[1, 2", &ParseRule::default(), true).unwrap_err(),
            ParseError::Unbalanced { position: 1 }
        );
        assert_eq!(
            scan("[[1]] x", &ParseRule::default(), true).unwrap_err(),
            ParseError::Unexpected {
                position: 6,
                found: 'x'
            }
        );
        assert_eq!(
            scan("   ", &ParseRule::default(), true).unwrap_err(),
            ParseError::Empty
        );
    }
}
