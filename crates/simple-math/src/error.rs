use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Which dimension two operands disagreed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Rows,
    Columns,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dimension::Rows => write!(f, "rows"),
            Dimension::Columns => write!(f, "columns"),
        }
    }
}

/// Errors raised by matrix access and the matrix algebra.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// Linear extraction on a matrix that is neither a single row nor a single column.
    Dimension { rows: usize, columns: usize },
    /// Concatenation operands disagree on the dimension that must match.
    DomainMismatch {
        dimension: Dimension,
        left: usize,
        right: usize,
    },
    Shape(ShapeError),
    Parse(ParseError),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::OutOfBounds {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "index ({}, {}) is out of bounds for a {}x{} matrix",
                row, column, rows, columns
            ),
            MatrixError::Dimension { rows, columns } => write!(
                f,
                "the matrix's dimension is not one: expected a single row or column, got {}x{}",
                rows, columns
            ),
            MatrixError::DomainMismatch {
                dimension,
                left,
                right,
            } => write!(
                f,
                "failed to concat the two matrices due to the mismatch of the {} numbers ({} vs {})",
                dimension, left, right
            ),
            MatrixError::Shape(err) => write!(f, "{}", err),
            MatrixError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Shape(err) => Some(err),
            MatrixError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for MatrixError {
    fn from(err: ShapeError) -> Self {
        MatrixError::Shape(err)
    }
}

impl From<ParseError> for MatrixError {
    fn from(err: ParseError) -> Self {
        MatrixError::Parse(err)
    }
}

/// Errors raised while turning text into a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input held nothing but whitespace.
    Empty,
    /// A bracket or quote was opened and never closed.
    Unbalanced { position: usize },
    /// A character that the grammar does not allow at this position.
    Unexpected { position: usize, found: char },
    /// Rows of different lengths.
    Shape(ShapeError),
    EmptyCell { row: usize, column: usize },
    /// Numeric grammar does not accept quoted cells.
    QuotedNumeric { row: usize, column: usize },
    /// The cell text could not be converted to the element type.
    Cell {
        row: usize,
        column: usize,
        text: String,
        reason: String,
    },
    Csv(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "cannot parse a matrix from empty text"),
            ParseError::Unbalanced { position } => {
                write!(f, "unbalanced bracket or quote opened at byte {}", position)
            }
            ParseError::Unexpected { position, found } => {
                write!(f, "unexpected character {:?} at byte {}", found, position)
            }
            ParseError::Shape(err) => write!(f, "{}", err),
            ParseError::EmptyCell { row, column } => {
                write!(f, "empty cell at ({}, {})", row, column)
            }
            ParseError::QuotedNumeric { row, column } => write!(
                f,
                "quoted cell at ({}, {}) is not allowed in a numeric matrix",
                row, column
            ),
            ParseError::Cell {
                row,
                column,
                text,
                reason,
            } => write!(
                f,
                "failed to parse cell ({}, {}) from {:?}: {}",
                row, column, text, reason
            ),
            ParseError::Csv(msg) => write!(f, "delimited input error: {}", msg),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for ParseError {
    fn from(err: ShapeError) -> Self {
        ParseError::Shape(err)
    }
}
