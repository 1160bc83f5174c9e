//! Whole-matrix operations: capability query, linear extraction, text
//! factory and concatenation.
//!
//! Every function here is stateless. Concatenation validates shapes before
//! allocating, so a failed call leaves nothing behind, and always returns a
//! matrix with its own store.

use std::str::FromStr;

use crate::error::{Dimension, MatrixError};
use crate::math::contents::{Contents, ContentsType};
use crate::math::fill::RangeFill;
use crate::math::grid::Grid;
use crate::math::matrix::Matrix;
use crate::text::{self, ParseRule};

/// Whether `Matrix<T>` is tagged numeric.
///
/// Decided per specialization at compile time; every instance of
/// `Matrix<T>` gives the same answer.
pub fn is_numeric<T: Contents>() -> bool {
    T::CONTENTS_TYPE == ContentsType::Numeric
}

/// Flatten a single-row or single-column matrix.
///
/// A single row yields its elements in column order; otherwise column 0
/// in row order. Anything wider than one in both directions is a
/// [`MatrixError::Dimension`].
pub fn to_linear<T>(matrix: &Matrix<T>) -> Result<Vec<T>, MatrixError>
where
    T: Clone + Send + Sync,
{
    to_linear_with(matrix, &RangeFill::default())
}

pub fn to_linear_with<T>(matrix: &Matrix<T>, fill: &RangeFill) -> Result<Vec<T>, MatrixError>
where
    T: Clone + Send + Sync,
{
    let grid = matrix.read();
    let (rows, columns) = grid.shape();
    if rows != 1 && columns != 1 {
        return Err(MatrixError::Dimension { rows, columns });
    }

    let grid = &*grid;
    let values = if rows == 1 {
        fill.generate_1d(rows * columns, |i| grid[(0, i)].clone())
    } else {
        fill.generate_1d(rows * columns, |i| grid[(i, 0)].clone())
    };
    Ok(values)
}

/// Parse `text` into a new matrix, selecting the numeric grammar when
/// `Matrix<T>` is tagged numeric.
pub fn from_text<T>(input: &str, rule: &ParseRule) -> Result<Matrix<T>, MatrixError>
where
    T: Contents + FromStr,
    T::Err: std::fmt::Display,
{
    Ok(text::parse(input, rule, is_numeric::<T>())?)
}

/// Run `f` with read access to both stores. Aliased operands share one guard.
fn with_grids<T, R>(a: &Matrix<T>, b: &Matrix<T>, f: impl FnOnce(&Grid<T>, &Grid<T>) -> R) -> R {
    let first = a.read();
    if a.shares_store_with(b) {
        return f(&*first, &*first);
    }
    let second = b.read();
    f(&*first, &*second)
}

/// Stack `bottom` under `top`. Both must have the same number of columns.
pub fn stack_vertically<T>(top: &Matrix<T>, bottom: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
where
    T: Clone + Default + Send + Sync,
{
    stack_vertically_with(top, bottom, &RangeFill::default())
}

pub fn stack_vertically_with<T>(
    top: &Matrix<T>,
    bottom: &Matrix<T>,
    fill: &RangeFill,
) -> Result<Matrix<T>, MatrixError>
where
    T: Clone + Default + Send + Sync,
{
    with_grids(top, bottom, |top, bottom| {
        if top.ncols() != bottom.ncols() {
            return Err(MatrixError::DomainMismatch {
                dimension: Dimension::Columns,
                left: top.ncols(),
                right: bottom.ncols(),
            });
        }

        let split = top.nrows();
        let rows = split + bottom.nrows();
        let columns = top.ncols();
        log::debug!(
            "stacking {}x{} over {}x{}",
            split,
            columns,
            bottom.nrows(),
            columns
        );

        let mut out = Grid::from_default(rows, columns);
        fill.fill_2d(&mut out, 0..split, 0..columns, |r, c| top[(r, c)].clone());
        fill.fill_2d(&mut out, split..rows, 0..columns, |r, c| {
            bottom[(r - split, c)].clone()
        });
        Ok(Matrix::from_grid(out))
    })
}

/// Place `right` beside `left`. Both must have the same number of rows.
pub fn join_horizontally<T>(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
where
    T: Clone + Default + Send + Sync,
{
    join_horizontally_with(left, right, &RangeFill::default())
}

pub fn join_horizontally_with<T>(
    left: &Matrix<T>,
    right: &Matrix<T>,
    fill: &RangeFill,
) -> Result<Matrix<T>, MatrixError>
where
    T: Clone + Default + Send + Sync,
{
    with_grids(left, right, |left, right| {
        if left.nrows() != right.nrows() {
            return Err(MatrixError::DomainMismatch {
                dimension: Dimension::Rows,
                left: left.nrows(),
                right: right.nrows(),
            });
        }

        let rows = left.nrows();
        let split = left.ncols();
        let columns = split + right.ncols();
        log::debug!(
            "joining {}x{} beside {}x{}",
            rows,
            split,
            rows,
            right.ncols()
        );

        let mut out = Grid::from_default(rows, columns);
        fill.fill_2d(&mut out, 0..rows, 0..split, |r, c| left[(r, c)].clone());
        fill.fill_2d(&mut out, 0..rows, split..columns, |r, c| {
            right[(r, c - split)].clone()
        });
        Ok(Matrix::from_grid(out))
    })
}
