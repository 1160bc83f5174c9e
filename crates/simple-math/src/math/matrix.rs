use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::MatrixError;
use crate::math::algebra;
use crate::math::contents::Contents;
use crate::math::fill::RangeFill;
use crate::math::grid::Grid;
use crate::text::{self, FormatRule};

/// Shared handle to a backing store. Every matrix aliasing a store holds one.
pub type SharedGrid<T> = Arc<RwLock<Grid<T>>>;

/// Generic two-dimensional container.
///
/// A `Matrix` is a handle on a rectangular [`Grid`]. Several handles may
/// alias one grid: [`Matrix::from_store`], [`Matrix::shared_view`] and
/// [`Matrix::duplicate`] all share, so a `set` through one handle is seen
/// through the others. [`Matrix::deep_copy`] and every constructor that
/// takes element data allocate an independent grid.
///
/// `Matrix` does not implement `Clone`; pick `duplicate` or `deep_copy`
/// explicitly.
///
/// ```
/// use simple_math::math::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = a.duplicate();
/// a.set(0, 0, 9).unwrap();
/// assert_eq!(b.get(0, 0).unwrap(), 9);
/// ```
#[derive(Debug)]
pub struct Matrix<T> {
    store: SharedGrid<T>,
}

impl<T> Matrix<T> {
    /// Wrap a grid without copying it.
    pub fn from_grid(grid: Grid<T>) -> Self {
        Self {
            store: Arc::new(RwLock::new(grid)),
        }
    }

    /// Alias an existing shared store.
    pub fn from_store(store: SharedGrid<T>) -> Self {
        Self { store }
    }

    /// Build an owned matrix from nested rows; all rows must be the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        Ok(Self::from_grid(Grid::from_rows(rows)?))
    }

    /// A second handle on `matrix`'s store. Not a copy.
    pub fn shared_view(matrix: &Matrix<T>) -> Self {
        Self {
            store: Arc::clone(&matrix.store),
        }
    }

    /// Shallow duplication: the returned matrix aliases this one's store.
    ///
    /// Mutations through either handle are visible through both. Use
    /// [`Matrix::deep_copy`] for an independent matrix.
    pub fn duplicate(&self) -> Self {
        Self::shared_view(self)
    }

    pub fn store(&self) -> SharedGrid<T> {
        Arc::clone(&self.store)
    }

    pub fn shares_store_with(&self, other: &Matrix<T>) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    // Writers never leave the grid non-rectangular, so a poisoned lock still
    // guards a valid store.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Grid<T>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Grid<T>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn rows(&self) -> usize {
        self.read().nrows()
    }

    pub fn columns(&self) -> usize {
        self.read().ncols()
    }

    pub fn length(&self) -> usize {
        let (rows, columns) = self.shape();
        rows * columns
    }

    pub fn shape(&self) -> (usize, usize) {
        self.read().shape()
    }

    fn out_of_bounds(row: usize, column: usize, shape: (usize, usize)) -> MatrixError {
        MatrixError::OutOfBounds {
            row,
            column,
            rows: shape.0,
            columns: shape.1,
        }
    }

    pub fn set(&self, row: usize, column: usize, value: T) -> Result<(), MatrixError> {
        let mut grid = self.write();
        let shape = grid.shape();
        match grid.get_mut(row, column) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Self::out_of_bounds(row, column, shape)),
        }
    }

    /// Visit every element in row-major order as `f(value, row, column)`.
    ///
    /// The store is read-locked for the whole traversal, so `f` must not
    /// touch this matrix or any handle aliasing it.
    pub fn for_each_indexed<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, usize),
    {
        let grid = self.read();
        let (rows, columns) = grid.shape();
        for r in 0..rows {
            for c in 0..columns {
                f(&grid[(r, c)], r, c);
            }
        }
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.for_each_indexed(|value, _, _| f(value));
    }

    /// Row-major in-place traversal. Same locking rule as `for_each_indexed`.
    pub fn for_each_indexed_mut<F>(&self, mut f: F)
    where
        F: FnMut(&mut T, usize, usize),
    {
        let mut grid = self.write();
        let (rows, columns) = grid.shape();
        for r in 0..rows {
            for c in 0..columns {
                f(&mut grid[(r, c)], r, c);
            }
        }
    }

    /// New, independently owned matrix with `f` applied to every element.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix::from_grid(self.read().mapv(f))
    }

    pub fn is_numeric(&self) -> bool
    where
        T: Contents,
    {
        algebra::is_numeric::<T>()
    }

    pub fn to_string_with(&self, rule: &FormatRule) -> String
    where
        T: fmt::Display,
    {
        text::format(self, rule)
    }
}

impl<T: Clone> Matrix<T> {
    pub fn get(&self, row: usize, column: usize) -> Result<T, MatrixError> {
        let grid = self.read();
        grid.get(row, column)
            .cloned()
            .ok_or_else(|| Self::out_of_bounds(row, column, grid.shape()))
    }

    pub fn row(&self, row: usize) -> Result<Vec<T>, MatrixError> {
        let grid = self.read();
        if row >= grid.nrows() {
            return Err(Self::out_of_bounds(row, 0, grid.shape()));
        }
        Ok(grid.row_slice(row).to_vec())
    }

    pub fn column(&self, column: usize) -> Result<Vec<T>, MatrixError> {
        let grid = self.read();
        if column >= grid.ncols() {
            return Err(Self::out_of_bounds(0, column, grid.shape()));
        }
        Ok((0..grid.nrows()).map(|r| grid[(r, column)].clone()).collect())
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        let grid = self.read();
        (0..grid.nrows())
            .map(|r| grid.row_slice(r).to_vec())
            .collect()
    }

    /// Row-major snapshot of every element.
    pub fn to_vec(&self) -> Vec<T> {
        self.read().as_slice().to_vec()
    }

    /// Independent copy: new store, element-wise clone.
    pub fn deep_copy(&self) -> Self {
        Self::from_grid(self.read().clone())
    }
}

impl<T: Clone + Send + Sync> Matrix<T> {
    /// Wrap a flat sequence as a single `1 x n` row.
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_slice_with(values, &RangeFill::default())
    }

    pub fn from_slice_with(values: &[T], fill: &RangeFill) -> Self {
        let data = fill.generate_1d(values.len(), |j| values[j].clone());
        Self::from_grid(Grid::from_row(data))
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// Allocate a `rows x columns` matrix of `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`; see [`Matrix::try_new`].
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::from_grid(Grid::from_default(rows, columns))
    }

    pub fn try_new(rows: usize, columns: usize) -> Result<Self, MatrixError> {
        Ok(Self::from_grid(Grid::try_from_default(rows, columns)?))
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.store, &other.store) {
            return true;
        }
        *self.read() == *other.read()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(&FormatRule::default()))
    }
}

impl<'a, 'b, T> BitOr<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Clone + Default + Send + Sync,
{
    type Output = Result<Matrix<T>, MatrixError>;

    /// `&top | &bottom` stacks vertically.
    fn bitor(self, rhs: &'b Matrix<T>) -> Self::Output {
        algebra::stack_vertically(self, rhs)
    }
}

impl<'a, 'b, T> BitAnd<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Clone + Default + Send + Sync,
{
    type Output = Result<Matrix<T>, MatrixError>;

    /// `&left & &right` joins horizontally.
    fn bitand(self, rhs: &'b Matrix<T>) -> Self::Output {
        algebra::join_horizontally(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_default_filled() {
        let m: Matrix<i32> = Matrix::new(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.length(), 6);
        assert_eq!(m.to_vec(), vec![0; 6]);
    }

    #[test]
    fn from_slice_is_single_row() {
        let m = Matrix::from_slice(&[4, 5, 6]);
        assert_eq!(m.shape(), (1, 3));
        assert_eq!(m.row(0).unwrap(), vec![4, 5, 6]);
    }

    #[test]
    fn from_slice_empty_is_one_by_zero() {
        let m: Matrix<u8> = Matrix::from_slice(&[]);
        assert_eq!(m.shape(), (1, 0));
        assert_eq!(m.length(), 0);
    }

    #[test]
    fn set_and_get_out_of_bounds() {
        let m: Matrix<i32> = Matrix::new(2, 2);
        assert_eq!(
            m.get(2, 0),
            Err(MatrixError::OutOfBounds {
                row: 2,
                column: 0,
                rows: 2,
                columns: 2
            })
        );
        assert!(m.set(0, 2, 1).is_err());
        assert_eq!(m.to_vec(), vec![0; 4]);
    }

    #[test]
    fn shared_view_and_from_store_alias() {
        let a: Matrix<i32> = Matrix::new(1, 1);
        let b = Matrix::shared_view(&a);
        let c = Matrix::from_store(a.store());
        c.set(0, 0, 3).unwrap();
        assert!(a.shares_store_with(&b));
        assert_eq!(a.get(0, 0).unwrap(), 3);
        assert_eq!(b.get(0, 0).unwrap(), 3);
    }

    #[test]
    fn for_each_indexed_mut_rewrites_in_place() {
        let m: Matrix<usize> = Matrix::new(2, 2);
        m.for_each_indexed_mut(|v, r, c| *v = r * 2 + c);
        assert_eq!(m.to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn map_produces_owned_matrix() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let doubled = m.map(|v| v * 2);
        assert_eq!(doubled.to_rows(), vec![vec![2, 4], vec![6, 8]]);
        m.set(0, 0, 0).unwrap();
        assert_eq!(doubled.get(0, 0).unwrap(), 2);
    }

    #[test]
    fn equality_compares_contents() {
        let a = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
        let b = Matrix::from_slice(&[1, 2]);
        assert_eq!(a, b);
        assert_eq!(a, a.duplicate());
        b.set(0, 1, 5).unwrap();
        assert_ne!(a, b);
    }
}
