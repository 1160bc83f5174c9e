//! The matrix container and its companion algebra.
//!
//! `Grid` is the rectangular backing store, `Matrix` a shared handle on
//! one, and `algebra` the stateless whole-matrix operations. `RangeFill`
//! does the bulk element copies and `Contents` tags each specialization
//! as generic or numeric.
pub mod algebra;
pub mod contents;
pub mod fill;
pub mod grid;
pub mod matrix;

pub use contents::{Contents, ContentsType};
pub use fill::{FillStrategy, RangeFill};
pub use grid::{Grid, ShapeError};
pub use matrix::{Matrix, SharedGrid};
