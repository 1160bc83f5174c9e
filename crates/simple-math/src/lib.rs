//! simple-math: a generic two-dimensional matrix container.
//!
//! This crate provides `Matrix<T>`, a handle on a rectangular row-major
//! store, together with whole-matrix operations (linear extraction,
//! vertical stacking, horizontal joining), a compile-time numeric
//! capability tag per specialization, and a configurable text codec.
//!
//! There is no arithmetic here: the crate is about shape,
//! storage and concatenation.
pub mod config;
pub mod error;
pub mod math;
pub mod text;

pub use error::{Dimension, MatrixError, ParseError};
pub use math::algebra;
pub use math::{Contents, ContentsType, FillStrategy, Grid, Matrix, RangeFill};
pub use text::{FormatRule, ParseRule};
