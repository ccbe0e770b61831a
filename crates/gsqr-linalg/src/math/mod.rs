//! Dense vector and matrix value types.
//!
//! `Vector` and `Matrix` are distinct types: a vector is turned into matrix
//! shape only through `to_column`/`to_row`. Both are generic over
//! `num_traits::Float` for the numeric operations.
pub mod matrix;
pub mod vector;

pub use matrix::{Dimensions, Matrix};
pub use vector::Vector;

/// Row and column counts; a vector reports `(1, len)`.
pub fn dimensions<D: Dimensions + ?Sized>(value: &D) -> (usize, usize) {
    value.dimensions()
}
