use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{Float, Zero};

use crate::error::{LinalgError, Result};
use crate::math::vector::{dot_slices, Vector};

/// Row-major dense matrix with fixed dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Shape query shared by matrices and vectors.
///
/// A vector reports itself as a single row, `(1, len)`.
pub trait Dimensions {
    fn dimensions(&self) -> (usize, usize);
}

impl<T> Dimensions for Matrix<T> {
    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }
}

impl<T> Dimensions for Vector<T> {
    fn dimensions(&self) -> (usize, usize) {
        (1, self.len())
    }
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(LinalgError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let len: usize = rows.iter().map(Vec::len).sum();
        if rows.iter().any(|r| r.len() != ncols) {
            return Err(LinalgError::InvalidShape {
                rows: nrows,
                cols: ncols,
                len,
            });
        }
        Self::from_shape_vec((nrows, ncols), rows.into_iter().flatten().collect())
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }
}

impl<T: Clone> Matrix<T> {
    pub fn row(&self, row: usize) -> Vector<T> {
        assert!(row < self.rows, "row index out of bounds");
        Vector::from_vec(self.row_slice(row).to_vec())
    }

    pub fn column(&self, col: usize) -> Vector<T> {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    /// Overwrite column `col` with the entries of `values`.
    pub fn set_column(&mut self, col: usize, values: &Vector<T>) -> Result<()> {
        if values.len() != self.rows {
            return Err(LinalgError::ShapeMismatch {
                op: "set column",
                lhs: self.shape(),
                rhs: (values.len(), 1),
            });
        }
        assert!(col < self.cols, "column index out of bounds");
        for (row, value) in values.iter().enumerate() {
            self[(row, col)] = value.clone();
        }
        Ok(())
    }

    pub fn from_column(values: &Vector<T>) -> Self {
        Self {
            data: values.to_vec(),
            rows: values.len(),
            cols: 1,
        }
    }

    pub fn from_row(values: &Vector<T>) -> Self {
        Self {
            data: values.to_vec(),
            rows: 1,
            cols: values.len(),
        }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Matrix<T> {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Place the columns of `other` to the right of `self`.
    pub fn augment(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.rows != other.rows {
            return Err(LinalgError::ShapeMismatch {
                op: "augment",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for row in 0..self.rows {
            data.extend_from_slice(self.row_slice(row));
            data.extend_from_slice(other.row_slice(row));
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols,
        })
    }
}

impl<T: Clone + Zero> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Float> Matrix<T> {
    pub fn identity(n: usize) -> Self {
        let mut eye = Self::zeros(n, n);
        for i in 0..n {
            eye[(i, i)] = T::one();
        }
        eye
    }

    /// Matrix product. Entry (i, j) is the inner product of row i of `self`
    /// with column j of `rhs`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(LinalgError::ShapeMismatch {
                op: "matrix multiply",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let rhs_t = rhs.transpose();
        let mut data = Vec::with_capacity(self.rows * rhs.cols);
        for i in 0..self.rows {
            let lhs_row = self.row_slice(i);
            for j in 0..rhs.cols {
                data.push(dot_slices(lhs_row, rhs_t.row_slice(j)));
            }
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: rhs.cols,
        })
    }

    /// Element-wise difference of two equally shaped matrices.
    pub fn sub(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::ShapeMismatch {
                op: "subtraction",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| a - b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Frobenius norm; for a column matrix this is the Euclidean norm.
    pub fn norm(&self) -> T {
        dot_slices(&self.data, &self.data).sqrt()
    }

    /// Largest absolute entry, zero for an empty matrix.
    pub fn max_abs(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &v| if v.abs() > acc { v.abs() } else { acc })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|v| match f.precision() {
                Some(p) => format!("{:.*}", p, v),
                None => format!("{}", v),
            })
            .collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        for row in 0..self.rows {
            write!(f, "[")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cells[row * self.cols + col], width = width)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
