use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use num_traits::{Float, Zero};

use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;

/// Fixed-length sequence of reals.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn mapv<U, F>(&self, f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(f).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    fn check_len(&self, other: &Vector<T>, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::ShapeMismatch {
                op,
                lhs: (1, self.len()),
                rhs: (1, other.len()),
            });
        }
        Ok(())
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T: Float> Vector<T> {
    /// Sum of pairwise products. Fails when the lengths differ.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_len(other, "inner product")?;
        Ok(dot_slices(self.as_slice(), other.as_slice()))
    }

    /// Euclidean length. Zero only for the all-zero vector.
    pub fn norm(&self) -> T {
        dot_slices(self.as_slice(), self.as_slice()).sqrt()
    }

    pub fn sub(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.check_len(other, "subtraction")?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| a - b)
            .collect())
    }

    pub fn scale(&self, factor: T) -> Vector<T> {
        self.mapv(|&v| v * factor)
    }

    /// N x 1 matrix holding the same entries.
    pub fn to_column(&self) -> Matrix<T> {
        Matrix::from_column(self)
    }

    /// 1 x N matrix holding the same entries.
    pub fn to_row(&self) -> Matrix<T> {
        Matrix::from_row(self)
    }
}

/// Inner product over raw slices of equal length.
pub(crate) fn dot_slices<T: Float>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, value)?,
                None => write!(f, "{}", value)?,
            }
        }
        write!(f, "]")
    }
}
