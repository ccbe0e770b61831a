//! QR-based solve through Gram-Schmidt and back substitution.

use log::debug;
use num_traits::Float;

use crate::config::SolverConfig;
use crate::error::{LinalgError, Result};
use crate::math::vector::dot_slices;
use crate::math::{Matrix, Vector};
use crate::orthogonalize::{gram_schmidt_with_config, to_float};

/// Solution of `A x = b` in the least-squares sense.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    pub x: Vector<T>,
    /// `|b - A x|`
    pub residual: T,
}

impl<T: Float> Solution<T> {
    /// Whether the residual is within `tol` of zero.
    pub fn is_exact(&self, tol: T) -> bool {
        self.residual <= tol
    }
}

/// Thin QR factors of a full-column-rank matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct QrFactors<T> {
    /// L x C with orthonormal columns.
    pub q: Matrix<T>,
    /// C x C upper triangular, `R = Q^T A`.
    pub r: Matrix<T>,
}

/// Factor `a` as `Q R` with `Q` from Gram-Schmidt and `R = Q^T a`.
pub fn qr<T: Float>(a: &Matrix<T>, config: &SolverConfig) -> Result<QrFactors<T>> {
    let q = gram_schmidt_with_config(a, config)?;
    let r = q.transpose().matmul(a)?;
    Ok(QrFactors { q, r })
}

/// Solve `a x = b` with default tolerances.
///
/// See [`solve_with_config`].
pub fn solve<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Solution<T>> {
    solve_with_config(a, b, &SolverConfig::default())
}

/// Solve `a x = b` through `a = Q R`.
///
/// `a` is L x C with L >= C and full column rank, `b` is an L x 1 column.
/// For a square `a` this is the unique solution; for a tall `a` it is the
/// least-squares solution and the residual measures the misfit.
pub fn solve_with_config<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    config: &SolverConfig,
) -> Result<Solution<T>> {
    let (nrows, ncols) = a.shape();
    if a.is_empty() {
        return Err(LinalgError::Empty { op: "solve" });
    }
    if b.ncols() != 1 || b.nrows() != nrows {
        return Err(LinalgError::ShapeMismatch {
            op: "solve",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    if nrows < ncols {
        // R = Q^T A would not be square.
        return Err(LinalgError::ShapeMismatch {
            op: "solve (underdetermined system)",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let QrFactors { q, r } = qr(a, config)?;
    let rhs = q.transpose().matmul(b)?;
    let x = back_substitute(&r, &rhs.column(0), config)?;
    let residual = residual_norm(a, b, &x)?;
    debug!(
        "solved {}x{} system, residual {:e}",
        nrows,
        ncols,
        residual.to_f64().unwrap_or(f64::NAN)
    );

    Ok(Solution { x, residual })
}

/// Solve the upper triangular system `r x = rhs`, last unknown first.
///
/// `x` starts zero-filled, so the inner product of row k with `x` only picks
/// up the unknowns already solved below it.
pub fn back_substitute<T: Float>(r: &Matrix<T>, rhs: &Vector<T>, config: &SolverConfig) -> Result<Vector<T>> {
    let (nrows, ncols) = r.shape();
    if nrows != ncols || rhs.len() != nrows {
        return Err(LinalgError::ShapeMismatch {
            op: "back substitution",
            lhs: r.shape(),
            rhs: (rhs.len(), 1),
        });
    }

    let tol = to_float::<T>(config.pivot_tolerance);
    let mut x = vec![T::zero(); ncols];
    for k in (0..nrows).rev() {
        let pivot = r[(k, k)];
        // Relative to column k alone.
        let threshold = tol * r.column(k).norm();
        if !pivot.is_finite() || pivot.abs() <= threshold {
            return Err(LinalgError::SingularPivot {
                index: k,
                value: pivot.to_f64().unwrap_or(f64::NAN),
            });
        }
        x[k] = (rhs[k] - dot_slices(r.row_slice(k), &x)) / pivot;
    }
    Ok(Vector::from_vec(x))
}

/// `|b - a x|` for a column `b`.
pub fn residual_norm<T: Float>(a: &Matrix<T>, b: &Matrix<T>, x: &Vector<T>) -> Result<T> {
    let fitted = a.matmul(&x.to_column())?;
    Ok(b.sub(&fitted)?.norm())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_substitution_on_upper_triangular() {
        let r = Matrix::from_rows(vec![vec![2.0, 1.0], vec![0.0, 4.0]]).unwrap();
        let rhs = Vector::from_vec(vec![5.0, 8.0]);
        let x = back_substitute(&r, &rhs, &SolverConfig::default()).unwrap();
        assert!((x[1] - 2.0).abs() < 1e-12);
        assert!((x[0] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn zero_pivot_is_reported() {
        let r = Matrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 0.0]]).unwrap();
        let rhs = Vector::from_vec(vec![1.0, 1.0]);
        match back_substitute(&r, &rhs, &SolverConfig::default()) {
            Err(LinalgError::SingularPivot { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected singular pivot, got {:?}", other),
        }
    }

    #[test]
    fn small_pivot_in_small_column_is_accepted() {
        let r = Matrix::from_rows(vec![vec![1e8, 0.0], vec![0.0, 1e-7]]).unwrap();
        let rhs = Vector::from_vec(vec![1e8, 1e-7]);
        let x = back_substitute(&r, &rhs, &SolverConfig::default()).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn row_vector_rhs_is_rejected() {
        let a = Matrix::<f64>::identity(2);
        let b = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        assert!(matches!(
            solve(&a, &b),
            Err(LinalgError::ShapeMismatch { op: "solve", .. })
        ));
    }
}
