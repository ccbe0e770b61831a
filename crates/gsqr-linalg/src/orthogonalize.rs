//! Classical Gram-Schmidt orthogonalization.

use log::debug;
use num_traits::{Float, NumCast};

use crate::config::SolverConfig;
use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Vector};

/// Orthonormal basis for the column space of `u`, using default tolerances.
///
/// See [`gram_schmidt_with_config`].
pub fn gram_schmidt<T: Float>(u: &Matrix<T>) -> Result<Matrix<T>> {
    gram_schmidt_with_config(u, &SolverConfig::default())
}

/// Orthonormal basis for the column space of `u`.
///
/// Column 0 of the result starts as column 0 of `u`. Every later column `i`
/// is `u_i` minus its projections `(<u_i, w_j> / |w_j|^2) w_j` onto the
/// previously built, still unnormalized columns `w_j`. Only once all columns
/// exist is each one divided by its own norm.
///
/// Fails with [`LinalgError::RankDeficient`] when a built column vanishes
/// relative to the column it came from, i.e. the columns of `u` are linearly
/// dependent.
pub fn gram_schmidt_with_config<T: Float>(u: &Matrix<T>, config: &SolverConfig) -> Result<Matrix<T>> {
    let (nrows, ncols) = u.shape();
    if nrows == 0 || ncols == 0 {
        return Err(LinalgError::Empty {
            op: "Gram-Schmidt",
        });
    }
    let tol: T = to_float(config.rank_tolerance);

    let mut basis: Vec<Vector<T>> = Vec::with_capacity(ncols);
    let mut sq_norms: Vec<T> = Vec::with_capacity(ncols);

    for i in 0..ncols {
        let u_i = u.column(i);
        let mut w_i = u_i.clone();
        for (w_j, &sq_norm_j) in basis.iter().zip(sq_norms.iter()) {
            let coeff = u_i.dot(w_j)? / sq_norm_j;
            w_i = w_i.sub(&w_j.scale(coeff))?;
        }

        let norm = w_i.norm();
        if !norm.is_finite() || norm <= tol * u_i.norm() {
            return Err(LinalgError::RankDeficient {
                column: i,
                norm: norm.to_f64().unwrap_or(f64::NAN),
            });
        }
        sq_norms.push(norm * norm);
        basis.push(w_i);
    }

    let mut w = Matrix::zeros(nrows, ncols);
    for (i, w_i) in basis.iter().enumerate() {
        w.set_column(i, &w_i.scale(w_i.norm().recip()))?;
    }
    debug!("orthogonalized {}x{} matrix", nrows, ncols);
    Ok(w)
}

pub(crate) fn to_float<T: Float>(value: f64) -> T {
    <T as NumCast>::from(value).unwrap_or_else(T::epsilon)
}
