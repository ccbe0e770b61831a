//! Conic section `a x^2 + b xy + c y^2 + d x + e y = -1` fitted to orbit
//! observations.
use log::debug;

use crate::config::SolverConfig;
use crate::error::Result;
use crate::io::Observations;
use crate::math::Matrix;
use crate::solver::solve_with_config;

pub static CONIC_TERMS: [&str; 5] = ["a", "b", "c", "d", "e"];

/// Design matrix with columns `x^2, xy, y^2, x, y` and a right-hand side of
/// `-1` for every observation.
pub fn conic_design(obs: &Observations) -> Result<(Matrix<f64>, Matrix<f64>)> {
    let mut data = Vec::with_capacity(obs.len() * CONIC_TERMS.len());
    for (&x, &y) in obs.x.iter().zip(obs.y.iter()) {
        data.extend_from_slice(&[x * x, x * y, y * y, x, y]);
    }
    let a = Matrix::from_shape_vec((obs.len(), CONIC_TERMS.len()), data)?;
    let b = Matrix::from_shape_vec((obs.len(), 1), vec![-1.0; obs.len()])?;
    Ok((a, b))
}

pub fn fit_conic(obs: &Observations, config: &SolverConfig) -> Result<ConicFit> {
    let (a, b) = conic_design(obs)?;
    let solution = solve_with_config(&a, &b, config)?;
    debug!(
        "fitted conic to {} observations, residual {:e}",
        obs.len(),
        solution.residual
    );
    let x = solution.x;
    Ok(ConicFit {
        coefficients: [x[0], x[1], x[2], x[3], x[4]],
        residual: solution.residual,
    })
}

/// Coefficients `a..e` of the fitted conic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicFit {
    pub coefficients: [f64; 5],
    pub residual: f64,
}

impl ConicFit {
    /// Coefficients paired with their names.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        CONIC_TERMS.iter().copied().zip(self.coefficients.iter().copied())
    }

    /// Left-hand side plus one at `(x, y)`; zero on the curve.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let [a, b, c, d, e] = self.coefficients;
        a * x * x + b * x * y + c * y * y + d * x + e * y + 1.0
    }
}
