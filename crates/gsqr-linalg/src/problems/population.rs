//! Polynomial trend fitted to a population series.
//!
//! Years are rescaled to `s = (t - base_year) / year_scale` before building
//! the Vandermonde-style design matrix `[1, s, s^2, ..., s^degree]`, which
//! keeps the columns of comparable magnitude.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::Result;
use crate::io::PopulationSeries;
use crate::math::{Matrix, Vector};
use crate::solver::solve_with_config;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PolynomialModel {
    pub base_year: f64,
    pub year_scale: f64,
    pub degree: usize,
}

impl Default for PolynomialModel {
    fn default() -> Self {
        Self {
            base_year: 1950.0,
            year_scale: 50.0,
            degree: 3,
        }
    }
}

impl PolynomialModel {
    /// Rescaled time coordinate of `year`.
    pub fn rescale(&self, year: f64) -> f64 {
        (year - self.base_year) / self.year_scale
    }

    /// Design matrix and observation column for `series`.
    pub fn design(&self, series: &PopulationSeries) -> Result<(Matrix<f64>, Matrix<f64>)> {
        let ncols = self.degree + 1;
        let mut data = Vec::with_capacity(series.len() * ncols);
        for &year in &series.years {
            let s = self.rescale(year);
            data.extend((0..ncols).map(|p| s.powi(p as i32)));
        }
        let a = Matrix::from_shape_vec((series.len(), ncols), data)?;
        let y = Vector::from_vec(series.values.clone()).to_column();
        Ok((a, y))
    }

    pub fn fit(&self, series: &PopulationSeries, config: &SolverConfig) -> Result<PopulationFit> {
        let (a, y) = self.design(series)?;
        let solution = solve_with_config(&a, &y, config)?;
        debug!(
            "fitted degree {} trend to {} observations, residual {:e}",
            self.degree,
            series.len(),
            solution.residual
        );
        Ok(PopulationFit {
            model: *self,
            coefficients: solution.x,
            residual: solution.residual,
        })
    }
}

/// Fitted polynomial trend.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationFit {
    pub model: PolynomialModel,
    /// Coefficients of `1, s, s^2, ...`.
    pub coefficients: Vector<f64>,
    pub residual: f64,
}

impl PopulationFit {
    /// Trend value at `year`.
    pub fn predict(&self, year: f64) -> f64 {
        let s = self.model.rescale(year);
        // Horner
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * s + c)
    }

    pub fn fitted(&self, series: &PopulationSeries) -> Vec<f64> {
        series.years.iter().map(|&t| self.predict(t)).collect()
    }
}
