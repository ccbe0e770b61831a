//! Augmented linear system files.
//!
//! Header `L C`, then L rows holding the C coefficients of one equation
//! followed by its right-hand side.
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::io::table::{parse_table, NumericTable};
use crate::math::Matrix;

/// Coefficient matrix and right-hand-side column read from a system file.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    pub a: Matrix<f64>,
    pub b: Matrix<f64>,
}

impl LinearSystem {
    /// `(A b)` side by side.
    pub fn augmented(&self) -> crate::error::Result<Matrix<f64>> {
        self.a.augment(&self.b)
    }
}

pub fn read_system<P: AsRef<Path>>(path: P) -> Result<LinearSystem> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read system file: {}", path.as_ref().display()))?;
    parse_system(&content)
        .with_context(|| format!("Invalid system file: {}", path.as_ref().display()))
}

pub fn parse_system(content: &str) -> Result<LinearSystem> {
    let table = parse_table(content)?;
    system_from_table(&table)
}

fn system_from_table(table: &NumericTable) -> Result<LinearSystem> {
    if table.header.len() != 2 {
        bail!(
            "Header must hold the row and column counts, found {} fields",
            table.header.len()
        );
    }
    let rows = table.header_count(0)?;
    let cols = table.header_count(1)?;

    let width = match table.width() {
        Some(w) if w >= 2 => w,
        Some(w) => bail!("Each row needs at least one coefficient and a right-hand side, found {} fields", w),
        None => bail!("System has no equations"),
    };
    if table.rows.len() != rows {
        bail!("Header declares {} rows but {} were found", rows, table.rows.len());
    }
    let n_coeffs = width - 1;
    if cols != n_coeffs && cols != width {
        bail!(
            "Header declares {} columns but rows hold {} coefficients plus a right-hand side",
            cols,
            n_coeffs
        );
    }

    let mut coeffs = Vec::with_capacity(rows * n_coeffs);
    let mut rhs = Vec::with_capacity(rows);
    for row in &table.rows {
        coeffs.extend_from_slice(&row[..n_coeffs]);
        rhs.push(row[n_coeffs]);
    }

    Ok(LinearSystem {
        a: Matrix::from_shape_vec((rows, n_coeffs), coeffs)?,
        b: Matrix::from_shape_vec((rows, 1), rhs)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_coefficients_from_rhs() {
        let sys = parse_system("2 2\n1 1 4\n1 -1 0\n").unwrap();
        assert_eq!(sys.a.shape(), (2, 2));
        assert_eq!(sys.b.shape(), (2, 1));
        assert_eq!(sys.a.row_slice(1), &[1.0, -1.0]);
        assert_eq!(sys.b.as_slice(), &[4.0, 0.0]);
    }

    #[test]
    fn augmented_header_width_is_accepted() {
        assert!(parse_system("2 3\n1 0 3\n0 1 5\n").is_ok());
    }
}
