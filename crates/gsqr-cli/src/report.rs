//! Plain-text rendering of solutions and fits.
use std::io::Write;

use anyhow::Result;

use gsqr_linalg::io::{LinearSystem, PopulationSeries};
use gsqr_linalg::problems::{ConicFit, PopulationFit};
use gsqr_linalg::Solution;

use crate::config::RunConfig;

fn fmt_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

/// `(A b)`, the unknowns `x1..xn` and the residual.
pub fn write_system_report<W: Write>(
    out: &mut W,
    system: &LinearSystem,
    solution: &Solution<f64>,
    config: &RunConfig,
) -> Result<()> {
    let augmented = system.augmented()?;
    writeln!(out, "(A b):")?;
    writeln!(out)?;
    write!(out, "{}", augmented)?;
    writeln!(out)?;
    writeln!(out, "Solution:")?;
    writeln!(out)?;
    for (idx, value) in solution.x.iter().enumerate() {
        writeln!(out, "x{} = {}", idx + 1, fmt_value(*value, config.precision))?;
    }
    writeln!(out)?;
    writeln!(out, "Residual:")?;
    writeln!(out)?;
    writeln!(out, "{}", fmt_value(solution.residual, config.precision))?;
    Ok(())
}

/// Residual, observed versus fitted table, and the extrapolated value.
pub fn write_population_report<W: Write>(
    out: &mut W,
    series: &PopulationSeries,
    fit: &PopulationFit,
    config: &RunConfig,
) -> Result<()> {
    let decimals = config.fitted_decimals;
    writeln!(out, "Residual:")?;
    writeln!(out)?;
    writeln!(out, "{}", fmt_value(fit.residual, config.precision))?;
    writeln!(out)?;
    writeln!(out, "{:<8}{:>14}{:>14}", "t", "y", "fitted")?;
    for ((year, observed), fitted) in series
        .years
        .iter()
        .zip(series.values.iter())
        .zip(fit.fitted(series))
    {
        writeln!(
            out,
            "{:<8}{:>14}{:>14.*}",
            year, observed, decimals, fitted
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Prediction for {}:", config.predict_year)?;
    writeln!(out)?;
    writeln!(out, "{:.*}", decimals, fit.predict(config.predict_year))?;
    Ok(())
}

/// Conic coefficients `a..e` and the residual.
pub fn write_orbit_report<W: Write>(out: &mut W, fit: &ConicFit, config: &RunConfig) -> Result<()> {
    writeln!(out, "Solution:")?;
    for (name, value) in fit.named() {
        writeln!(out, "{} = {}", name, fmt_value(value, config.precision))?;
    }
    writeln!(out)?;
    writeln!(out, "Residual: {}", fmt_value(fit.residual, config.precision))?;
    Ok(())
}
