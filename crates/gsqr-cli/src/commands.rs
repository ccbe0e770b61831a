//! One handler per problem kind: read the input file, solve, render.
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use gsqr_linalg::io::{read_orbit, read_population, read_system};
use gsqr_linalg::problems::{fit_conic, solve_system};

use crate::config::RunConfig;
use crate::report;

pub fn run_system<W: Write>(path: &Path, config: &RunConfig, out: &mut W) -> Result<()> {
    let system = read_system(path)?;
    let (rows, cols) = system.a.shape();
    info!("[gsqr::system] Solving {}x{} system from {:?}", rows, cols, path);

    let solution = solve_system(&system, &config.solver)
        .with_context(|| format!("Failed to solve system from {}", path.display()))?;
    report::write_system_report(out, &system, &solution, config)
}

pub fn run_population<W: Write>(path: &Path, config: &RunConfig, out: &mut W) -> Result<()> {
    let series = read_population(path)?;
    info!(
        "[gsqr::population] Fitting degree {} trend to {} observations from {:?}",
        config.population.degree,
        series.len(),
        path
    );

    let fit = config
        .population
        .fit(&series, &config.solver)
        .with_context(|| format!("Failed to fit population trend from {}", path.display()))?;
    report::write_population_report(out, &series, &fit, config)
}

pub fn run_orbit<W: Write>(path: &Path, config: &RunConfig, out: &mut W) -> Result<()> {
    let obs = read_orbit(path)?;
    info!(
        "[gsqr::orbit] Fitting conic to {} observations from {:?}",
        obs.len(),
        path
    );

    let fit = fit_conic(&obs, &config.solver)
        .with_context(|| format!("Failed to fit orbit from {}", path.display()))?;
    report::write_orbit_report(out, &fit, config)
}
