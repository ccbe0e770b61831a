//! Run configuration loaded from JSON.
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use gsqr_linalg::problems::PolynomialModel;
use gsqr_linalg::SolverConfig;

/// Settings shared by every subcommand and the interactive menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub solver: SolverConfig,
    pub population: PolynomialModel,
    /// Year for which the population trend is extrapolated.
    pub predict_year: f64,
    /// Decimals used for fitted and predicted population values.
    pub fitted_decimals: usize,
    /// Decimals for solution components and residuals; full precision when
    /// unset.
    pub precision: Option<usize>,
    pub samples: SampleFiles,
}

/// Bundled inputs offered by the interactive menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SampleFiles {
    pub system: PathBuf,
    pub population: PathBuf,
    pub orbit: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self {
            system: PathBuf::from("data/system.txt"),
            population: PathBuf::from("data/population.txt"),
            orbit: PathBuf::from("data/orbit.txt"),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            population: PolynomialModel::default(),
            predict_year: 2010.0,
            fitted_decimals: 3,
            precision: None,
            samples: SampleFiles::default(),
        }
    }
}

impl RunConfig {
    /// Reject settings the solver cannot work with.
    pub fn validate(&self) -> Result<()> {
        let tolerances = [self.solver.rank_tolerance, self.solver.pivot_tolerance];
        if tolerances.iter().any(|t| t.is_nan() || *t < 0.0) {
            bail!("Solver tolerances must be non-negative numbers");
        }
        if self.population.year_scale == 0.0 || !self.population.year_scale.is_finite() {
            bail!("population.year_scale must be a finite, non-zero number");
        }
        Ok(())
    }
}

/// Load a run configuration from a JSON file. Missing fields take their
/// defaults.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RunConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    Ok(config)
}
