use crate::config::SolverConfig;
use crate::error::Result;
use crate::io::LinearSystem;
use crate::solver::{solve_with_config, Solution};

/// Solve a system read from an augmented system file.
pub fn solve_system(system: &LinearSystem, config: &SolverConfig) -> Result<Solution<f64>> {
    solve_with_config(&system.a, &system.b, config)
}
