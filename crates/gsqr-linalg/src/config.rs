use serde::{Deserialize, Serialize};

/// Numeric tolerances used by orthogonalization and back substitution.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// A Gram-Schmidt column whose norm falls to or below
    /// `rank_tolerance * norm(original column)` is treated as dependent.
    pub rank_tolerance: f64,
    /// A diagonal entry of R with `|r_kk| <= pivot_tolerance * |R_k|`, where
    /// `R_k` is column k of R, is treated as a zero pivot.
    pub pivot_tolerance: f64,
}

impl SolverConfig {
    pub fn new(rank_tolerance: f64, pivot_tolerance: f64) -> Self {
        Self {
            rank_tolerance,
            pivot_tolerance,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rank_tolerance: 1e-12,
            pivot_tolerance: 1e-14,
        }
    }
}
