//! gsqr-linalg: dense least squares through Gram-Schmidt QR.
//!
//! The numeric core lives in [`math`], [`orthogonalize`] and [`solver`]:
//! vector and matrix value types, classical Gram-Schmidt, and a solve that
//! forms `R = Q^T A`, back-substitutes `R x = Q^T b` and reports the residual
//! `|b - A x|`. Linear dependence and zero pivots are reported as errors
//! instead of propagating non-finite values.
//!
//! [`io`] and [`problems`] turn the supported text tables (augmented linear
//! systems, population series, orbit observations) into `(A, b)` pairs.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod orthogonalize;
pub mod problems;
pub mod solver;

pub use config::SolverConfig;
pub use error::{LinalgError, Result};
pub use math::{dimensions, Dimensions, Matrix, Vector};
pub use orthogonalize::{gram_schmidt, gram_schmidt_with_config};
pub use solver::{back_substitute, qr, residual_norm, solve, solve_with_config, QrFactors, Solution};
