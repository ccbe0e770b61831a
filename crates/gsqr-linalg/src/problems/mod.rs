//! Least-squares problems built from the input tables.
pub mod orbit;
pub mod population;
pub mod system;

pub use orbit::{conic_design, fit_conic, ConicFit};
pub use population::{PolynomialModel, PopulationFit};
pub use system::solve_system;
