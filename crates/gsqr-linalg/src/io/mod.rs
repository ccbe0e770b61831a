//! Readers for the three input table formats.
pub mod orbit;
pub mod population;
pub mod system;
pub mod table;

pub use orbit::{parse_orbit, read_orbit, Observations};
pub use population::{parse_population, read_population, PopulationSeries};
pub use system::{parse_system, read_system, LinearSystem};
pub use table::{parse_table, NumericTable};
