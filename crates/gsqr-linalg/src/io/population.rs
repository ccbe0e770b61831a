//! Population series files: header `N`, then N rows `year value`.
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::table::parse_table;

/// Observed population values by year.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationSeries {
    pub years: Vec<f64>,
    pub values: Vec<f64>,
}

impl PopulationSeries {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

pub fn read_population<P: AsRef<Path>>(path: P) -> Result<PopulationSeries> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read population file: {}", path.as_ref().display()))?;
    parse_population(&content)
        .with_context(|| format!("Invalid population file: {}", path.as_ref().display()))
}

pub fn parse_population(content: &str) -> Result<PopulationSeries> {
    let (years, values) = parse_table(content)?.counted_pairs()?;
    Ok(PopulationSeries { years, values })
}
