//! Orbit observation files: header `N`, then N rows `x y`.
use std::path::Path;

use anyhow::{Context, Result};

use crate::io::table::parse_table;

/// Observed planar positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Observations {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

pub fn read_orbit<P: AsRef<Path>>(path: P) -> Result<Observations> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read orbit file: {}", path.as_ref().display()))?;
    parse_orbit(&content).with_context(|| format!("Invalid orbit file: {}", path.as_ref().display()))
}

pub fn parse_orbit(content: &str) -> Result<Observations> {
    let (x, y) = parse_table(content)?.counted_pairs()?;
    Ok(Observations { x, y })
}
