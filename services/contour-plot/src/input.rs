//! Field files: a JSON object holding the samples as nested rows.
//!
//! ```json
//! { "data": [[0.0, 1.0], [2.0, 3.0]], "minZ": 0.0, "maxZ": 3.0 }
//! ```
//!
//! Other keys (axis extents and the like) are ignored.

use std::path::Path;

use anyhow::{Context, Result};
use isoband::Grid;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFile {
    pub data: Vec<Vec<f64>>,
    pub min_z: Option<f64>,
    pub max_z: Option<f64>,
}

impl FieldFile {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Field file is not valid JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read field file {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn grid(&self) -> Result<Grid<'static>> {
        Grid::from_rows(&self.data).context("Field file does not hold a usable grid")
    }

    /// Level range from `minZ`/`maxZ`, filling a missing end from the data.
    pub fn range(&self, grid: &Grid<'_>) -> Option<[f64; 2]> {
        if self.min_z.is_none() && self.max_z.is_none() {
            return None;
        }
        let (lo, hi) = grid.value_range();
        Some([self.min_z.unwrap_or(lo), self.max_z.unwrap_or(hi)])
    }
}
