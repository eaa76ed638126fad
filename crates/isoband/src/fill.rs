//! Filled iso-band extraction.
//!
//! For each threshold every cell is cut into the polygon(s) covering the part
//! of the cell above the threshold. Painting the levels in ascending order,
//! each over the previous one, yields the banded image; the filler itself
//! keeps no state between levels and does no compositing.

use crate::cell::{Cell, TopologyCode};
use crate::error::IsobandResult;
use crate::geometry::{LevelGeometry, Polygon};
use crate::grid::Grid;
use crate::options::ExtractOptions;
use crate::sweep::{joined_saddle, sweep};
use crate::table::fill_case;

/// Emits fill polygons for the region above each threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandFiller {
    options: ExtractOptions,
}

impl BandFiller {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Fill every threshold over the whole grid.
    ///
    /// Same pairing and validation rules as
    /// [`ContourTracer::trace`](crate::ContourTracer::trace). Output keeps the
    /// input threshold order; pass ascending thresholds for correct layering.
    pub fn fill<'s, S: Sync>(
        &self,
        grid: &Grid<'_>,
        thresholds: &[f64],
        styles: &'s [S],
    ) -> IsobandResult<Vec<LevelGeometry<'s, S, Polygon>>> {
        if thresholds.windows(2).any(|w| w[1] < w[0]) {
            tracing::debug!("Fill thresholds are not ascending; bands will not layer correctly");
        }

        let options = self.options;
        let levels = sweep(grid, thresholds, styles, &options, |cell, code, level, out| {
            self.emit_cell(cell, code, level, out)
        })?;

        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            num_levels = levels.len(),
            num_polygons = levels.iter().map(|l| l.shapes.len()).sum::<usize>(),
            "Filled bands"
        );

        Ok(levels)
    }

    /// Polygons for a single cell at one threshold.
    pub fn fill_cell(&self, cell: &Cell, level: f64) -> Vec<Polygon> {
        let mut out = Vec::with_capacity(2);
        self.emit_cell(cell, cell.classify(level), level, &mut out);
        out
    }

    fn emit_cell(&self, cell: &Cell, code: TopologyCode, level: f64, out: &mut Vec<Polygon>) {
        let joined = joined_saddle(cell, code, level, self.options.saddle);
        let axis = self.options.axis;
        out.extend(
            fill_case(code, joined)
                .iter()
                .map(|walk| cell.polygon(walk, level, axis)),
        );
    }
}
