//! Contour line (isoline) extraction using marching squares.
//!
//! Every cell contributes independent segments; adjacent cells share
//! endpoints exactly because shared edges are interpolated identically.
//! Use [`crate::join_segments`] to stitch them into polylines.

use crate::cell::{Cell, TopologyCode};
use crate::error::IsobandResult;
use crate::geometry::{LevelGeometry, LineSegment};
use crate::grid::Grid;
use crate::options::ExtractOptions;
use crate::sweep::{joined_saddle, sweep};
use crate::table::{stroke_case, Vertex};

/// Emits stroke segments where the field crosses each threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContourTracer {
    options: ExtractOptions,
}

impl ContourTracer {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Trace every threshold over the whole grid.
    ///
    /// `thresholds[i]` is paired with `styles[i]`; the result holds one entry
    /// per threshold in the same order. Fails before tracing anything if the
    /// two slices differ in length or a threshold is not finite.
    pub fn trace<'s, S: Sync>(
        &self,
        grid: &Grid<'_>,
        thresholds: &[f64],
        styles: &'s [S],
    ) -> IsobandResult<Vec<LevelGeometry<'s, S, LineSegment>>> {
        let options = self.options;
        let levels = sweep(grid, thresholds, styles, &options, |cell, code, level, out| {
            self.emit_cell(cell, code, level, out)
        })?;

        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            num_levels = levels.len(),
            num_segments = levels.iter().map(|l| l.shapes.len()).sum::<usize>(),
            "Traced contours"
        );

        Ok(levels)
    }

    /// Segments for a single cell at one threshold.
    pub fn trace_cell(&self, cell: &Cell, level: f64) -> Vec<LineSegment> {
        let mut out = Vec::with_capacity(2);
        self.emit_cell(cell, cell.classify(level), level, &mut out);
        out
    }

    fn emit_cell(&self, cell: &Cell, code: TopologyCode, level: f64, out: &mut Vec<LineSegment>) {
        if code.is_uniform() {
            return;
        }
        let joined = joined_saddle(cell, code, level, self.options.saddle);
        let axis = self.options.axis;
        out.extend(stroke_case(code, joined).iter().map(|&(from, to)| {
            LineSegment::new(
                cell.point(Vertex::Crossing(from), level, axis),
                cell.point(Vertex::Crossing(to), level, axis),
            )
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::options::{AxisOrder, SaddleMode};

    #[test]
    fn test_trace_cell_single_corner() {
        // Only p3 (bottom-left) above: one segment from left edge to bottom.
        let cell = Cell::new(0, 0, [0.0, 0.0, 0.0, 10.0]);
        let segments = ContourTracer::default().trace_cell(&cell, 5.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, Point::new(0.0, 0.5));
        assert_eq!(segments[0].end, Point::new(0.5, 1.0));
    }

    #[test]
    fn test_trace_cell_offsets_by_cell_index() {
        let cell = Cell::new(4, 7, [0.0, 10.0, 10.0, 0.0]);
        let segments = ContourTracer::default().trace_cell(&cell, 5.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, Point::new(7.5, 5.0));
        assert_eq!(segments[0].end, Point::new(7.5, 4.0));
    }

    #[test]
    fn test_trace_cell_transposed_swaps_axes() {
        let cell = Cell::new(4, 7, [0.0, 10.0, 10.0, 0.0]);
        let tracer = ContourTracer::new(ExtractOptions::default().with_axis(AxisOrder::Transposed));
        let segments = tracer.trace_cell(&cell, 5.0);
        assert_eq!(segments[0].start, Point::new(5.0, 7.5));
        assert_eq!(segments[0].end, Point::new(4.0, 7.5));
    }

    #[test]
    fn test_saddle_separate_cuts_above_corners() {
        // p0 and p2 above: code 10.
        let cell = Cell::new(0, 0, [10.0, 0.0, 10.0, 0.0]);
        let segments = ContourTracer::default().trace_cell(&cell, 5.0);
        assert_eq!(segments.len(), 2);
        // Top crossing to left crossing, around p0.
        assert_eq!(segments[0].start, Point::new(0.5, 0.0));
        assert_eq!(segments[0].end, Point::new(0.0, 0.5));
    }

    #[test]
    fn test_saddle_decider_joins_when_centre_above() {
        // Saddle value 6.25 > 5: above corners are joined, below corners cut.
        let cell = Cell::new(0, 0, [10.0, 0.0, 10.0, 4.0]);
        assert!(cell.saddle_value() > 5.0);
        let tracer =
            ContourTracer::new(ExtractOptions::default().with_saddle(SaddleMode::AsymptoticDecider));
        let segments = tracer.trace_cell(&cell, 5.0);
        assert_eq!(segments.len(), 2);
        // First segment runs top -> right, around p1.
        assert_eq!(segments[0].start.y, 0.0);
        assert_eq!(segments[0].end.x, 1.0);
    }

    #[test]
    fn test_saddle_decider_keeps_separate_when_centre_below() {
        let cell = Cell::new(0, 0, [6.0, 0.0, 6.0, 0.0]);
        assert!(cell.saddle_value() < 5.0);
        let decider =
            ContourTracer::new(ExtractOptions::default().with_saddle(SaddleMode::AsymptoticDecider));
        assert_eq!(
            decider.trace_cell(&cell, 5.0),
            ContourTracer::default().trace_cell(&cell, 5.0)
        );
    }
}
