//! Level-by-level sweep shared by the tracer and the filler.

use rayon::prelude::*;

use crate::cell::{Cell, TopologyCode};
use crate::error::{validate_levels, IsobandResult};
use crate::geometry::LevelGeometry;
use crate::grid::Grid;
use crate::options::{ExtractOptions, SaddleMode};

/// Whether a saddle cell's above-threshold corners are joined through the
/// centre under `mode`.
pub(crate) fn joined_saddle(cell: &Cell, code: TopologyCode, level: f64, mode: SaddleMode) -> bool {
    match mode {
        SaddleMode::Separate => false,
        SaddleMode::AsymptoticDecider => code.is_saddle() && cell.saddle_value() > level,
    }
}

/// Classify every cell at every level and let `emit` turn it into shapes.
/// Levels come back in threshold order whether or not they ran in parallel.
pub(crate) fn sweep<'s, S, G, F>(
    grid: &Grid<'_>,
    thresholds: &[f64],
    styles: &'s [S],
    options: &ExtractOptions,
    emit: F,
) -> IsobandResult<Vec<LevelGeometry<'s, S, G>>>
where
    S: Sync,
    G: Send,
    F: Fn(&Cell, TopologyCode, f64, &mut Vec<G>) + Sync,
{
    validate_levels(thresholds, styles)?;

    let extract_level = |(&level, style): (&f64, &'s S)| {
        let mut shapes = Vec::new();
        for cell in grid.cells() {
            let code = cell.classify(level);
            emit(&cell, code, level, &mut shapes);
        }
        tracing::trace!(level, shapes = shapes.len(), "Extracted level");
        LevelGeometry {
            level,
            style,
            shapes,
        }
    };

    let levels: Vec<LevelGeometry<'s, S, G>> = if options.parallel {
        thresholds
            .par_iter()
            .zip(styles.par_iter())
            .map(extract_level)
            .collect()
    } else {
        thresholds.iter().zip(styles.iter()).map(extract_level).collect()
    };

    Ok(levels)
}
