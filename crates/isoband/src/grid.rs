//! Read-only view over a rectangular grid of scalar samples.

use std::borrow::Cow;

use crate::cell::Cell;
use crate::error::{IsobandError, IsobandResult};

/// A validated `rows × cols` grid of finite samples in row-major order.
///
/// Construction rejects grids smaller than 2×2, buffers whose length does not
/// match the extents, jagged rows, and NaN/infinite samples. Once built the
/// grid is immutable, so extraction never has to re-check any of this.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<'a> {
    data: Cow<'a, [f64]>,
    rows: usize,
    cols: usize,
}

impl<'a> Grid<'a> {
    /// Borrow a flat row-major buffer.
    pub fn new(data: &'a [f64], rows: usize, cols: usize) -> IsobandResult<Self> {
        check_extents(rows, cols)?;
        if data.len() != rows * cols {
            return Err(IsobandError::InvalidGrid(format!(
                "buffer holds {} samples, expected {}x{} = {}",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        check_finite(data, cols)?;

        Ok(Self {
            data: Cow::Borrowed(data),
            rows,
            cols,
        })
    }

    /// Flatten nested rows into an owned grid.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> IsobandResult<Grid<'static>> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        check_extents(rows.len(), cols)?;

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(IsobandError::InvalidGrid(format!(
                    "jagged grid: row {} has {} columns, row 0 has {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        check_finite(&data, cols)?;

        Ok(Grid {
            rows: rows.len(),
            cols,
            data: Cow::Owned(data),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, `(rows - 1) * (cols - 1)`.
    pub fn cell_count(&self) -> usize {
        (self.rows - 1) * (self.cols - 1)
    }

    /// Sample at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row of samples.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Minimum and maximum sample.
    pub fn value_range(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// The cell whose top-left corner is `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row + 1 < self.rows && col + 1 < self.cols {
            Some(self.cell_unchecked(row, col))
        } else {
            None
        }
    }

    /// Iterate over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows - 1)
            .flat_map(move |row| (0..self.cols - 1).map(move |col| self.cell_unchecked(row, col)))
    }

    fn cell_unchecked(&self, row: usize, col: usize) -> Cell {
        let top = row * self.cols + col;
        let bottom = top + self.cols;
        Cell::new(
            row,
            col,
            [
                self.data[top],
                self.data[top + 1],
                self.data[bottom + 1],
                self.data[bottom],
            ],
        )
    }
}

fn check_extents(rows: usize, cols: usize) -> IsobandResult<()> {
    if rows < 2 || cols < 2 {
        return Err(IsobandError::InvalidGrid(format!(
            "grid must be at least 2x2, got {}x{}",
            rows, cols
        )));
    }
    Ok(())
}

fn check_finite(data: &[f64], cols: usize) -> IsobandResult<()> {
    match data.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(IsobandError::NonFiniteSample {
            row: idx / cols,
            col: idx % cols,
            value: data[idx],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_borrows_buffer() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let grid = Grid::new(&data, 2, 3).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 2), Some(6.0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(matches!(grid.data, Cow::Borrowed(_)));
    }

    #[test]
    fn test_new_rejects_small_grid() {
        let err = Grid::new(&[1.0, 2.0], 1, 2).unwrap_err();
        assert_eq!(err.code(), "InvalidGrid");

        let err = Grid::new(&[1.0, 2.0], 2, 1).unwrap_err();
        assert_eq!(err.code(), "InvalidGrid");
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = Grid::new(&[1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert!(err.to_string().contains("expected 2x2"));
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Grid::from_rows(&rows).unwrap_err();
        assert!(err.to_string().contains("jagged"));
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        let rows: Vec<Vec<f64>> = vec![];
        assert!(Grid::from_rows(&rows).is_err());
    }

    #[test]
    fn test_non_finite_sample_location() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, f64::NAN, 6.0]];
        match Grid::from_rows(&rows).unwrap_err() {
            IsobandError::NonFiniteSample { row, col, value } => {
                assert_eq!((row, col), (1, 1));
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cell_corners_clockwise_from_top_left() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let grid = Grid::from_rows(&rows).unwrap();
        let cell = grid.cell(0, 1).unwrap();
        assert_eq!(cell.corners(), [2.0, 3.0, 6.0, 5.0]);
        assert!(grid.cell(1, 0).is_none());
    }

    #[test]
    fn test_cells_iterates_row_by_row() {
        let data: Vec<f64> = (0..12).map(f64::from).collect();
        let grid = Grid::new(&data, 3, 4).unwrap();
        let origins: Vec<_> = grid.cells().map(|c| (c.row(), c.col())).collect();
        assert_eq!(origins.len(), grid.cell_count());
        assert_eq!(origins[0], (0, 0));
        assert_eq!(origins[3], (1, 0));
        assert_eq!(origins[5], (1, 2));
    }

    #[test]
    fn test_value_range_and_row() {
        let rows = vec![vec![3.0, -1.0], vec![7.5, 0.0]];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.value_range(), (-1.0, 7.5));
        assert_eq!(grid.row(1), Some(&[7.5, 0.0][..]));
        assert_eq!(grid.row(2), None);
    }
}
