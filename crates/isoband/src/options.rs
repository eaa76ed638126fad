use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// How grid-fractional `(row, col)` positions map onto output `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// `x` follows columns, `y` follows rows.
    #[default]
    RowMajor,
    /// `x` follows rows, `y` follows columns. Mirrors the plane, so polygon
    /// winding is reversed relative to `RowMajor`.
    Transposed,
}

impl AxisOrder {
    #[inline]
    pub fn point(self, row: f64, col: f64) -> Point {
        match self {
            AxisOrder::RowMajor => Point::new(col, row),
            AxisOrder::Transposed => Point::new(row, col),
        }
    }
}

/// Resolution of the two saddle codes (5 and 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaddleMode {
    /// Always cut off each above-threshold corner on its own, in both the
    /// tracer and the filler. Older marching squares tracers that cut the
    /// below-threshold corners for codes 5 and 10 give different saddle
    /// segments; `AsymptoticDecider` emits those when the saddle value is
    /// above the threshold.
    #[default]
    Separate,
    /// Join the above-threshold corners when the bilinear saddle value is
    /// above the threshold, otherwise behave like `Separate`.
    AsymptoticDecider,
}

/// Options shared by the tracer and the filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub axis: AxisOrder,
    pub saddle: SaddleMode,
    /// Extract levels on the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

impl ExtractOptions {
    pub fn with_axis(mut self, axis: AxisOrder) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_saddle(mut self, saddle: SaddleMode) -> Self {
        self.saddle = saddle;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
