//! Per-cell classification and edge interpolation.

use crate::geometry::{Point, Polygon};
use crate::options::AxisOrder;
use crate::table::{Corner, Edge, Vertex};

/// Tolerance used by [`interpolate`] for degenerate edges.
pub const EPSILON: f64 = 1e-7;

/// 4-bit classification of a cell against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopologyCode(u8);

impl TopologyCode {
    /// Wrap a raw code. Only the low four bits are kept.
    pub fn new(code: u8) -> Self {
        Self(code & 0x0f)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_saddle(self) -> bool {
        self.0 == 5 || self.0 == 10
    }

    /// No crossing inside the cell (all below or all above).
    pub fn is_uniform(self) -> bool {
        self.0 == 0 || self.0 == 15
    }

    pub fn is_above(self, corner: Corner) -> bool {
        self.0 & corner.bit() != 0
    }
}

/// Classify a cell: one bit per corner strictly above `threshold`, laid out as
/// `p0 << 3 | p1 << 2 | p2 << 1 | p3`.
#[inline]
pub fn classify(p0: f64, p1: f64, p2: f64, p3: f64, threshold: f64) -> TopologyCode {
    let mark = |v: f64| u8::from(v > threshold);
    TopologyCode((mark(p0) << 3) | (mark(p1) << 2) | (mark(p2) << 1) | mark(p3))
}

/// Fraction of the way from `a` to `b` where the linear ramp between them
/// reaches `threshold`.
///
/// Near-degenerate inputs resolve in this order: threshold at `a` gives `0.0`,
/// threshold at `b` gives `1.0`, a flat edge gives `1.0`. The result is always
/// in `[0, 1]`.
#[inline]
pub fn interpolate(a: f64, b: f64, threshold: f64) -> f64 {
    if (threshold - a).abs() < EPSILON {
        return 0.0;
    }
    if (threshold - b).abs() < EPSILON {
        return 1.0;
    }
    if (a - b).abs() < EPSILON {
        return 1.0;
    }
    ((threshold - a) / (b - a)).clamp(0.0, 1.0)
}

/// One grid cell: its top-left index and corner samples `p0..p3`, clockwise
/// from the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    row: usize,
    col: usize,
    corners: [f64; 4],
}

impl Cell {
    pub fn new(row: usize, col: usize, corners: [f64; 4]) -> Self {
        Self { row, col, corners }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn corners(&self) -> [f64; 4] {
        self.corners
    }

    pub fn value(&self, corner: Corner) -> f64 {
        self.corners[corner.index()]
    }

    pub fn classify(&self, threshold: f64) -> TopologyCode {
        let [p0, p1, p2, p3] = self.corners;
        classify(p0, p1, p2, p3, threshold)
    }

    /// Value of the bilinear interpolant at its saddle point.
    ///
    /// Only meaningful for saddle codes, where `p0 + p2 - p1 - p3` cannot be
    /// zero.
    pub fn saddle_value(&self) -> f64 {
        let [p0, p1, p2, p3] = self.corners;
        let denom = p0 + p2 - p1 - p3;
        if denom.abs() < EPSILON {
            return (p0 + p1 + p2 + p3) / 4.0;
        }
        (p0 * p2 - p1 * p3) / denom
    }

    /// Grid-fractional `(row, col)` of a vertex.
    pub fn locate(&self, vertex: Vertex, threshold: f64) -> (f64, f64) {
        let (row, col) = (self.row as f64, self.col as f64);
        match vertex {
            Vertex::Corner(corner) => {
                let (dr, dc) = corner.offset();
                (row + dr as f64, col + dc as f64)
            }
            Vertex::Crossing(edge) => {
                let (from, to) = edge.corners();
                let t = interpolate(self.value(from), self.value(to), threshold);
                match edge {
                    Edge::Top => (row, col + t),
                    Edge::Bottom => (row + 1.0, col + t),
                    Edge::Left => (row + t, col),
                    Edge::Right => (row + t, col + 1.0),
                }
            }
        }
    }

    pub fn point(&self, vertex: Vertex, threshold: f64, axis: AxisOrder) -> Point {
        let (row, col) = self.locate(vertex, threshold);
        axis.point(row, col)
    }

    /// Build a polygon from a walk of vertices.
    pub fn polygon(&self, walk: &[Vertex], threshold: f64, axis: AxisOrder) -> Polygon {
        Polygon::new(
            walk.iter()
                .map(|&v| self.point(v, threshold, axis))
                .collect(),
        )
    }
}
