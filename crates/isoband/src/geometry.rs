//! Geometry primitives emitted by the extraction passes.
//!
//! All coordinates are grid-fractional: an integer cell index plus an
//! interpolation fraction along one axis. The caller maps them to pixels.

use serde::Serialize;

/// A point in grid-fractional space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// The same segment walked the other way.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

/// A simple closed polygon. The closing edge from the last vertex back to the
/// first is implicit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Shoelace area. Positive when the vertices run clockwise with `y`
    /// growing downward (counter-clockwise in a y-up frame).
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// A contour line assembled from segments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    /// Total length, including the closing edge of a ring.
    pub fn length(&self) -> f64 {
        let open: f64 = self.points.windows(2).map(|w| w[0].distance(&w[1])).sum();
        match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) => open + last.distance(first),
            _ => open,
        }
    }
}

/// Geometry extracted for one threshold, paired with its style token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelGeometry<'s, S, G> {
    pub level: f64,
    pub style: &'s S,
    pub shapes: Vec<G>,
}

impl<'s, S, G> LevelGeometry<'s, S, G> {
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// `(style, shape)` pairs for this level.
    pub fn iter_styled(&self) -> impl Iterator<Item = (&'s S, &G)> + '_ {
        let style = self.style;
        self.shapes.iter().map(move |shape| (style, shape))
    }
}
