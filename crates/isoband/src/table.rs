//! Marching squares case tables.
//!
//! Cell layout, with rows growing downward:
//!
//! ```text
//!  p0 ---top--- p1
//!   |            |
//! left         right
//!   |            |
//!  p3 --bottom-- p2
//! ```
//!
//! Topology codes set one bit per corner above the threshold:
//! `p0 << 3 | p1 << 2 | p2 << 1 | p3`.
//!
//! Fill polygons list the clockwise walk `p0, top, p1, right, p2, bottom, p3,
//! left`, keeping only the corners above the threshold and the edges that
//! are crossed. Stroke segments are the chords of those polygons, walked in the
//! same direction, so complementary codes give reversed segments.

use crate::cell::TopologyCode;

/// A corner of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    P0,
    P1,
    P2,
    P3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::P0, Corner::P1, Corner::P2, Corner::P3];

    /// Index into `Cell::corners()`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bit contributed to the topology code.
    pub fn bit(self) -> u8 {
        8 >> self.index()
    }

    /// `(row, col)` offset from the cell's top-left sample.
    pub fn offset(self) -> (usize, usize) {
        match self {
            Corner::P0 => (0, 0),
            Corner::P1 => (0, 1),
            Corner::P2 => (1, 1),
            Corner::P3 => (1, 0),
        }
    }
}

/// An edge of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Endpoints in interpolation order, from the lower grid index to the
    /// higher one. Neighbouring cells share an edge with the same order, so
    /// they compute identical crossings.
    pub fn corners(self) -> (Corner, Corner) {
        match self {
            Edge::Top => (Corner::P0, Corner::P1),
            Edge::Right => (Corner::P1, Corner::P2),
            Edge::Bottom => (Corner::P3, Corner::P2),
            Edge::Left => (Corner::P0, Corner::P3),
        }
    }
}

/// A polygon vertex: a corner sample kept verbatim or an edge crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertex {
    Corner(Corner),
    Crossing(Edge),
}

use Corner::{P0, P1, P2, P3};
use Edge::{Bottom as B, Left as L, Right as R, Top as T};

const fn c(corner: Corner) -> Vertex {
    Vertex::Corner(corner)
}

const fn x(edge: Edge) -> Vertex {
    Vertex::Crossing(edge)
}

/// Stroke segments per topology code, as `(from, to)` crossed edges.
pub const STROKE_CASES: [&[(Edge, Edge)]; 16] = [
    &[],                 // 0
    &[(L, B)],           // 1   p3
    &[(B, R)],           // 2   p2
    &[(L, R)],           // 3   p2 p3
    &[(R, T)],           // 4   p1
    &[(R, T), (L, B)],   // 5   p1 p3, saddle
    &[(B, T)],           // 6   p1 p2
    &[(L, T)],           // 7   p1 p2 p3
    &[(T, L)],           // 8   p0
    &[(T, B)],           // 9   p0 p3
    &[(T, L), (B, R)],   // 10  p0 p2, saddle
    &[(T, R)],           // 11  p0 p2 p3
    &[(R, L)],           // 12  p0 p1
    &[(R, B)],           // 13  p0 p1 p3
    &[(B, L)],           // 14  p0 p1 p2
    &[],                 // 15
];

/// Fill polygons per topology code.
pub const FILL_CASES: [&[&[Vertex]]; 16] = [
    &[],
    &[&[x(B), c(P3), x(L)]],
    &[&[x(R), c(P2), x(B)]],
    &[&[x(R), c(P2), c(P3), x(L)]],
    &[&[x(T), c(P1), x(R)]],
    &[&[x(T), c(P1), x(R)], &[x(B), c(P3), x(L)]],
    &[&[x(T), c(P1), c(P2), x(B)]],
    &[&[x(T), c(P1), c(P2), c(P3), x(L)]],
    &[&[c(P0), x(T), x(L)]],
    &[&[c(P0), x(T), x(B), c(P3)]],
    &[&[c(P0), x(T), x(L)], &[x(R), c(P2), x(B)]],
    &[&[c(P0), x(T), x(R), c(P2), c(P3)]],
    &[&[c(P0), c(P1), x(R), x(L)]],
    &[&[c(P0), c(P1), x(R), x(B), c(P3)]],
    &[&[c(P0), c(P1), c(P2), x(B), x(L)]],
    &[&[c(P0), c(P1), c(P2), c(P3)]],
];

/// Saddle strokes when the above-threshold corners are joined through the
/// cell centre: the below-threshold corners are cut off instead.
const JOINED_STROKE_5: &[(Edge, Edge)] = &[(R, B), (L, T)];
const JOINED_STROKE_10: &[(Edge, Edge)] = &[(T, R), (B, L)];

const JOINED_FILL_5: &[&[Vertex]] = &[&[x(T), c(P1), x(R), x(B), c(P3), x(L)]];
const JOINED_FILL_10: &[&[Vertex]] = &[&[c(P0), x(T), x(R), c(P2), x(B), x(L)]];

/// Stroke case for `code`; `joined` only matters for the saddle codes.
pub fn stroke_case(code: TopologyCode, joined: bool) -> &'static [(Edge, Edge)] {
    match (code.value(), joined) {
        (5, true) => JOINED_STROKE_5,
        (10, true) => JOINED_STROKE_10,
        (v, _) => STROKE_CASES[v as usize],
    }
}

/// Fill case for `code`; `joined` only matters for the saddle codes.
pub fn fill_case(code: TopologyCode, joined: bool) -> &'static [&'static [Vertex]] {
    match (code.value(), joined) {
        (5, true) => JOINED_FILL_5,
        (10, true) => JOINED_FILL_10,
        (v, _) => FILL_CASES[v as usize],
    }
}

/// Consecutive crossing pairs of a clockwise fill walk, i.e. the chords where
/// the polygon leaves the cell boundary.
pub fn chords(polygon: &[Vertex]) -> Vec<(Edge, Edge)> {
    let n = polygon.len();
    (0..n)
        .filter_map(|i| match (polygon[i], polygon[(i + 1) % n]) {
            (Vertex::Crossing(a), Vertex::Crossing(b)) => Some((a, b)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clockwise perimeter walk restricted to above corners and crossed edges.
    fn perimeter_walk(code: u8) -> Vec<Vertex> {
        let above = |corner: Corner| code & corner.bit() != 0;
        let crossed = |edge: Edge| {
            let (a, b) = edge.corners();
            above(a) != above(b)
        };
        let walk = [
            c(P0),
            x(T),
            c(P1),
            x(R),
            c(P2),
            x(B),
            c(P3),
            x(L),
        ];
        walk.into_iter()
            .filter(|v| match *v {
                Vertex::Corner(corner) => above(corner),
                Vertex::Crossing(edge) => crossed(edge),
            })
            .collect()
    }

    #[test]
    fn test_fill_cases_follow_perimeter_walk() {
        for code in 0..16u8 {
            if code == 5 || code == 10 {
                continue;
            }
            let expected = perimeter_walk(code);
            let polygons = FILL_CASES[code as usize];
            if expected.is_empty() {
                assert!(polygons.is_empty(), "code {code}");
            } else {
                assert_eq!(polygons.len(), 1, "code {code}");
                assert_eq!(polygons[0], expected.as_slice(), "code {code}");
            }
        }
    }

    #[test]
    fn test_joined_saddles_follow_perimeter_walk() {
        let five = TopologyCode::new(5);
        let ten = TopologyCode::new(10);
        assert_eq!(fill_case(five, true)[0], perimeter_walk(5).as_slice());
        assert_eq!(fill_case(ten, true)[0], perimeter_walk(10).as_slice());
    }

    #[test]
    fn test_separate_saddles_are_corner_triangles() {
        // Each triangle is one above corner plus its two adjacent crossings.
        for code in [5u8, 10] {
            let polygons = FILL_CASES[code as usize];
            assert_eq!(polygons.len(), 2);
            for polygon in polygons {
                let corners: Vec<_> = polygon
                    .iter()
                    .filter_map(|v| match v {
                        Vertex::Corner(corner) => Some(*corner),
                        _ => None,
                    })
                    .collect();
                assert_eq!(corners.len(), 1);
                assert!(code & corners[0].bit() != 0);
                assert_eq!(polygon.len(), 3);
            }
        }
    }

    #[test]
    fn test_stroke_cases_are_fill_chords() {
        for code in 0..16u8 {
            for joined in [false, true] {
                let topology = TopologyCode::new(code);
                let derived: Vec<_> = fill_case(topology, joined)
                    .iter()
                    .flat_map(|polygon| chords(polygon))
                    .collect();
                assert_eq!(
                    stroke_case(topology, joined),
                    derived.as_slice(),
                    "code {code}, joined {joined}"
                );
            }
        }
    }

    #[test]
    fn test_complementary_codes_reverse_strokes() {
        for code in 1..15u8 {
            if code == 5 || code == 10 {
                continue;
            }
            let forward = STROKE_CASES[code as usize];
            let backward = STROKE_CASES[(15 - code) as usize];
            assert_eq!(forward.len(), 1);
            assert_eq!(forward[0], (backward[0].1, backward[0].0), "code {code}");
        }
    }

    #[test]
    fn test_stroke_edges_separate_above_from_below() {
        for code in 1..15u8 {
            for &(a, b) in STROKE_CASES[code as usize] {
                for edge in [a, b] {
                    let (from, to) = edge.corners();
                    assert_ne!(
                        code & from.bit() != 0,
                        code & to.bit() != 0,
                        "code {code} edge {edge:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_corner_bits() {
        assert_eq!(P0.bit(), 8);
        assert_eq!(P1.bit(), 4);
        assert_eq!(P2.bit(), 2);
        assert_eq!(P3.bit(), 1);
    }
}
