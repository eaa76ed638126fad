//! Assembly of per-cell contour segments into polylines.

use std::collections::HashMap;

use crate::geometry::{LineSegment, Point, Polyline};

/// Default matching tolerance, in grid units.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

type Key = (i64, i64);

fn key(p: &Point, tolerance: f64) -> Key {
    ((p.x / tolerance).floor() as i64, (p.y / tolerance).floor() as i64)
}

/// Keys of the bucket holding `p` and its eight neighbours.
fn neighbourhood(p: &Point, tolerance: f64) -> impl Iterator<Item = Key> {
    let (kx, ky) = key(p, tolerance);
    (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| (kx.saturating_add(dx), ky.saturating_add(dy))))
}

/// Connect unordered segments into continuous polylines.
///
/// Endpoints are matched when they lie within `tolerance` of each other.
/// Segments may be walked in either direction. A polyline that returns to its
/// first point is marked closed and does not repeat that point. Where more
/// than two segments meet, the first unused one wins.
pub fn join_segments(segments: &[LineSegment], tolerance: f64) -> Vec<Polyline> {
    if segments.is_empty() {
        return vec![];
    }
    let tolerance = if tolerance > 0.0 { tolerance } else { DEFAULT_TOLERANCE };
    let near = |a: &Point, b: &Point| a.distance(b) <= tolerance;

    let mut by_endpoint: HashMap<Key, Vec<usize>> = HashMap::with_capacity(segments.len() * 2);
    for (idx, seg) in segments.iter().enumerate() {
        by_endpoint.entry(key(&seg.start, tolerance)).or_default().push(idx);
        by_endpoint.entry(key(&seg.end, tolerance)).or_default().push(idx);
    }

    let mut used = vec![false; segments.len()];
    let mut polylines = Vec::new();

    // Next unused segment touching `at`, and its far endpoint. Buckets are one
    // tolerance wide, so any match sits in a neighbouring bucket.
    let next = |at: &Point, used: &[bool]| -> Option<(usize, Point)> {
        let mut candidates: Vec<usize> = neighbourhood(at, tolerance)
            .filter_map(|k| by_endpoint.get(&k))
            .flatten()
            .copied()
            .filter(|&i| !used[i])
            .collect();
        candidates.sort_unstable();
        candidates.into_iter().find_map(|i| {
            let seg = &segments[i];
            if near(&seg.start, at) {
                Some((i, seg.end))
            } else if near(&seg.end, at) {
                Some((i, seg.start))
            } else {
                None
            }
        })
    };

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let seed = &segments[start_idx];
        let mut forward = vec![seed.start, seed.end];
        while let Some((idx, far)) = next(forward.last().unwrap_or(&seed.end), &used) {
            used[idx] = true;
            forward.push(far);
        }

        let closed = forward.len() > 2
            && forward
                .last()
                .is_some_and(|last| near(last, &forward[0]));

        let points = if closed {
            forward.pop();
            forward
        } else {
            let mut backward = Vec::new();
            let mut tip = forward[0];
            while let Some((idx, far)) = next(&tip, &used) {
                used[idx] = true;
                backward.push(far);
                tip = far;
            }
            backward.reverse();
            backward.extend(forward);
            backward
        };

        polylines.push(Polyline { points, closed });
    }

    tracing::trace!(
        segments = segments.len(),
        polylines = polylines.len(),
        "Joined contour segments"
    );

    polylines
}
