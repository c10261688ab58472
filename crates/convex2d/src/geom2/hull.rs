//! Graham-scan convex hull.
//!
//! Output convention
//! - Vertices in CCW order, starting at the pivot (lowest, then leftmost input point).
//! - No three consecutive vertices are collinear; collinear runs keep only the point
//!   farthest from the pivot.
//! - Fewer than three distinct non-collinear points yield an empty polygon.
//!
//! Code cross-refs: `types::{orientation, dist2}`, `contain::point_in_convex_polygon`

use std::cmp::Ordering;

use super::types::{approx_eq, dist2, orientation, Orientation, Vec2};

/// Convex hull of `points`, CCW from the pivot; empty if no proper hull exists.
///
/// The input is not reordered. Callers must check `len() >= 3` before treating the
/// result as a polygon.
pub fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let Some(pivot_idx) = pivot_index(points) else {
        tracing::trace!("convex_hull: empty input");
        return Vec::new();
    };
    let pivot = points[pivot_idx];

    // Points at the pivot have no direction from it.
    let mut rest: Vec<Vec2> = points
        .iter()
        .enumerate()
        .filter(|&(i, p)| i != pivot_idx && !approx_eq(*p, pivot))
        .map(|(_, p)| *p)
        .collect();
    sort_by_angle(pivot, &mut rest);
    let fan = compact_collinear(pivot, &rest);

    if fan.len() + 1 < 3 {
        tracing::debug!(
            input = points.len(),
            distinct_directions = fan.len(),
            "convex_hull: degenerate input, no proper hull"
        );
        return Vec::new();
    }

    let mut stack: Vec<Vec2> = Vec::with_capacity(fan.len() + 1);
    stack.push(pivot);
    stack.push(fan[0]);
    stack.push(fan[1]);
    for &p in &fan[2..] {
        while stack.len() >= 2
            && orientation(stack[stack.len() - 2], stack[stack.len() - 1], p)
                != Orientation::CounterClockwise
        {
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

/// Like `convex_hull`, but `None` when the hull has fewer than three vertices.
pub fn try_convex_hull(points: &[Vec2]) -> Option<Vec<Vec2>> {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        None
    } else {
        Some(hull)
    }
}

/// Index of the lowest point, ties broken by smallest `x`.
///
/// Exact comparison: every other point must lie strictly above the pivot or level
/// with it and to its right, or the angular order below stops being transitive.
fn pivot_index(points: &[Vec2]) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let mut best = 0usize;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.y < b.y || (p.y == b.y && p.x < b.x) {
            best = i;
        }
    }
    Some(best)
}

/// Sort by polar angle around `pivot`; exactly collinear points sort farther first.
///
/// The turn sign comes from `robust::orient2d`, so it is exact and the comparator is a
/// total order over the half-plane above `pivot`. Tolerance is applied afterwards, in
/// `compact_collinear` and the scan.
fn sort_by_angle(pivot: Vec2, pts: &mut [Vec2]) {
    pts.sort_by(|a, b| {
        let turn = robust::orient2d(coord(pivot), coord(*a), coord(*b));
        match 0.0_f64.partial_cmp(&turn) {
            Some(Ordering::Equal) | None => dist2(pivot, *b)
                .partial_cmp(&dist2(pivot, *a))
                .unwrap_or(Ordering::Equal),
            Some(ord) => ord,
        }
    });
}

#[inline]
fn coord(p: Vec2) -> robust::Coord<f64> {
    robust::Coord { x: p.x, y: p.y }
}

/// Collapse every run collinear (within `EPS`) with `pivot` to its farthest point.
fn compact_collinear(pivot: Vec2, sorted: &[Vec2]) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(sorted.len());
    for &p in sorted {
        if let Some(last) = out.last_mut() {
            if orientation(pivot, *last, p) == Orientation::Collinear {
                // The exact sort does not keep a tolerance run farthest-first.
                if dist2(pivot, p) > dist2(pivot, *last) {
                    *last = p;
                }
                continue;
            }
        }
        out.push(p);
    }
    out
}
