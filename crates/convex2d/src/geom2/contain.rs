//! Point-in-convex-polygon query in O(log n).
//!
//! The polygon is viewed as a fan of triangles `(v0, v_k, v_{k+1})`. A binary search
//! over `k` finds the sector between the rays `v0 → v_k` and `v0 → v_{k+1}` that holds
//! the query point, then a single edge test against `(v_k, v_{k+1})` decides.
//!
//! Preconditions
//! - Vertices are convex, CCW, and in increasing polar angle around `v0`
//!   (what `hull::convex_hull` returns).
//! - Boundary points (edges, vertices) count as inside.

use super::types::{on_segment, orientation, Orientation, Vec2};

/// True iff `p` lies inside or on the boundary of `poly`.
///
/// Polygons with fewer than three vertices contain nothing.
pub fn point_in_convex_polygon(poly: &[Vec2], p: Vec2) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let v0 = poly[0];
    let mut i = 1usize;
    let mut j = n - 2;
    while i <= j {
        let mid = (i + j) / 2;
        let a1 = orientation(v0, poly[mid], p);
        let a2 = orientation(v0, poly[mid + 1], p);

        // Rays bounding the whole fan.
        if mid == 1 && a1 == Orientation::Collinear && on_segment(v0, poly[1], p) {
            return true;
        }
        if mid + 1 == n - 1 && a2 == Orientation::Collinear && on_segment(v0, poly[n - 1], p) {
            return true;
        }

        if a1 != Orientation::Clockwise && a2 != Orientation::CounterClockwise {
            return match orientation(poly[mid], poly[mid + 1], p) {
                Orientation::CounterClockwise => true,
                Orientation::Collinear => on_segment(poly[mid], poly[mid + 1], p),
                Orientation::Clockwise => false,
            };
        }
        if a1 == Orientation::Clockwise {
            // mid >= 1, so this never underflows; mid == 1 ends the loop.
            j = mid - 1;
        } else {
            i = mid + 1;
        }
    }
    false
}
