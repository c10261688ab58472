//! Basic 2D primitives and the shared tolerance.
//!
//! - `Vec2`: a point or a displacement, depending on context.
//! - `EPS`: the one tolerance every predicate in `geom2` compares against.
//! - `Orientation`/`orientation`: the turn test that hull, containment and
//!   collision all decide with.
//!
//! Code cross-refs: `hull::convex_hull`, `contain::point_in_convex_polygon`,
//! `collide::polygons_collide`

use nalgebra::Vector2;

/// Point or direction in the plane.
pub type Vec2 = Vector2<f64>;

/// Numerical tolerance used for geometric predicates.
///
/// Magnitudes below `EPS` count as zero. Value tuned for O(1) coordinate scales.
pub const EPS: f64 = 1e-6;

/// Turn direction of an ordered triple of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Twice the signed area of the triangle `(p, q, r)`: `(q - p) × (r - p)`.
///
/// Positive when `r` lies left of the ray `p → q`.
#[inline]
pub fn cross(p: Vec2, q: Vec2, r: Vec2) -> f64 {
    let pq = q - p;
    let pr = r - p;
    pq.x * pr.y - pq.y * pr.x
}

/// Classify the turn `p → q → r` by the sign of `(q - p) × (r - q)`.
///
/// `|cross| < EPS` is `Collinear` regardless of sign.
#[inline]
pub fn orientation(p: Vec2, q: Vec2, r: Vec2) -> Orientation {
    let pq = q - p;
    let qr = r - q;
    let val = pq.x * qr.y - pq.y * qr.x;
    if val.abs() < EPS {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Squared Euclidean distance. Prefer this when only comparing.
#[inline]
pub fn dist2(p: Vec2, q: Vec2) -> f64 {
    (q - p).norm_squared()
}

#[inline]
pub fn dist(p: Vec2, q: Vec2) -> f64 {
    dist2(p, q).sqrt()
}

/// Coordinate-wise equality within `EPS`.
#[inline]
pub fn approx_eq(p: Vec2, q: Vec2) -> bool {
    (p.x - q.x).abs() < EPS && (p.y - q.y).abs() < EPS
}

/// Bounding-box test: does `r` lie within the axis-aligned box of segment `pq`?
///
/// Only meaningful once `r` is known to be collinear with `p` and `q`.
#[inline]
pub fn on_segment(p: Vec2, q: Vec2, r: Vec2) -> bool {
    p.x.min(q.x) - EPS <= r.x
        && r.x <= p.x.max(q.x) + EPS
        && p.y.min(q.y) - EPS <= r.y
        && r.y <= p.y.max(q.y) + EPS
}
