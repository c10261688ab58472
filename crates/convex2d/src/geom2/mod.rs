//! Planar convex geometry on `f64` points.
//!
//! Purpose
//! - Convex hull construction (Graham scan), O(log n) point containment, and
//!   separating-axis collision between convex polygons.
//! - One turn predicate (`orientation`) and one tolerance (`EPS`) decide every
//!   comparison, so the three operations agree on boundary cases.
//!
//! Conventions
//! - A polygon is a vertex slice; edge `i` joins `v_i` and `v_{(i+1) mod n}`.
//! - Hulls are CCW and start at the lowest-then-leftmost point, which is exactly
//!   the ordering `point_in_convex_polygon` expects.
//! - Degenerate input never panics; it yields sentinels (empty hull, `false`).
//!
//! Code cross-refs: `types`, `hull`, `contain`, `collide`, `measure`, `rand`

pub mod collide;
pub mod contain;
pub mod hull;
pub mod measure;
pub mod rand;
mod types;

pub use collide::{axes, polygons_collide, project, separating_axis, Interval, Separation};
pub use contain::point_in_convex_polygon;
pub use hull::{convex_hull, try_convex_hull};
pub use measure::{is_convex_ccw, signed_area};
pub use types::{approx_eq, cross, dist, dist2, on_segment, orientation, Orientation, Vec2, EPS};
