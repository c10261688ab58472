//! Curated API surface for the CLI and benches.
//!
//! Mirrors the three kernel operations plus the helpers callers need to prepare
//! and validate input.

pub use crate::geom2::rand::{
    draw_point_cloud, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
};
pub use crate::geom2::{
    convex_hull, is_convex_ccw, point_in_convex_polygon, polygons_collide, separating_axis,
    signed_area, try_convex_hull, Separation, Vec2,
};
