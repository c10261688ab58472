//! Planar computational-geometry kernel.
//!
//! - `geom2`: convex hull, point-in-convex-polygon, convex polygon collision.
//! - `api`: curated re-exports for binaries and benches.
//!
//! All operations are pure functions over vertex slices; they allocate fresh
//! results and keep no state between calls.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Vec2, EPS};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_point_cloud, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        convex_hull, orientation, point_in_convex_polygon, polygons_collide, separating_axis,
        try_convex_hull, Orientation, Separation, Vec2, EPS,
    };
}
