//! Separating-axis collision test for convex polygons.
//!
//! Two convex shapes are disjoint iff some axis separates their projections. For
//! polygons, the unit edge normals of both shapes are a complete candidate set.
//!
//! Degenerate shapes
//! - Zero-length edges (repeated vertices) contribute no axis.
//! - A flat shape (segment, or any vertex list that is collinear) also contributes
//!   its direction, so collinear segments beyond each other are still separated.
//! - Two point-like shapes have no axes at all; they are compared directly and the
//!   displacement direction serves as the separating axis.
//!
//! Touching shapes (shared vertex or edge) collide.

use super::types::{approx_eq, dist, orientation, Orientation, Vec2, EPS};

/// Closed scalar range `[min, max]` of a projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Symmetric overlap test with `EPS` slack; touching intervals overlap.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.max >= other.min - EPS && other.max >= self.min - EPS
    }
}

/// Unit outward normals `(Δy, -Δx) / len` of every edge `(v_i, v_{i+1 mod n})`.
///
/// Outward for CCW polygons. Edges shorter than `EPS` are skipped.
pub fn axes(poly: &[Vec2]) -> Vec<Vec2> {
    let n = poly.len();
    let mut out = Vec::with_capacity(n);
    if n < 2 {
        return out;
    }
    for k in 0..n {
        let p = poly[k];
        let q = poly[(k + 1) % n];
        let len = dist(p, q);
        if len < EPS {
            continue;
        }
        out.push(Vec2::new((q.y - p.y) / len, -(q.x - p.x) / len));
    }
    out
}

/// Projection of all vertices onto `axis`. `None` for an empty polygon.
pub fn project(poly: &[Vec2], axis: Vec2) -> Option<Interval> {
    let (first, rest) = poly.split_first()?;
    let d0 = first.dot(&axis);
    let mut iv = Interval { min: d0, max: d0 };
    for p in rest {
        let d = p.dot(&axis);
        iv.min = iv.min.min(d);
        iv.max = iv.max.max(d);
    }
    Some(iv)
}

/// SAT outcome for a pair of vertex lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Separation {
    /// At least one input has no vertices; there is nothing to test.
    Empty,
    /// No candidate axis separates the shapes: they collide.
    Overlap,
    /// Unit axis on which the projections are disjoint.
    Axis(Vec2),
}

impl Separation {
    #[inline]
    pub fn is_overlap(&self) -> bool {
        matches!(self, Separation::Overlap)
    }
    #[inline]
    pub fn axis(self) -> Option<Vec2> {
        if let Separation::Axis(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

/// Find a unit axis on which `a` and `b` project to disjoint intervals.
pub fn separating_axis(a: &[Vec2], b: &[Vec2]) -> Separation {
    let (Some(&pa), Some(&pb)) = (a.first(), b.first()) else {
        return Separation::Empty;
    };
    let mut candidates = axes(a);
    candidates.extend(axes(b));
    candidates.extend(flat_direction(a));
    candidates.extend(flat_direction(b));

    if candidates.is_empty() {
        // Both shapes are single points (up to tolerance).
        if approx_eq(pa, pb) {
            return Separation::Overlap;
        }
        tracing::trace!("separating_axis: point-vs-point fallback");
        return Separation::Axis((pb - pa) / dist(pa, pb));
    }

    candidates
        .into_iter()
        .find(|axis| match (project(a, *axis), project(b, *axis)) {
            (Some(ia), Some(ib)) => !ia.overlaps(&ib),
            _ => false,
        })
        .map_or(Separation::Overlap, Separation::Axis)
}

/// True iff the convex polygons `a` and `b` intersect (boundaries included).
///
/// Empty polygons collide with nothing.
pub fn polygons_collide(a: &[Vec2], b: &[Vec2]) -> bool {
    match separating_axis(a, b) {
        Separation::Overlap => true,
        Separation::Axis(_) => false,
        Separation::Empty => {
            tracing::debug!(a = a.len(), b = b.len(), "polygons_collide: empty polygon");
            false
        }
    }
}

/// Unit direction of a shape whose vertices all lie on one line, if it has any extent.
fn flat_direction(poly: &[Vec2]) -> Option<Vec2> {
    let p0 = *poly.first()?;
    let far = poly.iter().copied().find(|q| dist(p0, *q) >= EPS)?;
    let flat = poly
        .iter()
        .all(|v| orientation(p0, far, *v) == Orientation::Collinear);
    if flat {
        Some((far - p0) / dist(p0, far))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn tri(raw: [(f64, f64); 3]) -> Vec<Vec2> {
        raw.iter().map(|&(x, y)| vector![x, y]).collect()
    }

    #[test]
    fn reference_triangles() {
        let a = tri([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let b = tri([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
        let c = tri([(0.0, 0.0), (-1.0, 0.0), (-1.0, -1.0)]);
        let d = tri([(-2.0, 0.0), (-1.0, 0.0), (-1.0, -1.0)]);
        assert!(polygons_collide(&a, &a));
        assert!(polygons_collide(&a, &b));
        assert!(polygons_collide(&a, &c));
        assert!(!polygons_collide(&a, &d));
        // symmetry
        assert!(polygons_collide(&b, &a));
        assert!(polygons_collide(&c, &a));
        assert!(!polygons_collide(&d, &a));
    }

    #[test]
    fn witness_axis_separates() {
        let a = tri([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let d = tri([(-2.0, 0.0), (-1.0, 0.0), (-1.0, -1.0)]);
        let axis = separating_axis(&a, &d).axis().expect("separated");
        assert!((axis.norm() - 1.0).abs() < 1e-12);
        let pa = project(&a, axis).unwrap();
        let pd = project(&d, axis).unwrap();
        assert!(!pa.overlaps(&pd));
    }

    #[test]
    fn axes_are_unit_outward_normals() {
        let sq = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ];
        let ax = axes(&sq);
        assert_eq!(ax.len(), 4);
        assert!((ax[0] - vector![0.0, -1.0]).norm() < 1e-12);
        assert!((ax[1] - vector![1.0, 0.0]).norm() < 1e-12);
        assert!((ax[2] - vector![0.0, 1.0]).norm() < 1e-12);
        assert!((ax[3] - vector![-1.0, 0.0]).norm() < 1e-12);
        // repeated vertex adds no axis
        let with_dup = vec![sq[0], sq[0], sq[1], sq[2]];
        assert_eq!(axes(&with_dup).len(), 3);
        assert!(axes(&[sq[0]]).is_empty());
    }

    #[test]
    fn interval_overlap_is_symmetric() {
        let a = Interval { min: 0.0, max: 1.0 };
        let b = Interval { min: 1.0, max: 2.0 };
        let c = Interval { min: 1.5, max: 2.0 };
        let wide = Interval { min: -5.0, max: 5.0 };
        assert!(a.overlaps(&b) && b.overlaps(&a));
        assert!(!a.overlaps(&c) && !c.overlaps(&a));
        assert!(a.overlaps(&wide) && wide.overlaps(&a));
    }

    #[test]
    fn project_range() {
        let poly = tri([(0.0, 0.0), (3.0, 1.0), (-1.0, 2.0)]);
        let iv = project(&poly, vector![1.0, 0.0]).unwrap();
        assert_eq!(iv, Interval { min: -1.0, max: 3.0 });
        assert!(project(&[], vector![1.0, 0.0]).is_none());
    }

    #[test]
    fn tangent_squares_collide() {
        let a = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        let b: Vec<Vec2> = a.iter().map(|p| p + vector![1.0, 0.0]).collect();
        let gap: Vec<Vec2> = a.iter().map(|p| p + vector![1.01, 0.0]).collect();
        assert!(polygons_collide(&a, &b));
        assert!(!polygons_collide(&a, &gap));
    }

    #[test]
    fn points_and_segments() {
        let sq = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ];
        assert!(polygons_collide(&sq, &[vector![1.0, 1.0]]));
        assert!(polygons_collide(&sq, &[vector![2.0, 1.0]]));
        assert!(!polygons_collide(&sq, &[vector![3.0, 1.0]]));

        assert!(polygons_collide(&[vector![1.0, 1.0]], &[vector![1.0, 1.0]]));
        assert!(!polygons_collide(&[vector![1.0, 1.0]], &[vector![1.0, 2.0]]));

        let seg = [vector![0.0, 0.0], vector![2.0, 0.0]];
        let beyond = [vector![3.0, 0.0], vector![4.0, 0.0]];
        let touching = [vector![2.0, 0.0], vector![4.0, 0.0]];
        let crossing = [vector![1.0, -1.0], vector![1.0, 1.0]];
        assert!(!polygons_collide(&seg, &beyond));
        assert!(polygons_collide(&seg, &touching));
        assert!(polygons_collide(&seg, &crossing));
        assert!(!polygons_collide(&seg, &[vector![3.0, 0.0]]));
        assert!(polygons_collide(&seg, &[vector![1.0, 0.0]]));
        assert!(!polygons_collide(&seg, &[vector![1.0, 0.5]]));
    }

    #[test]
    fn empty_collides_with_nothing() {
        let a = tri([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(!polygons_collide(&a, &[]));
        assert!(!polygons_collide(&[], &a));
    }

    #[test]
    fn empty_input_has_no_axis_and_no_overlap() {
        let a = tri([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let dot = [vector![0.5, 0.25]];
        assert_eq!(separating_axis(&[], &dot), Separation::Empty);
        assert_eq!(separating_axis(&dot, &[]), Separation::Empty);
        assert_eq!(separating_axis(&[], &a), Separation::Empty);
        assert_eq!(separating_axis(&[], &[]), Separation::Empty);
        assert!(!separating_axis(&[], &a).is_overlap());
        assert_eq!(separating_axis(&a, &dot), Separation::Overlap);
        assert!(!polygons_collide(&[], &dot));
    }
}
