//! Polygon measures and input validation.
//!
//! - `signed_area`: shoelace formula, positive for CCW vertex order.
//! - `is_convex_ccw`: checks the preconditions of `point_in_convex_polygon` for
//!   caller-supplied vertex lists.

use super::types::{orientation, Orientation, Vec2};

/// Signed area (shoelace). Positive for CCW order, zero for fewer than three vertices.
pub fn signed_area(poly: &[Vec2]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for i in 0..n {
        let p = poly[i];
        let q = poly[(i + 1) % n];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// True iff `poly` has at least three vertices, never turns clockwise, and winds once.
///
/// Collinear consecutive triples are tolerated; a zero-area polygon is not.
pub fn is_convex_ccw(poly: &[Vec2]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    let mut turns = 0usize;
    for i in 0..n {
        match orientation(poly[i], poly[(i + 1) % n], poly[(i + 2) % n]) {
            Orientation::Clockwise => return false,
            Orientation::CounterClockwise => turns += 1,
            Orientation::Collinear => {}
        }
    }
    if turns == 0 {
        return false;
    }
    // A star polygon turns left everywhere too; reject winding numbers above one by
    // requiring the angular sweep around v0 to stay monotone.
    let v0 = poly[0];
    (1..n - 1).all(|k| orientation(v0, poly[k], poly[k + 1]) != Orientation::Clockwise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_area_and_orientation() {
        let sq = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ];
        assert!((signed_area(&sq) - 16.0).abs() < 1e-12);
        assert!(is_convex_ccw(&sq));
        let rev: Vec<Vec2> = sq.iter().rev().copied().collect();
        assert!((signed_area(&rev) + 16.0).abs() < 1e-12);
        assert!(!is_convex_ccw(&rev));
    }

    #[test]
    fn rejects_non_convex_and_degenerate() {
        let dart = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 4.0],
        ];
        assert!(!is_convex_ccw(&dart));
        let line = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        assert!(!is_convex_ccw(&line));
        assert!(!is_convex_ccw(&line[..2]));
    }

    #[test]
    fn rejects_pentagram() {
        let star: Vec<Vec2> = (0..5)
            .map(|k| {
                let th = (k as f64) * 4.0 * std::f64::consts::PI / 5.0;
                vector![th.cos(), th.sin()]
            })
            .collect();
        assert!(!is_convex_ccw(&star));
    }
}
