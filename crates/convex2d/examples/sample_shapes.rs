//! Run the kernel on a few fixed shapes and print the results.
//!
//! Usage:
//!   cargo run -p convex2d --example sample_shapes

use convex2d::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Vec2> {
    raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

fn main() {
    let cloud = pts(&[
        (0.0, 3.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (4.0, 4.0),
        (0.0, 0.0),
        (1.0, 2.0),
        (3.0, 1.0),
        (3.0, 3.0),
    ]);
    println!("hull:");
    for v in convex_hull(&cloud) {
        println!("  ({}, {})", v.x, v.y);
    }

    let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    for q in [(2.0, 2.0), (-1.0, -1.0), (4.0, 2.0), (0.0, 0.0)] {
        let inside = point_in_convex_polygon(&square, Vec2::new(q.0, q.1));
        println!("contains {q:?}: {inside}");
    }

    let a = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    let others = [
        ("B", pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)])),
        ("C", pts(&[(0.0, 0.0), (-1.0, 0.0), (-1.0, -1.0)])),
        ("D", pts(&[(-2.0, 0.0), (-1.0, 0.0), (-1.0, -1.0)])),
    ];
    println!("collide A A: {}", polygons_collide(&a, &a));
    for (name, b) in &others {
        println!("collide A {name}: {}", polygons_collide(&a, b));
    }
}
