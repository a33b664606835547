//! Common test helpers for ALICE-SDF2D integration tests
//!
//! Author: Moroya Sakamoto

#![allow(dead_code)]

use alice_sdf2d::prelude::*;

// ============================================================================
// Standard test shapes
// ============================================================================

/// Every primitive's example shape paired with a point strictly inside it
/// and a point strictly outside it.
///
/// The segment has no interior, so its "inside" entry is `None`.
pub fn sign_table() -> Vec<(Shape2d, Option<Vec2>, Vec2)> {
    let far = Vec2::new(1000.0, 1000.0);
    PrimitiveType::ALL
        .iter()
        .map(|&prim| {
            let shape = Shape2d::example(prim);
            let inside = match prim {
                PrimitiveType::Segment => None,
                PrimitiveType::TriangleIsosceles => Some(Vec2::new(0.0, 25.0)),
                PrimitiveType::Pie => Some(Vec2::new(0.0, 50.0)),
                PrimitiveType::Moon => Some(Vec2::new(-80.0, 0.0)),
                PrimitiveType::OrientedVesica => Some(Vec2::new(0.0, -20.0)),
                PrimitiveType::Arc => Some(Vec2::new(0.0, 80.0)),
                PrimitiveType::Ring => Some(Vec2::new(0.0, 100.0)),
                PrimitiveType::Horseshoe => Some(Vec2::new(0.0, -80.0)),
                PrimitiveType::Parabola => Some(Vec2::new(0.0, 100.0)),
                _ => Some(Vec2::ZERO),
            };
            let outside = match prim {
                // Open curve: far above it is still inside
                PrimitiveType::Parabola => Vec2::new(300.0, 0.0),
                _ => far,
            };
            (shape, inside, outside)
        })
        .collect()
}

/// Shapes whose distance is exact everywhere (1-Lipschitz with unit gradient)
pub fn exact_shapes() -> Vec<Shape2d> {
    vec![
        Shape2d::circle(1.0),
        Shape2d::box2d(Vec2::new(1.0, 0.5)),
        Shape2d::segment(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.5)),
        Shape2d::rounded_box(Vec2::new(1.0, 0.6), Vec4::new(0.1, 0.2, 0.3, 0.4)),
        Shape2d::triangle(
            Vec2::new(-1.0, -0.5),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, -0.5),
        ),
        Shape2d::hexagon(0.8),
        Shape2d::polygon(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ]),
    ]
}

// ============================================================================
// Standard test points
// ============================================================================

/// 8 canonical test points (origin, axes, diagonal, outside)
pub fn test_points() -> Vec<Vec2> {
    vec![
        Vec2::ZERO,
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(0.707, 0.707),
        Vec2::new(2.0, 0.0),
        Vec2::new(0.0, -1.5),
        Vec2::new(-0.3, 0.3),
        Vec2::new(-2.5, 1.75),
    ]
}

/// Generate a grid of points in [-extent, extent]^2
pub fn test_grid_points(resolution: usize, extent: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(resolution * resolution);
    let step = 2.0 * extent / resolution as f32;
    for j in 0..resolution {
        for i in 0..resolution {
            points.push(Vec2::new(
                -extent + (i as f32 + 0.5) * step,
                -extent + (j as f32 + 0.5) * step,
            ));
        }
    }
    points
}

/// Rotate `p` about the origin by `angle` radians
pub fn rotate(p: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * p.x - s * p.y, s * p.x + c * p.y)
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Temporary file path for I/O tests
pub fn temp_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("alice_sdf2d_it_{}", name));
    path
}
