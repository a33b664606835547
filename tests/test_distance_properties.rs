//! Integration tests: geometric properties every distance function must honor
//!
//! Author: Moroya Sakamoto

mod common;

use alice_sdf2d::prelude::*;
use common::*;
use std::f32::consts::{PI, TAU};

// ============================================================================
// Sign correctness
// ============================================================================

#[test]
fn test_inside_points_are_negative() {
    for (shape, inside, _) in sign_table() {
        if let Some(p) = inside {
            let d = eval_2d(&shape, p);
            assert!(
                d < 0.0,
                "{} at {:?} should be inside, got {}",
                shape.primitive_type(),
                p,
                d
            );
        }
    }
}

#[test]
fn test_outside_points_are_positive() {
    for (shape, _, outside) in sign_table() {
        let d = eval_2d(&shape, outside);
        assert!(
            d > 0.0,
            "{} at {:?} should be outside, got {}",
            shape.primitive_type(),
            outside,
            d
        );
    }
}

#[test]
fn test_boundary_points_are_zero() {
    let cases: Vec<(PrimitiveType, Vec2, f32)> = vec![
        (PrimitiveType::Circle, Vec2::new(110.0, 0.0), 1e-3),
        (PrimitiveType::Segment, Vec2::ZERO, 1e-3),
        (PrimitiveType::Segment, Vec2::new(150.0, -100.0), 1e-3),
        (PrimitiveType::Box, Vec2::new(160.0, 10.0), 1e-3),
        (PrimitiveType::Box, Vec2::new(0.0, -70.0), 1e-3),
        (PrimitiveType::OrientedBox, Vec2::new(150.0, 100.0), 2e-3),
        (PrimitiveType::RoundedBox, Vec2::new(70.0, 0.0), 1e-3),
        (PrimitiveType::RoundSquare, Vec2::new(100.0, 0.0), 1e-3),
        (PrimitiveType::Rhombus, Vec2::new(100.0, 0.0), 1e-3),
        (PrimitiveType::Trapezoid, Vec2::new(0.0, 40.0), 1e-3),
        (PrimitiveType::Parallelogram, Vec2::new(30.0, 50.0), 1e-3),
        (
            PrimitiveType::EquilateralTriangle,
            Vec2::new(0.0, -100.0 / 3.0f32.sqrt()),
            2e-3,
        ),
        (PrimitiveType::TriangleIsosceles, Vec2::ZERO, 1e-3),
        (PrimitiveType::Triangle, Vec2::new(-150.0, 80.0), 1e-3),
        (PrimitiveType::Quad, Vec2::new(120.0, 60.0), 1e-3),
        (PrimitiveType::UnevenCapsule, Vec2::new(0.0, -40.0), 1e-3),
        (PrimitiveType::UnevenCapsule, Vec2::new(0.0, 110.0), 1e-3),
        (PrimitiveType::Egg, Vec2::new(0.0, -50.0), 1e-3),
        (PrimitiveType::Pie, Vec2::new(0.0, 100.0), 1e-3),
        (PrimitiveType::CutDisk, Vec2::new(0.0, -75.0), 1e-3),
        (PrimitiveType::Moon, Vec2::new(-110.0, 0.0), 1e-3),
        (PrimitiveType::Vesica, Vec2::new(0.0, 8500.0f32.sqrt()), 2e-3),
        (PrimitiveType::OrientedVesica, Vec2::new(90.0, 70.0), 2e-3),
        (PrimitiveType::Tunnel, Vec2::new(0.0, -40.0), 1e-3),
        (PrimitiveType::Tunnel, Vec2::new(80.0, -20.0), 1e-3),
        (PrimitiveType::Tunnel, Vec2::new(0.0, 80.0), 1e-3),
        (PrimitiveType::Arc, Vec2::new(0.0, 90.0), 1e-3),
        (PrimitiveType::Ring, Vec2::new(0.0, 105.0), 2e-3),
        (PrimitiveType::Horseshoe, Vec2::new(0.0, -85.0), 1e-3),
        (PrimitiveType::Parabola, Vec2::new(100.0, 20.0), 1e-2),
        (PrimitiveType::Cross, Vec2::new(86.0, 0.0), 1e-3),
        (PrimitiveType::Ellipse, Vec2::new(160.0, 0.0), 1e-2),
        (PrimitiveType::Star5, Vec2::new(0.0, 100.0), 2e-3),
        (PrimitiveType::Hexagram, Vec2::new(0.0, 90.0), 2e-3),
        (PrimitiveType::Pentagon, Vec2::new(0.0, 90.0), 1e-3),
        (PrimitiveType::Hexagon, Vec2::new(0.0, 90.0), 1e-3),
        (PrimitiveType::Octagon, Vec2::new(0.0, 90.0), 1e-3),
        (PrimitiveType::RegularPolygon, Vec2::new(90.0, 0.0), 2e-3),
        (PrimitiveType::Polygon, Vec2::new(-190.0, -110.0), 1e-3),
    ];

    for (prim, p, tol) in cases {
        let d = eval_2d(&Shape2d::example(prim), p);
        assert_close(d, 0.0, tol, &format!("{} boundary at {:?}", prim, p));
    }
}

#[test]
fn test_segment_is_never_negative() {
    let seg = Shape2d::example(PrimitiveType::Segment);
    for p in test_grid_points(16, 200.0) {
        assert!(eval_2d(&seg, p) >= 0.0);
    }
}

// ============================================================================
// Symmetry
// ============================================================================

#[test]
fn test_circle_rotational_symmetry() {
    let circle = Shape2d::circle(1.0);
    for p in test_points() {
        let d0 = eval_2d(&circle, p);
        for k in 1..8 {
            let d = eval_2d(&circle, rotate(p, k as f32 * TAU / 8.0));
            assert_close(d, d0, 1e-5, &format!("circle at {:?} rotated {}", p, k));
        }
    }
}

#[test]
fn test_mirror_symmetric_shapes() {
    let both_axes = [
        Shape2d::box2d(Vec2::new(1.0, 0.5)),
        Shape2d::rhombus(Vec2::new(1.0, 0.3)),
        Shape2d::ellipse(2.0, 1.0),
        Shape2d::vesica(1.0, 0.5),
        Shape2d::round_square(1.0, 0.2),
        Shape2d::rounded_x(1.5, 0.1),
        Shape2d::cross(1.0, 0.3, 0.05),
    ];
    for shape in &both_axes {
        for p in test_points() {
            let d = eval_2d(shape, p);
            let name = shape.primitive_type();
            assert_close(eval_2d(shape, Vec2::new(-p.x, p.y)), d, 1e-4, &format!("{} mirror x", name));
            assert_close(eval_2d(shape, Vec2::new(p.x, -p.y)), d, 1e-4, &format!("{} mirror y", name));
        }
    }

    let y_axis = [
        Shape2d::trapezoid(1.0, 0.4, 0.8),
        Shape2d::equilateral_triangle(1.0),
        Shape2d::triangle_isosceles(0.5, 1.0),
        Shape2d::uneven_capsule(0.5, 0.2, 1.0),
        Shape2d::egg(1.0, 0.2),
        Shape2d::pie_angle(PI / 3.0, 1.0),
        Shape2d::cut_disk(1.0, 0.3),
        Shape2d::tunnel(0.5, 1.0),
        Shape2d::arc_angle(PI / 3.0, 1.0, 0.1),
        Shape2d::ring(Vec2::new(-0.7071, 0.7071), 1.0, 0.2),
        Shape2d::horseshoe_angle(1.0, 1.0, 0.5, 0.1),
        Shape2d::parabola(1.0),
        Shape2d::star5(1.0, 0.5),
        Shape2d::pentagon(1.0),
    ];
    for shape in &y_axis {
        for p in test_points() {
            let d = eval_2d(shape, p);
            let mirrored = eval_2d(shape, Vec2::new(-p.x, p.y));
            assert_close(mirrored, d, 1e-4, &format!("{} mirror x at {:?}", shape.primitive_type(), p));
        }
    }

    let moon = Shape2d::moon(0.5, 1.0, 0.8);
    for p in test_points() {
        let d = eval_2d(&moon, p);
        assert_close(eval_2d(&moon, Vec2::new(p.x, -p.y)), d, 1e-4, "moon mirror y");
    }
}

#[test]
fn test_regular_shape_rotational_symmetry() {
    let cases = [
        (Shape2d::star5(100.0, 0.5), 5),
        (Shape2d::pentagon(90.0), 5),
        (Shape2d::hexagon(90.0), 6),
        (Shape2d::octagon(90.0), 8),
        (Shape2d::hexagram(45.0), 6),
        (Shape2d::regular_polygon(90.0, 7), 7),
        (Shape2d::equilateral_triangle(100.0), 3),
    ];
    let points = [
        Vec2::new(30.0, 20.0),
        Vec2::new(-70.0, 45.0),
        Vec2::new(0.0, 150.0),
        Vec2::new(120.0, -80.0),
    ];

    for (shape, n) in &cases {
        for &p in &points {
            let d0 = eval_2d(shape, p);
            for k in 1..*n {
                let q = rotate(p, k as f32 * TAU / *n as f32);
                assert_close(
                    eval_2d(shape, q),
                    d0,
                    2e-3,
                    &format!("{} at {:?} rotated {}/{}", shape.primitive_type(), p, k, n),
                );
            }
        }
    }
}

// ============================================================================
// Degenerate reductions
// ============================================================================

#[test]
fn test_rounded_box_zero_radius_is_box() {
    let half = Vec2::new(1.0, 0.5);
    let rounded = Shape2d::rounded_box(half, Vec4::ZERO);
    let plain = Shape2d::box2d(half);
    for p in test_points() {
        assert_close(eval_2d(&rounded, p), eval_2d(&plain, p), 1e-6, &format!("at {:?}", p));
    }

    let square = Shape2d::round_square(0.75, 0.0);
    let plain = Shape2d::box2d(Vec2::splat(0.75));
    for p in test_points() {
        assert_close(eval_2d(&square, p), eval_2d(&plain, p), 1e-6, &format!("at {:?}", p));
    }
}

#[test]
fn test_trapezoid_equal_widths_is_box() {
    let trap = Shape2d::trapezoid(1.2, 1.2, 0.6);
    let plain = Shape2d::box2d(Vec2::new(1.2, 0.6));
    for p in test_points() {
        assert_close(eval_2d(&trap, p), eval_2d(&plain, p), 1e-5, &format!("at {:?}", p));
    }
}

#[test]
fn test_rounded_x_zero_radius_is_two_segments() {
    let w = 1.5;
    let h = w * 0.5;
    let x = Shape2d::rounded_x(w, 0.0);
    for p in test_points() {
        let expected = sdf_segment(p, Vec2::new(-h, -h), Vec2::new(h, h))
            .min(sdf_segment(p, Vec2::new(-h, h), Vec2::new(h, -h)));
        assert_close(eval_2d(&x, p), expected, 1e-5, &format!("at {:?}", p));
    }
}

#[test]
fn test_cross_zero_offset_matches_bar_union_outside() {
    let b = Vec2::new(1.0, 0.3);
    let cross = Shape2d::cross(b.x, b.y, 0.0);
    for p in test_grid_points(20, 2.0) {
        let bars = sdf_box(p, b).min(sdf_box(p, Vec2::new(b.y, b.x)));
        if bars > 0.0 {
            assert_close(eval_2d(&cross, p), bars, 1e-5, &format!("at {:?}", p));
        }
    }
}

#[test]
fn test_equal_semi_axes_ellipse_is_circle() {
    let ellipse = Shape2d::ellipse(1.0, 1.0);
    let circle = Shape2d::circle(1.0);
    for p in test_points().into_iter().filter(|p| *p != Vec2::ZERO) {
        assert_close(eval_2d(&ellipse, p), eval_2d(&circle, p), 1e-3, &format!("at {:?}", p));
    }
}

#[test]
fn test_equal_radii_uneven_capsule_is_capsule() {
    let capsule = Shape2d::uneven_capsule(0.4, 0.4, 1.0);
    for p in test_points() {
        let expected = sdf_segment(p, Vec2::ZERO, Vec2::new(0.0, 1.0)) - 0.4;
        assert_close(eval_2d(&capsule, p), expected, 1e-5, &format!("at {:?}", p));
    }
}

#[test]
fn test_regular_polygon_matches_dedicated_shapes() {
    let r = 90.0;
    let hexagon = Shape2d::hexagon(r * (PI / 6.0).cos());
    let generic = Shape2d::regular_polygon(r, 6);
    for p in test_grid_points(12, 150.0) {
        assert_close(eval_2d(&generic, p), eval_2d(&hexagon, p), 2e-3, &format!("at {:?}", p));
    }
}

#[test]
fn test_polygon_matches_triangle() {
    let (a, b, c) = (Vec2::new(-1.0, -0.5), Vec2::new(0.0, 1.0), Vec2::new(1.0, -0.5));
    let tri = Shape2d::triangle(a, b, c);
    let poly = Shape2d::polygon(vec![a, b, c]);
    for p in test_points() {
        assert_close(eval_2d(&poly, p), eval_2d(&tri, p), 1e-5, &format!("at {:?}", p));
    }
}

// ============================================================================
// Monotonicity, scaling, Lipschitz bound
// ============================================================================

#[test]
fn test_distance_grows_along_outward_ray() {
    let shapes = [Shape2d::circle(1.0), Shape2d::box2d(Vec2::new(1.0, 0.5))];
    for shape in &shapes {
        for dir in [Vec2::X, Vec2::Y, Vec2::new(0.6, 0.8), Vec2::new(-0.8, 0.6)] {
            let mut prev = eval_2d(shape, Vec2::ZERO);
            for i in 1..=40 {
                let d = eval_2d(shape, dir * (i as f32 * 0.1));
                assert!(
                    d >= prev - 1e-6,
                    "{} along {:?}: {} after {}",
                    shape.primitive_type(),
                    dir,
                    d,
                    prev
                );
                prev = d;
            }
        }
    }
}

#[test]
fn test_scale_covariance() {
    let s = 7.5;
    let pairs = [
        (Shape2d::circle(1.0), Shape2d::circle(s)),
        (
            Shape2d::box2d(Vec2::new(1.0, 0.5)),
            Shape2d::box2d(Vec2::new(s, 0.5 * s)),
        ),
        (Shape2d::regular_polygon(1.0, 5), Shape2d::regular_polygon(s, 5)),
        (Shape2d::hexagon(1.0), Shape2d::hexagon(s)),
        (Shape2d::star5(1.0, 0.4), Shape2d::star5(s, 0.4)),
    ];
    for (unit, scaled) in &pairs {
        for p in test_points() {
            let expected = s * eval_2d(unit, p);
            assert_close(
                eval_2d(scaled, p * s),
                expected,
                1e-3,
                &format!("{} at {:?}", unit.primitive_type(), p),
            );
        }
    }
}

#[test]
fn test_exact_shapes_are_lipschitz() {
    let points = test_grid_points(24, 2.5);
    let offsets = [Vec2::new(0.05, 0.0), Vec2::new(0.0, 0.05), Vec2::new(0.03, -0.04)];
    for shape in exact_shapes() {
        for &p in &points {
            let d0 = eval_2d(&shape, p);
            for &o in &offsets {
                let d1 = eval_2d(&shape, p + o);
                assert!(
                    (d1 - d0).abs() <= o.length() + 1e-4,
                    "{} at {:?}: |{} - {}| > {}",
                    shape.primitive_type(),
                    p,
                    d1,
                    d0,
                    o.length()
                );
            }
        }
    }
}

#[test]
fn test_exact_shapes_have_unit_gradient_off_boundary() {
    for shape in exact_shapes() {
        for p in test_points() {
            let d = eval_2d(&shape, p);
            if d > 0.05 {
                let g = gradient_2d(&shape, p, 1e-3);
                assert_close(g.length(), 1.0, 0.02, &format!("{} at {:?}", shape.primitive_type(), p));
            }
        }
    }
}

#[test]
fn test_curved_examples_have_no_jumps_on_canvas() {
    let grid = GridConfig::canvas(400, 240);
    for prim in [PrimitiveType::Ring, PrimitiveType::Parabola, PrimitiveType::Arc] {
        let shape = Shape2d::example(prim);
        let values = eval_grid(&shape, &grid);
        for y in 0..grid.height {
            for x in 1..grid.width {
                let a = values[grid_index(x - 1, y, grid.width)];
                let b = values[grid_index(x, y, grid.width)];
                assert!(
                    (b - a).abs() <= 1.0 + 1e-2,
                    "{} jumps at {:?}: {} -> {}",
                    prim,
                    grid.point(x, y),
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn test_parabola_axis_sign_matches_neighbours() {
    let shape = Shape2d::parabola(0.002);
    for y in [1.0f32, 2.0, 10.0, 100.0] {
        let on_axis = eval_2d(&shape, Vec2::new(0.0, y));
        let beside = eval_2d(&shape, Vec2::new(1.0, y));
        assert!(on_axis < 0.0, "y={}: {}", y, on_axis);
        assert_close(on_axis, beside, 0.01, &format!("y={}", y));
    }
}
