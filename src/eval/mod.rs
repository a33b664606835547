//! Shape Evaluation (Deep Fried Edition)
//!
//! Functions for evaluating `Shape2d` values at points.
//!
//! # Deep Fried Optimizations
//! - **Direct Dispatch**: Each variant calls its primitive directly, no flat parameter copy.
//! - **Central Differences**: Gradients take four evaluations, no allocation.
//!
//! Author: Moroya Sakamoto

pub mod parallel;

pub use parallel::{eval_batch, eval_batch_parallel, eval_grid, grid_coords, grid_index, GridConfig};

use crate::primitives::*;
use crate::types::Shape2d;
use glam::Vec2;

/// Evaluate a shape at a single point (Deep Fried)
///
/// # Arguments
/// * `shape` - The shape
/// * `point` - Point to evaluate, in the shape's local frame
///
/// # Returns
/// Signed distance to the boundary (negative inside)
#[inline]
pub fn eval_2d(shape: &Shape2d, point: Vec2) -> f32 {
    let p = point;
    match shape {
        Shape2d::Circle { radius } => sdf_circle(p, *radius),
        Shape2d::Segment { a, b } => sdf_segment(p, *a, *b),
        Shape2d::Box { half_extents } => sdf_box(p, *half_extents),
        Shape2d::OrientedBox { a, b, thickness } => sdf_oriented_box(p, *a, *b, *thickness),
        Shape2d::RoundedBox {
            half_extents,
            radii,
        } => sdf_rounded_box(p, *half_extents, *radii),
        Shape2d::RoundSquare { half_size, radius } => sdf_round_square(p, *half_size, *radius),
        Shape2d::Rhombus { half_diagonals } => sdf_rhombus(p, *half_diagonals),
        Shape2d::Trapezoid {
            r1,
            r2,
            half_height,
        } => sdf_trapezoid(p, *r1, *r2, *half_height),
        Shape2d::Parallelogram {
            half_width,
            half_height,
            skew,
        } => sdf_parallelogram(p, *half_width, *half_height, *skew),
        Shape2d::EquilateralTriangle { radius } => sdf_equilateral_triangle(p, *radius),
        Shape2d::TriangleIsosceles { size } => sdf_triangle_isosceles(p, *size),
        Shape2d::Triangle { p0, p1, p2 } => sdf_triangle(p, *p0, *p1, *p2),
        Shape2d::Quad { p0, p1, p2, p3 } => sdf_quad(p, *p0, *p1, *p2, *p3),
        Shape2d::UnevenCapsule { r1, r2, height } => sdf_uneven_capsule(p, *r1, *r2, *height),
        Shape2d::Egg { ra, rb } => sdf_egg(p, *ra, *rb),
        Shape2d::Pie { aperture, radius } => sdf_pie(p, *aperture, *radius),
        Shape2d::CutDisk { radius, h } => sdf_cut_disk(p, *radius, *h),
        Shape2d::Moon { d, ra, rb } => sdf_moon(p, *d, *ra, *rb),
        Shape2d::Vesica { radius, d } => sdf_vesica(p, *radius, *d),
        Shape2d::OrientedVesica { a, b, half_width } => {
            sdf_oriented_vesica(p, *a, *b, *half_width)
        }
        Shape2d::Tunnel { size } => sdf_tunnel(p, *size),
        Shape2d::Arc {
            aperture,
            radius,
            thickness,
        } => sdf_arc(p, *aperture, *radius, *thickness),
        Shape2d::Ring {
            direction,
            radius,
            thickness,
        } => sdf_ring(p, *direction, *radius, *thickness),
        Shape2d::Horseshoe {
            aperture,
            radius,
            length,
            thickness,
        } => sdf_horseshoe(p, *aperture, *radius, *length, *thickness),
        Shape2d::Parabola { k } => sdf_parabola(p, *k),
        Shape2d::Cross { size, offset } => sdf_cross(p, *size, *offset),
        Shape2d::RoundedX { width, radius } => sdf_rounded_x(p, *width, *radius),
        Shape2d::Ellipse { semi_axes } => sdf_ellipse(p, *semi_axes),
        Shape2d::Star5 {
            radius,
            inner_factor,
        } => sdf_star5(p, *radius, *inner_factor),
        Shape2d::Hexagram { radius } => sdf_hexagram(p, *radius),
        Shape2d::Pentagon { apothem } => sdf_pentagon(p, *apothem),
        Shape2d::Hexagon { apothem } => sdf_hexagon(p, *apothem),
        Shape2d::Octagon { apothem } => sdf_octagon(p, *apothem),
        Shape2d::RegularPolygon {
            circumradius,
            sides,
        } => sdf_regular_polygon(p, *circumradius, *sides),
        Shape2d::Polygon { vertices } => sdf_polygon(p, vertices),
    }
}

/// Compute the gradient of the distance at a point (central differences)
#[inline(always)]
pub fn gradient_2d(shape: &Shape2d, point: Vec2, epsilon: f32) -> Vec2 {
    let ex = Vec2::new(epsilon, 0.0);
    let ey = Vec2::new(0.0, epsilon);

    let inv_2e = 1.0 / (2.0 * epsilon);

    Vec2::new(
        eval_2d(shape, point + ex) - eval_2d(shape, point - ex),
        eval_2d(shape, point + ey) - eval_2d(shape, point - ey),
    ) * inv_2e
}

/// Compute the outward boundary normal at a point
///
/// Falls back to +Y where the gradient vanishes (medial axis, far-field
/// symmetry points).
#[inline(always)]
pub fn normal_2d(shape: &Shape2d, point: Vec2, epsilon: f32) -> Vec2 {
    let grad = gradient_2d(shape, point, epsilon);

    let len_sq = grad.length_squared();
    if !(len_sq >= 1e-20) {
        return Vec2::Y;
    }
    grad / len_sq.sqrt()
}
