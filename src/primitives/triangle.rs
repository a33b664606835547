//! Triangle SDFs (Deep Fried Edition)
//!
//! Equilateral, isosceles and arbitrary triangles in the plane.
//!
//! Based on Inigo Quilez's sdEquilateralTriangle, sdTriangleIsosceles and
//! sdTriangle formulas.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, dot2, sign};
use glam::Vec2;

/// Exact SDF for an equilateral triangle centered at origin, apex up
///
/// - `r`: half the side length (base vertices at `(±r, -r/√3)`)
#[inline(always)]
pub fn sdf_equilateral_triangle(p: Vec2, r: f32) -> f32 {
    const K: f32 = 1.732_050_8; // sqrt(3)

    let mut p = Vec2::new(p.x.abs() - r, p.y + r / K);
    if p.x + K * p.y > 0.0 {
        p = Vec2::new(p.x - K * p.y, -K * p.x - p.y) * 0.5;
    }
    p.x -= clamp(p.x, -2.0 * r, 0.0);
    -p.length() * sign(p.y)
}

/// Exact SDF for an isosceles triangle with its apex at the origin
///
/// - `q`: `(half_base, height)`; the base lies on `y = q.y`
#[inline(always)]
pub fn sdf_triangle_isosceles(p: Vec2, q: Vec2) -> f32 {
    let p = Vec2::new(p.x.abs(), p.y);
    let a = p - q * clamp(p.dot(q) / dot2(q), 0.0, 1.0);
    let b = p - q * Vec2::new(clamp(p.x / q.x, 0.0, 1.0), 1.0);
    let k = sign(q.y);
    let s = (k * (p.x * q.y - p.y * q.x)).max(k * (p.y - q.y));
    dot2(a).min(dot2(b)).sqrt() * sign(s)
}

/// Exact SDF for an arbitrary triangle `p0`, `p1`, `p2`
///
/// Either winding order is accepted.
#[inline(always)]
pub fn sdf_triangle(p: Vec2, p0: Vec2, p1: Vec2, p2: Vec2) -> f32 {
    let e0 = p1 - p0;
    let e1 = p2 - p1;
    let e2 = p0 - p2;
    let v0 = p - p0;
    let v1 = p - p1;
    let v2 = p - p2;

    let pq0 = v0 - e0 * clamp(v0.dot(e0) / dot2(e0), 0.0, 1.0);
    let pq1 = v1 - e1 * clamp(v1.dot(e1) / dot2(e1), 0.0, 1.0);
    let pq2 = v2 - e2 * clamp(v2.dot(e2) / dot2(e2), 0.0, 1.0);

    // orientation of the triangle
    let s = sign(e0.x * e2.y - e0.y * e2.x);
    let d = Vec2::new(dot2(pq0), s * (v0.x * e0.y - v0.y * e0.x))
        .min(Vec2::new(dot2(pq1), s * (v1.x * e1.y - v1.y * e1.x)))
        .min(Vec2::new(dot2(pq2), s * (v2.x * e2.y - v2.y * e2.x)));

    -d.x.sqrt() * sign(d.y)
}
