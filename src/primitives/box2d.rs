//! Box SDFs (Deep Fried Edition)
//!
//! Axis-aligned box and a box oriented along an arbitrary spine segment.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Exact SDF for an axis-aligned box centered at origin
///
/// - `half_extents`: half width and half height
#[inline(always)]
pub fn sdf_box(p: Vec2, half_extents: Vec2) -> f32 {
    let d = p.abs() - half_extents;
    d.max(Vec2::ZERO).length() + d.x.max(d.y).min(0.0)
}

/// Exact SDF for a box whose long axis is the segment `a`-`b`
///
/// - `a`, `b`: spine endpoints (the box spans exactly from `a` to `b`)
/// - `thickness`: half-thickness perpendicular to the spine
///
/// Based on Inigo Quilez's sdOrientedBox formula.
#[inline(always)]
pub fn sdf_oriented_box(p: Vec2, a: Vec2, b: Vec2, thickness: f32) -> f32 {
    let l = (b - a).length();
    let d = (b - a) / l;
    let c = p - (a + b) * 0.5;
    // rotate into the box frame
    let q = Vec2::new(d.x * c.x + d.y * c.y, -d.y * c.x + d.x * c.y).abs()
        - Vec2::new(l * 0.5, thickness);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0)
}
