//! Quad SDF (Deep Fried Edition)
//!
//! Convex quadrilateral from four explicit vertices.
//!
//! Based on Inigo Quilez's sdQuad formula.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, dot2, sign};
use glam::Vec2;

/// Exact SDF for a convex quadrilateral `p0`..`p3`
///
/// Vertices must be listed clockwise (Y up). Counter-clockwise input flips
/// the sign of the result; the winding is not normalized here.
#[inline(always)]
pub fn sdf_quad(p: Vec2, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    let verts = [p0, p1, p2, p3];
    let mut d = Vec2::splat(f32::MAX);

    for i in 0..4 {
        let a = verts[i];
        let e = verts[(i + 1) % 4] - a;
        let v = p - a;
        let pq = v - e * clamp(v.dot(e) / dot2(e), 0.0, 1.0);
        d = d.min(Vec2::new(dot2(pq), v.x * e.y - v.y * e.x));
    }

    -d.x.sqrt() * sign(d.y)
}
