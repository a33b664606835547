//! Arbitrary polygon SDF (Deep Fried Edition)
//!
//! Simple polygon (convex or concave) given as a closed vertex loop.
//! Distance is the nearest edge; sign comes from a crossing-number test.
//!
//! Based on Inigo Quilez's sdPolygon formula.
//!
//! Author: Moroya Sakamoto

use crate::math::clamp;
use glam::Vec2;

/// Exact SDF for a polygon given as a vertex slice
///
/// Either winding works. An empty slice yields `f32::INFINITY`.
#[inline]
pub fn sdf_polygon(p: Vec2, vertices: &[Vec2]) -> f32 {
    polygon_distance(p, vertices.len(), |i| vertices[i])
}

/// Exact SDF for a polygon given as separate coordinate slices
///
/// `xs` and `ys` must have the same length (checked in debug builds);
/// release builds use the first `min(xs.len(), ys.len())` vertices.
#[inline]
pub fn sdf_polygon_xy(p: Vec2, xs: &[f32], ys: &[f32]) -> f32 {
    debug_assert_eq!(xs.len(), ys.len(), "coordinate slices differ in length");
    polygon_distance(p, xs.len().min(ys.len()), |i| Vec2::new(xs[i], ys[i]))
}

pub(crate) fn polygon_distance(p: Vec2, n: usize, vertex: impl Fn(usize) -> Vec2) -> f32 {
    if n == 0 {
        return f32::INFINITY;
    }

    let mut d = (p - vertex(0)).length_squared();
    let mut s = 1.0;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertex(i);
        let vj = vertex(j);
        let e = vj - vi;
        let w = p - vi;
        let b = w - e * clamp(w.dot(e) / e.dot(e), 0.0, 1.0);
        d = d.min(b.length_squared());

        let c1 = p.y >= vi.y;
        let c2 = p.y < vj.y;
        let c3 = e.x * w.y > e.y * w.x;
        if (c1 && c2 && c3) || (!c1 && !c2 && !c3) {
            s = -s;
        }
        j = i;
    }
    s * d.sqrt()
}
