//! Parallelogram SDF (Deep Fried Edition)
//!
//! Based on Inigo Quilez's sdParallelogram formula.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, dot2, sign};
use glam::Vec2;

/// Exact SDF for a parallelogram centered at origin
///
/// - `half_width`: half the horizontal edge length
/// - `half_height`: half the height along Y
/// - `skew`: horizontal offset of the top edge relative to the bottom
#[inline(always)]
pub fn sdf_parallelogram(p: Vec2, half_width: f32, half_height: f32, skew: f32) -> f32 {
    let e = Vec2::new(skew, half_height);
    let mut p = if p.y < 0.0 { -p } else { p };

    // horizontal edge
    let mut w = p - e;
    w.x -= clamp(w.x, -half_width, half_width);
    let mut d = Vec2::new(dot2(w), -w.y);

    // slanted edge
    let s = p.x * e.y - p.y * e.x;
    if s < 0.0 {
        p = -p;
    }
    let mut v = p - Vec2::new(half_width, 0.0);
    v -= e * clamp(v.dot(e) / dot2(e), -1.0, 1.0);
    d = d.min(Vec2::new(dot2(v), half_width * half_height - s.abs()));

    d.x.sqrt() * sign(-d.y)
}
