//! Tunnel SDF (Deep Fried Edition)
//!
//! Arch shape: a rectangle with a half-disk on top.
//!
//! Based on Inigo Quilez's sdTunnel formula.
//!
//! Author: Moroya Sakamoto

use crate::math::dot2;
use glam::Vec2;

/// Exact SDF for a tunnel (arch)
///
/// - `wh`: `(half_width, height)`; the straight part spans
///   `y ∈ [-height, 0]`, the half-disk of radius `half_width` sits on top.
#[inline(always)]
pub fn sdf_tunnel(p: Vec2, wh: Vec2) -> f32 {
    let p = Vec2::new(p.x.abs(), -p.y);
    let mut q = p - wh;

    let d1 = dot2(Vec2::new(q.x.max(0.0), q.y));
    if p.y <= 0.0 {
        q.x = p.length() - wh.x;
    }
    let d2 = dot2(Vec2::new(q.x, q.y.max(0.0)));

    let d = d1.min(d2).sqrt();
    if q.x.max(q.y) < 0.0 {
        -d
    } else {
        d
    }
}
