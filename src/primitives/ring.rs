//! Ring SDF (Deep Fried Edition)
//!
//! Thick ring with a symmetric gap cut by two radial lines.
//!
//! Based on Inigo Quilez's sdRing formula.
//!
//! Author: Moroya Sakamoto

use crate::math::sign;
use glam::Vec2;

/// SDF for an open ring
///
/// - `n`: `(cos θ, sin θ)` with `θ` in `[0, π]`; the band keeps the arc of
///   half-angle `θ` around `+Y` and the gap opens toward `-Y`
/// - `radius`: ring radius
/// - `thickness`: full band thickness
///
/// With `n.y < 0` the band end falls on the mirrored half and the field
/// jumps across the gap boundary.
#[inline(always)]
pub fn sdf_ring(p: Vec2, n: Vec2, radius: f32, thickness: f32) -> f32 {
    let p = Vec2::new(p.x.abs(), p.y);
    // rotate by θ so the band end lands on +Y
    let p = Vec2::new(n.x * p.x - n.y * p.y, n.y * p.x + n.x * p.y);

    let band = (p.length() - radius).abs() - thickness * 0.5;
    let cap = Vec2::new(p.x, ((radius - p.y).abs() - thickness * 0.5).max(0.0)).length()
        * sign(p.x);
    band.max(cap)
}
