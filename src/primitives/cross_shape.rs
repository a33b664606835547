//! Cross SDF (Deep Fried Edition)
//!
//! Plus sign made of two perpendicular bars, with exact interior distance
//! at the inner corners.
//!
//! Based on Inigo Quilez's sdCross formula.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Exact SDF for a plus-shaped cross
///
/// - `b`: `(arm_half_length, arm_half_thickness)`
/// - `r`: uniform offset added to the distance (rounding)
#[inline(always)]
pub fn sdf_cross(p: Vec2, b: Vec2, r: f32) -> f32 {
    let mut p = p.abs();
    if p.y > p.x {
        p = Vec2::new(p.y, p.x);
    }
    let q = p - b;
    let k = q.x.max(q.y);
    let w = if k > 0.0 {
        q
    } else {
        Vec2::new(b.y - p.x, -k)
    };
    let d = w.max(Vec2::ZERO).length();
    (if k > 0.0 { d } else { -d }) + r
}
