//! Parabola SDF (Deep Fried Edition)
//!
//! Infinite parabola `y = k·x²`, solved in closed form through its cubic.
//!
//! Based on Inigo Quilez's sdParabola formula.
//!
//! Author: Moroya Sakamoto

use crate::math::sign;
use glam::Vec2;

/// Exact SDF for the parabola `y = k·x²`
///
/// The region above the curve (the side containing `+k·∞`) is inside.
#[inline(always)]
pub fn sdf_parabola(p: Vec2, k: f32) -> f32 {
    let px = p.x.abs();
    let ik = 1.0 / k;
    let pp = ik * (p.y - 0.5 * ik) / 3.0;
    let q = 0.25 * ik * ik * px;
    let h = q * q - pp * pp * pp;
    let r = h.abs().sqrt();

    // Cardano for one real root, trigonometric form for three
    let x = if h > 0.0 {
        (q + r).cbrt() + (q - r).abs().cbrt() * sign(pp)
    } else {
        2.0 * (r.atan2(q) / 3.0).cos() * pp.sqrt()
    };

    let d = Vec2::new(px - x, p.y - k * x * x).length();
    // On the axis the Cardano root is exactly 0; fall back to the curve side
    if px < x || (px == x && p.y > k * x * x) {
        -d
    } else {
        d
    }
}
