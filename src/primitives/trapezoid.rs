//! Trapezoid SDF (Deep Fried Edition)
//!
//! Isosceles trapezoid with independent base and cap widths.
//!
//! Based on Inigo Quilez's sdTrapezoid formula.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, dot2};
use glam::Vec2;

/// Exact SDF for an isosceles trapezoid centered at origin
///
/// - `r1`: half-width of the base (at `y = -half_height`)
/// - `r2`: half-width of the cap (at `y = +half_height`)
/// - `half_height`: half the height along Y
#[inline(always)]
pub fn sdf_trapezoid(p: Vec2, r1: f32, r2: f32, half_height: f32) -> f32 {
    let px = p.x.abs();
    let py = p.y;
    let k1 = Vec2::new(r2, half_height);
    let k2 = Vec2::new(r2 - r1, 2.0 * half_height);
    let q = Vec2::new(px, py);

    let ca = Vec2::new(
        px - px.min(if py < 0.0 { r1 } else { r2 }),
        py.abs() - half_height,
    );
    let cb = q - k1 + k2 * clamp((k1 - q).dot(k2) / dot2(k2), 0.0, 1.0);

    let s = if cb.x < 0.0 && ca.y < 0.0 { -1.0 } else { 1.0 };
    s * dot2(ca).min(dot2(cb)).sqrt()
}
