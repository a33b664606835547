//! Rhombus SDF (Deep Fried Edition)
//!
//! 2D rhombus (diamond shape) centered at origin.
//!
//! Based on Inigo Quilez's sdRhombus formula.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, dot2, ndot, sign};
use glam::Vec2;

/// Exact SDF for a rhombus centered at origin
///
/// - `half_diagonals`: half-diagonal lengths along X and Y
///
/// Both half-diagonals zero is outside the parameter range: the projection
/// degenerates and every point evaluates to zero.
#[inline(always)]
pub fn sdf_rhombus(p: Vec2, half_diagonals: Vec2) -> f32 {
    let p = p.abs();
    let b = half_diagonals;
    let h = clamp(ndot(b - 2.0 * p, b) / dot2(b), -1.0, 1.0);
    let d = (p - 0.5 * b * Vec2::new(1.0 - h, 1.0 + h)).length();
    d * sign(p.x * b.y + p.y * b.x - b.x * b.y)
}
