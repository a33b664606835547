//! Rounded X SDF (Deep Fried Edition)
//!
//! Two crossing diagonal strokes with round ends.
//!
//! Based on Inigo Quilez's sdRoundedX formula.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Exact SDF for a rounded X
///
/// - `w`: the strokes run between `(±w/2, ±w/2)`
/// - `r`: stroke radius
#[inline(always)]
pub fn sdf_rounded_x(p: Vec2, w: f32, r: f32) -> f32 {
    let p = p.abs();
    (p - Vec2::splat((p.x + p.y).min(w) * 0.5)).length() - r
}
