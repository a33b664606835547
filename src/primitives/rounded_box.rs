//! Rounded box SDFs (Deep Fried Edition)
//!
//! Box with an independent radius per corner, plus the uniform-radius
//! square special case.
//!
//! Based on Inigo Quilez's sdRoundedBox formula.
//!
//! Author: Moroya Sakamoto

use glam::{Vec2, Vec4};

/// Exact SDF for a box with per-corner rounding
///
/// - `half_extents`: half width and half height (before rounding)
/// - `radii`: corner radii as `(top_right, bottom_right, top_left, bottom_left)`
///
/// The corner is picked from the query quadrant: `p.x <= 0` selects the
/// left pair, `p.y < 0` selects the bottom one.
#[inline(always)]
pub fn sdf_rounded_box(p: Vec2, half_extents: Vec2, radii: Vec4) -> f32 {
    let (top, bottom) = if p.x <= 0.0 {
        (radii.z, radii.w)
    } else {
        (radii.x, radii.y)
    };
    let r = if p.y < 0.0 { bottom } else { top };

    let q = p.abs() - half_extents + r;
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - r
}

/// Exact SDF for a square with uniformly rounded corners
///
/// - `half_size`: half the side length
/// - `radius`: corner radius
#[inline(always)]
pub fn sdf_round_square(p: Vec2, half_size: f32, radius: f32) -> f32 {
    let q = p.abs() - Vec2::splat(half_size - radius);
    q.x.max(q.y).min(0.0) + q.max(Vec2::ZERO).length() - radius
}
