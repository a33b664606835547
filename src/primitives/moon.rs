//! Moon (crescent) SDF (Deep Fried Edition)
//!
//! Disk of radius `ra` with a disk of radius `rb`, offset along +X,
//! carved out of it.
//!
//! Based on Inigo Quilez's sdMoon formula.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Exact SDF for a crescent moon
///
/// - `d`: distance between the two circle centers (along +X)
/// - `ra`: outer circle radius
/// - `rb`: carved circle radius
#[inline(always)]
pub fn sdf_moon(p: Vec2, d: f32, ra: f32, rb: f32) -> f32 {
    let p = Vec2::new(p.x, p.y.abs());
    let a = (ra * ra - rb * rb + d * d) / (2.0 * d);
    let b = (ra * ra - a * a).max(0.0).sqrt();

    // closest feature is one of the horn tips
    if d * (p.x * b - p.y * a) > d * d * (b - p.y).max(0.0) {
        return (p - Vec2::new(a, b)).length();
    }

    (p.length() - ra).max(-((p - Vec2::new(d, 0.0)).length() - rb))
}
