//! Five-pointed star SDF (Deep Fried Edition)
//!
//! Based on Inigo Quilez's sdStar5 formula.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, sign};
use glam::Vec2;

/// Exact SDF for a five-pointed star, one tip pointing up
///
/// - `r`: tip radius
/// - `rf`: inner radius factor (0..1, fraction of `r` for the concave corners)
#[inline(always)]
pub fn sdf_star5(p: Vec2, r: f32, rf: f32) -> f32 {
    let k1 = Vec2::new(0.809_017, -0.587_785_24);
    let k2 = Vec2::new(-k1.x, k1.y);

    let mut p = Vec2::new(p.x.abs(), p.y);
    p -= 2.0 * k1.dot(p).max(0.0) * k1;
    p -= 2.0 * k2.dot(p).max(0.0) * k2;
    p = Vec2::new(p.x.abs(), p.y - r);

    let ba = rf * Vec2::new(-k1.y, k1.x) - Vec2::new(0.0, 1.0);
    let h = clamp(p.dot(ba) / ba.dot(ba), 0.0, r);
    (p - ba * h).length() * sign(p.y * ba.x - p.x * ba.y)
}
