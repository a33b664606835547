//! Egg SDF (Deep Fried Edition)
//!
//! Simple 2D egg built from three circular arcs.
//!
//! Based on Inigo Quilez's Simple Egg formula.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// SDF for a 2D egg, wide end down
///
/// - `ra`: radius of the bottom half-disk
/// - `rb`: radius of the rounded tip
#[inline(always)]
pub fn sdf_egg(p: Vec2, ra: f32, rb: f32) -> f32 {
    const K: f32 = 1.732_050_8; // sqrt(3)

    let p = Vec2::new(p.x.abs(), p.y);
    let r = ra - rb;

    let d = if p.y < 0.0 {
        p.length() - r
    } else if K * (p.x + r) < p.y {
        Vec2::new(p.x, p.y - K * r).length()
    } else {
        Vec2::new(p.x + r, p.y).length() - 2.0 * r
    };
    d - rb
}
