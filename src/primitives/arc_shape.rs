//! Arc SDF (Deep Fried Edition)
//!
//! Thick circular arc, symmetric about the +Y axis.
//!
//! Based on Inigo Quilez's sdArc formula.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Exact SDF for a circular arc with round caps
///
/// - `sc`: `(sin, cos)` of the half-aperture, measured from +Y
/// - `ra`: arc radius
/// - `rb`: half-thickness
#[inline(always)]
pub fn sdf_arc(p: Vec2, sc: Vec2, ra: f32, rb: f32) -> f32 {
    let p = Vec2::new(p.x.abs(), p.y);
    if sc.y * p.x > sc.x * p.y {
        (p - sc * ra).length() - rb
    } else {
        (p.length() - ra).abs() - rb
    }
}
