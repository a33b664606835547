//! Vesica SDFs (Deep Fried Edition)
//!
//! Lens formed by intersecting two equal circles, either centered and
//! vertical or spanning an arbitrary segment.
//!
//! Based on Inigo Quilez's sdVesica and sdVesicaSegment formulas.
//!
//! Author: Moroya Sakamoto

use crate::math::sign;
use glam::Vec2;

/// Exact SDF for a vertical vesica centered at origin
///
/// - `radius`: radius of the two arcs
/// - `d`: offset of the arc centers from the origin along X (`|d| < radius`)
///
/// The tips sit at `(0, ±sqrt(radius² - d²))`. A negative `d` moves each
/// arc center to the same side as its arc, giving the union of two disks.
#[inline(always)]
pub fn sdf_vesica(p: Vec2, radius: f32, d: f32) -> f32 {
    let p = p.abs();
    let b = (radius * radius - d * d).sqrt();

    if (p.y - b) * d > p.x * b {
        (p - Vec2::new(0.0, b)).length() * sign(d)
    } else {
        (p - Vec2::new(-d, 0.0)).length() - radius
    }
}

/// Exact SDF for a vesica whose tips are `a` and `b`
///
/// - `a`, `b`: tip positions
/// - `w`: half-width of the lens at its middle
#[inline(always)]
pub fn sdf_oriented_vesica(p: Vec2, a: Vec2, b: Vec2, w: f32) -> f32 {
    let r = 0.5 * (b - a).length();
    let d = 0.5 * (r * r - w * w) / w;
    let v = (b - a) / r;
    let c = (b + a) * 0.5;
    let q = p - c;
    // x: across the lens, y: along the lens (v has length 2)
    let q = 0.5 * Vec2::new(v.y * q.x - v.x * q.y, v.x * q.x + v.y * q.y).abs();

    let (h, hz) = if r * q.x < d * (q.y - r) {
        (Vec2::new(0.0, r), 0.0)
    } else {
        (Vec2::new(-d, 0.0), d + w)
    };
    (q - h).length() - hz
}
