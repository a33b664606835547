//! Uneven Capsule SDF (Deep Fried Edition)
//!
//! Two circles of different radii joined by their common tangents.
//!
//! Based on Inigo Quilez's 2D Uneven Capsule formula.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Exact SDF for an uneven capsule
///
/// - `r1`: radius of the circle at the origin
/// - `r2`: radius of the circle at `(0, height)`
/// - `height`: distance between the two circle centers
///
/// Requires `|r1 - r2| < height`; otherwise the tangent direction does not
/// exist and the result is NaN.
#[inline(always)]
pub fn sdf_uneven_capsule(p: Vec2, r1: f32, r2: f32, height: f32) -> f32 {
    let p = Vec2::new(p.x.abs(), p.y);
    let b = (r1 - r2) / height;
    let a = (1.0 - b * b).sqrt();
    let k = Vec2::new(-b, a).dot(p);

    if k < 0.0 {
        return p.length() - r1;
    }
    if k > a * height {
        return (p - Vec2::new(0.0, height)).length() - r2;
    }
    p.dot(Vec2::new(a, b)) - r1
}
