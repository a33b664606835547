//! Pie SDF (Deep Fried Edition)
//!
//! Circular sector symmetric about the +Y axis.
//!
//! Based on Inigo Quilez's sdPie formula.
//!
//! Author: Moroya Sakamoto

use crate::math::clamp;
use glam::Vec2;

/// Exact SDF for a circular sector
///
/// - `c`: `(sin, cos)` of the half-aperture angle, measured from +Y
/// - `radius`: sector radius
#[inline(always)]
pub fn sdf_pie(p: Vec2, c: Vec2, radius: f32) -> f32 {
    let p = Vec2::new(p.x.abs(), p.y);
    let l = p.length() - radius;
    let m = (p - c * clamp(p.dot(c), 0.0, radius)).length();
    let s = if c.y * p.x - c.x * p.y > 0.0 { 1.0 } else { -1.0 };
    l.max(m * s)
}
