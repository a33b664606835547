//! Cut Disk SDF (Deep Fried Edition)
//!
//! Disk with everything below a horizontal chord removed.
//!
//! Based on Inigo Quilez's sdCutDisk formula.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Exact SDF for a disk cut by the line `y = h`
///
/// - `radius`: disk radius
/// - `h`: signed height of the cut line, `-radius < h < radius`
#[inline(always)]
pub fn sdf_cut_disk(p: Vec2, radius: f32, h: f32) -> f32 {
    let w = (radius * radius - h * h).sqrt();
    let p = Vec2::new(p.x.abs(), p.y);

    let s = ((h - radius) * p.x * p.x + w * w * (h + radius - 2.0 * p.y))
        .max(h * p.x - w * p.y);

    if s < 0.0 {
        p.length() - radius
    } else if p.x < w {
        h - p.y
    } else {
        (p - Vec2::new(w, h)).length()
    }
}
