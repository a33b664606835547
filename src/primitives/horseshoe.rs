//! Horseshoe SDF (Deep Fried Edition)
//!
//! U-shaped band: a ring arc continued by two straight legs.
//!
//! Based on Inigo Quilez's sdHorseshoe formula.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Exact SDF for a horseshoe
///
/// - `c`: `(cos, sin)` of the opening angle; `(0, 1)` gives a U open to +Y
/// - `radius`: ring radius
/// - `length`: length of the straight legs
/// - `thickness`: half-thickness of the band
#[inline(always)]
pub fn sdf_horseshoe(p: Vec2, c: Vec2, radius: f32, length: f32, thickness: f32) -> f32 {
    let px = p.x.abs();
    let l = Vec2::new(px, p.y).length();

    // Rotate by the opening angle
    let mut qx = -c.x * px + c.y * p.y;
    let mut qy = c.y * px + c.x * p.y;

    if !(qy > 0.0 || qx > 0.0) {
        qx = if -c.x > 0.0 { l } else { -l };
    }
    if qx <= 0.0 {
        qy = l;
    }

    let q = Vec2::new(qx - length, (qy - radius).abs() - thickness);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: Vec2 = Vec2::new(0.0, 1.0);

    #[test]
    fn test_horseshoe_bottom_of_arc() {
        let d = sdf_horseshoe(Vec2::new(0.0, -1.0), UP, 1.0, 0.5, 0.1);
        assert!((d + 0.1).abs() < 0.0001, "got {}", d);
    }

    #[test]
    fn test_horseshoe_leg() {
        let d = sdf_horseshoe(Vec2::new(1.0, 0.25), UP, 1.0, 0.5, 0.1);
        assert!((d + 0.1).abs() < 0.0001, "got {}", d);
        let d = sdf_horseshoe(Vec2::new(1.0, 1.0), UP, 1.0, 0.5, 0.1);
        assert!((d - 0.5).abs() < 0.0001, "got {}", d);
    }

    #[test]
    fn test_horseshoe_center_outside() {
        let d = sdf_horseshoe(Vec2::ZERO, UP, 1.0, 0.5, 0.1);
        assert!((d - 0.9).abs() < 0.0001, "got {}", d);
    }

    #[test]
    fn test_horseshoe_symmetry_x() {
        let c = Vec2::new(0.5, 0.866);
        let d1 = sdf_horseshoe(Vec2::new(0.5, 0.3), c, 1.0, 0.5, 0.2);
        let d2 = sdf_horseshoe(Vec2::new(-0.5, 0.3), c, 1.0, 0.5, 0.2);
        assert!((d1 - d2).abs() < 0.0001);
    }
}
