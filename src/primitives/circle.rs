//! Circle SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Signed distance to a circle centered at origin
///
/// # Arguments
/// * `p` - Point to evaluate (circle-local frame)
/// * `radius` - Circle radius
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_circle(p: Vec2, radius: f32) -> f32 {
    p.length() - radius
}
