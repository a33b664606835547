//! Hexagram SDF (Deep Fried Edition)
//!
//! Six-pointed star made of two overlapping triangles.
//!
//! Based on Inigo Quilez's sdHexagram formula.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, fold, sign};
use glam::Vec2;

/// Exact SDF for a hexagram
///
/// - `r`: distance from the center to the inner hexagon's edges; tips sit at
///   `2r` on the vertical axis
#[inline(always)]
pub fn sdf_hexagram(p: Vec2, r: f32) -> f32 {
    const K: [f32; 4] = [-0.5, 0.866_025_4, 0.577_350_26, 1.732_050_8];

    let mut p = p.abs();
    p = fold(p, Vec2::new(K[0], K[1]));
    p = fold(p, Vec2::new(K[1], K[0]));
    p -= Vec2::new(clamp(p.x, r * K[2], r * K[3]), r);
    p.length() * sign(p.y)
}
