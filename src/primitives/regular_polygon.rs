//! Regular polygon SDFs (Deep Fried Edition)
//!
//! Fixed pentagon, hexagon and octagon built from reflection folds, plus a
//! general N-gon folded by angle.
//!
//! The fixed shapes are sized by their apothem (center to edge); the N-gon
//! is sized by its circumradius (center to vertex).
//!
//! Based on Inigo Quilez's sdPentagon, sdHexagon, sdOctogon and
//! sdRegularPolygon formulas.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, fold, sign};
use glam::Vec2;

/// Exact SDF for a regular pentagon with a flat top edge
///
/// - `apothem`: center to edge distance (the top edge sits at `y = apothem`)
#[inline(always)]
pub fn sdf_pentagon(p: Vec2, apothem: f32) -> f32 {
    const K: [f32; 3] = [0.809_017, 0.587_785_24, 0.726_542_5];

    let mut p = Vec2::new(p.x.abs(), p.y);
    p = fold(p, Vec2::new(-K[0], K[1]));
    p = fold(p, Vec2::new(K[0], K[1]));
    p -= Vec2::new(clamp(p.x, -apothem * K[2], apothem * K[2]), apothem);
    p.length() * sign(p.y)
}

/// Exact SDF for a regular hexagon with flat top and bottom edges
///
/// - `apothem`: center to edge distance
#[inline(always)]
pub fn sdf_hexagon(p: Vec2, apothem: f32) -> f32 {
    const K: [f32; 3] = [-0.866_025_4, 0.5, 0.577_350_26];

    let mut p = p.abs();
    p = fold(p, Vec2::new(K[0], K[1]));
    p -= Vec2::new(clamp(p.x, -K[2] * apothem, K[2] * apothem), apothem);
    p.length() * sign(p.y)
}

/// Exact SDF for a regular octagon with axis-aligned edges
///
/// - `apothem`: center to edge distance
#[inline(always)]
pub fn sdf_octagon(p: Vec2, apothem: f32) -> f32 {
    const K: [f32; 3] = [-0.923_879_5, 0.382_683_43, 0.414_213_57];

    let mut p = p.abs();
    p = fold(p, Vec2::new(K[0], K[1]));
    p = fold(p, Vec2::new(-K[0], K[1]));
    p -= Vec2::new(clamp(p.x, -K[2] * apothem, K[2] * apothem), apothem);
    p.length() * sign(p.y)
}

/// Exact SDF for a regular N-gon with a vertex on +X
///
/// - `circumradius`: center to vertex distance
/// - `n`: number of sides (3 or more)
#[inline(always)]
pub fn sdf_regular_polygon(p: Vec2, circumradius: f32, n: u32) -> f32 {
    let an = std::f32::consts::PI / n as f32;
    let acs = Vec2::new(an.cos(), an.sin());

    // Rotate into the sector centered on +X, then mirror
    let mut fm = p.y.atan2(p.x) % (2.0 * an);
    if fm < 0.0 {
        fm += 2.0 * an;
    }
    let bn = fm - an;
    let mut q = Vec2::new(bn.cos(), bn.sin().abs()) * p.length();

    q -= acs * circumradius;
    q.y += clamp(-q.y, 0.0, acs.y * circumradius);
    q.length() * sign(q.x)
}
