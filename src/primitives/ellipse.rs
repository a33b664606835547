//! Ellipse SDF (Deep Fried Edition)
//!
//! Axis-aligned ellipse, nearest point found by a fixed three-step
//! iteration on the curve parameter.
//!
//! Based on Inigo Quilez's sdEllipse (tt3yz7) formula.
//!
//! Author: Moroya Sakamoto

use crate::math::clamp;
use glam::Vec2;

const ITERATIONS: usize = 3;

/// Approximate SDF for an ellipse with semi-axes `e`
///
/// Exact on the axes and on circles; off-axis error stays small after
/// three refinement steps.
#[inline(always)]
pub fn sdf_ellipse(p: Vec2, e: Vec2) -> f32 {
    let p = p.abs();
    let ei = e.recip();
    let e2 = e * e;
    let ve = ei * Vec2::new(e2.x - e2.y, e2.y - e2.x);

    let mut t = Vec2::splat(std::f32::consts::FRAC_1_SQRT_2);
    for _ in 0..ITERATIONS {
        let v = ve * t * t * t;
        let tm = p - v;
        let u = tm / tm.length() * (t * e - v).length();
        let w = ei * (v + u);
        // NaN (p at the evolute) collapses to the upper bound
        let c = Vec2::new(clamp(w.x, 0.0, 1.0), clamp(w.y, 0.0, 1.0));
        t = c / c.length();
    }

    let nearest = t * e;
    let d = (p - nearest).length();
    if p.length_squared() < nearest.length_squared() {
        -d
    } else {
        d
    }
}
