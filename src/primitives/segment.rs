//! Segment SDF (Deep Fried Edition)
//!
//! Unsigned distance to a line segment. A segment has no interior, so the
//! result is never negative.
//!
//! Based on Inigo Quilez's sdSegment formula.
//!
//! Author: Moroya Sakamoto

use crate::math::{clamp, dot2};
use glam::Vec2;

/// Distance from `p` to the segment `a`-`b`
///
/// A zero-length segment degrades to the distance to the point `a`.
#[inline(always)]
pub fn sdf_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let h = clamp(pa.dot(ba) / dot2(ba), 0.0, 1.0);
    (pa - ba * h).length()
}
