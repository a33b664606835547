//! Shared numeric helpers for the 2D primitives
//!
//! Small scalar/vector utilities every primitive leans on. They mirror the
//! C math library semantics the distance formulas were derived against:
//! `min`/`max` ignore a NaN operand, and `sign` keeps zero at zero.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;

/// Tri-state sign: `-1.0`, `0.0` or `+1.0`.
///
/// Unlike `f32::signum`, zero (and NaN) map to `0.0`, so a boundary point
/// whose sign test is ambiguous still ends up at exactly zero distance.
#[inline(always)]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamp `x` into `[lo, hi]` as `max(lo, min(x, hi))`.
///
/// A NaN `x` collapses to `hi` instead of propagating (C `fminf` semantics),
/// which keeps projections onto zero-length edges well defined.
#[inline(always)]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.min(hi).max(lo)
}

/// Dot product variation: a.x*b.x - a.y*b.y
#[inline(always)]
pub fn ndot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x - a.y * b.y
}

/// Squared length.
#[inline(always)]
pub fn dot2(v: Vec2) -> f32 {
    v.dot(v)
}

/// Reflect `p` across the line through the origin with unit normal `n`,
/// but only when `p` lies on the negative side of it.
///
/// This is the fundamental-domain fold used by the regular shapes.
#[inline(always)]
pub fn fold(p: Vec2, n: Vec2) -> Vec2 {
    p - 2.0 * n.dot(p).min(0.0) * n
}
