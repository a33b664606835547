//! Primitive 2D SDF shapes (Deep Fried Edition)
//!
//! Every primitive is a pure `sdf_*` function of a query point in the
//! shape's local frame. `PrimitiveType` adds flat-parameter dispatch on top
//! for callers that only know the shape at runtime.
//!
//! # Deep Fried Optimizations
//! - **Enum Dispatch**: `#[repr(u8)]` primitive ids, integer matching instead of strings.
//! - **No Allocation**: polygons are read straight out of the parameter slice.
//!
//! Author: Moroya Sakamoto

mod arc_shape;
mod box2d;
mod circle;
mod cross_shape;
mod cut_disk;
mod egg;
mod ellipse;
mod hexagram;
mod horseshoe;
mod moon;
mod parabola;
mod parallelogram;
mod pie;
mod polygon;
mod quad;
mod regular_polygon;
mod rhombus;
mod ring;
mod rounded_box;
mod rounded_x;
mod segment;
mod star5;
mod trapezoid;
mod triangle;
mod tunnel;
mod uneven_capsule;
mod vesica;

pub use arc_shape::sdf_arc;
pub use box2d::{sdf_box, sdf_oriented_box};
pub use circle::sdf_circle;
pub use cross_shape::sdf_cross;
pub use cut_disk::sdf_cut_disk;
pub use egg::sdf_egg;
pub use ellipse::sdf_ellipse;
pub use hexagram::sdf_hexagram;
pub use horseshoe::sdf_horseshoe;
pub use moon::sdf_moon;
pub use parabola::sdf_parabola;
pub use parallelogram::sdf_parallelogram;
pub use pie::sdf_pie;
pub use polygon::{sdf_polygon, sdf_polygon_xy};
pub use quad::sdf_quad;
pub use regular_polygon::{sdf_hexagon, sdf_octagon, sdf_pentagon, sdf_regular_polygon};
pub use rhombus::sdf_rhombus;
pub use ring::sdf_ring;
pub use rounded_box::{sdf_round_square, sdf_rounded_box};
pub use rounded_x::sdf_rounded_x;
pub use segment::sdf_segment;
pub use star5::sdf_star5;
pub use trapezoid::sdf_trapezoid;
pub use triangle::{sdf_equilateral_triangle, sdf_triangle, sdf_triangle_isosceles};
pub use tunnel::sdf_tunnel;
pub use uneven_capsule::sdf_uneven_capsule;
pub use vesica::{sdf_oriented_vesica, sdf_vesica};

use crate::types::ShapeError;
use glam::{Vec2, Vec4};
use std::fmt;
use std::str::FromStr;

/// Primitive type identifier for fast dispatch
///
/// #[repr(u8)] ensures it compiles to a single byte, friendly for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrimitiveType {
    /// Circle
    Circle,
    /// Line segment (zero thickness)
    Segment,
    /// Axis-aligned box
    Box,
    /// Box around a segment
    OrientedBox,
    /// Box with per-corner radii
    RoundedBox,
    /// Square with uniform corner radius
    RoundSquare,
    /// Rhombus
    Rhombus,
    /// Isosceles trapezoid
    Trapezoid,
    /// Parallelogram
    Parallelogram,
    /// Equilateral triangle
    EquilateralTriangle,
    /// Isosceles triangle
    TriangleIsosceles,
    /// Triangle (3 vertices)
    Triangle,
    /// Convex quad (4 clockwise vertices)
    Quad,
    /// Capsule with different end radii
    UnevenCapsule,
    /// Egg
    Egg,
    /// Pie slice
    Pie,
    /// Disk with a cut chord
    CutDisk,
    /// Crescent moon
    Moon,
    /// Vertical vesica
    Vesica,
    /// Vesica between two points
    OrientedVesica,
    /// Tunnel (arch)
    Tunnel,
    /// Circular arc
    Arc,
    /// Open ring
    Ring,
    /// Horseshoe
    Horseshoe,
    /// Parabola
    Parabola,
    /// Plus-shaped cross
    Cross,
    /// Rounded X
    RoundedX,
    /// Ellipse
    Ellipse,
    /// Five-pointed star
    Star5,
    /// Hexagram
    Hexagram,
    /// Regular pentagon (apothem)
    Pentagon,
    /// Regular hexagon (apothem)
    Hexagon,
    /// Regular octagon (apothem)
    Octagon,
    /// Regular N-gon (circumradius)
    RegularPolygon,
    /// Arbitrary polygon
    Polygon,
}

impl PrimitiveType {
    /// Every primitive, in id order
    pub const ALL: [PrimitiveType; 35] = [
        PrimitiveType::Circle,
        PrimitiveType::Segment,
        PrimitiveType::Box,
        PrimitiveType::OrientedBox,
        PrimitiveType::RoundedBox,
        PrimitiveType::RoundSquare,
        PrimitiveType::Rhombus,
        PrimitiveType::Trapezoid,
        PrimitiveType::Parallelogram,
        PrimitiveType::EquilateralTriangle,
        PrimitiveType::TriangleIsosceles,
        PrimitiveType::Triangle,
        PrimitiveType::Quad,
        PrimitiveType::UnevenCapsule,
        PrimitiveType::Egg,
        PrimitiveType::Pie,
        PrimitiveType::CutDisk,
        PrimitiveType::Moon,
        PrimitiveType::Vesica,
        PrimitiveType::OrientedVesica,
        PrimitiveType::Tunnel,
        PrimitiveType::Arc,
        PrimitiveType::Ring,
        PrimitiveType::Horseshoe,
        PrimitiveType::Parabola,
        PrimitiveType::Cross,
        PrimitiveType::RoundedX,
        PrimitiveType::Ellipse,
        PrimitiveType::Star5,
        PrimitiveType::Hexagram,
        PrimitiveType::Pentagon,
        PrimitiveType::Hexagon,
        PrimitiveType::Octagon,
        PrimitiveType::RegularPolygon,
        PrimitiveType::Polygon,
    ];

    /// Stable snake_case name, used by the CLI and `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Circle => "circle",
            PrimitiveType::Segment => "segment",
            PrimitiveType::Box => "box",
            PrimitiveType::OrientedBox => "oriented_box",
            PrimitiveType::RoundedBox => "rounded_box",
            PrimitiveType::RoundSquare => "round_square",
            PrimitiveType::Rhombus => "rhombus",
            PrimitiveType::Trapezoid => "trapezoid",
            PrimitiveType::Parallelogram => "parallelogram",
            PrimitiveType::EquilateralTriangle => "equilateral_triangle",
            PrimitiveType::TriangleIsosceles => "triangle_isosceles",
            PrimitiveType::Triangle => "triangle",
            PrimitiveType::Quad => "quad",
            PrimitiveType::UnevenCapsule => "uneven_capsule",
            PrimitiveType::Egg => "egg",
            PrimitiveType::Pie => "pie",
            PrimitiveType::CutDisk => "cut_disk",
            PrimitiveType::Moon => "moon",
            PrimitiveType::Vesica => "vesica",
            PrimitiveType::OrientedVesica => "oriented_vesica",
            PrimitiveType::Tunnel => "tunnel",
            PrimitiveType::Arc => "arc",
            PrimitiveType::Ring => "ring",
            PrimitiveType::Horseshoe => "horseshoe",
            PrimitiveType::Parabola => "parabola",
            PrimitiveType::Cross => "cross",
            PrimitiveType::RoundedX => "rounded_x",
            PrimitiveType::Ellipse => "ellipse",
            PrimitiveType::Star5 => "star5",
            PrimitiveType::Hexagram => "hexagram",
            PrimitiveType::Pentagon => "pentagon",
            PrimitiveType::Hexagon => "hexagon",
            PrimitiveType::Octagon => "octagon",
            PrimitiveType::RegularPolygon => "regular_polygon",
            PrimitiveType::Polygon => "polygon",
        }
    }

    /// Number of flat parameters, `None` for the variable-length polygon
    ///
    /// Polygon parameters are interleaved vertex coordinates `x0, y0, x1, y1, ...`.
    pub fn param_count(self) -> Option<usize> {
        let n = match self {
            PrimitiveType::Circle
            | PrimitiveType::EquilateralTriangle
            | PrimitiveType::Parabola
            | PrimitiveType::Hexagram
            | PrimitiveType::Pentagon
            | PrimitiveType::Hexagon
            | PrimitiveType::Octagon => 1,
            PrimitiveType::Box
            | PrimitiveType::RoundSquare
            | PrimitiveType::Rhombus
            | PrimitiveType::TriangleIsosceles
            | PrimitiveType::Egg
            | PrimitiveType::CutDisk
            | PrimitiveType::Vesica
            | PrimitiveType::Tunnel
            | PrimitiveType::RoundedX
            | PrimitiveType::Ellipse
            | PrimitiveType::Star5
            | PrimitiveType::RegularPolygon => 2,
            PrimitiveType::Trapezoid
            | PrimitiveType::Parallelogram
            | PrimitiveType::UnevenCapsule
            | PrimitiveType::Pie
            | PrimitiveType::Moon
            | PrimitiveType::Cross => 3,
            PrimitiveType::Segment | PrimitiveType::Arc | PrimitiveType::Ring => 4,
            PrimitiveType::OrientedBox
            | PrimitiveType::OrientedVesica
            | PrimitiveType::Horseshoe => 5,
            PrimitiveType::RoundedBox | PrimitiveType::Triangle => 6,
            PrimitiveType::Quad => 8,
            PrimitiveType::Polygon => return None,
        };
        Some(n)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        PrimitiveType::ALL
            .iter()
            .copied()
            .find(|p| p.name() == key)
            .ok_or_else(|| ShapeError::UnknownPrimitive(s.to_string()))
    }
}

#[inline(always)]
fn v2(params: &[f32], i: usize) -> Vec2 {
    Vec2::new(params[i], params[i + 1])
}

/// Evaluate a primitive SDF using fast Enum dispatch
///
/// # Arguments
/// * `prim` - Primitive type enum (fast integer comparison)
/// * `point` - Point to evaluate, in the primitive's local frame
/// * `params` - Flat parameters, laid out as in [`PrimitiveType::param_count`]
///
/// Returns `None` when `params` is too short (or, for a polygon, has odd length).
/// Values are not range checked; see [`crate::types::Shape2d::validate`].
#[inline(always)]
pub fn eval_primitive(prim: PrimitiveType, point: Vec2, params: &[f32]) -> Option<f32> {
    let p = params;
    match prim.param_count() {
        Some(n) if p.len() < n => return None,
        None if p.len() % 2 != 0 => return None,
        _ => {}
    }

    let d = match prim {
        PrimitiveType::Circle => sdf_circle(point, p[0]),
        PrimitiveType::Segment => sdf_segment(point, v2(p, 0), v2(p, 2)),
        PrimitiveType::Box => sdf_box(point, v2(p, 0)),
        PrimitiveType::OrientedBox => sdf_oriented_box(point, v2(p, 0), v2(p, 2), p[4]),
        PrimitiveType::RoundedBox => {
            sdf_rounded_box(point, v2(p, 0), Vec4::new(p[2], p[3], p[4], p[5]))
        }
        PrimitiveType::RoundSquare => sdf_round_square(point, p[0], p[1]),
        PrimitiveType::Rhombus => sdf_rhombus(point, v2(p, 0)),
        PrimitiveType::Trapezoid => sdf_trapezoid(point, p[0], p[1], p[2]),
        PrimitiveType::Parallelogram => sdf_parallelogram(point, p[0], p[1], p[2]),
        PrimitiveType::EquilateralTriangle => sdf_equilateral_triangle(point, p[0]),
        PrimitiveType::TriangleIsosceles => sdf_triangle_isosceles(point, v2(p, 0)),
        PrimitiveType::Triangle => sdf_triangle(point, v2(p, 0), v2(p, 2), v2(p, 4)),
        PrimitiveType::Quad => sdf_quad(point, v2(p, 0), v2(p, 2), v2(p, 4), v2(p, 6)),
        PrimitiveType::UnevenCapsule => sdf_uneven_capsule(point, p[0], p[1], p[2]),
        PrimitiveType::Egg => sdf_egg(point, p[0], p[1]),
        PrimitiveType::Pie => sdf_pie(point, v2(p, 0), p[2]),
        PrimitiveType::CutDisk => sdf_cut_disk(point, p[0], p[1]),
        PrimitiveType::Moon => sdf_moon(point, p[0], p[1], p[2]),
        PrimitiveType::Vesica => sdf_vesica(point, p[0], p[1]),
        PrimitiveType::OrientedVesica => sdf_oriented_vesica(point, v2(p, 0), v2(p, 2), p[4]),
        PrimitiveType::Tunnel => sdf_tunnel(point, v2(p, 0)),
        PrimitiveType::Arc => sdf_arc(point, v2(p, 0), p[2], p[3]),
        PrimitiveType::Ring => sdf_ring(point, v2(p, 0), p[2], p[3]),
        PrimitiveType::Horseshoe => sdf_horseshoe(point, v2(p, 0), p[2], p[3], p[4]),
        PrimitiveType::Parabola => sdf_parabola(point, p[0]),
        PrimitiveType::Cross => sdf_cross(point, v2(p, 0), p[2]),
        PrimitiveType::RoundedX => sdf_rounded_x(point, p[0], p[1]),
        PrimitiveType::Ellipse => sdf_ellipse(point, v2(p, 0)),
        PrimitiveType::Star5 => sdf_star5(point, p[0], p[1]),
        PrimitiveType::Hexagram => sdf_hexagram(point, p[0]),
        PrimitiveType::Pentagon => sdf_pentagon(point, p[0]),
        PrimitiveType::Hexagon => sdf_hexagon(point, p[0]),
        PrimitiveType::Octagon => sdf_octagon(point, p[0]),
        PrimitiveType::RegularPolygon => sdf_regular_polygon(point, p[0], p[1] as u32),
        PrimitiveType::Polygon => polygon::polygon_distance(point, p.len() / 2, |i| v2(p, 2 * i)),
    };
    Some(d)
}
