//! Core types for ALICE-SDF2D
//!
//! Defines the `Shape2d` model: one serializable variant per primitive,
//! with a flat parameter encoding shared with `PrimitiveType` dispatch.
//!
//! Author: Moroya Sakamoto

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::primitives::PrimitiveType;

mod constructors;
mod containers;
mod validation;

pub use containers::{ShapeDocument, ShapeMetadata};
pub use validation::ShapeError;

/// A 2D signed distance shape
///
/// Every variant is centered in its own local frame; callers translate and
/// rotate query points before evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape2d {
    /// Circle centered at origin
    Circle {
        /// Circle radius
        radius: f32,
    },

    /// Line segment with zero thickness
    Segment {
        /// First endpoint
        a: Vec2,
        /// Second endpoint
        b: Vec2,
    },

    /// Axis-aligned box
    Box {
        /// Half-extents along X and Y
        half_extents: Vec2,
    },

    /// Box around the segment `a`-`b`
    OrientedBox {
        /// First endpoint
        a: Vec2,
        /// Second endpoint
        b: Vec2,
        /// Half-thickness across the segment
        thickness: f32,
    },

    /// Box with independent corner radii
    RoundedBox {
        /// Half-extents along X and Y
        half_extents: Vec2,
        /// Corner radii (top-right, bottom-right, top-left, bottom-left)
        radii: Vec4,
    },

    /// Square with a uniform corner radius
    RoundSquare {
        /// Half side length
        half_size: f32,
        /// Corner radius
        radius: f32,
    },

    /// Rhombus
    Rhombus {
        /// Half-diagonals along X and Y
        half_diagonals: Vec2,
    },

    /// Isosceles trapezoid, symmetric about Y
    Trapezoid {
        /// Half-width of the bottom edge
        r1: f32,
        /// Half-width of the top edge
        r2: f32,
        /// Half height
        half_height: f32,
    },

    /// Parallelogram
    Parallelogram {
        /// Half-width
        half_width: f32,
        /// Half-height
        half_height: f32,
        /// Horizontal offset of the top edge
        skew: f32,
    },

    /// Equilateral triangle
    EquilateralTriangle {
        /// Half side length
        radius: f32,
    },

    /// Isosceles triangle with the apex at origin
    TriangleIsosceles {
        /// (half base width, height)
        size: Vec2,
    },

    /// Arbitrary triangle
    Triangle {
        /// First vertex
        p0: Vec2,
        /// Second vertex
        p1: Vec2,
        /// Third vertex
        p2: Vec2,
    },

    /// Convex quad, vertices clockwise
    Quad {
        /// First vertex
        p0: Vec2,
        /// Second vertex
        p1: Vec2,
        /// Third vertex
        p2: Vec2,
        /// Fourth vertex
        p3: Vec2,
    },

    /// Capsule with different end radii, along +Y
    UnevenCapsule {
        /// Radius at the origin
        r1: f32,
        /// Radius at `(0, height)`
        r2: f32,
        /// Distance between the end centers
        height: f32,
    },

    /// Egg
    Egg {
        /// Bottom radius
        ra: f32,
        /// Top radius
        rb: f32,
    },

    /// Pie slice opening towards +Y
    Pie {
        /// (sin, cos) of the half-aperture
        aperture: Vec2,
        /// Radius
        radius: f32,
    },

    /// Disk with the part below a horizontal chord removed
    CutDisk {
        /// Disk radius
        radius: f32,
        /// Height of the cutting chord
        h: f32,
    },

    /// Crescent moon
    Moon {
        /// Offset of the carved circle along +X
        d: f32,
        /// Outer radius
        ra: f32,
        /// Carved radius
        rb: f32,
    },

    /// Vertical vesica
    Vesica {
        /// Arc radius
        radius: f32,
        /// Arc center offset along X, `|d| < radius`; negative gives two overlapping disks
        d: f32,
    },

    /// Vesica between two tips
    OrientedVesica {
        /// First tip
        a: Vec2,
        /// Second tip
        b: Vec2,
        /// Half-width at the middle
        half_width: f32,
    },

    /// Tunnel (arch)
    Tunnel {
        /// (half width, height)
        size: Vec2,
    },

    /// Circular arc with round caps
    Arc {
        /// (sin, cos) of the half-aperture
        aperture: Vec2,
        /// Arc radius
        radius: f32,
        /// Half-thickness
        thickness: f32,
    },

    /// Ring with a symmetric gap opening toward -Y
    Ring {
        /// `(cos, sin)` of the band half-angle around +Y, angle in `[0, pi]`
        direction: Vec2,
        /// Ring radius
        radius: f32,
        /// Band thickness
        thickness: f32,
    },

    /// Horseshoe
    Horseshoe {
        /// (cos, sin) of the opening angle
        aperture: Vec2,
        /// Ring radius
        radius: f32,
        /// Leg length
        length: f32,
        /// Half-thickness
        thickness: f32,
    },

    /// Parabola `y = k·x²`
    Parabola {
        /// Curvature
        k: f32,
    },

    /// Plus-shaped cross
    Cross {
        /// (arm half length, arm half thickness)
        size: Vec2,
        /// Distance offset (rounding)
        offset: f32,
    },

    /// Rounded X
    RoundedX {
        /// Stroke span
        width: f32,
        /// Stroke radius
        radius: f32,
    },

    /// Axis-aligned ellipse
    Ellipse {
        /// Semi-axes
        semi_axes: Vec2,
    },

    /// Five-pointed star
    Star5 {
        /// Tip radius
        radius: f32,
        /// Inner radius factor (0..1)
        inner_factor: f32,
    },

    /// Six-pointed star
    Hexagram {
        /// Inner hexagon apothem
        radius: f32,
    },

    /// Regular pentagon
    Pentagon {
        /// Center to edge distance
        apothem: f32,
    },

    /// Regular hexagon
    Hexagon {
        /// Center to edge distance
        apothem: f32,
    },

    /// Regular octagon
    Octagon {
        /// Center to edge distance
        apothem: f32,
    },

    /// Regular N-gon
    RegularPolygon {
        /// Center to vertex distance
        circumradius: f32,
        /// Number of sides
        sides: u32,
    },

    /// Arbitrary simple polygon
    Polygon {
        /// Vertex loop (either winding)
        vertices: Vec<Vec2>,
    },
}

fn xy(params: &[f32], i: usize) -> Vec2 {
    Vec2::new(params[i], params[i + 1])
}

impl Shape2d {
    /// Primitive id of this shape
    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            Shape2d::Circle { .. } => PrimitiveType::Circle,
            Shape2d::Segment { .. } => PrimitiveType::Segment,
            Shape2d::Box { .. } => PrimitiveType::Box,
            Shape2d::OrientedBox { .. } => PrimitiveType::OrientedBox,
            Shape2d::RoundedBox { .. } => PrimitiveType::RoundedBox,
            Shape2d::RoundSquare { .. } => PrimitiveType::RoundSquare,
            Shape2d::Rhombus { .. } => PrimitiveType::Rhombus,
            Shape2d::Trapezoid { .. } => PrimitiveType::Trapezoid,
            Shape2d::Parallelogram { .. } => PrimitiveType::Parallelogram,
            Shape2d::EquilateralTriangle { .. } => PrimitiveType::EquilateralTriangle,
            Shape2d::TriangleIsosceles { .. } => PrimitiveType::TriangleIsosceles,
            Shape2d::Triangle { .. } => PrimitiveType::Triangle,
            Shape2d::Quad { .. } => PrimitiveType::Quad,
            Shape2d::UnevenCapsule { .. } => PrimitiveType::UnevenCapsule,
            Shape2d::Egg { .. } => PrimitiveType::Egg,
            Shape2d::Pie { .. } => PrimitiveType::Pie,
            Shape2d::CutDisk { .. } => PrimitiveType::CutDisk,
            Shape2d::Moon { .. } => PrimitiveType::Moon,
            Shape2d::Vesica { .. } => PrimitiveType::Vesica,
            Shape2d::OrientedVesica { .. } => PrimitiveType::OrientedVesica,
            Shape2d::Tunnel { .. } => PrimitiveType::Tunnel,
            Shape2d::Arc { .. } => PrimitiveType::Arc,
            Shape2d::Ring { .. } => PrimitiveType::Ring,
            Shape2d::Horseshoe { .. } => PrimitiveType::Horseshoe,
            Shape2d::Parabola { .. } => PrimitiveType::Parabola,
            Shape2d::Cross { .. } => PrimitiveType::Cross,
            Shape2d::RoundedX { .. } => PrimitiveType::RoundedX,
            Shape2d::Ellipse { .. } => PrimitiveType::Ellipse,
            Shape2d::Star5 { .. } => PrimitiveType::Star5,
            Shape2d::Hexagram { .. } => PrimitiveType::Hexagram,
            Shape2d::Pentagon { .. } => PrimitiveType::Pentagon,
            Shape2d::Hexagon { .. } => PrimitiveType::Hexagon,
            Shape2d::Octagon { .. } => PrimitiveType::Octagon,
            Shape2d::RegularPolygon { .. } => PrimitiveType::RegularPolygon,
            Shape2d::Polygon { .. } => PrimitiveType::Polygon,
        }
    }

    /// Flat parameter encoding, as consumed by [`crate::primitives::eval_primitive`]
    pub fn params(&self) -> Vec<f32> {
        match self {
            Shape2d::Circle { radius } => vec![*radius],
            Shape2d::Segment { a, b } => vec![a.x, a.y, b.x, b.y],
            Shape2d::Box { half_extents } => half_extents.to_array().to_vec(),
            Shape2d::OrientedBox { a, b, thickness } => vec![a.x, a.y, b.x, b.y, *thickness],
            Shape2d::RoundedBox {
                half_extents,
                radii,
            } => vec![half_extents.x, half_extents.y, radii.x, radii.y, radii.z, radii.w],
            Shape2d::RoundSquare { half_size, radius } => vec![*half_size, *radius],
            Shape2d::Rhombus { half_diagonals } => half_diagonals.to_array().to_vec(),
            Shape2d::Trapezoid {
                r1,
                r2,
                half_height,
            } => vec![*r1, *r2, *half_height],
            Shape2d::Parallelogram {
                half_width,
                half_height,
                skew,
            } => vec![*half_width, *half_height, *skew],
            Shape2d::EquilateralTriangle { radius } => vec![*radius],
            Shape2d::TriangleIsosceles { size } => size.to_array().to_vec(),
            Shape2d::Triangle { p0, p1, p2 } => vec![p0.x, p0.y, p1.x, p1.y, p2.x, p2.y],
            Shape2d::Quad { p0, p1, p2, p3 } => {
                vec![p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y]
            }
            Shape2d::UnevenCapsule { r1, r2, height } => vec![*r1, *r2, *height],
            Shape2d::Egg { ra, rb } => vec![*ra, *rb],
            Shape2d::Pie { aperture, radius } => vec![aperture.x, aperture.y, *radius],
            Shape2d::CutDisk { radius, h } => vec![*radius, *h],
            Shape2d::Moon { d, ra, rb } => vec![*d, *ra, *rb],
            Shape2d::Vesica { radius, d } => vec![*radius, *d],
            Shape2d::OrientedVesica { a, b, half_width } => {
                vec![a.x, a.y, b.x, b.y, *half_width]
            }
            Shape2d::Tunnel { size } => size.to_array().to_vec(),
            Shape2d::Arc {
                aperture,
                radius,
                thickness,
            } => vec![aperture.x, aperture.y, *radius, *thickness],
            Shape2d::Ring {
                direction,
                radius,
                thickness,
            } => vec![direction.x, direction.y, *radius, *thickness],
            Shape2d::Horseshoe {
                aperture,
                radius,
                length,
                thickness,
            } => vec![aperture.x, aperture.y, *radius, *length, *thickness],
            Shape2d::Parabola { k } => vec![*k],
            Shape2d::Cross { size, offset } => vec![size.x, size.y, *offset],
            Shape2d::RoundedX { width, radius } => vec![*width, *radius],
            Shape2d::Ellipse { semi_axes } => semi_axes.to_array().to_vec(),
            Shape2d::Star5 {
                radius,
                inner_factor,
            } => vec![*radius, *inner_factor],
            Shape2d::Hexagram { radius } => vec![*radius],
            Shape2d::Pentagon { apothem }
            | Shape2d::Hexagon { apothem }
            | Shape2d::Octagon { apothem } => vec![*apothem],
            Shape2d::RegularPolygon {
                circumradius,
                sides,
            } => vec![*circumradius, *sides as f32],
            Shape2d::Polygon { vertices } => vertices.iter().flat_map(|v| [v.x, v.y]).collect(),
        }
    }

    /// Build a shape from its flat parameter encoding and validate it
    ///
    /// Fixed-size primitives require exactly `param_count()` values; a
    /// polygon requires an even number of coordinates.
    pub fn from_params(prim: PrimitiveType, params: &[f32]) -> Result<Self, ShapeError> {
        match prim.param_count() {
            Some(expected) if params.len() != expected => {
                return Err(ShapeError::ParamCount {
                    primitive: prim,
                    expected,
                    got: params.len(),
                });
            }
            None if params.len() % 2 != 0 => {
                return Err(ShapeError::OddCoordinateCount(params.len()));
            }
            _ => {}
        }

        let p = params;
        let shape = match prim {
            PrimitiveType::Circle => Shape2d::Circle { radius: p[0] },
            PrimitiveType::Segment => Shape2d::Segment {
                a: xy(p, 0),
                b: xy(p, 2),
            },
            PrimitiveType::Box => Shape2d::Box {
                half_extents: xy(p, 0),
            },
            PrimitiveType::OrientedBox => Shape2d::OrientedBox {
                a: xy(p, 0),
                b: xy(p, 2),
                thickness: p[4],
            },
            PrimitiveType::RoundedBox => Shape2d::RoundedBox {
                half_extents: xy(p, 0),
                radii: Vec4::new(p[2], p[3], p[4], p[5]),
            },
            PrimitiveType::RoundSquare => Shape2d::RoundSquare {
                half_size: p[0],
                radius: p[1],
            },
            PrimitiveType::Rhombus => Shape2d::Rhombus {
                half_diagonals: xy(p, 0),
            },
            PrimitiveType::Trapezoid => Shape2d::Trapezoid {
                r1: p[0],
                r2: p[1],
                half_height: p[2],
            },
            PrimitiveType::Parallelogram => Shape2d::Parallelogram {
                half_width: p[0],
                half_height: p[1],
                skew: p[2],
            },
            PrimitiveType::EquilateralTriangle => Shape2d::EquilateralTriangle { radius: p[0] },
            PrimitiveType::TriangleIsosceles => Shape2d::TriangleIsosceles { size: xy(p, 0) },
            PrimitiveType::Triangle => Shape2d::Triangle {
                p0: xy(p, 0),
                p1: xy(p, 2),
                p2: xy(p, 4),
            },
            PrimitiveType::Quad => Shape2d::Quad {
                p0: xy(p, 0),
                p1: xy(p, 2),
                p2: xy(p, 4),
                p3: xy(p, 6),
            },
            PrimitiveType::UnevenCapsule => Shape2d::UnevenCapsule {
                r1: p[0],
                r2: p[1],
                height: p[2],
            },
            PrimitiveType::Egg => Shape2d::Egg { ra: p[0], rb: p[1] },
            PrimitiveType::Pie => Shape2d::Pie {
                aperture: xy(p, 0),
                radius: p[2],
            },
            PrimitiveType::CutDisk => Shape2d::CutDisk {
                radius: p[0],
                h: p[1],
            },
            PrimitiveType::Moon => Shape2d::Moon {
                d: p[0],
                ra: p[1],
                rb: p[2],
            },
            PrimitiveType::Vesica => Shape2d::Vesica {
                radius: p[0],
                d: p[1],
            },
            PrimitiveType::OrientedVesica => Shape2d::OrientedVesica {
                a: xy(p, 0),
                b: xy(p, 2),
                half_width: p[4],
            },
            PrimitiveType::Tunnel => Shape2d::Tunnel { size: xy(p, 0) },
            PrimitiveType::Arc => Shape2d::Arc {
                aperture: xy(p, 0),
                radius: p[2],
                thickness: p[3],
            },
            PrimitiveType::Ring => Shape2d::Ring {
                direction: xy(p, 0),
                radius: p[2],
                thickness: p[3],
            },
            PrimitiveType::Horseshoe => Shape2d::Horseshoe {
                aperture: xy(p, 0),
                radius: p[2],
                length: p[3],
                thickness: p[4],
            },
            PrimitiveType::Parabola => Shape2d::Parabola { k: p[0] },
            PrimitiveType::Cross => Shape2d::Cross {
                size: xy(p, 0),
                offset: p[2],
            },
            PrimitiveType::RoundedX => Shape2d::RoundedX {
                width: p[0],
                radius: p[1],
            },
            PrimitiveType::Ellipse => Shape2d::Ellipse {
                semi_axes: xy(p, 0),
            },
            PrimitiveType::Star5 => Shape2d::Star5 {
                radius: p[0],
                inner_factor: p[1],
            },
            PrimitiveType::Hexagram => Shape2d::Hexagram { radius: p[0] },
            PrimitiveType::Pentagon => Shape2d::Pentagon { apothem: p[0] },
            PrimitiveType::Hexagon => Shape2d::Hexagon { apothem: p[0] },
            PrimitiveType::Octagon => Shape2d::Octagon { apothem: p[0] },
            PrimitiveType::RegularPolygon => {
                let sides = p[1];
                if !sides.is_finite() || sides.fract() != 0.0 || sides < 0.0 {
                    return Err(ShapeError::OutOfRange {
                        primitive: prim,
                        field: "sides",
                        value: sides,
                        reason: "must be a whole number",
                    });
                }
                Shape2d::RegularPolygon {
                    circumradius: p[0],
                    sides: sides as u32,
                }
            }
            PrimitiveType::Polygon => Shape2d::Polygon {
                vertices: p.chunks_exact(2).map(|c| Vec2::new(c[0], c[1])).collect(),
            },
        };

        shape.validate()?;
        Ok(shape)
    }
}
