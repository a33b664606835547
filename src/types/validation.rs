//! Parameter validation for Shape2d
//!
//! The raw `sdf_*` functions accept anything and return whatever the
//! formula yields. Shapes built at runtime (parameter lists, JSON, CLI)
//! go through `Shape2d::validate` first, so degenerate inputs fail fast
//! instead of producing NaN.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;
use thiserror::Error;

use super::Shape2d;
use crate::primitives::PrimitiveType;

/// Tolerance on `|v| = 1` for sine/cosine pairs
const UNIT_TOLERANCE: f32 = 1e-3;

/// Shape construction / validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A parameter is NaN or infinite
    #[error("{primitive}: parameter `{field}` is not finite")]
    NonFinite {
        /// Offending primitive
        primitive: PrimitiveType,
        /// Parameter name
        field: &'static str,
    },

    /// A size parameter is zero or negative
    #[error("{primitive}: parameter `{field}` must be positive, got {value}")]
    NonPositive {
        /// Offending primitive
        primitive: PrimitiveType,
        /// Parameter name
        field: &'static str,
        /// Rejected value
        value: f32,
    },

    /// A parameter is outside the range the formula is defined for
    #[error("{primitive}: parameter `{field}` = {value} {reason}")]
    OutOfRange {
        /// Offending primitive
        primitive: PrimitiveType,
        /// Parameter name
        field: &'static str,
        /// Rejected value
        value: f32,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Polygon with fewer than three vertices
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// Polygon coordinates that do not pair up into vertices
    #[error("polygon coordinates must come in x, y pairs, got {0} values")]
    OddCoordinateCount(usize),

    /// Coincident endpoints where a direction is required
    #[error("{primitive}: endpoints coincide")]
    DegenerateSegment {
        /// Offending primitive
        primitive: PrimitiveType,
    },

    /// Wrong number of flat parameters
    #[error("{primitive}: expected {expected} parameters, got {got}")]
    ParamCount {
        /// Offending primitive
        primitive: PrimitiveType,
        /// Required count
        expected: usize,
        /// Supplied count
        got: usize,
    },

    /// Primitive name not recognized
    #[error("unknown primitive: {0}")]
    UnknownPrimitive(String),
}

/// Per-shape checker carrying the primitive id for error reporting
struct Check(PrimitiveType);

impl Check {
    fn finite(&self, field: &'static str, v: f32) -> Result<(), ShapeError> {
        if v.is_finite() {
            Ok(())
        } else {
            Err(ShapeError::NonFinite {
                primitive: self.0,
                field,
            })
        }
    }

    fn finite2(&self, field: &'static str, v: Vec2) -> Result<(), ShapeError> {
        self.finite(field, v.x)?;
        self.finite(field, v.y)
    }

    fn positive(&self, field: &'static str, v: f32) -> Result<(), ShapeError> {
        self.finite(field, v)?;
        if v > 0.0 {
            Ok(())
        } else {
            Err(ShapeError::NonPositive {
                primitive: self.0,
                field,
                value: v,
            })
        }
    }

    fn positive2(&self, field: &'static str, v: Vec2) -> Result<(), ShapeError> {
        self.positive(field, v.x)?;
        self.positive(field, v.y)
    }

    fn non_negative(&self, field: &'static str, v: f32) -> Result<(), ShapeError> {
        self.finite(field, v)?;
        self.require(field, v, v >= 0.0, "must not be negative")
    }

    fn unit(&self, field: &'static str, v: Vec2) -> Result<(), ShapeError> {
        self.finite2(field, v)?;
        let len = v.length();
        self.require(
            field,
            len,
            (len - 1.0).abs() <= UNIT_TOLERANCE,
            "must be a unit (sin, cos) pair",
        )
    }

    fn distinct(&self, a: Vec2, b: Vec2) -> Result<(), ShapeError> {
        if a == b {
            Err(ShapeError::DegenerateSegment { primitive: self.0 })
        } else {
            Ok(())
        }
    }

    fn require(
        &self,
        field: &'static str,
        value: f32,
        ok: bool,
        reason: &'static str,
    ) -> Result<(), ShapeError> {
        if ok {
            Ok(())
        } else {
            Err(ShapeError::OutOfRange {
                primitive: self.0,
                field,
                value,
                reason,
            })
        }
    }
}

impl Shape2d {
    /// Check that the parameters lie in the range where the distance is defined
    pub fn validate(&self) -> Result<(), ShapeError> {
        let c = Check(self.primitive_type());
        match self {
            Shape2d::Circle { radius } => c.positive("radius", *radius),
            Shape2d::Segment { a, b } => {
                c.finite2("a", *a)?;
                c.finite2("b", *b)
            }
            Shape2d::Box { half_extents } => c.positive2("half_extents", *half_extents),
            Shape2d::OrientedBox { a, b, thickness } => {
                c.finite2("a", *a)?;
                c.finite2("b", *b)?;
                c.distinct(*a, *b)?;
                c.positive("thickness", *thickness)
            }
            Shape2d::RoundedBox {
                half_extents,
                radii,
            } => {
                c.positive2("half_extents", *half_extents)?;
                let limit = half_extents.min_element();
                for r in radii.to_array() {
                    c.non_negative("radii", r)?;
                    c.require("radii", r, r <= limit, "exceeds the smaller half-extent")?;
                }
                Ok(())
            }
            Shape2d::RoundSquare { half_size, radius } => {
                c.positive("half_size", *half_size)?;
                c.non_negative("radius", *radius)?;
                c.require("radius", *radius, radius <= half_size, "exceeds half_size")
            }
            Shape2d::Rhombus { half_diagonals } => c.positive2("half_diagonals", *half_diagonals),
            Shape2d::Trapezoid {
                r1,
                r2,
                half_height,
            } => {
                c.non_negative("r1", *r1)?;
                c.non_negative("r2", *r2)?;
                c.positive("half_height", *half_height)
            }
            Shape2d::Parallelogram {
                half_width,
                half_height,
                skew,
            } => {
                c.positive("half_width", *half_width)?;
                c.positive("half_height", *half_height)?;
                c.finite("skew", *skew)
            }
            Shape2d::EquilateralTriangle { radius } => c.positive("radius", *radius),
            Shape2d::TriangleIsosceles { size } => c.positive2("size", *size),
            Shape2d::Triangle { p0, p1, p2 } => {
                c.finite2("p0", *p0)?;
                c.finite2("p1", *p1)?;
                c.finite2("p2", *p2)?;
                let area = signed_area(&[*p0, *p1, *p2]);
                c.require("vertices", area, area != 0.0, "must not be collinear")
            }
            Shape2d::Quad { p0, p1, p2, p3 } => {
                for (field, v) in [("p0", p0), ("p1", p1), ("p2", p2), ("p3", p3)] {
                    c.finite2(field, *v)?;
                }
                let area = signed_area(&[*p0, *p1, *p2, *p3]);
                c.require("vertices", area, area < 0.0, "must wind clockwise")
            }
            Shape2d::UnevenCapsule { r1, r2, height } => {
                c.non_negative("r1", *r1)?;
                c.non_negative("r2", *r2)?;
                c.positive("height", *height)?;
                let dr = (r1 - r2).abs();
                c.require("height", *height, dr < *height, "must exceed |r1 - r2|")
            }
            Shape2d::Egg { ra, rb } => {
                c.positive("ra", *ra)?;
                c.non_negative("rb", *rb)
            }
            Shape2d::Pie { aperture, radius } => {
                c.unit("aperture", *aperture)?;
                c.positive("radius", *radius)
            }
            Shape2d::CutDisk { radius, h } => {
                c.positive("radius", *radius)?;
                c.finite("h", *h)?;
                c.require("h", *h, h.abs() < *radius, "must lie strictly inside the disk")
            }
            Shape2d::Moon { d, ra, rb } => {
                c.positive("d", *d)?;
                c.positive("ra", *ra)?;
                c.positive("rb", *rb)
            }
            Shape2d::Vesica { radius, d } => {
                c.positive("radius", *radius)?;
                c.finite("d", *d)?;
                c.require("d", *d, d.abs() < *radius, "must satisfy |d| < radius")
            }
            Shape2d::OrientedVesica { a, b, half_width } => {
                c.finite2("a", *a)?;
                c.finite2("b", *b)?;
                c.distinct(*a, *b)?;
                c.positive("half_width", *half_width)?;
                let r = 0.5 * (*b - *a).length();
                c.require(
                    "half_width",
                    *half_width,
                    *half_width <= r,
                    "exceeds half the tip distance",
                )
            }
            Shape2d::Tunnel { size } => c.positive2("size", *size),
            Shape2d::Arc {
                aperture,
                radius,
                thickness,
            } => {
                c.unit("aperture", *aperture)?;
                c.positive("radius", *radius)?;
                c.non_negative("thickness", *thickness)
            }
            Shape2d::Ring {
                direction,
                radius,
                thickness,
            } => {
                c.unit("direction", *direction)?;
                c.require(
                    "direction",
                    direction.y,
                    direction.y >= 0.0,
                    "angle must lie in [0, pi]",
                )?;
                c.positive("radius", *radius)?;
                c.positive("thickness", *thickness)
            }
            Shape2d::Horseshoe {
                aperture,
                radius,
                length,
                thickness,
            } => {
                c.unit("aperture", *aperture)?;
                c.positive("radius", *radius)?;
                c.non_negative("length", *length)?;
                c.positive("thickness", *thickness)
            }
            Shape2d::Parabola { k } => {
                c.finite("k", *k)?;
                c.require("k", *k, *k != 0.0, "must be non-zero")
            }
            Shape2d::Cross { size, offset } => {
                c.positive2("size", *size)?;
                c.finite("offset", *offset)
            }
            Shape2d::RoundedX { width, radius } => {
                c.positive("width", *width)?;
                c.non_negative("radius", *radius)
            }
            Shape2d::Ellipse { semi_axes } => c.positive2("semi_axes", *semi_axes),
            Shape2d::Star5 {
                radius,
                inner_factor,
            } => {
                c.positive("radius", *radius)?;
                c.non_negative("inner_factor", *inner_factor)
            }
            Shape2d::Hexagram { radius } => c.positive("radius", *radius),
            Shape2d::Pentagon { apothem }
            | Shape2d::Hexagon { apothem }
            | Shape2d::Octagon { apothem } => c.positive("apothem", *apothem),
            Shape2d::RegularPolygon {
                circumradius,
                sides,
            } => {
                c.positive("circumradius", *circumradius)?;
                c.require("sides", *sides as f32, *sides >= 3, "must be at least 3")
            }
            Shape2d::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(ShapeError::TooFewVertices(vertices.len()));
                }
                for v in vertices {
                    c.finite2("vertices", *v)?;
                }
                Ok(())
            }
        }
    }
}

/// Shoelace signed area, positive for counter-clockwise (y up)
fn signed_area(vertices: &[Vec2]) -> f32 {
    let n = vertices.len();
    let twice: f32 = (0..n)
        .map(|i| vertices[i].perp_dot(vertices[(i + 1) % n]))
        .sum();
    twice * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_non_finite_rejected() {
        let err = Shape2d::circle(f32::NAN).validate().unwrap_err();
        assert_eq!(
            err,
            ShapeError::NonFinite {
                primitive: PrimitiveType::Circle,
                field: "radius"
            }
        );
    }

    #[test]
    fn test_non_positive_sizes_rejected() {
        assert!(matches!(
            Shape2d::ellipse(0.0, 1.0).validate(),
            Err(ShapeError::NonPositive { field: "semi_axes", .. })
        ));
        // Both half-diagonals zero would divide by zero
        assert!(Shape2d::rhombus(Vec2::ZERO).validate().is_err());
    }

    #[test]
    fn test_polygon_vertex_count() {
        let two = Shape2d::polygon(vec![Vec2::ZERO, Vec2::X]);
        assert_eq!(two.validate(), Err(ShapeError::TooFewVertices(2)));
    }

    #[test]
    fn test_degenerate_oriented_shapes() {
        let p = Vec2::new(1.0, 1.0);
        assert_eq!(
            Shape2d::oriented_box(p, p, 0.1).validate(),
            Err(ShapeError::DegenerateSegment {
                primitive: PrimitiveType::OrientedBox
            })
        );
        // A zero-length plain segment is still a point distance
        assert!(Shape2d::segment(p, p).validate().is_ok());
    }

    #[test]
    fn test_uneven_capsule_radius_gap() {
        assert!(Shape2d::uneven_capsule(3.0, 0.5, 1.0).validate().is_err());
        assert!(Shape2d::uneven_capsule(1.0, 0.5, 1.0).validate().is_ok());
    }

    #[test]
    fn test_quad_winding() {
        let cw = Shape2d::quad(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        );
        assert!(cw.validate().is_ok());
        let ccw = Shape2d::quad(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        );
        assert!(matches!(ccw.validate(), Err(ShapeError::OutOfRange { field: "vertices", .. })));
    }

    #[test]
    fn test_aperture_must_be_unit() {
        assert!(Shape2d::pie(Vec2::new(0.5, 0.5), 1.0).validate().is_err());
        assert!(Shape2d::pie_angle(0.4, 1.0).validate().is_ok());
    }

    #[test]
    fn test_ring_direction_upper_half() {
        let ok = Shape2d::ring(Vec2::new(-0.7071, 0.7071), 1.0, 0.2);
        assert!(ok.validate().is_ok());
        let flipped = Shape2d::ring(Vec2::new(-0.7071, -0.7071), 1.0, 0.2);
        assert!(matches!(
            flipped.validate(),
            Err(ShapeError::OutOfRange { field: "direction", .. })
        ));
    }

    #[test]
    fn test_triangle_rejects_collinear() {
        let flat = Shape2d::triangle(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0));
        assert!(matches!(flat.validate(), Err(ShapeError::OutOfRange { field: "vertices", .. })));
        let point = Shape2d::triangle(Vec2::ONE, Vec2::ONE, Vec2::ONE);
        assert!(point.validate().is_err());
        // Either winding is accepted
        let cw = Shape2d::triangle(Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
        let ccw = Shape2d::triangle(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert!(cw.validate().is_ok());
        assert!(ccw.validate().is_ok());
    }

    #[test]
    fn test_vesica_offset_range() {
        assert!(Shape2d::vesica(1.0, 0.5).validate().is_ok());
        assert!(Shape2d::vesica(1.0, -0.5).validate().is_ok());
        assert!(Shape2d::vesica(1.0, -1.0).validate().is_err());
        assert!(Shape2d::vesica(1.0, 1.0).validate().is_err());
        assert!(Shape2d::vesica(1.0, f32::NAN).validate().is_err());
    }

    #[test]
    fn test_rounded_box_radius_limit() {
        let shape = Shape2d::rounded_box(Vec2::new(1.0, 0.5), Vec4::new(0.6, 0.0, 0.0, 0.0));
        assert!(shape.validate().is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ShapeError::ParamCount {
            primitive: PrimitiveType::Moon,
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "moon: expected 3 parameters, got 2");
        assert_eq!(
            ShapeError::UnknownPrimitive("blob".into()).to_string(),
            "unknown primitive: blob"
        );
    }
}
