//! Constructors for Shape2d
//!
//! Author: Moroya Sakamoto

use glam::{Vec2, Vec4};

use super::Shape2d;
use crate::primitives::PrimitiveType;

impl Shape2d {
    /// Create a circle with the given radius
    #[must_use]
    #[inline]
    pub fn circle(radius: f32) -> Self {
        Shape2d::Circle { radius }
    }

    /// Create a zero-thickness segment
    #[must_use]
    #[inline]
    pub fn segment(a: Vec2, b: Vec2) -> Self {
        Shape2d::Segment { a, b }
    }

    /// Create an axis-aligned box with the given full dimensions
    #[must_use]
    #[inline]
    pub fn rect(width: f32, height: f32) -> Self {
        Shape2d::Box {
            half_extents: Vec2::new(width * 0.5, height * 0.5),
        }
    }

    /// Create an axis-aligned box from half-extents
    #[must_use]
    #[inline]
    pub fn box2d(half_extents: Vec2) -> Self {
        Shape2d::Box { half_extents }
    }

    /// Create a box of half-thickness `thickness` around the segment `a`-`b`
    #[must_use]
    #[inline]
    pub fn oriented_box(a: Vec2, b: Vec2, thickness: f32) -> Self {
        Shape2d::OrientedBox { a, b, thickness }
    }

    /// Create a box with per-corner radii (top-right, bottom-right, top-left, bottom-left)
    #[must_use]
    #[inline]
    pub fn rounded_box(half_extents: Vec2, radii: Vec4) -> Self {
        Shape2d::RoundedBox {
            half_extents,
            radii,
        }
    }

    /// Create a square with uniformly rounded corners
    #[must_use]
    #[inline]
    pub fn round_square(half_size: f32, radius: f32) -> Self {
        Shape2d::RoundSquare { half_size, radius }
    }

    /// Create a rhombus from its half-diagonals
    #[must_use]
    #[inline]
    pub fn rhombus(half_diagonals: Vec2) -> Self {
        Shape2d::Rhombus { half_diagonals }
    }

    /// Create an isosceles trapezoid
    #[must_use]
    #[inline]
    pub fn trapezoid(r1: f32, r2: f32, half_height: f32) -> Self {
        Shape2d::Trapezoid {
            r1,
            r2,
            half_height,
        }
    }

    /// Create a parallelogram
    #[must_use]
    #[inline]
    pub fn parallelogram(half_width: f32, half_height: f32, skew: f32) -> Self {
        Shape2d::Parallelogram {
            half_width,
            half_height,
            skew,
        }
    }

    /// Create an equilateral triangle
    #[must_use]
    #[inline]
    pub fn equilateral_triangle(radius: f32) -> Self {
        Shape2d::EquilateralTriangle { radius }
    }

    /// Create an isosceles triangle with apex at origin
    #[must_use]
    #[inline]
    pub fn triangle_isosceles(half_base: f32, height: f32) -> Self {
        Shape2d::TriangleIsosceles {
            size: Vec2::new(half_base, height),
        }
    }

    /// Create a triangle from three vertices
    #[must_use]
    #[inline]
    pub fn triangle(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Shape2d::Triangle { p0, p1, p2 }
    }

    /// Create a convex quad from four clockwise vertices
    #[must_use]
    #[inline]
    pub fn quad(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Shape2d::Quad { p0, p1, p2, p3 }
    }

    /// Create a capsule with different end radii
    #[must_use]
    #[inline]
    pub fn uneven_capsule(r1: f32, r2: f32, height: f32) -> Self {
        Shape2d::UnevenCapsule { r1, r2, height }
    }

    /// Create an egg
    #[must_use]
    #[inline]
    pub fn egg(ra: f32, rb: f32) -> Self {
        Shape2d::Egg { ra, rb }
    }

    /// Create a pie slice from a precomputed `(sin, cos)` aperture
    #[must_use]
    #[inline]
    pub fn pie(aperture: Vec2, radius: f32) -> Self {
        Shape2d::Pie { aperture, radius }
    }

    /// Create a pie slice from a half-aperture angle in radians
    #[must_use]
    #[inline]
    pub fn pie_angle(half_angle: f32, radius: f32) -> Self {
        let (s, c) = half_angle.sin_cos();
        Shape2d::Pie {
            aperture: Vec2::new(s, c),
            radius,
        }
    }

    /// Create a cut disk
    #[must_use]
    #[inline]
    pub fn cut_disk(radius: f32, h: f32) -> Self {
        Shape2d::CutDisk { radius, h }
    }

    /// Create a crescent moon
    #[must_use]
    #[inline]
    pub fn moon(d: f32, ra: f32, rb: f32) -> Self {
        Shape2d::Moon { d, ra, rb }
    }

    /// Create a vertical vesica
    ///
    /// A negative `d` yields the union of two disks centered at `(±|d|, 0)`.
    #[must_use]
    #[inline]
    pub fn vesica(radius: f32, d: f32) -> Self {
        Shape2d::Vesica { radius, d }
    }

    /// Create a vesica between two tips
    #[must_use]
    #[inline]
    pub fn oriented_vesica(a: Vec2, b: Vec2, half_width: f32) -> Self {
        Shape2d::OrientedVesica { a, b, half_width }
    }

    /// Create a tunnel (arch)
    #[must_use]
    #[inline]
    pub fn tunnel(half_width: f32, height: f32) -> Self {
        Shape2d::Tunnel {
            size: Vec2::new(half_width, height),
        }
    }

    /// Create an arc from a precomputed `(sin, cos)` aperture
    #[must_use]
    #[inline]
    pub fn arc(aperture: Vec2, radius: f32, thickness: f32) -> Self {
        Shape2d::Arc {
            aperture,
            radius,
            thickness,
        }
    }

    /// Create an arc from a half-aperture angle in radians
    #[must_use]
    #[inline]
    pub fn arc_angle(half_angle: f32, radius: f32, thickness: f32) -> Self {
        let (s, c) = half_angle.sin_cos();
        Shape2d::Arc {
            aperture: Vec2::new(s, c),
            radius,
            thickness,
        }
    }

    /// Create an open ring; `direction` is `(cos, sin)` of the band half-angle
    #[must_use]
    #[inline]
    pub fn ring(direction: Vec2, radius: f32, thickness: f32) -> Self {
        Shape2d::Ring {
            direction: direction.normalize_or_zero(),
            radius,
            thickness,
        }
    }

    /// Create a horseshoe from a precomputed `(cos, sin)` aperture
    #[must_use]
    #[inline]
    pub fn horseshoe(aperture: Vec2, radius: f32, length: f32, thickness: f32) -> Self {
        Shape2d::Horseshoe {
            aperture,
            radius,
            length,
            thickness,
        }
    }

    /// Create a horseshoe from an opening angle in radians
    #[must_use]
    #[inline]
    pub fn horseshoe_angle(angle: f32, radius: f32, length: f32, thickness: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Shape2d::Horseshoe {
            aperture: Vec2::new(c, s),
            radius,
            length,
            thickness,
        }
    }

    /// Create a parabola `y = k·x²`
    #[must_use]
    #[inline]
    pub fn parabola(k: f32) -> Self {
        Shape2d::Parabola { k }
    }

    /// Create a plus-shaped cross
    #[must_use]
    #[inline]
    pub fn cross(half_length: f32, half_thickness: f32, offset: f32) -> Self {
        Shape2d::Cross {
            size: Vec2::new(half_length, half_thickness),
            offset,
        }
    }

    /// Create a rounded X
    #[must_use]
    #[inline]
    pub fn rounded_x(width: f32, radius: f32) -> Self {
        Shape2d::RoundedX { width, radius }
    }

    /// Create an axis-aligned ellipse
    #[must_use]
    #[inline]
    pub fn ellipse(a: f32, b: f32) -> Self {
        Shape2d::Ellipse {
            semi_axes: Vec2::new(a, b),
        }
    }

    /// Create a five-pointed star
    #[must_use]
    #[inline]
    pub fn star5(radius: f32, inner_factor: f32) -> Self {
        Shape2d::Star5 {
            radius,
            inner_factor,
        }
    }

    /// Create a hexagram
    #[must_use]
    #[inline]
    pub fn hexagram(radius: f32) -> Self {
        Shape2d::Hexagram { radius }
    }

    /// Create a regular pentagon sized by apothem
    #[must_use]
    #[inline]
    pub fn pentagon(apothem: f32) -> Self {
        Shape2d::Pentagon { apothem }
    }

    /// Create a regular hexagon sized by apothem
    #[must_use]
    #[inline]
    pub fn hexagon(apothem: f32) -> Self {
        Shape2d::Hexagon { apothem }
    }

    /// Create a regular octagon sized by apothem
    #[must_use]
    #[inline]
    pub fn octagon(apothem: f32) -> Self {
        Shape2d::Octagon { apothem }
    }

    /// Create a regular N-gon sized by circumradius
    #[must_use]
    #[inline]
    pub fn regular_polygon(circumradius: f32, sides: u32) -> Self {
        Shape2d::RegularPolygon {
            circumradius,
            sides,
        }
    }

    /// Create a polygon from a vertex loop
    #[must_use]
    #[inline]
    pub fn polygon(vertices: Vec<Vec2>) -> Self {
        Shape2d::Polygon { vertices }
    }

    /// A valid, representative instance of every primitive
    ///
    /// Sized for a 400×240 canvas centered at the origin.
    #[must_use]
    pub fn example(prim: PrimitiveType) -> Self {
        match prim {
            PrimitiveType::Circle => Shape2d::circle(110.0),
            PrimitiveType::Segment => {
                Shape2d::segment(Vec2::new(-150.0, 100.0), Vec2::new(150.0, -100.0))
            }
            PrimitiveType::Box => Shape2d::box2d(Vec2::new(160.0, 70.0)),
            PrimitiveType::OrientedBox => {
                Shape2d::oriented_box(Vec2::new(-150.0, -100.0), Vec2::new(150.0, 100.0), 20.0)
            }
            PrimitiveType::RoundedBox => {
                Shape2d::rounded_box(Vec2::new(70.0, 40.0), Vec4::new(10.0, 20.0, 0.0, 20.0))
            }
            PrimitiveType::RoundSquare => Shape2d::round_square(100.0, 20.0),
            PrimitiveType::Rhombus => Shape2d::rhombus(Vec2::new(100.0, 30.0)),
            PrimitiveType::Trapezoid => Shape2d::trapezoid(100.0, 30.0, 40.0),
            PrimitiveType::Parallelogram => Shape2d::parallelogram(150.0, 50.0, 30.0),
            PrimitiveType::EquilateralTriangle => Shape2d::equilateral_triangle(100.0),
            PrimitiveType::TriangleIsosceles => Shape2d::triangle_isosceles(160.0, 50.0),
            PrimitiveType::Triangle => Shape2d::triangle(
                Vec2::new(-160.0, -110.0),
                Vec2::new(-150.0, 80.0),
                Vec2::new(150.0, -40.0),
            ),
            PrimitiveType::Quad => Shape2d::quad(
                Vec2::new(-160.0, -110.0),
                Vec2::new(-150.0, 80.0),
                Vec2::new(120.0, 60.0),
                Vec2::new(150.0, -40.0),
            ),
            PrimitiveType::UnevenCapsule => Shape2d::uneven_capsule(40.0, 30.0, 80.0),
            PrimitiveType::Egg => Shape2d::egg(50.0, 10.0),
            PrimitiveType::Pie => Shape2d::pie(Vec2::new(0.866, -0.5), 100.0),
            PrimitiveType::CutDisk => Shape2d::cut_disk(100.0, -75.0),
            PrimitiveType::Moon => Shape2d::moon(45.0, 110.0, 90.0),
            PrimitiveType::Vesica => Shape2d::vesica(110.0, 60.0),
            PrimitiveType::OrientedVesica => {
                Shape2d::oriented_vesica(Vec2::new(-90.0, -110.0), Vec2::new(90.0, 70.0), 30.0)
            }
            PrimitiveType::Tunnel => Shape2d::tunnel(80.0, 40.0),
            PrimitiveType::Arc => Shape2d::arc(Vec2::new(0.7071, -0.7071), 80.0, 10.0),
            PrimitiveType::Ring => Shape2d::ring(Vec2::new(-0.7071, 0.7071), 100.0, 10.0),
            PrimitiveType::Horseshoe => Shape2d::horseshoe(Vec2::new(0.0, 1.0), 80.0, 100.0, 5.0),
            PrimitiveType::Parabola => Shape2d::parabola(0.002),
            PrimitiveType::Cross => Shape2d::cross(100.0, 40.0, 14.0),
            PrimitiveType::RoundedX => Shape2d::rounded_x(180.0, 20.0),
            PrimitiveType::Ellipse => Shape2d::ellipse(160.0, 80.0),
            PrimitiveType::Star5 => Shape2d::star5(100.0, 0.5),
            PrimitiveType::Hexagram => Shape2d::hexagram(45.0),
            PrimitiveType::Pentagon => Shape2d::pentagon(90.0),
            PrimitiveType::Hexagon => Shape2d::hexagon(90.0),
            PrimitiveType::Octagon => Shape2d::octagon(90.0),
            PrimitiveType::RegularPolygon => Shape2d::regular_polygon(90.0, 5),
            PrimitiveType::Polygon => Shape2d::polygon(vec![
                Vec2::new(-190.0, -110.0),
                Vec2::new(170.0, -5.0),
                Vec2::new(-10.0, 70.0),
                Vec2::new(-170.0, -40.0),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_halves_dimensions() {
        assert_eq!(Shape2d::rect(4.0, 2.0), Shape2d::box2d(Vec2::new(2.0, 1.0)));
    }

    #[test]
    fn test_angle_constructors() {
        let half = std::f32::consts::FRAC_PI_6;
        match Shape2d::pie_angle(half, 1.0) {
            Shape2d::Pie { aperture, .. } => {
                assert!((aperture.x - 0.5).abs() < 1e-6);
                assert!((aperture.y - 0.866_025_4).abs() < 1e-6);
            }
            other => panic!("unexpected {:?}", other),
        }
        match Shape2d::horseshoe_angle(std::f32::consts::FRAC_PI_2, 1.0, 0.5, 0.1) {
            Shape2d::Horseshoe { aperture, .. } => {
                assert!(aperture.x.abs() < 1e-6);
                assert!((aperture.y - 1.0).abs() < 1e-6);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_examples_are_valid() {
        for prim in PrimitiveType::ALL {
            let shape = Shape2d::example(prim);
            assert_eq!(shape.primitive_type(), prim);
            assert!(shape.validate().is_ok(), "{}: {:?}", prim, shape.validate());
        }
    }
}
