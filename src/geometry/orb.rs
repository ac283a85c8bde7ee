use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{scalar, Angle, Real, TransformationMatrix3, Vector, Vector2, Vector3};

use super::Intersection;

/// A circle (2D) or sphere (3D): every point within `radius` of `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb<V> {
    pub center: V,
    pub radius: Real,
}

pub type Circle = Orb<Vector2>;
pub type Sphere = Orb<Vector3>;

impl<V: Vector> Orb<V> {
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `radius < 0`. A zero
    /// radius is accepted and describes a single point.
    pub fn new(center: V, radius: Real) -> Result<Self> {
        if scalar::is_negative(radius) {
            return Err(GeometryError::NegativeRadius { radius }.into());
        }
        Ok(Self { center, radius })
    }

    /// Unit orb centred at the origin.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            center: V::ZERO,
            radius: 1.0,
        }
    }

    /// Whether `point` lies inside or on the surface.
    #[must_use]
    pub fn contains(&self, point: &V) -> bool {
        scalar::is_less_or_equal(self.center.distance(point), self.radius)
    }

    /// Whether both orbs share at least one point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        scalar::is_less_or_equal(self.center.distance(&other.center), self.radius + other.radius)
    }
}

impl Orb<Vector2> {
    #[must_use]
    pub fn translate(&self, offset: Vector2) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
        }
    }

    #[must_use]
    pub fn rotate_with_pivot(&self, angle: Angle, pivot: &Vector2) -> Self {
        Self {
            center: self.center.rotate_with_pivot(angle, pivot),
            radius: self.radius,
        }
    }

    /// Moves the center through `transformation` and scales the radius by
    /// the larger of its two scale factors.
    #[must_use]
    pub fn transform(&self, transformation: &TransformationMatrix3) -> Self {
        let scale = transformation.scale();
        Self {
            center: self.center.transform(transformation),
            radius: self.radius * scale.x.max(scale.y),
        }
    }

    /// Points where both circle outlines cross.
    ///
    /// Equal concentric circles overlap everywhere and report
    /// [`Intersection::Infinite`].
    #[must_use]
    pub fn intersection_with_circle(&self, other: &Self) -> Intersection<Vector2> {
        let between = other.center - self.center;
        let d = between.length();
        if scalar::is_zero(d) {
            return if scalar::are_equal(self.radius, other.radius) {
                Intersection::Infinite
            } else {
                Intersection::None
            };
        }
        if scalar::is_greater_than(d, self.radius + other.radius)
            || scalar::is_less_than(d, (self.radius - other.radius).abs())
        {
            return Intersection::None;
        }

        // Distance from self.center to the radical line, along `between`.
        let a = (self.radius * self.radius - other.radius * other.radius + d * d) / (2.0 * d);
        let foot = self.center + between * (a / d);
        let h_squared = self.radius * self.radius - a * a;
        if scalar::is_zero(h_squared) || h_squared < 0.0 {
            return Intersection::One(foot);
        }
        let offset = between.perpendicular() * (h_squared.sqrt() / d);
        Intersection::Two(foot + offset, foot - offset)
    }
}

impl<V: fmt::Display> fmt::Display for Orb<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OB(c({}),r({}))", self.center, self.radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn negative_radius_is_rejected() {
        assert!(Circle::new(Vector2::ZERO, -1.0).is_err());
        assert!(Sphere::new(Vector3::ZERO, 0.0).is_ok());
    }

    #[test]
    fn contains_boundary_points() {
        let c = Circle::new(Vector2::new(1.0, 1.0), 2.0).unwrap();
        assert!(c.contains(&Vector2::new(3.0, 1.0)));
        assert!(c.contains(&Vector2::new(1.0, 1.0)));
        assert!(!c.contains(&Vector2::new(3.1, 1.0)));
    }

    #[test]
    fn tangent_orbs_intersect() {
        let a = Sphere::unit();
        let b = Sphere::new(Vector3::new(2.0, 0.0, 0.0), 1.0).unwrap();
        let c = Sphere::new(Vector3::new(2.5, 0.0, 0.0), 1.0).unwrap();
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn circle_circle_two_points() {
        let a = Circle::unit();
        let b = Circle::new(Vector2::new(1.0, 0.0), 1.0).unwrap();
        let Intersection::Two(p, q) = a.intersection_with_circle(&b) else {
            panic!("expected two points");
        };
        let h = Real::sqrt(3.0) / 2.0;
        assert_relative_eq!(p, Vector2::new(0.5, -h), epsilon = 1e-9);
        assert_relative_eq!(q, Vector2::new(0.5, h), epsilon = 1e-9);
    }

    #[test]
    fn circle_circle_tangent_and_disjoint() {
        let a = Circle::unit();
        let tangent = Circle::new(Vector2::new(2.0, 0.0), 1.0).unwrap();
        assert_eq!(
            a.intersection_with_circle(&tangent),
            Intersection::One(Vector2::new(1.0, 0.0))
        );
        let far = Circle::new(Vector2::new(5.0, 0.0), 1.0).unwrap();
        assert!(a.intersection_with_circle(&far).is_none());
        let inner = Circle::new(Vector2::new(0.1, 0.0), 0.2).unwrap();
        assert!(a.intersection_with_circle(&inner).is_none());
    }

    #[test]
    fn concentric_circles() {
        let a = Circle::unit();
        assert_eq!(a.intersection_with_circle(&a), Intersection::Infinite);
        let smaller = Circle::new(Vector2::ZERO, 0.5).unwrap();
        assert!(a.intersection_with_circle(&smaller).is_none());
    }

    #[test]
    fn transform_moves_center_and_scales_radius() {
        let c = Circle::new(Vector2::new(1.0, 0.0), 1.0).unwrap();
        let t = TransformationMatrix3::new(
            Vector2::new(0.0, 1.0),
            Angle::QUARTER_TURN,
            Vector2::new(2.0, 3.0),
        );
        let moved = c.transform(&t);
        assert_relative_eq!(moved.center, Vector2::new(0.0, 3.0), epsilon = 1e-9);
        assert_relative_eq!(moved.radius, 3.0, epsilon = 1e-9);
        let rotated = c.rotate_with_pivot(Angle::HALF_TURN, &Vector2::ZERO);
        assert_relative_eq!(rotated.center, Vector2::new(-1.0, 0.0), epsilon = 1e-9);
        assert_eq!(c.translate(Vector2::UNIT_Y).center, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn display_format() {
        let c = Circle::new(Vector2::new(1.0, 2.0), 3.0).unwrap();
        assert_eq!(c.to_string(), "OB(c(V2(1,2)),r(3))");
    }
}
