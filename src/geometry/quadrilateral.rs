use std::fmt;

use crate::error::Result;
use crate::math::{scalar, Angle, TransformationMatrix3, Vector, Vector2};

use super::{side, Intersection, LineSegment};

/// A planar quadrilateral with consecutive vertices `a`, `b`, `c`, `d`.
///
/// The edges are `ab`, `bc`, `cd`, `da`. The shape may be convex, concave
/// or crossed (a "bow tie" whose opposite edges intersect).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral {
    pub a: Vector2,
    pub b: Vector2,
    pub c: Vector2,
    pub d: Vector2,
}

/// `p` lies inside or on the triangle `t0 t1 t2`.
fn in_triangle(p: &Vector2, t0: &Vector2, t1: &Vector2, t2: &Vector2) -> bool {
    side::same_side(p, t2, t0, t1) && side::same_side(p, t0, t1, t2) && side::same_side(p, t1, t2, t0)
}

impl Quadrilateral {
    #[must_use]
    pub fn new(a: Vector2, b: Vector2, c: Vector2, d: Vector2) -> Self {
        Self { a, b, c, d }
    }

    /// Axis-aligned square of side 1 centred at the origin, counter-clockwise
    /// from `(0.5, 0.5)`.
    #[must_use]
    pub fn unit_square() -> Self {
        Self::new(
            Vector2::new(0.5, 0.5),
            Vector2::new(-0.5, 0.5),
            Vector2::new(-0.5, -0.5),
            Vector2::new(0.5, -0.5),
        )
    }

    #[must_use]
    pub fn edges(&self) -> [LineSegment<Vector2>; 4] {
        [
            LineSegment::new(self.a, self.b),
            LineSegment::new(self.b, self.c),
            LineSegment::new(self.c, self.d),
            LineSegment::new(self.d, self.a),
        ]
    }

    /// Whether a pair of opposite edges cross each other.
    #[must_use]
    pub fn is_crossed(&self) -> bool {
        let (a, b, c, d) = (&self.a, &self.b, &self.c, &self.d);
        (!side::same_side(a, d, b, c) && !side::same_side(c, b, a, d))
            || (!side::same_side(a, b, d, c) && !side::same_side(c, d, a, b))
    }

    /// Whether the diagonals intersect. Crossed quadrilaterals count as
    /// convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.is_crossed() || LineSegment::new(self.a, self.c).intersects(&LineSegment::new(self.b, self.d))
    }

    #[must_use]
    pub fn is_concave(&self) -> bool {
        !self.is_convex()
    }

    /// Whether the interior angle at `vertex` is reflex. `ends` are its
    /// neighbours and `opposite` is the remaining vertex.
    fn is_reflex_at(&self, vertex: &Vector2, ends: (&Vector2, &Vector2), opposite: &Vector2) -> bool {
        if self.is_convex() || !side::same_side(opposite, vertex, ends.0, ends.1) {
            return false;
        }
        let diagonal = LineSegment::new(*ends.0, *ends.1);
        scalar::is_less_than(diagonal.min_distance_to_point(vertex), diagonal.min_distance_to_point(opposite))
    }

    /// Whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Vector2) -> bool {
        let (a, b, c, d) = (&self.a, &self.b, &self.c, &self.d);
        if self.is_crossed() {
            return self.contains_crossed(point);
        }
        if self.is_convex() {
            return side::same_side(point, c, a, b)
                && side::same_side(point, d, b, c)
                && side::same_side(point, a, c, d)
                && side::same_side(point, b, d, a);
        }
        // A concave quadrilateral splits into two triangles along the
        // diagonal that starts at the reflex vertex.
        if self.is_reflex_at(a, (b, d), c) || self.is_reflex_at(c, (b, d), a) {
            in_triangle(point, a, b, c) || in_triangle(point, a, c, d)
        } else {
            in_triangle(point, a, b, d) || in_triangle(point, b, c, d)
        }
    }

    /// A crossed quadrilateral is the union of the two triangles that meet
    /// at the crossing point.
    fn contains_crossed(&self, point: &Vector2) -> bool {
        let (a, b, c, d) = (&self.a, &self.b, &self.c, &self.d);
        let ad = LineSegment::new(*a, *d);
        if let Intersection::One(x) = ad.intersection_with_segment(&LineSegment::new(*b, *c)) {
            return in_triangle(point, a, b, &x) || in_triangle(point, c, d, &x);
        }
        let ab = LineSegment::new(*a, *b);
        if let Intersection::One(x) = ab.intersection_with_segment(&LineSegment::new(*c, *d)) {
            return in_triangle(point, a, &x, d) || in_triangle(point, b, c, &x);
        }
        tracing::trace!(quadrilateral = %self, "crossed quadrilateral without a single crossing point");
        false
    }

    /// Whether the two quadrilaterals share at least one point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.edges().iter().any(|edge| edge.intersects_quadrilateral(other)) || self.contains(&other.a)
    }

    fn interior_angle(
        &self,
        vertex: &Vector2,
        ends: (&Vector2, &Vector2),
        opposite: &Vector2,
    ) -> Result<Angle> {
        let angle = (*ends.1 - *vertex).angle_between(&(*ends.0 - *vertex))?;
        if self.is_reflex_at(vertex, ends, opposite) {
            Ok(Angle::FULL_TURN - angle)
        } else {
            Ok(angle)
        }
    }

    /// Interior angle at `a`, reflex angles included.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::ZeroVector`] if `a` coincides
    /// with a neighbouring vertex.
    pub fn angle_a(&self) -> Result<Angle> {
        self.interior_angle(&self.a, (&self.b, &self.d), &self.c)
    }

    /// Interior angle at `b`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::ZeroVector`] if `b` coincides
    /// with a neighbouring vertex.
    pub fn angle_b(&self) -> Result<Angle> {
        self.interior_angle(&self.b, (&self.a, &self.c), &self.d)
    }

    /// Interior angle at `c`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::ZeroVector`] if `c` coincides
    /// with a neighbouring vertex.
    pub fn angle_c(&self) -> Result<Angle> {
        self.interior_angle(&self.c, (&self.b, &self.d), &self.a)
    }

    /// Interior angle at `d`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::GeometryError::ZeroVector`] if `d` coincides
    /// with a neighbouring vertex.
    pub fn angle_d(&self) -> Result<Angle> {
        self.interior_angle(&self.d, (&self.a, &self.c), &self.b)
    }

    #[must_use]
    pub fn translate(&self, offset: Vector2) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset, self.d + offset)
    }

    #[must_use]
    pub fn transform(&self, transformation: &TransformationMatrix3) -> Self {
        Self::new(
            self.a.transform(transformation),
            self.b.transform(transformation),
            self.c.transform(transformation),
            self.d.transform(transformation),
        )
    }

    #[must_use]
    pub fn transform_with_pivot(&self, transformation: &TransformationMatrix3, pivot: &Vector2) -> Self {
        let apply = |p: Vector2| (p - *pivot).transform(transformation) + *pivot;
        Self::new(apply(self.a), apply(self.b), apply(self.c), apply(self.d))
    }
}

impl fmt::Display for Quadrilateral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QL(a({}),b({}),c({}),d({}))", self.a, self.b, self.c, self.d)
    }
}
