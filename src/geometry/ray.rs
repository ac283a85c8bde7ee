use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{scalar, Angle, Matrix4, Real, TransformationMatrix3, Vector, Vector2, Vector3};

use super::{side, Intersection, LineSegment, Orb, Plane, Quadrilateral, Triangle};

/// A half-line starting at `origin` and extending along `direction`.
///
/// Most queries work with any non-null direction. The orb queries need a
/// unit direction and report [`GeometryError::NotNormalized`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<V> {
    pub origin: V,
    pub direction: V,
}

impl<V: Vector> Ray<V> {
    /// Stores `direction` as given.
    #[must_use]
    pub fn new(origin: V, direction: V) -> Self {
        Self { origin, direction }
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a null direction.
    pub fn with_normalized_direction(origin: V, direction: V) -> Result<Self> {
        Ok(Self::new(origin, direction.normalize()?))
    }

    /// Same origin, opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, -self.direction)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a null direction.
    pub fn normalized(&self) -> Result<Self> {
        Self::with_normalized_direction(self.origin, self.direction)
    }

    /// `origin + direction * distance`.
    #[must_use]
    pub fn point_at(&self, distance: Real) -> V {
        self.origin + self.direction * distance
    }

    /// Parameter of the orthogonal projection of `point` onto the ray's line.
    fn project(&self, point: &V) -> Real {
        (*point - self.origin).dot(&self.direction) / self.direction.squared_length()
    }

    /// Whether `point` lies on the ray, origin included.
    #[must_use]
    pub fn contains(&self, point: &V) -> bool {
        if *point == self.origin {
            return true;
        }
        if self.direction.is_zero() {
            return false;
        }
        let t = self.project(point);
        scalar::is_greater_or_equal(t, 0.0) && self.point_at(t) == *point
    }

    /// Point of `segment` on the ray when both lie on one line, or a
    /// degenerate segment reduced to a point.
    fn collinear_segment_hit(&self, segment: &LineSegment<V>) -> Intersection<V> {
        let (a, b) = (segment.a, segment.b);
        if a == b {
            return if self.contains(&a) {
                Intersection::One(a)
            } else {
                Intersection::None
            };
        }
        tracing::trace!(ray = %self, segment = %segment, "ray parallel to segment");
        match (self.contains(&a), self.contains(&b)) {
            (true, true) => Intersection::Infinite,
            (true, false) if a == self.origin => Intersection::One(a),
            (false, true) if b == self.origin => Intersection::One(b),
            (true, false) | (false, true) => Intersection::Infinite,
            (false, false) => Intersection::None,
        }
    }

    /// Collects every boundary point the ray touches and keeps the two
    /// nearest to the origin. `hit` meets the ray with a single edge.
    fn boundary_hits(
        &self,
        edges: &[LineSegment<V>],
        hit: impl Fn(&LineSegment<V>) -> Intersection<V>,
    ) -> Intersection<V> {
        let mut hits = Vec::with_capacity(edges.len() * 2);
        for edge in edges {
            match hit(edge) {
                Intersection::None => {}
                Intersection::One(p) => hits.push(p),
                Intersection::Two(p, q) => hits.extend([p, q]),
                Intersection::Infinite => {
                    tracing::trace!(ray = %self, edge = %edge, "ray runs along an edge");
                    hits.extend([edge.a, edge.b].into_iter().filter(|end| self.contains(end)));
                    if edge.contains(&self.origin) {
                        hits.push(self.origin);
                    }
                }
            }
        }
        side::nearest_distinct(hits, &self.origin)
    }

    fn ensure_unit_direction(&self) -> Result<()> {
        let length = self.direction.length();
        if scalar::are_equal(length, 1.0) {
            Ok(())
        } else {
            Err(GeometryError::NotNormalized { length }.into())
        }
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::NotNormalized`] if the direction is not unit
    /// length.
    pub fn intersects_orb(&self, orb: &Orb<V>) -> Result<bool> {
        Ok(!self.intersection_with_orb(orb)?.is_none())
    }

    /// Points where the ray crosses the orb surface, nearest first.
    ///
    /// A ray starting inside the orb meets the surface once.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotNormalized`] if the direction is not unit
    /// length.
    pub fn intersection_with_orb(&self, orb: &Orb<V>) -> Result<Intersection<V>> {
        self.ensure_unit_direction()?;

        // |o + t·d - c|² = r² with |d| = 1 gives t² + b·t + c = 0.
        let offset = self.origin - orb.center;
        let b = 2.0 * offset.dot(&self.direction);
        let c = offset.squared_length() - orb.radius * orb.radius;
        let discriminant = b * b - 4.0 * c;

        if scalar::is_zero(discriminant) {
            let t = -b / 2.0;
            return Ok(if scalar::is_negative(t) {
                Intersection::None
            } else {
                Intersection::One(self.point_at(t))
            });
        }
        if discriminant < 0.0 {
            return Ok(Intersection::None);
        }

        let root = discriminant.sqrt();
        let near = (-b - root) / 2.0;
        let far = (-b + root) / 2.0;
        Ok(match (scalar::is_negative(near), scalar::is_negative(far)) {
            (false, false) => Intersection::Two(self.point_at(near), self.point_at(far)),
            (true, false) => Intersection::One(self.point_at(far)),
            _ => Intersection::None,
        })
    }
}

impl Ray<Vector2> {
    /// Point shared with `other`.
    ///
    /// Parallel rays meet at a single point only when they share their origin
    /// and point away from each other. Collinear rays that overlap report
    /// [`Intersection::Infinite`].
    #[must_use]
    pub fn intersection_with_ray(&self, other: &Self) -> Intersection<Vector2> {
        let (d1, d2) = (self.direction, other.direction);

        if side::are_parallel(&d1, &d2) {
            tracing::trace!(ray = %self, other = %other, "parallel rays");
            if self.origin == other.origin {
                return if d1.dot(&d2) < 0.0 {
                    Intersection::One(self.origin)
                } else {
                    Intersection::Infinite
                };
            }
            return if self.contains(&other.origin) || other.contains(&self.origin) {
                Intersection::Infinite
            } else {
                Intersection::None
            };
        }

        let denominator = d1.perp_dot(&d2);
        let w = other.origin - self.origin;
        let t1 = w.perp_dot(&d2) / denominator;
        let t2 = w.perp_dot(&d1) / denominator;
        if scalar::is_negative(t1) || scalar::is_negative(t2) {
            Intersection::None
        } else {
            Intersection::One(self.point_at(t1))
        }
    }

    #[must_use]
    pub fn intersects_ray(&self, other: &Self) -> bool {
        !self.intersection_with_ray(other).is_none()
    }

    /// Point shared with `segment`.
    ///
    /// A collinear segment overlapping the ray reports
    /// [`Intersection::Infinite`], unless the overlap is just the origin.
    #[must_use]
    pub fn intersection_with_segment(&self, segment: &LineSegment<Vector2>) -> Intersection<Vector2> {
        let edge = segment.b - segment.a;
        if segment.a == segment.b || side::are_parallel(&self.direction, &edge) {
            return self.collinear_segment_hit(segment);
        }

        let denominator = self.direction.perp_dot(&edge);
        let w = segment.a - self.origin;
        let t = w.perp_dot(&edge) / denominator;
        let s = w.perp_dot(&self.direction) / denominator;
        if scalar::is_negative(t) || scalar::is_negative(s) || scalar::is_greater_than(s, 1.0) {
            Intersection::None
        } else {
            Intersection::One(self.point_at(t))
        }
    }

    #[must_use]
    pub fn intersects_segment(&self, segment: &LineSegment<Vector2>) -> bool {
        !self.intersection_with_segment(segment).is_none()
    }

    fn polygon_hits(&self, edges: &[LineSegment<Vector2>]) -> Intersection<Vector2> {
        self.boundary_hits(edges, |edge| self.intersection_with_segment(edge))
    }

    #[must_use]
    pub fn intersects_triangle(&self, triangle: &Triangle<Vector2>) -> bool {
        triangle.contains(&self.origin) || !self.intersection_with_triangle(triangle).is_none()
    }

    /// Points where the ray meets the triangle outline, nearest first.
    #[must_use]
    pub fn intersection_with_triangle(&self, triangle: &Triangle<Vector2>) -> Intersection<Vector2> {
        self.polygon_hits(&triangle.edges())
    }

    #[must_use]
    pub fn intersects_quadrilateral(&self, quad: &Quadrilateral) -> bool {
        quad.contains(&self.origin) || !self.intersection_with_quadrilateral(quad).is_none()
    }

    /// Points where the ray meets the quadrilateral outline, nearest first.
    #[must_use]
    pub fn intersection_with_quadrilateral(&self, quad: &Quadrilateral) -> Intersection<Vector2> {
        self.polygon_hits(&quad.edges())
    }

    /// The ray bounced off `segment`: it starts at the hit point and its
    /// direction is mirrored about the segment's normal.
    ///
    /// Returns `None` when the ray misses the segment or runs parallel to it.
    #[must_use]
    pub fn reflection(&self, segment: &LineSegment<Vector2>) -> Option<Self> {
        let edge = segment.b - segment.a;
        if side::are_parallel(&self.direction, &edge) {
            return None;
        }
        let Intersection::One(hit) = self.intersection_with_segment(segment) else {
            return None;
        };
        let normal = edge.normalize().ok()?.perpendicular();
        let d = self.direction;
        Some(Self::new(hit, d - normal * (2.0 * d.dot(&normal))))
    }

    #[must_use]
    pub fn translate(&self, offset: Vector2) -> Self {
        Self::new(self.origin + offset, self.direction)
    }

    #[must_use]
    pub fn rotate(&self, angle: Angle) -> Self {
        Self::new(self.origin.rotate(angle), self.direction.rotate(angle))
    }

    #[must_use]
    pub fn rotate_with_pivot(&self, angle: Angle, pivot: &Vector2) -> Self {
        Self::new(self.origin.rotate_with_pivot(angle, pivot), self.direction.rotate(angle))
    }

    /// Scales the origin component-wise and re-normalises the direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the scaled direction vanishes.
    pub fn scale(&self, scale: Vector2) -> Result<Self> {
        Self::with_normalized_direction(self.origin * scale, self.direction * scale)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the scaled direction vanishes.
    pub fn scale_with_pivot(&self, scale: Vector2, pivot: &Vector2) -> Result<Self> {
        Self::with_normalized_direction((self.origin - *pivot) * scale + *pivot, self.direction * scale)
    }

    /// Moves the origin through the whole affine map and the direction
    /// through its linear part, then re-normalises the direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the transformed direction
    /// vanishes.
    pub fn transform(&self, transformation: &TransformationMatrix3) -> Result<Self> {
        Self::with_normalized_direction(
            self.origin.transform(transformation),
            linear_part(&self.direction, transformation),
        )
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the transformed direction
    /// vanishes.
    pub fn transform_with_pivot(&self, transformation: &TransformationMatrix3, pivot: &Vector2) -> Result<Self> {
        Self::with_normalized_direction(
            (self.origin - *pivot).transform(transformation) + *pivot,
            linear_part(&self.direction, transformation),
        )
    }
}

/// `direction` through the 2x2 block of `transformation`, ignoring the
/// translation row.
fn linear_part(direction: &Vector2, transformation: &TransformationMatrix3) -> Vector2 {
    let m = &transformation.matrix().ij;
    Vector2::new(
        direction.x * m[0][0] + direction.y * m[1][0],
        direction.x * m[0][1] + direction.y * m[1][1],
    )
}

impl Ray<Vector3> {
    /// Point where the ray pierces `plane`.
    ///
    /// A ray lying in the plane reports [`Intersection::Infinite`].
    #[must_use]
    pub fn intersection_with_plane(&self, plane: &Plane) -> Intersection<Vector3> {
        let distance = plane.signed_distance(&self.origin);
        if plane.is_parallel_to(&self.direction) {
            return if scalar::is_zero(distance) {
                Intersection::Infinite
            } else {
                Intersection::None
            };
        }
        let t = -distance / plane.normal().dot(&self.direction);
        if scalar::is_negative(t) {
            Intersection::None
        } else {
            Intersection::One(self.point_at(t))
        }
    }

    #[must_use]
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        !self.intersection_with_plane(plane).is_none()
    }

    /// Point shared with `segment`. Skew lines never meet.
    #[must_use]
    pub fn intersection_with_segment(&self, segment: &LineSegment<Vector3>) -> Intersection<Vector3> {
        let edge = segment.b - segment.a;
        let normal = self.direction.cross(&edge);
        let scale = self.direction.length() * edge.length();
        if segment.a == segment.b || scale <= 0.0 || scalar::is_zero(normal.length() / scale) {
            return self.collinear_segment_hit(segment);
        }

        let w = segment.a - self.origin;
        if !scalar::is_zero(w.dot(&normal) / normal.length()) {
            return Intersection::None;
        }
        // o + t·d = a + s·e, solved by crossing both sides with e and d.
        let squared = normal.squared_length();
        let t = w.cross(&edge).dot(&normal) / squared;
        let s = w.cross(&self.direction).dot(&normal) / squared;
        if scalar::is_negative(t) || scalar::is_negative(s) || scalar::is_greater_than(s, 1.0) {
            Intersection::None
        } else {
            Intersection::One(self.point_at(t))
        }
    }

    #[must_use]
    pub fn intersects_segment(&self, segment: &LineSegment<Vector3>) -> bool {
        !self.intersection_with_segment(segment).is_none()
    }

    /// Points shared with `triangle`, nearest first.
    ///
    /// A ray crossing the triangle's plane meets it at most once. A ray
    /// lying in that plane reports where it crosses the outline.
    #[must_use]
    pub fn intersection_with_triangle(&self, triangle: &Triangle<Vector3>) -> Intersection<Vector3> {
        let edges = triangle.edges();
        let outline = || self.boundary_hits(&edges, |edge| self.intersection_with_segment(edge));
        let Ok(plane) = triangle.plane() else {
            return outline();
        };
        match self.intersection_with_plane(&plane) {
            Intersection::Infinite => outline(),
            Intersection::One(p) if triangle.contains(&p) => Intersection::One(p),
            _ => Intersection::None,
        }
    }

    #[must_use]
    pub fn intersects_triangle(&self, triangle: &Triangle<Vector3>) -> bool {
        triangle.contains(&self.origin) || !self.intersection_with_triangle(triangle).is_none()
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the transformed direction
    /// vanishes.
    pub fn transform(&self, matrix: &Matrix4) -> Result<Self> {
        Self::with_normalized_direction(
            self.origin.transform_point(matrix),
            self.direction.transform_direction(matrix),
        )
    }
}

impl<V: fmt::Display> fmt::Display for Ray<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RY(o({}),d({}))", self.origin, self.direction)
    }
}
