use std::fmt;

use crate::math::{scalar, Angle, Real, TransformationMatrix3, Vector, Vector2, Vector3, EPSILON};

use super::{side, Intersection, Orb, Plane, Quadrilateral, Triangle};

/// Parallel when `sin²θ <= EPSILON`, given `squared_module = |u|²|v|² sin²θ`
/// and the squared lengths `lu`, `lv` of the two directions.
fn are_parallel(squared_module: Real, lu: Real, lv: Real) -> bool {
    squared_module <= EPSILON * lu * lv
}

/// The straight segment between `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<V> {
    pub a: V,
    pub b: V,
}

impl<V: Vector> LineSegment<V> {
    #[must_use]
    pub fn new(a: V, b: V) -> Self {
        Self { a, b }
    }

    /// Segment from the origin to the unit X vector.
    #[must_use]
    pub fn unit_line() -> Self {
        Self::new(V::ZERO, V::UNIT_X)
    }

    /// Zero-length segment at the origin.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(V::ZERO, V::ZERO)
    }

    #[must_use]
    pub fn length(&self) -> Real {
        self.a.distance(&self.b)
    }

    #[must_use]
    pub fn center(&self) -> V {
        self.lerp(0.5)
    }

    /// Point at parameter `t`, where `0` is `a` and `1` is `b`.
    #[must_use]
    pub fn lerp(&self, t: Real) -> V {
        self.a.lerp(t, &self.b)
    }

    /// Parameter of the point of the segment closest to `point`, in `[0, 1]`.
    fn project(&self, point: &V) -> Real {
        let v = self.b - self.a;
        if v.is_zero() {
            return 0.0;
        }
        scalar::clamp((*point - self.a).dot(&v) / v.squared_length(), 0.0, 1.0)
    }

    #[must_use]
    pub fn min_distance_to_point(&self, point: &V) -> Real {
        self.lerp(self.project(point)).distance(point)
    }

    #[must_use]
    pub fn max_distance_to_point(&self, point: &V) -> Real {
        self.a.distance(point).max(self.b.distance(point))
    }

    /// Whether `point` lies on the segment.
    #[must_use]
    pub fn contains(&self, point: &V) -> bool {
        scalar::is_zero(self.min_distance_to_point(point))
    }

    /// Closest pair of points `(on self, on other)`.
    #[must_use]
    pub fn closest_points(&self, other: &Self) -> (V, V) {
        let d1 = self.b - self.a;
        let d2 = other.b - other.a;
        let r = self.a - other.a;
        let a = d1.squared_length();
        let e = d2.squared_length();
        let f = d2.dot(&r);

        if d1.is_zero() && d2.is_zero() {
            return (self.a, other.a);
        }

        let (s, t) = if d1.is_zero() {
            (0.0, scalar::clamp(f / e, 0.0, 1.0))
        } else {
            let c = d1.dot(&r);
            if d2.is_zero() {
                (scalar::clamp(-c / a, 0.0, 1.0), 0.0)
            } else {
                let b = d1.dot(&d2);
                let denom = a * e - b * b;
                let s = if are_parallel(denom, a, e) {
                    0.0
                } else {
                    scalar::clamp((b * f - c * e) / denom, 0.0, 1.0)
                };
                let t = (b * s + f) / e;
                if t < 0.0 {
                    (scalar::clamp(-c / a, 0.0, 1.0), 0.0)
                } else if t > 1.0 {
                    (scalar::clamp((b - c) / a, 0.0, 1.0), 1.0)
                } else {
                    (s, t)
                }
            }
        };
        (self.a + d1 * s, other.a + d2 * t)
    }

    #[must_use]
    pub fn min_distance(&self, other: &Self) -> Real {
        let (p, q) = self.closest_points(other);
        p.distance(&q)
    }

    /// Largest distance between an endpoint of `self` and one of `other`.
    #[must_use]
    pub fn max_distance(&self, other: &Self) -> Real {
        [
            self.a.distance(&other.a),
            self.a.distance(&other.b),
            self.b.distance(&other.a),
            self.b.distance(&other.b),
        ]
        .into_iter()
        .fold(0.0, Real::max)
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        scalar::is_zero(self.min_distance(other))
    }

    /// Whether any point of the segment is inside or on `orb`.
    #[must_use]
    pub fn intersects_orb(&self, orb: &Orb<V>) -> bool {
        scalar::is_less_or_equal(self.min_distance_to_point(&orb.center), orb.radius)
    }

    /// Points where the segment crosses the surface of `orb`, closest to `a`
    /// first. A segment lying strictly inside the orb has none.
    #[must_use]
    pub fn intersection_with_orb(&self, orb: &Orb<V>) -> Intersection<V> {
        let direction = self.b - self.a;
        let from_center = self.a - orb.center;
        let a = direction.squared_length();
        if scalar::is_zero(a) {
            return if scalar::are_equal(from_center.length(), orb.radius) {
                Intersection::One(self.a)
            } else {
                Intersection::None
            };
        }
        let b = 2.0 * from_center.dot(&direction);
        let c = from_center.squared_length() - orb.radius * orb.radius;
        let discriminant = b * b - 4.0 * a * c;

        if scalar::is_negative(discriminant) {
            return Intersection::None;
        }
        if scalar::is_zero(discriminant) {
            let p = self.lerp(-b / (2.0 * a));
            return if self.contains(&p) {
                Intersection::One(p)
            } else {
                Intersection::None
            };
        }
        let root = discriminant.sqrt();
        let near = self.lerp((-b - root) / (2.0 * a));
        let far = self.lerp((-b + root) / (2.0 * a));
        match (self.contains(&near), self.contains(&far)) {
            (true, true) => Intersection::Two(near, far),
            (true, false) => Intersection::One(near),
            (false, true) => Intersection::One(far),
            (false, false) => Intersection::None,
        }
    }

    /// Shared points of both segments.
    ///
    /// Collinear segments that overlap along a stretch of positive length
    /// report the ends of that stretch, ordered from `self.a` towards
    /// `self.b`. Identical segments (in either orientation) report
    /// [`Intersection::Infinite`].
    #[must_use]
    pub fn intersection_with_segment(&self, other: &Self) -> Intersection<V> {
        let v1 = self.b - self.a;
        let v2 = other.b - other.a;
        let self_is_point = v1.is_zero();
        let other_is_point = v2.is_zero();

        if self_is_point || other_is_point {
            tracing::trace!(segment = %self, other = %other, "degenerate segment intersection");
            return match (self_is_point, other_is_point) {
                (true, true) if self.a == other.a => Intersection::One(self.a),
                (true, false) if other.contains(&self.a) => Intersection::One(self.a),
                (false, true) if self.contains(&other.a) => Intersection::One(other.a),
                _ => Intersection::None,
            };
        }

        // |v1|²|v2|² sin²θ, through the Lagrange identity.
        let dot = v1.dot(&v2);
        let (l1, l2) = (v1.squared_length(), v2.squared_length());
        if !are_parallel(l1 * l2 - dot * dot, l1, l2) {
            let (p, q) = self.closest_points(other);
            return if p == q {
                Intersection::One(p)
            } else {
                Intersection::None
            };
        }

        if !scalar::is_zero(self.min_distance(other)) {
            tracing::trace!(segment = %self, other = %other, "parallel segments without contact");
            return Intersection::None;
        }

        tracing::trace!(segment = %self, other = %other, "collinear segments");
        if (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a) {
            return Intersection::Infinite;
        }

        // Overlap interval of `other` along `self`, in self's parameter.
        let ta = (other.a - self.a).dot(&v1) / l1;
        let tb = (other.b - self.a).dot(&v1) / l1;
        let lo = ta.min(tb).max(0.0);
        let hi = ta.max(tb).min(1.0);
        let start = self.lerp(lo);
        let end = self.lerp(hi);
        if start == end {
            Intersection::One(start)
        } else if lo > hi {
            Intersection::None
        } else {
            Intersection::Two(start, end)
        }
    }

    /// Points where the segment meets a closed outline, closest to `a` first.
    fn polygon_hits(&self, edges: &[Self]) -> Intersection<V> {
        let hits = edges
            .iter()
            .flat_map(|edge| match self.intersection_with_segment(edge) {
                Intersection::One(p) => vec![p],
                Intersection::Two(p, q) => vec![p, q],
                Intersection::Infinite => vec![edge.a, edge.b],
                Intersection::None => Vec::new(),
            })
            .collect();
        side::nearest_distinct(hits, &self.a)
    }

    /// Scales the segment about its center.
    #[must_use]
    pub fn scaled(&self, factor: Real) -> Self {
        let center = self.center();
        Self::new(
            center + (self.a - center) * factor,
            center + (self.b - center) * factor,
        )
    }

    /// Scales the segment keeping `a` fixed.
    #[must_use]
    pub fn scaled_from_a(&self, factor: Real) -> Self {
        Self::new(self.a, self.a + (self.b - self.a) * factor)
    }

    /// Scales the segment keeping `b` fixed.
    #[must_use]
    pub fn scaled_from_b(&self, factor: Real) -> Self {
        Self::new(self.b + (self.a - self.b) * factor, self.b)
    }
}

impl LineSegment<Vector2> {
    /// Whether the segment touches the triangle, including lying inside it.
    #[must_use]
    pub fn intersects_triangle(&self, triangle: &Triangle<Vector2>) -> bool {
        triangle.contains(&self.a) || triangle.edges().iter().any(|edge| self.intersects(edge))
    }

    /// Points where the segment meets the triangle outline, closest to `a`
    /// first.
    #[must_use]
    pub fn intersection_with_triangle(&self, triangle: &Triangle<Vector2>) -> Intersection<Vector2> {
        self.polygon_hits(&triangle.edges())
    }

    /// Whether the segment touches the quadrilateral, including lying
    /// inside it.
    #[must_use]
    pub fn intersects_quadrilateral(&self, quad: &Quadrilateral) -> bool {
        quad.contains(&self.a) || quad.edges().iter().any(|edge| self.intersects(edge))
    }

    /// Points where the segment meets the quadrilateral outline, closest to
    /// `a` first.
    #[must_use]
    pub fn intersection_with_quadrilateral(&self, quad: &Quadrilateral) -> Intersection<Vector2> {
        self.polygon_hits(&quad.edges())
    }

    #[must_use]
    pub fn translate(&self, offset: Vector2) -> Self {
        Self::new(self.a + offset, self.b + offset)
    }

    /// Rotates both endpoints about the origin.
    #[must_use]
    pub fn rotate(&self, angle: Angle) -> Self {
        Self::new(self.a.rotate(angle), self.b.rotate(angle))
    }

    #[must_use]
    pub fn rotate_with_pivot(&self, angle: Angle, pivot: &Vector2) -> Self {
        Self::new(
            self.a.rotate_with_pivot(angle, pivot),
            self.b.rotate_with_pivot(angle, pivot),
        )
    }

    /// Scales both endpoints component-wise about the origin.
    #[must_use]
    pub fn scale(&self, scale: Vector2) -> Self {
        Self::new(self.a * scale, self.b * scale)
    }

    #[must_use]
    pub fn scale_with_pivot(&self, scale: Vector2, pivot: &Vector2) -> Self {
        Self::new(
            (self.a - *pivot) * scale + *pivot,
            (self.b - *pivot) * scale + *pivot,
        )
    }

    #[must_use]
    pub fn transform(&self, transformation: &TransformationMatrix3) -> Self {
        Self::new(self.a.transform(transformation), self.b.transform(transformation))
    }

    /// Applies `transformation` as if `pivot` were the origin.
    #[must_use]
    pub fn transform_with_pivot(&self, transformation: &TransformationMatrix3, pivot: &Vector2) -> Self {
        let apply = |p: Vector2| (p - *pivot).transform(transformation) + *pivot;
        Self::new(apply(self.a), apply(self.b))
    }
}

impl LineSegment<Vector3> {
    /// Point where the segment crosses `plane`.
    ///
    /// A segment lying in the plane reports [`Intersection::Infinite`].
    #[must_use]
    pub fn intersection_with_plane(&self, plane: &Plane) -> Intersection<Vector3> {
        let da = plane.signed_distance(&self.a);
        let db = plane.signed_distance(&self.b);
        match (scalar::is_zero(da), scalar::is_zero(db)) {
            (true, true) if self.a == self.b => Intersection::One(self.a),
            (true, true) => Intersection::Infinite,
            (true, false) => Intersection::One(self.a),
            (false, true) => Intersection::One(self.b),
            (false, false) if (da > 0.0) != (db > 0.0) => Intersection::One(self.lerp(da / (da - db))),
            (false, false) => Intersection::None,
        }
    }

    #[must_use]
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        !self.intersection_with_plane(plane).is_none()
    }

    /// Points shared with `triangle`.
    ///
    /// A segment crossing the triangle's plane meets it at most once. A
    /// segment lying in that plane reports where it crosses the outline,
    /// closest to `a` first.
    #[must_use]
    pub fn intersection_with_triangle(&self, triangle: &Triangle<Vector3>) -> Intersection<Vector3> {
        let Ok(plane) = triangle.plane() else {
            return self.polygon_hits(&triangle.edges());
        };
        match self.intersection_with_plane(&plane) {
            Intersection::Infinite => self.polygon_hits(&triangle.edges()),
            Intersection::One(p) if triangle.contains(&p) => Intersection::One(p),
            _ => Intersection::None,
        }
    }

    /// Whether the segment touches the triangle, including lying inside it.
    #[must_use]
    pub fn intersects_triangle(&self, triangle: &Triangle<Vector3>) -> bool {
        triangle.contains(&self.a) || !self.intersection_with_triangle(triangle).is_none()
    }
}

impl<V: fmt::Display> fmt::Display for LineSegment<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LS(a({}),b({}))", self.a, self.b)
    }
}
