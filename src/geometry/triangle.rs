use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{scalar, Angle, Real, TransformationMatrix3, Vector, Vector2, Vector3};

use super::{side, LineSegment, Plane};

/// A triangle with vertices `a`, `b`, `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<V> {
    pub a: V,
    pub b: V,
    pub c: V,
}

impl<V: Vector> Triangle<V> {
    #[must_use]
    pub fn new(a: V, b: V, c: V) -> Self {
        Self { a, b, c }
    }

    /// Edges `ab`, `bc`, `ca`.
    #[must_use]
    pub fn edges(&self) -> [LineSegment<V>; 3] {
        [
            LineSegment::new(self.a, self.b),
            LineSegment::new(self.b, self.c),
            LineSegment::new(self.c, self.a),
        ]
    }

    /// Half the parallelogram area `|u||v| sin θ`, computed through the
    /// Lagrange identity so it works in any dimension.
    #[must_use]
    pub fn area(&self) -> Real {
        let u = self.b - self.a;
        let v = self.c - self.a;
        let dot = u.dot(&v);
        let squared = u.squared_length() * v.squared_length() - dot * dot;
        0.5 * squared.max(0.0).sqrt()
    }

    /// Interior angle at `a`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `a` coincides with another
    /// vertex.
    pub fn angle_a(&self) -> Result<Angle> {
        (self.b - self.a).angle_between(&(self.c - self.a))
    }

    /// Interior angle at `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `b` coincides with another
    /// vertex.
    pub fn angle_b(&self) -> Result<Angle> {
        (self.a - self.b).angle_between(&(self.c - self.b))
    }

    /// Interior angle at `c`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `c` coincides with another
    /// vertex.
    pub fn angle_c(&self) -> Result<Angle> {
        (self.a - self.c).angle_between(&(self.b - self.c))
    }

    /// Whether the vertices are collinear, judged by `sin²` of the angle at
    /// `a` so that the size of the triangle does not matter.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let u = self.b - self.a;
        let v = self.c - self.a;
        let scale = u.squared_length() * v.squared_length();
        let dot = u.dot(&v);
        scale <= 0.0 || scalar::is_zero((scale - dot * dot) / scale)
    }

    /// A collinear triangle covers its longest edge and nothing else.
    fn longest_edge_contains(&self, point: &V) -> bool {
        self.edges()
            .into_iter()
            .max_by(|p, q| p.length().total_cmp(&q.length()))
            .is_some_and(|edge| edge.contains(point))
    }

    #[must_use]
    pub fn centroid(&self) -> V {
        (self.a + self.b + self.c) / 3.0
    }

    /// Center of the inscribed circle: the vertices weighted by the length
    /// of the opposite edge.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if all three vertices coincide.
    pub fn incenter(&self) -> Result<V> {
        let la = self.b.distance(&self.c);
        let lb = self.c.distance(&self.a);
        let lc = self.a.distance(&self.b);
        let perimeter = la + lb + lc;
        if scalar::is_zero(perimeter) {
            return Err(GeometryError::Degenerate("triangle has zero perimeter".into()).into());
        }
        Ok((self.a * la + self.b * lb + self.c * lc) / perimeter)
    }
}

impl Triangle<Vector2> {
    /// Whether `point` is inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Vector2) -> bool {
        if self.is_degenerate() {
            return self.longest_edge_contains(point);
        }
        side::same_side(point, &self.c, &self.a, &self.b)
            && side::same_side(point, &self.a, &self.b, &self.c)
            && side::same_side(point, &self.b, &self.c, &self.a)
    }

    /// Center of the circle through the three vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn circumcenter(&self) -> Result<Vector2> {
        let (a, b, c) = (self.a, self.b, self.c);
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if scalar::is_zero(d) {
            tracing::debug!(triangle = %self, "collinear vertices have no circumcenter");
            return Err(GeometryError::Degenerate("collinear triangle vertices".into()).into());
        }
        let (a2, b2, c2) = (a.squared_length(), b.squared_length(), c.squared_length());
        Ok(Vector2::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        ))
    }

    /// Intersection of the altitudes, from the Euler line relation
    /// `H = A + B + C - 2O`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn orthocenter(&self) -> Result<Vector2> {
        let circumcenter = self.circumcenter()?;
        Ok(self.a + self.b + self.c - circumcenter * 2.0)
    }

    #[must_use]
    pub fn intersects_segment(&self, segment: &LineSegment<Vector2>) -> bool {
        segment.intersects_triangle(self)
    }

    #[must_use]
    pub fn translate(&self, offset: Vector2) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }

    #[must_use]
    pub fn rotate_with_pivot(&self, angle: Angle, pivot: &Vector2) -> Self {
        Self::new(
            self.a.rotate_with_pivot(angle, pivot),
            self.b.rotate_with_pivot(angle, pivot),
            self.c.rotate_with_pivot(angle, pivot),
        )
    }

    #[must_use]
    pub fn transform(&self, transformation: &TransformationMatrix3) -> Self {
        Self::new(
            self.a.transform(transformation),
            self.b.transform(transformation),
            self.c.transform(transformation),
        )
    }

    /// Applies `transformation` as if `pivot` were the origin.
    #[must_use]
    pub fn transform_with_pivot(&self, transformation: &TransformationMatrix3, pivot: &Vector2) -> Self {
        let apply = |p: Vector2| (p - *pivot).transform(transformation) + *pivot;
        Self::new(apply(self.a), apply(self.b), apply(self.c))
    }
}

impl Triangle<Vector3> {
    /// Unit normal, oriented by the winding `a -> b -> c`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn normal(&self) -> Result<Vector3> {
        Ok(self.plane()?.normal())
    }

    /// The plane holding the triangle, facing along [`Triangle::normal`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for collinear vertices.
    pub fn plane(&self) -> Result<Plane> {
        Plane::from_points(&self.a, &self.b, &self.c)
    }

    /// Whether `point` lies in the triangle's plane, inside or on the
    /// boundary.
    #[must_use]
    pub fn contains(&self, point: &Vector3) -> bool {
        if self.is_degenerate() {
            return self.longest_edge_contains(point);
        }
        let normal = (self.b - self.a).cross(&(self.c - self.a));
        let squared = normal.squared_length();
        if !scalar::is_zero((*point - self.a).dot(&normal) / squared.sqrt()) {
            return false;
        }
        // Barycentric weights: each sub-triangle's signed area over the whole.
        let weight = |from: &Vector3, to: &Vector3| (*to - *from).cross(&(*point - *from)).dot(&normal) / squared;
        [weight(&self.b, &self.c), weight(&self.c, &self.a), weight(&self.a, &self.b)]
            .into_iter()
            .all(|w| !scalar::is_negative(w))
    }
}

impl<V: fmt::Display> fmt::Display for Triangle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TR(a({}),b({}),c({}))", self.a, self.b, self.c)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle<Vector2> {
        Triangle::new(Vector2::ZERO, Vector2::new(4.0, 0.0), Vector2::new(0.0, 3.0))
    }

    #[test]
    fn area_in_two_and_three_dimensions() {
        assert_relative_eq!(right_triangle().area(), 6.0, epsilon = 1e-9);
        let t = Triangle::new(Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_Y);
        assert_relative_eq!(t.area(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn interior_angles_sum_to_half_turn() {
        let t = right_triangle();
        let sum = t.angle_a().unwrap() + t.angle_b().unwrap() + t.angle_c().unwrap();
        assert_eq!(t.angle_a().unwrap(), Angle::QUARTER_TURN);
        assert_relative_eq!(sum, Angle::HALF_TURN, epsilon = 1e-9);
    }

    #[test]
    fn coincident_vertices_have_no_angle() {
        let t = Triangle::new(Vector2::ZERO, Vector2::ZERO, Vector2::UNIT_X);
        assert!(t.angle_a().is_err());
    }

    #[test]
    fn centers() {
        let t = right_triangle();
        assert_relative_eq!(t.centroid(), Vector2::new(4.0 / 3.0, 1.0), epsilon = 1e-9);
        assert_relative_eq!(t.incenter().unwrap(), Vector2::new(1.0, 1.0), epsilon = 1e-9);
        assert_relative_eq!(t.circumcenter().unwrap(), Vector2::new(2.0, 1.5), epsilon = 1e-9);
        assert_relative_eq!(t.orthocenter().unwrap(), Vector2::ZERO, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_centers_fail() {
        let point = Triangle::new(Vector2::ONE, Vector2::ONE, Vector2::ONE);
        assert!(point.incenter().is_err());
        let flat = Triangle::new(Vector2::ZERO, Vector2::UNIT_X, Vector2::new(2.0, 0.0));
        assert!(flat.circumcenter().is_err());
        assert!(flat.orthocenter().is_err());
    }

    #[test]
    fn contains_includes_boundary() {
        let t = right_triangle();
        assert!(t.contains(&Vector2::new(1.0, 1.0)));
        assert!(t.contains(&Vector2::new(2.0, 0.0)));
        assert!(t.contains(&t.a));
        assert!(!t.contains(&Vector2::new(3.0, 3.0)));
        assert!(!t.contains(&Vector2::new(-0.1, 1.0)));
    }

    #[test]
    fn flat_triangle_covers_only_its_longest_edge() {
        let flat = Triangle::new(Vector2::ZERO, Vector2::UNIT_X, Vector2::new(2.0, 0.0));
        assert!(flat.is_degenerate());
        assert!(!flat.contains(&Vector2::new(100.0, 100.0)));
        assert!(!flat.contains(&Vector2::new(1.0, -1.0)));
        assert!(!flat.contains(&Vector2::new(2.5, 0.0)));
        assert!(flat.contains(&Vector2::new(1.5, 0.0)));
        assert!(flat.contains(&flat.a));
        assert!(!flat.intersects_segment(&LineSegment::new(Vector2::new(5.0, 5.0), Vector2::new(6.0, 5.0))));

        let point = Triangle::new(Vector2::ONE, Vector2::ONE, Vector2::ONE);
        assert!(point.contains(&Vector2::ONE));
        assert!(!point.contains(&Vector2::ZERO));
    }

    #[test]
    fn degeneracy_does_not_depend_on_size() {
        let tiny = Triangle::new(Vector2::ZERO, Vector2::new(1e-4, 0.0), Vector2::new(0.0, 1e-4));
        assert!(!tiny.is_degenerate());
        assert!(tiny.contains(&Vector2::new(2e-5, 2e-5)));
        assert!(!tiny.contains(&Vector2::new(1e-4, 1e-4)));
        assert!(!right_triangle().is_degenerate());
    }

    #[test]
    fn normal_and_plane_in_3d() {
        let t = Triangle::new(Vector3::ZERO, Vector3::new(2.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(t.normal().unwrap(), Vector3::UNIT_Z);
        assert_eq!(t.plane().unwrap(), Plane::XY);
        let reversed = Triangle::new(t.a, t.c, t.b);
        assert_eq!(reversed.normal().unwrap(), Vector3::NEG_UNIT_Z);
        let flat = Triangle::new(Vector3::ZERO, Vector3::UNIT_X, Vector3::new(3.0, 0.0, 0.0));
        assert!(flat.normal().is_err());
    }

    #[test]
    fn containment_in_3d() {
        let t = Triangle::new(
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(4.0, 0.0, 1.0),
            Vector3::new(0.0, 4.0, 1.0),
        );
        assert!(t.contains(&Vector3::new(1.0, 1.0, 1.0)));
        assert!(t.contains(&Vector3::new(2.0, 2.0, 1.0)));
        assert!(t.contains(&t.c));
        assert!(!t.contains(&Vector3::new(1.0, 1.0, 1.5)));
        assert!(!t.contains(&Vector3::new(3.0, 3.0, 1.0)));

        let flat = Triangle::new(Vector3::ZERO, Vector3::UNIT_X, Vector3::new(2.0, 0.0, 0.0));
        assert!(flat.contains(&Vector3::new(1.5, 0.0, 0.0)));
        assert!(!flat.contains(&Vector3::new(1.0, 5.0, 5.0)));
    }

    #[test]
    fn segment_queries() {
        let t = right_triangle();
        assert!(t.intersects_segment(&LineSegment::new(Vector2::new(-1.0, 1.0), Vector2::new(1.0, 1.0))));
        assert!(!t.intersects_segment(&LineSegment::new(Vector2::new(5.0, 5.0), Vector2::new(6.0, 5.0))));
    }

    #[test]
    fn transformations_keep_area() {
        let t = right_triangle();
        let m = TransformationMatrix3::new(Vector2::new(1.0, 2.0), Angle::from_degrees(33.0), Vector2::ONE);
        assert_relative_eq!(t.transform(&m).area(), 6.0, epsilon = 1e-9);
        let pivoted = t.transform_with_pivot(&TransformationMatrix3::from_rotation(Angle::HALF_TURN), &t.a);
        assert_relative_eq!(pivoted.b, Vector2::new(-4.0, 0.0), epsilon = 1e-9);
        assert_eq!(t.translate(Vector2::ONE).a, Vector2::ONE);
        let rotated = t.rotate_with_pivot(Angle::QUARTER_TURN, &Vector2::ZERO);
        assert_relative_eq!(rotated.b, Vector2::new(0.0, 4.0), epsilon = 1e-9);
    }

    #[test]
    fn display_format() {
        let t = Triangle::new(Vector2::ZERO, Vector2::UNIT_X, Vector2::UNIT_Y);
        assert_eq!(t.to_string(), "TR(a(V2(0,0)),b(V2(1,0)),c(V2(0,1)))");
    }
}
