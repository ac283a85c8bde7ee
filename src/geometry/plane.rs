use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{scalar, Matrix4, Real, Vector, Vector3, Vector4};

use super::Intersection;

/// Position of a point relative to a [`Plane`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// On the side the normal points to.
    Front,
    /// On the opposite side.
    Back,
    /// On the plane, within tolerance.
    On,
}

/// The plane `normal · p + offset = 0`.
///
/// The normal is always unit length, so [`Plane::signed_distance`] is a true
/// distance. Two planes compare equal only if their normals point the same
/// way.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: Vector3,
    offset: Real,
}

impl Plane {
    /// The `z = 0` plane, facing `+Z`.
    pub const XY: Self = Self { normal: Vector3::UNIT_Z, offset: 0.0 };
    /// The `x = 0` plane, facing `+X`.
    pub const YZ: Self = Self { normal: Vector3::UNIT_X, offset: 0.0 };
    /// The `y = 0` plane, facing `+Y`.
    pub const ZX: Self = Self { normal: Vector3::UNIT_Y, offset: 0.0 };

    /// The plane `a·x + b·y + c·z + d = 0`, scaled so that `(a, b, c)` is a
    /// unit vector.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `a`, `b` and `c` are all zero.
    pub fn new(a: Real, b: Real, c: Real, d: Real) -> Result<Self> {
        let raw = Vector3::new(a, b, c);
        let length = raw.length();
        let normal = raw.normalize()?;
        Ok(Self { normal, offset: d / length })
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a null `normal`.
    pub fn from_point_and_normal(point: &Vector3, normal: &Vector3) -> Result<Self> {
        let normal = normal.normalize()?;
        Ok(Self { normal, offset: -normal.dot(point) })
    }

    /// The plane through three points, facing `(p2 - p1) × (p3 - p1)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points are collinear.
    pub fn from_points(p1: &Vector3, p2: &Vector3, p3: &Vector3) -> Result<Self> {
        let u = *p2 - *p1;
        let v = *p3 - *p1;
        let normal = u.cross(&v);
        let scale = u.length() * v.length();
        if scale <= 0.0 || scalar::is_zero(normal.length() / scale) {
            tracing::debug!(%p1, %p2, %p3, "collinear points do not define a plane");
            return Err(GeometryError::Degenerate("collinear plane points".into()).into());
        }
        Self::from_point_and_normal(p1, &normal)
    }

    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    #[must_use]
    pub fn offset(&self) -> Real {
        self.offset
    }

    /// `[a, b, c, d]` of the normalized equation.
    #[must_use]
    pub fn coefficients(&self) -> [Real; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.offset]
    }

    /// Same plane, facing the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self { normal: -self.normal, offset: -self.offset }
    }

    /// Positive in front of the plane, negative behind it.
    #[must_use]
    pub fn signed_distance(&self, point: &Vector3) -> Real {
        self.normal.dot(point) + self.offset
    }

    #[must_use]
    pub fn distance(&self, point: &Vector3) -> Real {
        self.signed_distance(point).abs()
    }

    #[must_use]
    pub fn contains(&self, point: &Vector3) -> bool {
        scalar::is_zero(self.signed_distance(point))
    }

    #[must_use]
    pub fn classify(&self, point: &Vector3) -> PlaneSide {
        let distance = self.signed_distance(point);
        if scalar::is_zero(distance) {
            PlaneSide::On
        } else if distance > 0.0 {
            PlaneSide::Front
        } else {
            PlaneSide::Back
        }
    }

    /// Foot of the perpendicular from `point`.
    #[must_use]
    pub fn point_projection(&self, point: &Vector3) -> Vector3 {
        *point - self.normal * self.signed_distance(point)
    }

    /// Whether `direction` runs along the plane.
    pub(crate) fn is_parallel_to(&self, direction: &Vector3) -> bool {
        let length = direction.length();
        length <= 0.0 || scalar::is_zero(self.normal.dot(direction) / length)
    }

    /// Moves the plane by a row-vector transformation.
    ///
    /// Points map as `p·M`, so the coefficients map through the transposed
    /// inverse.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MatrixError::Singular`] if `matrix` has no
    /// inverse.
    pub fn transform(&self, matrix: &Matrix4) -> Result<Self> {
        let inverse_transpose = matrix.inverse()?.transpose();
        let [a, b, c, d] = self.coefficients();
        let moved = Vector4::new(a, b, c, d).transform(&inverse_transpose);
        Self::new(moved.x, moved.y, moved.z, moved.w)
    }

    /// A point on the line shared with `other`, if the two are not parallel.
    fn line_point(&self, other: &Self) -> Option<Vector3> {
        let direction = self.normal.cross(&other.normal);
        let squared = direction.squared_length();
        if scalar::is_zero(squared) {
            return None;
        }
        let point = other.normal.cross(&direction) * -self.offset + direction.cross(&self.normal) * -other.offset;
        Some(point / squared)
    }

    /// Point shared by `self`, `second` and `third`.
    ///
    /// Planes meeting along a common line, or all coinciding, report
    /// [`Intersection::Infinite`].
    #[must_use]
    pub fn intersection_with_planes(&self, second: &Self, third: &Self) -> Intersection<Vector3> {
        let (n1, n2, n3) = (self.normal, second.normal, third.normal);
        let determinant = n1.dot(&n2.cross(&n3));

        if !scalar::is_zero(determinant) {
            let point = n2.cross(&n3) * -self.offset + n3.cross(&n1) * -second.offset + n1.cross(&n2) * -third.offset;
            return Intersection::One(point / determinant);
        }

        // The normals are coplanar: either the planes share a line or they
        // have nothing in common.
        let shared = self
            .line_point(second)
            .map(|p| third.contains(&p))
            .or_else(|| self.line_point(third).map(|p| second.contains(&p)))
            .or_else(|| second.line_point(third).map(|p| self.contains(&p)));
        let on_all = shared.unwrap_or_else(|| {
            let p = self.normal * -self.offset;
            second.contains(&p) && third.contains(&p)
        });
        tracing::trace!(first = %self, %second, %third, on_all, "planes without a single common point");
        if on_all {
            Intersection::Infinite
        } else {
            Intersection::None
        }
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && scalar::are_equal(self.offset, other.offset)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.coefficients();
        write!(f, "PL({a},{b},{c},{d})")
    }
}
