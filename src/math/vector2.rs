use std::fmt;

use crate::error::{Result, ScalarError};

use super::scalar;
use super::vector::{impl_vector_ops, Vector};
use super::{Angle, Real, TransformationMatrix3};

/// A 2D vector or point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2 {
    pub x: Real,
    pub y: Real,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);
    pub const NEG_UNIT_X: Self = Self::new(-1.0, 0.0);
    pub const NEG_UNIT_Y: Self = Self::new(0.0, -1.0);

    #[must_use]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// The vector rotated 90° clockwise: `(y, -x)`.
    #[must_use]
    pub fn perpendicular(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Counter-clockwise rotation about the origin.
    #[must_use]
    pub fn rotate(&self, angle: Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.y * cos + self.x * sin)
    }

    /// Counter-clockwise rotation about `pivot`.
    #[must_use]
    pub fn rotate_with_pivot(&self, angle: Angle, pivot: &Self) -> Self {
        (*self - *pivot).rotate(angle) + *pivot
    }

    /// Applies an affine transformation, treating `self` as a row vector
    /// `(x, y, 1)`.
    #[must_use]
    pub fn transform(&self, transformation: &TransformationMatrix3) -> Self {
        let m = &transformation.matrix().ij;
        Self::new(
            self.x * m[0][0] + self.y * m[1][0] + m[2][0],
            self.x * m[0][1] + self.y * m[1][1] + m[2][1],
        )
    }

    /// Divides component by component.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::DivisionByZero`] if any component of `other`
    /// is zero.
    pub fn checked_div_components(&self, other: &Self) -> Result<Self> {
        if scalar::is_zero(other.x) || scalar::is_zero(other.y) {
            return Err(ScalarError::DivisionByZero.into());
        }
        Ok(*self / *other)
    }

    #[must_use]
    pub fn is_vector_of_ones(&self) -> bool {
        *self == Self::ONE
    }

    /// Z component of the 3D cross product of both vectors lifted to `z = 0`.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    #[must_use]
    pub fn perp_dot(&self, other: &Self) -> Real {
        self.x * other.y - self.y * other.x
    }
}

impl Vector for Vector2 {
    const ZERO: Self = Vector2::new(0.0, 0.0);
    const UNIT_X: Self = Vector2::new(1.0, 0.0);

    fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y
    }

    fn is_zero(&self) -> bool {
        scalar::is_zero(self.x) && scalar::is_zero(self.y)
    }

    fn length(&self) -> Real {
        scalar::hypot(self.x, self.y)
    }
}

impl_vector_ops!(Vector2 { x, y }, 2);

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V2({},{})", self.x, self.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_and_perpendicular() {
        let v = Vector2::new(3.0, 4.0);
        assert_relative_eq!(v.length(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(v.squared_length(), 25.0, epsilon = 1e-9);
        assert_eq!(v.perpendicular(), Vector2::new(4.0, -3.0));
        assert_relative_eq!(v.dot(&v.perpendicular()), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn normalize_yields_unit_length() {
        let n = Vector2::new(3.0, 4.0).normalize().unwrap();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(n, Vector2::new(0.6, 0.8), epsilon = 1e-9);
    }

    #[test]
    fn normalize_null_vector_fails() {
        assert!(Vector2::ZERO.normalize().is_err());
    }

    #[test]
    fn rotate_is_counter_clockwise() {
        let r = Vector2::UNIT_X.rotate(Angle::QUARTER_TURN);
        assert_relative_eq!(r, Vector2::UNIT_Y, epsilon = 1e-9);
        let r = Vector2::UNIT_Y.rotate(Angle::QUARTER_TURN);
        assert_relative_eq!(r, Vector2::NEG_UNIT_X, epsilon = 1e-9);
    }

    #[test]
    fn rotate_with_pivot_keeps_pivot_fixed() {
        let pivot = Vector2::new(1.0, 1.0);
        let r = Vector2::new(2.0, 1.0).rotate_with_pivot(Angle::HALF_TURN, &pivot);
        assert_relative_eq!(r, Vector2::new(0.0, 1.0), epsilon = 1e-9);
        assert_relative_eq!(pivot.rotate_with_pivot(Angle::QUARTER_TURN, &pivot), pivot, epsilon = 1e-9);
    }

    #[test]
    fn operators() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a * b, Vector2::new(3.0, -2.0));
        assert_eq!(b / 2.0, Vector2::new(1.5, -0.5));

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vector2::new(1.5, -0.5));
    }

    #[test]
    fn checked_division() {
        let a = Vector2::new(4.0, 2.0);
        assert!(a.checked_div(0.0).is_err());
        assert_eq!(a.checked_div(2.0).unwrap(), Vector2::new(2.0, 1.0));
        assert!(a.checked_div_components(&Vector2::new(1.0, 0.0)).is_err());
        assert_eq!(
            a.checked_div_components(&Vector2::new(2.0, 2.0)).unwrap(),
            Vector2::new(2.0, 1.0)
        );
    }

    #[test]
    fn dot_is_commutative() {
        let a = Vector2::new(1.5, -2.0);
        let b = Vector2::new(0.25, 7.0);
        assert_relative_eq!(a.dot(&b), b.dot(&a), epsilon = 1e-9);
    }

    #[test]
    fn angle_between_orthogonal_vectors() {
        let angle = Vector2::UNIT_X.angle_between(&Vector2::new(0.0, 5.0)).unwrap();
        assert_eq!(angle, Angle::QUARTER_TURN);
        let angle = Vector2::UNIT_X.angle_between(&Vector2::NEG_UNIT_X).unwrap();
        assert_eq!(angle, Angle::HALF_TURN);
        assert!(Vector2::UNIT_X.angle_between(&Vector2::ZERO).is_err());
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Vector2::ZERO;
        let b = Vector2::new(2.0, 4.0);
        assert_eq!(a.lerp(0.5, &b), Vector2::new(1.0, 2.0));
        assert_eq!(a.lerp(2.0, &b), Vector2::new(4.0, 8.0));
    }

    #[test]
    fn transform_applies_translation_rotation_scale() {
        let t = TransformationMatrix3::new(
            Vector2::new(1.0, 2.0),
            Angle::QUARTER_TURN,
            Vector2::new(2.0, 2.0),
        );
        let p = Vector2::UNIT_X.transform(&t);
        assert_relative_eq!(p, Vector2::new(1.0, 4.0), epsilon = 1e-9);
    }

    #[test]
    fn tolerance_equality_and_conversions() {
        let a = Vector2::new(1.0, 2.0);
        assert_eq!(a, Vector2::new(1.0 + crate::math::EPSILON / 2.0, 2.0));
        assert_ne!(a, Vector2::new(1.0 + crate::math::EPSILON * 2.0, 2.0));
        let arr: [Real; 2] = a.into();
        assert_eq!(Vector2::from(arr), a);
        assert_relative_eq!(a[1], 2.0, epsilon = 1e-9);
        assert!(Vector2::ONE.is_vector_of_ones());
    }

    #[test]
    fn display_format() {
        assert_eq!(Vector2::new(1.0, -2.5).to_string(), "V2(1,-2.5)");
    }
}
