use std::fmt;

use crate::error::{Result, ScalarError};

use super::scalar;
use super::vector::{impl_vector_ops, Vector};
use super::{Matrix3, Matrix4, Real, Vector4};

/// A 3D vector or point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_UNIT_X: Self = Self::new(-1.0, 0.0, 0.0);
    pub const NEG_UNIT_Y: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEG_UNIT_Z: Self = Self::new(0.0, 0.0, -1.0);

    #[must_use]
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiplies `self` as a row vector by `matrix`.
    #[must_use]
    pub fn transform(&self, matrix: &Matrix3) -> Self {
        let m = &matrix.ij;
        Self::new(
            self.x * m[0][0] + self.y * m[1][0] + self.z * m[2][0],
            self.x * m[0][1] + self.y * m[1][1] + self.z * m[2][1],
            self.x * m[0][2] + self.y * m[1][2] + self.z * m[2][2],
        )
    }

    /// Transforms `self` as a point (`w = 1`), so translation applies.
    ///
    /// The resulting `w` is dropped; the matrix is assumed affine.
    #[must_use]
    pub fn transform_point(&self, matrix: &Matrix4) -> Self {
        Vector4::from_point(*self).transform(matrix).xyz()
    }

    /// Transforms `self` as a direction (`w = 0`), ignoring translation.
    #[must_use]
    pub fn transform_direction(&self, matrix: &Matrix4) -> Self {
        Vector4::from_direction(*self).transform(matrix).xyz()
    }

    /// Divides component by component.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::DivisionByZero`] if any component of `other`
    /// is zero.
    pub fn checked_div_components(&self, other: &Self) -> Result<Self> {
        if scalar::is_zero(other.x) || scalar::is_zero(other.y) || scalar::is_zero(other.z) {
            return Err(ScalarError::DivisionByZero.into());
        }
        Ok(*self / *other)
    }

    #[must_use]
    pub fn is_vector_of_ones(&self) -> bool {
        *self == Self::ONE
    }
}

impl Vector for Vector3 {
    const ZERO: Self = Vector3::new(0.0, 0.0, 0.0);
    const UNIT_X: Self = Vector3::new(1.0, 0.0, 0.0);

    fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn is_zero(&self) -> bool {
        scalar::is_zero(self.x) && scalar::is_zero(self.y) && scalar::is_zero(self.z)
    }
}

impl_vector_ops!(Vector3 { x, y, z }, 3);

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V3({},{},{})", self.x, self.y, self.z)
    }
}
