use std::fmt;

use crate::error::{Result, ScalarError};

use super::scalar;
use super::vector::{impl_vector_ops, Vector};
use super::{Matrix4, Real, Vector3};

/// A homogeneous 4D vector.
///
/// `w` distinguishes points (`w = 1`) from directions (`w = 0`). Arithmetic
/// operators act on all four components, but the metric operations of
/// [`Vector`] (`dot`, `length`, `normalize`, ...) only look at `x, y, z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector4 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl Vector4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    #[must_use]
    pub const fn from_point(p: Vector3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    #[must_use]
    pub const fn from_direction(d: Vector3) -> Self {
        Self::new(d.x, d.y, d.z, 0.0)
    }

    #[must_use]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Cross product of the `xyz` parts; the result is a direction.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::from_direction(self.xyz().cross(&other.xyz()))
    }

    /// Divides every component by `w`.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::DivisionByZero`] when `w` is zero, i.e. for a
    /// direction.
    pub fn homogenize(&self) -> Result<Self> {
        if scalar::is_zero(self.w) {
            return Err(ScalarError::DivisionByZero.into());
        }
        Ok(Self::new(self.x / self.w, self.y / self.w, self.z / self.w, 1.0))
    }

    /// Multiplies `self` as a row vector by `matrix`.
    #[must_use]
    pub fn transform(&self, matrix: &Matrix4) -> Self {
        let m = &matrix.ij;
        let v = [self.x, self.y, self.z, self.w];
        let column = |c: usize| -> Real { v.iter().zip(m).map(|(s, row)| s * row[c]).sum() };
        Self::new(column(0), column(1), column(2), column(3))
    }
}

impl Vector for Vector4 {
    const ZERO: Self = Vector4::new(0.0, 0.0, 0.0, 0.0);
    const UNIT_X: Self = Vector4::new(1.0, 0.0, 0.0, 0.0);

    fn dot(&self, other: &Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Null `x, y, z` part; `w` has no length.
    fn is_zero(&self) -> bool {
        self.xyz().is_zero()
    }

    /// Scales `x, y, z` to unit length and keeps `w`.
    fn normalize(&self) -> Result<Self> {
        let xyz = self.xyz().normalize()?;
        Ok(Self::new(xyz.x, xyz.y, xyz.z, self.w))
    }
}

impl_vector_ops!(Vector4 { x, y, z, w }, 4);

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V4({},{},{},{})", self.x, self.y, self.z, self.w)
    }
}
