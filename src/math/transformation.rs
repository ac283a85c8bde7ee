use std::fmt;
use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{MatrixError, Result};

use super::scalar;
use super::{Angle, Matrix3, Real, Vector2, EPSILON};

/// A 2D affine transformation stored as a 3x3 matrix in row-vector
/// convention.
///
/// The last column is always `[0, 0, 1]`; the last row holds the
/// translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformationMatrix3 {
    matrix: Matrix3,
}

impl TransformationMatrix3 {
    pub const IDENTITY: Self = Self {
        matrix: Matrix3::IDENTITY,
    };

    /// Composes `Scale * Rotation * Translation`.
    #[must_use]
    pub fn new(translation: Vector2, rotation: Angle, scale: Vector2) -> Self {
        let (sin, cos) = rotation.radians().sin_cos();
        Self {
            matrix: Matrix3::from_rows([
                [scale.x * cos, scale.x * sin, 0.0],
                [-scale.y * sin, scale.y * cos, 0.0],
                [translation.x, translation.y, 1.0],
            ]),
        }
    }

    #[must_use]
    pub fn from_translation(translation: Vector2) -> Self {
        Self::new(translation, Angle::ZERO, Vector2::ONE)
    }

    #[must_use]
    pub fn from_rotation(rotation: Angle) -> Self {
        Self::new(Vector2::ZERO, rotation, Vector2::ONE)
    }

    #[must_use]
    pub fn from_scale(scale: Vector2) -> Self {
        Self::new(Vector2::ZERO, Angle::ZERO, scale)
    }

    /// Wraps an arbitrary matrix, forcing its last column to `[0, 0, 1]`.
    #[must_use]
    pub fn from_matrix(mut matrix: Matrix3) -> Self {
        matrix.ij[0][2] = 0.0;
        matrix.ij[1][2] = 0.0;
        matrix.ij[2][2] = 1.0;
        Self { matrix }
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    #[must_use]
    pub fn translation(&self) -> Vector2 {
        let m = &self.matrix.ij;
        Vector2::new(m[2][0], m[2][1])
    }

    /// Lengths of both basis rows.
    #[must_use]
    pub fn scale(&self) -> Vector2 {
        let m = &self.matrix.ij;
        Vector2::new(scalar::hypot(m[0][0], m[0][1]), scalar::hypot(m[1][0], m[1][1]))
    }

    /// Rotation angle in `(-π, π]`.
    ///
    /// Shear is not detected: the angle is read from the first basis row
    /// only.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroScale`] if the first basis row is null.
    pub fn rotation(&self) -> Result<Angle> {
        let m = &self.matrix.ij;
        let sx = scalar::hypot(m[0][0], m[0][1]);
        if scalar::is_zero(sx) {
            tracing::debug!(transformation = %self, "cannot read a rotation from a zero scale");
            return Err(MatrixError::ZeroScale.into());
        }
        let angle = scalar::clamp(m[0][0] / sx, -1.0, 1.0).acos();
        let angle = if m[0][1] < 0.0 { -angle } else { angle };
        Ok(Angle::from_radians(scalar::ensure_finite(angle)?))
    }

    /// Splits the transformation into translation, rotation and scale.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroScale`] if a basis row is null, or
    /// [`ScalarError::NotFinite`](crate::error::ScalarError::NotFinite) if the
    /// matrix holds NaN or infinities.
    pub fn decompose(&self) -> Result<(Vector2, Angle, Vector2)> {
        let scale = self.scale();
        if scalar::is_zero(scale.y) {
            tracing::debug!(transformation = %self, "cannot decompose a zero scale");
            return Err(MatrixError::ZeroScale.into());
        }
        let rotation = self.rotation()?;
        let translation = self.translation();
        for value in [translation.x, translation.y, scale.x, scale.y] {
            scalar::ensure_finite(value)?;
        }
        Ok((translation, rotation, scale))
    }

    /// Converts between left- and right-handed conventions by negating the
    /// off-diagonal terms of the 2x2 block.
    #[must_use]
    pub fn switch_hand_convention(&self) -> Self {
        let mut matrix = self.matrix;
        matrix.ij[0][1] = -matrix.ij[0][1];
        matrix.ij[1][0] = -matrix.ij[1][0];
        Self { matrix }
    }

    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the 2x2 block is not invertible.
    pub fn inverse(&self) -> Result<Self> {
        Ok(Self::from_matrix(self.matrix.inverse()?))
    }
}

impl Default for TransformationMatrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Composition: `a * b` applies `a` first, then `b`.
impl Mul for TransformationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_matrix(self.matrix * rhs.matrix)
    }
}

impl From<TransformationMatrix3> for Matrix3 {
    fn from(t: TransformationMatrix3) -> Self {
        t.matrix
    }
}

impl fmt::Display for TransformationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.matrix)
    }
}

impl AbsDiffEq for TransformationMatrix3 {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.matrix.abs_diff_eq(&other.matrix, epsilon)
    }
}

impl RelativeEq for TransformationMatrix3 {
    fn default_max_relative() -> Real {
        EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.matrix.relative_eq(&other.matrix, epsilon, max_relative)
    }
}
