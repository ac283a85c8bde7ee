use crate::error::{MatrixError, Result};

use super::matrix::impl_matrix_common;
use super::scalar;
use super::{Angle, Real, Vector3};

/// A 4x4 matrix, row-vector convention: translations live in the last row.
#[derive(Debug, Clone, Copy)]
pub struct Matrix4 {
    pub ij: [[Real; 4]; 4],
}

/// The twelve 2x2 minors a 4x4 determinant and adjugate are built from.
///
/// `upper[k]` are taken from rows 0 and 1, `lower[k]` from rows 2 and 3, for
/// the column pairs (0,1) (0,2) (0,3) (1,2) (1,3) (2,3).
struct Minors {
    upper: [Real; 6],
    lower: [Real; 6],
}

impl Minors {
    fn of(m: &[[Real; 4]; 4]) -> Self {
        const PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        let minor = |r0: usize, r1: usize, (c0, c1): (usize, usize)| {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };
        Self {
            upper: PAIRS.map(|pair| minor(0, 1, pair)),
            lower: PAIRS.map(|pair| minor(2, 3, pair)),
        }
    }

    /// Laplace expansion along the row pairs (0,1) / (2,3).
    fn determinant(&self) -> Real {
        let [s01, s02, s03, s12, s13, s23] = self.upper;
        let [c01, c02, c03, c12, c13, c23] = self.lower;
        s01 * c23 - s02 * c13 + s03 * c12 + s12 * c03 - s13 * c02 + s23 * c01
    }
}

impl Matrix4 {
    #[must_use]
    pub fn from_translation(t: Vector3) -> Self {
        let mut m = Self::IDENTITY;
        m.ij[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    #[must_use]
    pub fn from_scale(s: Vector3) -> Self {
        Self::from_rows([
            [s.x, 0.0, 0.0, 0.0],
            [0.0, s.y, 0.0, 0.0],
            [0.0, 0.0, s.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation from Euler angles about the X, Y and Z axes.
    #[must_use]
    pub fn from_rotation_euler(x: Angle, y: Angle, z: Angle) -> Self {
        let (sx, cx) = x.radians().sin_cos();
        let (sy, cy) = y.radians().sin_cos();
        let (sz, cz) = z.radians().sin_cos();
        Self::from_rows([
            [cz * cy - sz * sx * sy, -cx * sz, cz * sy + sz * sx * cy, 0.0],
            [sz * cy + cz * sx * sy, cx * cz, sz * sy - cz * sx * cy, 0.0],
            [-cx * sy, sx, cx * cy, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// `Scale * Rotation * Translation`: scale first, then rotate, then
    /// translate a row vector.
    #[must_use]
    pub fn from_transformation(
        translation: Vector3,
        rotation: (Angle, Angle, Angle),
        scale: Vector3,
    ) -> Self {
        let (x, y, z) = rotation;
        Self::from_scale(scale)
            * Self::from_rotation_euler(x, y, z)
            * Self::from_translation(translation)
    }

    #[must_use]
    pub fn translation(&self) -> Vector3 {
        let [x, y, z, _] = self.ij[3];
        Vector3::new(x, y, z)
    }

    #[must_use]
    pub fn determinant(&self) -> Real {
        Minors::of(&self.ij).determinant()
    }

    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_identity() {
            return Ok(*self);
        }
        let minors = Minors::of(&self.ij);
        let det = minors.determinant();
        if scalar::is_zero(det) {
            tracing::debug!(matrix = %self, "refusing to invert a singular matrix");
            return Err(MatrixError::Singular { determinant: det }.into());
        }

        let m = &self.ij;
        let [s01, s02, s03, s12, s13, s23] = minors.upper;
        let [c01, c02, c03, c12, c13, c23] = minors.lower;
        let adjugate = [
            [
                m[1][1] * c23 - m[1][2] * c13 + m[1][3] * c12,
                -m[0][1] * c23 + m[0][2] * c13 - m[0][3] * c12,
                m[3][1] * s23 - m[3][2] * s13 + m[3][3] * s12,
                -m[2][1] * s23 + m[2][2] * s13 - m[2][3] * s12,
            ],
            [
                -m[1][0] * c23 + m[1][2] * c03 - m[1][3] * c02,
                m[0][0] * c23 - m[0][2] * c03 + m[0][3] * c02,
                -m[3][0] * s23 + m[3][2] * s03 - m[3][3] * s02,
                m[2][0] * s23 - m[2][2] * s03 + m[2][3] * s02,
            ],
            [
                m[1][0] * c13 - m[1][1] * c03 + m[1][3] * c01,
                -m[0][0] * c13 + m[0][1] * c03 - m[0][3] * c01,
                m[3][0] * s13 - m[3][1] * s03 + m[3][3] * s01,
                -m[2][0] * s13 + m[2][1] * s03 - m[2][3] * s01,
            ],
            [
                -m[1][0] * c12 + m[1][1] * c02 - m[1][2] * c01,
                m[0][0] * c12 - m[0][1] * c02 + m[0][2] * c01,
                -m[3][0] * s12 + m[3][1] * s02 - m[3][2] * s01,
                m[2][0] * s12 - m[2][1] * s02 + m[2][2] * s01,
            ],
        ];
        Ok(Self::from_rows(adjugate) / det)
    }
}

impl_matrix_common!(Matrix4, 4, "M4x4");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Matrix4 {
        Matrix4::from_rows([
            [2.0, 0.5, -1.0, 3.0],
            [1.0, 4.0, 0.0, -2.0],
            [0.0, -3.0, 5.0, 1.0],
            [1.5, 2.0, 1.0, 6.0],
        ])
    }

    fn to_nalgebra(m: &Matrix4) -> nalgebra::Matrix4<Real> {
        nalgebra::Matrix4::from_fn(|r, c| m.ij[r][c])
    }

    #[test]
    fn determinant_matches_nalgebra() {
        let m = sample();
        assert_relative_eq!(m.determinant(), to_nalgebra(&m).determinant(), epsilon = 1e-9);
        assert_relative_eq!(Matrix4::IDENTITY.determinant(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn inverse_matches_nalgebra() {
        let m = sample();
        let expected = to_nalgebra(&m).try_inverse().unwrap();
        let inv = m.inverse().unwrap();
        for r in 0..4 {
            for c in 0..4 {
                assert_relative_eq!(inv[(r, c)], expected[(r, c)], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn inverse_round_trips() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert_relative_eq!(m * inv, Matrix4::IDENTITY, epsilon = 1e-9);
        assert_relative_eq!(inv * m, Matrix4::IDENTITY, epsilon = 1e-9);
        assert_relative_eq!(inv.inverse().unwrap(), m, epsilon = 1e-9);
    }

    #[test]
    fn identity_inverse_is_identity() {
        assert_eq!(Matrix4::IDENTITY.inverse().unwrap(), Matrix4::IDENTITY);
    }

    #[test]
    fn singular_matrix_is_left_unchanged() {
        let mut m = Matrix4::from_scale(Vector3::new(1.0, 0.0, 1.0));
        let before = m;
        assert!(m.invert_in_place().is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn translation_lives_in_last_row() {
        let t = Vector3::new(1.0, -2.0, 3.0);
        let m = Matrix4::from_translation(t);
        assert_eq!(m.translation(), t);
        assert_eq!(m.inverse().unwrap().translation(), -t);
    }

    #[test]
    fn euler_rotation_is_orthonormal() {
        let r = Matrix4::from_rotation_euler(
            Angle::from_degrees(10.0),
            Angle::from_degrees(-35.0),
            Angle::from_degrees(80.0),
        );
        assert_relative_eq!(r * r.transpose(), Matrix4::IDENTITY, epsilon = 1e-9);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn rotation_about_z_only() {
        let r = Matrix4::from_rotation_euler(Angle::ZERO, Angle::ZERO, Angle::QUARTER_TURN);
        let expected = Matrix4::from_rows([
            [0.0, -1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_relative_eq!(r, expected, epsilon = 1e-9);
    }

    #[test]
    fn transformation_scales_rotates_then_translates() {
        let m = Matrix4::from_transformation(
            Vector3::new(10.0, 0.0, 0.0),
            (Angle::ZERO, Angle::ZERO, Angle::ZERO),
            Vector3::new(2.0, 2.0, 2.0),
        );
        let p = Vector3::new(1.0, 1.0, 1.0).transform_point(&m);
        assert_relative_eq!(p, Vector3::new(12.0, 2.0, 2.0), epsilon = 1e-9);
        assert_eq!(m.translation(), Vector3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn display_prefix() {
        assert!(Matrix4::IDENTITY.to_string().starts_with("M4x4(1, 0, 0, 0)"));
    }
}
