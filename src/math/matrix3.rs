use crate::error::{MatrixError, Result};

use super::matrix::impl_matrix_common;
use super::scalar;
use super::Real;

/// A 3x3 matrix, row-vector convention.
#[derive(Debug, Clone, Copy)]
pub struct Matrix3 {
    pub ij: [[Real; 3]; 3],
}

impl Matrix3 {
    /// Cofactor expansion along the first row.
    #[must_use]
    pub fn determinant(&self) -> Real {
        let m = &self.ij;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_identity() {
            return Ok(*self);
        }
        let det = self.determinant();
        if scalar::is_zero(det) {
            tracing::debug!(matrix = %self, "refusing to invert a singular matrix");
            return Err(MatrixError::Singular { determinant: det }.into());
        }
        let m = &self.ij;
        let adjugate = [
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                m[0][1] * m[2][0] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ];
        Ok(Self::from_rows(adjugate) / det)
    }
}

impl_matrix_common!(Matrix3, 3, "M3x3");
