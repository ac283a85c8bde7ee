use crate::error::{MatrixError, Result};

use super::matrix::impl_matrix_common;
use super::scalar;
use super::Real;

/// A 2x2 matrix.
#[derive(Debug, Clone, Copy)]
pub struct Matrix2 {
    pub ij: [[Real; 2]; 2],
}

impl Matrix2 {
    #[must_use]
    pub fn determinant(&self) -> Real {
        let m = &self.ij;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if scalar::is_zero(det) {
            tracing::debug!(matrix = %self, "refusing to invert a singular matrix");
            return Err(MatrixError::Singular { determinant: det }.into());
        }
        let m = &self.ij;
        Ok(Self::from_rows([[m[1][1], -m[0][1]], [-m[1][0], m[0][0]]]) / det)
    }
}

impl_matrix_common!(Matrix2, 2, "M2x2");
