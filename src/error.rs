use thiserror::Error;

use crate::math::Real;

/// Top-level error type for the Quimera math library.
#[derive(Debug, Error)]
pub enum MathError {
    #[error(transparent)]
    Scalar(#[from] ScalarError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Errors raised by scalar arithmetic.
#[derive(Debug, Error)]
pub enum ScalarError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("value {value} is not finite")]
    NotFinite { value: Real },
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("direction must be unit length, got length {length}")]
    NotNormalized { length: Real },

    #[error("radius {radius} must not be negative")]
    NegativeRadius { radius: Real },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to matrix algebra.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("matrix is singular (determinant {determinant})")]
    Singular { determinant: Real },

    #[error("transformation has a zero scale component")]
    ZeroScale,
}

/// Convenience type alias for results using [`MathError`].
pub type Result<T> = std::result::Result<T, MathError>;
