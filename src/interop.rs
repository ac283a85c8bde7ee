//! Conversions to and from [`nalgebra`] types.
//!
//! Matrix element `ij[r][c]` maps to `m[(r, c)]`, so a row-vector product
//! `v * M` here equals `v.transpose() * m` in nalgebra.

use crate::math::{Matrix2, Matrix3, Matrix4, Real, Vector2, Vector3, Vector4};

impl From<Vector2> for nalgebra::Vector2<Real> {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<Real>> for Vector2 {
    fn from(v: nalgebra::Vector2<Real>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector3> for nalgebra::Vector3<Real> {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<Real>> for Vector3 {
    fn from(v: nalgebra::Vector3<Real>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector4> for nalgebra::Vector4<Real> {
    fn from(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<nalgebra::Vector4<Real>> for Vector4 {
    fn from(v: nalgebra::Vector4<Real>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

macro_rules! impl_matrix_conversions {
    ($M:ident, $N:ident) => {
        impl From<$M> for nalgebra::$N<Real> {
            fn from(m: $M) -> Self {
                Self::from_fn(|r, c| m.ij[r][c])
            }
        }

        impl From<nalgebra::$N<Real>> for $M {
            fn from(m: nalgebra::$N<Real>) -> Self {
                Self::from_rows(std::array::from_fn(|r| std::array::from_fn(|c| m[(r, c)])))
            }
        }
    };
}

impl_matrix_conversions!(Matrix2, Matrix2);
impl_matrix_conversions!(Matrix3, Matrix3);
impl_matrix_conversions!(Matrix4, Matrix4);
