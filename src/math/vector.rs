use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{GeometryError, Result, ScalarError};

use super::scalar;
use super::{Angle, Real};

/// Operations shared by every vector arity.
///
/// The geometric primitives are generic over this trait, so a line segment
/// or a ray is written once and used in 2D, 3D and homogeneous 4D.
pub trait Vector:
    Copy
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Real, Output = Self>
    + Div<Real, Output = Self>
{
    /// The null vector.
    const ZERO: Self;

    /// Unit vector along the first axis.
    const UNIT_X: Self;

    fn dot(&self, other: &Self) -> Real;

    /// Whether every component is zero within tolerance.
    fn is_zero(&self) -> bool;

    fn squared_length(&self) -> Real {
        self.dot(self)
    }

    fn length(&self) -> Real {
        self.squared_length().sqrt()
    }

    fn distance(&self, other: &Self) -> Real {
        (*other - *self).length()
    }

    /// Returns the unit vector with the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for the null vector.
    fn normalize(&self) -> Result<Self> {
        let length = self.length();
        if scalar::is_zero(length) {
            tracing::debug!(vector = %self, "refusing to normalize a null vector");
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(*self / length)
    }

    /// Angle between both vectors, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding cannot produce NaN.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if either vector is null.
    fn angle_between(&self, other: &Self) -> Result<Angle> {
        let lengths = self.length() * other.length();
        if scalar::is_zero(lengths) {
            return Err(GeometryError::ZeroVector.into());
        }
        let cos = scalar::clamp(self.dot(other) / lengths, -1.0, 1.0);
        Ok(Angle::from_radians(cos.acos()))
    }

    /// `(1 - t) * self + t * other`. `t` outside `[0, 1]` extrapolates.
    fn lerp(&self, t: Real, other: &Self) -> Self {
        *self * (1.0 - t) + *other * t
    }

    /// Divides by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ScalarError::DivisionByZero`] if `divisor` is zero.
    fn checked_div(&self, divisor: Real) -> Result<Self> {
        if scalar::is_zero(divisor) {
            return Err(ScalarError::DivisionByZero.into());
        }
        Ok(*self / divisor)
    }
}

/// Implements the component-wise operators, tolerance equality, `approx`
/// traits and array conversions for a vector struct.
macro_rules! impl_vector_ops {
    ($V:ident { $($field:ident),+ }, $n:expr) => {
        impl std::ops::Add for $V {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $V {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Neg for $V {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl std::ops::Mul<$crate::math::Real> for $V {
            type Output = Self;

            fn mul(self, rhs: $crate::math::Real) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$V> for $crate::math::Real {
            type Output = $V;

            fn mul(self, rhs: $V) -> $V {
                rhs * self
            }
        }

        impl std::ops::Div<$crate::math::Real> for $V {
            type Output = Self;

            fn div(self, rhs: $crate::math::Real) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        /// Component-wise product.
        impl std::ops::Mul for $V {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self { $($field: self.$field * rhs.$field),+ }
            }
        }

        /// Component-wise quotient.
        impl std::ops::Div for $V {
            type Output = Self;

            fn div(self, rhs: Self) -> Self {
                Self { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl std::ops::AddAssign for $V {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $V {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<$crate::math::Real> for $V {
            fn mul_assign(&mut self, rhs: $crate::math::Real) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<$crate::math::Real> for $V {
            fn div_assign(&mut self, rhs: $crate::math::Real) {
                *self = *self / rhs;
            }
        }

        /// Component-wise tolerance equality.
        impl PartialEq for $V {
            fn eq(&self, other: &Self) -> bool {
                true $(&& $crate::math::scalar::are_equal(self.$field, other.$field))+
            }
        }

        impl approx::AbsDiffEq for $V {
            type Epsilon = $crate::math::Real;

            fn default_epsilon() -> $crate::math::Real {
                $crate::math::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: $crate::math::Real) -> bool {
                true $(&& approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }

        impl approx::RelativeEq for $V {
            fn default_max_relative() -> $crate::math::Real {
                $crate::math::EPSILON
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: $crate::math::Real,
                max_relative: $crate::math::Real,
            ) -> bool {
                true $(&& approx::RelativeEq::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))+
            }
        }

        impl From<[$crate::math::Real; $n]> for $V {
            fn from(v: [$crate::math::Real; $n]) -> Self {
                let [$($field),+] = v;
                Self { $($field),+ }
            }
        }

        impl From<$V> for [$crate::math::Real; $n] {
            fn from(v: $V) -> Self {
                [$(v.$field),+]
            }
        }

        impl std::ops::Index<usize> for $V {
            type Output = $crate::math::Real;

            fn index(&self, index: usize) -> &$crate::math::Real {
                let fields = [$(&self.$field),+];
                fields[index]
            }
        }
    };
}

pub(crate) use impl_vector_ops;
