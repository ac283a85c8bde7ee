//! Code shared by the square matrix types.

/// Implements constants, element-wise arithmetic, the matrix product,
/// transposition, tolerance equality, `approx` traits, indexing and
/// `Display` for an `N x N` matrix struct with a `pub ij: [[Real; N]; N]`
/// field.
///
/// The struct must provide an inherent `inverse(&self) -> Result<Self>`,
/// which `invert_in_place` is built on.
macro_rules! impl_matrix_common {
    ($M:ident, $n:expr, $tag:literal) => {
        impl $M {
            pub const ZERO: Self = Self { ij: [[0.0; $n]; $n] };

            pub const IDENTITY: Self = {
                let mut ij = [[0.0; $n]; $n];
                let mut i = 0;
                while i < $n {
                    ij[i][i] = 1.0;
                    i += 1;
                }
                Self { ij }
            };

            /// Builds a matrix from its rows.
            #[must_use]
            pub const fn from_rows(ij: [[$crate::math::Real; $n]; $n]) -> Self {
                Self { ij }
            }

            #[must_use]
            pub fn transpose(&self) -> Self {
                let mut ij = [[0.0; $n]; $n];
                for (r, row) in self.ij.iter().enumerate() {
                    for (c, value) in row.iter().enumerate() {
                        ij[c][r] = *value;
                    }
                }
                Self { ij }
            }

            pub fn transpose_in_place(&mut self) {
                *self = self.transpose();
            }

            #[must_use]
            pub fn is_identity(&self) -> bool {
                *self == Self::IDENTITY
            }

            #[must_use]
            pub fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }

            /// Divides every element by `divisor`.
            ///
            /// # Errors
            ///
            /// Returns [`ScalarError::DivisionByZero`](crate::error::ScalarError::DivisionByZero)
            /// if `divisor` is zero.
            pub fn checked_div(&self, divisor: $crate::math::Real) -> $crate::error::Result<Self> {
                if $crate::math::scalar::is_zero(divisor) {
                    return Err($crate::error::ScalarError::DivisionByZero.into());
                }
                Ok(*self / divisor)
            }

            /// Replaces `self` with its inverse.
            ///
            /// # Errors
            ///
            /// Returns [`MatrixError::Singular`](crate::error::MatrixError::Singular)
            /// if the determinant is zero. `self` is left unchanged.
            pub fn invert_in_place(&mut self) -> $crate::error::Result<()> {
                *self = self.inverse()?;
                Ok(())
            }

            fn map(&self, f: impl Fn($crate::math::Real) -> $crate::math::Real) -> Self {
                let mut ij = self.ij;
                ij.iter_mut().flatten().for_each(|value| *value = f(*value));
                Self { ij }
            }

            fn zip_map(
                &self,
                other: &Self,
                f: impl Fn($crate::math::Real, $crate::math::Real) -> $crate::math::Real,
            ) -> Self {
                let mut ij = self.ij;
                ij.iter_mut()
                    .flatten()
                    .zip(other.ij.iter().flatten())
                    .for_each(|(value, rhs)| *value = f(*value, *rhs));
                Self { ij }
            }
        }

        impl Default for $M {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl std::ops::Add for $M {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.zip_map(&rhs, |a, b| a + b)
            }
        }

        impl std::ops::Sub for $M {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.zip_map(&rhs, |a, b| a - b)
            }
        }

        impl std::ops::Mul<$crate::math::Real> for $M {
            type Output = Self;

            fn mul(self, rhs: $crate::math::Real) -> Self {
                self.map(|a| a * rhs)
            }
        }

        impl std::ops::Mul<$M> for $crate::math::Real {
            type Output = $M;

            fn mul(self, rhs: $M) -> $M {
                rhs * self
            }
        }

        impl std::ops::Div<$crate::math::Real> for $M {
            type Output = Self;

            fn div(self, rhs: $crate::math::Real) -> Self {
                self.map(|a| a / rhs)
            }
        }

        /// Matrix product.
        impl std::ops::Mul for $M {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                let mut ij = [[0.0; $n]; $n];
                for (r, row) in ij.iter_mut().enumerate() {
                    for (c, value) in row.iter_mut().enumerate() {
                        *value = (0..$n).map(|k| self.ij[r][k] * rhs.ij[k][c]).sum();
                    }
                }
                Self { ij }
            }
        }

        impl std::ops::AddAssign for $M {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $M {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign for $M {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl std::ops::MulAssign<$crate::math::Real> for $M {
            fn mul_assign(&mut self, rhs: $crate::math::Real) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<$crate::math::Real> for $M {
            fn div_assign(&mut self, rhs: $crate::math::Real) {
                *self = *self / rhs;
            }
        }

        /// Element-wise tolerance equality.
        impl PartialEq for $M {
            fn eq(&self, other: &Self) -> bool {
                self.ij
                    .iter()
                    .flatten()
                    .zip(other.ij.iter().flatten())
                    .all(|(a, b)| $crate::math::scalar::are_equal(*a, *b))
            }
        }

        impl approx::AbsDiffEq for $M {
            type Epsilon = $crate::math::Real;

            fn default_epsilon() -> $crate::math::Real {
                $crate::math::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: $crate::math::Real) -> bool {
                self.ij
                    .iter()
                    .flatten()
                    .zip(other.ij.iter().flatten())
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl approx::RelativeEq for $M {
            fn default_max_relative() -> $crate::math::Real {
                $crate::math::EPSILON
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: $crate::math::Real,
                max_relative: $crate::math::Real,
            ) -> bool {
                self.ij
                    .iter()
                    .flatten()
                    .zip(other.ij.iter().flatten())
                    .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }

        impl std::ops::Index<(usize, usize)> for $M {
            type Output = $crate::math::Real;

            fn index(&self, (r, c): (usize, usize)) -> &$crate::math::Real {
                &self.ij[r][c]
            }
        }

        impl std::ops::IndexMut<(usize, usize)> for $M {
            fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut $crate::math::Real {
                &mut self.ij[r][c]
            }
        }

        impl std::fmt::Display for $M {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($tag)?;
                for row in &self.ij {
                    f.write_str("(")?;
                    for (c, value) in row.iter().enumerate() {
                        if c > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{value}")?;
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    };
}

pub(crate) use impl_matrix_common;
