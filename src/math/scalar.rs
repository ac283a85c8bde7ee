//! Tolerance-aware scalar helpers.
//!
//! Every comparison in the library goes through these functions so that a
//! single [`EPSILON`] governs what "equal" means.

use crate::error::{Result, ScalarError};

use super::{Real, EPSILON};

#[cfg(not(feature = "single-precision"))]
mod consts {
    pub use std::f64::consts::{FRAC_PI_2, PI, TAU};
}

#[cfg(feature = "single-precision")]
mod consts {
    pub use std::f32::consts::{FRAC_PI_2, PI, TAU};
}

/// π.
pub const PI: Real = consts::PI;

/// 2π.
pub const TWO_PI: Real = consts::TAU;

/// π/2.
pub const HALF_PI: Real = consts::FRAC_PI_2;

/// π/180, multiplier from degrees to radians.
pub const RADIANS_PER_DEGREE: Real = consts::PI / 180.0;

/// 180/π, multiplier from radians to degrees.
pub const DEGREES_PER_RADIAN: Real = 180.0 / consts::PI;

/// Returns `true` if `|a - b| <= EPSILON`.
#[must_use]
pub fn are_equal(a: Real, b: Real) -> bool {
    are_equal_with_tolerance(a, b, EPSILON)
}

/// Returns `true` if `|a - b| <= tolerance`.
#[must_use]
pub fn are_equal_with_tolerance(a: Real, b: Real, tolerance: Real) -> bool {
    (a - b).abs() <= tolerance
}

#[must_use]
pub fn are_not_equal(a: Real, b: Real) -> bool {
    !are_equal(a, b)
}

#[must_use]
pub fn is_zero(x: Real) -> bool {
    are_equal(x, 0.0)
}

#[must_use]
pub fn is_not_zero(x: Real) -> bool {
    !is_zero(x)
}

/// Strictly below zero, beyond the tolerance.
#[must_use]
pub fn is_negative(x: Real) -> bool {
    x < -EPSILON
}

/// Strictly above zero, beyond the tolerance.
#[must_use]
pub fn is_positive(x: Real) -> bool {
    x > EPSILON
}

#[must_use]
pub fn is_greater_than(a: Real, b: Real) -> bool {
    a - b > EPSILON
}

#[must_use]
pub fn is_less_than(a: Real, b: Real) -> bool {
    a - b < -EPSILON
}

#[must_use]
pub fn is_greater_or_equal(a: Real, b: Real) -> bool {
    a - b >= -EPSILON
}

#[must_use]
pub fn is_less_or_equal(a: Real, b: Real) -> bool {
    a - b <= EPSILON
}

/// NaN is the only value that is not equal to itself.
#[must_use]
#[allow(clippy::eq_op)]
pub fn is_nan(x: Real) -> bool {
    x != x
}

#[must_use]
pub fn is_infinite(x: Real) -> bool {
    x.is_infinite()
}

/// Neither NaN nor infinite.
#[must_use]
pub fn is_finite(x: Real) -> bool {
    !is_nan(x) && !is_infinite(x)
}

#[must_use]
pub fn clamp(x: Real, min: Real, max: Real) -> Real {
    x.clamp(min, max)
}

#[must_use]
pub fn degrees_to_radians(degrees: Real) -> Real {
    degrees * RADIANS_PER_DEGREE
}

#[must_use]
pub fn radians_to_degrees(radians: Real) -> Real {
    radians * DEGREES_PER_RADIAN
}

/// `sqrt(a² + b²)` without intermediate overflow.
#[must_use]
pub fn hypot(a: Real, b: Real) -> Real {
    a.hypot(b)
}

/// Returns `1 / x`.
///
/// # Errors
///
/// Returns [`ScalarError::DivisionByZero`] if `x` is zero within tolerance.
pub fn checked_reciprocal(x: Real) -> Result<Real> {
    if is_zero(x) {
        return Err(ScalarError::DivisionByZero.into());
    }
    Ok(1.0 / x)
}

/// Passes `x` through if it is finite.
///
/// # Errors
///
/// Returns [`ScalarError::NotFinite`] for NaN and infinities.
pub fn ensure_finite(x: Real) -> Result<Real> {
    if is_finite(x) {
        Ok(x)
    } else {
        Err(ScalarError::NotFinite { value: x }.into())
    }
}
