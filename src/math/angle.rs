use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use super::scalar::{self, PI, TWO_PI};
use super::{Real, EPSILON};

/// Unit a raw scalar angle is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleNotation {
    Radians,
    Degrees,
}

/// A plane angle.
///
/// Stored in radians. Raw scalars only enter or leave through a named unit
/// (`from_degrees`, `value_in`, ...), so degrees and radians never mix.
#[derive(Debug, Clone, Copy, Default)]
pub struct Angle {
    radians: Real,
}

impl Angle {
    pub const ZERO: Self = Self { radians: 0.0 };
    pub const QUARTER_TURN: Self = Self {
        radians: scalar::HALF_PI,
    };
    pub const HALF_TURN: Self = Self { radians: PI };
    pub const FULL_TURN: Self = Self { radians: TWO_PI };

    #[must_use]
    pub const fn from_radians(radians: Real) -> Self {
        Self { radians }
    }

    #[must_use]
    pub fn from_degrees(degrees: Real) -> Self {
        Self::from_radians(scalar::degrees_to_radians(degrees))
    }

    /// Interprets `value` in the given notation.
    #[must_use]
    pub fn from_value(value: Real, notation: AngleNotation) -> Self {
        match notation {
            AngleNotation::Radians => Self::from_radians(value),
            AngleNotation::Degrees => Self::from_degrees(value),
        }
    }

    #[must_use]
    pub fn radians(self) -> Real {
        self.radians
    }

    #[must_use]
    pub fn degrees(self) -> Real {
        scalar::radians_to_degrees(self.radians)
    }

    /// Expresses the angle in the given notation.
    #[must_use]
    pub fn value_in(self, notation: AngleNotation) -> Real {
        match notation {
            AngleNotation::Radians => self.radians(),
            AngleNotation::Degrees => self.degrees(),
        }
    }

    #[must_use]
    pub fn sin(self) -> Real {
        self.radians.sin()
    }

    #[must_use]
    pub fn cos(self) -> Real {
        self.radians.cos()
    }

    #[must_use]
    pub fn tan(self) -> Real {
        self.radians.tan()
    }

    /// Wraps the angle into `[0, 2π)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let wrapped = self.radians.rem_euclid(TWO_PI);
        // rem_euclid may round up to exactly 2π for tiny negative inputs.
        if wrapped >= TWO_PI {
            Self::ZERO
        } else {
            Self::from_radians(wrapped)
        }
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        scalar::are_equal(self.radians, other.radians)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Mul<Real> for Angle {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl Div<Real> for Angle {
    type Output = Self;

    fn div(self, rhs: Real) -> Self {
        Self::from_radians(self.radians / rhs)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.radians)
    }
}

impl AbsDiffEq for Angle {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.radians.abs_diff_eq(&other.radians, epsilon)
    }
}

impl RelativeEq for Angle {
    fn default_max_relative() -> Real {
        EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.radians
            .relative_eq(&other.radians, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degrees_round_trip() {
        let a = Angle::from_degrees(90.0);
        assert_relative_eq!(a.radians(), scalar::HALF_PI, epsilon = 1e-9);
        assert_relative_eq!(a.degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn notation_is_an_explicit_value() {
        let a = Angle::from_value(180.0, AngleNotation::Degrees);
        let b = Angle::from_value(PI, AngleNotation::Radians);
        assert_eq!(a, b);
        assert_relative_eq!(a.value_in(AngleNotation::Degrees), 180.0, epsilon = 1e-9);
        assert_relative_eq!(a.value_in(AngleNotation::Radians), PI, epsilon = 1e-9);
    }

    #[test]
    fn normalized_wraps_into_one_turn() {
        assert_relative_eq!(Angle::from_degrees(-90.0).normalized().degrees(), 270.0, epsilon = 1e-9);
        assert_relative_eq!(Angle::from_degrees(450.0).normalized().degrees(), 90.0, epsilon = 1e-9);
        assert_eq!(Angle::FULL_TURN.normalized(), Angle::ZERO);
    }

    #[test]
    fn arithmetic() {
        let a = Angle::from_degrees(30.0) + Angle::from_degrees(60.0);
        assert_eq!(a, Angle::QUARTER_TURN);
        assert_eq!(-(a * 2.0), -Angle::HALF_TURN);
        assert_eq!(Angle::HALF_TURN / 2.0, Angle::QUARTER_TURN);
        assert_eq!(Angle::HALF_TURN - Angle::QUARTER_TURN, Angle::QUARTER_TURN);
    }

    #[test]
    fn trigonometry_uses_radians() {
        let a = Angle::from_degrees(30.0);
        assert_relative_eq!(a.sin(), 0.5, epsilon = 1e-6);
        assert_relative_eq!(Angle::ZERO.cos(), 1.0, epsilon = 1e-9);
    }
}
