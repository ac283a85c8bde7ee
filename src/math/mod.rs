pub mod angle;
mod matrix;
pub mod matrix2;
pub mod matrix3;
pub mod matrix4;
pub mod scalar;
pub mod transformation;
pub mod vector;
pub mod vector2;
pub mod vector3;
pub mod vector4;

pub use angle::{Angle, AngleNotation};
pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;
pub use transformation::TransformationMatrix3;
pub use vector::Vector;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Floating-point type used by every primitive.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Floating-point type used by every primitive.
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// Global tolerance for floating-point comparisons.
#[cfg(not(feature = "single-precision"))]
pub const EPSILON: Real = 1e-12;

/// Global tolerance for floating-point comparisons.
#[cfg(feature = "single-precision")]
pub const EPSILON: Real = 1e-6;
