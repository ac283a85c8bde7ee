//! Geometric primitives built on the algebra of [`crate::math`].

mod intersection;
mod line_segment;
mod orb;
mod plane;
mod quadrilateral;
mod ray;
pub mod side;
mod triangle;

pub use intersection::{Intersection, IntersectionCount};
pub use line_segment::LineSegment;
pub use orb::{Circle, Orb, Sphere};
pub use plane::{Plane, PlaneSide};
pub use quadrilateral::Quadrilateral;
pub use ray::Ray;
pub use triangle::Triangle;
