//! Prints a handful of geometric queries, with library tracing enabled.
//!
//! ```text
//! cargo run --example geometry_report
//! RUST_LOG=quimera_math=trace cargo run --example geometry_report
//! ```

use quimera_math::geometry::{Circle, LineSegment, Plane, Quadrilateral, Ray, Triangle};
use quimera_math::math::{Angle, Matrix4, TransformationMatrix3, Vector, Vector2, Vector3};

fn main() -> quimera_math::Result<()> {
    // Default: WARN for everything, DEBUG for the library.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("quimera_math=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let a = LineSegment::new(Vector2::new(-1.0, -1.0), Vector2::new(1.0, 1.0));
    let b = LineSegment::new(Vector2::new(-1.0, 1.0), Vector2::new(1.0, -1.0));
    tracing::info!(%a, %b, result = ?a.intersection_with_segment(&b), "segment crossing");

    let ray = Ray::with_normalized_direction(Vector2::new(-3.0, 0.2), Vector2::UNIT_X)?;
    let circle = Circle::new(Vector2::ZERO, 1.0)?;
    tracing::info!(%ray, %circle, result = ?ray.intersection_with_orb(&circle)?, "ray against circle");

    let square = Quadrilateral::unit_square();
    tracing::info!(%ray, %square, result = ?ray.intersection_with_quadrilateral(&square), "ray against square");

    let triangle = Triangle::new(Vector2::ZERO, Vector2::new(4.0, 0.0), Vector2::new(0.0, 3.0));
    tracing::info!(
        %triangle,
        area = triangle.area(),
        circumcenter = %triangle.circumcenter()?,
        incenter = %triangle.incenter()?,
        "triangle centers"
    );

    let transformation = TransformationMatrix3::new(Vector2::new(2.0, 1.0), Angle::from_degrees(30.0), Vector2::new(2.0, 2.0));
    let (translation, rotation, scale) = transformation.decompose()?;
    tracing::info!(%transformation, %translation, %rotation, %scale, "decomposed 2D transformation");

    let matrix = Matrix4::from_transformation(
        Vector3::new(1.0, 2.0, 3.0),
        (Angle::from_degrees(15.0), Angle::ZERO, Angle::from_degrees(45.0)),
        Vector3::ONE,
    );
    let round_trip = matrix * matrix.inverse()?;
    tracing::info!(identity = round_trip.is_identity(), "4x4 inverse round trip");

    let facet = Triangle::new(Vector3::ZERO, Vector3::new(4.0, 0.0, 0.0), Vector3::new(0.0, 4.0, 1.0));
    let plane = facet.plane()?;
    let drop = Ray::new(Vector3::new(1.0, 1.0, 5.0), Vector3::NEG_UNIT_Z);
    tracing::info!(%facet, %plane, result = ?drop.intersection_with_triangle(&facet), "ray against 3D triangle");
    tracing::info!(moved = %plane.transform(&matrix)?, "plane through the 4x4 transformation");
    tracing::info!(corner = ?Plane::XY.intersection_with_planes(&Plane::YZ, &Plane::ZX), "three coordinate planes");

    let direction = Vector3::new(1.0, 2.0, 2.0).normalize()?;
    tracing::info!(%direction, length = direction.length(), "normalized direction");

    // Singular inversion is reported, not panicked on.
    if let Err(err) = Matrix4::ZERO.inverse() {
        tracing::warn!(%err, "expected failure");
    }
    Ok(())
}
