#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use quimera_math::geometry::{Circle, Intersection, IntersectionCount, LineSegment, Quadrilateral, Ray, Triangle};
use quimera_math::math::{Angle, AngleNotation, Real, TransformationMatrix3, Vector2};

fn v(x: Real, y: Real) -> Vector2 {
    Vector2::new(x, y)
}

#[test]
fn ray_ray_counts() {
    let r = Ray::new(Vector2::ZERO, Vector2::UNIT_X);
    let cases = [
        (Ray::new(v(2.0, -2.0), Vector2::UNIT_Y), IntersectionCount::One),
        (Ray::new(v(2.0, 2.0), Vector2::UNIT_Y), IntersectionCount::None),
        (Ray::new(v(3.0, 0.0), Vector2::NEG_UNIT_X), IntersectionCount::Infinite),
        (Ray::new(Vector2::ZERO, Vector2::NEG_UNIT_X), IntersectionCount::One),
        (Ray::new(v(0.0, 1.0), Vector2::UNIT_X), IntersectionCount::None),
    ];
    for (other, expected) in cases {
        assert_eq!(r.intersection_with_ray(&other).count(), expected, "{r} vs {other}");
        assert_eq!(other.intersection_with_ray(&r).count(), expected, "{other} vs {r}");
    }
}

#[test]
fn ray_against_every_polygon() {
    let ray = Ray::new(v(-5.0, 0.0), Vector2::UNIT_X);
    let triangle = Triangle::new(v(-1.0, -1.0), v(1.0, -1.0), v(0.0, 1.0));
    let Intersection::Two(near, far) = ray.intersection_with_triangle(&triangle) else {
        panic!("expected two points");
    };
    assert_relative_eq!(near, v(-0.5, 0.0), epsilon = 1e-9);
    assert_relative_eq!(far, v(0.5, 0.0), epsilon = 1e-9);

    let square = Quadrilateral::unit_square();
    assert_eq!(ray.intersection_with_quadrilateral(&square).count(), IntersectionCount::Two);
    assert_eq!(ray.reversed().intersection_with_quadrilateral(&square).count(), IntersectionCount::None);

    let segment = LineSegment::new(v(0.0, -3.0), v(0.0, 3.0));
    assert_eq!(ray.intersection_with_segment(&segment), Intersection::One(Vector2::ZERO));
}

#[test]
fn quadrilateral_shapes() {
    let convex = Quadrilateral::new(v(0.0, 0.0), v(4.0, 0.0), v(5.0, 3.0), v(1.0, 3.0));
    assert!(convex.is_convex() && !convex.is_crossed());
    assert!(convex.contains(&v(2.5, 1.5)));
    assert!(!convex.contains(&v(0.0, 3.0)));

    let crossed = Quadrilateral::new(v(0.0, 0.0), v(2.0, 2.0), v(2.0, 0.0), v(0.0, 2.0));
    assert!(crossed.is_crossed());
    assert!(crossed.contains(&v(0.25, 1.0)));
    assert!(!crossed.contains(&v(1.0, 0.25)));

    let concave = Quadrilateral::new(v(0.0, 0.0), v(2.0, 1.0), v(4.0, 0.0), v(2.0, 4.0));
    assert!(concave.is_concave());
    assert!(concave.contains(&v(1.0, 1.0)));
    assert!(!concave.contains(&v(2.0, 0.5)));
}

#[test]
fn transformation_composition_and_inversion() {
    let move_right = TransformationMatrix3::from_translation(v(1.0, 0.0));
    let turn = TransformationMatrix3::from_rotation(Angle::QUARTER_TURN);
    let p = v(1.0, 0.0);

    // The left operand applies first.
    assert_relative_eq!(p.transform(&(move_right * turn)), v(0.0, 2.0), epsilon = 1e-9);
    assert_relative_eq!(p.transform(&(turn * move_right)), v(1.0, 1.0), epsilon = 1e-9);

    let m = TransformationMatrix3::new(v(2.0, -1.0), Angle::from_degrees(40.0), v(2.0, 3.0));
    let back = p.transform(&m).transform(&m.inverse().unwrap());
    assert_relative_eq!(back, p, epsilon = 1e-9);
}

#[test]
fn circle_circle_counts() {
    let unit = Circle::unit();
    let cases = [
        (Circle::new(v(1.5, 0.0), 1.0).unwrap(), IntersectionCount::Two),
        (Circle::new(v(2.0, 0.0), 1.0).unwrap(), IntersectionCount::One),
        (Circle::new(v(0.0, 3.0), 1.0).unwrap(), IntersectionCount::None),
        (Circle::unit(), IntersectionCount::Infinite),
    ];
    for (other, expected) in cases {
        assert_eq!(unit.intersection_with_circle(&other).count(), expected, "{other}");
    }
}

#[test]
fn angle_notation_round_trips() {
    for degrees in [0.0, 30.0, 90.0, -135.0, 360.0, 720.5] {
        let angle = Angle::from_value(degrees, AngleNotation::Degrees);
        assert_relative_eq!(angle.value_in(AngleNotation::Degrees), degrees, epsilon = 1e-9);
        let radians = angle.value_in(AngleNotation::Radians);
        assert_relative_eq!(Angle::from_value(radians, AngleNotation::Radians), angle, epsilon = 1e-9);
    }
    assert_relative_eq!(Angle::from_degrees(180.0).radians(), Angle::HALF_TURN.radians(), epsilon = 1e-9);
}
