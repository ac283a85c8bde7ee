//! Orientation predicates shared by the 2D shapes.

use crate::math::{scalar, Real, Vector, Vector2};

use super::Intersection;

/// Signed area of the parallelogram spanned by `a -> b` and `a -> p`.
///
/// Positive when `p` is to the left of the directed line `a -> b`, negative
/// to the right, zero on the line.
#[must_use]
pub fn orientation(a: &Vector2, b: &Vector2, p: &Vector2) -> Real {
    (*b - *a).perp_dot(&(*p - *a))
}

/// Whether `p` and `q` lie on the same side of the line through `a` and `b`.
///
/// A point on the line counts as being on either side.
#[must_use]
pub fn same_side(p: &Vector2, q: &Vector2, a: &Vector2, b: &Vector2) -> bool {
    let op = orientation(a, b, p);
    let oq = orientation(a, b, q);
    scalar::is_zero(op) || scalar::is_zero(oq) || (op > 0.0) == (oq > 0.0)
}

/// Whether `u` and `v` point along the same line.
///
/// The cross product is compared against `|u||v|`, so the answer does not
/// depend on how long the directions are. A null direction is parallel to
/// everything.
#[must_use]
pub fn are_parallel(u: &Vector2, v: &Vector2) -> bool {
    let scale = u.length() * v.length();
    scale <= 0.0 || scalar::is_zero(u.perp_dot(v) / scale)
}

/// Keeps the distinct points of `hits` and reports the two closest to
/// `from`, nearest first.
pub(crate) fn nearest_distinct<V: Vector>(mut hits: Vec<V>, from: &V) -> Intersection<V> {
    hits.sort_by(|p, q| {
        p.distance(from)
            .partial_cmp(&q.distance(from))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.dedup_by(|p, q| p == q);
    match hits.as_slice() {
        [] => Intersection::None,
        [p] => Intersection::One(*p),
        [p, q, ..] => Intersection::Two(*p, *q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_sign() {
        let a = Vector2::ZERO;
        let b = Vector2::UNIT_X;
        assert!(orientation(&a, &b, &Vector2::new(0.5, 1.0)) > 0.0);
        assert!(orientation(&a, &b, &Vector2::new(0.5, -1.0)) < 0.0);
        assert!(scalar::is_zero(orientation(&a, &b, &Vector2::new(3.0, 0.0))));
    }

    #[test]
    fn same_side_treats_the_line_as_both_sides() {
        let a = Vector2::ZERO;
        let b = Vector2::UNIT_X;
        let up = Vector2::new(0.0, 1.0);
        assert!(same_side(&up, &Vector2::new(5.0, 2.0), &a, &b));
        assert!(!same_side(&up, &Vector2::new(5.0, -2.0), &a, &b));
        assert!(same_side(&up, &Vector2::new(5.0, 0.0), &a, &b));
    }

    #[test]
    fn parallel_test_ignores_direction_length() {
        let tiny_x = Vector2::new(1e-7, 0.0);
        let tiny_y = Vector2::new(0.0, 1e-7);
        assert!(!are_parallel(&tiny_x, &tiny_y));
        assert!(are_parallel(&tiny_x, &Vector2::new(-3.0, 0.0)));
        assert!(!are_parallel(&Vector2::new(1e6, 0.0), &Vector2::new(1e6, 1.0)));
        assert!(are_parallel(&Vector2::ZERO, &tiny_y));
    }

    #[test]
    fn nearest_distinct_dedups_and_orders() {
        let from = Vector2::ZERO;
        let far = Vector2::new(3.0, 0.0);
        let near = Vector2::new(1.0, 0.0);
        let hits = vec![far, near, near, Vector2::new(5.0, 0.0)];
        assert_eq!(nearest_distinct(hits, &from), Intersection::Two(near, far));
        assert_eq!(nearest_distinct(vec![near, near], &from), Intersection::One(near));
        assert!(nearest_distinct(Vec::new(), &from).is_none());
    }
}
