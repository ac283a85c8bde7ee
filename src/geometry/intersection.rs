/// How many points two primitives share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionCount {
    None,
    One,
    Two,
    /// The primitives overlap along a curve or a region.
    Infinite,
}

/// Result of an intersection query.
///
/// Finite results carry their points; `Infinite` carries none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection<V> {
    None,
    One(V),
    Two(V, V),
    Infinite,
}

impl<V: Copy> Intersection<V> {
    #[must_use]
    pub fn count(&self) -> IntersectionCount {
        match self {
            Self::None => IntersectionCount::None,
            Self::One(_) => IntersectionCount::One,
            Self::Two(..) => IntersectionCount::Two,
            Self::Infinite => IntersectionCount::Infinite,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The first reported point, if any.
    #[must_use]
    pub fn first(&self) -> Option<V> {
        match *self {
            Self::One(p) | Self::Two(p, _) => Some(p),
            Self::None | Self::Infinite => None,
        }
    }

    /// All reported points, in order.
    #[must_use]
    pub fn points(&self) -> Vec<V> {
        match *self {
            Self::One(p) => vec![p],
            Self::Two(p, q) => vec![p, q],
            Self::None | Self::Infinite => Vec::new(),
        }
    }
}

impl<V> Default for Intersection<V> {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    #[test]
    fn count_follows_variant() {
        let p = Vector2::new(1.0, 2.0);
        assert_eq!(Intersection::<Vector2>::None.count(), IntersectionCount::None);
        assert_eq!(Intersection::One(p).count(), IntersectionCount::One);
        assert_eq!(Intersection::Two(p, p).count(), IntersectionCount::Two);
        assert_eq!(Intersection::<Vector2>::Infinite.count(), IntersectionCount::Infinite);
    }

    #[test]
    fn points_and_first() {
        let p = Vector2::new(1.0, 2.0);
        let q = Vector2::new(3.0, 4.0);
        assert_eq!(Intersection::Two(p, q).points(), vec![p, q]);
        assert_eq!(Intersection::Two(p, q).first(), Some(p));
        assert!(Intersection::<Vector2>::Infinite.points().is_empty());
        assert_eq!(Intersection::<Vector2>::Infinite.first(), None);
        assert!(Intersection::<Vector2>::default().is_none());
    }
}
