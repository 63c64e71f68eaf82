//! Approximate spatial deduplication of visited points.
//!
//! The tessellation builder stops expanding a branch as soon as the tile
//! center it would produce has already been seen.

mod conformal;
mod exact;
mod grid;

pub use conformal::ConformalGridCache;
pub use exact::ExactPointCache;
pub use grid::{GridPointCache, GridSegmentCache};

use crate::hyperbolic::Point;

/// A set of visited points queried up to a tolerance.
pub trait PointCache {
    /// Records `point` as visited.
    fn store(&mut self, point: &Point);

    /// Whether a point close to `point` has been stored.
    fn query(&self, point: &Point) -> bool;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which [`PointCache`] implementation a construction uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheStrategy {
    /// Linear scan with true hyperbolic distances.
    Exact,
    /// Integer grid buckets over Klein coordinates with a 3x3
    /// neighbourhood query. The tolerance is Euclidean.
    Grid,
    /// Grid buckets over Poincaré coordinates scaled by the conformal
    /// factor. The tolerance is hyperbolic.
    #[default]
    Conformal,
}

impl CacheStrategy {
    /// Creates an empty cache of this kind.
    #[must_use]
    pub fn build(self, epsilon: f64) -> Box<dyn PointCache> {
        match self {
            Self::Exact => Box::new(ExactPointCache::new(epsilon)),
            Self::Grid => Box::new(GridPointCache::new(epsilon)),
            Self::Conformal => Box::new(ConformalGridCache::new(epsilon)),
        }
    }

    /// Whether the tolerance is a hyperbolic distance rather than a
    /// Klein-coordinate extent.
    #[must_use]
    pub fn is_hyperbolic(self) -> bool {
        !matches!(self, Self::Grid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn strategies_agree_on_clear_cases() {
        for strategy in [CacheStrategy::Exact, CacheStrategy::Grid, CacheStrategy::Conformal] {
            let mut cache = strategy.build(1e-3);
            assert!(cache.is_empty());
            cache.store(&Point::new(0.2, -0.3).unwrap());
            assert_eq!(cache.len(), 1);
            assert!(cache.query(&Point::new(0.2, -0.3).unwrap()), "{strategy:?}");
            assert!(!cache.query(&Point::new(-0.5, 0.5).unwrap()), "{strategy:?}");
        }
    }
}
