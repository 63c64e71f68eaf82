use crate::hyperbolic::Point;

use super::PointCache;

/// Stores every point and compares hyperbolic distances on query.
///
/// O(n) per query; only suitable for small constructions.
#[derive(Debug, Clone)]
pub struct ExactPointCache {
    epsilon: f64,
    points: Vec<Point>,
}

impl ExactPointCache {
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl PointCache for ExactPointCache {
    fn store(&mut self, point: &Point) {
        self.points.push(point.clone());
    }

    fn query(&self, point: &Point) -> bool {
        self.points.iter().any(|p| point.distance(p) < self.epsilon)
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
