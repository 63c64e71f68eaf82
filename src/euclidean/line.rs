use crate::math::det2;

use super::{EuCircle, EuPoint};

/// The line `a*x + b*y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl EuLine {
    /// Creates the line `a*x + b*y + c = 0`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Value of `a*x + b*y + c` at `p`; zero exactly on the line.
    #[must_use]
    pub fn evaluate(&self, p: &EuPoint) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Intersection with another line by Cramer's rule.
    ///
    /// Returns `None` when the lines are parallel (zero determinant).
    #[must_use]
    pub fn intersection_line(&self, other: &Self) -> Option<EuPoint> {
        let denom = -det2(self.a, self.b, other.a, other.b);
        if denom == 0.0 {
            return None;
        }
        let x = det2(self.c, self.b, other.c, other.b) / denom;
        let y = det2(self.a, self.c, other.a, other.c) / denom;
        Some(EuPoint::new(x, y))
    }

    /// Intersection with a circle; see [`EuCircle::intersection_line`].
    #[must_use]
    pub fn intersection_circle(&self, circle: &EuCircle) -> Vec<EuPoint> {
        circle.intersection_line(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn crossing_lines_meet() {
        // y = x and y = -x + 2 meet at (1, 1).
        let l1 = EuLine::new(1.0, -1.0, 0.0);
        let l2 = EuLine::new(1.0, 1.0, -2.0);
        let p = l1.intersection_line(&l2).unwrap();
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_lines_do_not_meet() {
        let l1 = EuLine::new(1.0, -1.0, 0.0);
        let l2 = EuLine::new(2.0, -2.0, 3.0);
        assert!(l1.intersection_line(&l2).is_none());
    }

    #[test]
    fn intersection_circle_delegates() {
        let line = EuLine::new(0.0, 1.0, 0.0);
        let points = line.intersection_circle(&EuCircle::new(0.0, 0.0, 1.0));
        assert_eq!(points.len(), 2);
    }
}
