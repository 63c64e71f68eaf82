use crate::math::solve_poly2;

use super::{EuLine, EuPoint};

/// The circle `(x - cx)^2 + (y - cy)^2 = r^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuCircle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl EuCircle {
    /// Creates a circle from its center and radius.
    #[must_use]
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    /// The unit circle bounding both disk models.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Intersection with a line.
    ///
    /// Substitutes the line into the circle equation, solving for the
    /// coordinate whose coefficient is smaller in magnitude. Returns zero,
    /// one (tangency) or two points.
    #[must_use]
    pub fn intersection_line(&self, line: &EuLine) -> Vec<EuPoint> {
        let (mut a, mut b, c) = (line.a, line.b, line.c);
        let (mut xx, mut yy) = (self.cx, self.cy);
        if a == 0.0 && b == 0.0 {
            return Vec::new();
        }

        let swapped = a.abs() > b.abs();
        if swapped {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut xx, &mut yy);
        }

        let ratio = a / b;
        let tmp = c / b + yy;
        let coeff2 = 1.0 + ratio * ratio;
        let coeff1 = -2.0 * (xx - tmp * ratio);
        let coeff0 = xx * xx + tmp * tmp - self.r * self.r;

        solve_poly2(coeff2, coeff1, coeff0)
            .into_iter()
            .map(|u| {
                let v = -(c + a * u) / b;
                if swapped {
                    EuPoint::new(v, u)
                } else {
                    EuPoint::new(u, v)
                }
            })
            .collect()
    }

    /// The radical axis of `self` and `other`: the line through their
    /// common points, obtained by subtracting the two circle equations.
    #[must_use]
    pub fn polar(&self, other: &Self) -> EuLine {
        let a = -2.0 * (self.cx - other.cx);
        let b = -2.0 * (self.cy - other.cy);
        let c = self.cx * self.cx + self.cy * self.cy - self.r * self.r
            - (other.cx * other.cx + other.cy * other.cy - other.r * other.r);
        EuLine::new(a, b, c)
    }

    /// Intersection with another circle via the radical axis.
    ///
    /// Concentric circles have no radical axis and yield no points.
    #[must_use]
    pub fn intersection_circle(&self, other: &Self) -> Vec<EuPoint> {
        self.intersection_line(&self.polar(other))
    }
}
