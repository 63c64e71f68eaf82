use std::ops::{Add, Deref, Mul, Sub};

use crate::math::{Point2, Vector2};

use super::{EuCircle, EuLine};

/// A point (or free vector) of the Euclidean plane.
///
/// Dereferences to the underlying [`Point2`], so `p.x` and `p.y` read the
/// coordinates directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuPoint(Point2);

impl EuPoint {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Point2::new(x, y))
    }

    /// Position vector from the origin.
    #[must_use]
    pub fn as_vector(&self) -> Vector2 {
        self.0.coords
    }

    /// Squared distance from the origin.
    #[must_use]
    pub fn sqnorm(&self) -> f64 {
        self.0.coords.norm_squared()
    }

    /// Distance from the origin.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.0.coords.norm()
    }

    /// Multiplies both coordinates by `k`.
    #[must_use]
    pub fn scale(&self, k: f64) -> Self {
        Self(self.0 * k)
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn sqdistance(&self, other: &Self) -> f64 {
        nalgebra::distance_squared(&self.0, &other.0)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.0, &other.0)
    }

    /// Direction angle of the vector from `self` to `other`.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f64 {
        let d = other.0 - self.0;
        d.y.atan2(d.x)
    }

    /// The line through `self` and `other`.
    ///
    /// The slope is taken along whichever axis has the larger extent so that
    /// near-vertical and near-horizontal lines stay well conditioned.
    /// Returns `None` when the two points coincide.
    #[must_use]
    pub fn line_to(&self, other: &Self) -> Option<EuLine> {
        let d = other.0 - self.0;
        if d.x == 0.0 && d.y == 0.0 {
            return None;
        }
        if d.x.abs() > d.y.abs() {
            let m = d.y / d.x;
            Some(EuLine::new(m, -1.0, self.y - m * self.x))
        } else {
            let m = d.x / d.y;
            Some(EuLine::new(-1.0, m, self.x - m * self.y))
        }
    }

    /// The circle centered at `self` passing through `other`.
    #[must_use]
    pub fn circle_to(&self, other: &Self) -> EuCircle {
        EuCircle::new(self.x, self.y, self.distance(other))
    }
}

impl Default for EuPoint {
    fn default() -> Self {
        Self(Point2::origin())
    }
}

impl Deref for EuPoint {
    type Target = Point2;

    fn deref(&self) -> &Point2 {
        &self.0
    }
}

impl From<Point2> for EuPoint {
    fn from(p: Point2) -> Self {
        Self(p)
    }
}

impl From<EuPoint> for Point2 {
    fn from(p: EuPoint) -> Self {
        p.0
    }
}

impl Add for EuPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0.coords)
    }
}

impl Sub for EuPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(Point2::from(self.0 - rhs.0))
    }
}

impl Mul<f64> for EuPoint {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}
