use std::cell::OnceCell;

use crate::error::{GeometryError, Result};
use crate::euclidean::{crossratio, EuPoint};

use super::line::geodesic_through;
use super::{Isometry, KleinCoords, Line, MetricTensor, Segment, Transform};

/// A point of the hyperbolic plane, in Klein coordinates.
///
/// Always strictly inside the unit disk. Poincaré coordinates and the
/// metric tensor are computed on first use and cached.
#[derive(Debug, Clone)]
pub struct Point {
    x: f64,
    y: f64,
    poincare: OnceCell<EuPoint>,
    metric: OnceCell<MetricTensor>,
}

impl Point {
    /// Creates a point from Klein coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutsideDisk`] unless `x^2 + y^2 < 1`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(x: f64, y: f64) -> Result<Self> {
        // Written so that NaN coordinates are rejected as well.
        if !(x * x + y * y < 1.0) {
            return Err(GeometryError::OutsideDisk { x, y }.into());
        }
        Ok(Self {
            x,
            y,
            poincare: OnceCell::new(),
            metric: OnceCell::new(),
        })
    }

    /// The center of the disk.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            poincare: OnceCell::new(),
            metric: OnceCell::new(),
        }
    }

    /// Creates a point from a Euclidean point in Klein coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not inside the open unit disk.
    pub fn from_eupoint(p: EuPoint) -> Result<Self> {
        Self::new(p.x, p.y)
    }

    /// Creates a point from Poincaré coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not inside the open unit disk.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn from_poincare(u: f64, v: f64) -> Result<Self> {
        let sq = u * u + v * v;
        if !(sq < 1.0) {
            return Err(GeometryError::OutsideDisk { x: u, y: v }.into());
        }
        let k = 2.0 / (1.0 + sq);
        Self::new(u * k, v * k)
    }

    /// Klein x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Klein y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn to_eupoint(&self) -> EuPoint {
        EuPoint::new(self.x, self.y)
    }

    /// Metric tensor at this point.
    #[must_use]
    pub fn metric(&self) -> &MetricTensor {
        self.metric.get_or_init(|| MetricTensor::at(self.x, self.y))
    }

    /// The complete geodesic through `self` and `other`.
    ///
    /// The endpoints are ordered so that `p1` lies on the side of `self`
    /// and `p2` on the side of `other`. Returns `None` if the points
    /// coincide.
    #[must_use]
    pub fn line_to(&self, other: &Point) -> Option<Line> {
        geodesic_through(&self.to_eupoint(), &other.to_eupoint())
    }

    /// The geodesic segment from `self` to `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn segment_to(&self, other: &Point) -> Result<Segment<Point>> {
        Segment::new(self.clone(), other.clone())
    }

    /// Hyperbolic distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        match self.line_to(other) {
            Some(line) => self.distance_along(other, &line),
            None => 0.0,
        }
    }

    /// Hyperbolic distance to `other`, reusing an already computed
    /// geodesic through both points.
    #[must_use]
    pub fn distance_along(&self, other: &Point, line: &Line) -> f64 {
        let ratio = crossratio(
            &line.p1().klein(),
            &line.p2().klein(),
            &other.to_eupoint(),
            &self.to_eupoint(),
        );
        0.5 * ratio.ln().abs()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl KleinCoords for Point {
    fn klein(&self) -> EuPoint {
        self.to_eupoint()
    }

    fn poincare(&self) -> EuPoint {
        *self.poincare.get_or_init(|| {
            let mult = 1.0 / (1.0 + (1.0 - self.x * self.x - self.y * self.y).sqrt());
            EuPoint::new(self.x * mult, self.y * mult)
        })
    }
}

impl Transform for Point {
    fn transform(&self, isometry: &Isometry) -> Result<Self> {
        Self::from_eupoint(isometry.apply(&self.to_eupoint())?)
    }
}
