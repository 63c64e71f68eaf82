use crate::error::{GeometryError, Result};
use crate::euclidean::{EuCircle, EuLine, EuPoint};
use crate::math::{Vector2, TOLERANCE};

use super::{InfPoint, Isometry, Point, Transform};

/// A complete geodesic, given by its two ideal endpoints.
///
/// The endpoint order gives the geodesic a direction: arclength
/// coordinates increase from `p1` toward `p2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: InfPoint,
    p2: InfPoint,
}

impl Line {
    /// Creates the geodesic from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two ideal points coincide.
    pub fn new(p1: InfPoint, p2: InfPoint) -> Result<Self> {
        if p1.coords().sqdistance(&p2.coords()) < TOLERANCE * TOLERANCE {
            return Err(GeometryError::Degenerate("geodesic endpoints coincide".into()).into());
        }
        Ok(Self { p1, p2 })
    }

    /// Skips the coincidence check for endpoints known to be distinct.
    pub(super) fn from_ends_unchecked(p1: InfPoint, p2: InfPoint) -> Self {
        Self { p1, p2 }
    }

    /// Start endpoint.
    #[must_use]
    pub fn p1(&self) -> &InfPoint {
        &self.p1
    }

    /// End endpoint.
    #[must_use]
    pub fn p2(&self) -> &InfPoint {
        &self.p2
    }

    /// The same geodesic traversed the other way.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            p1: self.p2.clone(),
            p2: self.p1.clone(),
        }
    }

    /// Euclidean direction of the chord, from `p1` to `p2`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.p2.coords().as_vector() - self.p1.coords().as_vector()
    }

    /// The Euclidean line carrying the chord.
    #[must_use]
    pub fn to_euline(&self) -> Option<EuLine> {
        self.p1.coords().line_to(&self.p2.coords())
    }

    /// Intersection with another geodesic.
    ///
    /// Returns `None` when the chords are parallel or when their carrying
    /// lines only meet on or outside the boundary circle.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let p = self.to_euline()?.intersection_line(&other.to_euline()?)?;
        Point::from_eupoint(p).ok()
    }

    /// The point at signed hyperbolic arclength `d` from [`Line::ref_point`],
    /// positive toward `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if `d` is so large that the point rounds onto the
    /// boundary.
    pub fn point_at_coordinate(&self, d: f64) -> Result<Point> {
        let a = self.p1.coords();
        let b = self.p2.coords();
        // Interpolate from the nearer endpoint to avoid cancellation.
        let p = if d >= 0.0 {
            b + (a - b) * (1.0 / (1.0 + (2.0 * d).exp()))
        } else {
            a + (b - a) * (1.0 / (1.0 + (-2.0 * d).exp()))
        };
        Point::from_eupoint(p)
    }

    /// Signed arclength coordinate of a point lying on this geodesic;
    /// inverse of [`Line::point_at_coordinate`].
    #[must_use]
    pub fn coordinate_of(&self, point: &Point) -> f64 {
        let p = point.to_eupoint();
        0.25 * (p.sqdistance(&self.p1.coords()) / p.sqdistance(&self.p2.coords())).ln()
    }

    /// The point at coordinate zero: the midpoint of the chord.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints are so close that the midpoint
    /// rounds onto the boundary.
    pub fn ref_point(&self) -> Result<Point> {
        Point::from_eupoint((self.p1.coords() + self.p2.coords()) * 0.5)
    }

    /// Hyperbolic angle in `[0, pi]` between the directions of `self` and
    /// `other` at `at`, a point on both geodesics.
    #[must_use]
    pub fn angle_with(&self, other: &Line, at: &Point) -> f64 {
        at.metric().angle(&self.direction(), &other.direction())
    }

    /// The Poincaré-model image of this geodesic: the circle through both
    /// endpoints orthogonal to the boundary.
    ///
    /// Returns `None` for diameters, which are straight in both models.
    #[must_use]
    pub fn poincare_circle(&self) -> Option<EuCircle> {
        let u1 = self.p1.coords();
        let u2 = self.p2.coords();
        let denom = 1.0 + u1.x * u2.x + u1.y * u2.y;
        if denom < TOLERANCE {
            return None;
        }
        let center = (u1 + u2) * (1.0 / denom);
        let r = (center.sqnorm() - 1.0).max(0.0).sqrt();
        Some(EuCircle::new(center.x, center.y, r))
    }
}

impl Transform for Line {
    fn transform(&self, isometry: &Isometry) -> Result<Self> {
        Self::new(self.p1.transform(isometry)?, self.p2.transform(isometry)?)
    }
}

/// The geodesic through two distinct positions of the closed disk, with
/// `p1` on the side of `a` and `p2` on the side of `b`.
pub(super) fn geodesic_through(a: &EuPoint, b: &EuPoint) -> Option<Line> {
    let euline = a.line_to(b)?;
    let ends = EuCircle::unit().intersection_line(&euline);
    let &[mut e1, mut e2] = ends.as_slice() else {
        return None;
    };
    if e1.sqdistance(a) > e1.sqdistance(b) {
        std::mem::swap(&mut e1, &mut e2);
    }
    Line::new(InfPoint::from_eupoint(e1), InfPoint::from_eupoint(e2)).ok()
}
