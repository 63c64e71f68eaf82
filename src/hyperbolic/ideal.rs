use std::cell::OnceCell;

use crate::error::Result;
use crate::euclidean::EuPoint;
use crate::math::normalize_angle;

use super::line::geodesic_through;
use super::{Isometry, KleinCoords, Line, Point, Transform};

/// An ideal point on the boundary circle, identified by its polar angle.
///
/// The angle is kept as given; call [`InfPoint::normalize`] to bring it
/// into `[0, 2*pi)`.
#[derive(Debug, Clone)]
pub struct InfPoint {
    alpha: f64,
    coords: OnceCell<EuPoint>,
}

impl InfPoint {
    /// Creates the ideal point at polar angle `alpha`.
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            coords: OnceCell::new(),
        }
    }

    /// The ideal point in the direction of `(x, y)`.
    #[must_use]
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::new(y.atan2(x))
    }

    #[must_use]
    pub fn from_eupoint(p: EuPoint) -> Self {
        Self::from_xy(p.x, p.y)
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The same ideal point with its angle in `[0, 2*pi)`.
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self::new(normalize_angle(self.alpha))
    }

    /// `(cos alpha, sin alpha)`, identical in both disk models.
    #[must_use]
    pub fn coords(&self) -> EuPoint {
        *self
            .coords
            .get_or_init(|| EuPoint::new(self.alpha.cos(), self.alpha.sin()))
    }

    /// The geodesic from this ideal point through `point`.
    ///
    /// `p1` of the result is this ideal point.
    #[must_use]
    pub fn line_to(&self, point: &Point) -> Option<Line> {
        geodesic_through(&self.coords(), &point.to_eupoint())
    }
}

impl PartialEq for InfPoint {
    fn eq(&self, other: &Self) -> bool {
        self.coords().sqdistance(&other.coords()) == 0.0
    }
}

impl KleinCoords for InfPoint {
    fn klein(&self) -> EuPoint {
        self.coords()
    }

    fn poincare(&self) -> EuPoint {
        self.coords()
    }
}

impl Transform for InfPoint {
    fn transform(&self, isometry: &Isometry) -> Result<Self> {
        Ok(Self::from_eupoint(isometry.apply(&self.coords())?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn angle_is_not_normalized_on_construction() {
        let p = InfPoint::new(-FRAC_PI_2);
        assert_abs_diff_eq!(p.alpha(), -FRAC_PI_2);
        assert_abs_diff_eq!(p.normalize().alpha(), 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn coordinates_lie_on_unit_circle() {
        let p = InfPoint::new(2.0);
        assert_abs_diff_eq!(p.coords().sqnorm(), 1.0, epsilon = 1e-15);
        assert_eq!(p.klein(), p.poincare());
    }

    #[test]
    fn from_coords_recovers_angle() {
        let a = InfPoint::new(0.5);
        let b = InfPoint::from_eupoint(a.coords());
        assert_abs_diff_eq!(a.alpha(), b.alpha(), epsilon = 1e-15);
    }

    #[test]
    fn line_to_starts_at_ideal_point() {
        let start = InfPoint::new(PI);
        let line = start.line_to(&Point::new(0.5, 0.0).unwrap()).unwrap();
        assert_abs_diff_eq!(line.p1().klein().x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(line.p2().klein().x, 1.0, epsilon = 1e-12);
    }
}
