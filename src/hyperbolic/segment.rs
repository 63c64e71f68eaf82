use crate::error::{GeometryError, Result};

use super::line::geodesic_through;
use super::{Isometry, KleinCoords, Line, Point, Transform};

/// A bounded piece of a geodesic between two points of the same kind.
///
/// The carrying [`Line`] is not stored; [`Segment::line`] recomputes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<P> {
    p1: P,
    p2: P,
}

impl<P: KleinCoords> Segment<P> {
    /// Creates the segment from `p1` to `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(p1: P, p2: P) -> Result<Self> {
        if p1.klein().sqdistance(&p2.klein()) == 0.0 {
            return Err(GeometryError::Degenerate("segment endpoints coincide".into()).into());
        }
        Ok(Self { p1, p2 })
    }

    #[must_use]
    pub fn p1(&self) -> &P {
        &self.p1
    }

    #[must_use]
    pub fn p2(&self) -> &P {
        &self.p2
    }

    /// The complete geodesic carrying this segment, directed from `p1`
    /// toward `p2`.
    #[must_use]
    pub fn line(&self) -> Option<Line> {
        geodesic_through(&self.p1.klein(), &self.p2.klein())
    }
}

impl<P: KleinCoords + Clone> Segment<P> {
    /// The same segment with its endpoints swapped.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            p1: self.p2.clone(),
            p2: self.p1.clone(),
        }
    }
}

impl Segment<Point> {
    /// Hyperbolic length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.p1.distance(&self.p2)
    }
}

impl<P: KleinCoords + Transform> Transform for Segment<P> {
    fn transform(&self, isometry: &Isometry) -> Result<Self> {
        Self::new(self.p1.transform(isometry)?, self.p2.transform(isometry)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::hyperbolic::InfPoint;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn coincident_endpoints_are_rejected() {
        let p = Point::new(0.2, 0.2).unwrap();
        assert!(p.segment_to(&p).is_err());
    }

    #[test]
    fn length_matches_point_distance() {
        let a = Point::new(0.1, -0.4).unwrap();
        let b = Point::new(-0.6, 0.3).unwrap();
        let s = a.segment_to(&b).unwrap();
        assert_abs_diff_eq!(s.length(), a.distance(&b));
        assert_abs_diff_eq!(s.reverse().length(), s.length(), epsilon = 1e-12);
    }

    #[test]
    fn line_is_directed_from_first_endpoint() {
        let s = Point::new(0.5, 0.0)
            .unwrap()
            .segment_to(&Point::new(-0.5, 0.0).unwrap())
            .unwrap();
        let l = s.line().unwrap();
        assert_abs_diff_eq!(l.p1().klein().x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.p2().klein().x, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn ideal_segment_spans_its_own_geodesic() {
        let s = Segment::new(InfPoint::new(0.0), InfPoint::new(PI / 2.0)).unwrap();
        let l = s.line().unwrap();
        assert_abs_diff_eq!(l.p1().klein().x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.p2().klein().y, 1.0, epsilon = 1e-12);
    }
}
