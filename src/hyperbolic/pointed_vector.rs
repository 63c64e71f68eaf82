use std::cell::OnceCell;
use std::f64::consts::PI;

use crate::error::Result;
use crate::euclidean::EuPoint;
use crate::math::Vector2;

use super::{InfPoint, Isometry, KleinCoords, Line, Point, Transform};

/// A point together with a unit direction: an element of the unit tangent
/// bundle, used as a turtle cursor for geodesic walks.
///
/// `alpha` is the Euclidean angle of the direction in Klein coordinates.
/// It only coincides with the hyperbolic angle at the origin, so turning
/// goes through the local orthonormal basis.
#[derive(Debug, Clone)]
pub struct PointedVector {
    point: Point,
    alpha: f64,
    basis: OnceCell<(Vector2, Vector2)>,
    isometry: OnceCell<Isometry>,
}

impl PointedVector {
    /// Creates a frame at Klein coordinates `(x, y)` heading along `alpha`.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is not inside the open unit disk.
    pub fn new(x: f64, y: f64, alpha: f64) -> Result<Self> {
        Ok(Self::from_point(Point::new(x, y)?, alpha))
    }

    #[must_use]
    pub fn from_point(point: Point, alpha: f64) -> Self {
        Self {
            point,
            alpha,
            basis: OnceCell::new(),
            isometry: OnceCell::new(),
        }
    }

    /// The canonical frame at the origin heading along the x axis.
    #[must_use]
    pub fn origin() -> Self {
        Self::from_point(Point::origin(), 0.0)
    }

    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    #[must_use]
    pub fn to_point(&self) -> Point {
        self.point.clone()
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Metric-orthonormal basis `(v1, v2)` of the tangent plane here.
    #[must_use]
    pub fn basis(&self) -> (Vector2, Vector2) {
        *self
            .basis
            .get_or_init(|| self.point.metric().orthonormal_basis())
    }

    /// The frame at the same point heading the opposite way.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::from_point(self.point.clone(), self.alpha + PI)
    }

    /// The complete geodesic through the frame, directed along it: `p2` is
    /// the ideal point the frame is heading to.
    #[must_use]
    pub fn to_line(&self) -> Line {
        let p = self.point.to_eupoint();
        let (sin, cos) = self.alpha.sin_cos();
        let d = EuPoint::new(cos, sin);
        // |p + t d| = 1 has one root of each sign since p is inside the disk.
        let pd = p.x * d.x + p.y * d.y;
        let disc = (pd * pd + 1.0 - p.sqnorm()).sqrt();
        let backward = InfPoint::from_eupoint(p + d * (-pd - disc));
        let forward = InfPoint::from_eupoint(p + d * (-pd + disc));
        Line::from_ends_unchecked(backward, forward)
    }

    /// Rotates the direction by hyperbolic angle `beta`, counterclockwise.
    ///
    /// The direction is expressed in the orthonormal basis, turned there,
    /// and projected back to an ambient angle.
    #[must_use]
    pub fn turn(&self, beta: f64) -> Self {
        let (v1, v2) = self.basis();
        let (sin, cos) = self.alpha.sin_cos();
        let b = sin / v2.y;
        let a = (cos - b * v2.x) / v1.x;
        let theta = b.atan2(a) + beta;
        let direction = v1 * theta.cos() + v2 * theta.sin();
        Self::from_point(self.point.clone(), direction.y.atan2(direction.x))
    }

    /// Moves the frame by hyperbolic distance `dist` along its geodesic.
    ///
    /// Chords are straight in the Klein model, so the ambient angle is kept
    /// as is. No separate parallel transport is modelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the new position rounds onto the boundary.
    pub fn advance(&self, dist: f64) -> Result<Self> {
        let line = self.to_line();
        let here = line.coordinate_of(&self.point);
        let point = line.point_at_coordinate(here + dist)?;
        Ok(Self::from_point(point, self.alpha))
    }

    /// The direct isometry taking [`PointedVector::origin`] onto this frame.
    ///
    /// Built as a rotation about the origin followed by the boost carrying
    /// the origin to this position; the rotation angle is read off by
    /// pulling the frame's forward ideal point back through the boost.
    ///
    /// # Errors
    ///
    /// Returns an error if the boost cannot be inverted.
    pub fn isometry(&self) -> Result<Isometry> {
        if let Some(isometry) = self.isometry.get() {
            return Ok(isometry.clone());
        }
        let boost = Isometry::boost(&self.point);
        let forward = boost.inverse()?.map(self.to_line().p2())?;
        let isometry = boost.compose(&Isometry::origin_rotation(forward.alpha()));
        let _ = self.isometry.set(isometry.clone());
        Ok(isometry)
    }
}

impl KleinCoords for PointedVector {
    fn klein(&self) -> EuPoint {
        self.point.to_eupoint()
    }

    fn poincare(&self) -> EuPoint {
        self.point.poincare()
    }
}

impl Transform for PointedVector {
    fn transform(&self, isometry: &Isometry) -> Result<Self> {
        let point = self.point.transform(isometry)?;
        let forward = self.to_line().p2().transform(isometry)?;
        let alpha = point.to_eupoint().angle_to(&forward.coords());
        Ok(Self::from_point(point, alpha))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn turn_at_origin_adds_angle() {
        let pv = PointedVector::origin().turn(0.8);
        assert_abs_diff_eq!(pv.alpha(), 0.8, epsilon = 1e-15);
    }

    #[test]
    fn basis_is_orthonormal_for_the_metric_here() {
        let pv = PointedVector::new(-0.4, 0.6, 1.1).unwrap();
        let (v1, v2) = pv.basis();
        let g = pv.point().metric();
        assert_abs_diff_eq!(g.inner(&v1, &v1), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.inner(&v1, &v2), 0.0, epsilon = 1e-12);
        assert_eq!(pv.basis(), (v1, v2));
    }

    #[test]
    fn turn_measures_hyperbolic_angle() {
        let pv = PointedVector::new(0.5, 0.3, 0.4).unwrap();
        let turned = pv.turn(FRAC_PI_2);
        let g = pv.point().metric();
        let u = Vector2::new(pv.alpha().cos(), pv.alpha().sin());
        let v = Vector2::new(turned.alpha().cos(), turned.alpha().sin());
        assert_abs_diff_eq!(g.angle(&u, &v), FRAC_PI_2, epsilon = 1e-12);
        // Ambient angles differ by something other than pi/2 away from the origin.
        assert!((turned.alpha() - pv.alpha() - FRAC_PI_2).abs() > 1e-3);
    }

    #[test]
    fn full_turn_returns_to_start() {
        let pv = PointedVector::new(-0.6, 0.2, 2.0).unwrap();
        let back = pv.turn(1.0).turn(2.0).turn(TAU - 3.0);
        assert!(angle_diff(back.alpha(), pv.alpha()) < 1e-12);
    }

    #[test]
    fn advance_from_origin_matches_tanh() {
        let pv = PointedVector::origin().advance(1.5).unwrap();
        assert_abs_diff_eq!(pv.point().x(), 1.5_f64.tanh(), epsilon = 1e-14);
        assert_abs_diff_eq!(pv.point().y(), 0.0, epsilon = 1e-14);
    }

    #[test]
    fn advance_covers_requested_distance() {
        let pv = PointedVector::new(0.3, -0.4, 2.5).unwrap();
        let moved = pv.advance(0.9).unwrap();
        assert_abs_diff_eq!(pv.point().distance(moved.point()), 0.9, epsilon = 1e-10);
        let back = moved.advance(-0.9).unwrap();
        assert_abs_diff_eq!(back.point().x(), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(back.point().y(), -0.4, epsilon = 1e-12);
    }

    #[test]
    fn reverse_then_advance_goes_back() {
        let pv = PointedVector::new(0.1, 0.1, 1.0).unwrap();
        let there = pv.advance(0.7).unwrap();
        let home = there.reverse().advance(0.7).unwrap();
        assert_abs_diff_eq!(home.point().x(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(home.point().y(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn to_line_points_forward() {
        let line = PointedVector::new(0.2, 0.0, 0.0).unwrap().to_line();
        assert_abs_diff_eq!(line.p1().klein().x, -1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(line.p2().klein().x, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn isometry_maps_origin_frame_onto_frame() {
        let pv = PointedVector::new(-0.45, 0.6, -1.1).unwrap();
        let image = pv.isometry().unwrap().map(&PointedVector::origin()).unwrap();
        assert_abs_diff_eq!(image.point().x(), -0.45, epsilon = 1e-12);
        assert_abs_diff_eq!(image.point().y(), 0.6, epsilon = 1e-12);
        assert!(angle_diff(image.alpha(), -1.1) < 1e-10);
    }

    #[test]
    fn isometry_is_orientation_preserving() {
        let pv = PointedVector::new(0.3, 0.7, 0.2).unwrap();
        let isom = pv.isometry().unwrap();
        assert!(isom.matrix().determinant() > 0.0);
        let left = isom.map(&PointedVector::origin().turn(FRAC_PI_2)).unwrap();
        let expected = pv.turn(FRAC_PI_2);
        assert!(angle_diff(left.alpha(), expected.alpha()) < 1e-10);
    }

    #[test]
    fn isometry_is_memoized() {
        let pv = PointedVector::new(0.1, 0.2, 0.3).unwrap();
        let a = pv.isometry().unwrap();
        let b = pv.isometry().unwrap();
        assert_eq!(a.matrix(), b.matrix());
    }
}
