use std::cell::OnceCell;

use crate::error::{GeometryError, Result};
use crate::euclidean::EuPoint;
use crate::math::Matrix3;

use super::{Line, Point, PointedVector, Transform};

/// A projective transform of the Klein disk, acting on homogeneous
/// coordinates `(x, y, 1)`.
///
/// The matrix entries `A..I` map `(x, y)` to
/// `((Ax + By + C) / (Gx + Hy + I), (Dx + Ey + F) / (Gx + Hy + I))`.
/// The inverse is computed once and linked back, so inverting an inverse
/// returns the original matrix without recomputation.
#[derive(Debug, Clone)]
pub struct Isometry {
    matrix: Matrix3,
    inverse: OnceCell<Matrix3>,
}

impl Isometry {
    /// Wraps a projective matrix. The caller is responsible for the matrix
    /// preserving the unit disk.
    #[must_use]
    pub fn from_matrix(matrix: Matrix3) -> Self {
        Self {
            matrix,
            inverse: OnceCell::new(),
        }
    }

    /// Builds the transform from its entries in row-major order `A..I`.
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
    pub fn from_entries(
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
        g: f64,
        h: f64,
        i: f64,
    ) -> Self {
        Self::from_matrix(Matrix3::new(a, b, c, d, e, f, g, h, i))
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::from_matrix(Matrix3::identity())
    }

    /// The hyperbolic translation taking the origin to `point` along the
    /// diameter through it (a Lorentz boost in homogeneous coordinates).
    #[must_use]
    #[rustfmt::skip]
    pub fn boost(point: &Point) -> Self {
        let (px, py) = (point.x(), point.y());
        let gamma = 1.0 / (1.0 - px * px - py * py).sqrt();
        // (gamma - 1) / |p|^2, written so that it stays finite at the origin.
        let k = gamma * gamma / (gamma + 1.0);
        Self::from_entries(
            1.0 + k * px * px, k * px * py,       gamma * px,
            k * px * py,       1.0 + k * py * py, gamma * py,
            gamma * px,        gamma * py,        gamma,
        )
    }

    /// Rotation about the origin by `alpha`.
    #[must_use]
    pub fn origin_rotation(alpha: f64) -> Self {
        let (s, c) = alpha.sin_cos();
        Self::from_entries(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// The translation along the geodesic through `(x1, y1)` and `(x2, y2)`
    /// taking the first point to the second.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is outside the disk.
    pub fn translation(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        let from = EuPoint::new(x1, y1);
        let to = EuPoint::new(x2, y2);
        if from == to {
            Point::new(x1, y1)?;
            return Ok(Self::identity());
        }
        // Chords are straight, so both frames share the Euclidean direction.
        let alpha = from.angle_to(&to);
        let start = PointedVector::new(x1, y1, alpha)?;
        let end = PointedVector::new(x2, y2, alpha)?;
        Self::frame_to_frame(&start, &end)
    }

    /// Rotation by hyperbolic angle `alpha` about `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is outside the disk.
    pub fn rotation(x: f64, y: f64, alpha: f64) -> Result<Self> {
        let start = PointedVector::new(x, y, 0.0)?;
        let end = start.turn(alpha);
        Self::frame_to_frame(&start, &end)
    }

    /// Reflection across a geodesic.
    ///
    /// # Errors
    ///
    /// Returns an error if the geodesic's midpoint cannot be represented.
    pub fn reflection(line: &Line) -> Result<Self> {
        let direction = line.direction();
        let frame = PointedVector::from_point(line.ref_point()?, direction.y.atan2(direction.x));
        let to_frame = frame.isometry()?;
        let flip = Self::from_entries(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0);
        Ok(to_frame.compose(&flip).compose(&to_frame.inverse()?))
    }

    /// The direct isometry taking frame `from` onto frame `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if either frame isometry is singular.
    pub fn frame_to_frame(from: &PointedVector, to: &PointedVector) -> Result<Self> {
        Ok(to.isometry()?.compose(&from.isometry()?.inverse()?))
    }

    /// Re-projects an accumulated product of isometries onto the exact
    /// boost-then-rotation form.
    ///
    /// Long products drift away from the Lorentz group. The result keeps
    /// the image of the origin and the rotation part of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image of the origin is not inside the disk.
    pub fn rectified(&self) -> Result<Self> {
        let m = &self.matrix;
        let w = m[(2, 2)];
        if w == 0.0 {
            return Err(GeometryError::SingularTransform.into());
        }
        let (cx, cy) = (m[(0, 2)] / w, m[(1, 2)] / w);
        let center = Point::new(cx, cy)?;
        let back = Self::boost(&Point::new(-cx, -cy)?);
        let r = back.matrix * m;
        let alpha = (r[(1, 0)] - r[(0, 1)]).atan2(r[(0, 0)] + r[(1, 1)]);
        Ok(Self::boost(&center).compose(&Self::origin_rotation(alpha)))
    }

    /// The underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// `self` after `other`: applies `other` first.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self::from_matrix(self.matrix * other.matrix)
    }

    /// The inverse transform, linked back to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::SingularTransform`] if the matrix has no
    /// inverse.
    pub fn inverse(&self) -> Result<Self> {
        let inverse = match self.inverse.get() {
            Some(m) => *m,
            None => {
                let m = self
                    .matrix
                    .try_inverse()
                    .ok_or(GeometryError::SingularTransform)?;
                let _ = self.inverse.set(m);
                m
            }
        };
        Ok(Self {
            matrix: inverse,
            inverse: OnceCell::from(self.matrix),
        })
    }

    /// Applies the projective map to raw Klein coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::SingularTransform`] if the homogeneous
    /// coordinate vanishes.
    pub fn apply(&self, p: &EuPoint) -> Result<EuPoint> {
        let m = &self.matrix;
        let w = m[(2, 0)] * p.x + m[(2, 1)] * p.y + m[(2, 2)];
        if w == 0.0 {
            return Err(GeometryError::SingularTransform.into());
        }
        Ok(EuPoint::new(
            (m[(0, 0)] * p.x + m[(0, 1)] * p.y + m[(0, 2)]) / w,
            (m[(1, 0)] * p.x + m[(1, 1)] * p.y + m[(1, 2)]) / w,
        ))
    }

    /// Maps any disk entity, preserving its kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be represented.
    pub fn map<T: Transform>(&self, target: &T) -> Result<T> {
        target.transform(self)
    }
}

impl Default for Isometry {
    fn default() -> Self {
        Self::identity()
    }
}
