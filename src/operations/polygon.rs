use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

use tracing::debug;

use crate::error::{ConstructionError, GeometryError, Result};
use crate::hyperbolic::{Point, PointedVector};
use crate::math::root_find::{brent, SearchBracket};
use crate::render::{HyperbolicContext, Renderer};

fn check_sides(n: usize) -> Result<()> {
    if n < 3 {
        return Err(ConstructionError::InvalidSideCount(n).into());
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn central_angle(n: usize) -> f64 {
    TAU / n as f64
}

/// Two adjacent vertices of the regular `n`-gon with circumradius `radius`
/// centered at the origin.
fn adjacent_vertices(n: usize, radius: f64) -> Result<(PointedVector, PointedVector)> {
    check_sides(n)?;
    let origin = PointedVector::origin();
    let first = origin.advance(radius)?;
    let second = origin.turn(central_angle(n)).advance(radius)?;
    Ok((first, second))
}

/// Interior angle of the regular `n`-gon with circumradius `radius`.
///
/// Twice the angle, at a vertex, between the ray back to the center and
/// the side to the next vertex.
///
/// # Errors
///
/// Returns an error if `n < 3` or the vertices cannot be represented.
pub fn angle_from_radius(n: usize, radius: f64) -> Result<f64> {
    let (first, second) = adjacent_vertices(n, radius)?;
    let ray = PointedVector::origin().to_line().reverse();
    let side = first
        .point()
        .line_to(second.point())
        .ok_or_else(|| GeometryError::Degenerate("polygon vertices coincide".into()))?;
    Ok(2.0 * ray.angle_with(&side, first.point()))
}

/// Side length of the regular `n`-gon with circumradius `radius`.
///
/// # Errors
///
/// Returns an error if `n < 3` or the vertices cannot be represented.
pub fn side_from_radius(n: usize, radius: f64) -> Result<f64> {
    let (first, second) = adjacent_vertices(n, radius)?;
    Ok(first.point().distance(second.point()))
}

/// Inradius of the regular `n`-gon with circumradius `radius`: the
/// distance from the center to the midpoint of a side.
///
/// # Errors
///
/// Returns an error if `n < 3` or the vertices cannot be represented.
pub fn inradius_from_radius(n: usize, radius: f64) -> Result<f64> {
    let side = side_from_radius(n, radius)?;
    // Right triangle formed by the center, a vertex and the side midpoint.
    Ok((radius.cosh() / (0.5 * side).cosh()).acosh())
}

/// Builds regular polygons from a side count plus a side length, an
/// interior angle or a circumradius.
///
/// Inverting side and angle for the circumradius needs a root search; the
/// results are memoized per builder, so one builder should serve one
/// construction (for instance one tessellation).
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    bracket: SearchBracket,
    radius_from_side: HashMap<(usize, u64), f64>,
    radius_from_angle: HashMap<(usize, u64), f64>,
}

impl PolygonBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom search interval for the radius inversion.
    #[must_use]
    pub fn with_bracket(bracket: SearchBracket) -> Self {
        Self {
            bracket,
            ..Self::default()
        }
    }

    /// Circumradius of the regular `n`-gon with side length `side`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::RadiusNotFound`] if no radius in the
    /// search interval produces `side`.
    pub fn radius_from_side(&mut self, n: usize, side: f64) -> Result<f64> {
        check_sides(n)?;
        let key = (n, side.to_bits());
        if let Some(&radius) = self.radius_from_side.get(&key) {
            debug!(n, side, radius, "radius-from-side cache hit");
            return Ok(radius);
        }
        let radius = brent(
            |r| side_from_radius(n, r).map_or(f64::NAN, |s| s - side),
            &self.bracket,
        )
        .ok_or(ConstructionError::RadiusNotFound { sides: n, target: side })?;
        self.radius_from_side.insert(key, radius);
        Ok(radius)
    }

    /// Circumradius of the regular `n`-gon with interior angle `angle`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::RadiusNotFound`] if no radius in the
    /// search interval produces `angle`; in particular for angles of
    /// Euclidean or spherical polygons, `angle >= (n - 2) * pi / n`.
    pub fn radius_from_angle(&mut self, n: usize, angle: f64) -> Result<f64> {
        check_sides(n)?;
        let key = (n, angle.to_bits());
        if let Some(&radius) = self.radius_from_angle.get(&key) {
            debug!(n, angle, radius, "radius-from-angle cache hit");
            return Ok(radius);
        }
        let radius = brent(
            |r| angle_from_radius(n, r).map_or(f64::NAN, |a| a - angle),
            &self.bracket,
        )
        .ok_or(ConstructionError::RadiusNotFound { sides: n, target: angle })?;
        self.radius_from_angle.insert(key, radius);
        Ok(radius)
    }

    /// Forgets every memoized radius.
    pub fn flush_caches(&mut self) {
        self.radius_from_side.clear();
        self.radius_from_angle.clear();
    }

    /// Walks the regular `n`-gon with side length `side` from `pv`.
    ///
    /// Returns one frame per vertex, at the vertex and heading back along
    /// the side just walked. The last frame sits at `pv`'s position.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius search fails or a vertex cannot be
    /// represented.
    pub fn build_with_side(&mut self, n: usize, side: f64, pv: &PointedVector) -> Result<Vec<PointedVector>> {
        let radius = self.radius_from_side(n, side)?;
        let angle = angle_from_radius(n, radius)?;
        walk(n, side, angle, pv)
    }

    /// Walks the regular `n`-gon with interior angle `angle` from `pv`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius search fails or a vertex cannot be
    /// represented.
    pub fn build_with_angle(&mut self, n: usize, angle: f64, pv: &PointedVector) -> Result<Vec<PointedVector>> {
        let radius = self.radius_from_angle(n, angle)?;
        let side = side_from_radius(n, radius)?;
        walk(n, side, angle, pv)
    }

    /// Vertices of the regular `n`-gon centered at `pv` with circumradius
    /// `radius`, the first one straight ahead of `pv`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 3` or a vertex cannot be represented.
    pub fn build_with_center(&self, n: usize, radius: f64, pv: &PointedVector) -> Result<Vec<Point>> {
        check_sides(n)?;
        let step = central_angle(n);
        (0..n)
            .map(|k| {
                #[allow(clippy::cast_precision_loss)]
                let turn = step * k as f64;
                pv.turn(turn).advance(radius).map(|v| v.to_point())
            })
            .collect()
    }

    /// Center of the polygon [`PolygonBuilder::build_with_side`] would walk
    /// from `pv`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius search fails.
    pub fn center_with_side(&mut self, n: usize, side: f64, pv: &PointedVector) -> Result<Point> {
        let radius = self.radius_from_side(n, side)?;
        let angle = angle_from_radius(n, radius)?;
        Ok(pv.turn(0.5 * angle).advance(radius)?.to_point())
    }

    /// Center of the polygon [`PolygonBuilder::build_with_angle`] would walk
    /// from `pv`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius search fails.
    pub fn center_with_angle(&mut self, n: usize, angle: f64, pv: &PointedVector) -> Result<Point> {
        let radius = self.radius_from_angle(n, angle)?;
        Ok(pv.turn(0.5 * angle).advance(radius)?.to_point())
    }
}

/// Advance by `side`, record the vertex, turn by the exterior angle; `n` times.
fn walk(n: usize, side: f64, angle: f64, pv: &PointedVector) -> Result<Vec<PointedVector>> {
    let mut frames = Vec::with_capacity(n);
    let mut pv = pv.clone();
    for _ in 0..n {
        pv = pv.advance(side)?;
        frames.push(pv.reverse());
        pv = pv.turn(PI - angle);
    }
    Ok(frames)
}

/// Strokes a closed polygon side by side.
///
/// # Errors
///
/// Returns an error if two consecutive vertices coincide or the view
/// cannot map a side.
pub fn draw_polygon<R: Renderer + ?Sized>(ctx: &mut HyperbolicContext<'_, R>, points: &[Point]) -> Result<()> {
    for (i, point) in points.iter().enumerate() {
        let next = &points[(i + 1) % points.len()];
        ctx.draw(&point.segment_to(next)?)?;
    }
    Ok(())
}

/// Strokes every polygon in `polygons`.
///
/// # Errors
///
/// See [`draw_polygon`].
pub fn draw_polygons<R: Renderer + ?Sized>(ctx: &mut HyperbolicContext<'_, R>, polygons: &[Vec<Point>]) -> Result<()> {
    for points in polygons {
        draw_polygon(ctx, points)?;
    }
    Ok(())
}
