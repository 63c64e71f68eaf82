use std::f64::consts::FRAC_PI_2;

use crate::error::{ConstructionError, Result};
use crate::hyperbolic::{Line, Point, PointedVector, Segment};
use crate::render::{Color, HyperbolicContext, Renderer};

/// Side length of the right-angled hexagon with all six sides equal.
pub const EQUILATERAL_HEXAGON_SIDE: f64 = 1.316_957_896_924_816_6;

/// One color per hexagon side, in walk order.
pub const HEXAGON_COLORS: [Color; 6] = [
    Color::new(0.607_843_137_254_901_9, 0.0, 0.0),
    Color::new(0.607_843_137_254_901_9, 0.607_843_137_254_901_9, 0.0),
    Color::new(0.0, 0.607_843_137_254_901_9, 0.0),
    Color::new(0.0, 0.607_843_137_254_901_9, 0.607_843_137_254_901_9),
    Color::new(0.0, 0.0, 0.607_843_137_254_901_9),
    Color::new(0.607_843_137_254_901_9, 0.0, 0.607_843_137_254_901_9),
];

/// The side between `x` and `y` opposite to `z`.
fn opposite_side(x: f64, y: f64, z: f64) -> f64 {
    ((x.cosh() * y.cosh() + z.cosh()) / (x.sinh() * y.sinh())).acosh()
}

/// All six sides of the right-angled hexagon with alternate sides `a`, `b`
/// and `c`, in walk order `[a, _, b, _, c, _]`.
///
/// # Errors
///
/// Returns an error unless all three lengths are finite and positive.
pub fn hexagon_sides(a: f64, b: f64, c: f64) -> Result<[f64; 6]> {
    if [a, b, c].iter().any(|s| !s.is_finite() || *s <= 0.0) {
        return Err(ConstructionError::InvalidParameters(format!(
            "hexagon sides must be finite and positive, got ({a}, {b}, {c})"
        ))
        .into());
    }
    Ok([
        a,
        opposite_side(a, b, c),
        b,
        opposite_side(b, c, a),
        c,
        opposite_side(c, a, b),
    ])
}

/// A right-angled hexagon walked counterclockwise from a frame.
#[derive(Debug, Clone)]
pub struct RightAngledHexagon {
    sides: [f64; 6],
    vertices: Vec<Point>,
    lines: Vec<Line>,
    segments: Vec<Segment<Point>>,
}

impl RightAngledHexagon {
    /// Starts at `pv` and walks the first side along its direction.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid side lengths or if a vertex cannot be
    /// represented.
    pub fn build(pv: &PointedVector, a: f64, b: f64, c: f64) -> Result<Self> {
        let sides = hexagon_sides(a, b, c)?;
        let mut vertices = Vec::with_capacity(6);
        let mut lines = Vec::with_capacity(6);
        let mut segments = Vec::with_capacity(6);

        let mut pv = pv.clone();
        for side in sides {
            let start = pv.to_point();
            lines.push(pv.to_line());
            pv = pv.advance(side)?.turn(FRAC_PI_2);
            segments.push(start.segment_to(pv.point())?);
            vertices.push(start);
        }

        Ok(Self {
            sides,
            vertices,
            lines,
            segments,
        })
    }

    #[must_use]
    pub fn sides(&self) -> &[f64; 6] {
        &self.sides
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The complete geodesic carrying each side.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment<Point>] {
        &self.segments
    }

    /// Draws each side's geodesic in its palette color, then the vertices
    /// in black.
    ///
    /// # Errors
    ///
    /// Returns an error if the view cannot map an element.
    pub fn draw<R: Renderer + ?Sized>(&self, ctx: &mut HyperbolicContext<'_, R>) -> Result<()> {
        for (line, color) in self.lines.iter().zip(HEXAGON_COLORS) {
            ctx.set_color(color);
            ctx.draw(line)?;
        }
        ctx.set_color(Color::BLACK);
        for vertex in &self.vertices {
            ctx.draw(vertex)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::{Command, CommandRecorder};
    use approx::assert_abs_diff_eq;

    #[test]
    fn equilateral_side_is_acosh_two() {
        assert_abs_diff_eq!(EQUILATERAL_HEXAGON_SIDE, 2.0_f64.acosh(), epsilon = 1e-15);
    }

    #[test]
    fn equilateral_hexagon_has_equal_sides() {
        let s = EQUILATERAL_HEXAGON_SIDE;
        for side in hexagon_sides(s, s, s).unwrap() {
            assert_abs_diff_eq!(side, s, epsilon = 1e-12);
        }
    }

    #[test]
    fn invalid_sides_are_rejected() {
        assert!(hexagon_sides(0.0, 1.0, 1.0).is_err());
        assert!(hexagon_sides(1.0, f64::NAN, 1.0).is_err());
        assert!(hexagon_sides(1.0, 1.0, -2.0).is_err());
    }

    #[test]
    fn walk_closes_with_right_angles() {
        let start = PointedVector::new(0.1, 0.2, 0.3).unwrap();
        let hexagon = RightAngledHexagon::build(&start, 1.0, 1.5, 0.7).unwrap();
        assert_eq!(hexagon.vertices().len(), 6);

        // Each segment ends where the next one starts, and the last one
        // returns to the starting vertex.
        for (i, segment) in hexagon.segments().iter().enumerate() {
            let next = &hexagon.vertices()[(i + 1) % 6];
            assert_abs_diff_eq!(segment.p2().x(), next.x(), epsilon = 1e-9);
            assert_abs_diff_eq!(segment.p2().y(), next.y(), epsilon = 1e-9);
            assert_abs_diff_eq!(segment.length(), hexagon.sides()[i], epsilon = 1e-8);
        }
    }

    #[test]
    fn consecutive_side_lines_are_perpendicular() {
        let hexagon = RightAngledHexagon::build(&PointedVector::origin(), 1.2, 0.9, 1.4).unwrap();
        for i in 0..6 {
            let corner = &hexagon.vertices()[(i + 1) % 6];
            let here = &hexagon.lines()[i];
            let next = &hexagon.lines()[(i + 1) % 6];
            assert_abs_diff_eq!(here.angle_with(next, corner), FRAC_PI_2, epsilon = 1e-8);
        }
    }

    #[test]
    fn draw_colors_each_side() {
        let s = EQUILATERAL_HEXAGON_SIDE;
        let hexagon = RightAngledHexagon::build(&PointedVector::origin(), s, s, s).unwrap();
        let mut rec = CommandRecorder::new();
        hexagon.draw(&mut HyperbolicContext::new(&mut rec)).unwrap();
        assert_eq!(rec.count(|c| matches!(c, Command::SetColor { .. })), 7);
        assert_eq!(rec.count(|c| matches!(c, Command::Stroke)), 6);
        assert_eq!(rec.count(|c| matches!(c, Command::Fill)), 6);
    }
}
