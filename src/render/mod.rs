//! The drawing surface consumed by the kernel.
//!
//! The kernel never rasterizes anything itself; every entity draws through
//! a [`Renderer`] held by a [`HyperbolicContext`], after being carried by
//! the context's view isometry and projected to the selected disk model.

mod draw;
mod recorder;

pub use recorder::{Command, CommandRecorder};

use std::f64::consts::TAU;

use crate::error::Result;
use crate::euclidean::EuPoint;
use crate::hyperbolic::{Isometry, KleinCoords};

/// A cairo-like path renderer working in disk coordinates.
pub trait Renderer {
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    /// Adds a circular arc from angle `a0` to `a1`, counterclockwise.
    fn arc(&mut self, cx: f64, cy: f64, r: f64, a0: f64, a1: f64);
    fn fill(&mut self);
    fn set_source_color(&mut self, r: f64, g: f64, b: f64);
    /// Pushes the graphics state, including the clip region.
    fn save(&mut self);
    fn restore(&mut self);
    /// Intersects the clip region with the current path.
    fn clip(&mut self);
}

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }
}

/// Which disk model coordinates are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Klein,
    Poincare,
}

/// Size parameters for drawn marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    /// Radius of the dot drawn for a point, in disk units.
    pub point_radius: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            point_radius: 0.015,
        }
    }
}

/// Caller-owned drawing state: the renderer, the current view isometry and
/// the model selector.
pub struct HyperbolicContext<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    view: Isometry,
    model: Model,
    style: DrawStyle,
}

impl<'a, R: Renderer + ?Sized> HyperbolicContext<'a, R> {
    /// Creates a Klein-model context with the identity view.
    pub fn new(renderer: &'a mut R) -> Self {
        Self {
            renderer,
            view: Isometry::identity(),
            model: Model::default(),
            style: DrawStyle::default(),
        }
    }

    #[must_use]
    pub fn with_view(mut self, view: Isometry) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn view(&self) -> &Isometry {
        &self.view
    }

    /// Replaces the view, e.g. after a mouse drag composed a new isometry.
    pub fn set_view(&mut self, view: Isometry) {
        self.view = view;
    }

    #[must_use]
    pub fn model(&self) -> Model {
        self.model
    }

    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    #[must_use]
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    pub fn renderer(&mut self) -> &mut R {
        &mut *self.renderer
    }

    pub fn set_color(&mut self, color: Color) {
        self.renderer.set_source_color(color.r, color.g, color.b);
    }

    /// Screen-space position of an already view-mapped entity.
    pub fn project<P: KleinCoords>(&self, p: &P) -> EuPoint {
        match self.model {
            Model::Klein => p.klein(),
            Model::Poincare => p.poincare(),
        }
    }

    /// Draws any drawable entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity cannot be carried by the view.
    pub fn draw<D: Draw + ?Sized>(&mut self, item: &D) -> Result<()> {
        item.draw(self)
    }

    /// Strokes the boundary circle.
    pub fn draw_boundary(&mut self) {
        self.renderer.move_to(1.0, 0.0);
        self.renderer.arc(0.0, 0.0, 1.0, 0.0, TAU);
        self.renderer.stroke();
    }

    /// Restricts drawing to the unit disk for the duration of `f`.
    pub(crate) fn clipped_to_disk<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.renderer.save();
        self.renderer.arc(0.0, 0.0, 1.0, 0.0, TAU);
        self.renderer.clip();
        let out = f(self);
        self.renderer.restore();
        out
    }
}

/// Entities that can emit themselves through a [`HyperbolicContext`].
pub trait Draw {
    /// Draws `self` after carrying it by the context's view.
    ///
    /// # Errors
    ///
    /// Returns an error if the view cannot map the entity.
    fn draw<R: Renderer + ?Sized>(&self, ctx: &mut HyperbolicContext<'_, R>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_colors_are_scaled() {
        let c = Color::from_rgb8(255, 0, 51);
        assert!((c.r - 1.0).abs() < f64::EPSILON);
        assert!(c.g.abs() < f64::EPSILON);
        assert!((c.b - 0.2).abs() < 1e-12);
    }

    #[test]
    fn boundary_is_a_full_arc() {
        let mut recorder = CommandRecorder::default();
        HyperbolicContext::new(&mut recorder).draw_boundary();
        assert!(matches!(
            recorder.commands()[1],
            Command::Arc { r, .. } if (r - 1.0).abs() < f64::EPSILON
        ));
        assert_eq!(recorder.commands().last(), Some(&Command::Stroke));
    }
}
