//! Constructions built on the hyperbolic kernel.

pub mod hexagon;
pub mod polygon;

pub use hexagon::{hexagon_sides, RightAngledHexagon, EQUILATERAL_HEXAGON_SIDE, HEXAGON_COLORS};
pub use polygon::{
    angle_from_radius, draw_polygon, draw_polygons, inradius_from_radius, side_from_radius, PolygonBuilder,
};
