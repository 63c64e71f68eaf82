//! Hyperbolic plane geometry in the Klein and Poincaré disk models.

pub mod cache;
pub mod error;
pub mod euclidean;
pub mod hyperbolic;
pub mod math;
pub mod operations;
pub mod render;
pub mod tessellation;

pub use error::{HyperbolicError, Result};
