use thiserror::Error;

/// Top-level error type for the hyperdisk geometry kernel.
#[derive(Debug, Error)]
pub enum HyperbolicError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point ({x}, {y}) is not inside the open unit disk")]
    OutsideDisk { x: f64, y: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("projective transform is singular")]
    SingularTransform,
}

/// Errors related to polygon, hexagon and tessellation construction.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("could not compute radius for {sides}-gon with target {target}")]
    RadiusNotFound { sides: usize, target: f64 },

    #[error("a polygon needs at least 3 sides, got {0}")]
    InvalidSideCount(usize),

    #[error("invalid construction parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`HyperbolicError`].
pub type Result<T> = std::result::Result<T, HyperbolicError>;
