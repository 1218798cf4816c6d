use thiserror::Error;

/// Top-level error type for the curvelab engine.
#[derive(Debug, Error)]
pub enum CurvelabError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when a collaborator hands the engine input outside its contract.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("unknown trigonometric function: {0:?} (expected \"sin\" or \"cos\")")]
    UnknownTrigFunction(String),

    #[error("unknown curve family: {0:?}")]
    UnknownFamily(String),

    #[error("polynomial degree {degree} is out of range [{min}, {max}]")]
    DegreeOutOfRange {
        degree: usize,
        min: usize,
        max: usize,
    },

    #[error("coefficient sequence is empty")]
    EmptyCoefficients,
}

/// Errors related to geometric property computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`CurvelabError`].
pub type Result<T> = std::result::Result<T, CurvelabError>;
