use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("non-uniform spacing at node {idx}: expected step {expected}, got {got}")]
    NonUniformSpacing { idx: usize, expected: f64, got: f64 },

    #[error("{algorithm} interpolation requires at least {need} nodes, got {got}")]
    InsufficientNodes { algorithm: &'static str, got: usize, need: usize },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid step_rtol {got} must be finite and >= 0")]
    InvalidStepTol { got: f64 },

    #[error("invalid sample range [{left}, {right}] with {points} segments")]
    InvalidSampleRange { left: f64, right: f64, points: usize },

    #[error("unknown interpolation algorithm `{name}`")]
    UnknownAlgorithm { name: String },
}
