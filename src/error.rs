use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrustError {
    #[error("Invalid dimensions: {rows}x{cols} (rows and columns must be positive)")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Matrix too large: {elements} elements, limit is {limit}")]
    TooLarge { elements: usize, limit: usize },
    #[error("Index out of bounds: ({row}, {col}) for matrix of shape {rows}x{cols}")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("Dimension mismatch: {}x{} and {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("Matrix must be square for this operation, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("Matrix is singular")]
    Singular,
    #[error("Invalid value range: [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },
    #[error("Invalid normal distribution: mean {mean}, standard deviation {std_dev}")]
    InvalidDistribution { mean: f64, std_dev: f64 },
    #[error("Data length mismatch: expected {expected} elements, got {actual}")]
    DataLength { expected: usize, actual: usize },
}

impl MatrustError {
    pub(crate) fn dimension_mismatch(lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        MatrustError::DimensionMismatch { lhs, rhs }
    }

    pub(crate) fn not_square(shape: (usize, usize)) -> Self {
        MatrustError::NotSquare {
            rows: shape.0,
            cols: shape.1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrustError>;
