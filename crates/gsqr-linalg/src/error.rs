use thiserror::Error;

/// Errors raised by the vector, matrix and QR routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand dimensions are incompatible for the requested operation.
    #[error("shape mismatch in {op}: lhs has shape {lhs:?}, rhs has shape {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// A flat buffer does not fill the requested shape.
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    InvalidShape { rows: usize, cols: usize, len: usize },

    #[error("{op} requires a non-empty operand")]
    Empty { op: &'static str },

    /// Gram-Schmidt produced a zero or negligible column: the input columns
    /// are linearly dependent.
    #[error("rank deficient: column {column} vanishes during orthogonalization (norm {norm:e})")]
    RankDeficient { column: usize, norm: f64 },

    /// Back substitution hit a zero or negligible diagonal entry of R.
    #[error("singular system: pivot {index} is zero or too small (value {value:e})")]
    SingularPivot { index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, LinalgError>;
