//! Error types for field and matrix operations.

/// Errors that can occur in field construction or matrix algebra.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// No field table exists for this exponent.
    #[error("unsupported field degree {0}, expected 1..=8")]
    UnsupportedDegree(u8),

    /// Operand shapes are incompatible.
    #[error("dimension mismatch: {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// Only square matrices can be inverted.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Elimination found no usable pivot in this column.
    #[error("matrix is singular (no pivot in column {column})")]
    Singular {
        /// First column without a pivot.
        column: usize,
    },
}
