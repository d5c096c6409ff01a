use thiserror::Error;

use super::Stage;

/// Errors that can occur during Gaussian elimination.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("coefficient matrix is empty")]
    Empty,

    #[error("coefficient matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("right-hand side has {len} entries but the matrix has {rows} rows")]
    DimensionMismatch { rows: usize, len: usize },

    /// No pivot candidate exceeded the threshold at `stage`.
    ///
    /// `stages` holds every stage completed before the failure.
    #[error("matrix is singular: no usable pivot at stage {stage}")]
    Singular { stage: usize, stages: Vec<Stage> },
}
