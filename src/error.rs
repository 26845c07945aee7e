use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    #[error("Not invertible, free columns: {frees:?}")]
    Singular { frees: Vec<usize> },
}
