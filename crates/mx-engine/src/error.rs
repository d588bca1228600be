use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("multiply dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("destination is {rows}x{cols} but the product is {expected_rows}x{expected_cols}")]
    DestinationMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
    #[error("matrix error: {0}")]
    Matrix(#[from] mx_matrix::MatrixError),
    #[error("accelerator '{name}' failed: {reason}")]
    Accelerator { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
