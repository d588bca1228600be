use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("coordinate ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    CoordOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("buffer of length {len} does not hold a {rows}x{cols} matrix")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
