use crate::scalar::DType;
use crate::shape::Shape;
use thiserror::Error;

pub type MResult<T> = Result<T, MError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MError {
    #[error("index ({row}, {col}) out of range for {shape} matrix")]
    IndexOutOfRange { row: usize, col: usize, shape: Shape },
    #[error("shape mismatch: {lhs} vs {rhs}, op: {op}")]
    ShapeMismatch {
        lhs: Shape,
        rhs: Shape,
        op: &'static str,
    },
    #[error("dimension mismatch: cannot multiply {lhs} by {rhs}")]
    DimensionMismatch { lhs: Shape, rhs: Shape },
    #[error("{shape} matrix is not square, op: {op}")]
    NotSquare { shape: Shape, op: &'static str },
    #[error("division by zero on {0:?} matrix")]
    DivideByZero(DType),
    #[error("value of type {from:?} is not convertible to {to:?}")]
    TypeNotConvertible { from: DType, to: DType },
    #[error("buffer of length {len} does not fit a {rows}x{cols} matrix")]
    BufferLength { rows: usize, cols: usize, len: usize },
}

impl From<MError> for String {
    fn from(e: MError) -> Self {
        format!("{}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = MError::IndexOutOfRange {
            row: 3,
            col: 1,
            shape: Shape::new(2, 2),
        };
        assert_eq!(e.to_string(), "index (3, 1) out of range for 2x2 matrix");

        let s: String = MError::DivideByZero(DType::I32).into();
        assert_eq!(s, "division by zero on I32 matrix");
    }
}
