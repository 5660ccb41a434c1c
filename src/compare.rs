use crate::error::MResult;
use crate::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Element-wise comparison within `T::EPSILON`.
    ///
    /// Differently shaped operands are an error rather than unequal.
    pub fn equal_to(&self, rhs: &Matrix<T>) -> MResult<bool> {
        self.check_same_shape(rhs, "equal_to")?;
        Ok(self.iter().zip(rhs.iter()).all(|(a, b)| a.approx_eq(*b)))
    }
}

/// `==` is [`Matrix::equal_to`], with a shape mismatch reading as `false`.
impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        matches!(self.equal_to(other), Ok(true))
    }
}
