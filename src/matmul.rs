use crate::error::{MError, MResult};
use crate::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    fn check_mul<U: Scalar>(&self, rhs: &Matrix<U>) -> MResult<()> {
        if self.cols != rhs.rows() {
            log::debug!("matmul: {} by {}", self.shape(), rhs.shape());
            return Err(MError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(())
    }

    /// Matrix product `self * rhs` as a new `rows x rhs.cols` matrix.
    ///
    /// `out(i, j)` is the dot product of row `i` of `self` with column `j`
    /// of `rhs`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> MResult<Matrix<T>> {
        self.check_mul(rhs)?;
        let (m, n) = self.shape().dims2();
        let p = rhs.cols();
        let mut out: Matrix<T> = Matrix::new(m, p);
        {
            let a = self.as_slice();
            let b = rhs.as_slice();
            let dst = out.as_mut_slice();
            // i-k-j order walks both `b` and `dst` along rows
            for i in 0..m {
                let dst_row = &mut dst[i * p..(i + 1) * p];
                for k in 0..n {
                    let aik = a[i * n + k];
                    let b_row = &b[k * p..(k + 1) * p];
                    for (d, &bkj) in dst_row.iter_mut().zip(b_row) {
                        *d = d._add(aik._mul(bkj));
                    }
                }
            }
        }
        Ok(out)
    }

    /// Replaces `self` with `self * rhs`.
    pub fn mul_matrix(&mut self, rhs: &Matrix<T>) -> MResult<()> {
        let out = self.matmul(rhs)?;
        log::trace!("mul_matrix {} -> {}", self.shape(), out.shape());
        *self = out;
        Ok(())
    }

    /// [`mul_matrix`](Matrix::mul_matrix) with a right-hand side of another
    /// scalar kind, converted in full before the product is computed.
    pub fn mul_matrix_from<U: Scalar>(&mut self, rhs: &Matrix<U>) -> MResult<()> {
        self.check_mul(rhs)?;
        let rhs = rhs.try_convert_to::<T>()?;
        self.mul_matrix(&rhs)
    }
}

impl<T: Scalar> std::ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = MResult<Matrix<T>>;
    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<T: Scalar> std::ops::Mul<Matrix<T>> for &Matrix<T> {
    type Output = MResult<Matrix<T>>;
    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        self.matmul(&rhs)
    }
}

impl<T: Scalar> std::ops::Mul<&Matrix<T>> for Matrix<T> {
    type Output = MResult<Matrix<T>>;
    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<T: Scalar> std::ops::Mul<Matrix<T>> for Matrix<T> {
    type Output = MResult<Matrix<T>>;
    fn mul(self, rhs: Matrix<T>) -> Self::Output {
        self.matmul(&rhs)
    }
}
