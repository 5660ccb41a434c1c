use crate::buffer::OwnerSlice;
use crate::error::{MError, MResult};
use crate::{elem_count, Matrix, Scalar};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims2(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn elem_count(&self) -> usize {
        elem_count(self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn transposed(&self) -> Shape {
        Shape::new(self.cols, self.rows)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl<T: Scalar> Matrix<T> {
    pub(crate) fn check_same_shape<U: Scalar>(
        &self,
        other: &Matrix<U>,
        op: &'static str,
    ) -> MResult<()> {
        if self.shape() != other.shape() {
            log::debug!("{}: {} vs {}", op, self.shape(), other.shape());
            return Err(MError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
                op,
            });
        }
        Ok(())
    }

    pub(crate) fn check_square(&self, op: &'static str) -> MResult<()> {
        if !self.is_square() {
            log::debug!("{}: {} is not square", op, self.shape());
            return Err(MError::NotSquare {
                shape: self.shape(),
                op,
            });
        }
        Ok(())
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.resize(rows, self.cols)
    }

    pub fn set_cols(&mut self, cols: usize) {
        self.resize(self.rows, cols)
    }

    /// Changes the shape, keeping the top-left block both shapes share.
    ///
    /// Cells outside that block are zero. The new buffer is built in full
    /// before it replaces the old one.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.rows && cols == self.cols {
            return;
        }
        log::trace!("resize {} -> {}x{}", self.shape(), rows, cols);

        let mut data = OwnerSlice::from_elem(T::zero(), elem_count(rows, cols));
        let keep_rows = self.rows.min(rows);
        let keep_cols = self.cols.min(cols);
        {
            let src = self.as_slice();
            let dst = data.as_slice_mut();
            for r in 0..keep_rows {
                let s = r * self.cols;
                let d = r * cols;
                dst[d..d + keep_cols].copy_from_slice(&src[s..s + keep_cols]);
            }
        }
        self.replace_data(rows, cols, data);
    }

    /// New matrix with rows and columns exchanged; `self` is unchanged.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = self.shape().dims2();
        let mut out = Matrix::new(cols, rows);
        {
            let src = self.as_slice();
            let dst = out.as_mut_slice();
            for r in 0..rows {
                for c in 0..cols {
                    dst[c * rows + r] = src[r * cols + c];
                }
            }
        }
        out
    }

    pub fn transpose_in_place(&mut self) -> &mut Self {
        *self = self.transpose();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_shape() {
        let s = Shape::from((2, 3));
        assert_eq!(s.to_string(), "2x3");
        assert_eq!(s.elem_count(), 6);
        assert_eq!(s.transposed(), Shape::new(3, 2));
        assert!(!s.is_square());
    }

    #[test]
    fn test_resize_grow() {
        init();
        let mut m = matrix![[1, 2], [3, 4]];
        m.resize(3, 3);
        assert_eq!(
            m.to_nested_vec(),
            vec![vec![1, 2, 0], vec![3, 4, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn test_resize_shrink() {
        init();
        let mut m = Matrix::<f64>::identity(3, 3).unwrap();
        m.resize(2, 2);
        assert_eq!(m.to_nested_vec(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_set_rows_cols() {
        let mut m = matrix![[1, 2, 3], [4, 5, 6]];
        m.set_rows(1);
        assert_eq!(m.to_vec(), vec![1, 2, 3]);
        m.set_cols(4);
        assert_eq!(m.to_vec(), vec![1, 2, 3, 0]);
        m.set_rows(2);
        assert_eq!(m.to_nested_vec(), vec![vec![1, 2, 3, 0], vec![0, 0, 0, 0]]);
    }

    #[test]
    fn test_resize_noop_keeps_buffer() {
        let mut m = matrix![[1u8, 2], [3, 4]];
        let before = m.as_slice().as_ptr();
        m.resize(2, 2);
        assert_eq!(m.as_slice().as_ptr(), before);
    }

    #[test]
    fn test_resize_to_zero() {
        let mut m = matrix![[1, 2], [3, 4]];
        m.set_cols(0);
        assert_eq!(m.shape(), Shape::new(2, 0));
        assert!(m.data().is_none());
        m.set_cols(2);
        assert_eq!(m.to_vec(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_transpose() {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        let t = m.transpose();
        assert_eq!(t.shape(), Shape::new(3, 2));
        assert_eq!(t.to_nested_vec(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(m.shape(), Shape::new(2, 3));

        let mut m = m;
        m.transpose_in_place();
        assert_eq!(m.to_vec(), t.to_vec());
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Matrix::<i32>::new(2, 2);
        let b = Matrix::<f32>::new(2, 3);
        assert_eq!(
            a.check_same_shape(&b, "add"),
            Err(MError::ShapeMismatch {
                lhs: Shape::new(2, 2),
                rhs: Shape::new(2, 3),
                op: "add"
            })
        );
        assert!(b.check_square("to_identity").is_err());
    }
}
