use crate::buffer::OwnerSlice;
use crate::error::{MError, MResult};
use crate::{elem_count, Matrix, Scalar};
use num_traits::AsPrimitive;

impl<T: Scalar> Matrix<T> {
    /// Builds a `rows x cols` matrix over a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, v: Vec<T>) -> MResult<Self> {
        if v.len() != elem_count(rows, cols) {
            return Err(MError::BufferLength {
                rows,
                cols,
                len: v.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: OwnerSlice::from_vec(v),
        })
    }

    /// Builds a matrix from equally long rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> MResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut v = Vec::with_capacity(elem_count(n_rows, n_cols));
        for r in rows {
            if r.len() != n_cols {
                return Err(MError::BufferLength {
                    rows: n_rows,
                    cols: n_cols,
                    len: r.len(),
                });
            }
            v.extend(r);
        }
        Self::from_vec(n_rows, n_cols, v)
    }

    /// Element-wise copy of a matrix of another scalar kind, with `as`
    /// semantics (truncation toward zero, saturation at the bounds).
    pub fn cast_from<U>(other: &Matrix<U>) -> Self
    where
        U: Scalar + AsPrimitive<T>,
    {
        Self {
            rows: other.rows(),
            cols: other.cols(),
            data: OwnerSlice::from_vec(other.iter().map(|x| x.as_()).collect()),
        }
    }

    pub fn convert_to<U>(&self) -> Matrix<U>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        Matrix::cast_from(self)
    }

    /// Value-preserving conversion; fails if any element has no
    /// representation in `U`.
    pub fn try_convert_to<U: Scalar>(&self) -> MResult<Matrix<U>> {
        let v = self
            .iter()
            .map(|&x| U::try_cast(x))
            .collect::<Option<Vec<U>>>()
            .ok_or(MError::TypeNotConvertible {
                from: T::DTYPE,
                to: U::DTYPE,
            })?;
        Matrix::from_vec(self.rows, self.cols, v)
    }

    /// Row-major copy of all elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    pub fn to_nested_vec(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.as_slice().chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T: Scalar, const N: usize> From<Vec<[T; N]>> for Matrix<T> {
    fn from(xs: Vec<[T; N]>) -> Self {
        let rows = xs.len();
        let v: Vec<T> = xs.into_iter().flatten().collect();
        Self {
            rows,
            cols: N,
            data: OwnerSlice::from_vec(v),
        }
    }
}

impl<T: Scalar> From<Matrix<T>> for Vec<T> {
    fn from(m: Matrix<T>) -> Self {
        m.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{f16, DType, Shape};

    #[test]
    fn test_convert_to_double() {
        let m = matrix![[1, 2], [3, 4]];
        let d = m.convert_to::<f64>();
        assert_eq!(d.to_nested_vec(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_cast_truncates() {
        let m = matrix![[1.9f32, -1.9], [300.0, -5.0]];
        let i = Matrix::<i32>::cast_from(&m);
        assert_eq!(i.to_vec(), vec![1, -1, 300, -5]);
        let u = m.convert_to::<u8>();
        assert_eq!(u.to_vec(), vec![1, 0, 255, 0]);
        let h = m.convert_to::<f16>();
        assert_eq!(h.at(0, 1).copied().unwrap(), f16::from_f32(-1.9));
    }

    #[test]
    fn test_try_convert() {
        let m = matrix![[1.5f64, 2.0]];
        assert_eq!(m.try_convert_to::<i8>().unwrap().to_vec(), vec![1, 2]);
        let bad = matrix![[f64::NAN, 1.0]];
        assert_eq!(
            bad.try_convert_to::<i64>().err(),
            Some(MError::TypeNotConvertible {
                from: DType::F64,
                to: DType::I64
            })
        );
    }

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(
            Matrix::from_vec(2, 2, vec![1u8, 2, 3]).err(),
            Some(MError::BufferLength {
                rows: 2,
                cols: 2,
                len: 3
            })
        );
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(m.shape(), Shape::new(3, 2));
        assert_eq!(m.to_nested_vec(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
        assert!(Matrix::<u8>::from_rows(Vec::new()).unwrap().data().is_none());
    }

    #[test]
    fn test_sequences() {
        let m = matrix![[1, 2, 3], [4, 5, 6]];
        assert_eq!(m.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(m.to_nested_vec(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let v: Vec<i32> = m.into();
        assert_eq!(v.len(), 6);

        let tall = Matrix::<i32>::new(3, 0);
        assert_eq!(tall.to_nested_vec(), vec![Vec::<i32>::new(); 3]);
        assert!(tall.to_vec().is_empty());
    }
}
