#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::Matrix::from(vec![$([$($x,)*],)*])
    }};
}

mod buffer;
mod compare;
mod convert;
mod debug;
mod error;
mod iter;
mod matmul;
mod op;
mod random;
mod scalar;
mod shape;
mod zip;

use crate::buffer::OwnerSlice;
use std::mem;
use std::ops::{Index, IndexMut};

pub use debug::{DebugSettings, Displayed, DEFAULT_DEBUG};
pub use error::{MError, MResult};
pub use half::f16;
pub use iter::{Iter, IterMut};
pub use scalar::{DType, Scalar};
pub use shape::Shape;
pub use zip::Zip;

pub type IMatrix = Matrix<i32>;
pub type UMatrix = Matrix<u32>;
pub type FMatrix = Matrix<f32>;
pub type DMatrix = Matrix<f64>;

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

#[inline]
pub(crate) fn elem_count(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols).unwrap_or_else(|| capacity_overflow())
}

/// Dense row-major matrix owning a single contiguous buffer.
///
/// Element `(r, c)` lives at offset `r * cols + c`. A matrix with zero rows
/// or zero columns holds no allocation at all.
pub struct Matrix<T: Scalar> {
    rows: usize,
    cols: usize,
    data: OwnerSlice<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Zero-initialized `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_elem(T::zero(), rows, cols)
    }

    /// `rows x cols` matrix with every element set to `fill`.
    pub fn from_elem(fill: T, rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: OwnerSlice::from_elem(fill, elem_count(rows, cols)),
        }
    }

    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    pub fn identity(rows: usize, cols: usize) -> MResult<Self> {
        let mut m = Self::new(rows, cols);
        m.to_identity()?;
        Ok(m)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Number of stored elements, `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The backing buffer, `None` when nothing is allocated.
    pub fn data(&self) -> Option<&[T]> {
        if self.data.is_allocated() {
            Some(self.data.as_slice())
        } else {
            None
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_slice_mut()
    }

    pub fn row(&self, r: usize) -> MResult<&[T]> {
        if r >= self.rows {
            return Err(MError::IndexOutOfRange {
                row: r,
                col: 0,
                shape: self.shape(),
            });
        }
        let start = self.offset(r, 0);
        Ok(&self.as_slice()[start..start + self.cols])
    }

    #[inline]
    fn offset(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    fn check_index(&self, r: usize, c: usize) -> MResult<()> {
        if r >= self.rows || c >= self.cols {
            log::debug!("index ({}, {}) rejected for {}", r, c, self.shape());
            return Err(MError::IndexOutOfRange {
                row: r,
                col: c,
                shape: self.shape(),
            });
        }
        Ok(())
    }

    /// Bounds-checked element access.
    pub fn at(&self, r: usize, c: usize) -> MResult<&T> {
        self.check_index(r, c)?;
        Ok(unsafe { self.at_unchecked(r, c) })
    }

    pub fn at_mut(&mut self, r: usize, c: usize) -> MResult<&mut T> {
        self.check_index(r, c)?;
        Ok(unsafe { self.at_unchecked_mut(r, c) })
    }

    /// # Safety
    ///
    /// `r < rows` and `c < cols` must hold.
    #[inline]
    pub unsafe fn at_unchecked(&self, r: usize, c: usize) -> &T {
        &*self.data.as_ptr().add(self.offset(r, c))
    }

    /// # Safety
    ///
    /// `r < rows` and `c < cols` must hold.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, r: usize, c: usize) -> &mut T {
        let off = self.offset(r, c);
        &mut *self.data.as_mut_ptr().add(off)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.as_slice())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.data.as_slice_mut())
    }

    /// Releases the buffer and resets the shape to `0 x 0`.
    pub fn clear(&mut self) {
        drop(self.data.take());
        self.rows = 0;
        self.cols = 0;
    }

    /// Moves the contents out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges contents with `other` in constant time.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    // Installs a fully built buffer; the previous one is released after the
    // exchange.
    pub(crate) fn replace_data(&mut self, rows: usize, cols: usize, data: OwnerSlice<T>) {
        debug_assert_eq!(data.len(), elem_count(rows, cols));
        let mut next = Self { rows, cols, data };
        self.swap(&mut next);
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: OwnerSlice::absent(),
        }
    }
}

impl<T: Scalar> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
        }
    }

    // copy-and-swap: `self` is untouched until the copy is complete
    fn clone_from(&mut self, source: &Self) {
        let mut tmp = source.clone();
        self.swap(&mut tmp);
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        match self.at(r, c) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        match self.at_mut(r, c) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a mut Matrix<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
