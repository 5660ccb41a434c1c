use crate::error::{MError, MResult};
use crate::zip::{convert_iopsf, Zip};
use crate::{Matrix, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Replaces every element `x` with `op(x)`, in storage order.
    pub fn transform<F>(&mut self, mut op: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        self.iter_mut().for_each(|x| *x = op(*x));
        self
    }

    /// Replaces every element `x` with `op(x, y)` where `y` is the element
    /// of `other` at the same position. Both shapes must match.
    pub fn transform_with<F>(&mut self, other: &Matrix<T>, op: F) -> MResult<()>
    where
        F: FnMut(T, T) -> T,
    {
        self.check_same_shape(other, "transform_with")?;
        Zip::new(self.iter_mut(), other.iter()).ops(convert_iopsf(op));
        Ok(())
    }

    /// Overwrites every element with successive results of `op`.
    pub fn generate<F>(&mut self, mut op: F) -> &mut Self
    where
        F: FnMut() -> T,
    {
        self.iter_mut().for_each(|x| *x = op());
        self
    }

    pub fn add_scalar(&mut self, k: T) -> &mut Self {
        self.transform(|x| x._add(k))
    }

    pub fn sub_scalar(&mut self, k: T) -> &mut Self {
        self.transform(|x| x._sub(k))
    }

    pub fn mul_scalar(&mut self, k: T) -> &mut Self {
        self.transform(|x| x._mul(k))
    }

    /// Divides every element by `k`.
    ///
    /// Integral matrices reject a zero divisor. Floating matrices follow
    /// IEEE semantics and produce infinities or NaN.
    pub fn div_scalar(&mut self, k: T) -> MResult<()> {
        if T::is_integral() && k == T::zero() {
            log::debug!("div_scalar: zero divisor on {:?} matrix", T::DTYPE);
            return Err(MError::DivideByZero(T::DTYPE));
        }
        self.transform(|x| x._div(k));
        Ok(())
    }

    pub fn add_matrix(&mut self, other: &Matrix<T>) -> MResult<()> {
        self.check_same_shape(other, "add")?;
        self.transform_with(other, T::_add)
    }

    pub fn sub_matrix(&mut self, other: &Matrix<T>) -> MResult<()> {
        self.check_same_shape(other, "sub")?;
        self.transform_with(other, T::_sub)
    }

    /// [`add_matrix`](Matrix::add_matrix) with a right-hand side of another
    /// scalar kind. Every element of `other` is converted before `self` is
    /// touched.
    pub fn add_matrix_from<U: Scalar>(&mut self, other: &Matrix<U>) -> MResult<()> {
        self.check_same_shape(other, "add")?;
        let other = other.try_convert_to::<T>()?;
        self.add_matrix(&other)
    }

    pub fn sub_matrix_from<U: Scalar>(&mut self, other: &Matrix<U>) -> MResult<()> {
        self.check_same_shape(other, "sub")?;
        let other = other.try_convert_to::<T>()?;
        self.sub_matrix(&other)
    }

    pub fn zero(&mut self) -> &mut Self {
        self.generate(T::zero)
    }

    pub fn fill(&mut self, value: T) -> &mut Self {
        self.generate(|| value)
    }

    pub fn to_identity(&mut self) -> MResult<()> {
        self.check_square("to_identity")?;
        let n = self.cols;
        let mut i = 0;
        self.generate(|| {
            let v = if i % (n + 1) == 0 { T::one() } else { T::zero() };
            i += 1;
            v
        });
        Ok(())
    }

    pub fn round(&mut self) -> &mut Self {
        self.transform(T::_round)
    }

    pub fn floor(&mut self) -> &mut Self {
        self.transform(T::_floor)
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.transform(T::_ceil)
    }

    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc._add(x))
    }
}

macro_rules! impl_binary_op {
    ($trt:ident, $mth:ident, $imth:ident) => {
        impl<T: Scalar> std::ops::$trt<&Matrix<T>> for Matrix<T> {
            type Output = MResult<Matrix<T>>;
            fn $mth(mut self, rhs: &Matrix<T>) -> Self::Output {
                self.$imth(rhs)?;
                Ok(self)
            }
        }

        impl<T: Scalar> std::ops::$trt<Matrix<T>> for Matrix<T> {
            type Output = MResult<Matrix<T>>;
            fn $mth(mut self, rhs: Matrix<T>) -> Self::Output {
                self.$imth(&rhs)?;
                Ok(self)
            }
        }

        impl<T: Scalar> std::ops::$trt<&Matrix<T>> for &Matrix<T> {
            type Output = MResult<Matrix<T>>;
            fn $mth(self, rhs: &Matrix<T>) -> Self::Output {
                self.check_same_shape(rhs, stringify!($mth))?;
                let mut out = self.clone();
                out.$imth(rhs)?;
                Ok(out)
            }
        }

        impl<T: Scalar> std::ops::$trt<Matrix<T>> for &Matrix<T> {
            type Output = MResult<Matrix<T>>;
            fn $mth(self, rhs: Matrix<T>) -> Self::Output {
                std::ops::$trt::$mth(self, &rhs)
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($trt:ident, $mth:ident, $imth:ident) => {
        /// # Panics
        ///
        /// Panics when the operation is rejected; use the `Result`-returning
        /// method to handle that case.
        impl<T: Scalar> std::ops::$trt<&Matrix<T>> for Matrix<T> {
            fn $mth(&mut self, rhs: &Matrix<T>) {
                if let Err(e) = self.$imth(rhs) {
                    panic!("{}", e);
                }
            }
        }
    };
}

macro_rules! impl_scalar_op {
    ($trt:ident, $mth:ident, $imth:ident) => {
        impl<T: Scalar> std::ops::$trt<T> for Matrix<T> {
            type Output = Matrix<T>;
            fn $mth(mut self, rhs: T) -> Self::Output {
                self.$imth(rhs);
                self
            }
        }

        impl<T: Scalar> std::ops::$trt<T> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $mth(self, rhs: T) -> Self::Output {
                let mut out = self.clone();
                out.$imth(rhs);
                out
            }
        }
    };
}

macro_rules! impl_scalar_assign_op {
    ($trt:ident, $mth:ident, $imth:ident) => {
        impl<T: Scalar> std::ops::$trt<T> for Matrix<T> {
            fn $mth(&mut self, rhs: T) {
                self.$imth(rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, add_matrix); // +
impl_binary_op!(Sub, sub, sub_matrix); // -

impl_assign_op!(AddAssign, add_assign, add_matrix); // +=
impl_assign_op!(SubAssign, sub_assign, sub_matrix); // -=
impl_assign_op!(MulAssign, mul_assign, mul_matrix); // *=

impl_scalar_op!(Add, add, add_scalar);
impl_scalar_op!(Sub, sub, sub_scalar);
impl_scalar_op!(Mul, mul, mul_scalar);

impl_scalar_assign_op!(AddAssign, add_assign, add_scalar);
impl_scalar_assign_op!(SubAssign, sub_assign, sub_scalar);
impl_scalar_assign_op!(MulAssign, mul_assign, mul_scalar);

impl<T: Scalar> std::ops::Div<T> for Matrix<T> {
    type Output = MResult<Matrix<T>>;
    fn div(mut self, rhs: T) -> Self::Output {
        self.div_scalar(rhs)?;
        Ok(self)
    }
}

impl<T: Scalar> std::ops::Div<T> for &Matrix<T> {
    type Output = MResult<Matrix<T>>;
    fn div(self, rhs: T) -> Self::Output {
        self.clone() / rhs
    }
}

/// # Panics
///
/// Panics on an integral matrix when `rhs` is zero.
impl<T: Scalar> std::ops::DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        if let Err(e) = self.div_scalar(rhs) {
            panic!("{}", e);
        }
    }
}
