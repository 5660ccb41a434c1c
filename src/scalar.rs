use half::f16;
use num_traits::{Float, Num, NumCast, ToPrimitive, WrappingAdd, WrappingMul, WrappingSub};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F16,
    F32,
    F64,
}

impl DType {
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F16 | DType::F32 | DType::F64)
    }

    pub fn is_integral(&self) -> bool {
        !self.is_float()
    }

    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::U8 | DType::I8 => 1,
            DType::U16 | DType::I16 | DType::F16 => 2,
            DType::U32 | DType::I32 | DType::F32 => 4,
            DType::U64 | DType::I64 | DType::F64 => 8,
        }
    }
}

/// Element type of a [`Matrix`](crate::Matrix).
///
/// Closed over the primitive integers and the three floating point widths.
/// `EPSILON` is the tolerance used by [`Matrix::equal_to`](crate::Matrix::equal_to);
/// it is zero for integral types, making comparison exact.
pub trait Scalar:
    Copy
    + PartialOrd
    + Num
    + NumCast
    + ToPrimitive
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    const DTYPE: DType;
    const EPSILON: Self;

    fn _round(self) -> Self;
    fn _floor(self) -> Self;
    fn _ceil(self) -> Self;

    /// Draws from the closed range `[low, high]`. Callers ensure `low <= high`.
    fn _sample<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self;

    // Integral kinds wrap modulo 2^bits; floating kinds are plain IEEE ops.
    fn _add(self, rhs: Self) -> Self;
    fn _sub(self, rhs: Self) -> Self;
    fn _mul(self, rhs: Self) -> Self;
    /// Callers reject a zero divisor for integral kinds.
    fn _div(self, rhs: Self) -> Self;

    #[inline]
    fn is_integral() -> bool {
        Self::DTYPE.is_integral()
    }

    // no unsigned underflow: always subtract the smaller side
    #[inline]
    fn _abs_diff(self, other: Self) -> Self {
        if self > other {
            self - other
        } else {
            other - self
        }
    }

    // integral kinds compare exactly, so the difference is never formed
    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        self == other || (Self::DTYPE.is_float() && self._abs_diff(other) <= Self::EPSILON)
    }

    /// Value conversion from another scalar kind, `None` when `u` has no
    /// representation in `Self` (out of range, NaN into an integer).
    #[inline]
    fn try_cast<U: Scalar>(u: U) -> Option<Self> {
        <Self as NumCast>::from(u)
    }
}

macro_rules! impl_int_scalar {
    ($($e:ident => $d:ident),*) => {
        $(impl Scalar for $e {
            const DTYPE: DType = DType::$d;
            const EPSILON: Self = 0;

            #[inline]
            fn _round(self) -> Self {
                self
            }
            #[inline]
            fn _floor(self) -> Self {
                self
            }
            #[inline]
            fn _ceil(self) -> Self {
                self
            }
            fn _sample<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self {
                rng.gen_range(low..=high)
            }
            #[inline]
            fn _add(self, rhs: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &rhs)
            }
            #[inline]
            fn _sub(self, rhs: Self) -> Self {
                WrappingSub::wrapping_sub(&self, &rhs)
            }
            #[inline]
            fn _mul(self, rhs: Self) -> Self {
                WrappingMul::wrapping_mul(&self, &rhs)
            }
            // MIN / -1 wraps to MIN
            #[inline]
            fn _div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
        })*
    };
}

macro_rules! impl_float_ops {
    () => {
        #[inline]
        fn _add(self, rhs: Self) -> Self {
            self + rhs
        }
        #[inline]
        fn _sub(self, rhs: Self) -> Self {
            self - rhs
        }
        #[inline]
        fn _mul(self, rhs: Self) -> Self {
            self * rhs
        }
        #[inline]
        fn _div(self, rhs: Self) -> Self {
            self / rhs
        }
    };
}

macro_rules! impl_float_scalar {
    ($($e:ident => $d:ident, $eps:expr),*) => {
        $(impl Scalar for $e {
            const DTYPE: DType = DType::$d;
            const EPSILON: Self = $eps;

            #[inline]
            fn _round(self) -> Self {
                self.round()
            }
            #[inline]
            fn _floor(self) -> Self {
                self.floor()
            }
            #[inline]
            fn _ceil(self) -> Self {
                self.ceil()
            }
            fn _sample<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self {
                rng.gen_range(low..=high)
            }
            impl_float_ops!();
        })*
    };
}

impl_int_scalar!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);
impl_int_scalar!(i8 => I8, i16 => I16, i32 => I32, i64 => I64);
impl_float_scalar!(f32 => F32, 1e-6, f64 => F64, 1e-9);

impl Scalar for f16 {
    const DTYPE: DType = DType::F16;
    const EPSILON: Self = f16::from_f32_const(1e-2);

    #[inline]
    fn _round(self) -> Self {
        Float::round(self)
    }
    #[inline]
    fn _floor(self) -> Self {
        Float::floor(self)
    }
    #[inline]
    fn _ceil(self) -> Self {
        Float::ceil(self)
    }
    // f16 has no uniform sampler of its own; both bounds are exactly
    // representable so rounding the f32 draw stays inside them.
    fn _sample<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self {
        f16::from_f32(rng.gen_range(low.to_f32()..=high.to_f32()))
    }
    impl_float_ops!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dtype() {
        assert!(u8::is_integral());
        assert!(i64::is_integral());
        assert!(!f32::is_integral());
        assert!(!f16::is_integral());
        assert_eq!(f64::DTYPE.size_in_bytes(), 8);
        assert_eq!(f16::DTYPE.size_in_bytes(), 2);
    }

    #[test]
    fn test_abs_diff_unsigned() {
        assert_eq!(3u32._abs_diff(5), 2);
        assert_eq!(5u32._abs_diff(3), 2);
        assert!(!4u8.approx_eq(5));
        assert!(7u8.approx_eq(7));
        assert!(!i8::MAX.approx_eq(i8::MIN));
        assert!(f64::INFINITY.approx_eq(f64::INFINITY));
    }

    #[test]
    fn test_approx_eq_float() {
        assert!(1.0f64.approx_eq(1.0 + 1e-12));
        assert!(!1.0f64.approx_eq(1.0 + 1e-6));
        assert!(1.0f32.approx_eq(1.0 + 1e-7));
        assert!(!f32::NAN.approx_eq(f32::NAN));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(2.5f64._round(), 3.0);
        assert_eq!((-1.5f32)._floor(), -2.0);
        assert_eq!(1.2f32._ceil(), 2.0);
        assert_eq!(7i32._round(), 7);
        assert_eq!(f16::from_f32(1.7)._floor(), f16::from_f32(1.0));
    }

    #[test]
    fn test_try_cast() {
        assert_eq!(i32::try_cast(3.9f64), Some(3));
        assert_eq!(u8::try_cast(-1i32), None);
        assert_eq!(u8::try_cast(300i32), None);
        assert_eq!(i64::try_cast(f32::NAN), None);
        assert_eq!(f64::try_cast(7u16), Some(7.0));
    }

    #[test]
    fn test_sample_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = i16::_sample(&mut rng, -3, 3);
            assert!((-3..=3).contains(&v));
            let f = f32::_sample(&mut rng, 0.5, 0.75);
            assert!((0.5..=0.75).contains(&f));
            let h = f16::_sample(&mut rng, f16::from_f32(1.0), f16::from_f32(2.0));
            assert!(h >= f16::from_f32(1.0) && h <= f16::from_f32(2.0));
        }
    }

    #[test]
    fn test_integral_ops_wrap() {
        assert_eq!(0u8._sub(1), 255);
        assert_eq!(200u8._add(100), 44);
        assert_eq!(200u8._mul(2), 144);
        assert_eq!(i8::MIN._div(-1), i8::MIN);
        assert_eq!(i32::MAX._add(1), i32::MIN);
        assert_eq!(1.5f32._mul(2.0), 3.0);
        assert_eq!(f16::from_f32(1.0)._sub(f16::from_f32(0.5)), f16::from_f32(0.5));
    }
}
