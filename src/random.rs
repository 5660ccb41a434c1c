use crate::{Matrix, Scalar};
use rand::Rng;

impl<T: Scalar> Matrix<T> {
    /// Fills with independent uniform draws from `[left, right]` using the
    /// thread-local generator.
    ///
    /// # Panics
    ///
    /// Panics if a floating point bound is not finite, or if `right - left`
    /// overflows to infinity (e.g. `f64::MIN` to `f64::MAX`).
    pub fn fill_random(&mut self, left: T, right: T) -> &mut Self {
        self.fill_random_with(&mut rand::thread_rng(), left, right)
    }

    /// [`fill_random`](Matrix::fill_random) drawing from `rng`. Bounds given
    /// in reverse order are swapped.
    pub fn fill_random_with<R>(&mut self, rng: &mut R, left: T, right: T) -> &mut Self
    where
        R: Rng + ?Sized,
    {
        let (low, high) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        self.generate(|| T::_sample(rng, low, high))
    }
}
