use rawpointer::{ptrdistance, PointerExt};
use std::marker::PhantomData;

/// Random-access cursor over a contiguous row-major buffer.
///
/// Yields elements in storage order, can be advanced from either end and
/// jumped with `nth`/`get` in constant time.
pub struct Iter<'a, A> {
    ptr: *const A,
    end: *const A,
    life: PhantomData<&'a A>,
}

/// Mutable counterpart of [`Iter`].
pub struct IterMut<'a, A> {
    ptr: *mut A,
    end: *mut A,
    life: PhantomData<&'a mut A>,
}

impl<'a, A> Iter<'a, A> {
    pub(crate) fn new(s: &'a [A]) -> Self {
        let ptr = s.as_ptr();
        Self {
            ptr,
            end: unsafe { ptr.add(s.len()) },
            life: PhantomData,
        }
    }

    /// Element `n` positions ahead of the cursor, without advancing it.
    #[inline]
    pub fn get(&self, n: usize) -> Option<&'a A> {
        if n < self.len() {
            unsafe { Some(&*self.ptr.add(n)) }
        } else {
            None
        }
    }

    /// The remaining elements as a slice.
    pub fn as_slice(&self) -> &'a [A] {
        unsafe { std::slice::from_raw_parts(self.ptr, self.len()) }
    }
}

impl<'a, A> IterMut<'a, A> {
    pub(crate) fn new(s: &'a mut [A]) -> Self {
        let ptr = s.as_mut_ptr();
        Self {
            ptr,
            end: unsafe { ptr.add(s.len()) },
            life: PhantomData,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, n: usize) -> Option<&mut A> {
        if n < self.len() {
            unsafe { Some(&mut *self.ptr.add(n)) }
        } else {
            None
        }
    }
}

macro_rules! impl_cursor {
    ($name:ident, $elem:ty, $($deref:tt)+) => {
        impl<'a, A> Iterator for $name<'a, A> {
            type Item = $elem;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                if self.ptr == self.end {
                    None
                } else {
                    unsafe { Some($($deref)+ *self.ptr.post_inc()) }
                }
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let len = self.len();
                (len, Some(len))
            }

            #[inline]
            fn nth(&mut self, n: usize) -> Option<Self::Item> {
                if n >= self.len() {
                    self.ptr = self.end;
                    None
                } else {
                    unsafe {
                        self.ptr = self.ptr.add(n);
                        Some($($deref)+ *self.ptr.post_inc())
                    }
                }
            }

            #[inline]
            fn count(self) -> usize {
                self.len()
            }
        }

        impl<'a, A> DoubleEndedIterator for $name<'a, A> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                if self.ptr == self.end {
                    None
                } else {
                    unsafe { Some($($deref)+ *self.end.pre_dec()) }
                }
            }
        }

        impl<'a, A> ExactSizeIterator for $name<'a, A> {
            #[inline]
            fn len(&self) -> usize {
                if std::mem::size_of::<A>() == 0 {
                    0
                } else {
                    ptrdistance(self.ptr as *const A, self.end as *const A)
                }
            }
        }
    };
}

impl_cursor!(Iter, &'a A, &);
impl_cursor!(IterMut, &'a mut A, &mut);
