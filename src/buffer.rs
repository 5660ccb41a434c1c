use core::ptr::NonNull;
use std::mem::{self, ManuallyDrop};

/// Exclusively owned, fixed-length element buffer.
///
/// A buffer either owns one heap allocation (`cap != 0`) or is absent,
/// holding a dangling pointer with `len == cap == 0`. The allocation is
/// released exactly once, on drop; `take` hands it over and leaves the
/// source absent.
pub(crate) struct OwnerSlice<P> {
    ptr: NonNull<P>,
    len: usize,
    cap: usize,
}

unsafe impl<P: Send> Send for OwnerSlice<P> {}
unsafe impl<P: Sync> Sync for OwnerSlice<P> {}

impl<P> OwnerSlice<P> {
    pub(crate) const fn absent() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
        }
    }

    pub(crate) fn from_vec(v: Vec<P>) -> Self {
        if v.is_empty() {
            return Self::absent();
        }
        let mut v = ManuallyDrop::new(v);
        let len = v.len();
        let cap = v.capacity();
        let ptr = unsafe { NonNull::new_unchecked(v.as_mut_ptr()) };
        Self { ptr, len, cap }
    }

    pub(crate) fn from_elem(elem: P, n: usize) -> Self
    where
        P: Clone,
    {
        Self::from_vec(vec![elem; n])
    }

    #[inline]
    pub(crate) fn is_allocated(&self) -> bool {
        self.cap != 0
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const P {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut P {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[P] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr() as *const P, self.len) }
    }

    #[inline]
    pub(crate) fn as_slice_mut(&mut self) -> &mut [P] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::absent())
    }

    pub(crate) fn into_vec(self) -> Vec<P> {
        let this = ManuallyDrop::new(self);
        if !this.is_allocated() {
            return Vec::new();
        }
        unsafe { Vec::from_raw_parts(this.ptr.as_ptr(), this.len, this.cap) }
    }
}

impl<P: Clone> Clone for OwnerSlice<P> {
    fn clone(&self) -> Self {
        Self::from_vec(self.as_slice().to_vec())
    }
}

impl<P> Drop for OwnerSlice<P> {
    fn drop(&mut self) {
        if self.is_allocated() {
            unsafe { drop(Vec::from_raw_parts(self.ptr.as_ptr(), self.len, self.cap)) }
            self.cap = 0;
            self.len = 0;
        }
    }
}
