use crate::iter::{Iter, IterMut};

/// Lock-step traversal of a mutable cursor and a shared one.
///
/// Both cursors walk row-major storage of equally shaped matrices, so
/// position `p` of one lines up with position `p` of the other.
pub struct Zip<'a, 'b, A, B> {
    a: IterMut<'a, A>,
    b: Iter<'b, B>,
}

impl<'a, 'b, A, B> Zip<'a, 'b, A, B> {
    pub fn new(a: IterMut<'a, A>, b: Iter<'b, B>) -> Zip<'a, 'b, A, B> {
        Self { a, b }
    }

    pub fn ops<F>(self, mut f: F)
    where
        F: FnMut((&'a mut A, &'b B)),
    {
        for t in self {
            f(t);
        }
    }
}

impl<'a, 'b, A, B> Iterator for Zip<'a, 'b, A, B> {
    type Item = (&'a mut A, &'b B);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((x, y))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.a.len().min(self.b.len());
        (n, Some(n))
    }
}

pub(crate) fn convert_iopsf<A: Copy, B: Copy>(
    mut f: impl FnMut(A, B) -> A,
) -> impl FnMut((&mut A, &B)) {
    move |(x, y)| *x = f(*x, *y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip() {
        let mut a = vec![1, 2, 3, 4];
        let b = vec![10, 20, 30, 40];
        Zip::new(IterMut::new(&mut a), Iter::new(&b)).ops(convert_iopsf(|x, y| x + y));
        assert_eq!(a, vec![11, 22, 33, 44]);
    }

    #[test]
    fn test_zip_mixed_types() {
        let mut a = vec![1.5f64, 2.5];
        let b = vec![2u8, 4];
        Zip::new(IterMut::new(&mut a), Iter::new(&b)).ops(|(x, y)| *x *= f64::from(*y));
        assert_eq!(a, vec![3.0, 10.0]);
    }
}
