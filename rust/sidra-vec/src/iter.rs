//! By-value iteration over a [`FlexVec`].

use std::iter::FusedIterator;

use crate::vec::FlexVec;

/// An owning iterator over the elements of a [`FlexVec<T>`].
///
/// Created by [`FlexVec::into_iter`](IntoIterator::into_iter). Yields the
/// live elements front to back; spare slots never surface. Elements not yet
/// yielded are dropped with the iterator.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(vec: FlexVec<T>) -> IntoIter<T> {
        IntoIter {
            inner: vec.into_vec().into_iter(),
        }
    }

    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for FlexVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}
