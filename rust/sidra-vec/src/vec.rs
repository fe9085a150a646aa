//! The growable sequence container.

use std::ops::{Deref, DerefMut, Index, IndexMut};

use sidra_buffer::FixedBuffer;

use crate::error::{Error, Result};

/// A generic, contiguous, growable sequence of `T`.
///
/// `FlexVec<T>` owns a single [`FixedBuffer<T>`] together with a live element
/// count. The buffer's length is the capacity; the first `len` slots hold the
/// live elements, and the slots past them hold default or stale moved-from
/// values that are never exposed through the public surface. When an operation
/// needs more room than the buffer has, the container builds a larger buffer,
/// relocates the live prefix into it, and adopts it in O(1) by swapping the
/// two blocks.
///
/// A full buffer of `n` slots grows to `2 * n` (the very first element
/// allocates a single slot), so repeated [`push`](FlexVec::push) runs in
/// amortized O(1). [`reserve`](FlexVec::reserve) allocates exactly the
/// requested capacity, and [`Clone`] produces a tight copy whose capacity
/// equals its length.
///
/// Allocating and element-moving operations require `T: Default`: fresh slots
/// are default-filled, and relocation resets each vacated slot with
/// [`std::mem::take`], so every slot is a valid `T` at all times. Read paths
/// and conversions carry no such bound.
///
/// # Positions and addresses across mutation
///
/// The borrow checker rules out holding a reference across a mutating call,
/// so the effects of mutation surface through indices and raw pointers:
///
/// * [`insert`](FlexVec::insert) and [`remove`](FlexVec::remove) shift the
///   meaning of every index at or past the affected position.
/// * Any reallocating operation (a grow on a full buffer,
///   [`reserve`](FlexVec::reserve), a [`resize`](FlexVec::resize) past the
///   capacity, [`shrink_to_fit`](FlexVec::shrink_to_fit)) replaces the
///   storage block, invalidating addresses previously obtained from
///   [`as_ptr`](FlexVec::as_ptr). Mutations that stay within capacity keep
///   the storage address stable.
pub struct FlexVec<T> {
    buf: FixedBuffer<T>,
    len: usize,
}

impl<T> FlexVec<T> {
    /// Creates an empty `FlexVec` without allocating.
    pub fn new() -> FlexVec<T> {
        FlexVec {
            buf: FixedBuffer::empty(),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the owned buffer.
    ///
    /// The capacity is the length of the current storage block; it never
    /// changes without a reallocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf.as_mut_slice()[..len]
    }

    /// Returns a raw pointer to the start of the storage block.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_slice().as_ptr()
    }

    /// Returns a mutable raw pointer to the start of the storage block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_slice().as_mut_ptr()
    }

    /// Returns a reference to the element at `index`, or `None` when `index`
    /// lies past the live range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` when
    /// `index` lies past the live range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index >= len`, leaving the
    /// container untouched.
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index >= len`, leaving the
    /// container untouched.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns a reference to the first element, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the last element, or `None` when empty.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Removes all elements.
    ///
    /// The buffer is kept, so the capacity does not change. Vacated slots may
    /// retain their old values until overwritten or reset by a later
    /// operation; they are unreachable in the meantime.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shortens the sequence to `new_len` elements.
    ///
    /// A `new_len` at or past the current length leaves the sequence as it
    /// is. The capacity never changes.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Converts the sequence into a `Vec<T>` holding the live elements.
    pub fn into_vec(self) -> Vec<T> {
        let mut values = self.buf.into_vec();
        values.truncate(self.len);
        values
    }
}

impl<T: Default> FlexVec<T> {
    /// Creates an empty `FlexVec` whose buffer holds `capacity` slots.
    pub fn with_capacity(capacity: usize) -> FlexVec<T> {
        FlexVec {
            buf: FixedBuffer::new(capacity),
            len: 0,
        }
    }

    /// Creates a `FlexVec` of `len` default-constructed elements, with
    /// capacity equal to `len`.
    pub fn with_len(len: usize) -> FlexVec<T> {
        FlexVec {
            buf: FixedBuffer::new(len),
            len,
        }
    }

    /// Appends `value` at the end of the sequence.
    ///
    /// When the buffer is full, the capacity doubles (a first element
    /// allocates a single slot); otherwise the value lands in the next spare
    /// slot and the storage address stays put.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Inserts `value` at `index`, shifting the elements at and past `index`
    /// one position towards the end.
    ///
    /// `index == len` appends. Runs in O(len - index) when the buffer has a
    /// spare slot and O(len) when it must grow.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index {index} out of range for length {len}"
        );
        if len == self.capacity() {
            self.grow_with_gap(index, value);
        } else {
            // The spare slot at `len` joins the rotation; its stale value
            // lands at `index` and is overwritten below.
            self.buf.as_mut_slice()[index..=len].rotate_right(1);
            self.buf[index] = value;
            self.len += 1;
        }
    }

    /// Removes and returns the element at `index`, shifting the elements past
    /// it one position towards the front.
    ///
    /// The capacity does not change.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index {index} out of range for length {len}"
        );
        let value = std::mem::take(&mut self.buf[index]);
        // The vacated slot rotates to position `len - 1`, outside the live
        // range once the length drops.
        self.buf.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        value
    }

    /// Removes and returns the last element, or `None` when empty.
    ///
    /// The capacity does not change.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::take(&mut self.buf[self.len]))
    }

    /// Sets the element count to `new_len`.
    ///
    /// Shrinking keeps the first `new_len` elements and the buffer. Growing
    /// fills positions `len..new_len` with default-constructed values,
    /// reallocating to `max(new_len, 2 * capacity)` slots when `new_len`
    /// exceeds the capacity.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= self.capacity() {
            if new_len > self.len {
                let len = self.len;
                // Slots past the live range may hold stale values from an
                // earlier truncation; reset them before exposing.
                self.buf.as_mut_slice()[len..new_len].fill_with(T::default);
            }
            self.len = new_len;
        } else {
            self.reallocate(std::cmp::max(new_len, self.capacity() * 2));
            self.len = new_len;
        }
    }

    /// Ensures the buffer holds at least `new_capacity` slots in total.
    ///
    /// A `new_capacity` at or below the current capacity is a no-op.
    /// Otherwise the container reallocates to exactly `new_capacity` slots,
    /// carrying the live elements across. The argument is the total capacity,
    /// not an additional amount.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Shrinks the buffer so that the capacity equals the length.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.reallocate(self.len);
        }
    }

    /// Appends every element of `values`, cloning them, growing at most once.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        let new_len = self.len + values.len();
        if new_len > self.capacity() {
            self.reallocate(std::cmp::max(new_len, self.capacity() * 2));
        }
        let len = self.len;
        self.buf.as_mut_slice()[len..new_len].clone_from_slice(values);
        self.len = new_len;
    }

    /// Replaces the buffer with one of `new_capacity` slots, moving the live
    /// prefix across and leaving default values behind.
    #[cold]
    fn reallocate(&mut self, new_capacity: usize) {
        let len = self.len;
        debug_assert!(new_capacity >= len);
        let mut fresh = FixedBuffer::new(new_capacity);
        for (dst, src) in fresh.as_mut_slice()[..len]
            .iter_mut()
            .zip(self.buf.as_mut_slice()[..len].iter_mut())
        {
            *dst = std::mem::take(src);
        }
        self.buf.swap(&mut fresh);
    }

    /// Grows the buffer and inserts `value` at `index` in the same pass,
    /// moving the elements around the insertion point straight into their
    /// final slots.
    #[cold]
    fn grow_with_gap(&mut self, index: usize, value: T) {
        let len = self.len;
        let new_capacity = if self.capacity() == 0 {
            1
        } else {
            self.capacity() * 2
        };
        let mut fresh = FixedBuffer::new(new_capacity);
        {
            let old = self.buf.as_mut_slice();
            let new = fresh.as_mut_slice();
            for (dst, src) in new[..index].iter_mut().zip(old[..index].iter_mut()) {
                *dst = std::mem::take(src);
            }
            new[index] = value;
            for (dst, src) in new[index + 1..len + 1]
                .iter_mut()
                .zip(old[index..len].iter_mut())
            {
                *dst = std::mem::take(src);
            }
        }
        self.buf.swap(&mut fresh);
        self.len += 1;
    }
}

impl<T: Clone> FlexVec<T> {
    /// Creates a `FlexVec` of `len` clones of `value`, with capacity equal
    /// to `len`.
    pub fn from_value(len: usize, value: T) -> FlexVec<T> {
        FlexVec {
            buf: FixedBuffer::from(vec![value; len]),
            len,
        }
    }

    /// Creates a `FlexVec` holding a clone of each element of `values`, with
    /// capacity equal to the slice length.
    pub fn from_slice(values: &[T]) -> FlexVec<T> {
        FlexVec {
            buf: FixedBuffer::from(values.to_vec()),
            len: values.len(),
        }
    }
}

impl<T> Default for FlexVec<T> {
    fn default() -> FlexVec<T> {
        FlexVec::new()
    }
}

impl<T: Clone> Clone for FlexVec<T> {
    /// Returns a tight copy: the clone's capacity equals its length.
    fn clone(&self) -> FlexVec<T> {
        FlexVec::from_slice(self.as_slice())
    }

    /// Builds the replacement in full, then adopts it in O(1). A panic while
    /// cloning an element leaves `self` unchanged.
    fn clone_from(&mut self, source: &FlexVec<T>) {
        let mut replacement = source.clone();
        std::mem::swap(self, &mut replacement);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FlexVec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlexVec")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for FlexVec<T> {
    /// Element-wise equality over the live ranges; capacity never
    /// participates.
    fn eq(&self, other: &FlexVec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for FlexVec<T> {}

impl<T: PartialOrd> PartialOrd for FlexVec<T> {
    /// Lexicographic comparison over the live ranges.
    fn partial_cmp(&self, other: &FlexVec<T>) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for FlexVec<T> {
    fn cmp(&self, other: &FlexVec<T>) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: std::hash::Hash> std::hash::Hash for FlexVec<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, I: std::slice::SliceIndex<[T]>> Index<I> for FlexVec<T> {
    type Output = I::Output;

    /// Panics when the position lies at or past the live element count, even
    /// if the slot exists in the buffer.
    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: std::slice::SliceIndex<[T]>> IndexMut<I> for FlexVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Deref for FlexVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for FlexVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for FlexVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for FlexVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Vec<T>> for FlexVec<T> {
    /// Takes ownership of the elements; the result is tight regardless of
    /// the vector's spare capacity.
    fn from(values: Vec<T>) -> FlexVec<T> {
        let len = values.len();
        FlexVec {
            buf: FixedBuffer::from(values),
            len,
        }
    }
}

impl<T> From<Box<[T]>> for FlexVec<T> {
    fn from(values: Box<[T]>) -> FlexVec<T> {
        let len = values.len();
        FlexVec {
            buf: FixedBuffer::from_boxed_slice(values),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FlexVec<T> {
    fn from(values: [T; N]) -> FlexVec<T> {
        FlexVec::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for FlexVec<T> {
    fn from(values: &[T]) -> FlexVec<T> {
        FlexVec::from_slice(values)
    }
}

impl<T> FromIterator<T> for FlexVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> FlexVec<T> {
        FlexVec::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for FlexVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a FlexVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FlexVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> std::slice::IterMut<'a, T> {
        self.iter_mut()
    }
}
