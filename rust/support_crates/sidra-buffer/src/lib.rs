//! An exclusively owned, fixed-length block of element slots.
//!
//! `FixedBuffer<T>` is the storage primitive underneath the Sidra containers:
//! it allocates a contiguous run of slots once, exposes them flat, and never
//! resizes. Growth policies, live-element accounting and element shifting all
//! belong to the container built on top; the buffer only guarantees exclusive
//! ownership of the block and its release on drop.

use std::fmt;

/// A fixed-length, exclusively owned block of element slots.
///
/// Every slot always holds a valid `T`: allocation default-fills the block,
/// and callers that move a value out of a slot are expected to leave a
/// replacement behind (`std::mem::take` does). The buffer is move-only: it
/// deliberately does not implement `Clone`, so exactly one owner of the block
/// exists at any time. Ownership changes hands only through [`swap`],
/// [`take`] or a Rust move.
///
/// [`swap`]: FixedBuffer::swap
/// [`take`]: FixedBuffer::take
pub struct FixedBuffer<T> {
    slots: Box<[T]>,
}

impl<T> FixedBuffer<T> {
    /// Returns an empty buffer with no slots and no allocation.
    pub fn empty() -> FixedBuffer<T> {
        FixedBuffer {
            slots: Box::default(),
        }
    }

    /// Creates a buffer from an already-built block, adopting it wholesale.
    pub fn from_boxed_slice(slots: Box<[T]>) -> FixedBuffer<T> {
        FixedBuffer { slots }
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns all slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns all slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchanges the owned blocks of two buffers in O(1).
    ///
    /// No element is touched; only ownership moves.
    #[inline]
    pub fn swap(&mut self, other: &mut FixedBuffer<T>) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Transfers the block out, leaving this buffer empty.
    #[inline]
    pub fn take(&mut self) -> FixedBuffer<T> {
        std::mem::take(self)
    }

    /// Consumes the buffer and returns the underlying block.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }

    /// Consumes the buffer and returns the underlying block as a `Vec<T>`
    /// with `capacity == len`.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

impl<T: Default> FixedBuffer<T> {
    /// Allocates a block of `len` slots, each holding `T::default()`.
    ///
    /// `new(0)` allocates nothing and is equivalent to [`FixedBuffer::empty`].
    pub fn new(len: usize) -> FixedBuffer<T> {
        let mut slots = Vec::new();
        slots.resize_with(len, T::default);
        FixedBuffer {
            slots: slots.into_boxed_slice(),
        }
    }
}

impl<T> Default for FixedBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::ops::Index<usize> for FixedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> std::ops::IndexMut<usize> for FixedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T> From<Box<[T]>> for FixedBuffer<T> {
    fn from(slots: Box<[T]>) -> FixedBuffer<T> {
        FixedBuffer::from_boxed_slice(slots)
    }
}

impl<T> From<Vec<T>> for FixedBuffer<T> {
    fn from(slots: Vec<T>) -> FixedBuffer<T> {
        FixedBuffer::from_boxed_slice(slots.into_boxed_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBuffer")
            .field("len", &self.len())
            .field("slots", &self.slots)
            .finish()
    }
}
