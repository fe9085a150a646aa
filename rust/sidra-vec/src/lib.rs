//! Growable contiguous sequence containers for the Sidra crates.
//!
//! This crate provides [`FlexVec<T>`], a generic, contiguous, growable
//! sequence with random access, amortized O(1) append, positional insertion
//! and removal, and explicit capacity control. Storage is a single exclusively
//! owned [`sidra_buffer::FixedBuffer<T>`] that the container replaces
//! wholesale whenever it changes capacity.
//!
//! # Core Concepts
//!
//! ## Length and capacity
//!
//! The length is the number of live elements; the capacity is the slot count
//! of the owned buffer. The live elements occupy the buffer's prefix, and
//! `len <= capacity` holds at all times. Removal never shrinks the buffer;
//! only [`FlexVec::shrink_to_fit`] and whole-container replacement do.
//!
//! ## Growth policy
//!
//! A full buffer doubles when an element is added (one slot for the very
//! first element), so building a sequence by repeated [`FlexVec::push`] costs
//! amortized O(1) per element. [`FlexVec::reserve`] allocates exactly the
//! requested capacity, and a growing [`FlexVec::resize`] allocates the larger
//! of the requested length and twice the old capacity.
//!
//! ## Slot discipline
//!
//! Every buffer slot always holds a valid `T`. Fresh slots are
//! default-constructed, and slots vacated by a removal or relocation are
//! reset to `T::default()`. Mutating operations therefore carry a
//! `T: Default` bound, and the whole crate stays in safe Rust.
//!
//! # Main Components
//!
//! - [`FlexVec<T>`]: the growable sequence.
//! - [`IntoIter<T>`]: by-value iteration over a consumed sequence.
//! - [`Error`] / [`Result`]: recoverable failures from the checked accessors
//!   [`FlexVec::at`] and [`FlexVec::at_mut`].
//! - [`flexvec!`]: constructor macro mirroring `vec!`.

pub mod error;
pub mod iter;
pub mod vec;

pub use error::{Error, Result};
pub use iter::IntoIter;
pub use vec::FlexVec;

/// Creates a [`FlexVec`] containing the arguments.
///
/// Mirrors the standard `vec!` macro:
///
/// ```
/// use sidra_vec::{FlexVec, flexvec};
///
/// let empty: FlexVec<u32> = flexvec![];
/// let repeated = flexvec![0u8; 4];
/// let listed = flexvec![1, 2, 3];
///
/// assert!(empty.is_empty());
/// assert_eq!(repeated.as_slice(), &[0, 0, 0, 0]);
/// assert_eq!(listed.as_slice(), &[1, 2, 3]);
/// ```
#[macro_export]
macro_rules! flexvec {
    () => {
        $crate::vec::FlexVec::new()
    };
    ($value:expr; $len:expr) => {
        $crate::vec::FlexVec::from_value($len, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::vec::FlexVec::from([$($value),+])
    };
}
