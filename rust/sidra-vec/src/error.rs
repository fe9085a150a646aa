//! Error and result types for checked container operations.

/// Recoverable failure reported by the checked accessors.
///
/// The panicking access paths (`Index`, `insert`, `remove`) treat a bad
/// position as a caller bug; [`FlexVec::at`](crate::FlexVec::at) and
/// [`FlexVec::at_mut`](crate::FlexVec::at_mut) report it as a value instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested position lies at or past the live element count.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Position the caller asked for.
        index: usize,
        /// Live element count at the time of the call.
        len: usize,
    },
}

/// Result type returned by the checked accessors.
pub type Result<T> = std::result::Result<T, Error>;
