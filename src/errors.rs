//! Error types for sort calls.
//!
//! Every variant describes a caller contract violation or a resource fault detected before or
//! during a sort. Validation happens once at the entry point, so a rejected call never touches
//! the buffer.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::config::{Algorithm, EntryPoint};

/// Error type for sort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The requested length exceeds the buffer.
    LengthOutOfBounds {
        /// Requested number of elements to sort.
        len: usize,
        /// Length of the buffer that was passed in.
        buffer_len: usize,
    },

    /// The half-open range `left..right` is reversed or does not fit the buffer.
    InvalidRange {
        /// Inclusive left bound.
        left: usize,
        /// Exclusive right bound.
        right: usize,
        /// Length of the buffer that was passed in.
        buffer_len: usize,
    },

    /// The algorithm was called through the contract it does not implement.
    WrongEntryPoint {
        /// Selected algorithm.
        algorithm: Algorithm,
        /// Contract the algorithm expects.
        expected: EntryPoint,
    },

    /// Merge sort could not allocate its temporary buffers.
    AllocationFailed {
        /// Number of elements that were requested.
        requested: usize,
    },

    /// A textual algorithm or direction name was not recognized.
    UnknownName(String),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SortError::LengthOutOfBounds { len, buffer_len } => write!(
                f,
                "Length out of bounds: cannot sort {len} elements of a buffer holding {buffer_len}"
            ),
            SortError::InvalidRange {
                left,
                right,
                buffer_len,
            } => write!(
                f,
                "Invalid range: {left}..{right} is not within a buffer of length {buffer_len}"
            ),
            SortError::WrongEntryPoint {
                algorithm,
                expected,
            } => write!(
                f,
                "Wrong entry point: {algorithm} sort must be called through the {expected} contract"
            ),
            SortError::AllocationFailed { requested } => write!(
                f,
                "Allocation failed: could not reserve a merge buffer of {requested} elements"
            ),
            SortError::UnknownName(name) => write!(f, "Unknown name: '{name}'"),
        }
    }
}

impl Error for SortError {}
