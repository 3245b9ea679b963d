//! # Scene Graph Errors
//!
//! Error types reported by face-set validation.

use thiserror::Error;

/// Errors found when validating an indexed face set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// An index array does not have one entry per face corner.
    #[error("{array} index array has {actual} entries, expected {expected}")]
    LengthMismatch {
        array: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An index points past the end of the array it indexes.
    #[error("{array} index {index} out of range (array has {len} entries)")]
    IndexOutOfRange {
        array: &'static str,
        index: u32,
        len: usize,
    },
}

impl SceneError {
    /// Creates a length mismatch error.
    pub fn length_mismatch(array: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            array,
            expected,
            actual,
        }
    }

    /// Creates an index out of range error.
    pub fn index_out_of_range(array: &'static str, index: u32, len: usize) -> Self {
        Self::IndexOutOfRange { array, index, len }
    }
}
