//! Error types for tensor operations.
//!
//! Only two things can go wrong in this library:
//!
//! - An index falls outside the storage it addresses. This covers
//!   buffer-backed views (`offset + index` past the buffer capacity) and
//!   matrix row/column accessors (index outside `0..N`).
//! - A byte buffer cannot be reinterpreted as elements (misaligned or of
//!   the wrong length).
//!
//! A singular matrix is *not* an error. Inversion reports it with a
//! `bool` or `Option` instead.
//!
//! # Usage
//!
//! ```rust
//! use tensors_core::{Error, Result};
//!
//! fn element(data: &[f32], offset: usize, index: usize) -> Result<f32> {
//!     offset
//!         .checked_add(index)
//!         .and_then(|i| data.get(i).copied())
//!         .ok_or(Error::index_out_of_bounds(index, offset, data.len()))
//! }
//!
//! assert!(element(&[1.0, 2.0], 1, 1).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by bounds-checked accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An element index falls outside a flat buffer.
    ///
    /// Raised before any element is read or written.
    #[error("index {index} at offset {offset} out of bounds for capacity {capacity}")]
    IndexOutOfBounds {
        /// Component index relative to the view
        index: usize,
        /// Element offset of the view into the buffer
        offset: usize,
        /// Number of elements in the buffer
        capacity: usize,
    },

    /// A matrix row or column index falls outside `0..size`.
    #[error("row {row}, column {column} out of bounds for {size}x{size} matrix")]
    RowColumnOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Matrix dimension
        size: usize,
    },

    /// A byte buffer could not be viewed as elements.
    #[error("cannot view bytes as elements: {reason}")]
    Cast {
        /// Why the cast failed
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfBounds`] error.
    #[inline]
    pub fn index_out_of_bounds(index: usize, offset: usize, capacity: usize) -> Self {
        Self::IndexOutOfBounds {
            index,
            offset,
            capacity,
        }
    }

    /// Creates an [`Error::RowColumnOutOfBounds`] error.
    #[inline]
    pub fn row_column_out_of_bounds(row: usize, column: usize, size: usize) -> Self {
        Self::RowColumnOutOfBounds { row, column, size }
    }

    /// Creates an [`Error::Cast`] error.
    #[inline]
    pub fn cast(reason: impl Into<String>) -> Self {
        Self::Cast {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfBounds { .. } | Self::RowColumnOutOfBounds { .. }
        )
    }
}
