//! Offset arithmetic shared by every view.

use tensors_core::{Error, Result};
use tracing::trace;

/// Buffer position of element `index` of a view starting at `offset`.
///
/// Fails when `offset + index` overflows or is not below `capacity`.
#[inline]
pub(crate) fn slot(offset: usize, index: usize, capacity: usize) -> Result<usize> {
    match offset.checked_add(index) {
        Some(i) if i < capacity => Ok(i),
        _ => {
            trace!(index, offset, capacity, "direct view out of bounds");
            Err(Error::index_out_of_bounds(index, offset, capacity))
        }
    }
}

/// Validates a whole `len`-element run starting at `offset`.
///
/// Checks the last element, which covers all earlier ones, and returns
/// the buffer position of the first.
#[inline]
pub(crate) fn span(offset: usize, len: usize, capacity: usize) -> Result<usize> {
    debug_assert!(len > 0);
    slot(offset, len - 1, capacity).map(|_| offset)
}
