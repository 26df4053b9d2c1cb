//! # tensors-direct
//!
//! Vector and matrix views over flat element buffers.
//!
//! Vertex arrays, uniform blocks and GPU staging memory store vectors and
//! matrices as runs of plain elements. The views in this crate read and
//! write [`tensors_math`] values straight from such buffers, at an element
//! offset, without copying the buffer:
//!
//! - [`DirectVec2`], [`DirectVec3`], [`DirectVec4`] - consecutive components
//! - [`DirectMat3`], [`DirectMat4`] - column-major matrix storage
//!
//! Every access checks `offset + index < capacity` before touching the
//! buffer and reports [`Error::IndexOutOfBounds`] otherwise. Offset
//! arithmetic never wraps: a view at `usize::MAX` simply fails.
//!
//! # Usage
//!
//! ```rust
//! use tensors_direct::DirectVec3;
//!
//! let vertices = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let second = DirectVec3::<_, f32>::new(&vertices, 3);
//! assert_eq!(second.get()?.x, 1.0);
//!
//! let past_end = DirectVec3::<_, f32>::new(&vertices, 9);
//! assert!(past_end.get().is_err());
//! # Ok::<(), tensors_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `bytemuck` (default) - `from_bytes`/`from_bytes_mut` constructors over
//!   raw byte buffers
//!
//! [`Error::IndexOutOfBounds`]: tensors_core::Error::IndexOutOfBounds

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bounds;
mod matrix;
mod vector;

pub use matrix::*;
pub use vector::*;
