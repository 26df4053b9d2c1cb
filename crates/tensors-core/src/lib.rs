//! # tensors-core
//!
//! Core types shared by the tensors crates.
//!
//! - [`Scalar`], [`Real`], [`ElementKind`] - the element kinds vectors and
//!   matrices are generic over (`f32`, `f64`, `i32`, `i64`)
//! - [`Error`], [`Result`] - bounds and cast errors
//! - [`Space`] - zero-sized markers for compile-time space tagging
//!
//! ## Crate Structure
//!
//! ```text
//! tensors-core (this crate)
//!    ^
//!    |
//!    +-- tensors-math (vectors, matrices, contexts)
//!           ^
//!           |
//!           +-- tensors-direct (buffer-backed views)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;
pub mod space;

pub use error::*;
pub use scalar::*;
pub use space::*;

/// Prelude module for convenient imports.
///
/// ```
/// use tensors_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{ElementKind, Real, Scalar};
    pub use crate::space::{Space, Untagged};
}
