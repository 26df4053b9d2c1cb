//! Scratch contexts for matrix inversion.
//!
//! Inverting a matrix by cofactor expansion needs a full matrix of
//! intermediate cofactors (and, for 4x4, a 3x3 minor per cofactor). A
//! context owns that scratch storage so repeated inversions reuse it:
//!
//! ```rust
//! use tensors_math::{Context4, Mat4};
//!
//! let mut context = Context4::new();
//! let mut out = Mat4::zero();
//! for s in [1.0, 2.0, 4.0] {
//!     let m = Mat4::from_scale(s);
//!     assert!(Mat4::invert_with(&mut context, &m, &mut out));
//! }
//! assert_eq!(out, Mat4::from_scale(0.25));
//! ```
//!
//! A context is borrowed mutably for the duration of a call, so it cannot
//! be shared between threads or reentered without external coordination.
//! [`Mat3::inverse`] and [`Mat4::inverse`] build a fresh context on the
//! stack for one-off use.

use tensors_core::Real;

use crate::{Mat3, Mat4};

/// Scratch storage for [`Mat3::invert_with`].
#[derive(Debug, Clone, Default)]
pub struct Context3<T: Real> {
    pub(crate) cofactors: Mat3<T>,
}

impl<T: Real> Context3<T> {
    /// Creates a context with zeroed scratch storage.
    pub fn new() -> Self {
        Self {
            cofactors: Mat3::zero(),
        }
    }
}

/// Scratch storage for [`Mat4::invert_with`].
#[derive(Debug, Clone, Default)]
pub struct Context4<T: Real> {
    pub(crate) cofactors: Mat4<T>,
    pub(crate) minor: Mat3<T>,
}

impl<T: Real> Context4<T> {
    /// Creates a context with zeroed scratch storage.
    pub fn new() -> Self {
        Self {
            cofactors: Mat4::zero(),
            minor: Mat3::zero(),
        }
    }
}
