//! # tensors-math
//!
//! Fixed-size vectors and matrices for geometry and transforms.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - vectors over `f32`, `f64`, `i32`, `i64`
//! - [`Mat3`], [`Mat4`] - matrices over `f32` and `f64`
//! - [`Context3`], [`Context4`] - reusable scratch for inversion
//! - [`Tolerance`] - configurable almost-equal comparison
//! - [`Tagged`] - vectors and matrices tagged with a coordinate space
//!
//! # Design
//!
//! Matrices use **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tensors_math::{Mat4, Vec3, Vec4};
//!
//! let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0))
//!     * Mat4::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.5);
//! let view = model.inverse().unwrap();
//!
//! let p = Vec4::new(1.0, 2.0, 3.0, 1.0);
//! approx::assert_relative_eq!(view * (model * p), p, epsilon = 1e-12);
//! ```
//!
//! # Features
//!
//! - `glam` (default) - `From` conversions to and from [`glam`] types
//! - `serde` - `Serialize`/`Deserialize` for vectors, matrices and [`Tolerance`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod context;
mod matrix;
mod tagged;
mod tolerance;
mod vector;

#[cfg(feature = "glam")]
mod glam_interop;

pub use context::*;
pub use matrix::*;
pub use tagged::*;
pub use tolerance::*;
pub use vector::*;

pub use tensors_core::{ElementKind, Error, Real, Result, Scalar, Space, Untagged};

/// Prelude module for convenient imports.
///
/// ```
/// use tensors_math::prelude::*;
///
/// let v: Vec3<f32> = Vec3::zero();
/// assert_eq!(Mat3::identity() * v, v);
/// ```
pub mod prelude {
    pub use crate::{Context3, Context4, Mat3, Mat4, Tagged, Tolerance, Vec2, Vec3, Vec4};
    pub use tensors_core::prelude::*;
}
