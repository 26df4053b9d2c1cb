//! Tolerances for almost-equal comparison.
//!
//! Floating point vectors and matrices implement the [`approx`] traits, so
//! the `approx` macros work on them directly. [`Tolerance`] bundles an
//! absolute and a relative epsilon into a value that can be stored,
//! configured once and passed around:
//!
//! ```rust
//! use tensors_math::{Tolerance, Vec3};
//!
//! let tol = Tolerance::<f32>::default().with_epsilon(1e-4);
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(1.00001, 2.0, 3.0);
//! assert!(tol.almost_equal(&a, &b));
//! assert!(!Tolerance::<f32>::exact().almost_equal(&a, &b));
//! ```
//!
//! Integer vectors have no tolerance; they compare with `==`.

use approx::RelativeEq;
use tensors_core::Real;

/// Absolute and relative epsilon used for almost-equal comparison.
///
/// Two values are almost equal when their difference is within `epsilon`,
/// or within `max_relative` times the larger magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance<T> {
    /// Absolute difference below which values are equal.
    pub epsilon: T,
    /// Relative difference below which values are equal.
    pub max_relative: T,
}

impl<T: Real> Default for Tolerance<T> {
    /// Machine epsilon for both bounds, matching the `approx` defaults.
    fn default() -> Self {
        Self {
            epsilon: T::default_epsilon(),
            max_relative: T::default_max_relative(),
        }
    }
}

impl<T: Real> Tolerance<T> {
    /// Creates a tolerance from explicit bounds.
    #[inline]
    pub fn new(epsilon: T, max_relative: T) -> Self {
        Self {
            epsilon,
            max_relative,
        }
    }

    /// A tolerance that only accepts exactly equal values.
    #[inline]
    pub fn exact() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Returns a copy with a different absolute epsilon.
    #[inline]
    pub fn with_epsilon(self, epsilon: T) -> Self {
        Self { epsilon, ..self }
    }

    /// Returns a copy with a different relative epsilon.
    #[inline]
    pub fn with_max_relative(self, max_relative: T) -> Self {
        Self {
            max_relative,
            ..self
        }
    }

    /// Compares two scalars, vectors or matrices.
    #[inline]
    pub fn almost_equal<V>(&self, a: &V, b: &V) -> bool
    where
        V: RelativeEq<Epsilon = T>,
    {
        a.relative_eq(b, self.epsilon, self.max_relative)
    }
}
