//! Space-tagged values.
//!
//! [`Tagged`] attaches a zero-sized [`Space`] marker to any vector or
//! matrix. Tagged values of different spaces are different types, so mixing
//! them is a compile error:
//!
//! ```compile_fail
//! use tensors_core::Space;
//! use tensors_math::{Tagged, Vec3};
//!
//! #[derive(Copy, Clone, Debug, Default)]
//! struct World;
//! impl Space for World { const NAME: &'static str = "world"; }
//!
//! #[derive(Copy, Clone, Debug, Default)]
//! struct Eye;
//! impl Space for Eye { const NAME: &'static str = "eye"; }
//!
//! let a: Tagged<World, _> = Tagged::new(Vec3::new(1.0, 0.0, 0.0));
//! let b: Tagged<Eye, _> = Tagged::new(Vec3::new(0.0, 1.0, 0.0));
//! let _ = a + b;
//! ```
//!
//! The tag costs nothing at runtime: `Tagged<S, V>` has the size and
//! layout of `V`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, Deref, Mul, Neg, Sub};

use tensors_core::Space;

/// A value of type `V` tagged with the space `S`.
///
/// The comparison and hashing impls only look at the value, so space
/// markers need not implement them.
#[repr(transparent)]
pub struct Tagged<S: Space, V> {
    value: V,
    _space: PhantomData<S>,
}

impl<S: Space, V> Tagged<S, V> {
    /// Tags a value.
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            _space: PhantomData,
        }
    }

    /// Borrows the untagged value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutably borrows the untagged value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Removes the tag.
    #[inline]
    pub fn into_inner(self) -> V {
        self.value
    }

    /// Moves the value into another space without changing it.
    #[inline]
    pub fn retag<S2: Space>(self) -> Tagged<S2, V> {
        Tagged::new(self.value)
    }

    /// Applies `f` to the value, keeping the tag.
    #[inline]
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Tagged<S, W> {
        Tagged::new(f(self.value))
    }
}

impl<S: Space, V: Clone> Clone for Tagged<S, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<S: Space, V: Copy> Copy for Tagged<S, V> {}

impl<S: Space, V: Default> Default for Tagged<S, V> {
    #[inline]
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<S: Space, V: PartialEq> PartialEq for Tagged<S, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S: Space, V: Eq> Eq for Tagged<S, V> {}

impl<S: Space, V: Hash> Hash for Tagged<S, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<S: Space, V> Deref for Tagged<S, V> {
    type Target = V;

    #[inline]
    fn deref(&self) -> &V {
        &self.value
    }
}

impl<S: Space, V: fmt::Debug> fmt::Debug for Tagged<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", S::NAME, self.value)
    }
}

impl<S: Space, V: Add<Output = V>> Add for Tagged<S, V> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<S: Space, V: Sub<Output = V>> Sub for Tagged<S, V> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<S: Space, V: Neg<Output = V>> Neg for Tagged<S, V> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<S: Space, V: Mul<R, Output = V>, R> Mul<R> for Tagged<S, V> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::new(self.value * rhs)
    }
}
