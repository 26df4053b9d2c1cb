//! Space markers for compile-time tagging.
//!
//! A space is a zero-sized marker type naming the coordinate system or unit
//! a value belongs to (world space, object space, meters, ...). Markers
//! carry no data and exist only as type parameters, so a world-space
//! vector cannot be added to an object-space vector by accident.
//!
//! # Implementing a Space
//!
//! ```
//! use tensors_core::Space;
//!
//! #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
//! pub struct World;
//!
//! impl Space for World {
//!     const NAME: &'static str = "world";
//! }
//!
//! assert_eq!(World::NAME, "world");
//! ```

use std::fmt;

/// Trait for space marker types.
pub trait Space: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the space, used in debug output.
    const NAME: &'static str;
}

/// The space of values that have not been tagged with anything in
/// particular.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Untagged;

impl Space for Untagged {
    const NAME: &'static str = "untagged";
}
