//! 2, 3 and 4 component vectors.
//!
//! [`Vec2`], [`Vec3`] and [`Vec4`] are generic over any [`Scalar`]
//! element kind. The operation surface is shared by all three sizes and
//! generated by `impl_vector!`; each size adds its own extras (cross
//! product for `Vec3`, angle for `Vec2`, homogeneous default for `Vec4`).
//!
//! # Element kinds
//!
//! Everything that only needs ring arithmetic is available for every kind:
//!
//! - add, subtract (operators), [`scale`](Vec3::scale), [`add_scaled`](Vec3::add_scaled)
//! - [`dot`](Vec3::dot), [`magnitude`](Vec3::magnitude), [`distance`](Vec3::distance)
//! - [`interpolate_linear`](Vec3::interpolate_linear), [`projection`](Vec3::projection)
//! - the clamp family and [`absolute`](Vec3::absolute)
//!
//! Dot products and magnitudes are returned as `f64` whatever the element
//! kind, so integer vectors never overflow while measuring themselves.
//! Component arithmetic on integer kinds wraps on overflow in every build
//! profile.
//!
//! Normalization, orthonormalization, angles and almost-equal comparison
//! only exist for [`Real`] element kinds. Integer vectors do not have
//! those methods at all; they compare with exact `==` and are `Eq + Hash`.
//!
//! # Mutability
//!
//! There is one type per size. Methods taking `self` return new values;
//! in-place updates go through the public fields, [`IndexMut`], the
//! `*Assign` operators or the `*_in_place` methods.
//!
//! ```rust
//! use tensors_math::Vec3;
//!
//! let mut v = Vec3::new(1, 2, 3);
//! v += Vec3::splat(1);
//! v.z = 10;
//! assert_eq!(v, Vec3::new(2, 3, 10));
//! assert_eq!(v.dot(v), 113.0);
//! ```
//!
//! [`Scalar`]: tensors_core::Scalar
//! [`Real`]: tensors_core::Real
//! [`IndexMut`]: std::ops::IndexMut

/// Generates the operation surface shared by all vector sizes.
///
/// `$Vec` is the struct name, `$n` its component count, followed by
/// `field => index` pairs in component order.
macro_rules! impl_vector {
    ($Vec:ident, $n:literal, $($field:ident => $idx:literal),+) => {
        impl<T: ::tensors_core::Scalar> $Vec<T> {
            /// Number of components.
            pub const DIM: usize = $n;

            /// Creates a new vector.
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Creates a vector with all components set to the same value.
            #[inline]
            pub fn splat(v: T) -> Self {
                Self { $($field: v),+ }
            }

            /// The zero vector.
            #[inline]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }

            /// Creates from an array.
            #[inline]
            pub fn from_array(a: [T; $n]) -> Self {
                Self { $($field: a[$idx]),+ }
            }

            /// Converts to an array.
            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// Returns component `i`, or an error if `i` is out of range.
            #[inline]
            pub fn get(&self, i: usize) -> ::tensors_core::Result<T> {
                match i {
                    $($idx => Ok(self.$field),)+
                    _ => Err(::tensors_core::Error::index_out_of_bounds(i, 0, $n)),
                }
            }

            /// Sets component `i`, or returns an error if `i` is out of range.
            #[inline]
            pub fn set(&mut self, i: usize, v: T) -> ::tensors_core::Result<()> {
                match i {
                    $($idx => {
                        self.$field = v;
                        Ok(())
                    })+
                    _ => Err(::tensors_core::Error::index_out_of_bounds(i, 0, $n)),
                }
            }

            /// Multiplies every component by `r`.
            #[inline]
            pub fn scale(self, r: T) -> Self {
                Self { $($field: self.$field.mul_elem(r)),+ }
            }

            /// Returns `self + b * r`.
            #[inline]
            pub fn add_scaled(self, b: Self, r: T) -> Self {
                Self { $($field: self.$field.add_elem(b.$field.mul_elem(r))),+ }
            }

            /// Dot product, widened to `f64`.
            #[inline]
            pub fn dot(self, other: Self) -> f64 {
                0.0 $(+ self.$field.widen() * other.$field.widen())+
            }

            /// Squared magnitude. Equal to `self.dot(self)`.
            #[inline]
            pub fn magnitude_squared(self) -> f64 {
                self.dot(self)
            }

            /// Magnitude (length) of the vector.
            #[inline]
            pub fn magnitude(self) -> f64 {
                self.magnitude_squared().sqrt()
            }

            /// Euclidean distance to `other`.
            ///
            /// Differences are taken in `f64`, so integer vectors at opposite
            /// ends of their range do not overflow.
            #[inline]
            pub fn distance(self, other: Self) -> f64 {
                let sum = 0.0 $(+ {
                    let d = self.$field.widen() - other.$field.widen();
                    d * d
                })+;
                sum.sqrt()
            }

            /// Linear interpolation between `self` and `other`.
            ///
            /// `t = 0.0` returns `self` and `t = 1.0` returns `other` exactly.
            /// Integer components are interpolated in `f64` and truncated.
            #[inline]
            pub fn interpolate_linear(self, other: Self, t: f64) -> Self {
                Self { $($field: T::lerp(self.$field, other.$field, t)),+ }
            }

            /// Projects `self` onto `q`: `q * (dot(self, q) / dot(q, q))`.
            ///
            /// Perpendicular vectors project to zero. Projecting onto a zero
            /// vector yields NaN components for floats and zeros for integers.
            #[inline]
            pub fn projection(self, q: Self) -> Self {
                let ratio = self.dot(q) / q.dot(q);
                Self { $($field: T::narrow(q.$field.widen() * ratio)),+ }
            }

            /// Clamps each component to `[min, max]`.
            #[inline]
            pub fn clamp(self, min: T, max: T) -> Self {
                Self { $($field: self.$field.clamp_to(min, max)),+ }
            }

            /// Raises each component to at least `min`.
            #[inline]
            pub fn clamp_minimum(self, min: T) -> Self {
                Self { $($field: self.$field.max_of(min)),+ }
            }

            /// Lowers each component to at most `max`.
            #[inline]
            pub fn clamp_maximum(self, max: T) -> Self {
                Self { $($field: self.$field.min_of(max)),+ }
            }

            /// Clamps each component against the matching components of
            /// `min` and `max`.
            #[inline]
            pub fn clamp_by_vector(self, min: Self, max: Self) -> Self {
                Self { $($field: self.$field.clamp_to(min.$field, max.$field)),+ }
            }

            /// Component-wise maximum with `min`.
            #[inline]
            pub fn clamp_minimum_by_vector(self, min: Self) -> Self {
                Self { $($field: self.$field.max_of(min.$field)),+ }
            }

            /// Component-wise minimum with `max`.
            #[inline]
            pub fn clamp_maximum_by_vector(self, max: Self) -> Self {
                Self { $($field: self.$field.min_of(max.$field)),+ }
            }

            /// Component-wise absolute value.
            #[inline]
            pub fn absolute(self) -> Self {
                Self { $($field: self.$field.absolute()),+ }
            }

            /// Returns the smallest component.
            #[inline]
            pub fn min_element(self) -> T {
                let a = self.to_array();
                a.iter().skip(1).fold(a[0], |m, &v| m.min_of(v))
            }

            /// Returns the largest component.
            #[inline]
            pub fn max_element(self) -> T {
                let a = self.to_array();
                a.iter().skip(1).fold(a[0], |m, &v| m.max_of(v))
            }
        }

        impl<T: ::tensors_core::Real> $Vec<T> {
            /// Normalizes the vector to unit length.
            ///
            /// Returns the vector unchanged if its magnitude is zero.
            #[inline]
            pub fn normalize(self) -> Self {
                let m = self.magnitude();
                if m == 0.0 {
                    return self;
                }
                Self { $($field: T::narrow(self.$field.widen() / m)),+ }
            }

            /// Normalizes in place. See [`normalize`](Self::normalize).
            #[inline]
            pub fn normalize_in_place(&mut self) {
                *self = self.normalize();
            }

            /// Gram-Schmidt orthonormalization of two vectors.
            ///
            /// Returns `(n0, n1)` where `n0` is `v0` normalized and `n1` is the
            /// normalized part of `v1` perpendicular to `n0`.
            pub fn orthonormalize(v0: Self, v1: Self) -> (Self, Self) {
                let n0 = v0.normalize();
                let n1 = (v1 - v1.projection(n0)).normalize();
                (n0, n1)
            }

            /// Returns true if all components are finite (not NaN or infinite).
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }

            /// Returns true if any component is NaN.
            #[inline]
            pub fn is_nan(self) -> bool {
                false $(|| self.$field.is_nan())+
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::Index<usize> for $Vec<T> {
            type Output = T;

            #[inline]
            fn index(&self, i: usize) -> &T {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!(concat!(stringify!($Vec), " index out of bounds: {}"), i),
                }
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::IndexMut<usize> for $Vec<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!(concat!(stringify!($Vec), " index out of bounds: {}"), i),
                }
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::Add for $Vec<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field.add_elem(rhs.$field)),+ }
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::Sub for $Vec<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field.sub_elem(rhs.$field)),+ }
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::Neg for $Vec<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: self.$field.neg_elem()),+ }
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::Mul<T> for $Vec<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                self.scale(rhs)
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::AddAssign for $Vec<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field.add_elem(rhs.$field);)+
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::SubAssign for $Vec<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field.sub_elem(rhs.$field);)+
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::ops::MulAssign<T> for $Vec<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field.mul_elem(rhs);)+
            }
        }

        impl<T: ::tensors_core::Scalar> From<[T; $n]> for $Vec<T> {
            #[inline]
            fn from(a: [T; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl<T: ::tensors_core::Scalar> From<$Vec<T>> for [T; $n] {
            #[inline]
            fn from(v: $Vec<T>) -> [T; $n] {
                v.to_array()
            }
        }

        impl<T: ::tensors_core::Scalar> ::std::fmt::Display for $Vec<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let a = self.to_array();
                write!(f, "(")?;
                for (i, v) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, ")")
            }
        }

        impl<T: ::tensors_core::Real> ::approx::AbsDiffEq for $Vec<T> {
            type Epsilon = T;

            #[inline]
            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
            }
        }

        impl<T: ::tensors_core::Real> ::approx::RelativeEq for $Vec<T> {
            #[inline]
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
            }
        }

        impl<T: ::tensors_core::Real> ::approx::UlpsEq for $Vec<T> {
            #[inline]
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                true $(&& self.$field.ulps_eq(&other.$field, epsilon, max_ulps))+
            }
        }
    };
}

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
