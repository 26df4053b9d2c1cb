//! Vector views over flat buffers.
//!
//! A `DirectVecN` reads and writes `N` consecutive elements of a buffer
//! starting at an element offset. The view stores no components of its
//! own; every access goes to the buffer and is bounds checked first.
//!
//! ```rust
//! use tensors_direct::DirectVec3;
//! use tensors_math::Vec3;
//!
//! let mut positions = vec![0.0f32; 9];
//! let mut second = DirectVec3::<_, f32>::new(&mut positions[..], 3);
//! second.set(Vec3::new(1.0, 2.0, 3.0))?;
//! second.set_y(5.0)?;
//! assert_eq!(positions[3..6], [1.0, 5.0, 3.0]);
//! # Ok::<(), tensors_core::Error>(())
//! ```

use std::marker::PhantomData;

use tensors_core::{Result, Scalar};
use tensors_math::{Vec2, Vec3, Vec4};

use crate::bounds::{slot, span};

macro_rules! impl_direct_vec {
    ($Direct:ident, $Vec:ident, $n:literal, $($get:ident, $set:ident => $idx:literal),+) => {
        #[doc = concat!("A [`", stringify!($Vec), "`] stored in `", stringify!($n), "` consecutive buffer elements.")]
        ///
        /// Reads need `B: AsRef<[T]>`; writes additionally need
        /// `B: AsMut<[T]>`. Owned buffers, slices and arrays all work.
        #[derive(Debug, Clone, Copy)]
        pub struct $Direct<B, T> {
            buffer: B,
            offset: usize,
            _element: PhantomData<T>,
        }

        impl<B, T: Scalar> $Direct<B, T> {
            /// Number of elements the view covers.
            pub const LEN: usize = $n;

            /// Creates a view at element `offset` of `buffer`.
            ///
            /// The offset is not validated here; out-of-range views fail on
            /// every access instead.
            #[inline]
            pub const fn new(buffer: B, offset: usize) -> Self {
                Self {
                    buffer,
                    offset,
                    _element: PhantomData,
                }
            }

            /// Element offset of the first component.
            #[inline]
            pub fn offset(&self) -> usize {
                self.offset
            }

            /// Consumes the view and returns the buffer.
            #[inline]
            pub fn into_inner(self) -> B {
                self.buffer
            }
        }

        impl<B: AsRef<[T]>, T: Scalar> $Direct<B, T> {
            /// Number of elements in the underlying buffer.
            #[inline]
            pub fn capacity(&self) -> usize {
                self.buffer.as_ref().len()
            }

            /// Reads the whole vector.
            pub fn get(&self) -> Result<$Vec<T>> {
                let data = self.buffer.as_ref();
                let start = span(self.offset, $n, data.len())?;
                Ok($Vec::from_array(::std::array::from_fn(|i| data[start + i])))
            }

            /// Reads component `index`.
            #[inline]
            pub fn component(&self, index: usize) -> Result<T> {
                let data = self.buffer.as_ref();
                if index >= $n {
                    return Err(::tensors_core::Error::index_out_of_bounds(index, self.offset, data.len()));
                }
                Ok(data[slot(self.offset, index, data.len())?])
            }

            $(
                #[doc = concat!("Reads component `", stringify!($get), "`.")]
                #[inline]
                pub fn $get(&self) -> Result<T> {
                    self.component($idx)
                }
            )+
        }

        impl<B: AsRef<[T]> + AsMut<[T]>, T: Scalar> $Direct<B, T> {
            /// Writes the whole vector.
            ///
            /// Nothing is written unless every component fits.
            pub fn set(&mut self, v: $Vec<T>) -> Result<()> {
                let capacity = self.capacity();
                let start = span(self.offset, $n, capacity)?;
                self.buffer.as_mut()[start..start + $n].copy_from_slice(&v.to_array());
                Ok(())
            }

            /// Writes component `index`.
            #[inline]
            pub fn set_component(&mut self, index: usize, value: T) -> Result<()> {
                let capacity = self.capacity();
                if index >= $n {
                    return Err(::tensors_core::Error::index_out_of_bounds(index, self.offset, capacity));
                }
                let i = slot(self.offset, index, capacity)?;
                self.buffer.as_mut()[i] = value;
                Ok(())
            }

            $(
                #[doc = concat!("Writes component `", stringify!($get), "`.")]
                #[inline]
                pub fn $set(&mut self, value: T) -> Result<()> {
                    self.set_component($idx, value)
                }
            )+

            /// Reads the vector, applies `f` and writes the result back.
            pub fn update(&mut self, f: impl FnOnce($Vec<T>) -> $Vec<T>) -> Result<()> {
                let v = self.get()?;
                self.set(f(v))
            }
        }

        #[cfg(feature = "bytemuck")]
        impl<'a, T: Scalar + ::bytemuck::Pod> $Direct<&'a [T], T> {
            /// Views raw bytes as elements.
            ///
            /// Fails with [`Error::Cast`](tensors_core::Error::Cast) when
            /// `bytes` is misaligned for `T` or not a whole number of
            /// elements long.
            pub fn from_bytes(bytes: &'a [u8], offset: usize) -> Result<Self> {
                let elements = ::bytemuck::try_cast_slice(bytes)
                    .map_err(|e| ::tensors_core::Error::cast(format!("{e:?}")))?;
                Ok(Self::new(elements, offset))
            }
        }

        #[cfg(feature = "bytemuck")]
        impl<'a, T: Scalar + ::bytemuck::Pod> $Direct<&'a mut [T], T> {
            /// Views raw bytes as mutable elements.
            ///
            /// See `from_bytes` for the failure cases.
            pub fn from_bytes_mut(bytes: &'a mut [u8], offset: usize) -> Result<Self> {
                let elements = ::bytemuck::try_cast_slice_mut(bytes)
                    .map_err(|e| ::tensors_core::Error::cast(format!("{e:?}")))?;
                Ok(Self::new(elements, offset))
            }
        }
    };
}

impl_direct_vec!(DirectVec2, Vec2, 2, x, set_x => 0, y, set_y => 1);
impl_direct_vec!(DirectVec3, Vec3, 3, x, set_x => 0, y, set_y => 1, z, set_z => 2);
impl_direct_vec!(DirectVec4, Vec4, 4, x, set_x => 0, y, set_y => 1, z, set_z => 2, w, set_w => 3);
