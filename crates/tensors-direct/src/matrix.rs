//! Matrix views over flat buffers.
//!
//! A `DirectMatN` covers `N * N` consecutive elements in **column-major**
//! order, the layout graphics APIs expect: element (`row`, `column`) lives
//! at `offset + column * N + row`. The matrices produced and consumed are
//! the usual row-major [`Mat3`]/[`Mat4`].
//!
//! ```rust
//! use tensors_direct::DirectMat4;
//! use tensors_math::{Mat4, Vec3};
//!
//! let mut uniforms = [0.0f32; 32];
//! let mut model = DirectMat4::<_, f32>::new(&mut uniforms, 16);
//! model.set(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)))?;
//! assert_eq!(uniforms[28..32], [1.0, 2.0, 3.0, 1.0]);
//! # Ok::<(), tensors_core::Error>(())
//! ```

use std::marker::PhantomData;

use tensors_core::{Error, Real, Result};
use tensors_math::{Mat3, Mat4, Vec3, Vec4};

use crate::bounds::{slot, span};

macro_rules! impl_direct_mat {
    ($Direct:ident, $Mat:ident, $Vec:ident, $n:literal) => {
        #[doc = concat!("A [`", stringify!($Mat), "`] stored column-major in `", stringify!($n), " * ", stringify!($n), "` consecutive buffer elements.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $Direct<B, T> {
            buffer: B,
            offset: usize,
            _element: PhantomData<T>,
        }

        impl<B, T: Real> $Direct<B, T> {
            /// Number of elements the view covers.
            pub const LEN: usize = $n * $n;

            /// Creates a view at element `offset` of `buffer`.
            #[inline]
            pub const fn new(buffer: B, offset: usize) -> Self {
                Self {
                    buffer,
                    offset,
                    _element: PhantomData,
                }
            }

            /// Element offset of the first element.
            #[inline]
            pub fn offset(&self) -> usize {
                self.offset
            }

            /// Consumes the view and returns the buffer.
            #[inline]
            pub fn into_inner(self) -> B {
                self.buffer
            }

            #[inline]
            fn index_of(row: usize, column: usize) -> Result<usize> {
                if row < $n && column < $n {
                    Ok(column * $n + row)
                } else {
                    Err(Error::row_column_out_of_bounds(row, column, $n))
                }
            }
        }

        impl<B: AsRef<[T]>, T: Real> $Direct<B, T> {
            /// Number of elements in the underlying buffer.
            #[inline]
            pub fn capacity(&self) -> usize {
                self.buffer.as_ref().len()
            }

            /// Reads the whole matrix.
            pub fn get(&self) -> Result<$Mat<T>> {
                let data = self.buffer.as_ref();
                let start = span(self.offset, Self::LEN, data.len())?;
                Ok($Mat::from_cols(::std::array::from_fn(|c| {
                    ::std::array::from_fn(|r| data[start + c * $n + r])
                })))
            }

            /// Reads the element at (`row`, `column`).
            pub fn get_rc(&self, row: usize, column: usize) -> Result<T> {
                let index = Self::index_of(row, column)?;
                let data = self.buffer.as_ref();
                Ok(data[slot(self.offset, index, data.len())?])
            }

            /// Reads row `i`.
            pub fn row(&self, i: usize) -> Result<$Vec<T>> {
                let last = Self::index_of(i, $n - 1)?;
                let data = self.buffer.as_ref();
                slot(self.offset, last, data.len())?;
                Ok($Vec::from_array(::std::array::from_fn(|c| data[self.offset + c * $n + i])))
            }

            /// Reads column `j`.
            pub fn column(&self, j: usize) -> Result<$Vec<T>> {
                let first = Self::index_of(0, j)?;
                let data = self.buffer.as_ref();
                slot(self.offset, first + $n - 1, data.len())?;
                let start = self.offset + first;
                Ok($Vec::from_array(::std::array::from_fn(|r| data[start + r])))
            }
        }

        impl<B: AsRef<[T]> + AsMut<[T]>, T: Real> $Direct<B, T> {
            /// Writes the whole matrix.
            ///
            /// Nothing is written unless every element fits.
            pub fn set(&mut self, m: $Mat<T>) -> Result<()> {
                let capacity = self.capacity();
                let start = span(self.offset, Self::LEN, capacity)?;
                let data = &mut self.buffer.as_mut()[start..start + Self::LEN];
                for (c, column) in data.chunks_exact_mut($n).enumerate() {
                    for (r, x) in column.iter_mut().enumerate() {
                        *x = m.m[r][c];
                    }
                }
                Ok(())
            }

            /// Writes the element at (`row`, `column`).
            pub fn set_rc(&mut self, row: usize, column: usize, value: T) -> Result<()> {
                let index = Self::index_of(row, column)?;
                let i = slot(self.offset, index, self.capacity())?;
                self.buffer.as_mut()[i] = value;
                Ok(())
            }

            /// Reads the matrix, applies `f` and writes the result back.
            pub fn update(&mut self, f: impl FnOnce($Mat<T>) -> $Mat<T>) -> Result<()> {
                let m = self.get()?;
                self.set(f(m))
            }
        }

        #[cfg(feature = "bytemuck")]
        impl<'a, T: Real + ::bytemuck::Pod> $Direct<&'a [T], T> {
            /// Views raw bytes as elements.
            ///
            /// Fails with [`Error::Cast`] when `bytes` is misaligned for `T`
            /// or not a whole number of elements long.
            pub fn from_bytes(bytes: &'a [u8], offset: usize) -> Result<Self> {
                let elements = ::bytemuck::try_cast_slice(bytes)
                    .map_err(|e| Error::cast(format!("{e:?}")))?;
                Ok(Self::new(elements, offset))
            }
        }

        #[cfg(feature = "bytemuck")]
        impl<'a, T: Real + ::bytemuck::Pod> $Direct<&'a mut [T], T> {
            /// Views raw bytes as mutable elements.
            pub fn from_bytes_mut(bytes: &'a mut [u8], offset: usize) -> Result<Self> {
                let elements = ::bytemuck::try_cast_slice_mut(bytes)
                    .map_err(|e| Error::cast(format!("{e:?}")))?;
                Ok(Self::new(elements, offset))
            }
        }
    };
}

impl_direct_mat!(DirectMat3, Mat3, Vec3, 3);
impl_direct_mat!(DirectMat4, Mat4, Vec4, 4);
