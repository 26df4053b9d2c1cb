//! 3x3 and 4x4 matrices.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! Matrices are only defined for [`Real`] element kinds.
//!
//! # Element access
//!
//! There are three tiers of element access:
//!
//! - [`get`](Mat4::get)/[`set`](Mat4::set), [`row`](Mat4::row),
//!   [`column`](Mat4::column) and friends return
//!   [`Error::RowColumnOutOfBounds`] for indices outside `0..N`.
//! - [`get_rc`](Mat4::get_rc)/[`set_rc`](Mat4::set_rc) take the indices as
//!   const generics and reject bad indices at compile time.
//! - [`get_unchecked`](Mat4::get_unchecked)/[`set_unchecked`](Mat4::set_unchecked)
//!   are `unsafe` and skip the check entirely.
//!
//! [`Real`]: tensors_core::Real
//! [`Error::RowColumnOutOfBounds`]: tensors_core::Error::RowColumnOutOfBounds

/// Generates the operation surface shared by all matrix sizes.
///
/// `$Mat` is the matrix type, `$Vec` the matching vector type, `$Ctx` the
/// scratch context used for inversion and `$n` the dimension.
macro_rules! impl_matrix {
    ($Mat:ident, $Vec:ident, $Ctx:ident, $n:literal) => {
        impl<T: ::tensors_core::Real> $Mat<T> {
            /// Matrix dimension.
            pub const DIM: usize = $n;

            /// The identity matrix.
            #[inline]
            pub fn identity() -> Self {
                Self {
                    m: ::std::array::from_fn(|r| {
                        ::std::array::from_fn(|c| if r == c { T::one() } else { T::zero() })
                    }),
                }
            }

            /// The zero matrix.
            #[inline]
            pub fn zero() -> Self {
                Self {
                    m: [[T::zero(); $n]; $n],
                }
            }

            /// Creates a matrix from row arrays.
            #[inline]
            pub const fn from_rows(rows: [[T; $n]; $n]) -> Self {
                Self { m: rows }
            }

            /// Creates a matrix from column arrays.
            ///
            /// Transposes the input (columns become rows internally).
            #[inline]
            pub fn from_cols(cols: [[T; $n]; $n]) -> Self {
                Self::from_rows(cols).transpose()
            }

            /// Copies every element of `src` into `self`.
            #[inline]
            pub fn copy_from(&mut self, src: &Self) {
                self.m = src.m;
            }

            /// Resets every element to zero.
            #[inline]
            pub fn set_zero(&mut self) {
                *self = Self::zero();
            }

            /// Resets to the identity matrix.
            #[inline]
            pub fn set_identity(&mut self) {
                *self = Self::identity();
            }

            #[inline]
            fn check(row: usize, column: usize) -> ::tensors_core::Result<()> {
                if row < $n && column < $n {
                    Ok(())
                } else {
                    Err(::tensors_core::Error::row_column_out_of_bounds(row, column, $n))
                }
            }

            /// Returns the element at (`row`, `column`).
            #[inline]
            pub fn get(&self, row: usize, column: usize) -> ::tensors_core::Result<T> {
                Self::check(row, column)?;
                Ok(self.m[row][column])
            }

            /// Sets the element at (`row`, `column`).
            #[inline]
            pub fn set(&mut self, row: usize, column: usize, v: T) -> ::tensors_core::Result<()> {
                Self::check(row, column)?;
                self.m[row][column] = v;
                Ok(())
            }

            /// Returns the element at (`R`, `C`), checked at compile time.
            #[inline]
            pub fn get_rc<const R: usize, const C: usize>(&self) -> T {
                const { assert!(R < $n && C < $n, "row/column out of range") };
                self.m[R][C]
            }

            /// Sets the element at (`R`, `C`), checked at compile time.
            #[inline]
            pub fn set_rc<const R: usize, const C: usize>(&mut self, v: T) {
                const { assert!(R < $n && C < $n, "row/column out of range") };
                self.m[R][C] = v;
            }

            /// Returns the element at (`row`, `column`) without a bounds check.
            ///
            /// # Safety
            ///
            /// `row` and `column` must both be less than the matrix dimension.
            #[inline]
            pub unsafe fn get_unchecked(&self, row: usize, column: usize) -> T {
                unsafe { *self.m.get_unchecked(row).get_unchecked(column) }
            }

            /// Sets the element at (`row`, `column`) without a bounds check.
            ///
            /// # Safety
            ///
            /// `row` and `column` must both be less than the matrix dimension.
            #[inline]
            pub unsafe fn set_unchecked(&mut self, row: usize, column: usize, v: T) {
                unsafe {
                    *self.m.get_unchecked_mut(row).get_unchecked_mut(column) = v;
                }
            }

            /// Returns row `i`.
            #[inline]
            pub fn row(&self, i: usize) -> ::tensors_core::Result<$Vec<T>> {
                Self::check(i, 0)?;
                Ok($Vec::from_array(self.m[i]))
            }

            /// Replaces row `i`.
            #[inline]
            pub fn set_row(&mut self, i: usize, v: $Vec<T>) -> ::tensors_core::Result<()> {
                Self::check(i, 0)?;
                self.m[i] = v.to_array();
                Ok(())
            }

            /// Returns column `j`.
            #[inline]
            pub fn column(&self, j: usize) -> ::tensors_core::Result<$Vec<T>> {
                Self::check(0, j)?;
                Ok($Vec::from_array(::std::array::from_fn(|r| self.m[r][j])))
            }

            /// Replaces column `j`.
            #[inline]
            pub fn set_column(&mut self, j: usize, v: $Vec<T>) -> ::tensors_core::Result<()> {
                Self::check(0, j)?;
                let a = v.to_array();
                for (r, row) in self.m.iter_mut().enumerate() {
                    row[j] = a[r];
                }
                Ok(())
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self {
                    m: ::std::array::from_fn(|r| ::std::array::from_fn(|c| self.m[c][r])),
                }
            }

            /// Transposes in place.
            #[inline]
            pub fn transpose_in_place(&mut self) {
                for r in 0..$n {
                    for c in (r + 1)..$n {
                        let t = self.m[r][c];
                        self.m[r][c] = self.m[c][r];
                        self.m[c][r] = t;
                    }
                }
            }

            /// Sum of the diagonal elements.
            #[inline]
            pub fn trace(&self) -> T {
                (0..$n).fold(T::zero(), |acc, i| acc + self.m[i][i])
            }

            /// Multiplies two matrices, returning `self * other`.
            #[inline]
            pub fn multiply(&self, other: &Self) -> Self {
                let mut out = Self::zero();
                Self::multiply_into(self, other, &mut out);
                out
            }

            /// Writes `a * b` into `out`.
            ///
            /// `out` is written while `a` and `b` are still being read, so it
            /// must not alias either of them; the borrow rules guarantee it.
            #[inline]
            pub fn multiply_into(a: &Self, b: &Self, out: &mut Self) {
                for r in 0..$n {
                    for c in 0..$n {
                        out.m[r][c] = (0..$n).fold(T::zero(), |acc, k| acc + a.m[r][k] * b.m[k][c]);
                    }
                }
            }

            /// Transforms a vector by this matrix (`self * v`).
            #[inline]
            pub fn transform(&self, v: $Vec<T>) -> $Vec<T> {
                let a = v.to_array();
                $Vec::from_array(::std::array::from_fn(|r| {
                    (0..$n).fold(T::zero(), |acc, k| acc + self.m[r][k] * a[k])
                }))
            }

            /// Multiplies every element by `r`.
            #[inline]
            pub fn scaled(&self, r: T) -> Self {
                Self {
                    m: self.m.map(|row| row.map(|v| v * r)),
                }
            }

            /// Returns true if all elements are finite (not NaN or infinite).
            #[inline]
            pub fn is_finite(&self) -> bool {
                self.m.iter().flatten().all(|x| x.is_finite())
            }

            /// Inverse of this matrix, or `None` if it is singular.
            pub fn inverse(&self) -> Option<Self> {
                let mut context = $Ctx::new();
                let mut out = Self::zero();
                Self::invert_with(&mut context, self, &mut out).then_some(out)
            }
        }

        impl<T: ::tensors_core::Real> Default for $Mat<T> {
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<T: ::tensors_core::Real> ::std::ops::Mul<$Vec<T>> for $Mat<T> {
            type Output = $Vec<T>;

            #[inline]
            fn mul(self, rhs: $Vec<T>) -> $Vec<T> {
                self.transform(rhs)
            }
        }

        impl<T: ::tensors_core::Real> ::std::ops::Mul for $Mat<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.multiply(&rhs)
            }
        }

        impl<T: ::tensors_core::Real> ::std::ops::Mul<T> for $Mat<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                self.scaled(rhs)
            }
        }

        impl<T: ::tensors_core::Real> ::std::ops::Index<usize> for $Mat<T> {
            type Output = [T; $n];

            #[inline]
            fn index(&self, i: usize) -> &[T; $n] {
                &self.m[i]
            }
        }

        impl<T: ::tensors_core::Real> ::std::ops::IndexMut<usize> for $Mat<T> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut [T; $n] {
                &mut self.m[i]
            }
        }

        impl<T: ::tensors_core::Real> ::approx::AbsDiffEq for $Mat<T> {
            type Epsilon = T;

            #[inline]
            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T: ::tensors_core::Real> ::approx::RelativeEq for $Mat<T> {
            #[inline]
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<T: ::tensors_core::Real> ::approx::UlpsEq for $Mat<T> {
            #[inline]
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                self.m
                    .iter()
                    .flatten()
                    .zip(other.m.iter().flatten())
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

mod mat3;
mod mat4;

pub use mat3::Mat3;
pub use mat4::Mat4;
