/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use serde::{Deserialize, Serialize};

use crate::{Float, MatrixError};

/// The main structure in this library: an `n × n` matrix of [`Float`]
/// values.
///
/// The grid is stored row-major in a flat `Vec`, and `size >= 1` always
/// (a zero-sized matrix cannot be constructed). All operations that
/// return a new matrix allocate fresh storage, so results never alias
/// their operands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquareMat {
    size: usize,

    // Contains the data ordered by row,
    // going left to right, and up and down.
    data: Vec<Float>,
}

impl Default for SquareMat {
    /// A 1x1 matrix containing a single zero.
    fn default() -> Self {
        SquareMat {
            size: 1,
            data: vec![0.0],
        }
    }
}

impl SquareMat {
    /// Creates an `n x n` matrix full of zeroes.
    ///
    /// Returns [`MatrixError::InvalidSize`] when `n` is zero.
    pub fn new(n: usize) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::InvalidSize);
        }
        Ok(SquareMat {
            size: n,
            data: vec![0.0; n * n],
        })
    }

    /// Creates a `SquareMat` by copying the given grid of rows.
    ///
    /// The grid must be non-empty and square (each row as long as
    /// there are rows); otherwise [`MatrixError::InvalidShape`] is
    /// returned.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        if n == 0 {
            return Err(MatrixError::InvalidShape);
        }
        for row in &rows {
            if row.len() != n {
                return Err(MatrixError::InvalidShape);
            }
        }

        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            data.extend_from_slice(&row);
        }

        // return
        Ok(SquareMat { size: n, data })
    }

    /// Creates a `SquareMat` from a flat, row-major vector containing the
    /// elements of the matrix.
    ///
    /// Returns [`MatrixError::InvalidSize`] when `n` is zero and
    /// [`MatrixError::InvalidShape`] when `data.len() != n * n`.
    pub fn from_data(n: usize, data: Vec<Float>) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::InvalidSize);
        }
        if data.len() != n * n {
            return Err(MatrixError::InvalidShape);
        }
        Ok(SquareMat { size: n, data })
    }

    /// Creates an identity matrix of size `n x n`.
    ///
    /// Returns [`MatrixError::InvalidSize`] when `n` is zero.
    pub fn eye(n: usize) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::InvalidSize);
        }
        Ok(Self::identity(n))
    }

    /// Creates a square matrix with the elements of `values`
    /// in the diagonal.
    pub fn diag(values: Vec<Float>) -> Result<Self, MatrixError> {
        if values.is_empty() {
            return Err(MatrixError::InvalidSize);
        }
        let n = values.len();
        let mut ret = SquareMat {
            size: n,
            data: vec![0.0; n * n],
        };
        for (nrow, v) in values.into_iter().enumerate() {
            ret.data[nrow * (n + 1)] = v;
        }

        // return
        Ok(ret)
    }

    /// Identity of side `n`. The caller guarantees `n >= 1`.
    fn identity(n: usize) -> SquareMat {
        let mut ret = SquareMat {
            size: n,
            data: vec![0.0; n * n],
        };
        for i in 0..n {
            ret.data[i * (n + 1)] = 1.0;
        }
        ret
    }

    /// Returns the side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the index of an element within the `data` array of the matrix.
    fn index(&self, nrow: usize, ncol: usize) -> usize {
        self.size * nrow + ncol
    }

    fn check_bounds(&self, nrow: usize, ncol: usize) -> Result<(), MatrixError> {
        if nrow >= self.size {
            return Err(MatrixError::IndexOutOfRange {
                index: nrow,
                size: self.size,
            });
        }
        if ncol >= self.size {
            return Err(MatrixError::IndexOutOfRange {
                index: ncol,
                size: self.size,
            });
        }
        Ok(())
    }

    fn check_same_size(&self, other: &SquareMat) -> Result<(), MatrixError> {
        if self.size != other.size {
            return Err(MatrixError::SizeMismatch {
                lhs: self.size,
                rhs: other.size,
            });
        }
        Ok(())
    }

    /// Gets an element from the matrix.
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<Float, MatrixError> {
        self.check_bounds(nrow, ncol)?;
        Ok(self.data[self.index(nrow, ncol)])
    }

    /// Sets an element into the matrix.
    pub fn set(&mut self, nrow: usize, ncol: usize, v: Float) -> Result<(), MatrixError> {
        self.check_bounds(nrow, ncol)?;
        let i = self.index(nrow, ncol);
        self.data[i] = v;
        Ok(())
    }

    /// Borrows row `nrow` as a slice. The fallible counterpart of
    /// `&m[nrow]`.
    pub fn row(&self, nrow: usize) -> Result<&[Float], MatrixError> {
        if nrow >= self.size {
            return Err(MatrixError::IndexOutOfRange {
                index: nrow,
                size: self.size,
            });
        }
        let start = nrow * self.size;
        Ok(&self.data[start..start + self.size])
    }

    /// Mutably borrows row `nrow` as a slice.
    pub fn row_mut(&mut self, nrow: usize) -> Result<&mut [Float], MatrixError> {
        if nrow >= self.size {
            return Err(MatrixError::IndexOutOfRange {
                index: nrow,
                size: self.size,
            });
        }
        let start = nrow * self.size;
        Ok(&mut self.data[start..start + self.size])
    }

    /* ARITHMETIC OPERATIONS */

    /// Adds `self` and `other` element-wise, returning a new matrix.
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
    pub fn add(&self, other: &SquareMat) -> Result<SquareMat, MatrixError> {
        self.check_same_size(other)?;

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| *x + *y)
            .collect();

        // return
        Ok(SquareMat {
            size: self.size,
            data,
        })
    }

    /// Subtracts `other` from `self` element-wise, returning a new matrix.
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
    pub fn sub(&self, other: &SquareMat) -> Result<SquareMat, MatrixError> {
        self.check_same_size(other)?;

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| *x - *y)
            .collect();

        Ok(SquareMat {
            size: self.size,
            data,
        })
    }

    /// Returns a new matrix with the sign of every element flipped.
    pub fn negated(&self) -> SquareMat {
        SquareMat {
            size: self.size,
            data: self.data.iter().map(|x| -*x).collect(),
        }
    }

    /// Multiplies `self` by `other` (the standard matrix product),
    /// returning a new matrix.
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ.
    pub fn prod(&self, other: &SquareMat) -> Result<SquareMat, MatrixError> {
        self.check_same_size(other)?;
        Ok(self.raw_prod(other))
    }

    /// The triple loop behind `prod` and `pow`. The caller guarantees
    /// that the sizes match.
    fn raw_prod(&self, other: &SquareMat) -> SquareMat {
        let n = self.size;
        let mut ret = SquareMat {
            size: n,
            data: vec![0.0; n * n],
        };

        for r in 0..n {
            for c in 0..n {
                let mut v = 0.0;
                for k in 0..n {
                    v += self.data[self.index(r, k)] * other.data[other.index(k, c)];
                }
                let idx = ret.index(r, c);
                ret.data[idx] = v;
            }
        }
        ret
    }

    /// Scales the matrix by `s`, returning a new matrix.
    pub fn scale(&self, s: Float) -> SquareMat {
        SquareMat {
            size: self.size,
            data: self.data.iter().map(|x| *x * s).collect(),
        }
    }

    /// Divides every element by the scalar `s`, returning a new matrix.
    ///
    /// Returns [`MatrixError::DivideByZero`] when `s` is exactly zero.
    pub fn div(&self, s: Float) -> Result<SquareMat, MatrixError> {
        if s == 0.0 {
            return Err(MatrixError::DivideByZero);
        }
        Ok(SquareMat {
            size: self.size,
            data: self.data.iter().map(|x| *x / s).collect(),
        })
    }

    /// Element-wise mathematical modulo by `other`:
    /// `a - b * floor(a / b)`, so the result takes the sign of the
    /// divisor.
    ///
    /// Returns [`MatrixError::SizeMismatch`] when the sizes differ, and
    /// [`MatrixError::ModuloByZero`] when any element of `other` is
    /// exactly zero.
    pub fn modulo(&self, other: &SquareMat) -> Result<SquareMat, MatrixError> {
        self.check_same_size(other)?;
        if other.data.iter().any(|b| *b == 0.0) {
            return Err(MatrixError::ModuloByZero);
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| *a - *b * (*a / *b).floor())
            .collect();

        Ok(SquareMat {
            size: self.size,
            data,
        })
    }

    /// Element-wise mathematical modulo by the integer scalar `s`, with
    /// the same floor-based formula as [`modulo`](Self::modulo).
    ///
    /// Returns [`MatrixError::ModuloByZero`] when `s` is zero.
    pub fn modulo_scalar(&self, s: i64) -> Result<SquareMat, MatrixError> {
        if s == 0 {
            return Err(MatrixError::ModuloByZero);
        }
        let s = s as Float;
        Ok(SquareMat {
            size: self.size,
            data: self
                .data
                .iter()
                .map(|a| *a - s * (*a / s).floor())
                .collect(),
        })
    }

    /// Raises the matrix to a non-negative integer power by repeated
    /// squaring, i.e. `O(log power)` matrix products.
    ///
    /// `power == 0` yields the identity of the same size.
    pub fn pow(&self, power: u32) -> SquareMat {
        let mut ret = Self::identity(self.size);
        if power == 0 {
            return ret;
        }

        let mut base = self.clone();
        let mut p = power;
        while p > 0 {
            if p & 1 == 1 {
                ret = ret.raw_prod(&base);
            }
            base = base.raw_prod(&base);
            p >>= 1;
        }
        ret
    }

    /* SPECIAL OPERATIONS */

    /// Returns the transpose: `result[j][i] == self[i][j]`.
    pub fn transposed(&self) -> SquareMat {
        let n = self.size;
        let mut ret = SquareMat {
            size: n,
            data: vec![0.0; n * n],
        };
        for r in 0..n {
            for c in 0..n {
                let idx = ret.index(c, r);
                ret.data[idx] = self.data[self.index(r, c)];
            }
        }
        ret
    }

    /// The `(n-1) x (n-1)` matrix left after deleting `skip_row` and
    /// `skip_col`. Only called with `self.size >= 2`.
    fn minor(&self, skip_row: usize, skip_col: usize) -> SquareMat {
        let n = self.size;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for r in 0..n {
            if r == skip_row {
                continue;
            }
            for c in 0..n {
                if c == skip_col {
                    continue;
                }
                data.push(self.data[self.index(r, c)]);
            }
        }
        SquareMat { size: n - 1, data }
    }

    /// Computes the determinant by cofactor expansion along the first
    /// row, recursing on first-row minors.
    ///
    /// This is the naive `O(n!)` algorithm; it is meant for the small
    /// matrices this crate targets. It never fails, including for 1x1
    /// matrices (where it returns the single element).
    pub fn determinant(&self) -> Float {
        match self.size {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => {
                let mut det = 0.0;
                for col in 0..n {
                    let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * self.data[col] * self.minor(0, col).determinant();
                }
                det
            }
        }
    }

    /// The aggregate key used by the comparison operators: all elements
    /// accumulated into an integer, truncating toward zero after each
    /// addition.
    ///
    /// This is a cheap ordering key, not a precise numeric total.
    pub fn sum(&self) -> i64 {
        let mut total: i64 = 0;
        for v in &self.data {
            total = (total as Float + *v) as i64;
        }
        total
    }

    /// Checks if two matrices are exactly the same (as in
    /// `element == other_element`... beware floats). This is the
    /// structural check that `==` deliberately is not.
    pub fn same_elements(&self, other: &SquareMat) -> bool {
        if self.size != other.size {
            return false;
        }
        for i in 0..self.data.len() {
            if self.data[i] != other.data[i] {
                return false;
            }
        }
        // return
        true
    }

    /* INCREMENT / DECREMENT */

    /// Adds 1 to every element in place and returns `self` (the
    /// pre-increment form).
    pub fn increment(&mut self) -> &mut Self {
        for v in self.data.iter_mut() {
            *v += 1.0;
        }
        self
    }

    /// Snapshots the matrix, adds 1 to every element in place, and
    /// returns the snapshot (the post-increment form). The snapshot is a
    /// deep copy with no shared storage.
    pub fn post_increment(&mut self) -> SquareMat {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtracts 1 from every element in place and returns `self` (the
    /// pre-decrement form).
    pub fn decrement(&mut self) -> &mut Self {
        for v in self.data.iter_mut() {
            *v -= 1.0;
        }
        self
    }

    /// Snapshots the matrix, subtracts 1 from every element in place,
    /// and returns the snapshot (the post-decrement form).
    pub fn post_decrement(&mut self) -> SquareMat {
        let previous = self.clone();
        self.decrement();
        previous
    }

    /* IN-PLACE OPERATIONS */

    /// Adds `other` into `self` element-wise. The fallible counterpart
    /// of `+=`.
    ///
    /// On [`MatrixError::SizeMismatch`] the receiver is left untouched.
    pub fn add_to_this(&mut self, other: &SquareMat) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a += *b);
        Ok(())
    }

    /// Subtracts `other` from `self` element-wise. The fallible
    /// counterpart of `-=`.
    pub fn sub_from_this(&mut self, other: &SquareMat) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a -= *b);
        Ok(())
    }

    /// Replaces `self` with the matrix product `self * other`. The
    /// fallible counterpart of `*= &matrix`.
    ///
    /// The product is computed into fresh storage before `self` is
    /// replaced, so a failure never leaves a half-written receiver.
    pub fn mul_by_this(&mut self, other: &SquareMat) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        *self = self.raw_prod(other);
        Ok(())
    }

    /// Multiplies every element by the scalar `s` in place.
    pub fn scale_this(&mut self, s: Float) {
        self.data.iter_mut().for_each(|a| *a *= s);
    }

    /// Divides every element by the scalar `s` in place. The fallible
    /// counterpart of `/=`.
    ///
    /// On [`MatrixError::DivideByZero`] the receiver is left untouched.
    pub fn div_this(&mut self, s: Float) -> Result<(), MatrixError> {
        if s == 0.0 {
            return Err(MatrixError::DivideByZero);
        }
        self.data.iter_mut().for_each(|a| *a /= s);
        Ok(())
    }

    /// Element-wise truncating remainder by `other`, in place.
    ///
    /// Unlike [`modulo`](Self::modulo), this uses the native floating
    /// remainder (truncation toward zero), so the result takes the sign
    /// of the dividend. The two semantics coexist on purpose; callers
    /// relying on either should not treat them as interchangeable.
    ///
    /// Sizes and divisors are validated before any element is written.
    pub fn rem_by_this(&mut self, other: &SquareMat) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        if other.data.iter().any(|b| *b == 0.0) {
            return Err(MatrixError::ModuloByZero);
        }
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a %= *b);
        Ok(())
    }

    /// Truncating remainder by the integer scalar `s`, in place. Same
    /// truncating semantics as [`rem_by_this`](Self::rem_by_this).
    pub fn rem_scalar_this(&mut self, s: i64) -> Result<(), MatrixError> {
        if s == 0 {
            return Err(MatrixError::ModuloByZero);
        }
        let s = s as Float;
        self.data.iter_mut().for_each(|a| *a %= s);
        Ok(())
    }
}

impl std::fmt::Display for SquareMat {
    /// Each row's elements separated by single spaces, no trailing
    /// space, and a newline after every row including the last.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                write!(f, "{}", self.data[self.index(r, c)])?;
                if c + 1 < self.size {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/* COMPARISONS */

// Comparisons are by the aggregate sum key, NOT element by element:
// two structurally different matrices with equal sums are ==.
impl PartialEq for SquareMat {
    fn eq(&self, other: &Self) -> bool {
        self.sum() == other.sum()
    }
}

impl PartialOrd for SquareMat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.sum().partial_cmp(&other.sum())
    }
}

/* INDEXING */

impl std::ops::Index<usize> for SquareMat {
    type Output = [Float];

    /// Borrows row `nrow`, so `m[i][j]` reads element `(i, j)`.
    ///
    /// # Panics
    /// Panics if `nrow >= size`. Use [`SquareMat::row`] for a fallible
    /// version.
    fn index(&self, nrow: usize) -> &Self::Output {
        if nrow >= self.size {
            panic!("row index {} out of range for matrix of size {}", nrow, self.size);
        }
        let start = nrow * self.size;
        &self.data[start..start + self.size]
    }
}

impl std::ops::IndexMut<usize> for SquareMat {
    /// Mutably borrows row `nrow`, so `m[i][j] = v` writes element
    /// `(i, j)`.
    ///
    /// # Panics
    /// Panics if `nrow >= size`. Use [`SquareMat::row_mut`] for a
    /// fallible version.
    fn index_mut(&mut self, nrow: usize) -> &mut Self::Output {
        if nrow >= self.size {
            panic!("row index {} out of range for matrix of size {}", nrow, self.size);
        }
        let start = nrow * self.size;
        &mut self.data[start..start + self.size]
    }
}

/* OPERATOR SUGAR */

// The operator impls delegate to the named methods and panic on error,
// since the std::ops traits cannot return a Result. Callers that need
// to handle failure call the named methods instead.

impl std::ops::Add<&SquareMat> for &SquareMat {
    type Output = SquareMat;

    fn add(self, other: &SquareMat) -> SquareMat {
        match SquareMat::add(self, other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::AddAssign<&SquareMat> for SquareMat {
    fn add_assign(&mut self, other: &SquareMat) {
        if let Err(e) = self.add_to_this(other) {
            panic!("{}", e)
        }
    }
}

impl std::ops::Sub<&SquareMat> for &SquareMat {
    type Output = SquareMat;

    fn sub(self, other: &SquareMat) -> SquareMat {
        match SquareMat::sub(self, other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::SubAssign<&SquareMat> for SquareMat {
    fn sub_assign(&mut self, other: &SquareMat) {
        if let Err(e) = self.sub_from_this(other) {
            panic!("{}", e)
        }
    }
}

impl std::ops::Neg for &SquareMat {
    type Output = SquareMat;

    fn neg(self) -> SquareMat {
        self.negated()
    }
}

impl std::ops::Mul<&SquareMat> for &SquareMat {
    type Output = SquareMat;

    fn mul(self, other: &SquareMat) -> SquareMat {
        match self.prod(other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::MulAssign<&SquareMat> for SquareMat {
    fn mul_assign(&mut self, other: &SquareMat) {
        if let Err(e) = self.mul_by_this(other) {
            panic!("{}", e)
        }
    }
}

impl std::ops::Mul<Float> for &SquareMat {
    type Output = SquareMat;

    fn mul(self, s: Float) -> SquareMat {
        self.scale(s)
    }
}

impl std::ops::Mul<&SquareMat> for Float {
    type Output = SquareMat;

    fn mul(self, m: &SquareMat) -> SquareMat {
        m.scale(self)
    }
}

impl std::ops::MulAssign<Float> for SquareMat {
    fn mul_assign(&mut self, s: Float) {
        self.scale_this(s)
    }
}

impl std::ops::Div<Float> for &SquareMat {
    type Output = SquareMat;

    fn div(self, s: Float) -> SquareMat {
        match SquareMat::div(self, s) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::DivAssign<Float> for SquareMat {
    fn div_assign(&mut self, s: Float) {
        if let Err(e) = self.div_this(s) {
            panic!("{}", e)
        }
    }
}

impl std::ops::Rem<&SquareMat> for &SquareMat {
    type Output = SquareMat;

    /// Floor-based modulo, per [`SquareMat::modulo`].
    fn rem(self, other: &SquareMat) -> SquareMat {
        match self.modulo(other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::Rem<i64> for &SquareMat {
    type Output = SquareMat;

    /// Floor-based modulo, per [`SquareMat::modulo_scalar`].
    fn rem(self, s: i64) -> SquareMat {
        match self.modulo_scalar(s) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::RemAssign<&SquareMat> for SquareMat {
    /// Truncating remainder, per [`SquareMat::rem_by_this`] -- NOT the
    /// floor-based formula `%` uses.
    fn rem_assign(&mut self, other: &SquareMat) {
        if let Err(e) = self.rem_by_this(other) {
            panic!("{}", e)
        }
    }
}

impl std::ops::RemAssign<i64> for SquareMat {
    /// Truncating remainder, per [`SquareMat::rem_scalar_this`].
    fn rem_assign(&mut self, s: i64) {
        if let Err(e) = self.rem_scalar_this(s) {
            panic!("{}", e)
        }
    }
}
