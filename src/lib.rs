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

#![deny(missing_docs)]

//! A square-matrix value type with a wide operation surface.
//!
//! The central type is [`SquareMat`]: an owned, row-major `n × n` grid of
//! [`Float`] values. It supports element-wise arithmetic, the standard
//! matrix product, scalar scaling and division, two distinct modulo
//! semantics, exponentiation by squaring, transposition, a naive cofactor
//! determinant, and increment/decrement. Every operation is also exposed
//! through the natural operator where one exists (`+`, `-`, `*`, `/`, `%`
//! and their assigning forms), so a `SquareMat` can be used as a drop-in
//! numeric value.
//!
//! One deliberate oddity worth knowing about up front: `==` and the
//! ordering operators compare matrices by their aggregate [`sum`] key,
//! not element by element. Use [`same_elements`] for the structural check.
//!
//! [`sum`]: SquareMat::sum
//! [`same_elements`]: SquareMat::same_elements

mod error;
mod square_mat;

pub use error::MatrixError;
pub use square_mat::SquareMat;

/// The kind of floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;
