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

use thiserror::Error;

/// Error type for this crate.
///
/// Every fallible operation on a [`SquareMat`](crate::SquareMat) reports
/// one of these kinds synchronously to its caller; nothing is retried or
/// recovered internally, and a failing operation leaves its operands
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatrixError {
    /// A matrix was requested with side length zero.
    #[error("matrix size must be greater than zero")]
    InvalidSize,

    /// A matrix was built from a grid that is empty or not square.
    #[error("input grid must be non-empty and square")]
    InvalidShape,

    /// A row or column index fell outside the matrix.
    #[error("index {index} out of range for matrix of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The side length of the matrix being accessed.
        size: usize,
    },

    /// A binary operation was attempted on matrices of different sizes.
    #[error("matrix sizes must match: {lhs} vs {rhs}")]
    SizeMismatch {
        /// Side length of the left-hand operand.
        lhs: usize,
        /// Side length of the right-hand operand.
        rhs: usize,
    },

    /// Division by a scalar that is exactly zero.
    #[error("division by zero is undefined")]
    DivideByZero,

    /// Modulo by a scalar, or by a matrix element, that is exactly zero.
    #[error("modulo by zero is undefined")]
    ModuloByZero,
}
