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

//! Demonstration driver: builds a couple of small matrices and walks
//! through the whole operation surface, printing as it goes.

use squaremat::{MatrixError, SquareMat};

fn main() -> Result<(), MatrixError> {
    println!("Creating matrices...");
    let zeros = SquareMat::new(2)?;
    let m = SquareMat::from_rows(vec![vec![1., 2.], vec![3., 4.]])?;

    println!("\nMatrix 1 (zero matrix):\n{}", zeros);
    println!("Matrix 2:\n{}", m);

    println!("Basic arithmetic:");
    println!("\nMatrix 2 + Matrix 2:\n{}", m.add(&m)?);
    println!("Matrix 2 - Matrix 1:\n{}", m.sub(&zeros)?);
    println!("Matrix 2 * Matrix 2:\n{}", m.prod(&m)?);
    println!("Matrix 2 * 2.0:\n{}", &m * 2.0);
    println!("2.0 * Matrix 2:\n{}", 2.0 * &m);
    println!("Matrix 2 / 2.0:\n{}", m.div(2.0)?);
    println!("Matrix 2 % 3:\n{}", m.modulo_scalar(3)?);

    println!("Special operations:");
    println!("\nTranspose of Matrix 2:\n{}", m.transposed());
    println!("Determinant of Matrix 2: {}", m.determinant());
    println!("Matrix 2 ^ 2:\n{}", m.pow(2));

    println!("Increment/Decrement:");
    let mut temp = m.clone();
    temp.increment();
    println!("\nPre-increment:\n{}", temp);
    let mut temp = m.clone();
    let before = temp.post_decrement();
    println!("Post-decrement (returned snapshot):\n{}", before);
    println!("After post-decrement:\n{}", temp);

    println!("Comparisons (by aggregate sum):");
    println!("\nMatrix 2 == Matrix 2: {}", m == m);
    println!("Matrix 1 < Matrix 2: {}", zeros < m);
    println!("Matrix 2 >= Matrix 1: {}", m >= zeros);

    println!("\nCompound assignment:");
    let mut temp = m.clone();
    temp.add_to_this(&m)?;
    println!("\nAfter matrix += matrix:\n{}", temp);
    let mut temp = m.clone();
    temp.scale_this(2.0);
    println!("After matrix *= 2.0:\n{}", temp);

    Ok(())
}
