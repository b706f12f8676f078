//! Coding matrices.
//!
//! The generator matrix of a `(k, m)` code is the `k x k` identity stacked
//! on the `m x k` Vandermonde matrix `V[i][j] = (j + 1)^i`. Row `i` dotted
//! with a column of data symbols gives the symbol stored in block `i`.

use rscode_math::{ByteAlgebra, Matrix, pow};

/// `rows x cols` Vandermonde matrix with entries `(col + 1)^row`.
///
/// `cols` must be below 256 so every base is a distinct byte.
pub fn vandermonde<A: ByteAlgebra + ?Sized>(rows: usize, cols: usize, algebra: &A) -> Matrix {
    debug_assert!(cols < 256, "vandermonde bases must fit in a byte");
    let mut m = Matrix::new(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            m[(i, j)] = pow((j + 1) as u8, i, algebra);
        }
    }
    m
}

/// Systematic generator matrix: identity rows for data blocks, Vandermonde
/// rows for checksum blocks.
pub fn generator_matrix<A: ByteAlgebra + ?Sized>(
    data_blocks: usize,
    checksum_blocks: usize,
    algebra: &A,
) -> Matrix {
    let v = vandermonde(checksum_blocks, data_blocks, algebra);
    let mut g = Matrix::new(data_blocks + checksum_blocks, data_blocks);
    for i in 0..data_blocks {
        g.set(i, i, 1);
    }
    for i in 0..checksum_blocks {
        for j in 0..data_blocks {
            g[(data_blocks + i, j)] = v[(i, j)];
        }
    }
    g
}
