//! Dense byte matrices over a [`ByteAlgebra`].
//!
//! Elimination (inversion, rank selection) relies on `add` being its own
//! inverse, which holds for every GF(2^n). It is meaningless over
//! [`WrappingAlgebra`](crate::WrappingAlgebra).

use std::ops::{Index, IndexMut};

use crate::algebra::ByteAlgebra;
use crate::error::MathError;

/// A `rows x cols` matrix of field symbols stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl Matrix {
    /// Zero matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = 1;
        }
        m
    }

    /// Build from row-major storage.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self, MathError> {
        if data.len() != rows * cols {
            return Err(MathError::DimensionMismatch {
                left_rows: rows,
                left_cols: cols,
                right_rows: data.len(),
                right_cols: 1,
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from a list of equally sized rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MathError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MathError::DimensionMismatch {
                    left_rows: rows.len(),
                    left_cols: cols,
                    right_rows: 1,
                    right_cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// A single-column matrix holding `values`.
    pub fn column(values: &[u8]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(r, c)`, or `None` out of bounds.
    pub fn get(&self, r: usize, c: usize) -> Option<u8> {
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(self.data[r * self.cols + c])
    }

    /// Overwrite the entry at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `(r, c)` is out of bounds, like indexing.
    pub fn set(&mut self, r: usize, c: usize, value: u8) {
        self[(r, c)] = value;
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows()`.
    pub fn row(&self, r: usize) -> &[u8] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Row-major storage.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Matrix product `self * rhs`.
    pub fn multiply<A: ByteAlgebra + ?Sized>(
        &self,
        rhs: &Matrix,
        algebra: &A,
    ) -> Result<Matrix, MathError> {
        if self.cols != rhs.rows {
            return Err(self.mismatch(rhs.rows, rhs.cols));
        }
        let mut out = Matrix::new(self.rows, rhs.cols);
        for r in 0..self.rows {
            let lhs_row = self.row(r);
            for c in 0..rhs.cols {
                let mut acc = 0u8;
                for (k, &coeff) in lhs_row.iter().enumerate() {
                    acc = algebra.add(acc, algebra.mul(coeff, rhs.data[k * rhs.cols + c]));
                }
                out.data[r * rhs.cols + c] = acc;
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `out = self * x`, without allocating.
    pub fn mul_vec<A: ByteAlgebra + ?Sized>(
        &self,
        x: &[u8],
        out: &mut [u8],
        algebra: &A,
    ) -> Result<(), MathError> {
        if x.len() != self.cols || out.len() != self.rows {
            return Err(self.mismatch(x.len(), 1));
        }
        for (r, slot) in out.iter_mut().enumerate() {
            *slot = self
                .row(r)
                .iter()
                .zip(x)
                .fold(0u8, |acc, (&coeff, &v)| algebra.add(acc, algebra.mul(coeff, v)));
        }
        Ok(())
    }

    /// Inverse by Gauss-Jordan elimination on `[self | I]`.
    ///
    /// Returns [`MathError::Singular`] when some column has no invertible
    /// pivot at or below the diagonal.
    pub fn invert<A: ByteAlgebra + ?Sized>(&self, algebra: &A) -> Result<Matrix, MathError> {
        if self.rows != self.cols {
            return Err(MathError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        let width = 2 * n;

        let mut aug = vec![0u8; n * width];
        for r in 0..n {
            aug[r * width..r * width + n].copy_from_slice(self.row(r));
            aug[r * width + n + r] = 1;
        }

        for col in 0..n {
            let (pivot_row, pivot_inv) = (col..n)
                .find_map(|r| algebra.inverse(aug[r * width + col]).map(|inv| (r, inv)))
                .ok_or(MathError::Singular { column: col })?;

            if pivot_row != col {
                for j in 0..width {
                    aug.swap(col * width + j, pivot_row * width + j);
                }
            }

            for j in col..width {
                aug[col * width + j] = algebra.mul(pivot_inv, aug[col * width + j]);
            }

            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = aug[r * width + col];
                if factor == 0 {
                    continue;
                }
                for j in col..width {
                    let scaled = algebra.mul(factor, aug[col * width + j]);
                    aug[r * width + j] = algebra.add(aug[r * width + j], scaled);
                }
            }
        }

        let mut inverse = Matrix::new(n, n);
        for r in 0..n {
            inverse.data[r * n..(r + 1) * n].copy_from_slice(&aug[r * width + n..(r + 1) * width]);
        }
        Ok(inverse)
    }

    /// New matrix made of the given rows, in order.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Matrix, MathError> {
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &r in indices {
            if r >= self.rows {
                return Err(self.mismatch(r + 1, self.cols));
            }
            data.extend_from_slice(self.row(r));
        }
        Ok(Matrix {
            rows: indices.len(),
            cols: self.cols,
            data,
        })
    }

    /// `self` stacked on top of `below`.
    pub fn vstack(&self, below: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != below.cols {
            return Err(self.mismatch(below.rows, below.cols));
        }
        let mut data = Vec::with_capacity(self.data.len() + below.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&below.data);
        Ok(Matrix {
            rows: self.rows + below.rows,
            cols: self.cols,
            data,
        })
    }

    /// Greedily pick up to `limit` linearly independent rows.
    ///
    /// Candidates are visited in order; a row is kept only if it raises the
    /// rank of the rows kept so far. Duplicates and out-of-range indices are
    /// skipped.
    pub fn independent_rows<A, I>(&self, candidates: I, limit: usize, algebra: &A) -> Vec<usize>
    where
        A: ByteAlgebra + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        // Echelon basis: each entry is (pivot column, row normalized to 1 there).
        let mut basis: Vec<(usize, Vec<u8>)> = Vec::with_capacity(limit);
        let mut chosen = Vec::with_capacity(limit);

        for r in candidates {
            if chosen.len() == limit {
                break;
            }
            if r >= self.rows {
                continue;
            }
            let mut v = self.row(r).to_vec();
            for (pivot, b) in &basis {
                let factor = v[*pivot];
                if factor != 0 {
                    for (x, &y) in v.iter_mut().zip(b) {
                        *x = algebra.add(*x, algebra.mul(factor, y));
                    }
                }
            }
            let Some((pivot, inv)) = v
                .iter()
                .enumerate()
                .find_map(|(c, &x)| algebra.inverse(x).map(|inv| (c, inv)))
            else {
                continue;
            };
            for x in &mut v {
                *x = algebra.mul(inv, *x);
            }
            basis.push((pivot, v));
            chosen.push(r);
        }
        chosen
    }

    fn mismatch(&self, right_rows: usize, right_cols: usize) -> MathError {
        MathError::DimensionMismatch {
            left_rows: self.rows,
            left_cols: self.cols,
            right_rows,
            right_cols,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = u8;

    fn index(&self, (r, c): (usize, usize)) -> &u8 {
        assert!(c < self.cols, "column {c} out of bounds");
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut u8 {
        assert!(c < self.cols, "column {c} out of bounds");
        &mut self.data[r * self.cols + c]
    }
}
