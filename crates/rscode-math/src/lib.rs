//! Byte-level finite-field arithmetic and matrix algebra.
//!
//! This crate provides:
//! - [`ByteAlgebra`]: add, multiply and invert single-byte symbols.
//! - [`GaloisField`]: GF(2^n) for `n` in `1..=8`, backed by log/exp tables.
//! - [`WrappingAlgebra`]: ordinary wrapping byte arithmetic, for exercising
//!   the generic code against plain integers.
//! - [`pow`]: exponentiation over any algebra.
//! - [`Matrix`]: flat row-major byte matrices with multiply and Gauss-Jordan
//!   inversion over a supplied algebra.

mod algebra;
mod error;
mod galois;
mod matrix;

pub use algebra::{ByteAlgebra, WrappingAlgebra, pow};
pub use error::MathError;
pub use galois::GaloisField;
pub use matrix::Matrix;
