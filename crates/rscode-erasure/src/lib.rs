//! Systematic erasure coding over GF(2^n).
//!
//! This crate provides:
//! - [`Encoder`]: splits input into `k` data blocks and derives `m` checksum
//!   blocks from a Vandermonde matrix.
//! - [`Decoder`]: rebuilds the data from any `k` surviving blocks whose
//!   generator rows are linearly independent.
//! - [`vandermonde`] / [`generator_matrix`]: the coding matrices.
//! - [`extend`]: zero padding used by the encoder.
//!
//! The decoder returns the zero-padded data (`columns * k` bytes). The true
//! input length is not part of a [`Block`]; callers that track it can use
//! [`Decoder::decode_exact`].

mod decoder;
mod encoder;
mod error;
mod vandermonde;

pub use decoder::Decoder;
pub use encoder::{Encoder, extend};
pub use error::ErasureError;
pub use rscode_types::{Block, BlockType, CodingConfig};
pub use vandermonde::{generator_matrix, vandermonde};
