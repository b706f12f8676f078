//! Systematic erasure encoder.
//!
//! Splits input into `k` data blocks and derives `m` checksum blocks.
//! Data blocks carry the input symbols unmodified.

use std::borrow::Cow;

use rscode_math::{GaloisField, Matrix};
use rscode_types::{Block, BlockType, CodingConfig};
use tracing::debug;

use crate::error::ErasureError;
use crate::vandermonde::vandermonde;

/// Vandermonde erasure encoder.
///
/// The input is padded with zeros to a multiple of `k` and read as
/// `columns = len / k` column vectors of `k` symbols: symbol `j` of column
/// `c` is `padded[c * k + j]`. Block `i < k` holds symbol `i` of every
/// column; block `k + r` holds checksum symbol `r` of every column.
///
/// Holds only immutable state, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Encoder {
    config: CodingConfig,
    field: GaloisField,
    /// `m x k` checksum generator.
    vandermonde: Matrix,
}

impl Encoder {
    /// Create an encoder for a validated config.
    pub fn new(config: CodingConfig) -> Result<Self, ErasureError> {
        config.validate()?;
        let field = GaloisField::new(config.degree)?;
        let vandermonde = vandermonde(config.checksum_blocks, config.data_blocks, &field);
        Ok(Self {
            config,
            field,
            vandermonde,
        })
    }

    /// Shorthand for [`Encoder::new`] with `(k, m, degree)`.
    pub fn with_params(
        data_blocks: usize,
        checksum_blocks: usize,
        degree: u8,
    ) -> Result<Self, ErasureError> {
        Self::new(CodingConfig::new(data_blocks, checksum_blocks, degree)?)
    }

    /// The coding parameters.
    pub fn config(&self) -> &CodingConfig {
        &self.config
    }

    /// Encode `input` into `k + m` blocks, data blocks first.
    ///
    /// Every payload has `max(1, ceil(len / k))` symbols, so empty input
    /// still yields one zero column. Fails only when a byte is not an
    /// element of a field smaller than GF(256).
    pub fn encode(&self, input: &[u8]) -> Result<Vec<Block>, ErasureError> {
        let k = self.config.data_blocks;
        let m = self.config.checksum_blocks;

        if let Some(offset) = input.iter().position(|&b| !self.field.contains(b)) {
            return Err(ErasureError::SymbolOutOfRange {
                offset,
                value: input[offset],
                field_size: self.field.order(),
            });
        }

        let columns = input.len().div_ceil(k).max(1);
        let padded = extend(input, columns * k);

        let mut data: Vec<Vec<u8>> = (0..k).map(|_| Vec::with_capacity(columns)).collect();
        let mut checksums: Vec<Vec<u8>> = (0..m).map(|_| Vec::with_capacity(columns)).collect();
        let mut checksum_column = vec![0u8; m];

        for column in padded.chunks_exact(k) {
            for (payload, &symbol) in data.iter_mut().zip(column) {
                payload.push(symbol);
            }
            self.vandermonde
                .mul_vec(column, &mut checksum_column, &self.field)?;
            for (payload, &symbol) in checksums.iter_mut().zip(&checksum_column) {
                payload.push(symbol);
            }
        }

        let blocks: Vec<Block> = data
            .into_iter()
            .map(|payload| (BlockType::Data, payload))
            .chain(checksums.into_iter().map(|payload| (BlockType::Checksum, payload)))
            .enumerate()
            .map(|(index, (block_type, payload))| Block::new(index, block_type, payload))
            .collect();

        debug!(
            k,
            m,
            degree = self.config.degree,
            input_len = input.len(),
            columns,
            "encoded input into blocks"
        );

        Ok(blocks)
    }
}

/// Pad `data` with trailing zeros up to `length`.
///
/// Returns `data` unchanged (borrowed) when `length <= data.len()`; never
/// truncates.
pub fn extend(data: &[u8], length: usize) -> Cow<'_, [u8]> {
    if length <= data.len() {
        return Cow::Borrowed(data);
    }
    let mut padded = Vec::with_capacity(length);
    padded.extend_from_slice(data);
    padded.resize(length, 0);
    Cow::Owned(padded)
}
