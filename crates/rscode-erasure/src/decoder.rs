//! Erasure decoder.
//!
//! Reconstructs the data blocks from any `k` surviving blocks whose
//! generator rows are linearly independent, by inverting that `k x k`
//! submatrix of the generator.

use rscode_math::{GaloisField, MathError, Matrix};
use rscode_types::{Block, BlockType, CodingConfig};
use tracing::{debug, warn};

use crate::error::ErasureError;
use crate::vandermonde::generator_matrix;

/// Vandermonde erasure decoder.
///
/// Must be built with the same [`CodingConfig`] as the encoder; the config
/// is not carried by the blocks. Holds only immutable state.
#[derive(Debug, Clone)]
pub struct Decoder {
    config: CodingConfig,
    field: GaloisField,
    /// `(k + m) x k` systematic generator.
    generator: Matrix,
}

impl Decoder {
    /// Create a decoder for a validated config.
    pub fn new(config: CodingConfig) -> Result<Self, ErasureError> {
        config.validate()?;
        let field = GaloisField::new(config.degree)?;
        let generator = generator_matrix(config.data_blocks, config.checksum_blocks, &field);
        Ok(Self {
            config,
            field,
            generator,
        })
    }

    /// Shorthand for [`Decoder::new`] with `(k, m, degree)`.
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

    /// Recover the zero-padded data from surviving blocks.
    ///
    /// Blocks may arrive in any order. Survivors are tried in index order
    /// (data blocks first) and a block is used only if its generator row is
    /// independent of the rows already chosen, so extra survivors can stand
    /// in for a dependent one.
    ///
    /// # Errors
    ///
    /// - [`ErasureError::NotEnoughBlocks`] if fewer than `k` blocks are given.
    /// - [`ErasureError::Unrecoverable`] if the survivors span fewer than `k`
    ///   independent rows.
    /// - A validation error if a block's index, type, length or symbols do
    ///   not fit this code.
    ///
    /// Never returns partially recovered data.
    pub fn decode(&self, blocks: &[Block]) -> Result<Vec<u8>, ErasureError> {
        let k = self.config.data_blocks;
        if blocks.len() < k {
            warn!(needed = k, got = blocks.len(), "not enough blocks to decode");
            return Err(ErasureError::NotEnoughBlocks {
                needed: k,
                got: blocks.len(),
            });
        }

        let columns = blocks[0].len();
        let by_index = self.index_blocks(blocks, columns)?;

        let survivors = by_index
            .iter()
            .enumerate()
            .filter_map(|(row, slot)| slot.map(|_| row));
        let rows = self.generator.independent_rows(survivors, k, &self.field);
        if rows.len() < k {
            warn!(
                needed = k,
                independent = rows.len(),
                provided = blocks.len(),
                "surviving blocks do not determine the data"
            );
            return Err(ErasureError::Unrecoverable {
                needed: k,
                independent: rows.len(),
            });
        }

        let selected: Vec<&Block> = rows
            .iter()
            .filter_map(|&row| by_index[row].map(|pos| &blocks[pos]))
            .collect();
        let mut output = vec![0u8; columns * k];

        // All data blocks survived: interleave them directly.
        if rows.iter().enumerate().all(|(i, &row)| i == row) {
            for (j, block) in selected.iter().enumerate() {
                for (c, &symbol) in block.payload.iter().enumerate() {
                    output[c * k + j] = symbol;
                }
            }
            debug!(k, columns, "decoded from data blocks only");
            return Ok(output);
        }

        let inverse = self
            .generator
            .select_rows(&rows)?
            .invert(&self.field)
            .map_err(|e| match e {
                MathError::Singular { column } => ErasureError::Unrecoverable {
                    needed: k,
                    independent: column,
                },
                other => other.into(),
            })?;

        let mut symbols = vec![0u8; k];
        for (c, column) in output.chunks_exact_mut(k).enumerate() {
            for (slot, block) in symbols.iter_mut().zip(&selected) {
                *slot = block.payload[c];
            }
            inverse.mul_vec(&symbols, column, &self.field)?;
        }

        debug!(
            k,
            m = self.config.checksum_blocks,
            columns,
            ?rows,
            "decoded blocks"
        );
        Ok(output)
    }

    /// Decode and drop the zero padding, given the original input length.
    pub fn decode_exact(
        &self,
        blocks: &[Block],
        original_len: usize,
    ) -> Result<Vec<u8>, ErasureError> {
        let mut data = self.decode(blocks)?;
        if original_len > data.len() {
            return Err(ErasureError::OriginalLengthTooLarge {
                requested: original_len,
                available: data.len(),
            });
        }
        data.truncate(original_len);
        Ok(data)
    }

    /// Validate every block and map generator row -> first block carrying it.
    fn index_blocks(
        &self,
        blocks: &[Block],
        columns: usize,
    ) -> Result<Vec<Option<usize>>, ErasureError> {
        let k = self.config.data_blocks;
        let total = self.config.total_blocks();
        let mut by_index = vec![None; total];

        for (pos, block) in blocks.iter().enumerate() {
            if block.index >= total {
                return Err(ErasureError::InvalidBlockIndex {
                    index: block.index,
                    total,
                });
            }
            let expected = if block.index < k {
                BlockType::Data
            } else {
                BlockType::Checksum
            };
            if block.block_type != expected {
                return Err(ErasureError::BlockTypeMismatch {
                    index: block.index,
                    expected,
                    found: block.block_type,
                });
            }
            if block.len() != columns {
                return Err(ErasureError::PayloadLengthMismatch {
                    index: block.index,
                    expected: columns,
                    found: block.len(),
                });
            }
            if let Some(offset) = block.payload.iter().position(|&b| !self.field.contains(b)) {
                return Err(ErasureError::SymbolOutOfRange {
                    offset,
                    value: block.payload[offset],
                    field_size: self.field.order(),
                });
            }
            by_index[block.index].get_or_insert(pos);
        }
        Ok(by_index)
    }
}
