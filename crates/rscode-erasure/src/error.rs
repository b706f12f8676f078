//! Error types for erasure encoding and decoding.

use rscode_types::BlockType;

/// Errors that can occur during erasure encoding or decoding.
#[derive(Debug, thiserror::Error)]
pub enum ErasureError {
    /// The coding parameters are invalid.
    #[error("config error: {0}")]
    Config(#[from] rscode_types::ConfigError),

    /// A field or matrix operation failed.
    #[error("math error: {0}")]
    Math(#[from] rscode_math::MathError),

    /// Fewer blocks than data blocks were provided for decoding.
    #[error("not enough blocks: need {needed}, got {got}")]
    NotEnoughBlocks {
        /// Minimum blocks required (k).
        needed: usize,
        /// Blocks actually provided.
        got: usize,
    },

    /// The surviving blocks do not determine the data.
    #[error("unrecoverable erasure: need {needed} independent blocks, found {independent}")]
    Unrecoverable {
        /// Independent blocks required (k).
        needed: usize,
        /// Independent blocks among those provided.
        independent: usize,
    },

    /// A block index lies outside `0..k+m`.
    #[error("block index {index} out of range for {total} blocks")]
    InvalidBlockIndex {
        /// Offending index.
        index: usize,
        /// Total blocks in the code (k + m).
        total: usize,
    },

    /// A block's type disagrees with its index.
    #[error("block {index} is tagged {found:?}, expected {expected:?}")]
    BlockTypeMismatch {
        /// Offending index.
        index: usize,
        /// Type implied by the index.
        expected: BlockType,
        /// Type carried by the block.
        found: BlockType,
    },

    /// Blocks from one encode call must all have the same payload length.
    #[error("block {index} has {found} symbols, expected {expected}")]
    PayloadLengthMismatch {
        /// Offending index.
        index: usize,
        /// Payload length of the first block.
        expected: usize,
        /// Payload length of this block.
        found: usize,
    },

    /// A byte is not an element of the configured field.
    #[error("symbol {value} at offset {offset} is outside GF({field_size})")]
    SymbolOutOfRange {
        /// Byte offset in the input or payload.
        offset: usize,
        /// Offending byte.
        value: u8,
        /// Number of field elements.
        field_size: usize,
    },

    /// The caller asked for more bytes than were recovered.
    #[error("original length {requested} exceeds recovered length {available}")]
    OriginalLengthTooLarge {
        /// Requested length.
        requested: usize,
        /// Recovered (padded) length.
        available: usize,
    },
}
