//! Error types for configuration and block framing.

/// Errors raised while building or validating a [`CodingConfig`](crate::CodingConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// At least one data block is required.
    #[error("data_blocks must be at least 1")]
    ZeroDataBlocks,

    /// The field exponent is outside the supported range.
    #[error("unsupported field degree {0}, expected 1..=8")]
    UnsupportedDegree(u8),

    /// Not enough distinct nonzero field elements for the Vandermonde bases.
    #[error("too many data blocks: {data_blocks} exceeds {max} for this field")]
    TooManyDataBlocks {
        /// Requested data block count.
        data_blocks: usize,
        /// Largest count the field supports.
        max: usize,
    },

    /// Vandermonde rows would repeat past the multiplicative group order.
    #[error("too many checksum blocks: {checksum_blocks} exceeds {max} for this field")]
    TooManyChecksumBlocks {
        /// Requested checksum block count.
        checksum_blocks: usize,
        /// Largest count the field supports.
        max: usize,
    },

    /// The TOML document could not be parsed.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while framing a [`Block`](crate::Block) for transport.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// postcard could not encode or decode the block.
    #[error("serialization error: {0}")]
    Serialization(#[from] postcard::Error),
}
