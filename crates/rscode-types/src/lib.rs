//! Shared types for rscode.
//!
//! This crate defines the transport unit produced by the encoder
//! ([`Block`], [`BlockType`]) and the coding parameters shared by both ends
//! of a transfer ([`CodingConfig`]).

mod error;

use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

pub use error::{ConfigError, WireError};

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// Role of a block within a systematic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// Carries original symbols unmodified.
    Data,
    /// Carries linear combinations of the data symbols.
    Checksum,
}

/// One erasure-coded block.
///
/// The `index` is the row of the generator matrix this block was produced
/// from and must travel with the payload: it is the only thing telling the
/// decoder which equations survived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the code (0..k for data, k..k+m for checksums).
    pub index: usize,
    /// Data or checksum.
    pub block_type: BlockType,
    /// One symbol per column.
    pub payload: Bytes,
}

impl Block {
    /// Create a block from its parts.
    pub fn new(index: usize, block_type: BlockType, payload: impl Into<Bytes>) -> Self {
        Self {
            index,
            block_type,
            payload: payload.into(),
        }
    }

    /// Whether this block carries original data symbols.
    pub fn is_data(&self) -> bool {
        self.block_type == BlockType::Data
    }

    /// Number of symbols (columns) in the payload.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Serialize `{index, block_type, payload}` with postcard.
    pub fn to_wire(&self) -> Result<Vec<u8>, WireError> {
        Ok(postcard::to_allocvec(self)?)
    }

    /// Parse a block previously produced by [`Block::to_wire`].
    pub fn from_wire(bytes: &[u8]) -> Result<Self, WireError> {
        Ok(postcard::from_bytes(bytes)?)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Largest supported field exponent: one field element per byte.
pub const MAX_DEGREE: u8 = 8;

/// Erasure coding parameters.
///
/// Encoder and decoder must be built from the same triple; it is not
/// carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodingConfig {
    /// Number of data blocks (`k`).
    pub data_blocks: usize,
    /// Number of checksum blocks (`m`).
    pub checksum_blocks: usize,
    /// Field exponent: symbols live in GF(2^degree).
    pub degree: u8,
}

impl Default for CodingConfig {
    fn default() -> Self {
        Self {
            data_blocks: 4,
            checksum_blocks: 2,
            degree: 8,
        }
    }
}

impl CodingConfig {
    /// Build and validate a config.
    pub fn new(
        data_blocks: usize,
        checksum_blocks: usize,
        degree: u8,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            data_blocks,
            checksum_blocks,
            degree,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the parameters describe a usable code.
    ///
    /// - `degree` in `1..=8`
    /// - `1 <= data_blocks < 2^degree`, so every Vandermonde base `j + 1` is a
    ///   distinct nonzero field element
    /// - `checksum_blocks < 2^degree`, so no two Vandermonde rows repeat
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.degree == 0 || self.degree > MAX_DEGREE {
            return Err(ConfigError::UnsupportedDegree(self.degree));
        }
        if self.data_blocks == 0 {
            return Err(ConfigError::ZeroDataBlocks);
        }
        let max = self.field_size() - 1;
        if self.data_blocks > max {
            return Err(ConfigError::TooManyDataBlocks {
                data_blocks: self.data_blocks,
                max,
            });
        }
        if self.checksum_blocks > max {
            return Err(ConfigError::TooManyChecksumBlocks {
                checksum_blocks: self.checksum_blocks,
                max,
            });
        }
        Ok(())
    }

    /// Total number of blocks produced per encode (`k + m`).
    pub fn total_blocks(&self) -> usize {
        self.data_blocks + self.checksum_blocks
    }

    /// Number of elements in GF(2^degree).
    pub fn field_size(&self) -> usize {
        1usize << self.degree.min(MAX_DEGREE)
    }

    /// Bytes stored per byte of input, e.g. `1.5` for k=4, m=2.
    pub fn storage_overhead(&self) -> f64 {
        self.total_blocks() as f64 / self.data_blocks.max(1) as f64
    }

    /// Parse a config from TOML and validate it.
    ///
    /// Accepts either bare keys or an `[erasure]` table:
    ///
    /// ```toml
    /// [erasure]
    /// data_blocks = 6
    /// checksum_blocks = 4
    /// degree = 8
    /// ```
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = toml::from_str(s)?;
        let value = match table.remove("erasure") {
            Some(section @ toml::Value::Table(_)) => section,
            Some(other) => {
                table.insert("erasure".to_string(), other);
                toml::Value::Table(table)
            }
            None => toml::Value::Table(table),
        };
        let config: CodingConfig = value.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
