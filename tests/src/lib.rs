//! Shared test harness for rscode integration tests.
//!
//! Provides [`CodingHarness`], a matched encoder/decoder pair with helpers to
//! drop blocks, plus deterministic test data and tracing setup.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rscode_erasure::{Block, CodingConfig, Decoder, Encoder, ErasureError};
use tracing_subscriber::EnvFilter;

/// An encoder and decoder built from the same config.
pub struct CodingHarness {
    pub config: CodingConfig,
    pub encoder: Encoder,
    pub decoder: Decoder,
}

impl CodingHarness {
    /// Build a harness for `(k, m, degree)`.
    pub fn new(data_blocks: usize, checksum_blocks: usize, degree: u8) -> Self {
        init_tracing();
        let config = CodingConfig::new(data_blocks, checksum_blocks, degree)
            .expect("valid test config");
        Self {
            config,
            encoder: Encoder::new(config).expect("encoder"),
            decoder: Decoder::new(config).expect("decoder"),
        }
    }

    /// Encode `input`, panicking on error.
    pub fn encode(&self, input: &[u8]) -> Vec<Block> {
        self.encoder.encode(input).expect("encode")
    }

    /// Decode whatever survived.
    pub fn decode(&self, blocks: &[Block]) -> Result<Vec<u8>, ErasureError> {
        self.decoder.decode(blocks)
    }

    /// The zero-padded form the decoder is expected to return.
    pub fn padded(&self, input: &[u8]) -> Vec<u8> {
        let k = self.config.data_blocks;
        let columns = input.len().div_ceil(k).max(1);
        let mut padded = input.to_vec();
        padded.resize(columns * k, 0);
        padded
    }

    /// Every way of keeping exactly `keep` of the `k + m` block indices.
    pub fn survivor_sets(&self, keep: usize) -> Vec<Vec<usize>> {
        combinations(self.config.total_blocks(), keep)
    }
}

/// Blocks whose index is in `indices`, in their original order.
pub fn keep_blocks(blocks: &[Block], indices: &[usize]) -> Vec<Block> {
    blocks
        .iter()
        .filter(|b| indices.contains(&b.index))
        .cloned()
        .collect()
}

/// Remove `count` blocks chosen uniformly at random.
pub fn erase_random(blocks: &mut Vec<Block>, count: usize, rng: &mut StdRng) {
    for _ in 0..count.min(blocks.len()) {
        let victim = rng.random_range(0..blocks.len());
        blocks.remove(victim);
    }
}

/// Seeded RNG for reproducible erasure patterns.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// All `r`-element subsets of `0..n`, in lexicographic order.
pub fn combinations(n: usize, r: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if r > n {
        return out;
    }
    let mut current: Vec<usize> = (0..r).collect();
    loop {
        out.push(current.clone());
        // Rightmost position that can still advance.
        let Some(i) = (0..r).rev().find(|&i| current[i] < n - r + i) else {
            return out;
        };
        current[i] += 1;
        for j in i + 1..r {
            current[j] = current[j - 1] + 1;
        }
    }
}

/// Install a `tracing` subscriber honouring `RUST_LOG` (default `warn`).
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Generate deterministic, non-repeating test data.
pub fn test_data(size: usize) -> Vec<u8> {
    test_data_seeded(size, 0xDEAD_BEEF)
}

/// Generate test data with a specific seed.
pub fn test_data_seeded(size: usize, seed: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state: u32 = seed;
    for _ in 0..size {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((state >> 16) as u8);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations_counts() {
        assert_eq!(combinations(6, 3).len(), 20);
        assert_eq!(combinations(10, 6).len(), 210);
        assert_eq!(combinations(3, 0), vec![Vec::<usize>::new()]);
        assert!(combinations(2, 3).is_empty());
        assert_eq!(combinations(3, 2), vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn test_padded() {
        let h = CodingHarness::new(6, 4, 8);
        assert_eq!(h.padded(&[1; 10]).len(), 12);
        assert_eq!(h.padded(&[]), vec![0; 6]);
    }
}
