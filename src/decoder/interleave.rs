//! Codeword assembly and block de-interleaving
//!
//! Data codewords of all blocks are stored round-robin: the first codeword of
//! every block, then the second of every block that has one, and so on. The
//! error correction codewords follow and are not used here.

use crate::decoder::tables::{
    BlockGroup, data_block_groups, ecc_codewords_per_block, error_correction_blocks,
};
use crate::models::{ECLevel, Version};

/// Block structure of one (version, level) combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EccBlockPlan {
    groups: &'static [BlockGroup],
    ecc_per_block: usize,
}

impl EccBlockPlan {
    /// Plan from the standard block tables
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        let groups = data_block_groups(version, ec_level);
        debug_assert_eq!(
            groups.iter().map(|g| g.count).sum::<usize>(),
            error_correction_blocks(version, ec_level)
        );
        Self {
            groups,
            ecc_per_block: ecc_codewords_per_block(version, ec_level),
        }
    }

    /// Data codewords held by each block, in block order
    pub fn block_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups
            .iter()
            .flat_map(|g| std::iter::repeat_n(g.data_codewords, g.count))
    }

    /// Number of blocks
    pub fn block_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Data codewords over all blocks
    pub fn data_codewords(&self) -> usize {
        self.groups.iter().map(|g| g.count * g.data_codewords).sum()
    }

    /// Error correction codewords carried by each block
    pub fn ecc_per_block(&self) -> usize {
        self.ecc_per_block
    }

    /// Error correction codewords over all blocks
    pub fn ecc_codewords(&self) -> usize {
        self.block_count() * self.ecc_per_block
    }

    /// Logical codeword index stored at each storage position
    ///
    /// Blocks own consecutive logical indices in block order; storage visits
    /// them round-robin.
    pub fn storage_order(&self) -> Vec<usize> {
        let mut blocks = Vec::with_capacity(self.block_count());
        let mut next = 0;
        for len in self.block_lengths() {
            blocks.push((next, len));
            next += len;
        }

        let longest = blocks.iter().map(|&(_, len)| len).max().unwrap_or(0);
        let mut order = Vec::with_capacity(next);
        for round in 0..longest {
            for &(start, len) in &blocks {
                if round < len {
                    order.push(start + round);
                }
            }
        }
        order
    }

    /// Logical data codewords from codewords in storage order
    ///
    /// Only the first [`Self::data_codewords`] entries of `stored` are read;
    /// missing entries come out as zero.
    pub fn deinterleave(&self, stored: &[u8]) -> Vec<u8> {
        let mut logical = vec![0u8; self.data_codewords()];
        for (position, index) in self.storage_order().into_iter().enumerate() {
            if let Some(&codeword) = stored.get(position) {
                logical[index] = codeword;
            }
        }
        logical
    }

    /// Storage order of logical data codewords
    pub fn interleave(&self, logical: &[u8]) -> Vec<u8> {
        self.storage_order()
            .into_iter()
            .map(|index| logical.get(index).copied().unwrap_or(0))
            .collect()
    }
}

/// Group raw data bits into codewords in storage order
///
/// Bits `8k..8k+8` form codeword `k`, with bit `8k + 7` (the first module
/// placed) as its most significant bit. Remainder bits are dropped.
pub fn raw_codewords(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|group| {
            group
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << i))
        })
        .collect()
}
