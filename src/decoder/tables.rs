//! Fixed per-version tables from the QR specification (Model 2)

use crate::models::{ECLevel, Version};

/// A run of `count` blocks that each hold `data_codewords` data codewords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGroup {
    pub count: usize,
    pub data_codewords: usize,
}

const fn g(count: usize, data_codewords: usize) -> BlockGroup {
    BlockGroup {
        count,
        data_codewords,
    }
}

/// Alignment pattern center coordinates for `version`
pub fn alignment_centers(version: Version) -> &'static [usize] {
    ALIGNMENT_CENTERS[version.index()]
}

/// Data block groups for `version` at `ec_level`, short blocks first
pub fn data_block_groups(version: Version, ec_level: ECLevel) -> &'static [BlockGroup] {
    DATA_BLOCK_GROUPS[version.index()][ec_level.table_index()]
}

/// Error correction codewords carried by every block
pub fn ecc_codewords_per_block(version: Version, ec_level: ECLevel) -> usize {
    ECC_CODEWORDS_PER_BLOCK[ec_level.table_index()][version.number() as usize] as usize
}

/// Total number of error correction blocks
pub fn error_correction_blocks(version: Version, ec_level: ECLevel) -> usize {
    NUM_ERROR_CORRECTION_BLOCKS[ec_level.table_index()][version.number() as usize] as usize
}

// Index: [version - 1]
const ALIGNMENT_CENTERS: [&[usize]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// Index: [version - 1][ec_level], levels ordered L, M, Q, H
const DATA_BLOCK_GROUPS: [[&[BlockGroup]; 4]; 40] = [
    [&[g(1, 19)], &[g(1, 16)], &[g(1, 13)], &[g(1, 9)]], // 1
    [&[g(1, 34)], &[g(1, 28)], &[g(1, 22)], &[g(1, 16)]], // 2
    [&[g(1, 55)], &[g(1, 44)], &[g(2, 17)], &[g(2, 13)]], // 3
    [&[g(1, 80)], &[g(2, 32)], &[g(2, 24)], &[g(4, 9)]], // 4
    [&[g(1, 108)], &[g(2, 43)], &[g(2, 15), g(2, 16)], &[g(2, 11), g(2, 12)]], // 5
    [&[g(2, 68)], &[g(4, 27)], &[g(4, 19)], &[g(4, 15)]], // 6
    [&[g(2, 78)], &[g(4, 31)], &[g(2, 14), g(4, 15)], &[g(4, 13), g(1, 14)]], // 7
    [&[g(2, 97)], &[g(2, 38), g(2, 39)], &[g(4, 18), g(2, 19)], &[g(4, 14), g(2, 15)]], // 8
    [&[g(2, 116)], &[g(3, 36), g(2, 37)], &[g(4, 16), g(4, 17)], &[g(4, 12), g(4, 13)]], // 9
    // 10
    [
        &[g(2, 68), g(2, 69)],
        &[g(4, 43), g(1, 44)],
        &[g(6, 19), g(2, 20)],
        &[g(6, 15), g(2, 16)],
    ],
    [&[g(4, 81)], &[g(1, 50), g(4, 51)], &[g(4, 22), g(4, 23)], &[g(3, 12), g(8, 13)]], // 11
    // 12
    [
        &[g(2, 92), g(2, 93)],
        &[g(6, 36), g(2, 37)],
        &[g(4, 20), g(6, 21)],
        &[g(7, 14), g(4, 15)],
    ],
    [&[g(4, 107)], &[g(8, 37), g(1, 38)], &[g(8, 20), g(4, 21)], &[g(12, 11), g(4, 12)]], // 13
    // 14
    [
        &[g(3, 115), g(1, 116)],
        &[g(4, 40), g(5, 41)],
        &[g(11, 16), g(5, 17)],
        &[g(11, 12), g(5, 13)],
    ],
    // 15
    [
        &[g(5, 87), g(1, 88)],
        &[g(5, 41), g(5, 42)],
        &[g(5, 24), g(7, 25)],
        &[g(11, 12), g(7, 13)],
    ],
    // 16
    [
        &[g(5, 98), g(1, 99)],
        &[g(7, 45), g(3, 46)],
        &[g(15, 19), g(2, 20)],
        &[g(3, 15), g(13, 16)],
    ],
    // 17
    [
        &[g(1, 107), g(5, 108)],
        &[g(10, 46), g(1, 47)],
        &[g(1, 22), g(15, 23)],
        &[g(2, 14), g(17, 15)],
    ],
    // 18
    [
        &[g(5, 120), g(1, 121)],
        &[g(9, 43), g(4, 44)],
        &[g(17, 22), g(1, 23)],
        &[g(2, 14), g(19, 15)],
    ],
    // 19
    [
        &[g(3, 113), g(4, 114)],
        &[g(3, 44), g(11, 45)],
        &[g(17, 21), g(4, 22)],
        &[g(9, 13), g(16, 14)],
    ],
    // 20
    [
        &[g(3, 107), g(5, 108)],
        &[g(3, 41), g(13, 42)],
        &[g(15, 24), g(5, 25)],
        &[g(15, 15), g(10, 16)],
    ],
    [&[g(4, 116), g(4, 117)], &[g(17, 42)], &[g(17, 22), g(6, 23)], &[g(19, 16), g(6, 17)]], // 21
    [&[g(2, 111), g(7, 112)], &[g(17, 46)], &[g(7, 24), g(16, 25)], &[g(34, 13)]], // 22
    // 23
    [
        &[g(4, 121), g(5, 122)],
        &[g(4, 47), g(14, 48)],
        &[g(11, 24), g(14, 25)],
        &[g(16, 15), g(14, 16)],
    ],
    // 24
    [
        &[g(6, 117), g(4, 118)],
        &[g(6, 45), g(14, 46)],
        &[g(11, 24), g(16, 25)],
        &[g(30, 16), g(2, 17)],
    ],
    // 25
    [
        &[g(8, 106), g(4, 107)],
        &[g(8, 47), g(13, 48)],
        &[g(7, 24), g(22, 25)],
        &[g(22, 15), g(13, 16)],
    ],
    // 26
    [
        &[g(10, 114), g(2, 115)],
        &[g(19, 46), g(4, 47)],
        &[g(28, 22), g(6, 23)],
        &[g(33, 16), g(4, 17)],
    ],
    // 27
    [
        &[g(8, 122), g(4, 123)],
        &[g(22, 45), g(3, 46)],
        &[g(8, 23), g(26, 24)],
        &[g(12, 15), g(28, 16)],
    ],
    // 28
    [
        &[g(3, 117), g(10, 118)],
        &[g(3, 45), g(23, 46)],
        &[g(4, 24), g(31, 25)],
        &[g(11, 15), g(31, 16)],
    ],
    // 29
    [
        &[g(7, 116), g(7, 117)],
        &[g(21, 45), g(7, 46)],
        &[g(1, 23), g(37, 24)],
        &[g(19, 15), g(26, 16)],
    ],
    // 30
    [
        &[g(5, 115), g(10, 116)],
        &[g(19, 47), g(10, 48)],
        &[g(15, 24), g(25, 25)],
        &[g(23, 15), g(25, 16)],
    ],
    // 31
    [
        &[g(13, 115), g(3, 116)],
        &[g(2, 46), g(29, 47)],
        &[g(42, 24), g(1, 25)],
        &[g(23, 15), g(28, 16)],
    ],
    // 32
    [
        &[g(17, 115)],
        &[g(10, 46), g(23, 47)],
        &[g(10, 24), g(35, 25)],
        &[g(19, 15), g(35, 16)],
    ],
    // 33
    [
        &[g(17, 115), g(1, 116)],
        &[g(14, 46), g(21, 47)],
        &[g(29, 24), g(19, 25)],
        &[g(11, 15), g(46, 16)],
    ],
    // 34
    [
        &[g(13, 115), g(6, 116)],
        &[g(14, 46), g(23, 47)],
        &[g(44, 24), g(7, 25)],
        &[g(59, 16), g(1, 17)],
    ],
    // 35
    [
        &[g(12, 121), g(7, 122)],
        &[g(12, 47), g(26, 48)],
        &[g(39, 24), g(14, 25)],
        &[g(22, 15), g(41, 16)],
    ],
    // 36
    [
        &[g(6, 121), g(14, 122)],
        &[g(6, 47), g(34, 48)],
        &[g(46, 24), g(10, 25)],
        &[g(2, 15), g(64, 16)],
    ],
    // 37
    [
        &[g(17, 122), g(4, 123)],
        &[g(29, 46), g(14, 47)],
        &[g(49, 24), g(10, 25)],
        &[g(24, 15), g(46, 16)],
    ],
    // 38
    [
        &[g(4, 122), g(18, 123)],
        &[g(13, 46), g(32, 47)],
        &[g(48, 24), g(14, 25)],
        &[g(42, 15), g(32, 16)],
    ],
    // 39
    [
        &[g(20, 117), g(4, 118)],
        &[g(40, 47), g(7, 48)],
        &[g(43, 24), g(22, 25)],
        &[g(10, 15), g(67, 16)],
    ],
    // 40
    [
        &[g(19, 118), g(6, 119)],
        &[g(18, 47), g(31, 48)],
        &[g(34, 24), g(34, 25)],
        &[g(20, 15), g(61, 16)],
    ],
];

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version], column 0 unused
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];
