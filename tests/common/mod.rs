//! Symbol builder shared by the integration tests
//!
//! Places data through the crate's own layout and interleave tables, masks
//! it and writes BCH-protected format and version fields, so decoding a
//! built grid exercises the full structural path. Error correction
//! codewords are left zero.

#![allow(dead_code)]

use qrgrid::decoder::format::FORMAT_MASK;
use qrgrid::decoder::interleave::EccBlockPlan;
use qrgrid::decoder::layout::{CellRole, LayoutMap};
use qrgrid::decoder::tables::alignment_centers;
use qrgrid::{ECLevel, MaskPattern, ModuleGrid, Version};

const ALPHANUMERIC: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Remainder of `data * x^deg(generator)` modulo `generator` over GF(2)
pub fn bch_remainder(data: u32, generator: u32) -> u32 {
    let degree = 31 - generator.leading_zeros();
    let mut value = data << degree;
    while 32 - value.leading_zeros() > degree {
        let shift = 32 - value.leading_zeros() - degree - 1;
        value ^= generator << shift;
    }
    value
}

/// Unmasked 15-bit format field
pub fn format_field(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = (u32::from(ec_level.format_bits()) << 3) | u32::from(mask.id());
    ((data << 10) | bch_remainder(data, 0x537)) as u16
}

/// 18-bit version field
pub fn version_field(version: u8) -> u32 {
    (u32::from(version) << 12) | bch_remainder(u32::from(version), 0x1F25)
}

pub struct SymbolBuilder {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    encoded_version: u8,
    bits: Vec<bool>,
}

impl SymbolBuilder {
    pub fn new(version: u8, ec_level: ECLevel, mask: MaskPattern) -> Self {
        Self {
            version: Version::new(version).expect("valid version"),
            ec_level,
            mask,
            encoded_version: version,
            bits: Vec::new(),
        }
    }

    /// Write a different number into the version fields
    pub fn encoded_version(mut self, version: u8) -> Self {
        self.encoded_version = version;
        self
    }

    pub fn push_bits(mut self, value: u32, count: usize) -> Self {
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
        self
    }

    fn header(self, indicator: u32, count: usize) -> Self {
        let mode = qrgrid::Mode::from_indicator(indicator as u8);
        let width = mode
            .char_count_bits(self.version)
            .expect("mode has a count field");
        self.push_bits(indicator, 4).push_bits(count as u32, width)
    }

    /// Numeric segment with the standard 4-bit single-digit remainder
    pub fn numeric(self, digits: &str) -> Self {
        let mut builder = self.header(0x1, digits.len());
        for group in digits.as_bytes().chunks(3) {
            let value: u32 = std::str::from_utf8(group).unwrap().parse().unwrap();
            let width = [0, 4, 7, 10][group.len()];
            builder = builder.push_bits(value, width);
        }
        builder
    }

    pub fn alphanumeric(self, text: &str) -> Self {
        let values: Vec<u32> = text
            .chars()
            .map(|c| ALPHANUMERIC.find(c).expect("alphanumeric character") as u32)
            .collect();
        let mut builder = self.header(0x2, values.len());
        for pair in values.chunks(2) {
            builder = match pair {
                [a, b] => builder.push_bits(a * 45 + b, 11),
                [a] => builder.push_bits(*a, 6),
                _ => unreachable!(),
            };
        }
        builder
    }

    pub fn bytes(self, data: &[u8]) -> Self {
        let mut builder = self.header(0x4, data.len());
        for &b in data {
            builder = builder.push_bits(u32::from(b), 8);
        }
        builder
    }

    /// Data codewords: terminator, byte alignment, then 0xEC/0x11 padding
    pub fn data_codewords(&self) -> Vec<u8> {
        let plan = EccBlockPlan::new(self.version, self.ec_level);
        let capacity = plan.data_codewords() * 8;
        assert!(self.bits.len() <= capacity, "payload exceeds capacity");

        let mut bits = self.bits.clone();
        let terminator = (capacity - bits.len()).min(4);
        bits.extend(std::iter::repeat_n(false, terminator));
        while bits.len() % 8 != 0 {
            bits.push(false);
        }

        let mut codewords: Vec<u8> = bits
            .chunks(8)
            .map(|c| c.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
            .collect();
        for pad in [0xEC, 0x11].into_iter().cycle() {
            if codewords.len() >= plan.data_codewords() {
                break;
            }
            codewords.push(pad);
        }
        codewords
    }

    pub fn build(&self) -> ModuleGrid {
        let layout = LayoutMap::for_version(self.version);
        let plan = EccBlockPlan::new(self.version, self.ec_level);
        let mut stored = plan.interleave(&self.data_codewords());
        stored.extend(std::iter::repeat_n(0u8, plan.ecc_codewords()));

        let format = format_field(self.ec_level, self.mask) ^ FORMAT_MASK;
        let version_bits = version_field(self.encoded_version);
        let centers = alignment_centers(self.version);

        let size = self.version.size();
        let mut grid = ModuleGrid::new(size, size);
        for (x, y, role) in layout.cells() {
            let dark = match role {
                CellRole::Finder => finder_dark(x, y, size),
                CellRole::Separator => false,
                CellRole::Alignment => alignment_dark(x, y, centers),
                CellRole::Timing => (x + y) % 2 == 0,
                CellRole::FormatBitsA(i) | CellRole::FormatBitsB(i) => (format >> i) & 1 == 1,
                CellRole::VersionBitsA(i) | CellRole::VersionBitsB(i) => {
                    (version_bits >> i) & 1 == 1
                }
                CellRole::DarkModule => true,
                CellRole::Data(index) => {
                    let index = index as usize;
                    let bit = stored
                        .get(index / 8)
                        .is_some_and(|cw| (cw >> (index % 8)) & 1 == 1);
                    bit ^ self.mask.is_masked(x, y)
                }
            };
            grid.set(x, y, dark);
        }
        grid
    }
}

fn finder_dark(x: usize, y: usize, size: usize) -> bool {
    let fx = if x >= size - 7 { x - (size - 7) } else { x };
    let fy = if y >= size - 7 { y - (size - 7) } else { y };
    let ring = fx.min(fy).min(6 - fx).min(6 - fy);
    ring != 1
}

fn alignment_dark(x: usize, y: usize, centers: &[usize]) -> bool {
    let near = |p: usize| {
        centers
            .iter()
            .copied()
            .find(|&c| p.abs_diff(c) <= 2)
            .unwrap_or(p)
    };
    let distance = x.abs_diff(near(x)).max(y.abs_diff(near(y)));
    distance != 1
}
