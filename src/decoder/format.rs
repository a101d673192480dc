/// Format information extraction from the two redundant 15-bit fields
use crate::decoder::layout::{CellRole, LayoutMap};
use crate::models::{ECLevel, MaskPattern, ModuleGrid};

/// Format mask `101010000010010`, written MSB (bit 14) first
pub const FORMAT_MASK: u16 = 0b101_0100_0001_0010;

/// Decoded format information
///
/// Fields are stored unmasked with field bit `i` at bit `i`. Only field A
/// drives decoding; field B is kept so callers can compare the two copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
    pub field_a: u16,
    pub field_b: u16,
}

impl FormatInfo {
    /// Read and unmask both format fields of `grid`
    pub fn extract(grid: &ModuleGrid, layout: &LayoutMap) -> Self {
        let mut raw_a = 0u16;
        let mut raw_b = 0u16;
        for (x, y, role) in layout.cells() {
            match role {
                CellRole::FormatBitsA(i) if grid.get(x, y) => raw_a |= 1 << i,
                CellRole::FormatBitsB(i) if grid.get(x, y) => raw_b |= 1 << i,
                _ => {}
            }
        }
        Self::from_raw_fields(raw_a, raw_b)
    }

    /// Decode from the two masked fields as read from the symbol
    pub fn from_raw_fields(raw_a: u16, raw_b: u16) -> Self {
        let field_a = (raw_a ^ FORMAT_MASK) & 0x7FFF;
        let field_b = (raw_b ^ FORMAT_MASK) & 0x7FFF;
        Self {
            ec_level: ECLevel::from_format_bits((field_a >> 13) as u8),
            mask_pattern: MaskPattern::from_bits((field_a >> 10) as u8),
            field_a,
            field_b,
        }
    }

    /// Whether the two redundant copies carry the same bits
    pub fn fields_agree(&self) -> bool {
        self.field_a == self.field_b
    }

    /// Field A as 15 characters, bit 0 first
    pub fn bits_a(&self) -> String {
        bit_string(self.field_a as u32, 15)
    }

    /// Field B as 15 characters, bit 0 first
    pub fn bits_b(&self) -> String {
        bit_string(self.field_b as u32, 15)
    }
}

/// `len` bits of `value` as '0'/'1', lowest bit first
pub(crate) fn bit_string(value: u32, len: usize) -> String {
    (0..len)
        .map(|i| if (value >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    #[test]
    fn test_format_mask_unmasks_zero() {
        // An all-light field decodes to the mask itself: bits 13-14 = 0b10, H
        let info = FormatInfo::from_raw_fields(0, 0);
        assert_eq!(info.field_a, FORMAT_MASK);
        assert_eq!(info.ec_level, ECLevel::H);
        assert_eq!(info.mask_pattern, MaskPattern::Pattern5);
        assert!(info.fields_agree());
    }

    #[test]
    fn test_format_level_and_mask() {
        // M (00), mask 0: data bits 00000 with BCH 0 -> masked value is the mask
        let info = FormatInfo::from_raw_fields(FORMAT_MASK, FORMAT_MASK);
        assert_eq!(info.ec_level, ECLevel::M);
        assert_eq!(info.mask_pattern, MaskPattern::Pattern0);

        // Q (11), mask 6 (110) in bits 14..10
        let field = 0b11_110 << 10;
        let info = FormatInfo::from_raw_fields(field ^ FORMAT_MASK, 0);
        assert_eq!(info.ec_level, ECLevel::Q);
        assert_eq!(info.mask_pattern, MaskPattern::Pattern6);
        assert!(!info.fields_agree());
    }

    #[test]
    fn test_extract_reads_field_positions() {
        let version = Version::MIN;
        let layout = LayoutMap::for_version(version);
        let mut grid = ModuleGrid::new(21, 21);

        // L (01), mask 3 (011): field bits 14..10 = 01011
        let field: u16 = 0b01_011 << 10;
        let raw = field ^ FORMAT_MASK;
        for (x, y, role) in layout.cells() {
            match role {
                CellRole::FormatBitsA(i) | CellRole::FormatBitsB(i) => {
                    grid.set(x, y, (raw >> i) & 1 == 1)
                }
                _ => {}
            }
        }

        let info = FormatInfo::extract(&grid, layout);
        assert_eq!(info.ec_level, ECLevel::L);
        assert_eq!(info.mask_pattern, MaskPattern::Pattern3);
        assert_eq!(info.field_a, field);
        assert!(info.fields_agree());
    }

    #[test]
    fn test_bit_string_lsb_first() {
        assert_eq!(bit_string(0b110, 4), "0110");
        let info = FormatInfo::from_raw_fields(FORMAT_MASK ^ 1, FORMAT_MASK);
        assert!(info.bits_a().starts_with('1'));
        assert_eq!(info.bits_b(), "0".repeat(15));
    }
}
