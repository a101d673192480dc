/// Version information fields for QR codes v7+
use crate::decoder::format::bit_string;
use crate::decoder::layout::{CellRole, LayoutMap};
use crate::models::ModuleGrid;

/// The two 18-bit version fields (6 data + 12 BCH bits each), unmasked
///
/// Field bit `i` is stored at bit `i`; the version number sits in bits 12-17.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub field_a: u32,
    pub field_b: u32,
}

impl VersionInfo {
    /// Read both fields, or `None` below version 7
    pub fn extract(grid: &ModuleGrid, layout: &LayoutMap) -> Option<Self> {
        if !layout.version().has_version_info() {
            return None;
        }
        let mut field_a = 0u32;
        let mut field_b = 0u32;
        for (x, y, role) in layout.cells() {
            match role {
                CellRole::VersionBitsA(i) if grid.get(x, y) => field_a |= 1 << i,
                CellRole::VersionBitsB(i) if grid.get(x, y) => field_b |= 1 << i,
                _ => {}
            }
        }
        Some(Self { field_a, field_b })
    }

    /// Version number carried by field A
    pub fn encoded_version(&self) -> u8 {
        (self.field_a >> 12) as u8 & 0x3F
    }

    /// Version number carried by field B
    pub fn encoded_version_b(&self) -> u8 {
        (self.field_b >> 12) as u8 & 0x3F
    }

    /// Whether the two redundant copies carry the same bits
    pub fn fields_agree(&self) -> bool {
        self.field_a == self.field_b
    }

    /// Field A as 18 characters, bit 0 first
    pub fn bits_a(&self) -> String {
        bit_string(self.field_a, 18)
    }

    /// Field B as 18 characters, bit 0 first
    pub fn bits_b(&self) -> String {
        bit_string(self.field_b, 18)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    // Version 7 information: 000111 110010010100
    const VERSION_7_BITS: u32 = 0x07C94;

    #[test]
    fn test_no_version_info_below_7() {
        let version = Version::new(6).unwrap();
        let grid = ModuleGrid::new(version.size(), version.size());
        assert_eq!(
            VersionInfo::extract(&grid, LayoutMap::for_version(version)),
            None
        );
    }

    #[test]
    fn test_extract_version_7() {
        let version = Version::new(7).unwrap();
        let layout = LayoutMap::for_version(version);
        let mut grid = ModuleGrid::new(version.size(), version.size());
        for (x, y, role) in layout.cells() {
            match role {
                CellRole::VersionBitsA(i) | CellRole::VersionBitsB(i) => {
                    grid.set(x, y, (VERSION_7_BITS >> i) & 1 == 1)
                }
                _ => {}
            }
        }

        let info = VersionInfo::extract(&grid, layout).unwrap();
        assert_eq!(info.field_a, VERSION_7_BITS);
        assert_eq!(info.encoded_version(), 7);
        assert_eq!(info.encoded_version_b(), 7);
        assert!(info.fields_agree());
        assert_eq!(info.bits_a().len(), 18);
    }

    #[test]
    fn test_fields_reported_independently() {
        let info = VersionInfo {
            field_a: VERSION_7_BITS,
            field_b: 0x085BC,
        };
        assert!(!info.fields_agree());
        assert_eq!(info.encoded_version(), 7);
        assert_eq!(info.encoded_version_b(), 8);
    }
}
