/// Data mask removal
use crate::decoder::layout::{CellRole, LayoutMap};
use crate::models::{MaskPattern, ModuleGrid};

/// Unmasked data bits of `grid`, indexed by their placement index
///
/// The mask is XORed onto data modules only; function modules, including the
/// dark module, are never read.
pub fn read_data_bits(
    grid: &ModuleGrid,
    layout: &LayoutMap,
    mask_pattern: MaskPattern,
) -> Vec<bool> {
    let mut bits = vec![false; layout.data_bits()];
    for (x, y, role) in layout.cells() {
        if let CellRole::Data(index) = role {
            bits[index as usize] = grid.get(x, y) ^ mask_pattern.is_masked(x, y);
        }
    }
    bits
}
