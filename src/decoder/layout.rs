use crate::decoder::placement::ZigZag;
use crate::decoder::tables::alignment_centers;
use crate::models::Version;
use std::sync::OnceLock;

/// Structural role of one module, with its bit position where it has one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// 7×7 finder pattern
    Finder,
    /// Light border completing a finder's 8×8 corner region
    Separator,
    /// 5×5 alignment pattern
    Alignment,
    /// Row 6 / column 6 timing strip
    Timing,
    /// Format field around the top-left finder, bit index 0-14
    FormatBitsA(u8),
    /// Format field split along the top-right and bottom-left finders, bit index 0-14
    FormatBitsB(u8),
    /// Version block left of the top-right finder, bit index 0-17
    VersionBitsA(u8),
    /// Version block above the bottom-left finder, bit index 0-17
    VersionBitsB(u8),
    /// Always-dark module next to the bottom-left format bits
    DarkModule,
    /// Data or error correction bit at this position of the raw bit stream
    Data(u16),
}

impl CellRole {
    /// Whether this module carries stream data
    pub fn is_data(self) -> bool {
        matches!(self, CellRole::Data(_))
    }

    /// Single-character tag used when printing a lookup table
    pub fn tag(self) -> char {
        match self {
            CellRole::Finder => 'P',
            CellRole::Separator => 'B',
            CellRole::Alignment => 'A',
            CellRole::Timing => 'T',
            CellRole::FormatBitsA(_) => 'F',
            CellRole::FormatBitsB(_) => 'G',
            CellRole::VersionBitsA(_) => 'V',
            CellRole::VersionBitsB(_) => 'R',
            CellRole::DarkModule => 'D',
            CellRole::Data(_) => '.',
        }
    }
}

/// Role of every module of one version's symbol.
///
/// Built once per version and never mutated; see [`LayoutMap::for_version`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMap {
    version: Version,
    size: usize,
    cells: Vec<CellRole>,
    data_bits: usize,
}

static LAYOUTS: [OnceLock<LayoutMap>; 40] = [const { OnceLock::new() }; 40];

impl LayoutMap {
    /// Shared, lazily built layout for `version`
    pub fn for_version(version: Version) -> &'static LayoutMap {
        LAYOUTS[version.index()].get_or_init(|| Self::build(version))
    }

    /// Classify every module of `version` and number the data modules
    pub fn build(version: Version) -> Self {
        let size = version.size();
        let centers = alignment_centers(version);
        let mut roles: Vec<Option<CellRole>> = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                roles.push(classify(version, centers, x, y));
            }
        }

        let data_bits = roles.iter().filter(|r| r.is_none()).count();
        let full = data_bits - data_bits % 8;
        let mut visited = 0usize;
        for (x, y) in ZigZag::new(size) {
            let slot = &mut roles[y * size + x];
            if slot.is_some() {
                continue;
            }
            *slot = Some(CellRole::Data(data_index(visited, full, data_bits) as u16));
            visited += 1;
        }
        debug_assert_eq!(visited, data_bits);

        // Column 6 is never visited but holds no data modules
        let cells: Vec<CellRole> = roles.into_iter().flatten().collect();
        debug_assert_eq!(cells.len(), size * size);

        Self {
            version,
            size,
            cells,
            data_bits,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of data modules (data and error correction bits)
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Role of the module at (x, y), or `None` outside the symbol
    pub fn role(&self, x: usize, y: usize) -> Option<CellRole> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y * self.size + x])
    }

    /// `(x, y, role)` for every module in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellRole)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &role)| (i % self.size, i / self.size, role))
    }

    /// Number of modules matching `pred`
    pub fn count(&self, pred: impl Fn(CellRole) -> bool) -> usize {
        self.cells.iter().filter(|&&r| pred(r)).count()
    }

    /// Lookup table as text: data modules print their 3-digit index,
    /// other modules their role tag
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in 0..self.size {
            let row: Vec<String> = (0..self.size)
                .map(|x| match self.cells[y * self.size + x] {
                    CellRole::Data(index) => format!("{index:03}"),
                    role => format!("{}  ", role.tag()),
                })
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}

/// Bit index of the `visited`-th data module in placement order
///
/// Codewords are filled MSB first. A trailing partial group of `r` modules
/// takes only the low `r` indices of its codeword.
fn data_index(visited: usize, full: usize, total: usize) -> usize {
    if visited < full {
        (visited / 8) * 8 + 7 - visited % 8
    } else {
        total - 1 - (visited - full)
    }
}

/// Role of a non-data module, or `None` for a data module
fn classify(version: Version, centers: &[usize], x: usize, y: usize) -> Option<CellRole> {
    let size = version.size();
    let far = size - 8;

    // Finder patterns
    if (x < 7 && y < 7) || (x > far && y < 7) || (x < 7 && y > far) {
        return Some(CellRole::Finder);
    }
    // Separators
    if (x == 7 && y < 8) || (x < 8 && y == 7) {
        return Some(CellRole::Separator);
    }
    if (x == far && y < 8) || (x >= far && y == 7) {
        return Some(CellRole::Separator);
    }
    if (x == 7 && y >= far) || (x < 8 && y == far) {
        return Some(CellRole::Separator);
    }
    if in_alignment_pattern(centers, x, y) {
        return Some(CellRole::Alignment);
    }
    if x == 6 || y == 6 {
        return Some(CellRole::Timing);
    }
    // Format bits
    if y == 8 && x >= far {
        return Some(CellRole::FormatBitsB((size - 1 - x) as u8));
    }
    if x == 8 && y < 9 {
        let index = if y < 6 { y } else { y - 1 };
        return Some(CellRole::FormatBitsA(index as u8));
    }
    if y == 8 && x < 8 {
        let index = if x < 6 { 14 - x } else { 15 - x };
        return Some(CellRole::FormatBitsA(index as u8));
    }
    if x == 8 && y == far {
        return Some(CellRole::DarkModule);
    }
    if x == 8 && y > far {
        return Some(CellRole::FormatBitsB((y - far + 7) as u8));
    }
    // Version bits
    if version.has_version_info() {
        let block = size - 11;
        if x >= block && y < 6 {
            return Some(CellRole::VersionBitsA((x - block + 3 * y) as u8));
        }
        if x < 6 && y >= block {
            return Some(CellRole::VersionBitsB((y - block + 3 * x) as u8));
        }
    }
    None
}

/// Within two modules (Chebyshev) of an alignment center that is not a
/// finder corner
fn in_alignment_pattern(centers: &[usize], x: usize, y: usize) -> bool {
    let (Some(&first), Some(&last)) = (centers.first(), centers.last()) else {
        return false;
    };
    for &cx in centers {
        for &cy in centers {
            let finder_corner = (cx == first && cy == first)
                || (cx == first && cy == last)
                || (cx == last && cy == first);
            if finder_corner {
                continue;
            }
            if cx.abs_diff(x) <= 2 && cy.abs_diff(y) <= 2 {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_data_bits_match_standard_counts() {
        let expected = [
            (1, 208),
            (2, 359),
            (6, 1383),
            (7, 1568),
            (14, 4651),
            (21, 9252),
            (28, 15371),
            (40, 29648),
        ];
        for (n, bits) in expected {
            assert_eq!(LayoutMap::build(v(n)).data_bits(), bits, "version {n}");
        }
    }

    #[test]
    fn test_data_bits_are_size_squared_minus_function_modules() {
        for version in Version::all() {
            let layout = LayoutMap::for_version(version);
            let function = layout.count(|r| !r.is_data());
            assert_eq!(layout.data_bits() + function, version.size() * version.size());
        }
    }

    #[test]
    fn test_data_indices_contiguous() {
        for version in Version::all() {
            let layout = LayoutMap::for_version(version);
            let mut seen = vec![false; layout.data_bits()];
            for (x, y, role) in layout.cells() {
                if let CellRole::Data(index) = role {
                    let index = index as usize;
                    assert!(index < seen.len(), "v{version} ({x}, {y}) index {index}");
                    assert!(!seen[index], "v{version} duplicate index {index}");
                    seen[index] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(LayoutMap::build(v(9)), LayoutMap::build(v(9)));
        assert!(std::ptr::eq(
            LayoutMap::for_version(v(3)),
            LayoutMap::for_version(v(3))
        ));
    }

    #[test]
    fn test_first_codeword_is_msb_first() {
        let layout = LayoutMap::build(v(1));
        // First two visits: (20, 20) then (19, 20)
        assert_eq!(layout.role(20, 20), Some(CellRole::Data(7)));
        assert_eq!(layout.role(19, 20), Some(CellRole::Data(6)));
        assert_eq!(layout.role(19, 17), Some(CellRole::Data(0)));
        assert_eq!(layout.role(20, 16), Some(CellRole::Data(15)));
    }

    #[test]
    fn test_partial_codeword_takes_low_indices() {
        // Version 2 has 359 data modules: 44 codewords and 7 remainder bits
        let layout = LayoutMap::build(v(2));
        let visits: Vec<_> = ZigZag::new(layout.size())
            .filter(|&(x, y)| layout.role(x, y).is_some_and(|r| r.is_data()))
            .collect();
        let tail: Vec<_> = visits[352..]
            .iter()
            .map(|&(x, y)| layout.role(x, y))
            .collect();
        let expected: Vec<_> = (352..359u16).rev().map(|i| Some(CellRole::Data(i))).collect();
        assert_eq!(tail, expected);

        // Version 14 leaves 3 remainder bits
        let layout = LayoutMap::build(v(14));
        let last = ZigZag::new(layout.size())
            .filter(|&(x, y)| layout.role(x, y).is_some_and(|r| r.is_data()))
            .last()
            .unwrap();
        assert_eq!(layout.role(last.0, last.1), Some(CellRole::Data(4648)));
    }

    #[test]
    fn test_format_fields() {
        let layout = LayoutMap::build(v(1));
        let a: Vec<_> = layout
            .cells()
            .filter_map(|(_, _, r)| match r {
                CellRole::FormatBitsA(i) => Some(i),
                _ => None,
            })
            .collect();
        let b: Vec<_> = layout
            .cells()
            .filter_map(|(_, _, r)| match r {
                CellRole::FormatBitsB(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(a.len(), 15);
        assert_eq!(b.len(), 15);

        assert_eq!(layout.role(8, 0), Some(CellRole::FormatBitsA(0)));
        assert_eq!(layout.role(8, 7), Some(CellRole::FormatBitsA(6)));
        assert_eq!(layout.role(8, 8), Some(CellRole::FormatBitsA(7)));
        assert_eq!(layout.role(7, 8), Some(CellRole::FormatBitsA(8)));
        assert_eq!(layout.role(0, 8), Some(CellRole::FormatBitsA(14)));
        assert_eq!(layout.role(20, 8), Some(CellRole::FormatBitsB(0)));
        assert_eq!(layout.role(13, 8), Some(CellRole::FormatBitsB(7)));
        assert_eq!(layout.role(8, 14), Some(CellRole::FormatBitsB(8)));
        assert_eq!(layout.role(8, 20), Some(CellRole::FormatBitsB(14)));
        assert_eq!(layout.role(8, 13), Some(CellRole::DarkModule));
        assert_eq!(layout.count(|r| r == CellRole::DarkModule), 1);
    }

    #[test]
    fn test_version_fields_only_from_version_7() {
        let is_version = |r: CellRole| {
            matches!(r, CellRole::VersionBitsA(_) | CellRole::VersionBitsB(_))
        };
        assert_eq!(LayoutMap::build(v(6)).count(is_version), 0);

        let layout = LayoutMap::build(v(7));
        assert_eq!(
            layout.count(|r| matches!(r, CellRole::VersionBitsA(_))),
            18
        );
        assert_eq!(
            layout.count(|r| matches!(r, CellRole::VersionBitsB(_))),
            18
        );
        let size = layout.size();
        assert_eq!(layout.role(size - 11, 0), Some(CellRole::VersionBitsA(0)));
        assert_eq!(layout.role(size - 9, 5), Some(CellRole::VersionBitsA(17)));
        assert_eq!(layout.role(0, size - 11), Some(CellRole::VersionBitsB(0)));
        assert_eq!(layout.role(5, size - 9), Some(CellRole::VersionBitsB(17)));
    }

    #[test]
    fn test_alignment_patterns() {
        assert_eq!(LayoutMap::build(v(1)).count(|r| r == CellRole::Alignment), 0);
        assert_eq!(LayoutMap::build(v(2)).count(|r| r == CellRole::Alignment), 25);
        // Version 7: six patterns, four of them crossing a timing strip
        let layout = LayoutMap::build(v(7));
        assert_eq!(layout.count(|r| r == CellRole::Alignment), 6 * 25);
        assert_eq!(layout.role(22, 6), Some(CellRole::Alignment));
        assert_eq!(layout.role(22, 22), Some(CellRole::Alignment));
    }

    #[test]
    fn test_role_outside_symbol() {
        let layout = LayoutMap::build(v(1));
        assert_eq!(layout.role(20, 20), Some(CellRole::Data(7)));
        assert_eq!(layout.role(21, 0), None);
        assert_eq!(layout.role(0, 21), None);
        assert_eq!(layout.role(usize::MAX, 3), None);
    }

    #[test]
    fn test_render_tags() {
        let text = LayoutMap::build(v(1)).render();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("P   P   "));
        assert_eq!(text.lines().count(), 21);
    }
}
