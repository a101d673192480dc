use std::fmt;

/// QR code version (1-40)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest version
    pub const MIN: Version = Version(1);
    /// Largest version
    pub const MAX: Version = Version(40);

    /// Validate a version number
    pub fn new(number: u8) -> Option<Self> {
        (1..=40).contains(&number).then_some(Self(number))
    }

    /// Version whose symbol is `side` modules wide
    pub fn from_side(side: usize) -> Option<Self> {
        if side < 21 || (side - 17) % 4 != 0 {
            return None;
        }
        u8::try_from((side - 17) / 4).ok().and_then(Self::new)
    }

    /// Get the version number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Whether the symbol carries the two 18-bit version fields
    pub fn has_version_info(self) -> bool {
        self.0 >= 7
    }

    /// Index into per-version tables
    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// All 40 versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Level from the 2-bit format field value (00=M, 01=L, 10=H, 11=Q)
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => ECLevel::M,
            1 => ECLevel::L,
            2 => ECLevel::H,
            _ => ECLevel::Q,
        }
    }

    /// The 2-bit value this level is stored as in the format field
    pub fn format_bits(self) -> u8 {
        match self {
            ECLevel::M => 0,
            ECLevel::L => 1,
            ECLevel::H => 2,
            ECLevel::Q => 3,
        }
    }

    /// Row of the block tables, ordered L, M, Q, H
    pub(crate) fn table_index(self) -> usize {
        match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(name)
    }
}

/// Mask pattern (0-7)
///
/// Formulas use `i` for the column and `j` for the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// j % 2 == 0
    Pattern1 = 1,
    /// i % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (j/2 + i/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i*j)%3 + (i+j)%2) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Get mask pattern from the low 3 bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => MaskPattern::Pattern0,
            1 => MaskPattern::Pattern1,
            2 => MaskPattern::Pattern2,
            3 => MaskPattern::Pattern3,
            4 => MaskPattern::Pattern4,
            5 => MaskPattern::Pattern5,
            6 => MaskPattern::Pattern6,
            _ => MaskPattern::Pattern7,
        }
    }

    /// Pattern id 0-7
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Whether the module in column `i`, row `j` is inverted by this mask
    pub fn is_masked(self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => j % 2 == 0,
            MaskPattern::Pattern2 => i % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (j / 2 + i / 3) % 2 == 0,
            MaskPattern::Pattern5 => (i * j) % 2 + (i * j) % 3 == 0,
            MaskPattern::Pattern6 => ((i * j) % 2 + (i * j) % 3) % 2 == 0,
            MaskPattern::Pattern7 => ((i * j) % 3 + (i + j) % 2) % 2 == 0,
        }
    }

    /// All eight patterns
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];
}
