use super::Version;
use std::fmt;

/// Data mode announced by a 4-bit mode indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// 0000
    Terminator,
    /// 0001
    Numeric,
    /// 0010
    Alphanumeric,
    /// 0011
    StructuredAppend,
    /// 0100
    Byte,
    /// 0101
    Fnc1First,
    /// 0111
    Eci,
    /// 1000
    Kanji,
    /// 1001
    Fnc1Second,
    /// Any other indicator value
    Unknown(u8),
}

impl Mode {
    /// Mode for a 4-bit indicator
    pub fn from_indicator(indicator: u8) -> Self {
        match indicator & 0x0F {
            0x0 => Mode::Terminator,
            0x1 => Mode::Numeric,
            0x2 => Mode::Alphanumeric,
            0x3 => Mode::StructuredAppend,
            0x4 => Mode::Byte,
            0x5 => Mode::Fnc1First,
            0x7 => Mode::Eci,
            0x8 => Mode::Kanji,
            0x9 => Mode::Fnc1Second,
            other => Mode::Unknown(other),
        }
    }

    /// The 4-bit indicator value
    pub fn indicator(self) -> u8 {
        match self {
            Mode::Terminator => 0x0,
            Mode::Numeric => 0x1,
            Mode::Alphanumeric => 0x2,
            Mode::StructuredAppend => 0x3,
            Mode::Byte => 0x4,
            Mode::Fnc1First => 0x5,
            Mode::Eci => 0x7,
            Mode::Kanji => 0x8,
            Mode::Fnc1Second => 0x9,
            Mode::Unknown(v) => v,
        }
    }

    /// Width of the character count indicator, for modes that have one
    ///
    /// Versions are banded 1-9, 10-26 and 27-40.
    pub fn char_count_bits(self, version: Version) -> Option<usize> {
        let band = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        let widths: [usize; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
            _ => return None,
        };
        Some(widths[band])
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Terminator => f.write_str("Terminator"),
            Mode::Numeric => f.write_str("Numeric"),
            Mode::Alphanumeric => f.write_str("Alphanumeric"),
            Mode::StructuredAppend => f.write_str("Structured Append"),
            Mode::Byte => f.write_str("8-bit Byte"),
            Mode::Fnc1First => f.write_str("FNC1 (First position)"),
            Mode::Eci => f.write_str("ECI"),
            Mode::Kanji => f.write_str("Kanji"),
            Mode::Fnc1Second => f.write_str("FNC1 (Second position)"),
            Mode::Unknown(v) => write!(f, "Unknown ({v})"),
        }
    }
}

/// One decoded segment of the data bit stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Digits, zero-padded per group
    Numeric { length: usize, digits: String },
    /// Characters from the 45-symbol table; may be shorter than `length`
    /// when an out-of-table value ended the text early
    Alphanumeric { length: usize, text: String },
    /// Raw bytes
    Byte { length: usize, bytes: Vec<u8> },
    /// End-of-message marker
    Terminator,
    /// A mode that is recognized (or not) but never decoded; ends the stream
    Unsupported { mode: Mode, length: Option<usize> },
}

impl Segment {
    /// Mode of this segment
    pub fn mode(&self) -> Mode {
        match self {
            Segment::Numeric { .. } => Mode::Numeric,
            Segment::Alphanumeric { .. } => Mode::Alphanumeric,
            Segment::Byte { .. } => Mode::Byte,
            Segment::Terminator => Mode::Terminator,
            Segment::Unsupported { mode, .. } => *mode,
        }
    }

    /// Character or byte count from the segment header
    pub fn length(&self) -> Option<usize> {
        match self {
            Segment::Numeric { length, .. }
            | Segment::Alphanumeric { length, .. }
            | Segment::Byte { length, .. } => Some(*length),
            Segment::Terminator => None,
            Segment::Unsupported { length, .. } => *length,
        }
    }

    /// Text view of the payload
    ///
    /// Byte payloads map each byte to the code point of the same value.
    pub fn text(&self) -> Option<String> {
        match self {
            Segment::Numeric { digits, .. } => Some(digits.clone()),
            Segment::Alphanumeric { text, .. } => Some(text.clone()),
            Segment::Byte { bytes, .. } => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Segment::Terminator | Segment::Unsupported { .. } => None,
        }
    }
}

/// Why segment decoding stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A terminator indicator was read
    Terminator,
    /// A mode that is not decoded was read
    Unsupported(Mode),
    /// The bit stream ran out
    Exhausted,
}
