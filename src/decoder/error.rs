use thiserror::Error;

/// Reasons a grid cannot be decoded at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Requested version outside 1..=40
    #[error("unknown QR version {0} (expected 1-40)")]
    UnknownVersion(u8),
    /// Grid does not match the requested version's side length
    #[error("grid is {width}x{height} but version needs {expected}x{expected}")]
    GridSizeMismatch {
        expected: usize,
        width: usize,
        height: usize,
    },
}

/// Disagreement between redundant metadata; reported, never fatal
///
/// Decoding always follows field A and the requested version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetadataWarning {
    #[error("format fields disagree (A={field_a:015b}, B={field_b:015b})")]
    FormatFieldsDiffer { field_a: u16, field_b: u16 },
    #[error("version fields disagree (A={field_a:018b}, B={field_b:018b})")]
    VersionFieldsDiffer { field_a: u32, field_b: u32 },
    #[error("symbol encodes version {encoded} but version {requested} was requested")]
    VersionMismatch { requested: u8, encoded: u8 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
