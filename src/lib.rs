//! qrgrid - QR symbol structure decoder
//!
//! Decodes an already-sampled QR module grid back into its data segments:
//! module roles and zig-zag data placement, format and version metadata,
//! unmasking, block de-interleaving and mode/length/payload segment parsing.
//! Error correction is not applied; the raw bits are trusted.
//!
//! # Example
//! ```
//! use qrgrid::ModuleGrid;
//!
//! let grid = ModuleGrid::new(21, 21);
//! let result = qrgrid::decode(&grid, 1).unwrap();
//! assert_eq!(result.version.number(), 1);
//! ```

/// QR code decoding modules (layout, metadata, unmasking, segments)
pub mod decoder;
/// Core data structures (ModuleGrid, Version, Segment, etc.)
pub mod models;
/// Grid acquisition from images and text
pub mod tools;

pub use decoder::config::{DecodeOptions, NumericRemainder};
pub use decoder::error::{DecodeError, MetadataWarning};
pub use decoder::qr_decoder::DecodeResult;
pub use models::{ECLevel, MaskPattern, Mode, ModuleGrid, Segment, Termination, Version};

use decoder::qr_decoder::QrDecoder;
use rayon::prelude::*;

/// Decode a module grid of the given version with default options
///
/// # Arguments
/// * `grid` - Square module grid, dark = `true`
/// * `version` - Symbol version, 1-40
///
/// # Returns
/// Metadata, segments and any metadata warnings
pub fn decode(grid: &ModuleGrid, version: u8) -> Result<DecodeResult, DecodeError> {
    QrDecoder::decode(grid, version, &DecodeOptions::default())
}

/// Decode a module grid with explicit options
pub fn decode_with_options(
    grid: &ModuleGrid,
    version: u8,
    options: &DecodeOptions,
) -> Result<DecodeResult, DecodeError> {
    QrDecoder::decode(grid, version, options)
}

/// Decode many independent symbols in parallel
///
/// Results come back in input order.
pub fn decode_batch(
    symbols: &[(ModuleGrid, u8)],
    options: &DecodeOptions,
) -> Vec<Result<DecodeResult, DecodeError>> {
    symbols
        .par_iter()
        .map(|(grid, version)| QrDecoder::decode(grid, *version, options))
        .collect()
}
