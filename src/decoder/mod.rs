//! QR code decoding modules
//!
//! This module contains all the logic for decoding a module grid:
//! - Structural layout and zig-zag data placement
//! - Format and version information extraction
//! - Unmasking and codeword de-interleaving
//! - Data mode decoding (numeric, alphanumeric, byte)

/// Data codewords as an MSB-first bit stream
pub mod bitstream;
/// Decode options and environment defaults
pub mod config;
/// Decode errors and metadata warnings
pub mod error;
/// Format information extraction (mask pattern, EC level)
pub mod format;
/// Error correction block plans and de-interleaving
pub mod interleave;
/// Per-version module role tables
pub mod layout;
/// Data mode decoders (numeric, alphanumeric, byte)
pub mod modes;
/// Zig-zag data module traversal
pub mod placement;
/// Main QR decoder that orchestrates the decoding pipeline
pub mod qr_decoder;
/// Mode/length/payload segment reader
pub mod segments;
/// QR specification tables (alignment centres, block groups, ECC codewords)
pub mod tables;
/// Data mask removal
pub mod unmask;
/// Version information extraction (versions 7-40)
pub mod version;
