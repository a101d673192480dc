use crate::decoder::bitstream::DataBitStream;
use crate::decoder::config::DecodeOptions;
use crate::decoder::error::{DecodeError, MetadataWarning, Result};
use crate::decoder::format::FormatInfo;
use crate::decoder::interleave::{EccBlockPlan, raw_codewords};
use crate::decoder::layout::LayoutMap;
use crate::decoder::segments::decode_segments;
use crate::decoder::unmask::read_data_bits;
use crate::decoder::version::VersionInfo;
/// Main QR decoder - wires everything together
use crate::models::{ECLevel, MaskPattern, ModuleGrid, Segment, Termination, Version};
use tracing::{debug, warn};

/// Everything read from one symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    pub version: Version,
    pub format: FormatInfo,
    /// Present for version 7 and up
    pub version_info: Option<VersionInfo>,
    /// Unmasked data codewords in logical order
    pub data: DataBitStream,
    pub segments: Vec<Segment>,
    pub termination: Termination,
    pub warnings: Vec<MetadataWarning>,
}

impl DecodeResult {
    pub fn ec_level(&self) -> ECLevel {
        self.format.ec_level
    }

    pub fn mask_pattern(&self) -> MaskPattern {
        self.format.mask_pattern
    }

    /// Concatenated text of all decoded segments
    pub fn text(&self) -> String {
        self.segments.iter().filter_map(Segment::text).collect()
    }
}

/// Main QR decoder that processes a module grid of known version
pub struct QrDecoder;

impl QrDecoder {
    /// Decode `grid` as a symbol of version `version_number`
    pub fn decode(
        grid: &ModuleGrid,
        version_number: u8,
        options: &DecodeOptions,
    ) -> Result<DecodeResult> {
        let version =
            Version::new(version_number).ok_or(DecodeError::UnknownVersion(version_number))?;
        let expected = version.size();
        if grid.width() != expected || grid.height() != expected {
            return Err(DecodeError::GridSizeMismatch {
                expected,
                width: grid.width(),
                height: grid.height(),
            });
        }

        let layout = LayoutMap::for_version(version);
        let (format, version_info, warnings) = Self::read_metadata(grid, layout);

        let plan = EccBlockPlan::new(version, format.ec_level);
        debug!(
            %version,
            ec_level = %format.ec_level,
            mask = format.mask_pattern.id(),
            blocks = plan.block_count(),
            data_codewords = plan.data_codewords(),
            ecc_codewords = plan.ecc_codewords(),
            "decoding symbol"
        );

        let bits = read_data_bits(grid, layout, format.mask_pattern);
        let stored = raw_codewords(&bits);
        let stream = DataBitStream::new(plan.deinterleave(&stored));
        let decoded = decode_segments(&stream, version, options);
        debug!(
            segments = decoded.segments.len(),
            termination = ?decoded.termination,
            "segments decoded"
        );

        Ok(DecodeResult {
            version,
            format,
            version_info,
            data: stream,
            segments: decoded.segments,
            termination: decoded.termination,
            warnings,
        })
    }

    fn read_metadata(
        grid: &ModuleGrid,
        layout: &LayoutMap,
    ) -> (FormatInfo, Option<VersionInfo>, Vec<MetadataWarning>) {
        let mut warnings = Vec::new();

        let format = FormatInfo::extract(grid, layout);
        if !format.fields_agree() {
            warnings.push(MetadataWarning::FormatFieldsDiffer {
                field_a: format.field_a,
                field_b: format.field_b,
            });
        }

        let version_info = VersionInfo::extract(grid, layout);
        if let Some(info) = version_info {
            if !info.fields_agree() {
                warnings.push(MetadataWarning::VersionFieldsDiffer {
                    field_a: info.field_a,
                    field_b: info.field_b,
                });
            }
            let requested = layout.version().number();
            if info.encoded_version() != requested {
                warnings.push(MetadataWarning::VersionMismatch {
                    requested,
                    encoded: info.encoded_version(),
                });
            }
        }

        for warning in &warnings {
            warn!(%warning, "metadata mismatch, using field A");
        }
        (format, version_info, warnings)
    }
}
