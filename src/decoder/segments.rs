//! Segment decoding over the data bit stream
//!
//! Each segment is a 4-bit mode indicator, a character count whose width
//! depends on mode and version, then the payload. Decoding stops at a
//! terminator, at a mode that is not decoded, or when the stream runs out.
//! A payload cut short by the end of the stream is kept as far as it was read.

use crate::decoder::bitstream::{BitReader, DataBitStream};
use crate::decoder::config::DecodeOptions;
use crate::decoder::modes::alphanumeric::AlphanumericDecoder;
use crate::decoder::modes::byte::ByteDecoder;
use crate::decoder::modes::numeric::NumericDecoder;
use crate::models::{Mode, Segment, Termination, Version};
use tracing::trace;

/// Segments read from one stream and the reason reading stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSegments {
    pub segments: Vec<Segment>,
    pub termination: Termination,
}

/// Read every segment of `stream`
pub fn decode_segments(
    stream: &DataBitStream,
    version: Version,
    options: &DecodeOptions,
) -> DecodedSegments {
    let mut reader = stream.reader();
    let mut segments = Vec::new();

    let termination = loop {
        match next_segment(&mut reader, version, options) {
            Step::Segment(segment) => {
                trace!(
                    mode = %segment.mode(),
                    length = ?segment.length(),
                    at = reader.index(),
                    "segment decoded"
                );
                segments.push(segment);
            }
            Step::Stop(segment, termination) => {
                segments.push(segment);
                break termination;
            }
            Step::Exhausted => {
                trace!(at = reader.index(), "bit stream exhausted");
                break Termination::Exhausted;
            }
        }
    };

    DecodedSegments {
        segments,
        termination,
    }
}

enum Step {
    Segment(Segment),
    Stop(Segment, Termination),
    Exhausted,
}

fn next_segment(reader: &mut BitReader<'_>, version: Version, options: &DecodeOptions) -> Step {
    let Some(indicator) = reader.read_bits(4) else {
        return Step::Exhausted;
    };
    let mode = Mode::from_indicator(indicator as u8);

    if mode == Mode::Terminator {
        return Step::Stop(Segment::Terminator, Termination::Terminator);
    }

    let Some(width) = mode.char_count_bits(version) else {
        trace!(%mode, "mode without character count, stopping");
        return Step::Stop(
            Segment::Unsupported { mode, length: None },
            Termination::Unsupported(mode),
        );
    };
    let Some(length) = reader.read_bits(width).map(|v| v as usize) else {
        return Step::Exhausted;
    };

    let payload = match mode {
        Mode::Numeric => NumericDecoder::decode(reader, length, options.numeric_remainder)
            .map(|digits| Segment::Numeric { length, digits }),
        Mode::Alphanumeric => AlphanumericDecoder::decode(reader, length)
            .map(|text| Segment::Alphanumeric { length, text }),
        Mode::Byte => {
            ByteDecoder::decode(reader, length).map(|bytes| Segment::Byte { length, bytes })
        }
        _ => {
            trace!(%mode, length, "unsupported mode, stopping");
            return Step::Stop(
                Segment::Unsupported {
                    mode,
                    length: Some(length),
                },
                Termination::Unsupported(mode),
            );
        }
    };

    if payload.truncated {
        trace!(%mode, length, at = reader.index(), "bit stream ended inside the payload");
        Step::Stop(payload.value, Termination::Exhausted)
    } else {
        Step::Segment(payload.value)
    }
}
