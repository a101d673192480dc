//! QR code data mode decoders
//!
//! This module contains decoders for the data modes that are decoded:
//! - Numeric: digits (0-9) in groups of three
//! - Alphanumeric: the 45-character table
//! - Byte: raw 8-bit data
//!
//! Kanji, ECI, Structured Append and FNC1 stop decoding in
//! [`crate::decoder::segments`].

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

/// Payload read by a mode decoder
///
/// When the stream ends before the announced count is read, `value` holds
/// everything decoded up to that point and `truncated` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload<T> {
    pub value: T,
    pub truncated: bool,
}

impl<T> Payload<T> {
    pub fn complete(value: T) -> Self {
        Self {
            value,
            truncated: false,
        }
    }

    pub fn truncated(value: T) -> Self {
        Self {
            value,
            truncated: true,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Payload<U> {
        Payload {
            value: f(self.value),
            truncated: self.truncated,
        }
    }
}
