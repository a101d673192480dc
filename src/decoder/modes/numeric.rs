/// Numeric mode decoder (Mode 0001)
use super::Payload;
use crate::decoder::bitstream::BitReader;
use crate::decoder::config::NumericRemainder;

/// Decode numeric data
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits (standard)
/// or 7 bits (legacy)
pub struct NumericDecoder;

impl NumericDecoder {
    /// Decode `character_count` digits from the reader
    ///
    /// Groups read before the stream runs out are kept.
    pub fn decode(
        reader: &mut BitReader<'_>,
        character_count: usize,
        remainder: NumericRemainder,
    ) -> Payload<String> {
        let mut result = String::with_capacity(character_count + 1);
        let mut chars_remaining = character_count;

        while chars_remaining >= 3 {
            let Some(value) = reader.read_bits(10) else {
                return Payload::truncated(result);
            };
            result.push_str(&format!("{value:03}"));
            chars_remaining -= 3;
        }

        let (bits, digits) = match (chars_remaining, remainder) {
            (0, _) => return Payload::complete(result),
            (1, NumericRemainder::Standard) => (4, 1),
            // A lone digit under the legacy policy is read like a pair
            _ => (7, 2),
        };
        let Some(value) = reader.read_bits(bits) else {
            return Payload::truncated(result);
        };
        result.push_str(&format!("{value:0digits$}"));

        Payload::complete(result)
    }
}
