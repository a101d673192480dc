/// Alphanumeric mode decoder (Mode 0010)
use super::Payload;
use crate::decoder::bitstream::BitReader;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Decode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    /// Decode `character_count` characters from the reader
    ///
    /// All groups are consumed. The text ends at the first value outside the
    /// table. Groups read before the stream runs out are kept.
    pub fn decode(reader: &mut BitReader<'_>, character_count: usize) -> Payload<String> {
        let mut values = Vec::with_capacity(character_count);
        let mut chars_remaining = character_count;
        let mut truncated = false;

        while chars_remaining > 0 {
            let bits = if chars_remaining >= 2 { 11 } else { 6 };
            let Some(value) = reader.read_bits(bits) else {
                truncated = true;
                break;
            };
            let value = value as usize;
            if bits == 11 {
                values.push(value / 45);
                values.push(value % 45);
                chars_remaining -= 2;
            } else {
                values.push(value);
                chars_remaining -= 1;
            }
        }

        let text: String = values
            .iter()
            .map_while(|&v| ALPHANUMERIC_TABLE.get(v))
            .collect();
        if text.len() < values.len() {
            tracing::trace!(
                kept = text.len(),
                announced = character_count,
                "alphanumeric text ended at an out-of-table value"
            );
        }
        Payload { value: text, truncated }
    }
}
