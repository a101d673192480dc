/// Byte mode decoder (Mode 0100) for 8-bit data
use super::Payload;
use crate::decoder::bitstream::BitReader;

/// Decode byte mode data (8 bits per character)
pub struct ByteDecoder;

impl ByteDecoder {
    /// Read `character_count` raw bytes
    ///
    /// No character set is applied. Bytes read before the stream runs out
    /// are kept.
    pub fn decode(reader: &mut BitReader<'_>, character_count: usize) -> Payload<Vec<u8>> {
        let mut bytes = Vec::with_capacity(character_count);
        for _ in 0..character_count {
            let Some(byte) = reader.read_bits(8) else {
                return Payload::truncated(bytes);
            };
            bytes.push(byte as u8);
        }
        Payload::complete(bytes)
    }
}
