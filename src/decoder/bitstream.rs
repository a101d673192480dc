/// De-interleaved data codewords read as one MSB-first bit stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataBitStream {
    codewords: Vec<u8>,
}

impl DataBitStream {
    pub fn new(codewords: Vec<u8>) -> Self {
        Self { codewords }
    }

    /// Codewords in logical order
    pub fn codewords(&self) -> &[u8] {
        &self.codewords
    }

    /// Length in bits
    pub fn len(&self) -> usize {
        self.codewords.len() * 8
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    /// Bit at `index`, counting from the MSB of the first codeword
    pub fn bit(&self, index: usize) -> Option<bool> {
        let byte = self.codewords.get(index / 8)?;
        Some((byte >> (7 - index % 8)) & 1 == 1)
    }

    /// Reader positioned at the first bit
    pub fn reader(&self) -> BitReader<'_> {
        BitReader {
            stream: self,
            idx: 0,
        }
    }

    /// Bits as '0'/'1' characters
    pub fn to_bit_string(&self) -> String {
        self.codewords.iter().map(|b| format!("{b:08b}")).collect()
    }
}

/// Sequential MSB-first reader over a [`DataBitStream`]
pub struct BitReader<'a> {
    stream: &'a DataBitStream,
    idx: usize,
}

impl BitReader<'_> {
    /// Bits left to read
    pub fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.idx)
    }

    /// Current cursor position in bits
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Read `n` bits (at most 32) as an unsigned number, MSB first
    ///
    /// Returns `None` without moving the cursor if fewer than `n` bits remain.
    pub fn read_bits(&mut self, n: usize) -> Option<u32> {
        if n > 32 || n > self.remaining() {
            return None;
        }
        let mut val = 0u32;
        for _ in 0..n {
            let bit = self.stream.bit(self.idx)?;
            val = (val << 1) | bit as u32;
            self.idx += 1;
        }
        Some(val)
    }
}
