/// Growable, MSB-first packed bit sequence.
///
/// Bit `i` lives in byte `i / 8` at position `7 - i % 8`, which is the bit
/// order of the compressed file format.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitVec {
            bits: Vec::with_capacity(bits.div_ceil(8)),
            bit_count: 0,
        }
    }

    /// Wrap whole bytes; every bit of `bytes` counts.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        BitVec {
            bits: bytes.to_vec(),
            bit_count: bytes.len() * 8,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bits
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8; // which byte is target?
        let bit_offset = self.bit_count % 8; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            // set bit with OR and mask
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    /// Push the low `bit_length` bits of `code`, most significant first.
    pub fn push_bits(&mut self, code: u128, bit_length: usize) {
        for bit_pos in (0..bit_length).rev() {
            let bit = (code >> bit_pos) & 1;
            self.push_bit(bit != 0);
        }
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.push_bits(byte as u128, 8);
    }

    pub fn push_zeros(&mut self, count: usize) {
        for _ in 0..count {
            self.push_bit(false);
        }
    }

    pub fn extend_from(&mut self, other: &BitVec) {
        if self.bit_count % 8 == 0 {
            // aligned: whole bytes can be copied, the tail byte is already zero-filled
            self.bits.truncate(self.bit_count / 8);
            self.bits.extend_from_slice(&other.bits);
            self.bit_count += other.bit_count;
        } else {
            for index in 0..other.bit_count {
                self.push_bit(other.bits[index / 8] & (1 << (7 - index % 8)) != 0);
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some(self.bits[index / 8] & (1 << (7 - index % 8)) != 0)
    }

    /// Read `len` bits starting at `start` as a right-aligned integer.
    ///
    /// Returns `None` when the range runs past the end or `len > 128`.
    pub fn read_bits(&self, start: usize, len: usize) -> Option<u128> {
        if len > 128 || start.checked_add(len)? > self.bit_count {
            return None;
        }
        let mut value = 0u128;
        for index in start..start + len {
            let bit = self.bits[index / 8] & (1 << (7 - index % 8)) != 0;
            value = (value << 1) | bit as u128;
        }
        Some(value)
    }

    pub fn read_byte(&self, start: usize) -> Option<u8> {
        self.read_bits(start, 8).map(|value| value as u8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_msb_first_packing() {
        let mut bv = BitVec::new();
        bv.push_bits(0b101, 3);
        bv.push_bits(0b1, 1);
        assert_eq!(bv.bit_count(), 4);
        assert_eq!(bv.as_bytes(), &[0b1011_0000]);

        bv.push_byte(0xff);
        assert_eq!(bv.bit_count(), 12);
        assert_eq!(bv.as_bytes(), &[0b1011_1111, 0b1111_0000]);
    }

    #[test]
    fn test_read_back() {
        let bv = BitVec::from_bytes(&[0b1100_1010, 0x3c]);
        assert_eq!(bv.bit_count(), 16);
        assert_eq!(bv.get(0), Some(true));
        assert_eq!(bv.get(2), Some(false));
        assert_eq!(bv.get(16), None);
        assert_eq!(bv.read_bits(4, 4), Some(0b1010));
        assert_eq!(bv.read_byte(4), Some(0b1010_0011));
        assert_eq!(bv.read_bits(12, 5), None);
    }

    #[test]
    fn test_extend_unaligned_and_aligned() {
        let mut tail = BitVec::new();
        tail.push_bits(0b0110_1, 5);

        let mut unaligned = BitVec::new();
        unaligned.push_bits(0b111, 3);
        unaligned.extend_from(&tail);
        assert_eq!(unaligned.bit_count(), 8);
        assert_eq!(unaligned.as_bytes(), &[0b1110_1101]);

        let mut aligned = BitVec::new();
        aligned.push_byte(0x01);
        aligned.extend_from(&tail);
        aligned.push_bit(true);
        assert_eq!(aligned.bit_count(), 14);
        assert_eq!(aligned.as_bytes(), &[0x01, 0b0110_1100]);
    }

    #[test]
    fn test_wide_values() {
        let mut bv = BitVec::new();
        let code = (1u128 << 127) | 1;
        bv.push_bits(code, 128);
        assert_eq!(bv.read_bits(0, 128), Some(code));
        assert_eq!(bv.read_bits(0, 129), None);
    }
}
