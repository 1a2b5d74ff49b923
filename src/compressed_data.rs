use crate::bit_vec::BitVec;

/// Encoded pieces of one stream before padding is applied.
#[derive(Debug, Clone)]
pub struct CompressedData {
    pub header: BitVec,
    pub payload: BitVec,
    pub original_length: usize,
}

/// Size breakdown of a compressed stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub header_bits: usize,
    pub payload_bits: usize,
    pub pad_bits: usize,
}

impl CompressionStats {
    /// Output size as a fraction of input size; 0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 / self.input_bytes as f64
    }
}

impl CompressedData {
    /// Zero bits appended after the payload, always 1..=8.
    ///
    /// A body that is already byte aligned still gets a full byte of padding;
    /// decoders strip `pad` bits unconditionally, so this is part of the format.
    pub fn pad_bits(&self) -> usize {
        8 - (self.header.bit_count() + self.payload.bit_count()) % 8
    }

    pub fn serialize(&self) -> Vec<u8> {
        let pad = self.pad_bits();
        let total = 8 + self.header.bit_count() + self.payload.bit_count() + pad;

        let mut stream = BitVec::with_capacity(total);
        stream.push_byte(pad as u8);
        stream.extend_from(&self.header);
        stream.extend_from(&self.payload);
        stream.push_zeros(pad);
        debug_assert_eq!(stream.bit_count() % 8, 0);

        stream.into_bytes()
    }

    pub fn stats(&self) -> CompressionStats {
        let header_bits = self.header.bit_count();
        let payload_bits = self.payload.bit_count();
        let pad_bits = self.pad_bits();
        CompressionStats {
            input_bytes: self.original_length,
            output_bytes: (8 + header_bits + payload_bits + pad_bits) / 8,
            header_bits,
            payload_bits,
            pad_bits,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bits(count: usize) -> BitVec {
        let mut bv = BitVec::new();
        bv.push_zeros(count);
        bv
    }

    #[test]
    fn test_pad_is_never_zero() {
        let aligned = CompressedData {
            header: bits(8),
            payload: bits(16),
            original_length: 2,
        };
        assert_eq!(aligned.pad_bits(), 8);
        assert_eq!(aligned.serialize().len(), 1 + 1 + 2 + 1);

        let ragged = CompressedData {
            header: bits(25),
            payload: bits(4),
            original_length: 4,
        };
        assert_eq!(ragged.pad_bits(), 3);
        assert_eq!(ragged.serialize()[0], 3);
        assert_eq!(ragged.serialize().len(), 5);
    }

    #[test]
    fn test_stats() {
        let data = CompressedData {
            header: bits(25),
            payload: bits(1000),
            original_length: 1000,
        };
        let stats = data.stats();
        assert_eq!(stats.pad_bits, 7);
        assert_eq!(stats.output_bytes, 130);
        assert_eq!(stats.output_bytes, data.serialize().len());
        assert!((stats.ratio() - 0.13).abs() < 1e-12);
    }
}
