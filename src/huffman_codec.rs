use log::debug;

use crate::bit_vec::BitVec;
use crate::code_table::{CodeTable, Codeword};
use crate::compressed_data::{CompressedData, CompressionStats};
use crate::error::{HuffmanError, Result};
use crate::header::{make_header, parse_header};
use crate::hufftree::HuffmanTree;

/// Encoder bound to one code table; decoding needs no table since the
/// stream carries its own.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(table: CodeTable) -> Self {
        HuffmanCodec { table }
    }

    /// Build a codec whose table is derived from `data`'s byte frequencies.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let tree = HuffmanTree::from_bytes(data)?;
        tree.log_structure();
        let table = CodeTable::from_tree(&tree)?;
        debug!(
            "code table: {} symbols, longest codeword {} bits",
            table.len(),
            table.max_len()
        );
        Ok(Self::new(table))
    }

    /// Codec for empty input: one placeholder entry, never referenced by the payload.
    fn for_empty_input() -> Result<Self> {
        let code = Codeword::new(0, 1).ok_or_else(|| HuffmanError::invalid_table("placeholder codeword"))?;
        Ok(Self::new(CodeTable::from_entries(vec![(0x00, code)])?))
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Compress `data` with a table built from it. Empty input gives a valid
    /// stream that decodes to nothing.
    pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
        Ok(Self::compress_with_stats(data)?.0)
    }

    pub fn compress_with_stats(data: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let codec = if data.is_empty() {
            Self::for_empty_input()?
        } else {
            Self::from_bytes(data)?
        };
        codec.encode_with_stats(data)
    }

    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encode_parts(data)?.serialize())
    }

    pub fn encode_with_stats(&self, data: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let parts = self.encode_parts(data)?;
        Ok((parts.serialize(), parts.stats()))
    }

    fn encode_parts(&self, data: &[u8]) -> Result<CompressedData> {
        let mut payload = BitVec::new();
        for &byte in data {
            let code = self.table.get(byte).ok_or(HuffmanError::SymbolNotInTable(byte))?;
            payload.push_bits(code.bits(), code.len());
        }

        Ok(CompressedData {
            header: make_header(&self.table),
            payload,
            original_length: data.len(),
        })
    }

    /// Decode a stream produced by [`HuffmanCodec::encode`].
    ///
    /// Payload bits are accumulated one at a time and emitted as soon as
    /// they spell a codeword; the table is prefix-free so the first match is
    /// the only one.
    pub fn decode(compressed: &[u8]) -> Result<Vec<u8>> {
        let stream = BitVec::from_bytes(compressed);
        let header = parse_header(&stream)?;

        let pad = header.pad as usize;
        let payload_bits = stream.bit_count() - header.payload_offset;
        if pad > 8 || pad > payload_bits {
            return Err(HuffmanError::malformed(format!(
                "padding of {pad} bits does not fit the {payload_bits} bits after the header"
            )));
        }
        let payload_end = stream.bit_count() - pad;

        let map = &header.decode_map;
        let mut result = Vec::with_capacity(payload_bits);
        let mut buffer: u128 = 0;
        let mut buffer_len = 0usize;
        let mut match_start = header.payload_offset;

        for index in header.payload_offset..payload_end {
            let bit = stream.get(index).ok_or(HuffmanError::UnmatchedTrailingBits { bits: buffer_len })?;
            buffer = (buffer << 1) | bit as u128;
            buffer_len += 1;

            if let Some(symbol) = Codeword::new(buffer, buffer_len).and_then(|code| map.get(&code)) {
                result.push(symbol);
                buffer = 0;
                buffer_len = 0;
                match_start = index + 1;
            } else if buffer_len >= map.max_len() {
                return Err(HuffmanError::UnknownCodeword {
                    offset: match_start - header.payload_offset,
                });
            }
        }

        if buffer_len != 0 {
            return Err(HuffmanError::UnmatchedTrailingBits { bits: buffer_len });
        }
        if stream.read_bits(payload_end, pad) != Some(0) {
            return Err(HuffmanError::InvalidPadding);
        }

        debug!(
            "decoded {} bytes from {} payload bits",
            result.len(),
            payload_end - header.payload_offset
        );
        Ok(result)
    }
}

/// Compress a whole buffer.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::compress(data)
}

/// Decompress a whole buffer.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    HuffmanCodec::decode(compressed)
}
