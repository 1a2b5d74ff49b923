//! Self-describing preamble of a compressed stream.
//!
//! ```text
//! [byte]    pad_count
//! [byte]    symbol_count - 1
//! repeat symbol_count times:
//!   [byte]  symbol
//!   [byte]  codeword length in bits
//!   [bits]  codeword
//! ```
//!
//! [`make_header`] writes everything after `pad_count`; the encoder prepends
//! the padding byte once the payload length is known.

use log::debug;

use crate::bit_vec::BitVec;
use crate::code_table::{CodeTable, Codeword, DecodeMap, MAX_CODEWORD_LEN};
use crate::error::{HuffmanError, Result};

/// Result of reading a header off the front of a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Number of zero bits appended after the payload
    pub pad: u8,
    /// Codeword -> symbol map described by the header
    pub decode_map: DecodeMap,
    /// Bit offset of the first payload bit
    pub payload_offset: usize,
}

/// Serialise a code table, in table order, without the padding byte.
pub fn make_header(table: &CodeTable) -> BitVec {
    let code_bits: usize = table.iter().map(|(_, code)| 16 + code.len()).sum();
    let mut header = BitVec::with_capacity(8 + code_bits);

    // tables hold 1..=256 entries, so the count fits a byte once decremented
    header.push_byte((table.len() - 1) as u8);
    for (symbol, code) in table.iter() {
        header.push_byte(symbol);
        header.push_byte(code.len() as u8);
        header.push_bits(code.bits(), code.len());
    }
    header
}

/// Read the padding byte and the table from the start of `stream`.
pub fn parse_header(stream: &BitVec) -> Result<ParsedHeader> {
    let pad = stream
        .read_byte(0)
        .ok_or_else(|| HuffmanError::malformed("missing padding byte"))?;
    let symbol_count = stream
        .read_byte(8)
        .ok_or_else(|| HuffmanError::malformed("missing symbol count"))? as usize
        + 1;

    let mut decode_map = DecodeMap::new();
    let mut seen = [false; 256];
    let mut offset = 16;
    for entry in 0..symbol_count {
        let symbol = stream
            .read_byte(offset)
            .ok_or_else(|| HuffmanError::malformed(format!("entry {entry}: symbol byte past end of stream")))?;
        let len = stream
            .read_byte(offset + 8)
            .ok_or_else(|| HuffmanError::malformed(format!("entry {entry}: length byte past end of stream")))?
            as usize;
        offset += 16;

        if len == 0 {
            return Err(HuffmanError::malformed(format!("entry {entry}: zero-length codeword")));
        }
        if len > MAX_CODEWORD_LEN {
            // legal in the format, but wider than a Codeword can hold
            return Err(HuffmanError::malformed(format!(
                "entry {entry}: {len}-bit codeword exceeds the supported maximum of {MAX_CODEWORD_LEN} bits"
            )));
        }
        let bits = stream.read_bits(offset, len).ok_or_else(|| {
            HuffmanError::malformed(format!("entry {entry}: {len}-bit codeword past end of stream"))
        })?;
        offset += len;

        if std::mem::replace(&mut seen[symbol as usize], true) {
            return Err(HuffmanError::malformed(format!("symbol {symbol:#04x} listed twice")));
        }
        let code = Codeword::new(bits, len)
            .ok_or_else(|| HuffmanError::malformed(format!("entry {entry}: bad codeword")))?;
        if !decode_map.insert(code, symbol) {
            return Err(HuffmanError::malformed(format!("codeword {code} listed twice")));
        }
    }

    debug!(
        "parsed header: pad {}, {} symbols, payload at bit {}",
        pad, symbol_count, offset
    );
    Ok(ParsedHeader {
        pad,
        decode_map,
        payload_offset: offset,
    })
}
