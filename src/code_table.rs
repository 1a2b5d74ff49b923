//! Codewords, the symbol -> codeword table, and its inverse.

use std::collections::HashMap;
use std::fmt;

use crate::error::{HuffmanError, Result};
use crate::hufftree::{HuffNode, HuffmanTree, NodeId};

/// Longest codeword the fixed-width representation can hold.
pub const MAX_CODEWORD_LEN: usize = 128;

/// A bit string of 1 to 128 bits, right-aligned in `bits`.
///
/// The first bit of the codeword is bit `len - 1` of `bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codeword {
    bits: u128,
    len: u8,
}

impl Codeword {
    /// Returns `None` if `len` is 0 or too long, or `bits` has bits above `len`.
    pub fn new(bits: u128, len: usize) -> Option<Self> {
        if len == 0 || len > MAX_CODEWORD_LEN {
            return None;
        }
        if len < MAX_CODEWORD_LEN && bits >> len != 0 {
            return None;
        }
        Some(Codeword {
            bits,
            len: len as u8,
        })
    }

    pub fn bits(&self) -> u128 {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Does `self` start `other`? A codeword is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in (0..self.len()).rev() {
            let bit = if (self.bits >> pos) & 1 == 1 { '1' } else { '0' };
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// Symbol -> codeword mapping with a fixed iteration order.
///
/// The order is the order in which symbols received their codewords while the
/// tree was built; it is the order the header serialises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(u8, Codeword)>,
    index: [Option<Codeword>; 256],
}

impl CodeTable {
    /// Assign codewords by walking the tree: `zero` edges append 0, `one` edges 1.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        let mut index = [None; 256];

        if let HuffNode::Leaf { symbol, .. } = tree.node(tree.root()) {
            // single distinct symbol: the walk would give it zero bits
            index[*symbol as usize] = Codeword::new(0, 1);
        } else {
            assign(tree, tree.root(), 0, 0, &mut index)?;
        }

        let entries = tree
            .order()
            .iter()
            .map(|&symbol| {
                index[symbol as usize]
                    .map(|code| (symbol, code))
                    .ok_or_else(|| HuffmanError::invalid_table(format!("symbol {symbol:#04x} has no codeword")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CodeTable { entries, index })
    }

    /// Build a table from explicit entries, checking the table invariants.
    pub fn from_entries(entries: Vec<(u8, Codeword)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(HuffmanError::invalid_table("no entries"));
        }
        let mut index = [None; 256];
        for &(symbol, code) in &entries {
            if index[symbol as usize].replace(code).is_some() {
                return Err(HuffmanError::invalid_table(format!("symbol {symbol:#04x} appears twice")));
            }
        }
        let table = CodeTable { entries, index };
        if !table.is_prefix_free() {
            return Err(HuffmanError::invalid_table("codewords are not prefix-free"));
        }
        Ok(table)
    }

    pub fn get(&self, symbol: u8) -> Option<Codeword> {
        self.index[symbol as usize]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Codeword)> + '_ {
        self.entries.iter().copied()
    }

    pub fn max_len(&self) -> usize {
        self.entries.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }

    pub fn is_prefix_free(&self) -> bool {
        // in sorted order a prefix sorts directly before the codes it starts,
        // comparing neighbours after left-aligning is enough
        let mut aligned: Vec<Codeword> = self.entries.iter().map(|(_, code)| *code).collect();
        aligned.sort_by_key(|code| (code.bits << (MAX_CODEWORD_LEN - code.len()), code.len));
        aligned.windows(2).all(|pair| !pair[0].is_prefix_of(&pair[1]))
    }

    pub fn decode_map(&self) -> DecodeMap {
        DecodeMap::from_iter(self.iter().map(|(symbol, code)| (code, symbol)))
    }
}

fn assign(
    tree: &HuffmanTree,
    id: NodeId,
    code: u128,
    depth: usize,
    index: &mut [Option<Codeword>; 256],
) -> Result<()> {
    match tree.node(id) {
        HuffNode::Leaf { symbol, .. } => {
            index[*symbol as usize] = Some(Codeword::new(code, depth).ok_or(
                HuffmanError::CodewordTooLong {
                    symbol: *symbol,
                    len: depth,
                },
            )?);
        }
        HuffNode::Internal { zero, one, .. } => {
            if depth >= MAX_CODEWORD_LEN {
                let symbol = tree.first_leaf(id);
                return Err(HuffmanError::CodewordTooLong {
                    symbol,
                    len: depth + 1,
                });
            }
            assign(tree, *zero, code << 1, depth + 1, index)?;
            assign(tree, *one, (code << 1) | 1, depth + 1, index)?;
        }
    }
    Ok(())
}

/// Codeword -> symbol lookup used by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeMap {
    symbols: HashMap<Codeword, u8>,
    max_len: usize,
}

impl DecodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping; returns false if the codeword was already present.
    pub fn insert(&mut self, code: Codeword, symbol: u8) -> bool {
        if self.symbols.contains_key(&code) {
            return false;
        }
        self.max_len = self.max_len.max(code.len());
        self.symbols.insert(code, symbol);
        true
    }

    pub fn get(&self, code: &Codeword) -> Option<u8> {
        self.symbols.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Length of the longest codeword in the map.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// True when `table` maps every symbol to exactly the codeword this map inverts.
    pub fn inverts(&self, table: &CodeTable) -> bool {
        self.len() == table.len() && table.iter().all(|(symbol, code)| self.get(&code) == Some(symbol))
    }
}

impl FromIterator<(Codeword, u8)> for DecodeMap {
    fn from_iter<I: IntoIterator<Item = (Codeword, u8)>>(iter: I) -> Self {
        let mut map = DecodeMap::new();
        for (code, symbol) in iter {
            map.insert(code, symbol);
        }
        map
    }
}
