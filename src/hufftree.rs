use log::{debug, log_enabled, Level};

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

/// Index of a node in a [`HuffmanTree`] arena.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq)]
pub enum HuffNode {
    Leaf {
        weight: f64,
        symbol: u8,
    },
    Internal {
        weight: f64,
        zero: NodeId,
        one: NodeId,
    },
}

impl HuffNode {
    pub fn weight(&self) -> f64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }
}

/// Huffman tree stored as an arena; children are referenced by index.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<HuffNode>,
    root: NodeId,
    // leaves in the order they were attached to a parent
    order: Vec<u8>,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(bytes))
    }

    /// Merge the two least frequent entries until two remain.
    ///
    /// The working list is kept sorted by descending weight. The tail pair is
    /// merged with the second-to-last entry on the `zero` side, and the merged
    /// node is appended and stable-sorted back in, so it ends up after every
    /// entry of equal weight.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }
        if let Some(top) = frequencies.entries().first() {
            debug!(
                "{} distinct symbols in {} bytes, most frequent {:#04x} x{}",
                frequencies.len(),
                frequencies.total(),
                top.symbol,
                frequencies.count(top.symbol)
            );
        }

        let mut tree = HuffmanTree {
            nodes: Vec::with_capacity(frequencies.len() * 2),
            root: 0,
            order: Vec::with_capacity(frequencies.len()),
        };

        let mut working: Vec<(f64, NodeId)> = frequencies
            .entries()
            .iter()
            .map(|entry| {
                let id = tree.push(HuffNode::Leaf {
                    weight: entry.frequency,
                    symbol: entry.symbol,
                });
                (entry.frequency, id)
            })
            .collect();

        while working.len() > 2 {
            let (one_weight, one) = working.pop().ok_or(HuffmanError::EmptyInput)?;
            let (zero_weight, zero) = working.pop().ok_or(HuffmanError::EmptyInput)?;

            let weight = zero_weight + one_weight;
            let merged = tree.merge(zero, one, weight);

            working.push((weight, merged));
            working.sort_by(|a, b| b.0.total_cmp(&a.0));
        }

        tree.root = match working[..] {
            [(_, only)] => {
                tree.attach(only);
                only
            }
            [(zero_weight, zero), (one_weight, one)] => tree.merge(zero, one, zero_weight + one_weight),
            _ => return Err(HuffmanError::EmptyInput),
        };

        debug!(
            "built huffman tree: {} symbols, {} nodes",
            tree.order.len(),
            tree.nodes.len()
        );
        Ok(tree)
    }

    fn push(&mut self, node: HuffNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    fn attach(&mut self, id: NodeId) {
        if let HuffNode::Leaf { symbol, .. } = self.nodes[id] {
            self.order.push(symbol);
        }
    }

    fn merge(&mut self, zero: NodeId, one: NodeId, weight: f64) -> NodeId {
        self.attach(zero);
        self.attach(one);
        self.push(HuffNode::Internal { weight, zero, one })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &HuffNode {
        &self.nodes[id]
    }

    /// Symbols in the order their codewords were fixed.
    pub fn order(&self) -> &[u8] {
        &self.order
    }

    pub fn symbol_count(&self) -> usize {
        self.order.len()
    }

    /// Leftmost symbol under `id`.
    pub fn first_leaf(&self, mut id: NodeId) -> u8 {
        loop {
            match &self.nodes[id] {
                HuffNode::Leaf { symbol, .. } => return *symbol,
                HuffNode::Internal { zero, .. } => id = *zero,
            }
        }
    }

    /// Dump the tree shape at debug level.
    pub fn log_structure(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!("Huffman Tree Structure:");
        self.log_node(self.root, 0, "root");
    }

    fn log_node(&self, id: NodeId, depth: usize, label: &str) {
        let indent = "  ".repeat(depth);
        match &self.nodes[id] {
            HuffNode::Leaf { symbol, weight } => {
                debug!(
                    "{}{}-> Leaf: {:?} ({}) [weight: {:.6}]",
                    indent, label, *symbol as char, symbol, weight
                );
            }
            HuffNode::Internal { weight, zero, one } => {
                debug!("{}{}-> Internal [weight: {:.6}]", indent, label, weight);
                self.log_node(*zero, depth + 1, "0");
                self.log_node(*one, depth + 1, "1");
            }
        }
    }
}
