//! # bytehuff
//!
//! Byte-oriented Huffman compression with a self-describing file format.
//!
//! Every compressed stream starts with a padding byte and a header listing
//! each symbol with its codeword, so it can be decoded without any side
//! information.
//!
//! ## Quick Start
//!
//! ```rust
//! use bytehuff::{compress, decompress};
//!
//! let data = b"abracadabra";
//! let packed = compress(data)?;
//! assert_eq!(decompress(&packed)?, data);
//! # Ok::<(), bytehuff::HuffmanError>(())
//! ```
//!
//! Files are handled by [`orchestrator`]:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use bytehuff::{compress_file, decompress_file, Config};
//!
//! let config = Config::default();
//! let packed = compress_file(Path::new("input.txt"), Path::new("Compressed"), &config)?;
//! decompress_file(&packed, Path::new("Decompressed"), &config)?;
//! # Ok::<(), bytehuff::HuffmanError>(())
//! ```

pub mod bit_vec;
pub mod code_table;
pub mod config;
pub mod error;
pub mod frequency;
pub mod header;
pub mod huffman_codec;
pub mod hufftree;
pub mod orchestrator;

// Internal modules - not part of public API
mod compressed_data;

// Re-export main types for convenience
pub use bit_vec::BitVec;
pub use code_table::{CodeTable, Codeword, DecodeMap};
pub use compressed_data::CompressionStats;
pub use config::Config;
pub use error::{HuffmanError, Result};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use header::{make_header, parse_header, ParsedHeader};
pub use huffman_codec::{compress, decompress, HuffmanCodec};
pub use hufftree::HuffmanTree;
pub use orchestrator::{compress_file, decompress_file};
