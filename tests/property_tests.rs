//! Property-based tests for the codec, table builder and header codec.

use proptest::prelude::*;

use bytehuff::{
    compress, decompress, make_header, parse_header, BitVec, CodeTable, HuffmanCodec, HuffmanError,
    HuffmanTree,
};

/// Inputs with a small alphabet and skewed counts, so trees get deep.
fn skewed_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec((0u8..12, 1usize..40), 1..12).prop_map(|runs| {
        runs.into_iter()
            .enumerate()
            .flat_map(|(i, (symbol, len))| std::iter::repeat(symbol.wrapping_mul(17)).take(len * (i + 1)))
            .collect()
    })
}

fn table_for(data: &[u8]) -> CodeTable {
    CodeTable::from_tree(&HuffmanTree::from_bytes(data).unwrap()).unwrap()
}

proptest! {
    #[test]
    fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let encoded = compress(&data).unwrap();
        prop_assert_eq!(decompress(&encoded).unwrap(), data);
    }

    #[test]
    fn prop_roundtrip_skewed(data in skewed_bytes()) {
        let encoded = compress(&data).unwrap();
        prop_assert_eq!(decompress(&encoded).unwrap(), data);
    }

    #[test]
    fn prop_table_is_prefix_free(data in prop::collection::vec(any::<u8>(), 1..2048)) {
        let table = table_for(&data);
        let codes: Vec<_> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                }
            }
        }
        prop_assert!(table.is_prefix_free());
    }

    #[test]
    fn prop_table_covers_every_symbol(data in prop::collection::vec(any::<u8>(), 1..2048)) {
        let table = table_for(&data);
        let mut distinct = data.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(table.len(), distinct.len());
        for symbol in distinct {
            prop_assert!(table.get(symbol).is_some());
        }
    }

    #[test]
    fn prop_header_inverse(data in skewed_bytes(), pad in 1u8..=8) {
        let table = table_for(&data);
        let header = make_header(&table);

        let mut stream = BitVec::new();
        stream.push_byte(pad);
        stream.extend_from(&header);
        let parsed = parse_header(&stream).unwrap();

        prop_assert_eq!(parsed.pad, pad);
        prop_assert!(parsed.decode_map.inverts(&table));
        prop_assert_eq!(parsed.payload_offset, stream.bit_count());
    }

    #[test]
    fn prop_padding_fills_the_last_byte(data in prop::collection::vec(any::<u8>(), 1..1024)) {
        let codec = HuffmanCodec::from_bytes(&data).unwrap();
        let (encoded, stats) = codec.encode_with_stats(&data).unwrap();
        let pad = encoded[0] as usize;
        prop_assert!((1..=8).contains(&pad));
        prop_assert_eq!(pad, stats.pad_bits);
        prop_assert_eq!(encoded.len() * 8, 8 + stats.header_bits + stats.payload_bits + pad);
        prop_assert_eq!(stats.output_bytes, encoded.len());
    }

    #[test]
    fn prop_truncation_never_panics(data in prop::collection::vec(any::<u8>(), 1..512), cut in 1usize..64) {
        let encoded = compress(&data).unwrap();
        let keep = encoded.len().saturating_sub(cut);
        match decompress(&encoded[..keep]) {
            Ok(decoded) => prop_assert_ne!(decoded, data),
            Err(err) => prop_assert!(err.is_corrupt_input(), "unexpected error {}", err),
        }
    }
}

#[test]
fn single_symbol_file() {
    let data = vec![0x41u8; 1000];
    let codec = HuffmanCodec::from_bytes(&data).unwrap();
    assert_eq!(codec.table().len(), 1);
    assert_eq!(codec.table().get(0x41).unwrap().len(), 1);

    let encoded = codec.encode(&data).unwrap();
    assert_eq!(decompress(&encoded).unwrap(), data);
}

#[test]
fn all_distinct_bytes() {
    let data: Vec<u8> = (0..=255).collect();
    let codec = HuffmanCodec::from_bytes(&data).unwrap();
    assert_eq!(codec.table().len(), 256);
    assert!(codec.table().is_prefix_free());

    let encoded = codec.encode(&data).unwrap();
    // 2 + 256 * 3 header bytes, 256 payload bytes, one padding byte
    assert_eq!(encoded.len(), 2 + 256 * 3 + 256 + 1);
    assert_eq!(decompress(&encoded).unwrap(), data);
}

#[test]
fn empty_input_roundtrip() {
    let encoded = compress(&[]).unwrap();
    assert_eq!(encoded.len(), 5);
    assert!(decompress(&encoded).unwrap().is_empty());
}

#[test]
fn truncated_final_byte_is_detected() {
    let inputs: [&[u8]; 4] = [
        b"abracadabra",
        b"hello world",
        b"the quick brown fox jumps over the lazy dog",
        b"aab",
    ];
    for input in inputs {
        let encoded = compress(input).unwrap();
        let err = decompress(&encoded[..encoded.len() - 1]).unwrap_err();
        assert!(
            matches!(
                err,
                HuffmanError::UnmatchedTrailingBits { .. } | HuffmanError::MalformedHeader { .. }
            ),
            "input {:?}: {}",
            String::from_utf8_lossy(input),
            err
        );
    }
}
