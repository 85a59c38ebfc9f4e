use huffcode::{
    build_frequency_table, build_tree, decode, encode, generate_codes, stats, try_decode, Node,
    Session,
};
use proptest::prelude::*;

fn leaf_sum(node: &Node<u8>) -> usize {
    match node.children() {
        Some((left, right)) => leaf_sum(left) + leaf_sum(right),
        None => node.freq(),
    }
}

proptest! {
    #[test]
    fn prop_roundtrip_bytes(input in prop::collection::vec(any::<u8>(), 0..512)) {
        let tree = build_tree(&build_frequency_table(&input));
        let codes = generate_codes(&tree);
        let bits = encode(&input, &codes);

        prop_assert_eq!(&decode(&bits, &tree), &input);
        prop_assert_eq!(try_decode(&bits, &tree).unwrap(), input);
    }

    #[test]
    fn prop_roundtrip_text(text in "\\PC{0,200}") {
        let session = Session::compress_str(&text);
        prop_assert_eq!(session.decode_string(), text);
    }

    #[test]
    fn prop_skewed_alphabet_roundtrip(
        input in prop::collection::vec(prop_oneof![8 => Just(0u8), 2 => 1u8..4, 1 => any::<u8>()], 1..256),
    ) {
        let session = Session::compress(&input);
        prop_assert_eq!(session.decode(), input);
    }

    #[test]
    fn prop_prefix_free(input in prop::collection::vec(0u8..32, 2..256)) {
        let codes = generate_codes(&build_tree(&build_frequency_table(&input)));
        prop_assume!(codes.len() >= 2);
        prop_assert!(codes.is_prefix_free());
        prop_assert!(codes.iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn prop_frequency_conservation(input in prop::collection::vec(any::<u8>(), 1..256)) {
        let table = build_frequency_table(&input);
        let tree = build_tree(&table);
        let root = tree.root().unwrap();

        prop_assert_eq!(root.freq(), input.len());
        prop_assert_eq!(leaf_sum(root), input.len());
        prop_assert_eq!(tree.leaf_count(), table.len());
    }

    #[test]
    fn prop_deterministic(input in prop::collection::vec(0u8..16, 0..256)) {
        let table = build_frequency_table(&input);
        let first = generate_codes(&build_tree(&table));
        let second = generate_codes(&build_tree(&table));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_saved_bits_never_negative(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let codes = generate_codes(&build_tree(&build_frequency_table(&input)));
        let bits = encode(&input, &codes);
        let s = stats(&input, &bits);

        prop_assert_eq!(s.compressed_bits, bits.len());
        prop_assert_eq!(s.saved_bits, s.original_bits.saturating_sub(s.compressed_bits));
        if s.compressed_bits <= s.original_bits {
            prop_assert!(s.ratio_percent >= 0.0);
        }
    }

    #[test]
    fn prop_encoding_is_optimal_length(input in prop::collection::vec(0u8..8, 1..256)) {
        // No prefix code beats Huffman, in particular not fixed-width codes.
        let table = build_frequency_table(&input);
        let codes = generate_codes(&build_tree(&table));
        let distinct = table.len();
        let fixed_width = if distinct == 1 {
            1
        } else {
            (usize::BITS - (distinct - 1).leading_zeros()) as usize
        };

        prop_assert!(codes.encoded_len(&table) <= fixed_width * input.len());
        prop_assert_eq!(encode(&input, &codes).len(), codes.encoded_len(&table));
    }
}

#[test]
fn test_documented_examples() {
    let session = Session::compress_str("aaaa");
    assert_eq!(session.table().iter().collect::<Vec<_>>(), vec![('a', 4)]);
    assert_eq!(session.tree().root(), Some(&Node::Leaf { symbol: 'a', freq: 4 }));
    assert_eq!(session.codebook().get(&'a').unwrap().to_string(), "0");
    assert_eq!(session.encoded().to_string(), "0000");
    assert_eq!(session.decode_string(), "aaaa");

    let session = Session::compress_str("");
    assert!(session.table().is_empty());
    assert!(session.tree().is_empty());
    assert!(session.codebook().is_empty());
    assert!(session.encoded().is_empty());
    assert_eq!(session.decode_string(), "");
    let s = session.stats();
    assert_eq!((s.original_bits, s.compressed_bits, s.saved_bits), (0, 0, 0));
    assert_eq!(s.ratio_percent, 0.0);

    let session = Session::compress_str("aabb");
    assert_eq!(session.tree().leaf_count(), 2);
    assert_eq!(session.tree().depth(), 1);
    assert_eq!(session.encoded().len(), 4);
    assert_eq!(session.decode_string(), "aabb");
}
