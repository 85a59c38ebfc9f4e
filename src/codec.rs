//! Encoding and decoding of symbol sequences.
//!
//! [`encode`] and [`decode`] are permissive: an uncoded symbol is skipped and
//! an incomplete trailing code is dropped, both with a warning. Decoding bits
//! with a tree other than the one that produced them yields garbage rather
//! than an error. [`try_encode`] and [`try_decode`] report these conditions
//! as errors instead.

use crate::bits::{Bit, BitString};
use crate::codebook::CodeBook;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};

/// Concatenate the codes of `sequence`, in order.
///
/// Symbols without a code contribute nothing.
pub fn encode<S: Symbol>(sequence: &[S], codebook: &CodeBook<S>) -> BitString {
    let mut bits = BitString::new();
    for symbol in sequence {
        match codebook.get(symbol) {
            Some(code) => bits.extend_from(code),
            None => log::warn!("skipping symbol {:?}: no code", symbol),
        }
    }
    log::debug!("encoded {} symbols into {} bits", sequence.len(), bits.len());
    bits
}

/// Like [`encode`], but fails on a symbol without a code.
///
/// # Errors
/// Returns `Error::UnknownSymbol` for the first symbol missing from `codebook`.
pub fn try_encode<S: Symbol>(sequence: &[S], codebook: &CodeBook<S>) -> Result<BitString> {
    let mut bits = BitString::new();
    for symbol in sequence {
        let code = codebook
            .get(symbol)
            .ok_or_else(|| Error::UnknownSymbol(format!("{:?}", symbol)))?;
        bits.extend_from(code);
    }
    Ok(bits)
}

/// Decode `bits` by walking `tree`.
///
/// An empty tree decodes to nothing. A lone-leaf tree emits its symbol once
/// per bit. Otherwise bits are consumed one at a time from the root, and each
/// leaf reached emits its symbol and restarts the walk. Bits left over after
/// the last complete code are dropped.
pub fn decode<S: Symbol>(bits: &BitString, tree: &HuffmanTree<S>) -> Vec<S> {
    let root = match tree.root() {
        Some(root) => root,
        None => return Vec::new(),
    };

    if let Node::Leaf { symbol, .. } = root {
        return vec![*symbol; bits.len()];
    }

    let (out, trailing) = walk(bits, root);
    if trailing > 0 {
        log::warn!("dropping {} trailing bits of an incomplete code", trailing);
    }
    out
}

/// Like [`decode`], but rejects bits that `tree` could not have produced.
///
/// # Errors
/// - `Error::MissingTree` if `tree` is empty but `bits` is not.
/// - `Error::InvalidCode` if a lone-leaf tree meets a `1` bit.
/// - `Error::IncompleteCode` if `bits` ends in the middle of a code.
pub fn try_decode<S: Symbol>(bits: &BitString, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let root = match tree.root() {
        Some(root) => root,
        None if bits.is_empty() => return Ok(Vec::new()),
        None => return Err(Error::MissingTree),
    };

    if let Node::Leaf { symbol, .. } = root {
        if let Some(position) = bits.iter().position(|b| b == Bit::One) {
            return Err(Error::InvalidCode { position });
        }
        return Ok(vec![*symbol; bits.len()]);
    }

    match walk(bits, root) {
        (out, 0) => Ok(out),
        (_, trailing) => Err(Error::IncompleteCode { trailing }),
    }
}

/// Walk from an internal `root`; returns the symbols and the count of unused trailing bits.
fn walk<S: Symbol>(bits: &BitString, root: &Node<S>) -> (Vec<S>, usize) {
    let mut out = Vec::new();
    let mut curr = root;
    let mut trailing = 0;

    for bit in bits {
        if let Node::Internal { left, right, .. } = curr {
            curr = match bit {
                Bit::Zero => left,
                Bit::One => right,
            };
        }
        trailing += 1;

        if let Node::Leaf { symbol, .. } = curr {
            out.push(*symbol);
            curr = root;
            trailing = 0;
        }
    }
    (out, trailing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codebook::generate_codes;
    use crate::frequency::build_frequency_table;
    use crate::tree::build_tree;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn bits(text: &str) -> BitString {
        text.parse().unwrap()
    }

    fn setup(text: &str) -> (HuffmanTree<char>, CodeBook<char>) {
        let tree = build_tree(&build_frequency_table(&chars(text)));
        let book = generate_codes(&tree);
        (tree, book)
    }

    #[test]
    fn test_roundtrip() {
        let input = chars("abracadabra");
        let (tree, book) = setup("abracadabra");
        let encoded = encode(&input, &book);
        assert_eq!(decode(&encoded, &tree), input);
        assert_eq!(try_decode(&encoded, &tree).unwrap(), input);
    }

    #[test]
    fn test_degenerate_single_symbol() {
        let (tree, book) = setup("aaaa");
        let encoded = encode(&chars("aaaa"), &book);
        assert_eq!(encoded.to_string(), "0000");
        assert_eq!(decode(&encoded, &tree), chars("aaaa"));
    }

    #[test]
    fn test_degenerate_decode_counts_bits() {
        let (tree, _) = setup("aaaa");
        assert_eq!(decode(&bits("0101"), &tree), chars("aaaa"));
        assert_eq!(
            try_decode(&bits("0101"), &tree),
            Err(Error::InvalidCode { position: 1 })
        );
    }

    #[test]
    fn test_empty() {
        let (tree, book) = setup("");
        let encoded = encode(&[], &book);
        assert!(encoded.is_empty());
        assert!(decode(&encoded, &tree).is_empty());
        assert_eq!(try_decode(&encoded, &tree), Ok(vec![]));
    }

    #[test]
    fn test_missing_tree() {
        let tree = HuffmanTree::<char>::default();
        assert!(decode(&bits("0110"), &tree).is_empty());
        assert_eq!(try_decode(&bits("0110"), &tree), Err(Error::MissingTree));
    }

    #[test]
    fn test_two_symbols() {
        let (tree, book) = setup("aabb");
        let encoded = encode(&chars("aabb"), &book);
        assert_eq!(encoded.to_string(), "0011");
        assert_eq!(decode(&encoded, &tree), chars("aabb"));
    }

    #[test]
    fn test_trailing_bits_are_dropped() {
        // a=0 b=10 c=110 d=111
        let (tree, _) = setup("aaaabbcd");
        assert_eq!(decode(&bits("01011011"), &tree), chars("abc"));
        assert_eq!(
            try_decode(&bits("01011011"), &tree),
            Err(Error::IncompleteCode { trailing: 2 })
        );
    }

    #[test]
    fn test_unknown_symbol() {
        let (_, book) = setup("aabb");
        assert_eq!(encode(&chars("azb"), &book).to_string(), "01");
        assert_eq!(
            try_encode(&chars("azb"), &book),
            Err(Error::UnknownSymbol("'z'".to_string()))
        );
    }
}
