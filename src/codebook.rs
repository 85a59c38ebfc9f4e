//! Code generation.
//!
//! Codes are read off the tree depth-first: `0` for each step left, `1` for
//! each step right, and the path to a leaf is that leaf's code. A lone leaf
//! would get the empty path, so it is assigned `"0"` instead.

use std::collections::HashMap;

use crate::bits::{Bit, BitString};
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};

/// Mapping from symbol to its prefix-free code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook<S: Symbol> {
    codes: Vec<(S, BitString)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> CodeBook<S> {
    /// Derive the codes of every leaf in `tree`.
    pub fn new(tree: &HuffmanTree<S>) -> Self {
        let mut book = Self {
            codes: Vec::with_capacity(tree.leaf_count()),
            index: HashMap::with_capacity(tree.leaf_count()),
        };

        match tree.root() {
            None => {}
            Some(Node::Leaf { symbol, .. }) => {
                book.insert(*symbol, BitString::from(vec![Bit::Zero]));
            }
            Some(root) => book.build_codes(root, BitString::new()),
        }

        log::trace!("codebook: {:?}", book.codes);
        book
    }

    fn build_codes(&mut self, node: &Node<S>, prefix: BitString) {
        match node {
            Node::Leaf { symbol, .. } => self.insert(*symbol, prefix),
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(Bit::Zero);
                self.build_codes(left, left_prefix);

                let mut right_prefix = prefix;
                right_prefix.push(Bit::One);
                self.build_codes(right, right_prefix);
            }
        }
    }

    fn insert(&mut self, symbol: S, code: BitString) {
        self.index.insert(symbol, self.codes.len());
        self.codes.push((symbol, code));
    }

    /// The code of `symbol`, if it has one.
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.index.get(symbol).map(|&i| &self.codes[i].1)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the book holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, code)` pairs in left-to-right leaf order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (S, &BitString)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Length in bits of encoding a sequence with the given counts.
    ///
    /// Symbols of `table` that have no code contribute nothing.
    pub fn encoded_len(&self, table: &FrequencyTable<S>) -> usize {
        table
            .iter()
            .filter_map(|(symbol, count)| self.get(&symbol).map(|code| code.len() * count))
            .sum()
    }

    /// Mean code length weighted by `table`, in bits per symbol.
    ///
    /// Returns 0 for an empty table.
    pub fn average_code_length(&self, table: &FrequencyTable<S>) -> f64 {
        let total = table.total();
        if total == 0 {
            return 0.0;
        }
        self.encoded_len(table) as f64 / total as f64
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&[Bit]> = self.codes.iter().map(|(_, c)| c.as_slice()).collect();
        sorted.sort_unstable();
        // After sorting, a code that prefixes any other prefixes its successor.
        sorted.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}

/// Derive the codebook for `tree`.
pub fn generate_codes<S: Symbol>(tree: &HuffmanTree<S>) -> CodeBook<S> {
    CodeBook::new(tree)
}
