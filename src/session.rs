//! Caller-owned compression state.
//!
//! Decoding only works with the exact tree that produced the encoding, so a
//! [`Session`] keeps the table, tree, codebook and encoded bits of one
//! compression together. Each compression gets its own session; nothing is
//! shared between them.

use crate::bits::BitString;
use crate::codebook::{generate_codes, CodeBook};
use crate::codec::{decode, encode, try_decode};
use crate::error::Result;
use crate::frequency::{build_frequency_table, FrequencyTable};
use crate::stats::{Stats, BASELINE_BITS_PER_SYMBOL};
use crate::symbol::Symbol;
use crate::tree::{build_tree, HuffmanTree};

/// Everything produced by compressing one sequence.
#[derive(Debug, Clone)]
pub struct Session<S: Symbol> {
    table: FrequencyTable<S>,
    tree: HuffmanTree<S>,
    codebook: CodeBook<S>,
    encoded: BitString,
    original_len: usize,
}

impl<S: Symbol> Session<S> {
    /// Run the full pipeline on `sequence`.
    pub fn compress(sequence: &[S]) -> Self {
        let table = build_frequency_table(sequence);
        let tree = build_tree(&table);
        let codebook = generate_codes(&tree);
        let encoded = encode(sequence, &codebook);

        Self {
            table,
            tree,
            codebook,
            encoded,
            original_len: sequence.len(),
        }
    }

    /// Frequencies of the compressed sequence.
    pub fn table(&self) -> &FrequencyTable<S> {
        &self.table
    }

    /// The tree the encoding was produced with.
    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// Codes derived from [`Session::tree`].
    pub fn codebook(&self) -> &CodeBook<S> {
        &self.codebook
    }

    /// The encoded bits.
    pub fn encoded(&self) -> &BitString {
        &self.encoded
    }

    /// Decode the session's own encoding.
    pub fn decode(&self) -> Vec<S> {
        decode(&self.encoded, &self.tree)
    }

    /// Decode foreign `bits` with this session's tree, permissively.
    pub fn decode_bits(&self, bits: &BitString) -> Vec<S> {
        decode(bits, &self.tree)
    }

    /// Decode foreign `bits` with this session's tree, rejecting malformed input.
    pub fn try_decode_bits(&self, bits: &BitString) -> Result<Vec<S>> {
        try_decode(bits, &self.tree)
    }

    /// Size metrics against the 8-bit-per-symbol baseline.
    pub fn stats(&self) -> Stats {
        Stats::with_baseline(self.original_len, &self.encoded, BASELINE_BITS_PER_SYMBOL)
    }
}

impl Session<char> {
    /// Compress a string, one symbol per `char`.
    pub fn compress_str(text: &str) -> Self {
        let symbols: Vec<char> = text.chars().collect();
        Self::compress(&symbols)
    }

    /// Decode the session's own encoding back into a string.
    pub fn decode_string(&self) -> String {
        self.decode().into_iter().collect()
    }
}
