//! # Huffman Coding
//!
//! *Optimal prefix-free codes from observed symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives the letter `E` a single dot because `E` is common. Huffman
//! coding does the same thing systematically: count how often each symbol
//! occurs, then give frequent symbols short bit patterns and rare symbols long
//! ones. No pattern is a prefix of another, so a stream of patterns can be
//! split back into symbols without separators.
//!
//! ## The Algorithm
//!
//! 1. Count every symbol ([`FrequencyTable`]).
//! 2. Put one leaf per symbol into a min-priority queue keyed by frequency.
//! 3. Remove the two lightest nodes, join them under a new node whose
//!    frequency is their sum, and put it back. Repeat until one node remains
//!    ([`HuffmanTree`]).
//! 4. Read each leaf's code off its root path: `0` for left, `1` for right
//!    ([`CodeBook`]).
//! 5. Encode by concatenating codes; decode by walking the tree bit by bit
//!    ([`encode`], [`decode`]).
//!
//! ```text
//! input "aaaabbcd"      a:4 b:2 c:1 d:1
//!
//!        (8)            a -> 0
//!       /   \           b -> 10
//!     a:4   (4)         c -> 110
//!          /   \        d -> 111
//!        b:2   (2)
//!             /   \     "aaaabbcd" -> 0000 10 10 110 111 (14 bits)
//!           c:1   d:1
//! ```
//!
//! ## Determinism
//!
//! Equal frequencies are broken by queue arrival order: leaves arrive in
//! first-occurrence order of their symbol, merged nodes arrive after
//! everything already queued. The same input therefore always yields the
//! same codes.
//!
//! ## Edge Cases
//!
//! - Empty input: no tree, no codes, empty encoding.
//! - One distinct symbol: the tree is a lone leaf, its code is `"0"`, and
//!   decoding emits the symbol once per bit.
//!
//! ## Scope
//!
//! Bit-strings are in-memory sequences of [`Bit`]s and are never packed into
//! bytes. There is no on-disk format; a caller that wants one must store the
//! tree or codebook alongside the bits.
//!
//! ```
//! use huffcode::Session;
//!
//! let session = Session::compress_str("abracadabra");
//! assert_eq!(session.decode_string(), "abracadabra");
//! assert_eq!(session.stats().original_bits, 88);
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod codebook;
pub mod codec;
pub mod error;
pub mod frequency;
mod queue;
pub mod session;
pub mod stats;
pub mod symbol;
pub mod tree;

pub use bits::{Bit, BitString};
pub use codebook::{generate_codes, CodeBook};
pub use codec::{decode, encode, try_decode, try_encode};
pub use error::{Error, Result};
pub use frequency::{build_frequency_table, FrequencyTable};
pub use session::Session;
pub use stats::{stats, Stats, BASELINE_BITS_PER_SYMBOL};
pub use symbol::Symbol;
pub use tree::{build_tree, HuffmanTree, Node};
