//! The input alphabet.

use std::fmt::Debug;
use std::hash::Hash;

/// One atomic unit of the input alphabet.
///
/// Anything cheap to copy, hashable and printable qualifies. The usual
/// choices are `char` for text and `u8` for raw bytes.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}
