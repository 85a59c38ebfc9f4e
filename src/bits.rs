//! In-memory bit-strings.
//!
//! Bits are kept one per element and are never packed into bytes. The text
//! form is a run of `'0'` and `'1'` characters.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bit {
    /// Descend left.
    Zero,
    /// Descend right.
    One,
}

impl Bit {
    /// The character form, `'0'` or `'1'`.
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = char;

    fn try_from(ch: char) -> std::result::Result<Self, char> {
        match ch {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(other),
        }
    }
}

/// An owned sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<Bit>,
}

impl BitString {
    /// Create an empty bit-string.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Append one bit.
    pub fn push(&mut self, bit: Bit) {
        self.bits.push(bit);
    }

    /// Append all bits of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether there are no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether `self` is a prefix of `other`. Equal strings count.
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// The bits as a slice.
    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            fmt::Write::write_char(f, bit.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, ch)| Bit::try_from(ch).map_err(|ch| Error::InvalidBit { ch, position }))
            .collect()
    }
}

impl FromIterator<Bit> for BitString {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Bit>> for BitString {
    fn from(bits: Vec<Bit>) -> Self {
        Self { bits }
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = Bit;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Bit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter().copied()
    }
}
