//! Compression statistics.

use crate::bits::BitString;

/// Bits charged per input symbol when sizing the uncompressed sequence.
pub const BASELINE_BITS_PER_SYMBOL: usize = 8;

/// Size metrics of one encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Input length times the per-symbol baseline.
    pub original_bits: usize,
    /// Length of the encoded bit-string.
    pub compressed_bits: usize,
    /// `(original - compressed) / original * 100`, or 0 for an empty input.
    /// Negative when the encoding is larger than the baseline.
    pub ratio_percent: f64,
    /// `original - compressed`, clamped at 0.
    pub saved_bits: usize,
}

impl Stats {
    /// Compute stats against an arbitrary per-symbol baseline.
    ///
    /// `original_bits` saturates at `usize::MAX`.
    pub fn with_baseline(original_len: usize, encoded: &BitString, bits_per_symbol: usize) -> Self {
        let original_bits = original_len.saturating_mul(bits_per_symbol);
        let compressed_bits = encoded.len();
        let ratio_percent = if original_bits == 0 {
            0.0
        } else {
            (original_bits as f64 - compressed_bits as f64) / original_bits as f64 * 100.0
        };

        Self {
            original_bits,
            compressed_bits,
            ratio_percent,
            saved_bits: original_bits.saturating_sub(compressed_bits),
        }
    }
}

/// Stats of `encoded` against an 8-bit-per-symbol baseline for `original`.
pub fn stats<S>(original: &[S], encoded: &BitString) -> Stats {
    Stats::with_baseline(original.len(), encoded, BASELINE_BITS_PER_SYMBOL)
}
