//! Symbol frequency analysis.

use std::collections::HashMap;

use crate::symbol::Symbol;

/// Occurrence counts of each distinct symbol in an input sequence.
///
/// Entries are kept in order of first occurrence. The order does not matter
/// for the counts themselves, but it decides how equal frequencies are
/// broken when the tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    entries: Vec<(S, usize)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count one more occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    /// Count of `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no symbol has been counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// `(symbol, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (S, usize)> + '_ {
        self.entries.iter().copied()
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.add(symbol);
        }
        table
    }
}

/// Count every symbol of `sequence` in a single pass.
pub fn build_frequency_table<S: Symbol>(sequence: &[S]) -> FrequencyTable<S> {
    let table: FrequencyTable<S> = sequence.iter().copied().collect();
    log::trace!("frequency table: {:?}", table.entries);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_in_first_occurrence_order() {
        let input: Vec<char> = "abracadabra".chars().collect();
        let table = build_frequency_table(&input);

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]
        );
        assert_eq!(table.total(), input.len());
        assert_eq!(table.get(&'a'), Some(5));
        assert_eq!(table.get(&'z'), None);
    }

    #[test]
    fn test_empty_input() {
        let table = build_frequency_table::<u8>(&[]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.total(), 0);
    }
}
