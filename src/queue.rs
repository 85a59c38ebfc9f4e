//! Stable min-priority queue of tree nodes.
//!
//! Nodes leave in ascending order of frequency. Equal frequencies leave in
//! the order they were pushed: every push is stamped with a sequence number
//! and the heap orders by `(frequency, sequence)`. Since sequence numbers are
//! unique, two entries never compare equal and the heap's unspecified
//! handling of equal keys is never exercised.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::symbol::Symbol;
use crate::tree::Node;

struct Entry<S: Symbol> {
    freq: usize,
    seq: u64,
    node: Node<S>,
}

impl<S: Symbol> Entry<S> {
    fn key(&self) -> (usize, u64) {
        (self.freq, self.seq)
    }
}

impl<S: Symbol> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S: Symbol> Eq for Entry<S> {}

impl<S: Symbol> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl<S: Symbol> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-queue over node frequency, FIFO among equal frequencies.
pub(crate) struct NodeQueue<S: Symbol> {
    heap: BinaryHeap<Entry<S>>,
    next_seq: u64,
}

impl<S: Symbol> NodeQueue<S> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Enqueue `node` behind every queued node of the same frequency.
    pub(crate) fn push(&mut self, node: Node<S>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            freq: node.freq(),
            seq,
            node,
        });
    }

    /// Remove the lowest-frequency node, oldest first on ties.
    pub(crate) fn pop(&mut self) -> Option<Node<S>> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
