//! Huffman tree construction.
//!
//! The tree is built greedily: all symbols start as leaves in a min-priority
//! queue, and the two lightest nodes are repeatedly merged under a new
//! internal node until a single root remains.
//!
//! # Tie-breaking
//!
//! Several optimal trees usually exist for one frequency table. To keep the
//! output reproducible, nodes of equal frequency leave the queue in the order
//! they entered it. Leaves enter in the table's first-occurrence order, and a
//! merged node enters after everything queued so far. The first node removed
//! becomes the left child (bit `0`), the second the right child (bit `1`).

use crate::frequency::FrequencyTable;
use crate::queue::NodeQueue;
use crate::symbol::Symbol;

/// Huffman tree node.
///
/// Each internal node owns its two children; there is no sharing and no
/// parent link, as every traversal runs from the root down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S: Symbol> {
    /// A symbol and its count.
    Leaf {
        /// The symbol this leaf stands for.
        symbol: S,
        /// Number of occurrences of `symbol`.
        freq: usize,
    },
    /// The merge of two lighter nodes.
    Internal {
        /// Reached by bit `0`.
        left: Box<Node<S>>,
        /// Reached by bit `1`.
        right: Box<Node<S>>,
        /// Sum of the children's frequencies.
        freq: usize,
    },
}

impl<S: Symbol> Node<S> {
    /// Join `left` and `right` under a new internal node.
    pub fn merge(left: Node<S>, right: Node<S>) -> Self {
        let freq = left.freq() + right.freq();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }
    }

    /// Frequency of this node.
    pub fn freq(&self) -> usize {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// The leaf's symbol, `None` for internal nodes.
    pub fn symbol(&self) -> Option<S> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// `(left, right)` for internal nodes, `None` for leaves.
    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A Huffman tree, absent when built from an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S: Symbol> {
    root: Option<Node<S>>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree for a frequency table.
    ///
    /// An empty table gives an empty tree, a single-entry table a lone leaf.
    pub fn new(table: &FrequencyTable<S>) -> Self {
        let mut pq = NodeQueue::with_capacity(table.len());
        for (symbol, freq) in table.iter() {
            pq.push(Node::Leaf { symbol, freq });
        }

        while pq.len() > 1 {
            // `pq.len() > 1`, so both pops succeed.
            let (Some(left), Some(right)) = (pq.pop(), pq.pop()) else {
                break;
            };
            pq.push(Node::merge(left, right));
        }

        let tree = Self { root: pq.pop() };
        log::debug!(
            "built huffman tree: {} leaves, depth {}, weight {}",
            tree.leaf_count(),
            tree.depth(),
            tree.freq()
        );
        log::trace!("huffman tree: {:?}", tree.root);
        tree
    }

    /// The root node, `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<S>> {
        self.root.as_ref()
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root frequency, which is the length of the sequence the tree was built from.
    pub fn freq(&self) -> usize {
        self.root.as_ref().map_or(0, Node::freq)
    }

    /// Number of leaves, one per distinct symbol.
    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaf_count)
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }
}

impl<S: Symbol> Default for HuffmanTree<S> {
    fn default() -> Self {
        Self { root: None }
    }
}

/// Build the Huffman tree for `table`.
pub fn build_tree<S: Symbol>(table: &FrequencyTable<S>) -> HuffmanTree<S> {
    HuffmanTree::new(table)
}
