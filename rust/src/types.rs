//! Core types and data structures for BTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the B-tree implementation.

use std::cmp::Ordering;

use crate::ordered_array::OrderedArray;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest minimum degree a B-tree can be built with.
pub const MIN_DEGREE: usize = 2;

/// Minimum degree used by `BTree::default()` (a 2-3-4 tree).
pub const DEFAULT_DEGREE: usize = 2;

// ============================================================================
// KEY ORDERING
// ============================================================================

/// Total order over string keys used by every comparison inside the tree.
///
/// The tree never normalizes keys itself; anything like case folding belongs
/// to the caller (see [`crate::loader::LoadOptions`]) or to a custom order.
pub trait KeyOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Plain byte-wise lexicographic order of `str`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lexicographic;

impl KeyOrder for Lexicographic {
    #[inline]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

impl<F> KeyOrder for F
where
    F: Fn(&str, &str) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// B-tree of configurable minimum degree over string keys.
///
/// Every node holds between `t-1` and `2t-1` keys (the root may hold as few
/// as one), keys are kept in order inside each node and all leaves sit at
/// the same depth, so search, insertion and deletion are `O(t log_t n)`.
///
/// Keys are compared through the tree's [`KeyOrder`]; duplicates are allowed
/// and stored as additional equal keys.
///
/// # Examples
///
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for key in ["b", "a", "c", "d"] {
///     tree.insert(key);
/// }
///
/// assert!(tree.contains("a"));
/// assert!(!tree.contains("z"));
/// assert!(tree.delete("b"));
/// assert_eq!(tree.keys().collect::<Vec<_>>(), ["a", "c", "d"]);
/// ```
#[derive(Debug)]
pub struct BTree<O = Lexicographic> {
    /// Minimum degree shared by every node.
    pub(crate) degree: usize,
    /// The root node; always present, an empty leaf when the tree is empty.
    pub(crate) root: Box<TreeNode>,
    /// Number of keys stored, duplicates included.
    pub(crate) len: usize,
    /// Order used for every key comparison.
    pub(crate) order: O,
}

/// One node of the B-tree.
#[derive(Debug)]
pub struct TreeNode {
    /// Ordered keys, capacity `2t-1`.
    pub(crate) keys: OrderedArray<String>,
    /// Owned children, capacity `2t`. Empty for leaves.
    pub(crate) children: OrderedArray<Box<TreeNode>>,
    /// Minimum degree.
    pub(crate) t: usize,
    pub(crate) leaf: bool,
    /// True only for the node the tree currently owns as its root.
    pub(crate) root: bool,
}

// ============================================================================
// SEARCH RESULTS
// ============================================================================

/// Result of scanning a single node: the first index whose key is `>=` the
/// query, and whether that key is equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundIndexPair {
    pub found: bool,
    pub index: usize,
}

/// Location of a key somewhere in the tree.
///
/// Borrows the node it points into, so a location can never outlive a
/// structural change of the tree.
#[derive(Debug, Clone, Copy)]
pub struct NodeIndexPair<'a> {
    node: &'a TreeNode,
    index: usize,
}

impl<'a> NodeIndexPair<'a> {
    pub(crate) fn new(node: &'a TreeNode, index: usize) -> Self {
        debug_assert!(index < node.len());
        Self { node, index }
    }

    /// The node holding the key.
    pub fn node(&self) -> &'a TreeNode {
        self.node
    }

    /// Index of the key inside [`node`](Self::node).
    pub fn index(&self) -> usize {
        self.index
    }

    /// The key at this location.
    pub fn key(&self) -> &'a str {
        self.node.key(self.index)
    }

    /// In-order predecessor of this key, if any.
    ///
    /// Inside a leaf only the leaf's own keys are considered; the first key
    /// of a leaf has no predecessor here even when an ancestor holds one.
    pub fn predecessor(&self) -> Option<NodeIndexPair<'a>> {
        self.node.find_predecessor(self.index)
    }

    /// In-order successor of this key, with the same leaf-local rule as
    /// [`predecessor`](Self::predecessor).
    pub fn successor(&self) -> Option<NodeIndexPair<'a>> {
        self.node.find_successor(self.index)
    }
}
