//! Node implementation for BTree.
//!
//! This module contains the node-level algorithms: single-node search,
//! insertion into a non-full node, child splitting, merging, borrowing from
//! siblings and deletion from a node that is known not to underflow.
//!
//! The recursive insert assumes the node it enters is not full; the recursive
//! delete assumes the node it enters holds more than its minimum number of
//! keys or is the root. `BTree` establishes both at the root, and each node
//! re-establishes them for the child it is about to descend into.

use std::cmp::Ordering;

use tracing::trace;

use crate::ordered_array::OrderedArray;
use crate::types::{FoundIndexPair, KeyOrder, NodeIndexPair, TreeNode};

impl TreeNode {
    /// Creates an empty node of minimum degree `t`.
    pub(crate) fn new(t: usize, leaf: bool, root: bool) -> Self {
        Self {
            keys: OrderedArray::new(2 * t - 1),
            children: OrderedArray::new(2 * t),
            t,
            leaf,
            root,
        }
    }

    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Returns true if the node holds `2t-1` keys.
    pub fn is_full(&self) -> bool {
        self.keys.is_full()
    }

    /// Minimum key count: one for the root, `t-1` for everything else.
    pub fn min_keys(&self) -> usize {
        if self.root {
            1
        } else {
            self.t - 1
        }
    }

    pub fn max_keys(&self) -> usize {
        self.keys.capacity()
    }

    /// Returns true if the node sits exactly at its minimum, i.e. it cannot
    /// give up a key without underflowing.
    pub fn needs_key(&self) -> bool {
        self.len() == self.min_keys()
    }

    /// The key at local index `i`.
    pub fn key(&self, i: usize) -> &str {
        self.keys.get(i)
    }

    /// Keys of this node, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Children of this node, in order. Empty for leaves.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.children.iter().map(|child| &**child)
    }

    pub(crate) fn child(&self, i: usize) -> &TreeNode {
        self.children.get(i)
    }

    // ============================================================================
    // SEARCH
    // ============================================================================

    /// Scans only this node for `key`.
    ///
    /// Returns the first index whose key is `>=` the query and whether that
    /// key is equal to it. When every key is smaller the index is `len()`.
    pub fn local_search<O: KeyOrder>(&self, key: &str, order: &O) -> FoundIndexPair {
        for (i, existing) in self.keys.iter().enumerate() {
            match order.compare(key, existing) {
                Ordering::Greater => continue,
                Ordering::Equal => return FoundIndexPair { found: true, index: i },
                Ordering::Less => return FoundIndexPair { found: false, index: i },
            }
        }
        FoundIndexPair {
            found: false,
            index: self.len(),
        }
    }

    /// Finds `key` in the subtree rooted at this node.
    pub fn search<O: KeyOrder>(&self, key: &str, order: &O) -> Option<NodeIndexPair<'_>> {
        let FoundIndexPair { found, index } = self.local_search(key, order);
        if found {
            Some(NodeIndexPair::new(self, index))
        } else if self.leaf {
            None
        } else {
            self.child(index).search(key, order)
        }
    }

    // ============================================================================
    // NAVIGATION
    // ============================================================================

    /// Leftmost key of this subtree.
    pub fn find_minimum(&self) -> Option<NodeIndexPair<'_>> {
        if self.is_empty() {
            return None;
        }
        let mut node = self;
        while !node.leaf {
            node = node.child(0);
        }
        Some(NodeIndexPair::new(node, 0))
    }

    /// Rightmost key of this subtree.
    pub fn find_maximum(&self) -> Option<NodeIndexPair<'_>> {
        if self.is_empty() {
            return None;
        }
        let mut node = self;
        while !node.leaf {
            node = node.child(node.len());
        }
        Some(NodeIndexPair::new(node, node.len() - 1))
    }

    /// In-order predecessor of the key at local index `i`.
    ///
    /// For a leaf only the leaf's own keys are candidates.
    pub fn find_predecessor(&self, i: usize) -> Option<NodeIndexPair<'_>> {
        if self.leaf {
            (i > 0).then(|| NodeIndexPair::new(self, i - 1))
        } else {
            self.child(i).find_maximum()
        }
    }

    /// In-order successor of the key at local index `i`.
    ///
    /// For a leaf only the leaf's own keys are candidates.
    pub fn find_successor(&self, i: usize) -> Option<NodeIndexPair<'_>> {
        if self.leaf {
            self.keys
                .has_right(i)
                .then(|| NodeIndexPair::new(self, i + 1))
        } else {
            self.child(i + 1).find_minimum()
        }
    }

    /// Rightmost key of a non-empty subtree.
    fn max_key(&self) -> &str {
        let mut node = self;
        while !node.leaf {
            node = node.child(node.len());
        }
        node.keys.last()
    }

    /// Leftmost key of a non-empty subtree.
    fn min_key(&self) -> &str {
        let mut node = self;
        while !node.leaf {
            node = node.child(0);
        }
        node.keys.first()
    }

    // ============================================================================
    // INSERT OPERATIONS
    // ============================================================================

    /// Inserts `key` into the subtree rooted at this node, which must not be
    /// full.
    pub(crate) fn insert_non_full<O: KeyOrder>(&mut self, key: String, order: &O) {
        debug_assert!(!self.is_full(), "insert_non_full on a full node");

        if self.leaf {
            let index = self.insertion_index(&key, order);
            self.keys.insert_at(index, key);
            return;
        }

        let mut i = self.local_search(&key, order).index;
        if self.child(i).is_full() {
            self.split_child(i);
            if order.compare(&key, self.keys.get(i)) == Ordering::Greater {
                i += 1;
            }
        }
        self.children.get_mut(i).insert_non_full(key, order);
    }

    /// Slot for a new leaf key: right after the last key that is not
    /// greater than it, found by scanning from the right.
    fn insertion_index<O: KeyOrder>(&self, key: &str, order: &O) -> usize {
        let mut i = self.len();
        while i > 0 && order.compare(key, self.keys.get(i - 1)) == Ordering::Less {
            i -= 1;
        }
        i
    }

    /// Splits the full child at index `i`.
    ///
    /// The child keeps its lower `t-1` keys, its upper `t-1` keys (and upper
    /// `t` children) move to a new right sibling at `i + 1`, and the median
    /// moves up into this node at `i`.
    pub(crate) fn split_child(&mut self, i: usize) {
        let t = self.t;
        let child = self.children.get_mut(i);
        assert!(child.is_full(), "split_child on a child that is not full");

        let mut sibling = TreeNode::new(t, child.leaf, false);
        sibling.keys.take_range_from(0, &mut child.keys, t, t - 1);
        if !child.leaf {
            sibling.children.take_range_from(0, &mut child.children, t, t);
        }
        let median = child.keys.remove_last();
        debug_assert_eq!(child.len(), t - 1);

        trace!(index = i, leaf = sibling.leaf, "split child");
        self.keys.insert_at(i, median);
        self.children.insert_at(i + 1, Box::new(sibling));
    }

    // ============================================================================
    // DELETE OPERATIONS
    // ============================================================================

    /// Removes one occurrence of `key` from the subtree rooted at this node.
    ///
    /// This node must hold more than its minimum number of keys, or be the
    /// root. Returns whether a key was removed.
    pub(crate) fn delete_not_minimum_keys<O: KeyOrder>(&mut self, key: &str, order: &O) -> bool {
        let FoundIndexPair { found, index } = self.local_search(key, order);
        if found {
            self.delete_from_this(key, index, order)
        } else if self.leaf {
            false
        } else {
            self.delete_from_child(key, index, order)
        }
    }

    /// `key` sits at local index `i`.
    fn delete_from_this<O: KeyOrder>(&mut self, key: &str, i: usize, order: &O) -> bool {
        if self.leaf {
            self.keys.remove_at(i);
            return true;
        }

        if !self.child(i).needs_key() {
            let predecessor = self.child(i).max_key().to_owned();
            let removed = self
                .children
                .get_mut(i)
                .delete_not_minimum_keys(&predecessor, order);
            debug_assert!(removed, "predecessor missing from left subtree");
            self.keys.set(i, predecessor);
        } else if !self.child(i + 1).needs_key() {
            let successor = self.child(i + 1).min_key().to_owned();
            let removed = self
                .children
                .get_mut(i + 1)
                .delete_not_minimum_keys(&successor, order);
            debug_assert!(removed, "successor missing from right subtree");
            self.keys.set(i, successor);
        } else {
            self.merge(i).delete_not_minimum_keys(key, order);
        }
        true
    }

    /// `key` is not in this node; child `i` is the only subtree that can
    /// hold it. Tops the child up before descending if it is at its minimum.
    fn delete_from_child<O: KeyOrder>(&mut self, key: &str, i: usize, order: &O) -> bool {
        let child: &mut TreeNode = if !self.child(i).needs_key() {
            self.children.get_mut(i)
        } else if i > 0 && !self.child(i - 1).needs_key() {
            self.shift_right(i);
            self.children.get_mut(i)
        } else if i < self.len() && !self.child(i + 1).needs_key() {
            self.shift_left(i);
            self.children.get_mut(i)
        } else if i > 0 {
            self.merge(i - 1)
        } else {
            self.merge(i)
        };
        child.delete_not_minimum_keys(key, order)
    }

    /// Fuses child `i`, the separator `keys[i]` and child `i + 1` into
    /// child `i`, dropping the right child.
    ///
    /// Returns the surviving child; the caller must continue with it since
    /// the child indices of this node have shifted.
    pub(crate) fn merge(&mut self, i: usize) -> &mut TreeNode {
        let separator = self.keys.remove_at(i);
        let mut right = self.children.remove_at(i + 1);
        let left = self.children.get_mut(i);

        left.keys.insert_last(separator);
        left.keys.take_tail_from(&mut right.keys, 0);
        if !left.leaf {
            left.children.take_tail_from(&mut right.children, 0);
        }

        trace!(index = i, merged_len = left.len(), "merge children");
        left
    }

    /// Borrows through the separator `keys[i - 1]` from the left sibling
    /// into child `i`.
    fn shift_right(&mut self, i: usize) {
        let (left, child) = self.children.pair_mut(i - 1);

        let borrowed = left.keys.remove_last();
        let separator = self.keys.set(i - 1, borrowed);
        child.keys.insert_first(separator);
        if !child.leaf {
            child.children.insert_first(left.children.remove_last());
        }

        trace!(index = i, "borrow from left sibling");
    }

    /// Borrows through the separator `keys[i]` from the right sibling into
    /// child `i`.
    fn shift_left(&mut self, i: usize) {
        let (child, right) = self.children.pair_mut(i);

        let borrowed = right.keys.remove_first();
        let separator = self.keys.set(i, borrowed);
        child.keys.insert_last(separator);
        if !child.leaf {
            child.children.insert_last(right.children.remove_first());
        }

        trace!(index = i, "borrow from right sibling");
    }
}
