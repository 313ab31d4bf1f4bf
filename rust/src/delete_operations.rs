//! DELETE operations for BTree.
//!
//! Mirrors insertion: when the root holds a single key over two minimal
//! children, the three are merged before descending and the merged node
//! becomes the root. This is the only place the tree loses a level.

use std::mem;

use tracing::debug;

use crate::types::{BTree, KeyOrder, TreeNode};

impl<O: KeyOrder> BTree<O> {
    /// Remove one occurrence of `key`.
    ///
    /// Returns `false` and leaves the tree untouched when the key is absent.
    /// If duplicates are stored, which occurrence goes is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_index::BTree;
    ///
    /// let mut tree = BTree::new(2).unwrap();
    /// tree.extend(["x", "y"]);
    /// assert!(tree.delete("x"));
    /// assert!(!tree.delete("x"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn delete(&mut self, key: &str) -> bool {
        if self.root_needs_merge() {
            self.shrink_root();
        }

        let removed = self.root.delete_not_minimum_keys(key, &self.order);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// True when the root sits at its minimum and so do its first two
    /// children, i.e. descending into either child would force a merge
    /// that empties the root.
    fn root_needs_merge(&self) -> bool {
        let root = &self.root;
        !root.is_leaf()
            && root.needs_key()
            && root.child(0).needs_key()
            && root.child(1).needs_key()
    }

    /// Merges the root's only two children with its last key and promotes
    /// the result to root.
    fn shrink_root(&mut self) {
        self.root.merge(0);
        debug_assert!(self.root.is_empty());

        let placeholder = Box::new(TreeNode::new(self.degree, true, false));
        let mut old_root = mem::replace(&mut self.root, placeholder);
        let mut merged = old_root.children.remove_first();
        merged.root = true;
        self.root = merged;

        debug!(degree = self.degree, len = self.len, "shrink root");
    }
}
